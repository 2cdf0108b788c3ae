//! Error types for pool configuration.
//!
//! Taking and releasing instances never fails; only building a pool from a
//! bad configuration does.

/// Result type alias for pool configuration operations.
pub type Result<T> = std::result::Result<T, PoolError>;

/// Errors that can occur while configuring pools.
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    /// A configuration value is out of range or inconsistent.
    #[error("Invalid pool configuration for '{field}': {message}")]
    InvalidConfig {
        field: &'static str,
        message: String,
    },

    /// The configuration text could not be parsed.
    #[error("Failed to parse pool configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl PoolError {
    /// Create an invalid configuration error.
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            message: message.into(),
        }
    }
}
