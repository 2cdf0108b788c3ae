//! Pool configuration.

use serde::{Deserialize, Serialize};

use crate::error::{PoolError, Result};

/// Default capacity reserved for a pool's free list.
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// Configuration for a single [`Pool`](crate::Pool).
///
/// All fields have defaults, so a partial TOML table such as
/// `max_retained = 64` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Capacity reserved for the free list up front.
    pub initial_capacity: usize,
    /// Maximum number of free instances kept. `None` means the free list
    /// grows to the peak number of simultaneously outstanding instances.
    pub max_retained: Option<usize>,
    /// Number of default instances allocated when the pool is built.
    pub prefill: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_retained: None,
            prefill: 0,
        }
    }
}

impl PoolConfig {
    /// Create a configuration with a custom free-list capacity.
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..Default::default()
        }
    }

    /// Cap the number of free instances the pool keeps.
    pub fn max_retained(mut self, max: usize) -> Self {
        self.max_retained = Some(max);
        self
    }

    /// Allocate `count` instances when the pool is built.
    pub fn prefill(mut self, count: usize) -> Self {
        self.prefill = count;
        self
    }

    /// Check the configuration for inconsistent values.
    pub fn validate(&self) -> Result<()> {
        let Some(max) = self.max_retained else {
            return Ok(());
        };
        if max == 0 {
            return Err(PoolError::invalid_config(
                "max_retained",
                "must be at least 1",
            ));
        }
        if self.prefill > max {
            return Err(PoolError::invalid_config(
                "prefill",
                format!("{} exceeds max_retained ({max})", self.prefill),
            ));
        }
        if max < self.initial_capacity {
            return Err(PoolError::invalid_config(
                "max_retained",
                format!(
                    "{max} is smaller than initial_capacity ({})",
                    self.initial_capacity
                ),
            ));
        }
        Ok(())
    }

    /// Parse a configuration from a TOML table.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}
