//! Tracing integration for the pooling layer.
//!
//! Pools use the `tracing` crate for instrumentation. Nothing is printed
//! unless the application installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("event_pool_core::pool=trace")
//!     .init();
//! ```
//!
//! Misses (fresh allocations) and discards at the retention cap are logged at
//! `trace`; pool construction, prefill and clearing at `debug`. Log calls are
//! never made while a free-list lock is held.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Generic pool target.
    pub const POOL: &str = "event_pool_core::pool";
    /// Event dispatch target (take, fire handlers, release).
    pub const DISPATCH: &str = "event_pool::dispatch";
    /// Handler list target.
    pub const HANDLERS: &str = "event_pool::handlers";
}

/// Trace-level event on the pool target.
#[macro_export]
macro_rules! pool_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: $crate::logging::targets::POOL, $($arg)*)
    };
}

/// Debug-level event on the pool target.
#[macro_export]
macro_rules! pool_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: $crate::logging::targets::POOL, $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::targets;

    #[test]
    fn test_pool_target_matches_module_path() {
        assert!(targets::POOL.starts_with(env!("CARGO_CRATE_NAME")));
    }

    #[test]
    fn test_macros_expand() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        pool_trace!(available = 3usize, "trace from test");
        pool_debug!("debug from test");
    }
}
