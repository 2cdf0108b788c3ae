//! Core pooling for event payloads.
//!
//! This crate provides the allocation-recycling layer used by `event-pool`:
//!
//! - **Pool**: A lock-guarded free list that hands out reset instances
//! - **Poolable**: The per-type reset hook a pooled type implements
//! - **Configuration**: Capacity, retention cap and prefill, loadable from TOML
//! - **Logging**: `tracing` targets and helper macros
//!
//! # Example
//!
//! ```
//! use event_pool_core::{Pool, PoolConfig, Poolable};
//!
//! #[derive(Default)]
//! struct Scroll {
//!     handled: bool,
//!     steps: i32,
//! }
//!
//! impl Poolable for Scroll {
//!     fn reset(&mut self) {
//!         self.handled = false;
//!         self.steps = 0;
//!     }
//! }
//!
//! let pool = Pool::<Scroll>::with_config(PoolConfig::default().prefill(4))?;
//! assert_eq!(pool.available(), 4);
//!
//! let mut scroll = pool.take();
//! scroll.steps = -3;
//! pool.release(scroll);
//! # Ok::<(), event_pool_core::PoolError>(())
//! ```

mod config;
mod error;
pub mod logging;
pub mod pool;

pub use config::{PoolConfig, DEFAULT_INITIAL_CAPACITY};
pub use error::{PoolError, Result};
pub use pool::{Pool, PoolGuard, PoolStats, Poolable};
