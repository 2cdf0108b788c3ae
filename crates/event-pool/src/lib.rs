//! Pooled event payloads for widget event handlers.
//!
//! This crate defines the argument objects that input dispatch hands to
//! widget handlers, and recycles them so a busy frame loop does not allocate
//! a new payload for every mouse move:
//!
//! - **Events**: Mouse, scroll, touch, drag, keyboard, text input, selection,
//!   collection, navigation and value-change payloads
//! - **Handlers**: Ordered, thread-safe callback lists per event
//! - **Pools**: [`EventPools`], one free list per pooled payload type
//!
//! # Lifecycle of a payload
//!
//! 1. Dispatch code takes a reset payload from its pool.
//! 2. It fills in the fields describing the concrete event.
//! 3. Handlers run and may mark the payload handled.
//! 4. Dispatch releases the payload; the pool resets it for the next event.
//!
//! [`EventPools::dispatch`] performs all four steps. Handlers must not keep
//! anything borrowed from the payload past their own invocation.
//!
//! ```
//! use event_pool::events::{HandledEvent, MouseEventArgs};
//! use event_pool::{EventPools, Point};
//!
//! let pools = EventPools::new();
//!
//! let mut args = pools.mouse().take();
//! args.local_position = Point::new(5.0, 7.0);
//! args.set_handled(true);
//! pools.mouse().release(args);
//!
//! let args = pools.mouse().take();
//! assert_eq!(args.local_position, Point::ZERO);
//! assert!(!args.is_handled());
//! ```

pub mod events;
mod handler;
mod pools;
mod types;

pub use event_pool_core::{
    DEFAULT_INITIAL_CAPACITY, Pool, PoolConfig, PoolError, PoolGuard, PoolStats, Poolable, Result,
    logging,
};
pub use handler::{EventHandlers, Handler, HandlerId};
pub use pools::{EventPools, EventPoolsConfig, EventPoolsStats, PooledEvent};
pub use types::{ControlId, IconId, Payload, Point, ScreenId, Size};
