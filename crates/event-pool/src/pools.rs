//! The per-type payload pools used by input dispatch.
//!
//! [`EventPools`] owns one [`Pool`] per pooled payload type. It is built once
//! at startup and handed to the components that fire events, usually as an
//! `Arc<EventPools>`:
//!
//! ```
//! use std::sync::Arc;
//!
//! use event_pool::events::{HandledEvent, MouseEventArgs};
//! use event_pool::{EventHandlers, EventPools, Point};
//!
//! let pools = Arc::new(EventPools::new());
//! let mouse_down = EventHandlers::<MouseEventArgs>::new();
//! mouse_down.add(|args| {
//!     if args.local_position.x < 10.0 {
//!         args.set_handled(true);
//!     }
//! });
//!
//! let handled = pools.dispatch(&mouse_down, |args: &mut MouseEventArgs| {
//!     args.local_position = Point::new(5.0, 7.0);
//! });
//! assert!(handled);
//! assert_eq!(pools.mouse().available(), 1);
//! ```

use std::fmt;

use event_pool_core::logging::targets;
use event_pool_core::{Pool, PoolConfig, PoolStats, Poolable, Result};
use serde::{Deserialize, Serialize};

use crate::events::{
    DragEventArgs, EventArgs, HandledEvent, KeyEventArgs, MouseEventArgs, MouseScrollEventArgs,
    TextInputEventArgs, TouchEventArgs,
};
use crate::handler::EventHandlers;

/// Per-pool configuration for an [`EventPools`] set.
///
/// Every table is optional in TOML:
///
/// ```
/// use event_pool::EventPoolsConfig;
///
/// let config = EventPoolsConfig::from_toml_str(
///     r#"
///     [mouse]
///     prefill = 8
///     max_retained = 32
///     "#,
/// )?;
/// assert_eq!(config.mouse.prefill, 8);
/// assert_eq!(config.key.max_retained, None);
/// # Ok::<(), event_pool::PoolError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventPoolsConfig {
    pub base: PoolConfig,
    pub mouse: PoolConfig,
    pub scroll: PoolConfig,
    pub touch: PoolConfig,
    pub drag: PoolConfig,
    pub key: PoolConfig,
    pub text: PoolConfig,
}

impl EventPoolsConfig {
    /// Check every pool configuration.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.mouse.validate()?;
        self.scroll.validate()?;
        self.touch.validate()?;
        self.drag.validate()?;
        self.key.validate()?;
        self.text.validate()
    }

    /// Parse a configuration from TOML, one table per pool.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}

/// Counters for every pool in an [`EventPools`] set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventPoolsStats {
    pub base: PoolStats,
    pub mouse: PoolStats,
    pub scroll: PoolStats,
    pub touch: PoolStats,
    pub drag: PoolStats,
    pub key: PoolStats,
    pub text: PoolStats,
}

impl EventPoolsStats {
    /// Instances allocated across all pools.
    pub fn total_created(&self) -> u64 {
        [
            self.base,
            self.mouse,
            self.scroll,
            self.touch,
            self.drag,
            self.key,
            self.text,
        ]
        .iter()
        .map(|stats| stats.created)
        .sum()
    }
}

/// One pool per pooled payload type.
pub struct EventPools {
    base: Pool<EventArgs>,
    mouse: Pool<MouseEventArgs>,
    scroll: Pool<MouseScrollEventArgs>,
    touch: Pool<TouchEventArgs>,
    drag: Pool<DragEventArgs>,
    key: Pool<KeyEventArgs>,
    text: Pool<TextInputEventArgs>,
}

impl EventPools {
    /// Create a set of empty pools with default configuration.
    pub fn new() -> Self {
        Self {
            base: Pool::new(),
            mouse: Pool::new(),
            scroll: Pool::new(),
            touch: Pool::new(),
            drag: Pool::new(),
            key: Pool::new(),
            text: Pool::new(),
        }
    }

    /// Create a set of pools from configuration, prefilling as configured.
    pub fn with_config(config: EventPoolsConfig) -> Result<Self> {
        config.validate()?;
        let pools = Self {
            base: Pool::with_config(config.base)?,
            mouse: Pool::with_config(config.mouse)?,
            scroll: Pool::with_config(config.scroll)?,
            touch: Pool::with_config(config.touch)?,
            drag: Pool::with_config(config.drag)?,
            key: Pool::with_config(config.key)?,
            text: Pool::with_config(config.text)?,
        };
        tracing::debug!(
            target: targets::DISPATCH,
            prefilled = pools.stats().total_created(),
            "event pools ready"
        );
        Ok(pools)
    }

    /// Pool of bare [`EventArgs`].
    pub fn base(&self) -> &Pool<EventArgs> {
        &self.base
    }

    /// Pool of [`MouseEventArgs`].
    pub fn mouse(&self) -> &Pool<MouseEventArgs> {
        &self.mouse
    }

    /// Pool of [`MouseScrollEventArgs`].
    pub fn scroll(&self) -> &Pool<MouseScrollEventArgs> {
        &self.scroll
    }

    /// Pool of [`TouchEventArgs`].
    pub fn touch(&self) -> &Pool<TouchEventArgs> {
        &self.touch
    }

    /// Pool of [`DragEventArgs`].
    pub fn drag(&self) -> &Pool<DragEventArgs> {
        &self.drag
    }

    /// Pool of [`KeyEventArgs`].
    pub fn key(&self) -> &Pool<KeyEventArgs> {
        &self.key
    }

    /// Pool of [`TextInputEventArgs`].
    pub fn text(&self) -> &Pool<TextInputEventArgs> {
        &self.text
    }

    /// The pool for payload type `A`.
    pub fn pool<A: PooledEvent>(&self) -> &Pool<A> {
        A::pool(self)
    }

    /// Take a reset payload of type `A`.
    pub fn take<A: PooledEvent>(&self) -> Box<A> {
        A::pool(self).take()
    }

    /// Return a payload of type `A` to its pool.
    pub fn release<A: PooledEvent>(&self, args: Box<A>) {
        A::pool(self).release(args);
    }

    /// Fire one event: take a payload, fill it, run the handlers, release it.
    ///
    /// Returns whether any handler marked the event handled. The payload
    /// never outlives this call.
    pub fn dispatch<A, F>(&self, handlers: &EventHandlers<A>, populate: F) -> bool
    where
        A: PooledEvent,
        F: FnOnce(&mut A),
    {
        let pool = A::pool(self);
        let mut args = pool.take();
        populate(&mut *args);
        let handled = handlers.invoke(&mut *args);
        tracing::trace!(
            target: targets::DISPATCH,
            event = std::any::type_name::<A>(),
            handled,
            "dispatched event"
        );
        pool.release(args);
        handled
    }

    /// Drop every free instance in every pool.
    pub fn clear(&self) {
        self.base.clear();
        self.mouse.clear();
        self.scroll.clear();
        self.touch.clear();
        self.drag.clear();
        self.key.clear();
        self.text.clear();
    }

    /// Snapshot the counters of every pool.
    pub fn stats(&self) -> EventPoolsStats {
        EventPoolsStats {
            base: self.base.stats(),
            mouse: self.mouse.stats(),
            scroll: self.scroll.stats(),
            touch: self.touch.stats(),
            drag: self.drag.stats(),
            key: self.key.stats(),
            text: self.text.stats(),
        }
    }
}

impl Default for EventPools {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventPools {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventPools")
            .field("base", &self.base.available())
            .field("mouse", &self.mouse.available())
            .field("scroll", &self.scroll.available())
            .field("touch", &self.touch.available())
            .field("drag", &self.drag.available())
            .field("key", &self.key.available())
            .field("text", &self.text.available())
            .finish()
    }
}

/// A payload type with a dedicated pool in [`EventPools`].
pub trait PooledEvent: Poolable + HandledEvent {
    /// Select this type's pool.
    fn pool(pools: &EventPools) -> &Pool<Self>;
}

macro_rules! impl_pooled_event {
    ($($ty:ty => $field:ident),* $(,)?) => {
        $(
            impl PooledEvent for $ty {
                fn pool(pools: &EventPools) -> &Pool<Self> {
                    &pools.$field
                }
            }
        )*
    };
}

impl_pooled_event!(
    EventArgs => base,
    MouseEventArgs => mouse,
    MouseScrollEventArgs => scroll,
    TouchEventArgs => touch,
    DragEventArgs => drag,
    KeyEventArgs => key,
    TextInputEventArgs => text,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{KeyCode, KeyboardModifiers};
    use event_pool_core::PoolError;

    static_assertions::assert_impl_all!(EventPools: Send, Sync);

    #[test]
    fn test_generic_take_matches_named_pool() {
        let pools = EventPools::new();
        let key = pools.take::<KeyEventArgs>();
        pools.release(key);
        assert_eq!(pools.key().available(), 1);
        assert_eq!(pools.pool::<KeyEventArgs>().available(), 1);
        assert_eq!(pools.mouse().available(), 0);
    }

    #[test]
    fn test_dispatch_releases_payload() {
        let pools = EventPools::new();
        let handlers = EventHandlers::<KeyEventArgs>::new();
        handlers.add(|args| {
            if args.modifiers.control && args.key == KeyCode::S {
                args.set_handled(true);
            }
        });

        let handled = pools.dispatch(&handlers, |args: &mut KeyEventArgs| {
            args.key = KeyCode::S;
            args.modifiers = KeyboardModifiers::CTRL;
        });
        assert!(handled);

        let unhandled = pools.dispatch(&handlers, |args: &mut KeyEventArgs| {
            args.key = KeyCode::S;
        });
        assert!(!unhandled);

        let stats = pools.stats().key;
        assert_eq!(stats.created, 1);
        assert_eq!(stats.reused, 1);
        assert_eq!(stats.available, 1);
    }

    #[test]
    fn test_with_config_prefills() {
        let config = EventPoolsConfig {
            mouse: PoolConfig::default().prefill(8),
            drag: PoolConfig::default().prefill(2),
            ..Default::default()
        };
        let pools = EventPools::with_config(config).unwrap();
        assert_eq!(pools.mouse().available(), 8);
        assert_eq!(pools.drag().available(), 2);
        assert_eq!(pools.key().available(), 0);
        assert_eq!(pools.stats().total_created(), 10);
    }

    #[test]
    fn test_config_from_toml() {
        let config = EventPoolsConfig::from_toml_str(
            r#"
            [key]
            initial_capacity = 4
            max_retained = 4

            [touch]
            prefill = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.key.initial_capacity, 4);
        assert_eq!(config.key.max_retained, Some(4));
        assert_eq!(config.touch.prefill, 10);
        assert_eq!(config.mouse, PoolConfig::default());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = EventPoolsConfig::from_toml_str("[drag]\nmax_retained = 1\nprefill = 5\n")
            .unwrap_err();
        assert!(matches!(err, PoolError::InvalidConfig { field: "prefill", .. }));
    }

    #[test]
    fn test_dispatch_target_names_this_crate() {
        assert!(targets::DISPATCH.starts_with(env!("CARGO_CRATE_NAME")));
        assert!(targets::HANDLERS.starts_with(env!("CARGO_CRATE_NAME")));
    }

    #[test]
    fn test_clear_all() {
        let config = EventPoolsConfig {
            base: PoolConfig::default().prefill(3),
            text: PoolConfig::default().prefill(3),
            ..Default::default()
        };
        let pools = EventPools::with_config(config).unwrap();
        pools.clear();
        assert_eq!(pools.base().available(), 0);
        assert_eq!(pools.text().available(), 0);
    }
}
