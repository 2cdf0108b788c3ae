//! Event payloads delivered to widget handlers.
//!
//! Every payload embeds an [`EventArgs`] as its `base` field. The base carries
//! the `handled` flag that handlers set to stop further processing; the
//! dispatch layer reads it back after the handlers have run.
//!
//! All payloads implement [`Poolable`], so each can be recycled through a
//! [`Pool`](event_pool_core::Pool). `reset` restores exactly the state that
//! `Default` produces.
//!
//! ```
//! use event_pool::events::{HandledEvent, MouseEventArgs};
//! use event_pool::Point;
//!
//! let mut args = MouseEventArgs::default();
//! args.local_position = Point::new(5.0, 7.0);
//! args.set_handled(true);
//! assert!(args.is_handled());
//! ```

use event_pool_core::Poolable;

mod drag;
mod keyboard;
mod navigation;
mod pointer;
mod selection;

pub use drag::DragEventArgs;
pub use keyboard::{KeyCode, KeyEventArgs, KeyboardModifiers, TextInputEventArgs};
pub use navigation::NavigationEventArgs;
pub use pointer::{MouseEventArgs, MouseMode, MouseScrollEventArgs, PointerEventArgs, TouchEventArgs};
pub use selection::{CollectionChangedEventArgs, SelectionChangedEventArgs, ValueChangedEventArgs};

/// Common data for all event payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventArgs {
    /// Whether a handler has consumed the event.
    pub handled: bool,
}

impl EventArgs {
    /// Create a new, unhandled event base.
    pub fn new() -> Self {
        Self { handled: false }
    }

    /// Check if the event has been handled.
    pub fn is_handled(&self) -> bool {
        self.handled
    }

    /// Mark the event as handled.
    pub fn handle(&mut self) {
        self.handled = true;
    }
}

impl Poolable for EventArgs {
    fn reset(&mut self) {
        self.handled = false;
    }
}

/// Uniform access to the `handled` flag of any payload.
pub trait HandledEvent {
    /// The shared base data.
    fn base(&self) -> &EventArgs;

    /// Mutable access to the shared base data.
    fn base_mut(&mut self) -> &mut EventArgs;

    /// Check if a handler has consumed the event.
    fn is_handled(&self) -> bool {
        self.base().handled
    }

    /// Set or clear the handled flag.
    fn set_handled(&mut self, handled: bool) {
        self.base_mut().handled = handled;
    }
}

impl HandledEvent for EventArgs {
    fn base(&self) -> &EventArgs {
        self
    }

    fn base_mut(&mut self) -> &mut EventArgs {
        self
    }
}

/// Implement [`HandledEvent`] for payloads with a `base: EventArgs` field.
macro_rules! impl_handled_event {
    ($($ty:ident $(<$param:ident>)?),* $(,)?) => {
        $(
            impl$(<$param>)? $crate::events::HandledEvent for $ty$(<$param>)? {
                fn base(&self) -> &$crate::events::EventArgs {
                    &self.base
                }

                fn base_mut(&mut self) -> &mut $crate::events::EventArgs {
                    &mut self.base
                }
            }
        )*
    };
}

impl_handled_event!(
    PointerEventArgs,
    MouseEventArgs,
    MouseScrollEventArgs,
    TouchEventArgs,
    DragEventArgs,
    KeyEventArgs,
    TextInputEventArgs,
    SelectionChangedEventArgs<T>,
    CollectionChangedEventArgs,
    NavigationEventArgs,
    ValueChangedEventArgs<T>,
);
