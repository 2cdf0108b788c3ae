//! Screen navigation payloads.

use event_pool_core::Poolable;

use super::EventArgs;
use crate::types::{Payload, ScreenId};

/// Sent before the navigation layer moves to another screen.
///
/// Handlers may set `cancel` to keep the current screen.
#[derive(Debug, Clone, Default)]
pub struct NavigationEventArgs {
    /// Base event data.
    pub base: EventArgs,
    /// Set by a handler to abort the navigation.
    pub cancel: bool,
    /// Data passed to the target screen.
    pub parameter: Option<Payload>,
    /// The screen being navigated to.
    pub target: Option<ScreenId>,
    /// Whether this is a back navigation.
    pub is_back: bool,
}

impl NavigationEventArgs {
    /// Borrow the parameter as a concrete type.
    pub fn parameter_as<T: 'static>(&self) -> Option<&T> {
        self.parameter
            .as_deref()
            .and_then(|parameter| parameter.downcast_ref::<T>())
    }
}

impl Poolable for NavigationEventArgs {
    fn reset(&mut self) {
        self.base.handled = false;
        self.cancel = false;
        self.parameter = None;
        self.target = None;
        self.is_back = false;
    }
}
