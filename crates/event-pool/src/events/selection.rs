//! Selection, collection and value-change payloads.

use event_pool_core::Poolable;

use super::EventArgs;
use crate::types::ControlId;

/// Sent when a list-like control changes its selected item.
#[derive(Debug, Clone)]
pub struct SelectionChangedEventArgs<T> {
    /// Base event data.
    pub base: EventArgs,
    /// The previously selected item.
    pub old_item: Option<T>,
    /// The newly selected item.
    pub new_item: Option<T>,
}

impl<T> Default for SelectionChangedEventArgs<T> {
    fn default() -> Self {
        Self {
            base: EventArgs::new(),
            old_item: None,
            new_item: None,
        }
    }
}

impl<T: Send + 'static> Poolable for SelectionChangedEventArgs<T> {
    fn reset(&mut self) {
        self.base.handled = false;
        self.old_item = None;
        self.new_item = None;
    }
}

/// Sent when a child control is added to or removed from a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollectionChangedEventArgs {
    /// Base event data.
    pub base: EventArgs,
    /// The control that was added or removed.
    pub control: Option<ControlId>,
    /// Its index in the container, if known.
    pub index: Option<usize>,
}

impl Poolable for CollectionChangedEventArgs {
    fn reset(&mut self) {
        self.base.handled = false;
        self.control = None;
        self.index = None;
    }
}

/// Sent when a property value changes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValueChangedEventArgs<T> {
    /// Base event data.
    pub base: EventArgs,
    /// The value before the change.
    pub old_value: T,
    /// The value after the change.
    pub new_value: T,
}

impl<T: PartialEq> ValueChangedEventArgs<T> {
    /// Check whether the value actually differs.
    pub fn is_change(&self) -> bool {
        self.old_value != self.new_value
    }
}

impl<T: Default + Send + 'static> Poolable for ValueChangedEventArgs<T> {
    fn reset(&mut self) {
        self.base.handled = false;
        self.old_value = T::default();
        self.new_value = T::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_reset() {
        let mut args = SelectionChangedEventArgs {
            base: EventArgs { handled: true },
            old_item: Some("first".to_string()),
            new_item: Some("second".to_string()),
        };
        args.reset();
        assert!(!args.base.handled);
        assert!(args.old_item.is_none());
        assert!(args.new_item.is_none());
    }

    #[test]
    fn test_collection_reset() {
        let mut args = CollectionChangedEventArgs {
            index: Some(3),
            ..Default::default()
        };
        args.base.handled = true;
        args.reset();
        assert_eq!(args, CollectionChangedEventArgs::default());
    }

    #[test]
    fn test_value_changed() {
        let mut args = ValueChangedEventArgs {
            base: EventArgs::new(),
            old_value: 0.25f32,
            new_value: 0.75f32,
        };
        assert!(args.is_change());
        args.reset();
        assert!(!args.is_change());
        assert_eq!(args, ValueChangedEventArgs::default());
    }
}
