//! Drag payloads.

use event_pool_core::Poolable;

use super::EventArgs;
use crate::types::{ControlId, IconId, Payload, Size};

/// Drag start, move and drop events.
///
/// `content` is whatever the drag source attached; receivers recover the
/// concrete type with [`content_as`](Self::content_as).
#[derive(Debug, Clone, Default)]
pub struct DragEventArgs {
    /// Base event data.
    pub base: EventArgs,
    /// The control the drag started from.
    pub source: Option<ControlId>,
    /// Icon drawn under the pointer while dragging.
    pub icon: Option<IconId>,
    /// Size at which the icon is drawn.
    pub icon_size: Size,
    /// The dragged content.
    pub content: Option<Payload>,
}

impl DragEventArgs {
    /// Borrow the content as a concrete type.
    pub fn content_as<T: 'static>(&self) -> Option<&T> {
        self.content.as_deref().and_then(|content| content.downcast_ref::<T>())
    }

    /// Check whether the content is of type `T`.
    pub fn has_content<T: 'static>(&self) -> bool {
        self.content_as::<T>().is_some()
    }
}

impl Poolable for DragEventArgs {
    fn reset(&mut self) {
        self.base.handled = false;
        self.source = None;
        self.icon = None;
        self.icon_size = Size::ZERO;
        self.content = None;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use slotmap::SlotMap;

    use super::*;

    #[test]
    fn test_content_downcast() {
        let args = DragEventArgs {
            content: Some(Arc::new(String::from("file.txt"))),
            ..Default::default()
        };
        assert_eq!(args.content_as::<String>().map(String::as_str), Some("file.txt"));
        assert!(!args.has_content::<u32>());
    }

    #[test]
    fn test_reset_drops_content() {
        let mut controls: SlotMap<ControlId, ()> = SlotMap::with_key();
        let mut icons: SlotMap<IconId, ()> = SlotMap::with_key();
        let content: Payload = Arc::new(7u32);

        let mut args = DragEventArgs {
            base: EventArgs { handled: true },
            source: Some(controls.insert(())),
            icon: Some(icons.insert(())),
            icon_size: Size::new(32.0, 32.0),
            content: Some(content.clone()),
        };
        assert_eq!(Arc::strong_count(&content), 2);

        args.reset();
        assert!(!args.base.handled);
        assert!(args.source.is_none());
        assert!(args.icon.is_none());
        assert_eq!(args.icon_size, Size::ZERO);
        assert!(args.content.is_none());
        assert_eq!(Arc::strong_count(&content), 1);
    }
}
