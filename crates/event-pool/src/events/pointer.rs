//! Pointer payloads: mouse, scroll wheel and touch.

use event_pool_core::Poolable;

use super::EventArgs;
use crate::types::Point;

/// The kind of device that produced a mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseMode {
    /// A physical mouse or trackpad.
    #[default]
    Mouse,
    /// A touch contact promoted to mouse input.
    Touch,
    /// A stylus or pen.
    Pen,
}

/// Position data shared by all pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEventArgs {
    /// Base event data.
    pub base: EventArgs,
    /// Position relative to the receiving control.
    pub local_position: Point,
    /// Position in screen coordinates.
    pub global_position: Point,
    /// Set when the event reached this control by bubbling up from a child.
    pub bubbled: bool,
}

impl Poolable for PointerEventArgs {
    fn reset(&mut self) {
        self.base.handled = false;
        self.local_position = Point::ZERO;
        self.global_position = Point::ZERO;
        self.bubbled = false;
    }
}

/// Mouse button, move and hover events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MouseEventArgs {
    /// Base event data.
    pub base: EventArgs,
    /// The device that produced the event.
    pub mode: MouseMode,
    /// Position relative to the receiving control.
    pub local_position: Point,
    /// Position in screen coordinates.
    pub global_position: Point,
    /// Set when the event reached this control by bubbling up from a child.
    pub bubbled: bool,
}

impl MouseEventArgs {
    /// Re-target the event at a parent control.
    ///
    /// `parent_origin` is the parent's position in screen coordinates.
    pub fn bubble_to(&mut self, parent_origin: Point) {
        self.local_position = Point::new(
            self.global_position.x - parent_origin.x,
            self.global_position.y - parent_origin.y,
        );
        self.bubbled = true;
    }
}

impl Poolable for MouseEventArgs {
    fn reset(&mut self) {
        self.base.handled = false;
        self.mode = MouseMode::default();
        self.bubbled = false;
        self.local_position = Point::ZERO;
        self.global_position = Point::ZERO;
    }
}

/// Scroll wheel events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MouseScrollEventArgs {
    /// Base event data.
    pub base: EventArgs,
    /// The device that produced the event.
    pub mode: MouseMode,
    /// Position relative to the receiving control.
    pub local_position: Point,
    /// Position in screen coordinates.
    pub global_position: Point,
    /// Set when the event reached this control by bubbling up from a child.
    pub bubbled: bool,
    /// Wheel notches scrolled; positive is away from the user.
    pub steps: i32,
}

impl Poolable for MouseScrollEventArgs {
    fn reset(&mut self) {
        self.base.handled = false;
        self.mode = MouseMode::default();
        self.bubbled = false;
        self.local_position = Point::ZERO;
        self.global_position = Point::ZERO;
        self.steps = 0;
    }
}

/// Touch contact events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchEventArgs {
    /// Base event data.
    pub base: EventArgs,
    /// Position relative to the receiving control.
    pub local_position: Point,
    /// Position in screen coordinates.
    pub global_position: Point,
    /// Set when the event reached this control by bubbling up from a child.
    pub bubbled: bool,
    /// Identifier of the contact, stable from touch-down to touch-up.
    pub touch_id: u64,
}

impl Poolable for TouchEventArgs {
    fn reset(&mut self) {
        self.base.handled = false;
        self.local_position = Point::ZERO;
        self.global_position = Point::ZERO;
        self.bubbled = false;
        self.touch_id = 0;
    }
}
