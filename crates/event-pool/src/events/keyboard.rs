//! Keyboard and text-input payloads.

use event_pool_core::Poolable;

use super::EventArgs;

/// Modifier keys held during a keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// Either Shift key.
    pub shift: bool,
    /// Either Control key.
    pub control: bool,
    /// Either Alt key.
    pub alt: bool,
    /// The Meta/Super key.
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift only.
    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };

    /// Control only.
    pub const CTRL: Self = Self {
        control: true,
        ..Self::NONE
    };

    /// Alt only.
    pub const ALT: Self = Self {
        alt: true,
        ..Self::NONE
    };

    /// Check if any modifier is held.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }

    /// Update the flag for a modifier key. Other keys are ignored.
    pub fn apply(&mut self, key: KeyCode, pressed: bool) {
        match key {
            KeyCode::ShiftLeft | KeyCode::ShiftRight => self.shift = pressed,
            KeyCode::ControlLeft | KeyCode::ControlRight => self.control = pressed,
            KeyCode::AltLeft | KeyCode::AltRight => self.alt = pressed,
            KeyCode::Meta => self.meta = pressed,
            _ => {}
        }
    }
}

/// Key codes delivered by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyCode {
    /// No key; the reset state of a pooled payload.
    #[default]
    None,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Digits
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    // Function keys
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,

    // Navigation
    Up, Down, Left, Right,
    Home, End, PageUp, PageDown,

    // Editing
    Backspace, Delete, Insert, Enter, Tab, Space, Escape,

    // Modifiers
    ShiftLeft, ShiftRight,
    ControlLeft, ControlRight,
    AltLeft, AltRight,
    Meta,

    /// A platform key code with no mapping above.
    Unknown(u16),
}

impl KeyCode {
    /// Check if this is a modifier key.
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            KeyCode::ShiftLeft
                | KeyCode::ShiftRight
                | KeyCode::ControlLeft
                | KeyCode::ControlRight
                | KeyCode::AltLeft
                | KeyCode::AltRight
                | KeyCode::Meta
        )
    }

    /// Check if this key moves focus or the caret.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            KeyCode::Up
                | KeyCode::Down
                | KeyCode::Left
                | KeyCode::Right
                | KeyCode::Home
                | KeyCode::End
                | KeyCode::PageUp
                | KeyCode::PageDown
                | KeyCode::Tab
        )
    }
}

/// Key press and release events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyEventArgs {
    /// Base event data.
    pub base: EventArgs,
    /// Modifiers held when the key changed state.
    pub modifiers: KeyboardModifiers,
    /// The key that changed state.
    pub key: KeyCode,
}

impl Poolable for KeyEventArgs {
    fn reset(&mut self) {
        self.modifiers = KeyboardModifiers::NONE;
        self.key = KeyCode::None;
        self.base.handled = false;
    }
}

/// Character input, delivered after keyboard layout and IME processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextInputEventArgs {
    /// Base event data.
    pub base: EventArgs,
    /// The typed character; `'\0'` when unset.
    pub character: char,
}

impl TextInputEventArgs {
    /// Check if the character should be inserted into a text field.
    pub fn is_printable(&self) -> bool {
        self.character != '\0' && !self.character.is_control()
    }
}

impl Poolable for TextInputEventArgs {
    fn reset(&mut self) {
        self.base.handled = false;
        self.character = '\0';
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_apply() {
        let mut mods = KeyboardModifiers::NONE;
        assert!(!mods.any());

        mods.apply(KeyCode::ShiftLeft, true);
        assert_eq!(mods, KeyboardModifiers::SHIFT);

        mods.apply(KeyCode::A, true);
        assert_eq!(mods, KeyboardModifiers::SHIFT);

        mods.apply(KeyCode::ShiftRight, false);
        assert!(!mods.any());
    }

    #[test]
    fn test_key_classification() {
        assert!(KeyCode::ControlRight.is_modifier());
        assert!(!KeyCode::Enter.is_modifier());
        assert!(KeyCode::PageDown.is_navigation());
        assert!(!KeyCode::Unknown(0x5b).is_navigation());
    }

    #[test]
    fn test_key_reset() {
        let mut args = KeyEventArgs {
            base: EventArgs { handled: true },
            modifiers: KeyboardModifiers::CTRL,
            key: KeyCode::S,
        };
        args.reset();
        assert_eq!(args, KeyEventArgs::default());
        assert_eq!(args.key, KeyCode::None);
    }

    #[test]
    fn test_text_input() {
        let mut args = TextInputEventArgs {
            character: 'é',
            ..Default::default()
        };
        assert!(args.is_printable());
        args.reset();
        assert!(!args.is_printable());

        args.character = '\u{8}';
        assert!(!args.is_printable());
    }
}
