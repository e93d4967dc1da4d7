//! Listen to keyboard events.
use smol_str::SmolStr;

/// A key on the keyboard.
///
/// Only the keys the menu engine reacts to are named; everything else is
/// reported as a [`Key::Character`] or [`Key::Unidentified`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A named key.
    Named(Named),

    /// A key string that corresponds to the character typed by the user.
    Character(SmolStr),

    /// An unidentified key.
    Unidentified,
}

impl Key {
    /// Returns true if the [`Key`] is the given [`Named`] key.
    pub fn is_named(&self, named: Named) -> bool {
        matches!(self, Key::Named(key) if *key == named)
    }
}

/// A named key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Named {
    Escape,
    Enter,
    Tab,
    Space,
    Backspace,
    ContextMenu,
    Shift,
    Control,
    Alt,
    Super,
}

/// A keyboard event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A keyboard key was pressed.
    KeyPressed {
        /// The key pressed.
        key: Key,
        /// Whether the press was generated by holding the key down.
        repeat: bool,
    },

    /// A keyboard key was released.
    KeyReleased {
        /// The key released.
        key: Key,
    },
}
