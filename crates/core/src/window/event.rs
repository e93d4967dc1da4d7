use crate::Size;

/// An event of the window hosting a menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The viewport changed size, in logical pixels.
    Resized(Size),

    /// The contents under the menu scrolled.
    Scrolled,

    /// The window gained focus.
    Focused,

    /// The window lost focus.
    Unfocused,

    /// The window is about to close.
    CloseRequested,
}
