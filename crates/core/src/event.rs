//! Handle events of a user interface.
use crate::Point;
use crate::keyboard;
use crate::mouse;
use crate::window;

/// An input event a context menu may react to.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A keyboard event
    Keyboard(keyboard::Event),

    /// A mouse event
    Mouse(mouse::Event),

    /// An event of the window hosting the menu
    Window(window::Event),
}

impl Event {
    /// Returns the pointer position carried by the [`Event`], if any.
    pub fn position(&self) -> Option<Point> {
        match self {
            Event::Mouse(event) => event.position(),
            Event::Keyboard(_) | Event::Window(_) => None,
        }
    }
}

impl From<keyboard::Event> for Event {
    fn from(event: keyboard::Event) -> Self {
        Event::Keyboard(event)
    }
}

impl From<mouse::Event> for Event {
    fn from(event: mouse::Event) -> Self {
        Event::Mouse(event)
    }
}

impl From<window::Event> for Event {
    fn from(event: window::Event) -> Self {
        Event::Window(event)
    }
}

/// Whether a menu consumed an [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// The host should keep propagating the [`Event`].
    #[default]
    Ignored,

    /// The menu consumed the [`Event`].
    Captured,
}

impl Status {
    /// Returns [`Status::Captured`] if `captured` is true.
    ///
    /// ```
    /// use icy_menu_core::event::Status;
    ///
    /// assert_eq!(Status::captured_if(true), Status::Captured);
    /// assert_eq!(Status::captured_if(false), Status::Ignored);
    /// ```
    pub fn captured_if(captured: bool) -> Self {
        if captured {
            Status::Captured
        } else {
            Status::Ignored
        }
    }

    /// Returns true if the menu consumed the [`Event`].
    pub fn is_captured(self) -> bool {
        self == Status::Captured
    }
}
