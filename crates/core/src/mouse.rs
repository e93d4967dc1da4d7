//! Listen to mouse events.
use crate::Point;

/// The button of a mouse.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
pub enum Button {
    /// The left mouse button.
    Left,

    /// The right mouse button.
    Right,

    /// The middle (wheel) button.
    Middle,

    /// The back mouse button.
    Back,

    /// The forward mouse button.
    Forward,

    /// Some other button.
    Other(u16),
}

/// A mouse event.
///
/// _**Note:** This type is largely incomplete! If you need to track
/// additional events, feel free to extend it._
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The mouse cursor entered the window.
    CursorEntered,

    /// The mouse cursor left the window.
    CursorLeft,

    /// The mouse cursor was moved.
    CursorMoved {
        /// The new position of the mouse cursor
        position: Point,
    },

    /// A mouse button was pressed.
    ButtonPressed {
        /// The pressed button.
        button: Button,
        /// The position of the cursor at the time of the press.
        position: Point,
    },

    /// A mouse button was released.
    ButtonReleased {
        /// The released button.
        button: Button,
        /// The position of the cursor at the time of the release.
        position: Point,
    },

    /// The mouse wheel was scrolled.
    WheelScrolled {
        /// The scroll movement.
        delta: ScrollDelta,
    },
}

impl Event {
    /// Returns the cursor position carried by the [`Event`], if any.
    pub fn position(&self) -> Option<Point> {
        match *self {
            Event::CursorMoved { position }
            | Event::ButtonPressed { position, .. }
            | Event::ButtonReleased { position, .. } => Some(position),
            Event::CursorEntered | Event::CursorLeft | Event::WheelScrolled { .. } => None,
        }
    }
}

/// A scroll movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollDelta {
    /// A line-based scroll movement
    Lines {
        /// The number of horizontal lines scrolled
        x: f32,

        /// The number of vertical lines scrolled
        y: f32,
    },
    /// A pixel-based scroll movement
    Pixels {
        /// The number of horizontal pixels scrolled
        x: f32,
        /// The number of vertical pixels scrolled
        y: f32,
    },
}
