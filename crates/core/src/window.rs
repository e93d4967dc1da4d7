//! React to events of the window hosting a menu.
mod event;

pub use event::Event;
