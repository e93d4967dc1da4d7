//! icy_menu is a renderer-agnostic engine for nested context menus.
//!
//! It owns no window and draws nothing. The host feeds it pointer, keyboard
//! and window events through an [`EventRouter`], calls [`ContextMenu::tick`]
//! whenever [`ContextMenu::next_deadline`] passes, and draws the
//! [`MenuLayer`](menu::MenuLayer)s the engine resolves.
//!
//! # The Pocket Guide
//! Describe the items of the menu with [`MenuItem`]:
//!
//! ```
//! use icy_menu::MenuItem;
//!
//! fn items() -> Vec<MenuItem> {
//!     vec![
//!         MenuItem::new("copy", "Copy").shortcut("Ctrl+C"),
//!         MenuItem::submenu("share", "Share", [
//!             MenuItem::new("mail", "Mail").on_click(|| println!("mail")),
//!         ]),
//!     ]
//! }
//! # assert_eq!(items().len(), 2);
//! ```
//!
//! Create a [`ContextMenu`] and an [`EventRouter`] that opens it with those
//! items on every secondary click:
//!
//! ```
//! use icy_menu::event::{Event, Status};
//! use icy_menu::time::Instant;
//! use icy_menu::{ContextMenu, EventRouter, MenuItem, Point, Settings, Size, mouse};
//!
//! let mut menu = ContextMenu::new(Settings::default(), Size::new(1024.0, 768.0));
//! let mut router = EventRouter::new(|_| vec![MenuItem::new("copy", "Copy")]);
//! router.attach();
//!
//! let status = router.route(
//!     &mut menu,
//!     &Event::Mouse(mouse::Event::ButtonPressed {
//!         button: mouse::Button::Right,
//!         position: Point::new(120.0, 80.0),
//!     }),
//!     Instant::now(),
//! );
//!
//! assert_eq!(status, Status::Captured);
//!
//! for layer in menu.layers() {
//!     // Draw `layer.bounds` and each of `layer.items`
//!     assert_eq!(layer.items.len(), 1);
//! }
//! ```
//!
//! Then keep calling [`ContextMenu::tick`] while a close sequence runs. The
//! layers listed by [`ContextMenu::exiting_layers`] may keep playing an exit
//! until the host reports [`ContextMenu::exit_finished`].
#![cfg_attr(docsrs, feature(doc_cfg))]
use icy_menu_widget::core;
use icy_menu_widget::runtime;

pub use crate::core::menu::MenuItem;
pub use crate::core::settings::{self, Settings};
pub use crate::core::{Point, Rectangle, Size, time};
pub use crate::runtime::{Generation, SessionGate};
pub use icy_menu_widget::{ContextMenu, EventRouter};

pub mod event {
    //! Handle events of a user interface.
    pub use crate::core::event::{Event, Status};
}

pub mod keyboard {
    //! Listen and react to keyboard events.
    pub use crate::core::keyboard::{Event, Key, Named};
}

pub mod mouse {
    //! Listen and react to mouse events.
    pub use crate::core::mouse::{Button, Event, ScrollDelta};
}

pub mod window {
    //! React to window events.
    pub use crate::core::window::Event;
}

pub mod timer {
    //! Schedule deterministic timers driven by the host.
    pub use crate::runtime::timer::{Handle, Timers};
}

pub mod menu {
    //! Resolve, track and dismiss nested context menus.
    pub use crate::core::menu::{Callback, MenuItem, estimate_size, find};
    pub use icy_menu_widget::menu::*;
}
