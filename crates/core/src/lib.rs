//! The core library of icy_menu.
//!
//! This library holds basic types that can be reused by the runtime and the
//! menu engine: geometry, input events, the menu model and the settings that
//! drive placement and dismissal.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub mod event;
pub mod keyboard;
pub mod menu;
pub mod mouse;
pub mod settings;
pub mod time;
pub mod window;

mod point;
mod rectangle;
mod size;

pub use event::Event;
pub use menu::MenuItem;
pub use point::Point;
pub use rectangle::Rectangle;
pub use settings::Settings;
pub use size::Size;
