//! Nested context menus.
//!
//! A [`ContextMenu`] opens at a point with a tree of
//! [`MenuItem`](crate::core::menu::MenuItem)s. Hovering an item with children
//! expands it into a submenu, recursively. The engine draws nothing: call
//! [`ContextMenu::layers`] to get a [`MenuLayer`] per open level and draw
//! each one at its bounds.
//!
//! Dismissal is choreographed: nested menus retract first, then the root
//! hides. The host drives time by calling [`ContextMenu::tick`] whenever
//! [`ContextMenu::next_deadline`] is reached.
//!
//! Events are usually fed through an [`EventRouter`], which maps pointer,
//! keyboard and window events to menu operations.
mod choreographer;
mod context_menu;
mod hover;
mod layer;
mod position;
mod router;
mod session;


pub use choreographer::{CloseChoreographer, Phase, Step};
pub use context_menu::{ContextMenu, Hit, Visibility};
pub use hover::{HoverTracker, LevelState};
pub use layer::{Context, ItemLayout, LayerTag, MenuLayer, resolve_menu_tree};
pub use position::{
    Direction, resolve_root_position, resolve_submenu_placement, resolve_submenu_position,
};
pub use router::EventRouter;
pub use session::Session;
