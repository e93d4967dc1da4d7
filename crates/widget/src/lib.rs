//! The nested context menu engine of icy_menu.
//!
//! The engine owns no window and draws nothing. It resolves where each menu
//! level goes, tracks what is hovered, sequences dismissal over time and
//! hands the host a flat list of [`menu::MenuLayer`]s to draw.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use icy_menu_core as core;
pub use icy_menu_runtime as runtime;

pub mod menu;

pub use menu::{ContextMenu, EventRouter};
