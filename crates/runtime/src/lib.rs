//! A renderer-agnostic runtime for icy_menu.
//!
//! The menu engine is single-threaded and cooperative. Its only suspension
//! points are timers, which live in a [`Timers`] queue the host drives with
//! the current time, and every asynchronous effect is tagged with a
//! [`Generation`] issued by a [`SessionGate`] so effects from a superseded
//! session can be told apart and dropped.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub mod gate;
pub mod timer;

pub use icy_menu_core as core;

pub use gate::{Generation, SessionGate};
pub use timer::{Handle, Timers};
