//! The state of a single open-to-close menu lifecycle.
use super::choreographer::Phase;
use super::hover::{HoverTracker, LevelState};
use crate::core::Point;
use crate::core::menu::{self, MenuItem};
use crate::runtime::{Generation, timer};

/// An open menu.
///
/// A [`Session`] is created when the menu opens and dropped when it is fully
/// closed. It owns the items it was opened with.
#[derive(Debug)]
pub struct Session {
    pub(super) generation: Generation,
    pub(super) pointer: Point,
    pub(super) root_position: Point,
    pub(super) items: Vec<MenuItem>,
    pub(super) hover: HoverTracker,
    pub(super) phase: Phase,
    pub(super) timers: Vec<timer::Handle>,
}

impl Session {
    pub(super) fn new(
        generation: Generation,
        pointer: Point,
        root_position: Point,
        items: Vec<MenuItem>,
    ) -> Self {
        Self {
            generation,
            pointer,
            root_position,
            items,
            hover: HoverTracker::new(),
            phase: Phase::Open,
            timers: Vec::new(),
        }
    }

    /// Returns the [`Generation`] the session was opened under.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Returns the point the menu was opened at.
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Returns the top-left corner of the root menu.
    pub fn root_position(&self) -> Point {
        self.root_position
    }

    /// Returns the items the menu was opened with.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Returns the hover state of every level.
    pub fn levels(&self) -> &[LevelState] {
        self.hover.levels()
    }

    /// Returns the current [`Phase`] of the session.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true while the session is retracting.
    pub fn is_closing(&self) -> bool {
        self.phase.is_closing()
    }

    /// Returns the items listed at `level`, following the hovered submenus.
    pub fn items_at(&self, level: usize) -> Option<&[MenuItem]> {
        let mut items = self.items.as_slice();

        for depth in 0..level {
            let key = self.hover.hovered_key(depth)?;
            let item = menu::find(items, key).filter(|item| item.can_expand())?;

            items = &item.children;
        }

        Some(items)
    }

    /// Returns the item with `key` at `level`.
    pub fn item(&self, level: usize, key: &str) -> Option<&MenuItem> {
        menu::find(self.items_at(level)?, key)
    }
}
