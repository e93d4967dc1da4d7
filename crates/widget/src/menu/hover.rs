//! Track which item is hovered at each menu level.
use crate::core::Rectangle;

use smol_str::SmolStr;

/// The hover state of a single menu level.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LevelState {
    /// The key of the hovered item.
    pub hovered_key: Option<SmolStr>,
    /// The screen bounds of the hovered item.
    pub hovered_rect: Option<Rectangle>,
}

impl LevelState {
    /// Returns true if an item is hovered at this level.
    pub fn is_hovered(&self) -> bool {
        self.hovered_key.is_some()
    }
}

/// The hover state of every level of an open menu, indexed by depth.
#[derive(Debug, Clone, Default)]
pub struct HoverTracker {
    levels: Vec<LevelState>,
}

impl HoverTracker {
    /// Creates a [`HoverTracker`] with nothing hovered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `key` as the hovered item of `level`.
    ///
    /// Hovering a different key drops every deeper level, since the submenus
    /// they describe belong to the previous item. Returns whether anything
    /// changed.
    pub fn hover(&mut self, level: usize, key: SmolStr, rect: Rectangle) -> bool {
        if self.levels.len() <= level {
            self.levels.resize_with(level + 1, LevelState::default);
        }

        let state = &mut self.levels[level];
        let same_key = state.hovered_key.as_ref() == Some(&key);

        if same_key && state.hovered_rect == Some(rect) {
            return false;
        }

        state.hovered_key = Some(key);
        state.hovered_rect = Some(rect);

        if !same_key {
            self.levels.truncate(level + 1);
        }

        true
    }

    /// Clears the hover of every level. Returns whether anything was hovered.
    pub fn clear(&mut self) -> bool {
        let was_hovered = self.any_hovered();
        self.levels.clear();
        was_hovered
    }

    /// Returns the state of `level`, if it was ever hovered.
    pub fn level(&self, level: usize) -> Option<&LevelState> {
        self.levels.get(level)
    }

    /// Returns the hovered key of `level`.
    pub fn hovered_key(&self, level: usize) -> Option<&SmolStr> {
        self.levels.get(level)?.hovered_key.as_ref()
    }

    /// Returns the state of every tracked level.
    pub fn levels(&self) -> &[LevelState] {
        &self.levels
    }

    /// Returns true if an item is hovered at any level.
    pub fn any_hovered(&self) -> bool {
        self.levels.iter().any(LevelState::is_hovered)
    }
}
