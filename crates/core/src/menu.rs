//! Context menu model.
//!
//! This module defines the tree of items a context menu is opened with. A
//! [`MenuItem`] with children is a submenu trigger: it expands on hover and
//! never fires its own callback. Leaf items fire their callback on
//! activation.
//!
//! ```
//! use icy_menu_core::menu::MenuItem;
//!
//! let items = vec![
//!     MenuItem::new("copy", "Copy").shortcut("Ctrl+C"),
//!     MenuItem::new("paste", "Paste").with_divider(),
//!     MenuItem::submenu("share", "Share", [
//!         MenuItem::new("mail", "Mail"),
//!         MenuItem::new("link", "Copy link"),
//!     ]),
//!     MenuItem::new("delete", "Delete").disabled(true),
//! ];
//!
//! assert!(items[2].can_expand());
//! assert!(!items[3].can_activate());
//! ```
use crate::Size;
use crate::settings::Metrics;

use smol_str::SmolStr;

use std::fmt;
use std::rc::Rc;

/// A zero-argument callback fired when a leaf [`MenuItem`] is selected.
pub type Callback = Rc<dyn Fn()>;

/// A node of a context menu.
#[derive(Clone)]
pub struct MenuItem {
    /// Identifier of the item, unique among its siblings.
    pub key: SmolStr,
    /// Displayed label.
    pub label: String,
    /// Nested items. A non-empty list makes this item a submenu trigger.
    pub children: Vec<MenuItem>,
    /// Whether the item ignores hover expansion and activation.
    pub disabled: bool,
    /// Fired when the item is selected. Only used for leaf items.
    pub on_click: Option<Callback>,
    /// Whether a divider is drawn below the item.
    pub divider: bool,
    /// Shortcut hint shown next to the label.
    pub shortcut: Option<String>,
    /// Name of an icon shown before the label.
    pub icon: Option<String>,
}

impl MenuItem {
    /// Creates a new leaf [`MenuItem`].
    #[must_use]
    pub fn new(key: impl Into<SmolStr>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            children: Vec::new(),
            disabled: false,
            on_click: None,
            divider: false,
            shortcut: None,
            icon: None,
        }
    }

    /// Creates a submenu trigger with the given children.
    #[must_use]
    pub fn submenu(
        key: impl Into<SmolStr>,
        label: impl Into<String>,
        children: impl IntoIterator<Item = MenuItem>,
    ) -> Self {
        Self {
            children: children.into_iter().collect(),
            ..Self::new(key, label)
        }
    }

    /// Sets the callback fired when the item is selected.
    #[must_use]
    pub fn on_click(mut self, on_click: impl Fn() + 'static) -> Self {
        self.on_click = Some(Rc::new(on_click));
        self
    }

    /// Sets whether the item is disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Draws a divider below the item.
    #[must_use]
    pub fn with_divider(mut self) -> Self {
        self.divider = true;
        self
    }

    /// Sets the shortcut hint of the item.
    #[must_use]
    pub fn shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }

    /// Sets the icon of the item.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Returns true if the item has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns true if hovering the item opens a nested menu.
    pub fn can_expand(&self) -> bool {
        !self.disabled && !self.is_leaf()
    }

    /// Returns true if selecting the item fires its callback and closes the menu.
    pub fn can_activate(&self) -> bool {
        !self.disabled && self.is_leaf()
    }

    /// Fires the callback of the item, if it can be activated.
    ///
    /// Returns whether the item was activated.
    pub fn activate(&self) -> bool {
        if !self.can_activate() {
            return false;
        }

        if let Some(on_click) = &self.on_click {
            on_click();
        }

        true
    }
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("children", &self.children)
            .field("disabled", &self.disabled)
            .field("on_click", &self.on_click.is_some())
            .field("divider", &self.divider)
            .finish()
    }
}

/// Finds the item with the given key among `items`.
///
/// Keys should be unique among siblings. When they are not, the last match
/// wins.
pub fn find<'a>(items: &'a [MenuItem], key: &str) -> Option<&'a MenuItem> {
    items.iter().rev().find(|item| item.key == key)
}

/// Estimates the size a menu listing `items` will take on screen.
pub fn estimate_size(items: &[MenuItem], metrics: &Metrics) -> Size {
    let height = items
        .iter()
        .map(|item| metrics.item_extent(item.divider))
        .sum::<f32>()
        + metrics.padding * 2.0;

    let width = items
        .iter()
        .map(|item| {
            let mut chars = item.label.chars().count();

            if let Some(shortcut) = &item.shortcut {
                // Keep two columns between the label and the hint
                chars += shortcut.chars().count() + 2;
            }

            chars as f32 * metrics.char_width + metrics.horizontal_padding
        })
        .fold(metrics.min_width, f32::max);

    Size::new(width, height)
}
