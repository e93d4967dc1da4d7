//! Resolve an open menu into a flat list of layers.
//!
//! Each level of an open menu is drawn as an independent layer. Instead of
//! rendering itself recursively, the menu tree is walked once and flattened
//! into [`MenuLayer`] descriptors, root first, which the host draws at the
//! returned coordinates.
use super::hover::LevelState;
use super::position::{self, Direction};
use crate::core::menu::{self, MenuItem};
use crate::core::{Point, Rectangle, Settings, Size};
use crate::runtime::Generation;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

/// Identifies a layer across updates.
///
/// A layer is the same layer as long as it belongs to the same session, sits
/// at the same level and was expanded from the same parent item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LayerTag {
    /// The generation of the session the layer was created under.
    pub generation: Generation,
    /// The depth of the layer. The root menu is level 0.
    pub level: usize,
    /// The key of the parent item the layer expands, `None` for the root.
    pub anchor: Option<SmolStr>,
}

impl LayerTag {
    /// Creates the tag of the root layer of a session.
    pub fn root(generation: Generation) -> Self {
        Self {
            generation,
            level: 0,
            anchor: None,
        }
    }

    /// Creates the tag of the layer expanded from `anchor`, one level deeper.
    pub fn child(&self, anchor: SmolStr) -> Self {
        Self {
            generation: self.generation,
            level: self.level + 1,
            anchor: Some(anchor),
        }
    }
}

/// The layout of a single item inside a [`MenuLayer`].
#[derive(Debug, Clone, PartialEq)]
pub struct ItemLayout {
    /// The key of the item.
    pub key: SmolStr,
    /// The label of the item.
    pub label: String,
    /// The screen bounds of the item.
    pub bounds: Rectangle,
    /// Whether the item is disabled.
    pub disabled: bool,
    /// Whether the item opens a submenu.
    pub submenu: bool,
    /// Whether the item is the hovered item of its level.
    pub hovered: bool,
    /// Whether a divider is drawn below the item.
    pub divider: bool,
}

/// A level of an open menu, ready to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuLayer {
    /// The identity of the layer.
    pub tag: LayerTag,
    /// The screen bounds of the layer.
    pub bounds: Rectangle,
    /// The side of its parent the layer opened on.
    pub direction: Direction,
    /// The items of the layer, top to bottom.
    pub items: Vec<ItemLayout>,
}

impl MenuLayer {
    /// Returns the item under `point`, if any.
    pub fn item_at(&self, point: Point) -> Option<&ItemLayout> {
        if !self.bounds.contains(point) {
            return None;
        }

        self.items.iter().find(|item| item.bounds.contains(point))
    }
}

/// Everything [`resolve_menu_tree`] reads besides the items themselves.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    /// The hover state of every level.
    pub levels: &'a [LevelState],
    /// The settings of the menu.
    pub settings: &'a Settings,
    /// The size of the viewport.
    pub viewport: Size,
    /// Sizes measured by the host, overriding the estimates.
    pub measured: &'a FxHashMap<LayerTag, Size>,
}

impl Context<'_> {
    /// Returns the size of the layer with the given tag listing `items`.
    pub fn size_of(&self, tag: &LayerTag, items: &[MenuItem]) -> Size {
        self.measured
            .get(tag)
            .copied()
            .unwrap_or_else(|| menu::estimate_size(items, &self.settings.metrics))
    }
}

/// Resolves the layer listing `items` at `position` and every submenu
/// expanded below it, root first.
pub fn resolve_menu_tree(
    items: &[MenuItem],
    tag: LayerTag,
    position: Point,
    direction: Direction,
    context: &Context<'_>,
) -> Vec<MenuLayer> {
    let mut layers = Vec::new();

    resolve_into(&mut layers, items, tag, position, direction, context);

    layers
}

fn resolve_into(
    layers: &mut Vec<MenuLayer>,
    items: &[MenuItem],
    tag: LayerTag,
    position: Point,
    direction: Direction,
    context: &Context<'_>,
) {
    let metrics = &context.settings.metrics;
    let bounds = Rectangle::new(position, context.size_of(&tag, items));
    let level = context.levels.get(tag.level);
    let hovered_key = level.and_then(|state| state.hovered_key.as_ref());

    let mut y = bounds.y + metrics.padding;
    let item_layouts: Vec<ItemLayout> = items
        .iter()
        .map(|item| {
            let layout = ItemLayout {
                key: item.key.clone(),
                label: item.label.clone(),
                bounds: Rectangle::new(
                    Point::new(bounds.x, y),
                    Size::new(bounds.width, metrics.item_height),
                ),
                disabled: item.disabled,
                submenu: !item.is_leaf(),
                hovered: hovered_key == Some(&item.key),
                divider: item.divider,
            };

            y += metrics.item_extent(item.divider);

            layout
        })
        .collect();

    // Submenus anchor on the current bounds of their trigger, never on the
    // rect recorded at hover time
    let expanded = hovered_key.and_then(|key| {
        let item = menu::find(items, key).filter(|item| item.can_expand())?;
        let anchor = item_layouts
            .iter()
            .rev()
            .find(|layout: &&ItemLayout| layout.key == *key)?
            .bounds;

        Some((item, anchor))
    });

    layers.push(MenuLayer {
        tag: tag.clone(),
        bounds,
        direction,
        items: item_layouts,
    });

    if let Some((item, anchor)) = expanded {
        let child = tag.child(item.key.clone());
        let size = context.size_of(&child, &item.children);
        let (position, direction) = position::resolve_submenu_placement(
            bounds,
            anchor,
            size,
            context.viewport,
            &context.settings.placement,
        );

        resolve_into(layers, &item.children, child, position, direction, context);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::hover::HoverTracker;
    use crate::runtime::SessionGate;

    fn items() -> Vec<MenuItem> {
        vec![
            MenuItem::new("copy", "Copy").with_divider(),
            MenuItem::submenu(
                "share",
                "Share",
                [
                    MenuItem::new("mail", "Mail"),
                    MenuItem::submenu("social", "Social", [MenuItem::new("post", "Post")]),
                ],
            ),
            MenuItem::submenu("locked", "Locked", [MenuItem::new("x", "X")]).disabled(true),
        ]
    }

    fn resolve(hover: &HoverTracker, items: &[MenuItem]) -> Vec<MenuLayer> {
        let settings = Settings::default();
        let measured = FxHashMap::default();
        let context = Context {
            levels: hover.levels(),
            settings: &settings,
            viewport: Size::new(1024.0, 768.0),
            measured: &measured,
        };
        let mut gate = SessionGate::new();

        resolve_menu_tree(
            items,
            LayerTag::root(gate.advance()),
            Point::new(10.0, 10.0),
            Direction::Right,
            &context,
        )
    }

    #[test]
    fn test_items_are_stacked_with_dividers() {
        let items = items();
        let layers = resolve(&HoverTracker::new(), &items);
        let metrics = Settings::default().metrics;

        assert_eq!(layers.len(), 1);

        let root = &layers[0];

        assert_eq!(root.items[0].bounds.y, 10.0 + metrics.padding);
        assert_eq!(
            root.items[1].bounds.y,
            10.0 + metrics.padding + metrics.item_height + metrics.divider_height
        );
        assert!(root.items[1].submenu);
        assert!(!root.items[0].submenu);
    }

    #[test]
    fn test_hovered_submenus_are_flattened_root_first() {
        let items = items();
        let mut hover = HoverTracker::new();

        let root = resolve(&hover, &items);
        let share = root[0].items[1].bounds;
        let _ = hover.hover(0, "share".into(), share);

        let layers = resolve(&hover, &items);
        let social = layers[1].items[1].bounds;
        let _ = hover.hover(1, "social".into(), social);

        let layers = resolve(&hover, &items);

        assert_eq!(layers.len(), 3);
        assert_eq!(layers[0].tag.level, 0);
        assert_eq!(layers[1].tag.anchor.as_deref(), Some("share"));
        assert_eq!(layers[2].tag.anchor.as_deref(), Some("social"));
        assert_eq!(layers[2].tag.level, 2);
        assert!(layers[0].items[1].hovered);
        assert_eq!(layers[1].bounds.x, layers[0].bounds.right() + 4.0);
    }

    #[test]
    fn test_leaf_and_disabled_items_do_not_expand() {
        let items = items();
        let root = resolve(&HoverTracker::new(), &items);

        let mut hover = HoverTracker::new();
        let _ = hover.hover(0, "copy".into(), root[0].items[0].bounds);

        assert_eq!(resolve(&hover, &items).len(), 1);

        let mut hover = HoverTracker::new();
        let _ = hover.hover(0, "locked".into(), root[0].items[2].bounds);

        assert_eq!(resolve(&hover, &items).len(), 1);
    }

    #[test]
    fn test_item_at() {
        let items = items();
        let layers = resolve(&HoverTracker::new(), &items);
        let root = &layers[0];
        let copy = root.items[0].bounds;

        let hit = root.item_at(Point::new(copy.x + 5.0, copy.y + 5.0));

        assert_eq!(hit.map(|item| item.key.as_str()), Some("copy"));
        assert!(root.item_at(Point::new(root.bounds.x + 5.0, root.bounds.y + 1.0)).is_none());
        assert!(root.item_at(Point::new(0.0, 0.0)).is_none());
    }
}
