//! Menu placement.
//!
//! Both resolvers are pure: they take the geometry of the pointer or parent
//! menu and the viewport, and return where the menu goes.
use crate::core::settings::Placement;
use crate::core::{Point, Rectangle, Size};

/// The side of its parent a submenu opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// To the right of the parent menu.
    #[default]
    Right,
    /// To the left of the parent menu, because there was no room on the right.
    Left,
}

/// Resolves the top-left corner of a root menu opened at `pointer`.
///
/// The root is anchored to a point, so it is only clamped inside the viewport,
/// never flipped. A menu larger than the viewport sticks to the margin.
pub fn resolve_root_position(
    pointer: Point,
    estimated_size: Size,
    viewport: Size,
    margin: f32,
) -> Point {
    Point::new(
        clamp_axis(pointer.x, estimated_size.width, viewport.width, margin),
        clamp_axis(pointer.y, estimated_size.height, viewport.height, margin),
    )
}

fn clamp_axis(position: f32, extent: f32, max: f32, margin: f32) -> f32 {
    position.min(max - extent - margin).max(margin)
}

/// Resolves the top-left corner of a submenu anchored to an item of its parent.
pub fn resolve_submenu_position(
    parent: Rectangle,
    anchor: Rectangle,
    size: Size,
    viewport: Size,
    placement: &Placement,
) -> Point {
    resolve_submenu_placement(parent, anchor, size, viewport, placement).0
}

/// Resolves the top-left corner of a submenu and the side it opens on.
///
/// Horizontally the submenu opens to the right of its parent and flips to the
/// left once when it would overflow. There is no second flip, so a submenu
/// wider than both sides may still overflow on the left. Vertically it is
/// only clamped.
pub fn resolve_submenu_placement(
    parent: Rectangle,
    anchor: Rectangle,
    size: Size,
    viewport: Size,
    placement: &Placement,
) -> (Point, Direction) {
    let mut direction = Direction::Right;
    let mut left = parent.right() + placement.gap;

    if left + size.width > viewport.width {
        direction = Direction::Left;
        left = parent.left() - size.width - placement.gap;
    }

    let mut top = anchor.top() - placement.vertical_offset;

    if top + size.height > viewport.height {
        top = viewport.height - size.height - placement.margin;
    }

    if top < placement.margin {
        top = placement.margin;
    }

    (Point::new(left, top), direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(800.0, 600.0);

    fn rect(x: f32, y: f32, width: f32, height: f32) -> Rectangle {
        Rectangle::new(Point::new(x, y), Size::new(width, height))
    }

    #[test]
    fn test_root_inside_viewport_is_untouched() {
        let position =
            resolve_root_position(Point::new(100.0, 120.0), Size::new(160.0, 200.0), VIEWPORT, 8.0);

        assert_eq!(position, Point::new(100.0, 120.0));
    }

    #[test]
    fn test_root_is_clamped_near_edges() {
        let size = Size::new(160.0, 200.0);
        let position = resolve_root_position(Point::new(790.0, 590.0), size, VIEWPORT, 8.0);

        assert_eq!(position, Point::new(800.0 - 160.0 - 8.0, 600.0 - 200.0 - 8.0));

        let position = resolve_root_position(Point::new(2.0, 0.0), size, VIEWPORT, 8.0);

        assert_eq!(position, Point::new(8.0, 8.0));
    }

    #[test]
    fn test_root_never_overflows() {
        let size = Size::new(220.0, 310.0);
        let margin = 8.0;

        for x in (0..=800).step_by(25) {
            for y in (0..=600).step_by(25) {
                let position = resolve_root_position(
                    Point::new(x as f32, y as f32),
                    size,
                    VIEWPORT,
                    margin,
                );

                assert!(position.x + size.width <= VIEWPORT.width - margin);
                assert!(position.y + size.height <= VIEWPORT.height - margin);
                assert!(position.x >= margin);
                assert!(position.y >= margin);
            }
        }
    }

    #[test]
    fn test_root_larger_than_viewport_sticks_to_margin() {
        let position =
            resolve_root_position(Point::new(400.0, 300.0), Size::new(900.0, 700.0), VIEWPORT, 8.0);

        assert_eq!(position, Point::new(8.0, 8.0));
    }

    #[test]
    fn test_submenu_opens_right_with_ample_space() {
        let placement = Placement::default();
        let parent = rect(100.0, 100.0, 160.0, 200.0);
        let anchor = rect(100.0, 132.0, 160.0, 28.0);

        let (position, direction) =
            resolve_submenu_placement(parent, anchor, Size::new(160.0, 100.0), VIEWPORT, &placement);

        assert_eq!(direction, Direction::Right);
        assert_eq!(position.x, parent.right() + placement.gap);
        assert_eq!(position.y, anchor.top() - placement.vertical_offset);
    }

    #[test]
    fn test_submenu_flips_left_near_right_edge() {
        let placement = Placement::default();
        let parent = rect(600.0, 100.0, 160.0, 200.0);
        let anchor = rect(600.0, 104.0, 160.0, 28.0);
        let size = Size::new(180.0, 100.0);

        let (position, direction) =
            resolve_submenu_placement(parent, anchor, size, VIEWPORT, &placement);

        assert_eq!(direction, Direction::Left);
        assert!(position.x < parent.left());
        assert_eq!(position.x, parent.left() - size.width - placement.gap);
    }

    #[test]
    fn test_submenu_flips_only_once() {
        let placement = Placement::default();
        let parent = rect(100.0, 0.0, 600.0, 200.0);
        let anchor = rect(100.0, 40.0, 600.0, 28.0);
        let size = Size::new(300.0, 100.0);

        let position = resolve_submenu_position(parent, anchor, size, VIEWPORT, &placement);

        // Overflows on the left too, and stays there
        assert_eq!(position.x, 100.0 - 300.0 - placement.gap);
    }

    #[test]
    fn test_submenu_is_clamped_vertically() {
        let placement = Placement::default();
        let parent = rect(100.0, 300.0, 160.0, 280.0);
        let anchor = rect(100.0, 550.0, 160.0, 28.0);
        let size = Size::new(160.0, 200.0);

        let position = resolve_submenu_position(parent, anchor, size, VIEWPORT, &placement);

        assert_eq!(position.y, VIEWPORT.height - size.height - placement.margin);

        let anchor = rect(100.0, 2.0, 160.0, 28.0);
        let position = resolve_submenu_position(parent, anchor, size, VIEWPORT, &placement);

        assert_eq!(position.y, placement.margin);
    }

    #[test]
    fn test_submenu_taller_than_viewport_sticks_to_margin() {
        let placement = Placement::default();
        let parent = rect(100.0, 100.0, 160.0, 200.0);
        let anchor = rect(100.0, 100.0, 160.0, 28.0);

        let position = resolve_submenu_position(
            parent,
            anchor,
            Size::new(160.0, 900.0),
            VIEWPORT,
            &placement,
        );

        assert_eq!(position.y, placement.margin);
    }
}
