//! Axis-aligned collision detection
//!
//! Everything in this game is a rectangle, so the whole detector is a
//! single AABB overlap test plus the containment checks the motion
//! model needs for its entered-bounds latch.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Bounds;

/// An axis-aligned rectangle (top-left origin, like the canvas)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// True if this rect lies fully within the play area
    pub fn fully_inside(&self, bounds: Bounds) -> bool {
        self.pos.x >= 0.0
            && self.pos.x + self.size.x <= bounds.width
            && self.pos.y >= 0.0
            && self.pos.y + self.size.y <= bounds.height
    }
}

/// Overlap test between two rectangles
///
/// Strict inequalities: rects that merely share an edge do not overlap.
/// Symmetric under argument swap.
#[inline]
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.pos.x < b.pos.x + b.size.x
        && a.pos.x + a.size.x > b.pos.x
        && a.pos.y < b.pos.y + b.size.y
        && a.pos.y + a.size.y > b.pos.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_hit() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(overlaps(a, b));
    }

    #[test]
    fn test_overlap_miss() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(a, b));
    }

    #[test]
    fn test_edge_touch_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(a, b));
        let c = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!overlaps(a, c));
    }

    #[test]
    fn test_containment_is_overlap() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 10.0, 10.0);
        assert!(overlaps(outer, inner));
        assert!(overlaps(inner, outer));
    }

    #[test]
    fn test_fully_inside() {
        let bounds = Bounds::new(800.0, 600.0);
        assert!(Rect::new(0.0, 0.0, 50.0, 50.0).fully_inside(bounds));
        assert!(Rect::new(750.0, 550.0, 50.0, 50.0).fully_inside(bounds));
        assert!(!Rect::new(-1.0, 0.0, 50.0, 50.0).fully_inside(bounds));
        assert!(!Rect::new(751.0, 0.0, 50.0, 50.0).fully_inside(bounds));
    }

    fn arb_rect() -> impl Strategy<Value = Rect> {
        (
            -1000.0f32..1000.0,
            -1000.0f32..1000.0,
            0.1f32..200.0,
            0.1f32..200.0,
        )
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_overlap_commutative(a in arb_rect(), b in arb_rect()) {
            prop_assert_eq!(overlaps(a, b), overlaps(b, a));
        }

        #[test]
        fn prop_rect_overlaps_itself(a in arb_rect()) {
            prop_assert!(overlaps(a, a));
        }
    }
}
