//! Axis-aligned rectangles in screen space
//!
//! Origin is the top-left corner of the court and y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A point on the court
pub type Point = Vec2;

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle with its top-left corner at `origin`
    pub fn from_origin(origin: Point, width: f32, height: f32) -> Self {
        Self::new(origin.x, origin.y, width, height)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Corners as `[top_left, top_right, bottom_left, bottom_right]`
    pub fn corners(&self) -> [Point; 4] {
        [
            Vec2::new(self.x, self.y),
            Vec2::new(self.right(), self.y),
            Vec2::new(self.x, self.bottom()),
            Vec2::new(self.right(), self.bottom()),
        ]
    }

    /// Strict interior test: points on an edge are outside
    pub fn contains(&self, point: Point) -> bool {
        point.x > self.x && point.x < self.right() && point.y > self.y && point.y < self.bottom()
    }

    /// True when a corner of either rectangle lies strictly inside the other.
    ///
    /// Overlaps where neither rectangle has a corner inside the other (a thin
    /// bar crossing a wide one, or two identical rectangles) are not reported.
    /// Paddle collisions rely on exactly this behavior.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.corners().into_iter().any(|c| other.contains(c))
            || other.corners().into_iter().any(|c| self.contains(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_contains_is_exclusive() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(rect.contains(Vec2::new(15.0, 15.0)));
        assert!(!rect.contains(Vec2::new(10.0, 15.0)), "left edge");
        assert!(!rect.contains(Vec2::new(30.0, 15.0)), "right edge");
        assert!(!rect.contains(Vec2::new(15.0, 10.0)), "top edge");
        assert!(!rect.contains(Vec2::new(15.0, 30.0)), "bottom edge");
        assert!(!rect.contains(Vec2::new(10.0, 10.0)), "corner");
    }

    #[test]
    fn test_corners_order() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(
            rect.corners(),
            [
                Vec2::new(1.0, 2.0),
                Vec2::new(4.0, 2.0),
                Vec2::new(1.0, 6.0),
                Vec2::new(4.0, 6.0),
            ]
        );
    }

    #[test]
    fn test_intersects_overlapping_corner() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_intersects_contained() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 10.0, 10.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_cross_overlap_is_missed() {
        // A plus sign: the bars overlap in the middle but no corner is inside
        let horizontal = Rect::new(0.0, 40.0, 100.0, 20.0);
        let vertical = Rect::new(40.0, 0.0, 20.0, 100.0);
        assert!(!horizontal.intersects(&vertical));
        assert!(!vertical.intersects(&horizontal));
    }

    #[test]
    fn test_identical_rects_are_missed() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&a));
    }

    fn arb_rect() -> impl Strategy<Value = Rect> {
        (-100.0f32..700.0, -100.0f32..600.0, 0.0f32..200.0, 0.0f32..200.0)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn intersects_is_symmetric(a in arb_rect(), b in arb_rect()) {
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn corners_are_never_contained_in_own_rect(r in arb_rect()) {
            for corner in r.corners() {
                prop_assert!(!r.contains(corner));
            }
        }
    }
}
