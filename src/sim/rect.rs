//! Axis-aligned rectangles and the overlap test
//!
//! Screen space: origin at the top-left, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Open-interval intersection: touching edges do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_basic() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_contained_rect_overlaps() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(outer.overlaps(&inner));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Right edge of a == left edge of b
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        // Bottom edge of a == top edge of b
        assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
        // Corner contact
        assert!(!a.overlaps(&Rect::new(10.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_zero_area_rects_never_overlap() {
        let point = Rect::new(5.0, 5.0, 0.0, 0.0);
        assert!(!point.overlaps(&point));
        assert!(!point.overlaps(&Rect::new(5.0, 2.0, 0.0, 6.0)));
        // Two horizontal lines on top of each other
        let a = Rect::new(0.0, 5.0, 10.0, 0.0);
        let b = Rect::new(3.0, 5.0, 10.0, 0.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_center() {
        let r = Rect::new(200.0, 100.0, 100.0, 70.0);
        assert_eq!(r.center(), Vec2::new(250.0, 135.0));
        assert_eq!(r.right(), 300.0);
        assert_eq!(r.bottom(), 170.0);
    }

    fn any_rect() -> impl Strategy<Value = Rect> {
        (-500.0f32..500.0, -500.0f32..500.0, 0.0f32..300.0, 0.0f32..300.0)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(a in any_rect(), b in any_rect()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn zero_width_rects_never_overlap(x1 in -500.0f32..500.0, y1 in -500.0f32..500.0, h1 in 0.0f32..300.0,
                                          x2 in -500.0f32..500.0, y2 in -500.0f32..500.0, h2 in 0.0f32..300.0) {
            let a = Rect::new(x1, y1, 0.0, h1);
            let b = Rect::new(x2, y2, 0.0, h2);
            prop_assert!(!a.overlaps(&b));
        }

        #[test]
        fn zero_height_rects_never_overlap(x1 in -500.0f32..500.0, y1 in -500.0f32..500.0, w1 in 0.0f32..300.0,
                                           x2 in -500.0f32..500.0, y2 in -500.0f32..500.0, w2 in 0.0f32..300.0) {
            let a = Rect::new(x1, y1, w1, 0.0);
            let b = Rect::new(x2, y2, w2, 0.0);
            prop_assert!(!a.overlaps(&b));
        }

        #[test]
        fn adjacent_never_overlaps(a in any_rect(), w in 0.0f32..300.0, h in 0.0f32..300.0) {
            let right_neighbour = Rect::new(a.x + a.w, a.y, w, h);
            let below_neighbour = Rect::new(a.x, a.y + a.h, w, h);
            prop_assert!(!a.overlaps(&right_neighbour));
            prop_assert!(!a.overlaps(&below_neighbour));
        }
    }
}
