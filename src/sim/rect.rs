//! Axis-aligned rectangle geometry
//!
//! The sole collision primitive: world-space AABBs with a half-open overlap
//! test. Edge-adjacent rectangles do NOT overlap, which the pipe geometry
//! relies on to keep the score trigger distinct from the caps it touches.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle. Y grows downward, as on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Extent, non-negative per component
    pub size: Vec2,
}

impl Rect {
    /// Build a rect from corner and extent. Negative extents clamp to zero.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w.max(0.0), h.max(0.0)),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Overlap test, strict on all four sides: rectangles that merely share
    /// an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.bottom() > other.top()
            && self.top() < other.bottom()
            && self.right() > other.left()
            && self.left() < other.right()
    }

    /// Point containment, inclusive on all four edges. Used for UI
    /// hot/click testing, not by the simulation itself.
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_rects() {
        let a = Rect::new(0.0, 0.0, 32.0, 32.0);
        let b = Rect::new(16.0, 16.0, 32.0, 32.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));

        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_separated_rects() {
        let a = Rect::new(0.0, 0.0, 32.0, 32.0);
        let b = Rect::new(100.0, 100.0, 32.0, 32.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_contained_rect() {
        let large = Rect::new(0.0, 0.0, 100.0, 100.0);
        let small = Rect::new(25.0, 25.0, 50.0, 50.0);
        assert!(large.overlaps(&small));
        assert!(small.overlaps(&large));
    }

    #[test]
    fn test_degenerate_rect_never_overlaps_itself() {
        let line = Rect::new(5.0, 5.0, 0.0, 20.0);
        assert!(!line.overlaps(&line));
    }

    #[test]
    fn test_negative_extent_clamps() {
        let r = Rect::new(0.0, 0.0, -4.0, -9.0);
        assert_eq!(r.size, Vec2::ZERO);
    }

    #[test]
    fn test_contains_point_inclusive_edges() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(r.contains_point(Vec2::new(10.0, 10.0)));
        assert!(r.contains_point(Vec2::new(30.0, 30.0)));
        assert!(r.contains_point(Vec2::new(20.0, 10.0)));
        assert!(!r.contains_point(Vec2::new(9.9, 10.0)));
        assert!(!r.contains_point(Vec2::new(10.0, 30.1)));
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 0.0f32..100.0, ah in 0.0f32..100.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 0.0f32..100.0, bh in 0.0f32..100.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn self_overlap_iff_positive_area(
            x in -500.0f32..500.0, y in -500.0f32..500.0,
            w in 0.0f32..100.0, h in 0.0f32..100.0,
        ) {
            let r = Rect::new(x, y, w, h);
            prop_assert_eq!(r.overlaps(&r), w > 0.0 && h > 0.0);
        }
    }
}
