//! Axis-aligned rectangle geometry
//!
//! Everything solid in the arena is a box: actor bounds, platform segments,
//! menu buttons. Anchored at the top-left corner; y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left anchored)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Build from a center point and full size
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            x: center.x - size.x / 2.0,
            y: center.y - size.y / 2.0,
            w: size.x,
            h: size.y,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Overlap test; rectangles that merely touch do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Point containment; the right/bottom edges are exclusive
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_intersects_touching_edges_miss() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));

        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_intersects_disjoint() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(30.0, 30.0, 5.0, 5.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_contains_point() {
        let r = Rect::new(250.0, 220.0, 300.0, 60.0);
        assert!(r.contains_point(Vec2::new(400.0, 250.0)));
        assert!(r.contains_point(Vec2::new(250.0, 220.0)));
        // Right/bottom edges are exclusive
        assert!(!r.contains_point(Vec2::new(550.0, 250.0)));
        assert!(!r.contains_point(Vec2::new(400.0, 280.0)));
        assert!(!r.contains_point(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_from_center_round_trips() {
        let r = Rect::from_center(Vec2::new(100.0, 50.0), Vec2::new(24.0, 30.0));
        assert_eq!(r.x, 88.0);
        assert_eq!(r.y, 35.0);
        assert_eq!(r.center(), Vec2::new(100.0, 50.0));
        assert_eq!(r.bottom(), 65.0);
    }
}
