//! Axis-aligned rectangle primitive
//!
//! Screen convention throughout the crate: origin at the top-left, +y down.
//! `min` is therefore the top-left corner and `max` the bottom-right.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box in screen space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Build from a top-left corner and a size (paddle boxes)
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Build from a center point and a size (the ball's box)
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    /// Shrink the box by `by` on every side
    pub fn inset(&self, by: Vec2) -> Self {
        Self {
            min: self.min + by,
            max: self.max - by,
        }
    }

    /// Closed-interval AABB overlap test
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_center_size() {
        let r = Rect::from_center_size(Vec2::new(100.0, 50.0), Vec2::new(16.0, 16.0));
        assert_eq!(r.min, Vec2::new(92.0, 42.0));
        assert_eq!(r.max, Vec2::new(108.0, 58.0));
        assert_eq!(r.center(), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_overlaps() {
        let a = Rect::from_pos_size(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let b = Rect::from_pos_size(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        let c = Rect::from_pos_size(Vec2::new(20.0, 0.0), Vec2::new(10.0, 10.0));

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));

        // Touching edges count as overlap
        let d = Rect::from_pos_size(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(a.overlaps(&d));
    }

    #[test]
    fn test_inset() {
        let r = Rect::from_pos_size(Vec2::ZERO, Vec2::new(100.0, 60.0));
        let inner = r.inset(Vec2::new(8.0, 8.0));
        assert_eq!(inner.min, Vec2::new(8.0, 8.0));
        assert_eq!(inner.max, Vec2::new(92.0, 52.0));
        assert!(inner.contains(Vec2::new(50.0, 30.0)));
        assert!(!inner.contains(Vec2::new(4.0, 30.0)));
    }
}
