//! Axis-aligned rectangle geometry for paddles and ball
//!
//! Screen space: origin at the top-left, +y points down. A rectangle is
//! defined by its top-left `position` and its `size`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Rotate a vector about the origin by `angle` radians
///
/// No domain restriction on `angle`.
#[inline]
pub fn rotated(v: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect2 {
    /// Top-left corner
    pub position: Vec2,
    pub size: Vec2,
}

impl Rect2 {
    pub const fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    /// Bottom-right corner
    #[inline]
    pub fn end(&self) -> Vec2 {
        self.position + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    /// Overlap test with borders included: rectangles that only touch
    /// along an edge or a corner still intersect.
    pub fn intersects(&self, other: &Rect2) -> bool {
        let (a_end, b_end) = (self.end(), other.end());

        self.position.x <= b_end.x
            && other.position.x <= a_end.x
            && self.position.y <= b_end.y
            && other.position.y <= a_end.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_rotated_quarter_turns() {
        let v = Vec2::new(1.0, 0.0);
        assert!(approx(rotated(v, FRAC_PI_2), Vec2::new(0.0, 1.0)));
        assert!(approx(rotated(v, PI), Vec2::new(-1.0, 0.0)));
        assert!(approx(rotated(v, -FRAC_PI_2), Vec2::new(0.0, -1.0)));
    }

    #[test]
    fn test_rotated_zero_is_identity() {
        let v = Vec2::new(-3.5, 2.25);
        assert_eq!(rotated(v, 0.0), v);
    }

    #[test]
    fn test_rotated_outside_pi_range() {
        let v = Vec2::new(2.0, 1.0);
        assert!((rotated(v, TAU + 0.3) - rotated(v, 0.3)).length() < 1e-4);
        assert!((rotated(v, 0.7).length() - v.length()).abs() < 1e-5);
    }

    #[test]
    fn test_intersects_overlap() {
        let a = Rect2::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect2::new(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_intersects_touching_edges_counts() {
        let a = Rect2::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        // Shares the x = 10 edge
        let right = Rect2::new(Vec2::new(10.0, 2.0), Vec2::new(5.0, 5.0));
        // Shares only the (10, 10) corner
        let corner = Rect2::new(Vec2::new(10.0, 10.0), Vec2::new(5.0, 5.0));
        assert!(a.intersects(&right));
        assert!(a.intersects(&corner));
    }

    #[test]
    fn test_intersects_separated() {
        let a = Rect2::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let apart_x = Rect2::new(Vec2::new(10.01, 0.0), Vec2::new(5.0, 5.0));
        let apart_y = Rect2::new(Vec2::new(0.0, -5.5), Vec2::new(5.0, 5.0));
        assert!(!a.intersects(&apart_x));
        assert!(!a.intersects(&apart_y));
    }

    #[test]
    fn test_end_and_center() {
        let r = Rect2::new(Vec2::new(100.0, 360.0), Vec2::new(25.0, 100.0));
        assert_eq!(r.end(), Vec2::new(125.0, 460.0));
        assert_eq!(r.center(), Vec2::new(112.5, 410.0));
    }
}
