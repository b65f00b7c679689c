use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A 2D point (x, y).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Twice the signed area of the triangle (self, b, c).
    ///
    /// Positive when the points wind counter-clockwise in a y-up frame.
    #[inline]
    pub fn cross_area(self, b: Vector2, c: Vector2) -> f64 {
        (self.x - c.x) * (b.y - c.y) - (self.y - c.y) * (b.x - c.x)
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from(p: [f64; 2]) -> Self {
        Self::new(p[0], p[1])
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}
