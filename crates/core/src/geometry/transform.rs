//! Affine transforms.
//!
//! A transform is stored as the 6-element matrix (a, b, c, d, e, f) and maps
//! point (x, y) to (ax + cy + e, bx + dy + f).

use super::bbox::{BoundingBox, RotatedRect};
use super::vector::Vector2;

/// A 6-element affine transformation matrix (a, b, c, d, e, f).
pub type Matrix = (f64, f64, f64, f64, f64, f64);

/// Identity transformation matrix.
pub const MATRIX_IDENTITY: Matrix = (1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

/// Multiplies two matrices in row-vector order: the result applies m1
/// first, then m0.
pub fn mult_matrix(m1: Matrix, m0: Matrix) -> Matrix {
    let (a1, b1, c1, d1, e1, f1) = m1;
    let (a0, b0, c0, d0, e0, f0) = m0;
    (
        a0 * a1 + c0 * b1,
        b0 * a1 + d0 * b1,
        a0 * c1 + c0 * d1,
        b0 * c1 + d0 * d1,
        a0 * e1 + c0 * f1 + e0,
        b0 * e1 + d0 * f1 + f0,
    )
}

/// Composable 2D affine transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    m: Matrix,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub const fn identity() -> Self {
        Self { m: MATRIX_IDENTITY }
    }

    /// Rotates about the origin by `angle` radians, applied after the
    /// current transform.
    pub fn rotate(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        self.then((cos, sin, -sin, cos, 0.0, 0.0))
    }

    fn then(self, next: Matrix) -> Self {
        Self {
            m: mult_matrix(self.m, next),
        }
    }

    /// Applies the transform to a point.
    pub fn apply_point(&self, v: Vector2) -> Vector2 {
        let (a, b, c, d, e, f) = self.m;
        Vector2::new(a * v.x + c * v.y + e, b * v.x + d * v.y + f)
    }

    /// Applies the transform to every point and returns the transformed
    /// points together with their axis-aligned envelope.
    ///
    /// An empty input yields an empty envelope at the origin.
    pub fn make_bounding_box_from_points(&self, points: &[Vector2]) -> RotatedRect {
        let points: Vec<Vector2> = points.iter().map(|&p| self.apply_point(p)).collect();
        let bounding_box = BoundingBox::enclosing(&points);
        RotatedRect {
            points,
            bounding_box,
        }
    }
}
