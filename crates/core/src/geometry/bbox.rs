//! Rotated rectangles and their axis-aligned envelopes.

use serde::{Deserialize, Serialize};

use super::transform::Transform;
use super::vector::Vector2;

/// Axis-aligned rectangle in top-left origin coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Smallest rectangle containing all `points`.
    pub fn enclosing(points: &[Vector2]) -> Self {
        if points.is_empty() {
            return Self::default();
        }
        let (mut x0, mut y0) = (f64::INFINITY, f64::INFINITY);
        let (mut x1, mut y1) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in points {
            x0 = x0.min(p.x);
            y0 = y0.min(p.y);
            x1 = x1.max(p.x);
            y1 = y1.max(p.y);
        }
        Self::new(x0, y0, x1 - x0, y1 - y0)
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Transformed corner set plus its envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct RotatedRect {
    pub points: Vec<Vector2>,
    pub bounding_box: BoundingBox,
}

/// Rotates a rectangle's corners about the origin by `angle` radians.
///
/// Corners are emitted as top-left, bottom-left, top-right, bottom-right.
/// The exact quadrilateral feeds tight/through wrapping; the envelope feeds
/// square wrapping. An angle of zero takes the same path.
pub fn rotate_rect(angle: f64, left: f64, top: f64, width: f64, height: f64) -> RotatedRect {
    let transform = Transform::identity().rotate(angle);
    let corners = [
        Vector2::new(left, top),
        Vector2::new(left, top + height),
        Vector2::new(left + width, top),
        Vector2::new(left + width, top + height),
    ];
    transform.make_bounding_box_from_points(&corners)
}
