//! 2D geometry primitives used by line layout.
//!
//! - `Vector2`: an immutable point / vector value
//! - `Transform`: affine transform (rotation is what layout exercises)
//! - `Path2`: open polyline with segment intersection
//! - `rotate_rect`: rotated corners plus axis-aligned envelope

pub mod bbox;
pub mod path;
pub mod transform;
pub mod vector;

pub use bbox::{BoundingBox, RotatedRect, rotate_rect};
pub use path::Path2;
pub use transform::Transform;
pub use vector::Vector2;

/// Small epsilon for floating-point comparisons.
pub const EPSILON: f64 = 1e-9;

/// Compares two floats for approximate equality.
#[inline]
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}
