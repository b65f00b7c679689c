//! flowline - line layout around floating objects.
//!
//! For each text line of a paragraph this crate computes how the line's
//! horizontal span is split into divides so that text flows around
//! images and shapes, including rotated objects and polygon wrap
//! outlines.

pub mod custom;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod scene;

pub use geometry::{BoundingBox, Path2, Transform, Vector2};
pub use layout::{
    BlockAnchor, BlockAnchors, Divide, Drawing, DrawingMap, DrawingOrigin, Line,
    LineBoundingBox, LineDrawings, LineType, Span, WrapLayout, WrapSide,
};

pub use error::{FlowError, Result};
