//! Error types for the flowline layout library.
//!
//! Layout itself never fails; these errors only surface at the checked
//! boundaries (scene decoding and validation, registries).

use thiserror::Error;

/// Primary error type for flowline operations.
#[derive(Error, Debug)]
pub enum FlowError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("scene decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid column width: {0}")]
    InvalidColumnWidth(f64),

    #[error("line {index} has non-positive height {height}")]
    InvalidLineHeight { index: usize, height: f64 },

    #[error("drawing {0} has a polygon outline but no start point")]
    MissingPolygonStart(String),

    #[error("capability already registered: {0}")]
    DuplicateCapability(String),

    #[error("block anchor already exists: {0}")]
    DuplicateBlock(String),
}

/// Result type alias using FlowError.
pub type Result<T> = std::result::Result<T, FlowError>;
