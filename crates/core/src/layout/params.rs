//! Per-line layout parameters.
//!
//! Contains `LineBoundingBox`, the vertical geometry and indentation the
//! pagination driver hands over for each candidate line.

use serde::{Deserialize, Serialize};

/// Default line height when the caller does not measure one.
pub const DEFAULT_LINE_HEIGHT: f64 = 15.6;

/// Geometry of one candidate line.
///
/// Everything except `line_height` defaults to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineBoundingBox {
    /// Full height of the line including spacing.
    pub line_height: f64,

    /// Offset of the line's top edge from the top of the column.
    pub line_top: f64,

    /// Height of the tallest content run on the line.
    pub content_height: f64,

    /// Left indentation. Behaves exactly like an obstruction at the
    /// column's left edge.
    pub padding_left: f64,

    /// Right indentation. Behaves exactly like an obstruction at the
    /// column's right edge.
    pub padding_right: f64,

    pub padding_top: f64,
    pub padding_bottom: f64,

    /// Paragraph space-above applied to the first line.
    pub margin_top: f64,

    /// Line spacing applied below this line.
    pub space_below_apply: f64,
}

impl Default for LineBoundingBox {
    fn default() -> Self {
        Self {
            line_height: DEFAULT_LINE_HEIGHT,
            line_top: 0.0,
            content_height: 0.0,
            padding_left: 0.0,
            padding_right: 0.0,
            padding_top: 0.0,
            padding_bottom: 0.0,
            margin_top: 0.0,
            space_below_apply: 0.0,
        }
    }
}

impl LineBoundingBox {
    /// Creates a line box with the given band and default everything else.
    pub fn new(line_top: f64, line_height: f64) -> Self {
        Self {
            line_top,
            line_height,
            ..Self::default()
        }
    }

    pub fn with_padding(mut self, left: f64, right: f64) -> Self {
        self.padding_left = left;
        self.padding_right = right;
        self
    }

    pub fn band(&self) -> LineBand {
        LineBand::new(self.line_top, self.line_height)
    }
}

/// The vertical extent `[top, top + height)` of a line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineBand {
    pub top: f64,
    pub height: f64,
}

impl LineBand {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Whether the vertical span `[top, bottom)` shares any extent with
    /// the band.
    pub fn overlaps(&self, top: f64, bottom: f64) -> bool {
        top < self.bottom() && bottom > self.top
    }
}
