//! Reduction of obstruction intervals into free line regions.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::split::HorizontalInterval;

/// One measured content run placed on a line.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Span {
    /// Text of the run. A run without content is laid out as a blank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<SmolStr>,
    /// Offset of the run from the divide's left edge.
    pub left: f64,
    pub width: f64,
}

impl Span {
    pub fn new(content: impl Into<SmolStr>, left: f64, width: f64) -> Self {
        Self {
            content: Some(content.into()),
            left,
            width,
        }
    }

    /// Whether the run is a single blank space. Missing or empty content
    /// reads as a blank.
    pub fn is_blank_space(&self) -> bool {
        self.content
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(" ")
            == " "
    }
}

/// A contiguous region of a line not occupied by any floating object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Divide {
    pub left: f64,
    pub width: f64,
    /// Alignment offset inside the divide, set once content is measured.
    pub padding_left: f64,
    pub is_full: bool,
    pub st: i64,
    pub ed: i64,
    pub span_group: Vec<Span>,
    /// `line_index` of the owning line. Navigation only.
    #[serde(skip)]
    pub parent: Option<usize>,
}

impl Divide {
    pub fn new(left: f64, width: f64) -> Self {
        Self {
            left,
            width,
            padding_left: 0.0,
            is_full: false,
            st: 0,
            ed: 0,
            span_group: Vec::new(),
            parent: None,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn is_empty(&self) -> bool {
        self.span_group.is_empty()
    }

    /// Appends runs without any line-level adjustment.
    pub fn push_spans(&mut self, spans: impl IntoIterator<Item = Span>) {
        self.span_group.extend(spans);
    }
}

/// Divides of a column once indentation and all obstructions are removed.
///
/// Left and right indentation are seeded as obstructions at the column
/// edges before merging.
pub fn build_divides(
    column_width: f64,
    padding_left: f64,
    padding_right: f64,
    intervals: impl IntoIterator<Item = HorizontalInterval>,
) -> Vec<Divide> {
    let mut splits = vec![
        HorizontalInterval::new(0.0, padding_left),
        HorizontalInterval::new(column_width - padding_right, padding_right),
    ];
    splits.extend(intervals);
    free_regions(column_width, splits)
}

/// Sweeps intervals left to right and emits the gaps between them.
///
/// The result is sorted, non-overlapping, never has negative widths and
/// together with the intervals (clipped to the column) covers
/// `[0, column_width)`. A fully obstructed column yields no divides.
pub fn free_regions(column_width: f64, mut splits: Vec<HorizontalInterval>) -> Vec<Divide> {
    splits.sort_by(|a, b| {
        a.left
            .partial_cmp(&b.left)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut divides = Vec::new();
    let mut start = 0.0_f64;
    for split in &splits {
        if split.left > start {
            let width = (split.left - start).min(column_width - start);
            if width > 0.0 {
                divides.push(Divide::new(start, width));
            }
        }
        start = start.max(split.right());
    }

    if start < column_width {
        divides.push(Divide::new(start, column_width - start));
    }
    divides
}
