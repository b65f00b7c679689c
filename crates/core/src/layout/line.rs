//! Line assembly.
//!
//! `create_skeleton_line` turns a candidate line's geometry and the drawing
//! sets that may intrude on it into a `Line` whose divides are the free
//! regions left for content. The remaining helpers are called by content
//! shaping once runs are measured.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use tracing::debug;

use super::divide::{Divide, Span, build_divides};
use super::drawing::LineDrawings;
use super::params::{LineBand, LineBoundingBox};
use super::split::{calculate_split, line_top_with_wrap_top_bottom};

/// Kind of block a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineType {
    #[default]
    Paragraph,
    Block,
}

/// One visual text line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub block_id: SmolStr,
    #[serde(rename = "type")]
    pub line_type: LineType,
    pub divides: Vec<Divide>,
    pub line_height: f64,
    pub content_height: f64,
    pub top: f64,
    /// Ascent used for baseline alignment, set by content shaping.
    pub asc: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
    pub margin_top: f64,
    /// Decided once the following paragraph is known.
    pub margin_bottom: f64,
    pub space_below_apply: f64,
    pub st: i64,
    pub ed: i64,
    pub line_index: usize,
    pub paragraph_start: bool,
}

impl Line {
    fn empty(line_type: LineType, block_id: SmolStr) -> Self {
        Self {
            block_id,
            line_type,
            divides: Vec::new(),
            line_height: 0.0,
            content_height: 0.0,
            top: 0.0,
            asc: 0.0,
            padding_top: 0.0,
            padding_bottom: 0.0,
            margin_top: 0.0,
            margin_bottom: 0.0,
            space_below_apply: 0.0,
            st: -1,
            ed: -1,
            line_index: 0,
            paragraph_start: false,
        }
    }

    /// Number of divides the line was split into.
    pub fn divide_len(&self) -> usize {
        self.divides.len()
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.line_height
    }

    /// Whether no content has been placed on the line yet.
    pub fn is_empty(&self) -> bool {
        self.divides.iter().all(Divide::is_empty)
    }
}

/// Whether a line opens its paragraph.
pub fn is_paragraph_start(element_index: usize, is_first_span: bool) -> bool {
    element_index == 0 && is_first_span
}

/// Builds a line and splits it around every drawing in `drawings`.
///
/// `margin_bottom` is left at zero; see [`set_line_margin_bottom`].
#[allow(clippy::too_many_arguments)]
pub fn create_skeleton_line(
    block_id: impl Into<SmolStr>,
    line_type: LineType,
    line_bounding_box: &LineBoundingBox,
    column_width: f64,
    line_index: usize,
    element_index: usize,
    is_first_span: bool,
    drawings: LineDrawings<'_>,
) -> Line {
    let lbb = line_bounding_box;
    let mut line = Line::empty(line_type, block_id.into());
    line.line_index = line_index;
    line.paragraph_start = is_paragraph_start(element_index, is_first_span);
    line.content_height = lbb.content_height;
    line.top = lbb.line_top;
    line.line_height = lbb.line_height;
    line.padding_top = lbb.padding_top;
    line.padding_bottom = lbb.padding_bottom;
    line.margin_top = lbb.margin_top;
    line.space_below_apply = lbb.space_below_apply;

    line.divides = calculate_divides_by_drawings(
        lbb.band(),
        column_width,
        lbb.padding_left,
        lbb.padding_right,
        drawings,
    );
    for divide in &mut line.divides {
        divide.parent = Some(line_index);
    }

    if line.divides.is_empty() {
        debug!(
            block = %line.block_id,
            line_index,
            top = line.top,
            "line fully obstructed"
        );
    }
    line
}

/// Divides of one line band after indentation and drawing obstructions.
pub fn calculate_divides_by_drawings(
    band: LineBand,
    column_width: f64,
    padding_left: f64,
    padding_right: f64,
    drawings: LineDrawings<'_>,
) -> Vec<Divide> {
    let splits = drawings
        .iter()
        .filter_map(|drawing| calculate_split(drawing, band, column_width));
    build_divides(column_width, padding_left, padding_right, splits)
}

/// Lowest top a line may take so that it clears every top-and-bottom
/// drawing it would otherwise overlap.
///
/// Header, footer and page drawings are all considered. Returns `line_top`
/// unchanged when none applies.
pub fn calculate_line_top_by_drawings(
    line_height: f64,
    line_top: f64,
    drawings: LineDrawings<'_>,
) -> f64 {
    let band = LineBand::new(line_top, line_height);
    drawings
        .iter()
        .filter_map(|drawing| line_top_with_wrap_top_bottom(drawing, band))
        .fold(line_top, f64::max)
}

pub fn set_divide_full_state(divide: &mut Divide, state: bool) {
    divide.is_full = state;
}

pub fn set_line_margin_bottom(line: &mut Line, margin_bottom: f64) {
    line.margin_bottom = margin_bottom;
}

/// Appends measured runs to the divide at `divide_index` of `line`.
///
/// When these are the first runs placed in the line's first divide and the
/// leading run is a single blank, that blank is collapsed to zero width and
/// every following run shifts left by its former width.
///
/// Returns `false` and leaves the line untouched when it has no divide at
/// `divide_index`, as on a fully obstructed line.
pub fn add_spans_to_divide(line: &mut Line, divide_index: usize, mut spans: Vec<Span>) -> bool {
    let line_index = line.line_index;
    let Some(divide) = line.divides.get_mut(divide_index) else {
        debug!(line_index, divide_index, "no divide to place spans in");
        return false;
    };
    let leads_line = divide_index == 0 && divide.is_empty();
    if leads_line {
        if let Some((first, rest)) = spans.split_first_mut() {
            if first.is_blank_space() {
                let width = first.width;
                first.width = 0.0;
                for span in rest {
                    span.left -= width;
                }
            }
        }
    }
    divide.push_spans(spans);
    true
}
