//! Resolution of one floating object into a horizontal obstruction.
//!
//! Given a drawing and the vertical band of a line, `calculate_split`
//! yields the interval of the line the drawing occupies, or `None` when
//! the drawing does not affect this line.

use itertools::{Itertools, MinMaxResult};
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::drawing::{Drawing, DrawingOrigin, WrapLayout, WrapSide};
use super::params::LineBand;
use crate::geometry::{BoundingBox, Path2, Transform, Vector2, rotate_rect};

/// Horizontal extent of a line blocked by one obstruction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalInterval {
    pub left: f64,
    pub width: f64,
}

impl HorizontalInterval {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Which side of an obstruction keeps text after the wrap-side rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WrapTextRuler {
    Both,
    /// Text stays left of the object; it blocks through the right edge.
    Left,
    /// Text stays right of the object; it blocks from the left edge.
    Right,
}

/// Interval contributed by `drawing` to the line occupying `band`.
///
/// Top-and-bottom drawings never narrow a line; they push it down instead
/// (see [`line_top_with_wrap_top_bottom`]).
pub fn calculate_split(
    drawing: &Drawing,
    band: LineBand,
    column_width: f64,
) -> Option<HorizontalInterval> {
    let origin = &drawing.origin;
    let split = match origin.layout_type {
        WrapLayout::None | WrapLayout::TopAndBottom => return None,
        WrapLayout::Polygon => {
            let mut points = drawing.outline()?;
            if drawing.angle != 0.0 {
                let transform = Transform::identity().rotate(drawing.angle);
                for p in points.iter_mut() {
                    *p = transform.apply_point(*p);
                }
            }
            cross_point_split(&points, band, column_width)
        }
        _ if drawing.angle == 0.0 => split_without_angle(drawing.rect(), band, column_width, origin),
        WrapLayout::Square => {
            let rotated = rotate_rect(
                drawing.angle,
                drawing.left,
                drawing.top,
                drawing.width,
                drawing.height,
            );
            split_without_angle(rotated.bounding_box, band, column_width, origin)
        }
        WrapLayout::Tight | WrapLayout::Through => {
            let rotated = rotate_rect(
                drawing.angle,
                drawing.left,
                drawing.top,
                drawing.width,
                drawing.height,
            );
            // corners come as tl, bl, tr, br; walk them as a ring
            let ring = match rotated.points.as_slice() {
                &[tl, bl, tr, br] => vec![tl, tr, br, bl],
                other => other.to_vec(),
            };
            cross_point_split(&ring, band, column_width)
        }
    };

    if let Some(s) = &split {
        trace!(
            drawing = %drawing.id,
            left = s.left,
            width = s.width,
            "drawing obstructs line"
        );
    }
    split
}

/// Interval for an axis-aligned rectangle under the drawing's wrap policy.
///
/// Vertical clearance is only applied for square wrapping. The horizontal
/// footprint is `left - dist_left` wide `width + dist_right`, then widened
/// to one column edge according to the wrap side.
pub fn split_without_angle(
    rect: BoundingBox,
    band: LineBand,
    column_width: f64,
    origin: &DrawingOrigin,
) -> Option<HorizontalInterval> {
    let (dist_top, dist_bottom) = if origin.layout_type == WrapLayout::Square {
        (origin.dist_top, origin.dist_bottom)
    } else {
        (0.0, 0.0)
    };
    let top = rect.top - dist_top;
    let height = rect.height + dist_bottom;
    if !band.overlaps(top, top + height) {
        return None;
    }

    let mut result_left = rect.left - origin.dist_left;
    let mut result_width = rect.width + origin.dist_right;
    match wrap_text_ruler(origin.wrap_text, result_left, result_width, column_width) {
        WrapTextRuler::Both => {}
        WrapTextRuler::Left => {
            result_width = column_width - result_left;
        }
        WrapTextRuler::Right => {
            result_left = 0.0;
            result_width = rect.left + rect.width + origin.dist_right;
        }
    }

    Some(HorizontalInterval::new(result_left, result_width))
}

/// Picks the side that keeps text; `Largest` prefers the right on ties.
pub(crate) fn wrap_text_ruler(
    side: WrapSide,
    result_left: f64,
    result_width: f64,
    column_width: f64,
) -> WrapTextRuler {
    match side {
        WrapSide::Both => WrapTextRuler::Both,
        WrapSide::Left => WrapTextRuler::Left,
        WrapSide::Right => WrapTextRuler::Right,
        WrapSide::Largest => {
            if result_left > column_width - result_left - result_width {
                WrapTextRuler::Left
            } else {
                WrapTextRuler::Right
            }
        }
    }
}

/// Interval of an outline clipped to the band.
///
/// The outline is treated as closed and tested against the band's top and
/// bottom lines, both spanning `[0, column_width]`. An outline crossing
/// neither line has no effect. Otherwise its extent is the span of every
/// outline vertex together with those crossings, so parts of the outline
/// beyond the column edges still count.
pub fn cross_point_split(
    points: &[Vector2],
    band: LineBand,
    column_width: f64,
) -> Option<HorizontalInterval> {
    let path = Path2::closed(points.to_vec());
    let top_line = [
        Vector2::new(0.0, band.top),
        Vector2::new(column_width, band.top),
    ];
    let bottom_line = [
        Vector2::new(0.0, band.bottom()),
        Vector2::new(column_width, band.bottom()),
    ];
    let cross_top = path.intersection(&top_line).unwrap_or_default();
    let cross_bottom = path.intersection(&bottom_line).unwrap_or_default();
    if cross_top.is_empty() && cross_bottom.is_empty() {
        return None;
    }

    let xs = path
        .points()
        .iter()
        .chain(&cross_top)
        .chain(&cross_bottom)
        .map(|p| p.x);

    match xs.minmax_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal)) {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(x) => Some(HorizontalInterval::new(x, 0.0)),
        MinMaxResult::MinMax(min, max) => Some(HorizontalInterval::new(min, max - min)),
    }
}

/// Bottom edge of a top-and-bottom drawing that vertically meets the band.
///
/// `None` for any other wrap layout or when the drawing's footprint, with
/// its top and bottom clearance, does not reach the band. Rotated drawings
/// use the envelope of their rotated corners.
pub fn line_top_with_wrap_top_bottom(drawing: &Drawing, band: LineBand) -> Option<f64> {
    let origin = &drawing.origin;
    if origin.layout_type != WrapLayout::TopAndBottom {
        return None;
    }

    let rect = if drawing.angle == 0.0 {
        drawing.rect()
    } else {
        rotate_rect(
            drawing.angle,
            drawing.left,
            drawing.top,
            drawing.width,
            drawing.height,
        )
        .bounding_box
    };

    let top = rect.top - origin.dist_top;
    let height = rect.height + origin.dist_bottom;
    if !band.overlaps(top, top + height) {
        return None;
    }
    Some(top + height)
}
