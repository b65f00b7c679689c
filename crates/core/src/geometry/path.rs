//! Polyline intersection.

use smallvec::SmallVec;

use super::vector::Vector2;

/// Crossing points found between two polylines.
pub type CrossPoints = SmallVec<[Vector2; 4]>;

/// An open polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct Path2 {
    points: Vec<Vector2>,
}

impl Path2 {
    pub fn new(points: Vec<Vector2>) -> Self {
        Self { points }
    }

    /// Path that also walks the closing segment back to its first point.
    pub fn closed(mut points: Vec<Vector2>) -> Self {
        if points.len() > 2 && points.first() != points.last() {
            let first = points[0];
            points.push(first);
        }
        Self { points }
    }

    pub fn points(&self) -> &[Vector2] {
        &self.points
    }

    /// Every point where a segment of this path properly crosses a segment
    /// of `other`, in encounter order.
    ///
    /// Returns `None` when either side has fewer than two points. Touching
    /// and collinear segments do not count as crossings.
    pub fn intersection(&self, other: &[Vector2]) -> Option<CrossPoints> {
        intersect(&self.points, other)
    }
}

/// Segment-by-segment crossing points of two polylines.
///
/// See [`Path2::intersection`].
pub fn intersect(a: &[Vector2], b: &[Vector2]) -> Option<CrossPoints> {
    if a.len() < 2 || b.len() < 2 {
        return None;
    }

    let mut cross = CrossPoints::new();
    for seg_a in a.windows(2) {
        for seg_b in b.windows(2) {
            if let Some(p) = segment_crossing(seg_a[0], seg_a[1], seg_b[0], seg_b[1]) {
                cross.push(p);
            }
        }
    }
    Some(cross)
}

/// Proper crossing of segments ab and cd via orientation tests.
fn segment_crossing(a: Vector2, b: Vector2, c: Vector2, d: Vector2) -> Option<Vector2> {
    // c and d must lie strictly on opposite sides of ab
    let area_abc = a.cross_area(b, c);
    let area_abd = a.cross_area(b, d);
    if area_abc * area_abd >= 0.0 {
        return None;
    }

    // a and b strictly on opposite sides of cd; area_cdb follows from the
    // three areas already known
    let area_cda = c.cross_area(d, a);
    let area_cdb = area_cda + area_abc - area_abd;
    if area_cda * area_cdb >= 0.0 {
        return None;
    }

    let t = area_cda / (area_abd - area_abc);
    Some(Vector2::new(a.x + t * (b.x - a.x), a.y + t * (b.y - a.y)))
}
