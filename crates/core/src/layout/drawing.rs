//! Floating objects as seen by line layout.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::geometry::{BoundingBox, Vector2};

/// How text relates spatially to a floating object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WrapLayout {
    /// Object floats above or below the text and never affects flow.
    None,
    /// Text wraps around the object's rectangular envelope.
    Square,
    /// Text wraps tightly around the object's true outline.
    Tight,
    /// Like tight, text may also flow into open regions of the outline.
    Through,
    /// Lines never share vertical extent with the object.
    TopAndBottom,
    /// Text wraps around an explicit outline.
    Polygon,
}

/// Which side(s) of an object keep text flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WrapSide {
    #[default]
    Both,
    Left,
    Right,
    /// Whichever side has the larger free gap in the column.
    Largest,
}

/// Wrap policy and outline of a drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingOrigin {
    pub layout_type: WrapLayout,

    #[serde(default)]
    pub wrap_text: WrapSide,

    #[serde(default)]
    pub dist_left: f64,
    #[serde(default)]
    pub dist_right: f64,
    #[serde(default)]
    pub dist_top: f64,
    #[serde(default)]
    pub dist_bottom: f64,

    /// First outline vertex, relative to the drawing's position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Vector2>,

    /// Remaining outline vertices, relative to the drawing's position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_to: Option<Vec<Vector2>>,
}

impl DrawingOrigin {
    pub fn new(layout_type: WrapLayout) -> Self {
        Self {
            layout_type,
            wrap_text: WrapSide::Both,
            dist_left: 0.0,
            dist_right: 0.0,
            dist_top: 0.0,
            dist_bottom: 0.0,
            start: None,
            line_to: None,
        }
    }

    pub fn with_wrap_text(mut self, side: WrapSide) -> Self {
        self.wrap_text = side;
        self
    }

    pub fn with_distances(mut self, left: f64, right: f64, top: f64, bottom: f64) -> Self {
        self.dist_left = left;
        self.dist_right = right;
        self.dist_top = top;
        self.dist_bottom = bottom;
        self
    }

    pub fn with_outline(mut self, start: Vector2, line_to: Vec<Vector2>) -> Self {
        self.start = Some(start);
        self.line_to = Some(line_to);
        self
    }
}

/// A positioned floating object (image, shape).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drawing {
    #[serde(default)]
    pub id: SmolStr,

    /// Absolute top within the column.
    pub top: f64,
    /// Absolute left within the column.
    pub left: f64,
    pub width: f64,
    pub height: f64,

    /// Rotation in radians, 0 when unrotated.
    #[serde(default)]
    pub angle: f64,

    pub origin: DrawingOrigin,
}

impl Drawing {
    pub fn new(id: impl Into<SmolStr>, rect: BoundingBox, origin: DrawingOrigin) -> Self {
        Self {
            id: id.into(),
            top: rect.top,
            left: rect.left,
            width: rect.width,
            height: rect.height,
            angle: 0.0,
            origin,
        }
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    pub fn rect(&self) -> BoundingBox {
        BoundingBox::new(self.left, self.top, self.width, self.height)
    }

    pub fn layout_type(&self) -> WrapLayout {
        self.origin.layout_type
    }

    /// Absolute polygon outline: start point followed by every listed
    /// vertex, translated to the drawing's position.
    ///
    /// `None` when the drawing has no listed outline. A missing start point
    /// defaults to the drawing's origin.
    pub fn outline(&self) -> Option<Vec<Vector2>> {
        let line_to = self.origin.line_to.as_ref()?;
        let offset = Vector2::new(self.left, self.top);
        let start = self.origin.start.unwrap_or(Vector2::ZERO);
        let mut points = Vec::with_capacity(line_to.len() + 1);
        points.push(start + offset);
        points.extend(line_to.iter().map(|&p| p + offset));
        Some(points)
    }
}

/// Drawings keyed by id, iterated in insertion order.
pub type DrawingMap = IndexMap<SmolStr, Drawing>;

/// Builds a `DrawingMap` keyed by each drawing's id.
pub fn drawing_map(drawings: impl IntoIterator<Item = Drawing>) -> DrawingMap {
    drawings.into_iter().map(|d| (d.id.clone(), d)).collect()
}

/// Read-only drawing sets that may affect one line.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineDrawings<'a> {
    pub headers: Option<&'a DrawingMap>,
    pub footers: Option<&'a DrawingMap>,
    /// Drawings anchored in the page body.
    pub paragraph: Option<&'a DrawingMap>,
}

impl<'a> LineDrawings<'a> {
    pub fn new(
        headers: Option<&'a DrawingMap>,
        footers: Option<&'a DrawingMap>,
        paragraph: Option<&'a DrawingMap>,
    ) -> Self {
        Self {
            headers,
            footers,
            paragraph,
        }
    }

    /// Headers, then footers, then paragraph drawings.
    pub fn iter(self) -> impl Iterator<Item = &'a Drawing> + 'a {
        [self.headers, self.footers, self.paragraph]
            .into_iter()
            .flatten()
            .flat_map(|map| map.values())
    }
}
