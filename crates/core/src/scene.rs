//! JSON scene description for driving line layout outside a paginator.
//!
//! A scene fixes a column width, the header, footer and page drawings, and
//! a list of candidate lines with explicit tops. Laying out a scene pushes
//! each line below any top-and-bottom drawing it meets and then splits it
//! around the remaining drawings. Candidate lines are independent of each
//! other.

use std::io::Read;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::error::{FlowError, Result};
use crate::layout::{
    BlockAnchors, Drawing, DrawingMap, Line, LineBoundingBox, LineDrawings, LineType,
    WrapLayout, calculate_line_top_by_drawings, create_skeleton_line, drawing_map,
};

/// A candidate line of a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneLine {
    pub block_id: SmolStr,
    #[serde(default)]
    pub line_type: LineType,
    #[serde(flatten)]
    pub bounding_box: LineBoundingBox,
    #[serde(default)]
    pub element_index: usize,
    #[serde(default)]
    pub is_first_span: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub column_width: f64,
    #[serde(default)]
    pub headers: Vec<Drawing>,
    #[serde(default)]
    pub footers: Vec<Drawing>,
    /// Drawings anchored in the page body.
    #[serde(default)]
    pub drawings: Vec<Drawing>,
    #[serde(default)]
    pub lines: Vec<SceneLine>,
}

/// Lines of a laid out scene and their block anchors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneLayout {
    pub lines: Vec<Line>,
    pub anchors: BlockAnchors,
}

struct SceneDrawings {
    headers: DrawingMap,
    footers: DrawingMap,
    page: DrawingMap,
}

impl SceneDrawings {
    fn as_line_drawings(&self) -> LineDrawings<'_> {
        LineDrawings::new(Some(&self.headers), Some(&self.footers), Some(&self.page))
    }
}

impl Scene {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Rejects the inputs layout leaves unchecked: a negative column width,
    /// a line without positive height, and a polygon outline without a
    /// start point.
    pub fn validate(&self) -> Result<()> {
        if self.column_width.is_nan() || self.column_width < 0.0 {
            return Err(FlowError::InvalidColumnWidth(self.column_width));
        }
        for (index, line) in self.lines.iter().enumerate() {
            let height = line.bounding_box.line_height;
            if height.is_nan() || height <= 0.0 {
                return Err(FlowError::InvalidLineHeight { index, height });
            }
        }
        let all_drawings = self
            .headers
            .iter()
            .chain(&self.footers)
            .chain(&self.drawings);
        for drawing in all_drawings {
            let origin = &drawing.origin;
            let has_outline = origin.line_to.as_ref().is_some_and(|pts| !pts.is_empty());
            if origin.layout_type == WrapLayout::Polygon && has_outline && origin.start.is_none() {
                return Err(FlowError::MissingPolygonStart(drawing.id.to_string()));
            }
        }
        Ok(())
    }

    fn drawing_maps(&self) -> SceneDrawings {
        SceneDrawings {
            headers: drawing_map(self.headers.iter().cloned()),
            footers: drawing_map(self.footers.iter().cloned()),
            page: drawing_map(self.drawings.iter().cloned()),
        }
    }

    fn layout_line(&self, drawings: LineDrawings<'_>, index: usize, line: &SceneLine) -> Line {
        let mut lbb = line.bounding_box.clone();
        lbb.line_top = calculate_line_top_by_drawings(lbb.line_height, lbb.line_top, drawings);
        create_skeleton_line(
            line.block_id.clone(),
            line.line_type,
            &lbb,
            self.column_width,
            index,
            line.element_index,
            line.is_first_span,
            drawings,
        )
    }

    /// Lays out every candidate line in order.
    pub fn layout(&self) -> SceneLayout {
        let maps = self.drawing_maps();
        let drawings = maps.as_line_drawings();
        let lines = self
            .lines
            .iter()
            .enumerate()
            .map(|(index, line)| self.layout_line(drawings, index, line))
            .collect();
        Self::with_anchors(lines)
    }

    /// Same as [`Scene::layout`], with lines computed on the rayon pool.
    pub fn layout_parallel(&self) -> SceneLayout {
        let maps = self.drawing_maps();
        let drawings = maps.as_line_drawings();
        let lines = self
            .lines
            .par_iter()
            .enumerate()
            .map(|(index, line)| self.layout_line(drawings, index, line))
            .collect();
        Self::with_anchors(lines)
    }

    fn with_anchors(lines: Vec<Line>) -> SceneLayout {
        let mut anchors = BlockAnchors::new();
        for line in &lines {
            anchors.create_and_update(&line.block_id, line, line.top);
        }
        SceneLayout { lines, anchors }
    }
}
