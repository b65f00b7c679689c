//! Block anchors: which lines belong to which block, and where the block
//! starts.
//!
//! The table is appended to while lines are created and read by features
//! such as scroll-to-block. It expects a single writer.

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::line::Line;
use crate::error::{FlowError, Result};

/// Position of one line inside its block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnchorLine {
    pub line_index: usize,
    pub top: f64,
    pub line_height: f64,
}

impl From<&Line> for AnchorLine {
    fn from(line: &Line) -> Self {
        Self {
            line_index: line.line_index,
            top: line.top,
            line_height: line.line_height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockAnchor {
    pub block_id: SmolStr,
    /// Top offset of the block, fixed by its first line.
    pub top: f64,
    pub elements: Vec<AnchorLine>,
}

/// Block anchors keyed by block id, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockAnchors {
    anchors: IndexMap<SmolStr, BlockAnchor>,
}

impl BlockAnchors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `line` under `block_id`, creating the anchor at `top` if the
    /// block has none yet.
    pub fn create_and_update(&mut self, block_id: &str, line: &Line, top: f64) {
        match self.anchors.entry(SmolStr::new(block_id)) {
            Entry::Occupied(mut entry) => entry.get_mut().elements.push(line.into()),
            Entry::Vacant(entry) => {
                let block_id = entry.key().clone();
                entry.insert(BlockAnchor {
                    block_id,
                    top,
                    elements: vec![line.into()],
                });
            }
        }
    }

    /// Creates an empty anchor, failing if the block already has one.
    pub fn insert_new(&mut self, block_id: &str, top: f64) -> Result<&mut BlockAnchor> {
        match self.anchors.entry(SmolStr::new(block_id)) {
            Entry::Occupied(_) => Err(FlowError::DuplicateBlock(block_id.to_string())),
            Entry::Vacant(entry) => {
                let block_id = entry.key().clone();
                Ok(entry.insert(BlockAnchor {
                    block_id,
                    top,
                    elements: Vec::new(),
                }))
            }
        }
    }

    pub fn get(&self, block_id: &str) -> Option<&BlockAnchor> {
        self.anchors.get(block_id)
    }

    /// Top offset of a block, e.g. to scroll it into view.
    pub fn block_top(&self, block_id: &str) -> Option<f64> {
        self.get(block_id).map(|anchor| anchor.top)
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BlockAnchor> {
        self.anchors.values()
    }
}

/// Records `line` in `anchors` when the caller keeps an anchor table.
pub fn create_and_update_block_anchor(
    block_id: &str,
    line: &Line,
    top: f64,
    anchors: Option<&mut BlockAnchors>,
) {
    if let Some(anchors) = anchors {
        anchors.create_and_update(block_id, line, top);
    }
}
