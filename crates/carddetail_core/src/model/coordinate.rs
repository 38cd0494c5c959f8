//! Drag-and-drop coordinates and move intents.
//!
//! # Invariants
//! - `row` is `Some` only for blocks inside a multi-block row.
//! - `column` is the 0-based position in the immediate container and may
//!   be negative when a caller drops before the first column.

use crate::model::content_order::BlockId;
use serde::{Deserialize, Serialize};

/// Position of a block as reported by the drag source or drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Index of the multi-block row, `None` when not in such a row.
    pub row: Option<usize>,
    /// Position inside the row, or inside the top-level sequence.
    pub column: i64,
}

impl Coordinate {
    /// Coordinate of a block that lives in a multi-block row.
    pub fn in_row(row: usize, column: i64) -> Self {
        Self {
            row: Some(row),
            column,
        }
    }

    /// Coordinate of a block outside any multi-block row.
    pub fn top_level(column: i64) -> Self {
        Self { row: None, column }
    }

    /// Normalizes a legacy numeric row sentinel.
    ///
    /// Absent or negative rows mean "not in a row". Row `0` is a real row.
    pub fn from_raw(column: i64, raw_row: Option<i64>) -> Self {
        let row = raw_row
            .filter(|value| *value >= 0)
            .and_then(|value| usize::try_from(value).ok());
        Self { row, column }
    }

    /// Returns whether this coordinate points inside a multi-block row.
    pub fn is_in_row(&self) -> bool {
        self.row.is_some()
    }
}

/// Semantic relation requested by a drop gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MoveIntent {
    /// New row directly above the destination's row.
    AboveRow,
    /// New row directly below the destination's row.
    BelowRow,
    /// Join the destination's row next to the destination.
    MergeIntoRow,
}

impl MoveIntent {
    /// Stable event/log name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AboveRow => "above_row",
            Self::BelowRow => "below_row",
            Self::MergeIntoRow => "merge_into_row",
        }
    }
}

/// A block id paired with where it was grabbed or dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedBlock {
    pub block_id: BlockId,
    pub coordinate: Coordinate,
}

impl PlacedBlock {
    pub fn new(block_id: impl Into<BlockId>, coordinate: Coordinate) -> Self {
        Self {
            block_id: block_id.into(),
            coordinate,
        }
    }
}

/// Complete description of one drop gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    pub source: PlacedBlock,
    pub destination: PlacedBlock,
    pub intent: MoveIntent,
}

impl MoveRequest {
    pub fn new(source: PlacedBlock, destination: PlacedBlock, intent: MoveIntent) -> Self {
        Self {
            source,
            destination,
            intent,
        }
    }

    /// Returns whether the gesture drops a block onto itself.
    pub fn is_self_move(&self) -> bool {
        self.source.block_id == self.destination.block_id
    }
}
