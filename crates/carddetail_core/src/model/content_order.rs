//! Card content-order model.
//!
//! # Responsibility
//! - Represent the flat-or-grouped ordering of content blocks on a card.
//! - Keep the persisted JSON shape (`"id"` or `["id", ...]` per entry)
//!   lossless across read/write.
//!
//! # Invariants
//! - Every block id appears in exactly one slot, exactly once.
//! - Groups written by core are never empty.
//! - Deserialization is lenient; `validate()` reports violations.

use crate::model::coordinate::Coordinate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque content block identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    /// Wraps a raw block id string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw id string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for BlockId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for BlockId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One position in a content order.
///
/// Serialized untagged so that a `Single` is a bare string and a `Group`
/// is an array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Slot {
    /// One block on its own row.
    Single(BlockId),
    /// Blocks laid out side by side in one visual row.
    Group(Vec<BlockId>),
}

impl Slot {
    /// Builds a group slot from anything that yields block ids.
    pub fn group<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<BlockId>,
    {
        Self::Group(ids.into_iter().map(Into::into).collect())
    }

    /// Returns the position of `id` inside this slot.
    ///
    /// A single slot reports column `0` when it holds `id`.
    pub fn position_of(&self, id: &BlockId) -> Option<usize> {
        match self {
            Self::Single(block) => (block == id).then_some(0),
            Self::Group(blocks) => blocks.iter().position(|block| block == id),
        }
    }

    /// Returns the block ids held by this slot, in order.
    pub fn block_ids(&self) -> &[BlockId] {
        match self {
            Self::Single(block) => std::slice::from_ref(block),
            Self::Group(blocks) => blocks.as_slice(),
        }
    }

    /// Returns whether this slot is a multi-block row entry.
    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }
}

impl From<&str> for Slot {
    fn from(value: &str) -> Self {
        Self::Single(BlockId::from(value))
    }
}

impl From<BlockId> for Slot {
    fn from(value: BlockId) -> Self {
        Self::Single(value)
    }
}

/// Invariant violations found by [`ContentOrder::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentOrderError {
    /// The same block id appears more than once.
    DuplicateBlock(BlockId),
    /// A group slot at the given index has no members.
    EmptyGroup(usize),
}

impl Display for ContentOrderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateBlock(id) => write!(f, "block appears more than once: {id}"),
            Self::EmptyGroup(index) => write!(f, "group slot {index} is empty"),
        }
    }
}

impl Error for ContentOrderError {}

/// Ordered sequence of slots stored in a card's `contentOrder` field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentOrder {
    slots: Vec<Slot>,
}

impl ContentOrder {
    /// Creates an order from slots as-is.
    pub fn new(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    /// Returns slots in display order.
    pub fn slots(&self) -> &[Slot] {
        self.slots.as_slice()
    }

    /// Number of top-level slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates all block ids in row-major order.
    pub fn block_ids(&self) -> impl Iterator<Item = &BlockId> {
        self.slots.iter().flat_map(|slot| slot.block_ids().iter())
    }

    /// Returns `(slot_index, column_in_slot)` of the first occurrence of `id`.
    pub fn locate(&self, id: &BlockId) -> Option<(usize, usize)> {
        self.slots
            .iter()
            .enumerate()
            .find_map(|(index, slot)| slot.position_of(id).map(|column| (index, column)))
    }

    /// Derives the drag-and-drop coordinate of `id`.
    ///
    /// Blocks inside a group report `row = Some(slot_index)` and their
    /// column within the group. Blocks in a single slot report `row = None`
    /// and their index in the top-level sequence.
    pub fn coordinate_of(&self, id: &BlockId) -> Option<Coordinate> {
        let (index, column) = self.locate(id)?;
        let coordinate = match &self.slots[index] {
            Slot::Group(_) => Coordinate::in_row(index, column as i64),
            Slot::Single(_) => Coordinate::top_level(index as i64),
        };
        Some(coordinate)
    }

    /// Checks the one-slot-per-block and no-empty-group invariants.
    pub fn validate(&self) -> Result<(), ContentOrderError> {
        let mut seen = HashSet::new();
        for (index, slot) in self.slots.iter().enumerate() {
            if let Slot::Group(blocks) = slot {
                if blocks.is_empty() {
                    return Err(ContentOrderError::EmptyGroup(index));
                }
            }
            for block in slot.block_ids() {
                if !seen.insert(block) {
                    return Err(ContentOrderError::DuplicateBlock(block.clone()));
                }
            }
        }
        Ok(())
    }
}
