//! Board and property template model.
//!
//! # Responsibility
//! - Hold the ordered list of property templates shared by all cards.
//! - Provide id generation for newly added templates.
//!
//! # Invariants
//! - Template ids are unique within a board.
//! - `card_properties` order is the display order of property rows.

use crate::model::property_type::PropertyType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable property template identifier.
pub type PropertyTemplateId = String;

/// Prefix applied to generated block-style ids.
const BLOCK_ID_PREFIX: char = 'b';

/// Generates a fresh block-style id (`b` followed by a simple uuid).
pub fn new_block_id() -> String {
    format!("{BLOCK_ID_PREFIX}{}", Uuid::new_v4().simple())
}

/// One selectable option of a select/multi-select property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyOption {
    pub id: String,
    pub value: String,
    pub color: String,
}

/// Board-level definition of a card property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyTemplate {
    pub id: PropertyTemplateId,
    pub name: String,
    /// Serialized as `type` to match the board schema.
    #[serde(rename = "type")]
    pub kind: PropertyType,
    #[serde(default)]
    pub options: Vec<PropertyOption>,
}

impl PropertyTemplate {
    /// Creates a template with a generated id and no options.
    pub fn new(kind: PropertyType, name: impl Into<String>) -> Self {
        Self::with_id(new_block_id(), kind, name)
    }

    /// Creates a template with a caller-provided id.
    pub fn with_id(
        id: impl Into<PropertyTemplateId>,
        kind: PropertyType,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            options: Vec::new(),
        }
    }
}

/// Board holding the property schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub title: String,
    #[serde(rename = "cardProperties", default)]
    pub card_properties: Vec<PropertyTemplate>,
}

impl Board {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            card_properties: Vec::new(),
        }
    }

    /// Finds a template by id.
    pub fn property(&self, id: &str) -> Option<&PropertyTemplate> {
        self.card_properties.iter().find(|template| template.id == id)
    }

    pub fn has_property(&self, id: &str) -> bool {
        self.property(id).is_some()
    }
}

/// Board view referencing properties by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub id: String,
    #[serde(rename = "boardId")]
    pub board_id: String,
    pub title: String,
    #[serde(rename = "visiblePropertyIds", default)]
    pub visible_property_ids: Vec<PropertyTemplateId>,
}
