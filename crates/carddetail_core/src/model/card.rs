//! Card model.
//!
//! # Invariants
//! - `fields.content_order` is the only persisted layout of content blocks.
//! - A missing property entry and an empty value are both "empty".

use crate::model::content_order::ContentOrder;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stored value of one card property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Text(String),
    List(Vec<String>),
}

impl PropertyValue {
    /// Empty strings and empty lists carry no data.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(value) => value.is_empty(),
            Self::List(values) => values.is_empty(),
        }
    }
}

/// Persisted card fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFields {
    #[serde(rename = "contentOrder", default)]
    pub content_order: ContentOrder,
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyValue>,
}

/// One card on a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    #[serde(rename = "boardId")]
    pub board_id: String,
    pub title: String,
    pub fields: CardFields,
}

impl Card {
    pub fn new(
        id: impl Into<String>,
        board_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            board_id: board_id.into(),
            title: title.into(),
            fields: CardFields::default(),
        }
    }

    /// Returns the stored value for a property, if any.
    pub fn property_value(&self, property_id: &str) -> Option<&PropertyValue> {
        self.fields.properties.get(property_id)
    }

    /// Returns whether the card stores a non-empty value for the property.
    pub fn has_value(&self, property_id: &str) -> bool {
        self.property_value(property_id)
            .is_some_and(|value| !value.is_empty())
    }
}
