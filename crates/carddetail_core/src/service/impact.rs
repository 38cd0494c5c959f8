//! Impact classification for property type/name changes.
//!
//! # Invariants
//! - Only a type change can lose data; a rename never asks for confirmation.
//! - Derived property types count every card as holding a value.

use crate::model::board::PropertyTemplate;
use crate::model::card::Card;
use crate::model::property_type::PropertyType;

/// Counts cards that hold a non-empty value for `template`.
pub fn count_not_empty(cards: &[Card], template: &PropertyTemplate) -> usize {
    if template.kind.is_derived() {
        return cards.len();
    }
    cards
        .iter()
        .filter(|card| card.has_value(template.id.as_str()))
        .count()
}

/// What a requested type/name change would do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyChange {
    /// Same type and same name.
    Unchanged,
    /// Type unchanged; only the display name differs.
    RenameOnly,
    /// Value type changes; `affected_cards` currently hold data.
    TypeChange { affected_cards: usize },
}

impl PropertyChange {
    /// Whether the user must confirm before the change is applied.
    pub fn needs_confirmation(self) -> bool {
        matches!(self, Self::TypeChange { affected_cards } if affected_cards > 0)
    }
}

/// Classifies a requested change against the current cards.
pub fn classify_change(
    cards: &[Card],
    template: &PropertyTemplate,
    new_type: PropertyType,
    new_name: &str,
) -> PropertyChange {
    if template.kind == new_type {
        if template.name == new_name {
            return PropertyChange::Unchanged;
        }
        return PropertyChange::RenameOnly;
    }
    PropertyChange::TypeChange {
        affected_cards: count_not_empty(cards, template),
    }
}
