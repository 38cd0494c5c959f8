//! Injected mutation pipeline and transient notification contracts.
//!
//! # Responsibility
//! - Describe the persistence operations services hand their results to.
//! - Describe how services surface short user-visible messages.
//!
//! # Invariants
//! - Implementations own persistence, undo grouping, and broadcasting.
//! - Core never holds a global mutator; one is passed to each service.

use crate::model::board::{Board, BoardView, PropertyTemplate, PropertyTemplateId};
use crate::model::card::Card;
use crate::model::content_order::ContentOrder;
use crate::model::property_type::PropertyType;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type MutationResult<T> = Result<T, MutationError>;

/// Failure reported by a mutation pipeline.
#[derive(Debug)]
pub enum MutationError {
    /// Target entity is unknown to the backing store.
    NotFound { kind: &'static str, id: String },
    /// Stored state changed since the caller read it.
    Conflict(String),
    /// Storage or transport failure.
    Backend(Box<dyn Error + Send + Sync + 'static>),
}

impl Display for MutationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::Conflict(details) => write!(f, "concurrent modification: {details}"),
            Self::Backend(err) => write!(f, "mutation backend failed: {err}"),
        }
    }
}

impl Error for MutationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Backend(err) => Some(err.as_ref()),
            Self::NotFound { .. } => None,
            Self::Conflict(_) => None,
        }
    }
}

/// Persistence pipeline for card and board edits.
pub trait Mutator {
    /// Runs `actions` so that every mutation it issues forms one undo step.
    fn perform_as_undo_group(
        &self,
        description: &str,
        actions: &mut dyn FnMut() -> MutationResult<()>,
    ) -> MutationResult<()>;
    /// Replaces a card's content order.
    fn change_card_content_order(
        &self,
        board_id: &str,
        card_id: &str,
        old_order: &ContentOrder,
        new_order: &ContentOrder,
        description: &str,
    ) -> MutationResult<()>;
    /// Changes a property's type and name, converting card values as needed.
    fn change_property_type_and_name(
        &self,
        board: &Board,
        cards: &[Card],
        template: &PropertyTemplate,
        new_type: PropertyType,
        new_name: &str,
    ) -> MutationResult<()>;
    /// Removes a property from the board, its views, and all cards.
    fn delete_property(
        &self,
        board: &Board,
        views: &[BoardView],
        cards: &[Card],
        property_id: &str,
    ) -> MutationResult<()>;
    /// Inserts a template at `index`, or appends when `index` is `None`.
    fn insert_property_template(
        &self,
        board: &Board,
        view: &BoardView,
        index: Option<usize>,
        template: &PropertyTemplate,
    ) -> MutationResult<PropertyTemplateId>;
}

/// Visual weight of a transient message.
///
/// Every message this crate raises is high severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashSeverity {
    High,
}

/// Short-lived message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub content: String,
    pub severity: FlashSeverity,
}

impl FlashMessage {
    pub fn high(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            severity: FlashSeverity::High,
        }
    }
}

/// Sink for transient user-visible messages.
pub trait Notifier {
    fn flash(&self, message: FlashMessage);
}
