//! Core logic for the card detail property list.
//! Content layout rearrangement, property change gating, and row view models.

pub mod layout;
pub mod logging;
pub mod model;
pub mod service;
pub mod view;

pub use layout::rearrange;
pub use logging::{
    default_log_level, init_logging, logging_status, start_logging, LoggingConfig,
};
pub use model::board::{
    new_block_id, Board, BoardView, PropertyOption, PropertyTemplate, PropertyTemplateId,
};
pub use model::card::{Card, CardFields, PropertyValue};
pub use model::content_order::{BlockId, ContentOrder, ContentOrderError, Slot};
pub use model::coordinate::{Coordinate, MoveIntent, MoveRequest, PlacedBlock};
pub use model::property_type::{PropertyType, UnknownPropertyType};
pub use service::content_service::{ContentService, MOVE_CONTENT_DESCRIPTION};
pub use service::impact::{classify_change, count_not_empty, PropertyChange};
pub use service::mutator::{
    FlashMessage, FlashSeverity, MutationError, MutationResult, Mutator, Notifier,
};
pub use service::property_service::{
    ConfirmationPrompt, PendingPropertyChange, PendingPropertyDelete, PropertyChangeOutcome,
    PropertyService, PropertyServiceError,
};
pub use view::property_rows::{
    build_property_list, DropZone, NameMode, NewPropertyFocus, PropertyList, PropertyRow,
    RowAccess,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
