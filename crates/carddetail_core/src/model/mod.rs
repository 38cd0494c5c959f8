//! Domain model for card detail content and properties.
//!
//! # Responsibility
//! - Define the content-order shape persisted on every card.
//! - Define board-level property templates and card-level property values.
//!
//! # Invariants
//! - Every block id appears in exactly one slot of a content order.
//! - Property values are keyed by the owning template id.

pub mod board;
pub mod card;
pub mod content_order;
pub mod coordinate;
pub mod property_type;
