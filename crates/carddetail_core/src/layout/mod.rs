//! Content layout rearrangement.
//!
//! # Responsibility
//! - Rewrite a card's content order for one drag-and-drop gesture.
//!
//! # Invariants
//! - Pure: inputs are never mutated and a fresh order is returned.
//! - Total: unresolvable or self-targeted moves return the input unchanged.

pub mod rearrange;

pub use rearrange::rearrange;
