//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate the pure layout/impact logic into drop and property flows.
//! - Keep UI layers decoupled from the injected mutation pipeline.

pub mod content_service;
pub mod impact;
pub mod mutator;
pub mod property_service;
