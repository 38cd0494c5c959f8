//! View models for the card detail property list.

pub mod property_rows;
