//! abg-core
//!
//! Pure domain types for arterial blood gas interpretation. No logic beyond
//! identifier parsing and display labels. This is the shared vocabulary of
//! the engine and the HTTP boundary.

pub mod error;
pub mod models;
