// HTTP API routes
//
// This module contains all HTTP route handlers for the public API.
// Each submodule handles a specific resource type with its own AppState.

pub mod common;
pub mod events;
pub mod participations;
pub mod schema;
pub mod stats;
pub mod students;
pub mod validation;

// Re-export common types
pub use common::{CreatedResponse, ErrorResponse, ListResponse, Stored};
