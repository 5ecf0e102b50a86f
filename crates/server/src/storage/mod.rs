// Storage layer for eventstats
// Decision: Support both PostgreSQL (production) and in-memory (dev mode)
//
// The record store offers create and field-equality find per collection
// (students, events, participations). It holds no aggregation logic.

pub mod backend;
pub mod error;
pub mod memory;
pub mod models;
pub mod repositories;

pub use backend::StorageBackend;
pub use error::StoreError;
pub use memory::InMemoryDatabase;
pub use models::*;
pub use repositories::*;
