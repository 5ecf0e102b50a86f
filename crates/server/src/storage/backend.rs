// Storage backend abstraction
// Decision: Use enum dispatch for simplicity over trait objects
//
// This module provides a unified StorageBackend enum that can work with
// either PostgreSQL (production) or in-memory (dev mode) storage.

use anyhow::Result;
use eventstats_core::{Event, Participation, Student};
use std::sync::Arc;

use super::memory::InMemoryDatabase;
use super::models::*;
use super::repositories::Database;

/// Storage backend that can be either PostgreSQL or in-memory
#[derive(Clone)]
pub enum StorageBackend {
    /// PostgreSQL database (production)
    Postgres(Database),
    /// In-memory database (dev mode)
    InMemory(Arc<InMemoryDatabase>),
}

impl StorageBackend {
    /// Create a PostgreSQL storage backend from a database URL and apply migrations
    pub async fn postgres(database_url: &str) -> Result<Self> {
        let db = Database::from_url(database_url).await?;
        db.migrate().await?;
        Ok(Self::Postgres(db))
    }

    /// Create an in-memory storage backend
    pub fn in_memory() -> Self {
        Self::InMemory(Arc::new(InMemoryDatabase::new()))
    }

    /// Short name of the backend, reported by the health endpoint
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::InMemory(_) => "in-memory",
        }
    }

    /// Check that the store is reachable
    pub async fn ping(&self) -> Result<()> {
        match self {
            Self::Postgres(db) => db.ping().await,
            Self::InMemory(_) => Ok(()),
        }
    }

    // ============================================
    // Students
    // ============================================

    pub async fn create_student(&self, input: &Student) -> Result<StudentRow> {
        match self {
            Self::Postgres(db) => db.create_student(input).await,
            Self::InMemory(db) => db.create_student(input).await,
        }
    }

    pub async fn get_student_by_roll_number(
        &self,
        roll_number: &str,
    ) -> Result<Option<StudentRow>> {
        match self {
            Self::Postgres(db) => db.get_student_by_roll_number(roll_number).await,
            Self::InMemory(db) => db.get_student_by_roll_number(roll_number).await,
        }
    }

    pub async fn list_students(&self, filter: &StudentFilter) -> Result<Vec<StudentRow>> {
        match self {
            Self::Postgres(db) => db.list_students(filter).await,
            Self::InMemory(db) => db.list_students(filter).await,
        }
    }

    // ============================================
    // Events
    // ============================================

    pub async fn create_event(&self, input: &Event) -> Result<EventRow> {
        match self {
            Self::Postgres(db) => db.create_event(input).await,
            Self::InMemory(db) => db.create_event(input).await,
        }
    }

    pub async fn list_events(&self, filter: &EventFilter) -> Result<Vec<EventRow>> {
        match self {
            Self::Postgres(db) => db.list_events(filter).await,
            Self::InMemory(db) => db.list_events(filter).await,
        }
    }

    // ============================================
    // Participations
    // ============================================

    pub async fn create_participation(&self, input: &Participation) -> Result<ParticipationRow> {
        match self {
            Self::Postgres(db) => db.create_participation(input).await,
            Self::InMemory(db) => db.create_participation(input).await,
        }
    }

    pub async fn list_participations(
        &self,
        filter: &ParticipationFilter,
    ) -> Result<Vec<ParticipationRow>> {
        match self {
            Self::Postgres(db) => db.list_participations(filter).await,
            Self::InMemory(db) => db.list_participations(filter).await,
        }
    }
}
