// Event service for business logic
//
// Event series are write-once; listing supports optional equality filters.

use crate::api::common::Stored;
use crate::storage::{EventFilter, EventRow, StorageBackend};
use eventstats_core::{Event, Record};
use std::sync::Arc;
use uuid::Uuid;

use super::error::Result;
use super::non_empty;

pub struct EventService {
    db: Arc<StorageBackend>,
}

impl EventService {
    pub fn new(db: Arc<StorageBackend>) -> Self {
        Self { db }
    }

    pub async fn create(&self, event: Event) -> Result<Uuid> {
        event.validate()?;
        let row = self.db.create_event(&event).await?;
        tracing::info!(
            collection = Event::COLLECTION,
            id = %row.id,
            name = %row.name,
            "Event series created"
        );
        Ok(row.id)
    }

    /// List event series. Empty filter values are treated as absent.
    pub async fn list(
        &self,
        academic_year: Option<String>,
        branch: Option<String>,
    ) -> Result<Vec<Stored<Event>>> {
        let filter = EventFilter {
            academic_year: non_empty(academic_year),
            branch: non_empty(branch),
        };
        let rows = self.db.list_events(&filter).await?;
        Ok(rows.into_iter().map(Self::row_to_event).collect())
    }

    fn row_to_event(row: EventRow) -> Stored<Event> {
        Stored::new(row.id, Event::from(row))
    }
}
