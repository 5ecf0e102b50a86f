// Participation service for business logic
//
// One record per student per event occurrence. Records are appended as-is;
// the student and event series are referenced by string and not checked.

use crate::api::common::Stored;
use crate::storage::{ParticipationFilter, ParticipationRow, StorageBackend};
use eventstats_core::{Participation, Record};
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

use super::error::{Result, ServiceError};
use super::non_empty;

pub struct ParticipationService {
    db: Arc<StorageBackend>,
}

impl ParticipationService {
    pub fn new(db: Arc<StorageBackend>) -> Self {
        Self { db }
    }

    pub async fn create(&self, participation: Participation) -> Result<Uuid> {
        let span = tracing::info_span!(
            "participation.create",
            collection = Participation::COLLECTION,
            roll_number = %participation.roll_number,
            event_name = %participation.event_name,
            status = participation.status.as_str(),
        );

        self.create_inner(participation).instrument(span).await
    }

    async fn create_inner(&self, participation: Participation) -> Result<Uuid> {
        participation.validate()?;
        let row = self.db.create_participation(&participation).await?;
        tracing::debug!(id = %row.id, "Participation recorded");
        Ok(row.id)
    }

    /// All records of one student in natural retrieval order,
    /// optionally narrowed to an academic year.
    pub async fn list_for_student(
        &self,
        roll_number: &str,
        academic_year: Option<String>,
    ) -> Result<Vec<Stored<Participation>>> {
        let rows = self.fetch(roll_number, academic_year).await?;
        rows.into_iter()
            .map(|row| {
                let id = row.id;
                Self::row_to_participation(row).map(|p| Stored::new(id, p))
            })
            .collect()
    }

    /// Same records as `list_for_student`, without store IDs
    pub async fn records_for_student(
        &self,
        roll_number: &str,
        academic_year: Option<String>,
    ) -> Result<Vec<Participation>> {
        let rows = self.fetch(roll_number, academic_year).await?;
        rows.into_iter().map(Self::row_to_participation).collect()
    }

    async fn fetch(
        &self,
        roll_number: &str,
        academic_year: Option<String>,
    ) -> Result<Vec<ParticipationRow>> {
        let filter = ParticipationFilter::for_student(roll_number, non_empty(academic_year));
        Ok(self.db.list_participations(&filter).await?)
    }

    // A stored row that fails to parse is a store fault, not a client error
    fn row_to_participation(row: ParticipationRow) -> Result<Participation> {
        let id = row.id;
        Participation::try_from(row).map_err(|e| {
            ServiceError::Internal(anyhow::anyhow!("corrupt participation record {id}: {e}"))
        })
    }
}
