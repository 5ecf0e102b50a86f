// In-memory storage implementation for dev mode
// Decision: Use parking_lot for thread-safe access
// Decision: UUIDs generated via uuid v7 (time-ordered)
//
// This implementation mirrors the PostgreSQL repository API backed by in-memory
// vectors, allowing the server to run without a database for development and
// tests. Vectors keep insertion order, which is the natural retrieval order.

use anyhow::Result;
use chrono::{DateTime, Utc};
use eventstats_core::{Event, Participation, Record, Student};
use parking_lot::RwLock;
use uuid::Uuid;

use super::error::StoreError;
use super::models::*;

/// In-memory database for dev mode
/// All data is stored in memory and lost on restart
#[derive(Default)]
pub struct InMemoryDatabase {
    students: RwLock<Vec<StudentRow>>,
    events: RwLock<Vec<EventRow>>,
    participations: RwLock<Vec<ParticipationRow>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    // ============================================
    // Students
    // ============================================

    pub async fn create_student(&self, input: &Student) -> Result<StudentRow> {
        let mut students = self.students.write();
        // Mirrors the unique index on students.roll_number
        if students.iter().any(|s| s.roll_number == input.roll_number) {
            return Err(StoreError::DuplicateKey {
                collection: Student::COLLECTION,
                key: input.roll_number.clone(),
            }
            .into());
        }
        let row = StudentRow {
            id: Uuid::now_v7(),
            roll_number: input.roll_number.clone(),
            name: input.name.clone(),
            branch: input.branch.clone(),
            current_semester: input.current_semester,
            academic_year: input.academic_year.clone(),
            created_at: Self::now(),
        };
        students.push(row.clone());
        Ok(row)
    }

    pub async fn get_student_by_roll_number(
        &self,
        roll_number: &str,
    ) -> Result<Option<StudentRow>> {
        Ok(self
            .students
            .read()
            .iter()
            .find(|s| s.roll_number == roll_number)
            .cloned())
    }

    pub async fn list_students(&self, filter: &StudentFilter) -> Result<Vec<StudentRow>> {
        Ok(self
            .students
            .read()
            .iter()
            .filter(|s| filter.matches(s))
            .cloned()
            .collect())
    }

    // ============================================
    // Events
    // ============================================

    pub async fn create_event(&self, input: &Event) -> Result<EventRow> {
        let row = EventRow {
            id: Uuid::now_v7(),
            name: input.name.clone(),
            branch: input.branch.clone(),
            academic_year: input.academic_year.clone(),
            created_at: Self::now(),
        };
        self.events.write().push(row.clone());
        Ok(row)
    }

    pub async fn list_events(&self, filter: &EventFilter) -> Result<Vec<EventRow>> {
        Ok(self
            .events
            .read()
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect())
    }

    // ============================================
    // Participations
    // ============================================

    pub async fn create_participation(&self, input: &Participation) -> Result<ParticipationRow> {
        let row = ParticipationRow {
            id: Uuid::now_v7(),
            roll_number: input.roll_number.clone(),
            event_name: input.event_name.clone(),
            event_date: input.event_date,
            semester: input.semester,
            status: input.status.to_string(),
            academic_year: input.academic_year.clone(),
            branch: input.branch.clone(),
            created_at: Self::now(),
        };
        self.participations.write().push(row.clone());
        Ok(row)
    }

    pub async fn list_participations(
        &self,
        filter: &ParticipationFilter,
    ) -> Result<Vec<ParticipationRow>> {
        Ok(self
            .participations
            .read()
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }
}
