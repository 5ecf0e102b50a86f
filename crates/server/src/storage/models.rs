// Database models (internal, may differ from public DTOs)

use chrono::{DateTime, NaiveDate, Utc};
use eventstats_core::{Event, Participation, Student, ValidationError};
use sqlx::FromRow;
use uuid::Uuid;

// ============================================
// Student models
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct StudentRow {
    pub id: Uuid,
    pub roll_number: String,
    pub name: String,
    pub branch: String,
    pub current_semester: i32,
    pub academic_year: String,
    pub created_at: DateTime<Utc>,
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Student {
            roll_number: row.roll_number,
            name: row.name,
            branch: row.branch,
            current_semester: row.current_semester,
            academic_year: row.academic_year,
        }
    }
}

/// Field-equality filter over students. `None` fields are unconstrained.
#[derive(Debug, Clone, Default)]
pub struct StudentFilter {
    pub academic_year: Option<String>,
    pub branch: Option<String>,
}

impl StudentFilter {
    pub fn matches(&self, row: &StudentRow) -> bool {
        field_matches(&self.academic_year, &row.academic_year)
            && field_matches(&self.branch, &row.branch)
    }
}

// ============================================
// Event models
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct EventRow {
    pub id: Uuid,
    pub name: String,
    pub branch: Option<String>,
    pub academic_year: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Event {
            name: row.name,
            branch: row.branch,
            academic_year: row.academic_year,
        }
    }
}

/// Field-equality filter over events.
/// A constrained field never matches an event that left it unset.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub academic_year: Option<String>,
    pub branch: Option<String>,
}

impl EventFilter {
    pub fn matches(&self, row: &EventRow) -> bool {
        optional_field_matches(&self.academic_year, row.academic_year.as_deref())
            && optional_field_matches(&self.branch, row.branch.as_deref())
    }
}

// ============================================
// Participation models
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct ParticipationRow {
    pub id: Uuid,
    pub roll_number: String,
    pub event_name: String,
    pub event_date: NaiveDate,
    pub semester: i32,
    pub status: String,
    pub academic_year: String,
    pub branch: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<ParticipationRow> for Participation {
    type Error = ValidationError;

    fn try_from(row: ParticipationRow) -> Result<Self, Self::Error> {
        Ok(Participation {
            status: row.status.parse()?,
            roll_number: row.roll_number,
            event_name: row.event_name,
            event_date: row.event_date,
            semester: row.semester,
            academic_year: row.academic_year,
            branch: row.branch,
        })
    }
}

/// Field-equality filter over participation records.
#[derive(Debug, Clone, Default)]
pub struct ParticipationFilter {
    pub roll_number: Option<String>,
    pub academic_year: Option<String>,
}

impl ParticipationFilter {
    /// All records for one student, optionally narrowed to an academic year.
    pub fn for_student(roll_number: impl Into<String>, academic_year: Option<String>) -> Self {
        Self {
            roll_number: Some(roll_number.into()),
            academic_year,
        }
    }

    pub fn matches(&self, row: &ParticipationRow) -> bool {
        field_matches(&self.roll_number, &row.roll_number)
            && field_matches(&self.academic_year, &row.academic_year)
    }
}

fn field_matches(filter: &Option<String>, value: &str) -> bool {
    filter.as_deref().map_or(true, |expected| expected == value)
}

fn optional_field_matches(filter: &Option<String>, value: Option<&str>) -> bool {
    match filter.as_deref() {
        Some(expected) => value == Some(expected),
        None => true,
    }
}
