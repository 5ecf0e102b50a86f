// Attendance aggregation engine
//
// Groups one student's participation history by event name and counts how
// many occurrences of each series were held, attended and missed.
//
// Ordering contract:
// - `summary` follows the order in which each event name first appears in the input
// - each group's `details` keep the input order of that group's records
//
// Grouping is by exact `event_name` equality (no case or whitespace folding).
// Two distinct series that share a name merge into one summary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::participation::{Participation, ParticipationStatus};

/// One occurrence inside an event summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct AttendanceDetail {
    /// Date the occurrence was held.
    pub date: NaiveDate,
    /// Semester in which it was held.
    pub semester: i32,
    /// Outcome for this student.
    pub status: ParticipationStatus,
}

impl From<&Participation> for AttendanceDetail {
    fn from(p: &Participation) -> Self {
        Self {
            date: p.event_date,
            semester: p.semester,
            status: p.status,
        }
    }
}

/// Per-series counts for one student.
/// Invariant: `held == attended + missed`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct EventSummary {
    /// Event series name (the grouping key).
    #[cfg_attr(feature = "openapi", schema(example = "Tech Talk"))]
    pub event_name: String,
    /// Number of occurrences on record.
    pub held: usize,
    /// Occurrences with status `Attended`.
    pub attended: usize,
    /// Occurrences with status `Missed`.
    pub missed: usize,
    /// Occurrences in input order.
    pub details: Vec<AttendanceDetail>,
}

impl EventSummary {
    fn new(event_name: String) -> Self {
        Self {
            event_name,
            held: 0,
            attended: 0,
            missed: 0,
            details: Vec::new(),
        }
    }

    fn record(&mut self, p: &Participation) {
        self.held += 1;
        match p.status {
            ParticipationStatus::Attended => self.attended += 1,
            ParticipationStatus::Missed => self.missed += 1,
        }
        self.details.push(AttendanceDetail::from(p));
    }
}

/// Per-student attendance breakdown, one entry per event series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct StudentAttendanceReport {
    /// Roll number the report was requested for.
    #[cfg_attr(feature = "openapi", schema(example = "24A01"))]
    pub roll_number: String,
    /// Event summaries in first-seen order.
    pub summary: Vec<EventSummary>,
}

impl StudentAttendanceReport {
    /// Look up the summary for an event series by exact name.
    pub fn event(&self, event_name: &str) -> Option<&EventSummary> {
        self.summary.iter().find(|s| s.event_name == event_name)
    }

    pub fn is_empty(&self) -> bool {
        self.summary.is_empty()
    }
}

/// Incremental builder for a [`StudentAttendanceReport`].
///
/// Records are pushed one at a time in input order; groups are kept in a
/// vector (first-seen order) with a name -> position index beside it.
/// The builder does not check that records share the report's roll number.
#[derive(Debug, Clone)]
pub struct AttendanceReportBuilder {
    roll_number: String,
    summary: Vec<EventSummary>,
    positions: HashMap<String, usize>,
}

impl AttendanceReportBuilder {
    pub fn new(roll_number: impl Into<String>) -> Self {
        Self {
            roll_number: roll_number.into(),
            summary: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Add one participation record.
    pub fn push(&mut self, p: &Participation) -> &mut Self {
        let idx = match self.positions.get(p.event_name.as_str()) {
            Some(&idx) => idx,
            None => {
                let idx = self.summary.len();
                self.summary.push(EventSummary::new(p.event_name.clone()));
                self.positions.insert(p.event_name.clone(), idx);
                idx
            }
        };
        self.summary[idx].record(p);
        self
    }

    /// Add records in iteration order.
    pub fn extend<'a, I>(&mut self, records: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a Participation>,
    {
        for p in records {
            self.push(p);
        }
        self
    }

    pub fn build(self) -> StudentAttendanceReport {
        StudentAttendanceReport {
            roll_number: self.roll_number,
            summary: self.summary,
        }
    }
}

/// Compute the attendance report for one student.
///
/// `records` should already be narrowed to the student (and, optionally, an
/// academic year) by the caller. An empty slice yields an empty summary.
pub fn compute_attendance_report(
    roll_number: impl Into<String>,
    records: &[Participation],
) -> StudentAttendanceReport {
    let mut builder = AttendanceReportBuilder::new(roll_number);
    builder.extend(records);
    builder.build()
}
