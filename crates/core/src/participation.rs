// Participation domain types
//
// One record per student per event occurrence. The full history of a student
// is the input to the aggregation engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::record::Record;
use crate::validation::{validate_semester, ValidationError};

/// Outcome of a student's participation in one event occurrence.
/// Serialized with exactly these spellings: `Attended`, `Missed`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub enum ParticipationStatus {
    /// The student attended the occurrence.
    Attended,
    /// The student missed the occurrence.
    Missed,
}

impl ParticipationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticipationStatus::Attended => "Attended",
            ParticipationStatus::Missed => "Missed",
        }
    }
}

impl std::fmt::Display for ParticipationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParticipationStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Attended" => Ok(ParticipationStatus::Attended),
            "Missed" => Ok(ParticipationStatus::Missed),
            other => Err(ValidationError::InvalidStatus(other.to_string())),
        }
    }
}

/// Participation - one student's attendance outcome for one event occurrence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Participation {
    /// Roll number of the student. Loose reference, not enforced.
    #[cfg_attr(feature = "openapi", schema(example = "249Y1A3901"))]
    pub roll_number: String,
    /// Name of the event series. Grouping key for attendance reports.
    #[cfg_attr(feature = "openapi", schema(example = "Tech Talk"))]
    pub event_name: String,
    /// Date the occurrence was held.
    #[cfg_attr(feature = "openapi", schema(example = "2024-09-01"))]
    pub event_date: NaiveDate,
    /// Semester in which the occurrence was held (1-12).
    #[cfg_attr(feature = "openapi", schema(example = 3, minimum = 1, maximum = 12))]
    pub semester: i32,
    /// Whether the student attended.
    pub status: ParticipationStatus,
    /// Academic year label.
    #[cfg_attr(feature = "openapi", schema(example = "2024-25"))]
    pub academic_year: String,
    /// Branch of the student.
    #[cfg_attr(feature = "openapi", schema(example = "AI & ML"))]
    pub branch: String,
}

impl Participation {
    /// Whether this record counts as attended.
    pub fn is_attended(&self) -> bool {
        self.status == ParticipationStatus::Attended
    }
}

impl Record for Participation {
    const COLLECTION: &'static str = "participation";

    fn validate(&self) -> Result<(), ValidationError> {
        validate_semester("semester", self.semester)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participation_json(status: &str, semester: i32) -> String {
        format!(
            r#"{{"roll_number":"24A01","event_name":"Tech Talk","event_date":"2024-09-01","semester":{semester},"status":"{status}","academic_year":"2024-25","branch":"CSE"}}"#
        )
    }

    #[test]
    fn test_status_round_trips_exact_spelling() {
        assert_eq!(
            serde_json::to_string(&ParticipationStatus::Attended).unwrap(),
            "\"Attended\""
        );
        assert_eq!(
            "Missed".parse::<ParticipationStatus>().unwrap(),
            ParticipationStatus::Missed
        );
        assert_eq!(ParticipationStatus::Attended.to_string(), "Attended");
    }

    #[test]
    fn test_status_is_case_sensitive() {
        assert_eq!(
            "attended".parse::<ParticipationStatus>(),
            Err(ValidationError::InvalidStatus("attended".to_string()))
        );
        assert!(serde_json::from_str::<Participation>(&participation_json("missed", 3)).is_err());
    }

    #[test]
    fn test_unknown_status_fails_to_decode() {
        assert!(serde_json::from_str::<Participation>(&participation_json("Late", 3)).is_err());
    }

    #[test]
    fn test_decode_and_validate() {
        let p: Participation = serde_json::from_str(&participation_json("Attended", 3)).unwrap();
        assert_eq!(p.event_date, NaiveDate::from_ymd_opt(2024, 9, 1).unwrap());
        assert!(p.is_attended());
        assert!(p.validate().is_ok());

        let p: Participation = serde_json::from_str(&participation_json("Missed", 13)).unwrap();
        assert!(!p.is_attended());
        assert!(matches!(
            p.validate(),
            Err(ValidationError::OutOfRange {
                field: "semester",
                value: 13,
                ..
            })
        ));
    }

    #[test]
    fn test_date_serializes_as_iso() {
        let p: Participation = serde_json::from_str(&participation_json("Attended", 3)).unwrap();
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["event_date"], "2024-09-01");
    }
}
