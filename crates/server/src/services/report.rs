// Report service: fetch one student's records and aggregate them

use eventstats_core::{compute_attendance_report, StudentAttendanceReport};
use std::sync::Arc;
use tracing::Instrument;

use super::error::Result;
use super::participation::ParticipationService;

pub struct ReportService {
    participations: Arc<ParticipationService>,
}

impl ReportService {
    pub fn new(participations: Arc<ParticipationService>) -> Self {
        Self { participations }
    }

    /// Per-event attendance summary for a student. A student with no
    /// matching records gets an empty summary, not an error.
    pub async fn student_report(
        &self,
        roll_number: &str,
        academic_year: Option<String>,
    ) -> Result<StudentAttendanceReport> {
        let span = tracing::info_span!(
            "report.student",
            roll_number = %roll_number,
            academic_year = academic_year.as_deref().unwrap_or(""),
            records = tracing::field::Empty,
            events = tracing::field::Empty,
        );

        self.student_report_inner(roll_number, academic_year)
            .instrument(span)
            .await
    }

    async fn student_report_inner(
        &self,
        roll_number: &str,
        academic_year: Option<String>,
    ) -> Result<StudentAttendanceReport> {
        let records = self
            .participations
            .records_for_student(roll_number, academic_year)
            .await?;
        let report = compute_attendance_report(roll_number, &records);

        let span = tracing::Span::current();
        span.record("records", records.len() as u64);
        span.record("events", report.summary.len() as u64);
        tracing::debug!("Attendance report computed");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageBackend;
    use chrono::NaiveDate;
    use eventstats_core::{Participation, ParticipationStatus};

    fn record(
        event_name: &str,
        day: u32,
        status: ParticipationStatus,
        academic_year: &str,
    ) -> Participation {
        Participation {
            roll_number: "24A01".to_string(),
            event_name: event_name.to_string(),
            event_date: NaiveDate::from_ymd_opt(2024, 9, day).unwrap(),
            semester: 3,
            status,
            academic_year: academic_year.to_string(),
            branch: "CSE".to_string(),
        }
    }

    #[tokio::test]
    async fn test_report_aggregates_stored_records() {
        let participations = Arc::new(ParticipationService::new(Arc::new(
            StorageBackend::in_memory(),
        )));
        let reports = ReportService::new(participations.clone());

        use ParticipationStatus::*;
        for p in [
            record("Tech Talk", 1, Attended, "2024-25"),
            record("Hackathon", 2, Missed, "2024-25"),
            record("Tech Talk", 8, Missed, "2024-25"),
            record("Tech Talk", 15, Attended, "2023-24"),
        ] {
            participations.create(p).await.unwrap();
        }

        let report = reports
            .student_report("24A01", Some("2024-25".to_string()))
            .await
            .unwrap();
        assert_eq!(report.summary.len(), 2);
        assert_eq!(report.summary[0].event_name, "Tech Talk");
        assert_eq!(report.summary[0].held, 2);
        assert_eq!(report.summary[0].attended, 1);
        assert_eq!(report.summary[0].missed, 1);
        assert_eq!(report.summary[1].event_name, "Hackathon");

        let all_years = reports.student_report("24A01", None).await.unwrap();
        assert_eq!(all_years.event("Tech Talk").unwrap().held, 3);
    }

    #[tokio::test]
    async fn test_unknown_student_has_empty_report() {
        let participations = Arc::new(ParticipationService::new(Arc::new(
            StorageBackend::in_memory(),
        )));
        let report = ReportService::new(participations)
            .student_report("nobody", None)
            .await
            .unwrap();
        assert_eq!(report.roll_number, "nobody");
        assert!(report.is_empty());
    }
}
