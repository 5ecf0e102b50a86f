// Integration tests for the attendance aggregation engine
//
// These tests pin down the observable contract of compute_attendance_report:
// counts, first-seen group order, per-group detail order and exact-name grouping.
//
// Run with: cargo test -p eventstats-core --test report_test

use chrono::NaiveDate;
use eventstats_core::{
    compute_attendance_report, sorted_roll_numbers, AttendanceDetail, Participation,
    ParticipationStatus, Student, StudentAttendanceReport,
};

use ParticipationStatus::{Attended, Missed};

fn date(s: &str) -> NaiveDate {
    s.parse().expect("valid date")
}

fn participation(event_name: &str, event_date: &str, status: ParticipationStatus) -> Participation {
    Participation {
        roll_number: "24A01".to_string(),
        event_name: event_name.to_string(),
        event_date: date(event_date),
        semester: 3,
        status,
        academic_year: "2024-25".to_string(),
        branch: "CSE".to_string(),
    }
}

fn event_order(report: &StudentAttendanceReport) -> Vec<&str> {
    report
        .summary
        .iter()
        .map(|s| s.event_name.as_str())
        .collect()
}

/// A deterministic mixed history across several series.
fn mixed_history() -> Vec<Participation> {
    let names = ["Tech Talk", "Hackathon", "Cultural Fest", "Sports Day"];
    (0..40)
        .map(|i| {
            let name = names[(i * 7 + i / 3) % names.len()];
            let status = if (i * 5) % 3 == 0 { Missed } else { Attended };
            let day = (i % 28) + 1;
            participation(name, &format!("2024-09-{day:02}"), status)
        })
        .collect()
}

#[test]
fn test_count_invariant_holds_for_every_summary() {
    let records = mixed_history();
    let report = compute_attendance_report("24A01", &records);

    assert!(!report.summary.is_empty());
    let mut total = 0;
    for summary in &report.summary {
        assert_eq!(summary.held, summary.attended + summary.missed);
        assert_eq!(summary.held, summary.details.len());
        total += summary.held;
    }
    assert_eq!(total, records.len());
}

#[test]
fn test_group_order_is_first_seen_order() {
    let records = vec![
        participation("Zeta Lecture", "2024-09-01", Attended),
        participation("Alpha Workshop", "2024-08-01", Missed),
        participation("Zeta Lecture", "2024-07-01", Missed),
        participation("Mid Seminar", "2024-10-01", Attended),
    ];
    let report = compute_attendance_report("24A01", &records);

    // Neither alphabetical nor chronological
    assert_eq!(
        event_order(&report),
        vec!["Zeta Lecture", "Alpha Workshop", "Mid Seminar"]
    );
}

#[test]
fn test_group_order_stable_under_permutation_preserving_first_occurrence() {
    let a = vec![
        participation("Tech Talk", "2024-09-01", Attended),
        participation("Cultural Fest", "2024-09-15", Attended),
        participation("Tech Talk", "2024-10-01", Missed),
        participation("Hackathon", "2024-11-01", Missed),
        participation("Cultural Fest", "2024-12-01", Missed),
    ];
    // Later occurrences shuffled; first occurrences keep their relative order
    let b = vec![
        participation("Tech Talk", "2024-09-01", Attended),
        participation("Cultural Fest", "2024-09-15", Attended),
        participation("Hackathon", "2024-11-01", Missed),
        participation("Cultural Fest", "2024-12-01", Missed),
        participation("Tech Talk", "2024-10-01", Missed),
    ];

    let report_a = compute_attendance_report("24A01", &a);
    let report_b = compute_attendance_report("24A01", &b);
    assert_eq!(event_order(&report_a), event_order(&report_b));
    assert_eq!(report_a, report_b);
}

#[test]
fn test_repeated_runs_are_identical() {
    let records = mixed_history();
    let first = compute_attendance_report("24A01", &records);
    let second = compute_attendance_report("24A01", &records);
    assert_eq!(first, second);
}

#[test]
fn test_details_keep_input_order_within_group() {
    let records = vec![
        participation("Tech Talk", "2024-12-01", Missed),
        participation("Hackathon", "2024-09-01", Attended),
        participation("Tech Talk", "2024-01-01", Attended),
        participation("Tech Talk", "2024-06-01", Missed),
    ];
    let report = compute_attendance_report("24A01", &records);
    let dates: Vec<NaiveDate> = report.summary[0].details.iter().map(|d| d.date).collect();

    // No re-sorting by date
    assert_eq!(
        dates,
        vec![date("2024-12-01"), date("2024-01-01"), date("2024-06-01")]
    );
}

#[test]
fn test_empty_input_yields_empty_summary() {
    let report = compute_attendance_report("R1", &[]);
    assert_eq!(
        report,
        StudentAttendanceReport {
            roll_number: "R1".to_string(),
            summary: vec![],
        }
    );

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json, serde_json::json!({"roll_number": "R1", "summary": []}));
}

#[test]
fn test_event_names_are_case_sensitive() {
    let records = vec![
        participation("Hackathon", "2024-09-01", Attended),
        participation("hackathon", "2024-09-02", Missed),
    ];
    let report = compute_attendance_report("24A01", &records);

    assert_eq!(event_order(&report), vec!["Hackathon", "hackathon"]);
    assert_eq!(report.event("Hackathon").unwrap().attended, 1);
    assert_eq!(report.event("hackathon").unwrap().missed, 1);
}

#[test]
fn test_concrete_scenario() {
    let records = vec![
        participation("Tech Talk", "2024-09-01", Attended),
        participation("Tech Talk", "2024-10-01", Missed),
        participation("Cultural Fest", "2024-09-15", Attended),
    ];
    let report = compute_attendance_report("24A01", &records);

    assert_eq!(report.roll_number, "24A01");
    assert_eq!(report.summary.len(), 2);

    let tech_talk = &report.summary[0];
    assert_eq!(tech_talk.event_name, "Tech Talk");
    assert_eq!(
        (tech_talk.held, tech_talk.attended, tech_talk.missed),
        (2, 1, 1)
    );
    assert_eq!(
        tech_talk.details,
        vec![
            AttendanceDetail {
                date: date("2024-09-01"),
                semester: 3,
                status: Attended,
            },
            AttendanceDetail {
                date: date("2024-10-01"),
                semester: 3,
                status: Missed,
            },
        ]
    );

    let fest = &report.summary[1];
    assert_eq!(fest.event_name, "Cultural Fest");
    assert_eq!((fest.held, fest.attended, fest.missed), (1, 1, 0));
    assert_eq!(fest.details.len(), 1);
    assert_eq!(fest.details[0].date, date("2024-09-15"));
}

#[test]
fn test_engine_does_not_filter_by_roll_number() {
    let mut other = participation("Tech Talk", "2024-09-02", Attended);
    other.roll_number = "24A02".to_string();
    let records = vec![participation("Tech Talk", "2024-09-01", Missed), other];

    let report = compute_attendance_report("24A01", &records);
    assert_eq!(report.summary[0].held, 2);
}

#[test]
fn test_roster_sort_is_lexicographic() {
    let students: Vec<Student> = ["249Y1A3910", "249Y1A3902", "249Y1A399"]
        .into_iter()
        .map(|roll_number| Student {
            roll_number: roll_number.to_string(),
            name: "Student".to_string(),
            branch: "AI & ML".to_string(),
            current_semester: 3,
            academic_year: "2024-25".to_string(),
        })
        .collect();

    assert_eq!(
        sorted_roll_numbers(&students),
        vec!["249Y1A3902", "249Y1A3910", "249Y1A399"]
    );
}
