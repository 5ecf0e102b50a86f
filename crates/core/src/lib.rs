// Eventstats Core
//
// Domain types and the attendance aggregation engine.
//
// Key design decisions:
// - Entities (Student, Event, Participation) are plain, independent record types
// - Create payloads use the entity types directly; there is no patch type
// - Participation refers to Student and Event by string only (roll_number, event_name)
// - The aggregation engine is pure and synchronous; callers do all filtering and I/O
// - Validation happens once at the boundary and reports a single ValidationError kind

pub mod event;
pub mod participation;
pub mod record;
pub mod report;
pub mod roster;
pub mod student;
pub mod validation;

// Re-exports for convenience
pub use event::Event;
pub use participation::{Participation, ParticipationStatus};
pub use record::Record;
pub use report::{
    compute_attendance_report, AttendanceDetail, AttendanceReportBuilder, EventSummary,
    StudentAttendanceReport,
};
pub use roster::{sort_by_roll_number, sorted_roll_numbers, HasRollNumber};
pub use student::Student;
pub use validation::{validate_semester, ValidationError, MAX_SEMESTER, MIN_SEMESTER};
