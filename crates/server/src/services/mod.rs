// Services layer for business logic
// Services own validation and call storage directly

pub mod error;
pub mod event;
pub mod participation;
pub mod report;
pub mod student;

pub use error::{Result, ServiceError};
pub use event::EventService;
pub use participation::ParticipationService;
pub use report::ReportService;
pub use student::StudentService;

/// Optional query values arrive as empty strings from some clients;
/// an empty value means "no filter".
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
