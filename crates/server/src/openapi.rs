// OpenAPI specification generation
//
// This module defines the OpenAPI spec for the Eventstats API.
// It is used by the server (Swagger UI, /v1/schema) and by the
// export-openapi binary (static spec generation).

use crate::api;
use crate::api::{CreatedResponse, ErrorResponse, ListResponse, Stored};
use eventstats_core::{
    AttendanceDetail, Event, EventSummary, Participation, ParticipationStatus, Student,
    StudentAttendanceReport,
};
use utoipa::OpenApi;

/// OpenAPI documentation for the Eventstats API
#[derive(OpenApi)]
#[openapi(
    paths(
        api::students::create_student,
        api::students::list_students,
        api::students::get_student,
        api::students::list_roll_numbers,
        api::events::create_event,
        api::events::list_events,
        api::participations::create_participation,
        api::participations::list_participations,
        api::stats::get_student_stats,
        api::schema::get_schema,
    ),
    components(
        schemas(
            Student, Event, Participation, ParticipationStatus,
            StudentAttendanceReport, EventSummary, AttendanceDetail,
            Stored<Student>, Stored<Event>, Stored<Participation>,
            ListResponse<Stored<Student>>,
            ListResponse<Stored<Event>>,
            ListResponse<Stored<Participation>>,
            api::students::RollNumbersResponse,
            CreatedResponse, ErrorResponse,
        )
    ),
    tags(
        (name = "students", description = "Student enrollment and rosters"),
        (name = "events", description = "Event series definitions"),
        (name = "participations", description = "Per-occurrence attendance records"),
        (name = "stats", description = "Per-student attendance reports"),
        (name = "schema", description = "Entity schemas")
    ),
    info(
        title = "Eventstats API",
        version = "0.1.0",
        description = "API for recording student event attendance and reporting per-event statistics",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Generate the OpenAPI spec as a pretty-printed JSON string
    pub fn to_json() -> Result<String, serde_json::Error> {
        Self::openapi().to_pretty_json()
    }
}
