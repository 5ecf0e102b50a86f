// Attendance statistics HTTP routes

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use eventstats_core::StudentAttendanceReport;
use std::sync::Arc;

use super::common::ErrorResponse;
use super::participations::AcademicYearQuery;
use super::validation::{parse_query, ApiError};
use crate::services::ReportService;

/// App state for stats routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ReportService>,
}

impl AppState {
    pub fn new(service: Arc<ReportService>) -> Self {
        Self { service }
    }
}

/// Create stats routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/v1/stats/:roll_number", get(get_student_stats))
        .with_state(state)
}

/// GET /v1/stats/{roll_number} - Per-event attendance report
///
/// A student with no records gets `summary: []`, not 404.
#[utoipa::path(
    get,
    path = "/v1/stats/{roll_number}",
    params(
        ("roll_number" = String, Path, description = "Student roll number"),
        AcademicYearQuery
    ),
    responses(
        (status = 200, description = "Attendance report", body = StudentAttendanceReport),
        (status = 422, description = "Malformed query string", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "stats"
)]
pub async fn get_student_stats(
    State(state): State<AppState>,
    Path(roll_number): Path<String>,
    query: Result<Query<AcademicYearQuery>, QueryRejection>,
) -> Result<Json<StudentAttendanceReport>, ApiError> {
    let query = parse_query(query)?;
    let report = state
        .service
        .student_report(&roll_number, query.academic_year)
        .await?;
    Ok(Json(report))
}
