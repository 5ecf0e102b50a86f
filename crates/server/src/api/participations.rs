// Participation HTTP routes
//
// Records are appended one per student per occurrence and listed back raw.
// Aggregation lives under /v1/stats.

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use eventstats_core::Participation;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

use super::common::{CreatedResponse, ErrorResponse, ListResponse, Stored};
use super::validation::{parse_body, parse_query, ApiError};
use crate::services::ParticipationService;

/// Optional academic year narrowing for per-student queries
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AcademicYearQuery {
    /// Only records of this academic year
    #[serde(default)]
    pub academic_year: Option<String>,
}

/// App state for participation routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ParticipationService>,
}

impl AppState {
    pub fn new(service: Arc<ParticipationService>) -> Self {
        Self { service }
    }
}

/// Create participation routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/v1/participations", post(create_participation))
        .route("/v1/participations/:roll_number", get(list_participations))
        .with_state(state)
}

/// POST /v1/participations - Record one student's outcome for one occurrence
#[utoipa::path(
    post,
    path = "/v1/participations",
    request_body = Participation,
    responses(
        (status = 201, description = "Participation recorded", body = CreatedResponse),
        (status = 422, description = "Invalid participation record", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "participations"
)]
pub async fn create_participation(
    State(state): State<AppState>,
    body: Result<Json<Participation>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let participation = parse_body(body)?;
    let id = state.service.create(participation).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// GET /v1/participations/{roll_number} - Raw records of a student
#[utoipa::path(
    get,
    path = "/v1/participations/{roll_number}",
    params(
        ("roll_number" = String, Path, description = "Student roll number"),
        AcademicYearQuery
    ),
    responses(
        (status = 200, description = "Records in store order", body = ListResponse<Stored<Participation>>),
        (status = 422, description = "Malformed query string", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "participations"
)]
pub async fn list_participations(
    State(state): State<AppState>,
    Path(roll_number): Path<String>,
    query: Result<Query<AcademicYearQuery>, QueryRejection>,
) -> Result<Json<ListResponse<Stored<Participation>>>, ApiError> {
    let query = parse_query(query)?;
    let records = state
        .service
        .list_for_student(&roll_number, query.academic_year)
        .await?;
    Ok(Json(ListResponse::new(records)))
}
