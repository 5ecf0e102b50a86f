// Student HTTP routes

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use eventstats_core::Student;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use super::common::{CreatedResponse, ErrorResponse, ListResponse, Stored};
use super::validation::{parse_body, parse_query, ApiError};
use crate::services::StudentService;
use crate::storage::StorageBackend;

/// Roster selector: one branch in one academic year
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RosterQuery {
    /// Academic year label, e.g. "2024-25"
    pub academic_year: String,
    /// Branch / department name
    pub branch: String,
}

/// Sorted roll numbers of a roster
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RollNumbersResponse {
    #[schema(example = json!(["249Y1A3902", "249Y1A3910", "249Y1A399"]))]
    pub roll_numbers: Vec<String>,
}

/// App state for student routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<StudentService>,
}

impl AppState {
    pub fn new(db: Arc<StorageBackend>) -> Self {
        Self {
            service: Arc::new(StudentService::new(db)),
        }
    }
}

/// Create student routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/v1/students", post(create_student).get(list_students))
        .route("/v1/students/:roll_number", get(get_student))
        .route("/v1/roll-numbers", get(list_roll_numbers))
        .with_state(state)
}

/// POST /v1/students - Enroll a student
#[utoipa::path(
    post,
    path = "/v1/students",
    request_body = Student,
    responses(
        (status = 201, description = "Student created", body = CreatedResponse),
        (status = 409, description = "Roll number already exists", body = ErrorResponse),
        (status = 422, description = "Invalid student record", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "students"
)]
pub async fn create_student(
    State(state): State<AppState>,
    body: Result<Json<Student>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let student = parse_body(body)?;
    let id = state.service.create(student).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// GET /v1/students - Roster of one branch in one academic year, sorted by roll number
#[utoipa::path(
    get,
    path = "/v1/students",
    params(RosterQuery),
    responses(
        (status = 200, description = "Students sorted by roll number", body = ListResponse<Stored<Student>>),
        (status = 422, description = "Missing roster selector", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "students"
)]
pub async fn list_students(
    State(state): State<AppState>,
    query: Result<Query<RosterQuery>, QueryRejection>,
) -> Result<Json<ListResponse<Stored<Student>>>, ApiError> {
    let query = parse_query(query)?;
    let students = state
        .service
        .list(&query.academic_year, &query.branch)
        .await?;
    Ok(Json(ListResponse::new(students)))
}

/// GET /v1/students/{roll_number} - Get a student by roll number
#[utoipa::path(
    get,
    path = "/v1/students/{roll_number}",
    params(
        ("roll_number" = String, Path, description = "Student roll number")
    ),
    responses(
        (status = 200, description = "Student found", body = Stored<Student>),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "students"
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(roll_number): Path<String>,
) -> Result<Json<Stored<Student>>, ApiError> {
    Ok(Json(state.service.get(&roll_number).await?))
}

/// GET /v1/roll-numbers - Sorted roll numbers of a roster
#[utoipa::path(
    get,
    path = "/v1/roll-numbers",
    params(RosterQuery),
    responses(
        (status = 200, description = "Roll numbers in lexicographic order", body = RollNumbersResponse),
        (status = 422, description = "Missing roster selector", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "students"
)]
pub async fn list_roll_numbers(
    State(state): State<AppState>,
    query: Result<Query<RosterQuery>, QueryRejection>,
) -> Result<Json<RollNumbersResponse>, ApiError> {
    let query = parse_query(query)?;
    let roll_numbers = state
        .service
        .roll_numbers(&query.academic_year, &query.branch)
        .await?;
    Ok(Json(RollNumbersResponse { roll_numbers }))
}
