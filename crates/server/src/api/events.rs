// Event series HTTP routes

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use eventstats_core::Event;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

use super::common::{CreatedResponse, ErrorResponse, ListResponse, Stored};
use super::validation::{parse_body, parse_query, ApiError};
use crate::services::EventService;
use crate::storage::StorageBackend;

/// Optional equality filters for listing event series
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListEventsQuery {
    /// Only series tagged with this academic year
    #[serde(default)]
    pub academic_year: Option<String>,
    /// Only series tagged with this branch
    #[serde(default)]
    pub branch: Option<String>,
}

/// App state for event routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EventService>,
}

impl AppState {
    pub fn new(db: Arc<StorageBackend>) -> Self {
        Self {
            service: Arc::new(EventService::new(db)),
        }
    }
}

/// Create event routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/v1/events", post(create_event).get(list_events))
        .with_state(state)
}

/// POST /v1/events - Define an event series
#[utoipa::path(
    post,
    path = "/v1/events",
    request_body = Event,
    responses(
        (status = 201, description = "Event series created", body = CreatedResponse),
        (status = 422, description = "Invalid event record", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn create_event(
    State(state): State<AppState>,
    body: Result<Json<Event>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let event = parse_body(body)?;
    let id = state.service.create(event).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// GET /v1/events - List event series
#[utoipa::path(
    get,
    path = "/v1/events",
    params(ListEventsQuery),
    responses(
        (status = 200, description = "Event series in creation order", body = ListResponse<Stored<Event>>),
        (status = 422, description = "Malformed query string", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn list_events(
    State(state): State<AppState>,
    query: Result<Query<ListEventsQuery>, QueryRejection>,
) -> Result<Json<ListResponse<Stored<Event>>>, ApiError> {
    let query = parse_query(query)?;
    let events = state
        .service
        .list(query.academic_year, query.branch)
        .await?;
    Ok(Json(ListResponse::new(events)))
}
