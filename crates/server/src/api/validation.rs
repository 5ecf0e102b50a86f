// Request body validation
//
// Every JSON body goes through `parse_body` (and query strings through
// `parse_query`) so that syntax errors, missing fields and unknown enum values
// surface as 422 with a readable message.
// Range checks on the decoded value happen in the services layer.

use super::common::ErrorResponse;
use crate::services::ServiceError;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::Query;
use axum::http::StatusCode;
use axum::Json;
use eventstats_core::ValidationError;

/// Error tuple returned by handlers
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Unwrap an extracted JSON body, mapping any rejection to a validation error.
pub fn parse_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            let message = rejection.body_text();
            tracing::warn!("Rejected request body: {}", message);
            Err(ServiceError::from(ValidationError::malformed(message)).into())
        }
    }
}

/// Unwrap extracted query parameters. A missing required parameter is a
/// validation error like any other.
pub fn parse_query<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    match query {
        Ok(Query(value)) => Ok(value),
        Err(rejection) => {
            let message = rejection.body_text();
            tracing::warn!("Rejected query string: {}", message);
            Err(ServiceError::from(ValidationError::malformed(message)).into())
        }
    }
}
