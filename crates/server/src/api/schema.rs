// Entity schema HTTP route
//
// Serves the JSON schemas of the stored entities, keyed by collection name,
// so clients can build forms without fetching the whole OpenAPI document.

use axum::{http::StatusCode, routing::get, Json, Router};
use eventstats_core::{Event, Participation, Record, Student};
use serde_json::{Map, Value};
use utoipa::OpenApi;

use super::common::ErrorResponse;
use super::validation::ApiError;
use crate::openapi::ApiDoc;

/// Create schema routes
pub fn routes() -> Router {
    Router::new().route("/v1/schema", get(get_schema))
}

const COMPONENT_REF_PREFIX: &str = "#/components/schemas/";
const DEFINITION_REF_PREFIX: &str = "#/definitions/";

/// Schemas of the stored entities, keyed by collection name.
///
/// Component references are rewritten to `#/definitions/<Name>` and every
/// referenced component is served under `definitions`, so the document is
/// self-contained.
pub fn entity_schemas() -> Result<Value, serde_json::Error> {
    let components = ApiDoc::openapi().components.unwrap_or_default();

    let mut entities = Map::new();
    let mut pending = Vec::new();
    for (collection, component) in [
        (Student::COLLECTION, "Student"),
        (Event::COLLECTION, "Event"),
        (Participation::COLLECTION, "Participation"),
    ] {
        if let Some(schema) = components.schemas.get(component) {
            let mut schema = serde_json::to_value(schema)?;
            rewrite_refs(&mut schema, &mut pending);
            entities.insert(collection.to_string(), schema);
        }
    }

    let mut definitions = Map::new();
    while let Some(name) = pending.pop() {
        if definitions.contains_key(&name) {
            continue;
        }
        match components.schemas.get(&name) {
            Some(schema) => {
                let mut schema = serde_json::to_value(schema)?;
                rewrite_refs(&mut schema, &mut pending);
                definitions.insert(name, schema);
            }
            None => tracing::warn!(component = %name, "Referenced schema component not found"),
        }
    }
    entities.insert("definitions".to_string(), Value::Object(definitions));

    Ok(Value::Object(entities))
}

/// Point component references at `definitions`, collecting the referenced names.
fn rewrite_refs(value: &mut Value, referenced: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map.iter_mut() {
                match child {
                    Value::String(target) if key == "$ref" => {
                        if let Some(name) = target.strip_prefix(COMPONENT_REF_PREFIX) {
                            referenced.push(name.to_string());
                            *target = format!("{DEFINITION_REF_PREFIX}{name}");
                        }
                    }
                    _ => rewrite_refs(child, referenced),
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                rewrite_refs(item, referenced);
            }
        }
        _ => {}
    }
}

/// GET /v1/schema - JSON schemas of the stored entities
#[utoipa::path(
    get,
    path = "/v1/schema",
    responses(
        (status = 200, description = "Entity schemas by collection", body = serde_json::Value),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "schema"
)]
pub async fn get_schema() -> Result<Json<Value>, ApiError> {
    entity_schemas().map(Json).map_err(|e| {
        tracing::error!("Failed to serialize entity schemas: {}", e);
        ErrorResponse::new("Internal server error").into_response(StatusCode::INTERNAL_SERVER_ERROR)
    })
}
