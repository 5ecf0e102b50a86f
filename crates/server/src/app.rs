// Router assembly
// Decision: /health and the Swagger UI stay outside API_PREFIX
// Decision: CORS layer is added only when origins are configured

use axum::http::{header, Method};
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api;
use crate::config::{CorsOrigins, ServerConfig};
use crate::openapi::ApiDoc;
use crate::services::{ParticipationService, ReportService};
use crate::storage::StorageBackend;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    storage: &'static str,
    store_reachable: bool,
}

async fn health(State(db): State<Arc<StorageBackend>>) -> Json<HealthResponse> {
    let store_reachable = match db.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("Store ping failed: {:#}", e);
            false
        }
    };
    Json(HealthResponse {
        status: if store_reachable { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        storage: db.kind(),
        store_reachable,
    })
}

/// Build the full application router over a storage backend
pub fn build_app(db: Arc<StorageBackend>, config: &ServerConfig) -> Router {
    let participation_service = Arc::new(ParticipationService::new(db.clone()));
    let report_service = Arc::new(ReportService::new(participation_service.clone()));

    let students_state = api::students::AppState::new(db.clone());
    let events_state = api::events::AppState::new(db.clone());
    let participations_state = api::participations::AppState::new(participation_service);
    let stats_state = api::stats::AppState::new(report_service);

    let api_routes = Router::new()
        .merge(api::students::routes(students_state))
        .merge(api::events::routes(events_state))
        .merge(api::participations::routes(participations_state))
        .merge(api::stats::routes(stats_state))
        .merge(api::schema::routes());

    let app = Router::new()
        .route("/health", get(health).with_state(db))
        .merge(build_router_with_prefix(api_routes, &config.api_prefix))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()));

    let app = match cors_layer(&config.cors_origins) {
        Some(cors) => app.layer(cors),
        None => app,
    };

    app.layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &CorsOrigins) -> Option<CorsLayer> {
    let allow_origin = match origins {
        CorsOrigins::Disabled => {
            tracing::info!("CORS not configured (same-origin requests only)");
            return None;
        }
        CorsOrigins::Any => {
            tracing::info!("CORS allows any origin");
            AllowOrigin::from(Any)
        }
        CorsOrigins::List(list) => {
            tracing::info!(origins = ?list, "CORS origins configured");
            AllowOrigin::list(list.clone())
        }
    };

    Some(
        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN]),
    )
}

/// Build router with optional API prefix (extracted for testing)
pub fn build_router_with_prefix<S: Clone + Send + Sync + 'static>(
    api_routes: Router<S>,
    api_prefix: &str,
) -> Router<S> {
    if api_prefix.is_empty() {
        api_routes
    } else {
        Router::new().nest(api_prefix, api_routes)
    }
}
