use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderValue, StatusCode},
    routing::{get, post},
    Json, Router,
};
use shared::{
    error::ErrorResponse,
    protocol::{HealthResponse, WorldCreateRequest, WorldRandomRequest, WorldResult},
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod api;
mod app_state;
mod config;
mod engine;

use api::{ApiContext, ApiFailure};
use app_state::AppState;
use config::load_settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = load_settings();
    let engine = settings.build_engine()?;
    info!(
        app_name = %settings.app_name,
        engine = engine.name(),
        "world generation engine ready"
    );

    let state = AppState {
        api: ApiContext { engine },
        app_name: settings.app_name.clone(),
    };
    let app = build_router(Arc::new(state))
        .layer(cors_layer(&settings.allow_origins))
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = settings
        .server_bind
        .parse()
        .with_context(|| format!("invalid bind address '{}'", settings.server_bind))?;
    info!(%addr, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/world/create", post(create_world))
        .route("/api/world/random", post(random_world))
        .with_state(state)
}

fn cors_layer(allow_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if allow_origins.is_empty() || allow_origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allow_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(%origin, "skipping invalid CORS origin: {err}");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    tracing::debug!(app_name = %state.app_name, "health check");
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

async fn create_world(
    State(state): State<Arc<AppState>>,
    Json(req): Json<WorldCreateRequest>,
) -> Result<Json<WorldResult>, (StatusCode, Json<ErrorResponse>)> {
    api::create_world(&state.api, req)
        .await
        .map(Json)
        .map_err(failure_response)
}

async fn random_world(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<WorldResult>, (StatusCode, Json<ErrorResponse>)> {
    let req = random_request_from_body(&body)?;
    api::random_world(&state.api, req)
        .await
        .map(Json)
        .map_err(failure_response)
}

/// An absent body means an anonymous random world. Anything else has to be a
/// well-formed `WorldRandomRequest`.
fn random_request_from_body(
    body: &[u8],
) -> Result<WorldRandomRequest, (StatusCode, Json<ErrorResponse>)> {
    if body.trim_ascii().is_empty() {
        return Ok(WorldRandomRequest::default());
    }
    serde_json::from_slice(body).map_err(|err| {
        warn!("rejected random world body: {err}");
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::new(format!("invalid request body: {err}"))),
        )
    })
}

fn failure_response(err: ApiFailure) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &err {
        ApiFailure::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ApiFailure::Engine(_) => StatusCode::BAD_GATEWAY,
    };
    warn!(status = status.as_u16(), "world request failed: {err}");
    (status, Json(err.body()))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
