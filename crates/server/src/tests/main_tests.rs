use super::*;
use axum::{
    body::{self, Body},
    http::{header, Request},
};
use crate::engine::{EngineError, MockEngine, WorldEngine, WorldSeed};
use tower::ServiceExt;

struct FailingEngine(EngineError);

#[async_trait::async_trait]
impl WorldEngine for FailingEngine {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn generate(&self, _seed: WorldSeed<'_>) -> Result<WorldResult, EngineError> {
        Err(self.0.clone())
    }
}

fn test_app(engine: Arc<dyn WorldEngine>) -> Router {
    build_router(Arc::new(AppState {
        api: ApiContext { engine },
        app_name: "MindCraft API".to_string(),
    }))
}

fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app(Arc::new(MockEngine));
    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let health: HealthResponse = body_json(response).await;
    assert_eq!(health.status, "ok");
}

#[tokio::test]
async fn create_returns_world_for_described_seed() {
    let app = test_app(Arc::new(MockEngine));
    let response = app
        .oneshot(json_post(
            "/api/world/create",
            serde_json::json!({ "description": "Clockwork desert", "player_name": "Kai" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let world: WorldResult = body_json(response).await;
    assert!(world.world_description.starts_with("Clockwork desert (mock "));
    assert_eq!(world.player_name.as_deref(), Some("Kai"));
    assert!(world.hints_for_image.is_some());
}

#[tokio::test]
async fn create_with_short_description_is_unprocessable() {
    let app = test_app(Arc::new(MockEngine));
    let response = app
        .oneshot(json_post(
            "/api/world/create",
            serde_json::json!({ "description": " a " }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let error: ErrorResponse = body_json(response).await;
    assert!(!error.detail.is_empty());
}

#[tokio::test]
async fn random_accepts_missing_body() {
    let app = test_app(Arc::new(MockEngine));
    let response = app
        .oneshot(
            Request::post("/api/world/random")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let world: WorldResult = body_json(response).await;
    assert!(world.player_name.is_some());
}

#[tokio::test]
async fn random_rejects_mistyped_body_instead_of_defaulting() {
    let app = test_app(Arc::new(MockEngine));
    let response = app
        .oneshot(json_post(
            "/api/world/random",
            serde_json::json!({ "player_name": 42 }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let error: ErrorResponse = body_json(response).await;
    assert!(error.detail.starts_with("invalid request body"), "{}", error.detail);
}

#[tokio::test]
async fn random_validates_name_even_without_json_content_type() {
    let app = test_app(Arc::new(MockEngine));
    let body = serde_json::json!({ "player_name": "x".repeat(81) }).to_string();
    let response = app
        .oneshot(
            Request::post("/api/world/random")
                .header(header::CONTENT_TYPE, "text/plain")
                .body(Body::from(body))
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn random_rejects_overlong_player_name() {
    let app = test_app(Arc::new(MockEngine));
    let response = app
        .oneshot(json_post(
            "/api/world/random",
            serde_json::json!({ "player_name": "x".repeat(81) }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn engine_failure_maps_to_bad_gateway_with_detail() {
    let app = test_app(Arc::new(FailingEngine(EngineError::Unreadable)));
    let response = app
        .oneshot(json_post("/api/world/random", serde_json::json!({})))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let error: ErrorResponse = body_json(response).await;
    assert_eq!(error.detail, "AI response unreadable");
}

#[tokio::test]
async fn cors_allows_configured_origin() {
    let app = test_app(Arc::new(MockEngine))
        .layer(cors_layer(&["http://localhost:5173".to_string()]));
    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/world/create")
                .header(header::ORIGIN, "http://localhost:5173")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok()),
        Some("http://localhost:5173")
    );
}
