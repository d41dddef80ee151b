use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use detailworks_api::config::ServerConfig;
use detailworks_api::router::build_app_router;
use detailworks_api::state::AppState;
use detailworks_core::store::ContentStore;

/// Build a test `ServerConfig` with safe defaults.
///
/// The CMS base URL points at a closed local port so blog endpoints
/// exercise the degrade-to-empty path, and the media directory does not
/// exist so the media scan degrades too (tests that need a real directory
/// override `media_dir`).
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        content_store_path: "unused-in-tests.json".to_string(),
        media_dir: "/nonexistent/media".to_string(),
        cms_base_url: "http://127.0.0.1:9/api".to_string(),
        contact_rate_limit: 5,
        contact_rate_window_secs: 60,
    }
}

/// Content store fixture shared by the integration suites.
pub fn sample_store() -> ContentStore {
    ContentStore::from_json(
        r#"{
            "services": [
                {
                    "id": "detailing",
                    "name": "Car Detailing",
                    "projects": [
                        {
                            "id": "p1",
                            "name": "Porsche 911 GT3",
                            "location": "Leeds",
                            "media": [
                                { "id": "m1", "src": "/media/gt3.jpg", "alt": "GT3 front", "type": "image" }
                            ]
                        },
                        { "id": "p2", "name": "Audi RS6" }
                    ]
                },
                {
                    "id": "specials",
                    "name": "Specials",
                    "projects": [
                        { "id": "p3", "name": "Barn Find Revival" },
                        { "id": "p4", "name": "McLaren 720S One-Off" }
                    ]
                }
            ]
        }"#,
    )
    .expect("sample store must parse")
}

/// Build the full application router with all middleware layers, mirroring
/// the router construction in `main.rs` so integration tests exercise the
/// same stack (CORS, request ID, timeout, tracing, panic recovery) that
/// production uses.
pub fn build_test_app(store: ContentStore) -> Router {
    build_test_app_with_config(store, test_config())
}

pub fn build_test_app_with_config(store: ContentStore, config: ServerConfig) -> Router {
    let state = AppState::new(store, config.clone());
    build_app_router(state, &config)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request builds"),
    )
    .await
    .expect("request succeeds")
}

/// Issue a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds"),
    )
    .await
    .expect("request succeeds")
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is JSON")
}
