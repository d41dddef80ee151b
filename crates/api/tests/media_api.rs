//! Integration tests for the admin media scan endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, build_test_app_with_config, get, sample_store, test_config};

#[tokio::test]
async fn unreferenced_media_files_are_listed() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["gt3.jpg", "m4-walkaround.mp4", "notes.txt"] {
        std::fs::write(dir.path().join(name), b"x").unwrap();
    }

    let mut config = test_config();
    config.media_dir = dir.path().to_str().unwrap().to_string();

    // gt3.jpg is referenced by the fixture store; notes.txt is not media.
    let app = build_test_app_with_config(sample_store(), config);
    let response = get(app, "/api/v1/admin/media/unorganized").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json["data"],
        serde_json::json!([{ "name": "m4-walkaround.mp4", "type": "video" }])
    );
}

#[tokio::test]
async fn missing_media_directory_degrades_to_empty_list() {
    // Default test config points at a directory that does not exist.
    let app = build_test_app(sample_store());
    let response = get(app, "/api/v1/admin/media/unorganized").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"], serde_json::json!([]));
}
