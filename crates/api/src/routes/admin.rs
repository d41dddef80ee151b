//! Operator-facing content tools.
//!
//! The import endpoint applies a candidate store document to the held store
//! through the pure reducer in `detailworks_core::importer`. A malformed
//! candidate is rejected before the reducer runs, so a validation failure
//! never leaves a partial merge behind. The server never writes the on-disk
//! document: the operator exports `/admin/store` and redeploys.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use detailworks_core::importer::{self, ImportMode, ImportReport};
use detailworks_core::media_scan::{self, UnorganizedFile};
use detailworks_core::store::ContentStore;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/admin/import request body.
///
/// `store` stays raw JSON so shape problems surface as a 400 naming the
/// problem instead of a generic body-rejection.
#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    pub mode: ImportMode,
    pub store: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub mode: ImportMode,
    pub report: ImportReport,
    /// The resulting store (merge/replace) or the filtered preview (new_only).
    pub store: ContentStore,
}

/// POST /api/v1/admin/import
async fn import(
    State(state): State<AppState>,
    Json(input): Json<ImportRequest>,
) -> AppResult<impl IntoResponse> {
    let candidate: ContentStore = serde_json::from_value(input.store)
        .map_err(|e| AppError::BadRequest(format!("Invalid content store document: {e}")))?;
    candidate.validate()?;

    let mut held = state.store.write().await;
    let (result, report) = importer::apply_import(&held, &state.original, candidate, input.mode);

    // NewOnly is a preview; it never mutates the held store.
    if input.mode != ImportMode::NewOnly {
        *held = result.clone();
    }

    tracing::info!(
        mode = ?input.mode,
        added = report.added,
        skipped = report.skipped,
        "Content import processed"
    );

    Ok(Json(DataResponse {
        data: ImportResponse {
            mode: input.mode,
            report,
            store: result,
        },
    }))
}

/// GET /api/v1/admin/store
///
/// Export the held store document, derived id arrays included.
async fn export_store(State(state): State<AppState>) -> Json<DataResponse<ContentStore>> {
    let store = state.store.read().await;

    Json(DataResponse {
        data: store.clone(),
    })
}

/// GET /api/v1/admin/media/unorganized
///
/// Media files on disk that no project references yet. An unreadable
/// directory degrades to an empty list rather than failing the view.
async fn unorganized_media(
    State(state): State<AppState>,
) -> Json<DataResponse<Vec<UnorganizedFile>>> {
    let referenced = state.store.read().await.media_basenames();

    let files = match list_media_dir(&state.config.media_dir).await {
        Ok(files) => files,
        Err(e) => {
            tracing::warn!(
                error = %e,
                dir = %state.config.media_dir,
                "Media directory scan failed, serving empty list"
            );
            Vec::new()
        }
    };

    Json(DataResponse {
        data: media_scan::unorganized(&files, &referenced),
    })
}

/// Plain file names in `dir`, sorted for stable output.
async fn list_media_dir(dir: &str) -> std::io::Result<Vec<String>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut files = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_file() {
            if let Some(name) = entry.file_name().to_str() {
                files.push(name.to_string());
            }
        }
    }

    files.sort();
    Ok(files)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/import", post(import))
        .route("/store", get(export_store))
        .route("/media/unorganized", get(unorganized_media))
}
