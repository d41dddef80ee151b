//! Blog endpoints backed by the external CMS.
//!
//! The CMS is consumed read-only and failures never break the page: the
//! list degrades to an empty result and a missing/unreachable post renders
//! as 404.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::{routing::get, Json, Router};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_PER_PAGE: u32 = 9;
const MAX_PER_PAGE: u32 = 50;

/// Pagination parameters (`?page=&per_page=`).
#[derive(Debug, Deserialize)]
pub struct PostListParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// GET /api/v1/blog/posts
async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<PostListParams>,
) -> impl IntoResponse {
    let page = params.page.unwrap_or(DEFAULT_PAGE).max(1);
    let per_page = params
        .per_page
        .unwrap_or(DEFAULT_PER_PAGE)
        .clamp(1, MAX_PER_PAGE);

    let posts = state.cms.list_posts_lenient(page, per_page).await;

    Json(DataResponse { data: posts })
}

/// GET /api/v1/blog/posts/{slug}
async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    match state.cms.get_post_lenient(&slug).await {
        Some(post) => Ok(Json(DataResponse { data: post })),
        None => Err(AppError::NotFound(format!("No post with slug '{slug}'"))),
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/posts", get(list_posts))
        .route("/posts/{slug}", get(get_post))
}
