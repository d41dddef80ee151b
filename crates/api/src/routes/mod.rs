pub mod admin;
pub mod blog;
pub mod contact;
pub mod gallery;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /contact                         POST   submit contact form
///
/// /gallery/brands                  GET    brand-indexed portfolio groups
/// /gallery/services                GET    services as stored
///
/// /blog/posts                      GET    list posts (paginated)
/// /blog/posts/{slug}               GET    single post by slug
///
/// /admin/import                    POST   replace / merge / preview import
/// /admin/store                     GET    export the held store document
/// /admin/media/unorganized         GET    media files not yet organized
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(contact::router())
        .nest("/gallery", gallery::router())
        .nest("/blog", blog::router())
        .nest("/admin", admin::router())
}
