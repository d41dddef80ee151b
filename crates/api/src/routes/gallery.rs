//! Portfolio gallery read endpoints.

use axum::extract::State;
use axum::{routing::get, Json, Router};

use detailworks_core::gallery::{self, BrandGroup, ALWAYS_SHOW_BRANDS};
use detailworks_core::store::Service;

use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/gallery/brands
///
/// Brand-indexed view of the portfolio, rebuilt from the held store on
/// every read. Allowlisted brands are always present, empty if necessary,
/// and the catch-all group sorts last.
async fn brand_groups(State(state): State<AppState>) -> Json<DataResponse<Vec<BrandGroup>>> {
    let store = state.store.read().await;
    let groups = gallery::build_brand_groups(&store, ALWAYS_SHOW_BRANDS);

    Json(DataResponse { data: groups })
}

/// GET /api/v1/gallery/services
///
/// The service categories as stored, with derived id arrays.
async fn services(State(state): State<AppState>) -> Json<DataResponse<Vec<Service>>> {
    let store = state.store.read().await;

    Json(DataResponse {
        data: store.services.clone(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/brands", get(brand_groups))
        .route("/services", get(services))
}
