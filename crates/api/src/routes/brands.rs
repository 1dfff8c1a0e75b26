//! Brand route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use catalog_mock_core::{Brand, BrandId, Product};

use crate::error::{AppError, Result};
use crate::state::AppState;

const BRAND_NOT_FOUND: &str = "no brand with that id found";

/// List all brands.
///
/// # Route
///
/// `GET /v1/brands`
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<Brand>> {
    Json(state.catalog().brands().read().await.all().to_vec())
}

/// List the products of one brand.
///
/// The brand ID is taken as raw text so that an unparsable ID is reported
/// the same way as an unknown one (404) rather than as a bad request.
///
/// # Errors
///
/// Returns `AppError::NotFound` if no brand has this ID.
///
/// # Route
///
/// `GET /v1/brands/{brandId}/products`
#[instrument(skip(state))]
pub async fn products(
    State(state): State<AppState>,
    Path(brand_id): Path<String>,
) -> Result<Json<Vec<Product>>> {
    let brand_id = brand_id
        .parse::<BrandId>()
        .map_err(|_| AppError::NotFound(BRAND_NOT_FOUND.to_string()))?;

    let brand_id = state
        .catalog()
        .brands()
        .read()
        .await
        .get(brand_id)
        .map(|brand| brand.id)
        .ok_or_else(|| AppError::NotFound(BRAND_NOT_FOUND.to_string()))?;

    let products = state
        .catalog()
        .products()
        .read()
        .await
        .all()
        .iter()
        .filter(|product| product.belongs_to(brand_id))
        .cloned()
        .collect();

    Ok(Json(products))
}
