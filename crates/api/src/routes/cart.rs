//! Cart route handlers.
//!
//! These are placeholders: every cart route answers 200 with an empty body.
//! Once carts exist they will require a login token (401 without one), answer
//! 404 for unknown products or cart items, and 409 when the requested
//! quantity is not in stock.

use axum::{extract::Path, http::StatusCode};
use tracing::instrument;

/// Show the current cart.
///
/// # Route
///
/// `GET /v1/me/cart`
#[instrument]
#[allow(clippy::unused_async)]
pub async fn show() -> StatusCode {
    StatusCode::OK
}

/// Add an item to the cart.
///
/// # Route
///
/// `POST /v1/me/cart`
#[instrument]
#[allow(clippy::unused_async)]
pub async fn add() -> StatusCode {
    StatusCode::OK
}

/// Change the quantity of a cart item.
///
/// # Route
///
/// `POST /v1/me/cart/{cartProductId}`
#[instrument]
#[allow(clippy::unused_async)]
pub async fn update(Path(cart_product_id): Path<String>) -> StatusCode {
    StatusCode::OK
}

/// Remove an item from the cart.
///
/// # Route
///
/// `DELETE /v1/me/cart/{cartProductId}`
#[instrument]
#[allow(clippy::unused_async)]
pub async fn remove(Path(cart_product_id): Path<String>) -> StatusCode {
    StatusCode::OK
}
