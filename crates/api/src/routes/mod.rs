//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                        - Health check
//!
//! # Catalog
//! GET    /v1/products?query=            - Product listing / description search
//! GET    /v1/brands                     - Brand listing
//! GET    /v1/brands/{brandId}/products  - Products of one brand
//!
//! # Auth
//! POST   /v1/login                      - Exchange username/password for a token
//!
//! # Cart (stubs, always 200 with an empty body)
//! GET    /v1/me/cart                    - Current cart
//! POST   /v1/me/cart                    - Add item
//! POST   /v1/me/cart/{cartProductId}    - Change item quantity
//! DELETE /v1/me/cart/{cartProductId}    - Remove item
//! ```

pub mod auth;
pub mod brands;
pub mod cart;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the brand routes router.
pub fn brand_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(brands::index))
        .route("/{brand_id}/products", get(brands::products))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show).post(cart::add))
        .route(
            "/{cart_product_id}",
            post(cart::update).delete(cart::remove),
        )
}

/// Create the versioned API routes.
pub fn v1_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::index))
        .nest("/brands", brand_routes())
        .route("/login", post(auth::login))
        .nest("/me/cart", cart_routes())
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new().nest("/v1", v1_routes())
}
