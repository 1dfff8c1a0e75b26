//! Product route handlers.

use axum::{
    Json,
    extract::{Query, State},
};
use tracing::instrument;

use catalog_mock_core::Product;

use crate::state::AppState;

/// Search parameters for the product listing.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Substring to look for in product descriptions.
    pub query: Option<String>,
}

impl SearchQuery {
    /// Pick the search term out of decoded query-string pairs.
    ///
    /// The first non-empty `query` wins; other parameters are ignored.
    #[must_use]
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let query = pairs
            .into_iter()
            .find(|(key, value)| key == "query" && !value.is_empty())
            .map(|(_, value)| value);
        Self { query }
    }
}

/// List all products, or those whose description contains `query`.
///
/// The query string is read as raw pairs so that repeated or unknown
/// parameters never reject the request.
///
/// # Route
///
/// `GET /v1/products`
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<Vec<Product>> {
    let search = SearchQuery::from_pairs(pairs);
    let products = state.catalog().products().read().await.all().to_vec();

    let matches = match search.query {
        Some(query) => products
            .into_iter()
            .filter(|product| product.matches_query(&query))
            .collect(),
        None => products,
    };

    Json(matches)
}
