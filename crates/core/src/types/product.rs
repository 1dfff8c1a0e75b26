//! Catalog products.

use serde::{Deserialize, Serialize};

use crate::store::Entity;
use crate::types::{BrandId, Price, ProductId};

/// A product as it arrives from fixture data, before it has an ID.
///
/// Any `id` field present in the input is ignored; the store assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    /// Brand this product belongs to. Not checked against the brand store.
    pub category_id: BrandId,
    pub name: String,
    pub description: String,
    pub price: Price,
    /// Image URLs in display order.
    pub image_urls: Vec<String>,
}

/// A stored product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(flatten)]
    pub attrs: NewProduct,
}

impl Product {
    /// Whether the description contains `query` (case-sensitive substring).
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        self.attrs.description.contains(query)
    }

    /// Whether this product belongs to `brand`.
    #[must_use]
    pub fn belongs_to(&self, brand: BrandId) -> bool {
        self.attrs.category_id == brand
    }
}

impl Entity for Product {
    type Id = ProductId;
    type New = NewProduct;

    fn from_new(id: Self::Id, new: Self::New) -> Self {
        Self { id, attrs: new }
    }

    fn id(&self) -> Self::Id {
        self.id
    }
}
