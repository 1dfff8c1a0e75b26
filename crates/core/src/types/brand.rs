//! Brands (product categories).

use serde::{Deserialize, Serialize};

use crate::store::Entity;
use crate::types::BrandId;

/// A brand before it has an ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBrand {
    pub name: String,
}

impl NewBrand {
    /// Create a brand with the given name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A stored brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: BrandId,
    #[serde(flatten)]
    pub attrs: NewBrand,
}

impl Entity for Brand {
    type Id = BrandId;
    type New = NewBrand;

    fn from_new(id: Self::Id, new: Self::New) -> Self {
        Self { id, attrs: new }
    }

    fn id(&self) -> Self::Id {
        self.id
    }
}
