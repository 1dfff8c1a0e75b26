//! The in-memory catalog shared by all handlers.
//!
//! Holds one [`EntityStore`] per entity type, each behind its own `RwLock`
//! so reads of different stores never contend.

use tokio::sync::RwLock;

use catalog_mock_core::{Brand, EntityStore, Product, Token, User};

use crate::fixtures::Fixtures;

/// Products, brands, users and issued tokens.
#[derive(Debug, Default)]
pub struct Catalog {
    products: RwLock<EntityStore<Product>>,
    brands: RwLock<EntityStore<Brand>>,
    users: RwLock<EntityStore<User>>,
    tokens: RwLock<EntityStore<Token>>,
}

impl Catalog {
    /// Build a catalog seeded from fixture data. The token store starts empty.
    #[must_use]
    pub fn new(fixtures: Fixtures) -> Self {
        Self {
            products: RwLock::new(EntityStore::with_records(fixtures.products)),
            brands: RwLock::new(EntityStore::with_records(fixtures.brands)),
            users: RwLock::new(EntityStore::with_records(fixtures.users)),
            tokens: RwLock::new(EntityStore::new()),
        }
    }

    /// The product store.
    #[must_use]
    pub const fn products(&self) -> &RwLock<EntityStore<Product>> {
        &self.products
    }

    /// The brand store.
    #[must_use]
    pub const fn brands(&self) -> &RwLock<EntityStore<Brand>> {
        &self.brands
    }

    /// The user store.
    #[must_use]
    pub const fn users(&self) -> &RwLock<EntityStore<User>> {
        &self.users
    }

    /// The issued-token store.
    #[must_use]
    pub const fn tokens(&self) -> &RwLock<EntityStore<Token>> {
        &self.tokens
    }

    /// Empty every store, rewind all ID counters, and reseed from `fixtures`.
    #[cfg(any(test, feature = "test-support"))]
    pub async fn reset(&self, fixtures: Fixtures) {
        {
            let mut products = self.products.write().await;
            products.remove_all();
            products.reset_ids();
            products.add_all(fixtures.products);
        }
        {
            let mut brands = self.brands.write().await;
            brands.remove_all();
            brands.reset_ids();
            brands.add_all(fixtures.brands);
        }
        {
            let mut users = self.users.write().await;
            users.remove_all();
            users.reset_ids();
            users.add_all(fixtures.users);
        }
        let mut tokens = self.tokens.write().await;
        tokens.remove_all();
        tokens.reset_ids();
    }
}
