//! Catalog Mock Core - Domain types and in-memory stores.
//!
//! This crate provides the types shared by the API server and its tests:
//! - typed IDs, prices, and the catalog entities (products, brands, users, tokens)
//! - [`EntityStore`], the sequential-ID in-memory collection backing each entity
//!
//! # Architecture
//!
//! The core crate contains only types and plain data structures - no I/O, no
//! locking, no HTTP. Callers decide how stores are shared across threads.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs and prices, and the entity records
//! - [`store`] - The generic entity store

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod store;
pub mod types;

pub use store::{Entity, EntityStore};
pub use types::*;
