//! Catalog Mock API library.
//!
//! This crate provides the API server as a library, allowing it to be
//! tested and reused. The `catalog-mock-api` binary wires it to a listener.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod extract;
pub mod fixtures;
pub mod routes;
pub mod services;
pub mod state;

pub use app::app;
