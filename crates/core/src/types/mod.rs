//! Core types for the catalog mock.
//!
//! This module provides type-safe wrappers for IDs and prices, plus the
//! catalog entities built on them.

pub mod brand;
pub mod id;
pub mod price;
pub mod product;
pub mod token;
pub mod user;

pub use brand::{Brand, NewBrand};
pub use id::{BrandId, IdAllocator, ParseIdError, ProductId, TokenId, UserId};
pub use price::Price;
pub use product::{NewProduct, Product};
pub use token::{NewToken, Token};
pub use user::{Login, NewUser, User};
