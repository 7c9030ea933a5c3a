//! `storefront-core` — shared building blocks for the storefront crates.
//!
//! This crate contains **pure** primitives (no IO, no HTTP).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::{Entity, find_by_id};
pub use error::{DomainError, DomainResult};
pub use id::{CategoryId, PriceRangeId, ProductId, SubcategoryId};
