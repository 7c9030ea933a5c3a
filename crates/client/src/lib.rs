//! `storefront-client`
//!
//! **Responsibility:** access to the remote catalog.
//!
//! This crate provides:
//! - The injected [`CatalogClient`] interface
//! - An HTTP implementation against the storefront REST backend
//! - A keyed response cache with per-query stale times
//! - An in-memory client for tests and demos
//!
//! The backend remains the authority; nothing here writes to it.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod memory;

pub use cache::{CachePolicy, CachedCatalogClient, QueryKey};
pub use client::CatalogClient;
pub use config::StorefrontConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpCatalogClient;
pub use memory::InMemoryCatalogClient;
