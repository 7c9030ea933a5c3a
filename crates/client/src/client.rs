//! Catalog client interface.

use async_trait::async_trait;

use storefront_catalog::{PriceRange, Product};
use storefront_core::{CategoryId, PriceRangeId};

use crate::error::ClientResult;

/// Request/response access to the remote catalog.
///
/// Views receive an implementation explicitly instead of reaching for a
/// process-wide request cache.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Full product collection.
    async fn get_products(&self) -> ClientResult<Vec<Product>>;

    /// Price buckets offered by the sort sidebar.
    async fn get_price_ranges(&self) -> ClientResult<Vec<PriceRange>>;

    /// Products of `category` inside price bucket `range`, already scoped by
    /// the backend.
    async fn get_filtered_by_price(
        &self,
        category: &CategoryId,
        range: &PriceRangeId,
    ) -> ClientResult<Vec<Product>>;
}

#[async_trait]
impl<'a, T> CatalogClient for &'a T
where
    T: CatalogClient + ?Sized,
{
    async fn get_products(&self) -> ClientResult<Vec<Product>> {
        (**self).get_products().await
    }

    async fn get_price_ranges(&self) -> ClientResult<Vec<PriceRange>> {
        (**self).get_price_ranges().await
    }

    async fn get_filtered_by_price(
        &self,
        category: &CategoryId,
        range: &PriceRangeId,
    ) -> ClientResult<Vec<Product>> {
        (**self).get_filtered_by_price(category, range).await
    }
}
