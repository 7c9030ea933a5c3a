//! In-memory catalog client for tests/dev.
//!
//! - No IO
//! - Applies price filtering locally the way the backend does
//! - Counts calls per endpoint so cache behavior can be observed

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use storefront_catalog::{PriceRange, Product};
use storefront_core::{CategoryId, PriceRangeId, find_by_id};

use crate::client::CatalogClient;
use crate::error::{ClientError, ClientResult};

/// Number of calls served per endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub products: usize,
    pub price_ranges: usize,
    pub filtered_by_price: usize,
}

#[derive(Debug, Default)]
pub struct InMemoryCatalogClient {
    products: Vec<Product>,
    price_ranges: Vec<PriceRange>,
    failing: AtomicBool,
    products_calls: AtomicUsize,
    price_range_calls: AtomicUsize,
    filtered_calls: AtomicUsize,
}

impl InMemoryCatalogClient {
    pub fn new(products: Vec<Product>, price_ranges: Vec<PriceRange>) -> Self {
        Self {
            products,
            price_ranges,
            ..Self::default()
        }
    }

    /// Make every subsequent call fail with a network error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> CallCounts {
        CallCounts {
            products: self.products_calls.load(Ordering::SeqCst),
            price_ranges: self.price_range_calls.load(Ordering::SeqCst),
            filtered_by_price: self.filtered_calls.load(Ordering::SeqCst),
        }
    }

    fn check_available(&self) -> ClientResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(ClientError::Network("catalog unavailable".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CatalogClient for InMemoryCatalogClient {
    async fn get_products(&self) -> ClientResult<Vec<Product>> {
        self.products_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        Ok(self.products.clone())
    }

    async fn get_price_ranges(&self) -> ClientResult<Vec<PriceRange>> {
        self.price_range_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        Ok(self.price_ranges.clone())
    }

    async fn get_filtered_by_price(
        &self,
        category: &CategoryId,
        range: &PriceRangeId,
    ) -> ClientResult<Vec<Product>> {
        self.filtered_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;

        let range = find_by_id(&self.price_ranges, range)
            .ok_or_else(|| ClientError::Api(404, format!("unknown price range {range}")))?;

        Ok(self
            .products
            .iter()
            .filter(|p| p.is_in_category(category) && range.contains(p.discounted_price))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use storefront_catalog::Category;
    use storefront_core::ProductId;

    pub(crate) fn sample_products() -> Vec<Product> {
        [("p1", "c1", 300.0), ("p2", "c1", 800.0), ("p3", "c2", 400.0)]
            .into_iter()
            .map(|(id, category, price)| Product {
                id: ProductId::new(id),
                name: id.to_uppercase(),
                price: price * 1.25,
                discounted_price: price,
                discount: 20.0,
                category: Some(Category {
                    id: CategoryId::new(category),
                    name: category.to_string(),
                }),
                subcategory: None,
                image_ids: vec![format!("img-{id}")],
                average_rating: 3.5,
                total_reviews: 1,
            })
            .collect()
    }

    pub(crate) fn sample_ranges() -> Vec<PriceRange> {
        vec![
            PriceRange {
                id: PriceRangeId::new("budget"),
                min_price: 0.0,
                max_price: 500.0,
                label: None,
            },
            PriceRange {
                id: PriceRangeId::new("premium"),
                min_price: 500.0,
                max_price: 5000.0,
                label: Some("Premium".to_string()),
            },
        ]
    }

    #[tokio::test]
    async fn filters_by_category_and_discounted_price() {
        let client = InMemoryCatalogClient::new(sample_products(), sample_ranges());

        let budget = client
            .get_filtered_by_price(&CategoryId::new("c1"), &PriceRangeId::new("budget"))
            .await
            .unwrap();

        assert_eq!(budget.len(), 1);
        assert_eq!(budget[0].id.as_str(), "p1");
    }

    #[tokio::test]
    async fn unknown_range_is_not_found() {
        let client = InMemoryCatalogClient::new(sample_products(), sample_ranges());
        let err = client
            .get_filtered_by_price(&CategoryId::new("c1"), &PriceRangeId::new("nope"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Api(404, _)));
    }
}
