//! Keyed response cache layered over any [`CatalogClient`].

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;

use storefront_catalog::{PriceRange, Product};
use storefront_core::{CategoryId, PriceRangeId};

use crate::client::CatalogClient;
use crate::error::ClientResult;

/// Cache key of a catalog query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Products,
    PriceRanges,
    FilteredByPrice {
        category: CategoryId,
        range: PriceRangeId,
    },
}

/// How long a cached response stays fresh, per query kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    pub products: Duration,
    pub price_ranges: Duration,
    pub filtered_by_price: Duration,
}

impl Default for CachePolicy {
    /// Product collections are always refetched; price data stays fresh for
    /// five minutes.
    fn default() -> Self {
        Self {
            products: Duration::zero(),
            price_ranges: Duration::minutes(5),
            filtered_by_price: Duration::minutes(5),
        }
    }
}

impl CachePolicy {
    pub fn stale_time(&self, key: &QueryKey) -> Duration {
        match key {
            QueryKey::Products => self.products,
            QueryKey::PriceRanges => self.price_ranges,
            QueryKey::FilteredByPrice { .. } => self.filtered_by_price,
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry<T> {
    value: T,
    fetched_at: DateTime<Utc>,
}

/// Per-key cell. Callers for the same key queue on `entry`; `completed`
/// counts successful fetches so a queued caller can tell that the value was
/// produced while it waited.
#[derive(Debug)]
struct Slot<T> {
    completed: AtomicU64,
    entry: Mutex<Option<CacheEntry<T>>>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self {
            completed: AtomicU64::new(0),
            entry: Mutex::new(None),
        }
    }
}

type Slots<T> = Mutex<HashMap<QueryKey, Arc<Slot<T>>>>;

/// Caching decorator: fresh entries are served locally, everything else is
/// fetched from `inner`. Concurrent callers for the same key share one
/// in-flight fetch. Failed fetches are never cached.
#[derive(Debug)]
pub struct CachedCatalogClient<C> {
    inner: C,
    policy: CachePolicy,
    products: Slots<Vec<Product>>,
    price_ranges: Slots<Vec<PriceRange>>,
}

impl<C: CatalogClient> CachedCatalogClient<C> {
    pub fn new(inner: C) -> Self {
        Self::with_policy(inner, CachePolicy::default())
    }

    pub fn with_policy(inner: C, policy: CachePolicy) -> Self {
        Self {
            inner,
            policy,
            products: Mutex::new(HashMap::new()),
            price_ranges: Mutex::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Drop a single cached response.
    pub async fn invalidate(&self, key: &QueryKey) {
        let products = self.products.lock().await.get(key).cloned();
        if let Some(slot) = products {
            *slot.entry.lock().await = None;
        }
        let price_ranges = self.price_ranges.lock().await.get(key).cloned();
        if let Some(slot) = price_ranges {
            *slot.entry.lock().await = None;
        }
    }

    async fn fetch_through<T, F>(
        &self,
        slots: &Slots<T>,
        key: QueryKey,
        fetch: F,
    ) -> ClientResult<T>
    where
        T: Clone,
        F: Future<Output = ClientResult<T>>,
    {
        let slot = slots.lock().await.entry(key.clone()).or_default().clone();
        let seen = slot.completed.load(Ordering::SeqCst);
        let mut entry = slot.entry.lock().await;

        if let Some(cached) = entry.as_ref() {
            if slot.completed.load(Ordering::SeqCst) != seen {
                tracing::debug!(?key, "joined in-flight catalog fetch");
                return Ok(cached.value.clone());
            }
            let age = Utc::now().signed_duration_since(cached.fetched_at);
            if age < self.policy.stale_time(&key) {
                tracing::debug!(?key, "catalog cache hit");
                return Ok(cached.value.clone());
            }
        }

        let value = fetch.await?;
        *entry = Some(CacheEntry {
            value: value.clone(),
            fetched_at: Utc::now(),
        });
        slot.completed.fetch_add(1, Ordering::SeqCst);
        Ok(value)
    }
}

#[async_trait]
impl<C: CatalogClient> CatalogClient for CachedCatalogClient<C> {
    async fn get_products(&self) -> ClientResult<Vec<Product>> {
        self.fetch_through(&self.products, QueryKey::Products, self.inner.get_products())
            .await
    }

    async fn get_price_ranges(&self) -> ClientResult<Vec<PriceRange>> {
        self.fetch_through(
            &self.price_ranges,
            QueryKey::PriceRanges,
            self.inner.get_price_ranges(),
        )
        .await
    }

    async fn get_filtered_by_price(
        &self,
        category: &CategoryId,
        range: &PriceRangeId,
    ) -> ClientResult<Vec<Product>> {
        let key = QueryKey::FilteredByPrice {
            category: category.clone(),
            range: range.clone(),
        };
        self.fetch_through(
            &self.products,
            key,
            self.inner.get_filtered_by_price(category, range),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryCatalogClient;
    use crate::memory::tests::{sample_products, sample_ranges};

    fn cached() -> CachedCatalogClient<InMemoryCatalogClient> {
        CachedCatalogClient::new(InMemoryCatalogClient::new(sample_products(), sample_ranges()))
    }

    /// Yields once before answering so concurrent callers overlap.
    struct YieldingClient(InMemoryCatalogClient);

    #[async_trait]
    impl CatalogClient for YieldingClient {
        async fn get_products(&self) -> ClientResult<Vec<Product>> {
            tokio::task::yield_now().await;
            self.0.get_products().await
        }

        async fn get_price_ranges(&self) -> ClientResult<Vec<PriceRange>> {
            tokio::task::yield_now().await;
            self.0.get_price_ranges().await
        }

        async fn get_filtered_by_price(
            &self,
            category: &CategoryId,
            range: &PriceRangeId,
        ) -> ClientResult<Vec<Product>> {
            tokio::task::yield_now().await;
            self.0.get_filtered_by_price(category, range).await
        }
    }

    fn yielding() -> CachedCatalogClient<YieldingClient> {
        CachedCatalogClient::new(YieldingClient(InMemoryCatalogClient::new(
            sample_products(),
            sample_ranges(),
        )))
    }

    #[tokio::test]
    async fn concurrent_product_requests_share_one_fetch() {
        let client = yielding();

        let (first, second) = tokio::join!(client.get_products(), client.get_products());

        assert_eq!(first.unwrap(), second.unwrap());
        assert_eq!(client.inner().0.calls().products, 1);

        client.get_products().await.unwrap();
        assert_eq!(client.inner().0.calls().products, 2);
    }

    #[tokio::test]
    async fn concurrent_filter_requests_share_one_fetch_per_key() {
        let client = yielding();
        let category = CategoryId::new("c1");
        let budget = PriceRangeId::new("budget");
        let premium = PriceRangeId::new("premium");

        let (a, b, c) = tokio::join!(
            client.get_filtered_by_price(&category, &budget),
            client.get_filtered_by_price(&category, &budget),
            client.get_filtered_by_price(&category, &premium),
        );

        assert_eq!(a.unwrap(), b.unwrap());
        assert!(c.is_ok());
        assert_eq!(client.inner().0.calls().filtered_by_price, 2);
    }

    #[tokio::test]
    async fn queued_caller_retries_after_failed_fetch() {
        let client = yielding();
        client.inner().0.set_failing(true);

        let (first, second) = tokio::join!(client.get_price_ranges(), client.get_price_ranges());

        assert!(first.is_err());
        assert!(second.is_err());
        assert_eq!(client.inner().0.calls().price_ranges, 2);
    }

    #[tokio::test]
    async fn price_ranges_are_served_from_cache_while_fresh() {
        let client = cached();

        let first = client.get_price_ranges().await.unwrap();
        let second = client.get_price_ranges().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(client.inner().calls().price_ranges, 1);
    }

    #[tokio::test]
    async fn products_are_refetched_with_zero_stale_time() {
        let client = cached();

        client.get_products().await.unwrap();
        client.get_products().await.unwrap();

        assert_eq!(client.inner().calls().products, 2);
    }

    #[tokio::test]
    async fn filtered_results_are_keyed_by_category_and_range() {
        let client = cached();
        let category = CategoryId::new("c1");

        client
            .get_filtered_by_price(&category, &PriceRangeId::new("budget"))
            .await
            .unwrap();
        client
            .get_filtered_by_price(&category, &PriceRangeId::new("budget"))
            .await
            .unwrap();
        client
            .get_filtered_by_price(&category, &PriceRangeId::new("premium"))
            .await
            .unwrap();

        assert_eq!(client.inner().calls().filtered_by_price, 2);
    }

    #[tokio::test]
    async fn invalidate_forces_refetch() {
        let client = cached();

        client.get_price_ranges().await.unwrap();
        client.invalidate(&QueryKey::PriceRanges).await;
        client.get_price_ranges().await.unwrap();

        assert_eq!(client.inner().calls().price_ranges, 2);
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let client = cached();
        client.inner().set_failing(true);
        assert!(client.get_price_ranges().await.is_err());

        client.inner().set_failing(false);
        assert!(client.get_price_ranges().await.is_ok());
        assert_eq!(client.inner().calls().price_ranges, 2);
    }
}
