//! Catalog client backed by the storefront REST API (reqwest).

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;

use storefront_catalog::{PriceRange, PriceRangesResponse, Product, ProductsResponse};
use storefront_core::{CategoryId, PriceRangeId};

use crate::client::CatalogClient;
use crate::config::StorefrontConfig;
use crate::error::{ClientError, ClientResult};

/// HTTP transport for the catalog endpoints.
///
/// One request per call; caching is layered on top by
/// [`CachedCatalogClient`](crate::CachedCatalogClient).
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    api_url: Url,
    products_path: Vec<String>,
    client: reqwest::Client,
}

impl HttpCatalogClient {
    pub fn new(config: &StorefrontConfig) -> ClientResult<Self> {
        let api_url = Url::parse(&config.api_url)
            .map_err(|e| ClientError::Config(format!("api_url {:?}: {e}", config.api_url)))?;
        if api_url.cannot_be_a_base() {
            return Err(ClientError::Config(format!(
                "api_url {:?} cannot be used as a base URL",
                config.api_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            api_url,
            products_path: split_path(&config.products_path),
            client,
        })
    }

    /// Append path segments to the API base; each segment is percent-encoded.
    fn endpoint<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> ClientResult<Url> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Config(format!("api_url {} has no path", self.api_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> ClientResult<T> {
        tracing::debug!(%url, "catalog request");

        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "catalog request failed");
            let message = extract_error_message(&body).unwrap_or(body);
            return Err(ClientError::Api(status.as_u16(), message));
        }

        serde_json::from_str(&body).map_err(|e| ClientError::Parse(format!("{url}: {e}")))
    }
}

fn split_path(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Pull `message` (or `error.message`) out of a JSON error body.
fn extract_error_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .or_else(|| parsed.get("message"))
        .and_then(|message| message.as_str())
        .map(ToOwned::to_owned)
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn get_products(&self) -> ClientResult<Vec<Product>> {
        let url = self.endpoint(self.products_path.iter().map(String::as_str))?;
        let resp: ProductsResponse = self.get_json(url).await?;
        Ok(resp.products)
    }

    async fn get_price_ranges(&self) -> ClientResult<Vec<PriceRange>> {
        let url = self.endpoint(["pricerange", "getpriceranges"])?;
        let resp: PriceRangesResponse = self.get_json(url).await?;
        Ok(resp.into_ranges())
    }

    async fn get_filtered_by_price(
        &self,
        category: &CategoryId,
        range: &PriceRangeId,
    ) -> ClientResult<Vec<Product>> {
        let url = self.endpoint(["product", "filterbyprice", category.as_str(), range.as_str()])?;
        let resp: ProductsResponse = self.get_json(url).await?;
        Ok(resp.products)
    }
}
