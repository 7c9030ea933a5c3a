//! Related-products carousel shown on a product detail page.

use serde::Serialize;

use storefront_catalog::{Product, WishlistStore, related_products};
use storefront_client::ClientResult;
use storefront_core::ProductId;

use crate::card::{ImageUrls, ProductCard, product_route};
use crate::query::QueryState;

pub const LOADING_MESSAGE: &str = "Loading, Please wait...";
pub const ERROR_MESSAGE: &str = "Error fetching products";
pub const EMPTY_TITLE: &str = "No Related Products Found";
pub const EMPTY_HINT: &str = "Please try searching for any products or check back later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RelatedState {
    Loading,
    Failed,
    Empty,
    Populated,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RelatedRender {
    Spinner { message: &'static str },
    Error { message: &'static str },
    Empty { title: &'static str, hint: &'static str },
    Carousel { cards: Vec<ProductCard> },
}

/// Unlike the category page, a failed fetch here has its own message.
#[derive(Debug, Clone)]
pub struct RelatedProductsView {
    current: ProductId,
    products: QueryState<Vec<Product>>,
}

impl RelatedProductsView {
    pub fn new(current: ProductId) -> Self {
        Self {
            current,
            products: QueryState::Loading,
        }
    }

    pub fn current(&self) -> &ProductId {
        &self.current
    }

    pub fn apply_products(&mut self, result: ClientResult<Vec<Product>>) {
        if let Err(err) = &result {
            tracing::warn!(product = %self.current, error = %err, "related products fetch failed");
        }
        self.products = result.into();
    }

    pub fn related(&self) -> Vec<&Product> {
        self.products
            .data()
            .map(|products| related_products(products, &self.current))
            .unwrap_or_default()
    }

    pub fn state(&self) -> RelatedState {
        match &self.products {
            QueryState::Loading => RelatedState::Loading,
            QueryState::Failed(_) => RelatedState::Failed,
            QueryState::Ready(_) if self.related().is_empty() => RelatedState::Empty,
            QueryState::Ready(_) => RelatedState::Populated,
        }
    }

    /// Make `id` the current product; returns the route to navigate to.
    pub fn select_product(&mut self, id: ProductId) -> String {
        let route = product_route(&id);
        self.current = id;
        route
    }

    pub fn render<W>(&self, images: &ImageUrls, wishlist: &W) -> RelatedRender
    where
        W: WishlistStore + ?Sized,
    {
        match self.state() {
            RelatedState::Loading => RelatedRender::Spinner {
                message: LOADING_MESSAGE,
            },
            RelatedState::Failed => RelatedRender::Error {
                message: ERROR_MESSAGE,
            },
            RelatedState::Empty => RelatedRender::Empty {
                title: EMPTY_TITLE,
                hint: EMPTY_HINT,
            },
            RelatedState::Populated => RelatedRender::Carousel {
                cards: self
                    .related()
                    .into_iter()
                    .map(|p| ProductCard::build(p, images, wishlist))
                    .collect(),
            },
        }
    }
}
