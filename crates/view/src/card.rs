//! Product card view model shared by every product grid.

use serde::Serialize;

use storefront_catalog::{Product, WishlistStore};
use storefront_core::ProductId;

/// Client-side route of a product detail page.
pub fn product_route(id: &ProductId) -> String {
    format!("/product/{id}")
}

/// Builds CDN image URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrls {
    cdn_base_url: String,
    placeholder: String,
}

impl ImageUrls {
    pub fn new(cdn_base_url: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            cdn_base_url: cdn_base_url.into(),
            placeholder: placeholder.into(),
        }
    }

    pub fn url_for(&self, image_id: &str) -> String {
        format!(
            "{}/image/upload/{}",
            self.cdn_base_url.trim_end_matches('/'),
            image_id
        )
    }

    /// URL of the product's first image, or of the placeholder asset.
    pub fn for_product(&self, product: &Product) -> String {
        match product.primary_image_id() {
            Some(id) => self.url_for(&id),
            None => self.url_for(&self.placeholder),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub discounted_price: f64,
    pub discount: f64,
    pub average_rating: f64,
    pub total_reviews: u32,
    pub image_url: String,
    pub href: String,
    pub in_wishlist: bool,
}

impl ProductCard {
    pub fn build<W>(product: &Product, images: &ImageUrls, wishlist: &W) -> Self
    where
        W: WishlistStore + ?Sized,
    {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            discounted_price: product.discounted_price,
            discount: product.discount,
            average_rating: product.average_rating,
            total_reviews: product.total_reviews,
            image_url: images.for_product(product),
            href: product_route(&product.id),
            in_wishlist: wishlist.is_in_wishlist(&product.id),
        }
    }

    /// Price line as shown under the product name, e.g. `₹1200 ₹900 (25 % OFF)`.
    pub fn price_line(&self) -> String {
        format!(
            "₹{} ₹{} ({} % OFF)",
            self.price, self.discounted_price, self.discount
        )
    }
}
