//! Home-page product grid.

use storefront_catalog::{Product, WishlistStore, featured_products};

use crate::card::{ImageUrls, ProductCard};

/// Cards for the first [`ALL_PRODUCTS_LIMIT`](storefront_catalog::ALL_PRODUCTS_LIMIT)
/// products, in catalog order.
pub fn all_products_cards<W>(products: &[Product], images: &ImageUrls, wishlist: &W) -> Vec<ProductCard>
where
    W: WishlistStore + ?Sized,
{
    featured_products(products)
        .iter()
        .map(|p| ProductCard::build(p, images, wishlist))
        .collect()
}
