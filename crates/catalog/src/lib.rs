//! Catalog browsing domain module.
//!
//! This crate contains the read-side catalog model and the pure browsing
//! logic (filtering, pagination, wishlist membership). No IO, no HTTP.

pub mod filter;
pub mod pagination;
pub mod product;
pub mod wishlist;

pub use filter::{ALL_PRODUCTS_LIMIT, catalog_filter, featured_products, related_products};
pub use pagination::{
    MAX_PAGE_BUTTONS, NavButton, PageButton, PageControls, page_window, paginate, total_pages,
};
pub use product::{
    Category, PriceRange, PriceRangesResponse, Product, ProductsResponse, Subcategory,
};
pub use wishlist::{InMemoryWishlist, WishlistStore};
