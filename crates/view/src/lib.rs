//! `storefront-view`
//!
//! **Responsibility:** catalog browsing view models.
//!
//! Views are plain state machines: they receive fetch results, never perform
//! IO themselves, and produce render descriptions (cards, skeletons,
//! navigation). The async session types drive them with a
//! [`CatalogClient`](storefront_client::CatalogClient).

pub mod card;
pub mod catalog;
pub mod listing;
pub mod query;
pub mod related;
pub mod session;

pub use card::{ImageUrls, ProductCard, product_route};
pub use catalog::{
    CatalogRender, CatalogView, DEFAULT_ITEMS_PER_PAGE, DisplayState, FetchTicket, PageState,
    PriceRangeOption, PriceSidebar, SKELETON_COUNT,
};
pub use listing::all_products_cards;
pub use query::QueryState;
pub use related::{RelatedProductsView, RelatedRender, RelatedState};
pub use session::{CatalogSession, load_related};
