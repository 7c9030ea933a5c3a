//! Category page: category listing, price-range filter, pagination.
//!
//! The active product set is either the category slice of the full catalog
//! or the backend's price-filtered set for the selected range, never both.

use serde::Serialize;

use storefront_catalog::{
    PageControls, PriceRange, Product, WishlistStore, catalog_filter, paginate, total_pages,
};
use storefront_client::ClientResult;
use storefront_core::{CategoryId, DomainError, DomainResult, PriceRangeId};

use crate::card::{ImageUrls, ProductCard};
use crate::query::QueryState;

/// Products per page on the category page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 1;

/// Placeholder cards rendered while nothing can be shown.
pub const SKELETON_COUNT: usize = 8;

/// Pagination + filter selection owned by the category page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub current_page: usize,
    pub items_per_page: usize,
    pub selected_price_range: Option<PriceRangeId>,
}

/// What the page currently has to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayState {
    Loading,
    Empty,
    Populated,
}

/// Handle for one price-filter fetch.
///
/// Responses are only applied while their ticket is the latest one issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub category: CategoryId,
    pub range: PriceRangeId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRangeOption {
    pub id: PriceRangeId,
    pub label: String,
    pub selected: bool,
}

/// State handed to the price-range sort sidebar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSidebar {
    pub options: Vec<PriceRangeOption>,
    pub is_loading: bool,
    pub is_error: bool,
    /// Set when the filtered-by-price fetch for the current selection failed.
    pub filter_failed: bool,
}

/// Render description of the product area.
///
/// `Loading` and `Empty` both map to skeletons; the page never shows a
/// distinct "no results" or error message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CatalogRender {
    Skeletons { count: usize },
    Grid {
        cards: Vec<ProductCard>,
        controls: PageControls,
    },
}

#[derive(Debug, Clone)]
pub struct CatalogView {
    category: CategoryId,
    page: PageState,
    products: QueryState<Vec<Product>>,
    price_ranges: QueryState<Vec<PriceRange>>,
    filtered: QueryState<Vec<Product>>,
    generation: u64,
}

impl CatalogView {
    pub fn new(category: CategoryId) -> Self {
        Self {
            category,
            page: PageState {
                current_page: 1,
                items_per_page: DEFAULT_ITEMS_PER_PAGE,
                selected_price_range: None,
            },
            products: QueryState::Loading,
            price_ranges: QueryState::Loading,
            filtered: QueryState::Ready(Vec::new()),
            generation: 0,
        }
    }

    pub fn with_items_per_page(mut self, items_per_page: usize) -> DomainResult<Self> {
        if items_per_page == 0 {
            return Err(DomainError::validation("items per page must be at least 1"));
        }
        self.page.items_per_page = items_per_page;
        Ok(self)
    }

    pub fn category(&self) -> &CategoryId {
        &self.category
    }

    pub fn page_state(&self) -> &PageState {
        &self.page
    }

    pub fn current_page(&self) -> usize {
        self.page.current_page
    }

    pub fn selected_price_range(&self) -> Option<&PriceRangeId> {
        self.page.selected_price_range.as_ref()
    }

    pub fn apply_products(&mut self, result: ClientResult<Vec<Product>>) {
        if let Err(err) = &result {
            tracing::warn!(category = %self.category, error = %err, "product fetch failed");
        }
        self.products = result.into();
    }

    pub fn apply_price_ranges(&mut self, result: ClientResult<Vec<PriceRange>>) {
        if let Err(err) = &result {
            tracing::warn!(error = %err, "price range fetch failed");
        }
        self.price_ranges = result.into();
    }

    /// Change the price-range filter; `None` or a blank id clears it.
    ///
    /// Selection and the reset to page 1 happen in one update. Returns the
    /// ticket for the fetch the caller must issue, if any.
    pub fn select_price_range(&mut self, range: Option<PriceRangeId>) -> Option<FetchTicket> {
        let range = range.filter(|r| !r.as_str().trim().is_empty());
        self.generation += 1;
        self.page.current_page = 1;
        self.page.selected_price_range = range.clone();

        match range {
            Some(range) => {
                self.filtered = QueryState::Loading;
                Some(FetchTicket {
                    generation: self.generation,
                    category: self.category.clone(),
                    range,
                })
            }
            None => {
                self.filtered = QueryState::Ready(Vec::new());
                None
            }
        }
    }

    /// Apply a filtered-by-price response. Returns `false` when the response
    /// belongs to a superseded selection and was dropped.
    pub fn apply_filtered(
        &mut self,
        ticket: &FetchTicket,
        result: ClientResult<Vec<Product>>,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                range = %ticket.range,
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale price filter response"
            );
            return false;
        }

        if let Err(err) = &result {
            tracing::warn!(
                category = %ticket.category,
                range = %ticket.range,
                error = %err,
                "price filter fetch failed"
            );
        }
        self.filtered = result.into();
        true
    }

    /// Products the page paginates over.
    pub fn active_products(&self) -> Vec<&Product> {
        if self.page.selected_price_range.is_some() {
            return self
                .filtered
                .data()
                .map(|products| products.iter().collect())
                .unwrap_or_default();
        }

        self.products
            .data()
            .map(|products| catalog_filter(products, &self.category))
            .unwrap_or_default()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.active_products().len(), self.page.items_per_page)
    }

    pub fn current_page_products(&self) -> Vec<&Product> {
        self.page_of(&self.active_products()).to_vec()
    }

    fn page_of<'a, 'p>(&self, active: &'a [&'p Product]) -> &'a [&'p Product] {
        paginate(active, self.page.current_page, self.page.items_per_page)
    }

    pub fn is_loading(&self) -> bool {
        self.products.is_loading()
            || self.price_ranges.is_loading()
            || (self.page.selected_price_range.is_some() && self.filtered.is_loading())
    }

    pub fn display_state(&self) -> DisplayState {
        if self.is_loading() {
            DisplayState::Loading
        } else if self.page_of(&self.active_products()).is_empty() {
            DisplayState::Empty
        } else {
            DisplayState::Populated
        }
    }

    /// Jump to `page`, clamped into `1..=total_pages`. No-op without pages.
    pub fn go_to_page(&mut self, page: usize) {
        let total = self.total_pages();
        if total == 0 {
            return;
        }
        self.page.current_page = page.clamp(1, total);
    }

    pub fn first_page(&mut self) {
        self.go_to_page(1);
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.page.current_page.saturating_sub(1));
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.page.current_page + 1);
    }

    pub fn last_page(&mut self) {
        self.go_to_page(self.total_pages());
    }

    pub fn controls(&self) -> PageControls {
        PageControls::new(self.page.current_page, self.total_pages())
    }

    pub fn sidebar(&self) -> PriceSidebar {
        let selected = self.page.selected_price_range.as_ref();
        let options = self
            .price_ranges
            .data()
            .map(|ranges| {
                ranges
                    .iter()
                    .map(|range| PriceRangeOption {
                        id: range.id.clone(),
                        label: range.display_label(),
                        selected: selected == Some(&range.id),
                    })
                    .collect()
            })
            .unwrap_or_default();

        PriceSidebar {
            options,
            is_loading: self.price_ranges.is_loading(),
            is_error: self.price_ranges.is_error(),
            filter_failed: selected.is_some() && self.filtered.is_error(),
        }
    }

    /// Builds the product area from a single pass over the active set.
    pub fn render<W>(&self, images: &ImageUrls, wishlist: &W) -> CatalogRender
    where
        W: WishlistStore + ?Sized,
    {
        let skeletons = CatalogRender::Skeletons {
            count: SKELETON_COUNT,
        };
        if self.is_loading() {
            return skeletons;
        }

        let active = self.active_products();
        let page = self.page_of(&active);
        if page.is_empty() {
            return skeletons;
        }

        CatalogRender::Grid {
            cards: page
                .iter()
                .map(|p| ProductCard::build(p, images, wishlist))
                .collect(),
            controls: PageControls::new(
                self.page.current_page,
                total_pages(active.len(), self.page.items_per_page),
            ),
        }
    }
}
