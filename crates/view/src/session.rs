//! Async drivers wiring the view models to a [`CatalogClient`].

use storefront_catalog::WishlistStore;
use storefront_client::CatalogClient;
use storefront_core::{PriceRangeId, ProductId};

use crate::card::ImageUrls;
use crate::catalog::{CatalogRender, CatalogView};
use crate::related::RelatedProductsView;

/// Category page session: owns the view, the client, and the wishlist handle.
pub struct CatalogSession<C, W> {
    client: C,
    wishlist: W,
    view: CatalogView,
}

impl<C: CatalogClient, W: WishlistStore> CatalogSession<C, W> {
    pub fn new(client: C, wishlist: W, view: CatalogView) -> Self {
        Self {
            client,
            wishlist,
            view,
        }
    }

    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut CatalogView {
        &mut self.view
    }

    pub fn wishlist(&self) -> &W {
        &self.wishlist
    }

    /// Fetch products and price ranges concurrently.
    pub async fn load(&mut self) {
        let (products, ranges) =
            tokio::join!(self.client.get_products(), self.client.get_price_ranges());
        self.view.apply_products(products);
        self.view.apply_price_ranges(ranges);
    }

    /// Change the price filter and fetch the filtered set if one is selected.
    pub async fn select_price_range(&mut self, range: Option<PriceRangeId>) {
        let Some(ticket) = self.view.select_price_range(range) else {
            return;
        };
        let result = self
            .client
            .get_filtered_by_price(&ticket.category, &ticket.range)
            .await;
        self.view.apply_filtered(&ticket, result);
    }

    pub fn toggle_wishlist(&mut self, product_id: &ProductId) {
        self.wishlist.toggle_wishlist(product_id);
    }

    pub fn render(&self, images: &ImageUrls) -> CatalogRender {
        self.view.render(images, &self.wishlist)
    }
}

/// Load the product collection into a related-products view.
pub async fn load_related<C>(client: &C, view: &mut RelatedProductsView)
where
    C: CatalogClient + ?Sized,
{
    view.apply_products(client.get_products().await);
}
