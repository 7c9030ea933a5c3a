use anyhow::Context;
use serde::Serialize;

use storefront_catalog::InMemoryWishlist;
use storefront_client::CatalogClient;
use storefront_view::{
    CatalogSession, CatalogView, ImageUrls, RelatedProductsView, all_products_cards, load_related,
};

use crate::cli::Command;
use crate::render;

pub async fn run<C>(
    command: Command,
    json: bool,
    client: &C,
    images: &ImageUrls,
) -> anyhow::Result<String>
where
    C: CatalogClient,
{
    match command {
        Command::Category {
            category,
            price_range,
            page,
            per_page,
            wishlist,
        } => {
            let view = CatalogView::new(category).with_items_per_page(per_page)?;
            let wishlist: InMemoryWishlist = wishlist.into_iter().collect();
            let mut session = CatalogSession::new(client, wishlist, view);

            session.load().await;
            if price_range.is_some() {
                session.select_price_range(price_range).await;
            }
            session.view_mut().go_to_page(page);

            let rendered = session.render(images);
            if json {
                to_json(&rendered)
            } else {
                Ok(render::catalog_page(session.view(), &rendered))
            }
        }
        Command::Related { product } => {
            let mut view = RelatedProductsView::new(product);
            load_related(client, &mut view).await;

            let rendered = view.render(images, &InMemoryWishlist::new());
            if json {
                to_json(&rendered)
            } else {
                Ok(render::related(&rendered))
            }
        }
        Command::Products => {
            let products = client
                .get_products()
                .await
                .context("failed to fetch products")?;
            let cards = all_products_cards(&products, images, &InMemoryWishlist::new());
            if json {
                to_json(&cards)
            } else {
                Ok(render::cards(&cards))
            }
        }
        Command::PriceRanges => {
            let ranges = client
                .get_price_ranges()
                .await
                .context("failed to fetch price ranges")?;
            if json {
                to_json(&ranges)
            } else {
                Ok(ranges
                    .iter()
                    .map(|r| format!("{}\t{}", r.id, r.display_label()))
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize output")
}
