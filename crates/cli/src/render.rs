//! Plain-text rendering of the view models.

use std::fmt::Write;

use storefront_catalog::PageControls;
use storefront_view::{CatalogRender, CatalogView, ProductCard, RelatedRender};

pub fn catalog_page(view: &CatalogView, rendered: &CatalogRender) -> String {
    let mut out = String::new();
    let page = view.page_state();
    let _ = writeln!(
        out,
        "Category {} · page {}/{} · {} per page",
        view.category(),
        page.current_page,
        view.total_pages(),
        page.items_per_page
    );

    let sidebar = view.sidebar();
    if sidebar.is_error {
        out.push_str("Price ranges unavailable\n");
    } else if !sidebar.options.is_empty() {
        let options: Vec<String> = sidebar
            .options
            .iter()
            .map(|o| format!("[{}] {}", if o.selected { "x" } else { " " }, o.label))
            .collect();
        let _ = writeln!(out, "Price ranges: {}", options.join("  "));
    }

    match rendered {
        CatalogRender::Skeletons { count } => {
            out.push_str(&vec!["[ ░░░░ ]"; *count].join(" "));
        }
        CatalogRender::Grid { cards: page_cards, controls } => {
            out.push_str(&cards(page_cards));
            out.push('\n');
            out.push_str(&navigation(controls));
        }
    }
    out
}

pub fn related(rendered: &RelatedRender) -> String {
    match rendered {
        RelatedRender::Spinner { message } | RelatedRender::Error { message } => {
            message.to_string()
        }
        RelatedRender::Empty { title, hint } => format!("{title}\n{hint}"),
        RelatedRender::Carousel { cards: related } => {
            format!("Related Products\n{}", cards(related))
        }
    }
}

pub fn cards(cards: &[ProductCard]) -> String {
    cards.iter().map(card).collect::<Vec<_>>().join("\n")
}

fn card(card: &ProductCard) -> String {
    format!(
        "{} {}  {}  ★{} ({})  {}\n  {}",
        if card.in_wishlist { "♥" } else { "♡" },
        card.name,
        card.price_line(),
        card.average_rating,
        card.total_reviews,
        card.href,
        card.image_url
    )
}

fn navigation(controls: &PageControls) -> String {
    let arrow = |label: &str, enabled: bool| {
        if enabled { label.to_string() } else { "-".to_string() }
    };

    let mut parts = vec![
        arrow("«", controls.first.enabled),
        arrow("<", controls.previous.enabled),
    ];
    parts.extend(controls.pages.iter().map(|b| {
        if b.active {
            format!("[{}]", b.page)
        } else {
            b.page.to_string()
        }
    }));
    parts.push(arrow(">", controls.next.enabled));
    parts.push(arrow("»", controls.last.enabled));
    parts.join(" ")
}
