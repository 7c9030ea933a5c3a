use clap::{Parser, Subcommand};

use storefront_client::{ClientResult, StorefrontConfig};
use storefront_core::{CategoryId, PriceRangeId, ProductId};

#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Browse the storefront catalog")]
pub struct Cli {
    /// Backend base URL (overrides STOREFRONT_API_URL).
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Image CDN base URL (overrides STOREFRONT_CDN_URL).
    #[arg(long, global = true)]
    pub cdn_url: Option<String>,

    /// Print the render description as JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Category page with optional price filter and pagination.
    Category {
        category: CategoryId,
        #[arg(long)]
        price_range: Option<PriceRangeId>,
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long, default_value_t = storefront_view::DEFAULT_ITEMS_PER_PAGE)]
        per_page: usize,
        /// Product ids already saved to the wishlist.
        #[arg(long = "wishlist", value_name = "PRODUCT_ID")]
        wishlist: Vec<ProductId>,
    },
    /// Related-products carousel for a product.
    Related { product: ProductId },
    /// Home-page product grid.
    Products,
    /// Price buckets offered by the sort sidebar.
    PriceRanges,
}

impl Cli {
    pub fn apply_overrides(&self, mut config: StorefrontConfig) -> ClientResult<StorefrontConfig> {
        if let Some(url) = &self.api_url {
            config.api_url = url.clone();
        }
        if let Some(url) = &self.cdn_url {
            config.cdn_base_url = url.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_category_command() {
        let cli = Cli::try_parse_from([
            "storefront",
            "category",
            "men",
            "--price-range",
            "r1",
            "--page",
            "3",
            "--wishlist",
            "p1",
            "--wishlist",
            "p2",
            "--json",
        ])
        .unwrap();

        assert!(cli.json);
        match cli.command {
            Command::Category {
                category,
                price_range,
                page,
                per_page,
                wishlist,
            } => {
                assert_eq!(category.as_str(), "men");
                assert_eq!(price_range, Some(PriceRangeId::new("r1")));
                assert_eq!(page, 3);
                assert_eq!(per_page, 1);
                assert_eq!(wishlist.len(), 2);
            }
            other => panic!("Expected category command, got {other:?}"),
        }
    }

    #[test]
    fn rejects_blank_ids() {
        assert!(Cli::try_parse_from(["storefront", "related", "  "]).is_err());
    }

    #[test]
    fn overrides_replace_configured_urls() {
        let cli = Cli::try_parse_from([
            "storefront",
            "--api-url",
            "https://shop.example/api",
            "products",
        ])
        .unwrap();

        let config = cli.apply_overrides(StorefrontConfig::default()).unwrap();
        assert_eq!(config.api_url, "https://shop.example/api");
        assert_eq!(config.cdn_base_url, StorefrontConfig::default().cdn_base_url);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let cli = Cli::try_parse_from(["storefront", "--cdn-url", "cdn", "products"]).unwrap();
        assert!(cli.apply_overrides(StorefrontConfig::default()).is_err());
    }
}
