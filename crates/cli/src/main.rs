//! `storefront` — browse the catalog from a terminal.

mod cli;
mod commands;
mod render;

use anyhow::Context;
use clap::Parser;

use storefront_client::{CachedCatalogClient, HttpCatalogClient, StorefrontConfig};
use storefront_view::ImageUrls;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let cli = Cli::parse();
    let config = cli.apply_overrides(StorefrontConfig::from_env()?)?;
    tracing::debug!(api_url = %config.api_url, "starting storefront");

    let client = CachedCatalogClient::new(
        HttpCatalogClient::new(&config).context("failed to build catalog client")?,
    );
    let images = ImageUrls::new(&config.cdn_base_url, &config.placeholder_image);

    let output = commands::run(cli.command, cli.json, &client, &images).await?;
    println!("{output}");
    Ok(())
}
