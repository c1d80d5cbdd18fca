use anyhow::{Context, Result};
use scraper::Html;
use std::fs;

use sale_watch::config::{Config, TelegramConfig};
use sale_watch::detector::detect_sale;
use sale_watch::models::ProductUrl;
use sale_watch::parsers::{count_structured_blocks, find_sale_keyword, page_text};
use sale_watch::utils::http::{create_client, fetch_page};

/// Fetch one product page and report what the sale detector sees on it.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let url = std::env::args()
        .nth(1)
        .map(ProductUrl::from)
        .context("usage: inspect_page <product-url>")?;

    // Credentials are not needed to fetch a page.
    let config = Config::new(
        TelegramConfig {
            bot_token: String::new(),
            chat_id: String::new(),
            api_url: String::new(),
        },
        vec![url.clone()],
    );
    let client = create_client(&config)?;

    println!("Fetching {}...", url);
    let html = fetch_page(&client, &url).await?;
    fs::write("inspect_sample.html", &html)?;
    println!("Saved {} bytes to inspect_sample.html", html.len());

    let document = Html::parse_document(&html);
    println!("Found {} JSON-LD block(s)", count_structured_blocks(&document));
    match find_sale_keyword(&page_text(&document)) {
        Some(keyword) => println!("Page text contains sale keyword '{}'", keyword),
        None => println!("Page text contains no sale keyword"),
    }

    let result = detect_sale(&html, &url);
    match &result.info.details {
        Some(details) => println!("On sale: {} ({})", result.on_sale, details),
        None => println!("On sale: {}", result.on_sale),
    }

    Ok(())
}
