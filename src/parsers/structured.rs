use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use scraper::{Html, Selector};
use serde_json::{Map, Value};
use tracing::debug;

use super::{first_or_self, parse_amount};
use crate::error::ParseError;
use crate::models::{SaleDetails, DEFAULT_CURRENCY};

static LD_JSON_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"script[type="application/ld+json"]"#)
        .expect("Invalid JSON-LD selector")
});

/// Scan the page's JSON-LD blocks in order and return the first price drop.
/// Unreadable blocks are skipped.
pub fn find_price_drop(document: &Html) -> Option<SaleDetails> {
    for (idx, script) in document.select(&LD_JSON_SELECTOR).enumerate() {
        let payload = script.text().collect::<String>();
        match price_drop_from_block(&payload) {
            Ok(Some(details)) => return Some(details),
            Ok(None) => {}
            Err(e) => debug!("Skipping structured data block {}: {}", idx, e),
        }
    }
    None
}

/// Count the JSON-LD blocks on a page, readable or not.
pub fn count_structured_blocks(document: &Html) -> usize {
    document.select(&LD_JSON_SELECTOR).count()
}

/// Evaluate one JSON-LD payload. A sale needs a positive `compareAtPrice`
/// strictly above the current price.
pub fn price_drop_from_block(payload: &str) -> Result<Option<SaleDetails>, ParseError> {
    let data: Value = serde_json::from_str(payload)?;

    let empty = Map::new();
    let product = match first_or_self(&data) {
        Some(value) => value.as_object().ok_or(ParseError::NotAnObject("payload"))?,
        None => &empty,
    };

    let offers = match product.get("offers").map(first_or_self) {
        Some(Some(value)) => value.as_object().ok_or(ParseError::NotAnObject("offers"))?,
        _ => &empty,
    };

    let compare_amount = match offers.get("compareAtPrice").and_then(Value::as_object) {
        Some(compare_at) => optional_amount(compare_at.get("amount"))?,
        None => Decimal::ZERO,
    };

    // `price` is only consulted when `lowPrice` is absent altogether.
    let low_price = match offers.get("lowPrice") {
        Some(value) => parse_amount(value)?,
        None => optional_amount(offers.get("price"))?,
    };

    if compare_amount > Decimal::ZERO && compare_amount > low_price {
        let currency = offers
            .get("priceCurrency")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_CURRENCY)
            .to_string();

        return Ok(Some(SaleDetails::PriceDrop {
            current_price: low_price,
            original_price: compare_amount,
            currency,
        }));
    }

    Ok(None)
}

fn optional_amount(value: Option<&Value>) -> Result<Decimal, ParseError> {
    value.map(parse_amount).transpose().map(|amount| amount.unwrap_or(Decimal::ZERO))
}
