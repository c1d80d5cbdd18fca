use scraper::Html;

use crate::models::{CheckResult, ProductUrl, SaleDetails};
use crate::parsers::{find_price_drop, find_sale_keyword, keyword_reason, page_text};

/// Decide whether a product page shows a sale.
///
/// Structured offer data is checked first and gives exact prices. Only when no
/// JSON-LD block qualifies does the visible page text get searched for sale
/// keywords.
pub fn detect_sale(html: &str, url: &ProductUrl) -> CheckResult {
    let document = Html::parse_document(html);

    if let Some(details) = find_price_drop(&document) {
        return CheckResult::sale(url.clone(), details);
    }

    if let Some(keyword) = find_sale_keyword(&page_text(&document)) {
        return CheckResult::sale(
            url.clone(),
            SaleDetails::Keyword {
                reason: keyword_reason(keyword),
            },
        );
    }

    CheckResult::no_sale(url.clone())
}
