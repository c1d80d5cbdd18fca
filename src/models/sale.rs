use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ProductUrl;

/// Why a product was judged to be on sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaleDetails {
    /// Exact prices taken from the page's structured offer data.
    PriceDrop {
        current_price: Decimal,
        original_price: Decimal,
        currency: String,
    },
    /// A sale phrase found in the visible page text.
    Keyword { reason: String },
}

impl fmt::Display for SaleDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaleDetails::PriceDrop {
                current_price,
                original_price,
                currency,
            } => write!(f, "{} {} (was {} {})", current_price, currency, original_price, currency),
            SaleDetails::Keyword { reason } => write!(f, "{}", reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleInfo {
    pub url: ProductUrl,
    pub details: Option<SaleDetails>,
}

impl SaleInfo {
    pub fn without_details(url: ProductUrl) -> Self {
        Self { url, details: None }
    }
}

/// Outcome of checking one product page in one cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub on_sale: bool,
    pub info: SaleInfo,
}

impl CheckResult {
    pub fn sale(url: ProductUrl, details: SaleDetails) -> Self {
        Self {
            on_sale: true,
            info: SaleInfo {
                url,
                details: Some(details),
            },
        }
    }

    pub fn no_sale(url: ProductUrl) -> Self {
        Self {
            on_sale: false,
            info: SaleInfo::without_details(url),
        }
    }
}
