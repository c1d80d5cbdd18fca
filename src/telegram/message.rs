use crate::models::{ProductUrl, SaleDetails, SaleInfo, EMOJI_SALE};

pub fn format_message(product_url: &ProductUrl, info: &SaleInfo) -> String {
    match &info.details {
        Some(SaleDetails::PriceDrop {
            current_price,
            original_price,
            currency,
        }) => format!(
            "{} Item on sale!\nPrice: {} {} (was {} {})\n{}",
            EMOJI_SALE, current_price, currency, original_price, currency, product_url
        ),
        Some(SaleDetails::Keyword { reason }) if !reason.is_empty() => {
            format!("{} Item on sale! ({})\n{}", EMOJI_SALE, reason, product_url)
        }
        _ => format!("{} Item on sale!\n{}", EMOJI_SALE, product_url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    fn url() -> ProductUrl {
        ProductUrl::from("https://anbu-clothing.rs/product/yu-gi-oh-duks-332")
    }

    fn info(details: Option<SaleDetails>) -> SaleInfo {
        SaleInfo { url: url(), details }
    }

    #[test]
    fn price_drop_message_shows_both_prices() {
        let message = format_message(
            &url(),
            &info(Some(SaleDetails::PriceDrop {
                current_price: Decimal::new(1000, 0),
                original_price: Decimal::new(1500, 0),
                currency: "RSD".to_string(),
            })),
        );

        assert_eq!(
            message,
            "🛍 Item on sale!\nPrice: 1000 RSD (was 1500 RSD)\nhttps://anbu-clothing.rs/product/yu-gi-oh-duks-332"
        );
    }

    #[test]
    fn keyword_message_shows_reason() {
        let message = format_message(
            &url(),
            &info(Some(SaleDetails::Keyword {
                reason: "Found keyword: 'rasprodaja'".to_string(),
            })),
        );

        assert_eq!(
            message,
            "🛍 Item on sale! (Found keyword: 'rasprodaja')\nhttps://anbu-clothing.rs/product/yu-gi-oh-duks-332"
        );
    }

    #[test]
    fn generic_message_without_details() {
        let expected = "🛍 Item on sale!\nhttps://anbu-clothing.rs/product/yu-gi-oh-duks-332";

        assert_eq!(format_message(&url(), &info(None)), expected);
        assert_eq!(
            format_message(&url(), &info(Some(SaleDetails::Keyword { reason: String::new() }))),
            expected
        );
    }
}
