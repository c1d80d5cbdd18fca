/// Sale phrases as they appear on Serbian shop pages, checked in order:
/// "weekly markdown", "savings", "markdown", "clearance".
pub const SALE_KEYWORDS: &[&str] = &["nedeljno sniženje", "ušteda", "sniženje", "rasprodaja"];

/// Return the first sale keyword contained in `text`, ignoring case.
pub fn find_sale_keyword(text: &str) -> Option<&'static str> {
    let text_lower = text.to_lowercase();
    SALE_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| text_lower.contains(&keyword.to_lowercase()))
}

pub fn keyword_reason(keyword: &str) -> String {
    format!("Found keyword: '{}'", keyword)
}
