pub mod keywords;
pub mod price;
pub mod structured;

pub use keywords::*;
pub use price::*;
pub use structured::*;

use scraper::Html;
use serde_json::Value;

/// Elements whose text, at any depth, is never rendered.
const HIDDEN_TEXT_PARENTS: &[&str] = &["script", "style", "template"];

/// Take the first element of an array, or the value itself otherwise.
/// An empty array yields `None`.
pub fn first_or_self(value: &Value) -> Option<&Value> {
    match value {
        Value::Array(items) => items.first(),
        other => Some(other),
    }
}

/// Concatenate the visible text of a document with tags stripped.
pub fn page_text(document: &Html) -> String {
    document
        .root_element()
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .map(|element| HIDDEN_TEXT_PARENTS.contains(&element.name()))
                    .unwrap_or(false)
            });
            if hidden {
                None
            } else {
                Some(&**text)
            }
        })
        .collect()
}
