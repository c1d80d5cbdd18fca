use serde::{Deserialize, Serialize};
use std::fmt;

// NewType pattern for type safety
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductUrl(pub String);

impl ProductUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductUrl {
    fn from(url: &str) -> Self {
        Self(url.to_string())
    }
}

impl From<String> for ProductUrl {
    fn from(url: String) -> Self {
        Self(url)
    }
}

impl fmt::Display for ProductUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
