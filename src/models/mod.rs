pub mod product;
pub mod sale;

pub use product::*;
pub use sale::*;

pub const DEFAULT_CURRENCY: &str = "RSD";
pub const EMOJI_SALE: &str = "🛍";
