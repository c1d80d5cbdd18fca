use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

use crate::error::ParseError;

/// Read a price amount from a JSON number or a numeric string.
pub fn parse_amount(value: &Value) -> Result<Decimal, ParseError> {
    match value {
        Value::Number(number) => parse_decimal(&number.to_string()),
        Value::String(text) => parse_decimal(text.trim()),
        other => Err(ParseError::InvalidAmount(other.to_string())),
    }
}

fn parse_decimal(text: &str) -> Result<Decimal, ParseError> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| ParseError::InvalidAmount(text.to_string()))
}
