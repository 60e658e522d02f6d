//! # Line Parser
//!
//! Turns one purchase line into a [`ParsedItem`].
//!
//! ## Grammar
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   "3 imported boxes of chocolates at 11.25"                             │
//! │    │ └──────────── name ────────────┘  │                                │
//! │    quantity                       ws "at" ws  price                     │
//! │                                                                         │
//! │   quantity : one or more ASCII digits at the start, then whitespace     │
//! │   name     : shortest non-empty run before a valid " at <price>"        │
//! │   price    : digits with an optional '.', up to whitespace or the end   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The whole line is trimmed first. The first ` at ` followed by a
//! price-shaped token wins and anything after that token is ignored, so
//! `1 cat at 3 at 4` is a cat at 3.00 and `1 book at 12.49 each` is a book at
//! 12.49. When the word after ` at ` isn't a price the scanner moves on:
//! `1 sat at home at 5` has the name `sat at home`.
//!
//! Prices are exact decimals. `10.005` keeps its third decimal; rounding
//! happens only in the tax engine.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::ParseError;

/// Keyword separating the name from the price.
const PRICE_KEYWORD: &str = "at";

/// Marker that flags an item as imported.
const IMPORTED_MARKER: &str = "imported";

/// Structured fields recovered from one purchase line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedItem {
    pub quantity: i64,
    pub name: String,
    pub unit_price: Decimal,
    pub imported: bool,
}

/// Parses a purchase line such as `"1 book at 12.49"`.
///
/// ```rust
/// use rust_decimal::Decimal;
/// use saletax_core::parser::parse_line;
///
/// let item = parse_line("1 imported bottle of perfume at 47.50").unwrap();
/// assert_eq!(item.quantity, 1);
/// assert_eq!(item.name, "imported bottle of perfume");
/// assert_eq!(item.unit_price, Decimal::new(4750, 2));
/// assert!(item.imported);
/// ```
pub fn parse_line(line: &str) -> Result<ParsedItem, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::Empty);
    }

    let digits_end = line
        .find(|c: char| !c.is_ascii_digit())
        .ok_or(ParseError::InvalidFormat)?;
    let (quantity_token, rest) = line.split_at(digits_end);
    if quantity_token.is_empty() || !rest.starts_with(char::is_whitespace) {
        return Err(ParseError::InvalidFormat);
    }

    let (name, price_token) = split_name_and_price(rest).ok_or(ParseError::InvalidFormat)?;

    let quantity = quantity_token
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidQuantity(quantity_token.to_string()))?;
    let unit_price =
        parse_price(price_token).ok_or_else(|| ParseError::InvalidPrice(price_token.to_string()))?;

    Ok(ParsedItem {
        quantity,
        imported: is_imported(name),
        name: name.to_string(),
        unit_price,
    })
}

/// Whether an item name marks the item as imported (case-insensitive).
pub fn is_imported(name: &str) -> bool {
    name.to_lowercase().contains(IMPORTED_MARKER)
}

/// Finds the first standalone `at` with a non-empty name before it and a
/// price-shaped token right after it.
fn split_name_and_price(rest: &str) -> Option<(&str, &str)> {
    rest.match_indices(PRICE_KEYWORD).find_map(|(idx, _)| {
        let before = &rest[..idx];
        let after = &rest[idx + PRICE_KEYWORD.len()..];

        if !before.ends_with(char::is_whitespace) || !after.starts_with(char::is_whitespace) {
            return None;
        }

        let name = before.trim();
        let price_token = after.split_whitespace().next()?;
        if name.is_empty() || !is_price_shaped(price_token) {
            return None;
        }

        Some((name, price_token))
    })
}

/// Digits and dots only, at least one character.
fn is_price_shaped(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit() || c == '.')
}

/// Parses a price token such as `10`, `10.5`, `12.`, `.50` or `10.005`.
///
/// At most one decimal point and at least one digit. Returns `None` for
/// anything else, or when the value can't be held exactly.
fn parse_price(token: &str) -> Option<Decimal> {
    let (whole, fraction) = token.split_once('.').unwrap_or((token, ""));
    if fraction.contains('.') || (whole.is_empty() && fraction.is_empty()) {
        return None;
    }

    let whole = if whole.is_empty() { "0" } else { whole };
    let normalized = if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{whole}.{fraction}")
    };

    Decimal::from_str_exact(&normalized).ok()
}

// =============================================================================
// Unit Tests
// =============================================================================
