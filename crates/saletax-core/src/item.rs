//! # Item Model
//!
//! An immutable, validated purchase line.
//!
//! Fields are private and there are no setters: an [`Item`] is fully built
//! by [`Item::new`] and only read afterwards. Category and total price are
//! derived from the stored fields on demand.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::ValidationError;
use crate::parser::ParsedItem;
use crate::types::Category;
use crate::validation::{validate_item_name, validate_quantity, validate_unit_price};

/// A validated purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    name: String,
    unit_price: Decimal,
    quantity: i64,
    imported: bool,
}

impl Item {
    /// Creates an item, enforcing the field invariants.
    ///
    /// ## Rules
    /// - `name` is non-empty
    /// - `unit_price` > 0
    /// - `quantity` > 0
    ///
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use saletax_core::item::Item;
    /// use saletax_core::types::Category;
    ///
    /// let item = Item::new("chocolate bar", Decimal::new(85, 2), 2, false).unwrap();
    /// assert_eq!(item.category(), Category::Food);
    /// assert_eq!(item.total_price(), Some(Decimal::new(170, 2)));
    ///
    /// assert!(Item::new("chocolate bar", Decimal::ZERO, 1, false).is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        unit_price: Decimal,
        quantity: i64,
        imported: bool,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_unit_price(unit_price)?;
        validate_quantity(quantity)?;

        Ok(Item {
            name,
            unit_price,
            quantity,
            imported,
        })
    }

    /// Builds an item from parser output.
    pub fn from_parsed(parsed: ParsedItem) -> Result<Self, ValidationError> {
        Item::new(parsed.name, parsed.unit_price, parsed.quantity, parsed.imported)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn imported(&self) -> bool {
        self.imported
    }

    /// Tax category derived from the name.
    pub fn category(&self) -> Category {
        Category::from_name(&self.name)
    }

    /// Untaxed price for the whole line (unit price × quantity).
    ///
    /// `None` if the product is too large for a decimal.
    pub fn total_price(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }
}

impl TryFrom<ParsedItem> for Item {
    type Error = ValidationError;

    fn try_from(parsed: ParsedItem) -> Result<Self, Self::Error> {
        Item::from_parsed(parsed)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
