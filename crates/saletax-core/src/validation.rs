//! # Validation Module
//!
//! Field validators shared by [`Item`](crate::item::Item) and
//! [`TaxConfig`](crate::tax::TaxConfig).
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Parser                                                       │
//! │  └── Shape of the line (digits, "at", price token)                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Item::new (THIS MODULE)                                      │
//! │  └── Field invariants: name, price > 0, quantity > 0                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: TaxEngine::calculate                                         │
//! │  └── Re-checks price and name for direct callers                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use saletax_core::validation::{validate_item_name, validate_quantity};
//!
//! assert!(validate_item_name("music CD").is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::types::TaxRate;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty or whitespace only
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0); returns are not supported
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be positive (> 0); free items are rejected
///
/// ```rust
/// use rust_decimal::Decimal;
/// use saletax_core::validation::validate_unit_price;
///
/// assert!(validate_unit_price(Decimal::new(1099, 2)).is_ok());
/// assert!(validate_unit_price(Decimal::ZERO).is_err());
/// ```
pub fn validate_unit_price(price: Decimal) -> ValidationResult<()> {
    if price <= Decimal::ZERO {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a tax rate.
///
/// ## Rules
/// - Must be between 0 and 10000 bps (0% to 100%)
pub fn validate_tax_rate(field: &str, rate: TaxRate) -> ValidationResult<()> {
    if rate.bps() > TaxRate::BPS_PER_UNIT {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: TaxRate::BPS_PER_UNIT as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("book").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(1000).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(Decimal::new(1, 2)).is_ok());
        assert!(validate_unit_price(Decimal::new(1, 3)).is_ok());
        assert!(validate_unit_price(Decimal::ZERO).is_err());
        assert!(validate_unit_price(Decimal::new(-100, 2)).is_err());
    }

    #[test]
    fn test_validate_tax_rate() {
        assert!(validate_tax_rate("basic_rate", TaxRate::from_bps(0)).is_ok());
        assert!(validate_tax_rate("basic_rate", TaxRate::from_bps(1000)).is_ok());
        assert!(validate_tax_rate("basic_rate", TaxRate::from_bps(10000)).is_ok());

        let err = validate_tax_rate("import_duty_rate", TaxRate::from_bps(10001)).unwrap_err();
        assert_eq!(err.to_string(), "import_duty_rate must be between 0 and 10000");
    }
}
