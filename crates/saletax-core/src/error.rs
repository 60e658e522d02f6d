//! # Error Types
//!
//! Domain-specific error types for saletax-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  Per-line errors (line is skipped, run continues)                      │
//! │  ├── ParseError       - Line does not match the purchase grammar       │
//! │  ├── ValidationError  - Item fields or tax config fail invariants      │
//! │  ├── TaxError         - Bad input reaching the tax engine              │
//! │  └── LineError        - Union of the three, recorded on the receipt    │
//! │                                                                         │
//! │  Run-level errors (no receipt is produced)                             │
//! │  └── ProcessingError  - Nothing to process                             │
//! │                                                                         │
//! │  CLI errors (separate crate)                                           │
//! │  └── CliError         - Input file, config, exit status                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, raw token, etc.)
//! 3. Errors are enum variants, never String

use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Crate-level error for callers that don't care which stage failed.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Tax(#[from] TaxError),

    #[error(transparent)]
    Processing(#[from] ProcessingError),
}

// =============================================================================
// Parse Error
// =============================================================================

/// A purchase line could not be turned into a [`ParsedItem`](crate::parser::ParsedItem).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line is empty or whitespace only.
    #[error("Item string cannot be empty")]
    Empty,

    /// The line doesn't look like `<quantity> <name> at <price>`.
    #[error("Invalid item string format")]
    InvalidFormat,

    /// The leading quantity doesn't fit in an i64.
    #[error("Invalid quantity '{0}'")]
    InvalidQuantity(String),

    /// The price token is not a decimal amount.
    #[error("Invalid price '{0}'")]
    InvalidPrice(String),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by [`Item::new`](crate::item::Item::new) and when building a
/// [`TaxConfig`](crate::tax::TaxConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Tax Error
// =============================================================================

/// Invalid input reaching the tax engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxError {
    #[error("Price must be a positive number")]
    NonPositivePrice,

    #[error("Quantity must be a positive integer")]
    NonPositiveQuantity,

    #[error("Item name must be a non-empty string")]
    EmptyName,

    /// An amount or running total overflowed the cent counter.
    #[error("Amount overflow for {quantity} x {item_name}")]
    Overflow { item_name: String, quantity: i64 },
}

// =============================================================================
// Line Error
// =============================================================================

/// Why a single purchase line was left off the receipt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("invalid item: {0}")]
    Validation(#[from] ValidationError),

    #[error("tax error: {0}")]
    Tax(#[from] TaxError),
}

/// Serialized as its display message in JSON receipts.
impl Serialize for LineError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// =============================================================================
// Processing Error
// =============================================================================

/// Errors that abort a whole receipt run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessingError {
    #[error("No valid items to process")]
    EmptyInput,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBePositive {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must be positive");
    }

    #[test]
    fn test_line_error_wraps_stage_errors() {
        let err: LineError = ParseError::InvalidFormat.into();
        assert_eq!(err.to_string(), "parse error: Invalid item string format");

        let err: LineError = TaxError::NonPositivePrice.into();
        assert!(matches!(err, LineError::Tax(TaxError::NonPositivePrice)));
    }

    #[test]
    fn test_processing_converts_to_core_error() {
        let core_err: CoreError = ProcessingError::EmptyInput.into();
        assert!(matches!(core_err, CoreError::Processing(_)));
        assert_eq!(core_err.to_string(), "No valid items to process");
    }
}
