//! # saletax-core: Pure Receipt Pipeline
//!
//! This crate turns free-text purchase lines into a taxed receipt. It
//! contains all business logic as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        saletax Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  saletax CLI (apps/cli)                         │   │
//! │  │      args ──► config ──► read file ──► print receipt            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Vec<String>                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ saletax-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────────┐   │   │
//! │  │   │  parser  │─►│   item   │─►│   tax    │─►│   receipt    │   │   │
//! │  │   │ParsedItem│  │   Item   │  │TaxEngine │  │ReceiptGenera-│   │   │
//! │  │   │          │  │ Category │  │TaxResult │  │tor, Receipt  │   │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Integer-cent `Money` and the round-up-to-0.05 rule (no floating point!)
//! - [`types`] - `TaxRate` and `Category`
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation
//! - [`parser`] - Purchase line parser
//! - [`item`] - Validated, immutable `Item`
//! - [`tax`] - Tax configuration and engine
//! - [`receipt`] - Pipeline driver and receipt rendering
//!
//! ## Example Usage
//!
//! ```rust
//! use saletax_core::generate_receipt;
//!
//! let receipt = generate_receipt(&[
//!     "2 book at 12.49",
//!     "1 music CD at 14.99",
//!     "1 chocolate bar at 0.85",
//! ])
//! .unwrap();
//!
//! assert_eq!(
//!     receipt,
//!     [
//!         "2 book: 24.98",
//!         "1 music CD: 16.49",
//!         "1 chocolate bar: 0.85",
//!         "Sales Taxes: 1.50",
//!         "Total: 42.32",
//!     ]
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod item;
pub mod money;
pub mod parser;
pub mod receipt;
pub mod tax;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, LineError, ParseError, ProcessingError, TaxError, ValidationError};
pub use item::Item;
pub use money::Money;
pub use parser::{parse_line, ParsedItem};
pub use receipt::{generate_receipt, Receipt, ReceiptGenerator, ReceiptLine, SkippedLine};
pub use tax::{TaxConfig, TaxEngine, TaxResult};
pub use types::{Category, TaxRate};
