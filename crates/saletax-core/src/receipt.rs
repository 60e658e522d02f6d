//! # Receipt Aggregator
//!
//! Runs every purchase line through parse → item → tax and collects the
//! survivors into a [`Receipt`].
//!
//! ## Line Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "1 music CD at 14.99"                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse_line ──── Err ───┐                                               │
//! │       │                 │                                               │
//! │       ▼                 │                                               │
//! │  Item::from_parsed ─ Err┤                                               │
//! │       │                 ├──► SkippedLine { line_number, raw, reason }   │
//! │       ▼                 │    (warn! and continue with the next line)    │
//! │  calculate_item ─── Err ┤                                               │
//! │       │                 │                                               │
//! │       ▼                 │                                               │
//! │  totals += tax, amount ─┘ (Err when a running total overflows)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ReceiptLine "1 music CD: 16.49"                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rendered Output
//! ```text
//! 2 book: 24.98
//! 1 music CD: 16.49
//! 1 chocolate bar: 0.85
//! Sales Taxes: 1.50
//! Total: 42.32
//! ```

use serde::Serialize;
use std::fmt;
use tracing::{info, warn};

use crate::error::{LineError, ProcessingError, TaxError};
use crate::item::Item;
use crate::money::Money;
use crate::parser::parse_line;
use crate::tax::{TaxEngine, TaxResult};

// =============================================================================
// Receipt Types
// =============================================================================

/// One itemized row of the receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptLine {
    pub quantity: i64,
    pub name: String,
    pub total_tax: Money,
    pub total_amount: Money,
}

impl From<TaxResult> for ReceiptLine {
    fn from(result: TaxResult) -> Self {
        ReceiptLine {
            quantity: result.quantity(),
            total_tax: result.total_tax(),
            total_amount: result.total_amount(),
            name: result.item_name().to_string(),
        }
    }
}

impl fmt::Display for ReceiptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.quantity, self.name, self.total_amount)
    }
}

/// An input line that was left off the receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based position in the input.
    pub line_number: usize,
    pub raw: String,
    pub reason: LineError,
}

impl fmt::Display for SkippedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} '{}': {}", self.line_number, self.raw, self.reason)
    }
}

/// A finished receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Receipt {
    lines: Vec<ReceiptLine>,
    sales_taxes: Money,
    total: Money,
    skipped: Vec<SkippedLine>,
}

impl Receipt {
    /// Itemized rows, in input order.
    pub fn lines(&self) -> &[ReceiptLine] {
        &self.lines
    }

    /// Sum of every row's tax.
    pub fn sales_taxes(&self) -> Money {
        self.sales_taxes
    }

    /// Sum of every row's taxed amount.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Lines that failed to parse, validate or price.
    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    /// True when no input line made it onto the receipt.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Renders item rows followed by the two summary rows.
    pub fn render(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(ToString::to_string)
            .chain([
                format!("Sales Taxes: {}", self.sales_taxes),
                format!("Total: {}", self.total),
            ])
            .collect()
    }

    /// Adds a row. The receipt is unchanged if either total would overflow.
    fn push(&mut self, result: TaxResult) -> Result<(), TaxError> {
        let overflow = || TaxError::Overflow {
            item_name: result.item_name().to_string(),
            quantity: result.quantity(),
        };
        let sales_taxes = self
            .sales_taxes
            .checked_add(result.total_tax())
            .ok_or_else(overflow)?;
        let total = self
            .total
            .checked_add(result.total_amount())
            .ok_or_else(overflow)?;

        self.sales_taxes = sales_taxes;
        self.total = total;
        self.lines.push(result.into());
        Ok(())
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render().join("\n"))
    }
}

// =============================================================================
// Receipt Generator
// =============================================================================

/// Builds receipts with a fixed [`TaxEngine`].
#[derive(Debug, Clone, Default)]
pub struct ReceiptGenerator {
    engine: TaxEngine,
}

impl ReceiptGenerator {
    pub fn new(engine: TaxEngine) -> Self {
        ReceiptGenerator { engine }
    }

    pub fn engine(&self) -> &TaxEngine {
        &self.engine
    }

    /// Processes `lines` into a receipt.
    ///
    /// Lines that fail are logged, recorded in [`Receipt::skipped`] and
    /// contribute nothing to the rows or totals.
    ///
    /// ## Errors
    /// [`ProcessingError::EmptyInput`] if `lines` is empty.
    ///
    /// ```rust
    /// use saletax_core::receipt::ReceiptGenerator;
    ///
    /// let receipt = ReceiptGenerator::default()
    ///     .generate(&["1 book at 12.49", "not an item"])
    ///     .unwrap();
    /// assert_eq!(receipt.lines().len(), 1);
    /// assert_eq!(receipt.skipped().len(), 1);
    /// assert_eq!(receipt.render(), ["1 book: 12.49", "Sales Taxes: 0.00", "Total: 12.49"]);
    /// ```
    pub fn generate<S: AsRef<str>>(&self, lines: &[S]) -> Result<Receipt, ProcessingError> {
        if lines.is_empty() {
            return Err(ProcessingError::EmptyInput);
        }

        let receipt = lines
            .iter()
            .enumerate()
            .fold(Receipt::default(), |mut receipt, (idx, raw)| {
                let raw = raw.as_ref();
                let outcome = self
                    .process_line(raw)
                    .and_then(|result| receipt.push(result).map_err(LineError::from));
                if let Err(reason) = outcome {
                    warn!(line = idx + 1, raw, %reason, "Skipping purchase line");
                    receipt.skipped.push(SkippedLine {
                        line_number: idx + 1,
                        raw: raw.to_string(),
                        reason,
                    });
                }
                receipt
            });

        info!(
            items = receipt.lines.len(),
            skipped = receipt.skipped.len(),
            sales_taxes = %receipt.sales_taxes,
            total = %receipt.total,
            "Receipt generated"
        );

        Ok(receipt)
    }

    fn process_line(&self, raw: &str) -> Result<TaxResult, LineError> {
        let item = Item::from_parsed(parse_line(raw)?)?;
        Ok(self.engine.calculate_item(&item)?)
    }
}

/// Renders a receipt for `lines` under the default tax rules.
///
/// ```rust
/// use saletax_core::receipt::generate_receipt;
///
/// let rendered = generate_receipt(&["1 music CD at 14.99"]).unwrap();
/// assert_eq!(rendered, ["1 music CD: 16.49", "Sales Taxes: 1.50", "Total: 16.49"]);
/// ```
pub fn generate_receipt<S: AsRef<str>>(lines: &[S]) -> Result<Vec<String>, ProcessingError> {
    Ok(ReceiptGenerator::default().generate(lines)?.render())
}

// =============================================================================
// Unit Tests
// =============================================================================
