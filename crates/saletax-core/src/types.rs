//! # Domain Types
//!
//! Small value types shared by the pipeline stages.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────────────────────────────┐     │
//! │  │    TaxRate      │   │             Category                    │     │
//! │  │  ─────────────  │   │  ─────────────────────────────────────  │     │
//! │  │  bps (u32)      │   │  Book     "book"                        │     │
//! │  │  1000 = 10%     │   │  Food     "food", "chocolate"           │     │
//! │  │   500 =  5%     │   │  Medical  "medical", "pill"             │     │
//! │  └─────────────────┘   │  Other    everything else               │     │
//! │                        └─────────────────────────────────────────┘     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% (basic sales tax), 500 bps = 5% (import duty)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Basis points in 100%.
    pub const BPS_PER_UNIT: u32 = 10_000;

    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as an exact fraction (`1000` bps → `0.1000`).
    #[inline]
    pub fn as_decimal(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 4)
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percentage())
    }
}

// =============================================================================
// Category
// =============================================================================

/// Tax category of an item, derived from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Book,
    Food,
    Medical,
    Other,
}

impl Category {
    /// Every category, in classification priority order.
    pub const ALL: [Category; 4] = [
        Category::Book,
        Category::Food,
        Category::Medical,
        Category::Other,
    ];

    /// Classifies an item name.
    ///
    /// Case-insensitive substring match; the first rule that hits wins, so a
    /// "food book" is a [`Category::Book`].
    ///
    /// ```rust
    /// use saletax_core::types::Category;
    ///
    /// assert_eq!(Category::from_name("Book of Poems"), Category::Book);
    /// assert_eq!(Category::from_name("chocolate bar"), Category::Food);
    /// assert_eq!(Category::from_name("packet of headache pills"), Category::Medical);
    /// assert_eq!(Category::from_name("music CD"), Category::Other);
    /// ```
    pub fn from_name(name: &str) -> Category {
        let name = name.to_lowercase();
        let contains_any = |needles: &[&str]| needles.iter().any(|n| name.contains(n));

        if contains_any(&["book"]) {
            Category::Book
        } else if contains_any(&["food", "chocolate"]) {
            Category::Food
        } else if contains_any(&["medical", "pill"]) {
            Category::Medical
        } else {
            Category::Other
        }
    }

    /// Lower-case label, as used in configuration.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Book => "book",
            Category::Food => "food",
            Category::Medical => "medical",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: Category::ALL.iter().map(|c| c.as_str().to_string()).collect(),
            })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
