//! # Tax Engine
//!
//! Computes basic sales tax and import duty for one purchase line.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Per-Unit Tax, Then Scale                             │
//! │                                                                         │
//! │  unit price ──┬── category exempt? ── yes ──► basic = 0                 │
//! │               │                      no  ──► basic = ⌈price × 10%⌉₀.₀₅  │
//! │               │                                                         │
//! │               └── imported? ───────── yes ──► duty  = ⌈price × 5%⌉₀.₀₅  │
//! │                                       no  ──► duty  = 0                 │
//! │                                                                         │
//! │  tax    = basic + duty            (per unit, whole cents)               │
//! │  amount = price + tax             (per unit, exact decimal)             │
//! │                                                                         │
//! │  every per-unit value × quantity, rounded to cents ──► TaxResult        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rates and the exempt set live in an immutable [`TaxConfig`] owned by the
//! engine. Build a second engine to price the same items under other rules.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

use crate::error::{TaxError, ValidationError};
use crate::item::Item;
use crate::money::{round_tax, Money};
use crate::types::{Category, TaxRate};
use crate::validation::validate_tax_rate;

/// Basic sales tax: 10%.
pub const DEFAULT_BASIC_RATE: TaxRate = TaxRate::from_bps(1000);

/// Import duty: 5%.
pub const DEFAULT_IMPORT_DUTY_RATE: TaxRate = TaxRate::from_bps(500);

/// Categories excused from basic tax (not from import duty).
pub const DEFAULT_EXEMPT_CATEGORIES: [Category; 3] =
    [Category::Book, Category::Food, Category::Medical];

// =============================================================================
// Tax Configuration
// =============================================================================

/// Rate table and exemptions for a [`TaxEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxConfig {
    basic_rate: TaxRate,
    import_duty_rate: TaxRate,
    exempt: BTreeSet<Category>,
}

impl TaxConfig {
    /// Creates a validated configuration.
    ///
    /// ```rust
    /// use saletax_core::tax::TaxConfig;
    /// use saletax_core::types::{Category, TaxRate};
    ///
    /// let config = TaxConfig::new(
    ///     TaxRate::from_bps(2000),
    ///     TaxRate::from_bps(0),
    ///     [Category::Book],
    /// )
    /// .unwrap();
    /// assert!(config.is_exempt(Category::Book));
    /// assert!(!config.is_exempt(Category::Food));
    /// ```
    pub fn new(
        basic_rate: TaxRate,
        import_duty_rate: TaxRate,
        exempt: impl IntoIterator<Item = Category>,
    ) -> Result<Self, ValidationError> {
        validate_tax_rate("basic_rate", basic_rate)?;
        validate_tax_rate("import_duty_rate", import_duty_rate)?;

        Ok(TaxConfig {
            basic_rate,
            import_duty_rate,
            exempt: exempt.into_iter().collect(),
        })
    }

    /// Returns a copy with a different basic rate.
    pub fn with_basic_rate(self, rate: TaxRate) -> Result<Self, ValidationError> {
        TaxConfig::new(rate, self.import_duty_rate, self.exempt)
    }

    /// Returns a copy with a different import duty rate.
    pub fn with_import_duty_rate(self, rate: TaxRate) -> Result<Self, ValidationError> {
        TaxConfig::new(self.basic_rate, rate, self.exempt)
    }

    /// Returns a copy with a different exempt set.
    pub fn with_exempt(self, exempt: impl IntoIterator<Item = Category>) -> Self {
        TaxConfig {
            exempt: exempt.into_iter().collect(),
            ..self
        }
    }

    pub fn basic_rate(&self) -> TaxRate {
        self.basic_rate
    }

    pub fn import_duty_rate(&self) -> TaxRate {
        self.import_duty_rate
    }

    pub fn exempt_categories(&self) -> &BTreeSet<Category> {
        &self.exempt
    }

    /// Whether `category` is excused from basic tax.
    pub fn is_exempt(&self, category: Category) -> bool {
        self.exempt.contains(&category)
    }
}

impl Default for TaxConfig {
    fn default() -> Self {
        TaxConfig {
            basic_rate: DEFAULT_BASIC_RATE,
            import_duty_rate: DEFAULT_IMPORT_DUTY_RATE,
            exempt: DEFAULT_EXEMPT_CATEGORIES.into_iter().collect(),
        }
    }
}

// =============================================================================
// Tax Result
// =============================================================================

/// Taxes for one purchase line, already scaled by quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxResult {
    item_name: String,
    quantity: i64,
    basic_tax: Money,
    import_tax: Money,
    total_tax: Money,
    total_amount: Money,
}

impl TaxResult {
    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn basic_tax(&self) -> Money {
        self.basic_tax
    }

    pub fn import_tax(&self) -> Money {
        self.import_tax
    }

    /// Basic tax plus import duty.
    pub fn total_tax(&self) -> Money {
        self.total_tax
    }

    /// Price plus all taxes.
    pub fn total_amount(&self) -> Money {
        self.total_amount
    }
}

// =============================================================================
// Tax Engine
// =============================================================================

/// Applies a [`TaxConfig`] to purchase lines.
#[derive(Debug, Clone, Default)]
pub struct TaxEngine {
    config: TaxConfig,
}

impl TaxEngine {
    pub fn new(config: TaxConfig) -> Self {
        TaxEngine { config }
    }

    pub fn config(&self) -> &TaxConfig {
        &self.config
    }

    /// Calculates taxes for `quantity` units of an item.
    ///
    /// ## Errors
    /// - [`TaxError::NonPositivePrice`] if `unit_price` <= 0
    /// - [`TaxError::NonPositiveQuantity`] if `quantity` <= 0
    /// - [`TaxError::EmptyName`] if `item_name` is blank
    /// - [`TaxError::Overflow`] if any amount doesn't fit in i64 cents
    ///
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use saletax_core::tax::TaxEngine;
    /// use saletax_core::types::Category;
    ///
    /// let engine = TaxEngine::default();
    /// let result = engine
    ///     .calculate(Decimal::new(4750, 2), 1, "imported bottle of perfume", Category::Other, true)
    ///     .unwrap();
    /// assert_eq!(result.basic_tax().cents(), 475);
    /// assert_eq!(result.import_tax().cents(), 240);
    /// assert_eq!(result.total_amount().to_string(), "54.65");
    /// ```
    pub fn calculate(
        &self,
        unit_price: Decimal,
        quantity: i64,
        item_name: &str,
        category: Category,
        imported: bool,
    ) -> Result<TaxResult, TaxError> {
        if unit_price <= Decimal::ZERO {
            return Err(TaxError::NonPositivePrice);
        }
        if quantity <= 0 {
            return Err(TaxError::NonPositiveQuantity);
        }
        if item_name.trim().is_empty() {
            return Err(TaxError::EmptyName);
        }

        let overflow = || TaxError::Overflow {
            item_name: item_name.to_string(),
            quantity,
        };

        let basic_per_unit = if self.config.is_exempt(category) {
            Money::zero()
        } else {
            tax_at(unit_price, self.config.basic_rate).ok_or_else(overflow)?
        };
        let import_per_unit = if imported {
            tax_at(unit_price, self.config.import_duty_rate).ok_or_else(overflow)?
        } else {
            Money::zero()
        };
        let tax_per_unit = basic_per_unit
            .checked_add(import_per_unit)
            .ok_or_else(overflow)?;
        let amount_per_unit = unit_price
            .checked_add(tax_per_unit.to_decimal())
            .ok_or_else(overflow)?;

        let scale = |per_unit: Money| per_unit.checked_multiply_quantity(quantity).ok_or_else(overflow);
        let total_amount = amount_per_unit
            .checked_mul(Decimal::from(quantity))
            .and_then(Money::from_decimal_rounded)
            .ok_or_else(overflow)?;

        let result = TaxResult {
            item_name: item_name.to_string(),
            quantity,
            basic_tax: scale(basic_per_unit)?,
            import_tax: scale(import_per_unit)?,
            total_tax: scale(tax_per_unit)?,
            total_amount,
        };

        debug!(
            item = item_name,
            quantity,
            %category,
            imported,
            total_tax = %result.total_tax,
            total_amount = %result.total_amount,
            "Calculated item tax"
        );

        Ok(result)
    }

    /// Calculates taxes for a validated [`Item`].
    pub fn calculate_item(&self, item: &Item) -> Result<TaxResult, TaxError> {
        self.calculate(
            item.unit_price(),
            item.quantity(),
            item.name(),
            item.category(),
            item.imported(),
        )
    }
}

/// Tax on one unit at `rate`, rounded up to 0.05.
fn tax_at(unit_price: Decimal, rate: TaxRate) -> Option<Money> {
    round_tax(unit_price.checked_mul(rate.as_decimal())?)
}

// =============================================================================
// Unit Tests
// =============================================================================
