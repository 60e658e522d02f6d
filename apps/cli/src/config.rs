//! # Tax Configuration
//!
//! Builds the immutable [`TaxConfig`] for a run.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --basic-rate-bps 1000 --import-rate-bps 500 --exempt book,food     │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     SALETAX_BASIC_RATE_BPS=1000                                        │
//! │     SALETAX_IMPORT_RATE_BPS=500                                        │
//! │     SALETAX_EXEMPT=book,food,medical                                   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     10% basic, 5% import, book/food/medical exempt                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use clap::Args;
use saletax_core::tax::{DEFAULT_BASIC_RATE, DEFAULT_IMPORT_DUTY_RATE};
use saletax_core::{Category, TaxConfig, TaxRate};
use tracing::debug;

use crate::error::ConfigError;

/// Exempt list value meaning "no exemptions".
const NO_EXEMPTIONS: &str = "none";

/// Tax flags shared by every invocation.
#[derive(Debug, Clone, Args)]
pub struct TaxArgs {
    /// Basic sales tax in basis points (1000 = 10%)
    #[arg(
        long = "basic-rate-bps",
        env = "SALETAX_BASIC_RATE_BPS",
        default_value_t = DEFAULT_BASIC_RATE.bps()
    )]
    pub basic_rate_bps: u32,

    /// Import duty in basis points (500 = 5%)
    #[arg(
        long = "import-rate-bps",
        env = "SALETAX_IMPORT_RATE_BPS",
        default_value_t = DEFAULT_IMPORT_DUTY_RATE.bps()
    )]
    pub import_rate_bps: u32,

    /// Comma-separated categories exempt from basic tax, or "none"
    #[arg(long = "exempt", env = "SALETAX_EXEMPT", default_value = "book,food,medical")]
    pub exempt: String,
}

impl TaxArgs {
    /// Validates the flags into a [`TaxConfig`].
    pub fn into_config(self) -> Result<TaxConfig, ConfigError> {
        let exempt = parse_exempt_list(&self.exempt)?;

        let config = TaxConfig::new(
            TaxRate::from_bps(self.basic_rate_bps),
            TaxRate::from_bps(self.import_rate_bps),
            exempt,
        )
        .map_err(|e| ConfigError::InvalidValue {
            name: "tax rate".to_string(),
            reason: e.to_string(),
        })?;

        debug!(
            basic_rate = %config.basic_rate(),
            import_duty_rate = %config.import_duty_rate(),
            exempt = ?config.exempt_categories(),
            "Tax configuration loaded"
        );

        Ok(config)
    }
}

/// Parses `book,food` style lists. Blank or `none` means no exemptions.
fn parse_exempt_list(raw: &str) -> Result<Vec<Category>, ConfigError> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case(NO_EXEMPTIONS) {
        return Ok(Vec::new());
    }

    raw.split(',')
        .map(|label| {
            label.parse::<Category>().map_err(|e| ConfigError::InvalidValue {
                name: "exempt".to_string(),
                reason: format!("'{}': {}", label.trim(), e),
            })
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
