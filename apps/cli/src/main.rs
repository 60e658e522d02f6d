//! # saletax CLI Entry Point
//!
//! Prints a sales-tax receipt for a purchase file.
//!
//! ```text
//! $ saletax basket.txt
//! 2 book: 24.98
//! 1 music CD: 16.49
//! 1 chocolate bar: 0.85
//! Sales Taxes: 1.50
//! Total: 42.32
//! ```
//!
//! ## Run Sequence
//! 1. Initialize tracing (stderr, `RUST_LOG` aware)
//! 2. Build the tax configuration from flags and environment
//! 3. Read the purchase file
//! 4. Generate the receipt (bad lines are logged and skipped)
//! 5. Print it, or exit 1 with a one-line error

mod config;
mod error;
mod input;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use saletax_core::{CoreError, Receipt, ReceiptGenerator, TaxEngine};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::TaxArgs;
use crate::error::{CliError, CliResult};

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
enum OutputFormat {
    /// Plain receipt lines
    #[default]
    Text,
    /// Serialized receipt, including skipped lines
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "saletax", version, about = "Print a sales-tax receipt for a purchase file")]
struct Cli {
    /// Purchase file, one "<quantity> <name> at <price>" per line
    file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(flatten)]
    tax: TaxArgs,
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Run failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config = cli.tax.into_config()?;
    let lines = input::read_purchase_lines(&cli.file)?;
    info!(file = %cli.file.display(), lines = lines.len(), "Processing purchase file");

    let receipt = ReceiptGenerator::new(TaxEngine::new(config))
        .generate(&lines)
        .map_err(CoreError::from)?;

    if receipt.is_empty() {
        return Err(CliError::NoUsableItems {
            skipped: receipt.skipped().len(),
        });
    }

    let stdout = io::stdout();
    write_receipt(&mut stdout.lock(), &receipt, cli.format)
}

fn write_receipt<W: Write>(out: &mut W, receipt: &Receipt, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Text => {
            for line in receipt.render() {
                writeln!(out, "{line}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, receipt)?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - Default: WARN, so skipped lines show up on stderr
/// - `RUST_LOG=debug` - per-item tax breakdown
/// - `RUST_LOG=off` - silence everything but the receipt
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_text_receipt() {
        let receipt = ReceiptGenerator::default()
            .generate(&["1 chocolate bar at 0.85"])
            .unwrap();
        let mut out = Vec::new();
        write_receipt(&mut out, &receipt, OutputFormat::Text).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1 chocolate bar: 0.85\nSales Taxes: 0.00\nTotal: 0.85\n"
        );
    }

    #[test]
    fn test_write_json_receipt() {
        let receipt = ReceiptGenerator::default()
            .generate(&["1 music CD at 14.99"])
            .unwrap();
        let mut out = Vec::new();
        write_receipt(&mut out, &receipt, OutputFormat::Json).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["sales_taxes"], 150);
        assert_eq!(json["lines"][0]["total_amount"], 1649);
    }

    #[test]
    fn test_cli_requires_file() {
        assert!(Cli::try_parse_from(["saletax"]).is_err());
    }
}
