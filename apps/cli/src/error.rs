//! # CLI Error Type
//!
//! Everything that can end a `saletax` run with a non-zero exit status.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  input.rs ──── InputSourceError ──┐                                     │
//! │  config.rs ─── ConfigError ───────┼──► CliError ──► "Error: <msg>"      │
//! │  saletax-core ─ CoreError ────────┤         exit status 1               │
//! │  main.rs ───── NoUsableItems ─────┘                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use saletax_core::CoreError;
use thiserror::Error;

/// Top-level error for the binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Input(#[from] InputSourceError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Core(#[from] CoreError),

    /// Every line was skipped.
    #[error("No valid items to process ({skipped} line(s) skipped)")]
    NoUsableItems { skipped: usize },

    #[error("Failed to write receipt: {0}")]
    Output(#[from] std::io::Error),

    #[error("Failed to serialize receipt: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Failure to obtain the purchase lines.
#[derive(Debug, Error)]
pub enum InputSourceError {
    #[error("File path cannot be empty")]
    EmptyPath,

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Permission denied for file: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("File contains invalid characters: {}", .0.display())]
    InvalidEncoding(PathBuf),

    #[error("Error reading file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Invalid tax configuration from flags or environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}

pub type CliResult<T> = Result<T, CliError>;
