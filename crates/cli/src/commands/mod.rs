//! Command implementations.
//!
//! Each command runs one storefront operation and prints the result.

pub mod cart;
pub mod catalog;
pub mod content;

use std::io::Write;

use commerce_bridge_storefront::commerce::CommerceError;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The storefront operation failed.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// The result could not be encoded.
    #[error("Failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),

    /// The result could not be written.
    #[error("Failed to write result: {0}")]
    Write(#[from] std::io::Error),
}

/// Print a value to stdout as pretty JSON.
fn print_json<T: Serialize>(value: &T) -> Result<(), CommandError> {
    let json = serde_json::to_string_pretty(value)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}
