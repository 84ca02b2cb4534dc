//! Monetary amounts as reported by the Storefront API.
//!
//! The API reports amounts as decimal strings. They are carried as text through
//! the whole adapter; [`Money::decimal_amount`] exists for consumers that need
//! arithmetic and parses into an exact `Decimal`, never a float.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when an amount string is not a valid decimal.
#[derive(Debug, Error)]
#[error("Invalid money amount '{amount}': {source}")]
pub struct MoneyError {
    amount: String,
    #[source]
    source: rust_decimal::Error,
}

/// Monetary amount with currency code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Decimal amount as string (preserves precision).
    pub amount: String,
    /// ISO 4217 currency code.
    pub currency_code: String,
}

impl Money {
    /// Create a new amount.
    #[must_use]
    pub fn new(amount: impl Into<String>, currency_code: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            currency_code: currency_code.into(),
        }
    }

    /// The amount used when the platform reports no tax for a cart.
    #[must_use]
    pub fn zero_tax() -> Self {
        Self::new("0.0", "USD")
    }

    /// Parse the amount into an exact decimal.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError` if the amount is not a decimal number.
    pub fn decimal_amount(&self) -> Result<Decimal, MoneyError> {
        Decimal::from_str(&self.amount).map_err(|source| MoneyError {
            amount: self.amount.clone(),
            source,
        })
    }
}
