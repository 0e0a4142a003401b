//! Monetary amounts and the validation applied at input boundaries.

use std::fmt;

use thiserror::Error;

/// A single sale or expense value.
pub type Amount = f64;

/// Currency sign prefixed to amounts in log text and listings.
pub const CURRENCY_SIGN: &str = "₱";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Reasons a raw input string cannot become an [`Amount`].
pub enum AmountError {
    #[error("amount is required")]
    Empty,
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("amount must be a positive number, got {0}")]
    NotPositive(String),
}

/// Parses user input into a strictly positive, finite amount.
pub fn parse_amount(raw: &str) -> Result<Amount, AmountError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }
    let value: Amount = trimmed
        .parse()
        .map_err(|_| AmountError::NotANumber(trimmed.to_string()))?;
    validate_amount(value)
}

/// Checks an already numeric value against the amount rules.
pub fn validate_amount(value: Amount) -> Result<Amount, AmountError> {
    if !value.is_finite() {
        return Err(AmountError::NotANumber(value.to_string()));
    }
    if value <= 0.0 {
        return Err(AmountError::NotPositive(value.to_string()));
    }
    Ok(value)
}

/// Renders an amount with the currency sign and no padding, e.g. `₱15.5`.
pub fn format_amount(value: Amount) -> String {
    format!("{}{}", CURRENCY_SIGN, Money(value))
}

/// Shortest decimal rendering of an amount (`50`, not `50.0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Money(pub Amount);

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
