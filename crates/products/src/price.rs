use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use grocer_core::ValueObject;

/// The text was not a `$`-prefixed amount with `,` as decimal separator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid price: {0:?}")]
pub struct InvalidPrice(pub String);

/// Currency value as written in product data, e.g. `"$1,99"`.
///
/// Keeps the original text for output and the parsed amount for arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price {
    text: String,
    amount: f64,
}

impl ValueObject for Price {}

impl Price {
    /// Parse currency text: strip the leading `$`, turn the first `,` into `.`,
    /// and require a finite number.
    pub fn parse(text: &str) -> Result<Self, InvalidPrice> {
        let invalid = || InvalidPrice(text.to_string());

        let body = text.strip_prefix('$').ok_or_else(invalid)?;
        let normalized = body.replacen(',', ".", 1);
        let amount: f64 = normalized.parse().map_err(|_| invalid())?;
        if !amount.is_finite() {
            return Err(invalid());
        }

        Ok(Self {
            text: text.to_string(),
            amount,
        })
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for Price {
    type Err = InvalidPrice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Price {
    type Error = InvalidPrice;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Price> for String {
    fn from(value: Price) -> Self {
        value.text
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.text)
    }
}
