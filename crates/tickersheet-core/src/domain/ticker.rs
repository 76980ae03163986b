use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Instrument ticker as typed by the user.
///
/// Only surrounding whitespace is removed. Case and punctuation are kept, since
/// the provider uses `^GSPC`, `EURUSD=X`, `CL=F` and `BTC-USD` style symbols.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyTicker);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path-safe form used in the chart URL.
    pub fn encoded(&self) -> String {
        encode_ticker(&self.0)
    }
}

/// Escape the two symbol characters a URL would otherwise mangle.
///
/// `^` becomes `%5E` and `=` becomes `%3D`; every other character is passed
/// through untouched and in order.
pub fn encode_ticker(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut encoded = String::with_capacity(trimmed.len() + 4);
    for ch in trimmed.chars() {
        match ch {
            '^' => encoded.push_str("%5E"),
            '=' => encoded.push_str("%3D"),
            other => encoded.push(other),
        }
    }
    encoded
}

impl Display for Ticker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Ticker {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Ticker {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Ticker> for String {
    fn from(value: Ticker) -> Self {
        value.0
    }
}
