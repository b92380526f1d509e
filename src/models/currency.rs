//! Supported currencies
//!
//! The set of currencies the application understands, with display names and
//! symbols. Exchange rates live in the currency service; this module is just
//! the enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO-style currency code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// All supported currencies, in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::USD,
            Self::EUR,
            Self::GBP,
            Self::JPY,
            Self::CAD,
            Self::AUD,
        ]
    }

    /// Parse a currency code from user input (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Some(Self::USD),
            "EUR" => Some(Self::EUR),
            "GBP" => Some(Self::GBP),
            "JPY" => Some(Self::JPY),
            "CAD" => Some(Self::CAD),
            "AUD" => Some(Self::AUD),
            _ => None,
        }
    }

    /// Three-letter code
    pub fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::JPY => "JPY",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::USD => "US Dollar",
            Self::EUR => "Euro",
            Self::GBP => "British Pound",
            Self::JPY => "Japanese Yen",
            Self::CAD => "Canadian Dollar",
            Self::AUD => "Australian Dollar",
        }
    }

    /// Display symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::JPY => "¥",
            Self::CAD => "C$",
            Self::AUD => "A$",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(CurrencyCode::parse("usd"), Some(CurrencyCode::USD));
        assert_eq!(CurrencyCode::parse(" EUR "), Some(CurrencyCode::EUR));
        assert_eq!(CurrencyCode::parse("BTC"), None);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(CurrencyCode::USD.symbol(), "$");
        assert_eq!(CurrencyCode::GBP.symbol(), "£");
        assert_eq!(CurrencyCode::CAD.symbol(), "C$");
    }

    #[test]
    fn test_all_is_complete() {
        assert_eq!(CurrencyCode::all().len(), 6);
    }

    #[test]
    fn test_display() {
        assert_eq!(CurrencyCode::JPY.to_string(), "JPY");
    }
}
