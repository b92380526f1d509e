//! Currency conversion service
//!
//! Conversion is a two-step multiplication through the USD base: divide the
//! source amount into USD, multiply into the target, round to the nearest
//! cent. The rate source is a seam; the bundled implementation returns a
//! fixed table.

use crate::error::{FintrackError, FintrackResult};
use crate::models::{CurrencyCode, Money};

/// Exchange rates relative to the USD base (units of currency per USD)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateTable {
    usd: f64,
    eur: f64,
    gbp: f64,
    jpy: f64,
    cad: f64,
    aud: f64,
}

impl RateTable {
    /// The rate for a currency (units per USD)
    pub fn rate(&self, currency: CurrencyCode) -> f64 {
        match currency {
            CurrencyCode::USD => self.usd,
            CurrencyCode::EUR => self.eur,
            CurrencyCode::GBP => self.gbp,
            CurrencyCode::JPY => self.jpy,
            CurrencyCode::CAD => self.cad,
            CurrencyCode::AUD => self.aud,
        }
    }
}

impl Default for RateTable {
    fn default() -> Self {
        // Stub rates; a real integration would refresh these daily
        Self {
            usd: 1.0,
            eur: 0.85,
            gbp: 0.73,
            jpy: 110.42,
            cad: 1.25,
            aud: 1.35,
        }
    }
}

/// Source of exchange rates
pub trait RateSource {
    /// Fetch the current rate table
    fn rates(&self) -> FintrackResult<RateTable>;
}

/// Rate source returning the built-in fixed table
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedRateSource;

impl RateSource for FixedRateSource {
    fn rates(&self) -> FintrackResult<RateTable> {
        Ok(RateTable::default())
    }
}

/// Service for currency conversion and formatting
pub struct CurrencyService<S: RateSource = FixedRateSource> {
    source: S,
}

impl CurrencyService<FixedRateSource> {
    /// Create a service over the fixed rate table
    pub fn new() -> Self {
        Self {
            source: FixedRateSource,
        }
    }
}

impl Default for CurrencyService<FixedRateSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RateSource> CurrencyService<S> {
    /// Create a service over a specific rate source
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// The current rate table
    pub fn rates(&self) -> FintrackResult<RateTable> {
        self.source.rates()
    }

    /// Convert an amount between currencies through the USD base
    pub fn convert(
        &self,
        amount: Money,
        from: CurrencyCode,
        to: CurrencyCode,
    ) -> FintrackResult<Money> {
        if from == to {
            return Ok(amount);
        }

        let rates = self.source.rates()?;
        let from_rate = rates.rate(from);
        if from_rate <= 0.0 {
            return Err(FintrackError::Currency(format!(
                "Invalid rate for {}: {}",
                from, from_rate
            )));
        }

        let in_usd = amount.to_major() / from_rate;
        Ok(Money::from_major(in_usd * rates.rate(to)))
    }

    /// Format an amount in a currency with its symbol
    pub fn format(&self, amount: Money, currency: CurrencyCode) -> String {
        amount.format_with_symbol(currency.symbol())
    }
}
