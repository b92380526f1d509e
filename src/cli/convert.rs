//! Currency converter CLI command

use crate::error::{FintrackError, FintrackResult};
use crate::models::{CurrencyCode, Money};
use crate::services::CurrencyService;

/// Handle `fintrack convert <AMOUNT> <FROM> <TO>`
pub fn handle_convert_command(amount: &str, from: &str, to: &str) -> FintrackResult<()> {
    let amount = Money::parse(amount).map_err(|e| FintrackError::Validation(e.to_string()))?;
    let from = parse_currency(from)?;
    let to = parse_currency(to)?;

    let service = CurrencyService::new();
    let converted = service.convert(amount, from, to)?;

    println!(
        "{} {} = {} {}",
        service.format(amount, from),
        from,
        service.format(converted, to),
        to
    );

    let rates = service.rates()?;
    println!(
        "  rate: 1 {} = {:.4} {}",
        from,
        rates.rate(to) / rates.rate(from),
        to
    );

    Ok(())
}

fn parse_currency(s: &str) -> FintrackResult<CurrencyCode> {
    CurrencyCode::parse(s).ok_or_else(|| {
        FintrackError::Validation(format!(
            "Unknown currency '{}'. Supported: USD, EUR, GBP, JPY, CAD, AUD",
            s
        ))
    })
}
