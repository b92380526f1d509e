//! Net worth report
//!
//! Per-account balances converted into a single display currency.

use crate::error::FintrackResult;
use crate::models::{Account, CurrencyCode, Money};
use crate::services::{CurrencyService, RateSource};
use crate::storage::Storage;

/// One account's contribution to net worth
#[derive(Debug, Clone)]
pub struct AccountWorth {
    pub account: Account,
    /// Balance converted into the display currency
    pub converted: Money,
}

/// Net worth across all visible accounts
#[derive(Debug, Clone)]
pub struct NetWorthReport {
    /// Per-account entries, sorted by name
    pub entries: Vec<AccountWorth>,
    /// Sum of converted balances
    pub total: Money,
    /// Currency the totals are displayed in
    pub display_currency: CurrencyCode,
}

impl NetWorthReport {
    /// Generate a net worth report in the display currency
    pub fn generate<S: RateSource>(
        storage: &Storage,
        currency: &CurrencyService<S>,
        display: CurrencyCode,
    ) -> FintrackResult<Self> {
        let mut entries = Vec::new();
        let mut total = Money::zero();

        for account in storage.accounts.get_visible()? {
            let converted = currency.convert(account.balance, account.currency, display)?;
            total += converted;
            entries.push(AccountWorth { account, converted });
        }

        Ok(Self {
            entries,
            total,
            display_currency: display,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        let symbol = self.display_currency.symbol();

        output.push_str(&format!("Net Worth ({})\n", self.display_currency));
        output.push_str(&"=".repeat(64));
        output.push('\n');

        if self.entries.is_empty() {
            output.push_str("No accounts found.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<24} {:<12} {:>12} {:>12}\n",
            "Account", "Type", "Balance", "Converted"
        ));
        output.push_str(&"-".repeat(64));
        output.push('\n');

        for entry in &self.entries {
            output.push_str(&format!(
                "{:<24} {:<12} {:>12} {:>12}\n",
                entry.account.name,
                entry.account.kind.to_string(),
                entry
                    .account
                    .balance
                    .format_with_symbol(entry.account.currency.symbol()),
                entry.converted.format_with_symbol(symbol)
            ));
        }

        output.push_str(&"-".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<24} {:<12} {:>12} {:>12}\n",
            "TOTAL",
            "",
            "",
            self.total.format_with_symbol(symbol)
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FintrackPaths;
    use crate::models::AccountKind;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_generate_converts_and_totals() {
        let (_temp_dir, storage) = create_test_storage();
        let currency = CurrencyService::new();

        storage
            .accounts
            .upsert(Account::new(
                "US Checking",
                AccountKind::Checking,
                Money::from_cents(10000),
                CurrencyCode::USD,
            ))
            .unwrap();
        storage
            .accounts
            .upsert(Account::new(
                "EU Savings",
                AccountKind::Savings,
                Money::from_cents(8500),
                CurrencyCode::EUR,
            ))
            .unwrap();

        let report = NetWorthReport::generate(&storage, &currency, CurrencyCode::USD).unwrap();

        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.total.cents(), 20000);
    }

    #[test]
    fn test_hidden_accounts_excluded() {
        let (_temp_dir, storage) = create_test_storage();
        let currency = CurrencyService::new();

        let mut hidden = Account::new(
            "Hidden",
            AccountKind::Cash,
            Money::from_cents(5000),
            CurrencyCode::USD,
        );
        hidden.hide();
        storage.accounts.upsert(hidden).unwrap();

        let report = NetWorthReport::generate(&storage, &currency, CurrencyCode::USD).unwrap();
        assert!(report.entries.is_empty());
        assert_eq!(report.total, Money::zero());
    }

    #[test]
    fn test_format_terminal() {
        let (_temp_dir, storage) = create_test_storage();
        let currency = CurrencyService::new();

        storage
            .accounts
            .upsert(Account::new(
                "US Checking",
                AccountKind::Checking,
                Money::from_cents(10000),
                CurrencyCode::USD,
            ))
            .unwrap();

        let report = NetWorthReport::generate(&storage, &currency, CurrencyCode::EUR).unwrap();
        let text = report.format_terminal();

        assert!(text.contains("Net Worth (EUR)"));
        assert!(text.contains("US Checking"));
        assert!(text.contains("€85.00"));
    }
}
