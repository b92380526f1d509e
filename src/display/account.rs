//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use crate::models::{Account, Money};

/// Format a list of accounts as a table
pub fn format_account_list(accounts: &[Account]) -> String {
    if accounts.is_empty() {
        return "No accounts found.\n".to_string();
    }

    let name_width = accounts
        .iter()
        .map(|a| a.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let kind_width = accounts
        .iter()
        .map(|a| a.kind.to_string().len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<kind_width$}  {:>14}  {:<8}  {}\n",
        "Name",
        "Type",
        "Balance",
        "Currency",
        "Status",
        name_width = name_width,
        kind_width = kind_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<kind_width$}  {:->14}  {:-<8}  {:-<6}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
        kind_width = kind_width,
    ));

    for account in accounts {
        let status = if account.hidden { "Hidden" } else { "" };
        output.push_str(&format!(
            "{:<name_width$}  {:<kind_width$}  {:>14}  {:<8}  {}\n",
            account.name,
            account.kind.to_string(),
            account.balance.format_with_symbol(account.currency.symbol()),
            account.currency.code(),
            status,
            name_width = name_width,
            kind_width = kind_width,
        ));
    }

    // Per-currency totals only make sense per currency; sum raw when all
    // accounts share one
    let single_currency = accounts
        .iter()
        .all(|a| a.currency == accounts[0].currency);
    if single_currency {
        let total: Money = accounts.iter().map(|a| a.balance).sum();
        output.push_str(&format!(
            "{:-<name_width$}  {:-<kind_width$}  {:->14}\n",
            "",
            "",
            "",
            name_width = name_width,
            kind_width = kind_width,
        ));
        output.push_str(&format!(
            "{:<name_width$}  {:<kind_width$}  {:>14}\n",
            "TOTAL",
            "",
            total.format_with_symbol(accounts[0].currency.symbol()),
            name_width = name_width,
            kind_width = kind_width,
        ));
    }

    output
}

/// Format a single account's details
pub fn format_account_details(account: &Account) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account: {}\n", account.name));
    output.push_str(&format!("  Type:        {}\n", account.kind));
    output.push_str(&format!("  ID:          {}\n", account.id));
    output.push_str(&format!(
        "  Balance:     {}\n",
        account.balance.format_with_symbol(account.currency.symbol())
    ));
    output.push_str(&format!("  Currency:    {}\n", account.currency));
    if let Some(institution) = &account.institution {
        output.push_str(&format!("  Institution: {}\n", institution));
    }
    if let Some(last_four) = &account.last_four {
        output.push_str(&format!("  Number:      ****{}\n", last_four));
    }
    output.push_str(&format!(
        "  Hidden:      {}\n",
        if account.hidden { "Yes" } else { "No" }
    ));
    output.push_str(&format!(
        "  Created:     {}\n",
        account.created_at.format("%Y-%m-%d")
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountKind, CurrencyCode};

    #[test]
    fn test_empty_list() {
        assert_eq!(format_account_list(&[]), "No accounts found.\n");
    }

    #[test]
    fn test_list_with_total() {
        let accounts = vec![
            Account::new("Checking", AccountKind::Checking, Money::from_cents(10000), CurrencyCode::USD),
            Account::new("Savings", AccountKind::Savings, Money::from_cents(20000), CurrencyCode::USD),
        ];

        let text = format_account_list(&accounts);
        assert!(text.contains("Checking"));
        assert!(text.contains("$200.00"));
        assert!(text.contains("TOTAL"));
        assert!(text.contains("$300.00"));
    }

    #[test]
    fn test_mixed_currencies_skip_total() {
        let accounts = vec![
            Account::new("US", AccountKind::Checking, Money::from_cents(10000), CurrencyCode::USD),
            Account::new("EU", AccountKind::Savings, Money::from_cents(20000), CurrencyCode::EUR),
        ];

        let text = format_account_list(&accounts);
        assert!(!text.contains("TOTAL"));
    }

    #[test]
    fn test_details() {
        let mut account = Account::new(
            "Chase Checking",
            AccountKind::Checking,
            Money::from_cents(10000),
            CurrencyCode::USD,
        );
        account.institution = Some("Chase".into());
        account.last_four = Some("4421".into());

        let text = format_account_details(&account);
        assert!(text.contains("Account: Chase Checking"));
        assert!(text.contains("Institution: Chase"));
        assert!(text.contains("****4421"));
    }
}
