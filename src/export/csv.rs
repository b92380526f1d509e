//! CSV export
//!
//! Exports accounts, transactions, and budgets as CSV.

use std::collections::HashMap;
use std::io::Write;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{AccountId, Category};
use crate::storage::Storage;

fn export_err(e: impl std::fmt::Display) -> FintrackError {
    FintrackError::Export(e.to_string())
}

/// Export all transactions to CSV
pub fn export_transactions_csv<W: Write>(storage: &Storage, writer: W) -> FintrackResult<()> {
    let account_names: HashMap<AccountId, String> = storage
        .accounts
        .get_all()?
        .into_iter()
        .map(|a| (a.id, a.name))
        .collect();

    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([
        "ID",
        "Date",
        "Account",
        "Description",
        "Category",
        "Type",
        "Amount",
        "Recurring",
        "Notes",
        "Tags",
    ])
    .map_err(export_err)?;

    for txn in storage.transactions.get_all()? {
        let account = account_names
            .get(&txn.account_id)
            .map(String::as_str)
            .unwrap_or("Unknown");

        csv.write_record([
            txn.id.as_uuid().to_string(),
            txn.date.to_string(),
            account.to_string(),
            txn.description.clone(),
            Category::display_name(txn.category.as_deref()).to_string(),
            txn.kind.to_string(),
            format!("{:.2}", txn.signed_amount().to_major()),
            txn.recurring.to_string(),
            txn.notes.clone(),
            txn.tags.join(";"),
        ])
        .map_err(export_err)?;
    }

    csv.flush().map_err(export_err)?;
    Ok(())
}

/// Export all accounts to CSV
pub fn export_accounts_csv<W: Write>(storage: &Storage, writer: W) -> FintrackResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([
        "ID",
        "Name",
        "Type",
        "Balance",
        "Currency",
        "Institution",
        "Hidden",
    ])
    .map_err(export_err)?;

    for account in storage.accounts.get_all()? {
        csv.write_record([
            account.id.as_uuid().to_string(),
            account.name.clone(),
            account.kind.to_string(),
            format!("{:.2}", account.balance.to_major()),
            account.currency.code().to_string(),
            account.institution.clone().unwrap_or_default(),
            account.hidden.to_string(),
        ])
        .map_err(export_err)?;
    }

    csv.flush().map_err(export_err)?;
    Ok(())
}

/// Export all budgets to CSV
pub fn export_budgets_csv<W: Write>(storage: &Storage, writer: W) -> FintrackResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([
        "ID",
        "Name",
        "Category",
        "Period",
        "Target",
        "Spent",
        "Start",
        "End",
    ])
    .map_err(export_err)?;

    for budget in storage.budgets.get_all()? {
        csv.write_record([
            budget.id.as_uuid().to_string(),
            budget.name.clone(),
            budget.category.clone(),
            budget.period.to_string(),
            format!("{:.2}", budget.amount.to_major()),
            format!("{:.2}", budget.spent.to_major()),
            budget.start_date.to_string(),
            budget.end_date.map(|d| d.to_string()).unwrap_or_default(),
        ])
        .map_err(export_err)?;
    }

    csv.flush().map_err(export_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FintrackPaths;
    use crate::models::{
        Account, AccountKind, Budget, BudgetPeriod, CurrencyCode, Money, Transaction,
        TransactionKind,
    };
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_export_transactions() {
        let (_temp_dir, storage) = create_test_storage();

        let account = Account::new("Checking", AccountKind::Checking, Money::zero(), CurrencyCode::USD);
        let account_id = account.id;
        storage.accounts.upsert(account).unwrap();

        let mut txn = Transaction::new(
            account_id,
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            Money::from_cents(4599),
            "Grocery Store",
            TransactionKind::Expense,
        );
        txn.set_category("food");
        storage.transactions.upsert(txn).unwrap();

        let mut buffer = Vec::new();
        export_transactions_csv(&storage, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("ID,Date,Account,Description"));
        assert!(text.contains("Grocery Store"));
        assert!(text.contains("Food & Dining"));
        assert!(text.contains("-45.99"));
    }

    #[test]
    fn test_export_accounts_quotes_commas() {
        let (_temp_dir, storage) = create_test_storage();

        let mut account = Account::new(
            "Checking, main",
            AccountKind::Checking,
            Money::from_cents(100000),
            CurrencyCode::USD,
        );
        account.institution = Some("First National".into());
        storage.accounts.upsert(account).unwrap();

        let mut buffer = Vec::new();
        export_accounts_csv(&storage, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("\"Checking, main\""));
        assert!(text.contains("1000.00"));
    }

    #[test]
    fn test_export_budgets() {
        let (_temp_dir, storage) = create_test_storage();

        let budget = Budget::new(
            "Groceries",
            Money::from_cents(50000),
            "food",
            BudgetPeriod::Monthly,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        );
        storage.budgets.upsert(budget).unwrap();

        let mut buffer = Vec::new();
        export_budgets_csv(&storage, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("Groceries,food,Monthly,500.00,0.00,2025-01-01,"));
    }
}
