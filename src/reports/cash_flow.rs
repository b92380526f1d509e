//! Cash flow report
//!
//! Income vs. expenses per calendar month over a trailing window.

use chrono::{Datelike, Local, NaiveDate};

use crate::error::FintrackResult;
use crate::models::{Money, TransactionKind};
use crate::storage::Storage;

/// Income and expenses for one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthFlow {
    pub year: i32,
    pub month: u32,
    /// Income total (positive magnitude)
    pub income: Money,
    /// Expense total (positive magnitude)
    pub expenses: Money,
}

impl MonthFlow {
    /// Income minus expenses
    pub fn net(&self) -> Money {
        self.income - self.expenses
    }

    fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Monthly income vs. expenses over a trailing window
#[derive(Debug, Clone)]
pub struct CashFlowReport {
    /// One entry per month, oldest first
    pub months: Vec<MonthFlow>,
}

impl CashFlowReport {
    /// Generate a report covering the last `month_count` months
    pub fn generate(storage: &Storage, month_count: u32) -> FintrackResult<Self> {
        Self::generate_as_of(storage, month_count, Local::now().date_naive())
    }

    /// `generate` with an explicit "today" anchor
    pub fn generate_as_of(
        storage: &Storage,
        month_count: u32,
        today: NaiveDate,
    ) -> FintrackResult<Self> {
        // Walk backwards from the current month to build the window
        let mut window: Vec<(i32, u32)> = Vec::with_capacity(month_count as usize);
        let (mut year, mut month) = (today.year(), today.month());
        for _ in 0..month_count {
            window.push((year, month));
            if month == 1 {
                year -= 1;
                month = 12;
            } else {
                month -= 1;
            }
        }
        window.reverse();

        let transactions = storage.transactions.get_all()?;
        let months = window
            .into_iter()
            .map(|(year, month)| {
                let mut income = Money::zero();
                let mut expenses = Money::zero();
                for txn in transactions
                    .iter()
                    .filter(|t| t.date.year() == year && t.date.month() == month)
                {
                    match txn.kind {
                        TransactionKind::Income => income += txn.amount,
                        TransactionKind::Expense => expenses += txn.amount,
                        TransactionKind::Transfer => {}
                    }
                }
                MonthFlow {
                    year,
                    month,
                    income,
                    expenses,
                }
            })
            .collect();

        Ok(Self { months })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Cash Flow\n");
        output.push_str(&"=".repeat(56));
        output.push('\n');
        output.push_str(&format!(
            "{:<8} {:>14} {:>14} {:>14}\n",
            "Month", "Income", "Expenses", "Net"
        ));
        output.push_str(&"-".repeat(56));
        output.push('\n');

        for flow in &self.months {
            output.push_str(&format!(
                "{:<8} {:>14} {:>14} {:>14}\n",
                flow.label(),
                flow.income.to_string(),
                flow.expenses.to_string(),
                flow.net().to_string()
            ));
        }

        let total_income: Money = self.months.iter().map(|m| m.income).sum();
        let total_expenses: Money = self.months.iter().map(|m| m.expenses).sum();
        output.push_str(&"-".repeat(56));
        output.push('\n');
        output.push_str(&format!(
            "{:<8} {:>14} {:>14} {:>14}\n",
            "TOTAL",
            total_income.to_string(),
            total_expenses.to_string(),
            (total_income - total_expenses).to_string()
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FintrackPaths;
    use crate::models::{AccountId, Transaction};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn add(storage: &Storage, date: NaiveDate, cents: i64, kind: TransactionKind) {
        let txn = Transaction::new(AccountId::new(), date, Money::from_cents(cents), "t", kind);
        storage.transactions.upsert(txn).unwrap();
    }

    #[test]
    fn test_generate_groups_by_month() {
        let (_temp_dir, storage) = create_test_storage();

        add(&storage, NaiveDate::from_ymd_opt(2025, 5, 10).unwrap(), 300000, TransactionKind::Income);
        add(&storage, NaiveDate::from_ymd_opt(2025, 5, 12).unwrap(), 120000, TransactionKind::Expense);
        add(&storage, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(), 310000, TransactionKind::Income);
        add(&storage, NaiveDate::from_ymd_opt(2025, 6, 5).unwrap(), 90000, TransactionKind::Expense);
        // Transfers do not affect cash flow
        add(&storage, NaiveDate::from_ymd_opt(2025, 6, 6).unwrap(), 50000, TransactionKind::Transfer);

        let report = CashFlowReport::generate_as_of(
            &storage,
            3,
            NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
        )
        .unwrap();

        assert_eq!(report.months.len(), 3);
        assert_eq!(report.months[0].month, 4);
        assert_eq!(report.months[1].month, 5);
        assert_eq!(report.months[2].month, 6);

        assert_eq!(report.months[1].income.cents(), 300000);
        assert_eq!(report.months[1].expenses.cents(), 120000);
        assert_eq!(report.months[1].net().cents(), 180000);
        assert_eq!(report.months[2].net().cents(), 220000);
        // April is empty
        assert_eq!(report.months[0].income, Money::zero());
    }

    #[test]
    fn test_window_crosses_year_boundary() {
        let (_temp_dir, storage) = create_test_storage();

        let report = CashFlowReport::generate_as_of(
            &storage,
            4,
            NaiveDate::from_ymd_opt(2025, 2, 15).unwrap(),
        )
        .unwrap();

        let labels: Vec<(i32, u32)> = report.months.iter().map(|m| (m.year, m.month)).collect();
        assert_eq!(labels, vec![(2024, 11), (2024, 12), (2025, 1), (2025, 2)]);
    }

    #[test]
    fn test_format_terminal() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(), 310000, TransactionKind::Income);

        let report = CashFlowReport::generate_as_of(
            &storage,
            2,
            NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
        )
        .unwrap();

        let text = report.format_terminal();
        assert!(text.contains("2025-06"));
        assert!(text.contains("$3,100.00"));
        assert!(text.contains("TOTAL"));
    }
}
