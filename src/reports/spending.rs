//! Spending report
//!
//! Expense breakdown by category for a period, with a terminal bar chart
//! and CSV export.

use chrono::{Local, NaiveDate};
use std::io::Write;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Category, Money};
use crate::services::{CategoryTotal, Period, SummaryService};
use crate::storage::Storage;

/// Width of the terminal bar chart, in characters
const BAR_WIDTH: usize = 30;

/// Spending breakdown for a period
#[derive(Debug, Clone)]
pub struct SpendingReport {
    /// Period the report covers
    pub period: Period,
    /// Earliest date included (None when the period is All)
    pub since: Option<NaiveDate>,
    /// Per-category totals, largest first
    pub categories: Vec<CategoryTotal>,
    /// Total spending across all categories (positive magnitude)
    pub total_spending: Money,
    /// Total income in the period
    pub total_income: Money,
}

impl SpendingReport {
    /// Generate a spending report for a period
    pub fn generate(storage: &Storage, period: Period) -> FintrackResult<Self> {
        Self::generate_as_of(storage, period, Local::now().date_naive())
    }

    /// `generate` with an explicit "today" anchor
    pub fn generate_as_of(
        storage: &Storage,
        period: Period,
        today: NaiveDate,
    ) -> FintrackResult<Self> {
        let summary = SummaryService::new(storage);
        let categories = summary.expenses_by_category_as_of(period, today)?;
        let total_spending = categories.iter().map(|c| c.total).sum();
        let total_income = summary.total_income_as_of(period, today)?;

        Ok(Self {
            period,
            since: period.since(today),
            categories,
            total_spending,
            total_income,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        match self.since {
            Some(since) => output.push_str(&format!("Spending since {}\n", since)),
            None => output.push_str("Spending (all time)\n"),
        }
        output.push_str(&"=".repeat(64));
        output.push('\n');
        output.push_str(&format!("Total Spending: {}\n", self.total_spending));
        output.push_str(&format!("Total Income:   {}\n\n", self.total_income));

        if self.categories.is_empty() {
            output.push_str("No spending recorded in this period.\n");
            return output;
        }

        for entry in &self.categories {
            let filled = (entry.percent / 100.0 * BAR_WIDTH as f64).round() as usize;
            let bar: String = "█".repeat(filled.min(BAR_WIDTH));
            output.push_str(&format!(
                "{:<16} {:>12}  {:>5.1}%  {}\n",
                Category::display_name(Some(&entry.slug)),
                entry.total.to_string(),
                entry.percent,
                bar
            ));
        }

        output
    }

    /// Export the report as CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> FintrackResult<()> {
        let mut csv = csv::Writer::from_writer(writer);

        csv.write_record(["Category", "Amount", "Transactions", "Percent"])
            .map_err(|e| FintrackError::Export(e.to_string()))?;

        for entry in &self.categories {
            csv.write_record([
                Category::display_name(Some(&entry.slug)).to_string(),
                format!("{:.2}", entry.total.to_major()),
                entry.count.to_string(),
                format!("{:.2}", entry.percent),
            ])
            .map_err(|e| FintrackError::Export(e.to_string()))?;
        }

        csv.write_record([
            "TOTAL".to_string(),
            format!("{:.2}", self.total_spending.to_major()),
            self.categories.iter().map(|c| c.count).sum::<usize>().to_string(),
            "100.00".to_string(),
        ])
        .map_err(|e| FintrackError::Export(e.to_string()))?;

        csv.flush().map_err(|e| FintrackError::Export(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FintrackPaths;
    use crate::models::{AccountId, Transaction, TransactionKind};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn seed(storage: &Storage) {
        let account_id = AccountId::new();
        let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();

        let mut groceries = Transaction::new(
            account_id,
            date,
            Money::from_cents(8000),
            "groceries",
            TransactionKind::Expense,
        );
        groceries.set_category("food");

        let mut rent = Transaction::new(
            account_id,
            date,
            Money::from_cents(2000),
            "rent",
            TransactionKind::Expense,
        );
        rent.set_category("housing");

        let salary = Transaction::new(
            account_id,
            date,
            Money::from_cents(500000),
            "salary",
            TransactionKind::Income,
        );

        storage.transactions.upsert(groceries).unwrap();
        storage.transactions.upsert(rent).unwrap();
        storage.transactions.upsert(salary).unwrap();
    }

    #[test]
    fn test_generate() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage);

        let report = SpendingReport::generate_as_of(
            &storage,
            Period::Month,
            NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
        )
        .unwrap();

        assert_eq!(report.total_spending.cents(), 10000);
        assert_eq!(report.total_income.cents(), 500000);
        assert_eq!(report.categories.len(), 2);
        assert_eq!(report.categories[0].slug, "food");
        assert_eq!(report.categories[0].percent, 80.0);
    }

    #[test]
    fn test_format_terminal() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage);

        let report = SpendingReport::generate_as_of(
            &storage,
            Period::Month,
            NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
        )
        .unwrap();

        let text = report.format_terminal();
        assert!(text.contains("Food & Dining"));
        assert!(text.contains("Housing"));
        assert!(text.contains("$100.00"));
        assert!(text.contains("█"));
    }

    #[test]
    fn test_format_empty() {
        let (_temp_dir, storage) = create_test_storage();
        let report = SpendingReport::generate_as_of(
            &storage,
            Period::Month,
            NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
        )
        .unwrap();

        assert!(report.format_terminal().contains("No spending recorded"));
    }

    #[test]
    fn test_export_csv() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage);

        let report = SpendingReport::generate_as_of(
            &storage,
            Period::Month,
            NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
        )
        .unwrap();

        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("Category,Amount,Transactions,Percent"));
        assert!(text.contains("Food & Dining,80.00,1,80.00"));
        assert!(text.contains("TOTAL,100.00,2,100.00"));
    }
}
