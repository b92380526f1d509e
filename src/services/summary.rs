//! Derived aggregates
//!
//! The dashboard's headline numbers: total balance across accounts, income
//! and expense totals for a period, and the expenses-by-category breakdown.
//! Everything is a linear re-derivation over the transaction log.

use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::error::FintrackResult;
use crate::models::{CurrencyCode, Money, Transaction, TransactionKind};
use crate::storage::Storage;

use super::currency::{CurrencyService, RateSource};

/// Reporting period, anchored to the current calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    Day,
    Week,
    #[default]
    Month,
    Year,
    All,
}

impl Period {
    /// Parse a period from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "day" | "today" => Some(Self::Day),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            "year" => Some(Self::Year),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    /// The earliest date included in this period as of `today`:
    /// today itself, the most recent Sunday, the 1st, or January 1st
    pub fn since(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Day => Some(today),
            Self::Week => {
                let days_from_sunday = today.weekday().num_days_from_sunday() as i64;
                Some(today - Duration::days(days_from_sunday))
            }
            Self::Month => NaiveDate::from_ymd_opt(today.year(), today.month(), 1),
            Self::Year => NaiveDate::from_ymd_opt(today.year(), 1, 1),
            Self::All => None,
        }
    }
}

/// One slice of the expenses-by-category breakdown
#[derive(Debug, Clone)]
pub struct CategoryTotal {
    /// Category slug ("other" for uncategorized spending)
    pub slug: String,
    /// Total spent (positive magnitude)
    pub total: Money,
    /// Number of transactions
    pub count: usize,
    /// Share of total spending, 0..=100
    pub percent: f64,
}

/// Service for the dashboard's derived aggregates
pub struct SummaryService<'a> {
    storage: &'a Storage,
}

impl<'a> SummaryService<'a> {
    /// Create a new summary service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Sum of visible account balances, each converted into `display`
    pub fn total_balance<S: RateSource>(
        &self,
        currency: &CurrencyService<S>,
        display: CurrencyCode,
    ) -> FintrackResult<Money> {
        let mut total = Money::zero();
        for account in self.storage.accounts.get_visible()? {
            total += currency.convert(account.balance, account.currency, display)?;
        }
        Ok(total)
    }

    /// Total income for a period (positive magnitude)
    pub fn total_income(&self, period: Period) -> FintrackResult<Money> {
        self.total_income_as_of(period, Local::now().date_naive())
    }

    /// `total_income` with an explicit "today" anchor
    pub fn total_income_as_of(&self, period: Period, today: NaiveDate) -> FintrackResult<Money> {
        Ok(self
            .in_period(period, today)?
            .iter()
            .filter(|t| t.kind == TransactionKind::Income)
            .map(|t| t.amount)
            .sum())
    }

    /// Total expenses for a period (positive magnitude)
    pub fn total_expenses(&self, period: Period) -> FintrackResult<Money> {
        self.total_expenses_as_of(period, Local::now().date_naive())
    }

    /// `total_expenses` with an explicit "today" anchor
    pub fn total_expenses_as_of(&self, period: Period, today: NaiveDate) -> FintrackResult<Money> {
        Ok(self
            .in_period(period, today)?
            .iter()
            .filter(|t| t.kind == TransactionKind::Expense)
            .map(|t| t.amount)
            .sum())
    }

    /// Expense totals grouped by category for a period, largest first.
    /// Uncategorized spending lands in "other".
    pub fn expenses_by_category(&self, period: Period) -> FintrackResult<Vec<CategoryTotal>> {
        self.expenses_by_category_as_of(period, Local::now().date_naive())
    }

    /// `expenses_by_category` with an explicit "today" anchor
    pub fn expenses_by_category_as_of(
        &self,
        period: Period,
        today: NaiveDate,
    ) -> FintrackResult<Vec<CategoryTotal>> {
        let mut totals: Vec<CategoryTotal> = Vec::new();
        let mut grand_total = Money::zero();

        for txn in self
            .in_period(period, today)?
            .iter()
            .filter(|t| t.kind == TransactionKind::Expense)
        {
            let slug = txn.category.as_deref().unwrap_or("other");
            grand_total += txn.amount;

            match totals.iter_mut().find(|c| c.slug == slug) {
                Some(entry) => {
                    entry.total += txn.amount;
                    entry.count += 1;
                }
                None => totals.push(CategoryTotal {
                    slug: slug.to_string(),
                    total: txn.amount,
                    count: 1,
                    percent: 0.0,
                }),
            }
        }

        for entry in &mut totals {
            entry.percent = if grand_total.is_zero() {
                0.0
            } else {
                entry.total.cents() as f64 / grand_total.cents() as f64 * 100.0
            };
        }

        totals.sort_by(|a, b| b.total.cmp(&a.total));
        Ok(totals)
    }

    /// The most recent transactions, newest first
    pub fn recent_transactions(&self, limit: usize) -> FintrackResult<Vec<Transaction>> {
        let mut transactions = self.storage.transactions.get_all()?;
        transactions.truncate(limit);
        Ok(transactions)
    }

    fn in_period(&self, period: Period, today: NaiveDate) -> FintrackResult<Vec<Transaction>> {
        let transactions = self.storage.transactions.get_all()?;
        Ok(match period.since(today) {
            Some(since) => transactions.into_iter().filter(|t| t.date >= since).collect(),
            None => transactions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FintrackPaths;
    use crate::models::{Account, AccountId, AccountKind};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn txn(date: NaiveDate, cents: i64, kind: TransactionKind, category: Option<&str>) -> Transaction {
        let mut t = Transaction::new(AccountId::new(), date, Money::from_cents(cents), "t", kind);
        if let Some(slug) = category {
            t.set_category(slug);
        }
        t
    }

    #[test]
    fn test_period_since_anchors() {
        // Friday 2025-03-14
        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert_eq!(Period::Day.since(today), Some(today));
        assert_eq!(
            Period::Week.since(today),
            Some(NaiveDate::from_ymd_opt(2025, 3, 9).unwrap())
        );
        assert_eq!(
            Period::Month.since(today),
            Some(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
        );
        assert_eq!(
            Period::Year.since(today),
            Some(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
        );
        assert_eq!(Period::All.since(today), None);
    }

    #[test]
    fn test_income_and_expense_totals_respect_period() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SummaryService::new(&storage);
        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();

        let in_month = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        let last_month = NaiveDate::from_ymd_opt(2025, 2, 20).unwrap();

        storage.transactions.upsert(txn(in_month, 10000, TransactionKind::Income, None)).unwrap();
        storage.transactions.upsert(txn(last_month, 5000, TransactionKind::Income, None)).unwrap();
        storage.transactions.upsert(txn(in_month, 3000, TransactionKind::Expense, None)).unwrap();
        // Transfers count as neither income nor expense
        storage.transactions.upsert(txn(in_month, 7000, TransactionKind::Transfer, None)).unwrap();

        assert_eq!(
            service.total_income_as_of(Period::Month, today).unwrap().cents(),
            10000
        );
        assert_eq!(
            service.total_income_as_of(Period::All, today).unwrap().cents(),
            15000
        );
        assert_eq!(
            service.total_expenses_as_of(Period::Month, today).unwrap().cents(),
            3000
        );
    }

    #[test]
    fn test_expenses_by_category_breakdown() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SummaryService::new(&storage);
        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

        storage.transactions.upsert(txn(date, 6000, TransactionKind::Expense, Some("food"))).unwrap();
        storage.transactions.upsert(txn(date, 2000, TransactionKind::Expense, Some("food"))).unwrap();
        storage.transactions.upsert(txn(date, 1000, TransactionKind::Expense, Some("housing"))).unwrap();
        storage.transactions.upsert(txn(date, 1000, TransactionKind::Expense, None)).unwrap();

        let breakdown = service
            .expenses_by_category_as_of(Period::Month, today)
            .unwrap();

        assert_eq!(breakdown.len(), 3);
        assert_eq!(breakdown[0].slug, "food");
        assert_eq!(breakdown[0].total.cents(), 8000);
        assert_eq!(breakdown[0].count, 2);
        assert_eq!(breakdown[0].percent, 80.0);
        // Uncategorized spending shows up as "other"
        assert!(breakdown.iter().any(|c| c.slug == "other"));
    }

    #[test]
    fn test_total_balance_converts_currencies() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SummaryService::new(&storage);
        let currency = CurrencyService::new();

        storage
            .accounts
            .upsert(Account::new(
                "US",
                AccountKind::Checking,
                Money::from_cents(10000),
                CurrencyCode::USD,
            ))
            .unwrap();
        storage
            .accounts
            .upsert(Account::new(
                "EU",
                AccountKind::Savings,
                Money::from_cents(8500),
                CurrencyCode::EUR,
            ))
            .unwrap();

        let mut hidden = Account::new(
            "Hidden",
            AccountKind::Cash,
            Money::from_cents(99999),
            CurrencyCode::USD,
        );
        hidden.hide();
        storage.accounts.upsert(hidden).unwrap();

        // $100 + (€85 -> $100) = $200; hidden account excluded
        let total = service
            .total_balance(&currency, CurrencyCode::USD)
            .unwrap();
        assert_eq!(total.cents(), 20000);
    }

    #[test]
    fn test_recent_transactions_limited() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SummaryService::new(&storage);

        for day in 1..=5 {
            let date = NaiveDate::from_ymd_opt(2025, 3, day).unwrap();
            storage
                .transactions
                .upsert(txn(date, 100, TransactionKind::Expense, None))
                .unwrap();
        }

        let recent = service.recent_transactions(3).unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].date.day(), 5);
    }
}
