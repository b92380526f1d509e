//! Budget model
//!
//! A spending ceiling tracked against a category over a recurring period.
//! `spent` accumulates against the target `amount`; the display percentage
//! is clamped to 0..=100 while the raw ratio stays available for alerts.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;

/// Recurrence period for a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl BudgetPeriod {
    /// Parse a period from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "weekly" | "week" => Some(Self::Weekly),
            "monthly" | "month" => Some(Self::Monthly),
            "yearly" | "year" => Some(Self::Yearly),
            _ => None,
        }
    }

    /// Start of the period window containing `today`: the most recent
    /// Sunday, the 1st of the month, or January 1st
    pub fn window_start(&self, today: NaiveDate) -> NaiveDate {
        match self {
            Self::Weekly => {
                let days_from_sunday = today.weekday().num_days_from_sunday() as i64;
                today - Duration::days(days_from_sunday)
            }
            Self::Monthly => NaiveDate::from_ymd_opt(today.year(), today.month(), 1)
                .unwrap_or(today),
            Self::Yearly => NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today),
        }
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekly => write!(f, "Weekly"),
            Self::Monthly => write!(f, "Monthly"),
            Self::Yearly => write!(f, "Yearly"),
        }
    }
}

/// A spending ceiling for a category and period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// Budget name (e.g., "Groceries")
    pub name: String,

    /// Target amount for the period
    pub amount: Money,

    /// Amount spent so far in the current period
    pub spent: Money,

    /// Category slug this budget tracks
    pub category: String,

    /// Recurrence period
    pub period: BudgetPeriod,

    /// Date the budget takes effect
    pub start_date: NaiveDate,

    /// Optional end date (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    /// Display color (hex)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// When the budget was created
    pub created_at: DateTime<Utc>,

    /// When the budget was last modified
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// Create a new budget
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        period: BudgetPeriod,
        start_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: BudgetId::new(),
            name: name.into(),
            amount,
            spent: Money::zero(),
            category: category.into(),
            period,
            start_date,
            end_date: None,
            color: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Raw spent/target ratio as a percentage (can exceed 100)
    pub fn percent_spent_raw(&self) -> f64 {
        if self.amount.cents() <= 0 {
            return 0.0;
        }
        self.spent.cents() as f64 / self.amount.cents() as f64 * 100.0
    }

    /// Percentage spent clamped to 0..=100 for display
    pub fn percent_spent(&self) -> f64 {
        self.percent_spent_raw().clamp(0.0, 100.0)
    }

    /// Amount left before hitting the target (never negative)
    pub fn remaining(&self) -> Money {
        let remaining = self.amount - self.spent;
        if remaining.is_negative() {
            Money::zero()
        } else {
            remaining
        }
    }

    /// Whether spending has passed the target
    pub fn is_overspent(&self) -> bool {
        self.spent > self.amount
    }

    /// Add to the spent amount
    pub fn record_spend(&mut self, amount: Money) {
        self.spent += amount;
        self.updated_at = Utc::now();
    }

    /// Replace the spent amount (used when re-deriving from transactions)
    pub fn set_spent(&mut self, spent: Money) {
        self.spent = spent;
        self.updated_at = Utc::now();
    }

    /// The date window spending counts against, as of `today`: the current
    /// period window clipped to the budget's start/end dates
    pub fn active_window(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let start = self.period.window_start(today).max(self.start_date);
        let end = match self.end_date {
            Some(end) => today.min(end),
            None => today,
        };
        (start, end)
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.name.trim().is_empty() {
            return Err(BudgetValidationError::EmptyName);
        }

        if self.amount.cents() <= 0 {
            return Err(BudgetValidationError::NonPositiveTarget);
        }

        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err(BudgetValidationError::EndBeforeStart);
            }
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {} ({:.0}%)",
            self.name,
            self.spent,
            self.amount,
            self.percent_spent()
        )
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    EmptyName,
    NonPositiveTarget,
    EndBeforeStart,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Budget name cannot be empty"),
            Self::NonPositiveTarget => write!(f, "Budget target must be greater than zero"),
            Self::EndBeforeStart => write!(f, "Budget end date cannot be before its start date"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_budget() -> Budget {
        Budget::new(
            "Groceries",
            Money::from_cents(50000),
            "food",
            BudgetPeriod::Monthly,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_new_budget() {
        let budget = sample_budget();
        assert_eq!(budget.name, "Groceries");
        assert_eq!(budget.spent, Money::zero());
        assert_eq!(budget.period, BudgetPeriod::Monthly);
    }

    #[test]
    fn test_percent_spent_clamps_for_display() {
        let mut budget = sample_budget();

        budget.set_spent(Money::from_cents(25000));
        assert_eq!(budget.percent_spent(), 50.0);

        // Overspent: raw keeps the real ratio, display clamps
        budget.set_spent(Money::from_cents(75000));
        assert_eq!(budget.percent_spent_raw(), 150.0);
        assert_eq!(budget.percent_spent(), 100.0);
        assert!(budget.is_overspent());

        // Refunds can push spent negative; display clamps at zero
        budget.set_spent(Money::from_cents(-1000));
        assert_eq!(budget.percent_spent(), 0.0);
    }

    #[test]
    fn test_remaining_never_negative() {
        let mut budget = sample_budget();
        budget.set_spent(Money::from_cents(20000));
        assert_eq!(budget.remaining().cents(), 30000);

        budget.set_spent(Money::from_cents(60000));
        assert_eq!(budget.remaining(), Money::zero());
    }

    #[test]
    fn test_record_spend_accumulates() {
        let mut budget = sample_budget();
        budget.record_spend(Money::from_cents(1000));
        budget.record_spend(Money::from_cents(2500));
        assert_eq!(budget.spent.cents(), 3500);
    }

    #[test]
    fn test_window_start() {
        // 2025-03-14 is a Friday; the week window opens on Sunday the 9th
        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert_eq!(
            BudgetPeriod::Weekly.window_start(today),
            NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
        );
        assert_eq!(
            BudgetPeriod::Monthly.window_start(today),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
        assert_eq!(
            BudgetPeriod::Yearly.window_start(today),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_active_window_clips_to_budget_dates() {
        let mut budget = sample_budget();
        budget.start_date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        budget.end_date = Some(NaiveDate::from_ymd_opt(2025, 3, 12).unwrap());

        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let (start, end) = budget.active_window(today);
        // Month opens on the 1st but the budget starts on the 10th
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
        // Ended on the 12th even though today is the 14th
        assert_eq!(end, NaiveDate::from_ymd_opt(2025, 3, 12).unwrap());
    }

    #[test]
    fn test_validation() {
        let mut budget = sample_budget();
        assert!(budget.validate().is_ok());

        budget.name = String::new();
        assert_eq!(budget.validate(), Err(BudgetValidationError::EmptyName));

        budget.name = "Groceries".to_string();
        budget.amount = Money::zero();
        assert_eq!(budget.validate(), Err(BudgetValidationError::NonPositiveTarget));

        budget.amount = Money::from_cents(50000);
        budget.end_date = Some(budget.start_date - Duration::days(1));
        assert_eq!(budget.validate(), Err(BudgetValidationError::EndBeforeStart));
    }

    #[test]
    fn test_period_parsing() {
        assert_eq!(BudgetPeriod::parse("weekly"), Some(BudgetPeriod::Weekly));
        assert_eq!(BudgetPeriod::parse("Month"), Some(BudgetPeriod::Monthly));
        assert_eq!(BudgetPeriod::parse("daily"), None);
    }

    #[test]
    fn test_serialization() {
        let budget = sample_budget();
        let json = serde_json::to_string(&budget).unwrap();
        assert!(json.contains("\"period\":\"monthly\""));
        let deserialized: Budget = serde_json::from_str(&json).unwrap();
        assert_eq!(budget.id, deserialized.id);
        assert_eq!(budget.category, deserialized.category);
    }
}
