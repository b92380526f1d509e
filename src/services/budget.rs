//! Budget service
//!
//! CRUD for budgets plus spent-amount upkeep: spending accumulates live as
//! transactions are added, and `refresh_spent` re-derives the figure from
//! the transaction log for the current period window.

use chrono::{Local, NaiveDate, Utc};

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Budget, BudgetId, BudgetPeriod, Category, Money};
use crate::storage::Storage;

/// Field updates for a budget; None leaves the field unchanged
#[derive(Debug, Clone, Default)]
pub struct BudgetUpdate {
    pub name: Option<String>,
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub period: Option<BudgetPeriod>,
    pub end_date: Option<NaiveDate>,
    pub color: Option<String>,
}

/// A budget with its display-ready progress numbers
#[derive(Debug, Clone)]
pub struct BudgetProgress {
    pub budget: Budget,
    /// Percent spent, clamped to 0..=100
    pub percent: f64,
    /// Amount left before the target (never negative)
    pub remaining: Money,
    /// Whether spending passed the target
    pub overspent: bool,
}

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new budget
    pub fn create(
        &self,
        name: &str,
        amount: Money,
        category: &str,
        period: BudgetPeriod,
        start_date: Option<NaiveDate>,
    ) -> FintrackResult<Budget> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FintrackError::Validation("Budget name cannot be empty".into()));
        }

        if !Category::is_valid_slug(category) {
            return Err(FintrackError::Validation(format!(
                "Unknown category '{}'",
                category
            )));
        }

        if self.storage.budgets.get_by_name(name)?.is_some() {
            return Err(FintrackError::Duplicate {
                entity_type: "Budget",
                identifier: name.to_string(),
            });
        }

        let start = start_date.unwrap_or_else(|| Local::now().date_naive());
        let budget = Budget::new(name, amount, category, period, start);
        budget
            .validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        self.storage.budgets.upsert(budget.clone())?;
        self.storage.budgets.save()?;

        Ok(budget)
    }

    /// Get a budget by ID
    pub fn get(&self, id: BudgetId) -> FintrackResult<Option<Budget>> {
        self.storage.budgets.get(id)
    }

    /// Find a budget by name or ID string
    pub fn find(&self, identifier: &str) -> FintrackResult<Option<Budget>> {
        if let Some(budget) = self.storage.budgets.get_by_name(identifier)? {
            return Ok(Some(budget));
        }

        if let Ok(id) = identifier.parse::<BudgetId>() {
            return self.storage.budgets.get(id);
        }

        Ok(None)
    }

    /// Find a budget by name or ID string, erroring when absent
    pub fn require(&self, identifier: &str) -> FintrackResult<Budget> {
        self.find(identifier)?
            .ok_or_else(|| FintrackError::budget_not_found(identifier))
    }

    /// List all budgets
    pub fn list(&self) -> FintrackResult<Vec<Budget>> {
        self.storage.budgets.get_all()
    }

    /// List all budgets with progress numbers
    pub fn list_with_progress(&self) -> FintrackResult<Vec<BudgetProgress>> {
        Ok(self.list()?.into_iter().map(Self::progress).collect())
    }

    /// Progress numbers for one budget
    pub fn progress(budget: Budget) -> BudgetProgress {
        BudgetProgress {
            percent: budget.percent_spent(),
            remaining: budget.remaining(),
            overspent: budget.is_overspent(),
            budget,
        }
    }

    /// Update a budget
    pub fn update(&self, id: BudgetId, update: BudgetUpdate) -> FintrackResult<Budget> {
        let mut budget = self
            .storage
            .budgets
            .get(id)?
            .ok_or_else(|| FintrackError::budget_not_found(id.to_string()))?;

        if let Some(name) = update.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(FintrackError::Validation("Budget name cannot be empty".into()));
            }
            if let Some(existing) = self.storage.budgets.get_by_name(&name)? {
                if existing.id != id {
                    return Err(FintrackError::Duplicate {
                        entity_type: "Budget",
                        identifier: name,
                    });
                }
            }
            budget.name = name;
        }
        if let Some(amount) = update.amount {
            budget.amount = amount;
        }
        if let Some(category) = update.category {
            if !Category::is_valid_slug(&category) {
                return Err(FintrackError::Validation(format!(
                    "Unknown category '{}'",
                    category
                )));
            }
            budget.category = category;
        }
        if let Some(period) = update.period {
            budget.period = period;
        }
        if let Some(end_date) = update.end_date {
            budget.end_date = Some(end_date);
        }
        if let Some(color) = update.color {
            budget.color = if color.is_empty() { None } else { Some(color) };
        }
        budget.updated_at = Utc::now();

        budget
            .validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        self.storage.budgets.upsert(budget.clone())?;
        self.storage.budgets.save()?;

        Ok(budget)
    }

    /// Delete a budget
    pub fn delete(&self, id: BudgetId) -> FintrackResult<()> {
        if !self.storage.budgets.delete(id)? {
            return Err(FintrackError::budget_not_found(id.to_string()));
        }
        self.storage.budgets.save()
    }

    /// Re-derive a budget's spent amount from expense transactions in its
    /// category dated inside the current period window
    pub fn refresh_spent(&self, id: BudgetId) -> FintrackResult<Budget> {
        self.refresh_spent_as_of(id, Local::now().date_naive())
    }

    /// `refresh_spent` with an explicit "today" anchor
    pub fn refresh_spent_as_of(&self, id: BudgetId, today: NaiveDate) -> FintrackResult<Budget> {
        let mut budget = self
            .storage
            .budgets
            .get(id)?
            .ok_or_else(|| FintrackError::budget_not_found(id.to_string()))?;

        let (start, end) = budget.active_window(today);
        let spent: Money = self
            .storage
            .transactions
            .get_by_category(&budget.category)?
            .iter()
            .filter(|t| t.is_expense() && t.date >= start && t.date <= end)
            .map(|t| t.amount)
            .sum();

        budget.set_spent(spent);
        self.storage.budgets.upsert(budget.clone())?;
        self.storage.budgets.save()?;

        Ok(budget)
    }

    /// Refresh every budget's spent amount
    pub fn refresh_all(&self) -> FintrackResult<Vec<Budget>> {
        let today = Local::now().date_naive();
        let mut refreshed = Vec::new();
        for budget in self.list()? {
            refreshed.push(self.refresh_spent_as_of(budget.id, today)?);
        }
        Ok(refreshed)
    }
}
