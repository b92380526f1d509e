//! Transaction model
//!
//! A dated, signed-by-type monetary event against an account. Amounts are
//! stored as non-negative magnitudes; the kind determines the sign that is
//! applied to account balances.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, TransactionId};
use super::money::Money;

/// Kind of transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
    Transfer,
}

impl TransactionKind {
    /// Parse a transaction kind from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            "transfer" => Some(Self::Transfer),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
            Self::Transfer => write!(f, "Transfer"),
        }
    }
}

/// A dated monetary event against an account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// The account this transaction belongs to
    pub account_id: AccountId,

    /// Transaction date
    pub date: NaiveDate,

    /// Amount as a non-negative magnitude; sign comes from `kind`
    pub amount: Money,

    /// What the money was for
    pub description: String,

    /// Category slug (optional; unknown slugs display as "Other")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Kind of transaction
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Whether this is a recurring transaction
    #[serde(default)]
    pub recurring: bool,

    /// Free-form notes
    #[serde(default)]
    pub notes: String,

    /// Tags for search and grouping
    #[serde(default)]
    pub tags: Vec<String>,

    /// When the transaction was created
    pub created_at: DateTime<Utc>,

    /// When the transaction was last modified
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        account_id: AccountId,
        date: NaiveDate,
        amount: Money,
        description: impl Into<String>,
        kind: TransactionKind,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            account_id,
            date,
            amount,
            description: description.into(),
            category: None,
            kind,
            recurring: false,
            notes: String::new(),
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// The amount with the sign the kind implies: negative for expenses,
    /// positive for income and transfers
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Expense => -self.amount,
            TransactionKind::Income | TransactionKind::Transfer => self.amount,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Set the category slug
    pub fn set_category(&mut self, slug: impl Into<String>) {
        self.category = Some(slug.into());
        self.updated_at = Utc::now();
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.signed_amount()
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyDescription,
    NegativeAmount(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description is required"),
            Self::NegativeAmount(amount) => {
                write!(
                    f,
                    "Amount must be a non-negative magnitude (got {}); use the expense kind for outflows",
                    amount
                )
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
