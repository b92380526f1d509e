//! Account model
//!
//! Represents money-holding accounts (checking, savings, credit cards, etc.)
//! with a stored balance and a currency.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::currency::CurrencyCode;
use super::ids::AccountId;
use super::money::Money;

/// Kind of financial account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    #[default]
    Checking,
    Savings,
    Credit,
    Investment,
    Cash,
    Other,
}

impl AccountKind {
    /// All account kinds, in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Checking,
            Self::Savings,
            Self::Credit,
            Self::Investment,
            Self::Cash,
            Self::Other,
        ]
    }

    /// Parse an account kind from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "checking" => Some(Self::Checking),
            "savings" => Some(Self::Savings),
            "credit" | "credit_card" | "creditcard" => Some(Self::Credit),
            "investment" => Some(Self::Investment),
            "cash" => Some(Self::Cash),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checking => write!(f, "Checking"),
            Self::Savings => write!(f, "Savings"),
            Self::Credit => write!(f, "Credit Card"),
            Self::Investment => write!(f, "Investment"),
            Self::Cash => write!(f, "Cash"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// A money-holding account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Account name (e.g., "Chase Checking")
    pub name: String,

    /// Kind of account
    #[serde(rename = "type")]
    pub kind: AccountKind,

    /// Current balance, maintained by the transaction service
    pub balance: Money,

    /// Balance at creation time; `balance` minus all signed transaction
    /// amounts should always equal this
    pub opening_balance: Money,

    /// Currency the balance is denominated in
    pub currency: CurrencyCode,

    /// Institution holding the account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,

    /// Last four digits of the account number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_four: Option<String>,

    /// Display color (hex)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Whether this account is hidden from lists and totals
    #[serde(default)]
    pub hidden: bool,

    /// When the account was created
    pub created_at: DateTime<Utc>,

    /// When the account was last modified
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with a starting balance
    pub fn new(name: impl Into<String>, kind: AccountKind, balance: Money, currency: CurrencyCode) -> Self {
        let now = Utc::now();
        Self {
            id: AccountId::new(),
            name: name.into(),
            kind,
            balance,
            opening_balance: balance,
            currency,
            institution: None,
            last_four: None,
            color: None,
            hidden: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a signed amount to the stored balance
    pub fn apply(&mut self, signed_amount: Money) {
        self.balance += signed_amount;
        self.updated_at = Utc::now();
    }

    /// Hide this account from lists and totals
    pub fn hide(&mut self) {
        self.hidden = true;
        self.updated_at = Utc::now();
    }

    /// Unhide this account
    pub fn unhide(&mut self) {
        self.hidden = false;
        self.updated_at = Utc::now();
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.name.trim().is_empty() {
            return Err(AccountValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(AccountValidationError::NameTooLong(self.name.len()));
        }

        if let Some(last_four) = &self.last_four {
            if last_four.len() != 4 || !last_four.chars().all(|c| c.is_ascii_digit()) {
                return Err(AccountValidationError::InvalidLastFour(last_four.clone()));
            }
        }

        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyName,
    NameTooLong(usize),
    InvalidLastFour(String),
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Account name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Account name too long ({} chars, max 100)", len)
            }
            Self::InvalidLastFour(s) => {
                write!(f, "Last four must be exactly 4 digits, got '{}'", s)
            }
        }
    }
}

impl std::error::Error for AccountValidationError {}
