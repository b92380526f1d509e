//! Account service
//!
//! Business logic for account management: CRUD, duplicate-name checks,
//! cascade deletion of dependent transactions, and balance derivation.

use chrono::Utc;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Account, AccountId, AccountKind, CurrencyCode, Money};
use crate::storage::Storage;

/// Field updates for an account; None leaves the field unchanged
#[derive(Debug, Clone, Default)]
pub struct AccountUpdate {
    pub name: Option<String>,
    pub kind: Option<AccountKind>,
    pub currency: Option<CurrencyCode>,
    pub institution: Option<String>,
    pub last_four: Option<String>,
    pub color: Option<String>,
    pub hidden: Option<bool>,
}

/// Service for account management
pub struct AccountService<'a> {
    storage: &'a Storage,
}

impl<'a> AccountService<'a> {
    /// Create a new account service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new account
    pub fn create(
        &self,
        name: &str,
        kind: AccountKind,
        balance: Money,
        currency: CurrencyCode,
    ) -> FintrackResult<Account> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FintrackError::Validation(
                "Account name cannot be empty".into(),
            ));
        }

        if self.storage.accounts.name_exists(name, None)? {
            return Err(FintrackError::Duplicate {
                entity_type: "Account",
                identifier: name.to_string(),
            });
        }

        let account = Account::new(name, kind, balance, currency);
        account
            .validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        self.storage.accounts.upsert(account.clone())?;
        self.storage.accounts.save()?;

        Ok(account)
    }

    /// Get an account by ID
    pub fn get(&self, id: AccountId) -> FintrackResult<Option<Account>> {
        self.storage.accounts.get(id)
    }

    /// Find an account by name or ID string
    pub fn find(&self, identifier: &str) -> FintrackResult<Option<Account>> {
        if let Some(account) = self.storage.accounts.get_by_name(identifier)? {
            return Ok(Some(account));
        }

        if let Ok(id) = identifier.parse::<AccountId>() {
            return self.storage.accounts.get(id);
        }

        Ok(None)
    }

    /// Find an account by name or ID string, erroring when absent
    pub fn require(&self, identifier: &str) -> FintrackResult<Account> {
        self.find(identifier)?
            .ok_or_else(|| FintrackError::account_not_found(identifier))
    }

    /// List accounts, optionally including hidden ones
    pub fn list(&self, include_hidden: bool) -> FintrackResult<Vec<Account>> {
        if include_hidden {
            self.storage.accounts.get_all()
        } else {
            self.storage.accounts.get_visible()
        }
    }

    /// Update an account
    pub fn update(&self, id: AccountId, update: AccountUpdate) -> FintrackResult<Account> {
        let mut account = self
            .storage
            .accounts
            .get(id)?
            .ok_or_else(|| FintrackError::account_not_found(id.to_string()))?;

        if let Some(new_name) = update.name {
            let new_name = new_name.trim().to_string();
            if new_name.is_empty() {
                return Err(FintrackError::Validation(
                    "Account name cannot be empty".into(),
                ));
            }
            if self.storage.accounts.name_exists(&new_name, Some(id))? {
                return Err(FintrackError::Duplicate {
                    entity_type: "Account",
                    identifier: new_name,
                });
            }
            account.name = new_name;
        }

        if let Some(kind) = update.kind {
            account.kind = kind;
        }
        if let Some(currency) = update.currency {
            account.currency = currency;
        }
        if let Some(institution) = update.institution {
            account.institution = if institution.is_empty() {
                None
            } else {
                Some(institution)
            };
        }
        if let Some(last_four) = update.last_four {
            account.last_four = if last_four.is_empty() {
                None
            } else {
                Some(last_four)
            };
        }
        if let Some(color) = update.color {
            account.color = if color.is_empty() { None } else { Some(color) };
        }
        if let Some(hidden) = update.hidden {
            account.hidden = hidden;
        }

        account.updated_at = Utc::now();
        account
            .validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        self.storage.accounts.upsert(account.clone())?;
        self.storage.accounts.save()?;

        Ok(account)
    }

    /// Delete an account and its dependent transactions.
    ///
    /// Returns the number of transactions removed.
    pub fn delete(&self, id: AccountId) -> FintrackResult<usize> {
        if !self.storage.accounts.exists(id)? {
            return Err(FintrackError::account_not_found(id.to_string()));
        }

        let removed = self.storage.transactions.delete_by_account(id)?;
        self.storage.accounts.delete(id)?;

        self.storage.accounts.save()?;
        self.storage.transactions.save()?;

        Ok(removed)
    }

    /// Re-derive an account's balance from its opening balance and the
    /// signed amounts of its transactions
    pub fn derived_balance(&self, id: AccountId) -> FintrackResult<Money> {
        let account = self
            .storage
            .accounts
            .get(id)?
            .ok_or_else(|| FintrackError::account_not_found(id.to_string()))?;

        let activity: Money = self
            .storage
            .transactions
            .get_by_account(id)?
            .iter()
            .map(|t| t.signed_amount())
            .sum();

        Ok(account.opening_balance + activity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FintrackPaths;
    use crate::models::{Transaction, TransactionKind};
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
    fn test_create_account() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AccountService::new(&storage);

        let account = service
            .create(
                "Chase Checking",
                AccountKind::Checking,
                Money::from_cents(250000),
                CurrencyCode::USD,
            )
            .unwrap();

        assert_eq!(account.name, "Chase Checking");
        assert_eq!(account.balance.cents(), 250000);
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AccountService::new(&storage);

        let result = service.create("  ", AccountKind::Cash, Money::zero(), CurrencyCode::USD);
        assert!(matches!(result, Err(FintrackError::Validation(_))));
    }

    #[test]
    fn test_create_rejects_duplicate_name() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AccountService::new(&storage);

        service
            .create("Wallet", AccountKind::Cash, Money::zero(), CurrencyCode::USD)
            .unwrap();
        let result = service.create("wallet", AccountKind::Cash, Money::zero(), CurrencyCode::USD);
        assert!(matches!(result, Err(FintrackError::Duplicate { .. })));
    }

    #[test]
    fn test_find_by_name_or_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AccountService::new(&storage);

        let created = service
            .create("My Checking", AccountKind::Checking, Money::zero(), CurrencyCode::USD)
            .unwrap();

        assert_eq!(service.find("my checking").unwrap().unwrap().id, created.id);
        assert_eq!(
            service
                .find(&created.id.as_uuid().to_string())
                .unwrap()
                .unwrap()
                .id,
            created.id
        );
        assert!(service.find("missing").unwrap().is_none());
    }

    #[test]
    fn test_update_fields() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AccountService::new(&storage);

        let account = service
            .create("Old Name", AccountKind::Checking, Money::zero(), CurrencyCode::USD)
            .unwrap();

        let updated = service
            .update(
                account.id,
                AccountUpdate {
                    name: Some("New Name".into()),
                    currency: Some(CurrencyCode::EUR),
                    institution: Some("Chase".into()),
                    hidden: Some(true),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.name, "New Name");
        assert_eq!(updated.currency, CurrencyCode::EUR);
        assert_eq!(updated.institution.as_deref(), Some("Chase"));
        assert!(updated.hidden);
    }

    #[test]
    fn test_delete_cascades_transactions() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AccountService::new(&storage);

        let account = service
            .create("Doomed", AccountKind::Checking, Money::zero(), CurrencyCode::USD)
            .unwrap();

        for day in 1..=3 {
            let txn = Transaction::new(
                account.id,
                NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
                Money::from_cents(1000),
                "spend",
                TransactionKind::Expense,
            );
            storage.transactions.upsert(txn).unwrap();
        }

        let removed = service.delete(account.id).unwrap();
        assert_eq!(removed, 3);
        assert_eq!(storage.transactions.count().unwrap(), 0);
        assert!(storage.accounts.get(account.id).unwrap().is_none());
    }

    #[test]
    fn test_delete_missing_account() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AccountService::new(&storage);
        assert!(service.delete(AccountId::new()).unwrap_err().is_not_found());
    }

    #[test]
    fn test_derived_balance() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AccountService::new(&storage);

        let account = service
            .create(
                "Checking",
                AccountKind::Checking,
                Money::from_cents(100000),
                CurrencyCode::USD,
            )
            .unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let expense = Transaction::new(
            account.id,
            date,
            Money::from_cents(5000),
            "groceries",
            TransactionKind::Expense,
        );
        let income = Transaction::new(
            account.id,
            date,
            Money::from_cents(20000),
            "salary",
            TransactionKind::Income,
        );
        storage.transactions.upsert(expense).unwrap();
        storage.transactions.upsert(income).unwrap();

        // 1000.00 - 50.00 + 200.00 = 1150.00
        assert_eq!(service.derived_balance(account.id).unwrap().cents(), 115000);
    }
}
