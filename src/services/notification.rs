//! Notification service
//!
//! Routes domain events into the notification center, honoring the user's
//! per-category preferences: muted categories drop notifications outright.

use crate::error::FintrackResult;
use crate::models::{
    Budget, Notification, NotificationCategory, NotificationId, NotificationPreferences, Priority,
};
use crate::storage::Storage;

/// Percentage of a budget target that triggers a spending alert
pub const BUDGET_ALERT_THRESHOLD: f64 = 85.0;

/// Service for the notification center
pub struct NotificationService<'a> {
    storage: &'a Storage,
    preferences: NotificationPreferences,
}

impl<'a> NotificationService<'a> {
    /// Create a new notification service
    pub fn new(storage: &'a Storage, preferences: NotificationPreferences) -> Self {
        Self {
            storage,
            preferences,
        }
    }

    /// Add a notification unless its category is muted.
    ///
    /// Returns the stored notification, or None when it was dropped.
    pub fn notify(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        category: NotificationCategory,
        priority: Priority,
    ) -> FintrackResult<Option<Notification>> {
        if self.preferences.is_muted(category) {
            return Ok(None);
        }

        let notification = Notification::new(title, message, category, priority);
        self.storage.notifications.push(notification.clone())?;
        self.storage.notifications.save()?;
        Ok(Some(notification))
    }

    /// Emit the spending alert for a budget that crossed the threshold
    pub fn budget_threshold_alert(&self, budget: &Budget) -> FintrackResult<Option<Notification>> {
        let period_phrase = match budget.period {
            crate::models::BudgetPeriod::Weekly => "this week",
            crate::models::BudgetPeriod::Monthly => "this month",
            crate::models::BudgetPeriod::Yearly => "this year",
        };
        self.notify(
            "Budget Alert",
            format!(
                "You have exceeded {:.0}% of your {} budget for {}.",
                BUDGET_ALERT_THRESHOLD, budget.name, period_phrase
            ),
            NotificationCategory::Alerts,
            Priority::High,
        )
    }

    /// All notifications, newest first
    pub fn list(&self) -> FintrackResult<Vec<Notification>> {
        self.storage.notifications.get_all()
    }

    /// Notifications in one category, newest first
    pub fn list_by_category(
        &self,
        category: NotificationCategory,
    ) -> FintrackResult<Vec<Notification>> {
        self.storage.notifications.get_by_category(category)
    }

    /// Mark one notification read
    pub fn mark_read(&self, id: NotificationId) -> FintrackResult<bool> {
        let found = self.storage.notifications.mark_read(id)?;
        if found {
            self.storage.notifications.save()?;
        }
        Ok(found)
    }

    /// Mark every notification read
    pub fn mark_all_read(&self) -> FintrackResult<()> {
        self.storage.notifications.mark_all_read()?;
        self.storage.notifications.save()
    }

    /// Delete one notification
    pub fn delete(&self, id: NotificationId) -> FintrackResult<bool> {
        let found = self.storage.notifications.delete(id)?;
        if found {
            self.storage.notifications.save()?;
        }
        Ok(found)
    }

    /// Delete every notification
    pub fn clear(&self) -> FintrackResult<()> {
        self.storage.notifications.clear()?;
        self.storage.notifications.save()
    }

    /// Count of unread notifications
    pub fn unread_count(&self) -> FintrackResult<usize> {
        self.storage.notifications.unread_count()
    }

    /// Count of unread notifications in one category
    pub fn unread_count_by_category(
        &self,
        category: NotificationCategory,
    ) -> FintrackResult<usize> {
        self.storage.notifications.unread_count_by_category(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FintrackPaths;
    use crate::models::{BudgetPeriod, Money};
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
    fn test_notify_stores_and_counts() {
        let (_temp_dir, storage) = create_test_storage();
        let service = NotificationService::new(&storage, NotificationPreferences::default());

        let stored = service
            .notify(
                "Transaction Added",
                "Your transaction for $45.99 at Grocery Store has been recorded.",
                NotificationCategory::Updates,
                Priority::Low,
            )
            .unwrap();
        assert!(stored.is_some());
        assert_eq!(service.unread_count().unwrap(), 1);
    }

    #[test]
    fn test_muted_category_drops() {
        let (_temp_dir, storage) = create_test_storage();
        let mut prefs = NotificationPreferences::default();
        prefs.for_category_mut(NotificationCategory::Updates).muted = true;
        let service = NotificationService::new(&storage, prefs);

        let stored = service
            .notify("t", "m", NotificationCategory::Updates, Priority::Low)
            .unwrap();
        assert!(stored.is_none());
        assert_eq!(service.unread_count().unwrap(), 0);

        // Other categories still deliver
        let stored = service
            .notify("t", "m", NotificationCategory::Alerts, Priority::High)
            .unwrap();
        assert!(stored.is_some());
    }

    #[test]
    fn test_budget_threshold_alert_message() {
        let (_temp_dir, storage) = create_test_storage();
        let service = NotificationService::new(&storage, NotificationPreferences::default());

        let budget = Budget::new(
            "Food & Dining",
            Money::from_cents(50000),
            "food",
            BudgetPeriod::Monthly,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        );
        let alert = service.budget_threshold_alert(&budget).unwrap().unwrap();

        assert_eq!(alert.title, "Budget Alert");
        assert_eq!(alert.category, NotificationCategory::Alerts);
        assert_eq!(alert.priority, Priority::High);
        assert!(alert
            .message
            .contains("85% of your Food & Dining budget for this month"));
    }

    #[test]
    fn test_mark_read_and_clear() {
        let (_temp_dir, storage) = create_test_storage();
        let service = NotificationService::new(&storage, NotificationPreferences::default());

        let n = service
            .notify("t", "m", NotificationCategory::System, Priority::Low)
            .unwrap()
            .unwrap();
        service
            .notify("t2", "m2", NotificationCategory::System, Priority::Low)
            .unwrap();

        assert!(service.mark_read(n.id).unwrap());
        assert_eq!(service.unread_count().unwrap(), 1);

        service.mark_all_read().unwrap();
        assert_eq!(service.unread_count().unwrap(), 0);

        service.clear().unwrap();
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_mark_read_unknown_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = NotificationService::new(&storage, NotificationPreferences::default());
        assert!(!service.mark_read(NotificationId::new()).unwrap());
    }
}
