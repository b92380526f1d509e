//! Notification repository for JSON storage
//!
//! Unlike the entity repositories this one preserves ordering: notifications
//! are kept newest-first, the way the notification center shows them.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FintrackError;
use crate::models::{Notification, NotificationCategory, NotificationId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable notification file structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct NotificationData {
    notifications: Vec<Notification>,
}

/// Repository for notification persistence
pub struct NotificationRepository {
    path: PathBuf,
    data: RwLock<Vec<Notification>>,
}

impl NotificationRepository {
    /// Create a new notification repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load notifications from disk
    pub fn load(&self) -> Result<(), FintrackError> {
        let file_data: NotificationData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data.notifications;
        data.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        Ok(())
    }

    /// Save notifications to disk
    pub fn save(&self) -> Result<(), FintrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(
            &self.path,
            &NotificationData {
                notifications: data.clone(),
            },
        )
    }

    /// Get all notifications, newest first
    pub fn get_all(&self) -> Result<Vec<Notification>, FintrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Get notifications in one category, newest first
    pub fn get_by_category(
        &self,
        category: NotificationCategory,
    ) -> Result<Vec<Notification>, FintrackError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|n| n.category == category)
            .collect())
    }

    /// Prepend a new notification
    pub fn push(&self, notification: Notification) -> Result<(), FintrackError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(0, notification);
        Ok(())
    }

    /// Mark one notification read, returning whether it was found
    pub fn mark_read(&self, id: NotificationId) -> Result<bool, FintrackError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match data.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.mark_read();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Mark every notification read
    pub fn mark_all_read(&self) -> Result<(), FintrackError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        for n in data.iter_mut() {
            n.mark_read();
        }
        Ok(())
    }

    /// Delete one notification, returning whether it existed
    pub fn delete(&self, id: NotificationId) -> Result<bool, FintrackError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = data.len();
        data.retain(|n| n.id != id);
        Ok(data.len() < before)
    }

    /// Delete every notification
    pub fn clear(&self) -> Result<(), FintrackError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        Ok(())
    }

    /// Count unread notifications
    pub fn unread_count(&self) -> Result<usize, FintrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().filter(|n| !n.read).count())
    }

    /// Count unread notifications in one category
    pub fn unread_count_by_category(
        &self,
        category: NotificationCategory,
    ) -> Result<usize, FintrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .iter()
            .filter(|n| n.category == category && !n.read)
            .count())
    }
}
