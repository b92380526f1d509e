//! Notification model and preferences
//!
//! In-app notifications grouped into categories, with per-category
//! delivery preferences. Muted categories drop incoming notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::NotificationId;

/// Category a notification belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    Alerts,
    Messages,
    Updates,
    System,
}

impl NotificationCategory {
    pub fn all() -> &'static [Self] {
        &[Self::Alerts, Self::Messages, Self::Updates, Self::System]
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "alerts" | "alert" => Some(Self::Alerts),
            "messages" | "message" => Some(Self::Messages),
            "updates" | "update" => Some(Self::Updates),
            "system" => Some(Self::System),
            _ => None,
        }
    }
}

impl fmt::Display for NotificationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alerts => write!(f, "Alerts"),
            Self::Messages => write!(f, "Messages"),
            Self::Updates => write!(f, "Updates"),
            Self::System => write!(f, "System"),
        }
    }
}

/// Notification priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// An in-app notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identifier
    pub id: NotificationId,

    /// Short title
    pub title: String,

    /// Body text
    pub message: String,

    /// Category for filtering and preferences
    pub category: NotificationCategory,

    /// Priority level
    #[serde(default)]
    pub priority: Priority,

    /// Whether the notification has been read
    #[serde(default)]
    pub read: bool,

    /// When the notification was created
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    /// Create a new unread notification
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        category: NotificationCategory,
        priority: Priority,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            title: title.into(),
            message: message.into(),
            category,
            priority,
            read: false,
            timestamp: Utc::now(),
        }
    }

    /// Mark as read
    pub fn mark_read(&mut self) {
        self.read = true;
    }
}

/// Delivery preferences for one notification category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryPreferences {
    pub push: bool,
    pub email: bool,
    pub muted: bool,
}

impl CategoryPreferences {
    fn new(push: bool, email: bool) -> Self {
        Self {
            push,
            email,
            muted: false,
        }
    }
}

/// User-level notification preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub alerts: CategoryPreferences,
    pub messages: CategoryPreferences,
    pub updates: CategoryPreferences,
    pub system: CategoryPreferences,
    /// Delivery cadence ("immediate" or "daily")
    pub frequency: String,
    pub sound: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            alerts: CategoryPreferences::new(true, true),
            messages: CategoryPreferences::new(true, false),
            updates: CategoryPreferences::new(true, true),
            system: CategoryPreferences::new(false, true),
            frequency: "immediate".to_string(),
            sound: true,
        }
    }
}

impl NotificationPreferences {
    /// Preferences for a category
    pub fn for_category(&self, category: NotificationCategory) -> &CategoryPreferences {
        match category {
            NotificationCategory::Alerts => &self.alerts,
            NotificationCategory::Messages => &self.messages,
            NotificationCategory::Updates => &self.updates,
            NotificationCategory::System => &self.system,
        }
    }

    /// Mutable preferences for a category
    pub fn for_category_mut(&mut self, category: NotificationCategory) -> &mut CategoryPreferences {
        match category {
            NotificationCategory::Alerts => &mut self.alerts,
            NotificationCategory::Messages => &mut self.messages,
            NotificationCategory::Updates => &mut self.updates,
            NotificationCategory::System => &mut self.system,
        }
    }

    /// Whether notifications in this category should be dropped
    pub fn is_muted(&self, category: NotificationCategory) -> bool {
        self.for_category(category).muted
    }
}
