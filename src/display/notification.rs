//! Notification display formatting

use crate::models::Notification;

/// Format the notification center list, newest first
pub fn format_notification_list(notifications: &[Notification]) -> String {
    if notifications.is_empty() {
        return "No notifications.\n".to_string();
    }

    let mut output = String::new();

    for n in notifications {
        let marker = if n.read { " " } else { "*" };
        output.push_str(&format!(
            "{} [{}] {} ({})\n",
            marker,
            n.category,
            n.title,
            n.timestamp.format("%Y-%m-%d %H:%M")
        ));
        output.push_str(&format!("    {}\n", n.message));
        output.push_str(&format!("    id: {}  priority: {}\n", n.id, n.priority));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NotificationCategory, Priority};

    #[test]
    fn test_empty() {
        assert_eq!(format_notification_list(&[]), "No notifications.\n");
    }

    #[test]
    fn test_unread_marker() {
        let mut read = Notification::new("Seen", "m", NotificationCategory::Updates, Priority::Low);
        read.mark_read();
        let unread = Notification::new("New", "m", NotificationCategory::Alerts, Priority::High);

        let text = format_notification_list(&[unread, read]);
        assert!(text.contains("* [Alerts] New"));
        assert!(text.contains("  [Updates] Seen"));
    }
}
