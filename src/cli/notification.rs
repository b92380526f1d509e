//! Notification center CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_notification_list;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{NotificationCategory, NotificationId};
use crate::services::NotificationService;
use crate::storage::Storage;

/// Notification subcommands
#[derive(Subcommand)]
pub enum NotificationCommands {
    /// List notifications
    List {
        /// Filter by category (alerts, messages, updates, system)
        #[arg(short, long)]
        category: Option<String>,
        /// Only unread notifications
        #[arg(short, long)]
        unread: bool,
    },
    /// Mark a notification read
    Read {
        /// Notification ID
        id: String,
    },
    /// Mark every notification read
    ReadAll,
    /// Delete a notification
    Delete {
        /// Notification ID
        id: String,
    },
    /// Delete every notification
    Clear,
}

/// Handle a notification command
pub fn handle_notification_command(
    storage: &Storage,
    settings: &Settings,
    cmd: NotificationCommands,
) -> FintrackResult<()> {
    let service = NotificationService::new(storage, settings.notifications.clone());

    match cmd {
        NotificationCommands::List { category, unread } => {
            let mut notifications = match category {
                Some(s) => {
                    let category = NotificationCategory::parse(&s).ok_or_else(|| {
                        FintrackError::Validation(format!(
                            "Unknown category '{}'. Valid: alerts, messages, updates, system",
                            s
                        ))
                    })?;
                    service.list_by_category(category)?
                }
                None => service.list()?,
            };

            if unread {
                notifications.retain(|n| !n.read);
            }

            print!("{}", format_notification_list(&notifications));
            let unread_count = service.unread_count()?;
            if unread_count > 0 {
                println!("{} unread.", unread_count);
            }
        }

        NotificationCommands::Read { id } => {
            let id = parse_id(&id)?;
            if service.mark_read(id)? {
                println!("Marked read.");
            } else {
                return Err(FintrackError::notification_not_found(id.to_string()));
            }
        }

        NotificationCommands::ReadAll => {
            service.mark_all_read()?;
            println!("All notifications marked read.");
        }

        NotificationCommands::Delete { id } => {
            let id = parse_id(&id)?;
            if service.delete(id)? {
                println!("Notification deleted.");
            } else {
                return Err(FintrackError::notification_not_found(id.to_string()));
            }
        }

        NotificationCommands::Clear => {
            service.clear()?;
            println!("Notification center cleared.");
        }
    }

    Ok(())
}

fn parse_id(s: &str) -> FintrackResult<NotificationId> {
    s.parse()
        .map_err(|_| FintrackError::Validation(format!("Invalid notification ID '{}'", s)))
}
