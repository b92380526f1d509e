//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use crate::config::settings::Settings;
use crate::models::User;
use crate::storage::Storage;

/// Which tab of the dashboard is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Overview,
    Accounts,
    Transactions,
    Budgets,
}

impl ActiveTab {
    /// Tabs in display order
    pub fn all() -> &'static [Self] {
        &[Self::Overview, Self::Accounts, Self::Transactions, Self::Budgets]
    }

    /// Tab title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Accounts => "Accounts",
            Self::Transactions => "Transactions",
            Self::Budgets => "Budgets",
        }
    }

    /// Position in the tab bar
    pub fn index(&self) -> usize {
        Self::all().iter().position(|t| t == self).unwrap_or(0)
    }

    /// The next tab, wrapping
    pub fn next(&self) -> Self {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    /// The previous tab, wrapping
    pub fn prev(&self) -> Self {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// The signed-in user
    pub user: &'a User,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active tab
    pub active_tab: ActiveTab,

    /// Selected row in the accounts view
    pub selected_account_index: usize,

    /// Selected row in the transactions view
    pub selected_transaction_index: usize,

    /// Selected row in the budgets view
    pub selected_budget_index: usize,

    /// Status message shown in the status bar
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(storage: &'a Storage, settings: &'a Settings, user: &'a User) -> Self {
        Self {
            storage,
            settings,
            user,
            should_quit: false,
            active_tab: ActiveTab::default(),
            selected_account_index: 0,
            selected_transaction_index: 0,
            selected_budget_index: 0,
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Switch to a tab, resetting its selection
    pub fn switch_tab(&mut self, tab: ActiveTab) {
        self.active_tab = tab;
        match tab {
            ActiveTab::Accounts => self.selected_account_index = 0,
            ActiveTab::Transactions => self.selected_transaction_index = 0,
            ActiveTab::Budgets => self.selected_budget_index = 0,
            ActiveTab::Overview => {}
        }
    }

    /// Move selection up in the current tab
    pub fn move_up(&mut self) {
        let index = self.selection_mut();
        if let Some(index) = index {
            *index = index.saturating_sub(1);
        }
    }

    /// Move selection down in the current tab, capped at `max` rows
    pub fn move_down(&mut self, max: usize) {
        if let Some(index) = self.selection_mut() {
            if *index + 1 < max {
                *index += 1;
            }
        }
    }

    fn selection_mut(&mut self) -> Option<&mut usize> {
        match self.active_tab {
            ActiveTab::Accounts => Some(&mut self.selected_account_index),
            ActiveTab::Transactions => Some(&mut self.selected_transaction_index),
            ActiveTab::Budgets => Some(&mut self.selected_budget_index),
            ActiveTab::Overview => None,
        }
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
