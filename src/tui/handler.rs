//! Key event handling for the TUI

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::services::BudgetService;

use super::app::{ActiveTab, App};
use super::event::Event;

/// Dispatch a terminal event against the app state
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Resize(_, _) => Ok(()),
        Event::Tick => Ok(()),
    }
}

fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ignore key releases (Windows terminals report both)
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        KeyCode::Tab => {
            let next = app.active_tab.next();
            app.switch_tab(next);
        }
        KeyCode::BackTab => {
            let prev = app.active_tab.prev();
            app.switch_tab(prev);
        }
        KeyCode::Char('1') => app.switch_tab(ActiveTab::Overview),
        KeyCode::Char('2') => app.switch_tab(ActiveTab::Accounts),
        KeyCode::Char('3') => app.switch_tab(ActiveTab::Transactions),
        KeyCode::Char('4') => app.switch_tab(ActiveTab::Budgets),

        KeyCode::Up | KeyCode::Char('k') => {
            app.clear_status();
            app.move_up();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.clear_status();
            let max = current_row_count(app);
            app.move_down(max);
        }

        // Re-derive budget spent amounts from the transaction log
        KeyCode::Char('r') => {
            let service = BudgetService::new(app.storage);
            match service.refresh_all() {
                Ok(budgets) => app.set_status(format!("Refreshed {} budget(s)", budgets.len())),
                Err(e) => app.set_status(format!("Refresh failed: {}", e)),
            }
        }

        _ => {}
    }

    Ok(())
}

fn current_row_count(app: &App) -> usize {
    match app.active_tab {
        ActiveTab::Overview => 0,
        ActiveTab::Accounts => app.storage.accounts.get_visible().map(|a| a.len()).unwrap_or(0),
        ActiveTab::Transactions => app.storage.transactions.count().unwrap_or(0),
        ActiveTab::Budgets => app.storage.budgets.count().unwrap_or(0),
    }
}
