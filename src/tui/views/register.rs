//! Transactions tab

use std::collections::HashMap;

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::models::{AccountId, Category};
use crate::tui::app::App;

use super::Palette;

/// Render the transactions tab
pub fn render(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette) {
    let transactions = app.storage.transactions.get_all().unwrap_or_default();
    let account_names: HashMap<AccountId, String> = app
        .storage
        .accounts
        .get_all()
        .unwrap_or_default()
        .into_iter()
        .map(|a| (a.id, a.name))
        .collect();

    let header = Row::new(vec!["Date", "Description", "Category", "Account", "Amount"])
        .style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows: Vec<Row> = transactions
        .iter()
        .map(|txn| {
            let amount = txn.signed_amount();
            let amount_style = if amount.is_negative() {
                Style::default().fg(palette.negative)
            } else {
                Style::default().fg(palette.positive)
            };

            Row::new(vec![
                Cell::from(txn.date.format("%Y-%m-%d").to_string()),
                Cell::from(txn.description.clone()),
                Cell::from(Category::display_name(txn.category.as_deref())),
                Cell::from(
                    account_names
                        .get(&txn.account_id)
                        .cloned()
                        .unwrap_or_else(|| "(deleted)".to_string()),
                ),
                Cell::from(amount.to_string()).style(amount_style),
            ])
            .style(Style::default().fg(palette.fg))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Min(24),
            Constraint::Length(16),
            Constraint::Min(14),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(format!("Transactions ({})", transactions.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.muted)),
    )
    .highlight_style(
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::REVERSED),
    );

    let mut state = TableState::default();
    if !transactions.is_empty() {
        state.select(Some(
            app.selected_transaction_index.min(transactions.len() - 1),
        ));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
