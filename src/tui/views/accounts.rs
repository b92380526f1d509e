//! Accounts tab

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::tui::app::App;

use super::Palette;

/// Render the accounts tab
pub fn render(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette) {
    let accounts = app.storage.accounts.get_visible().unwrap_or_default();

    let header = Row::new(vec!["Name", "Type", "Balance", "Currency", "Institution"])
        .style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows: Vec<Row> = accounts
        .iter()
        .map(|account| {
            let balance_style = if account.balance.is_negative() {
                Style::default().fg(palette.negative)
            } else {
                Style::default().fg(palette.positive)
            };

            Row::new(vec![
                Cell::from(account.name.clone()),
                Cell::from(account.kind.to_string()),
                Cell::from(
                    account
                        .balance
                        .format_with_symbol(account.currency.symbol()),
                )
                .style(balance_style),
                Cell::from(account.currency.code()),
                Cell::from(account.institution.clone().unwrap_or_default()),
            ])
            .style(Style::default().fg(palette.fg))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(12),
            Constraint::Length(14),
            Constraint::Length(8),
            Constraint::Min(12),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(format!("Accounts ({})", accounts.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.muted)),
    )
    .highlight_style(
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::REVERSED),
    );

    let mut state = TableState::default();
    if !accounts.is_empty() {
        state.select(Some(app.selected_account_index.min(accounts.len() - 1)));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
