//! Overview tab
//!
//! The dashboard headline: balance and monthly income/expense cards, recent
//! transactions, and the expenses-by-category bar chart.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::models::Category;
use crate::services::{CurrencyService, Period, SummaryService};
use crate::tui::app::App;

use super::Palette;

/// Render the overview tab
pub fn render(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(6),
            Constraint::Length(10),
        ])
        .split(area);

    render_cards(frame, app, rows[0], palette);
    render_recent(frame, app, rows[1], palette);
    render_expense_chart(frame, app, rows[2], palette);
}

fn render_cards(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let summary = SummaryService::new(app.storage);
    let currency = CurrencyService::new();
    let display = app.settings.currency;

    let balance = summary
        .total_balance(&currency, display)
        .unwrap_or_default();
    let income = summary.total_income(Period::Month).unwrap_or_default();
    let expenses = summary.total_expenses(Period::Month).unwrap_or_default();

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let balance_color = if balance.is_negative() {
        palette.negative
    } else {
        palette.positive
    };

    render_card(
        frame,
        cards[0],
        "Total Balance",
        balance.format_with_symbol(display.symbol()),
        balance_color,
        palette,
    );
    render_card(
        frame,
        cards[1],
        "Income (month)",
        income.to_string(),
        palette.positive,
        palette,
    );
    render_card(
        frame,
        cards[2],
        "Expenses (month)",
        expenses.to_string(),
        palette.negative,
        palette,
    );
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: String,
    value_color: ratatui::style::Color,
    palette: &Palette,
) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.muted));

    let text = Paragraph::new(Line::from(Span::styled(
        value,
        Style::default()
            .fg(value_color)
            .add_modifier(Modifier::BOLD),
    )))
    .block(block)
    .centered();

    frame.render_widget(text, area);
}

fn render_recent(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let summary = SummaryService::new(app.storage);
    let recent = summary
        .recent_transactions(area.height.saturating_sub(2) as usize)
        .unwrap_or_default();

    let items: Vec<ListItem> = recent
        .iter()
        .map(|txn| {
            let amount = txn.signed_amount();
            let amount_color = if amount.is_negative() {
                palette.negative
            } else {
                palette.positive
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{}  ", txn.date.format("%Y-%m-%d")),
                    Style::default().fg(palette.muted),
                ),
                Span::styled(
                    format!("{:<28}", truncate(&txn.description, 28)),
                    Style::default().fg(palette.fg),
                ),
                Span::styled(format!("{:>12}", amount.to_string()), Style::default().fg(amount_color)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title("Recent Transactions")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.muted)),
    );

    frame.render_widget(list, area);
}

fn render_expense_chart(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let summary = SummaryService::new(app.storage);
    let breakdown = summary.expenses_by_category(Period::Month).unwrap_or_default();

    let bars: Vec<Bar> = breakdown
        .iter()
        .take(8)
        .map(|entry| {
            Bar::default()
                .label(Line::from(short_label(&entry.slug)))
                .value(entry.total.units().max(0) as u64)
                .style(Style::default().fg(palette.accent))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title("Spending by Category (month)")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.muted)),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(2);

    frame.render_widget(chart, area);
}

fn short_label(slug: &str) -> String {
    truncate(Category::display_name(Some(slug)), 10)
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max.saturating_sub(1)).collect::<String>() + "…"
    }
}
