//! Budgets tab
//!
//! One gauge per budget; the ratio is the clamped display percentage so an
//! overspent budget pins at full rather than overflowing.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::models::Category;
use crate::services::BudgetService;
use crate::tui::app::App;

use super::Palette;

/// Render the budgets tab
pub fn render(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette) {
    let budgets = BudgetService::new(app.storage)
        .list_with_progress()
        .unwrap_or_default();

    let block = Block::default()
        .title(format!("Budgets ({})", budgets.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.muted));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if budgets.is_empty() {
        let empty = Paragraph::new("No budgets yet. Create one with 'fintrack budget add'.")
            .style(Style::default().fg(palette.muted));
        frame.render_widget(empty, inner);
        return;
    }

    let constraints: Vec<Constraint> = budgets.iter().map(|_| Constraint::Length(3)).collect();
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, (entry, slot)) in budgets.iter().zip(slots.iter()).enumerate() {
        let budget = &entry.budget;

        let gauge_color = if entry.overspent {
            palette.negative
        } else if entry.percent >= 85.0 {
            ratatui::style::Color::Yellow
        } else {
            palette.positive
        };

        let selected = i == app.selected_budget_index;
        let title_style = if selected {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.fg)
        };

        let label = format!(
            "{} / {} ({:.0}%){}",
            budget.spent,
            budget.amount,
            entry.percent,
            if entry.overspent { " OVER" } else { "" }
        );

        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title(format!(
                        "{} · {} · {}",
                        budget.name,
                        Category::display_name(Some(&budget.category)),
                        budget.period
                    ))
                    .title_style(title_style)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.muted)),
            )
            .gauge_style(Style::default().fg(gauge_color))
            .ratio((entry.percent / 100.0).clamp(0.0, 1.0))
            .label(label);

        frame.render_widget(gauge, *slot);
    }
}
