//! Status bar
//!
//! Shows the signed-in user, the unread notification count, any transient
//! status message, and key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

use super::Palette;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette) {
    let unread = app.storage.notifications.unread_count().unwrap_or(0);

    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.user.name),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(palette.muted)),
    ];

    if unread > 0 {
        spans.push(Span::styled(
            format!("{} unread ", unread),
            Style::default().fg(ratatui::style::Color::Yellow),
        ));
        spans.push(Span::styled("│ ", Style::default().fg(palette.muted)));
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(ratatui::style::Color::Yellow),
        ));
    }

    let hints = " Tab:Switch  ↑↓:Move  r:Refresh budgets  q:Quit ";
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding = (area.width as usize)
        .saturating_sub(left_len + hints.chars().count())
        .max(1);
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(hints, Style::default().fg(palette.muted)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
