//! TUI views
//!
//! The tab bar, the four dashboard tabs, and the status bar. Colors come
//! from the theme setting.

pub mod accounts;
pub mod budgets;
pub mod dashboard;
pub mod register;
pub mod status_bar;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::Tabs,
    Frame,
};

use crate::config::settings::Theme;

use super::app::{ActiveTab, App};

/// Colors for the active theme
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
}

impl Palette {
    /// Resolve the palette for a theme
    pub fn from_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                fg: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                positive: Color::Green,
                negative: Color::Red,
            },
            Theme::Light => Self {
                fg: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                positive: Color::Green,
                negative: Color::Red,
            },
        }
    }
}

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = Palette::from_theme(app.settings.theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    // Tab bar
    let titles: Vec<_> = ActiveTab::all()
        .iter()
        .map(|t| format!(" {} ", t.title()))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.active_tab.index())
        .style(Style::default().fg(palette.muted))
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│");
    frame.render_widget(tabs, chunks[0]);

    // Active tab content
    match app.active_tab {
        ActiveTab::Overview => dashboard::render(frame, app, chunks[1], &palette),
        ActiveTab::Accounts => accounts::render(frame, app, chunks[1], &palette),
        ActiveTab::Transactions => register::render(frame, app, chunks[1], &palette),
        ActiveTab::Budgets => budgets::render(frame, app, chunks[1], &palette),
    }

    // Status bar
    status_bar::render(frame, app, chunks[2], &palette);
}
