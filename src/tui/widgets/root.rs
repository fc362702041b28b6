//! Root layout widget - orchestrates main layout structure

use crate::app::state::AppState;
use crate::config::Config;
use crate::library::Library;
use crate::tui::theme::get_theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::{board, form, help, status_bar};

/// Main layout structure:
/// ┌─────────────────────────────────────────────────┐
/// │ shelf                              8 books      │
/// ├───────────────┬───────────────┬─────────────────┤
/// │  Available    │   Reading     │   Finished      │
/// │  [card]       │   [card]      │   [card]        │
/// │  [card]       │               │                 │
/// ├───────────────┴───────────────┴─────────────────┤
/// │ status / toast                                  │
/// │ key hints                                       │
/// └─────────────────────────────────────────────────┘
pub fn render(frame: &mut Frame, cfg: &Config, library: &Library, state: &mut AppState) {
    let theme = get_theme(&cfg.theme.name);
    let root = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.palette.bg_primary)),
        root,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(6),    // Board
            Constraint::Length(2), // Status bar
        ])
        .split(root);

    render_header(frame, &theme, library, rows[0]);
    board::render(frame, &theme, library, state, rows[1]);
    status_bar::render(frame, &theme, state, rows[2]);

    if state.show_help {
        help::render(frame, &theme, root);
    }
    if let Some(f) = &state.form {
        form::render(frame, &theme, f, root);
    }
}

fn render_header(frame: &mut Frame, theme: &crate::tui::theme::Theme, library: &Library, area: Rect) {
    let count = library.len();
    let right = format!("{} book{} ", count, if count == 1 { "" } else { "s" });

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(right.len() as u16)])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            " shelf ",
            Style::default()
                .fg(theme.palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("library tracker", Style::default().fg(theme.palette.fg_secondary)),
    ]);
    frame.render_widget(Paragraph::new(title), cols[0]);
    frame.render_widget(
        Paragraph::new(right).style(Style::default().fg(theme.palette.fg_secondary)),
        cols[1],
    );
}
