//! Help overlay showing keybindings

use super::centered_rect;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, theme: &Theme, area: Rect) {
    let rect = centered_rect(76, 18, area);
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(format!(" {} Keybinds ", theme.icons.help))
        .title_style(Style::default().fg(theme.palette.accent))
        .style(Style::default().bg(theme.palette.bg_primary));

    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let left_content = vec![
        section_header("Navigation", theme),
        keybind("j / Down", "Next book", theme),
        keybind("k / Up", "Previous book", theme),
        keybind("g / G", "First / last book", theme),
        keybind("h / l", "Previous / next column", theme),
        keybind("Tab", "Next column", theme),
        keybind("1-3", "Go to column", theme),
        Line::default(),
        section_header("Books", theme),
        keybind("Enter / t", "Read / Finish / Unread", theme),
        keybind("a", "Add a book", theme),
        keybind("Ctrl+r / F5", "Reload cover colors", theme),
    ];
    frame.render_widget(Paragraph::new(left_content).wrap(Wrap { trim: false }), cols[0]);

    let right_content = vec![
        section_header("Add book form", theme),
        keybind("Tab / Down", "Next field", theme),
        keybind("S-Tab / Up", "Previous field", theme),
        keybind("Space / ←→", "Change status", theme),
        keybind("Enter", "Save", theme),
        keybind("Esc", "Cancel", theme),
        Line::default(),
        section_header("General", theme),
        keybind("? / F1", "Toggle help", theme),
        keybind("q / Esc", "Quit", theme),
    ];
    frame.render_widget(Paragraph::new(right_content).wrap(Wrap { trim: false }), cols[1]);
}

fn section_header(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![Span::styled(
        format!("━━ {} ━━", title),
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD),
    )])
}

fn keybind(key: &str, desc: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(
            format!("{:13}", key),
            Style::default()
                .fg(theme.palette.accent_alt)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(theme.palette.fg_primary)),
    ])
}
