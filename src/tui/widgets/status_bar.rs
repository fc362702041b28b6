use super::truncate_str;
use crate::app::state::{AppState, ToastKind};
use crate::tui::theme::{LoadingSpinner, Theme};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(frame: &mut Frame, theme: &Theme, state: &AppState, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);
    let width = area.width as usize;

    let message = if let Some(toast) = &state.toast
        && !toast.is_expired()
    {
        let (prefix, color) = match toast.kind {
            ToastKind::Success => (theme.icons.success, theme.palette.success),
            ToastKind::Error => (theme.icons.error, theme.palette.error),
        };
        Line::from(vec![
            Span::styled(format!(" {} ", prefix), Style::default().fg(color)),
            Span::styled(
                truncate_str(&toast.message, width.saturating_sub(4)),
                Style::default().fg(color),
            ),
        ])
    } else if !state.pending_covers.is_empty() {
        Line::from(Span::styled(
            format!(
                " {} Reading cover colors ({} left)",
                LoadingSpinner::frame(state.tick),
                state.pending_covers.len()
            ),
            Style::default().fg(theme.palette.fg_secondary),
        ))
    } else {
        Line::from(Span::styled(
            format!(" {}", truncate_str(&state.status, width.saturating_sub(1))),
            Style::default().fg(theme.palette.fg_secondary),
        ))
    };
    frame.render_widget(Paragraph::new(message), rows[0]);

    let hints = Line::from(Span::styled(
        " Enter: toggle status  a: add book  h/l: column  Ctrl+r: reload covers  ?: help  q: quit",
        Style::default().fg(theme.palette.fg_secondary),
    ));
    frame.render_widget(Paragraph::new(hints), rows[1]);
}
