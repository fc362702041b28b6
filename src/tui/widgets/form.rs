//! Add-book dialog

use super::centered_rect;
use crate::app::form::{BookForm, FormField};
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const LABEL_WIDTH: usize = 16;

pub fn render(frame: &mut Frame, theme: &Theme, form: &BookForm, area: Rect) {
    let rect = centered_rect(64, 13, area);
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.accent))
        .title(format!(" {} Add book ", theme.icons.add))
        .title_style(
            Style::default()
                .fg(theme.palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(theme.palette.bg_primary));

    let mut lines = vec![Line::default()];
    for field in FormField::ALL {
        lines.push(field_line(theme, form, field));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "  Cover paths are relative to the covers directory",
        Style::default().fg(theme.palette.fg_secondary),
    )));
    lines.push(Line::default());
    lines.push(Line::from(vec![
        hint("Enter", theme),
        Span::styled(" save  ", Style::default().fg(theme.palette.fg_secondary)),
        hint("Tab", theme),
        Span::styled(" next field  ", Style::default().fg(theme.palette.fg_secondary)),
        hint("Esc", theme),
        Span::styled(" cancel", Style::default().fg(theme.palette.fg_secondary)),
    ]));

    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

fn field_line(theme: &Theme, form: &BookForm, field: FormField) -> Line<'static> {
    let focused = form.field == field;
    let label_style = if focused {
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.palette.fg_secondary)
    };

    let value = match field {
        FormField::Status if focused => format!("◀ {} ▶", form.value(field)),
        FormField::Status => form.value(field).to_string(),
        _ if focused => format!("{}▏", form.value(field)),
        _ => form.value(field).to_string(),
    };
    let value_style = if focused {
        Style::default()
            .fg(theme.palette.fg_primary)
            .bg(theme.palette.bg_highlight)
    } else {
        Style::default().fg(theme.palette.fg_primary)
    };

    let marker = if focused { theme.icons.selected } else { theme.icons.unselected };
    Line::from(vec![
        Span::styled(format!(" {marker} "), label_style),
        Span::styled(format!("{:width$}", field.label(), width = LABEL_WIDTH), label_style),
        Span::styled(value, value_style),
    ])
}

fn hint(key: &'static str, theme: &Theme) -> Span<'static> {
    Span::styled(
        key,
        Style::default()
            .fg(theme.palette.accent_alt)
            .add_modifier(Modifier::BOLD),
    )
}
