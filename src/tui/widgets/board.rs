//! Status columns with one card per book.

use super::truncate_str;
use crate::app::state::{AppState, CoverState};
use crate::color::derive_card_palette;
use crate::library::{Book, Library, ReadStatus};
use crate::tui::theme::{BorderStyle, LoadingSpinner, Theme};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Lines per card including the spacer.
const CARD_HEIGHT: u16 = 4;

pub fn render(frame: &mut Frame, theme: &Theme, library: &Library, state: &mut AppState, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    // Borders take two rows.
    state.visible_cards = (area.height.saturating_sub(2) / CARD_HEIGHT).max(1) as usize;

    for (status, col_area) in ReadStatus::ALL.into_iter().zip(cols.iter()) {
        let visible = state.visible_cards;
        state.column_mut(status).update_scroll(visible);
        render_column(frame, theme, library, state, status, *col_area);
    }
}

fn render_column(
    frame: &mut Frame,
    theme: &Theme,
    library: &Library,
    state: &AppState,
    status: ReadStatus,
    area: Rect,
) {
    let focused = state.focus == status;
    let count = library.count(status);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(BorderStyle::for_focus(focused))
        .border_style(Style::default().fg(if focused {
            theme.palette.accent
        } else {
            theme.palette.border
        }))
        .title(format!(" {} {} ({}) ", theme.icons.column(status), status.label(), count))
        .title_style(Style::default().fg(theme.palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if count == 0 {
        let empty = Paragraph::new(Line::from("No books here"))
            .style(Style::default().fg(theme.palette.fg_secondary));
        frame.render_widget(empty, inner);
        return;
    }

    let column = state.column(status);
    let width = inner.width as usize;
    let items: Vec<ListItem> = library
        .by_status(status)
        .enumerate()
        .skip(column.scroll_offset)
        .take(state.visible_cards)
        .map(|(i, book)| {
            let selected = focused && i == column.selected;
            card(theme, state, book, selected, width)
        })
        .collect();

    frame.render_widget(List::new(items), inner);

    if count > state.visible_cards {
        let pos_text = format!("{}/{}", column.selected + 1, count);
        let pos_len = pos_text.len() as u16;
        let pos_x = inner.x + inner.width.saturating_sub(pos_len);
        if pos_x > inner.x {
            frame.render_widget(
                Paragraph::new(pos_text).style(Style::default().fg(theme.palette.fg_secondary)),
                Rect::new(pos_x, inner.y, pos_len, 1),
            );
        }
    }
}

fn card(theme: &Theme, state: &AppState, book: &Book, selected: bool, width: usize) -> ListItem<'static> {
    let icons = &theme.icons;
    let cover = state.cover_state(book.id(), book.cover().is_some());

    let (palette, swatch) = match cover {
        CoverState::Ready(p) => (*p, Some(p.dominant)),
        _ => (derive_card_palette(theme.palette.card_default), None),
    };

    let base = if selected {
        Style::default()
            .bg(Color::from(palette.background_tint))
            .fg(Color::from(palette.background_text))
    } else {
        Style::default().fg(theme.palette.fg_primary)
    };
    let title_style = if selected && swatch.is_some() {
        base.fg(Color::from(palette.accent_hue)).add_modifier(Modifier::BOLD)
    } else {
        base.add_modifier(Modifier::BOLD)
    };
    let button_style = Style::default()
        .bg(Color::from(palette.button_background))
        .fg(Color::from(palette.button_text))
        .add_modifier(Modifier::BOLD);

    let cover_icon = match cover {
        CoverState::Ready(_) => icons.cover,
        CoverState::Loading => LoadingSpinner::frame(state.tick),
        CoverState::Failed => icons.broken_cover,
        CoverState::None => icons.no_cover,
    };
    let prefix = if selected { icons.selected } else { icons.unselected };
    let text_width = width.saturating_sub(4);

    let mut byline = format!("by {}", book.author());
    if let Some(year) = book.year_published() {
        byline.push_str(&format!(" · {year}"));
    }

    let mut action = vec![
        Span::styled("    ", base),
        Span::styled(format!(" {} ", book.status().action_label()), button_style),
    ];
    if let Some(dominant) = swatch {
        action.push(Span::styled(" ", base));
        action.push(Span::styled(icons.swatch, Style::default().fg(Color::from(dominant))));
    }

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{prefix} {cover_icon} "), base),
            Span::styled(truncate_str(book.title(), text_width), title_style),
        ]),
        Line::from(Span::styled(
            format!("    {}", truncate_str(&byline, text_width)),
            base.add_modifier(Modifier::ITALIC),
        )),
        Line::from(action),
        Line::default(),
    ];

    ListItem::new(Text::from(lines)).style(base)
}
