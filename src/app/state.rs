use super::form::BookForm;
use crate::color::CardPalette;
use crate::library::{BookId, Library, ReadStatus};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: std::time::Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > std::time::Duration::from_secs(3)
    }
}

/// Selection within one status column.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnState {
    pub selected: usize,
    pub scroll_offset: usize,
}

impl ColumnState {
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    /// Keep the selection inside a list that may have shrunk.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
        self.scroll_offset = self.scroll_offset.min(self.selected);
    }

    pub fn update_scroll(&mut self, visible_items: usize) {
        if visible_items == 0 {
            return;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + visible_items {
            self.scroll_offset = self.selected - visible_items + 1;
        }
    }
}

/// How a card's cover is doing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoverState<'a> {
    None,
    Loading,
    Failed,
    Ready(&'a CardPalette),
}

pub struct AppState {
    pub should_quit: bool,
    pub tick: u64,
    pub show_help: bool,

    pub focus: ReadStatus,
    pub columns: [ColumnState; 3],
    /// Cards visible per column on the last draw.
    pub visible_cards: usize,

    /// Open while the add-book dialog is shown.
    pub form: Option<BookForm>,

    pub palettes: HashMap<BookId, CardPalette>,
    pub pending_covers: HashSet<BookId>,
    pub failed_covers: HashSet<BookId>,

    pub toast: Option<Toast>,
    pub status: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            tick: 0,
            show_help: false,
            focus: ReadStatus::Available,
            columns: [ColumnState::default(); 3],
            visible_cards: 5,
            form: None,
            palettes: HashMap::new(),
            pending_covers: HashSet::new(),
            failed_covers: HashSet::new(),
            toast: None,
            status: String::new(),
        }
    }

    pub fn column(&self, status: ReadStatus) -> &ColumnState {
        &self.columns[status.index()]
    }

    pub fn column_mut(&mut self, status: ReadStatus) -> &mut ColumnState {
        &mut self.columns[status.index()]
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.next().next();
    }

    /// Book under the cursor in the focused column.
    pub fn selected_book(&self, library: &Library) -> Option<BookId> {
        let selected = self.column(self.focus).selected;
        library.by_status(self.focus).nth(selected).map(|b| b.id())
    }

    pub fn clamp_columns(&mut self, library: &Library) {
        for status in ReadStatus::ALL {
            let len = library.count(status);
            self.column_mut(status).clamp(len);
        }
    }

    pub fn cover_state(&self, id: BookId, has_cover: bool) -> CoverState<'_> {
        if let Some(p) = self.palettes.get(&id) {
            CoverState::Ready(p)
        } else if self.pending_covers.contains(&id) {
            CoverState::Loading
        } else if has_cover && self.failed_covers.contains(&id) {
            CoverState::Failed
        } else {
            CoverState::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::NewBook;

    #[test]
    fn test_focus_wraps() {
        let mut s = AppState::new();
        s.focus_prev();
        assert_eq!(s.focus, ReadStatus::Finished);
        s.focus_next();
        assert_eq!(s.focus, ReadStatus::Available);
    }

    #[test]
    fn test_column_scroll() {
        let mut c = ColumnState::default();
        for _ in 0..7 {
            c.select_next(10);
            c.update_scroll(3);
        }
        assert_eq!(c.selected, 7);
        assert_eq!(c.scroll_offset, 5);
        c.select_next(8);
        assert_eq!(c.selected, 7);
        c.clamp(2);
        assert_eq!(c.selected, 1);
        assert!(c.scroll_offset <= 1);
    }

    #[test]
    fn test_selected_book_follows_focus() {
        let mut lib = Library::new();
        lib.add(NewBook::new("A", "x")).unwrap();
        let b = lib.add(NewBook::new("B", "y").status(ReadStatus::Reading)).unwrap();
        let c = lib.add(NewBook::new("C", "z").status(ReadStatus::Reading)).unwrap();

        let mut s = AppState::new();
        s.focus = ReadStatus::Reading;
        assert_eq!(s.selected_book(&lib), Some(b));
        s.column_mut(ReadStatus::Reading).select_next(2);
        assert_eq!(s.selected_book(&lib), Some(c));
        s.focus = ReadStatus::Finished;
        assert_eq!(s.selected_book(&lib), None);
    }
}
