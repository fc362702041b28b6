pub mod actions;
pub mod events;
pub mod form;
pub mod state;

use crate::config::Config;
use crate::covers;
use crate::input;
use crate::library::{BookError, BookId, Library};
use crate::tui::{self, TuiTerminal};
use actions::Action;
use events::{CoverEvent, Event};
use form::BookForm;
use state::{AppState, Toast};
use tokio::sync::mpsc;

pub struct App {
    cfg: Config,
    library: Library,
    state: AppState,
}

impl App {
    pub fn new(cfg: Config) -> Self {
        let library = if cfg.library.sample_books {
            Library::with_samples()
        } else {
            Library::new()
        };
        Self {
            cfg,
            library,
            state: AppState::new(),
        }
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(256);

        input::spawn_input_task(tx.clone(), self.cfg.input.mouse);
        input::spawn_tick_task(tx.clone());
        self.load_all_covers(&tx);

        tui::draw(terminal, &self.cfg, &self.library, &mut self.state)?;

        while let Some(ev) = rx.recv().await {
            match ev {
                Event::Input(input_ev) => {
                    if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                        self.handle_action(action, &tx);
                    }
                }
                Event::Cover(ce) => self.handle_cover(ce),
                Event::Tick => {}
            }

            if self.state.should_quit {
                break;
            }

            tui::draw(terminal, &self.cfg, &self.library, &mut self.state)?;
        }

        Ok(())
    }

    fn handle_action(&mut self, action: Action, tx: &mpsc::Sender<Event>) {
        match action {
            Action::SubmitForm => self.submit_form(tx),
            Action::ReloadCovers => {
                self.load_all_covers(tx);
                self.state.status = "Reloading covers...".into();
            }
            _ => self.reduce(action),
        }
    }

    /// Pure state transitions; nothing here spawns work.
    fn reduce(&mut self, action: Action) {
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::Resize => {}
            Action::ToggleHelp => self.state.show_help = !self.state.show_help,
            Action::FocusNext => self.state.focus_next(),
            Action::FocusPrev => self.state.focus_prev(),
            Action::FocusColumn(status) => self.state.focus = status,
            Action::ListUp => {
                let visible = self.state.visible_cards;
                let col = self.state.column_mut(self.state.focus);
                col.select_prev();
                col.update_scroll(visible);
            }
            Action::ListDown => {
                let len = self.library.count(self.state.focus);
                let visible = self.state.visible_cards;
                let col = self.state.column_mut(self.state.focus);
                col.select_next(len);
                col.update_scroll(visible);
            }
            Action::GoTop => {
                let col = self.state.column_mut(self.state.focus);
                col.selected = 0;
                col.scroll_offset = 0;
            }
            Action::GoBottom => {
                let len = self.library.count(self.state.focus);
                let visible = self.state.visible_cards;
                let col = self.state.column_mut(self.state.focus);
                col.selected = len.saturating_sub(1);
                col.update_scroll(visible);
            }
            Action::ToggleStatus => self.toggle_selected(),
            Action::OpenForm => self.state.form = Some(BookForm::new()),
            Action::CloseForm => self.state.form = None,
            Action::FormNextField => self.with_form(BookForm::next_field),
            Action::FormPrevField => self.with_form(BookForm::prev_field),
            Action::FormInput(c) => self.with_form(|f| f.input(c)),
            Action::FormBackspace => self.with_form(BookForm::backspace),
            Action::FormCycleStatus => self.with_form(BookForm::cycle_status),
            // handled in handle_action
            Action::SubmitForm | Action::ReloadCovers => {}
        }
    }

    fn with_form(&mut self, f: impl FnOnce(&mut BookForm)) {
        if let Some(form) = self.state.form.as_mut() {
            f(form);
        }
    }

    fn toggle_selected(&mut self) {
        let Some(id) = self.state.selected_book(&self.library) else {
            self.state.status = "Nothing selected".into();
            return;
        };
        match self.library.toggle_status(id) {
            Ok(status) => {
                if let Some(book) = self.library.get(id) {
                    self.state.status = format!("\"{}\" moved to {}", book.title(), status.label());
                }
                self.state.clamp_columns(&self.library);
            }
            Err(e) => self.state.toast = Some(Toast::error(e.to_string())),
        }
    }

    fn submit_form(&mut self, tx: &mpsc::Sender<Event>) {
        let Some(form) = self.state.form.as_ref() else {
            return;
        };

        let added = form
            .to_new_book()
            .and_then(|new| self.library.add(new));
        match added {
            Ok(id) => {
                self.state.form = None;
                if let Some(book) = self.library.get(id) {
                    self.state.toast = Some(Toast::success(format!("Added \"{}\"", book.title())));
                }
                self.load_cover(id, tx);
            }
            Err(e) => {
                tracing::debug!(error = %e, "add book rejected");
                let msg = match e {
                    BookError::MissingTitle | BookError::MissingAuthor => {
                        "Title and author are required fields.".to_string()
                    }
                    other => other.to_string(),
                };
                self.state.toast = Some(Toast::error(msg));
            }
        }
    }

    fn load_all_covers(&mut self, tx: &mpsc::Sender<Event>) {
        let ids: Vec<BookId> = self.library.iter().map(|b| b.id()).collect();
        for id in ids {
            self.load_cover(id, tx);
        }
    }

    fn load_cover(&mut self, id: BookId, tx: &mpsc::Sender<Event>) {
        let Some(cover) = self.library.get(id).and_then(|b| b.cover()) else {
            return;
        };
        let path = covers::resolve(cover, &self.cfg.paths.covers_dir);
        self.state.pending_covers.insert(id);
        covers::spawn_extraction(tx.clone(), id, path);
    }

    fn handle_cover(&mut self, ev: CoverEvent) {
        match ev {
            CoverEvent::Extracted { book_id, palette } => {
                self.state.pending_covers.remove(&book_id);
                self.state.failed_covers.remove(&book_id);
                self.state.palettes.insert(book_id, palette);
            }
            CoverEvent::Failed { book_id, error } => {
                self.state.pending_covers.remove(&book_id);
                self.state.failed_covers.insert(book_id);
                tracing::debug!(%book_id, %error, "keeping default card style");
            }
        }
        if self.state.pending_covers.is_empty() && self.state.status.starts_with("Reloading") {
            self.state.status = "Covers reloaded".into();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{derive_card_palette, Rgb};
    use crate::library::{NewBook, ReadStatus};

    fn app() -> App {
        let mut cfg = Config::default();
        cfg.library.sample_books = false;
        App::new(cfg)
    }

    #[test]
    fn test_toggle_selected_moves_book() {
        let mut app = app();
        let id = app.library.add(NewBook::new("A", "x")).unwrap();
        app.library.add(NewBook::new("B", "y")).unwrap();
        app.state.column_mut(ReadStatus::Available).selected = 1;

        app.reduce(Action::ListUp);
        app.reduce(Action::ToggleStatus);
        assert_eq!(app.library.get(id).unwrap().status(), ReadStatus::Reading);
        assert_eq!(app.state.column(ReadStatus::Available).selected, 0);
    }

    #[test]
    fn test_toggle_last_card_clamps_selection() {
        let mut app = app();
        app.library.add(NewBook::new("A", "x")).unwrap();
        let b = app.library.add(NewBook::new("B", "y")).unwrap();
        app.reduce(Action::GoBottom);
        app.reduce(Action::ToggleStatus);
        assert_eq!(app.library.get(b).unwrap().status(), ReadStatus::Reading);
        assert_eq!(app.state.column(ReadStatus::Available).selected, 0);
    }

    #[test]
    fn test_toggle_empty_column() {
        let mut app = app();
        app.reduce(Action::ToggleStatus);
        assert_eq!(app.state.status, "Nothing selected");
    }

    #[test]
    fn test_form_editing_through_actions() {
        let mut app = app();
        app.reduce(Action::OpenForm);
        for c in "Dune".chars() {
            app.reduce(Action::FormInput(c));
        }
        app.reduce(Action::FormNextField);
        app.reduce(Action::FormInput('F'));
        app.reduce(Action::FormBackspace);
        let form = app.state.form.as_ref().unwrap();
        assert_eq!(form.title, "Dune");
        assert!(form.author.is_empty());

        app.reduce(Action::CloseForm);
        assert!(app.state.form.is_none());
    }

    #[test]
    fn test_submit_form() {
        let mut app = app();
        let (tx, _rx) = mpsc::channel(8);

        app.reduce(Action::OpenForm);
        app.handle_action(Action::SubmitForm, &tx);
        assert!(app.state.form.is_some());
        assert!(app.library.is_empty());

        if let Some(form) = app.state.form.as_mut() {
            form.title = "Dune".into();
            form.author = "Frank Herbert".into();
            form.status = ReadStatus::Reading;
        }
        app.handle_action(Action::SubmitForm, &tx);
        assert!(app.state.form.is_none());
        assert_eq!(app.library.count(ReadStatus::Reading), 1);
        assert!(app.state.pending_covers.is_empty());
    }

    #[test]
    fn test_cover_events_overwrite_palette() {
        let mut app = app();
        let id = app.library.add(NewBook::new("A", "x").cover("a.png")).unwrap();
        app.state.pending_covers.insert(id);

        app.handle_cover(CoverEvent::Failed {
            book_id: id,
            error: "nope".into(),
        });
        assert!(app.state.failed_covers.contains(&id));

        let first = derive_card_palette(Rgb::new(10, 10, 10));
        let second = derive_card_palette(Rgb::new(200, 40, 40));
        app.handle_cover(CoverEvent::Extracted { book_id: id, palette: first });
        app.handle_cover(CoverEvent::Extracted { book_id: id, palette: second });
        assert_eq!(app.state.palettes.get(&id), Some(&second));
        assert!(!app.state.failed_covers.contains(&id));
    }
}
