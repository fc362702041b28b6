use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::form::FormField;
use crate::app::state::AppState;
use crate::library::ReadStatus;
use crossterm::event::{self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};
use std::time::Duration;
use tokio::sync::mpsc;

/// Interval between [`Event::Tick`]s, also the input poll timeout.
pub const TICK_RATE: Duration = Duration::from_millis(250);

pub fn spawn_input_task(tx: mpsc::Sender<Event>, mouse_enabled: bool) {
    tokio::task::spawn_blocking(move || {
        // Runtime shutdown waits on this task; exit once the receiver is gone.
        while !tx.is_closed() {
            if event::poll(TICK_RATE).unwrap_or(false) {
                let ev = match event::read() {
                    Ok(CtEvent::Key(k)) if k.kind == KeyEventKind::Press => InputEvent::Key(k),
                    Ok(CtEvent::Mouse(m)) if mouse_enabled => InputEvent::Mouse(m),
                    Ok(CtEvent::Resize(_, _)) => InputEvent::Resize,
                    Ok(_) | Err(_) => continue,
                };
                if tx.blocking_send(Event::Input(ev)).is_err() {
                    break;
                }
            }
        }
    });
}

/// Redraw ticks so spinners keep moving between input events.
pub fn spawn_tick_task(tx: mpsc::Sender<Event>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_RATE);
        loop {
            interval.tick().await;
            if tx.send(Event::Tick).await.is_err() {
                break;
            }
        }
    });
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Mouse(m) => match m.kind {
            MouseEventKind::ScrollUp if state.form.is_none() => Some(Action::ListUp),
            MouseEventKind::ScrollDown if state.form.is_none() => Some(Action::ListDown),
            _ => None,
        },
        InputEvent::Key(k) => {
            if let Some(form) = &state.form {
                handle_form(form.field, k)
            } else if state.show_help {
                handle_help(k)
            } else {
                handle_board(k)
            }
        }
    }
}

fn handle_form(field: FormField, k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Esc => Some(Action::CloseForm),
        KeyCode::Enter => Some(Action::SubmitForm),
        KeyCode::Tab | KeyCode::Down => Some(Action::FormNextField),
        KeyCode::BackTab | KeyCode::Up => Some(Action::FormPrevField),
        KeyCode::Backspace => Some(Action::FormBackspace),
        KeyCode::Left | KeyCode::Right if field == FormField::Status => Some(Action::FormCycleStatus),
        KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::CloseForm),
        KeyCode::Char(c) => Some(Action::FormInput(c)),
        _ => None,
    }
}

fn handle_help(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::F(1) => Some(Action::ToggleHelp),
        _ => None,
    }
}

fn handle_board(k: KeyEvent) -> Option<Action> {
    match k.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),

        // Navigation - vim style
        KeyCode::Up | KeyCode::Char('k') => Some(Action::ListUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ListDown),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::GoTop),
        KeyCode::Char('G') | KeyCode::End => Some(Action::GoBottom),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => Some(Action::FocusPrev),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::Char('1') => Some(Action::FocusColumn(ReadStatus::Available)),
        KeyCode::Char('2') => Some(Action::FocusColumn(ReadStatus::Reading)),
        KeyCode::Char('3') => Some(Action::FocusColumn(ReadStatus::Finished)),

        // Books
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('t') => Some(Action::ToggleStatus),
        KeyCode::Char('a') | KeyCode::Char('n') => Some(Action::OpenForm),

        KeyCode::Char('r') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::ReloadCovers),
        KeyCode::F(5) => Some(Action::ReloadCovers),
        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::ToggleHelp),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::form::BookForm;

    #[test]
    fn test_input_task_stops_with_receiver() {
        let (done_tx, done_rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(1)
                .build()
                .unwrap();
            rt.block_on(async {
                let (tx, rx) = mpsc::channel::<Event>(1);
                spawn_input_task(tx, false);
                drop(rx);
            });
            drop(rt);
            let _ = done_tx.send(());
        });
        assert!(done_rx.recv_timeout(Duration::from_secs(3)).is_ok());
    }

    #[tokio::test]
    async fn test_tick_task_sends_ticks() {
        let (tx, mut rx) = mpsc::channel(4);
        spawn_tick_task(tx);
        for _ in 0..2 {
            let ev = tokio::time::timeout(Duration::from_secs(2), rx.recv()).await.unwrap();
            assert!(matches!(ev, Some(Event::Tick)));
        }
    }

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> InputEvent {
        InputEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn test_board_keys() {
        let state = AppState::new();
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('j'))), Some(Action::ListDown));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Enter)), Some(Action::ToggleStatus));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('a'))), Some(Action::OpenForm));
        assert_eq!(
            map_input_to_action(&state, key(KeyCode::Char('3'))),
            Some(Action::FocusColumn(ReadStatus::Finished))
        );
        assert_eq!(map_input_to_action(&state, ctrl('r')), Some(Action::ReloadCovers));
    }

    #[test]
    fn test_form_captures_text() {
        let mut state = AppState::new();
        state.form = Some(BookForm::new());
        assert_eq!(
            map_input_to_action(&state, key(KeyCode::Char('q'))),
            Some(Action::FormInput('q'))
        );
        assert_eq!(map_input_to_action(&state, key(KeyCode::Esc)), Some(Action::CloseForm));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Enter)), Some(Action::SubmitForm));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Left)), None);
    }

    #[test]
    fn test_form_status_field_arrows() {
        let mut state = AppState::new();
        let mut form = BookForm::new();
        form.field = FormField::Status;
        state.form = Some(form);
        assert_eq!(
            map_input_to_action(&state, key(KeyCode::Right)),
            Some(Action::FormCycleStatus)
        );
    }

    #[test]
    fn test_help_overlay() {
        let mut state = AppState::new();
        state.show_help = true;
        assert_eq!(map_input_to_action(&state, key(KeyCode::Esc)), Some(Action::ToggleHelp));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('j'))), None);
    }
}
