use crate::color::CardPalette;
use crate::library::BookId;

#[derive(Debug, Clone)]
pub enum Event {
    Input(InputEvent),
    Cover(CoverEvent),
    /// Periodic redraw.
    Tick,
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize,
}

#[derive(Debug, Clone)]
pub enum CoverEvent {
    Extracted { book_id: BookId, palette: CardPalette },
    Failed { book_id: BookId, error: String },
}
