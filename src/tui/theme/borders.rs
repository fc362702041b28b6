//! Border styles

use ratatui::symbols::border;

/// Rounded borders, thick for the focused column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BorderStyle;

impl BorderStyle {
    pub fn to_border_set() -> border::Set<'static> {
        border::ROUNDED
    }

    pub fn for_focus(focused: bool) -> border::Set<'static> {
        if focused { border::THICK } else { border::ROUNDED }
    }
}
