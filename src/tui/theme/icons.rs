//! Nerd Font icons for TUI display
//! Requires a Nerd Font to be installed (https://www.nerdfonts.com)

#[derive(Debug, Clone)]
pub struct Icons {
    // Columns
    pub available: &'static str,
    pub reading: &'static str,
    pub finished: &'static str,

    // Cards
    pub cover: &'static str,
    pub no_cover: &'static str,
    pub broken_cover: &'static str,
    pub swatch: &'static str,

    // Actions
    pub add: &'static str,
    pub help: &'static str,

    // Status
    pub success: &'static str,
    pub error: &'static str,

    // Selection
    pub selected: &'static str,
    pub unselected: &'static str,
}

impl Icons {
    pub const fn nerd() -> Self {
        Self {
            available: "\u{f02d}",     // nf-fa-book
            reading: "\u{f518}",       // nf-fa-book_open
            finished: "\u{f00c}",      // nf-fa-check

            cover: "\u{f03e}",         // nf-fa-image
            no_cover: "\u{f15b}",      // nf-fa-file
            broken_cover: "\u{f071}",  // nf-fa-warning
            swatch: "█",

            add: "\u{f067}",           // nf-fa-plus
            help: "\u{f059}",          // nf-fa-question_circle

            success: "\u{f00c}",       // nf-fa-check
            error: "\u{f00d}",         // nf-fa-times

            selected: "\u{f054}",      // nf-fa-chevron_right
            unselected: " ",
        }
    }

    pub fn column(&self, status: crate::library::ReadStatus) -> &'static str {
        use crate::library::ReadStatus;
        match status {
            ReadStatus::Available => self.available,
            ReadStatus::Reading => self.reading,
            ReadStatus::Finished => self.finished,
        }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::nerd()
    }
}

/// Loading spinner frames
pub struct LoadingSpinner;

impl LoadingSpinner {
    /// Braille-based smooth spinner
    pub const BRAILLE: [&'static str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

    pub fn frame(tick: u64) -> &'static str {
        let idx = tick as usize % Self::BRAILLE.len();
        Self::BRAILLE[idx]
    }
}
