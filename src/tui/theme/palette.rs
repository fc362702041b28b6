//! UI palettes. Card colors come from covers; these are the defaults around them.

use crate::color::Rgb;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color,
    pub bg_highlight: Color,
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub border: Color,
    pub success: Color,
    pub error: Color,
    /// Card background when no cover palette is known.
    pub card_default: Rgb,
}

impl Palette {
    /// Monochrome palette - black, white and grays
    pub const MONO: Self = Self {
        bg_primary: Color::Rgb(0, 0, 0),
        bg_highlight: Color::Rgb(48, 48, 48),     // #303030
        fg_primary: Color::Rgb(255, 255, 255),
        fg_secondary: Color::Rgb(136, 136, 136),  // #888888
        accent: Color::Rgb(255, 255, 255),
        accent_alt: Color::Rgb(200, 200, 200),    // #c8c8c8
        border: Color::Rgb(64, 64, 64),           // #404040
        success: Color::Rgb(255, 255, 255),
        error: Color::Rgb(255, 255, 255),
        card_default: Rgb::new(18, 18, 18),
    };

    /// Light palette matching the cover tints.
    pub const PAPER: Self = Self {
        bg_primary: Color::Rgb(249, 249, 249),
        bg_highlight: Color::Rgb(230, 230, 230),
        fg_primary: Color::Rgb(34, 34, 34),
        fg_secondary: Color::Rgb(110, 110, 110),
        accent: Color::Rgb(51, 51, 51),
        accent_alt: Color::Rgb(90, 90, 90),
        border: Color::Rgb(204, 204, 204),
        success: Color::Rgb(30, 110, 50),
        error: Color::Rgb(170, 30, 30),
        card_default: Rgb::new(255, 255, 255),
    };

    pub fn by_name(name: &str) -> Self {
        match name {
            "paper" | "light" => Self::PAPER,
            _ => Self::MONO,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::MONO
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb(c.r, c.g, c.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::contrast::{best_text_color, MIN_CONTRAST};

    #[test]
    fn test_by_name() {
        assert_eq!(Palette::by_name("paper").card_default, Palette::PAPER.card_default);
        assert_eq!(Palette::by_name("whatever").card_default, Palette::MONO.card_default);
    }

    #[test]
    fn test_default_cards_have_readable_text() {
        for p in [Palette::MONO, Palette::PAPER] {
            assert!(best_text_color(p.card_default).ratio >= MIN_CONTRAST);
        }
    }

    #[test]
    fn test_rgb_into_color() {
        assert_eq!(Color::from(Rgb::new(1, 2, 3)), Color::Rgb(1, 2, 3));
    }
}
