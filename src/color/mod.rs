//! Cover colors: dominant color extraction and the contrast-aware card palette.

pub mod contrast;
pub mod extract;
pub mod hsl;
pub mod palette;

pub use extract::dominant_color_or_fallback;
pub use palette::{derive_card_palette, CardPalette};

use serde::Serialize;
use std::fmt;

/// 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from unit-range channels, rounding to the nearest integer.
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self::new(unit_to_channel(r), unit_to_channel(g), unit_to_channel(b))
    }

    /// `rgb(r, g, b)`
    pub fn css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Bare `r, g, b` components, for translucent overlays.
    pub fn components(self) -> String {
        format!("{}, {}, {}", self.r, self.g, self.b)
    }

    /// Move each channel `fraction` of the way toward white.
    pub fn mix_toward_white(self, fraction: f64) -> Self {
        let mix = |c: u8| {
            let c = c as f64;
            (c + (255.0 - c) * fraction).round().clamp(0.0, 255.0) as u8
        };
        Self::new(mix(self.r), mix(self.g), mix(self.b))
    }

    /// Multiply each channel by `factor`.
    pub fn scale(self, factor: f64) -> Self {
        let scale = |c: u8| (c as f64 * factor).round().clamp(0.0, 255.0) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

fn unit_to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_formatting() {
        let c = Rgb::new(12, 200, 7);
        assert_eq!(c.css(), "rgb(12, 200, 7)");
        assert_eq!(c.components(), "12, 200, 7");
        assert_eq!(c.to_string(), c.css());
    }

    #[test]
    fn test_mix_toward_white() {
        assert_eq!(Rgb::BLACK.mix_toward_white(0.4), Rgb::new(102, 102, 102));
        assert_eq!(Rgb::WHITE.mix_toward_white(0.9), Rgb::WHITE);
        assert_eq!(Rgb::new(100, 0, 255).mix_toward_white(0.0), Rgb::new(100, 0, 255));
    }

    #[test]
    fn test_scale() {
        assert_eq!(Rgb::new(250, 250, 250).scale(0.6), Rgb::new(150, 150, 150));
        assert_eq!(Rgb::WHITE.scale(1.0), Rgb::WHITE);
    }
}
