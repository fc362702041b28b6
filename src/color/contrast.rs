//! WCAG relative luminance and contrast ratio.

use super::Rgb;

/// WCAG AA threshold for normal text.
pub const MIN_CONTRAST: f64 = 4.5;

/// Text colors a card may use, in preference order.
pub const TEXT_CANDIDATES: [Rgb; 5] = [
    Rgb::WHITE,
    Rgb::BLACK,
    Rgb::new(51, 51, 51),    // #333
    Rgb::new(204, 204, 204), // #ccc
    Rgb::new(34, 34, 34),    // #222
];

/// A text color together with the contrast it reaches on its background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextChoice {
    pub color: Rgb,
    pub ratio: f64,
}

impl TextChoice {
    pub fn meets_minimum(&self) -> bool {
        self.ratio >= MIN_CONTRAST
    }
}

fn linearize(channel: u8) -> f64 {
    let c = channel as f64 / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in [0, 1] (sRGB decode, BT.709 weights).
pub fn luminance(color: Rgb) -> f64 {
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// Contrast ratio in [1, 21]. Symmetric.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let (la, lb) = (luminance(a), luminance(b));
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// Pick the candidate with the highest contrast against `background`.
///
/// Falls back to the best available candidate when none reaches
/// [`MIN_CONTRAST`]; that case is only logged.
pub fn best_text_color(background: Rgb) -> TextChoice {
    let mut best = TextChoice {
        color: TEXT_CANDIDATES[0],
        ratio: 0.0,
    };
    for candidate in TEXT_CANDIDATES {
        let ratio = contrast_ratio(background, candidate);
        if ratio > best.ratio {
            best = TextChoice {
                color: candidate,
                ratio,
            };
        }
    }

    if !best.meets_minimum() {
        tracing::warn!(
            background = %background,
            ratio = format!("{:.2}", best.ratio),
            "low contrast text color"
        );
    }
    best
}
