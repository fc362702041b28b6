use super::contrast::{best_text_color, contrast_ratio, luminance, MIN_CONTRAST};
use super::hsl::{hsl_to_rgb, rgb_to_hsl, Hsl};
use super::Rgb;
use serde::Serialize;

/// Tint fraction for dark dominant colors (luminance < 0.3).
const DARK_TINT: f64 = 0.9;
const LIGHT_TINT: f64 = 0.85;

/// Colors derived from a cover's dominant color for one book card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardPalette {
    pub dominant: Rgb,
    pub background_tint: Rgb,
    pub background_text: Rgb,
    pub button_background: Rgb,
    pub button_text: Rgb,
    pub accent_hue: Rgb,
}

impl CardPalette {
    /// Named style hooks, in application order.
    pub fn style_hooks(&self) -> Vec<(&'static str, String)> {
        vec![
            ("--hover-bg-color", self.background_tint.css()),
            ("--hover-text-color", self.background_text.css()),
            ("--hover-text-color-rgb", self.background_text.components()),
            ("--dominant-color", self.button_background.css()),
            ("--dominant-color-rgb", self.button_background.components()),
            ("--button-text-color", self.button_text.css()),
            ("--button-text-hue", self.accent_hue.css()),
        ]
    }
}

/// Lightness-shifted variant of `dominant` that stays readable on `background`.
///
/// Light backgrounds push the hue darker, dark ones lighter. When the first
/// adjustment misses [`MIN_CONTRAST`] the lightness is forced to an extreme
/// once; a remaining shortfall is accepted.
pub fn contrasting_hue(dominant: Rgb, background: Rgb) -> Rgb {
    let hsl = rgb_to_hsl(dominant);
    let light_background = luminance(background) > 0.5;

    let target = if light_background {
        (hsl.l * 0.3).max(0.15)
    } else {
        (hsl.l + (1.0 - hsl.l) * 0.7).min(0.85)
    };
    let adjusted = Hsl::new(hsl.h, (hsl.s * 1.2).min(0.8), target);
    let rgb = hsl_to_rgb(adjusted);
    if contrast_ratio(background, rgb) >= MIN_CONTRAST {
        return rgb;
    }

    let extreme = if light_background { 0.1 } else { 0.9 };
    let forced = hsl_to_rgb(adjusted.with_lightness(extreme));
    let ratio = contrast_ratio(background, forced);
    if ratio < MIN_CONTRAST {
        tracing::debug!(
            dominant = %dominant,
            background = %background,
            ratio = format!("{ratio:.2}"),
            "accent hue below minimum contrast"
        );
    }
    forced
}

pub fn derive_card_palette(dominant: Rgb) -> CardPalette {
    let lum = luminance(dominant);

    let tint_fraction = if lum < 0.3 { DARK_TINT } else { LIGHT_TINT };
    let background_tint = dominant.mix_toward_white(tint_fraction);
    let background_text = best_text_color(background_tint).color;

    let button_background = if lum < 0.2 {
        dominant.mix_toward_white(0.4)
    } else if lum > 0.8 {
        dominant.scale(0.6)
    } else {
        dominant
    };
    let button_text = best_text_color(button_background).color;

    CardPalette {
        dominant,
        background_tint,
        background_text,
        button_background,
        button_text,
        accent_hue: contrasting_hue(dominant, background_tint),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::contrast::TEXT_CANDIDATES;

    #[test]
    fn test_near_black_dominant() {
        let p = derive_card_palette(Rgb::new(10, 10, 10));
        // 10 + 245 * 0.9
        for c in [p.background_tint.r, p.background_tint.g, p.background_tint.b] {
            assert!((230..=231).contains(&c), "tint channel {c}");
        }
        assert_eq!(p.background_text, Rgb::BLACK);
        // Dark dominant: button lightened 40% toward white.
        assert_eq!(p.button_background, Rgb::new(108, 108, 108));
        assert!(contrast_ratio(p.button_background, p.button_text) >= MIN_CONTRAST);
    }

    #[test]
    fn test_near_white_dominant() {
        let dominant = Rgb::new(250, 250, 250);
        assert!(luminance(dominant) > 0.8);

        let p = derive_card_palette(dominant);
        assert_eq!(p.button_background, Rgb::new(150, 150, 150));
        assert_eq!(p.button_text, Rgb::BLACK);
        assert!(contrast_ratio(p.button_background, p.button_text) >= MIN_CONTRAST);
        assert!(contrast_ratio(p.background_tint, p.accent_hue) >= MIN_CONTRAST);
    }

    #[test]
    fn test_mid_luminance_keeps_dominant_button() {
        let dominant = Rgb::new(200, 120, 40);
        let lum = luminance(dominant);
        assert!((0.2..=0.8).contains(&lum));
        let p = derive_card_palette(dominant);
        assert_eq!(p.button_background, dominant);
    }

    #[test]
    fn test_text_colors_are_candidates() {
        for dominant in [
            Rgb::new(180, 20, 20),
            Rgb::new(20, 140, 60),
            Rgb::new(30, 30, 160),
            Rgb::new(249, 249, 249),
        ] {
            let p = derive_card_palette(dominant);
            assert!(TEXT_CANDIDATES.contains(&p.background_text));
            assert!(TEXT_CANDIDATES.contains(&p.button_text));
        }
    }

    #[test]
    fn test_contrasting_hue_on_light_background_is_darker() {
        let dominant = Rgb::new(40, 120, 220);
        let hue = contrasting_hue(dominant, Rgb::WHITE);
        assert!(luminance(hue) < luminance(dominant));
        assert!(contrast_ratio(Rgb::WHITE, hue) >= MIN_CONTRAST);
    }

    #[test]
    fn test_contrasting_hue_on_dark_background_is_lighter() {
        let dominant = Rgb::new(40, 120, 220);
        let hue = contrasting_hue(dominant, Rgb::BLACK);
        assert!(luminance(hue) > luminance(dominant));
        assert!(contrast_ratio(Rgb::BLACK, hue) >= MIN_CONTRAST);
    }

    #[test]
    fn test_contrasting_hue_keeps_hue() {
        let dominant = Rgb::new(200, 40, 40);
        let before = rgb_to_hsl(dominant);
        let after = rgb_to_hsl(contrasting_hue(dominant, Rgb::WHITE));
        assert!((before.h - after.h).abs() < 0.02);
    }

    #[test]
    fn test_contrasting_hue_accepts_shortfall_on_mid_gray() {
        let dominant = Rgb::new(40, 120, 220);
        let background = Rgb::new(180, 180, 180);
        assert!(luminance(background) <= 0.5);

        let hsl = rgb_to_hsl(dominant);
        let adjusted = Hsl::new(
            hsl.h,
            (hsl.s * 1.2).min(0.8),
            (hsl.l + (1.0 - hsl.l) * 0.7).min(0.85),
        );
        assert!(contrast_ratio(background, hsl_to_rgb(adjusted)) < MIN_CONTRAST);

        let hue = contrasting_hue(dominant, background);
        assert_eq!(hue, hsl_to_rgb(adjusted.with_lightness(0.9)));
        assert!(contrast_ratio(background, hue) < MIN_CONTRAST);
    }

    #[test]
    fn test_style_hooks() {
        let p = derive_card_palette(Rgb::new(250, 250, 250));
        let hooks = p.style_hooks();
        assert_eq!(hooks.len(), 7);
        assert_eq!(hooks[3], ("--dominant-color", "rgb(150, 150, 150)".to_string()));
        assert_eq!(hooks[4], ("--dominant-color-rgb", "150, 150, 150".to_string()));
        assert!(hooks.iter().all(|(name, _)| name.starts_with("--")));
    }
}
