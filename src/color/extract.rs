//! Dominant color extraction over a sampled RGBA buffer.

use super::Rgb;
use std::collections::BTreeMap;
use thiserror::Error;

/// Used when nothing usable can be sampled.
pub const FALLBACK_COLOR: Rgb = Rgb::new(249, 249, 249);

/// Only every Nth pixel is sampled.
const SAMPLE_STEP: usize = 10;
/// Pixels below this alpha count as transparent.
const ALPHA_THRESHOLD: u8 = 128;
const BUCKET_WIDTH: u8 = 16;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("pixel buffer of {actual} bytes does not match {width}x{height} RGBA ({expected} bytes)")]
    BufferAccess {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("no opaque pixels sampled")]
    EmptySample,
}

/// Row-major RGBA8 pixels with known dimensions.
#[derive(Debug, Clone, Copy)]
pub struct RgbaView<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> RgbaView<'a> {
    pub fn new(width: u32, height: u32, data: &'a [u8]) -> Result<Self, ExtractError> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(ExtractError::BufferAccess {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn from_image(image: &'a image::RgbaImage) -> Result<Self, ExtractError> {
        Self::new(image.width(), image.height(), image.as_raw())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

#[derive(Debug, Default)]
struct ColorBucket {
    count: u32,
    r: u64,
    g: u64,
    b: u64,
}

impl ColorBucket {
    fn add(&mut self, px: &[u8]) {
        self.count += 1;
        self.r += px[0] as u64;
        self.g += px[1] as u64;
        self.b += px[2] as u64;
    }

    fn mean(&self) -> Rgb {
        let n = self.count as f64;
        let avg = |sum: u64| (sum as f64 / n).round() as u8;
        Rgb::new(avg(self.r), avg(self.g), avg(self.b))
    }
}

fn bucket_key(px: &[u8]) -> (u8, u8, u8) {
    let q = |c: u8| c / BUCKET_WIDTH * BUCKET_WIDTH;
    (q(px[0]), q(px[1]), q(px[2]))
}

/// Average color of the most populated quantization bucket.
///
/// Ties go to the lowest bucket key.
pub fn dominant_color(view: &RgbaView<'_>) -> Result<Rgb, ExtractError> {
    let mut buckets: BTreeMap<(u8, u8, u8), ColorBucket> = BTreeMap::new();

    for px in view.data.chunks_exact(4).step_by(SAMPLE_STEP) {
        if px[3] < ALPHA_THRESHOLD {
            continue;
        }
        buckets.entry(bucket_key(px)).or_default().add(px);
    }

    tracing::trace!(
        width = view.width(),
        height = view.height(),
        buckets = buckets.len(),
        "sampled pixels"
    );

    let mut best: Option<&ColorBucket> = None;
    for bucket in buckets.values() {
        if best.is_none_or(|b| bucket.count > b.count) {
            best = Some(bucket);
        }
    }

    best.map(ColorBucket::mean).ok_or(ExtractError::EmptySample)
}

/// Extraction boundary: never fails, degrades to [`FALLBACK_COLOR`].
pub fn dominant_color_or_fallback(image: &image::RgbaImage) -> Rgb {
    match RgbaView::from_image(image).and_then(|view| dominant_color(&view)) {
        Ok(color) => color,
        Err(e) => {
            tracing::warn!(error = %e, "could not extract color from image");
            FALLBACK_COLOR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_solid_image_returns_exact_color() {
        for c in [[37, 150, 201], [0, 0, 0], [255, 255, 255], [15, 16, 17]] {
            let img = RgbaImage::from_pixel(32, 20, Rgba([c[0], c[1], c[2], 255]));
            let view = RgbaView::from_image(&img).unwrap();
            assert_eq!(dominant_color(&view), Ok(Rgb::new(c[0], c[1], c[2])));
        }
    }

    #[test]
    fn test_transparent_image_falls_back() {
        let img = RgbaImage::from_pixel(16, 16, Rgba([200, 10, 10, 127]));
        let view = RgbaView::from_image(&img).unwrap();
        assert_eq!(dominant_color(&view), Err(ExtractError::EmptySample));
        assert_eq!(dominant_color_or_fallback(&img), FALLBACK_COLOR);
    }

    #[test]
    fn test_zero_size_image_falls_back() {
        let img = RgbaImage::new(0, 0);
        assert_eq!(dominant_color_or_fallback(&img), FALLBACK_COLOR);
    }

    #[test]
    fn test_buffer_size_mismatch() {
        let data = vec![0u8; 10];
        let err = RgbaView::new(2, 2, &data).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::BufferAccess {
                expected: 16,
                actual: 10,
                ..
            }
        ));
    }

    #[test]
    fn test_majority_bucket_wins_and_averages_raw_values() {
        // 100 pixels, every 10th sampled: indices 0,10,..,90.
        let mut data = Vec::new();
        for i in 0..100 {
            let px = if i % 30 == 0 {
                [250, 0, 0, 255]
            } else if i % 20 == 0 {
                [33, 65, 97, 255]
            } else {
                [34, 66, 98, 255]
            };
            data.extend_from_slice(&px);
        }
        let view = RgbaView::new(10, 10, &data).unwrap();
        // Sampled: 0,30,60,90 red; 20,40,80 first blue; 10,50,70 second blue.
        // Both blues share the (32,64,96) bucket with 6 samples.
        let c = dominant_color(&view).unwrap();
        assert_eq!(c, Rgb::new(34, 66, 98));
    }

    #[test]
    fn test_tie_goes_to_lowest_bucket() {
        let mut data = Vec::new();
        for i in 0..20 {
            let px = if i < 10 { [240, 240, 240, 255] } else { [10, 10, 10, 255] };
            data.extend_from_slice(&px);
        }
        // Samples at 0 (light) and 10 (dark): one each.
        let view = RgbaView::new(20, 1, &data).unwrap();
        assert_eq!(dominant_color(&view), Ok(Rgb::new(10, 10, 10)));
    }

    #[test]
    fn test_transparent_pixels_skipped() {
        let mut img = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 255, 255]));
        for (i, px) in img.pixels_mut().enumerate() {
            if i % 20 == 0 {
                *px = Rgba([255, 0, 0, 255]);
            } else if i % 10 == 0 {
                *px = Rgba([0, 255, 0, 0]);
            }
        }
        // Sampled opaque: red at 0,20,40,60,80; blue none; green transparent.
        assert_eq!(dominant_color_or_fallback(&img), Rgb::new(255, 0, 0));
    }
}
