//! Brightness adjustment.
//!
//! Three interchangeable algorithms: a linear additive offset, a
//! gamma-corrected lookup table applied with chunked parallelism, and an
//! adaptive mode that scales the requested value by the image's average
//! luminance before falling through to linear.

use rayon::prelude::*;

use crate::color::{clamp_u8, luminance_u8};
use crate::error::{check_range, ProcessError};
use crate::raster::{RasterImage, BYTES_PER_PIXEL};

/// Average luminance below which an image counts as dark.
const DARK_THRESHOLD: f32 = 0.3;

/// Average luminance above which an image counts as bright.
const BRIGHT_THRESHOLD: f32 = 0.7;

/// Brightness adjustment algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrightnessMode {
    /// Global additive shift.
    #[default]
    Linear,
    /// Gamma-corrected lookup table, more natural on midtones.
    Gamma,
    /// Scales the requested value by the image's average luminance.
    Adaptive,
}

/// Apply a linear brightness adjustment. Range [-1, 1], neutral 0.
pub fn apply_brightness(image: &RasterImage, value: f32) -> Result<RasterImage, ProcessError> {
    apply_brightness_mode(image, value, BrightnessMode::Linear)
}

/// Apply a brightness adjustment with an explicit algorithm.
pub fn apply_brightness_mode(
    image: &RasterImage,
    value: f32,
    mode: BrightnessMode,
) -> Result<RasterImage, ProcessError> {
    image.validate()?;
    check_range("brightness", value, -1.0, 1.0)?;
    if value == 0.0 {
        return Ok(image.clone());
    }

    Ok(match mode {
        BrightnessMode::Linear => linear(image, value),
        BrightnessMode::Gamma => gamma(image, value),
        BrightnessMode::Adaptive => linear(image, adaptive_value(image, value)),
    })
}

/// Additive shift of every channel by value * 255.
fn linear(image: &RasterImage, value: f32) -> RasterImage {
    let offset = value * 255.0;
    image.map_rgb(|r, g, b| {
        (
            clamp_u8(r as f32 + offset),
            clamp_u8(g as f32 + offset),
            clamp_u8(b as f32 + offset),
        )
    })
}

/// Gamma-corrected adjustment through a 256-entry LUT.
///
/// gamma = 1/(1+v) for v >= 0 (brighten), 1-v for v < 0 (darken). The LUT
/// application is chunked across rows with rayon since it is the hottest
/// per-pixel loop in the adjustment set.
fn gamma(image: &RasterImage, value: f32) -> RasterImage {
    let g = if value >= 0.0 {
        1.0 / (1.0 + value)
    } else {
        1.0 - value
    };

    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        *entry = clamp_u8(255.0 * (i as f32 / 255.0).powf(g));
    }

    let mut out = image.clone();
    let row_bytes = image.width as usize * BYTES_PER_PIXEL;
    out.pixels.par_chunks_mut(row_bytes).for_each(|row| {
        for chunk in row.chunks_exact_mut(BYTES_PER_PIXEL) {
            chunk[0] = lut[chunk[0] as usize];
            chunk[1] = lut[chunk[1] as usize];
            chunk[2] = lut[chunk[2] as usize];
        }
    });
    out
}

/// Scale the requested brightness by where the image's average luminance
/// sits: dark images get a stronger push, bright ones a gentler one.
fn adaptive_value(image: &RasterImage, value: f32) -> f32 {
    let avg = average_luminance(image);
    if avg < DARK_THRESHOLD {
        value * 1.2
    } else if avg > BRIGHT_THRESHOLD {
        value * 0.8
    } else {
        value
    }
}

/// Mean perceptual luminance of the image, normalized to [0, 1].
fn average_luminance(image: &RasterImage) -> f32 {
    let mut total = 0.0f64;
    for chunk in image.pixels.chunks_exact(BYTES_PER_PIXEL) {
        total += f64::from(luminance_u8(chunk[0], chunk[1], chunk[2]));
    }
    (total / image.pixel_count() as f64 / 255.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_2x2() -> RasterImage {
        RasterImage::new(
            2,
            2,
            vec![
                255, 0, 0, 255, // red
                0, 255, 0, 255, // green
                0, 0, 255, 255, // blue
                255, 255, 255, 255, // white
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_neutral_identity() {
        let img = image_2x2();
        let out = apply_brightness(&img, 0.0).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_linear_concrete_values() {
        // +0.2 adds round(0.2 * 255) = 51 to each channel, clamped at 255.
        let img = image_2x2();
        let out = apply_brightness(&img, 0.2).unwrap();
        assert_eq!(out.get_pixel(0, 0), Some([255, 51, 51, 255]));
        assert_eq!(out.get_pixel(1, 0), Some([51, 255, 51, 255]));
        assert_eq!(out.get_pixel(0, 1), Some([51, 51, 255, 255]));
        assert_eq!(out.get_pixel(1, 1), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_linear_negative_darkens() {
        let img = RasterImage::filled(2, 2, [100, 100, 100, 255]).unwrap();
        let out = apply_brightness(&img, -0.2).unwrap();
        assert_eq!(out.get_pixel(0, 0), Some([49, 49, 49, 255]));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let img = image_2x2();
        assert!(apply_brightness(&img, 1.5).is_err());
        assert!(apply_brightness(&img, -1.5).is_err());
        assert!(apply_brightness(&img, f32::NAN).is_err());
    }

    #[test]
    fn test_gamma_brightens_midtones() {
        let img = RasterImage::filled(4, 4, [128, 128, 128, 255]).unwrap();
        let out = apply_brightness_mode(&img, 0.5, BrightnessMode::Gamma).unwrap();
        let [r, _, _, _] = out.get_pixel(0, 0).unwrap();
        assert!(r > 128, "midtone should brighten, got {}", r);
    }

    #[test]
    fn test_gamma_preserves_extremes() {
        // Gamma maps 0 -> 0 and 255 -> 255 for any exponent.
        let img = RasterImage::new(2, 1, vec![0, 0, 0, 255, 255, 255, 255, 255]).unwrap();
        let out = apply_brightness_mode(&img, 0.7, BrightnessMode::Gamma).unwrap();
        assert_eq!(out.get_pixel(0, 0), Some([0, 0, 0, 255]));
        assert_eq!(out.get_pixel(1, 0), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_gamma_darkens_with_negative_value() {
        let img = RasterImage::filled(2, 2, [128, 128, 128, 255]).unwrap();
        let out = apply_brightness_mode(&img, -0.5, BrightnessMode::Gamma).unwrap();
        let [r, _, _, _] = out.get_pixel(0, 0).unwrap();
        assert!(r < 128, "midtone should darken, got {}", r);
    }

    #[test]
    fn test_adaptive_boosts_dark_images() {
        // Average luminance well below 0.3: adaptive scales value by 1.2.
        let dark = RasterImage::filled(2, 2, [20, 20, 20, 255]).unwrap();
        let adaptive = apply_brightness_mode(&dark, 0.5, BrightnessMode::Adaptive).unwrap();
        let plain = apply_brightness(&dark, 0.5).unwrap();
        let [ra, _, _, _] = adaptive.get_pixel(0, 0).unwrap();
        let [rp, _, _, _] = plain.get_pixel(0, 0).unwrap();
        assert!(ra > rp, "adaptive on dark image should push harder");
    }

    #[test]
    fn test_adaptive_softens_bright_images() {
        let bright = RasterImage::filled(2, 2, [230, 230, 230, 255]).unwrap();
        let adaptive = apply_brightness_mode(&bright, -0.5, BrightnessMode::Adaptive).unwrap();
        let plain = apply_brightness(&bright, -0.5).unwrap();
        let [ra, _, _, _] = adaptive.get_pixel(0, 0).unwrap();
        let [rp, _, _, _] = plain.get_pixel(0, 0).unwrap();
        assert!(ra > rp, "adaptive on bright image should pull less");
    }

    #[test]
    fn test_alpha_untouched() {
        let img = RasterImage::filled(2, 2, [100, 100, 100, 42]).unwrap();
        let out = apply_brightness(&img, 0.3).unwrap();
        assert_eq!(out.get_pixel(0, 0).unwrap()[3], 42);
    }
}
