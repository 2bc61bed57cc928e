//! Selective shadow adjustment, the dark-region counterpart of highlight.

use crate::color::{clamp_u8, luminance_u8};
use crate::error::{check_range, ProcessError};
use crate::raster::RasterImage;

/// Luminance below which a pixel counts as a shadow.
pub const SHADOW_THRESHOLD: f32 = 75.0;

/// Apply a shadow adjustment. Range [-1, 1], neutral 0.
///
/// Only pixels with luminance strictly below the threshold are touched; the
/// per-pixel intensity rises linearly from the threshold toward pure black.
pub fn apply_shadow(image: &RasterImage, value: f32) -> Result<RasterImage, ProcessError> {
    image.validate()?;
    check_range("shadow", value, -1.0, 1.0)?;
    if value == 0.0 {
        return Ok(image.clone());
    }

    Ok(image.map_rgb(|r, g, b| {
        let lum = luminance_u8(r, g, b);
        if lum >= SHADOW_THRESHOLD {
            return (r, g, b);
        }
        let intensity = (SHADOW_THRESHOLD - lum) / SHADOW_THRESHOLD * value;
        (
            clamp_u8(r as f32 * (1.0 + intensity)),
            clamp_u8(g as f32 * (1.0 + intensity)),
            clamp_u8(b as f32 * (1.0 + intensity)),
        )
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_identity() {
        let img = RasterImage::filled(2, 2, [30, 30, 30, 255]).unwrap();
        assert_eq!(apply_shadow(&img, 0.0).unwrap(), img);
    }

    #[test]
    fn test_threshold_boundary_exclusive() {
        let img = RasterImage::filled(1, 1, [75, 75, 75, 255]).unwrap();
        let out = apply_shadow(&img, 0.8).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_bright_pixels_unaffected() {
        let img = RasterImage::filled(2, 2, [200, 200, 200, 255]).unwrap();
        let out = apply_shadow(&img, 1.0).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_lift_shadows() {
        let img = RasterImage::filled(1, 1, [40, 40, 40, 255]).unwrap();
        let out = apply_shadow(&img, 0.5).unwrap();
        let [r, _, _, _] = out.get_pixel(0, 0).unwrap();
        // intensity = (75-40)/75 * 0.5 ~= 0.2333 -> 40 * 1.2333 ~= 49
        assert_eq!(r, 49);
    }

    #[test]
    fn test_deepen_shadows() {
        let img = RasterImage::filled(1, 1, [40, 40, 40, 255]).unwrap();
        let out = apply_shadow(&img, -0.5).unwrap();
        let [r, _, _, _] = out.get_pixel(0, 0).unwrap();
        assert!(r < 40, "negative shadow should darken, got {}", r);
    }

    #[test]
    fn test_fall_off_scales_toward_black() {
        let deep = RasterImage::filled(1, 1, [10, 10, 10, 255]).unwrap();
        let near = RasterImage::filled(1, 1, [70, 70, 70, 255]).unwrap();
        let deep_out = apply_shadow(&deep, 1.0).unwrap();
        let near_out = apply_shadow(&near, 1.0).unwrap();
        // Relative lift is stronger closer to black.
        let deep_ratio = deep_out.get_pixel(0, 0).unwrap()[0] as f32 / 10.0;
        let near_ratio = near_out.get_pixel(0, 0).unwrap()[0] as f32 / 70.0;
        assert!(deep_ratio > near_ratio);
    }

    #[test]
    fn test_range_enforced() {
        let img = RasterImage::filled(1, 1, [0, 0, 0, 255]).unwrap();
        assert!(apply_shadow(&img, -1.2).is_err());
    }
}
