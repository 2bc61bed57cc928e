//! Selective highlight adjustment.
//!
//! Only pixels with luminance strictly above the threshold are touched; the
//! per-pixel intensity rises linearly from the threshold toward pure white,
//! giving a smooth fall-off instead of a hard cutoff.

use crate::color::{clamp_u8, luminance_u8};
use crate::error::{check_range, ProcessError};
use crate::raster::RasterImage;

/// Luminance above which a pixel counts as a highlight.
pub const HIGHLIGHT_THRESHOLD: f32 = 180.0;

/// Apply a highlight adjustment. Range [-1, 1], neutral 0.
pub fn apply_highlight(image: &RasterImage, value: f32) -> Result<RasterImage, ProcessError> {
    image.validate()?;
    check_range("highlight", value, -1.0, 1.0)?;
    if value == 0.0 {
        return Ok(image.clone());
    }

    Ok(image.map_rgb(|r, g, b| {
        let lum = luminance_u8(r, g, b);
        if lum <= HIGHLIGHT_THRESHOLD {
            return (r, g, b);
        }
        let intensity = (lum - HIGHLIGHT_THRESHOLD) / (255.0 - HIGHLIGHT_THRESHOLD) * value;
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
        let img = RasterImage::filled(2, 2, [220, 220, 220, 255]).unwrap();
        assert_eq!(apply_highlight(&img, 0.0).unwrap(), img);
    }

    #[test]
    fn test_threshold_boundary_exclusive() {
        // Luminance exactly 180 must be left unchanged: only lum > 180 is
        // a highlight.
        let img = RasterImage::filled(1, 1, [180, 180, 180, 255]).unwrap();
        let out = apply_highlight(&img, 0.5).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_dark_pixels_unaffected() {
        let img = RasterImage::filled(2, 2, [40, 40, 40, 255]).unwrap();
        let out = apply_highlight(&img, 1.0).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_bright_pixels_boosted() {
        let img = RasterImage::filled(1, 1, [220, 220, 220, 255]).unwrap();
        let out = apply_highlight(&img, 0.5).unwrap();
        let [r, _, _, _] = out.get_pixel(0, 0).unwrap();
        // intensity = (220-180)/75 * 0.5 ~= 0.2667 -> 220 * 1.2667 clamps high
        assert!(r > 220, "highlight should brighten, got {}", r);
    }

    #[test]
    fn test_bright_pixels_recovered_with_negative() {
        let img = RasterImage::filled(1, 1, [240, 240, 240, 255]).unwrap();
        let out = apply_highlight(&img, -0.5).unwrap();
        let [r, _, _, _] = out.get_pixel(0, 0).unwrap();
        assert!(r < 240, "negative highlight should darken, got {}", r);
    }

    #[test]
    fn test_fall_off_scales_with_luminance() {
        // A brighter pixel moves further than one just past the threshold.
        let near = RasterImage::filled(1, 1, [190, 190, 190, 255]).unwrap();
        let far = RasterImage::filled(1, 1, [240, 240, 240, 255]).unwrap();
        let near_out = apply_highlight(&near, -1.0).unwrap();
        let far_out = apply_highlight(&far, -1.0).unwrap();
        let near_delta = 190 - near_out.get_pixel(0, 0).unwrap()[0] as i32;
        let far_delta = 240 - far_out.get_pixel(0, 0).unwrap()[0] as i32;
        assert!(far_delta > near_delta);
    }

    #[test]
    fn test_range_enforced() {
        let img = RasterImage::filled(1, 1, [0, 0, 0, 255]).unwrap();
        assert!(apply_highlight(&img, 2.0).is_err());
    }
}
