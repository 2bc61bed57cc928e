//! Tint adjustment through HSV hue rotation.

use crate::color::{hsv_to_rgb, rgb_to_hsv};
use crate::error::{check_range, ProcessError};
use crate::raster::RasterImage;

/// Apply a tint adjustment. Range [-1, 1], neutral 0.
///
/// The value maps to a hue rotation of value * 180 degrees, wrapped into
/// [0, 360).
pub fn apply_tint(image: &RasterImage, value: f32) -> Result<RasterImage, ProcessError> {
    image.validate()?;
    check_range("tint", value, -1.0, 1.0)?;
    if value == 0.0 {
        return Ok(image.clone());
    }

    let hue_shift = value * 180.0;
    Ok(image.map_rgb(|r, g, b| {
        let (h, s, v) = rgb_to_hsv(r, g, b);
        let mut h = (h + hue_shift) % 360.0;
        if h < 0.0 {
            h += 360.0;
        }
        hsv_to_rgb(h, s, v)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_identity() {
        let img = RasterImage::filled(2, 2, [200, 50, 90, 255]).unwrap();
        assert_eq!(apply_tint(&img, 0.0).unwrap(), img);
    }

    #[test]
    fn test_full_rotation_inverts_hue() {
        // +1.0 rotates 180 degrees: pure red lands on cyan.
        let img = RasterImage::filled(1, 1, [255, 0, 0, 255]).unwrap();
        let out = apply_tint(&img, 1.0).unwrap();
        let [r, g, b, _] = out.get_pixel(0, 0).unwrap();
        assert!(r < 5, "red should vanish, got {}", r);
        assert!(g > 250 && b > 250, "cyan expected, got ({}, {}, {})", r, g, b);
    }

    #[test]
    fn test_negative_and_positive_half_turn_agree() {
        // -1.0 and +1.0 are the same 180 degree rotation.
        let img = RasterImage::filled(1, 1, [60, 180, 40, 255]).unwrap();
        let pos = apply_tint(&img, 1.0).unwrap();
        let neg = apply_tint(&img, -1.0).unwrap();
        assert_eq!(pos, neg);
    }

    #[test]
    fn test_gray_unaffected() {
        // Achromatic pixels have no hue to rotate.
        let img = RasterImage::filled(2, 2, [128, 128, 128, 255]).unwrap();
        let out = apply_tint(&img, 0.5).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_range_enforced() {
        let img = RasterImage::filled(1, 1, [0, 0, 0, 255]).unwrap();
        assert!(apply_tint(&img, -1.5).is_err());
    }
}
