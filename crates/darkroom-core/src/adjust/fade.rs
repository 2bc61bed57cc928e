//! Fade effect: a linear blend toward a constant fade color.

use crate::color::lerp_u8;
use crate::error::{check_range, ProcessError};
use crate::raster::RasterImage;

/// Default fade color (white).
pub const FADE_WHITE: [u8; 3] = [255, 255, 255];

/// Apply a fade toward white. Intensity [0, 1], neutral 0.
pub fn apply_fade(image: &RasterImage, intensity: f32) -> Result<RasterImage, ProcessError> {
    apply_fade_color(image, intensity, FADE_WHITE)
}

/// Apply a fade toward an arbitrary color.
pub fn apply_fade_color(
    image: &RasterImage,
    intensity: f32,
    fade_color: [u8; 3],
) -> Result<RasterImage, ProcessError> {
    image.validate()?;
    check_range("fade", intensity, 0.0, 1.0)?;
    if intensity == 0.0 {
        return Ok(image.clone());
    }

    let [fr, fg, fb] = fade_color;
    Ok(image.map_rgb(|r, g, b| {
        (
            lerp_u8(r, fr, intensity),
            lerp_u8(g, fg, intensity),
            lerp_u8(b, fb, intensity),
        )
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_identity() {
        let img = RasterImage::filled(2, 2, [60, 100, 140, 255]).unwrap();
        assert_eq!(apply_fade(&img, 0.0).unwrap(), img);
    }

    #[test]
    fn test_full_fade_is_fade_color() {
        let img = RasterImage::filled(2, 2, [60, 100, 140, 255]).unwrap();
        let out = apply_fade(&img, 1.0).unwrap();
        assert_eq!(out.get_pixel(0, 0), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_half_fade_blends() {
        let img = RasterImage::filled(1, 1, [0, 100, 200, 255]).unwrap();
        let out = apply_fade(&img, 0.5).unwrap();
        // Midpoint toward white, rounded.
        assert_eq!(out.get_pixel(0, 0), Some([128, 178, 228, 255]));
    }

    #[test]
    fn test_custom_fade_color() {
        let img = RasterImage::filled(1, 1, [0, 0, 0, 255]).unwrap();
        let out = apply_fade_color(&img, 1.0, [10, 20, 30]).unwrap();
        assert_eq!(out.get_pixel(0, 0), Some([10, 20, 30, 255]));
    }

    #[test]
    fn test_range_enforced() {
        let img = RasterImage::filled(1, 1, [0, 0, 0, 255]).unwrap();
        assert!(apply_fade(&img, -0.1).is_err());
        assert!(apply_fade(&img, 1.1).is_err());
    }
}
