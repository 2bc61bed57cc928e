//! Color temperature adjustment.
//!
//! An additive red/blue skew rather than a hue rotation: warming pushes red
//! up by 30 per unit and blue down by 20, cooling mirrors the skew. Distinct
//! from tint, which rotates hue through HSV.

use crate::color::clamp_u8;
use crate::error::{check_range, ProcessError};
use crate::raster::RasterImage;

/// Red shift per unit of temperature.
const RED_SHIFT: f32 = 30.0;

/// Blue shift per unit of temperature.
const BLUE_SHIFT: f32 = 20.0;

/// Apply a temperature adjustment. Range [-1, 1], neutral 0; positive warms.
pub fn apply_temperature(image: &RasterImage, value: f32) -> Result<RasterImage, ProcessError> {
    image.validate()?;
    check_range("temperature", value, -1.0, 1.0)?;
    if value == 0.0 {
        return Ok(image.clone());
    }

    Ok(if value > 0.0 {
        // Warm: raise red, lower blue
        image.map_rgb(|r, g, b| {
            (
                clamp_u8(r as f32 + value * RED_SHIFT),
                g,
                clamp_u8(b as f32 - value * BLUE_SHIFT),
            )
        })
    } else {
        // Cool: raise blue, lower red
        let v = -value;
        image.map_rgb(|r, g, b| {
            (
                clamp_u8(r as f32 - v * BLUE_SHIFT),
                g,
                clamp_u8(b as f32 + v * RED_SHIFT),
            )
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_identity() {
        let img = RasterImage::filled(2, 2, [128, 128, 128, 255]).unwrap();
        assert_eq!(apply_temperature(&img, 0.0).unwrap(), img);
    }

    #[test]
    fn test_warm_raises_red_lowers_blue() {
        let img = RasterImage::filled(1, 1, [128, 128, 128, 255]).unwrap();
        let out = apply_temperature(&img, 1.0).unwrap();
        assert_eq!(out.get_pixel(0, 0), Some([158, 128, 108, 255]));
    }

    #[test]
    fn test_cool_raises_blue_lowers_red() {
        let img = RasterImage::filled(1, 1, [128, 128, 128, 255]).unwrap();
        let out = apply_temperature(&img, -1.0).unwrap();
        assert_eq!(out.get_pixel(0, 0), Some([108, 128, 158, 255]));
    }

    #[test]
    fn test_green_unaffected() {
        let img = RasterImage::filled(1, 1, [0, 200, 0, 255]).unwrap();
        let out = apply_temperature(&img, 0.5).unwrap();
        assert_eq!(out.get_pixel(0, 0).unwrap()[1], 200);
    }

    #[test]
    fn test_clamps_at_bounds() {
        let img = RasterImage::filled(1, 1, [250, 0, 5, 255]).unwrap();
        let out = apply_temperature(&img, 1.0).unwrap();
        assert_eq!(out.get_pixel(0, 0), Some([255, 0, 0, 255]));
    }

    #[test]
    fn test_range_enforced() {
        let img = RasterImage::filled(1, 1, [0, 0, 0, 255]).unwrap();
        assert!(apply_temperature(&img, 1.1).is_err());
    }
}
