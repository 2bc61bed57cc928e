//! Composite HSL adjustment.
//!
//! Applies hue shift, saturation multiplier, and lightness offset in a
//! single color-space round trip instead of three.

use crate::color::{hsl_to_rgb, rgb_to_hsl};
use crate::error::{check_range, ProcessError};
use crate::raster::RasterImage;

/// Apply hue shift (degrees, [-180, 180]), saturation multiplier ([0, 2])
/// and lightness offset ([-1, 1]) in one pass.
///
/// Neutral values (0, 1, 0) return a pixel-identical copy.
pub fn apply_hsl(
    image: &RasterImage,
    hue_shift: f32,
    saturation_multiplier: f32,
    lightness_adjustment: f32,
) -> Result<RasterImage, ProcessError> {
    image.validate()?;
    check_range("hue_shift", hue_shift, -180.0, 180.0)?;
    check_range("saturation_multiplier", saturation_multiplier, 0.0, 2.0)?;
    check_range("lightness_adjustment", lightness_adjustment, -1.0, 1.0)?;
    if hue_shift == 0.0 && saturation_multiplier == 1.0 && lightness_adjustment == 0.0 {
        return Ok(image.clone());
    }

    Ok(image.map_rgb(|r, g, b| {
        let (h, s, l) = rgb_to_hsl(r, g, b);
        let h = (h + hue_shift + 360.0) % 360.0;
        let s = (s * saturation_multiplier).clamp(0.0, 1.0);
        let l = (l + lightness_adjustment).clamp(0.0, 1.0);
        hsl_to_rgb(h, s, l)
    }))
}
