//! Natural saturation (vibrance) adjustment.
//!
//! Unlike plain saturation, the adjustment is weighted per pixel by
//! `1 - currentSaturation`, so already-saturated pixels move less and never
//! clip into neon.

use crate::color::{hsl_to_rgb, rgb_to_hsl};
use crate::error::{check_range, ProcessError};
use crate::raster::RasterImage;

/// Apply a natural saturation adjustment. Range [-1, 1], neutral 0.
pub fn apply_natural_saturation(
    image: &RasterImage,
    value: f32,
) -> Result<RasterImage, ProcessError> {
    image.validate()?;
    check_range("natural_saturation", value, -1.0, 1.0)?;
    if value == 0.0 {
        return Ok(image.clone());
    }

    Ok(image.map_rgb(|r, g, b| {
        let (h, s, l) = rgb_to_hsl(r, g, b);
        let weight = 1.0 - s;
        let new_s = (s + value * weight).clamp(0.0, 1.0);
        hsl_to_rgb(h, new_s, l)
    }))
}
