//! Exposure adjustment, measured in stops.

use crate::color::clamp_u8;
use crate::error::{check_range, ProcessError};
use crate::raster::RasterImage;

/// Apply an exposure adjustment. Range [-2, 2] stops, neutral 0.
///
/// Each stop doubles or halves the channel values: `output = input * 2^value`.
pub fn apply_exposure(image: &RasterImage, value: f32) -> Result<RasterImage, ProcessError> {
    image.validate()?;
    check_range("exposure", value, -2.0, 2.0)?;
    if value == 0.0 {
        return Ok(image.clone());
    }

    let factor = 2.0f32.powf(value);
    Ok(image.map_rgb(|r, g, b| {
        (
            clamp_u8(r as f32 * factor),
            clamp_u8(g as f32 * factor),
            clamp_u8(b as f32 * factor),
        )
    }))
}
