//! Radial vignette darkening.

use crate::color::clamp_u8;
use crate::error::{check_range, ProcessError};
use crate::raster::RasterImage;

/// Fraction of the corner distance that stays fully transparent.
pub const VIGNETTE_INNER_RATIO: f32 = 0.6;

/// Darken toward the image corners.
///
/// Pixels within [`VIGNETTE_INNER_RATIO`] of the center-to-corner distance
/// are untouched; beyond that the darkening ramps linearly up to `intensity`
/// opacity of black at the corners. Intensity 0 returns an unchanged copy.
pub fn apply_vignette(image: &RasterImage, intensity: f32) -> Result<RasterImage, ProcessError> {
    image.validate()?;
    check_range("vignette", intensity, 0.0, 1.0)?;

    if intensity == 0.0 {
        return Ok(image.clone());
    }

    let cx = image.width as f32 / 2.0;
    let cy = image.height as f32 / 2.0;
    let max_dist = (cx * cx + cy * cy).sqrt();

    Ok(image.map_rgb_xy(|x, y, r, g, b| {
        let dx = x as f32 - cx;
        let dy = y as f32 - cy;
        let ratio = (dx * dx + dy * dy).sqrt() / max_dist;
        if ratio <= VIGNETTE_INNER_RATIO {
            return (r, g, b);
        }
        let t = ((ratio - VIGNETTE_INNER_RATIO) / (1.0 - VIGNETTE_INNER_RATIO)).min(1.0);
        let keep = 1.0 - t * intensity;
        (
            clamp_u8(r as f32 * keep),
            clamp_u8(g as f32 * keep),
            clamp_u8(b as f32 * keep),
        )
    }))
}
