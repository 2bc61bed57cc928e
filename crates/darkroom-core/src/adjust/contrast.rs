//! Matrix-form contrast and saturation adjustments.
//!
//! Contrast scales each channel around zero with an optional additive
//! brightness term folded into the same pass. Saturation interpolates each
//! channel toward the pixel's luminance with the canonical
//! luminance-preserving weights (0.213 / 0.715 / 0.072).

use crate::color::clamp_u8;
use crate::error::{check_range, ProcessError};
use crate::raster::RasterImage;

// Saturation matrix luminance weights (Rec. 709-derived, matching the
// classic color-matrix formulation rather than the BT.601 masking weights).
const SAT_R: f32 = 0.213;
const SAT_G: f32 = 0.715;
const SAT_B: f32 = 0.072;

/// Apply a contrast adjustment. Range [0, 2], neutral 1.
pub fn apply_contrast(image: &RasterImage, value: f32) -> Result<RasterImage, ProcessError> {
    apply_contrast_brightness(image, value, 0.0)
}

/// Contrast scale with a brightness offset folded into the same matrix pass.
pub fn apply_contrast_brightness(
    image: &RasterImage,
    contrast: f32,
    brightness: f32,
) -> Result<RasterImage, ProcessError> {
    image.validate()?;
    check_range("contrast", contrast, 0.0, 2.0)?;
    check_range("brightness", brightness, -1.0, 1.0)?;
    if contrast == 1.0 && brightness == 0.0 {
        return Ok(image.clone());
    }

    let offset = brightness * 255.0;
    Ok(image.map_rgb(|r, g, b| {
        (
            clamp_u8(r as f32 * contrast + offset),
            clamp_u8(g as f32 * contrast + offset),
            clamp_u8(b as f32 * contrast + offset),
        )
    }))
}

/// Apply a luminance-preserving saturation adjustment. Range [0, 2],
/// neutral 1; 0 produces grayscale.
pub fn apply_saturation(image: &RasterImage, value: f32) -> Result<RasterImage, ProcessError> {
    image.validate()?;
    check_range("saturation", value, 0.0, 2.0)?;
    if value == 1.0 {
        return Ok(image.clone());
    }

    // Saturation matrix: out = gray + s * (in - gray) with gray computed
    // from the Rec. 709 weights above.
    let inv = 1.0 - value;
    let (wr, wg, wb) = (SAT_R * inv, SAT_G * inv, SAT_B * inv);
    Ok(image.map_rgb(|r, g, b| {
        let (rf, gf, bf) = (r as f32, g as f32, b as f32);
        let gray = wr * rf + wg * gf + wb * bf;
        (
            clamp_u8(gray + value * rf),
            clamp_u8(gray + value * gf),
            clamp_u8(gray + value * bf),
        )
    }))
}
