//! The compositor: runs the individual processors in a fixed order.
//!
//! Ordering is part of the contract. Tone first (exposure, brightness,
//! highlight, shadow), then contrast and color, so that color shifts see the
//! tone-corrected values. Every stage is skipped at its neutral value, which
//! makes the all-neutral state an exact identity.

use crate::adjust::{
    apply_brightness, apply_contrast, apply_exposure, apply_highlight, apply_hsl,
    apply_natural_saturation, apply_saturation, apply_shadow, apply_temperature, apply_tint,
};
use crate::effects::{apply_blur, apply_sharpen, apply_vignette};
use crate::error::ProcessError;
use crate::preset::FilterPreset;
use crate::raster::RasterImage;
use crate::AdjustmentState;

/// Render an [`AdjustmentState`] against a source image.
///
/// The preset, when set, runs first; the manual adjustments then refine its
/// output. Returns a fresh buffer even when every stage is skipped.
pub fn apply_adjustments(
    image: &RasterImage,
    state: &AdjustmentState,
) -> Result<RasterImage, ProcessError> {
    image.validate()?;
    state.validate()?;

    let mut out = match &state.preset {
        Some(preset) if !preset.is_identity() => apply_preset(image, preset)?,
        _ => image.clone(),
    };

    if state.exposure != 0.0 {
        out = apply_exposure(&out, state.exposure)?;
    }
    if state.brightness != 0.0 {
        out = apply_brightness(&out, state.brightness)?;
    }
    if state.highlight != 0.0 {
        out = apply_highlight(&out, state.highlight)?;
    }
    if state.shadow != 0.0 {
        out = apply_shadow(&out, state.shadow)?;
    }
    if state.contrast != 1.0 {
        out = apply_contrast(&out, state.contrast)?;
    }
    if state.saturation != 1.0 {
        out = apply_saturation(&out, state.saturation)?;
    }
    if state.temperature != 0.0 {
        out = apply_temperature(&out, state.temperature)?;
    }
    if state.tint != 0.0 {
        out = apply_tint(&out, state.tint)?;
    }
    if state.natural_saturation != 0.0 {
        out = apply_natural_saturation(&out, state.natural_saturation)?;
    }

    Ok(out)
}

/// Render a [`FilterPreset`] against a source image.
///
/// Color stages run before the spatial effects so blur and sharpen operate
/// on the final colors. Stage order: brightness, contrast, saturation,
/// warmth, hue, blur, sharpen, vignette. The hue rotation is an extra stage
/// for caller-built presets; every shipped catalog entry leaves it at 0.
pub fn apply_preset(
    image: &RasterImage,
    preset: &FilterPreset,
) -> Result<RasterImage, ProcessError> {
    image.validate()?;

    let mut out = image.clone();
    if preset.brightness != 0.0 {
        out = apply_brightness(&out, preset.brightness)?;
    }
    if preset.contrast != 1.0 {
        out = apply_contrast(&out, preset.contrast)?;
    }
    if preset.saturation != 1.0 {
        out = apply_saturation(&out, preset.saturation)?;
    }
    if preset.warmth != 0.0 {
        out = apply_temperature(&out, preset.warmth)?;
    }
    if preset.hue != 0.0 {
        out = apply_hsl(&out, preset.hue, 1.0, 0.0)?;
    }
    if preset.blur > 0.0 {
        out = apply_blur(&out, preset.blur)?;
    }
    if preset.sharpen > 0.0 {
        out = apply_sharpen(&out, preset.sharpen)?;
    }
    if preset.vignette > 0.0 {
        out = apply_vignette(&out, preset.vignette)?;
    }

    Ok(out)
}

/// Degrading variant of [`apply_adjustments`]: a stage failure logs a
/// warning and yields an unmodified copy of the input instead of an error.
///
/// Interactive callers use this so a bad slider value can never take down
/// the preview.
pub fn apply_adjustments_or_original(image: &RasterImage, state: &AdjustmentState) -> RasterImage {
    match apply_adjustments(image, state) {
        Ok(out) => out,
        Err(err) => {
            log::warn!("adjustment pipeline failed, returning original: {err}");
            image.clone()
        }
    }
}
