//! Named filter presets consumed by the pipeline compositor.
//!
//! A preset is an immutable bundle of parameter values. Construction
//! validates every field against its declared range and rejects rather than
//! clamping; the shipped catalog entries are built from known-good literals.

use crate::error::{check_range, ProcessError};

/// An immutable named bundle of filter parameters.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FilterPreset {
    /// Preset name used for display and history descriptions.
    pub name: String,
    /// Brightness offset (-1 to 1).
    pub brightness: f32,
    /// Contrast multiplier (0 to 2).
    pub contrast: f32,
    /// Saturation multiplier (0 to 2).
    pub saturation: f32,
    /// Hue rotation in degrees (-180 to 180).
    pub hue: f32,
    /// Warmth skew (-1 to 1).
    pub warmth: f32,
    /// Vignette opacity (0 to 1).
    pub vignette: f32,
    /// Sharpen amount (>= 0).
    pub sharpen: f32,
    /// Blur amount (>= 0).
    pub blur: f32,
}

impl FilterPreset {
    /// Build a preset, validating every parameter range.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        brightness: f32,
        contrast: f32,
        saturation: f32,
        hue: f32,
        warmth: f32,
        vignette: f32,
        sharpen: f32,
        blur: f32,
    ) -> Result<Self, ProcessError> {
        check_range("brightness", brightness, -1.0, 1.0)?;
        check_range("contrast", contrast, 0.0, 2.0)?;
        check_range("saturation", saturation, 0.0, 2.0)?;
        check_range("hue", hue, -180.0, 180.0)?;
        check_range("warmth", warmth, -1.0, 1.0)?;
        check_range("vignette", vignette, 0.0, 1.0)?;
        check_range("sharpen", sharpen, 0.0, f32::MAX)?;
        check_range("blur", blur, 0.0, f32::MAX)?;
        Ok(Self {
            name: name.into(),
            brightness,
            contrast,
            saturation,
            hue,
            warmth,
            vignette,
            sharpen,
            blur,
        })
    }

    /// Internal constructor for the catalog below; literals are known valid.
    #[allow(clippy::too_many_arguments)]
    fn catalog(
        name: &str,
        brightness: f32,
        contrast: f32,
        saturation: f32,
        hue: f32,
        warmth: f32,
        vignette: f32,
        sharpen: f32,
        blur: f32,
    ) -> Self {
        Self {
            name: name.to_string(),
            brightness,
            contrast,
            saturation,
            hue,
            warmth,
            vignette,
            sharpen,
            blur,
        }
    }

    /// True when every parameter is neutral, i.e. applying it is a no-op.
    pub fn is_identity(&self) -> bool {
        self.brightness == 0.0
            && self.contrast == 1.0
            && self.saturation == 1.0
            && self.hue == 0.0
            && self.warmth == 0.0
            && self.vignette == 0.0
            && self.sharpen == 0.0
            && self.blur == 0.0
    }

    /// The identity preset.
    pub fn none() -> Self {
        Self::catalog("original", 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0)
    }

    /// Faded warm look with lifted brightness.
    pub fn vintage() -> Self {
        Self::catalog("vintage", 0.1, 1.2, 0.8, 0.0, 0.2, 0.0, 0.0, 0.0)
    }

    /// Punchy contrast and saturation.
    pub fn vivid() -> Self {
        Self::catalog("vivid", 0.0, 1.3, 1.4, 0.0, 0.0, 0.0, 0.0, 0.0)
    }

    /// Black and white with a contrast bump.
    pub fn mono() -> Self {
        Self::catalog("mono", 0.0, 1.1, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0)
    }

    /// Warm tones with a slight lift.
    pub fn warm() -> Self {
        Self::catalog("warm", 0.05, 1.0, 1.0, 0.0, 0.3, 0.0, 0.0, 0.0)
    }

    /// Cool tones with a saturation boost.
    pub fn cool() -> Self {
        Self::catalog("cool", 0.0, 1.0, 1.1, 0.0, -0.2, 0.0, 0.0, 0.0)
    }

    /// High contrast, darkened, vignetted.
    pub fn dramatic() -> Self {
        Self::catalog("dramatic", -0.1, 1.5, 1.0, 0.0, 0.0, 0.3, 0.0, 0.0)
    }

    /// Low contrast with a gentle blur.
    pub fn soft() -> Self {
        Self::catalog("soft", 0.1, 0.9, 1.0, 0.0, 0.0, 0.0, 0.0, 0.1)
    }

    /// Contrast plus unsharp sharpening.
    pub fn sharp() -> Self {
        Self::catalog("sharp", 0.0, 1.2, 1.0, 0.0, 0.0, 0.0, 0.3, 0.0)
    }

    /// The full shipped catalog, identity first.
    pub fn all() -> Vec<Self> {
        vec![
            Self::none(),
            Self::vintage(),
            Self::vivid(),
            Self::mono(),
            Self::warm(),
            Self::cool(),
            Self::dramatic(),
            Self::soft(),
            Self::sharp(),
        ]
    }
}

impl Default for FilterPreset {
    fn default() -> Self {
        Self::none()
    }
}
