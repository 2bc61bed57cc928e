//! Darkroom Core - image adjustment and filter processing pipeline
//!
//! This crate provides the processing core of the Darkroom photo editor:
//! per-pixel adjustment processors, spatial filter effects, the ordered
//! pipeline compositor, the filter preset catalog, and the bounded undo/redo
//! edit history.

pub mod adjust;
pub mod color;
pub mod effects;
pub mod error;
pub mod history;
pub mod io;
pub mod pipeline;
pub mod preset;
pub mod raster;
pub mod session;

pub use error::ProcessError;
pub use history::{EditAction, HistoryEntry, HistoryManager, HistoryStats};
pub use pipeline::{apply_adjustments, apply_adjustments_or_original, apply_preset};
pub use preset::FilterPreset;
pub use raster::RasterImage;
pub use session::EditSession;

/// The set of independent adjustment knobs for an editing session.
///
/// An immutable value: the compositor reads it, mutation produces a new
/// value, and the history manager snapshots it wholesale.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AdjustmentState {
    /// Brightness offset (-1 to 1, 0 neutral).
    pub brightness: f32,
    /// Exposure in stops (-2 to 2, 0 neutral).
    pub exposure: f32,
    /// Contrast multiplier (0 to 2, 1 neutral).
    pub contrast: f32,
    /// Saturation multiplier (0 to 2, 1 neutral).
    pub saturation: f32,
    /// Highlight adjustment (-1 to 1, 0 neutral).
    pub highlight: f32,
    /// Shadow adjustment (-1 to 1, 0 neutral).
    pub shadow: f32,
    /// Temperature skew (-1 to 1, 0 neutral; positive warms).
    pub temperature: f32,
    /// Tint as hue rotation (-1 to 1, 0 neutral; maps to +-180 degrees).
    pub tint: f32,
    /// Natural saturation (-1 to 1, 0 neutral; weighted by 1 - s per pixel).
    pub natural_saturation: f32,
    /// Active filter preset, if any.
    pub preset: Option<FilterPreset>,
}

impl Default for AdjustmentState {
    fn default() -> Self {
        Self {
            brightness: 0.0,
            exposure: 0.0,
            contrast: 1.0,
            saturation: 1.0,
            highlight: 0.0,
            shadow: 0.0,
            temperature: 0.0,
            tint: 0.0,
            natural_saturation: 0.0,
            preset: None,
        }
    }
}

impl AdjustmentState {
    /// Create a new state with every knob at its neutral default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all knobs are at their neutral defaults and no preset is set.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Validate every knob against its declared range.
    pub fn validate(&self) -> Result<(), ProcessError> {
        error::check_range("brightness", self.brightness, -1.0, 1.0)?;
        error::check_range("exposure", self.exposure, -2.0, 2.0)?;
        error::check_range("contrast", self.contrast, 0.0, 2.0)?;
        error::check_range("saturation", self.saturation, 0.0, 2.0)?;
        error::check_range("highlight", self.highlight, -1.0, 1.0)?;
        error::check_range("shadow", self.shadow, -1.0, 1.0)?;
        error::check_range("temperature", self.temperature, -1.0, 1.0)?;
        error::check_range("tint", self.tint, -1.0, 1.0)?;
        error::check_range("natural_saturation", self.natural_saturation, -1.0, 1.0)?;
        Ok(())
    }
}
