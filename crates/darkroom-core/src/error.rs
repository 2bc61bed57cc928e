//! Error types shared by the adjustment and effect processors.

use thiserror::Error;

/// Errors that can occur while running a processor or the pipeline.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// A parameter fell outside its declared range.
    #[error("Invalid parameter {name}: {value} not in [{min}, {max}]")]
    InvalidParameter {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    /// Width or height is zero, or the pixel buffer is empty.
    #[error("Degenerate input image: {width}x{height}")]
    DegenerateInput { width: u32, height: u32 },

    /// Pixel buffer length doesn't match width * height * 4.
    #[error("Pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },
}

impl ProcessError {
    /// Build an `InvalidParameter` error for a named processor knob.
    pub(crate) fn param(name: &'static str, value: f32, min: f32, max: f32) -> Self {
        ProcessError::InvalidParameter {
            name,
            value,
            min,
            max,
        }
    }
}

/// Validate that a value lies in `[min, max]`, surfacing a typed error.
///
/// NaN values always fail validation: a NaN knob must never reach pixel math.
pub(crate) fn check_range(
    name: &'static str,
    value: f32,
    min: f32,
    max: f32,
) -> Result<(), ProcessError> {
    if value.is_nan() || value < min || value > max {
        return Err(ProcessError::param(name, value, min, max));
    }
    Ok(())
}
