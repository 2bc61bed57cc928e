//! Adjustment processors.
//!
//! Each processor is a pure function from an input raster and a parameter
//! value to a new raster. Every entry point validates its parameter range
//! and the image before touching pixels, and every output channel is an
//! integer in [0, 255].
//!
//! Neutral-value contract: calling a processor with its neutral default
//! returns a pixel-identical copy of the input.

mod brightness;
mod contrast;
mod curves;
mod exposure;
mod fade;
mod highlight;
mod hsl;
mod natural_saturation;
mod shadow;
mod temperature;
mod tint;

pub use brightness::{apply_brightness, apply_brightness_mode, BrightnessMode};
pub use contrast::{apply_contrast, apply_saturation};
pub use curves::{apply_curve_preset, apply_curves, build_lookup_table, CurvePreset, CurveLut};
pub use exposure::apply_exposure;
pub use fade::{apply_fade, apply_fade_color, FADE_WHITE};
pub use highlight::apply_highlight;
pub use hsl::apply_hsl;
pub use natural_saturation::apply_natural_saturation;
pub use shadow::apply_shadow;
pub use temperature::apply_temperature;
pub use tint::apply_tint;
