//! Filter and effect processors.
//!
//! Unlike the per-pixel adjustments in [`crate::adjust`], the processors here
//! are spatial: they read neighborhoods (blur, sharpen, noise reduction, edge
//! detection) or synthesize overlays (grain, texture, vignette).

mod blur;
mod edge;
mod grain;
mod noise_reduction;
mod sharpen;
mod texture;
mod vignette;

pub use blur::{apply_background_blur, apply_blur, box_blur, gaussian_blur, FOCUS_FADE_RATIO};
pub use edge::{apply_edge_detection, apply_emboss};
pub use grain::{apply_grain, apply_grain_seeded, GrainKind};
pub use noise_reduction::apply_noise_reduction;
pub use sharpen::apply_sharpen;
pub use texture::{apply_texture, TextureKind};
pub use vignette::{apply_vignette, VIGNETTE_INNER_RATIO};
