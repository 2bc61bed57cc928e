//! Procedural surface texture overlays.
//!
//! Each kind adds a luminance pattern on top of the image: seeded noise for
//! paper, trigonometric interference for the woven and material looks. All
//! kinds are deterministic.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::clamp_u8;
use crate::error::{check_range, ProcessError};
use crate::raster::{RasterImage, BYTES_PER_PIXEL};

const PAPER_SEED: u64 = 42;

/// Surface texture pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TextureKind {
    /// Seeded random speckle, up to +/-30 per channel.
    Paper,
    /// Crossed sine interference weave.
    Canvas,
    /// Warp/weft thread pattern.
    Fabric,
    /// Directional brushed-metal streaks.
    Metal,
    /// Grain lines plus growth rings, warm-tinted.
    Wood,
}

/// Overlay a texture pattern at the given intensity [0, 1].
///
/// Intensity 0 returns an unchanged copy.
pub fn apply_texture(
    image: &RasterImage,
    kind: TextureKind,
    intensity: f32,
) -> Result<RasterImage, ProcessError> {
    image.validate()?;
    check_range("texture", intensity, 0.0, 1.0)?;

    if intensity == 0.0 {
        return Ok(image.clone());
    }

    Ok(match kind {
        TextureKind::Paper => paper(image, intensity),
        TextureKind::Canvas => image.map_rgb_xy(|x, y, r, g, b| {
            let (x, y) = (x as f32, y as f32);
            let pattern_x = (x * 0.1).sin() * (y * 0.08).cos();
            let pattern_y = (x * 0.08).cos() * (y * 0.1).sin();
            add_gray(r, g, b, (pattern_x + pattern_y) * intensity * 15.0)
        }),
        TextureKind::Fabric => image.map_rgb_xy(|x, y, r, g, b| {
            let warp = (x as f32 * 0.2).sin() * 0.5 + 0.5;
            let weft = (y as f32 * 0.2).sin() * 0.5 + 0.5;
            add_gray(r, g, b, (warp * weft - 0.25) * intensity * 20.0)
        }),
        TextureKind::Metal => image.map_rgb_xy(|x, y, r, g, b| {
            let (x, y) = (x as f32, y as f32);
            let brush = (x * 0.05 + y * 0.02).sin() * intensity * 25.0;
            let reflection = (x * 0.03).cos() * intensity * 10.0;
            add_gray(r, g, b, brush + reflection)
        }),
        TextureKind::Wood => image.map_rgb_xy(|x, y, r, g, b| {
            let (x, y) = (x as f32, y as f32);
            let grain = (y * 0.02 + (x * 0.01).sin() * 5.0).sin() * intensity * 20.0;
            let rings = ((x * x + y * y).sqrt() * 0.01).sin() * intensity * 10.0;
            let wood = grain + rings;
            // Red carries the full pattern so the grain reads warm.
            (
                clamp_u8(r as f32 + wood),
                clamp_u8(g as f32 + wood * 0.8),
                clamp_u8(b as f32 + wood * 0.6),
            )
        }),
    })
}

#[inline]
fn add_gray(r: u8, g: u8, b: u8, value: f32) -> (u8, u8, u8) {
    (
        clamp_u8(r as f32 + value),
        clamp_u8(g as f32 + value),
        clamp_u8(b as f32 + value),
    )
}

fn paper(image: &RasterImage, intensity: f32) -> RasterImage {
    let mut rng = StdRng::seed_from_u64(PAPER_SEED);
    let mut out = image.clone();
    for chunk in out.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
        let noise = (rng.gen::<f32>() - 0.5) * 2.0 * intensity * 30.0;
        let (r, g, b) = add_gray(chunk[0], chunk[1], chunk[2], noise);
        chunk[0] = r;
        chunk[1] = g;
        chunk[2] = b;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const KINDS: [TextureKind; 5] = [
        TextureKind::Paper,
        TextureKind::Canvas,
        TextureKind::Fabric,
        TextureKind::Metal,
        TextureKind::Wood,
    ];

    fn flat() -> RasterImage {
        RasterImage::filled(16, 16, [128, 128, 128, 255]).unwrap()
    }

    #[test]
    fn test_zero_intensity_identity() {
        let img = flat();
        for kind in KINDS {
            assert_eq!(apply_texture(&img, kind, 0.0).unwrap(), img, "{kind:?}");
        }
    }

    #[test]
    fn test_all_kinds_deterministic() {
        let img = flat();
        for kind in KINDS {
            let a = apply_texture(&img, kind, 0.7).unwrap();
            let b = apply_texture(&img, kind, 0.7).unwrap();
            assert_eq!(a, b, "{kind:?} should be repeatable");
        }
    }

    #[test]
    fn test_all_kinds_change_pixels() {
        let img = flat();
        for kind in KINDS {
            let out = apply_texture(&img, kind, 1.0).unwrap();
            assert_ne!(out, img, "{kind:?} at full intensity should alter the image");
        }
    }

    #[test]
    fn test_wood_warm_tint() {
        let img = flat();
        let out = apply_texture(&img, TextureKind::Wood, 1.0).unwrap();
        let (mut r_sum, mut b_sum) = (0i64, 0i64);
        for y in 0..16 {
            for x in 0..16 {
                let [r, _, b, _] = out.get_pixel(x, y).unwrap();
                r_sum += (r as i64 - 128).abs();
                b_sum += (b as i64 - 128).abs();
            }
        }
        // Blue carries 0.6x of the pattern, red the full amount.
        assert!(r_sum >= b_sum, "red deviation should dominate: {r_sum} vs {b_sum}");
    }

    #[test]
    fn test_canvas_pattern_varies_spatially() {
        let img = flat();
        let out = apply_texture(&img, TextureKind::Canvas, 1.0).unwrap();
        let mut values = std::collections::HashSet::new();
        for y in 0..16 {
            for x in 0..16 {
                values.insert(out.get_pixel(x, y).unwrap()[0]);
            }
        }
        assert!(values.len() > 4, "interference pattern should vary, got {}", values.len());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let img = flat();
        assert!(apply_texture(&img, TextureKind::Paper, 1.2).is_err());
    }

    #[test]
    fn test_alpha_preserved() {
        let img = RasterImage::filled(4, 4, [128, 128, 128, 9]).unwrap();
        let out = apply_texture(&img, TextureKind::Metal, 1.0).unwrap();
        assert_eq!(out.get_pixel(1, 1).unwrap()[3], 9);
    }
}
