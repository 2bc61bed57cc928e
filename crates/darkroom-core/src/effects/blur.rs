//! Gaussian and box blurs, plus the focus-point background blur.
//!
//! The gaussian is separable: one horizontal pass and one vertical pass over
//! a 1-D kernel, with edge clamping at the borders. Rows are processed in
//! parallel with rayon.

use rayon::prelude::*;

use crate::color::lerp_u8;
use crate::error::{check_range, ProcessError};
use crate::raster::{RasterImage, BYTES_PER_PIXEL};

/// Fraction of the focus radius over which the background blur fades in.
pub const FOCUS_FADE_RATIO: f32 = 0.5;

/// Largest blur radius an intensity value can request.
const MAX_BLUR_RADIUS: f32 = 25.0;

/// Apply a gaussian blur scaled by intensity.
///
/// Any non-negative intensity maps to a kernel radius of
/// `min(intensity * 10, 25)` pixels. Intensity 0 returns an unchanged copy.
pub fn apply_blur(image: &RasterImage, intensity: f32) -> Result<RasterImage, ProcessError> {
    image.validate()?;
    check_range("blur", intensity, 0.0, f32::MAX)?;

    let radius = (intensity * 10.0).min(MAX_BLUR_RADIUS).round() as usize;
    if radius == 0 {
        return Ok(image.clone());
    }
    Ok(gaussian_blur(image, radius))
}

/// Separable gaussian blur with sigma = radius / 3.
///
/// A radius of 0 returns an unchanged copy.
pub fn gaussian_blur(image: &RasterImage, radius: usize) -> RasterImage {
    if radius == 0 {
        return image.clone();
    }

    let sigma = (radius as f32 / 3.0).max(0.1);
    let kernel = build_kernel(radius, sigma);

    let horizontal = blur_pass(image, &kernel, radius, true);
    blur_pass(&horizontal, &kernel, radius, false)
}

/// Build a normalized 1-D gaussian kernel of `2 * radius + 1` taps.
fn build_kernel(radius: usize, sigma: f32) -> Vec<f32> {
    let two_sigma_sq = 2.0 * sigma * sigma;
    let mut kernel: Vec<f32> = (-(radius as i64)..=radius as i64)
        .map(|x| {
            let x = x as f32;
            (-x * x / two_sigma_sq).exp()
        })
        .collect();
    let sum: f32 = kernel.iter().sum();
    for w in &mut kernel {
        *w /= sum;
    }
    kernel
}

/// One separable pass. `horizontal` selects the axis; taps past the border
/// clamp to the edge pixel. Alpha is carried through unblurred.
fn blur_pass(image: &RasterImage, kernel: &[f32], radius: usize, horizontal: bool) -> RasterImage {
    let width = image.width as usize;
    let height = image.height as usize;
    let row_bytes = width * BYTES_PER_PIXEL;

    let mut out = image.clone();
    let src = &image.pixels;

    out.pixels
        .par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(y, row)| {
            for x in 0..width {
                let mut acc = [0.0f32; 3];
                for (k, &weight) in kernel.iter().enumerate() {
                    let offset = k as i64 - radius as i64;
                    let (sx, sy) = if horizontal {
                        ((x as i64 + offset).clamp(0, width as i64 - 1), y as i64)
                    } else {
                        (x as i64, (y as i64 + offset).clamp(0, height as i64 - 1))
                    };
                    let idx = (sy as usize * width + sx as usize) * BYTES_PER_PIXEL;
                    acc[0] += weight * src[idx] as f32;
                    acc[1] += weight * src[idx + 1] as f32;
                    acc[2] += weight * src[idx + 2] as f32;
                }
                let base = x * BYTES_PER_PIXEL;
                row[base] = acc[0].round().clamp(0.0, 255.0) as u8;
                row[base + 1] = acc[1].round().clamp(0.0, 255.0) as u8;
                row[base + 2] = acc[2].round().clamp(0.0, 255.0) as u8;
            }
        });

    out
}

/// Simple box blur: every pixel becomes the mean of its `(2r+1)²` window,
/// clipped at the borders. Kept for the fast preview path.
pub fn box_blur(image: &RasterImage, radius: usize) -> RasterImage {
    if radius == 0 {
        return image.clone();
    }

    let width = image.width as i64;
    let height = image.height as i64;
    let r = radius as i64;

    image.map_rgb_xy(|x, y, _, _, _| {
        let mut sum = [0u32; 3];
        let mut count = 0u32;
        for dy in -r..=r {
            for dx in -r..=r {
                let sx = x as i64 + dx;
                let sy = y as i64 + dy;
                if sx < 0 || sy < 0 || sx >= width || sy >= height {
                    continue;
                }
                let idx = (sy as usize * width as usize + sx as usize) * BYTES_PER_PIXEL;
                sum[0] += image.pixels[idx] as u32;
                sum[1] += image.pixels[idx + 1] as u32;
                sum[2] += image.pixels[idx + 2] as u32;
                count += 1;
            }
        }
        (
            (sum[0] / count) as u8,
            (sum[1] / count) as u8,
            (sum[2] / count) as u8,
        )
    })
}

/// Blur everything outside a circular focus region.
///
/// The focus circle is centered at `(focus_x, focus_y)` in normalized
/// coordinates, with a radius of `focus_radius * min(w, h) / 2` pixels.
/// Pixels inside the circle stay sharp; beyond it the blurred copy fades in
/// over a band [`FOCUS_FADE_RATIO`] times the focus radius wide.
///
/// # Arguments
/// * `focus_x`, `focus_y` - Focus center (0.0 to 1.0)
/// * `focus_radius` - Sharp region size (0.0 to 1.0)
/// * `intensity` - Blur strength outside the focus (0.0 to 1.0)
pub fn apply_background_blur(
    image: &RasterImage,
    focus_x: f32,
    focus_y: f32,
    focus_radius: f32,
    intensity: f32,
) -> Result<RasterImage, ProcessError> {
    image.validate()?;
    check_range("focus_x", focus_x, 0.0, 1.0)?;
    check_range("focus_y", focus_y, 0.0, 1.0)?;
    check_range("focus_radius", focus_radius, 0.0, 1.0)?;
    check_range("blur", intensity, 0.0, 1.0)?;

    if intensity == 0.0 {
        return Ok(image.clone());
    }

    let blurred = apply_blur(image, intensity)?;

    let cx = focus_x * image.width as f32;
    let cy = focus_y * image.height as f32;
    let max_radius = focus_radius * image.width.min(image.height) as f32 / 2.0;
    let fade = (max_radius * FOCUS_FADE_RATIO).max(1.0);

    Ok(image.map_rgb_xy(|x, y, r, g, b| {
        let dx = x as f32 - cx;
        let dy = y as f32 - cy;
        let dist = (dx * dx + dy * dy).sqrt();
        let t = ((dist - max_radius) / fade).clamp(0.0, 1.0);
        if t == 0.0 {
            return (r, g, b);
        }
        let idx = (y as usize * image.width as usize + x as usize) * BYTES_PER_PIXEL;
        (
            lerp_u8(r, blurred.pixels[idx], t),
            lerp_u8(g, blurred.pixels[idx + 1], t),
            lerp_u8(b, blurred.pixels[idx + 2], t),
        )
    }))
}
