//! Noise reduction: edge-preserving bilateral filter, or a plain 2-D
//! gaussian when detail preservation is not wanted.

use rayon::prelude::*;

use crate::error::{check_range, ProcessError};
use crate::raster::{RasterImage, BYTES_PER_PIXEL};

/// Denoise the image.
///
/// With `preserve_details` a bilateral filter weighs each neighbor by both
/// spatial distance and color distance, so edges survive while flat regions
/// smooth out. Without it a full 2-D gaussian is used. Strength [0, 1]
/// scales the window radius and both sigmas; strength 0 still filters with
/// the minimum window.
pub fn apply_noise_reduction(
    image: &RasterImage,
    strength: f32,
    preserve_details: bool,
) -> Result<RasterImage, ProcessError> {
    image.validate()?;
    check_range("noise_reduction", strength, 0.0, 1.0)?;

    if preserve_details {
        Ok(bilateral(image, strength))
    } else {
        Ok(gaussian(image, strength))
    }
}

fn bilateral(image: &RasterImage, strength: f32) -> RasterImage {
    let radius = (strength * 5.0 + 1.0) as i64;
    let sigma_color = strength * 50.0 + 10.0;
    let sigma_space = strength * 10.0 + 5.0;
    let color_denom = 2.0 * sigma_color * sigma_color;
    let space_denom = 2.0 * sigma_space * sigma_space;

    let width = image.width as usize;
    let height = image.height as usize;
    let row_bytes = width * BYTES_PER_PIXEL;
    let src = &image.pixels;

    let mut out = image.clone();
    out.pixels
        .par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(y, row)| {
            for x in 0..width {
                let center_idx = (y * width + x) * BYTES_PER_PIXEL;
                let center = [src[center_idx], src[center_idx + 1], src[center_idx + 2]];

                let mut sum = [0.0f32; 3];
                let mut weight_sum = 0.0f32;

                for dy in -radius..=radius {
                    for dx in -radius..=radius {
                        let nx = (x as i64 + dx).clamp(0, width as i64 - 1) as usize;
                        let ny = (y as i64 + dy).clamp(0, height as i64 - 1) as usize;
                        let idx = (ny * width + nx) * BYTES_PER_PIXEL;
                        let neighbor = [src[idx], src[idx + 1], src[idx + 2]];

                        let space_sq = (dx * dx + dy * dy) as f32;
                        let spatial_weight = (-space_sq / space_denom).exp();

                        let color_sq = color_distance_sq(center, neighbor);
                        let color_weight = (-color_sq / color_denom).exp();

                        let weight = spatial_weight * color_weight;
                        sum[0] += neighbor[0] as f32 * weight;
                        sum[1] += neighbor[1] as f32 * weight;
                        sum[2] += neighbor[2] as f32 * weight;
                        weight_sum += weight;
                    }
                }

                let base = x * BYTES_PER_PIXEL;
                if weight_sum > 0.0 {
                    for c in 0..3 {
                        row[base + c] = (sum[c] / weight_sum).round().clamp(0.0, 255.0) as u8;
                    }
                } else {
                    // All weights underflowed: keep the center pixel.
                    row[base] = center[0];
                    row[base + 1] = center[1];
                    row[base + 2] = center[2];
                }
            }
        });

    out
}

fn gaussian(image: &RasterImage, strength: f32) -> RasterImage {
    let radius = (strength * 3.0 + 1.0) as i64;
    let sigma = strength * 2.0 + 1.0;
    let kernel = gaussian_kernel_2d(radius as usize, sigma);
    let size = 2 * radius as usize + 1;

    let width = image.width as usize;
    let height = image.height as usize;
    let row_bytes = width * BYTES_PER_PIXEL;
    let src = &image.pixels;

    let mut out = image.clone();
    out.pixels
        .par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(y, row)| {
            for x in 0..width {
                let mut sum = [0.0f32; 3];
                for dy in -radius..=radius {
                    for dx in -radius..=radius {
                        let nx = (x as i64 + dx).clamp(0, width as i64 - 1) as usize;
                        let ny = (y as i64 + dy).clamp(0, height as i64 - 1) as usize;
                        let idx = (ny * width + nx) * BYTES_PER_PIXEL;
                        let weight =
                            kernel[(dy + radius) as usize * size + (dx + radius) as usize];
                        sum[0] += src[idx] as f32 * weight;
                        sum[1] += src[idx + 1] as f32 * weight;
                        sum[2] += src[idx + 2] as f32 * weight;
                    }
                }
                let base = x * BYTES_PER_PIXEL;
                for c in 0..3 {
                    row[base + c] = sum[c].round().clamp(0.0, 255.0) as u8;
                }
            }
        });

    out
}

#[inline]
fn color_distance_sq(a: [u8; 3], b: [u8; 3]) -> f32 {
    let dr = a[0] as f32 - b[0] as f32;
    let dg = a[1] as f32 - b[1] as f32;
    let db = a[2] as f32 - b[2] as f32;
    dr * dr + dg * dg + db * db
}

/// Normalized `(2r+1)²` gaussian kernel, flattened row-major.
fn gaussian_kernel_2d(radius: usize, sigma: f32) -> Vec<f32> {
    let size = 2 * radius + 1;
    let denom = 2.0 * sigma * sigma;
    let mut kernel = Vec::with_capacity(size * size);
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 - radius as f32;
            let dy = y as f32 - radius as f32;
            kernel.push((-(dx * dx + dy * dy) / denom).exp());
        }
    }
    let sum: f32 = kernel.iter().sum();
    for w in &mut kernel {
        *w /= sum;
    }
    kernel
}
