//! Edge detection and emboss, both 3x3 neighborhood operators.

use crate::color::{clamp_u8, luminance_u8};
use crate::error::ProcessError;
use crate::raster::{RasterImage, BYTES_PER_PIXEL};

/// Sobel gradient magnitude.
///
/// The luminance gradient is computed with the 3x3 Sobel kernels and the
/// magnitude written to all three channels, producing a grayscale edge map.
/// The one-pixel border, where the kernel does not fit, is set to black.
pub fn apply_edge_detection(image: &RasterImage) -> Result<RasterImage, ProcessError> {
    image.validate()?;

    let width = image.width as usize;
    let height = image.height as usize;

    let mut out = image.clone();
    for chunk in out.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
        chunk[0] = 0;
        chunk[1] = 0;
        chunk[2] = 0;
    }
    if width < 3 || height < 3 {
        return Ok(out);
    }

    let lum_at = |x: usize, y: usize| -> f32 {
        let idx = (y * width + x) * BYTES_PER_PIXEL;
        luminance_u8(
            image.pixels[idx],
            image.pixels[idx + 1],
            image.pixels[idx + 2],
        )
    };

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let tl = lum_at(x - 1, y - 1);
            let tc = lum_at(x, y - 1);
            let tr = lum_at(x + 1, y - 1);
            let ml = lum_at(x - 1, y);
            let mr = lum_at(x + 1, y);
            let bl = lum_at(x - 1, y + 1);
            let bc = lum_at(x, y + 1);
            let br = lum_at(x + 1, y + 1);

            let gx = (tr + 2.0 * mr + br) - (tl + 2.0 * ml + bl);
            let gy = (bl + 2.0 * bc + br) - (tl + 2.0 * tc + tr);
            let magnitude = clamp_u8((gx * gx + gy * gy).sqrt());

            let idx = (y * width + x) * BYTES_PER_PIXEL;
            out.pixels[idx] = magnitude;
            out.pixels[idx + 1] = magnitude;
            out.pixels[idx + 2] = magnitude;
        }
    }

    Ok(out)
}

/// Emboss relief effect.
///
/// Each channel becomes its difference from the upper-left neighbor plus a
/// 128 gray bias, so flat regions render mid-gray and transitions render as
/// highlights or shadows. The one-pixel border is copied from the source.
pub fn apply_emboss(image: &RasterImage) -> Result<RasterImage, ProcessError> {
    image.validate()?;

    let width = image.width as usize;
    let height = image.height as usize;

    let mut out = image.clone();
    if width < 3 || height < 3 {
        return Ok(out);
    }

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let idx = (y * width + x) * BYTES_PER_PIXEL;
            let diag = ((y - 1) * width + (x - 1)) * BYTES_PER_PIXEL;
            for c in 0..3 {
                let v = image.pixels[idx + c] as f32 - image.pixels[diag + c] as f32 + 128.0;
                out.pixels[idx + c] = clamp_u8(v);
            }
        }
    }

    Ok(out)
}
