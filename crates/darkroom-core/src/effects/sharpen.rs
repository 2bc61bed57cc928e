//! Unsharp-style sharpening with a 3x3 convolution kernel.

use crate::error::{check_range, ProcessError};
use crate::raster::{RasterImage, BYTES_PER_PIXEL};

/// Sharpen the image with the kernel
///
/// ```text
/// [  0   -k    0 ]
/// [ -k  1+4k  -k ]
/// [  0   -k    0 ]
/// ```
///
/// where `k` is the intensity, any non-negative value. The one-pixel border
/// is copied from the source unchanged. Intensity 0 returns an unchanged
/// copy.
pub fn apply_sharpen(image: &RasterImage, intensity: f32) -> Result<RasterImage, ProcessError> {
    image.validate()?;
    check_range("sharpen", intensity, 0.0, f32::MAX)?;

    if intensity == 0.0 {
        return Ok(image.clone());
    }

    let width = image.width as usize;
    let height = image.height as usize;
    let center = 1.0 + 4.0 * intensity;

    let mut out = image.clone();
    if width < 3 || height < 3 {
        return Ok(out);
    }

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let idx = (y * width + x) * BYTES_PER_PIXEL;
            let up = idx - width * BYTES_PER_PIXEL;
            let down = idx + width * BYTES_PER_PIXEL;
            let left = idx - BYTES_PER_PIXEL;
            let right = idx + BYTES_PER_PIXEL;
            for c in 0..3 {
                let v = center * image.pixels[idx + c] as f32
                    - intensity
                        * (image.pixels[up + c] as f32
                            + image.pixels[down + c] as f32
                            + image.pixels[left + c] as f32
                            + image.pixels[right + c] as f32);
                out.pixels[idx + c] = v.round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    Ok(out)
}
