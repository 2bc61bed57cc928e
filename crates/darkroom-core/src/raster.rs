//! The raster buffer every processor operates on.
//!
//! Pixels are packed RGBA, 4 bytes per pixel, row-major order. Processors
//! never mutate a caller's buffer: each stage takes a reference and returns a
//! freshly allocated `RasterImage`, so callers may retain the original.

use crate::error::ProcessError;

/// Bytes per packed RGBA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// A decoded image with packed RGBA pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    /// Length is always width * height * 4.
    pub pixels: Vec<u8>,
}

impl RasterImage {
    /// Create a new `RasterImage`, validating dimensions and buffer length.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, ProcessError> {
        if width == 0 || height == 0 {
            return Err(ProcessError::DegenerateInput { width, height });
        }
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if pixels.len() != expected {
            return Err(ProcessError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create an image filled with a single RGBA color.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, ProcessError> {
        if width == 0 || height == 0 {
            return Err(ProcessError::DegenerateInput { width, height });
        }
        let count = width as usize * height as usize;
        let mut pixels = Vec::with_capacity(count * BYTES_PER_PIXEL);
        for _ in 0..count {
            pixels.extend_from_slice(&rgba);
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a `RasterImage` from an `image::RgbaImage`.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Convert to an `image::RgbaImage` for resizing or encoding.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Validate the structural invariants, surfacing a typed error.
    ///
    /// Every processor entry point calls this before touching pixel data.
    pub fn validate(&self) -> Result<(), ProcessError> {
        if self.width == 0 || self.height == 0 {
            return Err(ProcessError::DegenerateInput {
                width: self.width,
                height: self.height,
            });
        }
        let expected = self.pixel_count() * BYTES_PER_PIXEL;
        if self.pixels.len() != expected {
            return Err(ProcessError::BufferSizeMismatch {
                expected,
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }

    /// Get the RGBA channels of the pixel at (x, y).
    ///
    /// Returns `None` when the coordinate is out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        Some([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }

    /// Set the pixel at (x, y). Out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        self.pixels[i..i + BYTES_PER_PIXEL].copy_from_slice(&rgba);
    }

    /// Produce a new image by mapping every RGB triple, preserving alpha.
    ///
    /// The workhorse for per-pixel adjustments: `f` receives (r, g, b) and
    /// returns the transformed triple.
    pub fn map_rgb<F>(&self, mut f: F) -> RasterImage
    where
        F: FnMut(u8, u8, u8) -> (u8, u8, u8),
    {
        let mut out = self.clone();
        for chunk in out.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            let (r, g, b) = f(chunk[0], chunk[1], chunk[2]);
            chunk[0] = r;
            chunk[1] = g;
            chunk[2] = b;
        }
        out
    }

    /// Like `map_rgb` but also passes the (x, y) coordinate of each pixel.
    pub fn map_rgb_xy<F>(&self, mut f: F) -> RasterImage
    where
        F: FnMut(u32, u32, u8, u8, u8) -> (u8, u8, u8),
    {
        let mut out = self.clone();
        let width = self.width as usize;
        for (i, chunk) in out.pixels.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
            let x = (i % width) as u32;
            let y = (i / width) as u32;
            let (r, g, b) = f(x, y, chunk[0], chunk[1], chunk[2]);
            chunk[0] = r;
            chunk[1] = g;
            chunk[2] = b;
        }
        out
    }

    /// Generate an aspect-preserving thumbnail whose longest edge is at most
    /// `max_size` pixels. Uses bilinear interpolation for speed.
    ///
    /// An image already within bounds is returned as a copy, never aliased.
    pub fn thumbnail(&self, max_size: u32) -> Result<RasterImage, ProcessError> {
        self.validate()?;
        if max_size == 0 {
            return Err(ProcessError::DegenerateInput {
                width: max_size,
                height: max_size,
            });
        }
        if self.width <= max_size && self.height <= max_size {
            return Ok(self.clone());
        }

        let ratio = f64::from(max_size) / f64::from(self.width.max(self.height));
        let new_w = ((f64::from(self.width) * ratio).round() as u32).max(1);
        let new_h = ((f64::from(self.height) * ratio).round() as u32).max(1);

        let rgba = self
            .to_rgba_image()
            .ok_or(ProcessError::BufferSizeMismatch {
                expected: self.pixel_count() * BYTES_PER_PIXEL,
                actual: self.pixels.len(),
            })?;
        let resized =
            image::imageops::resize(&rgba, new_w, new_h, image::imageops::FilterType::Triangle);
        Ok(Self::from_rgba_image(resized))
    }
}
