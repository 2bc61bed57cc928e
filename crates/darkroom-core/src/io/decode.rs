//! Decoding compressed image bytes into RGBA rasters.

use thiserror::Error;

use crate::raster::RasterImage;

/// Errors that can occur while decoding image bytes.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input was empty.
    #[error("empty input buffer")]
    EmptyInput,

    /// The bytes are not a recognized image format or are damaged.
    #[error("failed to decode image: {0}")]
    CorruptedFile(String),
}

/// Decode JPEG or PNG bytes into an RGBA raster.
///
/// The format is sniffed from the bytes. Images without an alpha channel
/// gain an opaque one.
pub fn decode(bytes: &[u8]) -> Result<RasterImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    let img = image::load_from_memory(bytes)
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    Ok(RasterImage::from_rgba_image(img.into_rgba8()))
}
