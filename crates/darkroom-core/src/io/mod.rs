//! Image decode/encode boundary.
//!
//! The editor core works exclusively on [`RasterImage`](crate::RasterImage)
//! buffers; this module is the only place compressed bytes enter or leave.

mod decode;
mod encode;

pub use decode::{decode, DecodeError};
pub use encode::{encode_jpeg, encode_png, EncodeError};
