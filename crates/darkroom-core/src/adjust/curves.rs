//! Curve adjustments through 256-entry lookup tables.
//!
//! A curve is a sparse map of control points (input byte -> output byte).
//! The LUT is built by piecewise linear interpolation between sorted keys;
//! inputs outside the key range clamp to the nearest endpoint's output.
//! The combined RGB curve is applied first, then the per-channel curves.

use std::collections::BTreeMap;

use crate::error::ProcessError;
use crate::raster::{RasterImage, BYTES_PER_PIXEL};

/// A pre-computed 256-entry curve lookup table.
#[derive(Debug, Clone)]
pub struct CurveLut {
    /// lut[input] = output
    pub lut: [u8; 256],
}

impl CurveLut {
    /// Identity table (no change).
    pub fn identity() -> Self {
        let mut lut = [0u8; 256];
        for (i, entry) in lut.iter_mut().enumerate() {
            *entry = i as u8;
        }
        Self { lut }
    }

    /// Check if this table is the identity mapping.
    pub fn is_identity(&self) -> bool {
        self.lut.iter().enumerate().all(|(i, &v)| v == i as u8)
    }
}

impl Default for CurveLut {
    fn default() -> Self {
        Self::identity()
    }
}

/// Build a lookup table from sparse control points.
///
/// An empty map yields the identity table.
pub fn build_lookup_table(points: &BTreeMap<u8, u8>) -> CurveLut {
    let mut lut = CurveLut::identity();
    if points.is_empty() {
        return lut;
    }

    let keys: Vec<u8> = points.keys().copied().collect();
    let values: Vec<u8> = points.values().copied().collect();
    let first_key = keys[0];
    let last_key = keys[keys.len() - 1];

    for i in 0..=255u16 {
        let i = i as u8;
        let out = if i <= first_key {
            values[0]
        } else if i >= last_key {
            values[values.len() - 1]
        } else {
            // Find the segment containing i and interpolate linearly.
            let mut j = 0;
            while j < keys.len() - 1 && keys[j + 1] < i {
                j += 1;
            }
            let (x1, y1) = (keys[j] as f32, values[j] as f32);
            let (x2, y2) = (keys[j + 1] as f32, values[j + 1] as f32);
            let t = (i as f32 - x1) / (x2 - x1);
            (y1 + t * (y2 - y1)).round().clamp(0.0, 255.0) as u8
        };
        lut.lut[i as usize] = out;
    }

    lut
}

/// Apply curve adjustments: the combined RGB curve first, then the
/// individual channel curves.
pub fn apply_curves(
    image: &RasterImage,
    rgb_curve: &BTreeMap<u8, u8>,
    red_curve: &BTreeMap<u8, u8>,
    green_curve: &BTreeMap<u8, u8>,
    blue_curve: &BTreeMap<u8, u8>,
) -> Result<RasterImage, ProcessError> {
    image.validate()?;

    let rgb_lut = build_lookup_table(rgb_curve);
    let red_lut = build_lookup_table(red_curve);
    let green_lut = build_lookup_table(green_curve);
    let blue_lut = build_lookup_table(blue_curve);

    if rgb_lut.is_identity()
        && red_lut.is_identity()
        && green_lut.is_identity()
        && blue_lut.is_identity()
    {
        return Ok(image.clone());
    }

    let mut out = image.clone();
    for chunk in out.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
        chunk[0] = red_lut.lut[rgb_lut.lut[chunk[0] as usize] as usize];
        chunk[1] = green_lut.lut[rgb_lut.lut[chunk[1] as usize] as usize];
        chunk[2] = blue_lut.lut[rgb_lut.lut[chunk[2] as usize] as usize];
    }
    Ok(out)
}

/// Named curve presets shipping with the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurvePreset {
    /// S-curve pushing shadows down and highlights up.
    ContrastBoost,
    /// Gentle inverse S-curve with lifted blacks and rolled-off whites.
    SoftContrast,
    /// Per-channel film emulation with split-toned blacks.
    FilmLook,
    /// Washed-out look with heavily lifted blacks.
    Vintage,
}

/// Apply a named curve preset.
pub fn apply_curve_preset(
    image: &RasterImage,
    preset: CurvePreset,
) -> Result<RasterImage, ProcessError> {
    let empty = BTreeMap::new();
    match preset {
        CurvePreset::ContrastBoost => {
            let curve = BTreeMap::from([(0, 0), (64, 48), (128, 128), (192, 208), (255, 255)]);
            apply_curves(image, &curve, &empty, &empty, &empty)
        }
        CurvePreset::SoftContrast => {
            let curve = BTreeMap::from([(0, 16), (64, 72), (128, 128), (192, 184), (255, 240)]);
            apply_curves(image, &curve, &empty, &empty, &empty)
        }
        CurvePreset::FilmLook => {
            let red = BTreeMap::from([(0, 8), (128, 136), (255, 248)]);
            let green = BTreeMap::from([(0, 4), (128, 128), (255, 252)]);
            let blue = BTreeMap::from([(0, 16), (128, 120), (255, 240)]);
            apply_curves(image, &empty, &red, &green, &blue)
        }
        CurvePreset::Vintage => {
            let curve = BTreeMap::from([(0, 32), (64, 80), (128, 144), (192, 200), (255, 224)]);
            apply_curves(image, &curve, &empty, &empty, &empty)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_image() -> RasterImage {
        let mut pixels = Vec::new();
        for v in (0..=255u16).step_by(17) {
            pixels.extend_from_slice(&[v as u8, v as u8, v as u8, 255]);
        }
        RasterImage::new(16, 1, pixels).unwrap()
    }

    #[test]
    fn test_empty_points_is_identity() {
        let lut = build_lookup_table(&BTreeMap::new());
        assert!(lut.is_identity());
    }

    #[test]
    fn test_identity_control_points() {
        // {0: 0, 255: 255} is the identity curve.
        let points = BTreeMap::from([(0, 0), (255, 255)]);
        let lut = build_lookup_table(&points);
        assert!(lut.is_identity());
    }

    #[test]
    fn test_identity_curve_preserves_image() {
        let img = gradient_image();
        let points = BTreeMap::from([(0u8, 0u8), (255, 255)]);
        let empty = BTreeMap::new();
        let out = apply_curves(&img, &points, &empty, &empty, &empty).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_interpolation_between_points() {
        let points = BTreeMap::from([(0, 0), (100, 200)]);
        let lut = build_lookup_table(&points);
        assert_eq!(lut.lut[0], 0);
        assert_eq!(lut.lut[50], 100);
        assert_eq!(lut.lut[100], 200);
    }

    #[test]
    fn test_endpoint_clamping() {
        let points = BTreeMap::from([(100, 50), (200, 150)]);
        let lut = build_lookup_table(&points);
        // Below the first key, clamp to its output.
        assert_eq!(lut.lut[0], 50);
        assert_eq!(lut.lut[99], 50);
        // Above the last key, clamp to its output.
        assert_eq!(lut.lut[201], 150);
        assert_eq!(lut.lut[255], 150);
    }

    #[test]
    fn test_single_point_flattens() {
        let points = BTreeMap::from([(128, 77)]);
        let lut = build_lookup_table(&points);
        assert_eq!(lut.lut[0], 77);
        assert_eq!(lut.lut[128], 77);
        assert_eq!(lut.lut[255], 77);
    }

    #[test]
    fn test_per_channel_applied_after_combined() {
        // Combined maps 100 -> 200; red curve then maps 200 -> 0.
        let rgb = BTreeMap::from([(0, 0), (100, 200), (255, 255)]);
        let red = BTreeMap::from([(200, 0), (255, 0)]);
        let empty = BTreeMap::new();
        let img = RasterImage::filled(1, 1, [100, 100, 100, 255]).unwrap();
        let out = apply_curves(&img, &rgb, &red, &empty, &empty).unwrap();
        let [r, g, _, _] = out.get_pixel(0, 0).unwrap();
        assert_eq!(r, 0);
        assert_eq!(g, 200);
    }

    #[test]
    fn test_contrast_boost_preset() {
        let img = gradient_image();
        let out = apply_curve_preset(&img, CurvePreset::ContrastBoost).unwrap();
        // Shadows pushed down, highlights pushed up.
        assert!(out.get_pixel(3, 0).unwrap()[0] < img.get_pixel(3, 0).unwrap()[0]);
        assert!(out.get_pixel(12, 0).unwrap()[0] > img.get_pixel(12, 0).unwrap()[0]);
    }

    #[test]
    fn test_vintage_preset_lifts_blacks() {
        let img = RasterImage::filled(1, 1, [0, 0, 0, 255]).unwrap();
        let out = apply_curve_preset(&img, CurvePreset::Vintage).unwrap();
        assert_eq!(out.get_pixel(0, 0), Some([32, 32, 32, 255]));
    }

    #[test]
    fn test_film_look_splits_channels() {
        let img = RasterImage::filled(1, 1, [0, 0, 0, 255]).unwrap();
        let out = apply_curve_preset(&img, CurvePreset::FilmLook).unwrap();
        assert_eq!(out.get_pixel(0, 0), Some([8, 4, 16, 255]));
    }

    #[test]
    fn test_alpha_untouched() {
        let img = RasterImage::filled(1, 1, [50, 50, 50, 9]).unwrap();
        let out = apply_curve_preset(&img, CurvePreset::Vintage).unwrap();
        assert_eq!(out.get_pixel(0, 0).unwrap()[3], 9);
    }
}
