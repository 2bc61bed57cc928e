//! Color-space conversion helpers shared by the adjustment processors.
//!
//! All conversions fail safe: a zero denominator yields 0 and NaN
//! intermediates sanitize to 0, so invalid floating results never reach
//! pixel data.

/// ITU-R BT.601 coefficient for red in luminance calculation.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 coefficient for green in luminance calculation.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 coefficient for blue in luminance calculation.
pub const LUMINANCE_B: f32 = 0.114;

/// Luminance of an 8-bit RGB triple, on the same 0-255 scale.
#[inline]
pub fn luminance_u8(r: u8, g: u8, b: u8) -> f32 {
    LUMINANCE_R * r as f32 + LUMINANCE_G * g as f32 + LUMINANCE_B * b as f32
}

/// Luminance of normalized RGB values (0.0 to 1.0).
#[inline]
pub fn luminance(r: f32, g: f32, b: f32) -> f32 {
    LUMINANCE_R * r + LUMINANCE_G * g + LUMINANCE_B * b
}

/// Replace NaN with 0.
#[inline]
fn sanitize(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v
    }
}

/// Clamp a float to [0, 255] and round to u8.
#[inline]
pub fn clamp_u8(v: f32) -> u8 {
    sanitize(v).clamp(0.0, 255.0).round() as u8
}

/// Linear blend between two channel values, `t` clamped to [0, 1].
#[inline]
pub fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    let t = sanitize(t).clamp(0.0, 1.0);
    clamp_u8(a as f32 + t * (b as f32 - a as f32))
}

/// Convert 8-bit RGB to HSL.
///
/// Returns (h in [0, 360), s in [0, 1], l in [0, 1]). Achromatic inputs map
/// to s = 0 with hue defined as 0.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let rf = r as f32 / 255.0;
    let gf = g as f32 / 255.0;
    let bf = b as f32 / 255.0;

    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let lightness = (max + min) / 2.0;

    let saturation = if delta == 0.0 {
        0.0
    } else {
        let denominator = 1.0 - (2.0 * lightness - 1.0).abs();
        if denominator == 0.0 {
            0.0
        } else {
            delta / denominator
        }
    };

    let hue = if delta == 0.0 {
        0.0
    } else if max == rf {
        let h = ((gf - bf) / delta) % 6.0;
        (if h < 0.0 { h + 6.0 } else { h }) * 60.0
    } else if max == gf {
        ((bf - rf) / delta + 2.0) * 60.0
    } else {
        ((rf - gf) / delta + 4.0) * 60.0
    };

    (
        sanitize(hue),
        sanitize(saturation).clamp(0.0, 1.0),
        sanitize(lightness).clamp(0.0, 1.0),
    )
}

/// Convert HSL back to 8-bit RGB.
///
/// `h` is taken modulo 360; `s` and `l` are clamped to [0, 1].
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
    let h = {
        let h = sanitize(h) % 360.0;
        if h < 0.0 {
            h + 360.0
        } else {
            h
        }
    };
    let s = sanitize(s).clamp(0.0, 1.0);
    let l = sanitize(l).clamp(0.0, 1.0);

    if s == 0.0 {
        let gray = clamp_u8(l * 255.0);
        return (gray, gray, gray);
    }

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r1, g1, b1) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (
        clamp_u8((r1 + m) * 255.0),
        clamp_u8((g1 + m) * 255.0),
        clamp_u8((b1 + m) * 255.0),
    )
}

/// Convert 8-bit RGB to HSV.
///
/// Returns (h in [0, 360), s in [0, 1], v in [0, 1]).
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let rf = r as f32 / 255.0;
    let gf = g as f32 / 255.0;
    let bf = b as f32 / 255.0;

    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let hue = if delta == 0.0 {
        0.0
    } else if max == rf {
        let h = ((gf - bf) / delta) % 6.0;
        (if h < 0.0 { h + 6.0 } else { h }) * 60.0
    } else if max == gf {
        ((bf - rf) / delta + 2.0) * 60.0
    } else {
        ((rf - gf) / delta + 4.0) * 60.0
    };

    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    (sanitize(hue), sanitize(saturation), sanitize(max))
}

/// Convert HSV back to 8-bit RGB.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (u8, u8, u8) {
    let h = {
        let h = sanitize(h) % 360.0;
        if h < 0.0 {
            h + 360.0
        } else {
            h
        }
    };
    let s = sanitize(s).clamp(0.0, 1.0);
    let v = sanitize(v).clamp(0.0, 1.0);

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r1, g1, b1) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (
        clamp_u8((r1 + m) * 255.0),
        clamp_u8((g1 + m) * 255.0),
        clamp_u8((b1 + m) * 255.0),
    )
}
