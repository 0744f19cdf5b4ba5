//! LAB (CIE L*a*b*) conversion from 8-bit sRGB

use serde::{Deserialize, Serialize};

/// LAB color representation (CIE L*a*b*)
/// - L: 0.0-100.0 (lightness)
/// - a: approximately -128 to +127 (green-red axis)
/// - b: approximately -128 to +127 (blue-yellow axis)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Lab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

/// D65 standard illuminant reference white point
pub(crate) const D65_X: f32 = 0.95047;
pub(crate) const D65_Y: f32 = 1.00000;
pub(crate) const D65_Z: f32 = 1.08883;

/// sRGB to XYZ matrix (D65)
pub(crate) const SRGB_TO_XYZ: [[f32; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.119_192, 0.9503041],
];

/// CIE epsilon (216/24389)
const LAB_EPSILON: f32 = 0.008856;
/// CIE kappa (24389/27)
const LAB_KAPPA: f32 = 903.3;

/// Decode one gamma-encoded sRGB channel (0-255) to linear light (0.0-1.0)
#[inline]
pub fn srgb_to_linear(channel: u8) -> f32 {
    let c = channel as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert linear RGB to XYZ (D65)
#[inline]
fn linear_rgb_to_xyz(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let m = &SRGB_TO_XYZ;
    let x = m[0][0] * r + m[0][1] * g + m[0][2] * b;
    let y = m[1][0] * r + m[1][1] * g + m[1][2] * b;
    let z = m[2][0] * r + m[2][1] * g + m[2][2] * b;
    (x, y, z)
}

/// LAB f(t) function
#[inline]
fn lab_f(t: f32) -> f32 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        (LAB_KAPPA * t + 16.0) / 116.0
    }
}

/// Convert an 8-bit sRGB sample to CIE LAB (D65 illuminant)
///
/// Pipeline: gamma decode -> linear RGB -> XYZ -> LAB.
/// Every one of the 256^3 inputs is valid.
#[inline]
pub fn rgb_to_lab(r: u8, g: u8, b: u8) -> Lab {
    let (x, y, z) = linear_rgb_to_xyz(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));

    // Normalize by reference white
    let fx = lab_f(x / D65_X);
    let fy = lab_f(y / D65_Y);
    let fz = lab_f(z / D65_Z);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}
