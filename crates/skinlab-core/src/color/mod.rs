//! Color space conversions
//!
//! Converts device sRGB samples to CIE L*a*b* (D65) and to perceptual
//! luminance. Every other analysis stage consumes colors through this module.

mod lab;


pub use lab::{rgb_to_lab, srgb_to_linear, Lab};

/// Luminance-weighted gray value (Rec.601 weights) of an sRGB sample.
///
/// Output is in the 0.0-255.0 range.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f32 {
    0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32
}
