//! Surface texture analysis
//!
//! Builds a gray-level co-occurrence matrix (GLCM) over a luminance-quantized
//! image, extracts five Haralick statistics from it and turns them into a
//! 0-100 texture score with a four-way level and a short description.
//!
//! Modules:
//! - `glcm`: parameter validation and co-occurrence counting
//! - `haralick`: raw statistics and their 0-100 normalization
//! - `score`: score, level and description

mod glcm;
mod haralick;
mod score;


use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::decoders::ImageBuffer;
use crate::error::Result;

pub use glcm::{calculate_glcm, GlcmMatrix, GlcmParams};
pub use haralick::{extract_haralick_features, normalize_features, HaralickFeatures};
pub use score::{calculate_texture_score, classify_texture, describe_texture, TextureLevel};

/// Angles sampled by the direction-invariant variant
pub const MULTI_ANGLES: [f64; 4] = [0.0, 45.0, 90.0, 135.0];

/// Angle reported when features were averaged over `MULTI_ANGLES`
pub const MULTI_ANGLE_SENTINEL: f64 = -1.0;

/// Texture verdict for one image region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureAnalysis {
    /// Normalized features, each in 0-100
    pub features: HaralickFeatures,
    /// Features as measured on the matrix
    pub raw_features: HaralickFeatures,
    pub texture_score: u32,
    pub texture_level: TextureLevel,
    pub description: String,
    pub levels: usize,
    pub distance: u32,
    /// Degrees, or `MULTI_ANGLE_SENTINEL` for the averaged variant
    pub angle: f64,
}

impl TextureAnalysis {
    pub fn is_multi_angle(&self) -> bool {
        self.angle == MULTI_ANGLE_SENTINEL
    }
}

fn finish_analysis(
    raw: HaralickFeatures,
    levels: usize,
    distance: u32,
    angle: f64,
) -> TextureAnalysis {
    let features = normalize_features(&raw, levels);
    let texture_score = calculate_texture_score(&features);
    let texture_level = classify_texture(texture_score);
    let description = describe_texture(texture_level, &features);

    log::debug!(
        "texture: levels={} distance={} angle={} score={} ({})",
        levels,
        distance,
        angle,
        texture_score,
        texture_level
    );

    TextureAnalysis {
        features,
        raw_features: raw,
        texture_score,
        texture_level,
        description,
        levels,
        distance,
        angle,
    }
}

/// Analyse texture along a single direction
pub fn analyze_texture(image: &ImageBuffer, params: &GlcmParams) -> Result<TextureAnalysis> {
    let glcm = calculate_glcm(image, params)?;
    let raw = extract_haralick_features(&glcm);
    Ok(finish_analysis(raw, params.levels, params.distance, params.angle))
}

/// Analyse texture averaged over 0, 45, 90 and 135 degrees.
///
/// Each angle gets its own matrix, computed in parallel; the raw features are
/// averaged before normalization so the score does not depend on direction.
///
/// Every angle must yield at least one in-bounds pair: a crop narrower than
/// `distance + 1` in either dimension fails with `EmptyRegion` even if some
/// angles would succeed. Use [`analyze_texture`] with a fixed angle for such
/// strips.
pub fn analyze_texture_multi_angle(
    image: &ImageBuffer,
    levels: usize,
    distance: u32,
) -> Result<TextureAnalysis> {
    let per_angle: Vec<HaralickFeatures> = MULTI_ANGLES
        .par_iter()
        .map(|&angle| -> Result<HaralickFeatures> {
            let params = GlcmParams::new(levels, distance, angle)?;
            let glcm = calculate_glcm(image, &params)?;
            Ok(extract_haralick_features(&glcm))
        })
        .collect::<Result<Vec<_>>>()?;

    let raw = HaralickFeatures::mean(&per_angle);
    Ok(finish_analysis(raw, levels, distance, MULTI_ANGLE_SENTINEL))
}
