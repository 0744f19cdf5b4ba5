//! Texture score, level and description

use serde::{Deserialize, Serialize};

use super::haralick::HaralickFeatures;

const HIGH_CONTRAST_ABOVE: f64 = 70.0;
const LOW_HOMOGENEITY_BELOW: f64 = 30.0;

/// Four-way texture verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureLevel {
    VeryRough,
    Rough,
    Normal,
    Smooth,
}

impl TextureLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryRough => "very_rough",
            Self::Rough => "rough",
            Self::Normal => "normal",
            Self::Smooth => "smooth",
        }
    }

    fn base_description(&self) -> &'static str {
        match self {
            Self::Smooth => "Smooth, even skin surface",
            Self::Normal => "Normal skin texture with minor irregularities",
            Self::Rough => "Rough texture with visible irregularities",
            Self::VeryRough => "Very rough texture with pronounced irregularities",
        }
    }
}

impl std::fmt::Display for TextureLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Combine normalized features into a 0-100 score.
///
/// Starts from 50; uniformity and energy raise it, contrast and entropy
/// lower it.
pub fn calculate_texture_score(features: &HaralickFeatures) -> u32 {
    let score = 50.0
        + (features.homogeneity - 50.0) * 0.35
        + (features.energy - 50.0) * 0.25
        + (50.0 - features.contrast) * 0.25
        + (50.0 - features.entropy) * 0.15;
    score.round().clamp(0.0, 100.0) as u32
}

pub fn classify_texture(score: u32) -> TextureLevel {
    match score {
        75.. => TextureLevel::Smooth,
        50..=74 => TextureLevel::Normal,
        25..=49 => TextureLevel::Rough,
        _ => TextureLevel::VeryRough,
    }
}

/// Base text for the level plus clauses for extreme contrast or uniformity
pub fn describe_texture(level: TextureLevel, features: &HaralickFeatures) -> String {
    let mut description = level.base_description().to_string();
    if features.contrast > HIGH_CONTRAST_ABOVE {
        description.push_str("; high surface variation");
    }
    if features.homogeneity < LOW_HOMOGENEITY_BELOW {
        description.push_str("; low texture uniformity");
    }
    description
}
