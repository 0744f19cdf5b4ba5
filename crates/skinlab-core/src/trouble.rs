//! Composite trouble score
//!
//! Combines texture roughness, pore size and oiliness deviation into one
//! 0-100 score. Each contribution is capped on its own (40/30/30) before the
//! three are summed, so no single factor can dominate the verdict.

use serde::{Deserialize, Serialize};

use crate::texture::{HaralickFeatures, TextureAnalysis};
use crate::zones::{PoreSize, SixZoneAnalysis, ZoneMetrics};

const TEXTURE_CAP: u32 = 40;
const PORE_CAP: u32 = 30;
const OILINESS_CAP: u32 = 30;

/// Oiliness treated as neither dry nor oily
const NEUTRAL_OILINESS: f64 = 50.0;

/// Ordered trouble buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TroubleLevel {
    Clear,
    Mild,
    Moderate,
    Severe,
}

impl TroubleLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }
}

impl std::fmt::Display for TroubleLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TroubleScoreResult {
    pub trouble_score: u32,
    pub trouble_level: TroubleLevel,
    pub texture_contribution: u32,
    pub pore_contribution: u32,
    pub oiliness_contribution: u32,
    pub recommendations: Vec<String>,
}

/// Numeric weight of a pore bucket
pub fn pore_size_score(pore_size: PoreSize) -> u32 {
    match pore_size {
        PoreSize::Small => 20,
        PoreSize::Medium => 50,
        PoreSize::Large => 85,
    }
}

/// Texture contribution from normalized features (cap 40)
pub fn texture_contribution(features: &HaralickFeatures) -> u32 {
    let base =
        features.contrast * 0.4 + (100.0 - features.homogeneity) * 0.4 + features.entropy * 0.2;
    ((base * 0.4).round().max(0.0) as u32).min(TEXTURE_CAP)
}

/// Pore contribution (cap 30)
pub fn pore_contribution(pore_size: PoreSize) -> u32 {
    ((pore_size_score(pore_size) as f64 * 0.3).round() as u32).min(PORE_CAP)
}

/// Oiliness contribution (cap 30); too dry and too oily count the same
pub fn oiliness_contribution(oiliness: f64) -> u32 {
    (((oiliness - NEUTRAL_OILINESS).abs() * 0.6).round() as u32).min(OILINESS_CAP)
}

pub fn classify_trouble(score: u32) -> TroubleLevel {
    match score {
        0..=24 => TroubleLevel::Clear,
        25..=49 => TroubleLevel::Mild,
        50..=74 => TroubleLevel::Moderate,
        _ => TroubleLevel::Severe,
    }
}

/// Base advice for the level plus lines gated on the dominant contributions
pub fn trouble_recommendations(
    level: TroubleLevel,
    texture: u32,
    pore: u32,
    oiliness: u32,
) -> Vec<String> {
    let mut recs: Vec<&str> = Vec::new();
    match level {
        TroubleLevel::Clear => {
            recs.push("Skin is in good condition; keep the current routine");
            if pore > 15 {
                recs.push("Use a light, non-comedogenic moisturizer to keep pores clear");
            }
        }
        TroubleLevel::Mild => {
            recs.push("Cleanse gently twice a day");
            if texture > 20 {
                recs.push("Gentle exfoliation 1-2 times a week to smooth texture");
            }
            if oiliness > 15 {
                recs.push("Switch to an oil-free moisturizer");
            }
            if pore > 20 {
                recs.push("A BHA toner can help refine visible pores");
            }
        }
        TroubleLevel::Moderate => {
            recs.push("Focus on barrier repair with a fragrance-free routine");
            if texture > 25 {
                recs.push("Add calming care such as centella or panthenol");
            }
            if oiliness > 20 {
                recs.push("Use a clay mask once a week to control sebum");
            }
            if pore > 25 {
                recs.push("Niacinamide serum to tighten enlarged pores");
            }
        }
        TroubleLevel::Severe => {
            recs.push("Consult a dermatologist");
            recs.push("Avoid harsh actives until the skin settles");
            if texture > 30 {
                recs.push("Pause exfoliation and retinoids");
            }
            if oiliness > 25 {
                recs.push("Use an oil-control line recommended for acne-prone skin");
            }
        }
    }
    recs.into_iter().map(String::from).collect()
}

fn score_components(
    features: &HaralickFeatures,
    pore_size: PoreSize,
    oiliness: f64,
) -> TroubleScoreResult {
    let texture = texture_contribution(features);
    let pore = pore_contribution(pore_size);
    let oil = oiliness_contribution(oiliness);

    let trouble_score = (texture + pore + oil).min(100);
    let trouble_level = classify_trouble(trouble_score);

    log::debug!(
        "trouble: texture={} pore={} oiliness={} -> {} ({})",
        texture,
        pore,
        oil,
        trouble_score,
        trouble_level
    );

    TroubleScoreResult {
        trouble_score,
        trouble_level,
        texture_contribution: texture,
        pore_contribution: pore,
        oiliness_contribution: oil,
        recommendations: trouble_recommendations(trouble_level, texture, pore, oil),
    }
}

/// Score a single zone against a texture analysis
pub fn calculate_trouble_score(
    zone: &ZoneMetrics,
    texture: &TextureAnalysis,
) -> TroubleScoreResult {
    score_components(&texture.features, zone.pore_size, zone.oiliness as f64)
}

/// Score a whole face: mean oiliness of the five skin zones and the largest
/// pore bucket among them.
pub fn calculate_face_trouble_score(
    six_zones: &SixZoneAnalysis,
    texture: &TextureAnalysis,
) -> TroubleScoreResult {
    let (count, oil_sum, pore_size) = six_zones.skin_zones().fold(
        (0usize, 0u32, PoreSize::Small),
        |(count, oil, pore), m| (count + 1, oil + m.oiliness, pore.max(m.pore_size)),
    );
    let oiliness = if count == 0 {
        NEUTRAL_OILINESS
    } else {
        oil_sum as f64 / count as f64
    };
    score_components(&texture.features, pore_size, oiliness)
}
