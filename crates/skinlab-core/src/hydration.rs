//! Roughness-based hydration estimate with TEWL and environment correction
//!
//! The base estimate comes from surface roughness (Ra): dehydrated skin
//! sheds more slowly, corneocytes pile up and the surface gets rougher. A
//! transepidermal water loss (TEWL) reading, when available, pulls the
//! estimate towards its own prediction by a bounded amount. Ambient humidity
//! and temperature are normalized against a baseline before either signal is
//! used.

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};
use crate::texture::TextureAnalysis;

/// Ra at which the roughness model predicts full hydration
const RA_BASELINE: f32 = 15.0;
/// Hydration points lost per unit of Ra above the baseline
const RA_SLOPE: f32 = 2.5;

/// Ra of a perfectly smooth texture score
const RA_FROM_TEXTURE_MIN: f32 = 10.0;
/// Ra gained per texture-score point below 100
const RA_PER_TEXTURE_POINT: f32 = 0.3;

/// TEWL upper bounds in g/m^2/h
const TEWL_HEALTHY_MAX: f32 = 10.0;
const TEWL_NORMAL_MAX: f32 = 15.0;
const TEWL_ELEVATED_MAX: f32 = 25.0;

/// TEWL hydration estimate: `100 - (tewl - 5) * 3`
const TEWL_FULL_HYDRATION: f32 = 5.0;
const TEWL_SLOPE: f32 = 3.0;

/// Share of the TEWL/Ra disagreement that is applied, and its bound
const TEWL_BLEND_WEIGHT: f32 = 0.6;
const TEWL_MAX_CORRECTION: f32 = 25.0;

/// Relative TEWL change per degree C and per humidity percent
const TEWL_TEMPERATURE_COEFF: f32 = 0.03;
const TEWL_HUMIDITY_COEFF: f32 = 0.01;

/// Hydration points per humidity percent when only Ra is available
const HUMIDITY_POINTS_PER_PCT: f32 = 0.15;
const HUMIDITY_MAX_ADJUSTMENT: f32 = 5.0;

const WELL_HYDRATED_AT: u32 = 70;
const NORMAL_AT: u32 = 50;
const DEHYDRATED_AT: u32 = 30;

/// Ambient conditions during a measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentReading {
    /// Relative humidity, percent
    pub humidity: f32,
    /// Degrees C
    pub temperature: f32,
}

/// Reference conditions that readings are normalized to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentBaseline {
    pub humidity: f32,
    pub temperature: f32,
}

impl Default for EnvironmentBaseline {
    fn default() -> Self {
        Self {
            humidity: 50.0,
            temperature: 22.0,
        }
    }
}

/// Barrier state implied by a TEWL reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TewlStatus {
    Healthy,
    Normal,
    Elevated,
    Compromised,
}

impl TewlStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Normal => "normal",
            Self::Elevated => "elevated",
            Self::Compromised => "compromised",
        }
    }
}

impl std::fmt::Display for TewlStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HydrationLevel {
    VeryDehydrated,
    Dehydrated,
    Normal,
    WellHydrated,
}

impl HydrationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryDehydrated => "very_dehydrated",
            Self::Dehydrated => "dehydrated",
            Self::Normal => "normal",
            Self::WellHydrated => "well_hydrated",
        }
    }
}

impl std::fmt::Display for HydrationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydrationCorrectionResult {
    /// Final hydration, 0-100
    pub hydration: u32,
    pub level: HydrationLevel,
    /// Hydration predicted from roughness alone
    pub ra_estimate: f32,
    /// Hydration predicted from the (normalized) TEWL reading
    pub tewl_estimate: Option<f32>,
    /// TEWL after environment normalization
    pub normalized_tewl: Option<f32>,
    /// Hydration points attributed to ambient conditions
    pub environment_adjustment: f32,
    pub tewl_status: Option<TewlStatus>,
}

/// `100 - (ra - 15) * 2.5`, clamped to 0-100
pub fn estimate_hydration_from_ra(ra: f32) -> f32 {
    (100.0 - (ra - RA_BASELINE) * RA_SLOPE).clamp(0.0, 100.0)
}

/// Roughness implied by a texture score: `10 + (100 - score) * 0.3`
pub fn estimate_ra_from_texture(texture: &TextureAnalysis) -> f32 {
    let score = texture.texture_score.min(100) as f32;
    RA_FROM_TEXTURE_MIN + (100.0 - score) * RA_PER_TEXTURE_POINT
}

pub fn classify_tewl(tewl: f32) -> TewlStatus {
    if tewl <= TEWL_HEALTHY_MAX {
        TewlStatus::Healthy
    } else if tewl <= TEWL_NORMAL_MAX {
        TewlStatus::Normal
    } else if tewl <= TEWL_ELEVATED_MAX {
        TewlStatus::Elevated
    } else {
        TewlStatus::Compromised
    }
}

/// Rescale a TEWL reading to the baseline conditions.
///
/// Warm or dry air raises evaporation, so the reading is divided by factors
/// above 1 in those conditions. Each factor is kept within [0.5, 2.0].
pub fn normalize_tewl(
    tewl: f32,
    environment: &EnvironmentReading,
    baseline: &EnvironmentBaseline,
) -> f32 {
    let temperature_factor = (1.0
        + TEWL_TEMPERATURE_COEFF * (environment.temperature - baseline.temperature))
        .clamp(0.5, 2.0);
    let humidity_factor = (1.0
        + TEWL_HUMIDITY_COEFF * (baseline.humidity - environment.humidity.clamp(0.0, 100.0)))
    .clamp(0.5, 2.0);
    tewl / (temperature_factor * humidity_factor)
}

fn estimate_hydration_from_tewl(tewl: f32) -> f32 {
    (100.0 - (tewl - TEWL_FULL_HYDRATION) * TEWL_SLOPE).clamp(0.0, 100.0)
}

/// Move the roughness estimate towards the TEWL estimate by a bounded step
fn blend(ra_estimate: f32, tewl_estimate: f32) -> f32 {
    ra_estimate
        + ((tewl_estimate - ra_estimate) * TEWL_BLEND_WEIGHT)
            .clamp(-TEWL_MAX_CORRECTION, TEWL_MAX_CORRECTION)
}

pub fn classify_hydration(hydration: u32) -> HydrationLevel {
    if hydration >= WELL_HYDRATED_AT {
        HydrationLevel::WellHydrated
    } else if hydration >= NORMAL_AT {
        HydrationLevel::Normal
    } else if hydration >= DEHYDRATED_AT {
        HydrationLevel::Dehydrated
    } else {
        HydrationLevel::VeryDehydrated
    }
}

/// Estimate hydration from roughness, refined by TEWL and ambient conditions.
///
/// Ra must be finite and non-negative. A missing TEWL reading falls back to
/// the roughness estimate; so does a negative or non-finite one. A reading
/// with non-finite humidity or temperature is ignored the same way. Without
/// TEWL the environment shifts the roughness estimate directly by a small
/// bounded humidity term.
pub fn correct_hydration(
    ra: f32,
    tewl: Option<f32>,
    environment: Option<&EnvironmentReading>,
    baseline: &EnvironmentBaseline,
) -> Result<HydrationCorrectionResult> {
    if !ra.is_finite() || ra < 0.0 {
        return Err(AnalysisError::InvalidMeasurement(format!(
            "Ra must be a non-negative number, got {}",
            ra
        )));
    }
    let ra_estimate = estimate_hydration_from_ra(ra);

    let environment = environment.filter(|env| {
        let valid = env.humidity.is_finite() && env.temperature.is_finite();
        if !valid {
            log::warn!(
                "Ignoring invalid environment reading ({}% RH, {} C)",
                env.humidity,
                env.temperature
            );
        }
        valid
    });

    let tewl = match tewl {
        Some(t) if t.is_finite() && t >= 0.0 => Some(t),
        Some(t) => {
            log::warn!("Ignoring invalid TEWL reading {}", t);
            None
        }
        None => None,
    };

    let (value, tewl_estimate, normalized_tewl, environment_adjustment) = match tewl {
        Some(raw) => {
            let normalized = environment
                .map(|env| normalize_tewl(raw, env, baseline))
                .unwrap_or(raw);
            let tewl_estimate = estimate_hydration_from_tewl(normalized);
            let value = blend(ra_estimate, tewl_estimate);
            let unadjusted = blend(ra_estimate, estimate_hydration_from_tewl(raw));
            (value, Some(tewl_estimate), Some(normalized), value - unadjusted)
        }
        None => {
            let adjustment = environment
                .map(|env| {
                    ((baseline.humidity - env.humidity) * HUMIDITY_POINTS_PER_PCT)
                        .clamp(-HUMIDITY_MAX_ADJUSTMENT, HUMIDITY_MAX_ADJUSTMENT)
                })
                .unwrap_or(0.0);
            (ra_estimate + adjustment, None, None, adjustment)
        }
    };

    let hydration = value.clamp(0.0, 100.0).round() as u32;
    let level = classify_hydration(hydration);
    log::debug!(
        "hydration: ra={:.1} ra_est={:.1} tewl_est={:?} env={:+.1} -> {} ({})",
        ra,
        ra_estimate,
        tewl_estimate,
        environment_adjustment,
        hydration,
        level
    );

    Ok(HydrationCorrectionResult {
        hydration,
        level,
        ra_estimate,
        tewl_estimate,
        normalized_tewl,
        environment_adjustment,
        tewl_status: normalized_tewl.map(classify_tewl),
    })
}
