//! Zonal skin-condition classification
//!
//! Two layouts are supported:
//! - `tu_zone`: the classic two-bucket model (T-zone = forehead + nose,
//!   U-zone = cheeks + chin) with zone-specific sebum thresholds and a fixed
//!   decision table for the overall skin type.
//! - `six_zone`: six independently sampled zones with per-zone oiliness and
//!   sensitivity tables, pore-size buckets and concern tags.
//!
//! Sebum and hydration are proxies derived from mean L*a*b* color; nothing
//! here measures oil physically.

mod six_zone;
mod tu_zone;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

pub use six_zone::{
    analyze_six_zones, analyze_zone_metrics, derive_overall_skin_type, zone_thresholds,
    SixZoneAnalysis, ZoneConcern, ZoneMetrics, ZoneThresholds,
};
pub use tu_zone::{
    analyze_t_zone, analyze_tu_zones, analyze_u_zone, classify_sebum, combine_zone_analysis,
    hydration_from_lab, sebum_from_lab, CombinedZoneAnalysis, ZoneAnalysis,
};

/// Which half of the two-zone model a measurement belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneType {
    TZone,
    UZone,
}

impl std::fmt::Display for ZoneType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::TZone => "T-zone",
            Self::UZone => "U-zone",
        })
    }
}

/// Condition of a single zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinCondition {
    Dry,
    Normal,
    Oily,
}

impl SkinCondition {
    pub const ALL: [SkinCondition; 3] = [Self::Dry, Self::Normal, Self::Oily];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dry => "dry",
            Self::Normal => "normal",
            Self::Oily => "oily",
        }
    }
}

impl std::fmt::Display for SkinCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall skin type of a face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinType {
    Dry,
    Normal,
    Oily,
    Combination,
}

impl SkinType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dry => "dry",
            Self::Normal => "normal",
            Self::Oily => "oily",
            Self::Combination => "combination",
        }
    }
}

impl std::fmt::Display for SkinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visible pore size bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoreSize {
    Small,
    Medium,
    Large,
}

impl PoreSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// One bucket larger, saturating at `Large`
    pub fn bump(self) -> Self {
        match self {
            Self::Small => Self::Medium,
            Self::Medium | Self::Large => Self::Large,
        }
    }
}

impl std::fmt::Display for PoreSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
