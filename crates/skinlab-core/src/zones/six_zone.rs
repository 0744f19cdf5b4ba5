//! Six-zone skin metrics
//!
//! Each named zone is sampled on its own and judged against its own
//! thresholds, so a naturally oilier nose does not drag the cheeks along.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::tu_zone::{hydration_from_lab, sebum_from_lab};
use super::{PoreSize, SkinCondition, SkinType};
use crate::color::Lab;
use crate::decoders::ImageBuffer;
use crate::error::Result;
use crate::region::{
    extract_region, lab_statistics, BoundingBox, LabStats, SixZoneFaceRegion, SkinZone,
};

/// Lightness spread (std dev of L*) above which a zone reads as uneven
const UNEVEN_TONE_STD_DEV: f32 = 12.0;

/// Lightness spread above which pores are bumped one bucket up
const PORE_SHADOW_STD_DEV: f32 = 8.0;

/// Hydration proxy below which a zone is tagged as dehydrated
const DEHYDRATED_BELOW: u32 = 30;

/// Per-zone decision thresholds on the 0-100 oiliness and sensitivity scales
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneThresholds {
    /// Oiliness strictly below this is dry
    pub dry_below: u32,
    /// Oiliness strictly above this is oily
    pub oily_above: u32,
    /// Sensitivity at or above this is tagged sensitive
    pub sensitive_at: u32,
}

/// Threshold table for each zone.
///
/// T-zone entries mirror the two-zone sebum thresholds (70/150 and 30/70 on
/// the 0-200 scale, halved); the eye area is the thinnest, least oily skin.
pub fn zone_thresholds(zone: SkinZone) -> ZoneThresholds {
    let (dry_below, oily_above, sensitive_at) = match zone {
        SkinZone::Forehead => (35, 75, 60),
        SkinZone::Nose => (40, 80, 60),
        SkinZone::LeftCheek | SkinZone::RightCheek => (15, 35, 50),
        SkinZone::Chin => (20, 45, 55),
        SkinZone::EyeArea => (10, 30, 45),
    };
    ZoneThresholds {
        dry_below,
        oily_above,
        sensitive_at,
    }
}

/// Concern tags attached to a zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneConcern {
    ExcessOil,
    Dryness,
    Sensitivity,
    EnlargedPores,
    UnevenTone,
    Dehydration,
}

impl ZoneConcern {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExcessOil => "excess_oil",
            Self::Dryness => "dryness",
            Self::Sensitivity => "sensitivity",
            Self::EnlargedPores => "enlarged_pores",
            Self::UnevenTone => "uneven_tone",
            Self::Dehydration => "dehydration",
        }
    }
}

impl std::fmt::Display for ZoneConcern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result for one named zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneMetrics {
    pub zone: SkinZone,
    /// Sebum proxy rescaled to 0-100
    pub oiliness: u32,
    /// Redness-derived sensitivity, 0-100
    pub sensitivity: u32,
    /// Hydration proxy, 0-100
    pub hydration: u32,
    pub pore_size: PoreSize,
    pub condition: SkinCondition,
    pub concerns: Vec<ZoneConcern>,
    pub avg_lab: Lab,
    pub l_std_dev: f32,
    pub sample_count: usize,
}

impl ZoneMetrics {
    /// Classify a zone from its LAB statistics.
    pub fn from_lab_stats(zone: SkinZone, stats: &LabStats) -> Self {
        let thresholds = zone_thresholds(zone);
        let lab = stats.mean;

        let oiliness = (sebum_from_lab(lab) as f32 / 2.0).round().min(100.0) as u32;
        // Skin a* sits around 5-25; redness beyond that reads as reactive skin
        let sensitivity = (((lab.a - 5.0) / 20.0).clamp(0.0, 1.0) * 100.0).round() as u32;
        let hydration = hydration_from_lab(lab);

        let condition = if oiliness < thresholds.dry_below {
            SkinCondition::Dry
        } else if oiliness > thresholds.oily_above {
            SkinCondition::Oily
        } else {
            SkinCondition::Normal
        };

        let midpoint = (thresholds.dry_below + thresholds.oily_above) / 2;
        let mut pore_size = if oiliness > thresholds.oily_above {
            PoreSize::Large
        } else if oiliness >= midpoint {
            PoreSize::Medium
        } else {
            PoreSize::Small
        };
        if stats.l_std_dev > PORE_SHADOW_STD_DEV {
            pore_size = pore_size.bump();
        }

        let mut concerns = Vec::new();
        match condition {
            SkinCondition::Oily => concerns.push(ZoneConcern::ExcessOil),
            SkinCondition::Dry => concerns.push(ZoneConcern::Dryness),
            SkinCondition::Normal => {}
        }
        if sensitivity >= thresholds.sensitive_at {
            concerns.push(ZoneConcern::Sensitivity);
        }
        if pore_size == PoreSize::Large {
            concerns.push(ZoneConcern::EnlargedPores);
        }
        if stats.l_std_dev > UNEVEN_TONE_STD_DEV {
            concerns.push(ZoneConcern::UnevenTone);
        }
        if hydration < DEHYDRATED_BELOW {
            concerns.push(ZoneConcern::Dehydration);
        }

        Self {
            zone,
            oiliness,
            sensitivity,
            hydration,
            pore_size,
            condition,
            concerns,
            avg_lab: lab,
            l_std_dev: stats.l_std_dev,
            sample_count: stats.count,
        }
    }

    pub fn has_concern(&self, concern: ZoneConcern) -> bool {
        self.concerns.contains(&concern)
    }
}

/// Six-zone verdict for a face
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SixZoneAnalysis {
    /// One entry per zone, in `SkinZone::ALL` order
    pub zones: Vec<ZoneMetrics>,
    pub overall_skin_type: SkinType,
    pub is_sensitive: bool,
    /// Mean oiliness over the five skin zones (eye area excluded)
    pub average_oiliness: u32,
}

impl SixZoneAnalysis {
    pub fn zone(&self, zone: SkinZone) -> Option<&ZoneMetrics> {
        self.zones.iter().find(|m| m.zone == zone)
    }

    /// Metrics of the five zones that take part in skin typing
    pub fn skin_zones(&self) -> impl Iterator<Item = &ZoneMetrics> {
        self.zones.iter().filter(|m| m.zone != SkinZone::EyeArea)
    }
}

/// Sample and classify a single zone
pub fn analyze_zone_metrics(
    image: &ImageBuffer,
    zone: SkinZone,
    bbox: &BoundingBox,
) -> Result<ZoneMetrics> {
    let pixels = extract_region(image, bbox)?;
    let stats = lab_statistics(&pixels)?;
    Ok(ZoneMetrics::from_lab_stats(zone, &stats))
}

/// Derive the overall skin type from the full zone vector.
///
/// The eye area only contributes to sensitivity. Over the remaining five
/// zones: four or more oily zones is oily, four or more dry is dry, no
/// deviating zone is normal, only dry deviations are dry once two zones agree
/// (a single dry zone is still normal), and any oily zone below the
/// four-zone majority makes the face combination.
pub fn derive_overall_skin_type(zones: &[ZoneMetrics]) -> SkinType {
    let skin_zones = || zones.iter().filter(|m| m.zone != SkinZone::EyeArea);
    let oily = skin_zones()
        .filter(|m| m.condition == SkinCondition::Oily)
        .count();
    let dry = skin_zones()
        .filter(|m| m.condition == SkinCondition::Dry)
        .count();

    if oily >= 4 {
        SkinType::Oily
    } else if dry >= 4 {
        SkinType::Dry
    } else if oily == 0 && dry == 0 {
        SkinType::Normal
    } else if oily == 0 {
        if dry >= 2 {
            SkinType::Dry
        } else {
            SkinType::Normal
        }
    } else {
        SkinType::Combination
    }
}

/// Analyse all six zones concurrently and derive the overall verdict
pub fn analyze_six_zones(
    image: &ImageBuffer,
    regions: &SixZoneFaceRegion,
) -> Result<SixZoneAnalysis> {
    let zones: Vec<ZoneMetrics> = SkinZone::ALL
        .par_iter()
        .map(|&zone| analyze_zone_metrics(image, zone, regions.zone(zone)))
        .collect::<Result<Vec<_>>>()?;

    let overall_skin_type = derive_overall_skin_type(&zones);

    let sensitive_zones = zones
        .iter()
        .filter(|m| m.has_concern(ZoneConcern::Sensitivity))
        .count();
    let mean_sensitivity =
        zones.iter().map(|m| m.sensitivity).sum::<u32>() as f32 / zones.len() as f32;
    let is_sensitive = sensitive_zones >= 2 || mean_sensitivity >= 60.0;

    let skin_zone_count = zones.iter().filter(|m| m.zone != SkinZone::EyeArea).count();
    let average_oiliness = if skin_zone_count == 0 {
        0
    } else {
        (zones
            .iter()
            .filter(|m| m.zone != SkinZone::EyeArea)
            .map(|m| m.oiliness)
            .sum::<u32>() as f32
            / skin_zone_count as f32)
            .round() as u32
    };

    log::debug!(
        "six-zone: type={} sensitive={} avg_oiliness={}",
        overall_skin_type,
        is_sensitive,
        average_oiliness
    );

    Ok(SixZoneAnalysis {
        zones,
        overall_skin_type,
        is_sensitive,
        average_oiliness,
    })
}
