//! T-zone / U-zone classification

use serde::{Deserialize, Serialize};

use super::{SkinCondition, SkinType, ZoneType};
use crate::color::Lab;
use crate::decoders::ImageBuffer;
use crate::error::Result;
use crate::region::{average_lab, extract_region, BoundingBox, FaceRegion};

/// T-zone sebum thresholds (0-200 proxy scale): dry below, oily above
const T_ZONE_DRY_BELOW: u32 = 70;
const T_ZONE_OILY_ABOVE: u32 = 150;

/// U-zone sebum thresholds; the U-zone has a lower baseline gland density
const U_ZONE_DRY_BELOW: u32 = 30;
const U_ZONE_OILY_ABOVE: u32 = 70;

/// Aggregate measurement of one half of the two-zone model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneAnalysis {
    pub zone_type: ZoneType,
    /// Luminance-derived sebum proxy, 0-200
    pub avg_sebum: u32,
    /// Luminance/chrominance-derived hydration proxy, 0-100
    pub avg_hydration: u32,
    pub avg_lab: Lab,
    pub skin_condition: SkinCondition,
    /// Total pixel count of the constituent regions
    pub sample_count: usize,
}

impl ZoneAnalysis {
    /// Derive the proxies and condition from an already-averaged color.
    pub fn from_lab(zone_type: ZoneType, avg_lab: Lab, sample_count: usize) -> Self {
        let avg_sebum = sebum_from_lab(avg_lab);
        Self {
            zone_type,
            avg_sebum,
            avg_hydration: hydration_from_lab(avg_lab),
            avg_lab,
            skin_condition: classify_sebum(avg_sebum, zone_type),
            sample_count,
        }
    }
}

/// Overall verdict of the two-zone model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedZoneAnalysis {
    pub overall_skin_type: SkinType,
    pub t_zone: ZoneAnalysis,
    pub u_zone: ZoneAnalysis,
    /// Human-readable reason naming both zone conditions
    pub rationale: String,
}

/// Sebum proxy: `round(L / 100 * 200)`
pub fn sebum_from_lab(lab: Lab) -> u32 {
    (lab.l / 100.0 * 200.0).round().max(0.0) as u32
}

/// Hydration proxy: `round(clamp(L / 60) * clamp((b + 10) / 30) * 100)`
pub fn hydration_from_lab(lab: Lab) -> u32 {
    let lightness = (lab.l / 60.0).clamp(0.0, 1.0);
    let warmth = ((lab.b + 10.0) / 30.0).clamp(0.0, 1.0);
    (lightness * warmth * 100.0).round() as u32
}

/// Classify a sebum value against the thresholds of its zone.
pub fn classify_sebum(sebum: u32, zone_type: ZoneType) -> SkinCondition {
    let (dry_below, oily_above) = match zone_type {
        ZoneType::TZone => (T_ZONE_DRY_BELOW, T_ZONE_OILY_ABOVE),
        ZoneType::UZone => (U_ZONE_DRY_BELOW, U_ZONE_OILY_ABOVE),
    };

    if sebum < dry_below {
        SkinCondition::Dry
    } else if sebum > oily_above {
        SkinCondition::Oily
    } else {
        SkinCondition::Normal
    }
}

/// Pool the pixels of several boxes and analyse them as one zone.
fn analyze_zone(
    image: &ImageBuffer,
    zone_type: ZoneType,
    boxes: &[&BoundingBox],
) -> Result<ZoneAnalysis> {
    let mut pixels = Vec::with_capacity(boxes.iter().map(|b| b.area()).sum());
    for bbox in boxes {
        pixels.extend(extract_region(image, bbox)?);
    }

    let avg_lab = average_lab(&pixels)?;
    let analysis = ZoneAnalysis::from_lab(zone_type, avg_lab, pixels.len());
    log::debug!(
        "{}: L={:.1} b={:.1} sebum={} hydration={} -> {}",
        zone_type,
        avg_lab.l,
        avg_lab.b,
        analysis.avg_sebum,
        analysis.avg_hydration,
        analysis.skin_condition
    );
    Ok(analysis)
}

/// Analyse the T-zone (forehead + nose)
pub fn analyze_t_zone(image: &ImageBuffer, face: &FaceRegion) -> Result<ZoneAnalysis> {
    analyze_zone(image, ZoneType::TZone, &[&face.forehead, &face.nose])
}

/// Analyse the U-zone (left cheek + right cheek + chin)
pub fn analyze_u_zone(image: &ImageBuffer, face: &FaceRegion) -> Result<ZoneAnalysis> {
    analyze_zone(
        image,
        ZoneType::UZone,
        &[&face.left_cheek, &face.right_cheek, &face.chin],
    )
}

/// Analyse both zones concurrently and combine them
pub fn analyze_tu_zones(image: &ImageBuffer, face: &FaceRegion) -> Result<CombinedZoneAnalysis> {
    let (t_zone, u_zone) = rayon::join(
        || analyze_t_zone(image, face),
        || analyze_u_zone(image, face),
    );
    Ok(combine_zone_analysis(&t_zone?, &u_zone?))
}

/// Decide the overall skin type from the two zone conditions.
///
/// Decision table:
/// | T      | U            | overall     |
/// |--------|--------------|-------------|
/// | dry    | dry          | dry         |
/// | oily   | oily         | oily        |
/// | oily   | dry / normal | combination |
/// | normal | normal       | normal      |
/// | other  | other        | combination |
pub fn combine_zone_analysis(t_zone: &ZoneAnalysis, u_zone: &ZoneAnalysis) -> CombinedZoneAnalysis {
    use SkinCondition::*;

    let t = t_zone.skin_condition;
    let u = u_zone.skin_condition;

    let (overall_skin_type, reason) = match (t, u) {
        (Dry, Dry) => (SkinType::Dry, "low sebum output across the whole face"),
        (Oily, Oily) => (SkinType::Oily, "excess sebum across the whole face"),
        (Oily, Dry) | (Oily, Normal) => (
            SkinType::Combination,
            "oil concentrated in the T-zone while the cheeks stay drier",
        ),
        (Normal, Normal) => (SkinType::Normal, "balanced sebum output in both zones"),
        _ => (SkinType::Combination, "the two zones behave differently"),
    };

    CombinedZoneAnalysis {
        overall_skin_type,
        t_zone: *t_zone,
        u_zone: *u_zone,
        rationale: format!(
            "{} {} and {} {}: {}",
            ZoneType::TZone,
            t,
            ZoneType::UZone,
            u,
            reason
        ),
    }
}
