//! End-to-end face analysis
//!
//! Wires the independent stages together for one image and one set of face
//! regions:
//! - tone and the T/U-zone verdict from pooled zone colors
//! - six-zone metrics
//! - texture on a cropped facial zone
//! - trouble score from the six-zone vector and the texture verdict
//! - hydration from the roughness implied by the texture score
//!
//! Stages without data dependencies run concurrently on the rayon pool.


use serde::{Deserialize, Serialize};

use crate::config::AnalysisDefaults;
use crate::decoders::ImageBuffer;
use crate::error::Result;
use crate::hydration::{
    correct_hydration, estimate_ra_from_texture, EnvironmentBaseline, EnvironmentReading,
    HydrationCorrectionResult,
};
use crate::region::{FaceRegion, SixZoneFaceRegion, SkinZone};
use crate::texture::{analyze_texture, analyze_texture_multi_angle, GlcmParams, TextureAnalysis};
use crate::tone::{analyze_tone, ToneAnalysis};
use crate::trouble::{calculate_face_trouble_score, TroubleScoreResult};
use crate::zones::{analyze_six_zones, analyze_tu_zones, CombinedZoneAnalysis, SixZoneAnalysis};

/// Options for a single `analyze_face` run
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOptions {
    pub glcm: GlcmParams,
    /// Average texture over four directions; `glcm.angle` is ignored
    pub multi_angle: bool,
    pub texture_zone: SkinZone,
    /// TEWL reading in g/m^2/h, if a probe was used
    pub tewl: Option<f32>,
    pub environment: Option<EnvironmentReading>,
    pub baseline: EnvironmentBaseline,
}

impl AnalysisOptions {
    pub fn from_defaults(defaults: &AnalysisDefaults) -> Self {
        Self {
            glcm: defaults.glcm_params(),
            multi_angle: defaults.multi_angle,
            texture_zone: defaults.texture_zone,
            tewl: None,
            environment: None,
            baseline: defaults.environment_baseline,
        }
    }

    pub fn with_tewl(mut self, tewl: Option<f32>) -> Self {
        self.tewl = tewl;
        self
    }

    pub fn with_environment(mut self, environment: Option<EnvironmentReading>) -> Self {
        self.environment = environment;
        self
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self::from_defaults(&AnalysisDefaults::default())
    }
}

/// Everything measured on one face
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkinAnalysisReport {
    pub width: u32,
    pub height: u32,
    /// Tone measured on the U-zone color
    pub tone: ToneAnalysis,
    pub tu_zones: CombinedZoneAnalysis,
    pub six_zones: SixZoneAnalysis,
    pub texture_zone: SkinZone,
    pub texture: TextureAnalysis,
    pub trouble: TroubleScoreResult,
    /// Roughness derived from the texture score
    pub ra: f32,
    pub hydration: HydrationCorrectionResult,
}

/// Texture of one zone, single-direction or averaged as configured
pub fn analyze_zone_texture(
    image: &ImageBuffer,
    regions: &SixZoneFaceRegion,
    options: &AnalysisOptions,
) -> Result<TextureAnalysis> {
    let crop = image.crop(regions.zone(options.texture_zone))?;
    if options.multi_angle {
        analyze_texture_multi_angle(&crop, options.glcm.levels, options.glcm.distance)
    } else {
        analyze_texture(&crop, &options.glcm)
    }
}

/// Run every analysis stage on one face
pub fn analyze_face(
    image: &ImageBuffer,
    regions: &SixZoneFaceRegion,
    options: &AnalysisOptions,
) -> Result<SkinAnalysisReport> {
    options.glcm.validate()?;
    let face = FaceRegion::from(regions);

    let ((tu_zones, six_zones), texture) = rayon::join(
        || {
            rayon::join(
                || analyze_tu_zones(image, &face),
                || analyze_six_zones(image, regions),
            )
        },
        || analyze_zone_texture(image, regions, options),
    );
    let tu_zones = tu_zones?;
    let six_zones = six_zones?;
    let texture = texture?;

    let tone = analyze_tone(tu_zones.u_zone.avg_lab);
    let trouble = calculate_face_trouble_score(&six_zones, &texture);
    let ra = estimate_ra_from_texture(&texture);
    let hydration = correct_hydration(
        ra,
        options.tewl,
        options.environment.as_ref(),
        &options.baseline,
    )?;

    log::debug!(
        "face {}x{}: tone={} type={}/{} texture={} trouble={} hydration={}",
        image.width(),
        image.height(),
        tone.level,
        tu_zones.overall_skin_type,
        six_zones.overall_skin_type,
        texture.texture_score,
        trouble.trouble_score,
        hydration.hydration
    );

    Ok(SkinAnalysisReport {
        width: image.width(),
        height: image.height(),
        tone,
        tu_zones,
        six_zones,
        texture_zone: options.texture_zone,
        texture,
        trouble,
        ra,
        hydration,
    })
}
