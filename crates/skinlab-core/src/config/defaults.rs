//! Default analysis parameter values and their sanitization.

use serde::{Deserialize, Serialize};

use crate::hydration::EnvironmentBaseline;
use crate::region::SkinZone;
use crate::texture::GlcmParams;

/// Analysis defaults read from the `defaults:` section of the config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisDefaults {
    /// Gray levels for the co-occurrence matrix (2-256)
    pub glcm_levels: usize,
    /// Neighbor distance in pixels (at least 1)
    pub glcm_distance: u32,
    /// Average texture over 0/45/90/135 degrees instead of a single direction
    pub multi_angle: bool,
    /// Angle used when `multi_angle` is off
    pub glcm_angle: f64,
    /// Facial zone cropped for texture analysis
    pub texture_zone: SkinZone,
    /// Conditions that TEWL and humidity readings are normalized to
    pub environment_baseline: EnvironmentBaseline,
}

impl AnalysisDefaults {
    pub(crate) fn sanitize(&mut self) -> Vec<String> {
        let mut warnings = Vec::new();

        let levels = self.glcm_levels.clamp(2, 256);
        if levels != self.glcm_levels {
            warnings.push(format!(
                "glcm_levels {} out of range; using {}",
                self.glcm_levels, levels
            ));
            self.glcm_levels = levels;
        }
        if self.glcm_distance == 0 {
            warnings.push("glcm_distance must be at least 1; using 1".to_string());
            self.glcm_distance = 1;
        }
        if !self.glcm_angle.is_finite() {
            warnings.push("glcm_angle is not a finite number; using 0".to_string());
            self.glcm_angle = 0.0;
        }

        let baseline = &mut self.environment_baseline;
        if !baseline.humidity.is_finite() {
            baseline.humidity = EnvironmentBaseline::default().humidity;
        }
        if !baseline.temperature.is_finite() {
            baseline.temperature = EnvironmentBaseline::default().temperature;
        }
        baseline.humidity = baseline.humidity.clamp(0.0, 100.0);
        baseline.temperature = baseline.temperature.clamp(-20.0, 50.0);

        warnings
    }

    /// GLCM parameters for the single-direction analysis
    pub fn glcm_params(&self) -> GlcmParams {
        GlcmParams {
            levels: self.glcm_levels,
            distance: self.glcm_distance,
            angle: self.glcm_angle,
        }
    }
}

impl Default for AnalysisDefaults {
    fn default() -> Self {
        let glcm = GlcmParams::default();
        Self {
            glcm_levels: glcm.levels,
            glcm_distance: glcm.distance,
            multi_angle: true,
            glcm_angle: glcm.angle,
            texture_zone: SkinZone::Forehead,
            environment_baseline: EnvironmentBaseline::default(),
        }
    }
}
