//! Haralick statistics

use serde::{Deserialize, Serialize};

use super::glcm::GlcmMatrix;

/// The five texture statistics, either raw or normalized to 0-100
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HaralickFeatures {
    pub contrast: f64,
    pub homogeneity: f64,
    pub energy: f64,
    pub correlation: f64,
    pub entropy: f64,
}

impl HaralickFeatures {
    /// Component-wise mean; zero for an empty slice
    pub fn mean(features: &[HaralickFeatures]) -> Self {
        if features.is_empty() {
            return Self::default();
        }
        let n = features.len() as f64;
        let sum = features.iter().fold(Self::default(), |acc, f| Self {
            contrast: acc.contrast + f.contrast,
            homogeneity: acc.homogeneity + f.homogeneity,
            energy: acc.energy + f.energy,
            correlation: acc.correlation + f.correlation,
            entropy: acc.entropy + f.entropy,
        });
        Self {
            contrast: sum.contrast / n,
            homogeneity: sum.homogeneity / n,
            energy: sum.energy / n,
            correlation: sum.correlation / n,
            entropy: sum.entropy / n,
        }
    }
}

/// Extract raw Haralick statistics from a normalized matrix.
pub fn extract_haralick_features(glcm: &GlcmMatrix) -> HaralickFeatures {
    let levels = glcm.levels;

    // Marginal means and standard deviations of the row and column indices
    let mut mean_i = 0.0;
    let mut mean_j = 0.0;
    for i in 0..levels {
        for j in 0..levels {
            let p = glcm.get(i, j);
            mean_i += i as f64 * p;
            mean_j += j as f64 * p;
        }
    }
    let mut var_i = 0.0;
    let mut var_j = 0.0;
    for i in 0..levels {
        for j in 0..levels {
            let p = glcm.get(i, j);
            var_i += (i as f64 - mean_i).powi(2) * p;
            var_j += (j as f64 - mean_j).powi(2) * p;
        }
    }
    let sigma = var_i.sqrt() * var_j.sqrt();

    let mut features = HaralickFeatures::default();
    for i in 0..levels {
        for j in 0..levels {
            let p = glcm.get(i, j);
            if p == 0.0 {
                continue;
            }
            let diff = i as f64 - j as f64;
            features.contrast += diff * diff * p;
            features.homogeneity += p / (1.0 + diff.abs());
            features.energy += p * p;
            features.entropy -= p * p.log2();
            if sigma > 0.0 {
                features.correlation += (i as f64 - mean_i) * (j as f64 - mean_j) * p / sigma;
            }
        }
    }
    features
}

/// Map raw statistics onto 0-100.
///
/// Contrast is divided by `(levels - 1)^2`, entropy by `log2(levels^2)` and
/// correlation is remapped from [-1, 1]; every value is clamped.
pub fn normalize_features(raw: &HaralickFeatures, levels: usize) -> HaralickFeatures {
    let max_contrast = ((levels.max(2) - 1) as f64).powi(2);
    let max_entropy = ((levels.max(2) * levels.max(2)) as f64).log2();
    let pct = |v: f64| (v * 100.0).clamp(0.0, 100.0);

    HaralickFeatures {
        contrast: pct(raw.contrast / max_contrast),
        homogeneity: pct(raw.homogeneity),
        energy: pct(raw.energy),
        correlation: pct((raw.correlation + 1.0) / 2.0),
        entropy: pct(raw.entropy / max_entropy),
    }
}
