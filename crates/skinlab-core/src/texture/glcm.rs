//! Gray-level co-occurrence matrix

use crate::color::luminance;
use crate::decoders::{ImageBuffer, CHANNELS};
use crate::error::{AnalysisError, Result};

/// Validated GLCM parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlcmParams {
    /// Number of gray levels, 2..=256
    pub levels: usize,
    /// Pixel offset length, at least 1
    pub distance: u32,
    /// Offset direction in degrees
    pub angle: f64,
}

impl Default for GlcmParams {
    fn default() -> Self {
        Self {
            levels: 64,
            distance: 1,
            angle: 0.0,
        }
    }
}

impl GlcmParams {
    pub fn new(levels: usize, distance: u32, angle: f64) -> Result<Self> {
        let params = Self {
            levels,
            distance,
            angle,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if !(2..=256).contains(&self.levels) {
            return Err(AnalysisError::InvalidLevels(self.levels));
        }
        if self.distance == 0 {
            return Err(AnalysisError::InvalidDistance(self.distance));
        }
        if !self.angle.is_finite() {
            return Err(AnalysisError::InvalidAngle(self.angle));
        }
        Ok(())
    }

    /// Neighbor offset `(round(d*cos), round(d*sin))`; +y points down the image
    pub fn offset(&self) -> (i64, i64) {
        let theta = self.angle.to_radians();
        let d = self.distance as f64;
        ((d * theta.cos()).round() as i64, (d * theta.sin()).round() as i64)
    }
}

/// Normalized, symmetric co-occurrence matrix (row-major, `levels * levels`)
#[derive(Debug, Clone, PartialEq)]
pub struct GlcmMatrix {
    pub levels: usize,
    pub distance: u32,
    pub angle: f64,
    /// Number of samples after symmetrization
    pub total_samples: u64,
    pub matrix: Vec<f64>,
}

impl GlcmMatrix {
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.matrix[i * self.levels + j]
    }

    pub fn sum(&self) -> f64 {
        self.matrix.iter().sum()
    }
}

/// Quantize a gray value to `floor(gray * levels / 256)`, capped at `levels - 1`
#[inline]
fn quantize(gray: f32, levels: usize) -> usize {
    ((gray * levels as f32 / 256.0).floor().max(0.0) as usize).min(levels - 1)
}

/// Build the normalized GLCM of an image.
///
/// Counts every pixel pair at the parameter offset whose neighbor lies inside
/// the image, folds `(i, j)` and `(j, i)` together and divides by the total.
pub fn calculate_glcm(image: &ImageBuffer, params: &GlcmParams) -> Result<GlcmMatrix> {
    params.validate()?;
    if image.pixel_count() == 0 {
        return Err(AnalysisError::EmptyRegion(format!(
            "{}x{} image has no pixels",
            image.width(), image.height()
        )));
    }

    let levels = params.levels;
    let width = image.width() as i64;
    let height = image.height() as i64;

    let quantized: Vec<usize> = image
        .data()
        .chunks_exact(CHANNELS)
        .map(|p| quantize(luminance(p[0], p[1], p[2]), levels))
        .collect();

    let (dx, dy) = params.offset();
    let mut counts = vec![0u64; levels * levels];
    for y in 0..height {
        let ny = y + dy;
        if ny < 0 || ny >= height {
            continue;
        }
        for x in 0..width {
            let nx = x + dx;
            if nx < 0 || nx >= width {
                continue;
            }
            let current = quantized[(y * width + x) as usize];
            let neighbor = quantized[(ny * width + nx) as usize];
            counts[current * levels + neighbor] += 1;
        }
    }

    // Fold the upper triangle into the lower; the diagonal is counted once
    let mut total_samples = 0u64;
    for i in 0..levels {
        total_samples += counts[i * levels + i];
        for j in (i + 1)..levels {
            let folded = counts[i * levels + j] + counts[j * levels + i];
            counts[i * levels + j] = folded;
            counts[j * levels + i] = folded;
            total_samples += 2 * folded;
        }
    }

    if total_samples == 0 {
        return Err(AnalysisError::EmptyRegion(format!(
            "no pixel pairs at offset ({}, {}) in a {}x{} image",
            dx, dy, image.width(), image.height()
        )));
    }

    let total = total_samples as f64;
    let matrix = counts.into_iter().map(|c| c as f64 / total).collect();

    Ok(GlcmMatrix {
        levels,
        distance: params.distance,
        angle: params.angle,
        total_samples,
        matrix,
    })
}
