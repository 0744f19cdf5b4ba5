//! Facial region sampling
//!
//! Extracts the pixels enclosed by caller-supplied bounding boxes and
//! aggregates them into mean CIE LAB colors. Face detection itself happens
//! upstream; boxes arrive here already positioned in image coordinates.


use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::{rgb_to_lab, Lab};
use crate::decoders::{ImageBuffer, CHANNELS};
use crate::error::{AnalysisError, Result};
use crate::parallel::parallel_fold_reduce;

/// Axis-aligned pixel region (x, y, width, height)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Box covering an entire image
    pub fn full(image: &ImageBuffer) -> Self {
        Self::new(0, 0, image.width(), image.height())
    }

    /// Number of pixels enclosed by the box
    #[inline]
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check that the box is non-empty and lies fully inside `image`.
    ///
    /// Out-of-range boxes are rejected, never clamped.
    pub fn validate(&self, image: &ImageBuffer) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(AnalysisError::EmptyRegion(format!(
                "bounding box at {},{} has zero area ({}x{})",
                self.x, self.y, self.width, self.height
            )));
        }

        // u64 so that x + width cannot overflow
        let right = self.x as u64 + self.width as u64;
        let bottom = self.y as u64 + self.height as u64;
        if right > image.width() as u64 || bottom > image.height() as u64 {
            return Err(AnalysisError::RegionOutOfBounds {
                x: self.x,
                y: self.y,
                width: self.width,
                height: self.height,
                image_width: image.width(),
                image_height: image.height(),
            });
        }

        Ok(())
    }
}

/// Named facial zones used by the six-zone classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinZone {
    Forehead,
    Nose,
    LeftCheek,
    RightCheek,
    Chin,
    EyeArea,
}

impl SkinZone {
    /// Every zone, in report order
    pub const ALL: [SkinZone; 6] = [
        SkinZone::Forehead,
        SkinZone::Nose,
        SkinZone::LeftCheek,
        SkinZone::RightCheek,
        SkinZone::Chin,
        SkinZone::EyeArea,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Forehead => "forehead",
            Self::Nose => "nose",
            Self::LeftCheek => "left_cheek",
            Self::RightCheek => "right_cheek",
            Self::Chin => "chin",
            Self::EyeArea => "eye_area",
        }
    }

    /// Forehead and nose carry the denser sebaceous glands
    pub fn is_t_zone(&self) -> bool {
        matches!(self, Self::Forehead | Self::Nose)
    }
}

impl std::fmt::Display for SkinZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SkinZone {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "forehead" => Ok(Self::Forehead),
            "nose" => Ok(Self::Nose),
            "left_cheek" | "leftcheek" => Ok(Self::LeftCheek),
            "right_cheek" | "rightcheek" => Ok(Self::RightCheek),
            "chin" => Ok(Self::Chin),
            "eye_area" | "eyearea" | "eyes" => Ok(Self::EyeArea),
            _ => Err(format!("Unknown skin zone: {}", s)),
        }
    }
}

/// Five-region face layout consumed by the T-zone / U-zone classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceRegion {
    pub forehead: BoundingBox,
    pub nose: BoundingBox,
    pub left_cheek: BoundingBox,
    pub right_cheek: BoundingBox,
    pub chin: BoundingBox,
}

/// Six-region face layout consumed by the six-zone classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SixZoneFaceRegion {
    pub forehead: BoundingBox,
    pub nose: BoundingBox,
    pub left_cheek: BoundingBox,
    pub right_cheek: BoundingBox,
    pub chin: BoundingBox,
    pub eye_area: BoundingBox,
}

impl SixZoneFaceRegion {
    /// Bounding box of a named zone
    pub fn zone(&self, zone: SkinZone) -> &BoundingBox {
        match zone {
            SkinZone::Forehead => &self.forehead,
            SkinZone::Nose => &self.nose,
            SkinZone::LeftCheek => &self.left_cheek,
            SkinZone::RightCheek => &self.right_cheek,
            SkinZone::Chin => &self.chin,
            SkinZone::EyeArea => &self.eye_area,
        }
    }
}

impl From<&SixZoneFaceRegion> for FaceRegion {
    fn from(regions: &SixZoneFaceRegion) -> Self {
        Self {
            forehead: regions.forehead,
            nose: regions.nose,
            left_cheek: regions.left_cheek,
            right_cheek: regions.right_cheek,
            chin: regions.chin,
        }
    }
}

/// Load six-zone face regions from a JSON file written by the landmark detector
pub fn load_face_regions<P: AsRef<Path>>(path: P) -> Result<SixZoneFaceRegion> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    serde_json::from_str(&contents).map_err(|e| {
        AnalysisError::Decode(format!(
            "Failed to parse face regions {}: {}",
            path.as_ref().display(),
            e
        ))
    })
}

/// Extract the RGBA pixels enclosed by `bbox`, walking rows top to bottom.
pub fn extract_region(image: &ImageBuffer, bbox: &BoundingBox) -> Result<Vec<[u8; 4]>> {
    bbox.validate(image)?;

    // Pre-allocate with exact capacity
    let mut pixels = Vec::with_capacity(bbox.area());
    let row_bytes = bbox.width as usize * CHANNELS;

    for row in bbox.y..(bbox.y + bbox.height) {
        let row_start = (row as usize * image.width() as usize + bbox.x as usize) * CHANNELS;
        let row_end = row_start + row_bytes;
        for px in image.data()[row_start..row_end].chunks_exact(CHANNELS) {
            pixels.push([px[0], px[1], px[2], px[3]]);
        }
    }

    Ok(pixels)
}

/// Summary statistics of a pixel set in LAB space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabStats {
    /// Per-channel mean of the per-pixel LAB values
    pub mean: Lab,
    /// Population standard deviation of L*
    pub l_std_dev: f32,
    /// Number of pixels aggregated
    pub count: usize,
}

/// Mean LAB color and lightness spread of a pixel set in a single pass.
pub fn lab_statistics(pixels: &[[u8; 4]]) -> Result<LabStats> {
    if pixels.is_empty() {
        return Err(AnalysisError::EmptyRegion(
            "cannot average an empty pixel set".to_string(),
        ));
    }

    // (sum L, sum a, sum b, sum L^2)
    let (l_sum, a_sum, b_sum, l_sq_sum) = parallel_fold_reduce(
        pixels,
        || (0.0f64, 0.0f64, 0.0f64, 0.0f64),
        |acc, px| {
            let lab = rgb_to_lab(px[0], px[1], px[2]);
            let l = lab.l as f64;
            (
                acc.0 + l,
                acc.1 + lab.a as f64,
                acc.2 + lab.b as f64,
                acc.3 + l * l,
            )
        },
        |x, y| (x.0 + y.0, x.1 + y.1, x.2 + y.2, x.3 + y.3),
    );

    let n = pixels.len() as f64;
    let l_mean = l_sum / n;
    let variance = (l_sq_sum / n - l_mean * l_mean).max(0.0);

    Ok(LabStats {
        mean: Lab {
            l: l_mean as f32,
            a: (a_sum / n) as f32,
            b: (b_sum / n) as f32,
        },
        l_std_dev: variance.sqrt() as f32,
        count: pixels.len(),
    })
}

/// Arithmetic mean of per-pixel LAB values.
///
/// Averaging happens in LAB space, not on the averaged RGB, so a region of
/// two very different colors does not collapse to the LAB of their RGB mean.
pub fn average_lab(pixels: &[[u8; 4]]) -> Result<Lab> {
    lab_statistics(pixels).map(|stats| stats.mean)
}

/// Mean LAB color and sample count of a single box
pub fn sample_region_lab(image: &ImageBuffer, bbox: &BoundingBox) -> Result<(Lab, usize)> {
    let pixels = extract_region(image, bbox)?;
    let lab = average_lab(&pixels)?;
    Ok((lab, pixels.len()))
}

impl ImageBuffer {
    /// Copy the pixels inside `bbox` into a standalone image.
    pub fn crop(&self, bbox: &BoundingBox) -> Result<ImageBuffer> {
        let pixels = extract_region(self, bbox)?;
        let data = pixels.into_iter().flatten().collect();
        ImageBuffer::new(bbox.width, bbox.height, data)
    }
}
