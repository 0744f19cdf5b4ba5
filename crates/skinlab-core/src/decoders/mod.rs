//! Image decoders for face photographs
//!
//! Support for PNG and TIFF files. Every format is normalised to an 8-bit
//! RGBA [`ImageBuffer`], which is the only pixel representation the analysis
//! stages accept.

mod png;
mod tiff;

#[cfg(test)]
mod tests;

use std::path::Path;

use crate::error::{AnalysisError, Result};

/// Number of interleaved samples per pixel (R, G, B, A)
pub const CHANNELS: usize = 4;

/// Decoded pixel grid
///
/// Fields are private so the sample length always matches the dimensions;
/// build one with [`ImageBuffer::new`], [`ImageBuffer::from_fn`] or a decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    /// Interleaved RGBA samples, row-major, `width * height * 4` bytes
    data: Vec<u8>,
}

impl ImageBuffer {
    /// Wrap an RGBA byte buffer, checking that its length matches the dimensions.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(AnalysisError::InvalidBuffer {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: u32, height: u32, f: F) -> Self
    where
        F: Fn(u32, u32) -> [u8; 4],
    {
        let mut data = Vec::with_capacity(width as usize * height as usize * CHANNELS);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Uniform opaque image of a single RGB color.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        Self::from_fn(width, height, |_, _| [rgb[0], rgb[1], rgb[2], 255])
    }

    /// Image width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Interleaved RGBA samples
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Number of pixels in the grid.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// RGBA sample at `(x, y)`. Coordinates must be in bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }
}

/// Decode an image from a file path
pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<ImageBuffer> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| AnalysisError::Decode("No file extension found".to_string()))?;

    let image = match extension.as_str() {
        "tif" | "tiff" => tiff::decode_tiff(path)?,
        "png" => png::decode_png(path)?,
        _ => {
            return Err(AnalysisError::Decode(format!(
                "Unsupported file format: {}",
                extension
            )))
        }
    };

    log::debug!(
        "decoded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Expand gray / gray+alpha / RGB / RGBA 8-bit samples to RGBA8.
pub(crate) fn expand_to_rgba(samples: &[u8], channels: usize) -> Result<Vec<u8>> {
    let mut rgba = Vec::with_capacity(samples.len() / channels.max(1) * CHANNELS);
    match channels {
        1 => {
            for &gray in samples {
                rgba.extend_from_slice(&[gray, gray, gray, 255]);
            }
        }
        2 => {
            for ga in samples.chunks_exact(2) {
                rgba.extend_from_slice(&[ga[0], ga[0], ga[0], ga[1]]);
            }
        }
        3 => {
            for rgb in samples.chunks_exact(3) {
                rgba.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
            }
        }
        4 => rgba.extend_from_slice(samples),
        n => {
            return Err(AnalysisError::Decode(format!(
                "Unsupported channel count: {}",
                n
            )))
        }
    }
    Ok(rgba)
}
