//! TIFF image decoder

use std::path::Path;

use super::{expand_to_rgba, ImageBuffer};
use crate::error::{AnalysisError, Result};

/// Decode a TIFF file
pub(crate) fn decode_tiff<P: AsRef<Path>>(path: P) -> Result<ImageBuffer> {
    use std::fs::File;
    use std::io::BufReader;

    let file = File::open(path.as_ref())?;

    let mut decoder = tiff::decoder::Decoder::new(BufReader::new(file))
        .map_err(|e| AnalysisError::Decode(format!("Failed to create TIFF decoder: {}", e)))?;

    let (width, height) = decoder
        .dimensions()
        .map_err(|e| AnalysisError::Decode(format!("Failed to get TIFF dimensions: {}", e)))?;

    let color_type = decoder
        .colortype()
        .map_err(|e| AnalysisError::Decode(format!("Failed to get TIFF color type: {}", e)))?;

    let channels = match color_type {
        tiff::ColorType::Gray(_) => 1,
        tiff::ColorType::GrayA(_) => 2,
        tiff::ColorType::RGB(_) => 3,
        tiff::ColorType::RGBA(_) => 4,
        other => {
            return Err(AnalysisError::Decode(format!(
                "Unsupported TIFF color type: {:?}",
                other
            )))
        }
    };

    let image_data = decoder
        .read_image()
        .map_err(|e| AnalysisError::Decode(format!("Failed to read TIFF image data: {}", e)))?;

    let samples = match image_data {
        tiff::decoder::DecodingResult::U8(buf) => to_u8_samples(&buf),
        tiff::decoder::DecodingResult::U16(buf) => to_u8_samples(&buf),
        _ => {
            return Err(AnalysisError::Decode(
                "Only 8-bit and 16-bit unsigned TIFF samples are supported".to_string(),
            ))
        }
    };

    let expected_len = width as usize * height as usize * channels;
    if samples.len() != expected_len {
        return Err(AnalysisError::Decode(format!(
            "TIFF buffer size mismatch: expected {}, got {}",
            expected_len,
            samples.len()
        )));
    }

    ImageBuffer::new(width, height, expand_to_rgba(&samples, channels)?)
}

/// TIFF sample types that can be narrowed to an 8-bit channel value
trait TiffValue: Copy {
    fn to_u8(self) -> u8;
}

impl TiffValue for u8 {
    #[inline]
    fn to_u8(self) -> u8 {
        self
    }
}

impl TiffValue for u16 {
    #[inline]
    fn to_u8(self) -> u8 {
        (self >> 8) as u8
    }
}

fn to_u8_samples<T: TiffValue>(buf: &[T]) -> Vec<u8> {
    buf.iter().map(|&v| v.to_u8()).collect()
}
