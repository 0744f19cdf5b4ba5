//! PNG image decoder

use std::path::Path;

use super::{expand_to_rgba, ImageBuffer};
use crate::error::{AnalysisError, Result};

/// Decode a PNG file
pub(crate) fn decode_png<P: AsRef<Path>>(path: P) -> Result<ImageBuffer> {
    use std::fs::File;
    use std::io::BufReader;

    let file = File::open(path.as_ref())?;
    let mut decoder = png::Decoder::new(BufReader::new(file));
    // Palette images are expanded to RGB by the decoder itself
    decoder.set_transformations(png::Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e| AnalysisError::Decode(format!("Failed to read PNG info: {}", e)))?;

    let buffer_size = reader
        .output_buffer_size()
        .ok_or_else(|| AnalysisError::Decode("Failed to determine PNG buffer size".to_string()))?;
    let mut buf = vec![0u8; buffer_size];
    let frame_info = reader
        .next_frame(&mut buf)
        .map_err(|e| AnalysisError::Decode(format!("Failed to read PNG frame: {}", e)))?;

    let width = frame_info.width;
    let height = frame_info.height;
    let bytes = &buf[..frame_info.buffer_size()];

    let channels = match frame_info.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        png::ColorType::Indexed => {
            return Err(AnalysisError::Decode(
                "Indexed PNG was not expanded".to_string(),
            ))
        }
    };

    let samples = match frame_info.bit_depth {
        png::BitDepth::Eight => bytes.to_vec(),
        // PNG 16-bit is big-endian; keep the high byte
        png::BitDepth::Sixteen => bytes.chunks_exact(2).map(|pair| pair[0]).collect(),
        other => {
            return Err(AnalysisError::Decode(format!(
                "Unsupported PNG bit depth: {:?}",
                other
            )))
        }
    };

    let expected_len = width as usize * height as usize * channels;
    if samples.len() != expected_len {
        return Err(AnalysisError::Decode(format!(
            "PNG buffer size mismatch: expected {}, got {}",
            expected_len,
            samples.len()
        )));
    }

    ImageBuffer::new(width, height, expand_to_rgba(&samples, channels)?)
}
