//! Error type shared by every analysis stage.

use thiserror::Error;

/// Failures the engine reports instead of producing a degenerate result.
///
/// Every variant is a precondition violation at the boundary of the engine
/// (bad buffer, bad box, bad GLCM parameters) or an I/O failure in the
/// decoding and configuration helpers. The numeric stages themselves are
/// total over their valid domain.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Image buffer size mismatch: expected {expected} bytes for {width}x{height} RGBA, got {actual}")]
    InvalidBuffer {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("Region {x},{y} {width}x{height} lies outside the {image_width}x{image_height} image")]
    RegionOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        image_width: u32,
        image_height: u32,
    },

    #[error("Empty region: {0}")]
    EmptyRegion(String),

    #[error("GLCM levels must be between 2 and 256, got {0}")]
    InvalidLevels(usize),

    #[error("GLCM distance must be at least 1, got {0}")]
    InvalidDistance(u32),

    #[error("GLCM angle must be a finite number of degrees, got {0}")]
    InvalidAngle(f64),

    #[error("Invalid measurement: {0}")]
    InvalidMeasurement(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AnalysisError>;
