//! Skinlab Core Library
//!
//! Skin image analysis: CIE Lab conversion, facial-zone sampling, ITA tone
//! classification, T/U-zone and six-zone skin typing, GLCM/Haralick texture
//! analysis, a composite trouble score and a roughness-based hydration
//! estimate with TEWL and environment correction.
//!
//! Every stage is a pure function over a borrowed `ImageBuffer`; the only
//! shared resource is the read-only pixel data.

pub mod color;
pub mod config;
pub mod decoders;
pub mod error;
pub mod hydration;
pub mod pipeline;
pub mod region;
pub mod texture;
pub mod tone;
pub mod trouble;
pub mod zones;

mod parallel;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use color::{rgb_to_lab, Lab};
pub use decoders::{decode_image, ImageBuffer};
pub use error::{AnalysisError, Result};
pub use hydration::{
    correct_hydration, EnvironmentBaseline, EnvironmentReading, HydrationCorrectionResult,
    HydrationLevel, TewlStatus,
};
pub use pipeline::{analyze_face, AnalysisOptions, SkinAnalysisReport};
pub use region::{BoundingBox, FaceRegion, SixZoneFaceRegion, SkinZone};
pub use texture::{
    analyze_texture, analyze_texture_multi_angle, GlcmParams, HaralickFeatures, TextureAnalysis,
    TextureLevel,
};
pub use tone::{analyze_tone, SkinToneLevel, ToneAnalysis};
pub use trouble::{calculate_trouble_score, TroubleLevel, TroubleScoreResult};
pub use zones::{
    CombinedZoneAnalysis, PoreSize, SixZoneAnalysis, SkinCondition, SkinType, ZoneAnalysis,
    ZoneMetrics,
};
