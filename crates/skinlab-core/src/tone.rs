//! Skin tone classification by Individual Typology Angle (ITA)
//!
//! `ITA = atan((L* - 50) / b*) * 180 / PI`, bucketed into six ordered tone
//! categories from very light to dark.

use serde::{Deserialize, Serialize};

use crate::color::Lab;

/// Discrete skin tone bucket, lightest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinToneLevel {
    VeryLight,
    Light,
    Intermediate,
    Tan,
    Brown,
    Dark,
}

impl SkinToneLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryLight => "very_light",
            Self::Light => "light",
            Self::Intermediate => "intermediate",
            Self::Tan => "tan",
            Self::Brown => "brown",
            Self::Dark => "dark",
        }
    }
}

impl std::fmt::Display for SkinToneLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tone verdict for one LAB sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToneAnalysis {
    /// Individual Typology Angle in degrees
    pub ita: f32,
    pub level: SkinToneLevel,
    /// The LAB color the angle was measured on
    pub lab: Lab,
}

/// Individual Typology Angle in degrees.
///
/// When `b` is exactly zero the geometric limit is returned instead of NaN:
/// +90 above mid lightness, -90 below it, 0 at L = 50.
pub fn calculate_ita(l: f32, b: f32) -> f32 {
    if b == 0.0 {
        return if l > 50.0 {
            90.0
        } else if l < 50.0 {
            -90.0
        } else {
            0.0
        };
    }
    ((l - 50.0) / b).atan().to_degrees()
}

/// Map an ITA angle onto its tone bucket.
///
/// Buckets are contiguous and cover the whole real line; NaN falls through
/// to `Dark`.
pub fn classify_ita(ita: f32) -> SkinToneLevel {
    if ita > 55.0 {
        SkinToneLevel::VeryLight
    } else if ita > 41.0 {
        SkinToneLevel::Light
    } else if ita > 28.0 {
        SkinToneLevel::Intermediate
    } else if ita > 10.0 {
        SkinToneLevel::Tan
    } else if ita > -30.0 {
        SkinToneLevel::Brown
    } else {
        SkinToneLevel::Dark
    }
}

/// Compute and classify the ITA of a mean skin color
pub fn analyze_tone(lab: Lab) -> ToneAnalysis {
    let ita = calculate_ita(lab.l, lab.b);
    ToneAnalysis {
        ita,
        level: classify_ita(ita),
        lab,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ita_zero_b_limits() {
        assert_eq!(calculate_ita(70.0, 0.0), 90.0);
        assert_eq!(calculate_ita(30.0, 0.0), -90.0);
        assert_eq!(calculate_ita(50.0, 0.0), 0.0);
    }

    #[test]
    fn test_ita_known_angle() {
        // (L - 50) / b = 1 -> 45 degrees
        assert!((calculate_ita(65.0, 15.0) - 45.0).abs() < 1e-4);
        // L = 50 -> 0 degrees for any non-zero b
        assert!(calculate_ita(50.0, 12.0).abs() < 1e-6);
    }

    #[test]
    fn test_ita_increases_with_lightness() {
        for &b in &[0.5f32, 5.0, 18.0, 40.0] {
            let mut previous = f32::NEG_INFINITY;
            for step in 0..=100 {
                let ita = calculate_ita(step as f32, b);
                assert!(ita > previous, "ITA not increasing at L={} b={}", step, b);
                previous = ita;
            }
        }
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify_ita(55.01), SkinToneLevel::VeryLight);
        assert_eq!(classify_ita(55.0), SkinToneLevel::Light);
        assert_eq!(classify_ita(41.0), SkinToneLevel::Intermediate);
        assert_eq!(classify_ita(28.0), SkinToneLevel::Tan);
        assert_eq!(classify_ita(10.0), SkinToneLevel::Brown);
        assert_eq!(classify_ita(-30.0), SkinToneLevel::Dark);
        assert_eq!(classify_ita(f32::INFINITY), SkinToneLevel::VeryLight);
        assert_eq!(classify_ita(f32::NEG_INFINITY), SkinToneLevel::Dark);
    }

    #[test]
    fn test_classify_is_monotonic_over_the_line() {
        // Sweeping the angle downward never moves to a lighter bucket,
        // and every bucket is visited exactly once as a contiguous run
        let mut previous = classify_ita(90.0);
        let mut transitions = 0;
        let mut ita = 90.0f32;
        while ita >= -90.0 {
            let level = classify_ita(ita);
            assert!(level >= previous);
            if level != previous {
                transitions += 1;
            }
            previous = level;
            ita -= 0.25;
        }
        assert_eq!(transitions, 5);
    }

    #[test]
    fn test_analyze_tone_light_skin() {
        let tone = analyze_tone(Lab {
            l: 70.0,
            a: 10.0,
            b: 15.0,
        });
        // atan(20/15) = 53.13 degrees
        assert!((tone.ita - 53.13).abs() < 0.01);
        assert_eq!(tone.level, SkinToneLevel::Light);
    }
}
