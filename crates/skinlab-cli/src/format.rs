//! Human-readable rendering of analysis results.

use std::fmt::Write;

use skinlab_core::{HydrationCorrectionResult, SkinAnalysisReport, TextureAnalysis};

/// Render a texture verdict as indented text lines
pub fn format_texture(texture: &TextureAnalysis) -> String {
    let mut out = String::new();
    let f = &texture.features;
    let angle = if texture.is_multi_angle() {
        "0/45/90/135 (averaged)".to_string()
    } else {
        format!("{}", texture.angle)
    };

    let _ = writeln!(
        out,
        "  Score: {} ({})",
        texture.texture_score, texture.texture_level
    );
    let _ = writeln!(out, "  {}", texture.description);
    let _ = writeln!(
        out,
        "  GLCM: levels={}, distance={}, angle={}",
        texture.levels, texture.distance, angle
    );
    let _ = writeln!(
        out,
        "  Features: contrast={:.1}, homogeneity={:.1}, energy={:.1}, correlation={:.1}, entropy={:.1}",
        f.contrast, f.homogeneity, f.energy, f.correlation, f.entropy
    );
    out
}

pub fn format_hydration(hydration: &HydrationCorrectionResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  Hydration: {} ({})", hydration.hydration, hydration.level);
    let _ = writeln!(out, "  Roughness estimate: {:.1}", hydration.ra_estimate);
    if let (Some(estimate), Some(tewl)) = (hydration.tewl_estimate, hydration.normalized_tewl) {
        let status = hydration
            .tewl_status
            .map(|s| s.to_string())
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "  TEWL: {:.1} g/m2/h normalized ({}), estimate {:.1}",
            tewl, status, estimate
        );
    }
    if hydration.environment_adjustment != 0.0 {
        let _ = writeln!(
            out,
            "  Environment adjustment: {:+.1}",
            hydration.environment_adjustment
        );
    }
    out
}

/// Render the full face report
pub fn format_report(report: &SkinAnalysisReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Image: {}x{}", report.width, report.height);

    let _ = writeln!(out, "\nTone:");
    let _ = writeln!(
        out,
        "  ITA: {:.1} deg ({})",
        report.tone.ita, report.tone.level
    );
    let lab = report.tone.lab;
    let _ = writeln!(out, "  Lab: L={:.1}, a={:.1}, b={:.1}", lab.l, lab.a, lab.b);

    let tu = &report.tu_zones;
    let _ = writeln!(out, "\nT/U zones: {}", tu.overall_skin_type);
    for zone in [&tu.t_zone, &tu.u_zone] {
        let _ = writeln!(
            out,
            "  {}: {} (sebum {}, hydration {}, {} px)",
            zone.zone_type, zone.skin_condition, zone.avg_sebum, zone.avg_hydration, zone.sample_count
        );
    }
    let _ = writeln!(out, "  {}", tu.rationale);

    let six = &report.six_zones;
    let _ = writeln!(
        out,
        "\nSix zones: {}{}",
        six.overall_skin_type,
        if six.is_sensitive { ", sensitive" } else { "" }
    );
    for m in &six.zones {
        let concerns: Vec<&str> = m.concerns.iter().map(|c| c.as_str()).collect();
        let _ = writeln!(
            out,
            "  {:<12} {:<7} oil={:>3} sens={:>3} hyd={:>3} pores={:<6} {}",
            m.zone.as_str(),
            m.condition.as_str(),
            m.oiliness,
            m.sensitivity,
            m.hydration,
            m.pore_size.as_str(),
            concerns.join(", ")
        );
    }

    let _ = writeln!(out, "\nTexture ({}):", report.texture_zone);
    out.push_str(&format_texture(&report.texture));

    let trouble = &report.trouble;
    let _ = writeln!(
        out,
        "\nTrouble: {} ({})",
        trouble.trouble_score, trouble.trouble_level
    );
    let _ = writeln!(
        out,
        "  texture={}, pores={}, oiliness={}",
        trouble.texture_contribution, trouble.pore_contribution, trouble.oiliness_contribution
    );
    for rec in &trouble.recommendations {
        let _ = writeln!(out, "  - {}", rec);
    }

    let _ = writeln!(out, "\nHydration (Ra {:.1}):", report.ra);
    out.push_str(&format_hydration(&report.hydration));

    out
}
