//! Tests for zonal classification

use super::*;
use crate::color::Lab;
use crate::error::AnalysisError;
use crate::region::{BoundingBox, FaceRegion, LabStats, SkinZone};
use crate::test_support::{synthetic_face, uniform_face};

fn lab(l: f32, a: f32, b: f32) -> Lab {
    Lab { l, a, b }
}

fn zone_with(zone_type: ZoneType, condition: SkinCondition) -> ZoneAnalysis {
    ZoneAnalysis {
        zone_type,
        avg_sebum: 100,
        avg_hydration: 50,
        avg_lab: lab(50.0, 10.0, 10.0),
        skin_condition: condition,
        sample_count: 10,
    }
}

#[test]
fn test_sebum_and_hydration_proxies() {
    assert_eq!(sebum_from_lab(lab(80.0, 8.0, 20.0)), 160);
    assert_eq!(hydration_from_lab(lab(80.0, 8.0, 20.0)), 100);

    assert_eq!(sebum_from_lab(lab(40.0, 8.0, 5.0)), 80);
    // (40/60) * (15/30) = 1/3
    assert_eq!(hydration_from_lab(lab(40.0, 8.0, 5.0)), 33);

    // Very blue chroma drives hydration to zero
    assert_eq!(hydration_from_lab(lab(70.0, 0.0, -20.0)), 0);
}

#[test]
fn test_classify_sebum_zone_specific_thresholds() {
    assert_eq!(classify_sebum(69, ZoneType::TZone), SkinCondition::Dry);
    assert_eq!(classify_sebum(70, ZoneType::TZone), SkinCondition::Normal);
    assert_eq!(classify_sebum(150, ZoneType::TZone), SkinCondition::Normal);
    assert_eq!(classify_sebum(151, ZoneType::TZone), SkinCondition::Oily);

    assert_eq!(classify_sebum(29, ZoneType::UZone), SkinCondition::Dry);
    assert_eq!(classify_sebum(30, ZoneType::UZone), SkinCondition::Normal);
    assert_eq!(classify_sebum(70, ZoneType::UZone), SkinCondition::Normal);
    assert_eq!(classify_sebum(71, ZoneType::UZone), SkinCondition::Oily);

    // The same value means different things in each zone
    assert_ne!(
        classify_sebum(100, ZoneType::TZone),
        classify_sebum(100, ZoneType::UZone)
    );
}

#[test]
fn test_both_zones_oily_combine_to_oily() {
    let t = ZoneAnalysis::from_lab(ZoneType::TZone, lab(80.0, 8.0, 20.0), 100);
    let u = ZoneAnalysis::from_lab(ZoneType::UZone, lab(40.0, 8.0, 5.0), 100);
    assert_eq!(t.avg_sebum, 160);
    assert_eq!(t.skin_condition, SkinCondition::Oily);
    assert_eq!(u.avg_sebum, 80);
    assert_eq!(u.skin_condition, SkinCondition::Oily);

    let combined = combine_zone_analysis(&t, &u);
    assert_eq!(combined.overall_skin_type, SkinType::Oily);
    assert!(combined.rationale.contains("T-zone oily"), "{}", combined.rationale);
    assert!(combined.rationale.contains("U-zone oily"), "{}", combined.rationale);
}

#[test]
fn test_decision_table_is_complete() {
    use SkinCondition::*;

    let expected = [
        (Dry, Dry, SkinType::Dry),
        (Dry, Normal, SkinType::Combination),
        (Dry, Oily, SkinType::Combination),
        (Normal, Dry, SkinType::Combination),
        (Normal, Normal, SkinType::Normal),
        (Normal, Oily, SkinType::Combination),
        (Oily, Dry, SkinType::Combination),
        (Oily, Normal, SkinType::Combination),
        (Oily, Oily, SkinType::Oily),
    ];

    let mut seen = 0;
    for t in SkinCondition::ALL {
        for u in SkinCondition::ALL {
            let combined = combine_zone_analysis(
                &zone_with(ZoneType::TZone, t),
                &zone_with(ZoneType::UZone, u),
            );
            let (_, _, want) = expected
                .iter()
                .find(|(et, eu, _)| *et == t && *eu == u)
                .unwrap();
            assert_eq!(combined.overall_skin_type, *want, "T={} U={}", t, u);
            assert!(combined.rationale.contains(&format!("T-zone {}", t)));
            assert!(combined.rationale.contains(&format!("U-zone {}", u)));
            seen += 1;
        }
    }
    assert_eq!(seen, 9);
}

#[test]
fn test_t_zone_pools_forehead_and_nose() {
    // Forehead and nose bright, everything else dark
    let bright = [230, 200, 180];
    let dark = [30, 30, 30];
    let (image, layout) = synthetic_face([bright, bright, dark, dark, dark, dark]);
    let face = FaceRegion::from(&layout);

    let t = analyze_t_zone(&image, &face).unwrap();
    assert_eq!(t.sample_count, layout.forehead.area() + layout.nose.area());
    assert_eq!(t.zone_type, ZoneType::TZone);
    assert_eq!(t.skin_condition, SkinCondition::Oily);

    let u = analyze_u_zone(&image, &face).unwrap();
    assert_eq!(
        u.sample_count,
        layout.left_cheek.area() + layout.right_cheek.area() + layout.chin.area()
    );
    assert_eq!(u.skin_condition, SkinCondition::Dry);

    let combined = analyze_tu_zones(&image, &face).unwrap();
    assert_eq!(combined.overall_skin_type, SkinType::Combination);
}

#[test]
fn test_zone_mean_is_weighted_by_pixel_count() {
    // Forehead (400 px) white, nose (160 px) black
    let (image, layout) = synthetic_face([
        [255, 255, 255],
        [0, 0, 0],
        [128, 128, 128],
        [128, 128, 128],
        [128, 128, 128],
        [128, 128, 128],
    ]);
    let t = analyze_t_zone(&image, &FaceRegion::from(&layout)).unwrap();
    let expected_l = 100.0 * 400.0 / 560.0;
    assert!((t.avg_lab.l - expected_l).abs() < 0.1, "L = {}", t.avg_lab.l);
}

#[test]
fn test_out_of_bounds_zone_propagates_error() {
    let (image, layout) = uniform_face([180, 140, 120]);
    let mut face = FaceRegion::from(&layout);
    face.chin = BoundingBox::new(50, 55, 20, 20);
    assert!(matches!(
        analyze_u_zone(&image, &face),
        Err(AnalysisError::RegionOutOfBounds { .. })
    ));
    assert!(analyze_tu_zones(&image, &face).is_err());
}

fn stats(l: f32, a: f32, b: f32, l_std_dev: f32) -> LabStats {
    LabStats {
        mean: lab(l, a, b),
        l_std_dev,
        count: 25,
    }
}

#[test]
fn test_zone_metrics_oily_forehead() {
    let m = ZoneMetrics::from_lab_stats(SkinZone::Forehead, &stats(90.0, 6.0, 8.0, 2.0));
    assert_eq!(m.oiliness, 90);
    assert_eq!(m.condition, SkinCondition::Oily);
    assert_eq!(m.pore_size, PoreSize::Large);
    assert_eq!(m.sensitivity, 5);
    assert_eq!(m.hydration, 60);
    assert_eq!(
        m.concerns,
        vec![ZoneConcern::ExcessOil, ZoneConcern::EnlargedPores]
    );
}

#[test]
fn test_zone_metrics_same_color_differs_by_zone() {
    // L=60 -> oiliness 60: normal on the forehead, oily on a cheek
    let s = stats(60.0, 10.0, 12.0, 1.0);
    let forehead = ZoneMetrics::from_lab_stats(SkinZone::Forehead, &s);
    let cheek = ZoneMetrics::from_lab_stats(SkinZone::LeftCheek, &s);
    assert_eq!(forehead.condition, SkinCondition::Normal);
    assert_eq!(forehead.pore_size, PoreSize::Medium);
    assert_eq!(cheek.condition, SkinCondition::Oily);
    assert_eq!(cheek.pore_size, PoreSize::Large);
}

#[test]
fn test_zone_metrics_sensitive_red_cheek() {
    let m = ZoneMetrics::from_lab_stats(SkinZone::RightCheek, &stats(60.0, 30.0, 15.0, 1.0));
    assert_eq!(m.sensitivity, 100);
    assert!(m.has_concern(ZoneConcern::Sensitivity));
}

#[test]
fn test_zone_metrics_dry_uneven_cheek() {
    let m = ZoneMetrics::from_lab_stats(SkinZone::LeftCheek, &stats(10.0, 0.0, 0.0, 15.0));
    assert_eq!(m.oiliness, 10);
    assert_eq!(m.condition, SkinCondition::Dry);
    // Small bumped to medium by the lightness spread
    assert_eq!(m.pore_size, PoreSize::Medium);
    assert!(m.has_concern(ZoneConcern::Dryness));
    assert!(m.has_concern(ZoneConcern::UnevenTone));
    assert!(m.has_concern(ZoneConcern::Dehydration));
    assert!(!m.has_concern(ZoneConcern::EnlargedPores));
}

fn metrics_with(conditions: [SkinCondition; 6]) -> Vec<ZoneMetrics> {
    SkinZone::ALL
        .iter()
        .zip(conditions)
        .map(|(&zone, condition)| {
            let mut m = ZoneMetrics::from_lab_stats(zone, &stats(50.0, 10.0, 10.0, 1.0));
            m.condition = condition;
            m
        })
        .collect()
}

#[test]
fn test_overall_type_from_six_vector() {
    use SkinCondition::*;

    assert_eq!(
        derive_overall_skin_type(&metrics_with([Oily, Oily, Oily, Oily, Normal, Dry])),
        SkinType::Oily
    );
    assert_eq!(
        derive_overall_skin_type(&metrics_with([Dry, Dry, Dry, Dry, Dry, Oily])),
        SkinType::Dry
    );
    assert_eq!(
        derive_overall_skin_type(&metrics_with([Normal, Normal, Normal, Normal, Normal, Oily])),
        SkinType::Normal
    );
    assert_eq!(
        derive_overall_skin_type(&metrics_with([Normal, Normal, Dry, Normal, Normal, Normal])),
        SkinType::Normal
    );
    assert_eq!(
        derive_overall_skin_type(&metrics_with([Normal, Normal, Dry, Dry, Normal, Normal])),
        SkinType::Dry
    );
    assert_eq!(
        derive_overall_skin_type(&metrics_with([Oily, Oily, Normal, Normal, Normal, Normal])),
        SkinType::Combination
    );
    assert_eq!(
        derive_overall_skin_type(&metrics_with([Oily, Normal, Dry, Dry, Dry, Normal])),
        SkinType::Combination
    );
}

#[test]
fn test_analyze_six_zones_reports_every_zone_in_order() {
    let (image, layout) = synthetic_face([
        [230, 200, 180],
        [240, 220, 210],
        [210, 120, 120],
        [210, 120, 120],
        [150, 110, 95],
        [200, 160, 140],
    ]);
    let analysis = analyze_six_zones(&image, &layout).unwrap();

    let order: Vec<SkinZone> = analysis.zones.iter().map(|m| m.zone).collect();
    assert_eq!(order, SkinZone::ALL.to_vec());

    for m in &analysis.zones {
        assert_eq!(m.sample_count, layout.zone(m.zone).area());
        assert!(m.l_std_dev < 0.5, "flat zone {} has spread", m.zone);
    }

    // Both red cheeks are sensitive
    assert!(analysis.is_sensitive);
    assert!(analysis
        .zone(SkinZone::LeftCheek)
        .unwrap()
        .has_concern(ZoneConcern::Sensitivity));

    // Forehead and nose oily, cheeks and chin oily on their own scales
    assert_eq!(analysis.overall_skin_type, SkinType::Oily);
    assert_eq!(analysis.skin_zones().count(), 5);
}
