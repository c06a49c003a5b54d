// Copyright 2025 the VeloGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `velograph_fit` crate.
//!
//! These cover the published formulas and the verdict wording the fit
//! calculator shows.

use velograph_fit::{
    RiderProfile, RidingStyle, Verdict, cockpit_reach_cm, evaluate_frame, saddle_heights,
};

#[test]
fn saddle_heights_for_82cm_inseam() {
    let h = saddle_heights(Some(82.0)).unwrap();
    assert!((h.hamley_cm - 89.38).abs() < 0.01);
    assert!((h.lemond_cm - 72.41).abs() < 0.01);
    assert!((h.simple_cm - 86.1).abs() < 0.01);
}

#[test]
fn cockpit_reach_adds_style_offset() {
    let balanced = cockpit_reach_cm(Some(60.0), Some(60.0), RidingStyle::Balanced).unwrap();
    assert!((balanced - 62.0).abs() < 1e-9);

    let aggressive = cockpit_reach_cm(Some(60.0), Some(60.0), RidingStyle::Aggressive).unwrap();
    let comfort = cockpit_reach_cm(Some(60.0), Some(60.0), RidingStyle::Comfort).unwrap();
    assert!((aggressive - 64.0).abs() < 1e-9);
    assert!((comfort - 60.0).abs() < 1e-9);
}

#[test]
fn aggressive_verdicts() {
    // 500 / 400 = 1.25 sits inside the aggressive band (< 1.45).
    let v = evaluate_frame(Some(500.0), Some(400.0), RidingStyle::Aggressive);
    assert_eq!(v.verdict, Some(Verdict::WithinTarget));
    assert!((v.ratio.unwrap() - 1.25).abs() < 1e-12);

    // 640 / 400 = 1.60 is above it.
    let v = evaluate_frame(Some(640.0), Some(400.0), RidingStyle::Aggressive);
    assert_eq!(v.verdict, Some(Verdict::TendsUpright));
}

#[test]
fn balanced_and_comfort_verdicts() {
    let low = evaluate_frame(Some(560.0), Some(400.0), RidingStyle::Balanced);
    assert_eq!(low.verdict, Some(Verdict::TendsAggressive));

    let mid = evaluate_frame(Some(600.0), Some(400.0), RidingStyle::Balanced);
    assert_eq!(mid.verdict, Some(Verdict::WithinTarget));

    let comfort = evaluate_frame(Some(600.0), Some(400.0), RidingStyle::Comfort);
    assert_eq!(comfort.verdict, Some(Verdict::TendsAggressive));

    let tall = evaluate_frame(Some(660.0), Some(400.0), RidingStyle::Comfort);
    assert_eq!(tall.verdict, Some(Verdict::WithinTarget));
}

#[test]
fn missing_reach_reports_band_only() {
    let v = evaluate_frame(Some(540.0), None, RidingStyle::Balanced);
    assert_eq!(v.ratio, None);
    assert_eq!(v.verdict, None);
    assert_eq!(v.band, RidingStyle::Balanced.target_band());
    assert_eq!(v.to_string(), "target S/R 1.45 - 1.55");
}

#[test]
fn verdict_text_includes_ratio() {
    let v = evaluate_frame(Some(640.0), Some(400.0), RidingStyle::Aggressive);
    assert_eq!(v.to_string(), "target S/R < 1.45, actual 1.60: tends upright");
}

#[test]
fn report_combines_all_estimates() {
    let rider = RiderProfile {
        inseam_cm: Some(82.0),
        torso_cm: None,
        arm_cm: Some(61.0),
        style: RidingStyle::Comfort,
    };
    let report = rider.report(Some(600.0), Some(380.0));
    assert!(report.saddle.is_some());
    assert_eq!(report.cockpit_reach_cm, None);
    assert_eq!(report.frame.style, RidingStyle::Comfort);
    assert_eq!(report.frame.verdict, Some(Verdict::WithinTarget));
}

#[test]
fn styles_parse_case_insensitively() {
    assert_eq!("Aggressive".parse(), Ok(RidingStyle::Aggressive));
    assert_eq!(" comfort ".parse(), Ok(RidingStyle::Comfort));
    assert!("racy".parse::<RidingStyle>().is_err());
    for style in RidingStyle::ALL {
        assert_eq!(style.to_string().parse(), Ok(style));
    }
}
