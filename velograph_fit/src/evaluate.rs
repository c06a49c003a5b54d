// Copyright 2025 the VeloGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::style::{RatioBand, RidingStyle};

/// Hamley's heel-based multiplier.
pub const HAMLEY_FACTOR: f64 = 1.09;
/// LeMond's multiplier.
pub const LEMOND_FACTOR: f64 = 0.883;
/// The 105% rule multiplier.
pub const SIMPLE_FACTOR: f64 = 1.05;

/// Smallest reach used as a divisor, in millimeters.
pub const MIN_REACH_MM: f64 = 1e-3;

/// Body measurements of a rider, in centimeters.
///
/// Every field may be left blank while the rider is still typing. Blank or
/// non-finite fields make the dependent estimate `None` rather than zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RiderProfile {
    /// Inseam length.
    pub inseam_cm: Option<f64>,
    /// Torso length.
    pub torso_cm: Option<f64>,
    /// Arm length.
    pub arm_cm: Option<f64>,
    /// Preferred riding position.
    pub style: RidingStyle,
}

impl RiderProfile {
    /// Saddle height candidates for this rider's inseam.
    #[must_use]
    pub fn saddle_heights(&self) -> Option<SaddleHeights> {
        saddle_heights(self.inseam_cm)
    }

    /// Cockpit reach estimate for this rider and style.
    #[must_use]
    pub fn cockpit_reach_cm(&self) -> Option<f64> {
        cockpit_reach_cm(self.torso_cm, self.arm_cm, self.style)
    }

    /// Full report against an optional frame stack/reach (millimeters).
    #[must_use]
    pub fn report(&self, stack_mm: Option<f64>, reach_mm: Option<f64>) -> FitReport {
        FitReport {
            saddle: self.saddle_heights(),
            cockpit_reach_cm: self.cockpit_reach_cm(),
            frame: evaluate_frame(stack_mm, reach_mm, self.style),
        }
    }
}

/// Three saddle height recommendations, in centimeters.
///
/// They are reported side by side; none of them is authoritative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SaddleHeights {
    /// Inseam x 1.09, measured from the pedal spindle with the heel on the pedal.
    pub hamley_cm: f64,
    /// Inseam x 0.883, measured from the bottom bracket center.
    pub lemond_cm: f64,
    /// Inseam x 1.05.
    pub simple_cm: f64,
}

/// Computes saddle height candidates from an inseam in centimeters.
#[must_use]
pub fn saddle_heights(inseam_cm: Option<f64>) -> Option<SaddleHeights> {
    let inseam = present(inseam_cm)?;
    Some(SaddleHeights {
        hamley_cm: inseam * HAMLEY_FACTOR,
        lemond_cm: inseam * LEMOND_FACTOR,
        simple_cm: inseam * SIMPLE_FACTOR,
    })
}

/// Estimates cockpit reach: `(torso + arm) / 2` plus the style offset.
#[must_use]
pub fn cockpit_reach_cm(
    torso_cm: Option<f64>,
    arm_cm: Option<f64>,
    style: RidingStyle,
) -> Option<f64> {
    let torso = present(torso_cm)?;
    let arm = present(arm_cm)?;
    Some((torso + arm) / 2.0 + style.reach_offset_cm())
}

/// Qualitative position of a frame relative to a style's target band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Ratio below the band: lower and longer than the style wants.
    TendsAggressive,
    /// Ratio inside the band.
    WithinTarget,
    /// Ratio above the band: taller and shorter than the style wants.
    TendsUpright,
}

impl Verdict {
    /// Classifies `ratio` against `band`.
    #[must_use]
    pub fn classify(ratio: f64, band: &RatioBand) -> Self {
        if band.is_below(ratio) {
            Self::TendsAggressive
        } else if band.is_above(ratio) {
            Self::TendsUpright
        } else {
            Self::WithinTarget
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TendsAggressive => "tends aggressive",
            Self::WithinTarget => "within target range",
            Self::TendsUpright => "tends upright",
        })
    }
}

/// A frame's stack/reach ratio judged against a riding style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameVerdict {
    /// Style the frame was judged for.
    pub style: RidingStyle,
    /// Target band of that style.
    pub band: RatioBand,
    /// Actual ratio, when both stack and reach were known.
    pub ratio: Option<f64>,
    /// Verdict, when the ratio is known.
    pub verdict: Option<Verdict>,
}

impl fmt::Display for FrameVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "target S/R {}", self.band)?;
        if let (Some(ratio), Some(verdict)) = (self.ratio, self.verdict) {
            write!(f, ", actual {ratio:.2}: {verdict}")?;
        }
        Ok(())
    }
}

/// Compares a frame's stack/reach ratio with the band for `style`.
///
/// Both values are millimeters. If either is missing, only the band is
/// reported. A zero reach is clamped to [`MIN_REACH_MM`] before dividing.
#[must_use]
pub fn evaluate_frame(
    stack_mm: Option<f64>,
    reach_mm: Option<f64>,
    style: RidingStyle,
) -> FrameVerdict {
    let band = style.target_band();
    let ratio = match (present(stack_mm), present(reach_mm)) {
        (Some(stack), Some(reach)) => Some(stack / reach.max(MIN_REACH_MM)),
        _ => None,
    };
    FrameVerdict {
        style,
        band,
        ratio,
        verdict: ratio.map(|r| Verdict::classify(r, &band)),
    }
}

/// Everything the fit calculator shows for one rider and one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitReport {
    /// Saddle height candidates.
    pub saddle: Option<SaddleHeights>,
    /// Cockpit reach estimate in centimeters.
    pub cockpit_reach_cm: Option<f64>,
    /// Frame verdict.
    pub frame: FrameVerdict,
}

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_inputs_yield_no_value() {
        assert_eq!(saddle_heights(None), None);
        assert_eq!(saddle_heights(Some(f64::NAN)), None);
        assert_eq!(cockpit_reach_cm(Some(60.0), None, RidingStyle::Comfort), None);
        assert_eq!(cockpit_reach_cm(None, Some(60.0), RidingStyle::Comfort), None);
    }

    #[test]
    fn zero_reach_is_clamped_not_divided() {
        let v = evaluate_frame(Some(500.0), Some(0.0), RidingStyle::Balanced);
        let ratio = v.ratio.unwrap();
        assert!(ratio.is_finite());
        assert_eq!(v.verdict, Some(Verdict::TendsUpright));
    }

    #[test]
    fn band_edges_follow_inclusivity() {
        let aggressive = RidingStyle::Aggressive.target_band();
        assert!(aggressive.contains(1.449));
        assert!(aggressive.is_above(1.45));

        let balanced = RidingStyle::Balanced.target_band();
        assert!(balanced.contains(1.45));
        assert!(balanced.contains(1.55));
        assert!(balanced.is_below(1.449));
        assert!(balanced.is_above(1.551));

        let comfort = RidingStyle::Comfort.target_band();
        assert!(comfort.is_below(1.55));
        assert!(comfort.contains(1.56));
    }
}
