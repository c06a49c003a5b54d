// Copyright 2025 the VeloGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

/// How the rider wants to sit on the bike.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum RidingStyle {
    /// Low and stretched out; racing.
    Aggressive,
    /// Endurance position between the two extremes.
    #[default]
    Balanced,
    /// Upright, relaxed position.
    Comfort,
}

impl RidingStyle {
    /// All styles, from most to least aggressive.
    pub const ALL: [Self; 3] = [Self::Aggressive, Self::Balanced, Self::Comfort];

    /// Centimeters added to the torso/arm average when estimating cockpit reach.
    #[must_use]
    pub const fn reach_offset_cm(self) -> f64 {
        match self {
            Self::Aggressive => 4.0,
            Self::Balanced => 2.0,
            Self::Comfort => 0.0,
        }
    }

    /// Stack/reach ratio band a frame for this style should fall in.
    #[must_use]
    pub const fn target_band(self) -> RatioBand {
        match self {
            Self::Aggressive => RatioBand {
                min: None,
                max: Some(Bound::exclusive(1.45)),
            },
            Self::Balanced => RatioBand {
                min: Some(Bound::inclusive(1.45)),
                max: Some(Bound::inclusive(1.55)),
            },
            Self::Comfort => RatioBand {
                min: Some(Bound::exclusive(1.55)),
                max: None,
            },
        }
    }

    /// Lowercase name, as used on the command line and in stored state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aggressive => "aggressive",
            Self::Balanced => "balanced",
            Self::Comfort => "comfort",
        }
    }
}

impl fmt::Display for RidingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown riding style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownStyle;

impl fmt::Display for UnknownStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected one of: aggressive, balanced, comfort")
    }
}

impl core::error::Error for UnknownStyle {}

impl FromStr for RidingStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(UnknownStyle)
    }
}

/// One end of a [`RatioBand`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bound {
    /// Threshold ratio.
    pub value: f64,
    /// Whether a ratio equal to `value` is inside the band.
    pub inclusive: bool,
}

impl Bound {
    /// A bound that admits its own value.
    #[must_use]
    pub const fn inclusive(value: f64) -> Self {
        Self {
            value,
            inclusive: true,
        }
    }

    /// A bound that excludes its own value.
    #[must_use]
    pub const fn exclusive(value: f64) -> Self {
        Self {
            value,
            inclusive: false,
        }
    }
}

/// A half-open or closed interval of stack/reach ratios.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RatioBand {
    /// Lower bound, if any.
    pub min: Option<Bound>,
    /// Upper bound, if any.
    pub max: Option<Bound>,
}

impl RatioBand {
    /// Returns `true` if `ratio` is below the lower bound.
    #[must_use]
    pub fn is_below(&self, ratio: f64) -> bool {
        self.min.is_some_and(|b| {
            if b.inclusive {
                ratio < b.value
            } else {
                ratio <= b.value
            }
        })
    }

    /// Returns `true` if `ratio` is above the upper bound.
    #[must_use]
    pub fn is_above(&self, ratio: f64) -> bool {
        self.max.is_some_and(|b| {
            if b.inclusive {
                ratio > b.value
            } else {
                ratio >= b.value
            }
        })
    }

    /// Returns `true` if `ratio` lies inside the band.
    #[must_use]
    pub fn contains(&self, ratio: f64) -> bool {
        !self.is_below(ratio) && !self.is_above(ratio)
    }
}

impl fmt::Display for RatioBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (Some(lo), Some(hi)) => write!(f, "{:.2} - {:.2}", lo.value, hi.value),
            (None, Some(hi)) => {
                let op = if hi.inclusive { "<=" } else { "<" };
                write!(f, "{op} {:.2}", hi.value)
            }
            (Some(lo), None) => {
                let op = if lo.inclusive { ">=" } else { ">" };
                write!(f, "{op} {:.2}", lo.value)
            }
            (None, None) => f.write_str("any"),
        }
    }
}
