// Copyright 2025 the VeloGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// ISO bead seat diameter of a 700c / 29" rim, in millimeters.
pub const DEFAULT_RIM_DIAMETER_MM: f64 = 622.0;

/// Tire width assumed when a listing does not state one, in millimeters.
pub const DEFAULT_TIRE_WIDTH_MM: f64 = 30.0;

/// Wheel-size labels seen in listings, mapped to ISO bead seat diameters.
const WHEEL_SIZES: &[(&str, f64)] = &[
    ("700", 622.0),
    ("622", 622.0),
    ("584", 584.0),
    ("559", 559.0),
    ("507", 507.0),
    ("406", 406.0),
    ("305", 305.0),
    ("254", 254.0),
    ("203", 203.0),
    ("29", 622.0),
    ("28", 622.0),
    ("27.5", 584.0),
    ("26", 559.0),
    ("24", 507.0),
    ("20", 406.0),
    ("16", 305.0),
    ("14", 254.0),
    ("12", 203.0),
];

/// Wheel and tire dimensions used to draw wheels and to inflate the frame
/// bounding box around both axles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelSpec {
    /// Rim bead seat diameter in millimeters.
    pub rim_diameter_mm: f64,
    /// Tire width in millimeters.
    pub tire_width_mm: f64,
}

impl Default for WheelSpec {
    fn default() -> Self {
        Self {
            rim_diameter_mm: DEFAULT_RIM_DIAMETER_MM,
            tire_width_mm: DEFAULT_TIRE_WIDTH_MM,
        }
    }
}

impl WheelSpec {
    /// Builds a wheel spec from free-text listing labels.
    ///
    /// `wheel_size` accepts labels such as `"29"`, `"27.5\""` or `"700c"`;
    /// unknown or missing labels fall back to [`DEFAULT_RIM_DIAMETER_MM`].
    /// `tire_width` is a millimeter number; anything unparsable falls back to
    /// [`DEFAULT_TIRE_WIDTH_MM`].
    #[must_use]
    pub fn from_labels(wheel_size: Option<&str>, tire_width: Option<&str>) -> Self {
        let rim_diameter_mm = wheel_size
            .and_then(rim_diameter_for_label)
            .unwrap_or(DEFAULT_RIM_DIAMETER_MM);
        let tire_width_mm = tire_width
            .and_then(|t| t.trim().trim_end_matches("mm").trim().parse::<f64>().ok())
            .filter(|w| w.is_finite() && *w > 0.0)
            .unwrap_or(DEFAULT_TIRE_WIDTH_MM);
        Self {
            rim_diameter_mm,
            tire_width_mm,
        }
    }

    /// Outer radius of the tire: `(rim + tire) / 2`.
    #[must_use]
    pub fn radius(&self) -> f64 {
        (self.rim_diameter_mm + self.tire_width_mm) / 2.0
    }
}

/// Looks up the rim diameter for a wheel-size label.
#[must_use]
pub fn rim_diameter_for_label(label: &str) -> Option<f64> {
    let key = label
        .trim()
        .trim_end_matches(['"', 'c', 'C'])
        .trim_end_matches("in")
        .trim();
    WHEEL_SIZES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|&(_, mm)| mm)
}
