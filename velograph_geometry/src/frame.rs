// Copyright 2025 the VeloGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Seat tube length used when a listing omits it, in millimeters.
pub const DEFAULT_SEAT_TUBE_MM: f64 = 500.0;

/// Head tube length used when a listing omits it, in millimeters.
pub const DEFAULT_HEAD_TUBE_MM: f64 = 150.0;

/// Numeric measurement set of one frame size.
///
/// All lengths are millimeters, angles are degrees measured from the
/// horizontal. The optional tube lengths come from incomplete retailer
/// listings; [`FrameGeometry::seat_tube_mm`] and
/// [`FrameGeometry::head_tube_mm`] substitute [`DEFAULT_SEAT_TUBE_MM`] and
/// [`DEFAULT_HEAD_TUBE_MM`] when they are absent.
///
/// Angles are expected in `(0, 180)` degrees. Values outside that range are
/// accepted and simply yield a degenerate projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameGeometry {
    /// Vertical distance from the bottom bracket to the top of the head tube.
    pub stack: f64,
    /// Horizontal distance from the bottom bracket to the top of the head tube.
    pub reach: f64,
    /// Effective (horizontal) top tube length.
    pub top_tube_effective: Option<f64>,
    /// Seat tube length, center to top.
    pub seat_tube_length: Option<f64>,
    /// Physical head tube length.
    pub head_tube_length: Option<f64>,
    /// Bottom bracket to rear axle.
    pub chainstay: f64,
    /// Rear axle to front axle.
    pub wheelbase: f64,
    /// How far the bottom bracket sits below the axle line.
    pub bb_drop: f64,
    /// Head tube angle in degrees.
    pub head_tube_angle: f64,
    /// Seat tube angle in degrees.
    pub seat_tube_angle: f64,
}

impl FrameGeometry {
    /// Seat tube length with the listing default applied.
    #[must_use]
    pub fn seat_tube_mm(&self) -> f64 {
        self.seat_tube_length.unwrap_or(DEFAULT_SEAT_TUBE_MM)
    }

    /// Head tube length with the listing default applied.
    #[must_use]
    pub fn head_tube_mm(&self) -> f64 {
        self.head_tube_length.unwrap_or(DEFAULT_HEAD_TUBE_MM)
    }

    /// Stack divided by reach, or `None` when reach is not positive.
    #[must_use]
    pub fn stack_reach_ratio(&self) -> Option<f64> {
        (self.reach > 0.0).then(|| self.stack / self.reach)
    }
}
