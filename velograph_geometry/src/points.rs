// Copyright 2025 the VeloGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sin`/`cos`
use kurbo::{Point, Rect};

use crate::frame::FrameGeometry;
use crate::wheel::WheelSpec;

/// Smallest extent of the frame bounding box along either axis, in millimeters.
pub const MIN_BOUNDS_EXTENT_MM: f64 = 1.0;

/// Names of the six points a frame drawing is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FramePoint {
    /// Bottom bracket center.
    BottomBracket,
    /// Rear wheel axle.
    RearAxle,
    /// Front wheel axle.
    FrontAxle,
    /// Top of the seat tube.
    SeatTop,
    /// Top of the head tube.
    HeadTop,
    /// Bottom of the head tube.
    HeadBottom,
}

impl FramePoint {
    /// All points in drawing order.
    pub const ALL: [Self; 6] = [
        Self::BottomBracket,
        Self::RearAxle,
        Self::FrontAxle,
        Self::SeatTop,
        Self::HeadTop,
        Self::HeadBottom,
    ];

    /// Stable snake-case label, used for SVG ids and debug output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BottomBracket => "bb",
            Self::RearAxle => "rear_axle",
            Self::FrontAxle => "front_axle",
            Self::SeatTop => "seat_top",
            Self::HeadTop => "head_top",
            Self::HeadBottom => "head_bottom",
        }
    }
}

/// The six labeled frame points in a single coordinate space.
///
/// The same type is used for millimeter space (axle line at `y = 0`, `+y`
/// up) and for pixel space (`+y` down) so that callers can map one into the
/// other with [`FramePoints::map`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FramePoints {
    /// Bottom bracket center.
    pub bottom_bracket: Point,
    /// Rear wheel axle.
    pub rear_axle: Point,
    /// Front wheel axle.
    pub front_axle: Point,
    /// Top of the seat tube.
    pub seat_top: Point,
    /// Top of the head tube.
    pub head_top: Point,
    /// Bottom of the head tube.
    pub head_bottom: Point,
}

impl FramePoints {
    /// Computes the millimeter-space points of a frame.
    ///
    /// The wheel axles sit on `y = 0` and the bottom bracket hangs
    /// `bb_drop` below them at `x = 0`. Angles are converted from degrees
    /// and used as-is; out-of-range angles give a degenerate shape.
    #[must_use]
    pub fn from_geometry(geometry: &FrameGeometry) -> Self {
        let seat_angle = geometry.seat_tube_angle.to_radians();
        let head_angle = geometry.head_tube_angle.to_radians();
        let seat_tube = geometry.seat_tube_mm();
        let head_tube = geometry.head_tube_mm();
        let bb_drop = geometry.bb_drop;

        let head_top = Point::new(geometry.reach, geometry.stack - bb_drop);
        let head_bottom = Point::new(
            head_top.x + head_tube * head_angle.cos(),
            head_top.y - head_tube * head_angle.sin(),
        );

        Self {
            bottom_bracket: Point::new(0.0, -bb_drop),
            rear_axle: Point::new(-geometry.chainstay, 0.0),
            front_axle: Point::new(geometry.wheelbase - geometry.chainstay, 0.0),
            seat_top: Point::new(
                -seat_tube * seat_angle.cos(),
                seat_tube * seat_angle.sin() - bb_drop,
            ),
            head_top,
            head_bottom,
        }
    }

    /// Returns the point with the given name.
    #[must_use]
    pub fn get(&self, which: FramePoint) -> Point {
        match which {
            FramePoint::BottomBracket => self.bottom_bracket,
            FramePoint::RearAxle => self.rear_axle,
            FramePoint::FrontAxle => self.front_axle,
            FramePoint::SeatTop => self.seat_top,
            FramePoint::HeadTop => self.head_top,
            FramePoint::HeadBottom => self.head_bottom,
        }
    }

    /// Iterates over `(name, point)` pairs in [`FramePoint::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (FramePoint, Point)> + '_ {
        FramePoint::ALL.into_iter().map(|p| (p, self.get(p)))
    }

    /// Applies `f` to every point.
    #[must_use]
    pub fn map(&self, mut f: impl FnMut(Point) -> Point) -> Self {
        Self {
            bottom_bracket: f(self.bottom_bracket),
            rear_axle: f(self.rear_axle),
            front_axle: f(self.front_axle),
            seat_top: f(self.seat_top),
            head_top: f(self.head_top),
            head_bottom: f(self.head_bottom),
        }
    }

    /// Tight bounding box over the six points.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let mut rect = Rect::from_points(self.bottom_bracket, self.bottom_bracket);
        for (_, pt) in self.iter() {
            rect = rect.union_pt(pt);
        }
        rect
    }
}

/// A frame in millimeter space together with the box it should be fitted by.
///
/// This is the ephemeral result of projecting one geometry; it is never
/// persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedFrame {
    /// Millimeter-space points.
    pub points: FramePoints,
    /// Bounding box used for fitting, including wheels when requested.
    ///
    /// Each side is at least [`MIN_BOUNDS_EXTENT_MM`] long.
    pub bounds: Rect,
    /// Wheels included in [`ProjectedFrame::bounds`], if any.
    pub wheels: Option<WheelSpec>,
}

impl ProjectedFrame {
    /// Projects `geometry` into millimeter space.
    ///
    /// When `wheels` is given the bounds are inflated by the tire radius
    /// around both axles, horizontally outward and vertically around the axle
    /// line.
    #[must_use]
    pub fn new(geometry: &FrameGeometry, wheels: Option<WheelSpec>) -> Self {
        let points = FramePoints::from_geometry(geometry);
        let mut bounds = points.bounds();
        if let Some(wheels) = wheels {
            let r = wheels.radius();
            bounds = bounds
                .union_pt(Point::new(points.rear_axle.x - r, points.rear_axle.y - r))
                .union_pt(Point::new(points.rear_axle.x, points.rear_axle.y + r))
                .union_pt(Point::new(points.front_axle.x + r, points.front_axle.y));
        }

        Self {
            points,
            bounds: floor_extent(bounds),
            wheels,
        }
    }
}

/// Grows `rect` from its minimum corner so neither side is shorter than
/// [`MIN_BOUNDS_EXTENT_MM`].
fn floor_extent(rect: Rect) -> Rect {
    Rect::new(
        rect.x0,
        rect.y0,
        rect.x0 + rect.width().max(MIN_BOUNDS_EXTENT_MM),
        rect.y0 + rect.height().max(MIN_BOUNDS_EXTENT_MM),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn esker_m() -> FrameGeometry {
        FrameGeometry {
            stack: 580.0,
            reach: 380.0,
            top_tube_effective: Some(550.0),
            seat_tube_length: Some(520.0),
            head_tube_length: Some(150.0),
            chainstay: 430.0,
            wheelbase: 1020.0,
            bb_drop: 70.0,
            head_tube_angle: 71.0,
            seat_tube_angle: 73.5,
        }
    }

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn points_follow_frame_measurements() {
        let g = esker_m();
        let pts = FramePoints::from_geometry(&g);

        assert!(close(pts.bottom_bracket, Point::new(0.0, -70.0)));
        assert!(close(pts.rear_axle, Point::new(-430.0, 0.0)));
        assert!(close(pts.front_axle, Point::new(590.0, 0.0)));
        assert!(close(pts.head_top, Point::new(380.0, 510.0)));

        let ha = 71.0_f64.to_radians();
        let expected_bottom = Point::new(380.0 + 150.0 * ha.cos(), 510.0 - 150.0 * ha.sin());
        assert!(close(pts.head_bottom, expected_bottom));

        let sa = 73.5_f64.to_radians();
        let expected_seat = Point::new(-520.0 * sa.cos(), 520.0 * sa.sin() - 70.0);
        assert!(close(pts.seat_top, expected_seat));
    }

    #[test]
    fn head_tube_length_matches_distance_between_head_points() {
        let pts = FramePoints::from_geometry(&esker_m());
        let len = (pts.head_top - pts.head_bottom).hypot();
        assert!((len - 150.0).abs() < 1e-9);
    }

    #[test]
    fn wheels_inflate_bounds_around_axles() {
        let g = esker_m();
        let bare = ProjectedFrame::new(&g, None);
        let wheels = WheelSpec::default();
        let with_wheels = ProjectedFrame::new(&g, Some(wheels));
        let r = wheels.radius();

        assert!((with_wheels.bounds.x0 - (-430.0 - r)).abs() < 1e-9);
        assert!((with_wheels.bounds.x1 - (590.0 + r)).abs() < 1e-9);
        assert!((with_wheels.bounds.y0 - (-r)).abs() < 1e-9);
        assert_eq!(with_wheels.bounds.union(bare.bounds), with_wheels.bounds);
    }

    #[test]
    fn degenerate_geometry_still_has_positive_extent() {
        let g = FrameGeometry {
            stack: 0.0,
            reach: 0.0,
            top_tube_effective: None,
            seat_tube_length: Some(0.0),
            head_tube_length: Some(0.0),
            chainstay: 0.0,
            wheelbase: 0.0,
            bb_drop: 0.0,
            head_tube_angle: 0.0,
            seat_tube_angle: 0.0,
        };
        let frame = ProjectedFrame::new(&g, None);
        assert!(frame.bounds.width() >= MIN_BOUNDS_EXTENT_MM);
        assert!(frame.bounds.height() >= MIN_BOUNDS_EXTENT_MM);
    }

    #[test]
    fn labels_are_unique() {
        for (i, a) in FramePoint::ALL.iter().enumerate() {
            for b in &FramePoint::ALL[i + 1..] {
                assert_ne!(a.label(), b.label(), "duplicate label");
            }
        }
    }
}
