// Copyright 2025 the VeloGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use core::fmt::Write as _;

use kurbo::{Point, Vec2};
use peniko::Color;
use velograph_geometry::{FramePoints, FrameProjector};

use crate::color::{DEFAULT_FRAME_COLOR, RIM_COLOR, TIRE_COLOR};

/// Nominal frame tube diameter in millimeters.
pub const FRAME_TUBE_WIDTH_MM: f64 = 25.0;

/// Thinnest tube stroke drawn, in pixels.
pub const MIN_TUBE_WIDTH_PX: f64 = 1.5;

/// Radial depth of a rim in millimeters.
pub const RIM_DEPTH_MM: f64 = 30.0;

/// Color of the rider-fit marker.
pub const FIT_MARKER_COLOR: Color = Color::from_rgb8(0xdc, 0x26, 0x26);

bitflags::bitflags! {
    /// Which parts of the drawing to emit.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct FrameLayers: u8 {
        /// Tires and rims. Requires the projector to carry a wheel spec.
        const WHEELS     = 0b0000_0001;
        /// The seven tubes.
        const FRAME      = 0b0000_0010;
        /// Round caps where tubes meet.
        const JOINTS     = 0b0000_0100;
        /// The rider-fit target, if one is set.
        const FIT_MARKER = 0b0000_1000;
    }
}

impl Default for FrameLayers {
    fn default() -> Self {
        Self::WHEELS | Self::FRAME | Self::JOINTS | Self::FIT_MARKER
    }
}

/// Where the top and down tubes meet the seat and head tubes, as fractions
/// of the respective tube length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointAdjustments {
    /// Top tube junction below the seat tube top.
    pub top_to_seat_drop: f64,
    /// Top tube junction below the head tube top.
    pub top_to_head_drop: f64,
    /// Down tube junction above the head tube bottom.
    pub down_to_head_rise: f64,
}

impl Default for JointAdjustments {
    fn default() -> Self {
        Self {
            top_to_seat_drop: 0.08,
            top_to_head_drop: 0.07,
            down_to_head_rise: 0.1,
        }
    }
}

/// A stack/reach target to overlay on the frame, in millimeters.
///
/// Stack and reach are measured from the bottom bracket, so the marker lands
/// on the head tube top of a frame with exactly these numbers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitTarget {
    /// Target stack.
    pub stack_mm: f64,
    /// Target reach.
    pub reach_mm: f64,
}

/// Appearance options for [`render_frame_svg`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStyle {
    /// Layers to draw.
    pub layers: FrameLayers,
    /// Tube and joint color.
    pub frame_color: Color,
    /// Junction placement.
    pub joints: JointAdjustments,
    /// Optional rider-fit marker.
    pub fit_target: Option<FitTarget>,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            layers: FrameLayers::default(),
            frame_color: DEFAULT_FRAME_COLOR,
            joints: JointAdjustments::default(),
            fit_target: None,
        }
    }
}

/// Millimeter-space junction points derived from the frame points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Junctions {
    /// Top tube and seat stays meet the seat tube.
    pub seat: Point,
    /// Top tube meets the head tube.
    pub head_top: Point,
    /// Down tube meets the head tube.
    pub head_bottom: Point,
}

impl Junctions {
    /// Places the junctions along the seat and head tubes.
    #[must_use]
    pub fn new(points: &FramePoints, adjust: &JointAdjustments) -> Self {
        let seat = points.seat_top - points.bottom_bracket;
        let head = points.head_top - points.head_bottom;
        let (u_seat, seat_len) = unit(seat);
        let (u_head, head_len) = unit(head);
        Self {
            seat: points.seat_top - u_seat * (adjust.top_to_seat_drop * seat_len),
            head_top: points.head_top - u_head * (adjust.top_to_head_drop * head_len),
            head_bottom: points.head_bottom + u_head * (adjust.down_to_head_rise * head_len),
        }
    }
}

/// Unit vector and length; zero vectors stay zero.
fn unit(v: Vec2) -> (Vec2, f64) {
    let len = v.length();
    if len > 0.0 { (v / len, len) } else { (v, 0.0) }
}

/// Draws the projector's frame as a standalone SVG document.
///
/// The document is [`FrameProjector::canvas_size`] pixels large, and every
/// element is placed through [`FrameProjector::to_view`], so callers mapping
/// their own millimeter points through the same projector stay aligned.
#[must_use]
pub fn render_frame_svg(projector: &FrameProjector, style: &FrameStyle) -> String {
    let size = projector.canvas_size();
    let scale = projector.scale();
    let mm = projector.frame().points;
    let px = projector.view_points();
    let junctions = Junctions::new(&mm, &style.joints);
    let seat_joint = projector.to_view(junctions.seat);
    let head_top_joint = projector.to_view(junctions.head_top);
    let head_bot_joint = projector.to_view(junctions.head_bottom);
    let tube_w = (FRAME_TUBE_WIDTH_MM * scale).max(MIN_TUBE_WIDTH_PX);
    let frame_color = color_to_svg(style.frame_color);

    let mut out = String::new();
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
        w = fmt_px(size.width),
        h = fmt_px(size.height),
    );

    if style.layers.contains(FrameLayers::WHEELS)
        && let Some(wheels) = projector.frame().wheels
    {
        let tire = color_to_svg(TIRE_COLOR);
        let rim = color_to_svg(RIM_COLOR);
        let tire_r = wheels.radius() * scale;
        let rim_r = (wheels.rim_diameter_mm - RIM_DEPTH_MM) / 2.0 * scale;
        out.push_str("<g id=\"wheels\" fill=\"none\">");
        for center in [px.rear_axle, px.front_axle] {
            write_ring(&mut out, center, tire_r, &tire, wheels.tire_width_mm * scale);
            write_ring(&mut out, center, rim_r, &rim, RIM_DEPTH_MM * scale);
        }
        out.push_str("</g>");
    }

    if style.layers.contains(FrameLayers::FRAME) {
        let _ = write!(
            out,
            "<g id=\"frame\" stroke=\"{frame_color}\" stroke-width=\"{}\" stroke-linecap=\"round\">",
            fmt_px(tube_w)
        );
        // Chainstay, seat tube, seat stay, down tube, top tube, head tube, fork.
        for (a, b) in [
            (px.bottom_bracket, px.rear_axle),
            (px.bottom_bracket, px.seat_top),
            (seat_joint, px.rear_axle),
            (px.bottom_bracket, head_bot_joint),
            (seat_joint, head_top_joint),
            (px.head_bottom, px.head_top),
            (px.head_bottom, px.front_axle),
        ] {
            write_line(&mut out, a, b);
        }
        out.push_str("</g>");
    }

    if style.layers.contains(FrameLayers::JOINTS) {
        let _ = write!(out, "<g id=\"joints\" fill=\"{frame_color}\">");
        for center in [px.bottom_bracket, seat_joint, head_top_joint, head_bot_joint] {
            write_circle(&mut out, center, tube_w / 2.0);
        }
        out.push_str("</g>");
    }

    if style.layers.contains(FrameLayers::FIT_MARKER)
        && let Some(target) = style.fit_target
    {
        let at = projector.to_view(fit_marker_point(&mm, target));
        let marker = color_to_svg(FIT_MARKER_COLOR);
        let r = tube_w * 1.5;
        let arm = Vec2::new(2.0 * r, 0.0);
        let _ = write!(
            out,
            "<g id=\"fit-marker\" stroke=\"{marker}\" stroke-width=\"{}\" fill=\"none\">",
            fmt_px((tube_w / 3.0).max(1.0))
        );
        write_circle(&mut out, at, r);
        write_line(&mut out, at - arm, at + arm);
        write_line(&mut out, at - arm.turn_90(), at + arm.turn_90());
        out.push_str("</g>");
    }

    out.push_str("</svg>");
    out
}

/// Millimeter-space point of a stack/reach target relative to the frame's
/// bottom bracket.
#[must_use]
pub fn fit_marker_point(points: &FramePoints, target: FitTarget) -> Point {
    points.bottom_bracket + Vec2::new(target.reach_mm, target.stack_mm)
}

fn write_line(out: &mut String, a: Point, b: Point) {
    let _ = write!(
        out,
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"/>",
        fmt_px(a.x),
        fmt_px(a.y),
        fmt_px(b.x),
        fmt_px(b.y)
    );
}

fn write_ring(out: &mut String, c: Point, r: f64, stroke: &str, width: f64) {
    let _ = write!(
        out,
        "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" stroke=\"{stroke}\" stroke-width=\"{}\"/>",
        fmt_px(c.x),
        fmt_px(c.y),
        fmt_px(r),
        fmt_px(width)
    );
}

fn write_circle(out: &mut String, c: Point, r: f64) {
    let _ = write!(
        out,
        "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"/>",
        fmt_px(c.x),
        fmt_px(c.y),
        fmt_px(r)
    );
}

/// `#rrggbb`; alpha is ignored since frame colors are opaque.
pub(crate) fn color_to_svg(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

/// Formats a pixel value with at most three decimals and no trailing zeros.
pub(crate) fn fmt_px(v: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    let mut s = format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use velograph_geometry::{FrameGeometry, OutputBox, WheelSpec};

    fn geometry() -> FrameGeometry {
        FrameGeometry {
            stack: 580.0,
            reach: 380.0,
            top_tube_effective: None,
            seat_tube_length: Some(500.0),
            head_tube_length: Some(150.0),
            chainstay: 430.0,
            wheelbase: 1020.0,
            bb_drop: 70.0,
            head_tube_angle: 90.0,
            seat_tube_angle: 90.0,
        }
    }

    #[test]
    fn px_formatting() {
        assert_eq!(fmt_px(10.0), "10");
        assert_eq!(fmt_px(10.25), "10.25");
        assert_eq!(fmt_px(1.0 / 3.0), "0.333");
        assert_eq!(fmt_px(-0.0001), "0");
    }

    #[test]
    fn junctions_sit_on_the_tubes() {
        let points = FramePoints::from_geometry(&geometry());
        let j = Junctions::new(&points, &JointAdjustments::default());
        // Vertical tubes: junctions move straight along y.
        assert!((j.seat.x - points.seat_top.x).abs() < 1e-9);
        assert!((j.seat.y - (points.seat_top.y - 40.0)).abs() < 1e-9);
        assert!((j.head_top.y - (points.head_top.y - 10.5)).abs() < 1e-9);
        assert!((j.head_bottom.y - (points.head_bottom.y + 15.0)).abs() < 1e-9);
    }

    #[test]
    fn degenerate_tube_keeps_junction_in_place() {
        let mut g = geometry();
        g.seat_tube_length = Some(0.0);
        let points = FramePoints::from_geometry(&g);
        let j = Junctions::new(&points, &JointAdjustments::default());
        assert_eq!(j.seat, points.seat_top);
    }

    #[test]
    fn tube_width_has_a_floor() {
        let p = FrameProjector::new(&geometry(), None, OutputBox::with_width(40.0));
        let svg = render_frame_svg(&p, &FrameStyle::default());
        assert!(svg.contains("stroke-width=\"1.5\""));
    }

    #[test]
    fn wheels_need_a_wheel_spec() {
        let style = FrameStyle::default();
        let bare = FrameProjector::new(&geometry(), None, OutputBox::default());
        assert!(!render_frame_svg(&bare, &style).contains("id=\"wheels\""));
        let wheeled =
            FrameProjector::new(&geometry(), Some(WheelSpec::default()), OutputBox::default());
        assert!(render_frame_svg(&wheeled, &style).contains("id=\"wheels\""));
    }

    #[test]
    fn fit_marker_matching_frame_lands_on_head_top() {
        let points = FramePoints::from_geometry(&geometry());
        let at = fit_marker_point(
            &points,
            FitTarget {
                stack_mm: 580.0,
                reach_mm: 380.0,
            },
        );
        assert_eq!(at, points.head_top);
    }
}
