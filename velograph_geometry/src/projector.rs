// Copyright 2025 the VeloGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::frame::FrameGeometry;
use crate::points::{FramePoints, ProjectedFrame};
use crate::wheel::WheelSpec;

/// Blank border kept around the fitted frame, in pixels.
pub const MARGIN_PX: f64 = 10.0;

/// Pixels per millimeter used when no output dimension is requested.
pub const DEFAULT_SCALE: f64 = 0.35;

/// Lower bound of the pixels-per-millimeter scale.
pub const MIN_SCALE: f64 = 0.01;

/// Requested output size in pixels.
///
/// Either dimension may be left open. Open dimensions are derived from the
/// fitted content plus [`MARGIN_PX`] on both sides. A dimension that is zero,
/// negative or not finite counts as open.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OutputBox {
    /// Requested width in pixels.
    pub width: Option<f64>,
    /// Requested height in pixels.
    pub height: Option<f64>,
}

impl OutputBox {
    /// An output box with both dimensions fixed.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// An output box with only the width fixed.
    #[must_use]
    pub const fn with_width(width: f64) -> Self {
        Self {
            width: Some(width),
            height: None,
        }
    }

    /// An output box with only the height fixed.
    #[must_use]
    pub const fn with_height(height: f64) -> Self {
        Self {
            width: None,
            height: Some(height),
        }
    }

    /// The box with unusable dimensions opened up.
    #[must_use]
    pub fn usable(self) -> Self {
        let usable = |v: Option<f64>| v.filter(|v| v.is_finite() && *v > 0.0);
        Self {
            width: usable(self.width),
            height: usable(self.height),
        }
    }
}

/// Maps a frame from millimeter space into a pixel canvas.
///
/// The frame's bounding box is scaled uniformly to fit the [`OutputBox`],
/// centered inside it with a [`MARGIN_PX`] border, and flipped vertically so
/// that millimeter `+y` (up) becomes pixel `+y` (down).
///
/// Overlays that need to line up with the frame drawing (for example a
/// rider-fit marker) should map their own millimeter points through
/// [`FrameProjector::to_view`] rather than recomputing the transform.
#[derive(Clone, Debug)]
pub struct FrameProjector {
    frame: ProjectedFrame,
    output: OutputBox,
    scale: f64,
    canvas: Size,
    world_to_view: Affine,
    view_to_world: Affine,
}

impl FrameProjector {
    /// Projects `geometry` and fits it into `output`.
    ///
    /// Pass `wheels` to reserve room for the wheels around both axles.
    #[must_use]
    pub fn new(geometry: &FrameGeometry, wheels: Option<WheelSpec>, output: OutputBox) -> Self {
        Self::from_frame(ProjectedFrame::new(geometry, wheels), output)
    }

    /// Fits an already projected frame into `output`.
    #[must_use]
    pub fn from_frame(frame: ProjectedFrame, output: OutputBox) -> Self {
        let output = output.usable();
        let bounds = frame.bounds;
        let scale = fit_scale(bounds.size(), output);
        let content = bounds.size() * scale;
        let canvas = Size::new(
            output.width.unwrap_or(content.width + 2.0 * MARGIN_PX),
            output.height.unwrap_or(content.height + 2.0 * MARGIN_PX),
        );

        let offset = Vec2::new(
            (canvas.width - content.width - 2.0 * MARGIN_PX) / 2.0,
            (canvas.height - content.height - 2.0 * MARGIN_PX) / 2.0,
        );
        // mm -> px: shift the bbox's top-left corner (min x, max y) to the
        // margin, scale, and flip y.
        let origin = Vec2::new(MARGIN_PX, MARGIN_PX) + offset;
        let world_to_view = Affine::translate(origin)
            * Affine::scale_non_uniform(scale, -scale)
            * Affine::translate(Vec2::new(-bounds.x0, -bounds.y1));

        Self {
            frame,
            output,
            scale,
            canvas,
            world_to_view,
            view_to_world: world_to_view.inverse(),
        }
    }

    /// Pixels per millimeter.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Size of the pixel canvas the frame was fitted into.
    #[must_use]
    pub fn canvas_size(&self) -> Size {
        self.canvas
    }

    /// The output box the frame was fitted into, with unusable dimensions
    /// opened up.
    #[must_use]
    pub fn output(&self) -> OutputBox {
        self.output
    }

    /// The millimeter-space frame being projected.
    #[must_use]
    pub fn frame(&self) -> &ProjectedFrame {
        &self.frame
    }

    /// The millimeter to pixel transform.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.world_to_view
    }

    /// Converts a millimeter-space point into pixel coordinates.
    #[must_use]
    pub fn to_view(&self, mm: Point) -> Point {
        self.world_to_view * mm
    }

    /// Converts a pixel-space point back into millimeters.
    #[must_use]
    pub fn to_world(&self, px: Point) -> Point {
        self.view_to_world * px
    }

    /// Converts a millimeter length into pixels.
    #[must_use]
    pub fn length_to_view(&self, mm: f64) -> f64 {
        mm * self.scale
    }

    /// The six frame points in pixel coordinates.
    #[must_use]
    pub fn view_points(&self) -> FramePoints {
        self.frame.points.map(|p| self.to_view(p))
    }

    /// The fitted bounding box in pixel coordinates.
    #[must_use]
    pub fn view_bounds(&self) -> Rect {
        let b = self.frame.bounds;
        Rect::from_points(
            self.to_view(Point::new(b.x0, b.y0)),
            self.to_view(Point::new(b.x1, b.y1)),
        )
    }

    /// Snapshot of the projection state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> FrameProjectorDebugInfo {
        FrameProjectorDebugInfo {
            world_bounds: self.frame.bounds,
            view_bounds: self.view_bounds(),
            canvas: self.canvas,
            scale: self.scale,
            output: self.output,
        }
    }
}

/// Chooses the pixels-per-millimeter scale for content of `extent` mm.
///
/// Both dimensions given: the binding (smaller) ratio wins. One dimension:
/// that ratio. None: [`DEFAULT_SCALE`]. Unusable dimensions count as absent
/// (see [`OutputBox::usable`]). The result is never below [`MIN_SCALE`].
#[must_use]
pub fn fit_scale(extent: Size, output: OutputBox) -> f64 {
    let output = output.usable();
    let available = |px: f64| px - 2.0 * MARGIN_PX;
    let sx = output.width.map(|w| available(w) / extent.width);
    let sy = output.height.map(|h| available(h) / extent.height);
    let scale = match (sx, sy) {
        (Some(sx), Some(sy)) => sx.min(sy),
        (Some(s), None) | (None, Some(s)) => s,
        (None, None) => DEFAULT_SCALE,
    };
    scale.max(MIN_SCALE)
}

/// Debug snapshot of a [`FrameProjector`].
#[derive(Clone, Copy, Debug)]
pub struct FrameProjectorDebugInfo {
    /// Millimeter-space bounds being fitted.
    pub world_bounds: Rect,
    /// The same bounds in pixel coordinates.
    pub view_bounds: Rect,
    /// Pixel canvas size.
    pub canvas: Size,
    /// Pixels per millimeter.
    pub scale: f64,
    /// Requested output box.
    pub output: OutputBox,
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{DEFAULT_SCALE, FrameProjector, MARGIN_PX, MIN_SCALE, OutputBox, fit_scale};
    use crate::{FrameGeometry, WheelSpec};

    fn road_56() -> FrameGeometry {
        FrameGeometry {
            stack: 565.0,
            reach: 390.0,
            top_tube_effective: Some(560.0),
            seat_tube_length: Some(540.0),
            head_tube_length: Some(160.0),
            chainstay: 410.0,
            wheelbase: 995.0,
            bb_drop: 72.0,
            head_tube_angle: 73.0,
            seat_tube_angle: 73.5,
        }
    }

    #[test]
    fn world_view_roundtrip() {
        let vp = FrameProjector::new(&road_56(), Some(WheelSpec::default()), OutputBox::new(800.0, 500.0));
        for (_, mm) in vp.frame().points.iter() {
            let back = vp.to_world(vp.to_view(mm));
            assert!((back.x - mm.x).abs() < 1e-9);
            assert!((back.y - mm.y).abs() < 1e-9);
        }
    }

    #[test]
    fn world_view_roundtrip_across_geometries() {
        let outputs = [
            OutputBox::default(),
            OutputBox::with_width(320.0),
            OutputBox::new(1200.0, 300.0),
        ];
        for angle in (1..180).step_by(7).map(f64::from) {
            for (stack, reach, bb_drop) in [(480.0, 340.0, 55.0), (565.0, 390.0, 72.0), (660.0, 450.0, 85.0)] {
                let geometry = FrameGeometry {
                    stack,
                    reach,
                    bb_drop,
                    head_tube_angle: angle,
                    seat_tube_angle: 180.0 - angle,
                    ..road_56()
                };
                for output in outputs {
                    let vp = FrameProjector::new(&geometry, Some(WheelSpec::default()), output);
                    for (name, mm) in vp.frame().points.iter() {
                        let back = vp.to_world(vp.to_view(mm));
                        assert!(
                            (back - mm).hypot() < 1e-9,
                            "{name:?} at {angle} deg drifted to {back:?} from {mm:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn pixel_mapping_matches_margin_and_flip_formula() {
        let vp = FrameProjector::new(&road_56(), None, OutputBox::new(600.0, 600.0));
        let b = vp.frame().bounds;
        let s = vp.scale();
        let off_x = (600.0 - b.width() * s - 2.0 * MARGIN_PX) / 2.0;
        let off_y = (600.0 - b.height() * s - 2.0 * MARGIN_PX) / 2.0;

        let mm = vp.frame().points.head_top;
        let px = vp.to_view(mm);
        assert!((px.x - (MARGIN_PX + off_x + (mm.x - b.x0) * s)).abs() < 1e-9);
        assert!((px.y - (MARGIN_PX + off_y + (b.y1 - mm.y) * s)).abs() < 1e-9);
    }

    #[test]
    fn y_axis_is_flipped() {
        let vp = FrameProjector::new(&road_56(), None, OutputBox::default());
        let pts = vp.view_points();
        // Head top is above the bottom bracket in mm, so below it in y-down pixels.
        assert!(pts.head_top.y < pts.bottom_bracket.y);
        assert!(pts.front_axle.x > pts.rear_axle.x);
    }

    #[test]
    fn fitted_content_is_centered_and_inside_canvas() {
        let vp = FrameProjector::new(&road_56(), Some(WheelSpec::default()), OutputBox::new(400.0, 400.0));
        let view = vp.view_bounds();
        let canvas = vp.canvas_size();
        assert!(view.x0 >= MARGIN_PX - 1e-9);
        assert!(view.y0 >= MARGIN_PX - 1e-9);
        assert!(view.x1 <= canvas.width - MARGIN_PX + 1e-9);
        assert!(view.y1 <= canvas.height - MARGIN_PX + 1e-9);
        let center = view.center();
        assert!((center.x - 200.0).abs() < 1e-9);
        assert!((center.y - 200.0).abs() < 1e-9);
    }

    #[test]
    fn open_dimensions_are_derived_from_content() {
        let vp = FrameProjector::new(&road_56(), None, OutputBox::with_width(500.0));
        let canvas = vp.canvas_size();
        assert_eq!(canvas.width, 500.0);
        let expected_h = vp.frame().bounds.height() * vp.scale() + 2.0 * MARGIN_PX;
        assert!((canvas.height - expected_h).abs() < 1e-9);

        let vp = FrameProjector::new(&road_56(), None, OutputBox::default());
        assert_eq!(vp.scale(), DEFAULT_SCALE);
    }

    #[test]
    fn scale_is_monotonic_in_height() {
        let extent = kurbo::Size::new(1600.0, 900.0);
        // Width binds: growing height never lowers the scale and leaves it unchanged.
        let mut prev = fit_scale(extent, OutputBox::new(400.0, 300.0));
        for h in [400.0, 800.0, 1600.0, 3200.0] {
            let s = fit_scale(extent, OutputBox::new(400.0, h));
            assert!(s >= prev);
            prev = s;
        }

        // Height binds at first: growing it raises the scale until width binds.
        let tall = fit_scale(extent, OutputBox::new(4000.0, 200.0));
        let taller = fit_scale(extent, OutputBox::new(4000.0, 400.0));
        assert!(taller > tall);
    }

    #[test]
    fn tiny_outputs_clamp_to_min_scale() {
        let extent = kurbo::Size::new(1000.0, 1000.0);
        assert_eq!(fit_scale(extent, OutputBox::new(5.0, 5.0)), MIN_SCALE);
        assert_eq!(fit_scale(extent, OutputBox::with_height(15.0)), MIN_SCALE);
    }

    #[test]
    fn unusable_dimensions_count_as_open() {
        let extent = kurbo::Size::new(1000.0, 1000.0);
        assert_eq!(fit_scale(extent, OutputBox::with_height(0.0)), DEFAULT_SCALE);
        assert_eq!(fit_scale(extent, OutputBox::new(f64::NAN, -5.0)), DEFAULT_SCALE);

        let by_height = FrameProjector::new(&road_56(), None, OutputBox::with_height(400.0));
        for bad in [0.0, -100.0, f64::NAN, f64::INFINITY] {
            let vp = FrameProjector::new(&road_56(), None, OutputBox::new(bad, 400.0));
            assert_eq!(vp.output(), OutputBox::with_height(400.0));
            assert_eq!(vp.scale(), by_height.scale());
            assert_eq!(vp.canvas_size(), by_height.canvas_size());
            assert_eq!(vp.transform(), by_height.transform());
        }
    }

    #[test]
    fn overlay_points_share_the_frame_transform() {
        let vp = FrameProjector::new(&road_56(), None, OutputBox::new(640.0, 480.0));
        // A marker placed exactly at head top must land on the projected head top.
        let marker = vp.to_view(Point::new(390.0, 565.0 - 72.0));
        let head_top = vp.view_points().head_top;
        assert!((marker - head_top).hypot() < 1e-9);
    }
}
