// Copyright 2025 the VeloGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! VeloGraph Frame SVG: side-view drawings of bicycle frames.
//!
//! [`render_frame_svg`] takes a [`FrameProjector`](velograph_geometry::FrameProjector)
//! and emits a small, self-contained SVG document with:
//! - Wheels: a tire ring and a rim ring around each axle.
//! - Tubes: chainstay, seat tube, seat stay, down tube, top tube, head tube
//!   and fork, as round-capped lines of `max(25 mm * scale, 1.5 px)` width.
//! - Joints: filled dots where tubes meet.
//! - An optional stack/reach fit marker.
//!
//! Layers are chosen with [`FrameLayers`]; the frame color usually comes from
//! listing text via [`normalize_color`].
//!
//! The output is meant for previews and comparisons, not for manufacturing:
//! tube diameters are nominal and the top and down tubes attach at
//! [`JointAdjustments`] fractions rather than at measured positions.
//!
//! ```
//! use velograph_frame_svg::{FrameStyle, normalize_color, render_frame_svg};
//! use velograph_geometry::{FrameGeometry, FrameProjector, OutputBox, WheelSpec};
//!
//! let geometry = FrameGeometry {
//!     stack: 560.0,
//!     reach: 385.0,
//!     top_tube_effective: None,
//!     seat_tube_length: Some(520.0),
//!     head_tube_length: None,
//!     chainstay: 415.0,
//!     wheelbase: 1000.0,
//!     bb_drop: 72.0,
//!     head_tube_angle: 72.5,
//!     seat_tube_angle: 73.5,
//! };
//! let projector =
//!     FrameProjector::new(&geometry, Some(WheelSpec::default()), OutputBox::with_width(600.0));
//! let style = FrameStyle {
//!     frame_color: normalize_color(Some("gloss red")),
//!     ..FrameStyle::default()
//! };
//! let svg = render_frame_svg(&projector, &style);
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains("stroke=\"#ef4444\""));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod color;
mod render;

pub use color::{DEFAULT_FRAME_COLOR, RIM_COLOR, TIRE_COLOR, normalize_color};
pub use render::{
    FIT_MARKER_COLOR, FRAME_TUBE_WIDTH_MM, FitTarget, FrameLayers, FrameStyle, JointAdjustments,
    Junctions, MIN_TUBE_WIDTH_PX, RIM_DEPTH_MM, fit_marker_point, render_frame_svg,
};
