// Copyright 2025 the VeloGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! VeloGraph Geometry: bicycle frame measurements to drawable points.
//!
//! This crate turns the handful of numbers a geometry chart lists for one
//! frame size (stack, reach, tube lengths and angles, chainstay, wheelbase,
//! bottom-bracket drop) into six labeled 2D points, and fits those points
//! into a pixel canvas. It focuses on:
//! - The millimeter-space frame model ([`FrameGeometry`], [`FramePoints`]).
//! - Bounding boxes with optional wheel clearance ([`ProjectedFrame`], [`WheelSpec`]).
//! - A fit-to-box, y-flipping pixel transform ([`FrameProjector`]).
//!
//! It does **not** draw anything. Renderers and overlays are expected to map
//! their own millimeter points through the same [`FrameProjector`] so that
//! everything stays pixel-aligned with the frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use velograph_geometry::{FrameGeometry, FrameProjector, OutputBox, WheelSpec};
//!
//! let geometry = FrameGeometry {
//!     stack: 580.0,
//!     reach: 380.0,
//!     top_tube_effective: Some(550.0),
//!     seat_tube_length: None, // defaults to 500 mm
//!     head_tube_length: None, // defaults to 150 mm
//!     chainstay: 430.0,
//!     wheelbase: 1020.0,
//!     bb_drop: 70.0,
//!     head_tube_angle: 71.0,
//!     seat_tube_angle: 73.5,
//! };
//!
//! let projector = FrameProjector::new(
//!     &geometry,
//!     Some(WheelSpec::default()),
//!     OutputBox::new(800.0, 500.0),
//! );
//! let px = projector.view_points();
//! assert!(px.head_top.y < px.bottom_bracket.y); // pixel y grows downward
//! ```
//!
//! ## Coordinate conventions
//!
//! - Millimeter space: `+x` points toward the front wheel, `+y` up, the axle
//!   line is `y = 0` and the bottom bracket sits at `(0, -bb_drop)`.
//! - Pixel space: origin at the canvas top-left, `+y` down.
//! - Angles are degrees from horizontal. Angles outside `(0, 180)` are not
//!   rejected; they produce a degenerate but finite drawing.
//!
//! This crate is `no_std`.

#![no_std]

mod frame;
mod points;
mod projector;
mod wheel;

pub use frame::{DEFAULT_HEAD_TUBE_MM, DEFAULT_SEAT_TUBE_MM, FrameGeometry};
pub use points::{FramePoint, FramePoints, MIN_BOUNDS_EXTENT_MM, ProjectedFrame};
pub use projector::{
    DEFAULT_SCALE, FrameProjector, FrameProjectorDebugInfo, MARGIN_PX, MIN_SCALE, OutputBox,
    fit_scale,
};
pub use wheel::{DEFAULT_RIM_DIAMETER_MM, DEFAULT_TIRE_WIDTH_MM, WheelSpec, rim_diameter_for_label};

pub use kurbo;
