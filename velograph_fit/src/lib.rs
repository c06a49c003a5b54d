// Copyright 2025 the VeloGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! VeloGraph Fit: proportion-based bike fit estimates.
//!
//! Given a rider's inseam, torso and arm length (centimeters) and a
//! [`RidingStyle`], this crate computes:
//! - Three saddle height candidates ([`SaddleHeights`]).
//! - A cockpit reach estimate.
//! - A [`Verdict`] on a frame's stack/reach ratio against the style's
//!   [`RatioBand`].
//!
//! Any measurement may be missing; estimates that depend on it come back as
//! `None`.
//!
//! ```rust
//! use velograph_fit::{RiderProfile, RidingStyle, Verdict};
//!
//! let rider = RiderProfile {
//!     inseam_cm: Some(82.0),
//!     torso_cm: Some(60.0),
//!     arm_cm: Some(60.0),
//!     style: RidingStyle::Balanced,
//! };
//! let report = rider.report(Some(580.0), Some(380.0));
//! assert!((report.cockpit_reach_cm.unwrap() - 62.0).abs() < 1e-9);
//! assert_eq!(report.frame.verdict, Some(Verdict::WithinTarget));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod evaluate;
mod style;

pub use evaluate::{
    FitReport, FrameVerdict, HAMLEY_FACTOR, LEMOND_FACTOR, MIN_REACH_MM, RiderProfile,
    SIMPLE_FACTOR, SaddleHeights, Verdict, cockpit_reach_cm, evaluate_frame, saddle_heights,
};
pub use style::{Bound, RatioBand, RidingStyle, UnknownStyle};
