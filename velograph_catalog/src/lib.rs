// Copyright 2025 the VeloGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! VeloGraph Catalog: the data model shared by the client, the state store
//! and the command line.
//!
//! The types mirror the JSON the catalog backend serves:
//!
//! - [`FrameDefinition`]: a frame model (brand, model, category, material)
//!   with one [`GeometrySpec`] per size.
//! - [`GeometrySpec`]: the measurements of one size, convertible into the
//!   projector's [`FrameGeometry`](velograph_geometry::FrameGeometry).
//! - [`BikeProduct`] and [`BuildKit`]: complete bikes sold in a size.
//! - [`SearchPage`]: `{ total, items }` search responses.
//!
//! Free-text categories and materials are normalized with
//! [`Category::classify_all`] and [`MaterialGroup::classify`], and
//! [`FrameDefinition::variant_groups`] expands products into
//! size x build kit x color variants.
//!
//! ```
//! use velograph_catalog::{rank_by_target, GeometrySpec};
//!
//! let json = r#"[
//!     {"id": 1, "size_label": "S", "stack_mm": 560, "reach_mm": 370,
//!      "head_tube_angle": 71, "seat_tube_angle": 74,
//!      "chainstay_length_mm": 425, "wheelbase_mm": 1010, "bb_drop_mm": 70},
//!     {"id": 2, "size_label": "M", "stack_mm": 580, "reach_mm": 380,
//!      "head_tube_angle": 71.5, "seat_tube_angle": 73.5,
//!      "chainstay_length_mm": 425, "wheelbase_mm": 1030, "bb_drop_mm": 70}
//! ]"#;
//! let mut specs: Vec<GeometrySpec> = serde_json::from_str(json).unwrap();
//! rank_by_target(&mut specs, 585.0, 382.0);
//! assert_eq!(specs[0].size_label, "M");
//! ```

mod classify;
mod model;
mod variants;

pub use classify::{Category, MaterialGroup, UnknownVariant};
pub use model::{
    BikeProduct, BuildKit, DefinitionId, DefinitionSummary, FrameDefinition, GeometryId,
    GeometrySpec, NewFrameDefinition, SearchPage, rank_by_target,
};
pub use variants::{ProductVariant, VariantGroup};
