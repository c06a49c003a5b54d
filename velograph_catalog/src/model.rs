// Copyright 2025 the VeloGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::{Deserialize, Serialize};
use velograph_geometry::{FrameGeometry, WheelSpec};

use crate::classify::{Category, MaterialGroup};

/// Identifier of a [`GeometrySpec`].
pub type GeometryId = u64;

/// Identifier of a [`FrameDefinition`].
pub type DefinitionId = u64;

/// Geometry of one size of one frame, as returned by the backend.
///
/// Lengths are millimeters and angles degrees. The tube lengths the
/// retailers sometimes omit are optional; see
/// [`GeometrySpec::frame_geometry`] for how they are defaulted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeometrySpec {
    /// Backend identifier.
    pub id: GeometryId,
    /// Owning frame definition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition_id: Option<DefinitionId>,
    /// Size label as printed by the manufacturer (`"54"`, `"L"`, `"S3"`).
    pub size_label: String,
    /// Stack.
    pub stack_mm: f64,
    /// Reach.
    pub reach_mm: f64,
    /// Effective top tube length.
    #[serde(default)]
    pub top_tube_effective_mm: Option<f64>,
    /// Seat tube length.
    #[serde(default)]
    pub seat_tube_length_mm: Option<f64>,
    /// Head tube length.
    #[serde(default)]
    pub head_tube_length_mm: Option<f64>,
    /// Head tube angle.
    pub head_tube_angle: f64,
    /// Seat tube angle.
    pub seat_tube_angle: f64,
    /// Chainstay length.
    pub chainstay_length_mm: f64,
    /// Wheelbase.
    pub wheelbase_mm: f64,
    /// Bottom bracket drop.
    pub bb_drop_mm: f64,
    /// Fork offset (rake).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fork_offset_mm: Option<f64>,
    /// Trail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trail_mm: Option<f64>,
    /// Standover height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standover_height_mm: Option<f64>,
    /// Owning definition, embedded by geometry search results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<DefinitionSummary>,
    /// Complete bikes sold in this size.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<BikeProduct>,
}

impl GeometrySpec {
    /// Projection input for this size.
    #[must_use]
    pub fn frame_geometry(&self) -> FrameGeometry {
        FrameGeometry {
            stack: self.stack_mm,
            reach: self.reach_mm,
            top_tube_effective: self.top_tube_effective_mm,
            seat_tube_length: self.seat_tube_length_mm,
            head_tube_length: self.head_tube_length_mm,
            chainstay: self.chainstay_length_mm,
            wheelbase: self.wheelbase_mm,
            bb_drop: self.bb_drop_mm,
            head_tube_angle: self.head_tube_angle,
            seat_tube_angle: self.seat_tube_angle,
        }
    }

    /// Wheels of the first product that lists a wheel size, or the defaults.
    #[must_use]
    pub fn wheel_spec(&self) -> WheelSpec {
        self.products
            .iter()
            .find(|p| p.wheel_size.is_some())
            .map(|p| WheelSpec::from_labels(p.wheel_size.as_deref(), p.max_tire_width.as_deref()))
            .unwrap_or_default()
    }

    /// Stack divided by reach, or `None` for a non-positive reach.
    #[must_use]
    pub fn stack_reach_ratio(&self) -> Option<f64> {
        self.frame_geometry().stack_reach_ratio()
    }

    /// Distance to a target in the stack/reach plane, in millimeters.
    #[must_use]
    pub fn distance_to(&self, stack_mm: f64, reach_mm: f64) -> f64 {
        (self.stack_mm - stack_mm).hypot(self.reach_mm - reach_mm)
    }

    /// A short human-readable title such as `"Kross Esker 6.0 (M)"`.
    #[must_use]
    pub fn title(&self) -> String {
        match &self.definition {
            Some(def) => format!("{} {} ({})", def.brand_name, def.model_name, self.size_label),
            None => format!("#{} ({})", self.id, self.size_label),
        }
    }
}

/// Sorts `specs` by distance to the target stack/reach, closest first.
///
/// This is the same ordering the backend applies to geometry searches.
pub fn rank_by_target(specs: &mut [GeometrySpec], stack_mm: f64, reach_mm: f64) {
    specs.sort_by(|a, b| {
        a.distance_to(stack_mm, reach_mm)
            .total_cmp(&b.distance_to(stack_mm, reach_mm))
    });
}

/// The parts of a [`FrameDefinition`] embedded in geometry search results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DefinitionSummary {
    /// Backend identifier.
    pub id: DefinitionId,
    /// Brand, such as `"Kross"`.
    pub brand_name: String,
    /// Model, such as `"Esker 6.0"`.
    pub model_name: String,
    /// Raw category string.
    #[serde(default)]
    pub category: Option<String>,
    /// Raw material string.
    #[serde(default)]
    pub material: Option<String>,
}

/// A frame model with one geometry per size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameDefinition {
    /// Backend identifier.
    pub id: DefinitionId,
    /// Brand.
    pub brand_name: String,
    /// Model.
    pub model_name: String,
    /// Raw category string.
    #[serde(default)]
    pub category: Option<String>,
    /// Raw material string.
    #[serde(default)]
    pub material: Option<String>,
    /// First model year, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_start: Option<i32>,
    /// Last model year, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_end: Option<i32>,
    /// Geometry of each size.
    #[serde(default)]
    pub geometries: Vec<GeometrySpec>,
}

impl FrameDefinition {
    /// Normalized categories of this definition.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        Category::classify_all(self.category.iter().map(String::as_str))
    }

    /// Normalized material group of this definition.
    #[must_use]
    pub fn material_group(&self) -> MaterialGroup {
        MaterialGroup::classify(self.material.as_deref())
    }

    /// The summary embedded into geometry rows.
    #[must_use]
    pub fn summary(&self) -> DefinitionSummary {
        DefinitionSummary {
            id: self.id,
            brand_name: self.brand_name.clone(),
            model_name: self.model_name.clone(),
            category: self.category.clone(),
            material: self.material.clone(),
        }
    }

    /// Looks up the geometry of one size by its label.
    #[must_use]
    pub fn size(&self, label: &str) -> Option<&GeometrySpec> {
        self.geometries
            .iter()
            .find(|g| g.size_label.eq_ignore_ascii_case(label))
    }
}

/// The component package a complete bike is sold with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuildKit {
    /// Backend identifier.
    pub id: u64,
    /// Build name, such as `"GRX 600"`.
    pub name: String,
    /// Groupset.
    #[serde(default)]
    pub groupset: Option<String>,
    /// Wheelset.
    #[serde(default)]
    pub wheelset: Option<String>,
    /// Handlebar and stem.
    #[serde(default)]
    pub cockpit: Option<String>,
    /// Tires.
    #[serde(default)]
    pub tires: Option<String>,
}

/// A complete bike: one frame size with one build kit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BikeProduct {
    /// Backend identifier.
    pub id: u64,
    /// Manufacturer SKU.
    pub sku: String,
    /// Color names or codes the product is offered in.
    #[serde(default)]
    pub colors: Vec<String>,
    /// Retailer page the data was scraped from.
    #[serde(default)]
    pub source_url: Option<String>,
    /// Build kit, when the backend embeds it.
    #[serde(default)]
    pub build_kit: Option<BuildKit>,
    /// Wheel size label (`"29"`, `"27.5"`, `"700"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wheel_size: Option<String>,
    /// Maximum tire width in millimeters, as listed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tire_width: Option<String>,
}

/// One page of search results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchPage<T> {
    /// Total number of matches across all pages.
    pub total: u64,
    /// Matches on this page.
    pub items: Vec<T>,
}

impl<T> Default for SearchPage<T> {
    fn default() -> Self {
        Self {
            total: 0,
            items: Vec::new(),
        }
    }
}

impl<T> SearchPage<T> {
    /// Returns `true` if this page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Body of a create or update request for a frame definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewFrameDefinition {
    /// Brand.
    pub brand_name: String,
    /// Model.
    pub model_name: String,
    /// Category.
    #[serde(default)]
    pub category: Option<String>,
    /// Material.
    #[serde(default)]
    pub material: Option<String>,
    /// First model year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_start: Option<i32>,
    /// Last model year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_end: Option<i32>,
}

impl From<&FrameDefinition> for NewFrameDefinition {
    fn from(def: &FrameDefinition) -> Self {
        Self {
            brand_name: def.brand_name.clone(),
            model_name: def.model_name.clone(),
            category: def.category.clone(),
            material: def.material.clone(),
            year_start: def.year_start,
            year_end: def.year_end,
        }
    }
}
