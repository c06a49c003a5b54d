// Copyright 2025 the VeloGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::{Deserialize, Serialize};

use crate::model::{BuildKit, FrameDefinition, GeometryId};

/// One orderable combination of frame size, build kit and color.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    /// Geometry the product is built on.
    pub geometry_id: GeometryId,
    /// Size label of that geometry.
    pub size_label: String,
    /// Product identifier.
    pub product_id: u64,
    /// Product SKU.
    pub sku: String,
    /// Color, or `None` if the product lists none.
    pub color: Option<String>,
}

/// Variants sharing one build kit.
///
/// Products without a build kit (framesets) share the group whose
/// `build_kit` is `None`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariantGroup {
    /// The shared build kit.
    pub build_kit: Option<BuildKit>,
    /// Variants in first-seen order.
    pub variants: Vec<ProductVariant>,
}

impl VariantGroup {
    /// Distinct size labels in this group, in first-seen order.
    #[must_use]
    pub fn sizes(&self) -> Vec<&str> {
        let mut sizes: Vec<&str> = Vec::new();
        for v in &self.variants {
            if !sizes.contains(&v.size_label.as_str()) {
                sizes.push(&v.size_label);
            }
        }
        sizes
    }
}

impl FrameDefinition {
    /// Groups the products of every size by build kit and expands each
    /// product into one variant per color.
    ///
    /// Groups and variants keep the order in which they first appear when
    /// walking sizes, then products, then colors.
    #[must_use]
    pub fn variant_groups(&self) -> Vec<VariantGroup> {
        let mut groups: Vec<VariantGroup> = Vec::new();
        for geometry in &self.geometries {
            for product in &geometry.products {
                let kit_id = product.build_kit.as_ref().map(|k| k.id);
                let idx = match groups
                    .iter()
                    .position(|g| g.build_kit.as_ref().map(|k| k.id) == kit_id)
                {
                    Some(idx) => idx,
                    None => {
                        groups.push(VariantGroup {
                            build_kit: product.build_kit.clone(),
                            variants: Vec::new(),
                        });
                        groups.len() - 1
                    }
                };
                let variant = |color: Option<&String>| ProductVariant {
                    geometry_id: geometry.id,
                    size_label: geometry.size_label.clone(),
                    product_id: product.id,
                    sku: product.sku.clone(),
                    color: color.cloned(),
                };
                let group = &mut groups[idx].variants;
                if product.colors.is_empty() {
                    group.push(variant(None));
                } else {
                    group.extend(product.colors.iter().map(Some).map(variant));
                }
            }
        }
        groups
    }
}
