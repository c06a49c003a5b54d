// Copyright 2025 the VeloGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use velograph_catalog::{GeometryId, GeometrySpec};
use velograph_compare::Keyed;

/// A geometry the user picked for side-by-side comparison.
///
/// The geometry is a snapshot taken when the item was added, so the
/// comparison view works without refetching.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonItem {
    /// Display title, such as `"Kross Esker 6.0 (M)"`.
    pub title: String,
    /// Geometry snapshot.
    pub geometry: GeometrySpec,
}

impl ComparisonItem {
    /// Wraps `geometry`, titling it with [`GeometrySpec::title`].
    #[must_use]
    pub fn new(geometry: GeometrySpec) -> Self {
        Self {
            title: geometry.title(),
            geometry,
        }
    }

    /// Identifier of the referenced geometry.
    #[must_use]
    pub fn id(&self) -> GeometryId {
        self.geometry.id
    }
}

impl Keyed for ComparisonItem {
    type Key = GeometryId;

    fn key(&self) -> GeometryId {
        self.geometry.id
    }
}

/// Decodes a persisted comparison list, skipping entries that do not have
/// the expected shape.
pub(crate) fn decode_items(raw: &str) -> Vec<ComparisonItem> {
    let entries = match serde_json::from_str::<Vec<Value>>(raw) {
        Ok(entries) => entries,
        Err(err) => {
            debug!(error = %err, "discarding persisted comparison list");
            return Vec::new();
        }
    };
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(item) => Some(item),
            Err(err) => {
                debug!(index, error = %err, "dropping malformed comparison entry");
                None
            }
        })
        .collect()
}
