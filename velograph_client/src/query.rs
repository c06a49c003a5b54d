// Copyright 2025 the VeloGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use velograph_catalog::{Category, MaterialGroup};

use crate::error::ClientError;

/// Page size the backend uses when none is given.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest page size the backend accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Parameters shared by the search routes.
///
/// Unset fields are left out of the query string.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchQuery {
    /// Brand or model text.
    pub q: Option<String>,
    /// Category filter.
    pub category: Option<Category>,
    /// Material filter.
    pub material: Option<MaterialGroup>,
    /// Target stack in millimeters.
    pub stack: Option<f64>,
    /// Target reach in millimeters.
    pub reach: Option<f64>,
    /// Lower stack bound.
    pub stack_min: Option<f64>,
    /// Upper stack bound.
    pub stack_max: Option<f64>,
    /// Lower reach bound.
    pub reach_min: Option<f64>,
    /// Upper reach bound.
    pub reach_max: Option<f64>,
    /// One-based page number.
    pub page: u32,
    /// Items per page, `1..=100`.
    pub size: u32,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            q: None,
            category: None,
            material: None,
            stack: None,
            reach: None,
            stack_min: None,
            stack_max: None,
            reach_min: None,
            reach_max: None,
            page: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SearchQuery {
    /// A keyword query.
    #[must_use]
    pub fn keyword(q: impl Into<String>) -> Self {
        Self {
            q: Some(q.into()),
            ..Self::default()
        }
    }

    /// A nearest-geometry query.
    #[must_use]
    pub fn target(stack: f64, reach: f64) -> Self {
        Self {
            stack: Some(stack),
            reach: Some(reach),
            ..Self::default()
        }
    }

    /// Sets the page.
    #[must_use]
    pub fn with_page(mut self, page: u32, size: u32) -> Self {
        self.page = page;
        self.size = size;
        self
    }

    /// Sets the filters.
    #[must_use]
    pub fn with_filters(
        mut self,
        category: Option<Category>,
        material: Option<MaterialGroup>,
    ) -> Self {
        self.category = category;
        self.material = material;
        self
    }

    /// Checks paging bounds and that every number is finite.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.page == 0 {
            return Err(ClientError::InvalidQuery("page must be at least 1"));
        }
        if !(1..=MAX_PAGE_SIZE).contains(&self.size) {
            return Err(ClientError::InvalidQuery("size must be between 1 and 100"));
        }
        let numbers = [
            self.stack,
            self.reach,
            self.stack_min,
            self.stack_max,
            self.reach_min,
            self.reach_max,
        ];
        if numbers.iter().flatten().any(|v| !v.is_finite()) {
            return Err(ClientError::InvalidQuery("numbers must be finite"));
        }
        Ok(())
    }

    /// Query-string pairs in a stable order.
    ///
    /// Target stack and reach are rounded to whole millimeters since the
    /// backend takes them as integers.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(q) = self.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            pairs.push(("q", q.to_owned()));
        }
        if let Some(category) = self.category {
            pairs.push(("category", category.as_str().to_owned()));
        }
        if let Some(material) = self.material {
            pairs.push(("material", material.as_str().to_owned()));
        }
        for (name, value) in [("stack", self.stack), ("reach", self.reach)] {
            if let Some(v) = value {
                pairs.push((name, format!("{v:.0}")));
            }
        }
        for (name, value) in [
            ("stack_min", self.stack_min),
            ("stack_max", self.stack_max),
            ("reach_min", self.reach_min),
            ("reach_max", self.reach_max),
        ] {
            if let Some(v) = value {
                pairs.push((name, v.to_string()));
            }
        }
        pairs.push(("page", self.page.to_string()));
        pairs.push(("size", self.size.to_string()));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_only_send_paging() {
        let pairs = SearchQuery::default().to_pairs();
        assert_eq!(
            pairs,
            vec![("page", "1".to_owned()), ("size", "10".to_owned())]
        );
    }

    #[test]
    fn pairs_are_ordered_and_rounded() {
        let query = SearchQuery {
            stack_min: Some(550.5),
            ..SearchQuery::target(579.6, 380.2)
                .with_filters(Some(Category::Gravel), Some(MaterialGroup::Carbon))
        };
        let names: Vec<_> = query.to_pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            names,
            ["category", "material", "stack", "reach", "stack_min", "page", "size"]
        );
        let pairs = query.to_pairs();
        assert_eq!(pairs[2].1, "580");
        assert_eq!(pairs[3].1, "380");
        assert_eq!(pairs[4].1, "550.5");
    }

    #[test]
    fn blank_keyword_is_omitted() {
        assert_eq!(SearchQuery::keyword("  ").to_pairs().len(), 2);
        assert_eq!(SearchQuery::keyword(" esker ").to_pairs()[0].1, "esker");
    }

    #[test]
    fn validation() {
        assert!(SearchQuery::default().validate().is_ok());
        assert!(SearchQuery::default().with_page(0, 10).validate().is_err());
        assert!(SearchQuery::default().with_page(1, 0).validate().is_err());
        assert!(SearchQuery::default().with_page(1, 101).validate().is_err());
        assert!(SearchQuery::default().with_page(3, 100).validate().is_ok());
        assert!(SearchQuery::target(f64::NAN, 380.0).validate().is_err());
    }
}
