// Copyright 2025 the VeloGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Color theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light.
    #[default]
    Light,
    /// Dark.
    Dark,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Persisted spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Interface language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Polish.
    Pl,
}

impl Language {
    /// Persisted spelling (ISO 639-1).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Pl => "pl",
        }
    }
}

/// Error returned when parsing an unknown [`Theme`] or [`Language`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} {value:?}")]
pub struct UnknownPreference {
    kind: &'static str,
    value: String,
}

impl FromStr for Theme {
    type Err = UnknownPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(UnknownPreference {
                kind: "theme",
                value: s.to_owned(),
            }),
        }
    }
}

impl FromStr for Language {
    type Err = UnknownPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "pl" => Ok(Self::Pl),
            _ => Err(UnknownPreference {
                kind: "language",
                value: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The search form exactly as the user left it.
///
/// Fields hold raw text so half-typed input survives a restart; use the
/// accessors to read them as numbers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchForm {
    /// Free-text query.
    pub q: String,
    /// Category filter.
    pub category: String,
    /// Material filter.
    pub material: String,
    /// Target stack.
    pub stack: String,
    /// Target reach.
    pub reach: String,
    /// Lower stack bound.
    pub stack_min: String,
    /// Upper stack bound.
    pub stack_max: String,
    /// Lower reach bound.
    pub reach_min: String,
    /// Upper reach bound.
    pub reach_max: String,
}

impl SearchForm {
    /// Target stack, if the field holds a finite number.
    #[must_use]
    pub fn stack_mm(&self) -> Option<f64> {
        parse_number(&self.stack)
    }

    /// Target reach, if the field holds a finite number.
    #[must_use]
    pub fn reach_mm(&self) -> Option<f64> {
        parse_number(&self.reach)
    }

    /// `(min, max)` stack bounds.
    #[must_use]
    pub fn stack_range(&self) -> (Option<f64>, Option<f64>) {
        (parse_number(&self.stack_min), parse_number(&self.stack_max))
    }

    /// `(min, max)` reach bounds.
    #[must_use]
    pub fn reach_range(&self) -> (Option<f64>, Option<f64>) {
        (parse_number(&self.reach_min), parse_number(&self.reach_max))
    }

    /// Trimmed text field, or `None` if blank.
    #[must_use]
    pub fn text(field: &str) -> Option<&str> {
        let t = field.trim();
        (!t.is_empty()).then_some(t)
    }

    /// Returns `true` if every field is blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        [
            &self.q,
            &self.category,
            &self.material,
            &self.stack,
            &self.reach,
            &self.stack_min,
            &self.stack_max,
            &self.reach_min,
            &self.reach_max,
        ]
        .iter()
        .all(|f| f.trim().is_empty())
    }
}

/// Parses a form number; blanks, garbage and non-finite values are `None`.
///
/// A decimal comma is accepted.
#[must_use]
pub fn parse_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}
