// Copyright 2025 the VeloGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Normalized bike category used as a search filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Gravel.
    Gravel,
    /// Mountain.
    Mtb,
    /// Trekking.
    Trekking,
    /// Cyclocross.
    Cross,
    /// Road.
    Road,
    /// City.
    City,
    /// Kids and juniors.
    Kids,
    /// Touring.
    Touring,
    /// Women-specific.
    Women,
    /// Anything else.
    Other,
}

/// Substrings (lowercase, English and Polish retailer wording) per category.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Gravel, &["gravel"]),
    (Category::Mtb, &["mtb", "górsk"]),
    (Category::Trekking, &["trekking"]),
    (Category::Cross, &["cross"]),
    (Category::Road, &["szos", "road"]),
    (Category::City, &["miejsk", "city"]),
    (Category::Kids, &["dzieci", "kids", "junior"]),
    (Category::Touring, &["turyst"]),
    (Category::Women, &["damsk", "women"]),
];

impl Category {
    /// All categories.
    pub const ALL: [Self; 10] = [
        Self::Gravel,
        Self::Mtb,
        Self::Trekking,
        Self::Cross,
        Self::Road,
        Self::City,
        Self::Kids,
        Self::Touring,
        Self::Women,
        Self::Other,
    ];

    /// Query-parameter spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gravel => "gravel",
            Self::Mtb => "mtb",
            Self::Trekking => "trekking",
            Self::Cross => "cross",
            Self::Road => "road",
            Self::City => "city",
            Self::Kids => "kids",
            Self::Touring => "touring",
            Self::Women => "women",
            Self::Other => "other",
        }
    }

    /// Classifies free-text category strings.
    ///
    /// Every category whose keyword appears in any input is returned, sorted
    /// by name and without duplicates. No match yields `[Other]`.
    #[must_use]
    pub fn classify_all<'a, I>(raw: I) -> Vec<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut found = Vec::new();
        for text in raw {
            let lower = text.to_lowercase();
            for (category, keywords) in CATEGORY_KEYWORDS {
                if keywords.iter().any(|k| lower.contains(k)) && !found.contains(category) {
                    found.push(*category);
                }
            }
        }
        if found.is_empty() {
            found.push(Self::Other);
        }
        found.sort_by_key(|c| c.as_str());
        found
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(UnknownVariant("category"))
    }
}

/// Simplified frame material used as a search filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialGroup {
    /// Carbon fiber.
    Carbon,
    /// Aluminum alloy.
    Aluminum,
    /// Steel, including chromoly.
    Steel,
    /// Titanium.
    Titanium,
    /// Anything else or unknown.
    Other,
}

const MATERIAL_KEYWORDS: &[(MaterialGroup, &[&str])] = &[
    (MaterialGroup::Carbon, &["carbon", "węgiel", "węglow"]),
    (
        MaterialGroup::Aluminum,
        &["aluminum", "aluminium", "aluninium", "alu"],
    ),
    (MaterialGroup::Steel, &["steel", "stal", "crmo", "chromoly"]),
    (MaterialGroup::Titanium, &["titanium", "tytan"]),
];

impl MaterialGroup {
    /// All material groups.
    pub const ALL: [Self; 5] = [
        Self::Carbon,
        Self::Aluminum,
        Self::Steel,
        Self::Titanium,
        Self::Other,
    ];

    /// Query-parameter spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Carbon => "carbon",
            Self::Aluminum => "aluminum",
            Self::Steel => "steel",
            Self::Titanium => "titanium",
            Self::Other => "other",
        }
    }

    /// Groups a free-text material description; first matching group wins.
    #[must_use]
    pub fn classify(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Other;
        };
        let lower = raw.to_lowercase();
        MATERIAL_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
            .map_or(Self::Other, |(group, _)| *group)
    }
}

impl fmt::Display for MaterialGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaterialGroup {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(UnknownVariant("material"))
    }
}

/// Error returned when parsing an unknown [`Category`] or [`MaterialGroup`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownVariant(&'static str);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_all_handles_polish_and_english() {
        assert_eq!(Category::classify_all(Vec::<&str>::new()), vec![Category::Other]);
        assert_eq!(Category::classify_all(["Rowery Gravelowe"]), vec![Category::Gravel]);
        assert_eq!(Category::classify_all(["Górskie"]), vec![Category::Mtb]);
        assert_eq!(
            Category::classify_all(["MTB", "Górskie", "Szosowe", "Road"]),
            vec![Category::Mtb, Category::Road]
        );
        assert_eq!(
            Category::classify_all(["Some weird category"]),
            vec![Category::Other]
        );
    }

    #[test]
    fn classify_all_sorts_by_name() {
        let all = Category::classify_all([
            "gravel", "mtb", "trekking", "cross", "szos", "miejsk", "dzieci", "turyst", "damsk",
        ]);
        let names: Vec<_> = all.iter().map(|c| c.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert_eq!(all.len(), 9);
    }

    #[test]
    fn material_groups() {
        assert_eq!(MaterialGroup::classify(None), MaterialGroup::Other);
        assert_eq!(MaterialGroup::classify(Some("Carbon SL")), MaterialGroup::Carbon);
        assert_eq!(MaterialGroup::classify(Some("Włókno węglowe")), MaterialGroup::Carbon);
        assert_eq!(MaterialGroup::classify(Some("Aluminium 6061")), MaterialGroup::Aluminum);
        assert_eq!(MaterialGroup::classify(Some("CrMo")), MaterialGroup::Steel);
        assert_eq!(MaterialGroup::classify(Some("Tytan")), MaterialGroup::Titanium);
        assert_eq!(MaterialGroup::classify(Some("bamboo")), MaterialGroup::Other);
    }

    #[test]
    fn parse_roundtrips_display() {
        for c in Category::ALL {
            assert_eq!(c.to_string().parse(), Ok(c));
        }
        for m in MaterialGroup::ALL {
            assert_eq!(m.to_string().parse(), Ok(m));
        }
        assert!("scooter".parse::<Category>().is_err());
    }
}
