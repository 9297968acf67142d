//! Category enum representing the supported symptom groupings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A symptom grouping with its own question template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Stomach,
    Headache,
    Fever,
    Cough,
}

impl Category {
    /// Selection priority: the first category whose keyword matches wins.
    pub const PRIORITY: [Category; 4] = [
        Category::Stomach,
        Category::Headache,
        Category::Fever,
        Category::Cough,
    ];

    /// Returns all categories in priority order.
    pub fn all() -> &'static [Category; 4] {
        &Self::PRIORITY
    }

    /// Returns the lowercase keywords that route free text to this category.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::Stomach => &["stomach", "belly", "abdomen", "tummy", "digestive", "gastric"],
            Category::Headache => &["head", "headache", "migraine", "temple"],
            Category::Fever => &["fever", "temperature", "hot", "feverish"],
            Category::Cough => &["cough", "coughing", "throat", "respiratory"],
        }
    }

    /// Returns the wire name (`stomach`, `headache`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Stomach => "stomach",
            Category::Headache => "headache",
            Category::Fever => "fever",
            Category::Cough => "cough",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_starts_with_stomach() {
        assert_eq!(Category::all()[0], Category::Stomach);
        assert_eq!(Category::all().len(), 4);
    }

    #[test]
    fn keywords_are_lowercase() {
        for category in Category::all() {
            for keyword in category.keywords() {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }

    #[test]
    fn every_category_matches_its_own_name() {
        for category in Category::all() {
            assert!(category
                .keywords()
                .iter()
                .any(|k| category.as_str().contains(k)));
        }
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(serde_json::to_string(&Category::Headache).unwrap(), "\"headache\"");
        let parsed: Category = serde_json::from_str("\"cough\"").unwrap();
        assert_eq!(parsed, Category::Cough);
    }

    #[test]
    fn display_uses_wire_name() {
        assert_eq!(Category::Fever.to_string(), "fever");
    }
}
