//! Question value object and its classifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::QuestionId;

/// Options presented for a boolean question that declares none.
pub const IMPLIED_YES_NO: [&str; 2] = ["Yes", "No"];

/// How a question expects to be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionKind {
    #[serde(rename = "yes_no")]
    Boolean,
    #[serde(rename = "choice")]
    SingleChoice,
    #[serde(rename = "scale")]
    Scale,
}

/// Importance of a question when scoring risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    #[default]
    Low,
    Medium,
    High,
}

impl Weight {
    /// Points contributed by a concerning answer.
    pub fn points(&self) -> u32 {
        match self {
            Weight::Low => 1,
            Weight::Medium => 2,
            Weight::High => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Weight::Low => "low",
            Weight::Medium => "medium",
            Weight::High => "high",
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single catalog question.
///
/// Immutable once defined; sessions copy questions into their working list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,

    /// Prompt shown to the user.
    #[serde(rename = "question")]
    pub prompt: String,

    #[serde(rename = "type")]
    pub kind: QuestionKind,

    /// Selectable labels; empty for boolean questions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,

    #[serde(default)]
    pub weight: Weight,
}

impl Question {
    /// A yes/no question.
    pub fn yes_no(id: QuestionId, prompt: impl Into<String>, weight: Weight) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            kind: QuestionKind::Boolean,
            options: Vec::new(),
            weight,
        }
    }

    /// A single-choice question over the given labels.
    pub fn choice(id: QuestionId, prompt: impl Into<String>, options: &[&str], weight: Weight) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            kind: QuestionKind::SingleChoice,
            options: options.iter().map(|o| o.to_string()).collect(),
            weight,
        }
    }

    /// A severity-scale question over the given bands.
    pub fn scale(id: QuestionId, prompt: impl Into<String>, options: &[&str], weight: Weight) -> Self {
        Self {
            kind: QuestionKind::Scale,
            ..Self::choice(id, prompt, options, weight)
        }
    }

    /// Options to present, falling back to `Yes`/`No` when none are declared.
    pub fn presented_options(&self) -> Vec<String> {
        if self.options.is_empty() {
            IMPLIED_YES_NO.iter().map(|o| o.to_string()).collect()
        } else {
            self.options.clone()
        }
    }
}
