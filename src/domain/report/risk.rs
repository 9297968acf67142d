//! Risk scoring - weighted count of high-concern answers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::catalog::{Question, Weight};

/// Lowercased answers that count towards the risk score.
pub const HIGH_CONCERN_ANSWERS: &[&str] = &[
    "yes",
    "severe",
    "more than 3 days",
    "above 103°f",
    "7-9 (severe)",
    "10 (unbearable)",
];

/// Scores at or above this are `High`.
pub const HIGH_THRESHOLD: u32 = 15;

/// Scores at or above this (and below `HIGH_THRESHOLD`) are `Moderate`.
pub const MODERATE_THRESHOLD: u32 = 8;

/// Severity band derived from the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl Severity {
    pub fn from_score(score: u32) -> Self {
        if score >= HIGH_THRESHOLD {
            Severity::High
        } else if score >= MODERATE_THRESHOLD {
            Severity::Moderate
        } else {
            Severity::Low
        }
    }

    /// Returns the display label for this severity.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Moderate => "Moderate",
            Severity::High => "High",
        }
    }

    /// Action the patient is advised to take.
    pub fn urgency(&self) -> &'static str {
        match self {
            Severity::High => "Seek immediate medical attention",
            Severity::Moderate => "Consult a doctor within 24 hours",
            Severity::Low => "Monitor symptoms, see doctor if worsens",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scorer for questionnaire answers.
pub struct RiskScorer;

impl RiskScorer {
    /// Returns true if `answer` (any case) is a high-concern value.
    pub fn is_high_concern(answer: &str) -> bool {
        let lowered = answer.to_lowercase();
        HIGH_CONCERN_ANSWERS.contains(&lowered.as_str())
    }

    /// Points contributed by one answered question.
    pub fn points_for(weight: Weight, answer: &str) -> u32 {
        if Self::is_high_concern(answer) {
            weight.points()
        } else {
            0
        }
    }

    /// Sums points over `(question, answer)` pairs. Order does not matter.
    pub fn score<'a, I>(answered: I) -> u32
    where
        I: IntoIterator<Item = (&'a Question, &'a str)>,
    {
        answered
            .into_iter()
            .map(|(question, answer)| Self::points_for(question.weight, answer))
            .sum()
    }
}
