//! Recorded answers.

use serde::{Serialize, Serializer};
use std::fmt;

/// Text recorded for a skipped question.
pub const SKIPPED: &str = "Skipped";

/// Text reported for a question with no recorded answer.
pub const NOT_ANSWERED: &str = "Not answered";

/// An answer recorded against a question id.
///
/// Answer text is opaque: it is never checked against the question's options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Given(String),
    Skipped,
}

impl Answer {
    pub fn as_str(&self) -> &str {
        match self {
            Answer::Given(text) => text,
            Answer::Skipped => SKIPPED,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Answer::Skipped)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Answer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skipped_renders_sentinel() {
        assert_eq!(Answer::Skipped.as_str(), "Skipped");
        assert!(Answer::Skipped.is_skipped());
    }

    #[test]
    fn given_text_that_spells_the_sentinel_is_not_skipped() {
        let answer = Answer::Given("Skipped".to_string());
        assert!(!answer.is_skipped());
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&Answer::Given("Yes".to_string())).unwrap();
        assert_eq!(json, "\"Yes\"");
        assert_eq!(serde_json::to_string(&Answer::Skipped).unwrap(), "\"Skipped\"");
    }
}
