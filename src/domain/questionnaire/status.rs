//! QuestionnaireStatus enum for tracking questionnaire lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Lifecycle status of a questionnaire session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuestionnaireStatus {
    #[default]
    Active,
    Completed,
}

impl StateMachine for QuestionnaireStatus {
    /// Valid transitions:
    /// - Active -> Completed
    fn can_transition_to(&self, target: &Self) -> bool {
        use QuestionnaireStatus::*;
        matches!((self, target), (Active, Completed))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            QuestionnaireStatus::Active => vec![QuestionnaireStatus::Completed],
            QuestionnaireStatus::Completed => vec![],
        }
    }
}

impl fmt::Display for QuestionnaireStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuestionnaireStatus::Active => "Active",
            QuestionnaireStatus::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_active() {
        assert_eq!(QuestionnaireStatus::default(), QuestionnaireStatus::Active);
        assert!(!QuestionnaireStatus::Active.is_terminal());
    }

    #[test]
    fn active_can_complete() {
        assert!(QuestionnaireStatus::Active.can_transition_to(&QuestionnaireStatus::Completed));
    }

    #[test]
    fn completed_is_terminal() {
        assert!(QuestionnaireStatus::Completed.is_terminal());
        assert!(QuestionnaireStatus::Completed
            .transition_to(QuestionnaireStatus::Active)
            .is_err());
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&QuestionnaireStatus::Completed).unwrap(),
            "\"completed\""
        );
    }
}
