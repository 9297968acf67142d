//! Report generation for a questionnaire session.

use std::collections::BTreeMap;

use crate::domain::catalog::{Category, Weight};
use crate::domain::foundation::{QuestionId, SessionId, Timestamp};
use crate::domain::questionnaire::{Answer, QuestionnaireSession, NOT_ANSWERED};

use super::{Guidance, Medication, RiskScorer, Severity};

/// Fixed disclaimer appended to every report.
pub const DISCLAIMER: &str = "This assessment is for informational purposes only and does not replace professional medical advice. Please consult a healthcare provider for proper diagnosis and treatment.";

/// One working-list question with its recorded answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerDetail {
    pub question: String,
    /// Recorded answer, `Skipped`, or `Not answered`.
    pub answer: String,
    pub importance: Weight,
}

/// Risk-scored summary of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub session_id: SessionId,
    pub category: Category,
    pub description: String,
    pub generated_at: Timestamp,
    /// Recorded answers other than the skip sentinel.
    pub questions_answered: usize,
    pub total_questions: usize,
    pub severity: Severity,
    pub urgency: &'static str,
    pub risk_score: u32,
    pub recommendations: &'static [&'static str],
    pub medications: &'static [Medication],
    pub answers: BTreeMap<QuestionId, Answer>,
    pub details: Vec<AnswerDetail>,
    pub disclaimer: &'static str,
}

/// Builds reports from session state. Pure apart from the timestamp.
pub struct ReportGenerator;

impl ReportGenerator {
    /// Generates a report for `session` in its current state.
    ///
    /// Callable at any point in the questionnaire; unanswered questions
    /// score nothing.
    pub fn generate(session: &QuestionnaireSession) -> Report {
        let details: Vec<AnswerDetail> = session
            .questions()
            .iter()
            .map(|question| AnswerDetail {
                question: question.prompt.clone(),
                answer: session
                    .answer(&question.id)
                    .map_or(NOT_ANSWERED, Answer::as_str)
                    .to_string(),
                importance: question.weight,
            })
            .collect();

        let risk_score = RiskScorer::score(
            session
                .questions()
                .iter()
                .filter_map(|q| session.answer(&q.id).map(|a| (q, a.as_str()))),
        );
        let severity = Severity::from_score(risk_score);
        let guidance = Guidance::for_category(session.category());

        Report {
            session_id: *session.id(),
            category: session.category(),
            description: session.description().to_string(),
            generated_at: Timestamp::now(),
            questions_answered: session.answers().values().filter(|a| !a.is_skipped()).count(),
            total_questions: session.questions().len(),
            severity,
            urgency: severity.urgency(),
            risk_score,
            recommendations: guidance.recommendations,
            medications: guidance.medications,
            answers: session
                .answers()
                .iter()
                .map(|(id, answer)| (id.clone(), answer.clone()))
                .collect(),
            details,
            disclaimer: DISCLAIMER,
        }
    }
}
