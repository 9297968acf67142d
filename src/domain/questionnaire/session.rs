//! Questionnaire session aggregate.
//!
//! A session walks one working list of questions copied from a template.
//! The list grows when an answer matches a follow-up trigger; new questions
//! are always inserted directly after the cursor, so entries already visited
//! never move.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::catalog::{Category, Question, Template, TemplateCatalog};
use crate::domain::foundation::{QuestionId, SessionId, StateMachine};

use super::{Answer, QuestionView, QuestionnaireError, QuestionnaireStatus};

/// Outcome of forward navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The cursor moved onto another question.
    HasMore,
    /// The session is now (or already was) completed.
    Finished,
}

/// Questionnaire session aggregate.
///
/// # Invariants
///
/// - `0 <= cursor <= questions.len()`
/// - `status == Completed` iff `cursor == questions.len()` after forward navigation
/// - `questions` only grows, and only at positions after the cursor
#[derive(Debug, Clone)]
pub struct QuestionnaireSession {
    id: SessionId,
    category: Category,
    description: String,
    template: Arc<Template>,
    questions: Vec<Question>,
    cursor: usize,
    answers: HashMap<QuestionId, Answer>,
    status: QuestionnaireStatus,
}

impl QuestionnaireSession {
    /// Creates an active session positioned on the first base question.
    ///
    /// Falls back to the catalog's default template when `category` has none.
    ///
    /// # Errors
    ///
    /// - `InvalidCategory` if neither `category` nor the default has a template
    pub fn create(
        id: SessionId,
        category: Category,
        description: impl Into<String>,
        catalog: &TemplateCatalog,
    ) -> Result<Self, QuestionnaireError> {
        let template = catalog.template_for(category)?;
        Ok(Self {
            id,
            category: template.category(),
            description: description.into(),
            questions: template.base_questions().to_vec(),
            template,
            cursor: 0,
            answers: HashMap::new(),
            status: QuestionnaireStatus::Active,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The working question list in traversal order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn answers(&self) -> &HashMap<QuestionId, Answer> {
        &self.answers
    }

    pub fn answer(&self, question_id: &QuestionId) -> Option<&Answer> {
        self.answers.get(question_id)
    }

    pub fn status(&self) -> QuestionnaireStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_terminal()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the question under the cursor, or `None` past the end.
    pub fn current_question(&self) -> Option<QuestionView> {
        self.questions
            .get(self.cursor)
            .map(|question| QuestionView::at(question, self.cursor, self.questions.len()))
    }

    /// Records `answer` for the current question and expands follow-ups.
    ///
    /// Returns the number of follow-up questions inserted.
    ///
    /// # Errors
    ///
    /// - `NoCurrentQuestion` if the cursor is past the end
    pub fn submit_answer(&mut self, answer: impl Into<String>) -> Result<usize, QuestionnaireError> {
        let question_id = self
            .questions
            .get(self.cursor)
            .map(|q| q.id.clone())
            .ok_or(QuestionnaireError::NoCurrentQuestion)?;

        let answer = answer.into();
        let inserted = self.expand_follow_ups(&question_id, &answer);
        self.answers.insert(question_id, Answer::Given(answer));
        Ok(inserted)
    }

    /// Moves forward one question, completing the session at the end.
    pub fn advance(&mut self) -> Advance {
        if self.is_completed() {
            return Advance::Finished;
        }

        if self.cursor + 1 < self.questions.len() {
            self.cursor += 1;
            return Advance::HasMore;
        }

        self.complete();
        Advance::Finished
    }

    /// Moves back one question. Returns false at the start or once completed.
    pub fn retreat(&mut self) -> bool {
        if self.is_completed() || self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Records the skip sentinel for the current question, then advances.
    ///
    /// Never expands follow-ups.
    pub fn skip(&mut self) -> Advance {
        let Some(question) = self.questions.get(self.cursor) else {
            return Advance::Finished;
        };
        self.answers.insert(question.id.clone(), Answer::Skipped);
        self.advance()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    fn expand_follow_ups(&mut self, trigger: &QuestionId, answer: &str) -> usize {
        let Some(follow_ups) = self.template.follow_ups_for(trigger, answer) else {
            return 0;
        };

        let fresh: Vec<Question> = follow_ups
            .iter()
            .filter(|candidate| !self.questions.iter().any(|q| q.id == candidate.id))
            .cloned()
            .collect();

        let inserted = fresh.len();
        let at = self.cursor + 1;
        self.questions.splice(at..at, fresh);
        inserted
    }

    fn complete(&mut self) {
        self.cursor = self.questions.len();
        if let Ok(next) = self.status.transition_to(QuestionnaireStatus::Completed) {
            self.status = next;
        }
    }
}
