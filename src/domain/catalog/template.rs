//! Question template for a single category.
//!
//! A template owns the ordered base questions plus the conditional map
//! `(trigger question id) -> (lowercased answer) -> follow-up questions`.

use std::collections::{HashMap, HashSet};

use super::{Category, CatalogError, Question};
use crate::domain::foundation::QuestionId;

/// Follow-up questions keyed by trigger answer, lowercased.
pub type FollowUpsByAnswer = HashMap<String, Vec<Question>>;

/// Question template for one category.
///
/// # Invariants (checked by [`Template::validate`])
///
/// - at least one base question
/// - every question id across base and follow-up sets is unique and non-blank
/// - every trigger id names a question of this template
/// - no follow-up set is empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    category: Category,
    questions: Vec<Question>,
    follow_ups: HashMap<QuestionId, FollowUpsByAnswer>,
}

impl Template {
    /// Creates a template with no conditional questions.
    pub fn new(category: Category, questions: Vec<Question>) -> Self {
        Self {
            category,
            questions,
            follow_ups: HashMap::new(),
        }
    }

    /// Creates a template from raw parts, lowercasing every trigger answer.
    pub fn from_parts(
        category: Category,
        questions: Vec<Question>,
        follow_ups: HashMap<QuestionId, FollowUpsByAnswer>,
    ) -> Self {
        follow_ups
            .into_iter()
            .flat_map(|(trigger, by_answer)| {
                by_answer
                    .into_iter()
                    .map(move |(answer, questions)| (trigger.clone(), answer, questions))
            })
            .fold(Self::new(category, questions), |template, (trigger, answer, questions)| {
                template.with_follow_ups(trigger, &answer, questions)
            })
    }

    /// Registers follow-ups inserted when `trigger` is answered with `answer`.
    pub fn with_follow_ups(mut self, trigger: QuestionId, answer: &str, questions: Vec<Question>) -> Self {
        self.follow_ups
            .entry(trigger)
            .or_default()
            .entry(answer.to_lowercase())
            .or_default()
            .extend(questions);
        self
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Base questions in traversal order.
    pub fn base_questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns the complete conditional map.
    pub fn follow_ups(&self) -> &HashMap<QuestionId, FollowUpsByAnswer> {
        &self.follow_ups
    }

    /// Follow-ups triggered by answering `question_id` with `answer` (case-insensitive).
    pub fn follow_ups_for(&self, question_id: &QuestionId, answer: &str) -> Option<&[Question]> {
        self.follow_ups
            .get(question_id)
            .and_then(|by_answer| by_answer.get(&answer.to_lowercase()))
            .map(Vec::as_slice)
    }

    /// Checks the template invariants.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let category = self.category;
        if self.questions.is_empty() {
            return Err(CatalogError::EmptyTemplate(category));
        }

        let mut seen: HashSet<&QuestionId> = HashSet::new();
        let follow_up_questions = self
            .follow_ups
            .values()
            .flat_map(|by_answer| by_answer.values())
            .flatten();

        for question in self.questions.iter().chain(follow_up_questions) {
            if question.id.is_blank() {
                return Err(CatalogError::BlankQuestionId { category });
            }
            if !seen.insert(&question.id) {
                return Err(CatalogError::DuplicateQuestionId {
                    category,
                    id: question.id.clone(),
                });
            }
        }

        for (trigger, by_answer) in &self.follow_ups {
            if !seen.contains(trigger) {
                return Err(CatalogError::UnknownTrigger {
                    category,
                    trigger: trigger.clone(),
                });
            }
            if let Some((answer, _)) = by_answer.iter().find(|(_, qs)| qs.is_empty()) {
                return Err(CatalogError::EmptyFollowUps {
                    category,
                    trigger: trigger.clone(),
                    answer: answer.clone(),
                });
            }
        }

        Ok(())
    }
}
