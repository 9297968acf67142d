//! Catalog construction errors.

use thiserror::Error;

use super::Category;
use crate::domain::foundation::QuestionId;

/// Errors raised while building or querying a template catalog.
///
/// All of these indicate a misconfigured catalog rather than a bad request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Template '{0}' has no base questions")]
    EmptyTemplate(Category),

    #[error("Template '{0}' is defined more than once")]
    DuplicateTemplate(Category),

    #[error("Template '{category}' contains a question with a blank id")]
    BlankQuestionId { category: Category },

    #[error("Template '{category}' defines question id '{id}' more than once")]
    DuplicateQuestionId { category: Category, id: QuestionId },

    #[error("Template '{category}' has follow-ups for unknown question '{trigger}'")]
    UnknownTrigger { category: Category, trigger: QuestionId },

    #[error("Template '{category}' has an empty follow-up set for '{trigger}' = '{answer}'")]
    EmptyFollowUps {
        category: Category,
        trigger: QuestionId,
        answer: String,
    },

    #[error("Default category '{0}' has no template")]
    MissingDefault(Category),

    #[error("No template available for category '{0}'")]
    InvalidCategory(Category),
}
