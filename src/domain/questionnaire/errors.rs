//! Questionnaire-specific error types.

use crate::domain::catalog::CatalogError;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Questionnaire-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionnaireError {
    /// No session is registered under this id.
    InvalidSession(String),
    /// The cursor is past the end of the working list.
    NoCurrentQuestion,
    /// The catalog cannot serve the requested category.
    InvalidCategory(CatalogError),
    /// Infrastructure error.
    Infrastructure(String),
}

impl QuestionnaireError {
    pub fn invalid_session(id: impl ToString) -> Self {
        QuestionnaireError::InvalidSession(id.to_string())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            QuestionnaireError::InvalidSession(_) => ErrorCode::SessionNotFound,
            QuestionnaireError::NoCurrentQuestion => ErrorCode::NoCurrentQuestion,
            QuestionnaireError::InvalidCategory(_) => ErrorCode::InvalidCategory,
            QuestionnaireError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            QuestionnaireError::InvalidSession(_) => "Invalid session".to_string(),
            QuestionnaireError::NoCurrentQuestion => "No current question".to_string(),
            QuestionnaireError::InvalidCategory(err) => format!("Catalog error: {}", err),
            QuestionnaireError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for QuestionnaireError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for QuestionnaireError {}

impl From<CatalogError> for QuestionnaireError {
    fn from(err: CatalogError) -> Self {
        QuestionnaireError::InvalidCategory(err)
    }
}

impl From<DomainError> for QuestionnaireError {
    fn from(err: DomainError) -> Self {
        // Registries report a missing session as `Ok(None)`, so any error
        // surfacing here is a storage failure.
        QuestionnaireError::Infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Category;

    #[test]
    fn codes_map_to_error_codes() {
        assert_eq!(
            QuestionnaireError::invalid_session("abc").code(),
            ErrorCode::SessionNotFound
        );
        assert_eq!(
            QuestionnaireError::NoCurrentQuestion.code(),
            ErrorCode::NoCurrentQuestion
        );
        assert_eq!(
            QuestionnaireError::from(CatalogError::InvalidCategory(Category::Fever)).code(),
            ErrorCode::InvalidCategory
        );
    }

    #[test]
    fn invalid_session_message_matches_wire_text() {
        assert_eq!(
            QuestionnaireError::invalid_session("abc").to_string(),
            "Invalid session"
        );
    }

    #[test]
    fn registry_errors_become_infrastructure() {
        let err = DomainError::new(ErrorCode::ValidationFailed, "Session id already registered");
        assert_eq!(
            QuestionnaireError::from(err),
            QuestionnaireError::Infrastructure(
                "[VALIDATION_FAILED] Session id already registered".to_string()
            )
        );
    }
}
