//! GetCurrentQuestionHandler - Query handler for the question under the cursor.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::questionnaire::{QuestionView, QuestionnaireError};
use crate::ports::SessionRegistry;

use super::find_session;

/// Query for the current question of a session.
#[derive(Debug, Clone)]
pub struct GetCurrentQuestionQuery {
    pub session_id: SessionId,
}

#[derive(Debug, Clone)]
pub struct GetCurrentQuestionResult {
    /// `None` once the questionnaire is completed.
    pub question: Option<QuestionView>,
    pub completed: bool,
}

/// Handler for reading the current question.
pub struct GetCurrentQuestionHandler {
    registry: Arc<dyn SessionRegistry>,
}

impl GetCurrentQuestionHandler {
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(
        &self,
        query: GetCurrentQuestionQuery,
    ) -> Result<GetCurrentQuestionResult, QuestionnaireError> {
        let shared = find_session(self.registry.as_ref(), &query.session_id).await?;
        let session = shared.lock().await;

        Ok(GetCurrentQuestionResult {
            question: session.current_question(),
            completed: session.is_completed(),
        })
    }
}
