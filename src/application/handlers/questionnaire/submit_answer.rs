//! SubmitAnswerHandler - Command handler for answering and navigating.

use serde::Deserialize;
use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::questionnaire::{QuestionView, QuestionnaireError};
use crate::ports::SessionRegistry;

use super::find_session;

/// Navigation requested alongside an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationAction {
    /// Record the answer (if any) and move forward.
    #[default]
    Next,
    /// Move back one question; the answer is ignored.
    Previous,
    /// Record `Skipped` and move forward; the answer is ignored.
    Skip,
}

/// Command to submit an answer and navigate.
#[derive(Debug, Clone)]
pub struct SubmitAnswerCommand {
    pub session_id: SessionId,
    pub answer: Option<String>,
    pub action: NavigationAction,
}

/// Session position after navigation.
#[derive(Debug, Clone)]
pub struct SubmitAnswerResult {
    pub completed: bool,
    /// `None` once completed.
    pub question: Option<QuestionView>,
    /// Follow-up questions inserted by this answer.
    pub inserted: usize,
}

/// Handler for answer submission and navigation.
pub struct SubmitAnswerHandler {
    registry: Arc<dyn SessionRegistry>,
}

impl SubmitAnswerHandler {
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(
        &self,
        cmd: SubmitAnswerCommand,
    ) -> Result<SubmitAnswerResult, QuestionnaireError> {
        let shared = find_session(self.registry.as_ref(), &cmd.session_id).await?;
        let mut session = shared.lock().await;

        let inserted = match cmd.action {
            NavigationAction::Next => {
                let inserted = match cmd.answer {
                    Some(answer) => match session.submit_answer(answer) {
                        Ok(inserted) => inserted,
                        // Past the end: reported as completed below.
                        Err(QuestionnaireError::NoCurrentQuestion) => 0,
                        Err(err) => return Err(err),
                    },
                    None => 0,
                };
                session.advance();
                inserted
            }
            NavigationAction::Previous => {
                session.retreat();
                0
            }
            NavigationAction::Skip => {
                session.skip();
                0
            }
        };

        let completed = session.is_completed();
        tracing::debug!(
            session_id = %cmd.session_id,
            action = ?cmd.action,
            inserted,
            cursor = session.cursor(),
            completed,
            "Navigated questionnaire"
        );
        if completed {
            tracing::info!(session_id = %cmd.session_id, "Questionnaire completed");
        }

        Ok(SubmitAnswerResult {
            completed,
            question: session.current_question(),
            inserted,
        })
    }
}
