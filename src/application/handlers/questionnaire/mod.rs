//! Questionnaire command and query handlers.

mod get_current_question;
mod get_report;
mod health;
mod start_questionnaire;
mod submit_answer;

pub use get_current_question::{
    GetCurrentQuestionHandler, GetCurrentQuestionQuery, GetCurrentQuestionResult,
};
pub use get_report::{GetReportHandler, GetReportQuery};
pub use health::{HealthHandler, HealthResult};
pub use start_questionnaire::{
    StartQuestionnaireCommand, StartQuestionnaireHandler, StartQuestionnaireResult,
};
pub use submit_answer::{NavigationAction, SubmitAnswerCommand, SubmitAnswerHandler, SubmitAnswerResult};

use crate::domain::foundation::SessionId;
use crate::domain::questionnaire::QuestionnaireError;
use crate::ports::{SessionRegistry, SharedSession};

/// Fetches a registered session or fails with `InvalidSession`.
async fn find_session(
    registry: &dyn SessionRegistry,
    session_id: &SessionId,
) -> Result<SharedSession, QuestionnaireError> {
    registry
        .get(session_id)
        .await?
        .ok_or_else(|| QuestionnaireError::invalid_session(session_id))
}
