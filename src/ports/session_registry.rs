//! Session registry port.
//!
//! Holds live questionnaire sessions for their lifetime. Each session sits
//! behind its own mutex so that requests for the same id are serialized
//! while different sessions proceed in parallel.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::questionnaire::QuestionnaireSession;

/// A registered session, shared between concurrent requests.
pub type SharedSession = Arc<Mutex<QuestionnaireSession>>;

/// Registry port for live questionnaire sessions.
#[async_trait]
pub trait SessionRegistry: Send + Sync {
    /// Register a new session and return its shared handle.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if a session with the same id is already registered
    async fn put(&self, session: QuestionnaireSession) -> Result<SharedSession, DomainError>;

    /// Look up a session by id. Returns `None` if not registered.
    async fn get(&self, id: &SessionId) -> Result<Option<SharedSession>, DomainError>;

    /// Remove a session. Returns false if it was not registered.
    async fn remove(&self, id: &SessionId) -> Result<bool, DomainError>;

    /// Number of registered sessions.
    async fn count(&self) -> Result<usize, DomainError>;
}
