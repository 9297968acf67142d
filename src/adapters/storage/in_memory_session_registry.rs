//! In-Memory Session Registry Adapter
//!
//! Keeps live questionnaire sessions in a process-wide map.
//! Sessions are lost on restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::questionnaire::QuestionnaireSession;
use crate::ports::{SessionRegistry, SharedSession};

/// In-memory registry of questionnaire sessions
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRegistry {
    sessions: Arc<RwLock<HashMap<SessionId, SharedSession>>>,
}

impl InMemorySessionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every session (useful for tests)
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }
}

#[async_trait]
impl SessionRegistry for InMemorySessionRegistry {
    async fn put(&self, session: QuestionnaireSession) -> Result<SharedSession, DomainError> {
        let id = *session.id();
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&id) {
            return Err(
                DomainError::new(ErrorCode::ValidationFailed, "Session id already registered")
                    .with_detail("session_id", id.to_string()),
            );
        }

        let shared = Arc::new(Mutex::new(session));
        sessions.insert(id, Arc::clone(&shared));
        Ok(shared)
    }

    async fn get(&self, id: &SessionId) -> Result<Option<SharedSession>, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).cloned())
    }

    async fn remove(&self, id: &SessionId) -> Result<bool, DomainError> {
        Ok(self.sessions.write().await.remove(id).is_some())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.sessions.read().await.len())
    }
}
