//! Session id generation port.

use crate::domain::foundation::SessionId;

/// Produces unique session identifiers.
pub trait SessionIdGenerator: Send + Sync {
    fn next_id(&self) -> SessionId;
}
