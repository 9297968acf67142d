//! Session id generator adapters.

use crate::domain::foundation::SessionId;
use crate::ports::SessionIdGenerator;

/// Generates random v4 UUID session ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidSessionIdGenerator;

impl SessionIdGenerator for UuidSessionIdGenerator {
    fn next_id(&self) -> SessionId {
        SessionId::new()
    }
}
