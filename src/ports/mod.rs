//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionRegistry` - Live session storage keyed by session id
//! - `SessionIdGenerator` - Source of unique session ids

mod session_id_generator;
mod session_registry;

pub use session_id_generator::SessionIdGenerator;
pub use session_registry::{SessionRegistry, SharedSession};
