//! Storage Adapters
//!
//! Implementations of the SessionRegistry port.
//!
//! - **InMemorySessionRegistry** - Process-wide map of live sessions

mod in_memory_session_registry;

pub use in_memory_session_registry::InMemorySessionRegistry;
