//! Adapters - Implementations of port interfaces.
//!
//! - `catalog` - YAML catalog loading
//! - `http` - HTTP API (axum)
//! - `ids` - Session id generation
//! - `storage` - In-memory session registry

pub mod catalog;
pub mod http;
pub mod ids;
pub mod storage;
