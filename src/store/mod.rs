//! File-backed dashboard store
//!
//! The source of truth is a single JSON document rewritten in full on every
//! mutation. Reads always rehydrate from disk, so each request sees a
//! point-in-time snapshot; no caching, no locking, no transactional
//! guarantees beyond what one `write` gives.

mod errors;
mod file_store;

pub use errors::{StoreError, StoreResult};
pub use file_store::DashboardStore;
