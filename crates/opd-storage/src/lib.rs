//! # opd-storage
//!
//! Local persistence layer for Operator Dashboard RS.
//!
//! A small key-value abstraction backs everything: values are strings,
//! callers decide what they encode. On top of it sit the typed stores
//! the dashboard uses between sessions.
//!
//! ## Structure
//!
//! - `store` - The `KeyValueStore` trait with local-filesystem and
//!   in-memory backends
//! - `bridge` - Typed access to the last run cache and the saved query
//!   definition
//! - `templates` - The named message template store
//!
//! Reads fail open throughout: absent keys, unreadable backends, and
//! corrupt payloads load as defaults rather than errors.

pub mod bridge;
pub mod store;
pub mod templates;

// Re-exports for convenience
pub use bridge::{PersistenceBridge, LAST_RESULTS_KEY, SAVED_QUERY_KEY};
pub use store::{KeyValueStore, LocalStore, MemoryStore, StorageError, StorageResult};
pub use templates::{stock_templates, TemplateStore, TEMPLATES_KEY};
