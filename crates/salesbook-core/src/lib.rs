//! salesbook-core
//!
//! The ledger store and the presentation-facing view models.
//! Depends on salesbook-domain. No CLI, no terminal I/O; persistence goes
//! through the injected [`storage::KeyValueStore`].

pub mod error;
pub mod ledger_store;
pub mod storage;
pub mod views;

pub use error::CoreError;
pub use ledger_store::*;
pub use storage::{KeyValueStore, MemoryStore, StorageError};
pub use views::*;
