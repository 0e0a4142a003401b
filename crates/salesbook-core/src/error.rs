use salesbook_domain::{AmountError, EntryKind};
use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] AmountError),
    #[error("{kind} index {index} out of range (ledger has {len} entries)")]
    IndexOutOfRange {
        kind: EntryKind,
        index: usize,
        len: usize,
    },
    #[error("Persistence unavailable: {0}")]
    PersistenceUnavailable(#[from] StorageError),
    #[error("Stored `{slot}` data is corrupt: {message}")]
    PersistenceCorrupt { slot: String, message: String },
}

impl CoreError {
    /// Persistence failures degrade durability but never the in-memory session.
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            CoreError::PersistenceUnavailable(_) | CoreError::PersistenceCorrupt { .. }
        )
    }
}
