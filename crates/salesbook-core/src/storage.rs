//! Persistence adapter contract and an in-memory implementation.

use std::{
    collections::HashMap,
    io,
    sync::atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

/// Slot holding the serialized sales ledger.
pub const SALES_SLOT: &str = "sales";
/// Slot holding the serialized expenses ledger.
pub const EXPENSES_SLOT: &str = "expenses";
/// Slot holding the serialized activity log.
pub const LOGS_SLOT: &str = "logs";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Asynchronous key-value byte store addressed by slot name.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns `None` when nothing has ever been stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError>;
}

/// Volatile store backed by a map. Writes can be disabled to simulate an
/// unavailable device.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RwLock<HashMap<String, Vec<u8>>>,
    read_only: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    /// Places raw bytes in a slot, bypassing the read-only switch.
    pub async fn insert_raw(&self, key: &str, value: impl Into<Vec<u8>>) {
        self.slots.write().await.insert(key.to_string(), value.into());
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.slots.read().await.contains_key(key)
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.slots.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(StorageError::Backend(format!(
                "store is read-only, cannot write `{}`",
                key
            )));
        }
        self.slots.write().await.insert(key.to_string(), value);
        Ok(())
    }
}
