// src/modules/config/application/ports/outgoing/storage.rs

use thiserror::Error;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage read failed: {0}")]
    ReadFailed(String),

    /// Covers quota-style failures too: the write either completes or
    /// reports here, there is no partial state.
    #[error("storage write failed: {0}")]
    WriteFailed(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//
// The local key-value store both the private document and the published
// table live in. Everything is synchronous: calls complete or fail before
// returning, so a caller that writes and then reads the same key always
// observes its own write.
//

pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
