use std::sync::Arc;

use serde_json::{json, Value};
use thiserror::Error;
use tracing::{error, warn};

use crate::modules::config::application::ports::outgoing::storage::{
    KeyValueStorage, StorageError,
};
use crate::modules::config::domain::entities::PortfolioConfig;
use crate::modules::config::domain::seed::seed;

/// Private editable document key.
pub const CONFIG_KEY: &str = "portfolioConfig";

/// Version tag written into the persisted envelope. Bump together with a
/// new arm in [`migrate`].
pub const SCHEMA_VERSION: u32 = 1;

const VERSION_FIELD: &str = "schemaVersion";
const CONFIG_FIELD: &str = "config";

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigStoreError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("serialization error: {0}")]
    Serialization(String),
}

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//
// Bridges the persisted shape (versioned, possibly partial, possibly
// written by an older release) to the complete in-memory document.
// Unreadable data degrades to the seed document with a log line; only
// storage itself failing reaches the caller.
//

pub struct ConfigStore<S>
where
    S: KeyValueStorage,
{
    storage: Arc<S>,
}

impl<S> ConfigStore<S>
where
    S: KeyValueStorage,
{
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Load the private document, upgrading whatever is stored to the
    /// full current shape. Never fails on bad content: a document that
    /// cannot be parsed at all is replaced by the seed.
    pub fn load(&self) -> Result<PortfolioConfig, ConfigStoreError> {
        let raw = match self.storage.get(CONFIG_KEY)? {
            Some(raw) => raw,
            None => return Ok(seed()),
        };

        let stored: Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                error!(error = %e, "stored portfolio config is not valid JSON; using seed");
                return Ok(seed());
            }
        };

        Ok(Self::upgrade(stored))
    }

    /// Serialize and store the full document, synchronously. Called after
    /// every mutation; there is no separate save step.
    pub fn persist(&self, document: &PortfolioConfig) -> Result<(), ConfigStoreError> {
        let envelope = json!({
            VERSION_FIELD: SCHEMA_VERSION,
            CONFIG_FIELD: document,
        });
        let raw = serde_json::to_string(&envelope)
            .map_err(|e| ConfigStoreError::Serialization(e.to_string()))?;
        self.storage.set(CONFIG_KEY, &raw)?;
        Ok(())
    }

    /// Drop the stored document and return the seed.
    pub fn reset(&self) -> Result<PortfolioConfig, ConfigStoreError> {
        self.storage.remove(CONFIG_KEY)?;
        Ok(seed())
    }

    fn upgrade(stored: Value) -> PortfolioConfig {
        let config_value = migrate(stored);
        let seed_doc = seed();
        let seed_value = match serde_json::to_value(&seed_doc) {
            Ok(value) => value,
            Err(e) => {
                error!(error = %e, "seed document failed to serialize");
                return seed_doc;
            }
        };

        let merged = merge_with_seed(config_value, seed_value);
        match serde_json::from_value::<PortfolioConfig>(merged) {
            Ok(document) => {
                for issue in document.validate() {
                    warn!(%issue, "loaded portfolio config has a data-quality issue");
                }
                document
            }
            Err(e) => {
                error!(error = %e, "stored portfolio config does not fit the document shape; using seed");
                seed_doc
            }
        }
    }
}

/// Unwrap the versioned envelope. Documents persisted before versioning
/// exist arrive as a bare config object and are treated as version 0;
/// their only upgrade (minting element ids) happens through serde defaults
/// during deserialization.
fn migrate(stored: Value) -> Value {
    match &stored {
        Value::Object(fields) if fields.contains_key(VERSION_FIELD) => {
            let version = fields
                .get(VERSION_FIELD)
                .and_then(Value::as_u64)
                .unwrap_or(0);
            if version > u64::from(SCHEMA_VERSION) {
                warn!(version, "stored config has a newer schema version than this build");
            }
            fields.get(CONFIG_FIELD).cloned().unwrap_or(Value::Null)
        }
        _ => stored,
    }
}

/// Merge a raw stored value over the seed document, in value space.
///
/// Rules, applied recursively:
/// - objects merge field-by-field; source leaves win, missing fields are
///   filled from the seed
/// - arrays present in the source replace the seed array wholesale; there
///   is no element-level reconciliation
/// - `null` or a section of the wrong kind falls back to the seed value
/// - source keys unknown to the seed are carried through untouched
fn merge_with_seed(source: Value, seed: Value) -> Value {
    match (source, seed) {
        (Value::Object(source_fields), Value::Object(seed_fields)) => {
            let mut out = seed_fields;
            for (key, source_value) in source_fields {
                let merged = match out.remove(&key) {
                    Some(seed_value) => merge_with_seed(source_value, seed_value),
                    None => source_value,
                };
                out.insert(key, merged);
            }
            Value::Object(out)
        }
        (Value::Array(source_items), Value::Array(_)) => Value::Array(source_items),
        (Value::Null, seed_value) => seed_value,
        // Kind mismatch against a structured seed section: the seed shape wins.
        (source_value, seed_value) => {
            if matches!(seed_value, Value::Object(_) | Value::Array(_)) {
                seed_value
            } else {
                source_value
            }
        }
    }
}
