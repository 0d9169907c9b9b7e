pub mod config_store;

pub use config_store::{ConfigStore, ConfigStoreError, CONFIG_KEY, SCHEMA_VERSION};
