pub mod adapter;
pub mod application;
pub mod domain;

pub use application::ports::outgoing::storage::{KeyValueStorage, StorageError};
pub use application::services::config_store::{ConfigStore, ConfigStoreError, CONFIG_KEY};
pub use domain::entities::{PortfolioConfig, TemplateVariant};
pub use domain::seed::seed;
