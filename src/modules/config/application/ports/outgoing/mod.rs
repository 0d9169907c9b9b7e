pub mod storage;

pub use storage::{KeyValueStorage, StorageError};
