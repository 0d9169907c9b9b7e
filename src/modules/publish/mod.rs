pub mod service;
pub mod slug;

pub use service::{PublishError, PublishService, PublishedSnapshot, ShareLink, SHARED_TABLE_KEY};
pub use slug::{random_slug, sanitize_slug};
