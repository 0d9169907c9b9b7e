pub mod engine;
pub mod path;

pub use engine::{set_at_path, PathError};
pub use path::{Path, PathSegment};
