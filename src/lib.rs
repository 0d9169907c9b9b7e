//! Local-first portfolio builder core.
//!
//! One mutable portfolio document is edited in place through deep-path
//! mutations, persisted to local key-value storage after every change, and
//! published on demand as immutable snapshots keyed by URL slugs. Rendering
//! happens in one of two modes fixed at session start: `Edit` (the private
//! document) or `View` (a read-only published snapshot).
//!
//! Entry point for template code is [`session::PortfolioSession`]; everything
//! else hangs off the hexagonal module layout under [`modules`].

pub mod modules;
pub mod shared;

pub use modules::config;
pub use modules::mutation;
pub use modules::publish;
pub use modules::session;
