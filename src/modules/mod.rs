pub mod config;
pub mod mutation;
pub mod publish;
pub mod session;
