pub mod entities;
pub mod seed;
