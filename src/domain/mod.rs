//! Domain types shared across the engine.

pub mod types;

pub use types::*;
