//! `aura-engine` library crate.
//!
//! The binary (`aura`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - modules are reusable (e.g., an HTTP layer or batch jobs)
//! - code stays easy to navigate as the project grows
//!
//! The engine assigns a symbolic fingerprint — an "aura" of name, color
//! gradient, and shape — to a place or user from review text and a rating,
//! and ranks discovery candidates by aura similarity and great-circle
//! distance. Everything is pure and stateless; the only capability passed
//! in is a seedable RNG for bounded visual variety.

pub mod app;
pub mod aura;
pub mod cli;
pub mod color;
pub mod domain;
pub mod error;
pub mod geo;
pub mod io;
pub mod lexicon;
pub mod rank;
pub mod report;
pub mod score;
pub mod taxonomy;
pub mod vibe;
