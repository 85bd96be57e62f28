//! Command-line parsing for the aura engine front-end.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the inference/ranking code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "aura", version, about = "Aura inference and discovery ranking")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build an aura record from reviews and a rating, print it, and
    /// optionally export it to JSON.
    Build(BuildArgs),
    /// Score the similarity of two aura JSON files.
    Similarity(SimilarityArgs),
    /// Rank discovery candidates around an origin point.
    Rank(RankArgs),
}

/// Options for building one aura.
#[derive(Debug, Parser, Clone)]
pub struct BuildArgs {
    /// Reviews JSON file: [{"text": "...", "rating": 4}, ...].
    /// Omit to build from zero reviews (baseline aura).
    #[arg(long, value_name = "JSON")]
    pub reviews: Option<PathBuf>,

    /// Aggregate star rating (0–5). Omit to use the neutral default.
    #[arg(long)]
    pub rating: Option<f64>,

    /// Place type keyword(s), e.g. "cafe" or "night_club".
    #[arg(long, default_value = "")]
    pub place_type: String,

    /// Place (or user) display name; its keywords can bias the vibe.
    #[arg(long, default_value = "")]
    pub name: String,

    /// Random seed for the variety source. Omit for a process-seeded source.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Taxonomy JSON file. Omit to use the built-in taxonomy.
    #[arg(long, value_name = "JSON")]
    pub taxonomy: Option<PathBuf>,

    /// Export the built aura to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}

/// Options for scoring two auras.
#[derive(Debug, Parser)]
pub struct SimilarityArgs {
    /// First aura JSON file.
    pub a: PathBuf,

    /// Second aura JSON file.
    pub b: PathBuf,
}

/// Options for discovery ranking.
#[derive(Debug, Parser)]
pub struct RankArgs {
    /// Origin latitude (decimal degrees).
    #[arg(long)]
    pub lat: f64,

    /// Origin longitude (decimal degrees).
    #[arg(long)]
    pub lng: f64,

    /// Search radius in meters.
    #[arg(long, default_value_t = 2000.0)]
    pub radius: f64,

    /// Candidates JSON file: [{"location": {...}, "aura": {...}}, ...].
    #[arg(long, value_name = "JSON")]
    pub candidates: PathBuf,

    /// User aura JSON file; when present, results sort by aura match.
    #[arg(long, value_name = "JSON")]
    pub user_aura: Option<PathBuf>,

    /// Show top-N results.
    #[arg(long, default_value_t = 20)]
    pub top: usize,

    /// Export the full ranked list to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}
