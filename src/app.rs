//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads the taxonomy (built-in or a JSON file)
//! - runs aura construction / similarity / discovery ranking
//! - prints reports
//! - writes optional exports

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::{BuildArgs, Command, RankArgs, SimilarityArgs};
use crate::domain::GeoPoint;
use crate::error::AuraError;
use crate::taxonomy::Taxonomy;

/// Entry point for the `aura` binary.
pub fn run() -> Result<(), AuraError> {
    let cli = crate::cli::Cli::parse();
    match cli.command {
        Command::Build(args) => handle_build(args),
        Command::Similarity(args) => handle_similarity(args),
        Command::Rank(args) => handle_rank(args),
    }
}

fn load_taxonomy(path: Option<&std::path::Path>) -> Result<Taxonomy, AuraError> {
    match path {
        Some(p) => Taxonomy::from_json_file(p),
        None => {
            let taxonomy = Taxonomy::default();
            taxonomy.validate()?;
            Ok(taxonomy)
        }
    }
}

fn handle_build(args: BuildArgs) -> Result<(), AuraError> {
    let taxonomy = load_taxonomy(args.taxonomy.as_deref())?;
    let reviews = match &args.reviews {
        Some(path) => crate::io::read_reviews(path)?,
        None => Vec::new(),
    };

    // A fixed seed pins the whole build; otherwise the variety source is
    // process-seeded.
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let record = crate::aura::build_aura(
        &reviews,
        args.rating,
        &args.place_type,
        &args.name,
        &taxonomy,
        &mut rng,
    )?;

    print!("{}", crate::report::format_aura(&record));

    if let Some(path) = &args.export {
        crate::io::write_aura(path, &record)?;
    }
    Ok(())
}

fn handle_similarity(args: SimilarityArgs) -> Result<(), AuraError> {
    let a = crate::io::read_aura(&args.a)?;
    let b = crate::io::read_aura(&args.b)?;
    let score = crate::rank::similarity(&a, &b)?;
    print!("{}", crate::report::format_similarity(&a, &b, score));
    Ok(())
}

fn handle_rank(args: RankArgs) -> Result<(), AuraError> {
    let origin = GeoPoint::new(args.lat, args.lng)?;
    let candidates = crate::io::read_candidates(&args.candidates)?;
    let user_aura = match &args.user_aura {
        Some(path) => Some(crate::io::read_aura(path)?),
        None => None,
    };

    let results = crate::rank::rank_discovery(&origin, args.radius, user_aura.as_ref(), &candidates)?;

    print!(
        "{}",
        crate::report::format_rankings(&results, args.top, user_aura.is_some())
    );

    if let Some(path) = &args.export {
        crate::io::write_results(path, &results)?;
    }
    Ok(())
}
