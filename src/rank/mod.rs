//! Aura similarity and discovery ranking.
//!
//! Similarity between two auras combines color closeness and shape equality:
//!
//! - identical names short-circuit to 1.0
//! - otherwise the **first** gradient stop of each record is compared by
//!   Euclidean RGB distance, normalized by the maximum possible distance
//!   (this deliberately ignores later stops; see DESIGN.md)
//! - shapes contribute 1.0 when equal, 0.5 otherwise
//! - final score = 0.6 · color + 0.4 · shape, always in [0, 1]
//!
//! Discovery ranking filters candidates by great-circle radius and sorts by
//! similarity (descending, ties by ascending distance) when a user aura is
//! supplied, or by distance alone otherwise. Per-candidate scoring is
//! independent, so candidates are evaluated in parallel; the final sort is
//! the only synchronization point.

use rayon::prelude::*;

use crate::color::{MAX_RGB_DISTANCE, hex_to_rgb, rgb_distance};
use crate::domain::{AuraRecord, Candidate, GeoPoint, RankedResult};
use crate::error::AuraError;
use crate::geo::distance_meters;

const COLOR_WEIGHT: f64 = 0.6;
const SHAPE_WEIGHT: f64 = 0.4;
const SHAPE_MISMATCH: f64 = 0.5;

/// Similarity between two aura records, in [0, 1].
pub fn similarity(a: &AuraRecord, b: &AuraRecord) -> Result<f64, AuraError> {
    if a.name == b.name {
        return Ok(1.0);
    }

    let first_a = a
        .color_stops
        .first()
        .ok_or_else(|| AuraError::MalformedColor("aura record has no color stops".to_string()))?;
    let first_b = b
        .color_stops
        .first()
        .ok_or_else(|| AuraError::MalformedColor("aura record has no color stops".to_string()))?;

    let rgb_a = hex_to_rgb(first_a)?;
    let rgb_b = hex_to_rgb(first_b)?;
    let color_similarity = 1.0 - rgb_distance(&rgb_a, &rgb_b) / MAX_RGB_DISTANCE;

    let shape_similarity = if a.shape == b.shape {
        1.0
    } else {
        SHAPE_MISMATCH
    };

    let score = COLOR_WEIGHT * color_similarity + SHAPE_WEIGHT * shape_similarity;
    Ok(score.clamp(0.0, 1.0))
}

/// Rank discovery candidates around an origin.
///
/// Candidates beyond `radius_meters` are discarded. With a user aura the
/// survivors are ordered by descending similarity (ties by ascending
/// distance); without one, by ascending distance. Empty input or an empty
/// post-filter set yields an empty list, never an error.
pub fn rank_discovery(
    origin: &GeoPoint,
    radius_meters: f64,
    user_aura: Option<&AuraRecord>,
    candidates: &[Candidate],
) -> Result<Vec<RankedResult>, AuraError> {
    origin.validate()?;

    let mut results: Vec<RankedResult> = candidates
        .par_iter()
        .map(|candidate| -> Result<Option<RankedResult>, AuraError> {
            let distance = distance_meters(origin, &candidate.location)?;
            if distance > radius_meters {
                return Ok(None);
            }
            let sim = match user_aura {
                Some(aura) => similarity(aura, &candidate.aura)?,
                None => 0.0,
            };
            Ok(Some(RankedResult {
                candidate: candidate.clone(),
                distance_meters: distance,
                similarity: sim,
            }))
        })
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .flatten()
        .collect();

    if user_aura.is_some() {
        results.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| {
                    a.distance_meters
                        .partial_cmp(&b.distance_meters)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
        });
    } else {
        results.sort_by(|a, b| {
            a.distance_meters
                .partial_cmp(&b.distance_meters)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    Ok(results)
}
