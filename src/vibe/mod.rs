//! Vibe classification.
//!
//! Reduces the aggregated vibe score vector to a single dominant label:
//!
//! 1. apply a fixed place-type bias (a restaurant leans energetic, a park
//!    leans balanced, and so on)
//! 2. take the argmax
//! 3. when several labels tie at the max, break the tie with a bounded
//!    uniform perturbation (±0.3 of the score range) drawn from the injected
//!    RNG, so the lexicographically-first label is not always preferred
//!
//! Zero keyword signal skips all of this and returns the fixed neutral
//! label. Randomness never enters when one label clearly dominates.

use rand::Rng;

use crate::domain::ScoreVector;
use crate::taxonomy::NEUTRAL_VIBE;

/// Magnitude of the tie-break perturbation, as a fraction of the [0,1]
/// score range.
pub const TIE_JITTER: f64 = 0.3;

/// Additive bias applied to the vibe a place type leans toward.
const PLACE_TYPE_BIAS: f64 = 0.15;

/// Scores within this distance of the max are considered tied.
const TIE_EPS: f64 = 1e-9;

/// Which vibe a place-type keyword leans toward.
///
/// Matching is by token containment so compound types like `night_club`
/// and free-form strings like "cocktail bar" both hit.
pub fn place_type_vibe(place_type: &str) -> Option<&'static str> {
    const LEANS: &[(&str, &str)] = &[
        ("restaurant", "energetic"),
        ("bar", "energetic"),
        ("club", "energetic"),
        ("cafe", "chill"),
        ("coffee", "chill"),
        ("spa", "chill"),
        ("bookstore", "chill"),
        ("park", "balanced"),
        ("mall", "balanced"),
        ("museum", "balanced"),
        ("library", "balanced"),
        ("hotel", "formal"),
        ("lounge", "formal"),
        ("gallery", "formal"),
    ];
    let lower = place_type.to_lowercase();
    for (keyword, vibe) in LEANS {
        if lower.split(|c: char| !c.is_alphanumeric()).any(|t| t == *keyword) {
            return Some(vibe);
        }
    }
    None
}

/// Classify the dominant vibe.
///
/// `vibe_matches` is the total keyword-occurrence count from aggregation;
/// zero means no vibe keyword appeared in any review and the neutral label
/// is returned without touching the RNG.
pub fn classify<R: Rng>(
    vibes: &ScoreVector,
    vibe_matches: usize,
    place_type: &str,
    rng: &mut R,
) -> String {
    if vibes.is_empty() || vibe_matches == 0 {
        return NEUTRAL_VIBE.to_string();
    }

    let bias_target = place_type_vibe(place_type);
    let biased: Vec<(&String, f64)> = vibes
        .iter()
        .map(|(label, &score)| {
            let bias = match bias_target {
                Some(target) if label == target => PLACE_TYPE_BIAS,
                _ => 0.0,
            };
            (label, score + bias)
        })
        .collect();

    let max = biased
        .iter()
        .map(|(_, v)| *v)
        .fold(f64::NEG_INFINITY, f64::max);
    let tied: Vec<&String> = biased
        .iter()
        .filter(|(_, v)| (max - v).abs() <= TIE_EPS)
        .map(|(label, _)| *label)
        .collect();

    if tied.len() == 1 {
        return tied[0].clone();
    }

    // Tie: perturb the tied leaders by a bounded uniform jitter and take
    // the argmax of the perturbed values. Equivalent to a uniform pick, but
    // expressed as the documented perturb-then-argmax policy.
    let mut best: Option<(&String, f64)> = None;
    for label in tied {
        let perturbed = max + rng.gen_range(-TIE_JITTER..=TIE_JITTER);
        match best {
            Some((_, b)) if b >= perturbed => {}
            _ => best = Some((label, perturbed)),
        }
    }
    best.map(|(label, _)| label.clone())
        .unwrap_or_else(|| NEUTRAL_VIBE.to_string())
}
