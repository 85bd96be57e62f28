//! Color synthesis and hex utilities.
//!
//! Maps vibe/category labels and their scores to a 2- or 3-stop hex gradient.
//! Two strategies, selected by a weighted coin from the injected RNG:
//!
//! - **within-vibe** (weight 0.6): the winning vibe's `[dark, light]` pair;
//!   upgraded to a 3-stop variant when at least three categories carry real
//!   signal (score above the 0.5 baseline), each mapped to a shade picked by
//!   its score's intensity bucket.
//! - **cross-pair** (weight 0.4): dark stop from the winning vibe, light
//!   stop from a secondary vibe sampled by score weight, with the primary's
//!   own weight reduced to discourage same-vibe pairs.
//!
//! Degenerate scores fall back to a fixed default 3-stop palette. Every
//! emitted stop is `#RRGGBB`-validated; 3-digit shorthand is expanded before
//! validation.

use nalgebra::Vector3;
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};

use crate::domain::ScoreVector;
use crate::error::AuraError;
use crate::score::BASELINE;
use crate::taxonomy::Taxonomy;

/// Probability of the within-vibe strategy; the cross-pair strategy gets
/// the remainder.
pub const WITHIN_VIBE_WEIGHT: f64 = 0.6;

/// Weight multiplier applied to the primary vibe when sampling a secondary.
const SECONDARY_SELF_PENALTY: f64 = 0.25;

/// Fallback palette for degenerate score vectors.
pub const DEFAULT_PALETTE: [&str; 3] = ["#054F7D", "#00A7CF", "#EFE348"];

/// Maximum possible Euclidean distance between two RGB points.
pub const MAX_RGB_DISTANCE: f64 = 441.672_955_930_063_7; // sqrt(3 * 255^2)

/// Validate a hex color and return its canonical `#RRGGBB` form (uppercase,
/// shorthand `#RGB` expanded).
pub fn normalize_hex(color: &str) -> Result<String, AuraError> {
    let body = color
        .strip_prefix('#')
        .ok_or_else(|| AuraError::MalformedColor(format!("'{color}' is missing '#'")))?;
    let expanded: String = match body.len() {
        6 => body.to_string(),
        3 => body.chars().flat_map(|c| [c, c]).collect(),
        _ => {
            return Err(AuraError::MalformedColor(format!(
                "'{color}' must have 3 or 6 hex digits"
            )));
        }
    };
    if !expanded.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AuraError::MalformedColor(format!(
            "'{color}' contains non-hex digits"
        )));
    }
    Ok(format!("#{}", expanded.to_ascii_uppercase()))
}

/// Parse a canonical or shorthand hex color into an RGB vector (0–255 per
/// channel).
pub fn hex_to_rgb(color: &str) -> Result<Vector3<f64>, AuraError> {
    let canon = normalize_hex(color)?;
    let body = &canon[1..];
    let channel = |i: usize| -> f64 {
        // Validated hex, cannot fail.
        u8::from_str_radix(&body[i..i + 2], 16).unwrap_or(0) as f64
    };
    Ok(Vector3::new(channel(0), channel(2), channel(4)))
}

/// Euclidean distance between two colors in RGB space.
pub fn rgb_distance(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    (a - b).norm()
}

/// Render stops as the legacy CSS gradient string consumers still accept.
pub fn gradient_string(stops: &[String]) -> String {
    format!("linear-gradient(45deg, {})", stops.join(", "))
}

/// Recover hex stops from a combined gradient string (or any string
/// containing hex colors). Six-digit colors are preferred at each position;
/// three-digit shorthand is accepted and expanded. Returned stops are
/// canonical `#RRGGBB`.
pub fn extract_stops(gradient: &str) -> Vec<String> {
    let chars: Vec<char> = gradient.chars().collect();
    let mut stops = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '#' {
            let run: String = chars[i + 1..]
                .iter()
                .take(6)
                .take_while(|c| c.is_ascii_hexdigit())
                .collect();
            let taken = if run.len() >= 6 {
                6
            } else if run.len() >= 3 {
                3
            } else {
                0
            };
            if taken > 0 {
                if let Ok(canon) = normalize_hex(&format!("#{}", &run[..taken])) {
                    stops.push(canon);
                }
                i += 1 + taken;
                continue;
            }
        }
        i += 1;
    }
    stops
}

/// Synthesize a 2- or 3-stop gradient for the winning vibe.
///
/// `categories` and `vibes` are the aggregated score vectors; `winning_vibe`
/// must be a label of `taxonomy.vibes`.
pub fn synthesize_gradient<R: Rng>(
    categories: &ScoreVector,
    vibes: &ScoreVector,
    winning_vibe: &str,
    taxonomy: &Taxonomy,
    rng: &mut R,
) -> Result<Vec<String>, AuraError> {
    let total: f64 = vibes.values().sum();
    if vibes.is_empty() || categories.is_empty() || total <= 0.0 {
        return default_palette();
    }
    let Some(primary) = taxonomy.vibes.get(winning_vibe) else {
        return default_palette();
    };

    let stops = if rng.gen_range(0.0..1.0) < WITHIN_VIBE_WEIGHT {
        within_vibe_stops(categories, primary, taxonomy)
    } else {
        cross_pair_stops(vibes, winning_vibe, primary, taxonomy, rng)
    };

    stops.iter().map(|s| normalize_hex(s)).collect()
}

fn default_palette() -> Result<Vec<String>, AuraError> {
    DEFAULT_PALETTE.iter().map(|s| normalize_hex(s)).collect()
}

/// Strategy (a): the vibe's own dark→light pair, or the top-3 category
/// variant when three or more categories rose above the baseline.
fn within_vibe_stops(
    categories: &ScoreVector,
    primary: &crate::taxonomy::VibeSpec,
    taxonomy: &Taxonomy,
) -> Vec<String> {
    let mut signal: Vec<(&String, f64)> = categories
        .iter()
        .filter(|&(_, &v)| v > BASELINE + 1e-9)
        .map(|(k, &v)| (k, v))
        .collect();

    if signal.len() >= 3 {
        // Highest score first; ties resolved by label so the choice is
        // stable across runs.
        signal.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        let stops: Vec<String> = signal
            .iter()
            .take(3)
            .filter_map(|(label, score)| {
                taxonomy
                    .categories
                    .get(*label)
                    .map(|spec| shade_for_intensity(&spec.colors, *score))
            })
            .collect();
        if stops.len() == 3 {
            return stops;
        }
    }

    vec![primary.dark.clone(), primary.light.clone()]
}

/// Pick one of a category's shades by bucketing the score over [0,1]:
/// low scores take the dark end, high scores the light end.
fn shade_for_intensity(colors: &[String], score: f64) -> String {
    let n = colors.len();
    let idx = ((score.clamp(0.0, 1.0) * n as f64) as usize).min(n - 1);
    colors[idx].clone()
}

/// Strategy (b): primary dark + secondary light for contrast. The secondary
/// is sampled proportionally to vibe scores with the primary's own weight
/// multiplied by 0.25.
fn cross_pair_stops<R: Rng>(
    vibes: &ScoreVector,
    winning_vibe: &str,
    primary: &crate::taxonomy::VibeSpec,
    taxonomy: &Taxonomy,
    rng: &mut R,
) -> Vec<String> {
    let labels: Vec<&String> = vibes.keys().collect();
    let weights: Vec<f64> = vibes
        .iter()
        .map(|(label, &score)| {
            let w = score.max(0.0);
            if label == winning_vibe {
                w * SECONDARY_SELF_PENALTY
            } else {
                w
            }
        })
        .collect();

    let secondary = match WeightedIndex::new(&weights) {
        Ok(dist) => taxonomy.vibes.get(labels[dist.sample(rng)]),
        Err(_) => None,
    };

    match secondary {
        Some(spec) => vec![primary.dark.clone(), spec.light.clone()],
        None => vec![primary.dark.clone(), primary.light.clone()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::ReviewScores;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn normalize_accepts_canonical_and_shorthand() {
        assert_eq!(normalize_hex("#ff00aa").unwrap(), "#FF00AA");
        assert_eq!(normalize_hex("#F0A").unwrap(), "#FF00AA");
    }

    #[test]
    fn normalize_rejects_malformed_colors() {
        for bad in ["FF00AA", "#FF00A", "#GG0000", "#F", "#FF00AA11", ""] {
            assert!(
                matches!(normalize_hex(bad), Err(AuraError::MalformedColor(_))),
                "expected rejection for {bad:?}"
            );
        }
    }

    #[test]
    fn hex_to_rgb_parses_channels() {
        let rgb = hex_to_rgb("#FF8000").unwrap();
        assert_eq!(rgb, Vector3::new(255.0, 128.0, 0.0));
    }

    #[test]
    fn max_rgb_distance_matches_black_to_white() {
        let black = hex_to_rgb("#000000").unwrap();
        let white = hex_to_rgb("#FFFFFF").unwrap();
        assert!((rgb_distance(&black, &white) - MAX_RGB_DISTANCE).abs() < 1e-9);
    }

    #[test]
    fn gradient_string_round_trips() {
        let stops = vec!["#054F7D".to_string(), "#00A7CF".to_string(), "#EFE348".to_string()];
        let s = gradient_string(&stops);
        assert_eq!(s, "linear-gradient(45deg, #054F7D, #00A7CF, #EFE348)");
        assert_eq!(extract_stops(&s), stops);
    }

    #[test]
    fn extract_stops_handles_shorthand_and_noise() {
        let stops = extract_stops("radial(#f0a 10%, #00FF00) #zz #12");
        assert_eq!(stops, vec!["#FF00AA".to_string(), "#00FF00".to_string()]);
    }

    #[test]
    fn degenerate_scores_fall_back_to_default_palette() {
        let taxonomy = Taxonomy::default();
        let mut rng = StdRng::seed_from_u64(7);
        let empty = ScoreVector::new();
        let stops =
            synthesize_gradient(&empty, &empty, "balanced", &taxonomy, &mut rng).unwrap();
        assert_eq!(stops, DEFAULT_PALETTE.to_vec());
    }

    #[test]
    fn synthesized_stops_are_always_two_or_three_valid_hex() {
        let taxonomy = Taxonomy::default();
        let scores = ReviewScores::baseline(&taxonomy);
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let stops = synthesize_gradient(
                &scores.categories,
                &scores.vibes,
                "chill",
                &taxonomy,
                &mut rng,
            )
            .unwrap();
            assert!(
                (2..=3).contains(&stops.len()),
                "seed {seed} produced {} stops",
                stops.len()
            );
            for s in &stops {
                assert_eq!(normalize_hex(s).unwrap(), *s);
            }
        }
    }

    #[test]
    fn three_category_signal_yields_three_stops_under_within_vibe() {
        let taxonomy = Taxonomy::default();
        let mut scores = ReviewScores::baseline(&taxonomy);
        *scores.categories.get_mut("calmness").unwrap() = 0.9;
        *scores.categories.get_mut("warmth").unwrap() = 0.8;
        *scores.categories.get_mut("freshness").unwrap() = 0.7;

        let stops = within_vibe_stops(
            &scores.categories,
            taxonomy.vibes.get("chill").unwrap(),
            &taxonomy,
        );
        assert_eq!(stops.len(), 3);
        // Highest score (calmness, 0.9) maps to its lightest shade bucket.
        assert_eq!(stops[0], "#6699FF");
    }

    #[test]
    fn fewer_than_three_signals_keep_the_vibe_pair() {
        let taxonomy = Taxonomy::default();
        let mut scores = ReviewScores::baseline(&taxonomy);
        // Two above baseline, the rest exactly at it: not enough signal for
        // the 3-stop variant, so the vibe's own pair is used.
        *scores.categories.get_mut("calmness").unwrap() = 0.9;
        *scores.categories.get_mut("warmth").unwrap() = 0.8;

        let chill = taxonomy.vibes.get("chill").unwrap();
        let stops = within_vibe_stops(&scores.categories, chill, &taxonomy);
        assert_eq!(stops, vec![chill.dark.clone(), chill.light.clone()]);
    }

    #[test]
    fn shade_bucket_tracks_intensity() {
        let colors = vec!["#111111".to_string(), "#888888".to_string(), "#EEEEEE".to_string()];
        assert_eq!(shade_for_intensity(&colors, 0.1), "#111111");
        assert_eq!(shade_for_intensity(&colors, 0.5), "#888888");
        assert_eq!(shade_for_intensity(&colors, 0.95), "#EEEEEE");
        assert_eq!(shade_for_intensity(&colors, 1.0), "#EEEEEE");
    }
}
