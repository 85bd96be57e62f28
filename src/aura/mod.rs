//! Aura construction.
//!
//! Ties the pipeline together: reviews → score aggregation → vibe
//! classification → gradient + shape → one immutable `AuraRecord`.
//!
//! Every degenerate input has a fallback (baseline scores, neutral vibe,
//! default palette, neutral rating); construction only fails on genuinely
//! malformed colors, which the default taxonomy cannot produce.

use rand::Rng;

use crate::color;
use crate::domain::{AuraRecord, ReviewText, Shape};
use crate::error::AuraError;
use crate::score;
use crate::taxonomy::Taxonomy;
use crate::vibe;

/// Threshold map from a 0–5 star rating to a shape.
///
/// Boundary-inclusive on the upper edge: a rating of exactly 2.0 is `Soft`,
/// exactly 3.0 is `Pulse`, exactly 4.0 is `Flowing`. A missing or
/// non-finite rating falls back to the neutral `Flowing` rather than
/// failing.
pub fn shape_for_rating(rating: Option<f64>) -> Shape {
    let r = match rating {
        Some(r) if r.is_finite() => r,
        _ => return Shape::Flowing,
    };
    if r <= 2.0 {
        Shape::Soft
    } else if r <= 3.0 {
        Shape::Pulse
    } else if r <= 4.0 {
        Shape::Flowing
    } else {
        Shape::Sparkle
    }
}

/// Capitalize the first character of a label for display.
fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Compose the aura name: a random adjective from the winning vibe's
/// synonym list plus the capitalized vibe label, e.g. "Peaceful Balanced".
fn compose_name<R: Rng>(winning_vibe: &str, taxonomy: &Taxonomy, rng: &mut R) -> String {
    match taxonomy.vibes.get(winning_vibe) {
        Some(spec) if !spec.adjectives.is_empty() => {
            let adjective = &spec.adjectives[rng.gen_range(0..spec.adjectives.len())];
            format!("{adjective} {}", capitalize(winning_vibe))
        }
        _ => capitalize(winning_vibe),
    }
}

/// Build an aura record for a place (or a user, via their own content).
///
/// `place_type` and `name` both feed the vibe bias; the place type wins when
/// both carry a recognized keyword. All randomness (tie-breaks, gradient
/// strategy, adjective choice) flows from the single injected `rng`, so a
/// seeded source makes the whole build deterministic.
pub fn build_aura<R: Rng>(
    reviews: &[ReviewText],
    rating: Option<f64>,
    place_type: &str,
    name: &str,
    taxonomy: &Taxonomy,
    rng: &mut R,
) -> Result<AuraRecord, AuraError> {
    let scores = score::aggregate(reviews, taxonomy);

    let bias_source = if vibe::place_type_vibe(place_type).is_some() {
        place_type
    } else {
        name
    };
    let winning_vibe = vibe::classify(&scores.vibes, scores.vibe_matches, bias_source, rng);

    let stops = color::synthesize_gradient(
        &scores.categories,
        &scores.vibes,
        &winning_vibe,
        taxonomy,
        rng,
    )?;
    let shape = shape_for_rating(rating);
    let aura_name = compose_name(&winning_vibe, taxonomy, rng);

    AuraRecord::new(aura_name, stops, shape)
}
