//! Keyword counting and score aggregation.
//!
//! This is the heart of the inference pipeline: a list of raw review texts
//! is folded into one normalized score per category and per vibe.
//!
//! Per review:
//! - sentiment polarity `p` (lexicon) → multiplier `m = 0.5 + 0.5·p` ∈ [0,1]
//! - token-match keyword counts per label
//! - each label accumulates `0.1 · count · m` on top of the 0.5 baseline
//!
//! After all reviews, a vector is rescaled by its maximum **only when that
//! maximum exceeds 1.0**. Low-signal vectors stay baseline-heavy on purpose;
//! this asymmetry is preserved from the observed source behavior and is
//! pending product-owner confirmation (see DESIGN.md).
//!
//! Accumulation is plain addition per label, so the result is independent of
//! review order and safe to parallelize across reviews.

use std::collections::BTreeMap;

use crate::domain::{ReviewText, ScoreVector};
use crate::lexicon;
use crate::taxonomy::Taxonomy;

/// Baseline score every label starts from.
pub const BASELINE: f64 = 0.5;

/// Weight of one keyword occurrence at full positive sentiment.
const MATCH_WEIGHT: f64 = 0.1;

/// Count how many tokens of `tokens` appear in `keywords`.
///
/// Token match, not substring match: "relaxed" does not count toward
/// "relaxing", and "class" does not count toward "classic". Repeated
/// occurrences each count.
pub fn count_matches(tokens: &[String], keywords: &[String]) -> usize {
    tokens
        .iter()
        .filter(|t| keywords.iter().any(|k| k == *t))
        .count()
}

/// Aggregated per-label scores for one place's reviews.
#[derive(Debug, Clone)]
pub struct ReviewScores {
    pub categories: ScoreVector,
    pub vibes: ScoreVector,
    /// Total keyword occurrences that hit any category / any vibe. Zero
    /// means the vector is the untouched baseline and downstream fallbacks
    /// apply.
    pub category_matches: usize,
    pub vibe_matches: usize,
}

impl ReviewScores {
    /// The uniform 0.5 baseline for a taxonomy (what an empty review list
    /// produces).
    pub fn baseline(taxonomy: &Taxonomy) -> Self {
        let categories = taxonomy
            .categories
            .keys()
            .map(|k| (k.clone(), BASELINE))
            .collect();
        let vibes = taxonomy
            .vibes
            .keys()
            .map(|k| (k.clone(), BASELINE))
            .collect();
        Self {
            categories,
            vibes,
            category_matches: 0,
            vibe_matches: 0,
        }
    }
}

/// Fold a list of reviews into normalized category and vibe score vectors.
pub fn aggregate(reviews: &[ReviewText], taxonomy: &Taxonomy) -> ReviewScores {
    let mut scores = ReviewScores::baseline(taxonomy);
    if reviews.is_empty() {
        return scores;
    }

    for review in reviews {
        let tokens = lexicon::tokenize(&review.text);
        if tokens.is_empty() {
            continue;
        }
        let sentiment = lexicon::polarity(&review.text);
        let m = 0.5 + 0.5 * sentiment;

        for (label, spec) in &taxonomy.categories {
            let count = count_matches(&tokens, &spec.keywords);
            if count > 0 {
                scores.category_matches += count;
                if let Some(v) = scores.categories.get_mut(label) {
                    *v += MATCH_WEIGHT * count as f64 * m;
                }
            }
        }
        for (label, spec) in &taxonomy.vibes {
            let count = count_matches(&tokens, &spec.keywords);
            if count > 0 {
                scores.vibe_matches += count;
                if let Some(v) = scores.vibes.get_mut(label) {
                    *v += MATCH_WEIGHT * count as f64 * m;
                }
            }
        }
    }

    rescale_if_exceeds_unit(&mut scores.categories);
    rescale_if_exceeds_unit(&mut scores.vibes);
    scores
}

/// Conditional normalization: divide by the max only when it exceeds 1.0.
fn rescale_if_exceeds_unit(vector: &mut BTreeMap<String, f64>) {
    let max = vector.values().copied().fold(f64::NEG_INFINITY, f64::max);
    if max > 1.0 {
        for v in vector.values_mut() {
            *v /= max;
        }
    }
}
