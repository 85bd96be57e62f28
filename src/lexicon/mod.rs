//! Lexicon-based sentiment scoring.
//!
//! Given one text string, produce a polarity in [-1, 1] from a fixed valence
//! lexicon. This is deliberately a bag-of-keywords heuristic, not an NLP
//! model: unknown tokens contribute zero, an empty string scores 0.0, and
//! there are no error conditions.
//!
//! The score is the classic "compound" form: sum the (negation- and
//! booster-adjusted) valences of recognized tokens, then squash with
//! `s / sqrt(s² + ALPHA)`.

pub mod valence;

use valence::{BOOSTERS, NEGATIONS, VALENCE};

/// Normalization constant for the compound squash. Larger values make the
/// score saturate more slowly as evidence accumulates.
const ALPHA: f64 = 15.0;

/// Negated valences are flipped and damped rather than fully inverted
/// ("not great" is bad, but less bad than "terrible").
const NEGATION_FACTOR: f64 = -0.74;

/// How far back (in tokens) negations and boosters reach, and the decay
/// applied at each extra step of distance.
const SCOPE: usize = 3;
const DISTANCE_DECAY: [f64; 3] = [1.0, 0.95, 0.9];

/// Lowercase word tokens: alphanumeric runs, keeping interior hyphens and
/// apostrophes so lexicon entries like "laid-back" and "don't" survive.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut tokens = Vec::new();
    let mut cur = String::new();
    for ch in lower.chars() {
        if ch.is_alphanumeric() || ch == '\'' || ch == '-' {
            cur.push(ch);
        } else if !cur.is_empty() {
            tokens.push(std::mem::take(&mut cur));
        }
    }
    if !cur.is_empty() {
        tokens.push(cur);
    }
    tokens
        .into_iter()
        .map(|t| t.trim_matches(|c| c == '-' || c == '\'').to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

fn lookup_valence(token: &str) -> Option<f64> {
    VALENCE
        .binary_search_by(|(w, _)| w.cmp(&token))
        .ok()
        .map(|i| VALENCE[i].1)
}

fn booster_delta(token: &str) -> Option<f64> {
    BOOSTERS
        .binary_search_by(|(w, _)| w.cmp(&token))
        .ok()
        .map(|i| BOOSTERS[i].1)
}

fn is_negation(token: &str) -> bool {
    NEGATIONS.binary_search(&token).is_ok()
}

/// Compound polarity of one text string, in [-1, 1].
pub fn polarity(text: &str) -> f64 {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return 0.0;
    }

    let mut sum = 0.0;
    for (i, token) in tokens.iter().enumerate() {
        let Some(base) = lookup_valence(token) else {
            continue;
        };
        let mut v = base;

        // Scan up to SCOPE preceding tokens for boosters and negations,
        // decaying their effect with distance.
        for back in 1..=SCOPE.min(i) {
            let prev = tokens[i - back].as_str();
            let decay = DISTANCE_DECAY[back - 1];
            if let Some(delta) = booster_delta(prev) {
                // Amplify in the direction of the valence sign.
                if v > 0.0 {
                    v += delta * decay;
                } else if v < 0.0 {
                    v -= delta * decay;
                }
            }
            if is_negation(prev) {
                v *= NEGATION_FACTOR * decay;
            }
        }

        sum += v;
    }

    let compound = sum / (sum * sum + ALPHA).sqrt();
    compound.clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valence_table_is_sorted_for_binary_search() {
        for pair in VALENCE.windows(2) {
            assert!(pair[0].0 < pair[1].0, "VALENCE out of order at {:?}", pair[1].0);
        }
        for pair in NEGATIONS.windows(2) {
            assert!(pair[0] < pair[1], "NEGATIONS out of order at {:?}", pair[1]);
        }
        for pair in BOOSTERS.windows(2) {
            assert!(pair[0].0 < pair[1].0, "BOOSTERS out of order at {:?}", pair[1].0);
        }
    }

    #[test]
    fn empty_text_scores_zero() {
        assert_eq!(polarity(""), 0.0);
        assert_eq!(polarity("   \t\n"), 0.0);
    }

    #[test]
    fn unknown_tokens_contribute_zero() {
        assert_eq!(polarity("xyzzy frobnicate qwerty"), 0.0);
    }

    #[test]
    fn positive_and_negative_texts_have_the_right_sign() {
        assert!(polarity("A wonderful, cozy little spot") > 0.0);
        assert!(polarity("Dirty tables and rude staff") < 0.0);
    }

    #[test]
    fn polarity_is_bounded() {
        let gushing = "amazing wonderful perfect excellent fantastic \
                       incredible outstanding superb spectacular best";
        let p = polarity(gushing);
        assert!(p > 0.9 && p <= 1.0);

        let scathing = "terrible awful horrible disgusting worst nasty filthy dreadful";
        let n = polarity(scathing);
        assert!(n < -0.9 && n >= -1.0);
    }

    #[test]
    fn negation_flips_the_sign() {
        let plain = polarity("the food was great");
        let negated = polarity("the food was not great");
        assert!(plain > 0.0);
        assert!(negated < 0.0);
        // Damped, not fully inverted.
        assert!(negated.abs() < plain.abs());
    }

    #[test]
    fn boosters_amplify_magnitude() {
        let plain = polarity("a good cafe");
        let boosted = polarity("a very good cafe");
        assert!(boosted > plain);

        let plain_neg = polarity("a bad cafe");
        let boosted_neg = polarity("a really bad cafe");
        assert!(boosted_neg < plain_neg);
    }

    #[test]
    fn tokenize_keeps_interior_hyphens() {
        let tokens = tokenize("A laid-back, easy-going place!");
        assert!(tokens.contains(&"laid-back".to_string()));
        assert!(tokens.contains(&"easy-going".to_string()));
        assert!(!tokens.contains(&"place!".to_string()));
    }
}
