//! Terminal output formatting.
//!
//! All presentation strings live here so the inference and ranking code
//! stays clean and output changes are localized.

use crate::color::gradient_string;
use crate::domain::{AuraRecord, RankedResult};

/// Summary block for a freshly built aura.
pub fn format_aura(record: &AuraRecord) -> String {
    let mut out = String::new();
    out.push_str("=== aura ===\n");
    out.push_str(&format!("Name:     {}\n", record.name));
    out.push_str(&format!("Shape:    {}\n", record.shape.display_name()));
    out.push_str(&format!("Stops:    {}\n", record.color_stops.join(" -> ")));
    out.push_str(&format!(
        "Gradient: {}\n",
        gradient_string(&record.color_stops)
    ));
    out
}

/// Similarity report for two auras.
pub fn format_similarity(a: &AuraRecord, b: &AuraRecord, score: f64) -> String {
    format!(
        "'{}' vs '{}': similarity {:.4}\n",
        a.name, b.name, score
    )
}

/// Ranked discovery table (top `top_n` rows).
pub fn format_rankings(results: &[RankedResult], top_n: usize, with_similarity: bool) -> String {
    let mut out = String::new();
    out.push_str("=== discovery ===\n");
    if results.is_empty() {
        out.push_str("No candidates within radius.\n");
        return out;
    }

    if with_similarity {
        out.push_str(&format!(
            "{:<4} {:<24} {:>10} {:>8}  {}\n",
            "#", "Name", "Distance", "Match", "Shape"
        ));
    } else {
        out.push_str(&format!(
            "{:<4} {:<24} {:>10}  {}\n",
            "#", "Name", "Distance", "Shape"
        ));
    }

    for (i, r) in results.iter().take(top_n).enumerate() {
        let distance = format!("{:.0} m", r.distance_meters);
        if with_similarity {
            out.push_str(&format!(
                "{:<4} {:<24} {:>10} {:>7.1}%  {}\n",
                i + 1,
                truncate(&r.candidate.aura.name, 24),
                distance,
                r.similarity * 100.0,
                r.candidate.aura.shape.display_name()
            ));
        } else {
            out.push_str(&format!(
                "{:<4} {:<24} {:>10}  {}\n",
                i + 1,
                truncate(&r.candidate.aura.name, 24),
                distance,
                r.candidate.aura.shape.display_name()
            ));
        }
    }
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{head}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Candidate, GeoPoint, Shape};

    fn record(name: &str) -> AuraRecord {
        AuraRecord::new(
            name,
            vec!["#1F4E79".to_string(), "#8FD3F4".to_string()],
            Shape::Flowing,
        )
        .unwrap()
    }

    #[test]
    fn aura_summary_lists_name_shape_and_stops() {
        let s = format_aura(&record("Serene Chill"));
        assert!(s.contains("Serene Chill"));
        assert!(s.contains("flowing"));
        assert!(s.contains("#1F4E79 -> #8FD3F4"));
        assert!(s.contains("linear-gradient(45deg, #1F4E79, #8FD3F4)"));
    }

    #[test]
    fn empty_rankings_say_so() {
        let s = format_rankings(&[], 10, false);
        assert!(s.contains("No candidates"));
    }

    #[test]
    fn rankings_respect_top_n() {
        let results: Vec<RankedResult> = (0..5)
            .map(|i| RankedResult {
                candidate: Candidate {
                    location: GeoPoint {
                        latitude: 0.0,
                        longitude: 0.0,
                    },
                    aura: record(&format!("Place {i}")),
                    place_type: None,
                },
                distance_meters: 100.0 * i as f64,
                similarity: 0.5,
            })
            .collect();
        let s = format_rankings(&results, 2, true);
        assert!(s.contains("Place 0"));
        assert!(s.contains("Place 1"));
        assert!(!s.contains("Place 2"));
    }
}
