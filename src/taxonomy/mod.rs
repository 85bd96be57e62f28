//! Category and vibe taxonomies.
//!
//! The taxonomy is the engine's only configuration: a fixed mapping from
//! category names to keyword lists and representative color shades, and from
//! vibe labels to keyword lists, a `{dark, light}` gradient pair, and a
//! synonym list used for aura naming.
//!
//! It is constructed once at process start (built-in defaults, or a JSON
//! file) and passed explicitly to every component — never ambient global
//! state. Loading an empty taxonomy is fatal, not a per-call error.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::normalize_hex;
use crate::error::AuraError;

/// One scoring category: keyword list plus representative shades ordered
/// dark → light. The color synthesizer picks a shade by score intensity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySpec {
    pub keywords: Vec<String>,
    pub colors: Vec<String>,
}

/// One vibe label: keyword list, a dark/light gradient pair, and adjectives
/// for name composition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VibeSpec {
    pub keywords: Vec<String>,
    pub dark: String,
    pub light: String,
    pub adjectives: Vec<String>,
}

/// Immutable, process-wide taxonomy tables.
///
/// `BTreeMap` keeps label iteration deterministic across runs, which the
/// classifier and color synthesizer rely on when breaking ties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Taxonomy {
    pub categories: BTreeMap<String, CategorySpec>,
    pub vibes: BTreeMap<String, VibeSpec>,
}

/// Neutral vibe used when no vibe keyword matched at all.
pub const NEUTRAL_VIBE: &str = "balanced";

impl Taxonomy {
    /// Load a taxonomy from a JSON file and validate it.
    pub fn from_json_file(path: &Path) -> Result<Self, AuraError> {
        let file = File::open(path).map_err(|e| {
            AuraError::Io(format!("Failed to open taxonomy '{}': {e}", path.display()))
        })?;
        let taxonomy: Taxonomy = serde_json::from_reader(file)
            .map_err(|e| AuraError::Io(format!("Invalid taxonomy JSON: {e}")))?;
        taxonomy.validate()?;
        Ok(taxonomy)
    }

    /// Reject degenerate configuration up front so per-call code can assume
    /// non-empty tables and valid colors.
    pub fn validate(&self) -> Result<(), AuraError> {
        if self.categories.is_empty() {
            return Err(AuraError::EmptyTaxonomy(
                "taxonomy has zero categories".to_string(),
            ));
        }
        if self.vibes.is_empty() {
            return Err(AuraError::EmptyTaxonomy(
                "taxonomy has zero vibes".to_string(),
            ));
        }
        for (name, spec) in &self.categories {
            if spec.keywords.is_empty() || spec.colors.is_empty() {
                return Err(AuraError::EmptyTaxonomy(format!(
                    "category '{name}' has no keywords or no colors"
                )));
            }
            for c in &spec.colors {
                normalize_hex(c)?;
            }
        }
        for (name, spec) in &self.vibes {
            if spec.keywords.is_empty() || spec.adjectives.is_empty() {
                return Err(AuraError::EmptyTaxonomy(format!(
                    "vibe '{name}' has no keywords or no adjectives"
                )));
            }
            normalize_hex(&spec.dark)?;
            normalize_hex(&spec.light)?;
        }
        if !self.vibes.contains_key(NEUTRAL_VIBE) {
            return Err(AuraError::EmptyTaxonomy(format!(
                "taxonomy must define the neutral vibe '{NEUTRAL_VIBE}'"
            )));
        }
        Ok(())
    }
}

fn category(keywords: &[&str], colors: &[&str]) -> CategorySpec {
    CategorySpec {
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
        colors: colors.iter().map(|s| s.to_string()).collect(),
    }
}

fn vibe(keywords: &[&str], dark: &str, light: &str, adjectives: &[&str]) -> VibeSpec {
    VibeSpec {
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
        dark: dark.to_string(),
        light: light.to_string(),
        adjectives: adjectives.iter().map(|s| s.to_string()).collect(),
    }
}

impl Default for Taxonomy {
    /// Built-in tables: seven scoring categories with dark→light shade
    /// triples anchored on each category's base color, and four vibes with
    /// dark/light gradient pairs.
    fn default() -> Self {
        let mut categories = BTreeMap::new();
        categories.insert(
            "energy".to_string(),
            category(
                &["energetic", "vibrant", "lively", "bustling", "dynamic"],
                &["#8B0000", "#FF0000", "#FF6666"],
            ),
        );
        categories.insert(
            "calmness".to_string(),
            category(
                &["peaceful", "tranquil", "serene", "quiet", "relaxing"],
                &["#00008B", "#0000FF", "#6699FF"],
            ),
        );
        categories.insert(
            "warmth".to_string(),
            category(
                &["warm", "cozy", "inviting", "friendly", "welcoming"],
                &["#B36B00", "#FFA500", "#FFD27F"],
            ),
        );
        categories.insert(
            "elegance".to_string(),
            category(
                &["elegant", "sophisticated", "refined", "luxurious", "upscale"],
                &["#4B004B", "#800080", "#C36AC3"],
            ),
        );
        categories.insert(
            "casual".to_string(),
            category(
                &["casual", "laid-back", "informal", "relaxed", "easy-going"],
                &["#006400", "#00FF00", "#8CFF8C"],
            ),
        );
        categories.insert(
            "freshness".to_string(),
            category(
                &["clean", "modern", "fresh", "bright", "new", "style", "original"],
                &["#008B8B", "#00FFFF", "#99FFFF"],
            ),
        );
        categories.insert(
            "authenticity".to_string(),
            category(
                &["authentic", "traditional", "genuine", "historic", "classic"],
                &["#8B7500", "#FFD700", "#FFE866"],
            ),
        );

        let mut vibes = BTreeMap::new();
        vibes.insert(
            "chill".to_string(),
            vibe(
                &["quiet", "relaxed", "peaceful", "tranquil", "serene", "calm", "mellow"],
                "#1F4E79",
                "#8FD3F4",
                &["Serene", "Tranquil", "Mellow", "Quiet", "Gentle"],
            ),
        );
        vibes.insert(
            "energetic".to_string(),
            vibe(
                &["loud", "bustling", "vibrant", "energetic", "rowdy", "lively", "buzzing"],
                "#B3001B",
                "#FF8A5C",
                &["Vibrant", "Lively", "Electric", "Buzzing", "Dynamic"],
            ),
        );
        vibes.insert(
            "formal".to_string(),
            vibe(
                &["elegant", "sophisticated", "refined", "upscale", "formal", "polished"],
                "#3D2B56",
                "#B497D6",
                &["Elegant", "Refined", "Polished", "Stately", "Graceful"],
            ),
        );
        vibes.insert(
            "balanced".to_string(),
            vibe(
                &["casual", "laid-back", "informal", "relaxed", "easy-going", "unpretentious"],
                "#2E6B4F",
                "#A8E6CF",
                &["Peaceful", "Grounded", "Easygoing", "Steady", "Harmonious"],
            ),
        );

        Taxonomy { categories, vibes }
    }
}
