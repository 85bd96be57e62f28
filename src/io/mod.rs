//! Read/write JSON files for the CLI front-end.
//!
//! The engine itself is I/O-free; these helpers exist so the `aura` binary
//! can exchange records with callers. The aura file schema carries both the
//! canonical stop list and the legacy combined gradient string, and reading
//! accepts either (older records stored only the gradient).

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::{DEFAULT_PALETTE, extract_stops, gradient_string};
use crate::domain::{AuraRecord, Candidate, RankedResult, ReviewText, Shape};
use crate::error::AuraError;

/// On-disk aura schema.
///
/// `color_stops` is canonical; `color` is the legacy CSS gradient string
/// kept for existing consumers. Either is sufficient to reconstruct the
/// record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuraFile {
    pub name: String,
    #[serde(default)]
    pub color_stops: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub shape: Shape,
}

impl AuraFile {
    pub fn from_record(record: &AuraRecord) -> Self {
        Self {
            name: record.name.clone(),
            color_stops: record.color_stops.clone(),
            color: Some(gradient_string(&record.color_stops)),
            shape: record.shape,
        }
    }

    /// Reconstruct a full record, recovering stops from the legacy gradient
    /// string when the explicit list is absent. A single recovered stop is
    /// duplicated to reach the 2-stop minimum; no stops at all fall back to
    /// the default palette.
    pub fn into_record(self) -> Result<AuraRecord, AuraError> {
        let mut stops = if !self.color_stops.is_empty() {
            self.color_stops
        } else if let Some(gradient) = &self.color {
            extract_stops(gradient)
        } else {
            Vec::new()
        };

        if stops.is_empty() {
            stops = DEFAULT_PALETTE.iter().map(|s| s.to_string()).collect();
        }
        if stops.len() == 1 {
            stops.push(stops[0].clone());
        }
        stops.truncate(3);

        AuraRecord::new(self.name, stops, self.shape)
    }
}

fn open(path: &Path, what: &str) -> Result<File, AuraError> {
    File::open(path)
        .map_err(|e| AuraError::Io(format!("Failed to open {what} '{}': {e}", path.display())))
}

fn create(path: &Path, what: &str) -> Result<File, AuraError> {
    File::create(path)
        .map_err(|e| AuraError::Io(format!("Failed to create {what} '{}': {e}", path.display())))
}

/// Read a review list: `[{"text": "...", "rating": 4}, ...]`.
pub fn read_reviews(path: &Path) -> Result<Vec<ReviewText>, AuraError> {
    let file = open(path, "reviews JSON")?;
    serde_json::from_reader(file).map_err(|e| AuraError::Io(format!("Invalid reviews JSON: {e}")))
}

/// Read one aura record (canonical or legacy schema).
pub fn read_aura(path: &Path) -> Result<AuraRecord, AuraError> {
    let file = open(path, "aura JSON")?;
    let aura: AuraFile = serde_json::from_reader(file)
        .map_err(|e| AuraError::Io(format!("Invalid aura JSON: {e}")))?;
    aura.into_record()
}

/// Write one aura record (both canonical stops and legacy gradient).
pub fn write_aura(path: &Path, record: &AuraRecord) -> Result<(), AuraError> {
    let file = create(path, "aura JSON")?;
    serde_json::to_writer_pretty(file, &AuraFile::from_record(record))
        .map_err(|e| AuraError::Io(format!("Failed to write aura JSON: {e}")))
}

/// Read a discovery candidate list.
pub fn read_candidates(path: &Path) -> Result<Vec<Candidate>, AuraError> {
    let file = open(path, "candidates JSON")?;
    serde_json::from_reader(file)
        .map_err(|e| AuraError::Io(format!("Invalid candidates JSON: {e}")))
}

/// Write ranked discovery results.
pub fn write_results(path: &Path, results: &[RankedResult]) -> Result<(), AuraError> {
    let file = create(path, "results JSON")?;
    serde_json::to_writer_pretty(file, results)
        .map_err(|e| AuraError::Io(format!("Failed to write results JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aura_file_round_trips_a_record() {
        let record = AuraRecord::new(
            "Serene Chill",
            vec!["#1F4E79".to_string(), "#8FD3F4".to_string()],
            Shape::Flowing,
        )
        .unwrap();
        let json = serde_json::to_string(&AuraFile::from_record(&record)).unwrap();
        let back: AuraFile = serde_json::from_str(&json).unwrap();
        assert_eq!(back.into_record().unwrap(), record);
    }

    #[test]
    fn legacy_gradient_only_records_are_recovered() {
        let json = r##"{
            "name": "Vibrant Energetic",
            "color": "linear-gradient(45deg, #B3001B, #FF8A5C)",
            "shape": "sparkle"
        }"##;
        let file: AuraFile = serde_json::from_str(json).unwrap();
        let record = file.into_record().unwrap();
        assert_eq!(record.color_stops, vec!["#B3001B", "#FF8A5C"]);
        assert_eq!(record.shape, Shape::Sparkle);
    }

    #[test]
    fn single_stop_gradient_is_duplicated_to_two() {
        let json = r##"{"name": "Solo", "color": "#ff0000", "shape": "soft"}"##;
        let file: AuraFile = serde_json::from_str(json).unwrap();
        let record = file.into_record().unwrap();
        assert_eq!(record.color_stops, vec!["#FF0000", "#FF0000"]);
    }

    #[test]
    fn colorless_records_get_the_default_palette() {
        let json = r##"{"name": "Blank", "shape": "pulse"}"##;
        let file: AuraFile = serde_json::from_str(json).unwrap();
        let record = file.into_record().unwrap();
        assert_eq!(record.color_stops, DEFAULT_PALETTE.to_vec());
    }

    #[test]
    fn oversized_stop_lists_truncate_to_three() {
        let json = r##"{
            "name": "Busy",
            "color": "linear-gradient(45deg, #111111, #222222, #333333, #444444)",
            "shape": "pulse"
        }"##;
        let file: AuraFile = serde_json::from_str(json).unwrap();
        let record = file.into_record().unwrap();
        assert_eq!(record.color_stops.len(), 3);
    }
}
