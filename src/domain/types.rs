//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory by the inference and ranking pipelines
//! - exported to JSON for callers that cache aura records
//! - reloaded later for similarity and discovery queries

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::AuraError;

/// Discrete aura shape, selected from the place rating.
///
/// Thresholds (boundary-inclusive on the upper edge):
/// `rating <= 2.0` → `Soft`, `<= 3.0` → `Pulse`, `<= 4.0` → `Flowing`,
/// `> 4.0` → `Sparkle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Soft,
    Pulse,
    Flowing,
    Sparkle,
}

impl Shape {
    /// Human-readable label for terminal output and gradient strings.
    pub fn display_name(self) -> &'static str {
        match self {
            Shape::Soft => "soft",
            Shape::Pulse => "pulse",
            Shape::Flowing => "flowing",
            Shape::Sparkle => "sparkle",
        }
    }
}

/// One raw review supplied by the place-search collaborator.
///
/// The engine never retains these; they are consumed per `build_aura` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewText {
    pub text: String,
    /// Optional per-review star rating (1–5). Currently informational only;
    /// the aggregate place rating drives shape selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

impl ReviewText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rating: None,
        }
    }
}

/// Per-label scores in label order.
///
/// Invariant: never empty. Degenerate inputs produce the uniform 0.5
/// baseline rather than an empty map. `BTreeMap` keeps iteration order
/// deterministic, which the classifier's tie handling relies on.
pub type ScoreVector = BTreeMap<String, f64>;

/// The symbolic fingerprint assigned to a place or user.
///
/// Immutable once built. The canonical color representation is the explicit
/// stop list; `gradient_string` (in `color`) derives the legacy CSS form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuraRecord {
    /// Non-empty descriptive name, e.g. "Peaceful Balanced".
    pub name: String,
    /// 2 or 3 validated `#RRGGBB` stops, dark-to-light by convention.
    pub color_stops: Vec<String>,
    pub shape: Shape,
}

impl AuraRecord {
    /// Construct a record, enforcing the builder guarantees:
    /// non-empty name and exactly 2 or 3 valid `#RRGGBB` stops.
    pub fn new(
        name: impl Into<String>,
        color_stops: Vec<String>,
        shape: Shape,
    ) -> Result<Self, AuraError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AuraError::Io(
                "invalid aura record: empty name".to_string(),
            ));
        }
        if !(2..=3).contains(&color_stops.len()) {
            return Err(AuraError::MalformedColor(format!(
                "aura record requires 2 or 3 color stops, got {}",
                color_stops.len()
            )));
        }
        let color_stops = color_stops
            .iter()
            .map(|s| crate::color::normalize_hex(s))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            name,
            color_stops,
            shape,
        })
    }
}

/// A geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, AuraError> {
        let p = Self {
            latitude,
            longitude,
        };
        p.validate()?;
        Ok(p)
    }

    /// Reject out-of-range coordinates.
    pub fn validate(&self) -> Result<(), AuraError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(AuraError::InvalidCoordinate(format!(
                "latitude {} outside [-90, 90]",
                self.latitude
            )));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(AuraError::InvalidCoordinate(format!(
                "longitude {} outside [-180, 180]",
                self.longitude
            )));
        }
        Ok(())
    }
}

/// One discovery candidate supplied by the place-search collaborator.
///
/// Read-only to the ranker; never retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub location: GeoPoint,
    pub aura: AuraRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_type: Option<String>,
}

/// A ranked discovery result. Derived per query, discarded after response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedResult {
    pub candidate: Candidate,
    pub distance_meters: f64,
    /// Aura similarity in [0,1]. 0.0 when no user aura was supplied
    /// (distance-only ranking).
    pub similarity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_rejects_wrong_stop_count() {
        let one = AuraRecord::new("X", vec!["#FF0000".into()], Shape::Soft);
        assert!(one.is_err());
        let four = AuraRecord::new(
            "X",
            vec![
                "#FF0000".into(),
                "#00FF00".into(),
                "#0000FF".into(),
                "#FFFFFF".into(),
            ],
            Shape::Soft,
        );
        assert!(four.is_err());
    }

    #[test]
    fn record_rejects_empty_name() {
        let r = AuraRecord::new("  ", vec!["#FF0000".into(), "#00FF00".into()], Shape::Soft);
        assert!(r.is_err());
    }

    #[test]
    fn record_expands_shorthand_stops() {
        let r = AuraRecord::new("X", vec!["#f00".into(), "#00ff00".into()], Shape::Pulse).unwrap();
        assert_eq!(r.color_stops, vec!["#FF0000", "#00FF00"]);
    }

    #[test]
    fn geopoint_validates_ranges() {
        assert!(GeoPoint::new(40.7128, -74.0060).is_ok());
        assert!(GeoPoint::new(90.0001, 0.0).is_err());
        assert!(GeoPoint::new(0.0, -180.5).is_err());
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
    }
}
