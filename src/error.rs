//! Engine error taxonomy.
//!
//! Per-call degeneracies (no reviews, missing rating, zero keyword matches,
//! classification ties) are handled by documented fallbacks and never surface
//! here. These variants cover the only genuinely invalid states:
//!
//! - a color stop that fails `#RRGGBB` validation
//! - latitude/longitude outside the valid ranges
//! - a taxonomy loaded with zero categories or vibes (fatal at startup)
//! - file/JSON failures in the CLI front-end

#[derive(Clone)]
pub enum AuraError {
    /// A computed or supplied color stop is not a valid hex color.
    MalformedColor(String),
    /// Latitude or longitude out of range.
    InvalidCoordinate(String),
    /// Taxonomy configuration has no categories or no vibes.
    EmptyTaxonomy(String),
    /// File or JSON failure in the CLI front-end.
    Io(String),
}

impl AuraError {
    /// Process exit code for the `aura` binary.
    pub fn exit_code(&self) -> u8 {
        match self {
            AuraError::MalformedColor(_) => 3,
            AuraError::InvalidCoordinate(_) => 4,
            AuraError::EmptyTaxonomy(_) => 5,
            AuraError::Io(_) => 2,
        }
    }
}

impl std::fmt::Display for AuraError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuraError::MalformedColor(msg) => write!(f, "Malformed color: {msg}"),
            AuraError::InvalidCoordinate(msg) => write!(f, "Invalid coordinate: {msg}"),
            AuraError::EmptyTaxonomy(msg) => write!(f, "Empty taxonomy: {msg}"),
            AuraError::Io(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::fmt::Debug for AuraError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AuraError({self})")
    }
}

impl std::error::Error for AuraError {}
