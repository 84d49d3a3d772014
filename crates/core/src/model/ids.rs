use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Numeric identifier for a tutorial module.
///
/// Module ids double as the `/module/{id}` route segment, so they stay
/// small integers rather than opaque handles.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModuleId(u32);

impl ModuleId {
    /// Creates a new `ModuleId`
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying u32 value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModuleId({})", self.0)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing an id from a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: &'static str,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for ModuleId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>()
            .map(ModuleId::new)
            .map_err(|_| ParseIdError { kind: "ModuleId" })
    }
}

/// Identifier for a tappable hotspot region, e.g. `instrument_cluster`.
///
/// Hotspot ids come from static layout data, so the only invariant is
/// non-emptiness; the owning `Module` checks cross-references.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HotspotId(String);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("hotspot id cannot be empty")]
pub struct InvalidHotspotId;

impl HotspotId {
    /// Creates a new `HotspotId` from a non-empty string.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHotspotId` if the input is empty or whitespace-only.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidHotspotId> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InvalidHotspotId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for HotspotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HotspotId({})", self.0)
    }
}

impl fmt::Display for HotspotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HotspotId {
    type Err = InvalidHotspotId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_id_display() {
        let id = ModuleId::new(7);
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn module_id_from_str() {
        let id: ModuleId = "11".parse().unwrap();
        assert_eq!(id, ModuleId::new(11));
    }

    #[test]
    fn module_id_from_str_invalid() {
        let result = "bonus".parse::<ModuleId>();
        assert!(result.is_err());
    }

    #[test]
    fn hotspot_id_trims_whitespace() {
        let id = HotspotId::new("  climate_panel  ").unwrap();
        assert_eq!(id.as_str(), "climate_panel");
    }

    #[test]
    fn hotspot_id_rejects_empty() {
        assert_eq!(HotspotId::new("   "), Err(InvalidHotspotId));
    }

    #[test]
    fn module_id_roundtrip() {
        let original = ModuleId::new(3);
        let deserialized: ModuleId = original.to_string().parse().unwrap();
        assert_eq!(original, deserialized);
    }
}
