use thiserror::Error;

use crate::model::ids::HotspotId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HotspotError {
    #[error("hotspot label cannot be empty")]
    EmptyLabel,

    #[error("hotspot position must be within 0..=100 percent: ({x}, {y})")]
    PositionOutOfRange { x: u8, y: u8 },
}

/// A tappable region anchored at a static percentage position on the
/// camera overlay. Positions are author-time data, not detected at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotspot {
    id: HotspotId,
    x_pct: u8,
    y_pct: u8,
    label: String,
}

impl Hotspot {
    /// Creates a new hotspot at the given percentage coordinates.
    ///
    /// # Errors
    ///
    /// Returns `HotspotError::PositionOutOfRange` if either coordinate is
    /// above 100, or `HotspotError::EmptyLabel` for a blank label.
    pub fn new(
        id: HotspotId,
        x_pct: u8,
        y_pct: u8,
        label: impl Into<String>,
    ) -> Result<Self, HotspotError> {
        if x_pct > 100 || y_pct > 100 {
            return Err(HotspotError::PositionOutOfRange { x: x_pct, y: y_pct });
        }
        let label = label.into();
        if label.trim().is_empty() {
            return Err(HotspotError::EmptyLabel);
        }

        Ok(Self {
            id,
            x_pct,
            y_pct,
            label: label.trim().to_owned(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &HotspotId {
        &self.id
    }

    #[must_use]
    pub fn x_pct(&self) -> u8 {
        self.x_pct
    }

    #[must_use]
    pub fn y_pct(&self) -> u8 {
        self.y_pct
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}
