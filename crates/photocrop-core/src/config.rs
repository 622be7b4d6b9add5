use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_CROP_INSET, DEFAULT_HOVER_MARGIN, DEFAULT_MIN_FRACTION};
use crate::error::{CropError, Result};
use crate::geometry::RelativeRect;

/// Region the editor starts with before anything is loaded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InitialRegion {
    /// A centred box inset by [`DEFAULT_CROP_INSET`] on every side.
    #[default]
    Centered,
    FullFrame,
    /// No region until the user drags one out.
    Empty,
}

impl InitialRegion {
    pub fn rect(&self) -> Option<RelativeRect> {
        match self {
            Self::Centered => Some(RelativeRect::centered(DEFAULT_CROP_INSET)),
            Self::FullFrame => Some(RelativeRect::FULL),
            Self::Empty => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Hover margin around edges and corners, in device pixels.
    pub hover_margin: f64,
    /// Minimum crop width/height as a fraction of the frame (0.0..=1.0).
    pub min_fraction: f64,
    pub initial_region: InitialRegion,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            hover_margin: DEFAULT_HOVER_MARGIN,
            min_fraction: DEFAULT_MIN_FRACTION,
            initial_region: InitialRegion::default(),
        }
    }
}

impl EditorConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.hover_margin.is_finite() || self.hover_margin < 0.0 {
            return Err(CropError::InvalidConfig(format!(
                "hover_margin must be a finite value >= 0, got {}",
                self.hover_margin
            )));
        }

        if !(self.min_fraction > 0.0 && self.min_fraction <= 1.0) {
            return Err(CropError::InvalidConfig(format!(
                "min_fraction must be in (0, 1], got {}",
                self.min_fraction
            )));
        }

        Ok(())
    }
}
