use serde::{Deserialize, Serialize};

use crate::error::CstrError;

/// Closed interval of reactor volumes (m^3) to sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeRange {
    pub min: f64,
    pub max: f64,
}

impl VolumeRange {
    /// Range starting at zero volume, the usual sampling domain.
    pub fn up_to(max: f64) -> Self {
        Self { min: 0.0, max }
    }

    /// Check that the range can be sampled.
    pub fn validate(&self) -> Result<(), CstrError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(CstrError::InvalidRange(format!(
                "bounds must be finite, got [{}, {}]",
                self.min, self.max
            )));
        }
        if self.max <= 0.0 {
            return Err(CstrError::InvalidRange(format!(
                "maximum volume must be positive, got {}",
                self.max
            )));
        }
        if self.min < 0.0 {
            return Err(CstrError::InvalidRange(format!(
                "minimum volume must not be negative, got {}",
                self.min
            )));
        }
        if self.max <= self.min {
            return Err(CstrError::InvalidRange(format!(
                "maximum volume {} must exceed minimum volume {}",
                self.max, self.min
            )));
        }
        Ok(())
    }

    pub fn contains(&self, volume: f64) -> bool {
        (self.min..=self.max).contains(&volume)
    }
}

impl Default for VolumeRange {
    fn default() -> Self {
        Self::up_to(6.0)
    }
}
