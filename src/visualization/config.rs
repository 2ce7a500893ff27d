use serde::{Deserialize, Serialize};

use crate::error::CstrError;

/// Visible window of the profit chart.
///
/// Only affects rendering: the curve is always computed over the full
/// volume range regardless of these bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisBounds {
    /// Volume axis, m^3
    pub x_min: f64,
    pub x_max: f64,
    /// Profit axis, €/s
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for AxisBounds {
    fn default() -> Self {
        Self {
            x_min: 0.0,
            x_max: 3.0,
            y_min: 0.0,
            y_max: 50.0,
        }
    }
}

impl AxisBounds {
    pub fn validate(&self) -> Result<(), CstrError> {
        let all = [self.x_min, self.x_max, self.y_min, self.y_max];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(CstrError::Validation(
                "axis bounds must be finite".to_string(),
            ));
        }
        if self.x_max <= self.x_min {
            return Err(CstrError::Validation(format!(
                "x axis upper bound {} must exceed lower bound {}",
                self.x_max, self.x_min
            )));
        }
        if self.y_max <= self.y_min {
            return Err(CstrError::Validation(format!(
                "y axis upper bound {} must exceed lower bound {}",
                self.y_max, self.y_min
            )));
        }
        Ok(())
    }

    pub fn contains_x(&self, x: f64) -> bool {
        (self.x_min..=self.x_max).contains(&x)
    }

    pub fn contains_y(&self, y: f64) -> bool {
        (self.y_min..=self.y_max).contains(&y)
    }
}
