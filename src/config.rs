use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::Scenario;
use crate::error::CstrError;
use crate::models::{EconomicParameters, ReactorParameters, VolumeRange};
use crate::visualization::AxisBounds;

/// `[range]` table of the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeConfig {
    /// Largest reactor volume to sample, m^3
    pub v_max: f64,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            v_max: VolumeRange::default().max,
        }
    }
}

/// Scenario file contents. Every table and field is optional.
///
/// ```toml
/// [reactor]
/// feed_concentration = 1000.0
/// rate_constant = 0.01
/// flow_rate = 0.001
///
/// [economics]
/// product_price = 60.0
///
/// [range]
/// v_max = 6.0
///
/// [display]
/// x_max = 4.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub reactor: ReactorParameters,
    pub economics: EconomicParameters,
    pub range: RangeConfig,
    pub display: AxisBounds,
}

impl ScenarioConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, CstrError> {
        Ok(toml::from_str(content)?)
    }

    pub fn scenario(&self) -> Scenario {
        Scenario::new(self.reactor, self.economics, VolumeRange::up_to(self.range.v_max))
    }
}

/// Load a scenario configuration from a TOML file.
pub fn load_config(path: impl AsRef<Path>) -> Result<ScenarioConfig, CstrError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let config = ScenarioConfig::from_toml_str(&content)?;
    tracing::debug!(path = %path.display(), "loaded scenario config");
    Ok(config)
}
