use serde::Serialize;

use crate::analysis::EconomicParameter;
use crate::config::ScenarioConfig;

/// Shared, read-only server state: the initial values shown by the page.
///
/// Requests never mutate it; each one carries its own parameter snapshot.
pub struct AppState {
    pub defaults: ScenarioConfig,
}

/// Control range for one economic parameter.
#[derive(Debug, Serialize)]
pub struct SliderSpec {
    pub parameter: EconomicParameter,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
}

impl AppState {
    pub fn new(defaults: ScenarioConfig) -> Self {
        Self { defaults }
    }

    pub fn sliders(&self) -> Vec<SliderSpec> {
        EconomicParameter::ALL
            .iter()
            .map(|&parameter| {
                let (min, max) = parameter.slider_bounds();
                SliderSpec {
                    parameter,
                    label: parameter.label(),
                    min,
                    max,
                }
            })
            .collect()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ScenarioConfig::default())
    }
}
