use serde::{Deserialize, Serialize};

/// Fixed operating conditions of the reactor for one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactorParameters {
    /// Inlet concentration of reagent A in mol/m^3
    pub feed_concentration: f64,
    /// First-order rate constant in 1/s
    pub rate_constant: f64,
    /// Volumetric flow rate in m^3/s
    pub flow_rate: f64,
}

impl Default for ReactorParameters {
    fn default() -> Self {
        Self {
            feed_concentration: 1000.0,
            rate_constant: 0.01,
            flow_rate: 0.001,
        }
    }
}

/// Prices and cost-scaling coefficients.
///
/// Capital and operating costs scale with reactor volume as
/// `capital_cost_coeff * V^capital_exponent + operating_cost_coeff * V^operating_exponent`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomicParameters {
    /// Price paid for reagent A in €/mol
    pub reagent_price: f64,
    /// Price obtained for product B in €/mol
    pub product_price: f64,
    pub capital_cost_coeff: f64,
    pub operating_cost_coeff: f64,
    pub capital_exponent: f64,
    pub operating_exponent: f64,
}

impl Default for EconomicParameters {
    fn default() -> Self {
        Self {
            reagent_price: 10.0,
            product_price: 50.0,
            capital_cost_coeff: 0.5,
            operating_cost_coeff: 0.2,
            capital_exponent: 1.0,
            operating_exponent: 1.0,
        }
    }
}
