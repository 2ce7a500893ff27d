use serde::{Deserialize, Serialize};

use super::optimizer::find_optimum;
use crate::error::CstrError;
use crate::models::{EconomicParameters, ReactorParameters, VolumeRange};

/// An economic parameter that can be varied while the rest stay fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EconomicParameter {
    ReagentPrice,
    ProductPrice,
    CapitalCostCoeff,
    OperatingCostCoeff,
    CapitalExponent,
    OperatingExponent,
}

impl EconomicParameter {
    pub const ALL: [EconomicParameter; 6] = [
        EconomicParameter::ReagentPrice,
        EconomicParameter::ProductPrice,
        EconomicParameter::CapitalCostCoeff,
        EconomicParameter::OperatingCostCoeff,
        EconomicParameter::CapitalExponent,
        EconomicParameter::OperatingExponent,
    ];

    /// Control range offered to users for this parameter.
    pub fn slider_bounds(&self) -> (f64, f64) {
        match self {
            EconomicParameter::ReagentPrice => (0.0, 50.0),
            EconomicParameter::ProductPrice => (0.0, 100.0),
            EconomicParameter::CapitalCostCoeff | EconomicParameter::OperatingCostCoeff => {
                (0.0, 2.0)
            }
            EconomicParameter::CapitalExponent | EconomicParameter::OperatingExponent => {
                (0.5, 2.0)
            }
        }
    }

    pub fn get(&self, economics: &EconomicParameters) -> f64 {
        match self {
            EconomicParameter::ReagentPrice => economics.reagent_price,
            EconomicParameter::ProductPrice => economics.product_price,
            EconomicParameter::CapitalCostCoeff => economics.capital_cost_coeff,
            EconomicParameter::OperatingCostCoeff => economics.operating_cost_coeff,
            EconomicParameter::CapitalExponent => economics.capital_exponent,
            EconomicParameter::OperatingExponent => economics.operating_exponent,
        }
    }

    /// Copy of `economics` with this parameter replaced by `value`.
    pub fn with_value(&self, economics: &EconomicParameters, value: f64) -> EconomicParameters {
        let mut updated = *economics;
        match self {
            EconomicParameter::ReagentPrice => updated.reagent_price = value,
            EconomicParameter::ProductPrice => updated.product_price = value,
            EconomicParameter::CapitalCostCoeff => updated.capital_cost_coeff = value,
            EconomicParameter::OperatingCostCoeff => updated.operating_cost_coeff = value,
            EconomicParameter::CapitalExponent => updated.capital_exponent = value,
            EconomicParameter::OperatingExponent => updated.operating_exponent = value,
        }
        updated
    }

    /// Short label with unit, as shown next to the control.
    pub fn label(&self) -> &'static str {
        match self {
            EconomicParameter::ReagentPrice => "P_A (€/mol)",
            EconomicParameter::ProductPrice => "P_B (€/mol)",
            EconomicParameter::CapitalCostCoeff => "C_C (coeff)",
            EconomicParameter::OperatingCostCoeff => "C_O (coeff)",
            EconomicParameter::CapitalExponent => "m (exp)",
            EconomicParameter::OperatingExponent => "n (exp)",
        }
    }
}

impl std::fmt::Display for EconomicParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EconomicParameter::ReagentPrice => write!(f, "reagent_price"),
            EconomicParameter::ProductPrice => write!(f, "product_price"),
            EconomicParameter::CapitalCostCoeff => write!(f, "capital_cost_coeff"),
            EconomicParameter::OperatingCostCoeff => write!(f, "operating_cost_coeff"),
            EconomicParameter::CapitalExponent => write!(f, "capital_exponent"),
            EconomicParameter::OperatingExponent => write!(f, "operating_exponent"),
        }
    }
}

impl std::str::FromStr for EconomicParameter {
    type Err = CstrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "reagent_price" | "pa" | "p_a" => Ok(EconomicParameter::ReagentPrice),
            "product_price" | "pb" | "p_b" => Ok(EconomicParameter::ProductPrice),
            "capital_cost_coeff" | "capital_coeff" | "cc" | "c_c" => {
                Ok(EconomicParameter::CapitalCostCoeff)
            }
            "operating_cost_coeff" | "operating_coeff" | "co" | "c_o" => {
                Ok(EconomicParameter::OperatingCostCoeff)
            }
            "capital_exponent" | "m" => Ok(EconomicParameter::CapitalExponent),
            "operating_exponent" | "n" => Ok(EconomicParameter::OperatingExponent),
            _ => Err(CstrError::ParseError(format!(
                "Unknown economic parameter: '{s}'"
            ))),
        }
    }
}

/// Upper limit on the number of parameter values in one sweep.
pub const MAX_SWEEP_STEPS: usize = 101;

/// Optimum found for one value of the swept parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub value: f64,
    pub optimal_volume: f64,
    pub max_profit: f64,
}

/// Re-run the optimiser at `steps` evenly spaced values of `parameter`
/// between `lower` and `upper` inclusive.
pub fn sweep(
    range: &VolumeRange,
    reactor: &ReactorParameters,
    economics: &EconomicParameters,
    parameter: EconomicParameter,
    lower: f64,
    upper: f64,
    steps: usize,
) -> Result<Vec<SweepPoint>, CstrError> {
    if steps < 2 {
        return Err(CstrError::Validation(format!(
            "sweep needs at least 2 steps, got {steps}"
        )));
    }
    if steps > MAX_SWEEP_STEPS {
        return Err(CstrError::Validation(format!(
            "sweep allows at most {MAX_SWEEP_STEPS} steps, got {steps}"
        )));
    }
    if !lower.is_finite() || !upper.is_finite() || upper < lower {
        return Err(CstrError::Validation(format!(
            "sweep interval for {parameter} must be finite and ascending, got [{lower}, {upper}]"
        )));
    }

    let step = (upper - lower) / (steps - 1) as f64;
    (0..steps)
        .map(|i| {
            let value = if i == steps - 1 {
                upper
            } else {
                lower + i as f64 * step
            };
            let adjusted = parameter.with_value(economics, value);
            let (_, optimum) = find_optimum(range, reactor, &adjusted)?;
            Ok(SweepPoint {
                value,
                optimal_volume: optimum.optimal_volume,
                max_profit: optimum.max_profit,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_parse_parameter_names() {
        assert_eq!(
            "product_price".parse::<EconomicParameter>().unwrap(),
            EconomicParameter::ProductPrice
        );
        assert_eq!(
            "PA".parse::<EconomicParameter>().unwrap(),
            EconomicParameter::ReagentPrice
        );
        assert_eq!(
            "operating-cost-coeff".parse::<EconomicParameter>().unwrap(),
            EconomicParameter::OperatingCostCoeff
        );
        assert_eq!(
            "m".parse::<EconomicParameter>().unwrap(),
            EconomicParameter::CapitalExponent
        );
    }

    #[test]
    fn test_parse_unknown_parameter() {
        let err = "interest_rate".parse::<EconomicParameter>().unwrap_err();
        assert!(matches!(err, CstrError::ParseError(_)));
    }

    #[test]
    fn test_display_parses_back() {
        for p in EconomicParameter::ALL {
            assert_eq!(p.to_string().parse::<EconomicParameter>().unwrap(), p);
        }
    }

    #[test]
    fn test_with_value_only_changes_one_field() {
        let base = EconomicParameters::default();
        let changed = EconomicParameter::CapitalExponent.with_value(&base, 1.7);
        assert_eq!(changed.capital_exponent, 1.7);
        assert_eq!(changed.operating_exponent, base.operating_exponent);
        assert_eq!(EconomicParameter::CapitalExponent.get(&changed), 1.7);
    }

    #[test]
    fn test_defaults_lie_within_slider_bounds() {
        let e = EconomicParameters::default();
        for p in EconomicParameter::ALL {
            let (lo, hi) = p.slider_bounds();
            let v = p.get(&e);
            assert!(v >= lo && v <= hi, "{p} = {v} outside [{lo}, {hi}]");
        }
    }

    #[test]
    fn test_sweep_product_price_raises_profit() {
        let points = sweep(
            &VolumeRange::up_to(6.0),
            &ReactorParameters::default(),
            &EconomicParameters::default(),
            EconomicParameter::ProductPrice,
            20.0,
            80.0,
            4,
        )
        .unwrap();
        assert_eq!(points.len(), 4);
        assert_approx_eq!(points[0].value, 20.0);
        assert_eq!(points[3].value, 80.0);
        assert!(points.windows(2).all(|w| w[1].max_profit >= w[0].max_profit));
        assert!(points.windows(2).all(|w| w[1].optimal_volume >= w[0].optimal_volume));
    }

    #[test]
    fn test_sweep_rejects_single_step() {
        let err = sweep(
            &VolumeRange::up_to(6.0),
            &ReactorParameters::default(),
            &EconomicParameters::default(),
            EconomicParameter::ReagentPrice,
            0.0,
            50.0,
            1,
        )
        .unwrap_err();
        assert!(matches!(err, CstrError::Validation(_)));
    }

    #[test]
    fn test_sweep_rejects_too_many_steps() {
        let err = sweep(
            &VolumeRange::up_to(6.0),
            &ReactorParameters::default(),
            &EconomicParameters::default(),
            EconomicParameter::ReagentPrice,
            0.0,
            50.0,
            MAX_SWEEP_STEPS + 1,
        )
        .unwrap_err();
        assert!(matches!(err, CstrError::Validation(_)));
    }

    #[test]
    fn test_sweep_accepts_step_limit() {
        let points = sweep(
            &VolumeRange::up_to(1.0),
            &ReactorParameters::default(),
            &EconomicParameters::default(),
            EconomicParameter::ReagentPrice,
            0.0,
            50.0,
            MAX_SWEEP_STEPS,
        )
        .unwrap();
        assert_eq!(points.len(), MAX_SWEEP_STEPS);
    }

    #[test]
    fn test_sweep_rejects_inverted_interval() {
        assert!(sweep(
            &VolumeRange::up_to(6.0),
            &ReactorParameters::default(),
            &EconomicParameters::default(),
            EconomicParameter::ReagentPrice,
            50.0,
            0.0,
            5,
        )
        .is_err());
    }

    #[test]
    fn test_sweep_propagates_invalid_range() {
        let err = sweep(
            &VolumeRange::up_to(0.0),
            &ReactorParameters::default(),
            &EconomicParameters::default(),
            EconomicParameter::ReagentPrice,
            0.0,
            50.0,
            3,
        )
        .unwrap_err();
        assert!(matches!(err, CstrError::InvalidRange(_)));
    }
}
