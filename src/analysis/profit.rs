use serde::{Deserialize, Serialize};

use crate::error::CstrError;
use crate::models::{EconomicParameters, ReactorParameters};

/// Steady-state conversion of a first-order reaction in a CSTR.
///
/// `X = k*tau / (1 + k*tau)`, which lies in `[0, 1)` for non-negative inputs.
pub fn conversion_factor(rate_constant: f64, residence_time: f64) -> f64 {
    let damkohler = rate_constant * residence_time;
    damkohler / (1.0 + damkohler)
}

/// Every intermediate term of the profit model at a single reactor volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitBreakdown {
    pub volume: f64,
    /// Residence time in s
    pub residence_time: f64,
    pub conversion: f64,
    /// €/s
    pub revenue: f64,
    /// €/s
    pub capital_operating_cost: f64,
    /// €/s
    pub reagent_cost: f64,
    /// €/s
    pub profit: f64,
}

impl ProfitBreakdown {
    /// Evaluate the reactor/economic model at `volume`.
    ///
    /// Fails with [`CstrError::DivisionByZero`] when the flow rate is zero and
    /// with [`CstrError::NumericDomain`] when a cost term would be a fractional
    /// power of a negative number or the result is NaN.
    pub fn compute(
        volume: f64,
        reactor: &ReactorParameters,
        economics: &EconomicParameters,
    ) -> Result<Self, CstrError> {
        if reactor.flow_rate == 0.0 {
            return Err(CstrError::DivisionByZero(format!(
                "flow rate must be non-zero to compute residence time (volume {volume})"
            )));
        }

        let residence_time = volume / reactor.flow_rate;
        let conversion = conversion_factor(reactor.rate_constant, residence_time);
        let revenue =
            reactor.flow_rate * reactor.feed_concentration * conversion * economics.product_price;

        // F*tau, not V: rounding must match previously exported curves.
        let throughput_volume = reactor.flow_rate * residence_time;
        let capital_operating_cost = economics.capital_cost_coeff
            * checked_powf(throughput_volume, economics.capital_exponent)?
            + economics.operating_cost_coeff
                * checked_powf(throughput_volume, economics.operating_exponent)?;

        let reagent_cost =
            economics.reagent_price * reactor.flow_rate * reactor.feed_concentration;
        let profit = revenue - capital_operating_cost - reagent_cost;

        if profit.is_nan() {
            return Err(CstrError::NumericDomain(format!(
                "profit at volume {volume} is not a number"
            )));
        }

        Ok(Self {
            volume,
            residence_time,
            conversion,
            revenue,
            capital_operating_cost,
            reagent_cost,
            profit,
        })
    }
}

fn checked_powf(base: f64, exponent: f64) -> Result<f64, CstrError> {
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(CstrError::NumericDomain(format!(
            "cannot raise negative volume {base} to fractional power {exponent}"
        )));
    }
    Ok(base.powf(exponent))
}

/// Profit rate (€/s) of the reactor at the given volume.
pub fn evaluate(
    volume: f64,
    reactor: &ReactorParameters,
    economics: &EconomicParameters,
) -> Result<f64, CstrError> {
    Ok(ProfitBreakdown::compute(volume, reactor, economics)?.profit)
}
