//! ROI projection for a rooftop solar installation.

use tracing::debug;

use crate::models::{ElectricityRate, RoiProjection, RoofAttributes};

/// Panel conversion efficiency assumed by the power density below.
pub const PANEL_EFFICIENCY: f64 = 0.20;

/// Installed cost in dollars per watt of capacity.
pub const COST_PER_WATT: f64 = 3.0;

/// Share of the installation cost returned as a tax credit.
pub const INCENTIVE_RATE: f64 = 0.30;

/// Nameplate power per square meter of panel at [`PANEL_EFFICIENCY`].
pub const PANEL_WATTS_PER_SQM: f64 = 200.0;

/// Computes financial projections from roof attributes.
///
/// All assumptions are fixed constants; the calculator holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoiCalculator;

impl RoiCalculator {
    /// Compute the projection from raw inputs.
    ///
    /// Inputs must already satisfy the attribute constraints enforced by the
    /// response parser. When annual savings are not positive the payback
    /// period is `f64::INFINITY`.
    pub fn compute(
        roof_area_sqm: f64,
        estimated_annual_kwh: f64,
        electricity_rate: f64,
    ) -> RoiProjection {
        let total_watts = roof_area_sqm * PANEL_WATTS_PER_SQM;
        let installation_cost = total_watts * COST_PER_WATT;
        let incentive = installation_cost * INCENTIVE_RATE;
        let net_cost = installation_cost - incentive;
        let annual_savings = estimated_annual_kwh * electricity_rate;
        let payback_period_years = if annual_savings > 0.0 {
            net_cost / annual_savings
        } else {
            f64::INFINITY
        };

        debug!(
            total_watts,
            net_cost, annual_savings, payback_period_years, "Computed ROI projection"
        );

        RoiProjection {
            total_watts,
            installation_cost,
            incentive,
            net_cost,
            annual_savings,
            payback_period_years,
        }
    }

    /// Compute the projection for parsed attributes.
    pub fn compute_for(attributes: &RoofAttributes, rate: ElectricityRate) -> RoiProjection {
        Self::compute(
            attributes.roof_area_sqm,
            attributes.estimated_annual_kwh,
            rate.value(),
        )
    }
}
