//! Property-based tests for the ROI calculator.

use proptest::prelude::*;
use solarscan_core::roi::{COST_PER_WATT, INCENTIVE_RATE, PANEL_WATTS_PER_SQM};
use solarscan_core::{analyze_response, ElectricityRate, RoiCalculator, RoiProjection};

proptest! {
    #[test]
    fn prop_compute_is_deterministic(
        area in 0.1f64..5000.0,
        kwh in 0.0f64..100_000.0,
        rate in 0.0f64..2.0,
    ) {
        let first = RoiCalculator::compute(area, kwh, rate);
        let second = RoiCalculator::compute(area, kwh, rate);

        prop_assert_eq!(first.total_watts.to_bits(), second.total_watts.to_bits());
        prop_assert_eq!(first.net_cost.to_bits(), second.net_cost.to_bits());
        prop_assert_eq!(first.annual_savings.to_bits(), second.annual_savings.to_bits());
        prop_assert_eq!(
            first.payback_period_years.to_bits(),
            second.payback_period_years.to_bits()
        );
    }

    #[test]
    fn prop_cost_chain_is_consistent(area in 0.1f64..5000.0) {
        let projection = RoiCalculator::compute(area, 1000.0, 0.1);

        prop_assert_eq!(projection.total_watts, area * PANEL_WATTS_PER_SQM);
        prop_assert_eq!(projection.installation_cost, projection.total_watts * COST_PER_WATT);
        prop_assert_eq!(projection.incentive, projection.installation_cost * INCENTIVE_RATE);
        prop_assert_eq!(projection.net_cost, projection.installation_cost - projection.incentive);
    }

    #[test]
    fn prop_positive_savings_pay_back(
        area in 0.1f64..5000.0,
        kwh in 1.0f64..100_000.0,
        rate in 0.01f64..2.0,
    ) {
        let projection = RoiCalculator::compute(area, kwh, rate);
        prop_assert!(projection.pays_back());
        prop_assert!(projection.payback_period_years > 0.0);
    }

    #[test]
    fn prop_no_savings_never_pay_back(area in 0.1f64..5000.0, rate in 0.0f64..2.0) {
        let projection = RoiCalculator::compute(area, 0.0, rate);
        prop_assert_eq!(projection.payback_period_years, f64::INFINITY);
        prop_assert_eq!(projection.payback_display(), "N/A");
    }
}

#[test]
fn test_analyze_response_end_to_end() {
    let response = r#"Here you go:
```json
{
  "roof_area_sqm": 100,
  "azimuth_degrees": 180,
  "tilt_degrees": 30,
  "shading_percentage": 15,
  "suggested_panel_type": "Monocrystalline PERC",
  "estimated_annual_kwh": 10000
}
```"#;

    let rate = ElectricityRate::new(0.15).unwrap();
    let analysis = analyze_response(response, rate).unwrap();

    assert_eq!(analysis.attributes.suggested_panel_type, "Monocrystalline PERC");
    assert_eq!(analysis.projection.total_watts, 20000.0);
    assert_eq!(analysis.projection.net_cost, 42000.0);
    assert_eq!(analysis.projection.payback_display(), "28.00 years");
}

#[test]
fn test_analyze_response_propagates_parse_errors() {
    let rate = ElectricityRate::default();
    let err = analyze_response("The image is too blurry to analyze.", rate).unwrap_err();
    assert_eq!(err.category(), "no JSON found");
}

#[test]
fn test_zero_yield_projection_survives_json() {
    let projection = RoiCalculator::compute(50.0, 0.0, 0.15);
    let text = serde_json::to_string(&projection).unwrap();
    assert!(text.contains("\"payback_period_years\":null"));

    let restored: RoiProjection = serde_json::from_str(&text).unwrap();
    assert_eq!(restored, projection);
    assert_eq!(restored.payback_period_years, f64::INFINITY);
}
