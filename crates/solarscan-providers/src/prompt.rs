//! Prompt construction for rooftop analysis

use solarscan_core::{ElectricityRate, Location};

/// Build the instruction sent alongside the rooftop image.
///
/// The field list matches what the response parser requires.
pub fn build_prompt(location: &Location, rate: ElectricityRate) -> String {
    format!(
        "Analyze the provided satellite image of a rooftop for solar panel installation potential.\n\
         Respond with a single JSON object containing exactly these fields:\n\
         - roof_area_sqm: float\n\
         - azimuth_degrees: float\n\
         - tilt_degrees: float\n\
         - shading_percentage: float\n\
         - suggested_panel_type: string\n\
         - estimated_annual_kwh: float\n\
         \n\
         Additional context:\n\
         - Location: {}\n\
         - Electricity rate: ${}/kWh\n",
        location,
        rate.value()
    )
}
