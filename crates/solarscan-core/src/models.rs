//! Data models for roof attributes, ROI projections, and caller inputs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Electricity rate used when the caller does not supply one ($/kWh).
pub const DEFAULT_ELECTRICITY_RATE: f64 = 0.15;

/// Location used when the caller does not supply one.
pub const DEFAULT_LOCATION: &str = "San Francisco, CA";

/// Solar-relevant attributes of a rooftop, as estimated by a vision model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoofAttributes {
    /// Usable roof area in square meters (> 0)
    pub roof_area_sqm: f64,
    /// Compass orientation of the roof face in degrees (0-360)
    pub azimuth_degrees: f64,
    /// Roof pitch in degrees (0-90)
    pub tilt_degrees: f64,
    /// Share of the roof in shade, in percent (0-100)
    pub shading_percentage: f64,
    /// Free-form panel recommendation
    pub suggested_panel_type: String,
    /// Estimated yearly yield in kWh (>= 0)
    pub estimated_annual_kwh: f64,
}

/// Financial projection for a rooftop installation.
///
/// `payback_period_years` is `f64::INFINITY` when the installation never
/// pays back (no positive annual savings). It serializes as `null` and
/// `null` reads back as infinity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiProjection {
    /// Nameplate system size in watts
    pub total_watts: f64,
    /// Gross installation cost in dollars
    pub installation_cost: f64,
    /// Tax incentive in dollars
    pub incentive: f64,
    /// Installation cost after incentive
    pub net_cost: f64,
    /// Yearly savings on the electricity bill
    pub annual_savings: f64,
    /// Years until savings cover the net cost
    #[serde(with = "payback_years")]
    pub payback_period_years: f64,
}

mod payback_years {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(years: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if years.is_finite() {
            serializer.serialize_f64(*years)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

impl RoiProjection {
    /// Whether the installation ever pays for itself.
    pub fn pays_back(&self) -> bool {
        self.payback_period_years.is_finite()
    }

    /// Payback period formatted for display, `"N/A"` if it never pays back.
    pub fn payback_display(&self) -> String {
        if self.pays_back() {
            format!("{:.2} years", self.payback_period_years)
        } else {
            "N/A".to_string()
        }
    }
}

/// Price of grid electricity in dollars per kWh.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ElectricityRate(f64);

impl ElectricityRate {
    /// Create a rate, rejecting negative and non-finite values.
    pub fn new(dollars_per_kwh: f64) -> Result<Self, InputError> {
        if !dollars_per_kwh.is_finite() || dollars_per_kwh < 0.0 {
            return Err(InputError::InvalidRate(dollars_per_kwh));
        }
        Ok(Self(dollars_per_kwh))
    }

    /// Rate in dollars per kWh.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for ElectricityRate {
    fn default() -> Self {
        Self(DEFAULT_ELECTRICITY_RATE)
    }
}

impl TryFrom<f64> for ElectricityRate {
    type Error = InputError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ElectricityRate> for f64 {
    fn from(rate: ElectricityRate) -> Self {
        rate.0
    }
}

impl fmt::Display for ElectricityRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}/kWh", self.0)
    }
}

/// Free-form location of the rooftop, e.g. "City, State".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Location(String);

impl Location {
    /// Create a location from user input, trimming surrounding whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, InputError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(InputError::EmptyLocation);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The location text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Location {
    fn default() -> Self {
        Self(DEFAULT_LOCATION.to_string())
    }
}

impl TryFrom<String> for Location {
    type Error = InputError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Location> for String {
    fn from(location: Location) -> Self {
        location.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parsed attributes together with the projection computed from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RooftopAnalysis {
    /// Attributes extracted from the model response
    pub attributes: RoofAttributes,
    /// ROI projection for those attributes
    pub projection: RoiProjection,
}
