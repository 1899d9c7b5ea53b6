//! Rooftop solar assessment core.
//!
//! This crate turns the text returned by a vision model into validated
//! [`RoofAttributes`] and computes an [`RoiProjection`] from them:
//! - JSON span extraction from fenced or prose-wrapped responses
//! - All-or-nothing field validation
//! - Fixed-assumption ROI and payback calculation

pub mod error;
pub mod extraction;
pub mod models;
pub mod parser;
pub mod roi;

pub use error::{InputError, ParseError, ParseResult};
pub use extraction::{BraceSpanExtractor, JsonExtractor};
pub use models::{
    ElectricityRate, Location, RoiProjection, RoofAttributes, RooftopAnalysis,
    DEFAULT_ELECTRICITY_RATE, DEFAULT_LOCATION,
};
pub use parser::{parse, ResponseParser, REQUIRED_FIELDS};
pub use roi::RoiCalculator;

/// Parse a model response and compute the projection for it.
pub fn analyze_response(raw_text: &str, rate: ElectricityRate) -> ParseResult<RooftopAnalysis> {
    let attributes = parse(raw_text)?;
    let projection = RoiCalculator::compute_for(&attributes, rate);
    Ok(RooftopAnalysis {
        attributes,
        projection,
    })
}
