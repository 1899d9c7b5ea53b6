//! Parsing model responses into [`RoofAttributes`].
//!
//! Parsing runs in three steps: extract the candidate JSON span, decode it
//! into a generic map, then validate the six required fields. The record is
//! all-or-nothing; any missing field fails the whole parse.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{ParseError, ParseResult};
use crate::extraction::{BraceSpanExtractor, JsonExtractor};
use crate::models::RoofAttributes;

/// Names of the fields every response must carry, in validation order.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "roof_area_sqm",
    "azimuth_degrees",
    "tilt_degrees",
    "shading_percentage",
    "suggested_panel_type",
    "estimated_annual_kwh",
];

/// Parse a model response with the default brace-span extractor.
pub fn parse(raw_text: &str) -> ParseResult<RoofAttributes> {
    ResponseParser::new().parse(raw_text)
}

/// Turns loosely formatted model output into validated roof attributes.
#[derive(Debug, Clone, Default)]
pub struct ResponseParser<E = BraceSpanExtractor> {
    extractor: E,
}

impl ResponseParser<BraceSpanExtractor> {
    /// Create a parser using first-`{`/last-`}` extraction.
    pub fn new() -> Self {
        Self {
            extractor: BraceSpanExtractor,
        }
    }
}

impl<E: JsonExtractor> ResponseParser<E> {
    /// Create a parser with a custom extraction step.
    pub fn with_extractor(extractor: E) -> Self {
        Self { extractor }
    }

    /// Parse a raw model response.
    ///
    /// # Errors
    ///
    /// * [`ParseError::NoJsonFound`] if no JSON span can be located
    /// * [`ParseError::MalformedJson`] if the span is not a JSON object
    /// * [`ParseError::MissingField`] if a field is absent or mistyped
    /// * [`ParseError::InvalidValue`] if a field is out of range
    pub fn parse(&self, raw_text: &str) -> ParseResult<RoofAttributes> {
        debug!(response_len = raw_text.len(), "Parsing model response");

        let Some(candidate) = self.extractor.extract(raw_text) else {
            debug!("No JSON object found in model response");
            return Err(ParseError::NoJsonFound {
                raw: raw_text.to_string(),
            });
        };

        let object = decode_object(candidate, raw_text)?;
        let attributes = FieldReader::new(&object, raw_text).read()?;
        validate_ranges(&attributes, raw_text)?;

        debug!(
            roof_area_sqm = attributes.roof_area_sqm,
            estimated_annual_kwh = attributes.estimated_annual_kwh,
            "Parsed roof attributes"
        );
        Ok(attributes)
    }
}

fn decode_object(candidate: &str, raw_text: &str) -> ParseResult<Map<String, Value>> {
    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ParseError::MalformedJson {
            reason: format!("expected a JSON object, found {}", json_kind(&other)),
            raw: raw_text.to_string(),
        }),
        Err(e) => {
            debug!(error = %e, "Model response is not valid JSON");
            Err(ParseError::MalformedJson {
                reason: e.to_string(),
                raw: raw_text.to_string(),
            })
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Reads typed fields out of a decoded object.
struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    raw: &'a str,
}

impl<'a> FieldReader<'a> {
    fn new(object: &'a Map<String, Value>, raw: &'a str) -> Self {
        Self { object, raw }
    }

    fn read(&self) -> ParseResult<RoofAttributes> {
        Ok(RoofAttributes {
            roof_area_sqm: self.number(REQUIRED_FIELDS[0])?,
            azimuth_degrees: self.number(REQUIRED_FIELDS[1])?,
            tilt_degrees: self.number(REQUIRED_FIELDS[2])?,
            shading_percentage: self.number(REQUIRED_FIELDS[3])?,
            suggested_panel_type: self.text(REQUIRED_FIELDS[4])?,
            estimated_annual_kwh: self.number(REQUIRED_FIELDS[5])?,
        })
    }

    fn number(&self, field: &'static str) -> ParseResult<f64> {
        self.object
            .get(field)
            .and_then(Value::as_f64)
            .ok_or_else(|| self.missing(field))
    }

    fn text(&self, field: &'static str) -> ParseResult<String> {
        self.object
            .get(field)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| self.missing(field))
    }

    fn missing(&self, field: &'static str) -> ParseError {
        debug!(field, "Required field missing from model response");
        ParseError::MissingField {
            field,
            raw: self.raw.to_string(),
        }
    }
}

fn validate_ranges(attributes: &RoofAttributes, raw_text: &str) -> ParseResult<()> {
    let invalid = |field: &'static str, reason: &str| {
        debug!(field, reason, "Field out of range in model response");
        Err(ParseError::InvalidValue {
            field,
            reason: reason.to_string(),
            raw: raw_text.to_string(),
        })
    };

    if attributes.roof_area_sqm <= 0.0 {
        return invalid("roof_area_sqm", "must be greater than 0");
    }
    if !(0.0..=360.0).contains(&attributes.azimuth_degrees) {
        return invalid("azimuth_degrees", "must be between 0 and 360");
    }
    if !(0.0..=90.0).contains(&attributes.tilt_degrees) {
        return invalid("tilt_degrees", "must be between 0 and 90");
    }
    if !(0.0..=100.0).contains(&attributes.shading_percentage) {
        return invalid("shading_percentage", "must be between 0 and 100");
    }
    if attributes.suggested_panel_type.trim().is_empty() {
        return invalid("suggested_panel_type", "must not be empty");
    }
    if attributes.estimated_annual_kwh < 0.0 {
        return invalid("estimated_annual_kwh", "must be 0 or greater");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "roof_area_sqm": 120.5,
        "azimuth_degrees": 180,
        "tilt_degrees": 25.0,
        "shading_percentage": 10.0,
        "suggested_panel_type": "Monocrystalline",
        "estimated_annual_kwh": 14500.0
    }"#;

    fn with_field(field: &str, value: Value) -> String {
        let mut object: Map<String, Value> = serde_json::from_str(VALID).unwrap();
        object.insert(field.to_string(), value);
        Value::Object(object).to_string()
    }

    #[test]
    fn test_parse_valid_object() {
        let attributes = parse(VALID).unwrap();
        assert_eq!(attributes.roof_area_sqm, 120.5);
        assert_eq!(attributes.azimuth_degrees, 180.0);
        assert_eq!(attributes.tilt_degrees, 25.0);
        assert_eq!(attributes.shading_percentage, 10.0);
        assert_eq!(attributes.suggested_panel_type, "Monocrystalline");
        assert_eq!(attributes.estimated_annual_kwh, 14500.0);
    }

    #[test]
    fn test_parse_fenced_with_prose() {
        let text = format!("Sure! Here is the analysis:\n```json\n{}\n```\nLet me know.", VALID);
        assert_eq!(parse(&text).unwrap(), parse(VALID).unwrap());
    }

    #[test]
    fn test_no_json_found() {
        let err = parse("no braces here").unwrap_err();
        assert!(matches!(err, ParseError::NoJsonFound { .. }));
        assert_eq!(err.raw_text(), "no braces here");
    }

    #[test]
    fn test_malformed_json() {
        let text = "prefix {not: valid json} suffix";
        let err = parse(text).unwrap_err();
        assert!(matches!(err, ParseError::MalformedJson { .. }));
        assert_eq!(err.raw_text(), text);
    }

    #[test]
    fn test_missing_field() {
        let err = parse(r#"{"roof_area_sqm": 10.0}"#).unwrap_err();
        assert_eq!(err.field(), Some("azimuth_degrees"));
        assert!(matches!(err, ParseError::MissingField { .. }));
    }

    #[test]
    fn test_wrong_type_is_missing_field() {
        let text = with_field("tilt_degrees", Value::String("25".to_string()));
        let err = parse(&text).unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingField {
                field: "tilt_degrees",
                raw: text.clone(),
            }
        );

        let text = with_field("suggested_panel_type", serde_json::json!(3));
        let err = parse(&text).unwrap_err();
        assert_eq!(err.field(), Some("suggested_panel_type"));
    }

    #[test]
    fn test_null_field_is_missing() {
        let text = with_field("estimated_annual_kwh", Value::Null);
        let err = parse(&text).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingField {
                field: "estimated_annual_kwh",
                ..
            }
        ));
    }

    #[test]
    fn test_out_of_range_values() {
        let cases = [
            ("roof_area_sqm", serde_json::json!(0.0)),
            ("azimuth_degrees", serde_json::json!(361.0)),
            ("tilt_degrees", serde_json::json!(-1.0)),
            ("shading_percentage", serde_json::json!(100.5)),
            ("suggested_panel_type", serde_json::json!("   ")),
            ("estimated_annual_kwh", serde_json::json!(-5.0)),
        ];

        for (field, value) in cases {
            let err = parse(&with_field(field, value)).unwrap_err();
            assert!(
                matches!(err, ParseError::InvalidValue { .. }),
                "expected InvalidValue for {}",
                field
            );
            assert_eq!(err.field(), Some(field));
        }
    }

    #[test]
    fn test_boundary_values_accepted() {
        let text = with_field("azimuth_degrees", serde_json::json!(360));
        assert!(parse(&text).is_ok());
        let text = with_field("tilt_degrees", serde_json::json!(90));
        assert!(parse(&text).is_ok());
        let text = with_field("estimated_annual_kwh", serde_json::json!(0));
        assert!(parse(&text).is_ok());
    }

    #[test]
    fn test_array_payloads() {
        let err = parse(r#"[{"roof_area_sqm": 1}]"#).unwrap_err();
        // The span between the braces is an object missing fields, not an array.
        assert!(matches!(err, ParseError::MissingField { .. }));

        let err = ResponseParser::with_extractor(WholeText).parse("[1, 2]").unwrap_err();
        assert!(matches!(err, ParseError::MalformedJson { .. }));
    }

    #[test]
    fn test_extra_keys_are_ignored() {
        let text = with_field("confidence", serde_json::json!(0.8));
        assert!(parse(&text).is_ok());
    }

    struct WholeText;

    impl JsonExtractor for WholeText {
        fn extract<'a>(&self, text: &'a str) -> Option<&'a str> {
            Some(text)
        }
    }

    #[test]
    fn test_custom_extractor() {
        let parser = ResponseParser::with_extractor(WholeText);
        assert!(parser.parse(VALID).is_ok());

        let err = parser.parse("```json\n{}\n```").unwrap_err();
        assert!(matches!(err, ParseError::MalformedJson { .. }));
    }
}
