//! Locating the JSON payload inside free-form model output.
//!
//! Vision models tend to wrap their JSON in prose or Markdown code fences.
//! Extraction only finds the candidate span; decoding and validation happen
//! in [`crate::parser`].

/// Finds the span of text that should hold a JSON object.
pub trait JsonExtractor {
    /// Return the candidate JSON text, or `None` if the input has none.
    fn extract<'a>(&self, text: &'a str) -> Option<&'a str>;
}

/// Takes everything from the first `{` to the last `}`, inclusive.
///
/// Only correct when the response holds exactly one JSON object and the
/// surrounding prose has no stray braces.
#[derive(Debug, Clone, Copy, Default)]
pub struct BraceSpanExtractor;

impl JsonExtractor for BraceSpanExtractor {
    fn extract<'a>(&self, text: &'a str) -> Option<&'a str> {
        let start = text.find('{')?;
        let end = text.rfind('}')?;
        if end < start {
            return None;
        }
        Some(&text[start..=end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_bare_object() {
        let text = r#"{"a": 1}"#;
        assert_eq!(BraceSpanExtractor.extract(text), Some(text));
    }

    #[test]
    fn test_extracts_from_code_fence() {
        let text = "```json\n{\"a\": 1}\n```";
        assert_eq!(BraceSpanExtractor.extract(text), Some("{\"a\": 1}"));
    }

    #[test]
    fn test_extracts_from_prose() {
        let text = "Here is the analysis: {\"a\": {\"b\": 2}} Hope this helps.";
        assert_eq!(BraceSpanExtractor.extract(text), Some("{\"a\": {\"b\": 2}}"));
    }

    #[test]
    fn test_no_braces() {
        assert_eq!(BraceSpanExtractor.extract("no braces here"), None);
        assert_eq!(BraceSpanExtractor.extract("only { open"), None);
        assert_eq!(BraceSpanExtractor.extract("only } close"), None);
    }

    #[test]
    fn test_reversed_braces() {
        assert_eq!(BraceSpanExtractor.extract("} then {"), None);
    }

    #[test]
    fn test_stray_brace_in_prose_widens_span() {
        // Known limitation: the span runs to the last closing brace.
        let text = "{\"a\": 1} and a smiley :}";
        assert_eq!(BraceSpanExtractor.extract(text), Some("{\"a\": 1} and a smiley :}"));
    }
}
