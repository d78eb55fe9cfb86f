use serde::Deserialize;
use textpolish_common::{Result, TextPolishError};

/// Formatted text and summary returned by a backend
///
/// A field is `None` when the model returned an empty string for it; empty
/// strings normalize to absence, never to an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatResult {
    /// Input text with punctuation and capitalization restored
    pub formatted_text: Option<String>,

    /// Model-generated condensation of the input
    pub summary: Option<String>,
}

/// JSON payload the model is instructed to emit
///
/// Exactly two string keys; anything else is a schema violation.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelReply {
    pub text: String,
    pub summary: String,
}

impl From<ModelReply> for FormatResult {
    fn from(reply: ModelReply) -> Self {
        Self {
            formatted_text: none_if_empty(reply.text),
            summary: none_if_empty(reply.summary),
        }
    }
}

fn none_if_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Parse the model's reply text into a [`FormatResult`]
///
/// Two failure modes, kept distinct: text that is not JSON at all
/// (`Parse`), and JSON that is not exactly `{"text": .., "summary": ..}`
/// with string values (`Schema`).
pub fn parse_model_reply(raw: &str) -> Result<FormatResult> {
    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| TextPolishError::parse(format!("model reply is not valid JSON: {}", e)))?;

    let reply: ModelReply = serde_json::from_value(value).map_err(|e| {
        TextPolishError::schema(format!(
            "model reply does not match {{\"text\", \"summary\"}}: {}",
            e
        ))
    })?;

    Ok(reply.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_verbatim_reply() {
        let result = parse_model_reply(r#"{"text": "T", "summary": "S"}"#).unwrap();
        assert_eq!(result.formatted_text.as_deref(), Some("T"));
        assert_eq!(result.summary.as_deref(), Some("S"));
    }

    #[test]
    fn test_empty_text_normalizes_to_none() {
        let result = parse_model_reply(r#"{"text": "", "summary": "S"}"#).unwrap();
        assert_eq!(result.formatted_text, None);
        assert_eq!(result.summary.as_deref(), Some("S"));
    }

    #[test]
    fn test_both_empty_normalize_to_none() {
        let result = parse_model_reply(r#"{"text": "", "summary": ""}"#).unwrap();
        assert_eq!(result.formatted_text, None);
        assert_eq!(result.summary, None);
    }

    #[test]
    fn test_non_json_reply_is_parse_error() {
        let err = parse_model_reply("Sure! Here is the formatted text: ...").unwrap_err();
        assert!(matches!(err, TextPolishError::Parse(_)));
    }

    #[test]
    fn test_missing_key_is_schema_error() {
        let err = parse_model_reply(r#"{"text": "T"}"#).unwrap_err();
        assert!(matches!(err, TextPolishError::Schema(_)));
    }

    #[test]
    fn test_unknown_key_is_schema_error() {
        let err =
            parse_model_reply(r#"{"text": "T", "summary": "S", "confidence": 0.9}"#).unwrap_err();
        assert!(matches!(err, TextPolishError::Schema(_)));
    }

    #[test]
    fn test_non_string_value_is_schema_error() {
        let err = parse_model_reply(r#"{"text": 42, "summary": "S"}"#).unwrap_err();
        assert!(matches!(err, TextPolishError::Schema(_)));
    }
}
