//! JSON display helpers
//!
//! Used to render response payloads and examples. Nothing here feeds back
//! into request building.

use serde_json::Value;

/// Pretty-prints a value for display.
///
/// Strings are treated as possibly-serialized JSON: if the text parses, the
/// parsed value is re-serialized with indentation, otherwise the text is
/// echoed unchanged. Any other value is serialized directly.
pub fn format_json(value: &Value) -> String {
    match value {
        Value::String(text) => try_format_json(text),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

/// Attempts to pretty-print JSON, returns original string if not valid JSON
pub fn try_format_json(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(json) => serde_json::to_string_pretty(&json).unwrap_or_else(|_| body.to_string()),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_holding_json_is_indented() {
        let formatted = format_json(&Value::String("{\"a\":1}".to_string()));
        assert_eq!(formatted, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_plain_string_is_echoed() {
        let formatted = format_json(&Value::String("hello".to_string()));
        assert_eq!(formatted, "hello");
    }

    #[test]
    fn test_structured_value_is_serialized() {
        assert_eq!(format_json(&json!({"a": 1})), "{\n  \"a\": 1\n}");
        assert_eq!(format_json(&json!([1, 2])), "[\n  1,\n  2\n]");
    }

    #[test]
    fn test_scalars() {
        assert_eq!(format_json(&Value::Null), "null");
        assert_eq!(format_json(&json!(42)), "42");
        // a JSON-encoded string literal inside a string is unwrapped one level
        assert_eq!(format_json(&Value::String("\"x\"".to_string())), "\"x\"");
    }

    #[test]
    fn test_try_format_json_invalid() {
        assert_eq!(try_format_json("{not json"), "{not json");
        assert_eq!(try_format_json(""), "");
    }
}
