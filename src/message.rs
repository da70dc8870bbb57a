// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<Value>,
}

impl ChatRequest {
    /// The message text when the field is truthy: not `null`, `false`, `0`
    /// or `""`. Non-string values are forwarded in their JSON text form.
    /// Whitespace counts as content.
    pub fn message(&self) -> Option<String> {
        match self.message.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            other => Some(other.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(raw: &str) -> Option<String> {
        serde_json::from_str::<ChatRequest>(raw).unwrap().message()
    }

    #[test]
    fn falsy_messages_are_rejected() {
        for raw in [
            r#"{}"#,
            r#"{"message": null}"#,
            r#"{"message": ""}"#,
            r#"{"message": false}"#,
            r#"{"message": 0}"#,
            r#"{"message": 0.0}"#,
        ] {
            assert_eq!(message(raw), None, "{raw}");
        }
    }

    #[test]
    fn truthy_non_strings_are_forwarded() {
        assert_eq!(message(r#"{"message": 42}"#).as_deref(), Some("42"));
        assert_eq!(message(r#"{"message": true}"#).as_deref(), Some("true"));
        assert_eq!(message(r#"{"message": []}"#).as_deref(), Some("[]"));
    }

    #[test]
    fn whitespace_is_kept() {
        assert_eq!(message(r#"{"message": "  "}"#).as_deref(), Some("  "));
    }
}
