//! Shape validation for downstream replies.
//!
//! The missing-field policy is deliberately uneven and mirrors what the
//! coordinator has always relied on:
//!
//! | exchange | field                | when absent            |
//! |----------|----------------------|------------------------|
//! | A coded  | `coded_message`      | hard failure           |
//! | A coded  | `coding_instruction` | hard failure           |
//! | A native | `response`           | placeholder reply      |
//! | B        | `decoded_message`    | hard failure           |
//! | B        | `coded_response`     | hard failure           |
//! | B        | `response`           | empty string           |
//!
//! A `null` required field fails with its own reason; a `null` defaulted field
//! takes the default. A value of the wrong JSON type is always a hard failure.

use serde_json::Value;

use crate::error::{GatewayError, Result, Target};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingResult {
    pub coded_message: String,
    pub coding_instruction: String,
}

/// Output of exchange B.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeAndReplyResult {
    pub decoded_message: String,
    pub response: String,
    pub coded_response: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeResult {
    pub response: String,
}

pub(crate) fn native_placeholder(message: &str) -> String {
    format!("Response from LLM A for: '{}'", message)
}

impl EncodingResult {
    pub(crate) fn from_json(body: &Value) -> Result<Self> {
        let fields = Fields::new(Target::A, body)?;
        Ok(Self {
            coded_message: fields.required("coded_message")?,
            coding_instruction: fields.required("coding_instruction")?,
        })
    }
}

impl DecodeAndReplyResult {
    pub(crate) fn from_json(body: &Value) -> Result<Self> {
        let fields = Fields::new(Target::B, body)?;
        Ok(Self {
            decoded_message: fields.required("decoded_message")?,
            coded_response: fields.required("coded_response")?,
            response: fields.optional("response")?.unwrap_or_default(),
        })
    }
}

impl NativeResult {
    pub(crate) fn from_json(body: &Value, message: &str) -> Result<Self> {
        let fields = Fields::new(Target::A, body)?;
        let response = fields
            .optional("response")?
            .unwrap_or_else(|| native_placeholder(message));
        Ok(Self { response })
    }
}

struct Fields<'a> {
    target: Target,
    object: &'a serde_json::Map<String, Value>,
}

impl<'a> Fields<'a> {
    fn new(target: Target, body: &'a Value) -> Result<Self> {
        match body.as_object() {
            Some(object) => Ok(Self { target, object }),
            None => Err(GatewayError::ResponseShape {
                target,
                reason: "expected a JSON object".to_string(),
            }),
        }
    }

    fn required(&self, field: &str) -> Result<String> {
        let reason = match self.object.get(field) {
            None => format!("missing required field `{}`", field),
            Some(Value::Null) => format!("field `{}` is null", field),
            Some(_) => return self.optional(field).map(Option::unwrap_or_default),
        };
        Err(GatewayError::ResponseShape {
            target: self.target,
            reason,
        })
    }

    fn optional(&self, field: &str) -> Result<Option<String>> {
        match self.object.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.clone())),
            Some(other) => Err(GatewayError::ResponseShape {
                target: self.target,
                reason: format!("field `{}` must be a string, got {}", field, other),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn encoding_requires_both_fields() {
        let ok = EncodingResult::from_json(&json!({
            "coded_message": "xyz",
            "coding_instruction": "reverse xyz",
            "extra": 1
        }))
        .unwrap();
        assert_eq!(ok.coded_message, "xyz");
        assert_eq!(ok.coding_instruction, "reverse xyz");

        let err = EncodingResult::from_json(&json!({"coded_message": "xyz"})).unwrap_err();
        assert!(err.is_response_shape());
        assert_eq!(err.target(), Some(Target::A));
        assert!(err.to_string().contains("coding_instruction"));

        let err = EncodingResult::from_json(&json!({"coding_instruction": "x"})).unwrap_err();
        assert!(err.to_string().contains("coded_message"));
    }

    #[test]
    fn null_required_field_is_reported_as_null() {
        let err = EncodingResult::from_json(&json!({
            "coded_message": "x",
            "coding_instruction": null
        }))
        .unwrap_err();
        assert!(err.is_response_shape());
        assert_eq!(
            err.to_string(),
            "LLM A response has invalid format: field `coding_instruction` is null"
        );

        let result = NativeResult::from_json(&json!({"response": null}), "hi").unwrap();
        assert_eq!(result.response, "Response from LLM A for: 'hi'");
    }

    #[test]
    fn decode_requires_decoded_message() {
        let err = DecodeAndReplyResult::from_json(&json!({"coded_response": "abc"})).unwrap_err();
        assert!(err.is_response_shape());
        assert_eq!(err.target(), Some(Target::B));
        assert!(err.to_string().contains("missing required field `decoded_message`"));
    }

    #[test]
    fn native_falls_back_to_placeholder() {
        let result = NativeResult::from_json(&json!({}), "hi").unwrap();
        assert_eq!(result.response, "Response from LLM A for: 'hi'");

        let result = NativeResult::from_json(&json!({"response": "hello!"}), "hi").unwrap();
        assert_eq!(result.response, "hello!");
    }

    #[test]
    fn decode_defaults_plain_response_to_empty() {
        let result = DecodeAndReplyResult::from_json(&json!({
            "decoded_message": "hello",
            "coded_response": "abc"
        }))
        .unwrap();
        assert_eq!(result.response, "");
        assert_eq!(result.coded_response, "abc");

        let err = DecodeAndReplyResult::from_json(&json!({
            "decoded_message": "hello",
            "response": "hi there"
        }))
        .unwrap_err();
        assert_eq!(err.target(), Some(Target::B));
        assert!(err.to_string().starts_with("LLM B response has invalid format"));
    }

    #[test]
    fn rejects_non_object_and_wrong_types() {
        assert!(NativeResult::from_json(&json!(["response"]), "hi")
            .unwrap_err()
            .is_response_shape());
        assert!(NativeResult::from_json(&json!({"response": 42}), "hi")
            .unwrap_err()
            .is_response_shape());
    }
}
