mod config;
mod error;
pub mod prompt;
mod response;

pub use config::{Endpoint, GatewayConfig, DEFAULT_TIMEOUT};
pub use error::{GatewayError, Result, Target};
pub use response::{DecodeAndReplyResult, EncodingResult, NativeResult};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::instrument;

pub const MESSAGE_PREVIEW_CHARS: usize = 50;
pub const RESULT_PREVIEW_CHARS: usize = 100;

/// Processing mode. Anything other than `"native"` is read as `Coded`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum Mode {
    Native,
    #[default]
    Coded,
}

impl From<String> for Mode {
    fn from(value: String) -> Self {
        Mode::from(value.as_str())
    }
}

impl From<&str> for Mode {
    fn from(value: &str) -> Self {
        match value {
            "native" => Mode::Native,
            _ => Mode::Coded,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Native => write!(f, "native"),
            Mode::Coded => write!(f, "coded"),
        }
    }
}

pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[derive(Serialize)]
struct LlmRequest<'a> {
    prompt: String,
    api_key: &'a str,
}

#[derive(Debug, Clone)]
pub struct Client {
    config: Arc<GatewayConfig>,
}

impl Client {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Opens a session for one inbound request. The session owns its own
    /// HTTP connection pool, which is released when it is dropped.
    pub fn session(&self) -> Result<Session> {
        let http = reqwest::Client::builder()
            .timeout(self.config.timeout)
            .build()
            .map_err(GatewayError::ClientBuild)?;
        tracing::debug!("Opened gateway session");
        Ok(Session {
            http,
            config: self.config.clone(),
        })
    }
}

pub struct Session {
    http: reqwest::Client,
    config: Arc<GatewayConfig>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("llm_a", &self.config.llm_a.url)
            .field("llm_b", &self.config.llm_b.url)
            .finish()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        tracing::debug!("Released gateway session");
    }
}

impl Session {
    #[instrument(skip_all)]
    pub async fn encode(&self, message: &str) -> Result<EncodingResult> {
        let body = self.post(Target::A, prompt::call_a(message, Mode::Coded)).await?;
        EncodingResult::from_json(&body).inspect_err(|e| log_shape_error(e, &body))
    }

    #[instrument(skip_all)]
    pub async fn answer(&self, message: &str) -> Result<NativeResult> {
        let body = self.post(Target::A, prompt::call_a(message, Mode::Native)).await?;
        NativeResult::from_json(&body, message).inspect_err(|e| log_shape_error(e, &body))
    }

    /// Exchange B: decode with the instruction, reply, and re-encode the reply.
    #[instrument(skip_all)]
    pub async fn decode_and_reply(
        &self,
        coded_message: &str,
        coding_instruction: &str,
    ) -> Result<DecodeAndReplyResult> {
        let body = self
            .post(Target::B, prompt::call_b(coded_message, coding_instruction))
            .await?;
        DecodeAndReplyResult::from_json(&body).inspect_err(|e| log_shape_error(e, &body))
    }

    async fn post(&self, target: Target, prompt: String) -> Result<Value> {
        let endpoint = match target {
            Target::A => &self.config.llm_a,
            Target::B => &self.config.llm_b,
        };
        let request = LlmRequest {
            prompt,
            api_key: &endpoint.api_key,
        };
        let transport = |source| GatewayError::Transport { target, source };

        let response = self
            .http
            .post(&endpoint.url)
            .json(&request)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(transport)?;
        let body: Value = response.json().await.map_err(transport)?;

        tracing::info!(
            "Received response from {}: {}",
            target,
            preview(&body.to_string(), RESULT_PREVIEW_CHARS)
        );
        Ok(body)
    }
}

fn log_shape_error(error: &GatewayError, body: &Value) {
    tracing::error!("{}; body: {}", error, preview(&body.to_string(), RESULT_PREVIEW_CHARS));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct WithMode {
        #[serde(default)]
        mode: Mode,
    }

    fn parse(json: &str) -> Mode {
        serde_json::from_str::<WithMode>(json).unwrap().mode
    }

    #[test]
    fn mode_defaults_to_coded() {
        assert_eq!(parse(r#"{}"#), Mode::Coded);
        assert_eq!(parse(r#"{"mode": "coded"}"#), Mode::Coded);
        assert_eq!(parse(r#"{"mode": "native"}"#), Mode::Native);
    }

    #[test]
    fn unknown_mode_falls_back_to_coded() {
        assert_eq!(parse(r#"{"mode": "Native"}"#), Mode::Coded);
        assert_eq!(parse(r#"{"mode": "nativ"}"#), Mode::Coded);
        assert_eq!(parse(r#"{"mode": ""}"#), Mode::Coded);
    }

    #[test]
    fn mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Mode::Native).unwrap(), r#""native""#);
        assert_eq!(Mode::Coded.to_string(), "coded");
    }

    #[test]
    fn preview_truncates_on_char_boundaries() {
        assert_eq!(preview("hello", 10), "hello");
        assert_eq!(preview("hello", 5), "hello");
        assert_eq!(preview("hello world", 5), "hello...");
        assert_eq!(preview("ñandú çava", 3), "ñan...");
    }
}
