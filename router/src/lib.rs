pub mod coordinator;
pub mod error;
pub mod logging;
pub mod server;

pub use llm_client::Mode;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct MessageRequest {
    pub message: String,
    #[serde(default)]
    pub mode: Mode,
}

/// `processed_message` and `coding_instruction` stay `None` in native mode.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub original_message: String,
    pub processed_message: Option<String>,
    pub coding_instruction: Option<String>,
    pub final_response: String,
}
