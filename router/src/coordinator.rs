use crate::{error::RouterError, MessageRequest, MessageResponse, Mode};
use llm_client::{preview, Client, Session, MESSAGE_PREVIEW_CHARS, RESULT_PREVIEW_CHARS};

use tracing::instrument;

/// Sequences the downstream exchanges for one inbound message.
#[derive(Debug, Clone)]
pub struct Coordinator {
    client: Client,
}

impl Coordinator {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    #[instrument(skip_all, fields(mode = %request.mode))]
    pub async fn process_request(
        &self,
        request: MessageRequest,
    ) -> Result<MessageResponse, RouterError> {
        tracing::info!("Received request to process message in {} mode", request.mode);

        if request.message.is_empty() {
            tracing::warn!("Rejected request with empty message");
            return Err(RouterError::EmptyMessage);
        }

        // Dropped on every return path below, which releases its connections.
        let session = self
            .client
            .session()
            .inspect_err(|e| tracing::error!("Error opening gateway session: {}", e))?;

        let result = match request.mode {
            Mode::Native => native(&session, request.message).await,
            Mode::Coded => coded(&session, request.message).await,
        };

        match result {
            Ok(response) => {
                tracing::info!("Message processed successfully");
                Ok(response)
            }
            Err(e) => {
                tracing::error!("Error processing message: {}", e);
                Err(RouterError::Processing(e))
            }
        }
    }
}

async fn native(session: &Session, message: String) -> llm_client::Result<MessageResponse> {
    tracing::info!(
        "Sending message to LLM A (native mode): {}",
        preview(&message, MESSAGE_PREVIEW_CHARS)
    );
    let answer = session.answer(&message).await?;
    tracing::info!(
        "LLM A answered: {}",
        preview(&answer.response, RESULT_PREVIEW_CHARS)
    );

    Ok(MessageResponse {
        original_message: message,
        processed_message: None,
        coding_instruction: None,
        final_response: answer.response,
    })
}

async fn coded(session: &Session, message: String) -> llm_client::Result<MessageResponse> {
    tracing::info!(
        "Sending message to LLM A (coded mode): {}",
        preview(&message, MESSAGE_PREVIEW_CHARS)
    );
    let encoding = session.encode(&message).await?;
    tracing::info!(
        "LLM A encoded message as: {}",
        preview(&encoding.coded_message, MESSAGE_PREVIEW_CHARS)
    );

    tracing::info!(
        "Sending coded message to LLM B: {}",
        preview(&encoding.coded_message, MESSAGE_PREVIEW_CHARS)
    );
    let reply = session
        .decode_and_reply(&encoding.coded_message, &encoding.coding_instruction)
        .await?;
    tracing::info!(
        "LLM B decoded {} and replied: {}",
        preview(&reply.decoded_message, MESSAGE_PREVIEW_CHARS),
        preview(&reply.coded_response, RESULT_PREVIEW_CHARS)
    );

    Ok(MessageResponse {
        original_message: message,
        processed_message: Some(encoding.coded_message),
        coding_instruction: Some(encoding.coding_instruction),
        final_response: reply.coded_response,
    })
}
