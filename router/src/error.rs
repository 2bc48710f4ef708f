use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use llm_client::GatewayError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("message must not be empty")]
    EmptyMessage,

    #[error("processing failed: {0}")]
    Processing(#[from] GatewayError),
}

impl RouterError {
    pub fn status(&self) -> StatusCode {
        match self {
            RouterError::EmptyMessage => StatusCode::UNPROCESSABLE_ENTITY,
            RouterError::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for RouterError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            detail: self.to_string(),
        });
        (self.status(), body).into_response()
    }
}
