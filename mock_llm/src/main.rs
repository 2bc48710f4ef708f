mod reply;

use anyhow::Result;
use axum::{http::StatusCode, routing::post, Json, Router};
use clap::Parser;
use llm_client::{preview, MESSAGE_PREVIEW_CHARS};
use serde_json::Value;
use tokio::net::TcpListener;
use tracing::instrument;

/// Body sent by the router to both targets; `api_key` is ignored.
#[derive(serde::Deserialize, Debug)]
struct LlmRequest {
    prompt: String,
}

#[derive(Parser, Debug)]
struct Args {
    #[clap(short, long, env = "MOCK_LLM_ADDRESS", default_value = "127.0.0.1:8001")]
    address: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();
    tracing::info!("Starting mock LLM server with Args={:?}", args);

    let app = Router::new()
        .route("/api/llm-a", post(llm_a_handler))
        .route("/api/llm-b", post(llm_b_handler));

    let listener = TcpListener::bind(&args.address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[instrument(skip_all)]
async fn llm_a_handler(request: Json<LlmRequest>) -> Result<Json<Value>, StatusCode> {
    respond("LLM A", reply::llm_a(&request.prompt), &request.prompt)
}

#[instrument(skip_all)]
async fn llm_b_handler(request: Json<LlmRequest>) -> Result<Json<Value>, StatusCode> {
    respond("LLM B", reply::llm_b(&request.prompt), &request.prompt)
}

fn respond(name: &str, reply: Option<Value>, prompt: &str) -> Result<Json<Value>, StatusCode> {
    match reply {
        Some(body) => {
            tracing::info!("{} SUCCESS", name);
            Ok(Json(body))
        }
        None => {
            tracing::warn!(
                "{} could not parse prompt: {}",
                name,
                preview(prompt, MESSAGE_PREVIEW_CHARS)
            );
            Err(StatusCode::BAD_REQUEST)
        }
    }
}
