use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use tokio::net::TcpListener;

use llm_client::{Client, Endpoint, GatewayConfig};
use router::{coordinator::Coordinator, logging, server};

#[derive(Parser, Debug)]
struct Args {
    #[clap(short, long, env = "ROUTER_ADDRESS", default_value = "0.0.0.0:8000")]
    address: String,
    #[clap(long, env = "LLM_A_API_URL", default_value = "http://localhost:8001/api/llm-a")]
    llm_a_api_url: String,
    #[clap(long, env = "LLM_B_API_URL", default_value = "http://localhost:8001/api/llm-b")]
    llm_b_api_url: String,
    #[clap(long, env = "LLM_A_API_KEY", default_value = "", hide_env_values = true)]
    llm_a_api_key: String,
    #[clap(long, env = "LLM_B_API_KEY", default_value = "", hide_env_values = true)]
    llm_b_api_key: String,
    #[clap(long, env = "LLM_TIMEOUT_SECS", default_value = "30")]
    timeout_secs: u64,
    #[clap(long, env = "ROUTER_LOG_FILE", default_value = "api.log")]
    log_file: PathBuf,
}

impl Args {
    fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig::new(
            Endpoint::new(&self.llm_a_api_url, &self.llm_a_api_key),
            Endpoint::new(&self.llm_b_api_url, &self.llm_b_api_key),
        )
        .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let _guard = logging::init(&args.log_file);

    let config = args.gateway_config();
    tracing::info!("Gateway config: {:?}", &config);

    let coordinator = Coordinator::new(Client::new(config));
    let app = server::app(coordinator);

    tracing::info!("Listening on {}", &args.address);
    let listener = TcpListener::bind(&args.address).await?;

    axum::serve(listener, app).await?;
    tracing::info!("Server shutdown");

    Ok(())
}
