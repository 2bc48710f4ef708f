use std::fmt::Debug;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct Endpoint {
    pub url: String,
    pub api_key: String,
}

impl Endpoint {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
        }
    }
}

// Keys stay out of logs.
impl Debug for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Endpoint")
            .field("url", &self.url)
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .finish()
    }
}

/// Static gateway configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub llm_a: Endpoint,
    pub llm_b: Endpoint,
    pub timeout: Duration,
}

impl GatewayConfig {
    pub fn new(llm_a: Endpoint, llm_b: Endpoint) -> Self {
        Self {
            llm_a,
            llm_b,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
