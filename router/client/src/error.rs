use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    A,
    B,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::A => write!(f, "LLM A"),
            Target::B => write!(f, "LLM B"),
        }
    }
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Network failure, timeout, non-2xx status or an undecodable body.
    #[error("error calling {target}: {source}")]
    Transport {
        target: Target,
        #[source]
        source: reqwest::Error,
    },

    #[error("{target} response has invalid format: {reason}")]
    ResponseShape { target: Target, reason: String },
}

impl GatewayError {
    pub fn target(&self) -> Option<Target> {
        match self {
            GatewayError::ClientBuild(_) => None,
            GatewayError::Transport { target, .. } | GatewayError::ResponseShape { target, .. } => {
                Some(*target)
            }
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, GatewayError::Transport { .. })
    }

    pub fn is_response_shape(&self) -> bool {
        matches!(self, GatewayError::ResponseShape { .. })
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
