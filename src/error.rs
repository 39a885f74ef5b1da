//! Board Errors
//!
//! Failure taxonomy for talking to the activities backend.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum BoardError {
    /// The list endpoint returned something other than a list or a mapping
    Format(String),
    /// Non-2xx response, with the server's `detail` text when it sent one
    Http { status: u16, detail: Option<String> },
    /// The request never completed (network, CORS, aborted fetch)
    Transport(String),
    /// The response body was not the JSON we expected
    Parse(String),
}

impl BoardError {
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(msg) => write!(f, "unexpected activities format: {}", msg),
            Self::Http { status, detail: Some(detail) } => write!(f, "HTTP {}: {}", status, detail),
            Self::Http { status, detail: None } => write!(f, "HTTP {}", status),
            Self::Transport(msg) => write!(f, "request failed: {}", msg),
            Self::Parse(msg) => write!(f, "invalid response body: {}", msg),
        }
    }
}

impl std::error::Error for BoardError {}

impl From<gloo_net::Error> for BoardError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Parse(e.to_string()),
            other => Self::Transport(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for BoardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
