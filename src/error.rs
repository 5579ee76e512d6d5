use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamErrorKind {
    HttpStatus(u16),
    Network,
    Decode,
}

impl std::fmt::Display for UpstreamErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpstreamErrorKind::HttpStatus(code) => write!(f, "http status {code}"),
            UpstreamErrorKind::Network => write!(f, "network error"),
            UpstreamErrorKind::Decode => write!(f, "decode error"),
        }
    }
}

/// Failure of a single upstream lookup. Never escapes the assemblers except
/// through the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct UpstreamError {
    pub kind: UpstreamErrorKind,
    pub message: String,
}

impl UpstreamError {
    pub fn new(kind: UpstreamErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn status(code: u16, message: impl Into<String>) -> Self {
        Self::new(UpstreamErrorKind::HttpStatus(code), message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(UpstreamErrorKind::Network, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(UpstreamErrorKind::Decode, message)
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            return Self::status(status.as_u16(), e.to_string());
        }
        if e.is_decode() {
            return Self::decode(e.to_string());
        }
        // timeouts, refused connections and broken bodies all land here
        Self::network(e.to_string())
    }
}

impl From<serde_json::Error> for UpstreamError {
    fn from(e: serde_json::Error) -> Self {
        Self::decode(e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error("user not found: {0}")]
    NotFound(String),
    #[error("identity lookup failed: {0}")]
    Upstream(#[from] UpstreamError),
}
