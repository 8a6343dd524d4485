use std::fmt;
use std::io;

/// Body of a successful response and its declared Content-Type, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

/// One failed fetch attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// A post by the requested author. Either part may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Post {
    /// Threadmark title, trimmed.
    pub title: Option<String>,
    /// Non-empty body text blocks in document order.
    pub body: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrapeSummary {
    pub pages_detected: u32,
    pub pages_fetched: u32,
    pub pages_skipped: u32,
    pub posts_written: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("invalid thread url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
