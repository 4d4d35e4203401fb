use std::fmt;

use merge_core::{ArtifactId, FailureBody, PreviewResult, RemoteFailure};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    PreviewCompleted(Result<PreviewResult, ServiceError>),
    GenerateCompleted(Result<Vec<ArtifactId>, ServiceError>),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ServiceError {
    pub kind: FailureKind,
    /// Transport error text or HTTP status line.
    pub message: String,
    /// `message` field of a JSON error body returned by the service.
    pub body_message: Option<String>,
}

impl ServiceError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            body_message: None,
        }
    }

    pub(crate) fn with_body_message(mut self, body_message: Option<String>) -> Self {
        self.body_message = body_message;
        self
    }
}

impl From<ServiceError> for RemoteFailure {
    fn from(err: ServiceError) -> Self {
        RemoteFailure {
            body: err.body_message.map(|message| FailureBody {
                message: Some(message),
            }),
            message: Some(err.message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "malformed response"),
        }
    }
}
