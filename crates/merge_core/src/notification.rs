pub const ERROR_TITLE: &str = "Mail Merge Error";
pub const DEFAULT_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Failure reported by the merge service, reduced to the two message
/// sources the notification cares about.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RemoteFailure {
    /// Structured error body returned by the service, if any.
    pub body: Option<FailureBody>,
    /// Generic transport or application message.
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FailureBody {
    pub message: Option<String>,
}

impl RemoteFailure {
    pub fn structured(message: impl Into<String>) -> Self {
        Self {
            body: Some(FailureBody {
                message: Some(message.into()),
            }),
            message: None,
        }
    }

    pub fn generic(message: impl Into<String>) -> Self {
        Self {
            body: None,
            message: Some(message.into()),
        }
    }

    /// Message shown to the user: body message, then generic message, then
    /// the fixed default. Empty strings are treated as absent.
    pub fn user_message(&self) -> &str {
        self.body
            .as_ref()
            .and_then(|body| non_empty(body.message.as_deref()))
            .or_else(|| non_empty(self.message.as_deref()))
            .unwrap_or(DEFAULT_ERROR_MESSAGE)
    }
}

fn non_empty(message: Option<&str>) -> Option<&str> {
    message.filter(|text| !text.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNotification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl ErrorNotification {
    pub fn from_failure(failure: &RemoteFailure) -> Self {
        Self {
            title: ERROR_TITLE.to_string(),
            message: failure.user_message().to_string(),
            severity: Severity::Error,
        }
    }
}
