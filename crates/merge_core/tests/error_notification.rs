use merge_core::{
    ErrorNotification, FailureBody, RemoteFailure, Severity, DEFAULT_ERROR_MESSAGE,
};

#[test]
fn structured_message_wins_over_generic() {
    let failure = RemoteFailure {
        body: Some(FailureBody {
            message: Some("Template locked".to_string()),
        }),
        message: Some("500 Internal Server Error".to_string()),
    };

    let notification = ErrorNotification::from_failure(&failure);
    assert_eq!(notification.message, "Template locked");
    assert_eq!(notification.title, "Mail Merge Error");
    assert_eq!(notification.severity, Severity::Error);
}

#[test]
fn generic_message_used_without_structured_body() {
    let failure = RemoteFailure {
        body: Some(FailureBody { message: None }),
        message: Some("connection reset".to_string()),
    };
    assert_eq!(
        ErrorNotification::from_failure(&failure).message,
        "connection reset"
    );
}

#[test]
fn default_message_when_nothing_is_available() {
    let notification = ErrorNotification::from_failure(&RemoteFailure::default());
    assert_eq!(notification.message, DEFAULT_ERROR_MESSAGE);
    assert_eq!(notification.message, "An unexpected error occurred.");
}

#[test]
fn empty_messages_fall_through_to_next_tier() {
    let failure = RemoteFailure {
        body: Some(FailureBody {
            message: Some(String::new()),
        }),
        message: Some("generic".to_string()),
    };
    assert_eq!(ErrorNotification::from_failure(&failure).message, "generic");

    let failure = RemoteFailure {
        body: Some(FailureBody {
            message: Some(String::new()),
        }),
        message: Some(String::new()),
    };
    assert_eq!(
        ErrorNotification::from_failure(&failure).message,
        DEFAULT_ERROR_MESSAGE
    );
}
