use recall_core::errors::*;

#[test]
fn state_corruption_carries_user_and_details() {
    let err = MemoryError::StateCorruption {
        user_id: 42,
        details: "count drift".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("42"), "error should contain the user id");
    assert!(msg.contains("count drift"));
}

#[test]
fn completion_network_error_carries_message() {
    let err = CompletionError::Network {
        message: "connection refused".into(),
    };
    assert!(err.to_string().contains("connection refused"));
}

#[test]
fn completion_rate_limit_carries_retry_hint() {
    let err = CompletionError::RateLimited {
        retry_after_secs: Some(30),
    };
    assert!(err.to_string().contains("30"));
}

#[test]
fn delivery_unreachable_carries_destination() {
    let err = DeliveryError::Unreachable { destination: 99 };
    assert!(err.to_string().contains("99"));
}

#[test]
fn delivery_malformed_destination_carries_input() {
    let err = DeliveryError::MalformedDestination {
        input: "not-a-chat".into(),
    };
    assert!(err.to_string().contains("not-a-chat"));
}

#[test]
fn umbrella_error_preserves_source_message() {
    let err: RecallError = MemoryError::StateCorruption {
        user_id: 1,
        details: "x".into(),
    }
    .into();
    assert!(err.to_string().contains("corrupted"));

    let err: RecallError = CompletionError::MalformedResponse {
        details: "no choices".into(),
    }
    .into();
    assert!(err.to_string().contains("no choices"));
}
