// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn display_includes_kind_and_message() {
    let err = FdError::not_found("instance t1 unknown");
    assert_eq!(err.to_string(), "NOT_FOUND: instance t1 unknown");
}

#[test]
fn kind_as_str_matches_taxonomy_names() {
    assert_eq!(ErrorKind::AuthDenied.as_str(), "AUTH_DENIED");
    assert_eq!(ErrorKind::AlreadyRunning.as_str(), "ALREADY_RUNNING");
    assert_eq!(ErrorKind::UpstreamApiFailed.as_str(), "UPSTREAM_API_FAILED");
}

#[test]
fn already_running_includes_name() {
    let err = FdError::already_running("t1");
    assert_eq!(err.kind, ErrorKind::AlreadyRunning);
    assert!(err.message.contains("t1"));
}

#[test]
fn round_trips_through_json_for_wire_transport() {
    let err = FdError::auth_denied();
    let json = serde_json::to_string(&err).expect("serialize");
    let back: FdError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, err);
}
