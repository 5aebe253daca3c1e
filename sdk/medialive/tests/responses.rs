/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use medialive::error::{ErrorKind, NotFoundException};
use medialive::model::{
    ChannelClass, ChannelState, InputAttachment, InputSource, InputState, InputType, LogLevel,
};
use medialive::operation::{
    CreateChannel, DeleteChannel, DeleteInput, DescribeChannel, DescribeInput, ListInputs,
    StartChannel, StopChannel, UpdateChannel,
};
use pretty_assertions::assert_eq;
use smithy_http::middleware::load_response;
use smithy_http::response::ParseStrictResponse;
use smithy_http::result::SdkError;

fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
    http::Response::builder()
        .status(status)
        .body(Bytes::from_static(body.as_bytes()))
        .unwrap()
}

#[test]
fn describe_input_response() {
    let body = r#"{
        "arn": "arn:aws:medialive:us-west-2:123456789012:input/1234",
        "attachedChannels": ["9876"],
        "id": "1234",
        "name": "my-input",
        "sources": [{"url": "rtmp://example.com/live", "username": "alice", "passwordParam": "/ml/pw"}],
        "state": "ATTACHED",
        "tags": {"env": "prod", "team": "video"},
        "type": "URL_PULL",
        "mediaConnectFlows": [{"flowArn": "arn:aws:mediaconnect:x"}],
        "inputDevices": []
    }"#;
    let output = DescribeInput::new().parse(&response(200, body)).unwrap();
    assert_eq!(output.id.as_deref(), Some("1234"));
    assert_eq!(output.name.as_deref(), Some("my-input"));
    assert_eq!(output.attached_channels, Some(vec!["9876".to_string()]));
    assert_eq!(output.state, Some(InputState::Attached));
    assert_eq!(output.r#type, Some(InputType::UrlPull));
    assert_eq!(
        output.sources,
        Some(vec![InputSource::builder()
            .url("rtmp://example.com/live")
            .username("alice")
            .password_param("/ml/pw")
            .build()])
    );
    let tags = output.tags.unwrap();
    assert_eq!(tags.len(), 2);
    assert_eq!(tags["team"], "video");
    assert_eq!(output.destinations, None);
    assert_eq!(output.input_class, None);
}

#[test]
fn unknown_enum_values_are_kept() {
    let output = DescribeInput::new()
        .parse(&response(200, r#"{"type": "SRT_CALLER", "state": "PAUSED"}"#))
        .unwrap();
    assert_eq!(output.r#type, Some(InputType::Unknown("SRT_CALLER".into())));
    assert_eq!(output.state.unwrap().as_str(), "PAUSED");
}

#[test]
fn null_members_are_absent() {
    let output = DescribeInput::new()
        .parse(&response(200, r#"{"id": null, "sources": null, "tags": null}"#))
        .unwrap();
    assert_eq!(output.id, None);
    assert_eq!(output.sources, None);
    assert_eq!(output.tags, None);
}

#[test]
fn malformed_nested_values_are_dropped() {
    let body = r#"{
        "inputAttachments": [null, 5, {"inputId": "1"}, "x", {"inputId": "2"}],
        "tags": ["not", "a", "map"],
        "logLevel": "INFO"
    }"#;
    let output = DescribeChannel::new().parse(&response(200, body)).unwrap();
    assert_eq!(
        output.input_attachments,
        Some(vec![
            InputAttachment::builder().input_id("1").build(),
            InputAttachment::builder().input_id("2").build(),
        ])
    );
    assert_eq!(output.tags, None);
    assert_eq!(output.log_level, Some(LogLevel::Info));
}

#[test]
fn scalar_type_mismatch_is_unhandled() {
    let err = DescribeChannel::new()
        .parse(&response(200, r#"{"name": 5}"#))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Unhandled(_)));

    let err = DescribeChannel::new()
        .parse(&response(200, r#"{"pipelinesRunningCount": 4294967296}"#))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Unhandled(_)));

    let output = DescribeChannel::new()
        .parse(&response(
            200,
            r#"{"pipelinesRunningCount": 2, "state": "RUNNING"}"#,
        ))
        .unwrap();
    assert_eq!(output.pipelines_running_count, Some(2));
    assert_eq!(output.state, Some(ChannelState::Running));
}

#[test]
fn top_level_must_be_an_object() {
    for body in &["[]", "null", "\"input\"", "{\"id\": \"1\"} {}", "{\"id\": "] {
        let err = DescribeInput::new().parse(&response(200, body)).unwrap_err();
        assert!(
            matches!(err.kind, ErrorKind::Unhandled(_)),
            "{} should be rejected",
            body
        );
    }
}

#[test]
fn empty_body_is_an_empty_output() {
    let output = ListInputs::new().parse(&response(200, "")).unwrap();
    assert_eq!(output.inputs, None);
    assert_eq!(output.next_token, None);

    let output = DeleteInput::new().parse(&response(200, "{}")).unwrap();
    assert_eq!(output, medialive::output::DeleteInputOutput::builder().build());
}

#[test]
fn delete_input_checks_its_body() {
    let output = DeleteInput::new().parse(&response(200, "")).unwrap();
    assert_eq!(output, medialive::output::DeleteInputOutput::builder().build());

    let output = DeleteInput::new()
        .parse(&response(200, r#"{"requestId": "abc", "extra": [1, {}]}"#))
        .unwrap();
    assert_eq!(output, medialive::output::DeleteInputOutput::builder().build());

    for body in &["[]", "null", "5", "{"] {
        let err = DeleteInput::new().parse(&response(200, body)).unwrap_err();
        assert!(
            matches!(err.kind, ErrorKind::Unhandled(_)),
            "{} should be rejected",
            body
        );
    }
}

#[test]
fn create_channel_response() {
    let body = r#"{"channel": {"id": "9876", "channelClass": "STANDARD", "state": "CREATING"}}"#;
    let output = CreateChannel::new().parse(&response(201, body)).unwrap();
    let channel = output.channel.unwrap();
    assert_eq!(channel.id.as_deref(), Some("9876"));
    assert_eq!(channel.channel_class, Some(ChannelClass::Standard));
    assert_eq!(channel.state, Some(ChannelState::Creating));
}

#[test]
fn channel_lifecycle_responses() {
    let output = StartChannel::new()
        .parse(&response(200, r#"{"id": "9876", "state": "STARTING"}"#))
        .unwrap();
    assert_eq!(output.id.as_deref(), Some("9876"));
    assert_eq!(output.state, Some(ChannelState::Starting));

    let output = StopChannel::new()
        .parse(&response(200, r#"{"id": "9876", "state": "STOPPING", "pipelinesRunningCount": 0}"#))
        .unwrap();
    assert_eq!(output.state, Some(ChannelState::Stopping));
    assert_eq!(output.pipelines_running_count, Some(0));

    let output = DeleteChannel::new()
        .parse(&response(200, r#"{"id": "9876", "state": "DELETING"}"#))
        .unwrap();
    assert_eq!(output.state, Some(ChannelState::Deleting));

    let err = DeleteChannel::new().parse(&response(200, "[]")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Unhandled(_)));
}

#[test]
fn list_inputs_response() {
    let body = r#"{"inputs": [{"id": "1", "inputClass": "STANDARD"}, {"id": "2"}], "nextToken": "abc"}"#;
    let output = ListInputs::new().parse(&response(200, body)).unwrap();
    let inputs = output.inputs.unwrap();
    assert_eq!(inputs.len(), 2);
    assert_eq!(inputs[0].id.as_deref(), Some("1"));
    assert_eq!(inputs[1].input_class, None);
    assert_eq!(output.next_token.as_deref(), Some("abc"));
}

#[test]
fn update_channel_response() {
    let body = r#"{"channel": {"id": "9876", "name": "renamed", "logLevel": "DEBUG"}}"#;
    let output = UpdateChannel::new().parse(&response(200, body)).unwrap();
    let channel = output.channel.unwrap();
    assert_eq!(channel.id.as_deref(), Some("9876"));
    assert_eq!(channel.log_level, Some(LogLevel::Debug));
}

#[test]
fn modeled_error() {
    let response = http::Response::builder()
        .status(404)
        .header("x-amzn-errortype", "NotFoundException")
        .header("x-amzn-requestid", "req-1")
        .body(Bytes::from_static(br#"{"message": "Input 1234 not found"}"#))
        .unwrap();
    let err = DescribeInput::new().parse(&response).unwrap_err();
    assert!(err.is_not_found_exception());
    assert_eq!(err.code(), Some("NotFoundException"));
    assert_eq!(err.message(), Some("Input 1234 not found"));
    assert_eq!(err.request_id(), Some("req-1"));
    assert_eq!(err.to_string(), "NotFoundException: Input 1234 not found");
    match err.kind {
        ErrorKind::NotFoundException(inner) => assert_eq!(
            inner,
            NotFoundException::builder()
                .message("Input 1234 not found")
                .build()
        ),
        other => panic!("unexpected error kind: {:?}", other),
    }
}

#[test]
fn error_code_from_body() {
    let err = DescribeInput::new()
        .parse(&response(
            429,
            r#"{"__type": "com.amazonaws.medialive#TooManyRequestsException", "message": "slow down"}"#,
        ))
        .unwrap_err();
    assert!(err.is_too_many_requests_exception());
    assert_eq!(err.message(), Some("slow down"));
}

#[test]
fn unknown_error_code_is_unhandled() {
    let err = DescribeInput::new()
        .parse(&response(
            400,
            r#"{"__type": "ThrottlingException", "message": "Rate exceeded"}"#,
        ))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Unhandled(_)));
    assert_eq!(err.code(), Some("ThrottlingException"));
    assert_eq!(err.message(), Some("Rate exceeded"));
}

#[test]
fn invalid_error_body_is_unhandled() {
    let err = DescribeInput::new()
        .parse(&response(500, "<html>Bad Gateway</html>"))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Unhandled(_)));
    assert_eq!(err.code(), None);
}

#[test]
fn service_error_keeps_raw_response() {
    let result = load_response(
        response(404, r#"{"__type": "NotFoundException", "message": "gone"}"#),
        &DescribeInput::new(),
    );
    match result {
        Err(SdkError::ServiceError { raw, err }) => {
            assert_eq!(raw.status(), 404);
            assert!(err.is_not_found_exception());
        }
        other => panic!("unexpected result: {:?}", other),
    }
}
