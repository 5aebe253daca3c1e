/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use chimesdkmessaging::error::ErrorKind;
use chimesdkmessaging::model::{
    ChannelMessagePersistenceType, ChannelMessageType, ChannelMode, ChannelPrivacy, ErrorCode,
    Identity,
};
use chimesdkmessaging::operation::{
    CreateChannel, CreateChannelBan, CreateChannelMembership, DeleteChannel, DeleteChannelBan,
    DescribeChannel, GetChannelMessage, ListChannelBans, ListChannelMemberships,
    ListChannelMessages, ListChannels, SendChannelMessage, UpdateChannel,
};
use pretty_assertions::assert_eq;
use smithy_http::middleware::load_response;
use smithy_http::response::ParseStrictResponse;
use smithy_http::result::SdkError;
use smithy_types::Instant;

fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
    http::Response::builder()
        .status(status)
        .body(Bytes::from_static(body.as_bytes()))
        .unwrap()
}

#[test]
fn describe_channel_response() {
    let body = r#"{"Channel": {
        "Name": "general",
        "ChannelArn": "arn:aws:chime:us-east-1:123:app-instance/app/channel/chan",
        "Mode": "RESTRICTED",
        "Privacy": "PRIVATE",
        "Metadata": null,
        "CreatedBy": {"Arn": "arn:aws:chime:us-east-1:123:app-instance/app/user/alice", "Name": "Alice"},
        "CreatedTimestamp": 1617000000.25,
        "LastUpdatedTimestamp": 1617000100,
        "ChannelFlowArn": "arn:aws:chime:us-east-1:123:app-instance/app/channel-flow/f"
    }}"#;
    let channel = DescribeChannel::new()
        .parse(&response(200, body))
        .unwrap()
        .channel
        .unwrap();
    assert_eq!(channel.name.as_deref(), Some("general"));
    assert_eq!(channel.mode, Some(ChannelMode::Restricted));
    assert_eq!(channel.privacy, Some(ChannelPrivacy::Private));
    assert_eq!(channel.metadata, None);
    assert_eq!(
        channel.created_by,
        Some(
            Identity::builder()
                .arn("arn:aws:chime:us-east-1:123:app-instance/app/user/alice")
                .name("Alice")
                .build()
        )
    );
    assert_eq!(
        channel.created_timestamp,
        Some(Instant::from_fractional_seconds(1_617_000_000, 0.25))
    );
    assert_eq!(
        channel.last_updated_timestamp,
        Some(Instant::from_epoch_seconds(1_617_000_100))
    );
    assert_eq!(channel.last_message_timestamp, None);
}

#[test]
fn list_channels_response() {
    let body = r#"{
        "Channels": [
            {"Name": "a", "Mode": "UNRESTRICTED", "Privacy": "PUBLIC"},
            {"Name": "b", "Mode": "MODERATED"}
        ],
        "NextToken": "next"
    }"#;
    let output = ListChannels::new().parse(&response(200, body)).unwrap();
    let channels = output.channels.as_ref().unwrap();
    assert_eq!(channels.len(), 2);
    assert_eq!(channels[1].mode, Some(ChannelMode::Unknown("MODERATED".into())));
    assert_eq!(output.next_token.as_deref(), Some("next"));
    assert!(!format!("{:?}", output).contains("\"next\""));
}

#[test]
fn list_channel_bans_response() {
    let body = r#"{
        "ChannelArn": "chan",
        "ChannelBans": [{"Member": {"Arn": "bob"}}, {"Member": null}, 7]
    }"#;
    let output = ListChannelBans::new().parse(&response(200, body)).unwrap();
    let bans = output.channel_bans.unwrap();
    assert_eq!(bans.len(), 2);
    assert_eq!(bans[0].member.as_ref().and_then(|m| m.arn.as_deref()), Some("bob"));
    assert_eq!(bans[1].member, None);
}

#[test]
fn create_responses() {
    let output = CreateChannel::new()
        .parse(&response(201, r#"{"ChannelArn": "chan"}"#))
        .unwrap();
    assert_eq!(output.channel_arn.as_deref(), Some("chan"));

    let output = CreateChannelBan::new()
        .parse(&response(
            201,
            r#"{"ChannelArn": "chan", "Member": {"Arn": "bob", "Name": "Bob"}}"#,
        ))
        .unwrap();
    assert_eq!(output.member.unwrap().name.as_deref(), Some("Bob"));

    let output = UpdateChannel::new()
        .parse(&response(200, r#"{"ChannelArn": "chan"}"#))
        .unwrap();
    assert_eq!(output.channel_arn.as_deref(), Some("chan"));
}

#[test]
fn delete_channel_response() {
    assert!(DeleteChannel::new().parse(&response(204, "")).is_ok());
    assert!(DeleteChannel::new().parse(&response(204, "[]")).is_err());
}

#[test]
fn delete_channel_ban_response() {
    assert!(DeleteChannelBan::new().parse(&response(204, "")).is_ok());
    assert!(DeleteChannelBan::new()
        .parse(&response(204, r#"{"unexpected": true}"#))
        .is_ok());
    let err = DeleteChannelBan::new()
        .parse(&response(204, "\"gone\""))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Unhandled(_)));
}

#[test]
fn get_channel_message_response() {
    let body = r#"{"ChannelMessage": {
        "ChannelArn": "chan",
        "MessageId": "msg-1",
        "Content": "hello",
        "Type": "STANDARD",
        "CreatedTimestamp": 1576540098.001,
        "LastEditedTimestamp": null,
        "Sender": {"Arn": "alice", "Name": "Alice"},
        "Redacted": false,
        "Persistence": "PERSISTENT"
    }}"#;
    let output = GetChannelMessage::new().parse(&response(200, body)).unwrap();
    let message = output.channel_message.unwrap();
    assert_eq!(message.message_id.as_deref(), Some("msg-1"));
    assert_eq!(message.content.as_deref(), Some("hello"));
    assert_eq!(message.r#type, Some(ChannelMessageType::Standard));
    assert_eq!(
        message.created_timestamp,
        Some(Instant::from_secs_and_nanos(1576540098, 1_000_000))
    );
    assert_eq!(message.last_edited_timestamp, None);
    assert_eq!(message.redacted, Some(false));
    assert_eq!(
        message.persistence,
        Some(ChannelMessagePersistenceType::Persistent)
    );
    assert_eq!(
        message.sender,
        Some(Identity::builder().arn("alice").name("Alice").build())
    );
    assert!(!format!("{:?}", message).contains("hello"));
}

#[test]
fn list_channel_messages_response() {
    let body = r#"{
        "ChannelArn": "chan",
        "NextToken": "next",
        "ChannelMessages": [
            {"MessageId": "1", "Content": "first", "Type": "CONTROL"},
            {"MessageId": "2", "Redacted": true}
        ]
    }"#;
    let output = ListChannelMessages::new().parse(&response(200, body)).unwrap();
    assert_eq!(output.channel_arn.as_deref(), Some("chan"));
    assert_eq!(output.next_token.as_deref(), Some("next"));
    let messages = output.channel_messages.unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].r#type, Some(ChannelMessageType::Control));
    assert_eq!(messages[1].content, None);
    assert_eq!(messages[1].redacted, Some(true));
}

#[test]
fn membership_responses() {
    let output = CreateChannelMembership::new()
        .parse(&response(
            201,
            r#"{"ChannelArn": "chan", "Member": {"Arn": "bob"}}"#,
        ))
        .unwrap();
    assert_eq!(output.member.unwrap().arn.as_deref(), Some("bob"));

    let body = r#"{"ChannelArn": "chan", "ChannelMemberships": [{"Member": {"Arn": "alice"}}, {}]}"#;
    let output = ListChannelMemberships::new()
        .parse(&response(200, body))
        .unwrap();
    let memberships = output.channel_memberships.unwrap();
    assert_eq!(memberships.len(), 2);
    assert_eq!(
        memberships[0].member,
        Some(Identity::builder().arn("alice").build())
    );
    assert_eq!(memberships[1].member, None);
    assert_eq!(output.next_token, None);
}

#[test]
fn send_channel_message_response() {
    let output = SendChannelMessage::new()
        .parse(&response(201, r#"{"ChannelArn": "chan", "MessageId": "msg-2"}"#))
        .unwrap();
    assert_eq!(output.channel_arn.as_deref(), Some("chan"));
    assert_eq!(output.message_id.as_deref(), Some("msg-2"));
}

#[test]
fn modeled_error_carries_code() {
    let response = http::Response::builder()
        .status(404)
        .header("x-amzn-errortype", "NotFoundException")
        .header("x-amzn-requestid", "req-9")
        .body(Bytes::from_static(
            br#"{"Code": "NotFound", "Message": "Channel chan not found"}"#,
        ))
        .unwrap();
    let err = DescribeChannel::new().parse(&response).unwrap_err();
    assert!(err.is_not_found_exception());
    assert_eq!(err.message(), Some("Channel chan not found"));
    assert_eq!(err.request_id(), Some("req-9"));
    assert_eq!(err.to_string(), "NotFoundException: Channel chan not found");
    match &err.kind {
        ErrorKind::NotFoundException(inner) => {
            assert_eq!(inner.code(), Some(&ErrorCode::NotFound));
            assert_eq!(inner.message(), Some("Channel chan not found"));
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
}

#[test]
fn unknown_error_code_value_is_kept() {
    let response = http::Response::builder()
        .status(429)
        .header("x-amzn-errortype", "ThrottledClientException")
        .body(Bytes::from_static(
            br#"{"Code": "SlowDown", "Message": "too fast"}"#,
        ))
        .unwrap();
    let err = ListChannels::new().parse(&response).unwrap_err();
    match err.kind {
        ErrorKind::ThrottledClientException(inner) => {
            assert_eq!(inner.code, Some(ErrorCode::Unknown("SlowDown".into())))
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
}

#[test]
fn error_body_with_wrong_member_type_is_unhandled() {
    let response = http::Response::builder()
        .status(400)
        .header("x-amzn-errortype", "BadRequestException")
        .body(Bytes::from_static(br#"{"Code": 400, "Message": "bad"}"#))
        .unwrap();
    let err = CreateChannel::new().parse(&response).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Unhandled(_)));
}

#[test]
fn service_error_through_load_response() {
    let result = load_response(
        http::Response::builder()
            .status(503)
            .header("x-amzn-errortype", "ServiceUnavailableException")
            .body(Bytes::from_static(br#"{"Message": "try later"}"#))
            .unwrap(),
        &ListChannels::new(),
    );
    match result {
        Err(SdkError::ServiceError { raw, err }) => {
            assert_eq!(raw.status(), 503);
            assert!(err.is_service_unavailable_exception());
            assert_eq!(err.to_string(), "ServiceUnavailableException: try later");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}
