/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chimesdkmessaging::input::{
    CreateChannelBanInput, CreateChannelInput, CreateChannelMembershipInput,
    DeleteChannelBanInput, DeleteChannelInput, DescribeChannelInput, GetChannelMessageInput,
    ListChannelBansInput, ListChannelMembershipsInput, ListChannelMessagesInput,
    ListChannelsInput, SendChannelMessageInput, UpdateChannelInput,
};
use chimesdkmessaging::model::{
    ChannelMembershipType, ChannelMessagePersistenceType, ChannelMessageType, ChannelMode,
    ChannelPrivacy, SortOrder, Tag,
};
use chimesdkmessaging::{Config, Endpoint, Region};
use http::Uri;
use protocol_test_helpers::{
    assert_ok, forbid_headers, forbid_query_params, validate_body, validate_headers,
    validate_path, validate_query_string, MediaType,
};
use smithy_http::operation::{BuildError, BuildHttpRequest};
use smithy_types::Instant;

const APP_INSTANCE: &str = "arn:aws:chime:us-east-1:123456789012:app-instance/app";
const CHANNEL: &str = "arn:aws:chime:us-east-1:123456789012:app-instance/app/channel/chan";
const BEARER: &str = "arn:aws:chime:us-east-1:123456789012:app-instance/app/user/alice";
const ENCODED_CHANNEL: &str =
    "arn%3Aaws%3Achime%3Aus-east-1%3A123456789012%3Aapp-instance%2Fapp%2Fchannel%2Fchan";

#[test]
fn describe_channel_request() {
    let config = Config::builder().region(Region::new("us-east-1")).build();
    let input = DescribeChannelInput::builder()
        .channel_arn(CHANNEL)
        .chime_bearer(BEARER)
        .build()
        .unwrap();
    let operation = input.make_operation(&config).unwrap();
    let request = operation.request().http();
    assert_eq!(request.method(), "GET");
    assert_eq!(
        request.uri().to_string(),
        format!(
            "https://messaging-chime.us-east-1.amazonaws.com/channels/{}",
            ENCODED_CHANNEL
        )
    );
    assert_ok(validate_headers(request, &[("x-amz-chime-bearer", BEARER)]));
    assert_eq!(operation.metadata().unwrap().service(), "chimesdkmessaging");
}

#[test]
fn bearer_is_optional() {
    let input = DeleteChannelInput::builder()
        .channel_arn(CHANNEL)
        .build()
        .unwrap();
    let request = input.build_http_request().unwrap();
    assert_eq!(request.method(), "DELETE");
    assert_ok(forbid_headers(&request, &["x-amz-chime-bearer"]));
    assert!(request.body().is_empty());
}

#[test]
fn channel_arn_label_is_required() {
    let input = ListChannelBansInput::builder()
        .chime_bearer(BEARER)
        .build()
        .unwrap();
    assert!(matches!(
        input.build_http_request(),
        Err(BuildError::MissingField {
            field: "channel_arn",
            ..
        })
    ));
}

#[test]
fn list_channels_query() {
    let input = ListChannelsInput::builder()
        .app_instance_arn(APP_INSTANCE)
        .privacy(ChannelPrivacy::Private)
        .max_results(10)
        .chime_bearer(BEARER)
        .build()
        .unwrap();
    let request = input.build_http_request().unwrap();
    assert_ok(validate_path(&request, "/channels"));
    assert_ok(validate_query_string(
        &request,
        &[
            "app-instance-arn=arn%3Aaws%3Achime%3Aus-east-1%3A123456789012%3Aapp-instance%2Fapp",
            "privacy=PRIVATE",
            "max-results=10",
        ],
    ));
    assert_ok(forbid_query_params(&request, &["next-token"]));
}

#[test]
fn list_channel_bans_query() {
    let input = ListChannelBansInput::builder()
        .channel_arn(CHANNEL)
        .next_token("opaque/token==")
        .chime_bearer(BEARER)
        .build()
        .unwrap();
    let request = input.build_http_request().unwrap();
    assert_eq!(
        request.uri().to_string(),
        format!(
            "/channels/{}/bans?next-token=opaque%2Ftoken%3D%3D",
            ENCODED_CHANNEL
        )
    );
}

#[test]
fn create_channel_request() {
    let input = CreateChannelInput::builder()
        .app_instance_arn(APP_INSTANCE)
        .name("general")
        .mode(ChannelMode::Restricted)
        .privacy(ChannelPrivacy::Public)
        .client_request_token("token-1")
        .tags(Tag::builder().key("team").value("video").build())
        .chime_bearer(BEARER)
        .build()
        .unwrap();
    let request = input.build_http_request().unwrap();
    assert_eq!(request.method(), "POST");
    assert_ok(validate_path(&request, "/channels"));
    assert_ok(validate_headers(
        &request,
        &[
            ("content-type", "application/x-amz-json-1.1"),
            ("x-amz-chime-bearer", BEARER),
        ],
    ));
    assert_eq!(
        std::str::from_utf8(request.body().bytes()).unwrap(),
        r#"{"AppInstanceArn":"arn:aws:chime:us-east-1:123456789012:app-instance/app","Name":"general","Mode":"RESTRICTED","Privacy":"PUBLIC","ClientRequestToken":"token-1","Tags":[{"Key":"team","Value":"video"}]}"#
    );
}

#[test]
fn create_channel_ban_request() {
    let input = CreateChannelBanInput::builder()
        .channel_arn(CHANNEL)
        .member_arn("arn:aws:chime:us-east-1:123456789012:app-instance/app/user/bob")
        .chime_bearer(BEARER)
        .build()
        .unwrap();
    let request = input.build_http_request().unwrap();
    assert_ok(validate_path(
        &request,
        &format!("/channels/{}/bans", ENCODED_CHANNEL),
    ));
    assert_ok(validate_body(
        request.body().bytes(),
        r#"{"MemberArn": "arn:aws:chime:us-east-1:123456789012:app-instance/app/user/bob"}"#,
        MediaType::Json,
    ));
}

#[test]
fn update_channel_request() {
    let config = Config::builder()
        .endpoint(Endpoint::new(Uri::from_static("http://localhost:4566")))
        .build();
    let input = UpdateChannelInput::builder()
        .channel_arn("chan")
        .name("renamed")
        .metadata("{\"topic\":\"news\"}")
        .chime_bearer(BEARER)
        .build()
        .unwrap();
    let operation = input.make_operation(&config).unwrap();
    let request = operation.request().http();
    assert_eq!(request.method(), "PUT");
    assert_eq!(request.uri(), &Uri::from_static("http://localhost:4566/channels/chan"));
    assert_ok(validate_body(
        request.body().bytes(),
        r#"{"Name": "renamed", "Metadata": "{\"topic\":\"news\"}"}"#,
        MediaType::Json,
    ));
}

#[test]
fn sensitive_members_are_redacted() {
    let input = CreateChannelInput::builder()
        .name("secret-name")
        .metadata("secret-metadata")
        .client_request_token("secret-token")
        .app_instance_arn(APP_INSTANCE)
        .build()
        .unwrap();
    let debug = format!("{:?}", input);
    assert!(!debug.contains("secret"), "{}", debug);
    assert!(debug.contains("*** Sensitive Data Redacted ***"));
    assert!(debug.contains(APP_INSTANCE));

    let tag = Tag::builder().key("secret-key").value("secret-value").build();
    assert!(!format!("{:?}", tag).contains("secret"));
}

#[test]
fn send_channel_message_request() {
    let input = SendChannelMessageInput::builder()
        .channel_arn(CHANNEL)
        .content("hello")
        .r#type(ChannelMessageType::Standard)
        .persistence(ChannelMessagePersistenceType::NonPersistent)
        .client_request_token("token-1")
        .chime_bearer(BEARER)
        .build()
        .unwrap();
    let request = input.build_http_request().unwrap();
    assert_eq!(request.method(), "POST");
    assert_eq!(
        request.uri().to_string(),
        format!("/channels/{}/messages", ENCODED_CHANNEL)
    );
    assert_ok(validate_body(
        request.body().bytes(),
        r#"{"Content":"hello","Type":"STANDARD","Persistence":"NON_PERSISTENT","ClientRequestToken":"token-1"}"#,
        MediaType::Json,
    ));
    assert_ok(validate_headers(&request, &[("x-amz-chime-bearer", BEARER)]));

    let debug = format!("{:?}", input);
    assert!(!debug.contains("hello"), "{}", debug);
    assert!(!debug.contains("token-1"), "{}", debug);
    assert!(debug.contains("NonPersistent"));
}

#[test]
fn list_channel_messages_query() {
    let input = ListChannelMessagesInput::builder()
        .channel_arn(CHANNEL)
        .sort_order(SortOrder::Ascending)
        .not_before(Instant::from_epoch_seconds(1576540098))
        .not_after(Instant::from_secs_and_nanos(1576540158, 500_000_000))
        .max_results(50)
        .build()
        .unwrap();
    let request = input.build_http_request().unwrap();
    assert_ok(validate_path(
        &request,
        &format!("/channels/{}/messages", ENCODED_CHANNEL),
    ));
    assert_ok(validate_query_string(
        &request,
        &[
            "sort-order=ASCENDING",
            "not-before=2019-12-16T23%3A48%3A18Z",
            "not-after=2019-12-16T23%3A49%3A18.5Z",
            "max-results=50",
        ],
    ));
    assert_ok(forbid_query_params(&request, &["next-token"]));
}

#[test]
fn unrepresentable_query_timestamp_is_rejected() {
    let input = ListChannelMessagesInput::builder()
        .channel_arn(CHANNEL)
        .not_before(Instant::from_epoch_seconds(i64::MAX))
        .build()
        .unwrap();
    assert!(matches!(
        input.build_http_request(),
        Err(BuildError::InvalidField {
            field: "not_before",
            ..
        })
    ));
}

#[test]
fn get_channel_message_request() {
    let input = GetChannelMessageInput::builder()
        .channel_arn(CHANNEL)
        .message_id("msg/1")
        .chime_bearer(BEARER)
        .build()
        .unwrap();
    let request = input.build_http_request().unwrap();
    assert_eq!(request.method(), "GET");
    assert_eq!(
        request.uri().to_string(),
        format!("/channels/{}/messages/msg%2F1", ENCODED_CHANNEL)
    );
    assert!(request.body().is_empty());

    let missing_message = GetChannelMessageInput::builder()
        .channel_arn(CHANNEL)
        .build()
        .unwrap();
    assert!(matches!(
        missing_message.build_http_request(),
        Err(BuildError::MissingField {
            field: "message_id",
            ..
        })
    ));
}

#[test]
fn channel_membership_requests() {
    let input = CreateChannelMembershipInput::builder()
        .channel_arn(CHANNEL)
        .member_arn(BEARER)
        .r#type(ChannelMembershipType::Hidden)
        .build()
        .unwrap();
    let request = input.build_http_request().unwrap();
    assert_eq!(request.method(), "POST");
    assert_ok(validate_path(
        &request,
        &format!("/channels/{}/memberships", ENCODED_CHANNEL),
    ));
    let expected = format!(r#"{{"MemberArn":"{}","Type":"HIDDEN"}}"#, BEARER);
    assert_ok(validate_body(request.body().bytes(), &expected, MediaType::Json));

    let input = ListChannelMembershipsInput::builder()
        .channel_arn(CHANNEL)
        .r#type(ChannelMembershipType::Default)
        .next_token("page 2")
        .build()
        .unwrap();
    let request = input.build_http_request().unwrap();
    assert_eq!(request.method(), "GET");
    assert_ok(validate_query_string(
        &request,
        &["type=DEFAULT", "next-token=page%202"],
    ));
    assert_ok(forbid_query_params(&request, &["max-results"]));
}

#[test]
fn delete_channel_ban_request() {
    let input = DeleteChannelBanInput::builder()
        .channel_arn(CHANNEL)
        .member_arn(BEARER)
        .chime_bearer(BEARER)
        .build()
        .unwrap();
    let request = input.build_http_request().unwrap();
    assert_eq!(request.method(), "DELETE");
    assert_eq!(
        request.uri().to_string(),
        format!(
            "/channels/{}/bans/arn%3Aaws%3Achime%3Aus-east-1%3A123456789012%3Aapp-instance%2Fapp%2Fuser%2Falice",
            ENCODED_CHANNEL
        )
    );
    assert!(request.body().is_empty());

    let missing_member = DeleteChannelBanInput::builder()
        .channel_arn(CHANNEL)
        .build()
        .unwrap();
    assert!(matches!(
        missing_member.build_http_request(),
        Err(BuildError::MissingField {
            field: "member_arn",
            ..
        })
    ));
}
