/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::Uri;
use medialive::input::{
    CreateChannelInput, CreateInputInput, DeleteChannelInput, DeleteInputInput,
    DescribeInputInput, ListInputsInput, StartChannelInput, StopChannelInput, UpdateChannelInput,
};
use medialive::model::{ChannelClass, InputAttachment, InputDestinationRequest, InputType, LogLevel};
use medialive::{Config, Endpoint, Region};
use protocol_test_helpers::{
    assert_ok, forbid_query_params, validate_body, validate_headers, validate_path,
    validate_query_string, MediaType,
};
use smithy_http::operation::{build_http_request, BuildError, BuildHttpRequest};

fn config() -> Config {
    Config::builder().region(Region::new("us-west-2")).build()
}

#[test]
fn describe_input_request() {
    let input = DescribeInputInput::builder().input_id("abc").build().unwrap();
    let operation = input.make_operation(&config()).unwrap();
    let request = operation.request().http();
    assert_eq!(request.method(), "GET");
    assert_eq!(
        request.uri(),
        &Uri::from_static("https://medialive.us-west-2.amazonaws.com/prod/inputs/abc")
    );
    assert_ok(validate_headers(request, &[("content-length", "0")]));
    assert!(request.headers().get("content-type").is_none());
    assert!(request.body().is_empty());

    let metadata = operation.metadata().unwrap();
    assert_eq!(metadata.name(), "DescribeInput");
    assert_eq!(metadata.service(), "medialive");
}

#[test]
fn labels_are_percent_encoded() {
    let input = DescribeInputInput::builder()
        .input_id("a b/c")
        .build()
        .unwrap();
    let request = input.build_http_request().unwrap();
    assert_eq!(request.uri().path(), "/prod/inputs/a%20b%2Fc");
}

#[test]
fn missing_or_empty_label_is_rejected() {
    let unset = DescribeInputInput::builder().build().unwrap();
    assert!(matches!(
        unset.build_http_request(),
        Err(BuildError::MissingField {
            field: "input_id",
            ..
        })
    ));

    let empty = DeleteInputInput::builder().input_id("").build().unwrap();
    let err = empty.make_operation(&config()).unwrap_err();
    assert!(matches!(
        err,
        BuildError::MissingField {
            field: "input_id",
            ..
        }
    ));
    assert_eq!(err.to_string(), "input_id was missing. cannot be empty or unset");
}

#[test]
fn absent_input_is_rejected() {
    let err = build_http_request::<DescribeInputInput>(None).unwrap_err();
    assert!(matches!(
        err,
        BuildError::MissingInput {
            input: "DescribeInputInput"
        }
    ));
}

#[test]
fn delete_input_has_no_body() {
    let input = DeleteInputInput::builder().input_id("1234").build().unwrap();
    let request = input.build_http_request().unwrap();
    assert_eq!(request.method(), "DELETE");
    assert_ok(validate_path(&request, "/prod/inputs/1234"));
    assert_ok(validate_body(request.body().bytes(), "", MediaType::Json));
}

#[test]
fn list_inputs_query() {
    let input = ListInputsInput::builder()
        .max_results(25)
        .next_token("page 2")
        .build()
        .unwrap();
    let request = input.build_http_request().unwrap();
    assert_ok(validate_path(&request, "/prod/inputs"));
    assert_ok(validate_query_string(
        &request,
        &["maxResults=25", "nextToken=page%202"],
    ));

    let first_page = ListInputsInput::builder().build().unwrap();
    let request = first_page.build_http_request().unwrap();
    assert_eq!(request.uri(), "/prod/inputs");
    assert_ok(forbid_query_params(&request, &["maxResults", "nextToken"]));
}

#[test]
fn create_input_body() {
    let input = CreateInputInput::builder()
        .destinations(
            InputDestinationRequest::builder()
                .stream_name("live/stream")
                .build(),
        )
        .input_security_groups("123456")
        .name("my-input")
        .tags("env", "prod")
        .r#type(InputType::RtmpPush)
        .build()
        .unwrap();
    let request = input.build_http_request().unwrap();
    assert_eq!(request.method(), "POST");
    assert_ok(validate_path(&request, "/prod/inputs"));

    let expected = r#"{"destinations":[{"streamName":"live/stream"}],"inputSecurityGroups":["123456"],"name":"my-input","tags":{"env":"prod"},"type":"RTMP_PUSH"}"#;
    assert_eq!(std::str::from_utf8(request.body().bytes()).unwrap(), expected);
    let content_length = expected.len().to_string();
    assert_ok(validate_headers(
        &request,
        &[
            ("content-type", "application/x-amz-json-1.1"),
            ("content-length", content_length.as_str()),
        ],
    ));
}

#[test]
fn unknown_enum_value_is_sent_verbatim() {
    let input = CreateInputInput::builder()
        .r#type(InputType::from("SRT_CALLER"))
        .build()
        .unwrap();
    let request = input.build_http_request().unwrap();
    assert_ok(validate_body(
        request.body().bytes(),
        r#"{"type":"SRT_CALLER"}"#,
        MediaType::Json,
    ));
}

#[test]
fn empty_input_serializes_to_empty_object() {
    let input = CreateInputInput::builder().build().unwrap();
    let request = input.build_http_request().unwrap();
    assert_eq!(request.body().bytes(), b"{}");
    assert_ok(validate_headers(&request, &[("content-length", "2")]));
}

#[test]
fn update_channel_splits_label_and_body() {
    let input = UpdateChannelInput::builder()
        .channel_id("9876")
        .input_attachments(
            InputAttachment::builder()
                .input_attachment_name("primary")
                .input_id("1234")
                .build(),
        )
        .log_level(LogLevel::Debug)
        .name("renamed")
        .build()
        .unwrap();
    let request = input.build_http_request().unwrap();
    assert_eq!(request.method(), "PUT");
    assert_ok(validate_path(&request, "/prod/channels/9876"));
    assert_ok(validate_body(
        request.body().bytes(),
        r#"{"inputAttachments":[{"inputAttachmentName":"primary","inputId":"1234"}],"logLevel":"DEBUG","name":"renamed"}"#,
        MediaType::Json,
    ));
}

#[test]
fn create_channel_body() {
    let input = CreateChannelInput::builder()
        .channel_class(ChannelClass::SinglePipeline)
        .input_attachments(InputAttachment::builder().input_id("1234").build())
        .name("live")
        .request_id("req-7")
        .role_arn("arn:aws:iam::123456789012:role/MediaLiveAccessRole")
        .build()
        .unwrap();
    let request = input.build_http_request().unwrap();
    assert_eq!(request.method(), "POST");
    assert_ok(validate_path(&request, "/prod/channels"));
    assert_ok(validate_body(
        request.body().bytes(),
        r#"{"channelClass":"SINGLE_PIPELINE","inputAttachments":[{"inputId":"1234"}],"name":"live","requestId":"req-7","roleArn":"arn:aws:iam::123456789012:role/MediaLiveAccessRole"}"#,
        MediaType::Json,
    ));
}

#[test]
fn channel_lifecycle_requests() {
    let start = StartChannelInput::builder().channel_id("9876").build().unwrap();
    let request = start.build_http_request().unwrap();
    assert_eq!(request.method(), "POST");
    assert_ok(validate_path(&request, "/prod/channels/9876/start"));
    assert!(request.body().bytes().is_empty());

    let stop = StopChannelInput::builder().channel_id("9876").build().unwrap();
    let request = stop.build_http_request().unwrap();
    assert_eq!(request.method(), "POST");
    assert_ok(validate_path(&request, "/prod/channels/9876/stop"));

    let delete = DeleteChannelInput::builder().channel_id("9876").build().unwrap();
    let request = delete.build_http_request().unwrap();
    assert_eq!(request.method(), "DELETE");
    assert_ok(validate_path(&request, "/prod/channels/9876"));

    let unset = StartChannelInput::builder().build().unwrap();
    assert!(matches!(
        unset.build_http_request(),
        Err(BuildError::MissingField {
            field: "channel_id",
            ..
        })
    ));
}

#[test]
fn endpoint_override() {
    let config = Config::builder()
        .region(Region::new("us-west-2"))
        .endpoint(Endpoint::new(Uri::from_static("http://localhost:8000")))
        .build();
    let input = DescribeInputInput::builder().input_id("abc").build().unwrap();
    let operation = input.make_operation(&config).unwrap();
    assert_eq!(
        operation.request().http().uri(),
        &Uri::from_static("http://localhost:8000/prod/inputs/abc")
    );
}

#[test]
fn operation_without_region_or_endpoint_fails() {
    let input = DescribeInputInput::builder().input_id("abc").build().unwrap();
    let err = input.make_operation(&Config::builder().build()).unwrap_err();
    assert!(matches!(err, BuildError::MissingField { field: "region", .. }));
}
