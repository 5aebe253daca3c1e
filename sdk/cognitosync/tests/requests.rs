/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use cognitosync::input::{
    DeleteDatasetInput, DescribeDatasetInput, GetIdentityPoolConfigurationInput,
    ListDatasetsInput, ListRecordsInput, RegisterDeviceInput, SetIdentityPoolConfigurationInput,
    UpdateRecordsInput,
};
use cognitosync::model::{CognitoStreams, Operation, Platform, PushSync, RecordPatch, StreamingStatus};
use cognitosync::{Config, Region};
use http::Uri;
use protocol_test_helpers::{
    assert_ok, forbid_headers, forbid_query_params, validate_body, validate_headers,
    validate_path, validate_query_string, MediaType,
};
use smithy_http::operation::{BuildError, BuildHttpRequest, SerializationError};
use smithy_types::Instant;

const POOL: &str = "us-east-1:23EC4050-6AEA-7089-A2DD-08002EXAMPLE";
const IDENTITY: &str = "us-east-1:0000-1111";

#[test]
fn describe_dataset_request() {
    let config = Config::builder().region(Region::new("us-east-1")).build();
    let input = DescribeDatasetInput::builder()
        .identity_pool_id(POOL)
        .identity_id(IDENTITY)
        .dataset_name("notes")
        .build()
        .unwrap();
    let operation = input.make_operation(&config).unwrap();
    let request = operation.request().http();
    assert_eq!(request.method(), "GET");
    assert_eq!(
        request.uri(),
        &Uri::from_static("https://cognito-sync.us-east-1.amazonaws.com/identitypools/us-east-1%3A23EC4050-6AEA-7089-A2DD-08002EXAMPLE/identities/us-east-1%3A0000-1111/datasets/notes")
    );
    assert!(request.body().is_empty());
    assert_eq!(operation.metadata().unwrap().name(), "DescribeDataset");
    assert_eq!(operation.metadata().unwrap().service(), "cognitosync");
}

#[test]
fn every_label_is_required() {
    let missing_identity = DeleteDatasetInput::builder()
        .identity_pool_id(POOL)
        .dataset_name("notes")
        .build()
        .unwrap();
    assert!(matches!(
        missing_identity.build_http_request(),
        Err(BuildError::MissingField {
            field: "identity_id",
            ..
        })
    ));

    let empty_dataset = DeleteDatasetInput::builder()
        .identity_pool_id(POOL)
        .identity_id(IDENTITY)
        .dataset_name("")
        .build()
        .unwrap();
    assert!(matches!(
        empty_dataset.build_http_request(),
        Err(BuildError::MissingField {
            field: "dataset_name",
            ..
        })
    ));
}

#[test]
fn delete_dataset_request() {
    let input = DeleteDatasetInput::builder()
        .identity_pool_id("pool")
        .identity_id("identity")
        .dataset_name("game.save_1")
        .build()
        .unwrap();
    let request = input.build_http_request().unwrap();
    assert_eq!(request.method(), "DELETE");
    assert_ok(validate_path(
        &request,
        "/identitypools/pool/identities/identity/datasets/game.save_1",
    ));
    assert_ok(validate_headers(&request, &[("content-length", "0")]));
}

#[test]
fn list_records_query() {
    let input = ListRecordsInput::builder()
        .identity_pool_id("pool")
        .identity_id("identity")
        .dataset_name("notes")
        .last_sync_count(-1)
        .max_results(50)
        .sync_session_token("token/with+chars")
        .build()
        .unwrap();
    let request = input.build_http_request().unwrap();
    assert_ok(validate_path(
        &request,
        "/identitypools/pool/identities/identity/datasets/notes/records",
    ));
    assert_ok(validate_query_string(
        &request,
        &[
            "lastSyncCount=-1",
            "maxResults=50",
            "syncSessionToken=token%2Fwith%2Bchars",
        ],
    ));
    assert_ok(forbid_query_params(&request, &["nextToken"]));
}

#[test]
fn list_datasets_query() {
    let input = ListDatasetsInput::builder()
        .identity_pool_id("pool")
        .identity_id("identity")
        .next_token("abc")
        .build()
        .unwrap();
    let request = input.build_http_request().unwrap();
    assert_eq!(
        request.uri(),
        "/identitypools/pool/identities/identity/datasets?nextToken=abc"
    );
}

#[test]
fn get_identity_pool_configuration_request() {
    let input = GetIdentityPoolConfigurationInput::builder()
        .identity_pool_id("pool")
        .build()
        .unwrap();
    let request = input.build_http_request().unwrap();
    assert_eq!(request.method(), "GET");
    assert_ok(validate_path(&request, "/identitypools/pool/configuration"));
}

#[test]
fn register_device_body() {
    let input = RegisterDeviceInput::builder()
        .identity_pool_id("pool")
        .identity_id("identity")
        .platform(Platform::Gcm)
        .token("push-token")
        .build()
        .unwrap();
    let request = input.build_http_request().unwrap();
    assert_eq!(request.method(), "POST");
    assert_ok(validate_path(&request, "/identitypools/pool/identity/identity/device"));
    assert_eq!(
        request.body().bytes(),
        br#"{"Platform":"GCM","Token":"push-token"}"#
    );
    assert_ok(validate_headers(
        &request,
        &[("content-type", "application/x-amz-json-1.1")],
    ));
}

#[test]
fn set_identity_pool_configuration_body() {
    let input = SetIdentityPoolConfigurationInput::builder()
        .identity_pool_id("pool")
        .push_sync(
            PushSync::builder()
                .application_arns("arn:aws:sns:us-east-1:123:app/GCM/game")
                .role_arn("arn:aws:iam::123:role/push")
                .build(),
        )
        .cognito_streams(
            CognitoStreams::builder()
                .stream_name("updates")
                .streaming_status(StreamingStatus::Disabled)
                .build(),
        )
        .build()
        .unwrap();
    let request = input.build_http_request().unwrap();
    assert_ok(validate_body(
        request.body().bytes(),
        r#"{
            "PushSync": {
                "ApplicationArns": ["arn:aws:sns:us-east-1:123:app/GCM/game"],
                "RoleArn": "arn:aws:iam::123:role/push"
            },
            "CognitoStreams": {"StreamName": "updates", "StreamingStatus": "DISABLED"}
        }"#,
        MediaType::Json,
    ));
}

fn update_records() -> cognitosync::input::update_records_input::Builder {
    UpdateRecordsInput::builder()
        .identity_pool_id("pool")
        .identity_id("identity")
        .dataset_name("notes")
}

#[test]
fn update_records_request() {
    let input = update_records()
        .device_id("device-1")
        .record_patches(
            RecordPatch::builder()
                .op(Operation::Replace)
                .key("color")
                .value("blue")
                .sync_count(3)
                .device_last_modified_date(Instant::from_epoch_seconds(1_600_000_000))
                .build(),
        )
        .record_patches(
            RecordPatch::builder()
                .op(Operation::Remove)
                .key("size")
                .sync_count(0)
                .build(),
        )
        .sync_session_token("session")
        .client_context("ZGV2aWNl")
        .build()
        .unwrap();
    let request = input.build_http_request().unwrap();
    assert_ok(validate_path(
        &request,
        "/identitypools/pool/identities/identity/datasets/notes",
    ));
    assert_ok(validate_headers(
        &request,
        &[("x-amz-client-context", "ZGV2aWNl")],
    ));
    assert_eq!(
        std::str::from_utf8(request.body().bytes()).unwrap(),
        r#"{"DeviceId":"device-1","RecordPatches":[{"Op":"replace","Key":"color","Value":"blue","SyncCount":3,"DeviceLastModifiedDate":1600000000},{"Op":"remove","Key":"size","SyncCount":0}],"SyncSessionToken":"session"}"#
    );
}

#[test]
fn empty_header_is_not_sent() {
    let input = update_records().client_context("").build().unwrap();
    let request = input.build_http_request().unwrap();
    assert_ok(forbid_headers(&request, &["x-amz-client-context"]));
    assert_eq!(request.body().bytes(), b"{}");
}

#[test]
fn invalid_header_value_is_rejected() {
    let input = update_records().client_context("line\nbreak").build().unwrap();
    assert!(matches!(
        input.build_http_request(),
        Err(BuildError::InvalidField {
            field: "client_context",
            ..
        })
    ));
}

#[test]
fn unrepresentable_timestamp_is_a_serialization_error() {
    let input = update_records()
        .record_patches(
            RecordPatch::builder()
                .key("k")
                .device_last_modified_date(Instant::from_epoch_seconds(i64::MAX))
                .build(),
        )
        .build()
        .unwrap();
    let err = input.build_http_request().unwrap_err();
    match err {
        BuildError::SerializationError(SerializationError::InvalidTimestamp { field, .. }) => {
            assert_eq!(field, "DeviceLastModifiedDate")
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn absent_region_fails_operation() {
    let input = DescribeDatasetInput::builder()
        .identity_pool_id("pool")
        .identity_id("identity")
        .dataset_name("notes")
        .build()
        .unwrap();
    assert!(input.make_operation(&Config::builder().build()).is_err());
}
