/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use cognitosync::error::ErrorKind;
use cognitosync::model::{Dataset, Record, StreamingStatus};
use cognitosync::operation::{
    DeleteDataset, DescribeDataset, GetIdentityPoolConfiguration, ListDatasets, ListRecords,
    RegisterDevice, UpdateRecords,
};
use pretty_assertions::assert_eq;
use smithy_http::response::ParseStrictResponse;
use smithy_types::Instant;

fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
    http::Response::builder()
        .status(status)
        .body(Bytes::from_static(body.as_bytes()))
        .unwrap()
}

#[test]
fn describe_dataset_response() {
    let body = r#"{"Dataset": {
        "IdentityId": "us-east-1:abc",
        "DatasetName": "notes",
        "CreationDate": 1.6E9,
        "LastModifiedDate": 1600000123,
        "LastModifiedBy": "device-1",
        "DataStorage": 9007199254740993,
        "NumRecords": 4,
        "Owner": {"Region": "us-east-1"}
    }}"#;
    let output = DescribeDataset::new().parse(&response(200, body)).unwrap();
    assert_eq!(
        output.dataset,
        Some(
            Dataset::builder()
                .identity_id("us-east-1:abc")
                .dataset_name("notes")
                .creation_date(Instant::from_epoch_seconds(1_600_000_000))
                .last_modified_date(Instant::from_epoch_seconds(1_600_000_123))
                .last_modified_by("device-1")
                .data_storage(9_007_199_254_740_993)
                .num_records(4)
                .build()
        )
    );
}

#[test]
fn fractional_timestamps_keep_their_fraction() {
    let output = DeleteDataset::new()
        .parse(&response(200, r#"{"Dataset": {"CreationDate": 1576540098.52}}"#))
        .unwrap();
    let created = output.dataset.unwrap().creation_date.unwrap();
    assert_eq!(created.epoch_seconds(), 1576540098);
    assert_eq!(created.epoch_subsecond_nanos(), 520_000_000);
}

#[test]
fn list_records_response() {
    let body = r#"{
        "Records": [
            {"Key": "color", "Value": "blue", "SyncCount": 3, "LastModifiedDate": 1600000000},
            null,
            {"Key": "size", "SyncCount": 1}
        ],
        "Count": 2,
        "DatasetSyncCount": 7,
        "MergedDatasetNames": ["a", "b"],
        "DatasetExists": true,
        "DatasetDeletedAfterRequestedSyncCount": false,
        "SyncSessionToken": "session"
    }"#;
    let output = ListRecords::new().parse(&response(200, body)).unwrap();
    assert_eq!(
        output.records,
        Some(vec![
            Record::builder()
                .key("color")
                .value("blue")
                .sync_count(3)
                .last_modified_date(Instant::from_epoch_seconds(1_600_000_000))
                .build(),
            Record::builder().key("size").sync_count(1).build(),
        ])
    );
    assert_eq!(output.count, Some(2));
    assert_eq!(output.dataset_sync_count, Some(7));
    assert_eq!(
        output.merged_dataset_names,
        Some(vec!["a".to_string(), "b".to_string()])
    );
    assert_eq!(output.dataset_exists, Some(true));
    assert_eq!(output.dataset_deleted_after_requested_sync_count, Some(false));
    assert_eq!(output.sync_session_token.as_deref(), Some("session"));
    assert_eq!(output.next_token, None);
}

#[test]
fn list_datasets_response() {
    let body = r#"{"Datasets": [{"DatasetName": "a"}, {"DatasetName": "b"}], "Count": 2, "NextToken": "next"}"#;
    let output = ListDatasets::new().parse(&response(200, body)).unwrap();
    assert_eq!(output.datasets.map(|d| d.len()), Some(2));
    assert_eq!(output.next_token.as_deref(), Some("next"));
}

#[test]
fn pool_configuration_response() {
    let body = r#"{
        "IdentityPoolId": "pool",
        "PushSync": {"ApplicationArns": [], "RoleArn": "arn:aws:iam::123:role/push"},
        "CognitoStreams": {"StreamName": "updates", "StreamingStatus": "PAUSED"}
    }"#;
    let output = GetIdentityPoolConfiguration::new()
        .parse(&response(200, body))
        .unwrap();
    assert_eq!(output.identity_pool_id.as_deref(), Some("pool"));
    assert_eq!(output.push_sync.unwrap().application_arns, Some(vec![]));
    assert_eq!(
        output.cognito_streams.unwrap().streaming_status,
        Some(StreamingStatus::Unknown("PAUSED".into()))
    );
}

#[test]
fn wrong_scalar_types_are_rejected() {
    for body in &[
        r#"{"Count": "2"}"#,
        r#"{"Count": 2147483648}"#,
        r#"{"DatasetExists": "true"}"#,
        r#"{"DatasetSyncCount": 1.5}"#,
        r#"{"Records": [{"SyncCount": true}]}"#,
        r#"{"Records": [{"LastModifiedDate": "2020-09-13T12:26:40Z"}]}"#,
    ] {
        let err = ListRecords::new().parse(&response(200, body)).unwrap_err();
        assert!(
            matches!(err.kind, ErrorKind::Unhandled(_)),
            "{} should be rejected",
            body
        );
    }
}

#[test]
fn non_object_dataset_reads_as_absent() {
    let output = DescribeDataset::new()
        .parse(&response(200, r#"{"Dataset": ["notes"]}"#))
        .unwrap();
    assert_eq!(output.dataset, None);
}

#[test]
fn register_device_response() {
    let output = RegisterDevice::new()
        .parse(&response(200, r#"{"DeviceId": "device-1"}"#))
        .unwrap();
    assert_eq!(output.device_id.as_deref(), Some("device-1"));

    let output = RegisterDevice::new().parse(&response(200, "")).unwrap();
    assert_eq!(output.device_id, None);
}

#[test]
fn conflict_error() {
    let response = http::Response::builder()
        .status(409)
        .header("x-amzn-RequestId", "abc-123")
        .body(Bytes::from_static(
            br#"{"__type": "ResourceConflictException", "message": "sync count mismatch"}"#,
        ))
        .unwrap();
    let err = UpdateRecords::new().parse(&response).unwrap_err();
    assert!(err.is_resource_conflict_exception());
    assert_eq!(err.request_id(), Some("abc-123"));
    assert_eq!(
        err.to_string(),
        "ResourceConflictException: sync count mismatch"
    );
    match &err.kind {
        ErrorKind::ResourceConflictException(inner) => {
            assert_eq!(inner.message(), Some("sync count mismatch"))
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
}

#[test]
fn error_without_code_is_unhandled() {
    let err = UpdateRecords::new()
        .parse(&response(500, r#"{"message": "internal"}"#))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Unhandled(_)));
    assert_eq!(err.code(), None);
    assert_eq!(err.message(), Some("internal"));
}
