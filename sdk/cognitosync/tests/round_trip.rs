/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use cognitosync::input::DescribeDatasetInput;
use cognitosync::json_deser::{deser_structure_dataset, deser_structure_record, deser_structure_record_patch};
use cognitosync::json_ser::{serialize_structure_dataset, serialize_structure_record, serialize_structure_record_patch};
use cognitosync::model::{Dataset, Operation, Platform, Record, RecordPatch};
use proptest::option;
use proptest::prelude::*;
use proptest::sample::select;
use smithy_json::deserialize::json_token_iter;
use smithy_json::serialize::JsonObjectWriter;
use smithy_http::operation::{BuildError, BuildHttpRequest};
use smithy_types::Instant;

fn text() -> impl Strategy<Value = Option<String>> {
    option::of(any::<String>())
}

fn timestamp() -> impl Strategy<Value = Option<Instant>> {
    option::of(
        (-1_000_000_000i64..4_000_000_000, 0u32..1_000_000_000)
            .prop_map(|(seconds, nanos)| Instant::from_secs_and_nanos(seconds, nanos)),
    )
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        select(Operation::values()).prop_map(Operation::from),
        any::<String>().prop_map(|s| Operation::from(s.as_str())),
    ]
}

fn dataset() -> impl Strategy<Value = Dataset> {
    (
        (text(), text(), timestamp(), timestamp()),
        (text(), option::of(any::<i64>()), option::of(any::<i64>())),
    )
        .prop_map(
            |(
                (identity_id, dataset_name, creation_date, last_modified_date),
                (last_modified_by, data_storage, num_records),
            )| {
                Dataset::builder()
                    .set_identity_id(identity_id)
                    .set_dataset_name(dataset_name)
                    .set_creation_date(creation_date)
                    .set_last_modified_date(last_modified_date)
                    .set_last_modified_by(last_modified_by)
                    .set_data_storage(data_storage)
                    .set_num_records(num_records)
                    .build()
            },
        )
}

fn record() -> impl Strategy<Value = Record> {
    (
        text(),
        text(),
        option::of(any::<i64>()),
        timestamp(),
        text(),
        timestamp(),
    )
        .prop_map(|(key, value, sync_count, modified, modified_by, device_modified)| {
            Record::builder()
                .set_key(key)
                .set_value(value)
                .set_sync_count(sync_count)
                .set_last_modified_date(modified)
                .set_last_modified_by(modified_by)
                .set_device_last_modified_date(device_modified)
                .build()
        })
}

fn record_patch() -> impl Strategy<Value = RecordPatch> {
    (
        option::of(operation()),
        text(),
        text(),
        option::of(any::<i64>()),
        timestamp(),
    )
        .prop_map(|(op, key, value, sync_count, device_modified)| {
            RecordPatch::builder()
                .set_op(op)
                .set_key(key)
                .set_value(value)
                .set_sync_count(sync_count)
                .set_device_last_modified_date(device_modified)
                .build()
        })
}

fn to_json<T>(
    value: &T,
    serialize: fn(
        &mut JsonObjectWriter,
        &T,
    ) -> Result<(), smithy_http::operation::SerializationError>,
) -> String {
    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    serialize(&mut object, value).unwrap();
    object.finish();
    out
}

proptest! {
    #[test]
    fn dataset_round_trips(dataset in dataset()) {
        let json = to_json(&dataset, serialize_structure_dataset);
        let mut tokens = json_token_iter(json.as_bytes()).peekable();
        prop_assert_eq!(deser_structure_dataset(&mut tokens).unwrap(), Some(dataset));
    }

    #[test]
    fn record_round_trips(record in record()) {
        let json = to_json(&record, serialize_structure_record);
        let mut tokens = json_token_iter(json.as_bytes()).peekable();
        prop_assert_eq!(deser_structure_record(&mut tokens).unwrap(), Some(record));
    }

    #[test]
    fn record_patch_round_trips(patch in record_patch()) {
        let json = to_json(&patch, serialize_structure_record_patch);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        if let Some(sync_count) = patch.sync_count {
            prop_assert_eq!(value["SyncCount"].as_i64(), Some(sync_count));
        }
        let mut tokens = json_token_iter(json.as_bytes()).peekable();
        prop_assert_eq!(deser_structure_record_patch(&mut tokens).unwrap(), Some(patch));
    }
}

#[test]
fn absent_members_are_omitted() {
    let dataset = Dataset::builder()
        .identity_id("us-east-1:abc")
        .dataset_name("notes")
        .build();
    assert_eq!(
        to_json(&dataset, serialize_structure_dataset),
        r#"{"IdentityId":"us-east-1:abc","DatasetName":"notes"}"#
    );
}

/// Cognito names a dataset with the triple `{IdentityPoolId, IdentityId, DatasetName}`. The pool
/// and identity travel as URI labels, while a `Dataset` body carries the rest. An absent
/// `IdentityId` never reaches the wire in either place.
#[test]
fn pool_identity_dataset_triple_without_identity() {
    let input = DescribeDatasetInput::builder()
        .identity_pool_id("us-east-1:abc")
        .dataset_name("notes")
        .build()
        .unwrap();
    assert_eq!(input.identity_id, None);
    assert!(matches!(
        input.build_http_request(),
        Err(BuildError::MissingField {
            field: "identity_id",
            ..
        })
    ));

    let json = r#"{"IdentityPoolId":"us-east-1:abc","DatasetName":"notes"}"#;
    let mut tokens = json_token_iter(json.as_bytes()).peekable();
    let dataset = deser_structure_dataset(&mut tokens).unwrap().unwrap();
    assert_eq!(dataset.identity_id, None);
    assert_eq!(dataset.dataset_name.as_deref(), Some("notes"));
    assert_eq!(
        to_json(&dataset, serialize_structure_dataset),
        r#"{"DatasetName":"notes"}"#
    );
}

#[test]
fn millisecond_timestamps_survive_a_round_trip() {
    let record = Record::builder()
        .key("highscore")
        .last_modified_date(Instant::from_secs_and_nanos(1576540098, 1_000_000))
        .device_last_modified_date(Instant::from_secs_and_nanos(-2, 500_000_000))
        .build();
    let json = to_json(&record, serialize_structure_record);
    assert_eq!(
        json,
        r#"{"Key":"highscore","LastModifiedDate":1576540098.001,"DeviceLastModifiedDate":-1.5}"#
    );
    let mut tokens = json_token_iter(json.as_bytes()).peekable();
    assert_eq!(deser_structure_record(&mut tokens).unwrap(), Some(record));
}

#[test]
fn timestamps_are_epoch_seconds() {
    let patch = RecordPatch::builder()
        .op(Operation::Replace)
        .device_last_modified_date(Instant::from_fractional_seconds(1_576_540_098, 0.5))
        .build();
    assert_eq!(
        to_json(&patch, serialize_structure_record_patch),
        r#"{"Op":"replace","DeviceLastModifiedDate":1576540098.5}"#
    );
}

#[test]
fn enum_literals_are_case_sensitive() {
    assert_eq!(Operation::from("replace"), Operation::Replace);
    assert_eq!(Operation::from("REPLACE"), Operation::Unknown("REPLACE".into()));
    assert!(Operation::try_parse("REPLACE").is_err());
    assert_eq!(Platform::try_parse("APNS_SANDBOX"), Ok(Platform::ApnsSandbox));
    assert_eq!(Platform::values(), &["APNS", "APNS_SANDBOX", "GCM", "ADM"]);
}
