/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chimesdkmessaging::json_deser::{deser_structure_channel, deser_structure_channel_ban};
use chimesdkmessaging::json_ser::{serialize_structure_channel, serialize_structure_channel_ban};
use chimesdkmessaging::model::{Channel, ChannelBan, ChannelMode, ChannelPrivacy, ErrorCode, Identity};
use proptest::option;
use proptest::prelude::*;
use proptest::sample::select;
use smithy_json::deserialize::json_token_iter;
use smithy_json::serialize::JsonObjectWriter;
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

fn identity() -> impl Strategy<Value = Option<Identity>> {
    option::of((text(), text()).prop_map(|(arn, name)| {
        Identity::builder().set_arn(arn).set_name(name).build()
    }))
}

fn mode() -> impl Strategy<Value = ChannelMode> {
    prop_oneof![
        select(ChannelMode::values()).prop_map(ChannelMode::from),
        any::<String>().prop_map(|s| ChannelMode::from(s.as_str())),
    ]
}

fn privacy() -> impl Strategy<Value = ChannelPrivacy> {
    select(ChannelPrivacy::values()).prop_map(ChannelPrivacy::from)
}

fn channel() -> impl Strategy<Value = Channel> {
    (
        (text(), text(), option::of(mode()), option::of(privacy())),
        (text(), identity(), timestamp(), timestamp(), timestamp()),
    )
        .prop_map(
            |(
                (name, channel_arn, mode, privacy),
                (metadata, created_by, created, last_message, last_updated),
            )| {
                Channel::builder()
                    .set_name(name)
                    .set_channel_arn(channel_arn)
                    .set_mode(mode)
                    .set_privacy(privacy)
                    .set_metadata(metadata)
                    .set_created_by(created_by)
                    .set_created_timestamp(created)
                    .set_last_message_timestamp(last_message)
                    .set_last_updated_timestamp(last_updated)
                    .build()
            },
        )
}

fn channel_ban() -> impl Strategy<Value = ChannelBan> {
    (identity(), text(), timestamp(), identity()).prop_map(
        |(member, channel_arn, created, created_by)| {
            ChannelBan::builder()
                .set_member(member)
                .set_channel_arn(channel_arn)
                .set_created_timestamp(created)
                .set_created_by(created_by)
                .build()
        },
    )
}

proptest! {
    #[test]
    fn channel_round_trips(channel in channel()) {
        let mut out = String::new();
        let mut object = JsonObjectWriter::new(&mut out);
        serialize_structure_channel(&mut object, &channel).unwrap();
        object.finish();

        let mut tokens = json_token_iter(out.as_bytes()).peekable();
        prop_assert_eq!(deser_structure_channel(&mut tokens).unwrap(), Some(channel));
    }

    #[test]
    fn channel_ban_round_trips(ban in channel_ban()) {
        let mut out = String::new();
        let mut object = JsonObjectWriter::new(&mut out);
        serialize_structure_channel_ban(&mut object, &ban).unwrap();
        object.finish();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        prop_assert_eq!(value.get("ChannelArn").is_some(), ban.channel_arn.is_some());

        let mut tokens = json_token_iter(out.as_bytes()).peekable();
        prop_assert_eq!(deser_structure_channel_ban(&mut tokens).unwrap(), Some(ban));
    }
}

#[test]
fn channel_debug_redacts_name_and_metadata() {
    let channel = Channel::builder()
        .name("private-room")
        .metadata("owner=alice")
        .channel_arn("arn:aws:chime:us-east-1:123:app-instance/app/channel/chan")
        .created_by(Identity::builder().arn("alice-arn").name("Alice").build())
        .build();
    let debug = format!("{:?}", channel);
    assert!(!debug.contains("private-room"));
    assert!(!debug.contains("owner=alice"));
    assert!(!debug.contains("Alice"));
    assert!(debug.contains("alice-arn"));
    assert!(debug.contains("*** Sensitive Data Redacted ***"));
}

#[test]
fn error_code_values() {
    assert_eq!(ErrorCode::from("Throttling"), ErrorCode::Throttling);
    assert_eq!(ErrorCode::Throttled.as_str(), "Throttled");
    assert_eq!(ErrorCode::from("NotFound"), ErrorCode::NotFound);
    assert_eq!(ErrorCode::PreconditionFailed.as_str(), "PreconditionFailed");
    assert_eq!(
        ErrorCode::try_parse("VoiceConnectorGroupAssociationsExist"),
        Ok(ErrorCode::VoiceConnectorGroupAssociationsExist)
    );
    assert_eq!(ErrorCode::values().len(), 15);
    assert!(ErrorCode::try_parse("throttled").is_err());
}
