/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use medialive::json_deser::{deser_structure_channel, deser_structure_input};
use medialive::json_ser::{serialize_structure_channel, serialize_structure_input};
use medialive::model::{
    Channel, ChannelClass, ChannelState, Input, InputAttachment, InputClass, InputDestination,
    InputSource, InputState, InputType, LogLevel,
};
use proptest::collection::{hash_map, vec};
use proptest::option;
use proptest::prelude::*;
use proptest::sample::select;
use smithy_json::deserialize::json_token_iter;
use smithy_json::serialize::JsonObjectWriter;

macro_rules! enum_strategy {
    ($name:ident, $typ:ty) => {
        fn $name() -> impl Strategy<Value = $typ> {
            prop_oneof![
                select(<$typ>::values()).prop_map(<$typ>::from),
                any::<String>().prop_map(|s| <$typ>::from(s.as_str())),
            ]
        }
    };
}

enum_strategy!(channel_class, ChannelClass);
enum_strategy!(channel_state, ChannelState);
enum_strategy!(input_class, InputClass);
enum_strategy!(input_state, InputState);
enum_strategy!(input_type, InputType);
enum_strategy!(log_level, LogLevel);

fn text() -> impl Strategy<Value = Option<String>> {
    option::of(any::<String>())
}

fn strings() -> impl Strategy<Value = Option<Vec<String>>> {
    option::of(vec(any::<String>(), 0..4))
}

fn tags() -> impl Strategy<Value = Option<std::collections::HashMap<String, String>>> {
    option::of(hash_map(any::<String>(), any::<String>(), 0..4))
}

fn destination() -> impl Strategy<Value = InputDestination> {
    (text(), text(), text()).prop_map(|(ip, port, url)| {
        InputDestination::builder()
            .set_ip(ip)
            .set_port(port)
            .set_url(url)
            .build()
    })
}

fn source() -> impl Strategy<Value = InputSource> {
    (text(), text(), text()).prop_map(|(password_param, url, username)| {
        InputSource::builder()
            .set_password_param(password_param)
            .set_url(url)
            .set_username(username)
            .build()
    })
}

fn attachment() -> impl Strategy<Value = InputAttachment> {
    (text(), text()).prop_map(|(name, id)| {
        InputAttachment::builder()
            .set_input_attachment_name(name)
            .set_input_id(id)
            .build()
    })
}

fn input() -> impl Strategy<Value = Input> {
    (
        (text(), strings(), option::of(vec(destination(), 0..3)), text()),
        (option::of(input_class()), text(), text(), strings()),
        (
            option::of(vec(source(), 0..3)),
            option::of(input_state()),
            tags(),
            option::of(input_type()),
        ),
    )
        .prop_map(
            |(
                (arn, attached_channels, destinations, id),
                (class, name, role_arn, security_groups),
                (sources, state, tags, r#type),
            )| {
                Input::builder()
                    .set_arn(arn)
                    .set_attached_channels(attached_channels)
                    .set_destinations(destinations)
                    .set_id(id)
                    .set_input_class(class)
                    .set_name(name)
                    .set_role_arn(role_arn)
                    .set_security_groups(security_groups)
                    .set_sources(sources)
                    .set_state(state)
                    .set_tags(tags)
                    .set_type(r#type)
                    .build()
            },
        )
}

fn channel() -> impl Strategy<Value = Channel> {
    (
        (text(), option::of(channel_class()), text()),
        (option::of(vec(attachment(), 0..3)), option::of(log_level()), text()),
        (
            option::of(any::<i32>()),
            text(),
            option::of(channel_state()),
            tags(),
        ),
    )
        .prop_map(
            |(
                (arn, class, id),
                (attachments, log_level, name),
                (running, role_arn, state, tags),
            )| {
                Channel::builder()
                    .set_arn(arn)
                    .set_channel_class(class)
                    .set_id(id)
                    .set_input_attachments(attachments)
                    .set_log_level(log_level)
                    .set_name(name)
                    .set_pipelines_running_count(running)
                    .set_role_arn(role_arn)
                    .set_state(state)
                    .set_tags(tags)
                    .build()
            },
        )
}

proptest! {
    #[test]
    fn input_round_trips(input in input()) {
        let mut out = String::new();
        let mut object = JsonObjectWriter::new(&mut out);
        serialize_structure_input(&mut object, &input).unwrap();
        object.finish();

        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        prop_assert!(parsed.is_object());

        let mut tokens = json_token_iter(out.as_bytes()).peekable();
        prop_assert_eq!(deser_structure_input(&mut tokens).unwrap(), Some(input));
        prop_assert!(tokens.next().is_none());
    }

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
    fn enum_literals_round_trip(literal in any::<String>()) {
        let parsed = InputType::from(literal.as_str());
        prop_assert_eq!(parsed.as_str(), literal.as_str());
        prop_assert_eq!(
            InputType::try_parse(&literal).is_ok(),
            InputType::values().contains(&literal.as_str())
        );
    }
}

#[test]
fn absent_members_are_omitted() {
    let input = Input::builder().id("1234").r#type(InputType::Mp4File).build();
    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    serialize_structure_input(&mut object, &input).unwrap();
    object.finish();
    assert_eq!(out, r#"{"id":"1234","type":"MP4_FILE"}"#);
}

#[test]
fn try_parse_rejects_unknown_values() {
    assert_eq!(LogLevel::try_parse("WARNING"), Ok(LogLevel::Warning));
    let err = LogLevel::try_parse("TRACE").unwrap_err();
    assert_eq!(err.value(), "TRACE");
    assert_eq!(err.expected(), LogLevel::values());
    assert_eq!("TRACE".parse::<LogLevel>(), Ok(LogLevel::Unknown("TRACE".into())));
}
