/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! JSON deserializers, one per shape and one per operation output.
//!
//! Unknown members are skipped. A nested shape, list or map that arrives as `null` or as the
//! wrong kind of JSON value reads as absent; a scalar of the wrong type is an error.

use std::convert::TryFrom;

pub fn deser_operation_create_channel(
    input: &[u8],
    mut builder: crate::output::create_channel_output::Builder,
) -> Result<crate::output::create_channel_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "channel" => {
                        builder = builder.set_channel(
                            crate::json_deser::deser_structure_channel(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_create_input(
    input: &[u8],
    mut builder: crate::output::create_input_output::Builder,
) -> Result<crate::output::create_input_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "input" => {
                        builder = builder.set_input(
                            crate::json_deser::deser_structure_input(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_delete_channel(
    input: &[u8],
    mut builder: crate::output::delete_channel_output::Builder,
) -> Result<crate::output::delete_channel_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "arn" => {
                        builder = builder.set_arn(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "channelClass" => {
                        builder = builder.set_channel_class(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::ChannelClass::from(s.as_str()))
                        );
                    }
                    "id" => {
                        builder = builder.set_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "inputAttachments" => {
                        builder = builder.set_input_attachments(
                            crate::json_deser::deser_list_input_attachment(tokens)?
                        );
                    }
                    "logLevel" => {
                        builder = builder.set_log_level(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::LogLevel::from(s.as_str()))
                        );
                    }
                    "name" => {
                        builder = builder.set_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "pipelinesRunningCount" => {
                        builder = builder.set_pipelines_running_count(
                            smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                .map(i32::try_from)
                                .transpose()?
                        );
                    }
                    "roleArn" => {
                        builder = builder.set_role_arn(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "state" => {
                        builder = builder.set_state(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::ChannelState::from(s.as_str()))
                        );
                    }
                    "tags" => {
                        builder = builder.set_tags(
                            crate::json_deser::deser_map_string(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_delete_input(
    input: &[u8],
    builder: crate::output::delete_input_output::Builder,
) -> Result<crate::output::delete_input_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { .. }) => {
                smithy_json::deserialize::token::skip_value(tokens)?;
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_describe_channel(
    input: &[u8],
    mut builder: crate::output::describe_channel_output::Builder,
) -> Result<crate::output::describe_channel_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "arn" => {
                        builder = builder.set_arn(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "channelClass" => {
                        builder = builder.set_channel_class(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::ChannelClass::from(s.as_str()))
                        );
                    }
                    "id" => {
                        builder = builder.set_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "inputAttachments" => {
                        builder = builder.set_input_attachments(
                            crate::json_deser::deser_list_input_attachment(tokens)?
                        );
                    }
                    "logLevel" => {
                        builder = builder.set_log_level(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::LogLevel::from(s.as_str()))
                        );
                    }
                    "name" => {
                        builder = builder.set_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "pipelinesRunningCount" => {
                        builder = builder.set_pipelines_running_count(
                            smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                .map(i32::try_from)
                                .transpose()?
                        );
                    }
                    "roleArn" => {
                        builder = builder.set_role_arn(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "state" => {
                        builder = builder.set_state(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::ChannelState::from(s.as_str()))
                        );
                    }
                    "tags" => {
                        builder = builder.set_tags(
                            crate::json_deser::deser_map_string(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_describe_input(
    input: &[u8],
    mut builder: crate::output::describe_input_output::Builder,
) -> Result<crate::output::describe_input_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "arn" => {
                        builder = builder.set_arn(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "attachedChannels" => {
                        builder = builder.set_attached_channels(
                            crate::json_deser::deser_list_string(tokens)?
                        );
                    }
                    "destinations" => {
                        builder = builder.set_destinations(
                            crate::json_deser::deser_list_input_destination(tokens)?
                        );
                    }
                    "id" => {
                        builder = builder.set_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "inputClass" => {
                        builder = builder.set_input_class(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::InputClass::from(s.as_str()))
                        );
                    }
                    "name" => {
                        builder = builder.set_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "roleArn" => {
                        builder = builder.set_role_arn(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "securityGroups" => {
                        builder = builder.set_security_groups(
                            crate::json_deser::deser_list_string(tokens)?
                        );
                    }
                    "sources" => {
                        builder = builder.set_sources(
                            crate::json_deser::deser_list_input_source(tokens)?
                        );
                    }
                    "state" => {
                        builder = builder.set_state(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::InputState::from(s.as_str()))
                        );
                    }
                    "tags" => {
                        builder = builder.set_tags(
                            crate::json_deser::deser_map_string(tokens)?
                        );
                    }
                    "type" => {
                        builder = builder.set_type(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::InputType::from(s.as_str()))
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_list_inputs(
    input: &[u8],
    mut builder: crate::output::list_inputs_output::Builder,
) -> Result<crate::output::list_inputs_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "inputs" => {
                        builder = builder.set_inputs(
                            crate::json_deser::deser_list_input(tokens)?
                        );
                    }
                    "nextToken" => {
                        builder = builder.set_next_token(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_start_channel(
    input: &[u8],
    mut builder: crate::output::start_channel_output::Builder,
) -> Result<crate::output::start_channel_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "arn" => {
                        builder = builder.set_arn(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "channelClass" => {
                        builder = builder.set_channel_class(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::ChannelClass::from(s.as_str()))
                        );
                    }
                    "id" => {
                        builder = builder.set_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "inputAttachments" => {
                        builder = builder.set_input_attachments(
                            crate::json_deser::deser_list_input_attachment(tokens)?
                        );
                    }
                    "logLevel" => {
                        builder = builder.set_log_level(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::LogLevel::from(s.as_str()))
                        );
                    }
                    "name" => {
                        builder = builder.set_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "pipelinesRunningCount" => {
                        builder = builder.set_pipelines_running_count(
                            smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                .map(i32::try_from)
                                .transpose()?
                        );
                    }
                    "roleArn" => {
                        builder = builder.set_role_arn(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "state" => {
                        builder = builder.set_state(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::ChannelState::from(s.as_str()))
                        );
                    }
                    "tags" => {
                        builder = builder.set_tags(
                            crate::json_deser::deser_map_string(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_stop_channel(
    input: &[u8],
    mut builder: crate::output::stop_channel_output::Builder,
) -> Result<crate::output::stop_channel_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "arn" => {
                        builder = builder.set_arn(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "channelClass" => {
                        builder = builder.set_channel_class(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::ChannelClass::from(s.as_str()))
                        );
                    }
                    "id" => {
                        builder = builder.set_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "inputAttachments" => {
                        builder = builder.set_input_attachments(
                            crate::json_deser::deser_list_input_attachment(tokens)?
                        );
                    }
                    "logLevel" => {
                        builder = builder.set_log_level(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::LogLevel::from(s.as_str()))
                        );
                    }
                    "name" => {
                        builder = builder.set_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "pipelinesRunningCount" => {
                        builder = builder.set_pipelines_running_count(
                            smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                .map(i32::try_from)
                                .transpose()?
                        );
                    }
                    "roleArn" => {
                        builder = builder.set_role_arn(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "state" => {
                        builder = builder.set_state(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::ChannelState::from(s.as_str()))
                        );
                    }
                    "tags" => {
                        builder = builder.set_tags(
                            crate::json_deser::deser_map_string(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_update_channel(
    input: &[u8],
    mut builder: crate::output::update_channel_output::Builder,
) -> Result<crate::output::update_channel_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "channel" => {
                        builder = builder.set_channel(
                            crate::json_deser::deser_structure_channel(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

/// Members carried by the body of every modeled error of this service.
#[derive(Debug, Default)]
pub struct ErrorFields {
    pub message: std::option::Option<String>,
}

pub fn deser_error_fields(
    input: &[u8],
) -> Result<crate::json_deser::ErrorFields, smithy_json::deserialize::Error> {
    let mut fields = crate::json_deser::ErrorFields::default();
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "message" => {
                        fields.message = smithy_json::deserialize::token::expect_string_or_null(tokens.next())?;
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(fields)
}

pub fn or_empty_doc(data: &[u8]) -> &[u8] {
    if data.is_empty() {
        b"{}"
    } else {
        data
    }
}

pub fn deser_structure_channel<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::Channel>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            let mut builder = crate::model::Channel::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "arn" => {
                                builder = builder.set_arn(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "channelClass" => {
                                builder = builder.set_channel_class(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::ChannelClass::from(s.as_str()))
                                );
                            }
                            "id" => {
                                builder = builder.set_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "inputAttachments" => {
                                builder = builder.set_input_attachments(
                                    crate::json_deser::deser_list_input_attachment(tokens)?
                                );
                            }
                            "logLevel" => {
                                builder = builder.set_log_level(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::LogLevel::from(s.as_str()))
                                );
                            }
                            "name" => {
                                builder = builder.set_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "pipelinesRunningCount" => {
                                builder = builder.set_pipelines_running_count(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(i32::try_from)
                                        .transpose()?
                                );
                            }
                            "roleArn" => {
                                builder = builder.set_role_arn(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "state" => {
                                builder = builder.set_state(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::ChannelState::from(s.as_str()))
                                );
                            }
                            "tags" => {
                                builder = builder.set_tags(
                                    crate::json_deser::deser_map_string(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        Some(other) => {
            smithy_json::deserialize::token::skip_started_value(other, tokens)?;
            Ok(None)
        }
        None => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_input<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::Input>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            let mut builder = crate::model::Input::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "arn" => {
                                builder = builder.set_arn(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "attachedChannels" => {
                                builder = builder.set_attached_channels(
                                    crate::json_deser::deser_list_string(tokens)?
                                );
                            }
                            "destinations" => {
                                builder = builder.set_destinations(
                                    crate::json_deser::deser_list_input_destination(tokens)?
                                );
                            }
                            "id" => {
                                builder = builder.set_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "inputClass" => {
                                builder = builder.set_input_class(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::InputClass::from(s.as_str()))
                                );
                            }
                            "name" => {
                                builder = builder.set_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "roleArn" => {
                                builder = builder.set_role_arn(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "securityGroups" => {
                                builder = builder.set_security_groups(
                                    crate::json_deser::deser_list_string(tokens)?
                                );
                            }
                            "sources" => {
                                builder = builder.set_sources(
                                    crate::json_deser::deser_list_input_source(tokens)?
                                );
                            }
                            "state" => {
                                builder = builder.set_state(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::InputState::from(s.as_str()))
                                );
                            }
                            "tags" => {
                                builder = builder.set_tags(
                                    crate::json_deser::deser_map_string(tokens)?
                                );
                            }
                            "type" => {
                                builder = builder.set_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::InputType::from(s.as_str()))
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        Some(other) => {
            smithy_json::deserialize::token::skip_started_value(other, tokens)?;
            Ok(None)
        }
        None => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_input_attachment<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::InputAttachment>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            let mut builder = crate::model::InputAttachment::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "inputAttachmentName" => {
                                builder = builder.set_input_attachment_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "inputId" => {
                                builder = builder.set_input_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        Some(other) => {
            smithy_json::deserialize::token::skip_started_value(other, tokens)?;
            Ok(None)
        }
        None => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_input_destination<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::InputDestination>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            let mut builder = crate::model::InputDestination::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "ip" => {
                                builder = builder.set_ip(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "port" => {
                                builder = builder.set_port(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "url" => {
                                builder = builder.set_url(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        Some(other) => {
            smithy_json::deserialize::token::skip_started_value(other, tokens)?;
            Ok(None)
        }
        None => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_input_destination_request<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::InputDestinationRequest>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            let mut builder = crate::model::InputDestinationRequest::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "streamName" => {
                                builder = builder.set_stream_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        Some(other) => {
            smithy_json::deserialize::token::skip_started_value(other, tokens)?;
            Ok(None)
        }
        None => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_input_source<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::InputSource>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            let mut builder = crate::model::InputSource::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "passwordParam" => {
                                builder = builder.set_password_param(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "url" => {
                                builder = builder.set_url(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "username" => {
                                builder = builder.set_username(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        Some(other) => {
            smithy_json::deserialize::token::skip_started_value(other, tokens)?;
            Ok(None)
        }
        None => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_input_source_request<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::InputSourceRequest>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            let mut builder = crate::model::InputSourceRequest::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "passwordParam" => {
                                builder = builder.set_password_param(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "url" => {
                                builder = builder.set_url(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "username" => {
                                builder = builder.set_username(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        Some(other) => {
            smithy_json::deserialize::token::skip_started_value(other, tokens)?;
            Ok(None)
        }
        None => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

#[allow(clippy::type_complexity)]
pub fn deser_list_input_attachment<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::InputAttachment>>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value = crate::json_deser::deser_structure_input_attachment(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        Some(other) => {
            smithy_json::deserialize::token::skip_started_value(other, tokens)?;
            Ok(None)
        }
        None => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity)]
pub fn deser_list_string<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<String>>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value = smithy_json::deserialize::token::expect_string_or_null(tokens.next())?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        Some(other) => {
            smithy_json::deserialize::token::skip_started_value(other, tokens)?;
            Ok(None)
        }
        None => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity)]
pub fn deser_list_input_destination<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::InputDestination>>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value = crate::json_deser::deser_structure_input_destination(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        Some(other) => {
            smithy_json::deserialize::token::skip_started_value(other, tokens)?;
            Ok(None)
        }
        None => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity)]
pub fn deser_list_input_source<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::InputSource>>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value = crate::json_deser::deser_structure_input_source(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        Some(other) => {
            smithy_json::deserialize::token::skip_started_value(other, tokens)?;
            Ok(None)
        }
        None => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity)]
pub fn deser_list_input<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::Input>>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value = crate::json_deser::deser_structure_input(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        Some(other) => {
            smithy_json::deserialize::token::skip_started_value(other, tokens)?;
            Ok(None)
        }
        None => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity)]
pub fn deser_map_string<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<
    Option<std::collections::HashMap<std::string::String, String>>,
    smithy_json::deserialize::Error,
>
where
    I: Iterator<
        Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            let mut map = std::collections::HashMap::new();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        let key = key.to_unescaped().map(|u| u.into_owned())?;
                        let value = smithy_json::deserialize::token::expect_string_or_null(tokens.next())?;
                        if let Some(value) = value {
                            map.insert(key, value);
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(map))
        }
        Some(other) => {
            smithy_json::deserialize::token::skip_started_value(other, tokens)?;
            Ok(None)
        }
        None => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}
