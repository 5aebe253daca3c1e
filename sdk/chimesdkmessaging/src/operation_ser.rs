/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_http::operation::SerializationError;

pub fn serialize_operation_create_channel(
    input: &crate::input::CreateChannelInput,
) -> Result<smithy_http::body::SdkBody, SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_create_channel_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_operation_create_channel_ban(
    input: &crate::input::CreateChannelBanInput,
) -> Result<smithy_http::body::SdkBody, SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_create_channel_ban_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_operation_create_channel_membership(
    input: &crate::input::CreateChannelMembershipInput,
) -> Result<smithy_http::body::SdkBody, SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_create_channel_membership_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_operation_send_channel_message(
    input: &crate::input::SendChannelMessageInput,
) -> Result<smithy_http::body::SdkBody, SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_send_channel_message_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_operation_update_channel(
    input: &crate::input::UpdateChannelInput,
) -> Result<smithy_http::body::SdkBody, SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_update_channel_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}
