/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! JSON serializers, one per shape.
//!
//! Present members are written in declaration order under their wire names; absent members
//! are left out of the object entirely.

use smithy_http::operation::SerializationError;

pub fn serialize_structure_create_channel_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::CreateChannelInput,
) -> Result<(), SerializationError> {
    if let Some(var_1) = &input.app_instance_arn {
        object.string("AppInstanceArn", var_1);
    }
    if let Some(var_2) = &input.name {
        object.string("Name", var_2);
    }
    if let Some(var_3) = &input.mode {
        object.string("Mode", var_3.as_str());
    }
    if let Some(var_4) = &input.privacy {
        object.string("Privacy", var_4.as_str());
    }
    if let Some(var_5) = &input.metadata {
        object.string("Metadata", var_5);
    }
    if let Some(var_6) = &input.client_request_token {
        object.string("ClientRequestToken", var_6);
    }
    if let Some(var_7) = &input.tags {
        let mut array_8 = object.start_array("Tags");
        for item_9 in var_7 {
            let mut object_10 = array_8.start_object();
            crate::json_ser::serialize_structure_tag(&mut object_10, item_9)?;
            object_10.finish();
        }
        array_8.finish();
    }
    Ok(())
}

pub fn serialize_structure_create_channel_ban_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::CreateChannelBanInput,
) -> Result<(), SerializationError> {
    if let Some(var_1) = &input.member_arn {
        object.string("MemberArn", var_1);
    }
    Ok(())
}

pub fn serialize_structure_create_channel_membership_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::CreateChannelMembershipInput,
) -> Result<(), SerializationError> {
    if let Some(var_1) = &input.member_arn {
        object.string("MemberArn", var_1);
    }
    if let Some(var_2) = &input.r#type {
        object.string("Type", var_2.as_str());
    }
    Ok(())
}

pub fn serialize_structure_send_channel_message_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::SendChannelMessageInput,
) -> Result<(), SerializationError> {
    if let Some(var_1) = &input.content {
        object.string("Content", var_1);
    }
    if let Some(var_2) = &input.r#type {
        object.string("Type", var_2.as_str());
    }
    if let Some(var_3) = &input.persistence {
        object.string("Persistence", var_3.as_str());
    }
    if let Some(var_4) = &input.metadata {
        object.string("Metadata", var_4);
    }
    if let Some(var_5) = &input.client_request_token {
        object.string("ClientRequestToken", var_5);
    }
    Ok(())
}

pub fn serialize_structure_update_channel_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::UpdateChannelInput,
) -> Result<(), SerializationError> {
    if let Some(var_1) = &input.name {
        object.string("Name", var_1);
    }
    if let Some(var_2) = &input.mode {
        object.string("Mode", var_2.as_str());
    }
    if let Some(var_3) = &input.metadata {
        object.string("Metadata", var_3);
    }
    Ok(())
}

pub fn serialize_structure_channel(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::Channel,
) -> Result<(), SerializationError> {
    if let Some(var_1) = &input.name {
        object.string("Name", var_1);
    }
    if let Some(var_2) = &input.channel_arn {
        object.string("ChannelArn", var_2);
    }
    if let Some(var_3) = &input.mode {
        object.string("Mode", var_3.as_str());
    }
    if let Some(var_4) = &input.privacy {
        object.string("Privacy", var_4.as_str());
    }
    if let Some(var_5) = &input.metadata {
        object.string("Metadata", var_5);
    }
    if let Some(var_6) = &input.created_by {
        let mut object_7 = object.start_object("CreatedBy");
        crate::json_ser::serialize_structure_identity(&mut object_7, var_6)?;
        object_7.finish();
    }
    if let Some(var_8) = &input.created_timestamp {
        object
            .instant("CreatedTimestamp", var_8, smithy_types::instant::Format::EpochSeconds)
            .map_err(|source| SerializationError::InvalidTimestamp {
                field: "CreatedTimestamp",
                source,
            })?;
    }
    if let Some(var_9) = &input.last_message_timestamp {
        object
            .instant("LastMessageTimestamp", var_9, smithy_types::instant::Format::EpochSeconds)
            .map_err(|source| SerializationError::InvalidTimestamp {
                field: "LastMessageTimestamp",
                source,
            })?;
    }
    if let Some(var_10) = &input.last_updated_timestamp {
        object
            .instant("LastUpdatedTimestamp", var_10, smithy_types::instant::Format::EpochSeconds)
            .map_err(|source| SerializationError::InvalidTimestamp {
                field: "LastUpdatedTimestamp",
                source,
            })?;
    }
    Ok(())
}

pub fn serialize_structure_channel_ban(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::ChannelBan,
) -> Result<(), SerializationError> {
    if let Some(var_1) = &input.member {
        let mut object_2 = object.start_object("Member");
        crate::json_ser::serialize_structure_identity(&mut object_2, var_1)?;
        object_2.finish();
    }
    if let Some(var_3) = &input.channel_arn {
        object.string("ChannelArn", var_3);
    }
    if let Some(var_4) = &input.created_timestamp {
        object
            .instant("CreatedTimestamp", var_4, smithy_types::instant::Format::EpochSeconds)
            .map_err(|source| SerializationError::InvalidTimestamp {
                field: "CreatedTimestamp",
                source,
            })?;
    }
    if let Some(var_5) = &input.created_by {
        let mut object_6 = object.start_object("CreatedBy");
        crate::json_ser::serialize_structure_identity(&mut object_6, var_5)?;
        object_6.finish();
    }
    Ok(())
}

pub fn serialize_structure_channel_ban_summary(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::ChannelBanSummary,
) -> Result<(), SerializationError> {
    if let Some(var_1) = &input.member {
        let mut object_2 = object.start_object("Member");
        crate::json_ser::serialize_structure_identity(&mut object_2, var_1)?;
        object_2.finish();
    }
    Ok(())
}

pub fn serialize_structure_channel_membership_summary(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::ChannelMembershipSummary,
) -> Result<(), SerializationError> {
    if let Some(var_1) = &input.member {
        let mut object_2 = object.start_object("Member");
        crate::json_ser::serialize_structure_identity(&mut object_2, var_1)?;
        object_2.finish();
    }
    Ok(())
}

pub fn serialize_structure_channel_message(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::ChannelMessage,
) -> Result<(), SerializationError> {
    if let Some(var_1) = &input.channel_arn {
        object.string("ChannelArn", var_1);
    }
    if let Some(var_2) = &input.message_id {
        object.string("MessageId", var_2);
    }
    if let Some(var_3) = &input.content {
        object.string("Content", var_3);
    }
    if let Some(var_4) = &input.metadata {
        object.string("Metadata", var_4);
    }
    if let Some(var_5) = &input.r#type {
        object.string("Type", var_5.as_str());
    }
    if let Some(var_6) = &input.created_timestamp {
        object
            .instant("CreatedTimestamp", var_6, smithy_types::instant::Format::EpochSeconds)
            .map_err(|source| SerializationError::InvalidTimestamp {
                field: "CreatedTimestamp",
                source,
            })?;
    }
    if let Some(var_7) = &input.last_edited_timestamp {
        object
            .instant("LastEditedTimestamp", var_7, smithy_types::instant::Format::EpochSeconds)
            .map_err(|source| SerializationError::InvalidTimestamp {
                field: "LastEditedTimestamp",
                source,
            })?;
    }
    if let Some(var_8) = &input.last_updated_timestamp {
        object
            .instant("LastUpdatedTimestamp", var_8, smithy_types::instant::Format::EpochSeconds)
            .map_err(|source| SerializationError::InvalidTimestamp {
                field: "LastUpdatedTimestamp",
                source,
            })?;
    }
    if let Some(var_9) = &input.sender {
        let mut object_10 = object.start_object("Sender");
        crate::json_ser::serialize_structure_identity(&mut object_10, var_9)?;
        object_10.finish();
    }
    if let Some(var_11) = &input.redacted {
        object.boolean("Redacted", *var_11);
    }
    if let Some(var_12) = &input.persistence {
        object.string("Persistence", var_12.as_str());
    }
    Ok(())
}

pub fn serialize_structure_channel_message_summary(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::ChannelMessageSummary,
) -> Result<(), SerializationError> {
    if let Some(var_1) = &input.message_id {
        object.string("MessageId", var_1);
    }
    if let Some(var_2) = &input.content {
        object.string("Content", var_2);
    }
    if let Some(var_3) = &input.metadata {
        object.string("Metadata", var_3);
    }
    if let Some(var_4) = &input.r#type {
        object.string("Type", var_4.as_str());
    }
    if let Some(var_5) = &input.created_timestamp {
        object
            .instant("CreatedTimestamp", var_5, smithy_types::instant::Format::EpochSeconds)
            .map_err(|source| SerializationError::InvalidTimestamp {
                field: "CreatedTimestamp",
                source,
            })?;
    }
    if let Some(var_6) = &input.last_updated_timestamp {
        object
            .instant("LastUpdatedTimestamp", var_6, smithy_types::instant::Format::EpochSeconds)
            .map_err(|source| SerializationError::InvalidTimestamp {
                field: "LastUpdatedTimestamp",
                source,
            })?;
    }
    if let Some(var_7) = &input.last_edited_timestamp {
        object
            .instant("LastEditedTimestamp", var_7, smithy_types::instant::Format::EpochSeconds)
            .map_err(|source| SerializationError::InvalidTimestamp {
                field: "LastEditedTimestamp",
                source,
            })?;
    }
    if let Some(var_8) = &input.sender {
        let mut object_9 = object.start_object("Sender");
        crate::json_ser::serialize_structure_identity(&mut object_9, var_8)?;
        object_9.finish();
    }
    if let Some(var_10) = &input.redacted {
        object.boolean("Redacted", *var_10);
    }
    Ok(())
}

pub fn serialize_structure_channel_summary(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::ChannelSummary,
) -> Result<(), SerializationError> {
    if let Some(var_1) = &input.name {
        object.string("Name", var_1);
    }
    if let Some(var_2) = &input.channel_arn {
        object.string("ChannelArn", var_2);
    }
    if let Some(var_3) = &input.mode {
        object.string("Mode", var_3.as_str());
    }
    if let Some(var_4) = &input.privacy {
        object.string("Privacy", var_4.as_str());
    }
    if let Some(var_5) = &input.metadata {
        object.string("Metadata", var_5);
    }
    if let Some(var_6) = &input.last_message_timestamp {
        object
            .instant("LastMessageTimestamp", var_6, smithy_types::instant::Format::EpochSeconds)
            .map_err(|source| SerializationError::InvalidTimestamp {
                field: "LastMessageTimestamp",
                source,
            })?;
    }
    Ok(())
}

pub fn serialize_structure_identity(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::Identity,
) -> Result<(), SerializationError> {
    if let Some(var_1) = &input.arn {
        object.string("Arn", var_1);
    }
    if let Some(var_2) = &input.name {
        object.string("Name", var_2);
    }
    Ok(())
}

pub fn serialize_structure_tag(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::Tag,
) -> Result<(), SerializationError> {
    if let Some(var_1) = &input.key {
        object.string("Key", var_1);
    }
    if let Some(var_2) = &input.value {
        object.string("Value", var_2);
    }
    Ok(())
}
