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
    if let Some(var_1) = &input.channel_class {
        object.string("channelClass", var_1.as_str());
    }
    if let Some(var_2) = &input.input_attachments {
        let mut array_3 = object.start_array("inputAttachments");
        for item_4 in var_2 {
            let mut object_5 = array_3.start_object();
            crate::json_ser::serialize_structure_input_attachment(&mut object_5, item_4)?;
            object_5.finish();
        }
        array_3.finish();
    }
    if let Some(var_6) = &input.log_level {
        object.string("logLevel", var_6.as_str());
    }
    if let Some(var_7) = &input.name {
        object.string("name", var_7);
    }
    if let Some(var_8) = &input.request_id {
        object.string("requestId", var_8);
    }
    if let Some(var_9) = &input.role_arn {
        object.string("roleArn", var_9);
    }
    if let Some(var_10) = &input.tags {
        let mut object_11 = object.start_object("tags");
        for (key_12, value_13) in var_10 {
            object_11.string(key_12.as_str(), value_13);
        }
        object_11.finish();
    }
    Ok(())
}

pub fn serialize_structure_create_input_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::CreateInputInput,
) -> Result<(), SerializationError> {
    if let Some(var_1) = &input.destinations {
        let mut array_2 = object.start_array("destinations");
        for item_3 in var_1 {
            let mut object_4 = array_2.start_object();
            crate::json_ser::serialize_structure_input_destination_request(&mut object_4, item_3)?;
            object_4.finish();
        }
        array_2.finish();
    }
    if let Some(var_5) = &input.input_security_groups {
        let mut array_6 = object.start_array("inputSecurityGroups");
        for item_7 in var_5 {
            array_6.string(item_7);
        }
        array_6.finish();
    }
    if let Some(var_8) = &input.name {
        object.string("name", var_8);
    }
    if let Some(var_9) = &input.request_id {
        object.string("requestId", var_9);
    }
    if let Some(var_10) = &input.role_arn {
        object.string("roleArn", var_10);
    }
    if let Some(var_11) = &input.sources {
        let mut array_12 = object.start_array("sources");
        for item_13 in var_11 {
            let mut object_14 = array_12.start_object();
            crate::json_ser::serialize_structure_input_source_request(&mut object_14, item_13)?;
            object_14.finish();
        }
        array_12.finish();
    }
    if let Some(var_15) = &input.tags {
        let mut object_16 = object.start_object("tags");
        for (key_17, value_18) in var_15 {
            object_16.string(key_17.as_str(), value_18);
        }
        object_16.finish();
    }
    if let Some(var_19) = &input.r#type {
        object.string("type", var_19.as_str());
    }
    Ok(())
}

pub fn serialize_structure_update_channel_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::UpdateChannelInput,
) -> Result<(), SerializationError> {
    if let Some(var_1) = &input.input_attachments {
        let mut array_2 = object.start_array("inputAttachments");
        for item_3 in var_1 {
            let mut object_4 = array_2.start_object();
            crate::json_ser::serialize_structure_input_attachment(&mut object_4, item_3)?;
            object_4.finish();
        }
        array_2.finish();
    }
    if let Some(var_5) = &input.log_level {
        object.string("logLevel", var_5.as_str());
    }
    if let Some(var_6) = &input.name {
        object.string("name", var_6);
    }
    if let Some(var_7) = &input.role_arn {
        object.string("roleArn", var_7);
    }
    Ok(())
}

pub fn serialize_structure_channel(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::Channel,
) -> Result<(), SerializationError> {
    if let Some(var_1) = &input.arn {
        object.string("arn", var_1);
    }
    if let Some(var_2) = &input.channel_class {
        object.string("channelClass", var_2.as_str());
    }
    if let Some(var_3) = &input.id {
        object.string("id", var_3);
    }
    if let Some(var_4) = &input.input_attachments {
        let mut array_5 = object.start_array("inputAttachments");
        for item_6 in var_4 {
            let mut object_7 = array_5.start_object();
            crate::json_ser::serialize_structure_input_attachment(&mut object_7, item_6)?;
            object_7.finish();
        }
        array_5.finish();
    }
    if let Some(var_8) = &input.log_level {
        object.string("logLevel", var_8.as_str());
    }
    if let Some(var_9) = &input.name {
        object.string("name", var_9);
    }
    if let Some(var_10) = &input.pipelines_running_count {
        object.number(
            "pipelinesRunningCount",
            smithy_types::Number::from(*var_10),
        );
    }
    if let Some(var_11) = &input.role_arn {
        object.string("roleArn", var_11);
    }
    if let Some(var_12) = &input.state {
        object.string("state", var_12.as_str());
    }
    if let Some(var_13) = &input.tags {
        let mut object_14 = object.start_object("tags");
        for (key_15, value_16) in var_13 {
            object_14.string(key_15.as_str(), value_16);
        }
        object_14.finish();
    }
    Ok(())
}

pub fn serialize_structure_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::Input,
) -> Result<(), SerializationError> {
    if let Some(var_1) = &input.arn {
        object.string("arn", var_1);
    }
    if let Some(var_2) = &input.attached_channels {
        let mut array_3 = object.start_array("attachedChannels");
        for item_4 in var_2 {
            array_3.string(item_4);
        }
        array_3.finish();
    }
    if let Some(var_5) = &input.destinations {
        let mut array_6 = object.start_array("destinations");
        for item_7 in var_5 {
            let mut object_8 = array_6.start_object();
            crate::json_ser::serialize_structure_input_destination(&mut object_8, item_7)?;
            object_8.finish();
        }
        array_6.finish();
    }
    if let Some(var_9) = &input.id {
        object.string("id", var_9);
    }
    if let Some(var_10) = &input.input_class {
        object.string("inputClass", var_10.as_str());
    }
    if let Some(var_11) = &input.name {
        object.string("name", var_11);
    }
    if let Some(var_12) = &input.role_arn {
        object.string("roleArn", var_12);
    }
    if let Some(var_13) = &input.security_groups {
        let mut array_14 = object.start_array("securityGroups");
        for item_15 in var_13 {
            array_14.string(item_15);
        }
        array_14.finish();
    }
    if let Some(var_16) = &input.sources {
        let mut array_17 = object.start_array("sources");
        for item_18 in var_16 {
            let mut object_19 = array_17.start_object();
            crate::json_ser::serialize_structure_input_source(&mut object_19, item_18)?;
            object_19.finish();
        }
        array_17.finish();
    }
    if let Some(var_20) = &input.state {
        object.string("state", var_20.as_str());
    }
    if let Some(var_21) = &input.tags {
        let mut object_22 = object.start_object("tags");
        for (key_23, value_24) in var_21 {
            object_22.string(key_23.as_str(), value_24);
        }
        object_22.finish();
    }
    if let Some(var_25) = &input.r#type {
        object.string("type", var_25.as_str());
    }
    Ok(())
}

pub fn serialize_structure_input_attachment(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::InputAttachment,
) -> Result<(), SerializationError> {
    if let Some(var_1) = &input.input_attachment_name {
        object.string("inputAttachmentName", var_1);
    }
    if let Some(var_2) = &input.input_id {
        object.string("inputId", var_2);
    }
    Ok(())
}

pub fn serialize_structure_input_destination(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::InputDestination,
) -> Result<(), SerializationError> {
    if let Some(var_1) = &input.ip {
        object.string("ip", var_1);
    }
    if let Some(var_2) = &input.port {
        object.string("port", var_2);
    }
    if let Some(var_3) = &input.url {
        object.string("url", var_3);
    }
    Ok(())
}

pub fn serialize_structure_input_destination_request(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::InputDestinationRequest,
) -> Result<(), SerializationError> {
    if let Some(var_1) = &input.stream_name {
        object.string("streamName", var_1);
    }
    Ok(())
}

pub fn serialize_structure_input_source(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::InputSource,
) -> Result<(), SerializationError> {
    if let Some(var_1) = &input.password_param {
        object.string("passwordParam", var_1);
    }
    if let Some(var_2) = &input.url {
        object.string("url", var_2);
    }
    if let Some(var_3) = &input.username {
        object.string("username", var_3);
    }
    Ok(())
}

pub fn serialize_structure_input_source_request(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::InputSourceRequest,
) -> Result<(), SerializationError> {
    if let Some(var_1) = &input.password_param {
        object.string("passwordParam", var_1);
    }
    if let Some(var_2) = &input.url {
        object.string("url", var_2);
    }
    if let Some(var_3) = &input.username {
        object.string("username", var_3);
    }
    Ok(())
}
