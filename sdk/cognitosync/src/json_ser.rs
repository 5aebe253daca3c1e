/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! JSON serializers, one per shape.
//!
//! Present members are written in declaration order under their wire names; absent members
//! are left out of the object entirely.

use smithy_http::operation::SerializationError;

pub fn serialize_structure_register_device_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::RegisterDeviceInput,
) -> Result<(), SerializationError> {
    if let Some(var_1) = &input.platform {
        object.string("Platform", var_1.as_str());
    }
    if let Some(var_2) = &input.token {
        object.string("Token", var_2);
    }
    Ok(())
}

pub fn serialize_structure_set_identity_pool_configuration_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::SetIdentityPoolConfigurationInput,
) -> Result<(), SerializationError> {
    if let Some(var_1) = &input.push_sync {
        let mut object_2 = object.start_object("PushSync");
        crate::json_ser::serialize_structure_push_sync(&mut object_2, var_1)?;
        object_2.finish();
    }
    if let Some(var_3) = &input.cognito_streams {
        let mut object_4 = object.start_object("CognitoStreams");
        crate::json_ser::serialize_structure_cognito_streams(&mut object_4, var_3)?;
        object_4.finish();
    }
    Ok(())
}

pub fn serialize_structure_update_records_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::UpdateRecordsInput,
) -> Result<(), SerializationError> {
    if let Some(var_1) = &input.device_id {
        object.string("DeviceId", var_1);
    }
    if let Some(var_2) = &input.record_patches {
        let mut array_3 = object.start_array("RecordPatches");
        for item_4 in var_2 {
            let mut object_5 = array_3.start_object();
            crate::json_ser::serialize_structure_record_patch(&mut object_5, item_4)?;
            object_5.finish();
        }
        array_3.finish();
    }
    if let Some(var_6) = &input.sync_session_token {
        object.string("SyncSessionToken", var_6);
    }
    Ok(())
}

pub fn serialize_structure_cognito_streams(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::CognitoStreams,
) -> Result<(), SerializationError> {
    if let Some(var_1) = &input.stream_name {
        object.string("StreamName", var_1);
    }
    if let Some(var_2) = &input.role_arn {
        object.string("RoleArn", var_2);
    }
    if let Some(var_3) = &input.streaming_status {
        object.string("StreamingStatus", var_3.as_str());
    }
    Ok(())
}

pub fn serialize_structure_dataset(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::Dataset,
) -> Result<(), SerializationError> {
    if let Some(var_1) = &input.identity_id {
        object.string("IdentityId", var_1);
    }
    if let Some(var_2) = &input.dataset_name {
        object.string("DatasetName", var_2);
    }
    if let Some(var_3) = &input.creation_date {
        object
            .instant("CreationDate", var_3, smithy_types::instant::Format::EpochSeconds)
            .map_err(|source| SerializationError::InvalidTimestamp {
                field: "CreationDate",
                source,
            })?;
    }
    if let Some(var_4) = &input.last_modified_date {
        object
            .instant("LastModifiedDate", var_4, smithy_types::instant::Format::EpochSeconds)
            .map_err(|source| SerializationError::InvalidTimestamp {
                field: "LastModifiedDate",
                source,
            })?;
    }
    if let Some(var_5) = &input.last_modified_by {
        object.string("LastModifiedBy", var_5);
    }
    if let Some(var_6) = &input.data_storage {
        object.number(
            "DataStorage",
            smithy_types::Number::from(*var_6),
        );
    }
    if let Some(var_7) = &input.num_records {
        object.number(
            "NumRecords",
            smithy_types::Number::from(*var_7),
        );
    }
    Ok(())
}

pub fn serialize_structure_push_sync(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::PushSync,
) -> Result<(), SerializationError> {
    if let Some(var_1) = &input.application_arns {
        let mut array_2 = object.start_array("ApplicationArns");
        for item_3 in var_1 {
            array_2.string(item_3);
        }
        array_2.finish();
    }
    if let Some(var_4) = &input.role_arn {
        object.string("RoleArn", var_4);
    }
    Ok(())
}

pub fn serialize_structure_record(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::Record,
) -> Result<(), SerializationError> {
    if let Some(var_1) = &input.key {
        object.string("Key", var_1);
    }
    if let Some(var_2) = &input.value {
        object.string("Value", var_2);
    }
    if let Some(var_3) = &input.sync_count {
        object.number(
            "SyncCount",
            smithy_types::Number::from(*var_3),
        );
    }
    if let Some(var_4) = &input.last_modified_date {
        object
            .instant("LastModifiedDate", var_4, smithy_types::instant::Format::EpochSeconds)
            .map_err(|source| SerializationError::InvalidTimestamp {
                field: "LastModifiedDate",
                source,
            })?;
    }
    if let Some(var_5) = &input.last_modified_by {
        object.string("LastModifiedBy", var_5);
    }
    if let Some(var_6) = &input.device_last_modified_date {
        object
            .instant("DeviceLastModifiedDate", var_6, smithy_types::instant::Format::EpochSeconds)
            .map_err(|source| SerializationError::InvalidTimestamp {
                field: "DeviceLastModifiedDate",
                source,
            })?;
    }
    Ok(())
}

pub fn serialize_structure_record_patch(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::RecordPatch,
) -> Result<(), SerializationError> {
    if let Some(var_1) = &input.op {
        object.string("Op", var_1.as_str());
    }
    if let Some(var_2) = &input.key {
        object.string("Key", var_2);
    }
    if let Some(var_3) = &input.value {
        object.string("Value", var_3);
    }
    if let Some(var_4) = &input.sync_count {
        object.number(
            "SyncCount",
            smithy_types::Number::from(*var_4),
        );
    }
    if let Some(var_5) = &input.device_last_modified_date {
        object
            .instant("DeviceLastModifiedDate", var_5, smithy_types::instant::Format::EpochSeconds)
            .map_err(|source| SerializationError::InvalidTimestamp {
                field: "DeviceLastModifiedDate",
                source,
            })?;
    }
    Ok(())
}
