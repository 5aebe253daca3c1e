/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_http::operation::SerializationError;

pub fn serialize_operation_register_device(
    input: &crate::input::RegisterDeviceInput,
) -> Result<smithy_http::body::SdkBody, SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_register_device_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_operation_set_identity_pool_configuration(
    input: &crate::input::SetIdentityPoolConfigurationInput,
) -> Result<smithy_http::body::SdkBody, SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_set_identity_pool_configuration_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}

pub fn serialize_operation_update_records(
    input: &crate::input::UpdateRecordsInput,
) -> Result<smithy_http::body::SdkBody, SerializationError> {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_update_records_input(&mut object, input)?;
    object.finish();
    Ok(smithy_http::body::SdkBody::from(out))
}
