/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Parses an unsuccessful response into the service error.
///
/// Error codes without a modeled counterpart, and bodies that are not valid JSON, become
/// [`ErrorKind::Unhandled`](crate::error::ErrorKind::Unhandled).
pub fn parse_error(response: &http::Response<bytes::Bytes>) -> crate::error::Error {
    let generic = match aws_http::json_errors::parse_generic_error(response) {
        Ok(generic) => generic,
        Err(err) => return crate::error::Error::unhandled(err),
    };
    let error_code = match generic.code() {
        Some(code) => code,
        None => return crate::error::Error::generic(generic),
    };
    if !crate::error::ErrorKind::codes().contains(&error_code) {
        return crate::error::Error::generic(generic);
    }
    let fields = match crate::json_deser::deser_error_fields(response.body().as_ref()) {
        Ok(fields) => fields,
        Err(err) => return crate::error::Error::unhandled(err),
    };
    let kind = match error_code {
        "InternalErrorException" => crate::error::ErrorKind::InternalErrorException(
            crate::error::InternalErrorException::builder()
                .set_message(fields.message)
                .build(),
        ),
        "InvalidParameterException" => crate::error::ErrorKind::InvalidParameterException(
            crate::error::InvalidParameterException::builder()
                .set_message(fields.message)
                .build(),
        ),
        "LimitExceededException" => crate::error::ErrorKind::LimitExceededException(
            crate::error::LimitExceededException::builder()
                .set_message(fields.message)
                .build(),
        ),
        "NotAuthorizedException" => crate::error::ErrorKind::NotAuthorizedException(
            crate::error::NotAuthorizedException::builder()
                .set_message(fields.message)
                .build(),
        ),
        "ResourceConflictException" => crate::error::ErrorKind::ResourceConflictException(
            crate::error::ResourceConflictException::builder()
                .set_message(fields.message)
                .build(),
        ),
        "ResourceNotFoundException" => crate::error::ErrorKind::ResourceNotFoundException(
            crate::error::ResourceNotFoundException::builder()
                .set_message(fields.message)
                .build(),
        ),
        "TooManyRequestsException" => crate::error::ErrorKind::TooManyRequestsException(
            crate::error::TooManyRequestsException::builder()
                .set_message(fields.message)
                .build(),
        ),
        _ => return crate::error::Error::generic(generic),
    };
    crate::error::Error::new(kind, generic)
}

pub fn parse_delete_dataset_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteDatasetOutput, crate::error::Error> {
    #[allow(unused_mut)]
    let mut output = crate::output::delete_dataset_output::Builder::default();
    output = crate::json_deser::deser_operation_delete_dataset(response.body().as_ref(), output)
        .map_err(crate::error::Error::unhandled)?;
    Ok(output.build())
}

pub fn parse_describe_dataset_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeDatasetOutput, crate::error::Error> {
    #[allow(unused_mut)]
    let mut output = crate::output::describe_dataset_output::Builder::default();
    output = crate::json_deser::deser_operation_describe_dataset(response.body().as_ref(), output)
        .map_err(crate::error::Error::unhandled)?;
    Ok(output.build())
}

pub fn parse_get_identity_pool_configuration_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetIdentityPoolConfigurationOutput, crate::error::Error> {
    #[allow(unused_mut)]
    let mut output = crate::output::get_identity_pool_configuration_output::Builder::default();
    output = crate::json_deser::deser_operation_get_identity_pool_configuration(response.body().as_ref(), output)
        .map_err(crate::error::Error::unhandled)?;
    Ok(output.build())
}

pub fn parse_list_datasets_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListDatasetsOutput, crate::error::Error> {
    #[allow(unused_mut)]
    let mut output = crate::output::list_datasets_output::Builder::default();
    output = crate::json_deser::deser_operation_list_datasets(response.body().as_ref(), output)
        .map_err(crate::error::Error::unhandled)?;
    Ok(output.build())
}

pub fn parse_list_records_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListRecordsOutput, crate::error::Error> {
    #[allow(unused_mut)]
    let mut output = crate::output::list_records_output::Builder::default();
    output = crate::json_deser::deser_operation_list_records(response.body().as_ref(), output)
        .map_err(crate::error::Error::unhandled)?;
    Ok(output.build())
}

pub fn parse_register_device_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::RegisterDeviceOutput, crate::error::Error> {
    #[allow(unused_mut)]
    let mut output = crate::output::register_device_output::Builder::default();
    output = crate::json_deser::deser_operation_register_device(response.body().as_ref(), output)
        .map_err(crate::error::Error::unhandled)?;
    Ok(output.build())
}

pub fn parse_set_identity_pool_configuration_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::SetIdentityPoolConfigurationOutput, crate::error::Error> {
    #[allow(unused_mut)]
    let mut output = crate::output::set_identity_pool_configuration_output::Builder::default();
    output = crate::json_deser::deser_operation_set_identity_pool_configuration(response.body().as_ref(), output)
        .map_err(crate::error::Error::unhandled)?;
    Ok(output.build())
}

pub fn parse_update_records_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateRecordsOutput, crate::error::Error> {
    #[allow(unused_mut)]
    let mut output = crate::output::update_records_output::Builder::default();
    output = crate::json_deser::deser_operation_update_records(response.body().as_ref(), output)
        .map_err(crate::error::Error::unhandled)?;
    Ok(output.build())
}
