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
        "BadGatewayException" => crate::error::ErrorKind::BadGatewayException(
            crate::error::BadGatewayException::builder()
                .set_message(fields.message)
                .build(),
        ),
        "BadRequestException" => crate::error::ErrorKind::BadRequestException(
            crate::error::BadRequestException::builder()
                .set_message(fields.message)
                .build(),
        ),
        "ConflictException" => crate::error::ErrorKind::ConflictException(
            crate::error::ConflictException::builder()
                .set_message(fields.message)
                .build(),
        ),
        "ForbiddenException" => crate::error::ErrorKind::ForbiddenException(
            crate::error::ForbiddenException::builder()
                .set_message(fields.message)
                .build(),
        ),
        "GatewayTimeoutException" => crate::error::ErrorKind::GatewayTimeoutException(
            crate::error::GatewayTimeoutException::builder()
                .set_message(fields.message)
                .build(),
        ),
        "InternalServerErrorException" => crate::error::ErrorKind::InternalServerErrorException(
            crate::error::InternalServerErrorException::builder()
                .set_message(fields.message)
                .build(),
        ),
        "NotFoundException" => crate::error::ErrorKind::NotFoundException(
            crate::error::NotFoundException::builder()
                .set_message(fields.message)
                .build(),
        ),
        "TooManyRequestsException" => crate::error::ErrorKind::TooManyRequestsException(
            crate::error::TooManyRequestsException::builder()
                .set_message(fields.message)
                .build(),
        ),
        "UnprocessableEntityException" => crate::error::ErrorKind::UnprocessableEntityException(
            crate::error::UnprocessableEntityException::builder()
                .set_message(fields.message)
                .build(),
        ),
        _ => return crate::error::Error::generic(generic),
    };
    crate::error::Error::new(kind, generic)
}

pub fn parse_create_channel_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateChannelOutput, crate::error::Error> {
    #[allow(unused_mut)]
    let mut output = crate::output::create_channel_output::Builder::default();
    output = crate::json_deser::deser_operation_create_channel(response.body().as_ref(), output)
        .map_err(crate::error::Error::unhandled)?;
    Ok(output.build())
}

pub fn parse_create_input_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateInputOutput, crate::error::Error> {
    #[allow(unused_mut)]
    let mut output = crate::output::create_input_output::Builder::default();
    output = crate::json_deser::deser_operation_create_input(response.body().as_ref(), output)
        .map_err(crate::error::Error::unhandled)?;
    Ok(output.build())
}

pub fn parse_delete_channel_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteChannelOutput, crate::error::Error> {
    #[allow(unused_mut)]
    let mut output = crate::output::delete_channel_output::Builder::default();
    output = crate::json_deser::deser_operation_delete_channel(response.body().as_ref(), output)
        .map_err(crate::error::Error::unhandled)?;
    Ok(output.build())
}

pub fn parse_delete_input_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteInputOutput, crate::error::Error> {
    #[allow(unused_mut)]
    let mut output = crate::output::delete_input_output::Builder::default();
    output = crate::json_deser::deser_operation_delete_input(response.body().as_ref(), output)
        .map_err(crate::error::Error::unhandled)?;
    Ok(output.build())
}

pub fn parse_describe_channel_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeChannelOutput, crate::error::Error> {
    #[allow(unused_mut)]
    let mut output = crate::output::describe_channel_output::Builder::default();
    output = crate::json_deser::deser_operation_describe_channel(response.body().as_ref(), output)
        .map_err(crate::error::Error::unhandled)?;
    Ok(output.build())
}

pub fn parse_describe_input_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeInputOutput, crate::error::Error> {
    #[allow(unused_mut)]
    let mut output = crate::output::describe_input_output::Builder::default();
    output = crate::json_deser::deser_operation_describe_input(response.body().as_ref(), output)
        .map_err(crate::error::Error::unhandled)?;
    Ok(output.build())
}

pub fn parse_list_inputs_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListInputsOutput, crate::error::Error> {
    #[allow(unused_mut)]
    let mut output = crate::output::list_inputs_output::Builder::default();
    output = crate::json_deser::deser_operation_list_inputs(response.body().as_ref(), output)
        .map_err(crate::error::Error::unhandled)?;
    Ok(output.build())
}

pub fn parse_start_channel_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::StartChannelOutput, crate::error::Error> {
    #[allow(unused_mut)]
    let mut output = crate::output::start_channel_output::Builder::default();
    output = crate::json_deser::deser_operation_start_channel(response.body().as_ref(), output)
        .map_err(crate::error::Error::unhandled)?;
    Ok(output.build())
}

pub fn parse_stop_channel_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::StopChannelOutput, crate::error::Error> {
    #[allow(unused_mut)]
    let mut output = crate::output::stop_channel_output::Builder::default();
    output = crate::json_deser::deser_operation_stop_channel(response.body().as_ref(), output)
        .map_err(crate::error::Error::unhandled)?;
    Ok(output.build())
}

pub fn parse_update_channel_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateChannelOutput, crate::error::Error> {
    #[allow(unused_mut)]
    let mut output = crate::output::update_channel_output::Builder::default();
    output = crate::json_deser::deser_operation_update_channel(response.body().as_ref(), output)
        .map_err(crate::error::Error::unhandled)?;
    Ok(output.build())
}
