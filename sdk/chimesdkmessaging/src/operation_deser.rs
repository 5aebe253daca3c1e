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
        "BadRequestException" => crate::error::ErrorKind::BadRequestException(
            crate::error::BadRequestException::builder()
                .set_code(fields.code)
                .set_message(fields.message)
                .build(),
        ),
        "ConflictException" => crate::error::ErrorKind::ConflictException(
            crate::error::ConflictException::builder()
                .set_code(fields.code)
                .set_message(fields.message)
                .build(),
        ),
        "ForbiddenException" => crate::error::ErrorKind::ForbiddenException(
            crate::error::ForbiddenException::builder()
                .set_code(fields.code)
                .set_message(fields.message)
                .build(),
        ),
        "NotFoundException" => crate::error::ErrorKind::NotFoundException(
            crate::error::NotFoundException::builder()
                .set_code(fields.code)
                .set_message(fields.message)
                .build(),
        ),
        "ResourceLimitExceededException" => crate::error::ErrorKind::ResourceLimitExceededException(
            crate::error::ResourceLimitExceededException::builder()
                .set_code(fields.code)
                .set_message(fields.message)
                .build(),
        ),
        "ServiceFailureException" => crate::error::ErrorKind::ServiceFailureException(
            crate::error::ServiceFailureException::builder()
                .set_code(fields.code)
                .set_message(fields.message)
                .build(),
        ),
        "ServiceUnavailableException" => crate::error::ErrorKind::ServiceUnavailableException(
            crate::error::ServiceUnavailableException::builder()
                .set_code(fields.code)
                .set_message(fields.message)
                .build(),
        ),
        "ThrottledClientException" => crate::error::ErrorKind::ThrottledClientException(
            crate::error::ThrottledClientException::builder()
                .set_code(fields.code)
                .set_message(fields.message)
                .build(),
        ),
        "UnauthorizedClientException" => crate::error::ErrorKind::UnauthorizedClientException(
            crate::error::UnauthorizedClientException::builder()
                .set_code(fields.code)
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

pub fn parse_create_channel_ban_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateChannelBanOutput, crate::error::Error> {
    #[allow(unused_mut)]
    let mut output = crate::output::create_channel_ban_output::Builder::default();
    output = crate::json_deser::deser_operation_create_channel_ban(response.body().as_ref(), output)
        .map_err(crate::error::Error::unhandled)?;
    Ok(output.build())
}

pub fn parse_create_channel_membership_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateChannelMembershipOutput, crate::error::Error> {
    #[allow(unused_mut)]
    let mut output = crate::output::create_channel_membership_output::Builder::default();
    output = crate::json_deser::deser_operation_create_channel_membership(response.body().as_ref(), output)
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

pub fn parse_delete_channel_ban_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteChannelBanOutput, crate::error::Error> {
    #[allow(unused_mut)]
    let mut output = crate::output::delete_channel_ban_output::Builder::default();
    output = crate::json_deser::deser_operation_delete_channel_ban(response.body().as_ref(), output)
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

pub fn parse_get_channel_message_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetChannelMessageOutput, crate::error::Error> {
    #[allow(unused_mut)]
    let mut output = crate::output::get_channel_message_output::Builder::default();
    output = crate::json_deser::deser_operation_get_channel_message(response.body().as_ref(), output)
        .map_err(crate::error::Error::unhandled)?;
    Ok(output.build())
}

pub fn parse_list_channel_bans_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListChannelBansOutput, crate::error::Error> {
    #[allow(unused_mut)]
    let mut output = crate::output::list_channel_bans_output::Builder::default();
    output = crate::json_deser::deser_operation_list_channel_bans(response.body().as_ref(), output)
        .map_err(crate::error::Error::unhandled)?;
    Ok(output.build())
}

pub fn parse_list_channel_memberships_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListChannelMembershipsOutput, crate::error::Error> {
    #[allow(unused_mut)]
    let mut output = crate::output::list_channel_memberships_output::Builder::default();
    output = crate::json_deser::deser_operation_list_channel_memberships(response.body().as_ref(), output)
        .map_err(crate::error::Error::unhandled)?;
    Ok(output.build())
}

pub fn parse_list_channel_messages_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListChannelMessagesOutput, crate::error::Error> {
    #[allow(unused_mut)]
    let mut output = crate::output::list_channel_messages_output::Builder::default();
    output = crate::json_deser::deser_operation_list_channel_messages(response.body().as_ref(), output)
        .map_err(crate::error::Error::unhandled)?;
    Ok(output.build())
}

pub fn parse_list_channels_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListChannelsOutput, crate::error::Error> {
    #[allow(unused_mut)]
    let mut output = crate::output::list_channels_output::Builder::default();
    output = crate::json_deser::deser_operation_list_channels(response.body().as_ref(), output)
        .map_err(crate::error::Error::unhandled)?;
    Ok(output.build())
}

pub fn parse_send_channel_message_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::SendChannelMessageOutput, crate::error::Error> {
    #[allow(unused_mut)]
    let mut output = crate::output::send_channel_message_output::Builder::default();
    output = crate::json_deser::deser_operation_send_channel_message(response.body().as_ref(), output)
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
