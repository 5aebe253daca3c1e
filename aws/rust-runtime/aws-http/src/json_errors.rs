/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Error responses of the AWS JSON protocols.
//!
//! The error code comes from the `x-amzn-errortype` header when present, otherwise from the
//! `code` or `__type` member of the body. The message is read from `message`, `Message` or
//! `errorMessage`.

use crate::request_id::apply_request_id;
use bytes::Bytes;
use http::header::ToStrError;
use http::{HeaderMap, Response};
use smithy_json::deserialize::token::{skip_value, Token};
use smithy_json::deserialize::{json_token_iter, Error as DeserializeError};
use smithy_types::GenericError;
use std::borrow::Cow;

/// Strips a trailing `:url` and a leading `namespace#` from an error code.
pub fn sanitize_error_code(error_code: &str) -> &str {
    // Trim a trailing URL from the error code, beginning with a `:`
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };

    // Trim a prefixing namespace from the error code, beginning with a `#`
    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

struct ErrorBody<'a> {
    code: Option<Cow<'a, str>>,
    message: Option<Cow<'a, str>>,
}

fn parse_error_body(bytes: &[u8]) -> Result<ErrorBody<'_>, DeserializeError> {
    let mut tokens = json_token_iter(bytes).peekable();
    let (mut typ, mut code, mut message) = (None, None, None);
    if let Some(Token::StartObject { .. }) = tokens.next().transpose()? {
        loop {
            match tokens.next().transpose()? {
                Some(Token::EndObject { .. }) => break,
                Some(Token::ObjectKey { key, .. }) => {
                    if let Some(Ok(Token::ValueString { value, .. })) = tokens.peek() {
                        match key.as_escaped_str() {
                            "code" => code = Some(value.to_unescaped()?),
                            "__type" => typ = Some(value.to_unescaped()?),
                            "message" | "Message" | "errorMessage" => {
                                message = Some(value.to_unescaped()?)
                            }
                            _ => {}
                        }
                    }
                    skip_value(&mut tokens)?;
                }
                _ => {
                    return Err(DeserializeError::custom(
                        "expected object key or end object",
                    ))
                }
            }
        }
        if tokens.next().is_some() {
            return Err(DeserializeError::custom(
                "found more JSON tokens after completing parsing",
            ));
        }
    }
    Ok(ErrorBody {
        code: code.or(typ),
        message,
    })
}

fn error_type_from_header(headers: &HeaderMap) -> Result<Option<&str>, ToStrError> {
    headers
        .get("x-amzn-errortype")
        .map(|value| value.to_str())
        .transpose()
}

/// Parses the code, message and request id of an error response into a [`GenericError`].
pub fn parse_generic_error(response: &Response<Bytes>) -> Result<GenericError, DeserializeError> {
    let ErrorBody { code, message } = parse_error_body(response.body())?;

    let mut err_builder = GenericError::builder();
    let header_code = error_type_from_header(response.headers())
        .map_err(|_| DeserializeError::custom("x-amzn-errortype header is not valid UTF-8"))?;
    if let Some(code) = header_code.or_else(|| code.as_deref()) {
        err_builder = err_builder.code(sanitize_error_code(code));
    }
    if let Some(message) = message {
        err_builder = err_builder.message(message);
    }
    Ok(apply_request_id(err_builder, response.headers()).build())
}

#[cfg(test)]
mod test {
    use crate::json_errors::{parse_error_body, parse_generic_error, sanitize_error_code};
    use bytes::Bytes;
    use pretty_assertions::assert_eq;
    use smithy_types::GenericError;
    use std::borrow::Cow;

    #[test]
    fn generic_error() {
        let response = http::Response::builder()
            .header("x-amzn-requestid", "1234")
            .body(Bytes::from_static(
                br#"{ "__type": "FooError", "message": "Go to foo" }"#,
            ))
            .unwrap();
        assert_eq!(
            parse_generic_error(&response).unwrap(),
            GenericError::builder()
                .code("FooError")
                .message("Go to foo")
                .request_id("1234")
                .build()
        )
    }

    #[test]
    fn error_type() {
        assert_eq!(
            Some(Cow::Borrowed("FooError")),
            parse_error_body(br#"{ "__type": "FooError" }"#)
                .unwrap()
                .code
        );
    }

    #[test]
    fn code_takes_priority() {
        assert_eq!(
            Some(Cow::Borrowed("BarError")),
            parse_error_body(br#"{ "code": "BarError", "__type": "FooError" }"#)
                .unwrap()
                .code
        );
    }

    #[test]
    fn ignores_unrelated_members() {
        let body = parse_error_body(
            br#"{ "Code": 5, "nested": {"message": "no"}, "Message": "Rate exceeded" }"#,
        )
        .unwrap();
        assert_eq!(body.code, None);
        assert_eq!(body.message, Some(Cow::Borrowed("Rate exceeded")));
    }

    #[test]
    fn error_message_member() {
        let body = parse_error_body(br#"{"errorMessage": "bad \"input\""}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("bad \"input\""));
    }

    #[test]
    fn header_takes_priority() {
        let response = http::Response::builder()
            .header(
                "x-amzn-errortype",
                "NotFoundException:http://internal.amazon.com/coral/com.amazonaws.medialive/",
            )
            .status(404)
            .body(Bytes::from_static(
                br#"{ "code": "Other", "message": "Input not found" }"#,
            ))
            .unwrap();
        let error = parse_generic_error(&response).unwrap();
        assert_eq!(error.code(), Some("NotFoundException"));
        assert_eq!(error.message(), Some("Input not found"));
        assert_eq!(error.request_id(), None);
    }

    #[test]
    fn empty_body_is_not_an_error() {
        let response = http::Response::builder()
            .status(500)
            .body(Bytes::new())
            .unwrap();
        assert_eq!(
            parse_generic_error(&response).unwrap(),
            GenericError::builder().build()
        );
    }

    #[test]
    fn invalid_json_is_reported() {
        let response = http::Response::builder()
            .status(500)
            .body(Bytes::from_static(b"{\"message\": "))
            .unwrap();
        assert!(parse_generic_error(&response).is_err());
    }

    #[test]
    fn sanitize_namespace_and_url() {
        assert_eq!(sanitize_error_code("aws.protocoltests.restjson#FooError"), "FooError");
        assert_eq!(
            sanitize_error_code("FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"),
            "FooError"
        );
        assert_eq!(
            sanitize_error_code(
                "aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"
            ),
            "FooError"
        );
        assert_eq!(sanitize_error_code("FooError"), "FooError");
    }
}
