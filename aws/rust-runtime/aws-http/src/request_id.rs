/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::{HeaderMap, HeaderValue};
use smithy_types::error::Builder as GenericErrorBuilder;

/// Extracts a request ID from HTTP response headers
pub fn extract_request_id(headers: &HeaderMap<HeaderValue>) -> Option<&str> {
    headers
        .get("x-amzn-requestid")
        .or_else(|| headers.get("x-amz-request-id"))
        .and_then(|value| std::str::from_utf8(value.as_bytes()).ok())
}

/// Applies a request ID to a generic error builder
pub fn apply_request_id(
    builder: GenericErrorBuilder,
    headers: &HeaderMap<HeaderValue>,
) -> GenericErrorBuilder {
    match extract_request_id(headers) {
        Some(request_id) => builder.request_id(request_id),
        None => builder,
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_request_id, extract_request_id};
    use http::{HeaderMap, HeaderValue};
    use smithy_types::GenericError;

    #[test]
    fn test_extract_request_id() {
        let mut headers = HeaderMap::new();
        assert_eq!(None, extract_request_id(&headers));

        headers.append("x-amz-request-id", HeaderValue::from_static("some-request-id"));
        assert_eq!(Some("some-request-id"), extract_request_id(&headers));

        headers.append(
            "x-amzn-requestid",
            HeaderValue::from_static("some-other-request-id"),
        );
        assert_eq!(Some("some-other-request-id"), extract_request_id(&headers));
    }

    #[test]
    fn test_apply_request_id() {
        let mut headers = HeaderMap::new();
        assert_eq!(
            GenericError::builder().build(),
            apply_request_id(GenericError::builder(), &headers).build(),
        );

        headers.append("x-amzn-requestid", HeaderValue::from_static("some-request-id"));
        assert_eq!(
            GenericError::builder().request_id("some-request-id").build(),
            apply_request_id(GenericError::builder(), &headers).build(),
        );
    }
}
