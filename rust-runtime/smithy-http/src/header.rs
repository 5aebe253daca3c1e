/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Utilities for reading and writing HTTP headers

use http::header::{HeaderName, HeaderValue};
use http::request::Builder;
use std::convert::TryFrom;

/// Sets `key` to `value` on the request builder unless the header is already present.
pub fn set_header_if_absent<V>(request: Builder, key: HeaderName, value: V) -> Builder
where
    HeaderValue: TryFrom<V>,
    <HeaderValue as TryFrom<V>>::Error: Into<http::Error>,
{
    if !request
        .headers_ref()
        .map(|map| map.contains_key(&key))
        .unwrap_or(false)
    {
        request.header(key, value)
    } else {
        request
    }
}

/// Reads the first value of header `key` as a string.
///
/// Returns `None` when the header is absent or is not valid visible ASCII.
pub fn one_or_none<'a>(headers: &'a http::HeaderMap, key: &str) -> Option<&'a str> {
    headers.get(key).and_then(|value| value.to_str().ok())
}

#[cfg(test)]
mod test {
    use crate::header::{one_or_none, set_header_if_absent};
    use http::header::CONTENT_TYPE;

    #[test]
    fn existing_header_is_kept() {
        let builder = http::Request::builder().header(CONTENT_TYPE, "application/json");
        let request = set_header_if_absent(builder, CONTENT_TYPE, "application/x-amz-json-1.1")
            .body(())
            .unwrap();
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(request.headers().get_all(CONTENT_TYPE).iter().count(), 1);
    }

    #[test]
    fn missing_header_is_set() {
        let request = set_header_if_absent(
            http::Request::builder(),
            CONTENT_TYPE,
            "application/x-amz-json-1.1",
        )
        .body(())
        .unwrap();
        assert_eq!(request.headers()[CONTENT_TYPE], "application/x-amz-json-1.1");
    }

    #[test]
    fn read_one_header() {
        let response = http::Response::builder()
            .header("x-amzn-RequestId", "abc-123")
            .body(())
            .unwrap();
        assert_eq!(
            one_or_none(response.headers(), "x-amzn-requestid"),
            Some("abc-123")
        );
        assert_eq!(one_or_none(response.headers(), "x-amzn-errortype"), None);
    }
}
