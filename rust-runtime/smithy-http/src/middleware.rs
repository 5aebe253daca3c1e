/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Response-side glue between a transport and an operation's response parser

use crate::response::ParseStrictResponse;
use crate::result::{SdkError, SdkSuccess};
use bytes::Bytes;

/// Load a response using `handler` to parse the results.
///
/// Success and failure will be split and mapped into `SdkSuccess` and `SdkError`.
/// Generic Parameters:
/// - `O`: The Http response handler that returns `Result<T, E>`
/// - `T`/`E`: `Result<T, E>` returned by `handler`.
pub fn load_response<T, E, O>(
    response: http::Response<Bytes>,
    handler: &O,
) -> Result<SdkSuccess<T>, SdkError<E>>
where
    O: ParseStrictResponse<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    match handler.parse(&response) {
        Ok(parsed) => Ok(SdkSuccess {
            raw: response,
            parsed,
        }),
        Err(err) => {
            tracing::debug!(status = %response.status(), error = %err, "response parsed into a service error");
            Err(SdkError::ServiceError { raw: response, err })
        }
    }
}

#[cfg(test)]
mod test {
    use crate::middleware::load_response;
    use crate::response::ParseStrictResponse;
    use crate::result::SdkError;
    use bytes::Bytes;
    use http::Response;
    use tracing_test::traced_test;

    struct StatusParser;

    impl ParseStrictResponse for StatusParser {
        type Output = Result<usize, String>;

        fn parse(&self, response: &Response<Bytes>) -> Self::Output {
            if response.status().is_success() {
                Ok(response.body().len())
            } else {
                Err(format!("status {}", response.status().as_u16()))
            }
        }
    }

    #[test]
    fn success_keeps_raw_response() {
        let response = Response::builder()
            .status(200)
            .body(Bytes::from_static(b"{}"))
            .unwrap();
        let success = load_response(response, &StatusParser).unwrap();
        assert_eq!(success.parsed, 2);
        assert_eq!(success.raw.body().as_ref(), b"{}");
    }

    #[test]
    #[traced_test]
    fn failure_becomes_service_error() {
        let response = Response::builder()
            .status(404)
            .body(Bytes::new())
            .unwrap();
        match load_response(response, &StatusParser) {
            Err(SdkError::ServiceError { raw, err }) => {
                assert_eq!(raw.status(), 404);
                assert_eq!(err, "status 404");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(logs_contain("response parsed into a service error"));
    }
}
