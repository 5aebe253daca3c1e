/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::body::SdkBody;
use smithy_types::instant::InstantError;
use std::borrow::Cow;
use std::error::Error;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    pub fn name(&self) -> &str {
        &self.operation
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct Parts<H> {
    pub response_handler: H,
    pub metadata: Option<Metadata>,
}

/// A fully built request paired with the handler that parses its response.
#[derive(Debug)]
pub struct Operation<H> {
    request: Request,
    parts: Parts<H>,
}

impl<H> Operation<H> {
    pub fn into_request_response(self) -> (Request, Parts<H>) {
        (self.request, self.parts)
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.parts.metadata.as_ref()
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.parts.metadata = Some(metadata);
        self
    }

    pub fn new(request: Request, response_handler: H) -> Self {
        Operation {
            request,
            parts: Parts {
                response_handler,
                metadata: None,
            },
        }
    }
}

#[derive(Debug)]
pub struct Request {
    /// The underlying HTTP Request
    inner: http::Request<SdkBody>,
}

impl Request {
    pub fn new(base: http::Request<SdkBody>) -> Self {
        Request { inner: base }
    }

    pub fn http(&self) -> &http::Request<SdkBody> {
        &self.inner
    }

    pub fn http_mut(&mut self) -> &mut http::Request<SdkBody> {
        &mut self.inner
    }

    pub fn try_clone(&self) -> Option<Request> {
        let cloned_body = self.inner.body().try_clone()?;
        let mut cloned_request = http::Request::builder()
            .uri(self.inner.uri().clone())
            .method(self.inner.method())
            .version(self.inner.version());
        if let Some(headers) = cloned_request.headers_mut() {
            *headers = self.inner.headers().clone();
        }
        let inner = cloned_request.body(cloned_body).ok()?;
        Some(Request { inner })
    }

    pub fn into_http(self) -> http::Request<SdkBody> {
        self.inner
    }
}

/// Failure to build an HTTP request from an operation input.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid field in input: {field} (Details: {details})")]
    InvalidField {
        field: &'static str,
        details: String,
    },
    #[error("{field} was missing. {details}")]
    MissingField {
        field: &'static str,
        details: &'static str,
    },
    #[error("No {input} was provided. A request cannot be built without an input")]
    MissingInput { input: &'static str },
    #[error("Failed to serialize request: {0}")]
    SerializationError(#[from] SerializationError),
    #[error("Invalid URI `{uri}`: {message}")]
    InvalidUri {
        uri: String,
        #[source]
        err: http::uri::InvalidUri,
        message: Cow<'static, str>,
    },
    #[error("Error during request construction: {0}")]
    Other(Box<dyn Error + Send + Sync + 'static>),
}

/// Failure to serialize an operation input into a request body.
#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("Failed to serialize timestamp `{field}`: {source}")]
    InvalidTimestamp {
        field: &'static str,
        #[source]
        source: InstantError,
    },
    #[error("Failed to serialize request body: {0}")]
    Other(Box<dyn Error + Send + Sync + 'static>),
}

/// Builds the HTTP request for an operation input.
///
/// Implemented by every operation input. Implementations fill in method, URI (labels and query),
/// headers and body; the endpoint is applied later, when the operation is assembled.
pub trait BuildHttpRequest {
    fn build_http_request(&self) -> Result<http::Request<SdkBody>, BuildError>;
}

/// Builds the HTTP request for `input`, rejecting an absent input before anything else runs.
pub fn build_http_request<I>(input: Option<&I>) -> Result<http::Request<SdkBody>, BuildError>
where
    I: BuildHttpRequest,
{
    let input = input.ok_or(BuildError::MissingInput {
        input: short_type_name::<I>(),
    })?;
    let request = input.build_http_request()?;
    tracing::trace!(method = %request.method(), uri = %request.uri(), "built http request");
    Ok(request)
}

fn short_type_name<T>() -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::operation::{build_http_request, BuildError, BuildHttpRequest, Metadata, Operation, Request};
    use http::header::{AUTHORIZATION, CONTENT_LENGTH};
    use http::Uri;
    use tracing_test::traced_test;

    #[test]
    fn try_clone_clones_all_data() {
        let request = Request::new(
            http::Request::builder()
                .uri(Uri::from_static("http://www.amazon.com"))
                .method("POST")
                .header(CONTENT_LENGTH, 456)
                .header(AUTHORIZATION, "Token: hello")
                .body(SdkBody::from("hello world!"))
                .expect("valid request"),
        );
        let cloned = request.try_clone().expect("request is cloneable");

        let request = cloned.into_http();
        assert_eq!(request.uri(), &Uri::from_static("http://www.amazon.com"));
        assert_eq!(request.method(), "POST");
        assert_eq!(request.headers().len(), 2);
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Token: hello"
        );
        assert_eq!(request.headers().get(CONTENT_LENGTH).unwrap(), "456");
        assert_eq!(request.body().bytes(), "hello world!".as_bytes());
    }

    struct PingInput {
        path: &'static str,
    }

    impl BuildHttpRequest for PingInput {
        fn build_http_request(&self) -> Result<http::Request<SdkBody>, BuildError> {
            http::Request::builder()
                .method("GET")
                .uri(self.path)
                .body(SdkBody::empty())
                .map_err(|err| BuildError::Other(err.into()))
        }
    }

    #[test]
    fn absent_input_is_rejected() {
        let err = build_http_request::<PingInput>(None).expect_err("no input");
        assert!(matches!(err, BuildError::MissingInput { input: "PingInput" }));
        assert_eq!(
            err.to_string(),
            "No PingInput was provided. A request cannot be built without an input"
        );
    }

    #[test]
    #[traced_test]
    fn present_input_is_built() {
        let request = build_http_request(Some(&PingInput { path: "/ping" })).unwrap();
        assert_eq!(request.uri(), "/ping");
        assert!(logs_contain("built http request"));
    }

    #[test]
    fn operation_carries_metadata() {
        let request = build_http_request(Some(&PingInput { path: "/ping" })).unwrap();
        let operation = Operation::new(Request::new(request), ())
            .with_metadata(Metadata::new("Ping", "pingservice"));
        assert_eq!(operation.metadata().map(|m| m.name()), Some("Ping"));
        let (request, parts) = operation.into_request_response();
        assert_eq!(request.http().method(), "GET");
        assert_eq!(parts.metadata.unwrap().service(), "pingservice");
    }
}
