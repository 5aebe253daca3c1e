/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::{HeaderMap, HeaderValue};
use std::error::Error;
use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

type BodyError = Box<dyn Error + Send + Sync>;

/// SdkBody type
///
/// This is the Body used for all HTTP requests built by the service clients. Request bodies are
/// always fully serialized before the request is built, so the body is a single in-memory chunk
/// that can be cloned and inspected.
#[derive(Clone, PartialEq, Eq)]
pub struct SdkBody {
    inner: Option<Bytes>,
}

impl SdkBody {
    /// An empty body. Read as a zero-length buffer.
    pub fn empty() -> Self {
        SdkBody { inner: None }
    }

    /// Returns the bytes of the body; an empty body returns an empty slice.
    pub fn bytes(&self) -> &[u8] {
        self.inner.as_deref().unwrap_or(&[])
    }

    pub fn content_length(&self) -> u64 {
        self.bytes().len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.bytes().is_empty()
    }

    pub fn try_clone(&self) -> Option<Self> {
        Some(self.clone())
    }
}

impl fmt::Debug for SdkBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(self.bytes()) {
            Ok(text) => f.debug_tuple("SdkBody").field(&text).finish(),
            Err(_) => f.debug_tuple("SdkBody").field(&self.bytes()).finish(),
        }
    }
}

impl Default for SdkBody {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for SdkBody {
    fn from(s: &str) -> Self {
        SdkBody::from(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<String> for SdkBody {
    fn from(s: String) -> Self {
        SdkBody::from(Bytes::from(s))
    }
}

impl From<Bytes> for SdkBody {
    fn from(bytes: Bytes) -> Self {
        SdkBody { inner: Some(bytes) }
    }
}

impl From<Vec<u8>> for SdkBody {
    fn from(data: Vec<u8>) -> SdkBody {
        Self::from(Bytes::from(data))
    }
}

impl http_body::Body for SdkBody {
    type Data = Bytes;
    type Error = BodyError;

    fn poll_data(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Self::Data, Self::Error>>> {
        Poll::Ready(self.inner.take().map(Ok))
    }

    fn poll_trailers(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Result<Option<HeaderMap<HeaderValue>>, Self::Error>> {
        Poll::Ready(Ok(None))
    }

    fn is_end_stream(&self) -> bool {
        self.inner.is_none()
    }

    fn size_hint(&self) -> http_body::SizeHint {
        http_body::SizeHint::with_exact(self.content_length())
    }
}

#[cfg(test)]
mod test {
    use super::SdkBody;
    use http_body::Body;

    #[test]
    fn empty_body() {
        let body = SdkBody::empty();
        assert_eq!(body.bytes(), b"");
        assert_eq!(body.content_length(), 0);
        assert!(body.is_end_stream());
        assert_eq!(body.size_hint().exact(), Some(0));
    }

    #[test]
    fn body_from_string() {
        let body = SdkBody::from(r#"{"name":"demo"}"#.to_string());
        assert_eq!(body.content_length(), 15);
        assert!(!body.is_end_stream());
        assert_eq!(body.size_hint().exact(), Some(15));
        assert_eq!(format!("{:?}", body), r#"SdkBody("{\"name\":\"demo\"}")"#);
        assert_eq!(body.try_clone(), Some(body));
    }
}
