/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use assert_json_diff::assert_json_eq_no_panic;
use http::{Request, Uri};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ProtocolTestFailure {
    #[error("missing query param: expected `{expected}`, found {found:?}")]
    MissingQueryParam {
        expected: String,
        found: Vec<String>,
    },
    #[error("forbidden query param present: `{expected}`")]
    ForbiddenQueryParam {
        expected: String,
    },
    #[error("required query param missing: `{expected}`")]
    RequiredQueryParam {
        expected: String,
    },

    #[error("invalid header value for key `{key}`: expected `{expected}`, found `{found}`")]
    InvalidHeader {
        key: String,
        expected: String,
        found: String,
    },
    #[error("missing required header: `{expected}`")]
    MissingHeader {
        expected: String,
    },
    #[error("header `{forbidden}` should not be present, found `{found}`")]
    ForbiddenHeader {
        forbidden: String,
        found: String,
    },
    #[error("request path mismatch: expected `{expected}`, found `{found}`")]
    InvalidPath {
        expected: String,
        found: String,
    },
    #[error("body did not match. {hint}\n== Expected ==\n{expected}\n== Actual ==\n{found}")]
    BodyDidNotMatch {
        expected: String,
        found: String,
        hint: String,
    },
    #[error("expected body to be valid {expected} but instead: {found}")]
    ProtocolParseFailure {
        expected: String,
        found: String,
    },
}

/// Media types that [`validate_body`] knows how to compare semantically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    /// JSON documents are compared as values: member order and whitespace are ignored.
    Json,
    /// Anything else is compared byte-for-byte.
    Other,
}

impl<T: AsRef<str>> From<T> for MediaType {
    fn from(inp: T) -> Self {
        let media_type = inp.as_ref();
        if media_type == "application/json" || media_type.starts_with("application/x-amz-json") {
            MediaType::Json
        } else {
            MediaType::Other
        }
    }
}

/// Check that the protocol test succeeded & print the pretty error
/// if it did not
///
/// The primary motivation is making multiline debug output
/// readable & using the cleaner Display implementation
#[track_caller]
pub fn assert_ok(inp: Result<(), ProtocolTestFailure>) {
    match inp {
        Ok(_) => (),
        Err(e) => {
            eprintln!("{}", e);
            panic!("Protocol test failed");
        }
    }
}

#[derive(Eq, PartialEq, Hash)]
struct QueryParam<'a> {
    key: &'a str,
    value: Option<&'a str>,
}

impl<'a> QueryParam<'a> {
    fn parse(s: &'a str) -> Self {
        let mut parsed = s.split('=');
        QueryParam {
            key: parsed.next().unwrap_or_default(),
            value: parsed.next(),
        }
    }
}

fn extract_params(uri: &Uri) -> HashSet<&str> {
    uri.query().unwrap_or_default().split('&').collect()
}

pub fn validate_query_string<B>(
    request: &Request<B>,
    expected_params: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual_params = extract_params(request.uri());
    for param in expected_params {
        if !actual_params.contains(param) {
            return Err(ProtocolTestFailure::MissingQueryParam {
                expected: param.to_string(),
                found: actual_params.iter().map(|s| s.to_string()).collect(),
            });
        }
    }
    Ok(())
}

pub fn forbid_query_params<B>(
    request: &Request<B>,
    forbid_keys: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual_keys: HashSet<&str> = extract_params(request.uri())
        .iter()
        .map(|param| QueryParam::parse(param).key)
        .collect();
    for key in forbid_keys {
        if actual_keys.contains(*key) {
            return Err(ProtocolTestFailure::ForbiddenQueryParam {
                expected: key.to_string(),
            });
        }
    }
    Ok(())
}

pub fn require_query_params<B>(
    request: &Request<B>,
    require_keys: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual_keys: HashSet<&str> = extract_params(request.uri())
        .iter()
        .map(|param| QueryParam::parse(param).key)
        .collect();
    for key in require_keys {
        if !actual_keys.contains(*key) {
            return Err(ProtocolTestFailure::RequiredQueryParam {
                expected: key.to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_headers<B>(
    request: &Request<B>,
    expected_headers: &[(&str, &str)],
) -> Result<(), ProtocolTestFailure> {
    for (key, expected_value) in expected_headers {
        // Protocol tests store header lists as comma-delimited
        if !request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::MissingHeader {
                expected: key.to_string(),
            });
        }
        let actual_value: String = request
            .headers()
            .get_all(*key)
            .iter()
            .map(|hv| hv.to_str().unwrap_or("<non-ascii header value>"))
            .collect::<Vec<_>>()
            .join(", ");
        if *expected_value != actual_value {
            return Err(ProtocolTestFailure::InvalidHeader {
                key: key.to_string(),
                expected: expected_value.to_string(),
                found: actual_value,
            });
        }
    }
    Ok(())
}

pub fn forbid_headers<B>(
    request: &Request<B>,
    forbidden_headers: &[&str],
) -> Result<(), ProtocolTestFailure> {
    for key in forbidden_headers {
        if let Some(value) = request.headers().get(*key) {
            return Err(ProtocolTestFailure::ForbiddenHeader {
                forbidden: key.to_string(),
                found: format!("{}: {:?}", key, value),
            });
        }
    }
    Ok(())
}

/// Checks the request path, excluding the query string.
pub fn validate_path<B>(request: &Request<B>, expected: &str) -> Result<(), ProtocolTestFailure> {
    let found = request.uri().path();
    if found != expected {
        return Err(ProtocolTestFailure::InvalidPath {
            expected: expected.to_string(),
            found: found.to_string(),
        });
    }
    Ok(())
}

/// Compares a request or response body against the expected document.
///
/// An empty `expected_body` requires an empty body, whatever the media type.
pub fn validate_body<T: AsRef<[u8]>>(
    actual_body: T,
    expected_body: &str,
    media_type: MediaType,
) -> Result<(), ProtocolTestFailure> {
    let body_str = std::str::from_utf8(actual_body.as_ref());
    match (media_type, body_str) {
        (_, Ok(actual)) if expected_body.is_empty() => {
            if actual.is_empty() {
                Ok(())
            } else {
                Err(ProtocolTestFailure::BodyDidNotMatch {
                    expected: String::new(),
                    found: actual.to_string(),
                    hint: "expected an empty body".to_string(),
                })
            }
        }
        (MediaType::Json, Ok(actual)) => try_json_eq(actual, expected_body),
        (MediaType::Json, Err(_)) => Err(ProtocolTestFailure::ProtocolParseFailure {
            expected: "json".to_owned(),
            found: "input was not valid UTF-8".to_owned(),
        }),
        (MediaType::Other, Ok(actual)) if actual == expected_body => Ok(()),
        (MediaType::Other, actual) => Err(ProtocolTestFailure::BodyDidNotMatch {
            expected: expected_body.to_string(),
            found: match actual {
                Ok(actual) => actual.to_string(),
                Err(_) => format!("{:?}", actual_body.as_ref()),
            },
            hint: "bodies differ".to_string(),
        }),
    }
}

fn try_json_eq(actual: &str, expected: &str) -> Result<(), ProtocolTestFailure> {
    let actual_json: serde_json::Value =
        serde_json::from_str(actual).map_err(|e| ProtocolTestFailure::ProtocolParseFailure {
            expected: "json".to_owned(),
            found: e.to_string() + actual,
        })?;
    let expected_json: serde_json::Value =
        serde_json::from_str(expected).map_err(|e| ProtocolTestFailure::ProtocolParseFailure {
            expected: "json".to_owned(),
            found: format!("expected document is not JSON: {}", e),
        })?;
    match assert_json_eq_no_panic(&actual_json, &expected_json) {
        Ok(()) => Ok(()),
        Err(message) => Err(ProtocolTestFailure::BodyDidNotMatch {
            expected: expected.to_string(),
            found: actual.to_string(),
            hint: message,
        }),
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        forbid_headers, forbid_query_params, require_query_params, validate_body,
        validate_headers, validate_path, validate_query_string, MediaType, ProtocolTestFailure,
    };
    use http::Request;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validate_empty_query_string() {
        let request = Request::builder().uri("/foo").body(()).unwrap();
        validate_query_string(&request, &[]).expect("no required params should pass");
        validate_query_string(&request, &["a"])
            .err()
            .expect("no params provided");
    }

    #[test]
    fn test_validate_query_string() {
        let request = Request::builder()
            .uri("/foo?a=b&c&d=efg&hello=a%20b")
            .body(())
            .unwrap();
        validate_query_string(&request, &["a=b"]).expect("a=b is in the query string");
        validate_query_string(&request, &["c", "a=b"])
            .expect("both params are in the query string");
        validate_query_string(&request, &["a=b", "c", "d=efg", "hello=a%20b"])
            .expect("all params are in the query string");
        validate_query_string(&request, &[]).expect("no required params should pass");

        validate_query_string(&request, &["a"]).expect_err("no parameter should match");
        validate_query_string(&request, &["a=bc"]).expect_err("no parameter should match");
        validate_query_string(&request, &["a=bc"]).expect_err("no parameter should match");
        validate_query_string(&request, &["hell=a%20"]).expect_err("no parameter should match");
    }

    #[test]
    fn test_forbid_query_param() {
        let request = Request::builder()
            .uri("/foo?a=b&c&d=efg&hello=a%20b")
            .body(())
            .unwrap();
        forbid_query_params(&request, &["a"]).expect_err("a is a query param");
        forbid_query_params(&request, &["not_included"]).expect("query param not included");
        forbid_query_params(&request, &["a=b"]).expect("should be matching against keys");
        forbid_query_params(&request, &["c"]).expect_err("c is a query param");
    }

    #[test]
    fn test_require_query_param() {
        let request = Request::builder()
            .uri("/foo?a=b&c&d=efg&hello=a%20b")
            .body(())
            .unwrap();
        require_query_params(&request, &["a"]).expect("a is a query param");
        require_query_params(&request, &["not_included"]).expect_err("query param not included");
        require_query_params(&request, &["a=b"]).expect_err("should be matching against keys");
        require_query_params(&request, &["c"]).expect("c is a query param");
    }

    #[test]
    fn test_validate_headers() {
        let request = Request::builder()
            .uri("/")
            .header("X-Foo", "foo")
            .header("X-Foo-List", "foo")
            .header("X-Foo-List", "bar")
            .header("X-Inline", "inline, other")
            .body(())
            .unwrap();

        validate_headers(&request, &[("X-Foo", "foo")]).expect("header present");
        validate_headers(&request, &[("X-Foo", "Foo")]).expect_err("case sensitive");
        validate_headers(&request, &[("x-foo-list", "foo, bar")]).expect("list concat");
        validate_headers(&request, &[("X-Foo-List", "foo")])
            .expect_err("all list members must be specified");
        validate_headers(&request, &[("X-Inline", "inline, other")])
            .expect("inline header lists also work");
        assert_eq!(
            validate_headers(&request, &[("missing", "value")]),
            Err(ProtocolTestFailure::MissingHeader {
                expected: "missing".to_owned()
            })
        );
    }

    #[test]
    fn test_forbid_headers() {
        let request = Request::builder()
            .uri("/")
            .header("x-amz-chime-bearer", "arn:user")
            .body(())
            .unwrap();
        forbid_headers(&request, &["content-type"]).expect("no content type");
        forbid_headers(&request, &["X-Amz-Chime-Bearer"]).expect_err("bearer is present");
    }

    #[test]
    fn test_validate_path() {
        let request = Request::builder()
            .uri("/prod/inputs/abc?x=1")
            .body(())
            .unwrap();
        validate_path(&request, "/prod/inputs/abc").expect("query is ignored");
        assert_eq!(
            validate_path(&request, "/prod/inputs/"),
            Err(ProtocolTestFailure::InvalidPath {
                expected: "/prod/inputs/".to_owned(),
                found: "/prod/inputs/abc".to_owned(),
            })
        );
    }

    #[test]
    fn test_validate_json_body() {
        let expected = r#"{"abc": 5 }"#;
        let actual = r#"   {"abc":   5 }"#;
        validate_body(actual.as_bytes(), expected, MediaType::Json)
            .expect("inputs matched as JSON");

        let expected = r#"{"IdentityPoolId":"us-east-1:abc","DatasetName":"notes"}"#;
        let actual = r#"{"DatasetName":"notes","IdentityPoolId":"us-east-1:abc"}"#;
        validate_body(actual, expected, MediaType::from("application/x-amz-json-1.1"))
            .expect("member order does not matter");

        let actual = r#"{"DatasetName":"notes"}"#;
        assert!(matches!(
            validate_body(actual, expected, MediaType::Json),
            Err(ProtocolTestFailure::BodyDidNotMatch { .. })
        ));
        assert!(matches!(
            validate_body("not json", expected, MediaType::Json),
            Err(ProtocolTestFailure::ProtocolParseFailure { .. })
        ));
    }

    #[test]
    fn test_validate_empty_and_non_json_body() {
        validate_body(b"", "", MediaType::Json).expect("both empty");
        validate_body(b"{}", "", MediaType::Json).expect_err("body must be empty");
        validate_body(b"hello", "hello", MediaType::Other).expect("equal bytes");
        validate_body(b"hello", "world", MediaType::Other).expect_err("different bytes");
        assert_eq!(MediaType::from("text/plain"), MediaType::Other);
    }
}
