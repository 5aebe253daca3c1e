/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Generic errors for Smithy codegen

use std::fmt;

/// GenericError represents an error from a service that is not modeled
///
/// For many services, errors are only partially modeled. When a response carries an error code that
/// the client does not know about, the `code`, `message` and `request_id` are still exposed here.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct GenericError {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

/// Builder for [`GenericError`].
#[derive(Debug, Default)]
pub struct Builder {
    inner: GenericError,
}

impl Builder {
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.inner.message = Some(message.into());
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.inner.code = Some(code.into());
        self
    }

    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    pub fn build(self) -> GenericError {
        self.inner
    }
}

impl GenericError {
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn into_builder(self) -> Builder {
        Builder { inner: self }
    }
}

impl fmt::Display for GenericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GenericError")?;
        if let Some(code) = &self.code {
            write!(f, " [{}]", code)?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for GenericError {}

#[derive(Debug)]
pub(crate) enum TryFromNumberErrorKind {
    /// The integer does not fit into the target integer type.
    OutsideIntegerRange(std::num::TryFromIntError),
    /// A floating point value cannot become an integer without losing information.
    FloatToIntegerLossyConversion(f64),
}

/// The error type returned when conversion of a [`Number`](crate::Number) into an integer type is lossy.
#[derive(Debug)]
pub struct TryFromNumberError {
    kind: TryFromNumberErrorKind,
}

impl fmt::Display for TryFromNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TryFromNumberErrorKind::*;
        match self.kind {
            OutsideIntegerRange(_) => write!(f, "integer out of range for the target type"),
            FloatToIntegerLossyConversion(v) => write!(
                f,
                "cannot convert floating point number {} into an integer",
                v
            ),
        }
    }
}

impl std::error::Error for TryFromNumberError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            TryFromNumberErrorKind::OutsideIntegerRange(err) => Some(err as _),
            TryFromNumberErrorKind::FloatToIntegerLossyConversion(_) => None,
        }
    }
}

impl From<std::num::TryFromIntError> for TryFromNumberError {
    fn from(value: std::num::TryFromIntError) -> Self {
        Self {
            kind: TryFromNumberErrorKind::OutsideIntegerRange(value),
        }
    }
}

impl From<TryFromNumberErrorKind> for TryFromNumberError {
    fn from(kind: TryFromNumberErrorKind) -> Self {
        Self { kind }
    }
}

/// Returned by the strict `try_parse` constructor of a modeled enum when the literal is not one
/// of its known values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariantError {
    value: String,
    expected: &'static [&'static str],
}

impl UnknownVariantError {
    pub fn new(value: impl Into<String>, expected: &'static [&'static str]) -> Self {
        Self {
            value: value.into(),
            expected,
        }
    }

    /// The literal that was rejected.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn expected(&self) -> &'static [&'static str] {
        self.expected
    }
}

impl fmt::Display for UnknownVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown enum value `{}`, expected one of: {}",
            self.value,
            self.expected.join(", ")
        )
    }
}

impl std::error::Error for UnknownVariantError {}

#[cfg(test)]
mod test {
    use super::{GenericError, UnknownVariantError};

    #[test]
    fn generic_error_display() {
        let err = GenericError::builder()
            .code("ThrottlingException")
            .message("slow down")
            .request_id("1234")
            .build();
        assert_eq!(err.to_string(), "GenericError [ThrottlingException]: slow down");
        assert_eq!(err.request_id(), Some("1234"));
        assert_eq!(GenericError::default().to_string(), "GenericError");
    }

    #[test]
    fn unknown_variant_lists_expected_values() {
        let err = UnknownVariantError::new("TRACE", &["ERROR", "DEBUG"]);
        assert_eq!(
            err.to_string(),
            "unknown enum value `TRACE`, expected one of: ERROR, DEBUG"
        );
        assert_eq!(err.value(), "TRACE");
    }
}
