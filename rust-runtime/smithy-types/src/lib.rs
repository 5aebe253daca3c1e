/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod error;
pub mod instant;

use crate::error::{TryFromNumberError, TryFromNumberErrorKind};
use std::convert::TryFrom;

pub use crate::error::{GenericError, UnknownVariantError};
pub use crate::instant::Instant;

/// A number type that implements Javascript / JSON semantics, modeled on serde_json:
/// https://docs.serde.rs/src/serde_json/number.rs.html#20-22
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    PosInt(u64),
    NegInt(i64),
    Float(f64),
}

impl Number {
    /// Converts to an `f64`. Integers outside of the 53-bit mantissa lose precision.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::PosInt(v) => v as f64,
            Number::NegInt(v) => v as f64,
            Number::Float(v) => v,
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::from(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        if value < 0 {
            Number::NegInt(value)
        } else {
            Number::PosInt(value as u64)
        }
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl TryFrom<Number> for i64 {
    type Error = TryFromNumberError;

    fn try_from(value: Number) -> Result<Self, Self::Error> {
        match value {
            Number::PosInt(v) => Ok(i64::try_from(v)?),
            Number::NegInt(v) => Ok(v),
            Number::Float(v) => Err(TryFromNumberErrorKind::FloatToIntegerLossyConversion(v).into()),
        }
    }
}

impl TryFrom<Number> for i32 {
    type Error = TryFromNumberError;

    fn try_from(value: Number) -> Result<Self, Self::Error> {
        match value {
            Number::PosInt(v) => Ok(i32::try_from(v)?),
            Number::NegInt(v) => Ok(i32::try_from(v)?),
            Number::Float(v) => Err(TryFromNumberErrorKind::FloatToIntegerLossyConversion(v).into()),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::instant::Format;
    use crate::{Instant, Number};
    use std::convert::TryFrom;

    #[test]
    fn test_instant_fmt() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(
            instant.fmt(Format::DateTime).unwrap(),
            "2019-12-16T23:48:18Z"
        );
        assert_eq!(instant.fmt(Format::EpochSeconds).unwrap(), "1576540098");

        let instant = Instant::from_fractional_seconds(1576540098, 0.52);
        assert_eq!(
            instant.fmt(Format::DateTime).unwrap(),
            "2019-12-16T23:48:18.52Z"
        );
        assert_eq!(instant.fmt(Format::EpochSeconds).unwrap(), "1576540098.52");
    }

    #[test]
    fn integer_conversions_are_checked() {
        assert_eq!(i64::try_from(Number::PosInt(5)).unwrap(), 5);
        assert_eq!(i64::try_from(Number::NegInt(-5)).unwrap(), -5);
        assert_eq!(i32::try_from(Number::PosInt(i32::MAX as u64)).unwrap(), i32::MAX);
        assert!(i32::try_from(Number::PosInt(i32::MAX as u64 + 1)).is_err());
        assert!(i32::try_from(Number::NegInt(i64::MIN)).is_err());
        assert!(i64::try_from(Number::PosInt(u64::MAX)).is_err());
        assert!(i64::try_from(Number::Float(1.5)).is_err());
        assert!(i32::try_from(Number::Float(1.0)).is_err());
    }

    #[test]
    fn large_i64_is_not_narrowed() {
        let big = 9_007_199_254_740_993_i64;
        assert_eq!(i64::try_from(Number::from(big)).unwrap(), big);
    }

    #[test]
    fn number_from_signed() {
        assert_eq!(Number::from(-3_i64), Number::NegInt(-3));
        assert_eq!(Number::from(3_i32), Number::PosInt(3));
        assert_eq!(Number::from(0_i64), Number::PosInt(0));
    }
}
