/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{DateTime, SecondsFormat, Utc};
use std::error::Error as StdError;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

const NANOS_PER_SECOND: u32 = 1_000_000_000;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// RFC 3339, e.g. `2019-12-16T23:48:18Z`
    DateTime,
    /// Seconds since the Unix epoch, fractional seconds allowed
    EpochSeconds,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstantError {
    /// The instant cannot be represented as a calendar date.
    OutOfRange(i64),
    /// The string does not match the expected format.
    Invalid(String),
}

impl fmt::Display for InstantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstantError::OutOfRange(seconds) => {
                write!(f, "{} epoch seconds is out of range for a date", seconds)
            }
            InstantError::Invalid(input) => write!(f, "invalid timestamp: `{}`", input),
        }
    }
}

impl StdError for InstantError {}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: (fraction * NANOS_PER_SECOND as f64) as u32,
        }
    }

    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds,
            subsecond_nanos,
        }
    }

    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor() as i64;
        let rem = epoch_seconds - epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds, rem)
    }

    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(duration) => Instant {
                seconds: duration.as_secs() as i64,
                subsecond_nanos: duration.subsec_nanos(),
            },
            Err(before_epoch) => {
                let duration = before_epoch.duration();
                let mut seconds = -(duration.as_secs() as i64);
                let mut nanos = duration.subsec_nanos();
                if nanos != 0 {
                    seconds -= 1;
                    nanos = NANOS_PER_SECOND - nanos;
                }
                Instant::from_secs_and_nanos(seconds, nanos)
            }
        }
    }

    pub fn from_str(s: &str, format: Format) -> Result<Self, InstantError> {
        match format {
            Format::DateTime => {
                let parsed = DateTime::parse_from_rfc3339(s)
                    .map_err(|_| InstantError::Invalid(s.to_string()))?;
                Ok(Instant::from_secs_and_nanos(
                    parsed.timestamp(),
                    parsed.timestamp_subsec_nanos(),
                ))
            }
            Format::EpochSeconds => parse_epoch_seconds(s),
        }
    }

    fn to_chrono(self) -> Result<DateTime<Utc>, InstantError> {
        DateTime::<Utc>::from_timestamp(self.seconds, self.subsecond_nanos)
            .ok_or(InstantError::OutOfRange(self.seconds))
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND as f64
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn epoch_subsecond_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    pub fn fmt(&self, format: Format) -> Result<String, InstantError> {
        match format {
            Format::DateTime => {
                let date_time = self.to_chrono()?;
                if self.subsecond_nanos == 0 {
                    return Ok(date_time.to_rfc3339_opts(SecondsFormat::Secs, true));
                }
                let rfc3339 = date_time.to_rfc3339_opts(SecondsFormat::Nanos, true);
                // only the fractional part is trimmed: `18.520000000Z` -> `18.52Z`
                let mut rfc3339 = rfc3339
                    .trim_end_matches('Z')
                    .trim_end_matches('0')
                    .to_owned();
                rfc3339.push('Z');
                Ok(rfc3339)
            }
            Format::EpochSeconds => {
                // the wire value must still denote a calendar date
                self.to_chrono()?;
                if self.subsecond_nanos == 0 {
                    return Ok(format!("{}", self.seconds));
                }
                // `seconds` is floored, so `-1.5` is stored as (-2, 500_000_000)
                let (sign, whole, nanos) = if self.seconds < 0 {
                    ("-", -(self.seconds + 1), NANOS_PER_SECOND - self.subsecond_nanos)
                } else {
                    ("", self.seconds, self.subsecond_nanos)
                };
                let fraction = format!("{:0>9}", nanos);
                Ok(format!(
                    "{}{}.{}",
                    sign,
                    whole,
                    fraction.trim_end_matches('0')
                ))
            }
        }
    }
}

/// Parses `[-]digits[.digits]` without going through `f64`, so every nanosecond survives.
/// Fraction digits past nanosecond precision are truncated. Exponent notation is accepted
/// through `f64`.
fn parse_epoch_seconds(s: &str) -> Result<Instant, InstantError> {
    let invalid = || InstantError::Invalid(s.to_string());
    if s.contains(|c: char| c == 'e' || c == 'E') {
        let seconds: f64 = s.parse().map_err(|_| invalid())?;
        if !seconds.is_finite() {
            return Err(invalid());
        }
        return Ok(Instant::from_f64(seconds));
    }
    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let (whole, fraction) = match unsigned.find('.') {
        Some(dot) => (&unsigned[..dot], &unsigned[dot + 1..]),
        None => (unsigned, ""),
    };
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) {
        return Err(invalid());
    }
    if unsigned.ends_with('.') {
        return Err(invalid());
    }
    let whole: i64 = whole.parse().map_err(|_| invalid())?;
    let fraction = &fraction[..fraction.len().min(9)];
    let mut nanos = 0u32;
    for (place, digit) in fraction.bytes().enumerate() {
        nanos += u32::from(digit - b'0') * 10u32.pow(8 - place as u32);
    }
    if !negative {
        return Ok(Instant::from_secs_and_nanos(whole, nanos));
    }
    if nanos == 0 {
        return Ok(Instant::from_epoch_seconds(-whole));
    }
    let seconds = (-whole).checked_sub(1).ok_or_else(invalid)?;
    Ok(Instant::from_secs_and_nanos(seconds, NANOS_PER_SECOND - nanos))
}

#[cfg(test)]
mod test {
    use super::{Format, Instant, InstantError};
    use proptest::proptest;

    #[test]
    fn whole_seconds_keep_trailing_zero() {
        let instant = Instant::from_epoch_seconds(1576540090);
        assert_eq!(
            instant.fmt(Format::DateTime).unwrap(),
            "2019-12-16T23:48:10Z"
        );
    }

    #[test]
    fn out_of_range_instant_is_rejected_in_every_format() {
        let instant = Instant::from_epoch_seconds(i64::MAX);
        assert_eq!(
            instant.fmt(Format::EpochSeconds),
            Err(InstantError::OutOfRange(i64::MAX))
        );
        assert!(instant.fmt(Format::DateTime).is_err());
    }

    #[test]
    fn parse_date_time() {
        assert_eq!(
            Instant::from_str("2019-12-16T23:48:18.52Z", Format::DateTime).unwrap(),
            Instant::from_secs_and_nanos(1576540098, 520_000_000)
        );
        assert!(Instant::from_str("yesterday", Format::DateTime).is_err());
    }

    #[test]
    fn parse_epoch_seconds() {
        assert_eq!(
            Instant::from_str("1576540098", Format::EpochSeconds).unwrap(),
            Instant::from_epoch_seconds(1576540098)
        );
        assert!(Instant::from_str("NaN", Format::EpochSeconds).is_err());
        assert!(Instant::from_str("1.", Format::EpochSeconds).is_err());
        assert!(Instant::from_str("--1", Format::EpochSeconds).is_err());
        assert!(Instant::from_str("", Format::EpochSeconds).is_err());
    }

    #[test]
    fn epoch_seconds_keep_every_nanosecond() {
        let instant = Instant::from_secs_and_nanos(1576540098, 1_000_000);
        assert_eq!(instant.fmt(Format::EpochSeconds).unwrap(), "1576540098.001");
        assert_eq!(
            Instant::from_str("1576540098.001", Format::EpochSeconds).unwrap(),
            instant
        );
        assert_eq!(
            Instant::from_str("1576540098.000000001", Format::EpochSeconds).unwrap(),
            Instant::from_secs_and_nanos(1576540098, 1)
        );
        assert_eq!(
            Instant::from_str("1.0000000019", Format::EpochSeconds).unwrap(),
            Instant::from_secs_and_nanos(1, 1)
        );
        assert_eq!(
            Instant::from_str("1.5e3", Format::EpochSeconds).unwrap(),
            Instant::from_epoch_seconds(1500)
        );
    }

    #[test]
    fn pre_epoch_fraction_is_signed_as_a_whole() {
        let time = std::time::UNIX_EPOCH - std::time::Duration::from_millis(1500);
        let instant = Instant::from_system_time(time);
        assert_eq!(instant.fmt(Format::EpochSeconds).unwrap(), "-1.5");
        assert_eq!(
            Instant::from_str("-1.5", Format::EpochSeconds).unwrap(),
            instant
        );

        let instant = Instant::from_secs_and_nanos(-1, 750_000_000);
        assert_eq!(instant.fmt(Format::EpochSeconds).unwrap(), "-0.25");
        assert_eq!(
            Instant::from_str("-0.25", Format::EpochSeconds).unwrap(),
            instant
        );
        assert_eq!(
            Instant::from_str("-3", Format::EpochSeconds).unwrap(),
            Instant::from_epoch_seconds(-3)
        );
    }

    #[test]
    fn pre_epoch_system_time() {
        let time = std::time::UNIX_EPOCH - std::time::Duration::from_millis(1500);
        let instant = Instant::from_system_time(time);
        assert_eq!(instant.epoch_seconds(), -2);
        assert_eq!(instant.epoch_subsecond_nanos(), 500_000_000);
    }

    proptest! {
        #[test]
        fn date_time_round_trip(seconds in 0i64..253_402_300_799, nanos in 0u32..1_000_000_000) {
            let instant = Instant::from_secs_and_nanos(seconds, nanos);
            let formatted = instant.fmt(Format::DateTime).unwrap();
            assert_eq!(Instant::from_str(&formatted, Format::DateTime).unwrap(), instant);
        }

        #[test]
        fn epoch_seconds_round_trip(seconds in -62_135_596_800i64..253_402_300_799, nanos in 0u32..1_000_000_000) {
            let instant = Instant::from_secs_and_nanos(seconds, nanos);
            let formatted = instant.fmt(Format::EpochSeconds).unwrap();
            assert_eq!(Instant::from_str(&formatted, Format::EpochSeconds).unwrap(), instant);
        }
    }
}
