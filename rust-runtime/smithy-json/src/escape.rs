/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::borrow::Cow;
use std::fmt;

#[derive(Debug, PartialEq, Eq)]
enum EscapeErrorKind {
    ExpectedSurrogatePair(String),
    InvalidEscapeCharacter(char),
    InvalidSurrogatePair(u16, u16),
    InvalidUnicodeEscape(String),
    UnexpectedEndOfString,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Error {
    kind: EscapeErrorKind,
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use EscapeErrorKind::*;
        match &self.kind {
            ExpectedSurrogatePair(low) => write!(
                f,
                "expected a UTF-16 surrogate pair, but got {} as the low word",
                low
            ),
            InvalidEscapeCharacter(chr) => write!(f, "invalid JSON escape: \\{}", chr),
            InvalidSurrogatePair(high, low) => {
                write!(f, "invalid surrogate pair: \\u{:04X}\\u{:04X}", high, low)
            }
            InvalidUnicodeEscape(escape) => write!(f, "invalid JSON Unicode escape: \\u{}", escape),
            UnexpectedEndOfString => write!(f, "unexpected end of string"),
        }
    }
}

impl From<EscapeErrorKind> for Error {
    fn from(kind: EscapeErrorKind) -> Self {
        Self { kind }
    }
}

/// Escapes a string for embedding in a JSON string value.
pub fn escape_string(value: &str) -> Cow<'_, str> {
    match value.find(|c: char| c < '\u{20}' || c == '"' || c == '\\') {
        None => Cow::Borrowed(value),
        Some(index) => {
            let mut escaped = String::with_capacity(value.len() + 8);
            escaped.push_str(&value[..index]);
            for chr in value[index..].chars() {
                match chr {
                    '"' => escaped.push_str("\\\""),
                    '\\' => escaped.push_str("\\\\"),
                    '\u{08}' => escaped.push_str("\\b"),
                    '\u{0C}' => escaped.push_str("\\f"),
                    '\n' => escaped.push_str("\\n"),
                    '\r' => escaped.push_str("\\r"),
                    '\t' => escaped.push_str("\\t"),
                    control if control < '\u{20}' => {
                        escaped.push_str(&format!("\\u{:04x}", control as u32))
                    }
                    other => escaped.push(other),
                }
            }
            Cow::Owned(escaped)
        }
    }
}

/// Unescapes a JSON-escaped string.
/// If there are no escape sequences, it directly returns the reference.
pub fn unescape_string(value: &str) -> Result<Cow<'_, str>, Error> {
    let index = match value.find('\\') {
        None => return Ok(Cow::Borrowed(value)),
        Some(index) => index,
    };
    let mut unescaped = String::with_capacity(value.len());
    unescaped.push_str(&value[..index]);

    let mut rest = &value[index..];
    while let Some(backslash) = rest.find('\\') {
        unescaped.push_str(&rest[..backslash]);
        rest = &rest[backslash + 1..];
        let escape = rest
            .chars()
            .next()
            .ok_or(EscapeErrorKind::UnexpectedEndOfString)?;
        match escape {
            'u' => {
                let (chr, consumed) = read_unicode_escape(rest)?;
                unescaped.push(chr);
                rest = &rest[consumed..];
                continue;
            }
            '\\' => unescaped.push('\\'),
            '/' => unescaped.push('/'),
            '"' => unescaped.push('"'),
            'b' => unescaped.push('\u{08}'),
            'f' => unescaped.push('\u{0C}'),
            'n' => unescaped.push('\n'),
            'r' => unescaped.push('\r'),
            't' => unescaped.push('\t'),
            other => return Err(EscapeErrorKind::InvalidEscapeCharacter(other).into()),
        }
        rest = &rest[escape.len_utf8()..];
    }
    unescaped.push_str(rest);
    Ok(Cow::Owned(unescaped))
}

fn is_utf16_low_surrogate(codepoint: u16) -> bool {
    codepoint & 0xFC00 == 0xDC00
}

fn is_utf16_high_surrogate(codepoint: u16) -> bool {
    codepoint & 0xFC00 == 0xD800
}

/// Reads the four hex digits following a `u`. `rest` starts at the `u`.
fn read_hex_word(rest: &str) -> Result<u16, Error> {
    let digits = rest
        .get(1..5)
        .ok_or(EscapeErrorKind::UnexpectedEndOfString)?;
    // `from_str_radix` would otherwise accept a leading `+`
    if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return Err(EscapeErrorKind::InvalidUnicodeEscape(digits.into()).into());
    }
    u16::from_str_radix(digits, 16)
        .map_err(|_| EscapeErrorKind::InvalidUnicodeEscape(digits.into()).into())
}

/// Decodes `uXXXX` (and the low half of a surrogate pair when needed), returning the character
/// and the number of bytes consumed from `rest`.
fn read_unicode_escape(rest: &str) -> Result<(char, usize), Error> {
    let high = read_hex_word(rest)?;
    if !is_utf16_high_surrogate(high) {
        let chr = std::char::from_u32(high as u32).ok_or_else(|| {
            EscapeErrorKind::InvalidUnicodeEscape(format!("{:04X}", high))
        })?;
        return Ok((chr, 5));
    }

    let low_escape = &rest[5..];
    if low_escape.len() < 6 {
        return Err(EscapeErrorKind::UnexpectedEndOfString.into());
    }
    if !low_escape.starts_with("\\u") {
        let preview: String = low_escape.chars().take(6).collect();
        return Err(EscapeErrorKind::ExpectedSurrogatePair(preview).into());
    }
    let low = read_hex_word(&low_escape[1..])?;
    if !is_utf16_low_surrogate(low) {
        return Err(EscapeErrorKind::InvalidSurrogatePair(high, low).into());
    }
    let codepoint = 0x10000 + (high as u32 - 0xD800) * 0x400 + (low as u32 - 0xDC00);
    let chr = std::char::from_u32(codepoint)
        .ok_or(EscapeErrorKind::InvalidSurrogatePair(high, low))?;
    Ok((chr, 11))
}

#[cfg(test)]
mod test {
    use super::{escape_string, unescape_string, EscapeErrorKind};
    use proptest::proptest;
    use std::borrow::Cow;

    #[test]
    fn escape() {
        assert_eq!("", escape_string("").as_ref());
        assert_eq!("foo", escape_string("foo").as_ref());
        assert_eq!("foo\\r\\n", escape_string("foo\r\n").as_ref());
        assert_eq!(r#"foo\\bar"#, escape_string(r#"foo\bar"#).as_ref());
        assert_eq!(
            r#"\bf\fo\to\r\n"#,
            escape_string("\u{08}f\u{0C}o\to\r\n").as_ref()
        );
        assert_eq!("\\\"test\\\"", escape_string("\"test\"").as_ref());
        assert_eq!("\\u0000", escape_string("\u{0}").as_ref());
        assert_eq!("\\u001f", escape_string("\u{1f}").as_ref());
        assert!(matches!(escape_string("us-east-1:abc"), Cow::Borrowed(_)));
    }

    #[test]
    fn unescape() {
        assert_eq!(
            "\x08f\x0Co\to\r\n",
            unescape_string(r"\bf\fo\to\r\n").unwrap()
        );
        assert_eq!("\"test\"", unescape_string(r#"\"test\""#).unwrap());
        assert_eq!("a/b", unescape_string(r"a\/b").unwrap());
        assert_eq!("\x00", unescape_string("\\u0000").unwrap());
        assert_eq!("\u{10437}", unescape_string("\\uD801\\uDC37").unwrap());
        assert_eq!("é-x", unescape_string("\\u00e9-x").unwrap());
        assert!(matches!(
            unescape_string("no escapes").unwrap(),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn unescape_failures() {
        assert_eq!(
            Err(EscapeErrorKind::UnexpectedEndOfString.into()),
            unescape_string("\\")
        );
        assert_eq!(
            Err(EscapeErrorKind::UnexpectedEndOfString.into()),
            unescape_string("\\u00")
        );
        assert_eq!(
            Err(EscapeErrorKind::InvalidEscapeCharacter('z').into()),
            unescape_string("\\z")
        );
        assert_eq!(
            Err(EscapeErrorKind::ExpectedSurrogatePair("\\nasdf".into()).into()),
            unescape_string("\\uD801\\nasdf")
        );
        assert_eq!(
            Err(EscapeErrorKind::InvalidSurrogatePair(0xD801, 0xC501).into()),
            unescape_string("\\uD801\\uC501")
        );
        assert_eq!(
            Err(EscapeErrorKind::InvalidUnicodeEscape("+04D".into()).into()),
            unescape_string("\\u+04D")
        );
    }

    proptest! {
        #[test]
        fn matches_serde_json(s in ".*") {
            assert_eq!(
                serde_json::to_string(&s).unwrap(),
                format!(r#""{}""#, escape_string(&s))
            )
        }

        #[test]
        fn round_trip(s in ".*") {
            let escaped = escape_string(&s);
            assert_eq!(unescape_string(&escaped).unwrap(), s);
        }
    }
}
