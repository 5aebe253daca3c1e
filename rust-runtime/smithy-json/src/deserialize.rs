/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

mod error;
pub mod token;

use crate::deserialize::token::{EscapedStr, Offset};
use smithy_types::Number;
use std::str::FromStr;

pub use crate::deserialize::token::Token;
pub use error::{Error, ErrorReason};

/// Returns an iterator over the JSON tokens in `input`.
///
/// The iterator validates structure as it goes (matching braces, commas, colons), but it does not
/// unescape strings: callers decide which strings need unescaping via [`EscapedStr`].
///
/// ```rust
/// use smithy_json::deserialize::{json_token_iter, Token};
///
/// let mut tokens = json_token_iter(br#"{"a": 1}"#);
/// assert!(matches!(tokens.next(), Some(Ok(Token::StartObject { .. }))));
/// ```
pub fn json_token_iter(input: &[u8]) -> JsonTokenIterator<'_> {
    JsonTokenIterator {
        input,
        index: 0,
        state_stack: vec![State::Initial],
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum State {
    Initial,
    ArrayFirstValueOrEnd,
    ArrayNextValueOrEnd,
    ObjectFirstKeyOrEnd,
    ObjectNextKeyOrEnd,
    ObjectFieldValue,
}

pub struct JsonTokenIterator<'a> {
    input: &'a [u8],
    index: usize,
    state_stack: Vec<State>,
}

impl<'a> JsonTokenIterator<'a> {
    fn peek_byte(&self) -> Option<u8> {
        self.input.get(self.index).copied()
    }

    fn peek_expect(&self) -> Result<u8, Error> {
        self.peek_byte()
            .ok_or_else(|| self.error(ErrorReason::UnexpectedEos))
    }

    fn advance(&mut self) {
        if self.index < self.input.len() {
            self.index += 1;
        }
    }

    fn error_at(&self, offset: usize, reason: ErrorReason) -> Error {
        Error::new(reason, Some(offset))
    }

    fn error(&self, reason: ErrorReason) -> Error {
        self.error_at(self.index, reason)
    }

    fn offset(&self) -> Offset {
        Offset(self.index)
    }

    fn discard_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = self.peek_byte() {
            self.advance();
        }
    }

    fn state(&self) -> State {
        self.state_stack.last().copied().unwrap_or(State::Initial)
    }

    fn replace_state(&mut self, state: State) {
        self.state_stack.pop();
        self.state_stack.push(state);
    }

    fn start_object(&mut self) -> Token<'a> {
        let offset = self.offset();
        self.advance();
        self.state_stack.push(State::ObjectFirstKeyOrEnd);
        Token::StartObject { offset }
    }

    fn end_object(&mut self) -> Token<'a> {
        let offset = self.offset();
        self.advance();
        self.state_stack.pop();
        Token::EndObject { offset }
    }

    fn start_array(&mut self) -> Token<'a> {
        let offset = self.offset();
        self.advance();
        self.state_stack.push(State::ArrayFirstValueOrEnd);
        Token::StartArray { offset }
    }

    fn end_array(&mut self) -> Token<'a> {
        let offset = self.offset();
        self.advance();
        self.state_stack.pop();
        Token::EndArray { offset }
    }

    fn read_value(&mut self) -> Result<Token<'a>, Error> {
        self.discard_whitespace();
        let offset = self.offset();
        match self.peek_expect()? {
            b'{' => Ok(self.start_object()),
            b'[' => Ok(self.start_array()),
            b'"' => self
                .read_string()
                .map(|value| Token::ValueString { offset, value }),
            byte => {
                let value = match byte {
                    b'n' => self
                        .expect_literal(b"null")
                        .map(|_| Token::ValueNull { offset }),
                    b't' => self
                        .expect_literal(b"true")
                        .map(|_| Token::ValueBool {
                            offset,
                            value: true,
                        }),
                    b'f' => self
                        .expect_literal(b"false")
                        .map(|_| Token::ValueBool {
                            offset,
                            value: false,
                        }),
                    b'-' | b'0'..=b'9' => self.read_number(),
                    byte => Err(self.error(ErrorReason::UnexpectedToken(
                        byte.into(),
                        "'{', '[', '\"', 'null', 'true', 'false', <number>",
                    ))),
                }?;
                // a scalar must be followed by a delimiter, so `truefalse` or `5x` are rejected here
                match self.peek_byte() {
                    None | Some(b' ' | b'\t' | b'\r' | b'\n' | b'}' | b']' | b',') => Ok(value),
                    Some(byte) => Err(self.error(ErrorReason::UnexpectedToken(
                        byte.into(),
                        "<whitespace>, '}', ']', ','",
                    ))),
                }
            }
        }
    }

    /// Reads a string without unescaping it. Escape sequences are only skipped over here, and are
    /// validated when the string is unescaped.
    fn read_string(&mut self) -> Result<EscapedStr<'a>, Error> {
        self.advance();
        let start = self.index;
        loop {
            match self.peek_expect()? {
                b'"' => {
                    let value = std::str::from_utf8(&self.input[start..self.index])
                        .map_err(|_| self.error_at(start, ErrorReason::InvalidUtf8))?;
                    self.advance();
                    return Ok(EscapedStr::new(value));
                }
                b'\\' => {
                    self.advance();
                    self.peek_expect()?;
                    self.advance();
                }
                byte @ 0x00..=0x1F => {
                    return Err(self.error(ErrorReason::UnexpectedControlCharacter(byte)))
                }
                _ => self.advance(),
            }
        }
    }

    fn expect_literal(&mut self, expected: &[u8]) -> Result<(), Error> {
        let (start, end) = (self.index, self.index + expected.len());
        if end > self.input.len() {
            return Err(self.error_at(self.input.len(), ErrorReason::UnexpectedEos));
        }
        if expected != &self.input[start..end] {
            return Err(self.error_at(
                start,
                ErrorReason::ExpectedLiteral(String::from_utf8_lossy(expected).into()),
            ));
        }
        self.index = end;
        Ok(())
    }

    fn read_number(&mut self) -> Result<Token<'a>, Error> {
        let offset = self.offset();
        let start = self.index;
        let (mut negative, mut floating) = (false, false);
        loop {
            match self.peek_byte() {
                Some(b'-') => {
                    negative = true;
                    self.advance();
                }
                Some(b'.' | b'e' | b'E') => {
                    floating = true;
                    self.advance();
                }
                Some(b'+' | b'0'..=b'9') => self.advance(),
                _ => break,
            }
        }
        let invalid = || Error::new(ErrorReason::InvalidNumber, Some(start));
        // only ASCII bytes were consumed above
        let number_str =
            std::str::from_utf8(&self.input[start..self.index]).map_err(|_| invalid())?;
        let value = if floating {
            let value = f64::from_str(number_str).map_err(|_| invalid())?;
            if !value.is_finite() {
                return Err(invalid());
            }
            Number::Float(value)
        } else if negative {
            Number::NegInt(i64::from_str(number_str).map_err(|_| invalid())?)
        } else {
            Number::PosInt(u64::from_str(number_str).map_err(|_| invalid())?)
        };
        Ok(Token::ValueNumber {
            offset,
            lexeme: number_str,
            value,
        })
    }

    fn read_object_key(&mut self) -> Result<Token<'a>, Error> {
        let offset = self.offset();
        match self.peek_expect()? {
            b'"' => {
                self.replace_state(State::ObjectFieldValue);
                self.read_string()
                    .map(|key| Token::ObjectKey { offset, key })
            }
            byte => Err(self.error(ErrorReason::UnexpectedToken(byte.into(), "'\"'"))),
        }
    }

    fn state_array_first_value_or_end(&mut self) -> Result<Token<'a>, Error> {
        match self.peek_expect()? {
            b']' => Ok(self.end_array()),
            _ => {
                self.replace_state(State::ArrayNextValueOrEnd);
                self.read_value()
            }
        }
    }

    fn state_array_next_value_or_end(&mut self) -> Result<Token<'a>, Error> {
        match self.peek_expect()? {
            b']' => Ok(self.end_array()),
            b',' => {
                self.advance();
                self.read_value()
            }
            byte => Err(self.error(ErrorReason::UnexpectedToken(byte.into(), "']', ','"))),
        }
    }

    fn state_object_first_key_or_end(&mut self) -> Result<Token<'a>, Error> {
        match self.peek_expect()? {
            b'}' => Ok(self.end_object()),
            _ => self.read_object_key(),
        }
    }

    fn state_object_next_key_or_end(&mut self) -> Result<Token<'a>, Error> {
        match self.peek_expect()? {
            b'}' => Ok(self.end_object()),
            b',' => {
                self.advance();
                self.discard_whitespace();
                self.read_object_key()
            }
            byte => Err(self.error(ErrorReason::UnexpectedToken(byte.into(), "'}', ','"))),
        }
    }

    fn state_object_field_value(&mut self) -> Result<Token<'a>, Error> {
        match self.peek_expect()? {
            b':' => {
                self.advance();
                self.replace_state(State::ObjectNextKeyOrEnd);
                self.read_value()
            }
            byte => Err(self.error(ErrorReason::UnexpectedToken(byte.into(), "':'"))),
        }
    }
}

impl<'a> Iterator for JsonTokenIterator<'a> {
    type Item = Result<Token<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.discard_whitespace();
        let result = match self.state() {
            State::Initial => match self.peek_byte() {
                None => return None,
                Some(_) => self.read_value(),
            },
            State::ArrayFirstValueOrEnd => self.state_array_first_value_or_end(),
            State::ArrayNextValueOrEnd => self.state_array_next_value_or_end(),
            State::ObjectFirstKeyOrEnd => self.state_object_first_key_or_end(),
            State::ObjectNextKeyOrEnd => self.state_object_next_key_or_end(),
            State::ObjectFieldValue => self.state_object_field_value(),
        };
        if result.is_err() {
            // stop iterating after the first error
            self.index = self.input.len();
            self.state_stack.clear();
            self.state_stack.push(State::Initial);
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::{json_token_iter, Error, ErrorReason};
    use crate::deserialize::token::test::{
        end_array, end_object, object_key, start_array, start_object, value_bool, value_null,
        value_number, value_string,
    };
    use proptest::proptest;
    use smithy_types::Number;

    #[test]
    fn test_empty() {
        assert_eq!(None, json_token_iter(b"").next());
        assert_eq!(None, json_token_iter(b" ").next());
        assert_eq!(None, json_token_iter(b"\t").next());
    }

    #[test]
    fn test_empty_string() {
        let mut iter = json_token_iter(b"\"\"");
        assert_eq!(value_string(0, ""), iter.next());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn test_scalars() {
        let mut iter = json_token_iter(b" null true false -5 12 1.5e3 \"x\\\"y\"");
        assert_eq!(value_null(1), iter.next());
        assert_eq!(value_bool(6, true), iter.next());
        assert_eq!(value_bool(11, false), iter.next());
        assert_eq!(value_number(17, "-5", Number::NegInt(-5)), iter.next());
        assert_eq!(value_number(20, "12", Number::PosInt(12)), iter.next());
        assert_eq!(value_number(23, "1.5e3", Number::Float(1500.0)), iter.next());
        assert_eq!(value_string(29, "x\\\"y"), iter.next());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn test_object() {
        let mut iter = json_token_iter(br#"{"IdentityPoolId": "us-east-1:abc", "Count": 2, "Sub": {}}"#);
        assert_eq!(start_object(0), iter.next());
        assert_eq!(object_key(1, "IdentityPoolId"), iter.next());
        assert_eq!(value_string(19, "us-east-1:abc"), iter.next());
        assert_eq!(object_key(36, "Count"), iter.next());
        assert_eq!(value_number(45, "2", Number::PosInt(2)), iter.next());
        assert_eq!(object_key(48, "Sub"), iter.next());
        assert_eq!(start_object(55), iter.next());
        assert_eq!(end_object(56), iter.next());
        assert_eq!(end_object(57), iter.next());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn test_array() {
        let mut iter = json_token_iter(b"[1, [], [null]]");
        assert_eq!(start_array(0), iter.next());
        assert_eq!(value_number(1, "1", Number::PosInt(1)), iter.next());
        assert_eq!(start_array(4), iter.next());
        assert_eq!(end_array(5), iter.next());
        assert_eq!(start_array(8), iter.next());
        assert_eq!(value_null(9), iter.next());
        assert_eq!(end_array(13), iter.next());
        assert_eq!(end_array(14), iter.next());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn test_trailing_commas_rejected() {
        let mut iter = json_token_iter(b"[1,]");
        iter.next();
        iter.next();
        assert_eq!(
            Some(Err(Error::new(
                ErrorReason::UnexpectedToken(
                    ']',
                    "'{', '[', '\"', 'null', 'true', 'false', <number>"
                ),
                Some(3)
            ))),
            iter.next()
        );
        assert_eq!(None, iter.next());

        let mut iter = json_token_iter(br#"{"a":1,}"#);
        iter.next();
        iter.next();
        iter.next();
        assert_eq!(
            Some(Err(Error::new(
                ErrorReason::UnexpectedToken('}', "'\"'"),
                Some(7)
            ))),
            iter.next()
        );
    }

    #[test]
    fn test_unterminated() {
        let mut iter = json_token_iter(br#"{"a":"#);
        iter.next();
        iter.next();
        assert_eq!(
            Some(Err(Error::new(ErrorReason::UnexpectedEos, Some(5)))),
            iter.next()
        );
        let mut iter = json_token_iter(b"\"abc");
        assert_eq!(
            Some(Err(Error::new(ErrorReason::UnexpectedEos, Some(4)))),
            iter.next()
        );
    }

    #[test]
    fn test_bad_literals() {
        assert_eq!(
            Some(Err(Error::new(
                ErrorReason::ExpectedLiteral("true".into()),
                Some(0)
            ))),
            json_token_iter(b"trUe").next()
        );
        assert_eq!(
            Some(Err(Error::new(ErrorReason::UnexpectedEos, Some(3)))),
            json_token_iter(b"nul").next()
        );
        assert_eq!(
            Some(Err(Error::new(
                ErrorReason::UnexpectedToken('f', "<whitespace>, '}', ']', ','"),
                Some(4)
            ))),
            json_token_iter(b"truefalse").next()
        );
    }

    #[test]
    fn test_invalid_numbers() {
        for input in &["-", "1-2", "1.2.3", "1e", "99999999999999999999"] {
            assert_eq!(
                Some(Err(Error::new(ErrorReason::InvalidNumber, Some(0)))),
                json_token_iter(input.as_bytes()).next(),
                "{}",
                input
            );
        }
    }

    #[test]
    fn test_control_character_in_string() {
        assert_eq!(
            Some(Err(Error::new(
                ErrorReason::UnexpectedControlCharacter(b'\n'),
                Some(2)
            ))),
            json_token_iter(b"\"a\nb\"").next()
        );
    }

    #[test]
    fn test_mismatched_brackets() {
        let mut iter = json_token_iter(b"[}");
        iter.next();
        assert_eq!(
            Some(Err(Error::new(
                ErrorReason::UnexpectedToken(
                    '}',
                    "'{', '[', '\"', 'null', 'true', 'false', <number>"
                ),
                Some(1)
            ))),
            iter.next()
        );
    }

    proptest! {
        #[test]
        fn string_tokens_unescape_like_serde(s in ".*") {
            let json = serde_json::to_string(&s).unwrap();
            let mut iter = json_token_iter(json.as_bytes());
            match iter.next() {
                Some(Ok(crate::deserialize::token::Token::ValueString { value, .. })) => {
                    assert_eq!(value.to_unescaped().unwrap(), s)
                }
                other => panic!("unexpected token: {:?}", other),
            }
        }

        #[test]
        fn integers_match_serde(value: i64) {
            let json = serde_json::to_string(&value).unwrap();
            let mut iter = json_token_iter(json.as_bytes());
            let expected = if value < 0 { Number::NegInt(value) } else { Number::PosInt(value as u64) };
            assert_eq!(value_number(0, &json, expected), iter.next());
        }
    }
}
