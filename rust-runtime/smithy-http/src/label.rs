/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Formatting values as URI path labels

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left unescaped in a path label: RFC 3986 unreserved characters.
pub(crate) const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encodes `t` for use as a single path segment. `/` is always escaped.
pub fn fmt_string<T: AsRef<str>>(t: T) -> String {
    utf8_percent_encode(t.as_ref(), UNRESERVED).to_string()
}

#[cfg(test)]
mod test {
    use crate::label::fmt_string;
    use proptest::proptest;

    #[test]
    fn greedy_characters_are_escaped() {
        assert_eq!(fmt_string("abc"), "abc");
        assert_eq!(fmt_string("a/b"), "a%2Fb");
        assert_eq!(
            fmt_string("arn:aws:chime:us-east-1:123:app-instance/x"),
            "arn%3Aaws%3Achime%3Aus-east-1%3A123%3Aapp-instance%2Fx"
        );
        assert_eq!(fmt_string("us-east-1:abc"), "us-east-1%3Aabc");
        assert_eq!(fmt_string("a b~c"), "a%20b~c");
        assert_eq!(fmt_string("é"), "%C3%A9");
    }

    proptest! {
        #[test]
        fn label_is_a_valid_path_segment(s in ".*") {
            let formatted = fmt_string(&s);
            let uri = format!("/prod/inputs/{}", formatted);
            assert!(uri.parse::<http::Uri>().is_ok(), "{}", uri);
            assert!(!formatted.contains('/'));
        }
    }
}
