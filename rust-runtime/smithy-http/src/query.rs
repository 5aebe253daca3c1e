/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Formatting values into the query string

use crate::label::UNRESERVED;
use percent_encoding::utf8_percent_encode;

pub fn fmt_default<T: ToString>(t: T) -> String {
    fmt_string(t.to_string())
}

pub fn fmt_string<T: AsRef<str>>(t: T) -> String {
    utf8_percent_encode(t.as_ref(), UNRESERVED).to_string()
}

/// Appends `key=value` pairs to a URI path, starting the query with `?`.
///
/// Keys and values are written as-is: callers encode values with [`fmt_string`] or
/// [`fmt_default`].
pub struct Writer<'a> {
    out: &'a mut String,
    prefix: char,
}

impl<'a> Writer<'a> {
    pub fn new(out: &'a mut String) -> Self {
        let prefix = if out.contains('?') { '&' } else { '?' };
        Writer { out, prefix }
    }

    pub fn push_kv(&mut self, k: &str, v: &str) {
        self.out.push(self.prefix);
        self.out.push_str(k);
        self.out.push('=');
        self.out.push_str(v);
        self.prefix = '&';
    }
}

#[cfg(test)]
mod test {
    use crate::query::{fmt_default, fmt_string, Writer};

    #[test]
    fn url_encode() {
        assert_eq!(fmt_string("y̆").as_str(), "y%CC%86");
        assert_eq!(fmt_string(" ").as_str(), "%20");
        assert_eq!(fmt_string("foo/baz%20").as_str(), "foo%2Fbaz%2520");
        assert_eq!(fmt_string("&=").as_str(), "%26%3D");
        assert_eq!(fmt_default(25).as_str(), "25");
        assert_eq!(fmt_default(-3i64).as_str(), "-3");
    }

    #[test]
    fn writer_starts_and_continues_query() {
        let mut uri = String::from("/channels");
        let mut writer = Writer::new(&mut uri);
        writer.push_kv(
            "app-instance-arn",
            &fmt_string("arn:aws:chime:us-east-1:1:app-instance/a"),
        );
        writer.push_kv("max-results", &fmt_default(10));
        assert_eq!(
            uri,
            "/channels?app-instance-arn=arn%3Aaws%3Achime%3Aus-east-1%3A1%3Aapp-instance%2Fa&max-results=10"
        );

        let mut uri = String::from("/channels?type=x");
        Writer::new(&mut uri).push_kv("next-token", &fmt_string("a b"));
        assert_eq!(uri, "/channels?type=x&next-token=a%20b");
    }
}
