/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::Response;

/// Parses structured data from a fully loaded HTTP response.
///
/// Every operation of the JSON service clients reads its whole response body before parsing, so
/// parsing is synchronous and the trait can be exercised without any transport.
pub trait ParseStrictResponse {
    /// Output type of the parser.
    ///
    /// For request/response style operations, this is typically something like:
    /// `Result<DescribeInputOutput, medialive::Error>`
    type Output;

    fn parse(&self, response: &Response<Bytes>) -> Self::Output;
}
