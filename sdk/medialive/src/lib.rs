/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS Elemental MediaLive
//!
//! API for AWS Elemental MediaLive
//!
//! Every operation has an input in [`input`], built with `Input::builder()`, that turns into an
//! HTTP request through [`make_operation`](input::DescribeInputInput::make_operation) (or the
//! [`BuildHttpRequest`](smithy_http::operation::BuildHttpRequest) impl when no endpoint is needed),
//! and a handler in [`operation`] that parses the HTTP response into the matching output in
//! [`output`] or an [`Error`].
//!
//! Sending the request is up to the caller: this crate only maps between Rust values and the
//! service's wire format.

#![allow(clippy::module_inception)]
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::large_enum_variant)]
#![allow(clippy::wrong_self_convention)]
#![allow(clippy::should_implement_trait)]

pub use config::Config;
pub use error::{Error, ErrorKind};

pub mod config;
pub mod error;
pub mod input;
pub mod json_deser;
pub mod json_ser;
pub mod model;
pub mod operation;
mod operation_deser;
mod operation_ser;
pub mod output;

pub static PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
pub use aws_types::region::Region;
pub use smithy_http::endpoint::Endpoint;
