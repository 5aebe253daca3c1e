/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Amazon Cognito Sync
//!
//! Amazon Cognito Sync provides an AWS service and client library that enable cross-device
//! syncing of application-related user data.
//!
//! Requests are built from the inputs in [`input`] with
//! [`make_operation`](input::DescribeDatasetInput::make_operation); responses are parsed by the
//! handlers in [`operation`].

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
