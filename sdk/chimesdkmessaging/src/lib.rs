/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Amazon Chime SDK Messaging
//!
//! The Amazon Chime SDK Messaging APIs in this section allow software developers to send
//! and receive messages in custom messaging applications.
//!
//! All operations identify the calling `AppInstanceUser` through the `x-amz-chime-bearer`
//! header, set with `chime_bearer` on every input builder.

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
