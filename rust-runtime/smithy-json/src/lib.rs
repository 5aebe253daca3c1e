/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! JSON serializer and deserializer used by the JSON-protocol service clients.

pub mod deserialize;
pub mod escape;
pub mod serialize;
