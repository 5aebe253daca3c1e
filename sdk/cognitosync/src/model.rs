/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum Operation {
    Replace,
    Remove,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for Operation {
    fn from(s: &str) -> Self {
        match s {
            "replace" => Operation::Replace,
            "remove" => Operation::Remove,
            other => Operation::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for Operation {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Operation::from(s))
    }
}
impl Operation {
    pub fn as_str(&self) -> &str {
        match self {
            Operation::Replace => "replace",
            Operation::Remove => "remove",
            Operation::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["replace", "remove"]
    }
    /// Parses a known value, rejecting anything [`values`](Self::values) does not list.
    pub fn try_parse(s: &str) -> std::result::Result<Self, smithy_types::UnknownVariantError> {
        match Operation::from(s) {
            Operation::Unknown(_) => Err(smithy_types::UnknownVariantError::new(
                s,
                Operation::values(),
            )),
            known => Ok(known),
        }
    }
}
impl AsRef<str> for Operation {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum Platform {
    Apns,
    ApnsSandbox,
    Gcm,
    Adm,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for Platform {
    fn from(s: &str) -> Self {
        match s {
            "APNS" => Platform::Apns,
            "APNS_SANDBOX" => Platform::ApnsSandbox,
            "GCM" => Platform::Gcm,
            "ADM" => Platform::Adm,
            other => Platform::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for Platform {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Platform::from(s))
    }
}
impl Platform {
    pub fn as_str(&self) -> &str {
        match self {
            Platform::Apns => "APNS",
            Platform::ApnsSandbox => "APNS_SANDBOX",
            Platform::Gcm => "GCM",
            Platform::Adm => "ADM",
            Platform::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["APNS", "APNS_SANDBOX", "GCM", "ADM"]
    }
    /// Parses a known value, rejecting anything [`values`](Self::values) does not list.
    pub fn try_parse(s: &str) -> std::result::Result<Self, smithy_types::UnknownVariantError> {
        match Platform::from(s) {
            Platform::Unknown(_) => Err(smithy_types::UnknownVariantError::new(
                s,
                Platform::values(),
            )),
            known => Ok(known),
        }
    }
}
impl AsRef<str> for Platform {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum StreamingStatus {
    Enabled,
    Disabled,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for StreamingStatus {
    fn from(s: &str) -> Self {
        match s {
            "ENABLED" => StreamingStatus::Enabled,
            "DISABLED" => StreamingStatus::Disabled,
            other => StreamingStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for StreamingStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(StreamingStatus::from(s))
    }
}
impl StreamingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            StreamingStatus::Enabled => "ENABLED",
            StreamingStatus::Disabled => "DISABLED",
            StreamingStatus::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["ENABLED", "DISABLED"]
    }
    /// Parses a known value, rejecting anything [`values`](Self::values) does not list.
    pub fn try_parse(s: &str) -> std::result::Result<Self, smithy_types::UnknownVariantError> {
        match StreamingStatus::from(s) {
            StreamingStatus::Unknown(_) => Err(smithy_types::UnknownVariantError::new(
                s,
                StreamingStatus::values(),
            )),
            known => Ok(known),
        }
    }
}
impl AsRef<str> for StreamingStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Configuration options for configure Cognito streams.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CognitoStreams {
    /// The name of the Cognito stream to receive updates. This stream must be in the developers
    /// account and in the same region as the identity pool.
    pub stream_name: std::option::Option<String>,
    /// The ARN of the role Amazon Cognito can assume in order to publish to the stream. This role
    /// must grant access to Amazon Cognito (cognito-sync) to invoke PutRecord on your Cognito
    /// stream.
    pub role_arn: std::option::Option<String>,
    /// Status of the Cognito streams. Valid values are: ENABLED - Streaming of updates to identity
    /// pool is enabled. DISABLED - Streaming of updates to identity pool is disabled. Bulk
    /// publish will also fail if StreamingStatus is DISABLED.
    pub streaming_status: std::option::Option<crate::model::StreamingStatus>,
}
/// See [`CognitoStreams`](crate::model::CognitoStreams)
pub mod cognito_streams {
    /// A builder for [`CognitoStreams`](crate::model::CognitoStreams)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) stream_name: std::option::Option<String>,
        pub(crate) role_arn: std::option::Option<String>,
        pub(crate) streaming_status: std::option::Option<crate::model::StreamingStatus>,
    }
    impl Builder {
        pub fn stream_name(mut self, input: impl Into<String>) -> Self {
            self.stream_name = Some(input.into());
            self
        }
        pub fn set_stream_name(mut self, input: std::option::Option<String>) -> Self {
            self.stream_name = input;
            self
        }
        pub fn role_arn(mut self, input: impl Into<String>) -> Self {
            self.role_arn = Some(input.into());
            self
        }
        pub fn set_role_arn(mut self, input: std::option::Option<String>) -> Self {
            self.role_arn = input;
            self
        }
        pub fn streaming_status(mut self, input: impl Into<crate::model::StreamingStatus>) -> Self {
            self.streaming_status = Some(input.into());
            self
        }
        pub fn set_streaming_status(mut self, input: std::option::Option<crate::model::StreamingStatus>) -> Self {
            self.streaming_status = input;
            self
        }
        /// Consumes the builder and constructs a [`CognitoStreams`](crate::model::CognitoStreams)
        pub fn build(self) -> crate::model::CognitoStreams {
            crate::model::CognitoStreams {
                stream_name: self.stream_name,
                role_arn: self.role_arn,
                streaming_status: self.streaming_status,
            }
        }
    }
}
impl CognitoStreams {
    /// Creates a new builder-style object to manufacture [`CognitoStreams`](crate::model::CognitoStreams)
    pub fn builder() -> crate::model::cognito_streams::Builder {
        crate::model::cognito_streams::Builder::default()
    }
}

/// A collection of data for an identity pool. An identity pool can have multiple datasets. A
/// dataset is per identity and can be general or associated with a particular entity in an
/// application (like a saved game). Datasets are automatically created if they don't exist.
/// Data is synced by dataset, and a dataset can hold up to 1MB of key-value pairs.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct Dataset {
    pub identity_id: std::option::Option<String>,
    pub dataset_name: std::option::Option<String>,
    /// Date on which the dataset was created.
    pub creation_date: std::option::Option<smithy_types::Instant>,
    /// Date when the dataset was last modified.
    pub last_modified_date: std::option::Option<smithy_types::Instant>,
    /// The device that made the last change to this dataset.
    pub last_modified_by: std::option::Option<String>,
    /// Total size in bytes of the records in this dataset.
    pub data_storage: std::option::Option<i64>,
    /// Number of records in this dataset.
    pub num_records: std::option::Option<i64>,
}
/// See [`Dataset`](crate::model::Dataset)
pub mod dataset {
    /// A builder for [`Dataset`](crate::model::Dataset)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) identity_id: std::option::Option<String>,
        pub(crate) dataset_name: std::option::Option<String>,
        pub(crate) creation_date: std::option::Option<smithy_types::Instant>,
        pub(crate) last_modified_date: std::option::Option<smithy_types::Instant>,
        pub(crate) last_modified_by: std::option::Option<String>,
        pub(crate) data_storage: std::option::Option<i64>,
        pub(crate) num_records: std::option::Option<i64>,
    }
    impl Builder {
        pub fn identity_id(mut self, input: impl Into<String>) -> Self {
            self.identity_id = Some(input.into());
            self
        }
        pub fn set_identity_id(mut self, input: std::option::Option<String>) -> Self {
            self.identity_id = input;
            self
        }
        pub fn dataset_name(mut self, input: impl Into<String>) -> Self {
            self.dataset_name = Some(input.into());
            self
        }
        pub fn set_dataset_name(mut self, input: std::option::Option<String>) -> Self {
            self.dataset_name = input;
            self
        }
        pub fn creation_date(mut self, input: impl Into<smithy_types::Instant>) -> Self {
            self.creation_date = Some(input.into());
            self
        }
        pub fn set_creation_date(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_date = input;
            self
        }
        pub fn last_modified_date(mut self, input: impl Into<smithy_types::Instant>) -> Self {
            self.last_modified_date = Some(input.into());
            self
        }
        pub fn set_last_modified_date(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_modified_date = input;
            self
        }
        pub fn last_modified_by(mut self, input: impl Into<String>) -> Self {
            self.last_modified_by = Some(input.into());
            self
        }
        pub fn set_last_modified_by(mut self, input: std::option::Option<String>) -> Self {
            self.last_modified_by = input;
            self
        }
        pub fn data_storage(mut self, input: i64) -> Self {
            self.data_storage = Some(input);
            self
        }
        pub fn set_data_storage(mut self, input: std::option::Option<i64>) -> Self {
            self.data_storage = input;
            self
        }
        pub fn num_records(mut self, input: i64) -> Self {
            self.num_records = Some(input);
            self
        }
        pub fn set_num_records(mut self, input: std::option::Option<i64>) -> Self {
            self.num_records = input;
            self
        }
        /// Consumes the builder and constructs a [`Dataset`](crate::model::Dataset)
        pub fn build(self) -> crate::model::Dataset {
            crate::model::Dataset {
                identity_id: self.identity_id,
                dataset_name: self.dataset_name,
                creation_date: self.creation_date,
                last_modified_date: self.last_modified_date,
                last_modified_by: self.last_modified_by,
                data_storage: self.data_storage,
                num_records: self.num_records,
            }
        }
    }
}
impl Dataset {
    /// Creates a new builder-style object to manufacture [`Dataset`](crate::model::Dataset)
    pub fn builder() -> crate::model::dataset::Builder {
        crate::model::dataset::Builder::default()
    }
}

/// Configuration options to be applied to the identity pool.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct PushSync {
    /// List of SNS platform application ARNs that could be used by clients.
    pub application_arns: std::option::Option<std::vec::Vec<String>>,
    /// A role configured to allow Cognito to call SNS on behalf of the developer.
    pub role_arn: std::option::Option<String>,
}
/// See [`PushSync`](crate::model::PushSync)
pub mod push_sync {
    /// A builder for [`PushSync`](crate::model::PushSync)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_arns: std::option::Option<std::vec::Vec<String>>,
        pub(crate) role_arn: std::option::Option<String>,
    }
    impl Builder {
        pub fn application_arns(mut self, input: impl Into<String>) -> Self {
            let mut v = self.application_arns.unwrap_or_default();
            v.push(input.into());
            self.application_arns = Some(v);
            self
        }
        pub fn set_application_arns(mut self, input: std::option::Option<std::vec::Vec<String>>) -> Self {
            self.application_arns = input;
            self
        }
        pub fn role_arn(mut self, input: impl Into<String>) -> Self {
            self.role_arn = Some(input.into());
            self
        }
        pub fn set_role_arn(mut self, input: std::option::Option<String>) -> Self {
            self.role_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`PushSync`](crate::model::PushSync)
        pub fn build(self) -> crate::model::PushSync {
            crate::model::PushSync {
                application_arns: self.application_arns,
                role_arn: self.role_arn,
            }
        }
    }
}
impl PushSync {
    /// Creates a new builder-style object to manufacture [`PushSync`](crate::model::PushSync)
    pub fn builder() -> crate::model::push_sync::Builder {
        crate::model::push_sync::Builder::default()
    }
}

/// The basic data structure of a dataset.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct Record {
    pub key: std::option::Option<String>,
    pub value: std::option::Option<String>,
    /// The server sync count for this record.
    pub sync_count: std::option::Option<i64>,
    pub last_modified_date: std::option::Option<smithy_types::Instant>,
    pub last_modified_by: std::option::Option<String>,
    /// The last modified date of the client device.
    pub device_last_modified_date: std::option::Option<smithy_types::Instant>,
}
/// See [`Record`](crate::model::Record)
pub mod record {
    /// A builder for [`Record`](crate::model::Record)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) key: std::option::Option<String>,
        pub(crate) value: std::option::Option<String>,
        pub(crate) sync_count: std::option::Option<i64>,
        pub(crate) last_modified_date: std::option::Option<smithy_types::Instant>,
        pub(crate) last_modified_by: std::option::Option<String>,
        pub(crate) device_last_modified_date: std::option::Option<smithy_types::Instant>,
    }
    impl Builder {
        pub fn key(mut self, input: impl Into<String>) -> Self {
            self.key = Some(input.into());
            self
        }
        pub fn set_key(mut self, input: std::option::Option<String>) -> Self {
            self.key = input;
            self
        }
        pub fn value(mut self, input: impl Into<String>) -> Self {
            self.value = Some(input.into());
            self
        }
        pub fn set_value(mut self, input: std::option::Option<String>) -> Self {
            self.value = input;
            self
        }
        pub fn sync_count(mut self, input: i64) -> Self {
            self.sync_count = Some(input);
            self
        }
        pub fn set_sync_count(mut self, input: std::option::Option<i64>) -> Self {
            self.sync_count = input;
            self
        }
        pub fn last_modified_date(mut self, input: impl Into<smithy_types::Instant>) -> Self {
            self.last_modified_date = Some(input.into());
            self
        }
        pub fn set_last_modified_date(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_modified_date = input;
            self
        }
        pub fn last_modified_by(mut self, input: impl Into<String>) -> Self {
            self.last_modified_by = Some(input.into());
            self
        }
        pub fn set_last_modified_by(mut self, input: std::option::Option<String>) -> Self {
            self.last_modified_by = input;
            self
        }
        pub fn device_last_modified_date(mut self, input: impl Into<smithy_types::Instant>) -> Self {
            self.device_last_modified_date = Some(input.into());
            self
        }
        pub fn set_device_last_modified_date(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.device_last_modified_date = input;
            self
        }
        /// Consumes the builder and constructs a [`Record`](crate::model::Record)
        pub fn build(self) -> crate::model::Record {
            crate::model::Record {
                key: self.key,
                value: self.value,
                sync_count: self.sync_count,
                last_modified_date: self.last_modified_date,
                last_modified_by: self.last_modified_by,
                device_last_modified_date: self.device_last_modified_date,
            }
        }
    }
}
impl Record {
    /// Creates a new builder-style object to manufacture [`Record`](crate::model::Record)
    pub fn builder() -> crate::model::record::Builder {
        crate::model::record::Builder::default()
    }
}

/// An update operation for a record.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct RecordPatch {
    /// An operation, either replace or remove.
    pub op: std::option::Option<crate::model::Operation>,
    pub key: std::option::Option<String>,
    pub value: std::option::Option<String>,
    /// Last known server sync count for this record. Set to 0 if unknown.
    pub sync_count: std::option::Option<i64>,
    /// The last modified date of the client device.
    pub device_last_modified_date: std::option::Option<smithy_types::Instant>,
}
/// See [`RecordPatch`](crate::model::RecordPatch)
pub mod record_patch {
    /// A builder for [`RecordPatch`](crate::model::RecordPatch)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) op: std::option::Option<crate::model::Operation>,
        pub(crate) key: std::option::Option<String>,
        pub(crate) value: std::option::Option<String>,
        pub(crate) sync_count: std::option::Option<i64>,
        pub(crate) device_last_modified_date: std::option::Option<smithy_types::Instant>,
    }
    impl Builder {
        pub fn op(mut self, input: impl Into<crate::model::Operation>) -> Self {
            self.op = Some(input.into());
            self
        }
        pub fn set_op(mut self, input: std::option::Option<crate::model::Operation>) -> Self {
            self.op = input;
            self
        }
        pub fn key(mut self, input: impl Into<String>) -> Self {
            self.key = Some(input.into());
            self
        }
        pub fn set_key(mut self, input: std::option::Option<String>) -> Self {
            self.key = input;
            self
        }
        pub fn value(mut self, input: impl Into<String>) -> Self {
            self.value = Some(input.into());
            self
        }
        pub fn set_value(mut self, input: std::option::Option<String>) -> Self {
            self.value = input;
            self
        }
        pub fn sync_count(mut self, input: i64) -> Self {
            self.sync_count = Some(input);
            self
        }
        pub fn set_sync_count(mut self, input: std::option::Option<i64>) -> Self {
            self.sync_count = input;
            self
        }
        pub fn device_last_modified_date(mut self, input: impl Into<smithy_types::Instant>) -> Self {
            self.device_last_modified_date = Some(input.into());
            self
        }
        pub fn set_device_last_modified_date(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.device_last_modified_date = input;
            self
        }
        /// Consumes the builder and constructs a [`RecordPatch`](crate::model::RecordPatch)
        pub fn build(self) -> crate::model::RecordPatch {
            crate::model::RecordPatch {
                op: self.op,
                key: self.key,
                value: self.value,
                sync_count: self.sync_count,
                device_last_modified_date: self.device_last_modified_date,
            }
        }
    }
}
impl RecordPatch {
    /// Creates a new builder-style object to manufacture [`RecordPatch`](crate::model::RecordPatch)
    pub fn builder() -> crate::model::record_patch::Builder {
        crate::model::record_patch::Builder::default()
    }
}

