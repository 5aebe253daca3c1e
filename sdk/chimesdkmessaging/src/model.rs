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
pub enum ChannelMode {
    Unrestricted,
    Restricted,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ChannelMode {
    fn from(s: &str) -> Self {
        match s {
            "UNRESTRICTED" => ChannelMode::Unrestricted,
            "RESTRICTED" => ChannelMode::Restricted,
            other => ChannelMode::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ChannelMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ChannelMode::from(s))
    }
}
impl ChannelMode {
    pub fn as_str(&self) -> &str {
        match self {
            ChannelMode::Unrestricted => "UNRESTRICTED",
            ChannelMode::Restricted => "RESTRICTED",
            ChannelMode::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["UNRESTRICTED", "RESTRICTED"]
    }
    /// Parses a known value, rejecting anything [`values`](Self::values) does not list.
    pub fn try_parse(s: &str) -> std::result::Result<Self, smithy_types::UnknownVariantError> {
        match ChannelMode::from(s) {
            ChannelMode::Unknown(_) => Err(smithy_types::UnknownVariantError::new(
                s,
                ChannelMode::values(),
            )),
            known => Ok(known),
        }
    }
}
impl AsRef<str> for ChannelMode {
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
pub enum ChannelPrivacy {
    Public,
    Private,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ChannelPrivacy {
    fn from(s: &str) -> Self {
        match s {
            "PUBLIC" => ChannelPrivacy::Public,
            "PRIVATE" => ChannelPrivacy::Private,
            other => ChannelPrivacy::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ChannelPrivacy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ChannelPrivacy::from(s))
    }
}
impl ChannelPrivacy {
    pub fn as_str(&self) -> &str {
        match self {
            ChannelPrivacy::Public => "PUBLIC",
            ChannelPrivacy::Private => "PRIVATE",
            ChannelPrivacy::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["PUBLIC", "PRIVATE"]
    }
    /// Parses a known value, rejecting anything [`values`](Self::values) does not list.
    pub fn try_parse(s: &str) -> std::result::Result<Self, smithy_types::UnknownVariantError> {
        match ChannelPrivacy::from(s) {
            ChannelPrivacy::Unknown(_) => Err(smithy_types::UnknownVariantError::new(
                s,
                ChannelPrivacy::values(),
            )),
            known => Ok(known),
        }
    }
}
impl AsRef<str> for ChannelPrivacy {
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
pub enum ChannelMembershipType {
    Default,
    Hidden,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ChannelMembershipType {
    fn from(s: &str) -> Self {
        match s {
            "DEFAULT" => ChannelMembershipType::Default,
            "HIDDEN" => ChannelMembershipType::Hidden,
            other => ChannelMembershipType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ChannelMembershipType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ChannelMembershipType::from(s))
    }
}
impl ChannelMembershipType {
    pub fn as_str(&self) -> &str {
        match self {
            ChannelMembershipType::Default => "DEFAULT",
            ChannelMembershipType::Hidden => "HIDDEN",
            ChannelMembershipType::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["DEFAULT", "HIDDEN"]
    }
    /// Parses a known value, rejecting anything [`values`](Self::values) does not list.
    pub fn try_parse(s: &str) -> std::result::Result<Self, smithy_types::UnknownVariantError> {
        match ChannelMembershipType::from(s) {
            ChannelMembershipType::Unknown(_) => Err(smithy_types::UnknownVariantError::new(
                s,
                ChannelMembershipType::values(),
            )),
            known => Ok(known),
        }
    }
}
impl AsRef<str> for ChannelMembershipType {
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
pub enum ChannelMessagePersistenceType {
    Persistent,
    NonPersistent,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ChannelMessagePersistenceType {
    fn from(s: &str) -> Self {
        match s {
            "PERSISTENT" => ChannelMessagePersistenceType::Persistent,
            "NON_PERSISTENT" => ChannelMessagePersistenceType::NonPersistent,
            other => ChannelMessagePersistenceType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ChannelMessagePersistenceType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ChannelMessagePersistenceType::from(s))
    }
}
impl ChannelMessagePersistenceType {
    pub fn as_str(&self) -> &str {
        match self {
            ChannelMessagePersistenceType::Persistent => "PERSISTENT",
            ChannelMessagePersistenceType::NonPersistent => "NON_PERSISTENT",
            ChannelMessagePersistenceType::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["PERSISTENT", "NON_PERSISTENT"]
    }
    /// Parses a known value, rejecting anything [`values`](Self::values) does not list.
    pub fn try_parse(s: &str) -> std::result::Result<Self, smithy_types::UnknownVariantError> {
        match ChannelMessagePersistenceType::from(s) {
            ChannelMessagePersistenceType::Unknown(_) => Err(smithy_types::UnknownVariantError::new(
                s,
                ChannelMessagePersistenceType::values(),
            )),
            known => Ok(known),
        }
    }
}
impl AsRef<str> for ChannelMessagePersistenceType {
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
pub enum ChannelMessageType {
    Standard,
    Control,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ChannelMessageType {
    fn from(s: &str) -> Self {
        match s {
            "STANDARD" => ChannelMessageType::Standard,
            "CONTROL" => ChannelMessageType::Control,
            other => ChannelMessageType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ChannelMessageType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ChannelMessageType::from(s))
    }
}
impl ChannelMessageType {
    pub fn as_str(&self) -> &str {
        match self {
            ChannelMessageType::Standard => "STANDARD",
            ChannelMessageType::Control => "CONTROL",
            ChannelMessageType::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["STANDARD", "CONTROL"]
    }
    /// Parses a known value, rejecting anything [`values`](Self::values) does not list.
    pub fn try_parse(s: &str) -> std::result::Result<Self, smithy_types::UnknownVariantError> {
        match ChannelMessageType::from(s) {
            ChannelMessageType::Unknown(_) => Err(smithy_types::UnknownVariantError::new(
                s,
                ChannelMessageType::values(),
            )),
            known => Ok(known),
        }
    }
}
impl AsRef<str> for ChannelMessageType {
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
pub enum SortOrder {
    Ascending,
    Descending,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for SortOrder {
    fn from(s: &str) -> Self {
        match s {
            "ASCENDING" => SortOrder::Ascending,
            "DESCENDING" => SortOrder::Descending,
            other => SortOrder::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for SortOrder {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(SortOrder::from(s))
    }
}
impl SortOrder {
    pub fn as_str(&self) -> &str {
        match self {
            SortOrder::Ascending => "ASCENDING",
            SortOrder::Descending => "DESCENDING",
            SortOrder::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["ASCENDING", "DESCENDING"]
    }
    /// Parses a known value, rejecting anything [`values`](Self::values) does not list.
    pub fn try_parse(s: &str) -> std::result::Result<Self, smithy_types::UnknownVariantError> {
        match SortOrder::from(s) {
            SortOrder::Unknown(_) => Err(smithy_types::UnknownVariantError::new(
                s,
                SortOrder::values(),
            )),
            known => Ok(known),
        }
    }
}
impl AsRef<str> for SortOrder {
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
pub enum ErrorCode {
    BadRequest,
    Conflict,
    Forbidden,
    NotFound,
    PreconditionFailed,
    ResourceLimitExceeded,
    ServiceFailure,
    AccessDenied,
    ServiceUnavailable,
    Throttled,
    Throttling,
    Unauthorized,
    Unprocessable,
    VoiceConnectorGroupAssociationsExist,
    PhoneNumberAssociationsExist,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ErrorCode {
    fn from(s: &str) -> Self {
        match s {
            "BadRequest" => ErrorCode::BadRequest,
            "Conflict" => ErrorCode::Conflict,
            "Forbidden" => ErrorCode::Forbidden,
            "NotFound" => ErrorCode::NotFound,
            "PreconditionFailed" => ErrorCode::PreconditionFailed,
            "ResourceLimitExceeded" => ErrorCode::ResourceLimitExceeded,
            "ServiceFailure" => ErrorCode::ServiceFailure,
            "AccessDenied" => ErrorCode::AccessDenied,
            "ServiceUnavailable" => ErrorCode::ServiceUnavailable,
            "Throttled" => ErrorCode::Throttled,
            "Throttling" => ErrorCode::Throttling,
            "Unauthorized" => ErrorCode::Unauthorized,
            "Unprocessable" => ErrorCode::Unprocessable,
            "VoiceConnectorGroupAssociationsExist" => ErrorCode::VoiceConnectorGroupAssociationsExist,
            "PhoneNumberAssociationsExist" => ErrorCode::PhoneNumberAssociationsExist,
            other => ErrorCode::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ErrorCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ErrorCode::from(s))
    }
}
impl ErrorCode {
    pub fn as_str(&self) -> &str {
        match self {
            ErrorCode::BadRequest => "BadRequest",
            ErrorCode::Conflict => "Conflict",
            ErrorCode::Forbidden => "Forbidden",
            ErrorCode::NotFound => "NotFound",
            ErrorCode::PreconditionFailed => "PreconditionFailed",
            ErrorCode::ResourceLimitExceeded => "ResourceLimitExceeded",
            ErrorCode::ServiceFailure => "ServiceFailure",
            ErrorCode::AccessDenied => "AccessDenied",
            ErrorCode::ServiceUnavailable => "ServiceUnavailable",
            ErrorCode::Throttled => "Throttled",
            ErrorCode::Throttling => "Throttling",
            ErrorCode::Unauthorized => "Unauthorized",
            ErrorCode::Unprocessable => "Unprocessable",
            ErrorCode::VoiceConnectorGroupAssociationsExist => "VoiceConnectorGroupAssociationsExist",
            ErrorCode::PhoneNumberAssociationsExist => "PhoneNumberAssociationsExist",
            ErrorCode::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["BadRequest", "Conflict", "Forbidden", "NotFound", "PreconditionFailed", "ResourceLimitExceeded", "ServiceFailure", "AccessDenied", "ServiceUnavailable", "Throttled", "Throttling", "Unauthorized", "Unprocessable", "VoiceConnectorGroupAssociationsExist", "PhoneNumberAssociationsExist"]
    }
    /// Parses a known value, rejecting anything [`values`](Self::values) does not list.
    pub fn try_parse(s: &str) -> std::result::Result<Self, smithy_types::UnknownVariantError> {
        match ErrorCode::from(s) {
            ErrorCode::Unknown(_) => Err(smithy_types::UnknownVariantError::new(
                s,
                ErrorCode::values(),
            )),
            known => Ok(known),
        }
    }
}
impl AsRef<str> for ErrorCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// The details of a channel.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct Channel {
    /// The name of a channel.
    pub name: std::option::Option<String>,
    /// The ARN of a channel.
    pub channel_arn: std::option::Option<String>,
    /// The mode of the channel.
    pub mode: std::option::Option<crate::model::ChannelMode>,
    /// The channel's privacy setting.
    pub privacy: std::option::Option<crate::model::ChannelPrivacy>,
    /// The channel's metadata.
    pub metadata: std::option::Option<String>,
    /// The <code>AppInstanceUser</code> who created the channel.
    pub created_by: std::option::Option<crate::model::Identity>,
    /// The time at which the <code>AppInstanceUser</code> created the channel.
    pub created_timestamp: std::option::Option<smithy_types::Instant>,
    /// The time at which a member sent the last message in the channel.
    pub last_message_timestamp: std::option::Option<smithy_types::Instant>,
    /// The time at which a channel was last updated.
    pub last_updated_timestamp: std::option::Option<smithy_types::Instant>,
}
impl std::fmt::Debug for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("Channel");
        formatter.field("name", &"*** Sensitive Data Redacted ***");
        formatter.field("channel_arn", &self.channel_arn);
        formatter.field("mode", &self.mode);
        formatter.field("privacy", &self.privacy);
        formatter.field("metadata", &"*** Sensitive Data Redacted ***");
        formatter.field("created_by", &self.created_by);
        formatter.field("created_timestamp", &self.created_timestamp);
        formatter.field("last_message_timestamp", &self.last_message_timestamp);
        formatter.field("last_updated_timestamp", &self.last_updated_timestamp);
        formatter.finish()
    }
}
/// See [`Channel`](crate::model::Channel)
pub mod channel {
    /// A builder for [`Channel`](crate::model::Channel)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq)]
    pub struct Builder {
        pub(crate) name: std::option::Option<String>,
        pub(crate) channel_arn: std::option::Option<String>,
        pub(crate) mode: std::option::Option<crate::model::ChannelMode>,
        pub(crate) privacy: std::option::Option<crate::model::ChannelPrivacy>,
        pub(crate) metadata: std::option::Option<String>,
        pub(crate) created_by: std::option::Option<crate::model::Identity>,
        pub(crate) created_timestamp: std::option::Option<smithy_types::Instant>,
        pub(crate) last_message_timestamp: std::option::Option<smithy_types::Instant>,
        pub(crate) last_updated_timestamp: std::option::Option<smithy_types::Instant>,
    }
    impl Builder {
        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<String>) -> Self {
            self.name = input;
            self
        }
        pub fn channel_arn(mut self, input: impl Into<String>) -> Self {
            self.channel_arn = Some(input.into());
            self
        }
        pub fn set_channel_arn(mut self, input: std::option::Option<String>) -> Self {
            self.channel_arn = input;
            self
        }
        pub fn mode(mut self, input: impl Into<crate::model::ChannelMode>) -> Self {
            self.mode = Some(input.into());
            self
        }
        pub fn set_mode(mut self, input: std::option::Option<crate::model::ChannelMode>) -> Self {
            self.mode = input;
            self
        }
        pub fn privacy(mut self, input: impl Into<crate::model::ChannelPrivacy>) -> Self {
            self.privacy = Some(input.into());
            self
        }
        pub fn set_privacy(mut self, input: std::option::Option<crate::model::ChannelPrivacy>) -> Self {
            self.privacy = input;
            self
        }
        pub fn metadata(mut self, input: impl Into<String>) -> Self {
            self.metadata = Some(input.into());
            self
        }
        pub fn set_metadata(mut self, input: std::option::Option<String>) -> Self {
            self.metadata = input;
            self
        }
        pub fn created_by(mut self, input: impl Into<crate::model::Identity>) -> Self {
            self.created_by = Some(input.into());
            self
        }
        pub fn set_created_by(mut self, input: std::option::Option<crate::model::Identity>) -> Self {
            self.created_by = input;
            self
        }
        pub fn created_timestamp(mut self, input: impl Into<smithy_types::Instant>) -> Self {
            self.created_timestamp = Some(input.into());
            self
        }
        pub fn set_created_timestamp(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.created_timestamp = input;
            self
        }
        pub fn last_message_timestamp(mut self, input: impl Into<smithy_types::Instant>) -> Self {
            self.last_message_timestamp = Some(input.into());
            self
        }
        pub fn set_last_message_timestamp(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_message_timestamp = input;
            self
        }
        pub fn last_updated_timestamp(mut self, input: impl Into<smithy_types::Instant>) -> Self {
            self.last_updated_timestamp = Some(input.into());
            self
        }
        pub fn set_last_updated_timestamp(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_updated_timestamp = input;
            self
        }
        /// Consumes the builder and constructs a [`Channel`](crate::model::Channel)
        pub fn build(self) -> crate::model::Channel {
            crate::model::Channel {
                name: self.name,
                channel_arn: self.channel_arn,
                mode: self.mode,
                privacy: self.privacy,
                metadata: self.metadata,
                created_by: self.created_by,
                created_timestamp: self.created_timestamp,
                last_message_timestamp: self.last_message_timestamp,
                last_updated_timestamp: self.last_updated_timestamp,
            }
        }
    }
}
impl Channel {
    /// Creates a new builder-style object to manufacture [`Channel`](crate::model::Channel)
    pub fn builder() -> crate::model::channel::Builder {
        crate::model::channel::Builder::default()
    }
}

/// The details of a channel ban.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ChannelBan {
    /// The member being banned from the channel.
    pub member: std::option::Option<crate::model::Identity>,
    pub channel_arn: std::option::Option<String>,
    /// The time at which the ban was created.
    pub created_timestamp: std::option::Option<smithy_types::Instant>,
    /// The <code>AppInstanceUser</code> who created the ban.
    pub created_by: std::option::Option<crate::model::Identity>,
}
/// See [`ChannelBan`](crate::model::ChannelBan)
pub mod channel_ban {
    /// A builder for [`ChannelBan`](crate::model::ChannelBan)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) member: std::option::Option<crate::model::Identity>,
        pub(crate) channel_arn: std::option::Option<String>,
        pub(crate) created_timestamp: std::option::Option<smithy_types::Instant>,
        pub(crate) created_by: std::option::Option<crate::model::Identity>,
    }
    impl Builder {
        pub fn member(mut self, input: impl Into<crate::model::Identity>) -> Self {
            self.member = Some(input.into());
            self
        }
        pub fn set_member(mut self, input: std::option::Option<crate::model::Identity>) -> Self {
            self.member = input;
            self
        }
        pub fn channel_arn(mut self, input: impl Into<String>) -> Self {
            self.channel_arn = Some(input.into());
            self
        }
        pub fn set_channel_arn(mut self, input: std::option::Option<String>) -> Self {
            self.channel_arn = input;
            self
        }
        pub fn created_timestamp(mut self, input: impl Into<smithy_types::Instant>) -> Self {
            self.created_timestamp = Some(input.into());
            self
        }
        pub fn set_created_timestamp(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.created_timestamp = input;
            self
        }
        pub fn created_by(mut self, input: impl Into<crate::model::Identity>) -> Self {
            self.created_by = Some(input.into());
            self
        }
        pub fn set_created_by(mut self, input: std::option::Option<crate::model::Identity>) -> Self {
            self.created_by = input;
            self
        }
        /// Consumes the builder and constructs a [`ChannelBan`](crate::model::ChannelBan)
        pub fn build(self) -> crate::model::ChannelBan {
            crate::model::ChannelBan {
                member: self.member,
                channel_arn: self.channel_arn,
                created_timestamp: self.created_timestamp,
                created_by: self.created_by,
            }
        }
    }
}
impl ChannelBan {
    /// Creates a new builder-style object to manufacture [`ChannelBan`](crate::model::ChannelBan)
    pub fn builder() -> crate::model::channel_ban::Builder {
        crate::model::channel_ban::Builder::default()
    }
}

/// Summary of the details of a <code>ChannelBan</code>.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ChannelBanSummary {
    /// The member being banned from a channel.
    pub member: std::option::Option<crate::model::Identity>,
}
/// See [`ChannelBanSummary`](crate::model::ChannelBanSummary)
pub mod channel_ban_summary {
    /// A builder for [`ChannelBanSummary`](crate::model::ChannelBanSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) member: std::option::Option<crate::model::Identity>,
    }
    impl Builder {
        pub fn member(mut self, input: impl Into<crate::model::Identity>) -> Self {
            self.member = Some(input.into());
            self
        }
        pub fn set_member(mut self, input: std::option::Option<crate::model::Identity>) -> Self {
            self.member = input;
            self
        }
        /// Consumes the builder and constructs a [`ChannelBanSummary`](crate::model::ChannelBanSummary)
        pub fn build(self) -> crate::model::ChannelBanSummary {
            crate::model::ChannelBanSummary {
                member: self.member,
            }
        }
    }
}
impl ChannelBanSummary {
    /// Creates a new builder-style object to manufacture [`ChannelBanSummary`](crate::model::ChannelBanSummary)
    pub fn builder() -> crate::model::channel_ban_summary::Builder {
        crate::model::channel_ban_summary::Builder::default()
    }
}

/// Summary of the details of a <code>ChannelMembership</code>.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ChannelMembershipSummary {
    /// A member's summary data.
    pub member: std::option::Option<crate::model::Identity>,
}
/// See [`ChannelMembershipSummary`](crate::model::ChannelMembershipSummary)
pub mod channel_membership_summary {
    /// A builder for [`ChannelMembershipSummary`](crate::model::ChannelMembershipSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) member: std::option::Option<crate::model::Identity>,
    }
    impl Builder {
        pub fn member(mut self, input: impl Into<crate::model::Identity>) -> Self {
            self.member = Some(input.into());
            self
        }
        pub fn set_member(mut self, input: std::option::Option<crate::model::Identity>) -> Self {
            self.member = input;
            self
        }
        /// Consumes the builder and constructs a [`ChannelMembershipSummary`](crate::model::ChannelMembershipSummary)
        pub fn build(self) -> crate::model::ChannelMembershipSummary {
            crate::model::ChannelMembershipSummary {
                member: self.member,
            }
        }
    }
}
impl ChannelMembershipSummary {
    /// Creates a new builder-style object to manufacture [`ChannelMembershipSummary`](crate::model::ChannelMembershipSummary)
    pub fn builder() -> crate::model::channel_membership_summary::Builder {
        crate::model::channel_membership_summary::Builder::default()
    }
}

/// The details of a message in a channel.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ChannelMessage {
    /// The ARN of the channel.
    pub channel_arn: std::option::Option<String>,
    /// The ID of a message.
    pub message_id: std::option::Option<String>,
    /// The message content.
    pub content: std::option::Option<String>,
    /// The message metadata.
    pub metadata: std::option::Option<String>,
    /// The message type.
    pub r#type: std::option::Option<crate::model::ChannelMessageType>,
    /// The time at which the message was created.
    pub created_timestamp: std::option::Option<smithy_types::Instant>,
    /// The time at which a message was edited.
    pub last_edited_timestamp: std::option::Option<smithy_types::Instant>,
    /// The time at which a message was updated.
    pub last_updated_timestamp: std::option::Option<smithy_types::Instant>,
    /// The message sender.
    pub sender: std::option::Option<crate::model::Identity>,
    /// Hides the content of a message.
    pub redacted: std::option::Option<bool>,
    /// The persistence setting for a channel message.
    pub persistence: std::option::Option<crate::model::ChannelMessagePersistenceType>,
}
impl std::fmt::Debug for ChannelMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ChannelMessage");
        formatter.field("channel_arn", &self.channel_arn);
        formatter.field("message_id", &self.message_id);
        formatter.field("content", &"*** Sensitive Data Redacted ***");
        formatter.field("metadata", &"*** Sensitive Data Redacted ***");
        formatter.field("type", &self.r#type);
        formatter.field("created_timestamp", &self.created_timestamp);
        formatter.field("last_edited_timestamp", &self.last_edited_timestamp);
        formatter.field("last_updated_timestamp", &self.last_updated_timestamp);
        formatter.field("sender", &self.sender);
        formatter.field("redacted", &self.redacted);
        formatter.field("persistence", &self.persistence);
        formatter.finish()
    }
}
/// See [`ChannelMessage`](crate::model::ChannelMessage)
pub mod channel_message {
    /// A builder for [`ChannelMessage`](crate::model::ChannelMessage)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq)]
    pub struct Builder {
        pub(crate) channel_arn: std::option::Option<String>,
        pub(crate) message_id: std::option::Option<String>,
        pub(crate) content: std::option::Option<String>,
        pub(crate) metadata: std::option::Option<String>,
        pub(crate) r#type: std::option::Option<crate::model::ChannelMessageType>,
        pub(crate) created_timestamp: std::option::Option<smithy_types::Instant>,
        pub(crate) last_edited_timestamp: std::option::Option<smithy_types::Instant>,
        pub(crate) last_updated_timestamp: std::option::Option<smithy_types::Instant>,
        pub(crate) sender: std::option::Option<crate::model::Identity>,
        pub(crate) redacted: std::option::Option<bool>,
        pub(crate) persistence: std::option::Option<crate::model::ChannelMessagePersistenceType>,
    }
    impl Builder {
        pub fn channel_arn(mut self, input: impl Into<String>) -> Self {
            self.channel_arn = Some(input.into());
            self
        }
        pub fn set_channel_arn(mut self, input: std::option::Option<String>) -> Self {
            self.channel_arn = input;
            self
        }
        pub fn message_id(mut self, input: impl Into<String>) -> Self {
            self.message_id = Some(input.into());
            self
        }
        pub fn set_message_id(mut self, input: std::option::Option<String>) -> Self {
            self.message_id = input;
            self
        }
        pub fn content(mut self, input: impl Into<String>) -> Self {
            self.content = Some(input.into());
            self
        }
        pub fn set_content(mut self, input: std::option::Option<String>) -> Self {
            self.content = input;
            self
        }
        pub fn metadata(mut self, input: impl Into<String>) -> Self {
            self.metadata = Some(input.into());
            self
        }
        pub fn set_metadata(mut self, input: std::option::Option<String>) -> Self {
            self.metadata = input;
            self
        }
        pub fn r#type(mut self, input: impl Into<crate::model::ChannelMessageType>) -> Self {
            self.r#type = Some(input.into());
            self
        }
        pub fn set_type(mut self, input: std::option::Option<crate::model::ChannelMessageType>) -> Self {
            self.r#type = input;
            self
        }
        pub fn created_timestamp(mut self, input: impl Into<smithy_types::Instant>) -> Self {
            self.created_timestamp = Some(input.into());
            self
        }
        pub fn set_created_timestamp(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.created_timestamp = input;
            self
        }
        pub fn last_edited_timestamp(mut self, input: impl Into<smithy_types::Instant>) -> Self {
            self.last_edited_timestamp = Some(input.into());
            self
        }
        pub fn set_last_edited_timestamp(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_edited_timestamp = input;
            self
        }
        pub fn last_updated_timestamp(mut self, input: impl Into<smithy_types::Instant>) -> Self {
            self.last_updated_timestamp = Some(input.into());
            self
        }
        pub fn set_last_updated_timestamp(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_updated_timestamp = input;
            self
        }
        pub fn sender(mut self, input: impl Into<crate::model::Identity>) -> Self {
            self.sender = Some(input.into());
            self
        }
        pub fn set_sender(mut self, input: std::option::Option<crate::model::Identity>) -> Self {
            self.sender = input;
            self
        }
        pub fn redacted(mut self, input: bool) -> Self {
            self.redacted = Some(input);
            self
        }
        pub fn set_redacted(mut self, input: std::option::Option<bool>) -> Self {
            self.redacted = input;
            self
        }
        pub fn persistence(mut self, input: impl Into<crate::model::ChannelMessagePersistenceType>) -> Self {
            self.persistence = Some(input.into());
            self
        }
        pub fn set_persistence(mut self, input: std::option::Option<crate::model::ChannelMessagePersistenceType>) -> Self {
            self.persistence = input;
            self
        }
        /// Consumes the builder and constructs a [`ChannelMessage`](crate::model::ChannelMessage)
        pub fn build(self) -> crate::model::ChannelMessage {
            crate::model::ChannelMessage {
                channel_arn: self.channel_arn,
                message_id: self.message_id,
                content: self.content,
                metadata: self.metadata,
                r#type: self.r#type,
                created_timestamp: self.created_timestamp,
                last_edited_timestamp: self.last_edited_timestamp,
                last_updated_timestamp: self.last_updated_timestamp,
                sender: self.sender,
                redacted: self.redacted,
                persistence: self.persistence,
            }
        }
    }
}
impl ChannelMessage {
    /// Creates a new builder-style object to manufacture [`ChannelMessage`](crate::model::ChannelMessage)
    pub fn builder() -> crate::model::channel_message::Builder {
        crate::model::channel_message::Builder::default()
    }
}

/// Summary of the messages in a <code>Channel</code>.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ChannelMessageSummary {
    /// The ID of the message.
    pub message_id: std::option::Option<String>,
    /// The content of the message.
    pub content: std::option::Option<String>,
    /// The metadata of the message.
    pub metadata: std::option::Option<String>,
    /// The type of message.
    pub r#type: std::option::Option<crate::model::ChannelMessageType>,
    /// The time at which the message summary was created.
    pub created_timestamp: std::option::Option<smithy_types::Instant>,
    /// The time at which a message was last updated.
    pub last_updated_timestamp: std::option::Option<smithy_types::Instant>,
    /// The time at which a message was last edited.
    pub last_edited_timestamp: std::option::Option<smithy_types::Instant>,
    /// The message sender.
    pub sender: std::option::Option<crate::model::Identity>,
    /// Indicates whether a message was redacted.
    pub redacted: std::option::Option<bool>,
}
impl std::fmt::Debug for ChannelMessageSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ChannelMessageSummary");
        formatter.field("message_id", &self.message_id);
        formatter.field("content", &"*** Sensitive Data Redacted ***");
        formatter.field("metadata", &"*** Sensitive Data Redacted ***");
        formatter.field("type", &self.r#type);
        formatter.field("created_timestamp", &self.created_timestamp);
        formatter.field("last_updated_timestamp", &self.last_updated_timestamp);
        formatter.field("last_edited_timestamp", &self.last_edited_timestamp);
        formatter.field("sender", &self.sender);
        formatter.field("redacted", &self.redacted);
        formatter.finish()
    }
}
/// See [`ChannelMessageSummary`](crate::model::ChannelMessageSummary)
pub mod channel_message_summary {
    /// A builder for [`ChannelMessageSummary`](crate::model::ChannelMessageSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq)]
    pub struct Builder {
        pub(crate) message_id: std::option::Option<String>,
        pub(crate) content: std::option::Option<String>,
        pub(crate) metadata: std::option::Option<String>,
        pub(crate) r#type: std::option::Option<crate::model::ChannelMessageType>,
        pub(crate) created_timestamp: std::option::Option<smithy_types::Instant>,
        pub(crate) last_updated_timestamp: std::option::Option<smithy_types::Instant>,
        pub(crate) last_edited_timestamp: std::option::Option<smithy_types::Instant>,
        pub(crate) sender: std::option::Option<crate::model::Identity>,
        pub(crate) redacted: std::option::Option<bool>,
    }
    impl Builder {
        pub fn message_id(mut self, input: impl Into<String>) -> Self {
            self.message_id = Some(input.into());
            self
        }
        pub fn set_message_id(mut self, input: std::option::Option<String>) -> Self {
            self.message_id = input;
            self
        }
        pub fn content(mut self, input: impl Into<String>) -> Self {
            self.content = Some(input.into());
            self
        }
        pub fn set_content(mut self, input: std::option::Option<String>) -> Self {
            self.content = input;
            self
        }
        pub fn metadata(mut self, input: impl Into<String>) -> Self {
            self.metadata = Some(input.into());
            self
        }
        pub fn set_metadata(mut self, input: std::option::Option<String>) -> Self {
            self.metadata = input;
            self
        }
        pub fn r#type(mut self, input: impl Into<crate::model::ChannelMessageType>) -> Self {
            self.r#type = Some(input.into());
            self
        }
        pub fn set_type(mut self, input: std::option::Option<crate::model::ChannelMessageType>) -> Self {
            self.r#type = input;
            self
        }
        pub fn created_timestamp(mut self, input: impl Into<smithy_types::Instant>) -> Self {
            self.created_timestamp = Some(input.into());
            self
        }
        pub fn set_created_timestamp(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.created_timestamp = input;
            self
        }
        pub fn last_updated_timestamp(mut self, input: impl Into<smithy_types::Instant>) -> Self {
            self.last_updated_timestamp = Some(input.into());
            self
        }
        pub fn set_last_updated_timestamp(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_updated_timestamp = input;
            self
        }
        pub fn last_edited_timestamp(mut self, input: impl Into<smithy_types::Instant>) -> Self {
            self.last_edited_timestamp = Some(input.into());
            self
        }
        pub fn set_last_edited_timestamp(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_edited_timestamp = input;
            self
        }
        pub fn sender(mut self, input: impl Into<crate::model::Identity>) -> Self {
            self.sender = Some(input.into());
            self
        }
        pub fn set_sender(mut self, input: std::option::Option<crate::model::Identity>) -> Self {
            self.sender = input;
            self
        }
        pub fn redacted(mut self, input: bool) -> Self {
            self.redacted = Some(input);
            self
        }
        pub fn set_redacted(mut self, input: std::option::Option<bool>) -> Self {
            self.redacted = input;
            self
        }
        /// Consumes the builder and constructs a [`ChannelMessageSummary`](crate::model::ChannelMessageSummary)
        pub fn build(self) -> crate::model::ChannelMessageSummary {
            crate::model::ChannelMessageSummary {
                message_id: self.message_id,
                content: self.content,
                metadata: self.metadata,
                r#type: self.r#type,
                created_timestamp: self.created_timestamp,
                last_updated_timestamp: self.last_updated_timestamp,
                last_edited_timestamp: self.last_edited_timestamp,
                sender: self.sender,
                redacted: self.redacted,
            }
        }
    }
}
impl ChannelMessageSummary {
    /// Creates a new builder-style object to manufacture [`ChannelMessageSummary`](crate::model::ChannelMessageSummary)
    pub fn builder() -> crate::model::channel_message_summary::Builder {
        crate::model::channel_message_summary::Builder::default()
    }
}

/// Summary of the details of a <code>Channel</code>.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ChannelSummary {
    pub name: std::option::Option<String>,
    pub channel_arn: std::option::Option<String>,
    pub mode: std::option::Option<crate::model::ChannelMode>,
    pub privacy: std::option::Option<crate::model::ChannelPrivacy>,
    pub metadata: std::option::Option<String>,
    /// The time at which the last message in a channel was sent.
    pub last_message_timestamp: std::option::Option<smithy_types::Instant>,
}
impl std::fmt::Debug for ChannelSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ChannelSummary");
        formatter.field("name", &"*** Sensitive Data Redacted ***");
        formatter.field("channel_arn", &self.channel_arn);
        formatter.field("mode", &self.mode);
        formatter.field("privacy", &self.privacy);
        formatter.field("metadata", &"*** Sensitive Data Redacted ***");
        formatter.field("last_message_timestamp", &self.last_message_timestamp);
        formatter.finish()
    }
}
/// See [`ChannelSummary`](crate::model::ChannelSummary)
pub mod channel_summary {
    /// A builder for [`ChannelSummary`](crate::model::ChannelSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq)]
    pub struct Builder {
        pub(crate) name: std::option::Option<String>,
        pub(crate) channel_arn: std::option::Option<String>,
        pub(crate) mode: std::option::Option<crate::model::ChannelMode>,
        pub(crate) privacy: std::option::Option<crate::model::ChannelPrivacy>,
        pub(crate) metadata: std::option::Option<String>,
        pub(crate) last_message_timestamp: std::option::Option<smithy_types::Instant>,
    }
    impl Builder {
        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<String>) -> Self {
            self.name = input;
            self
        }
        pub fn channel_arn(mut self, input: impl Into<String>) -> Self {
            self.channel_arn = Some(input.into());
            self
        }
        pub fn set_channel_arn(mut self, input: std::option::Option<String>) -> Self {
            self.channel_arn = input;
            self
        }
        pub fn mode(mut self, input: impl Into<crate::model::ChannelMode>) -> Self {
            self.mode = Some(input.into());
            self
        }
        pub fn set_mode(mut self, input: std::option::Option<crate::model::ChannelMode>) -> Self {
            self.mode = input;
            self
        }
        pub fn privacy(mut self, input: impl Into<crate::model::ChannelPrivacy>) -> Self {
            self.privacy = Some(input.into());
            self
        }
        pub fn set_privacy(mut self, input: std::option::Option<crate::model::ChannelPrivacy>) -> Self {
            self.privacy = input;
            self
        }
        pub fn metadata(mut self, input: impl Into<String>) -> Self {
            self.metadata = Some(input.into());
            self
        }
        pub fn set_metadata(mut self, input: std::option::Option<String>) -> Self {
            self.metadata = input;
            self
        }
        pub fn last_message_timestamp(mut self, input: impl Into<smithy_types::Instant>) -> Self {
            self.last_message_timestamp = Some(input.into());
            self
        }
        pub fn set_last_message_timestamp(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_message_timestamp = input;
            self
        }
        /// Consumes the builder and constructs a [`ChannelSummary`](crate::model::ChannelSummary)
        pub fn build(self) -> crate::model::ChannelSummary {
            crate::model::ChannelSummary {
                name: self.name,
                channel_arn: self.channel_arn,
                mode: self.mode,
                privacy: self.privacy,
                metadata: self.metadata,
                last_message_timestamp: self.last_message_timestamp,
            }
        }
    }
}
impl ChannelSummary {
    /// Creates a new builder-style object to manufacture [`ChannelSummary`](crate::model::ChannelSummary)
    pub fn builder() -> crate::model::channel_summary::Builder {
        crate::model::channel_summary::Builder::default()
    }
}

/// The details of a user.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct Identity {
    /// The ARN in an Identity.
    pub arn: std::option::Option<String>,
    /// The name in an Identity.
    pub name: std::option::Option<String>,
}
impl std::fmt::Debug for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("Identity");
        formatter.field("arn", &self.arn);
        formatter.field("name", &"*** Sensitive Data Redacted ***");
        formatter.finish()
    }
}
/// See [`Identity`](crate::model::Identity)
pub mod identity {
    /// A builder for [`Identity`](crate::model::Identity)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq)]
    pub struct Builder {
        pub(crate) arn: std::option::Option<String>,
        pub(crate) name: std::option::Option<String>,
    }
    impl Builder {
        pub fn arn(mut self, input: impl Into<String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<String>) -> Self {
            self.arn = input;
            self
        }
        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<String>) -> Self {
            self.name = input;
            self
        }
        /// Consumes the builder and constructs a [`Identity`](crate::model::Identity)
        pub fn build(self) -> crate::model::Identity {
            crate::model::Identity {
                arn: self.arn,
                name: self.name,
            }
        }
    }
}
impl Identity {
    /// Creates a new builder-style object to manufacture [`Identity`](crate::model::Identity)
    pub fn builder() -> crate::model::identity::Builder {
        crate::model::identity::Builder::default()
    }
}

/// Describes a tag applied to a resource.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct Tag {
    /// The key of the tag.
    pub key: std::option::Option<String>,
    /// The value of the tag.
    pub value: std::option::Option<String>,
}
impl std::fmt::Debug for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("Tag");
        formatter.field("key", &"*** Sensitive Data Redacted ***");
        formatter.field("value", &"*** Sensitive Data Redacted ***");
        formatter.finish()
    }
}
/// See [`Tag`](crate::model::Tag)
pub mod tag {
    /// A builder for [`Tag`](crate::model::Tag)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq)]
    pub struct Builder {
        pub(crate) key: std::option::Option<String>,
        pub(crate) value: std::option::Option<String>,
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
        /// Consumes the builder and constructs a [`Tag`](crate::model::Tag)
        pub fn build(self) -> crate::model::Tag {
            crate::model::Tag {
                key: self.key,
                value: self.value,
            }
        }
    }
}
impl Tag {
    /// Creates a new builder-style object to manufacture [`Tag`](crate::model::Tag)
    pub fn builder() -> crate::model::tag::Builder {
        crate::model::tag::Builder::default()
    }
}

