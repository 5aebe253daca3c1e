/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// A standard channel has two encoding pipelines and a single pipeline channel only has one.
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
pub enum ChannelClass {
    Standard,
    SinglePipeline,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ChannelClass {
    fn from(s: &str) -> Self {
        match s {
            "STANDARD" => ChannelClass::Standard,
            "SINGLE_PIPELINE" => ChannelClass::SinglePipeline,
            other => ChannelClass::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ChannelClass {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ChannelClass::from(s))
    }
}
impl ChannelClass {
    pub fn as_str(&self) -> &str {
        match self {
            ChannelClass::Standard => "STANDARD",
            ChannelClass::SinglePipeline => "SINGLE_PIPELINE",
            ChannelClass::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["STANDARD", "SINGLE_PIPELINE"]
    }
    /// Parses a known value, rejecting anything [`values`](Self::values) does not list.
    pub fn try_parse(s: &str) -> std::result::Result<Self, smithy_types::UnknownVariantError> {
        match ChannelClass::from(s) {
            ChannelClass::Unknown(_) => Err(smithy_types::UnknownVariantError::new(
                s,
                ChannelClass::values(),
            )),
            known => Ok(known),
        }
    }
}
impl AsRef<str> for ChannelClass {
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
pub enum ChannelState {
    Creating,
    CreateFailed,
    Idle,
    Starting,
    Running,
    Recovering,
    Stopping,
    Deleting,
    Deleted,
    Updating,
    UpdateFailed,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ChannelState {
    fn from(s: &str) -> Self {
        match s {
            "CREATING" => ChannelState::Creating,
            "CREATE_FAILED" => ChannelState::CreateFailed,
            "IDLE" => ChannelState::Idle,
            "STARTING" => ChannelState::Starting,
            "RUNNING" => ChannelState::Running,
            "RECOVERING" => ChannelState::Recovering,
            "STOPPING" => ChannelState::Stopping,
            "DELETING" => ChannelState::Deleting,
            "DELETED" => ChannelState::Deleted,
            "UPDATING" => ChannelState::Updating,
            "UPDATE_FAILED" => ChannelState::UpdateFailed,
            other => ChannelState::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ChannelState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ChannelState::from(s))
    }
}
impl ChannelState {
    pub fn as_str(&self) -> &str {
        match self {
            ChannelState::Creating => "CREATING",
            ChannelState::CreateFailed => "CREATE_FAILED",
            ChannelState::Idle => "IDLE",
            ChannelState::Starting => "STARTING",
            ChannelState::Running => "RUNNING",
            ChannelState::Recovering => "RECOVERING",
            ChannelState::Stopping => "STOPPING",
            ChannelState::Deleting => "DELETING",
            ChannelState::Deleted => "DELETED",
            ChannelState::Updating => "UPDATING",
            ChannelState::UpdateFailed => "UPDATE_FAILED",
            ChannelState::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["CREATING", "CREATE_FAILED", "IDLE", "STARTING", "RUNNING", "RECOVERING", "STOPPING", "DELETING", "DELETED", "UPDATING", "UPDATE_FAILED"]
    }
    /// Parses a known value, rejecting anything [`values`](Self::values) does not list.
    pub fn try_parse(s: &str) -> std::result::Result<Self, smithy_types::UnknownVariantError> {
        match ChannelState::from(s) {
            ChannelState::Unknown(_) => Err(smithy_types::UnknownVariantError::new(
                s,
                ChannelState::values(),
            )),
            known => Ok(known),
        }
    }
}
impl AsRef<str> for ChannelState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// A standard input has two sources and a single pipeline input only has one.
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
pub enum InputClass {
    Standard,
    SinglePipeline,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for InputClass {
    fn from(s: &str) -> Self {
        match s {
            "STANDARD" => InputClass::Standard,
            "SINGLE_PIPELINE" => InputClass::SinglePipeline,
            other => InputClass::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for InputClass {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(InputClass::from(s))
    }
}
impl InputClass {
    pub fn as_str(&self) -> &str {
        match self {
            InputClass::Standard => "STANDARD",
            InputClass::SinglePipeline => "SINGLE_PIPELINE",
            InputClass::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["STANDARD", "SINGLE_PIPELINE"]
    }
    /// Parses a known value, rejecting anything [`values`](Self::values) does not list.
    pub fn try_parse(s: &str) -> std::result::Result<Self, smithy_types::UnknownVariantError> {
        match InputClass::from(s) {
            InputClass::Unknown(_) => Err(smithy_types::UnknownVariantError::new(
                s,
                InputClass::values(),
            )),
            known => Ok(known),
        }
    }
}
impl AsRef<str> for InputClass {
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
pub enum InputState {
    Creating,
    Detached,
    Attached,
    Deleting,
    Deleted,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for InputState {
    fn from(s: &str) -> Self {
        match s {
            "CREATING" => InputState::Creating,
            "DETACHED" => InputState::Detached,
            "ATTACHED" => InputState::Attached,
            "DELETING" => InputState::Deleting,
            "DELETED" => InputState::Deleted,
            other => InputState::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for InputState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(InputState::from(s))
    }
}
impl InputState {
    pub fn as_str(&self) -> &str {
        match self {
            InputState::Creating => "CREATING",
            InputState::Detached => "DETACHED",
            InputState::Attached => "ATTACHED",
            InputState::Deleting => "DELETING",
            InputState::Deleted => "DELETED",
            InputState::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["CREATING", "DETACHED", "ATTACHED", "DELETING", "DELETED"]
    }
    /// Parses a known value, rejecting anything [`values`](Self::values) does not list.
    pub fn try_parse(s: &str) -> std::result::Result<Self, smithy_types::UnknownVariantError> {
        match InputState::from(s) {
            InputState::Unknown(_) => Err(smithy_types::UnknownVariantError::new(
                s,
                InputState::values(),
            )),
            known => Ok(known),
        }
    }
}
impl AsRef<str> for InputState {
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
pub enum InputType {
    UdpPush,
    RtpPush,
    RtmpPush,
    RtmpPull,
    UrlPull,
    Mp4File,
    Mediaconnect,
    InputDevice,
    AwsCdi,
    TsFile,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for InputType {
    fn from(s: &str) -> Self {
        match s {
            "UDP_PUSH" => InputType::UdpPush,
            "RTP_PUSH" => InputType::RtpPush,
            "RTMP_PUSH" => InputType::RtmpPush,
            "RTMP_PULL" => InputType::RtmpPull,
            "URL_PULL" => InputType::UrlPull,
            "MP4_FILE" => InputType::Mp4File,
            "MEDIACONNECT" => InputType::Mediaconnect,
            "INPUT_DEVICE" => InputType::InputDevice,
            "AWS_CDI" => InputType::AwsCdi,
            "TS_FILE" => InputType::TsFile,
            other => InputType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for InputType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(InputType::from(s))
    }
}
impl InputType {
    pub fn as_str(&self) -> &str {
        match self {
            InputType::UdpPush => "UDP_PUSH",
            InputType::RtpPush => "RTP_PUSH",
            InputType::RtmpPush => "RTMP_PUSH",
            InputType::RtmpPull => "RTMP_PULL",
            InputType::UrlPull => "URL_PULL",
            InputType::Mp4File => "MP4_FILE",
            InputType::Mediaconnect => "MEDIACONNECT",
            InputType::InputDevice => "INPUT_DEVICE",
            InputType::AwsCdi => "AWS_CDI",
            InputType::TsFile => "TS_FILE",
            InputType::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["UDP_PUSH", "RTP_PUSH", "RTMP_PUSH", "RTMP_PULL", "URL_PULL", "MP4_FILE", "MEDIACONNECT", "INPUT_DEVICE", "AWS_CDI", "TS_FILE"]
    }
    /// Parses a known value, rejecting anything [`values`](Self::values) does not list.
    pub fn try_parse(s: &str) -> std::result::Result<Self, smithy_types::UnknownVariantError> {
        match InputType::from(s) {
            InputType::Unknown(_) => Err(smithy_types::UnknownVariantError::new(
                s,
                InputType::values(),
            )),
            known => Ok(known),
        }
    }
}
impl AsRef<str> for InputType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// The log level the user wants for their channel.
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
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Debug,
    Disabled,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for LogLevel {
    fn from(s: &str) -> Self {
        match s {
            "ERROR" => LogLevel::Error,
            "WARNING" => LogLevel::Warning,
            "INFO" => LogLevel::Info,
            "DEBUG" => LogLevel::Debug,
            "DISABLED" => LogLevel::Disabled,
            other => LogLevel::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for LogLevel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(LogLevel::from(s))
    }
}
impl LogLevel {
    pub fn as_str(&self) -> &str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Disabled => "DISABLED",
            LogLevel::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["ERROR", "WARNING", "INFO", "DEBUG", "DISABLED"]
    }
    /// Parses a known value, rejecting anything [`values`](Self::values) does not list.
    pub fn try_parse(s: &str) -> std::result::Result<Self, smithy_types::UnknownVariantError> {
        match LogLevel::from(s) {
            LogLevel::Unknown(_) => Err(smithy_types::UnknownVariantError::new(
                s,
                LogLevel::values(),
            )),
            known => Ok(known),
        }
    }
}
impl AsRef<str> for LogLevel {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct Channel {
    /// The unique arn of the channel.
    pub arn: std::option::Option<String>,
    /// The class for this channel. STANDARD for a channel with two pipelines or SINGLE_PIPELINE for a channel with one pipeline.
    pub channel_class: std::option::Option<crate::model::ChannelClass>,
    /// The unique id of the channel.
    pub id: std::option::Option<String>,
    /// List of input attachments for channel.
    pub input_attachments: std::option::Option<std::vec::Vec<crate::model::InputAttachment>>,
    /// The log level being written to CloudWatch Logs.
    pub log_level: std::option::Option<crate::model::LogLevel>,
    /// The name of the channel. (user-mutable)
    pub name: std::option::Option<String>,
    /// The number of currently healthy pipelines.
    pub pipelines_running_count: std::option::Option<i32>,
    /// The Amazon Resource Name (ARN) of the role assumed when running the Channel.
    pub role_arn: std::option::Option<String>,
    pub state: std::option::Option<crate::model::ChannelState>,
    /// A collection of key-value pairs.
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, String>>,
}
/// See [`Channel`](crate::model::Channel)
pub mod channel {
    /// A builder for [`Channel`](crate::model::Channel)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) arn: std::option::Option<String>,
        pub(crate) channel_class: std::option::Option<crate::model::ChannelClass>,
        pub(crate) id: std::option::Option<String>,
        pub(crate) input_attachments: std::option::Option<std::vec::Vec<crate::model::InputAttachment>>,
        pub(crate) log_level: std::option::Option<crate::model::LogLevel>,
        pub(crate) name: std::option::Option<String>,
        pub(crate) pipelines_running_count: std::option::Option<i32>,
        pub(crate) role_arn: std::option::Option<String>,
        pub(crate) state: std::option::Option<crate::model::ChannelState>,
        pub(crate) tags: std::option::Option<std::collections::HashMap<std::string::String, String>>,
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
        pub fn channel_class(mut self, input: impl Into<crate::model::ChannelClass>) -> Self {
            self.channel_class = Some(input.into());
            self
        }
        pub fn set_channel_class(mut self, input: std::option::Option<crate::model::ChannelClass>) -> Self {
            self.channel_class = input;
            self
        }
        pub fn id(mut self, input: impl Into<String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<String>) -> Self {
            self.id = input;
            self
        }
        pub fn input_attachments(mut self, input: impl Into<crate::model::InputAttachment>) -> Self {
            let mut v = self.input_attachments.unwrap_or_default();
            v.push(input.into());
            self.input_attachments = Some(v);
            self
        }
        pub fn set_input_attachments(mut self, input: std::option::Option<std::vec::Vec<crate::model::InputAttachment>>) -> Self {
            self.input_attachments = input;
            self
        }
        pub fn log_level(mut self, input: impl Into<crate::model::LogLevel>) -> Self {
            self.log_level = Some(input.into());
            self
        }
        pub fn set_log_level(mut self, input: std::option::Option<crate::model::LogLevel>) -> Self {
            self.log_level = input;
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
        pub fn pipelines_running_count(mut self, input: i32) -> Self {
            self.pipelines_running_count = Some(input);
            self
        }
        pub fn set_pipelines_running_count(mut self, input: std::option::Option<i32>) -> Self {
            self.pipelines_running_count = input;
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
        pub fn state(mut self, input: impl Into<crate::model::ChannelState>) -> Self {
            self.state = Some(input.into());
            self
        }
        pub fn set_state(mut self, input: std::option::Option<crate::model::ChannelState>) -> Self {
            self.state = input;
            self
        }
        pub fn tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<String>,
        ) -> Self {
            let mut hash_map = self.tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.tags = Some(hash_map);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, String>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`Channel`](crate::model::Channel)
        pub fn build(self) -> crate::model::Channel {
            crate::model::Channel {
                arn: self.arn,
                channel_class: self.channel_class,
                id: self.id,
                input_attachments: self.input_attachments,
                log_level: self.log_level,
                name: self.name,
                pipelines_running_count: self.pipelines_running_count,
                role_arn: self.role_arn,
                state: self.state,
                tags: self.tags,
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

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct Input {
    /// The Unique ARN of the input (generated, immutable).
    pub arn: std::option::Option<String>,
    /// A list of channel IDs that that input is attached to (currently an input can only be attached to one channel).
    pub attached_channels: std::option::Option<std::vec::Vec<String>>,
    /// A list of the destinations of the input (PUSH-type).
    pub destinations: std::option::Option<std::vec::Vec<crate::model::InputDestination>>,
    /// The generated ID of the input (unique for user account, immutable).
    pub id: std::option::Option<String>,
    pub input_class: std::option::Option<crate::model::InputClass>,
    /// The user-assigned name (This is a mutable value).
    pub name: std::option::Option<String>,
    pub role_arn: std::option::Option<String>,
    /// A list of IDs for all the Input Security Groups attached to the input.
    pub security_groups: std::option::Option<std::vec::Vec<String>>,
    /// A list of the sources of the input (PULL-type).
    pub sources: std::option::Option<std::vec::Vec<crate::model::InputSource>>,
    pub state: std::option::Option<crate::model::InputState>,
    /// A collection of key-value pairs.
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, String>>,
    pub r#type: std::option::Option<crate::model::InputType>,
}
/// See [`Input`](crate::model::Input)
pub mod input {
    /// A builder for [`Input`](crate::model::Input)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) arn: std::option::Option<String>,
        pub(crate) attached_channels: std::option::Option<std::vec::Vec<String>>,
        pub(crate) destinations: std::option::Option<std::vec::Vec<crate::model::InputDestination>>,
        pub(crate) id: std::option::Option<String>,
        pub(crate) input_class: std::option::Option<crate::model::InputClass>,
        pub(crate) name: std::option::Option<String>,
        pub(crate) role_arn: std::option::Option<String>,
        pub(crate) security_groups: std::option::Option<std::vec::Vec<String>>,
        pub(crate) sources: std::option::Option<std::vec::Vec<crate::model::InputSource>>,
        pub(crate) state: std::option::Option<crate::model::InputState>,
        pub(crate) tags: std::option::Option<std::collections::HashMap<std::string::String, String>>,
        pub(crate) r#type: std::option::Option<crate::model::InputType>,
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
        pub fn attached_channels(mut self, input: impl Into<String>) -> Self {
            let mut v = self.attached_channels.unwrap_or_default();
            v.push(input.into());
            self.attached_channels = Some(v);
            self
        }
        pub fn set_attached_channels(mut self, input: std::option::Option<std::vec::Vec<String>>) -> Self {
            self.attached_channels = input;
            self
        }
        pub fn destinations(mut self, input: impl Into<crate::model::InputDestination>) -> Self {
            let mut v = self.destinations.unwrap_or_default();
            v.push(input.into());
            self.destinations = Some(v);
            self
        }
        pub fn set_destinations(mut self, input: std::option::Option<std::vec::Vec<crate::model::InputDestination>>) -> Self {
            self.destinations = input;
            self
        }
        pub fn id(mut self, input: impl Into<String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<String>) -> Self {
            self.id = input;
            self
        }
        pub fn input_class(mut self, input: impl Into<crate::model::InputClass>) -> Self {
            self.input_class = Some(input.into());
            self
        }
        pub fn set_input_class(mut self, input: std::option::Option<crate::model::InputClass>) -> Self {
            self.input_class = input;
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
        pub fn role_arn(mut self, input: impl Into<String>) -> Self {
            self.role_arn = Some(input.into());
            self
        }
        pub fn set_role_arn(mut self, input: std::option::Option<String>) -> Self {
            self.role_arn = input;
            self
        }
        pub fn security_groups(mut self, input: impl Into<String>) -> Self {
            let mut v = self.security_groups.unwrap_or_default();
            v.push(input.into());
            self.security_groups = Some(v);
            self
        }
        pub fn set_security_groups(mut self, input: std::option::Option<std::vec::Vec<String>>) -> Self {
            self.security_groups = input;
            self
        }
        pub fn sources(mut self, input: impl Into<crate::model::InputSource>) -> Self {
            let mut v = self.sources.unwrap_or_default();
            v.push(input.into());
            self.sources = Some(v);
            self
        }
        pub fn set_sources(mut self, input: std::option::Option<std::vec::Vec<crate::model::InputSource>>) -> Self {
            self.sources = input;
            self
        }
        pub fn state(mut self, input: impl Into<crate::model::InputState>) -> Self {
            self.state = Some(input.into());
            self
        }
        pub fn set_state(mut self, input: std::option::Option<crate::model::InputState>) -> Self {
            self.state = input;
            self
        }
        pub fn tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<String>,
        ) -> Self {
            let mut hash_map = self.tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.tags = Some(hash_map);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, String>>) -> Self {
            self.tags = input;
            self
        }
        pub fn r#type(mut self, input: impl Into<crate::model::InputType>) -> Self {
            self.r#type = Some(input.into());
            self
        }
        pub fn set_type(mut self, input: std::option::Option<crate::model::InputType>) -> Self {
            self.r#type = input;
            self
        }
        /// Consumes the builder and constructs a [`Input`](crate::model::Input)
        pub fn build(self) -> crate::model::Input {
            crate::model::Input {
                arn: self.arn,
                attached_channels: self.attached_channels,
                destinations: self.destinations,
                id: self.id,
                input_class: self.input_class,
                name: self.name,
                role_arn: self.role_arn,
                security_groups: self.security_groups,
                sources: self.sources,
                state: self.state,
                tags: self.tags,
                r#type: self.r#type,
            }
        }
    }
}
impl Input {
    /// Creates a new builder-style object to manufacture [`Input`](crate::model::Input)
    pub fn builder() -> crate::model::input::Builder {
        crate::model::input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct InputAttachment {
    /// User-specified name for the attachment. This is required if the user wants to use this input in an input switch action.
    pub input_attachment_name: std::option::Option<String>,
    /// The ID of the input
    pub input_id: std::option::Option<String>,
}
/// See [`InputAttachment`](crate::model::InputAttachment)
pub mod input_attachment {
    /// A builder for [`InputAttachment`](crate::model::InputAttachment)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) input_attachment_name: std::option::Option<String>,
        pub(crate) input_id: std::option::Option<String>,
    }
    impl Builder {
        pub fn input_attachment_name(mut self, input: impl Into<String>) -> Self {
            self.input_attachment_name = Some(input.into());
            self
        }
        pub fn set_input_attachment_name(mut self, input: std::option::Option<String>) -> Self {
            self.input_attachment_name = input;
            self
        }
        pub fn input_id(mut self, input: impl Into<String>) -> Self {
            self.input_id = Some(input.into());
            self
        }
        pub fn set_input_id(mut self, input: std::option::Option<String>) -> Self {
            self.input_id = input;
            self
        }
        /// Consumes the builder and constructs a [`InputAttachment`](crate::model::InputAttachment)
        pub fn build(self) -> crate::model::InputAttachment {
            crate::model::InputAttachment {
                input_attachment_name: self.input_attachment_name,
                input_id: self.input_id,
            }
        }
    }
}
impl InputAttachment {
    /// Creates a new builder-style object to manufacture [`InputAttachment`](crate::model::InputAttachment)
    pub fn builder() -> crate::model::input_attachment::Builder {
        crate::model::input_attachment::Builder::default()
    }
}

/// The settings for a PUSH type input.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct InputDestination {
    /// The system-generated static IP address of endpoint.
    /// It remains fixed for the lifetime of the input.
    pub ip: std::option::Option<String>,
    /// The port number for the input.
    pub port: std::option::Option<String>,
    /// This represents the endpoint that the customer stream will be
    /// pushed to.
    pub url: std::option::Option<String>,
}
/// See [`InputDestination`](crate::model::InputDestination)
pub mod input_destination {
    /// A builder for [`InputDestination`](crate::model::InputDestination)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) ip: std::option::Option<String>,
        pub(crate) port: std::option::Option<String>,
        pub(crate) url: std::option::Option<String>,
    }
    impl Builder {
        pub fn ip(mut self, input: impl Into<String>) -> Self {
            self.ip = Some(input.into());
            self
        }
        pub fn set_ip(mut self, input: std::option::Option<String>) -> Self {
            self.ip = input;
            self
        }
        pub fn port(mut self, input: impl Into<String>) -> Self {
            self.port = Some(input.into());
            self
        }
        pub fn set_port(mut self, input: std::option::Option<String>) -> Self {
            self.port = input;
            self
        }
        pub fn url(mut self, input: impl Into<String>) -> Self {
            self.url = Some(input.into());
            self
        }
        pub fn set_url(mut self, input: std::option::Option<String>) -> Self {
            self.url = input;
            self
        }
        /// Consumes the builder and constructs a [`InputDestination`](crate::model::InputDestination)
        pub fn build(self) -> crate::model::InputDestination {
            crate::model::InputDestination {
                ip: self.ip,
                port: self.port,
                url: self.url,
            }
        }
    }
}
impl InputDestination {
    /// Creates a new builder-style object to manufacture [`InputDestination`](crate::model::InputDestination)
    pub fn builder() -> crate::model::input_destination::Builder {
        crate::model::input_destination::Builder::default()
    }
}

/// Endpoint settings for a PUSH type input.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct InputDestinationRequest {
    /// A unique name for the location the RTMP stream is being pushed
    /// to.
    pub stream_name: std::option::Option<String>,
}
/// See [`InputDestinationRequest`](crate::model::InputDestinationRequest)
pub mod input_destination_request {
    /// A builder for [`InputDestinationRequest`](crate::model::InputDestinationRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) stream_name: std::option::Option<String>,
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
        /// Consumes the builder and constructs a [`InputDestinationRequest`](crate::model::InputDestinationRequest)
        pub fn build(self) -> crate::model::InputDestinationRequest {
            crate::model::InputDestinationRequest {
                stream_name: self.stream_name,
            }
        }
    }
}
impl InputDestinationRequest {
    /// Creates a new builder-style object to manufacture [`InputDestinationRequest`](crate::model::InputDestinationRequest)
    pub fn builder() -> crate::model::input_destination_request::Builder {
        crate::model::input_destination_request::Builder::default()
    }
}

/// The settings for a PULL type input.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct InputSource {
    /// The key used to extract the password from EC2 Parameter store.
    pub password_param: std::option::Option<String>,
    /// This represents the customer's source URL where stream is
    /// pulled from.
    pub url: std::option::Option<String>,
    /// The username for the input source.
    pub username: std::option::Option<String>,
}
/// See [`InputSource`](crate::model::InputSource)
pub mod input_source {
    /// A builder for [`InputSource`](crate::model::InputSource)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) password_param: std::option::Option<String>,
        pub(crate) url: std::option::Option<String>,
        pub(crate) username: std::option::Option<String>,
    }
    impl Builder {
        pub fn password_param(mut self, input: impl Into<String>) -> Self {
            self.password_param = Some(input.into());
            self
        }
        pub fn set_password_param(mut self, input: std::option::Option<String>) -> Self {
            self.password_param = input;
            self
        }
        pub fn url(mut self, input: impl Into<String>) -> Self {
            self.url = Some(input.into());
            self
        }
        pub fn set_url(mut self, input: std::option::Option<String>) -> Self {
            self.url = input;
            self
        }
        pub fn username(mut self, input: impl Into<String>) -> Self {
            self.username = Some(input.into());
            self
        }
        pub fn set_username(mut self, input: std::option::Option<String>) -> Self {
            self.username = input;
            self
        }
        /// Consumes the builder and constructs a [`InputSource`](crate::model::InputSource)
        pub fn build(self) -> crate::model::InputSource {
            crate::model::InputSource {
                password_param: self.password_param,
                url: self.url,
                username: self.username,
            }
        }
    }
}
impl InputSource {
    /// Creates a new builder-style object to manufacture [`InputSource`](crate::model::InputSource)
    pub fn builder() -> crate::model::input_source::Builder {
        crate::model::input_source::Builder::default()
    }
}

/// Settings for for a PULL type input.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct InputSourceRequest {
    pub password_param: std::option::Option<String>,
    pub url: std::option::Option<String>,
    pub username: std::option::Option<String>,
}
/// See [`InputSourceRequest`](crate::model::InputSourceRequest)
pub mod input_source_request {
    /// A builder for [`InputSourceRequest`](crate::model::InputSourceRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) password_param: std::option::Option<String>,
        pub(crate) url: std::option::Option<String>,
        pub(crate) username: std::option::Option<String>,
    }
    impl Builder {
        pub fn password_param(mut self, input: impl Into<String>) -> Self {
            self.password_param = Some(input.into());
            self
        }
        pub fn set_password_param(mut self, input: std::option::Option<String>) -> Self {
            self.password_param = input;
            self
        }
        pub fn url(mut self, input: impl Into<String>) -> Self {
            self.url = Some(input.into());
            self
        }
        pub fn set_url(mut self, input: std::option::Option<String>) -> Self {
            self.url = input;
            self
        }
        pub fn username(mut self, input: impl Into<String>) -> Self {
            self.username = Some(input.into());
            self
        }
        pub fn set_username(mut self, input: std::option::Option<String>) -> Self {
            self.username = input;
            self
        }
        /// Consumes the builder and constructs a [`InputSourceRequest`](crate::model::InputSourceRequest)
        pub fn build(self) -> crate::model::InputSourceRequest {
            crate::model::InputSourceRequest {
                password_param: self.password_param,
                url: self.url,
                username: self.username,
            }
        }
    }
}
impl InputSourceRequest {
    /// Creates a new builder-style object to manufacture [`InputSourceRequest`](crate::model::InputSourceRequest)
    pub fn builder() -> crate::model::input_source_request::Builder {
        crate::model::input_source_request::Builder::default()
    }
}

