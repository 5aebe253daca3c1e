/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CreateChannelOutput {
    pub channel: std::option::Option<crate::model::Channel>,
}
/// See [`CreateChannelOutput`](crate::output::CreateChannelOutput)
pub mod create_channel_output {
    /// A builder for [`CreateChannelOutput`](crate::output::CreateChannelOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) channel: std::option::Option<crate::model::Channel>,
    }
    impl Builder {
        pub fn channel(mut self, input: impl Into<crate::model::Channel>) -> Self {
            self.channel = Some(input.into());
            self
        }
        pub fn set_channel(mut self, input: std::option::Option<crate::model::Channel>) -> Self {
            self.channel = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateChannelOutput`](crate::output::CreateChannelOutput)
        pub fn build(self) -> crate::output::CreateChannelOutput {
            crate::output::CreateChannelOutput {
                channel: self.channel,
            }
        }
    }
}
impl CreateChannelOutput {
    /// Creates a new builder-style object to manufacture [`CreateChannelOutput`](crate::output::CreateChannelOutput)
    pub fn builder() -> crate::output::create_channel_output::Builder {
        crate::output::create_channel_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CreateInputOutput {
    pub input: std::option::Option<crate::model::Input>,
}
/// See [`CreateInputOutput`](crate::output::CreateInputOutput)
pub mod create_input_output {
    /// A builder for [`CreateInputOutput`](crate::output::CreateInputOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) input: std::option::Option<crate::model::Input>,
    }
    impl Builder {
        pub fn input(mut self, input: impl Into<crate::model::Input>) -> Self {
            self.input = Some(input.into());
            self
        }
        pub fn set_input(mut self, input: std::option::Option<crate::model::Input>) -> Self {
            self.input = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateInputOutput`](crate::output::CreateInputOutput)
        pub fn build(self) -> crate::output::CreateInputOutput {
            crate::output::CreateInputOutput {
                input: self.input,
            }
        }
    }
}
impl CreateInputOutput {
    /// Creates a new builder-style object to manufacture [`CreateInputOutput`](crate::output::CreateInputOutput)
    pub fn builder() -> crate::output::create_input_output::Builder {
        crate::output::create_input_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DeleteChannelOutput {
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
/// See [`DeleteChannelOutput`](crate::output::DeleteChannelOutput)
pub mod delete_channel_output {
    /// A builder for [`DeleteChannelOutput`](crate::output::DeleteChannelOutput)
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
        /// Consumes the builder and constructs a [`DeleteChannelOutput`](crate::output::DeleteChannelOutput)
        pub fn build(self) -> crate::output::DeleteChannelOutput {
            crate::output::DeleteChannelOutput {
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
impl DeleteChannelOutput {
    /// Creates a new builder-style object to manufacture [`DeleteChannelOutput`](crate::output::DeleteChannelOutput)
    pub fn builder() -> crate::output::delete_channel_output::Builder {
        crate::output::delete_channel_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DeleteInputOutput {
}
/// See [`DeleteInputOutput`](crate::output::DeleteInputOutput)
pub mod delete_input_output {
    /// A builder for [`DeleteInputOutput`](crate::output::DeleteInputOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`DeleteInputOutput`](crate::output::DeleteInputOutput)
        pub fn build(self) -> crate::output::DeleteInputOutput {
            crate::output::DeleteInputOutput {
            }
        }
    }
}
impl DeleteInputOutput {
    /// Creates a new builder-style object to manufacture [`DeleteInputOutput`](crate::output::DeleteInputOutput)
    pub fn builder() -> crate::output::delete_input_output::Builder {
        crate::output::delete_input_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DescribeChannelOutput {
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
/// See [`DescribeChannelOutput`](crate::output::DescribeChannelOutput)
pub mod describe_channel_output {
    /// A builder for [`DescribeChannelOutput`](crate::output::DescribeChannelOutput)
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
        /// Consumes the builder and constructs a [`DescribeChannelOutput`](crate::output::DescribeChannelOutput)
        pub fn build(self) -> crate::output::DescribeChannelOutput {
            crate::output::DescribeChannelOutput {
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
impl DescribeChannelOutput {
    /// Creates a new builder-style object to manufacture [`DescribeChannelOutput`](crate::output::DescribeChannelOutput)
    pub fn builder() -> crate::output::describe_channel_output::Builder {
        crate::output::describe_channel_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DescribeInputOutput {
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
/// See [`DescribeInputOutput`](crate::output::DescribeInputOutput)
pub mod describe_input_output {
    /// A builder for [`DescribeInputOutput`](crate::output::DescribeInputOutput)
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
        /// Consumes the builder and constructs a [`DescribeInputOutput`](crate::output::DescribeInputOutput)
        pub fn build(self) -> crate::output::DescribeInputOutput {
            crate::output::DescribeInputOutput {
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
impl DescribeInputOutput {
    /// Creates a new builder-style object to manufacture [`DescribeInputOutput`](crate::output::DescribeInputOutput)
    pub fn builder() -> crate::output::describe_input_output::Builder {
        crate::output::describe_input_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListInputsOutput {
    pub inputs: std::option::Option<std::vec::Vec<crate::model::Input>>,
    pub next_token: std::option::Option<String>,
}
/// See [`ListInputsOutput`](crate::output::ListInputsOutput)
pub mod list_inputs_output {
    /// A builder for [`ListInputsOutput`](crate::output::ListInputsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) inputs: std::option::Option<std::vec::Vec<crate::model::Input>>,
        pub(crate) next_token: std::option::Option<String>,
    }
    impl Builder {
        pub fn inputs(mut self, input: impl Into<crate::model::Input>) -> Self {
            let mut v = self.inputs.unwrap_or_default();
            v.push(input.into());
            self.inputs = Some(v);
            self
        }
        pub fn set_inputs(mut self, input: std::option::Option<std::vec::Vec<crate::model::Input>>) -> Self {
            self.inputs = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`ListInputsOutput`](crate::output::ListInputsOutput)
        pub fn build(self) -> crate::output::ListInputsOutput {
            crate::output::ListInputsOutput {
                inputs: self.inputs,
                next_token: self.next_token,
            }
        }
    }
}
impl ListInputsOutput {
    /// Creates a new builder-style object to manufacture [`ListInputsOutput`](crate::output::ListInputsOutput)
    pub fn builder() -> crate::output::list_inputs_output::Builder {
        crate::output::list_inputs_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct StartChannelOutput {
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
/// See [`StartChannelOutput`](crate::output::StartChannelOutput)
pub mod start_channel_output {
    /// A builder for [`StartChannelOutput`](crate::output::StartChannelOutput)
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
        /// Consumes the builder and constructs a [`StartChannelOutput`](crate::output::StartChannelOutput)
        pub fn build(self) -> crate::output::StartChannelOutput {
            crate::output::StartChannelOutput {
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
impl StartChannelOutput {
    /// Creates a new builder-style object to manufacture [`StartChannelOutput`](crate::output::StartChannelOutput)
    pub fn builder() -> crate::output::start_channel_output::Builder {
        crate::output::start_channel_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct StopChannelOutput {
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
/// See [`StopChannelOutput`](crate::output::StopChannelOutput)
pub mod stop_channel_output {
    /// A builder for [`StopChannelOutput`](crate::output::StopChannelOutput)
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
        /// Consumes the builder and constructs a [`StopChannelOutput`](crate::output::StopChannelOutput)
        pub fn build(self) -> crate::output::StopChannelOutput {
            crate::output::StopChannelOutput {
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
impl StopChannelOutput {
    /// Creates a new builder-style object to manufacture [`StopChannelOutput`](crate::output::StopChannelOutput)
    pub fn builder() -> crate::output::stop_channel_output::Builder {
        crate::output::stop_channel_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct UpdateChannelOutput {
    pub channel: std::option::Option<crate::model::Channel>,
}
/// See [`UpdateChannelOutput`](crate::output::UpdateChannelOutput)
pub mod update_channel_output {
    /// A builder for [`UpdateChannelOutput`](crate::output::UpdateChannelOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) channel: std::option::Option<crate::model::Channel>,
    }
    impl Builder {
        pub fn channel(mut self, input: impl Into<crate::model::Channel>) -> Self {
            self.channel = Some(input.into());
            self
        }
        pub fn set_channel(mut self, input: std::option::Option<crate::model::Channel>) -> Self {
            self.channel = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateChannelOutput`](crate::output::UpdateChannelOutput)
        pub fn build(self) -> crate::output::UpdateChannelOutput {
            crate::output::UpdateChannelOutput {
                channel: self.channel,
            }
        }
    }
}
impl UpdateChannelOutput {
    /// Creates a new builder-style object to manufacture [`UpdateChannelOutput`](crate::output::UpdateChannelOutput)
    pub fn builder() -> crate::output::update_channel_output::Builder {
        crate::output::update_channel_output::Builder::default()
    }
}

