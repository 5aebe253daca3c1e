/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_http::operation::BuildError;

/// See [`CreateChannelInput`](crate::input::CreateChannelInput)
pub mod create_channel_input {
    /// A builder for [`CreateChannelInput`](crate::input::CreateChannelInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) channel_class: std::option::Option<crate::model::ChannelClass>,
        pub(crate) input_attachments: std::option::Option<std::vec::Vec<crate::model::InputAttachment>>,
        pub(crate) log_level: std::option::Option<crate::model::LogLevel>,
        pub(crate) name: std::option::Option<String>,
        pub(crate) request_id: std::option::Option<String>,
        pub(crate) role_arn: std::option::Option<String>,
        pub(crate) tags: std::option::Option<std::collections::HashMap<std::string::String, String>>,
    }
    impl Builder {
        pub fn channel_class(mut self, input: impl Into<crate::model::ChannelClass>) -> Self {
            self.channel_class = Some(input.into());
            self
        }
        pub fn set_channel_class(mut self, input: std::option::Option<crate::model::ChannelClass>) -> Self {
            self.channel_class = input;
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
        pub fn request_id(mut self, input: impl Into<String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<String>) -> Self {
            self.request_id = input;
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
        /// Consumes the builder and constructs a [`CreateChannelInput`](crate::input::CreateChannelInput)
        pub fn build(self) -> std::result::Result<crate::input::CreateChannelInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CreateChannelInput {
                channel_class: self.channel_class,
                input_attachments: self.input_attachments,
                log_level: self.log_level,
                name: self.name,
                request_id: self.request_id,
                role_arn: self.role_arn,
                tags: self.tags,
            })
        }
    }
}
impl CreateChannelInput {
    /// Creates a new builder-style object to manufacture [`CreateChannelInput`](crate::input::CreateChannelInput)
    pub fn builder() -> crate::input::create_channel_input::Builder {
        crate::input::create_channel_input::Builder::default()
    }
}
impl CreateChannelInput {
    fn uri_base(&self, output: &mut String) -> Result<(), BuildError> {
        output.push_str("/prod/channels");
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("POST").uri(uri))
    }
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<smithy_http::operation::Operation<crate::operation::CreateChannel>, BuildError> {
        let request = smithy_http::operation::build_http_request(Some(self))?;
        crate::input::assemble_operation(
            request,
            config,
            crate::operation::CreateChannel::new(),
            "CreateChannel",
        )
    }
}
impl smithy_http::operation::BuildHttpRequest for CreateChannelInput {
    fn build_http_request(
        &self,
    ) -> Result<http::Request<smithy_http::body::SdkBody>, BuildError> {
        let builder = self.update_http_builder(http::request::Builder::new())?;
        let body = crate::operation_ser::serialize_operation_create_channel(self)?;
        crate::input::assemble(builder, body, true)
    }
}
/// A request to create a channel
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CreateChannelInput {
    /// The class for this channel. STANDARD for a channel with two pipelines or SINGLE_PIPELINE for a channel with one pipeline.
    pub channel_class: std::option::Option<crate::model::ChannelClass>,
    /// List of input attachments for channel.
    pub input_attachments: std::option::Option<std::vec::Vec<crate::model::InputAttachment>>,
    /// The log level to write to CloudWatch Logs.
    pub log_level: std::option::Option<crate::model::LogLevel>,
    /// Name of channel.
    pub name: std::option::Option<String>,
    /// Unique request ID to be specified. This is needed to prevent retries from
    /// creating multiple resources.
    pub request_id: std::option::Option<String>,
    /// An optional Amazon Resource Name (ARN) of the role to assume when running the Channel.
    pub role_arn: std::option::Option<String>,
    /// A collection of key-value pairs.
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, String>>,
}

/// See [`CreateInputInput`](crate::input::CreateInputInput)
pub mod create_input_input {
    /// A builder for [`CreateInputInput`](crate::input::CreateInputInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) destinations: std::option::Option<std::vec::Vec<crate::model::InputDestinationRequest>>,
        pub(crate) input_security_groups: std::option::Option<std::vec::Vec<String>>,
        pub(crate) name: std::option::Option<String>,
        pub(crate) request_id: std::option::Option<String>,
        pub(crate) role_arn: std::option::Option<String>,
        pub(crate) sources: std::option::Option<std::vec::Vec<crate::model::InputSourceRequest>>,
        pub(crate) tags: std::option::Option<std::collections::HashMap<std::string::String, String>>,
        pub(crate) r#type: std::option::Option<crate::model::InputType>,
    }
    impl Builder {
        pub fn destinations(mut self, input: impl Into<crate::model::InputDestinationRequest>) -> Self {
            let mut v = self.destinations.unwrap_or_default();
            v.push(input.into());
            self.destinations = Some(v);
            self
        }
        pub fn set_destinations(mut self, input: std::option::Option<std::vec::Vec<crate::model::InputDestinationRequest>>) -> Self {
            self.destinations = input;
            self
        }
        pub fn input_security_groups(mut self, input: impl Into<String>) -> Self {
            let mut v = self.input_security_groups.unwrap_or_default();
            v.push(input.into());
            self.input_security_groups = Some(v);
            self
        }
        pub fn set_input_security_groups(mut self, input: std::option::Option<std::vec::Vec<String>>) -> Self {
            self.input_security_groups = input;
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
        pub fn request_id(mut self, input: impl Into<String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<String>) -> Self {
            self.request_id = input;
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
        pub fn sources(mut self, input: impl Into<crate::model::InputSourceRequest>) -> Self {
            let mut v = self.sources.unwrap_or_default();
            v.push(input.into());
            self.sources = Some(v);
            self
        }
        pub fn set_sources(mut self, input: std::option::Option<std::vec::Vec<crate::model::InputSourceRequest>>) -> Self {
            self.sources = input;
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
        /// Consumes the builder and constructs a [`CreateInputInput`](crate::input::CreateInputInput)
        pub fn build(self) -> std::result::Result<crate::input::CreateInputInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CreateInputInput {
                destinations: self.destinations,
                input_security_groups: self.input_security_groups,
                name: self.name,
                request_id: self.request_id,
                role_arn: self.role_arn,
                sources: self.sources,
                tags: self.tags,
                r#type: self.r#type,
            })
        }
    }
}
impl CreateInputInput {
    /// Creates a new builder-style object to manufacture [`CreateInputInput`](crate::input::CreateInputInput)
    pub fn builder() -> crate::input::create_input_input::Builder {
        crate::input::create_input_input::Builder::default()
    }
}
impl CreateInputInput {
    fn uri_base(&self, output: &mut String) -> Result<(), BuildError> {
        output.push_str("/prod/inputs");
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("POST").uri(uri))
    }
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<smithy_http::operation::Operation<crate::operation::CreateInput>, BuildError> {
        let request = smithy_http::operation::build_http_request(Some(self))?;
        crate::input::assemble_operation(
            request,
            config,
            crate::operation::CreateInput::new(),
            "CreateInput",
        )
    }
}
impl smithy_http::operation::BuildHttpRequest for CreateInputInput {
    fn build_http_request(
        &self,
    ) -> Result<http::Request<smithy_http::body::SdkBody>, BuildError> {
        let builder = self.update_http_builder(http::request::Builder::new())?;
        let body = crate::operation_ser::serialize_operation_create_input(self)?;
        crate::input::assemble(builder, body, true)
    }
}
/// The name of the input
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CreateInputInput {
    /// Destination settings for PUSH type inputs.
    pub destinations: std::option::Option<std::vec::Vec<crate::model::InputDestinationRequest>>,
    /// A list of security groups referenced by IDs to attach to the input.
    pub input_security_groups: std::option::Option<std::vec::Vec<String>>,
    /// Name of the input.
    pub name: std::option::Option<String>,
    /// Unique identifier of the request to ensure the request is handled
    /// exactly once in case of retries.
    pub request_id: std::option::Option<String>,
    pub role_arn: std::option::Option<String>,
    /// The source URLs for a PULL-type input. Every PULL type input needs
    /// exactly two source URLs for redundancy.
    pub sources: std::option::Option<std::vec::Vec<crate::model::InputSourceRequest>>,
    /// A collection of key-value pairs.
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, String>>,
    pub r#type: std::option::Option<crate::model::InputType>,
}

/// See [`DeleteChannelInput`](crate::input::DeleteChannelInput)
pub mod delete_channel_input {
    /// A builder for [`DeleteChannelInput`](crate::input::DeleteChannelInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) channel_id: std::option::Option<String>,
    }
    impl Builder {
        pub fn channel_id(mut self, input: impl Into<String>) -> Self {
            self.channel_id = Some(input.into());
            self
        }
        pub fn set_channel_id(mut self, input: std::option::Option<String>) -> Self {
            self.channel_id = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteChannelInput`](crate::input::DeleteChannelInput)
        pub fn build(self) -> std::result::Result<crate::input::DeleteChannelInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DeleteChannelInput {
                channel_id: self.channel_id,
            })
        }
    }
}
impl DeleteChannelInput {
    /// Creates a new builder-style object to manufacture [`DeleteChannelInput`](crate::input::DeleteChannelInput)
    pub fn builder() -> crate::input::delete_channel_input::Builder {
        crate::input::delete_channel_input::Builder::default()
    }
}
impl DeleteChannelInput {
    fn uri_base(&self, output: &mut String) -> Result<(), BuildError> {
        let input_channel_id = self.channel_id.as_deref().unwrap_or_default();
        let channel_id = smithy_http::label::fmt_string(input_channel_id);
        if channel_id.is_empty() {
            return Err(BuildError::MissingField {
                field: "channel_id",
                details: "cannot be empty or unset",
            });
        }
        output.push_str(&format!(
            "/prod/channels/{channelId}",
            channelId = channel_id
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("DELETE").uri(uri))
    }
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<smithy_http::operation::Operation<crate::operation::DeleteChannel>, BuildError> {
        let request = smithy_http::operation::build_http_request(Some(self))?;
        crate::input::assemble_operation(
            request,
            config,
            crate::operation::DeleteChannel::new(),
            "DeleteChannel",
        )
    }
}
impl smithy_http::operation::BuildHttpRequest for DeleteChannelInput {
    fn build_http_request(
        &self,
    ) -> Result<http::Request<smithy_http::body::SdkBody>, BuildError> {
        let builder = self.update_http_builder(http::request::Builder::new())?;
        crate::input::assemble(builder, smithy_http::body::SdkBody::empty(), false)
    }
}
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DeleteChannelInput {
    /// Unique ID of the channel.
    pub channel_id: std::option::Option<String>,
}

/// See [`DeleteInputInput`](crate::input::DeleteInputInput)
pub mod delete_input_input {
    /// A builder for [`DeleteInputInput`](crate::input::DeleteInputInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) input_id: std::option::Option<String>,
    }
    impl Builder {
        pub fn input_id(mut self, input: impl Into<String>) -> Self {
            self.input_id = Some(input.into());
            self
        }
        pub fn set_input_id(mut self, input: std::option::Option<String>) -> Self {
            self.input_id = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteInputInput`](crate::input::DeleteInputInput)
        pub fn build(self) -> std::result::Result<crate::input::DeleteInputInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DeleteInputInput {
                input_id: self.input_id,
            })
        }
    }
}
impl DeleteInputInput {
    /// Creates a new builder-style object to manufacture [`DeleteInputInput`](crate::input::DeleteInputInput)
    pub fn builder() -> crate::input::delete_input_input::Builder {
        crate::input::delete_input_input::Builder::default()
    }
}
impl DeleteInputInput {
    fn uri_base(&self, output: &mut String) -> Result<(), BuildError> {
        let input_input_id = self.input_id.as_deref().unwrap_or_default();
        let input_id = smithy_http::label::fmt_string(input_input_id);
        if input_id.is_empty() {
            return Err(BuildError::MissingField {
                field: "input_id",
                details: "cannot be empty or unset",
            });
        }
        output.push_str(&format!(
            "/prod/inputs/{inputId}",
            inputId = input_id
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("DELETE").uri(uri))
    }
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<smithy_http::operation::Operation<crate::operation::DeleteInput>, BuildError> {
        let request = smithy_http::operation::build_http_request(Some(self))?;
        crate::input::assemble_operation(
            request,
            config,
            crate::operation::DeleteInput::new(),
            "DeleteInput",
        )
    }
}
impl smithy_http::operation::BuildHttpRequest for DeleteInputInput {
    fn build_http_request(
        &self,
    ) -> Result<http::Request<smithy_http::body::SdkBody>, BuildError> {
        let builder = self.update_http_builder(http::request::Builder::new())?;
        crate::input::assemble(builder, smithy_http::body::SdkBody::empty(), false)
    }
}
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DeleteInputInput {
    /// Unique ID of the input
    pub input_id: std::option::Option<String>,
}

/// See [`DescribeChannelInput`](crate::input::DescribeChannelInput)
pub mod describe_channel_input {
    /// A builder for [`DescribeChannelInput`](crate::input::DescribeChannelInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) channel_id: std::option::Option<String>,
    }
    impl Builder {
        pub fn channel_id(mut self, input: impl Into<String>) -> Self {
            self.channel_id = Some(input.into());
            self
        }
        pub fn set_channel_id(mut self, input: std::option::Option<String>) -> Self {
            self.channel_id = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeChannelInput`](crate::input::DescribeChannelInput)
        pub fn build(self) -> std::result::Result<crate::input::DescribeChannelInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeChannelInput {
                channel_id: self.channel_id,
            })
        }
    }
}
impl DescribeChannelInput {
    /// Creates a new builder-style object to manufacture [`DescribeChannelInput`](crate::input::DescribeChannelInput)
    pub fn builder() -> crate::input::describe_channel_input::Builder {
        crate::input::describe_channel_input::Builder::default()
    }
}
impl DescribeChannelInput {
    fn uri_base(&self, output: &mut String) -> Result<(), BuildError> {
        let input_channel_id = self.channel_id.as_deref().unwrap_or_default();
        let channel_id = smithy_http::label::fmt_string(input_channel_id);
        if channel_id.is_empty() {
            return Err(BuildError::MissingField {
                field: "channel_id",
                details: "cannot be empty or unset",
            });
        }
        output.push_str(&format!(
            "/prod/channels/{channelId}",
            channelId = channel_id
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("GET").uri(uri))
    }
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<smithy_http::operation::Operation<crate::operation::DescribeChannel>, BuildError> {
        let request = smithy_http::operation::build_http_request(Some(self))?;
        crate::input::assemble_operation(
            request,
            config,
            crate::operation::DescribeChannel::new(),
            "DescribeChannel",
        )
    }
}
impl smithy_http::operation::BuildHttpRequest for DescribeChannelInput {
    fn build_http_request(
        &self,
    ) -> Result<http::Request<smithy_http::body::SdkBody>, BuildError> {
        let builder = self.update_http_builder(http::request::Builder::new())?;
        crate::input::assemble(builder, smithy_http::body::SdkBody::empty(), false)
    }
}
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DescribeChannelInput {
    /// channel ID
    pub channel_id: std::option::Option<String>,
}

/// See [`DescribeInputInput`](crate::input::DescribeInputInput)
pub mod describe_input_input {
    /// A builder for [`DescribeInputInput`](crate::input::DescribeInputInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) input_id: std::option::Option<String>,
    }
    impl Builder {
        pub fn input_id(mut self, input: impl Into<String>) -> Self {
            self.input_id = Some(input.into());
            self
        }
        pub fn set_input_id(mut self, input: std::option::Option<String>) -> Self {
            self.input_id = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeInputInput`](crate::input::DescribeInputInput)
        pub fn build(self) -> std::result::Result<crate::input::DescribeInputInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeInputInput {
                input_id: self.input_id,
            })
        }
    }
}
impl DescribeInputInput {
    /// Creates a new builder-style object to manufacture [`DescribeInputInput`](crate::input::DescribeInputInput)
    pub fn builder() -> crate::input::describe_input_input::Builder {
        crate::input::describe_input_input::Builder::default()
    }
}
impl DescribeInputInput {
    fn uri_base(&self, output: &mut String) -> Result<(), BuildError> {
        let input_input_id = self.input_id.as_deref().unwrap_or_default();
        let input_id = smithy_http::label::fmt_string(input_input_id);
        if input_id.is_empty() {
            return Err(BuildError::MissingField {
                field: "input_id",
                details: "cannot be empty or unset",
            });
        }
        output.push_str(&format!(
            "/prod/inputs/{inputId}",
            inputId = input_id
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("GET").uri(uri))
    }
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<smithy_http::operation::Operation<crate::operation::DescribeInput>, BuildError> {
        let request = smithy_http::operation::build_http_request(Some(self))?;
        crate::input::assemble_operation(
            request,
            config,
            crate::operation::DescribeInput::new(),
            "DescribeInput",
        )
    }
}
impl smithy_http::operation::BuildHttpRequest for DescribeInputInput {
    fn build_http_request(
        &self,
    ) -> Result<http::Request<smithy_http::body::SdkBody>, BuildError> {
        let builder = self.update_http_builder(http::request::Builder::new())?;
        crate::input::assemble(builder, smithy_http::body::SdkBody::empty(), false)
    }
}
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DescribeInputInput {
    /// Unique ID of the input
    pub input_id: std::option::Option<String>,
}

/// See [`ListInputsInput`](crate::input::ListInputsInput)
pub mod list_inputs_input {
    /// A builder for [`ListInputsInput`](crate::input::ListInputsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) max_results: std::option::Option<i32>,
        pub(crate) next_token: std::option::Option<String>,
    }
    impl Builder {
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
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
        /// Consumes the builder and constructs a [`ListInputsInput`](crate::input::ListInputsInput)
        pub fn build(self) -> std::result::Result<crate::input::ListInputsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListInputsInput {
                max_results: self.max_results,
                next_token: self.next_token,
            })
        }
    }
}
impl ListInputsInput {
    /// Creates a new builder-style object to manufacture [`ListInputsInput`](crate::input::ListInputsInput)
    pub fn builder() -> crate::input::list_inputs_input::Builder {
        crate::input::list_inputs_input::Builder::default()
    }
}
impl ListInputsInput {
    fn uri_base(&self, output: &mut String) -> Result<(), BuildError> {
        output.push_str("/prod/inputs");
        Ok(())
    }
    fn uri_query(&self, output: &mut String) -> Result<(), BuildError> {
        let mut query = smithy_http::query::Writer::new(output);
        if let Some(inner_1) = &self.max_results {
            query.push_kv("maxResults", &smithy_http::query::fmt_default(&inner_1));
        }
        if let Some(inner_2) = &self.next_token {
            query.push_kv("nextToken", &smithy_http::query::fmt_string(&inner_2));
        }
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri)?;
        self.uri_query(&mut uri)?;
        Ok(builder.method("GET").uri(uri))
    }
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<smithy_http::operation::Operation<crate::operation::ListInputs>, BuildError> {
        let request = smithy_http::operation::build_http_request(Some(self))?;
        crate::input::assemble_operation(
            request,
            config,
            crate::operation::ListInputs::new(),
            "ListInputs",
        )
    }
}
impl smithy_http::operation::BuildHttpRequest for ListInputsInput {
    fn build_http_request(
        &self,
    ) -> Result<http::Request<smithy_http::body::SdkBody>, BuildError> {
        let builder = self.update_http_builder(http::request::Builder::new())?;
        crate::input::assemble(builder, smithy_http::body::SdkBody::empty(), false)
    }
}
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListInputsInput {
    pub max_results: std::option::Option<i32>,
    pub next_token: std::option::Option<String>,
}

/// See [`StartChannelInput`](crate::input::StartChannelInput)
pub mod start_channel_input {
    /// A builder for [`StartChannelInput`](crate::input::StartChannelInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) channel_id: std::option::Option<String>,
    }
    impl Builder {
        pub fn channel_id(mut self, input: impl Into<String>) -> Self {
            self.channel_id = Some(input.into());
            self
        }
        pub fn set_channel_id(mut self, input: std::option::Option<String>) -> Self {
            self.channel_id = input;
            self
        }
        /// Consumes the builder and constructs a [`StartChannelInput`](crate::input::StartChannelInput)
        pub fn build(self) -> std::result::Result<crate::input::StartChannelInput, smithy_http::operation::BuildError> {
            Ok(crate::input::StartChannelInput {
                channel_id: self.channel_id,
            })
        }
    }
}
impl StartChannelInput {
    /// Creates a new builder-style object to manufacture [`StartChannelInput`](crate::input::StartChannelInput)
    pub fn builder() -> crate::input::start_channel_input::Builder {
        crate::input::start_channel_input::Builder::default()
    }
}
impl StartChannelInput {
    fn uri_base(&self, output: &mut String) -> Result<(), BuildError> {
        let input_channel_id = self.channel_id.as_deref().unwrap_or_default();
        let channel_id = smithy_http::label::fmt_string(input_channel_id);
        if channel_id.is_empty() {
            return Err(BuildError::MissingField {
                field: "channel_id",
                details: "cannot be empty or unset",
            });
        }
        output.push_str(&format!(
            "/prod/channels/{channelId}/start",
            channelId = channel_id
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("POST").uri(uri))
    }
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<smithy_http::operation::Operation<crate::operation::StartChannel>, BuildError> {
        let request = smithy_http::operation::build_http_request(Some(self))?;
        crate::input::assemble_operation(
            request,
            config,
            crate::operation::StartChannel::new(),
            "StartChannel",
        )
    }
}
impl smithy_http::operation::BuildHttpRequest for StartChannelInput {
    fn build_http_request(
        &self,
    ) -> Result<http::Request<smithy_http::body::SdkBody>, BuildError> {
        let builder = self.update_http_builder(http::request::Builder::new())?;
        crate::input::assemble(builder, smithy_http::body::SdkBody::empty(), false)
    }
}
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct StartChannelInput {
    /// A request to start a channel
    pub channel_id: std::option::Option<String>,
}

/// See [`StopChannelInput`](crate::input::StopChannelInput)
pub mod stop_channel_input {
    /// A builder for [`StopChannelInput`](crate::input::StopChannelInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) channel_id: std::option::Option<String>,
    }
    impl Builder {
        pub fn channel_id(mut self, input: impl Into<String>) -> Self {
            self.channel_id = Some(input.into());
            self
        }
        pub fn set_channel_id(mut self, input: std::option::Option<String>) -> Self {
            self.channel_id = input;
            self
        }
        /// Consumes the builder and constructs a [`StopChannelInput`](crate::input::StopChannelInput)
        pub fn build(self) -> std::result::Result<crate::input::StopChannelInput, smithy_http::operation::BuildError> {
            Ok(crate::input::StopChannelInput {
                channel_id: self.channel_id,
            })
        }
    }
}
impl StopChannelInput {
    /// Creates a new builder-style object to manufacture [`StopChannelInput`](crate::input::StopChannelInput)
    pub fn builder() -> crate::input::stop_channel_input::Builder {
        crate::input::stop_channel_input::Builder::default()
    }
}
impl StopChannelInput {
    fn uri_base(&self, output: &mut String) -> Result<(), BuildError> {
        let input_channel_id = self.channel_id.as_deref().unwrap_or_default();
        let channel_id = smithy_http::label::fmt_string(input_channel_id);
        if channel_id.is_empty() {
            return Err(BuildError::MissingField {
                field: "channel_id",
                details: "cannot be empty or unset",
            });
        }
        output.push_str(&format!(
            "/prod/channels/{channelId}/stop",
            channelId = channel_id
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("POST").uri(uri))
    }
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<smithy_http::operation::Operation<crate::operation::StopChannel>, BuildError> {
        let request = smithy_http::operation::build_http_request(Some(self))?;
        crate::input::assemble_operation(
            request,
            config,
            crate::operation::StopChannel::new(),
            "StopChannel",
        )
    }
}
impl smithy_http::operation::BuildHttpRequest for StopChannelInput {
    fn build_http_request(
        &self,
    ) -> Result<http::Request<smithy_http::body::SdkBody>, BuildError> {
        let builder = self.update_http_builder(http::request::Builder::new())?;
        crate::input::assemble(builder, smithy_http::body::SdkBody::empty(), false)
    }
}
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct StopChannelInput {
    /// A request to stop a running channel
    pub channel_id: std::option::Option<String>,
}

/// See [`UpdateChannelInput`](crate::input::UpdateChannelInput)
pub mod update_channel_input {
    /// A builder for [`UpdateChannelInput`](crate::input::UpdateChannelInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) channel_id: std::option::Option<String>,
        pub(crate) input_attachments: std::option::Option<std::vec::Vec<crate::model::InputAttachment>>,
        pub(crate) log_level: std::option::Option<crate::model::LogLevel>,
        pub(crate) name: std::option::Option<String>,
        pub(crate) role_arn: std::option::Option<String>,
    }
    impl Builder {
        pub fn channel_id(mut self, input: impl Into<String>) -> Self {
            self.channel_id = Some(input.into());
            self
        }
        pub fn set_channel_id(mut self, input: std::option::Option<String>) -> Self {
            self.channel_id = input;
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
        pub fn role_arn(mut self, input: impl Into<String>) -> Self {
            self.role_arn = Some(input.into());
            self
        }
        pub fn set_role_arn(mut self, input: std::option::Option<String>) -> Self {
            self.role_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateChannelInput`](crate::input::UpdateChannelInput)
        pub fn build(self) -> std::result::Result<crate::input::UpdateChannelInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UpdateChannelInput {
                channel_id: self.channel_id,
                input_attachments: self.input_attachments,
                log_level: self.log_level,
                name: self.name,
                role_arn: self.role_arn,
            })
        }
    }
}
impl UpdateChannelInput {
    /// Creates a new builder-style object to manufacture [`UpdateChannelInput`](crate::input::UpdateChannelInput)
    pub fn builder() -> crate::input::update_channel_input::Builder {
        crate::input::update_channel_input::Builder::default()
    }
}
impl UpdateChannelInput {
    fn uri_base(&self, output: &mut String) -> Result<(), BuildError> {
        let input_channel_id = self.channel_id.as_deref().unwrap_or_default();
        let channel_id = smithy_http::label::fmt_string(input_channel_id);
        if channel_id.is_empty() {
            return Err(BuildError::MissingField {
                field: "channel_id",
                details: "cannot be empty or unset",
            });
        }
        output.push_str(&format!(
            "/prod/channels/{channelId}",
            channelId = channel_id
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("PUT").uri(uri))
    }
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<smithy_http::operation::Operation<crate::operation::UpdateChannel>, BuildError> {
        let request = smithy_http::operation::build_http_request(Some(self))?;
        crate::input::assemble_operation(
            request,
            config,
            crate::operation::UpdateChannel::new(),
            "UpdateChannel",
        )
    }
}
impl smithy_http::operation::BuildHttpRequest for UpdateChannelInput {
    fn build_http_request(
        &self,
    ) -> Result<http::Request<smithy_http::body::SdkBody>, BuildError> {
        let builder = self.update_http_builder(http::request::Builder::new())?;
        let body = crate::operation_ser::serialize_operation_update_channel(self)?;
        crate::input::assemble(builder, body, true)
    }
}
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct UpdateChannelInput {
    /// channel ID
    pub channel_id: std::option::Option<String>,
    pub input_attachments: std::option::Option<std::vec::Vec<crate::model::InputAttachment>>,
    /// The log level to write to CloudWatch Logs.
    pub log_level: std::option::Option<crate::model::LogLevel>,
    /// The name of the channel.
    pub name: std::option::Option<String>,
    /// An optional Amazon Resource Name (ARN) of the role to assume when running the Channel. If you do not specify this on an update call but the role was previously set that role will be removed.
    pub role_arn: std::option::Option<String>,
}

/// Finishes a request: the body is attached with its `Content-Length`, and JSON bodies get the
/// protocol content type unless the caller already set one.
pub(crate) fn assemble(
    mut builder: http::request::Builder,
    body: smithy_http::body::SdkBody,
    json_body: bool,
) -> Result<http::Request<smithy_http::body::SdkBody>, BuildError> {
    if json_body {
        builder = smithy_http::header::set_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            "application/x-amz-json-1.1",
        );
    }
    builder = smithy_http::header::set_header_if_absent(
        builder,
        http::header::CONTENT_LENGTH,
        body.content_length(),
    );
    builder.body(body).map_err(|err| BuildError::Other(err.into()))
}

pub(crate) fn assemble_operation<H>(
    request: http::Request<smithy_http::body::SdkBody>,
    config: &crate::config::Config,
    handler: H,
    operation_name: &'static str,
) -> Result<smithy_http::operation::Operation<H>, BuildError> {
    let mut request = smithy_http::operation::Request::new(request);
    config
        .endpoint()?
        .set_endpoint(request.http_mut().uri_mut())?;
    tracing::debug!(operation = operation_name, uri = %request.http().uri(), "assembled operation");
    Ok(
        smithy_http::operation::Operation::new(request, handler).with_metadata(
            smithy_http::operation::Metadata::new(operation_name, crate::config::SERVICE_NAME),
        ),
    )
}

#[cfg(test)]
mod test {
    use crate::config::Config;
    use crate::Region;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn assembled_operation_is_logged() {
        let config = Config::builder().region(Region::new("us-west-2")).build();
        let input = crate::input::DescribeInputInput::builder()
            .input_id("abc")
            .build()
            .unwrap();
        let operation = input.make_operation(&config).unwrap();
        assert_eq!(operation.metadata().unwrap().service(), "medialive");
        assert!(logs_contain("assembled operation"));
    }
}
