/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_http::operation::BuildError;

/// See [`CreateChannelInput`](crate::input::CreateChannelInput)
pub mod create_channel_input {
    /// A builder for [`CreateChannelInput`](crate::input::CreateChannelInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq)]
    pub struct Builder {
        pub(crate) app_instance_arn: std::option::Option<String>,
        pub(crate) name: std::option::Option<String>,
        pub(crate) mode: std::option::Option<crate::model::ChannelMode>,
        pub(crate) privacy: std::option::Option<crate::model::ChannelPrivacy>,
        pub(crate) metadata: std::option::Option<String>,
        pub(crate) client_request_token: std::option::Option<String>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        pub(crate) chime_bearer: std::option::Option<String>,
    }
    impl Builder {
        pub fn app_instance_arn(mut self, input: impl Into<String>) -> Self {
            self.app_instance_arn = Some(input.into());
            self
        }
        pub fn set_app_instance_arn(mut self, input: std::option::Option<String>) -> Self {
            self.app_instance_arn = input;
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
        pub fn client_request_token(mut self, input: impl Into<String>) -> Self {
            self.client_request_token = Some(input.into());
            self
        }
        pub fn set_client_request_token(mut self, input: std::option::Option<String>) -> Self {
            self.client_request_token = input;
            self
        }
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        pub fn chime_bearer(mut self, input: impl Into<String>) -> Self {
            self.chime_bearer = Some(input.into());
            self
        }
        pub fn set_chime_bearer(mut self, input: std::option::Option<String>) -> Self {
            self.chime_bearer = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateChannelInput`](crate::input::CreateChannelInput)
        pub fn build(self) -> std::result::Result<crate::input::CreateChannelInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CreateChannelInput {
                app_instance_arn: self.app_instance_arn,
                name: self.name,
                mode: self.mode,
                privacy: self.privacy,
                metadata: self.metadata,
                client_request_token: self.client_request_token,
                tags: self.tags,
                chime_bearer: self.chime_bearer,
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
        output.push_str("/channels");
        Ok(())
    }
    fn add_headers(
        &self,
        mut builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        if let Some(inner_1) = &self.chime_bearer {
            if !inner_1.is_empty() {
                let header_value = http::header::HeaderValue::from_str(inner_1).map_err(|err| {
                    BuildError::InvalidField {
                        field: "chime_bearer",
                        details: format!(
                            "`{}` cannot be used as a header value: {}",
                            inner_1, err
                        ),
                    }
                })?;
                builder = builder.header("x-amz-chime-bearer", header_value);
            }
        }
        Ok(builder)
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri)?;
        let builder = self.add_headers(builder)?;
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
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct CreateChannelInput {
    /// The ARN of the channel request.
    pub app_instance_arn: std::option::Option<String>,
    /// The name of the channel.
    pub name: std::option::Option<String>,
    /// The channel mode: <code>UNRESTRICTED</code> or <code>RESTRICTED</code>.
    pub mode: std::option::Option<crate::model::ChannelMode>,
    /// The channel's privacy level: <code>PUBLIC</code> or <code>PRIVATE</code>.
    pub privacy: std::option::Option<crate::model::ChannelPrivacy>,
    /// The metadata of the creation request. Limited to 1KB and UTF-8.
    pub metadata: std::option::Option<String>,
    /// The client token for the request. An <code>Idempotency</code> token.
    pub client_request_token: std::option::Option<String>,
    /// The tags for the creation request.
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    /// The <code>AppInstanceUserArn</code> of the user that makes the API call.
    pub chime_bearer: std::option::Option<String>,
}
impl std::fmt::Debug for CreateChannelInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CreateChannelInput");
        formatter.field("app_instance_arn", &self.app_instance_arn);
        formatter.field("name", &"*** Sensitive Data Redacted ***");
        formatter.field("mode", &self.mode);
        formatter.field("privacy", &self.privacy);
        formatter.field("metadata", &"*** Sensitive Data Redacted ***");
        formatter.field("client_request_token", &"*** Sensitive Data Redacted ***");
        formatter.field("tags", &self.tags);
        formatter.field("chime_bearer", &self.chime_bearer);
        formatter.finish()
    }
}

/// See [`CreateChannelBanInput`](crate::input::CreateChannelBanInput)
pub mod create_channel_ban_input {
    /// A builder for [`CreateChannelBanInput`](crate::input::CreateChannelBanInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) channel_arn: std::option::Option<String>,
        pub(crate) member_arn: std::option::Option<String>,
        pub(crate) chime_bearer: std::option::Option<String>,
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
        pub fn member_arn(mut self, input: impl Into<String>) -> Self {
            self.member_arn = Some(input.into());
            self
        }
        pub fn set_member_arn(mut self, input: std::option::Option<String>) -> Self {
            self.member_arn = input;
            self
        }
        pub fn chime_bearer(mut self, input: impl Into<String>) -> Self {
            self.chime_bearer = Some(input.into());
            self
        }
        pub fn set_chime_bearer(mut self, input: std::option::Option<String>) -> Self {
            self.chime_bearer = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateChannelBanInput`](crate::input::CreateChannelBanInput)
        pub fn build(self) -> std::result::Result<crate::input::CreateChannelBanInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CreateChannelBanInput {
                channel_arn: self.channel_arn,
                member_arn: self.member_arn,
                chime_bearer: self.chime_bearer,
            })
        }
    }
}
impl CreateChannelBanInput {
    /// Creates a new builder-style object to manufacture [`CreateChannelBanInput`](crate::input::CreateChannelBanInput)
    pub fn builder() -> crate::input::create_channel_ban_input::Builder {
        crate::input::create_channel_ban_input::Builder::default()
    }
}
impl CreateChannelBanInput {
    fn uri_base(&self, output: &mut String) -> Result<(), BuildError> {
        let input_channel_arn = self.channel_arn.as_deref().unwrap_or_default();
        let channel_arn = smithy_http::label::fmt_string(input_channel_arn);
        if channel_arn.is_empty() {
            return Err(BuildError::MissingField {
                field: "channel_arn",
                details: "cannot be empty or unset",
            });
        }
        output.push_str(&format!(
            "/channels/{channelArn}/bans",
            channelArn = channel_arn
        ));
        Ok(())
    }
    fn add_headers(
        &self,
        mut builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        if let Some(inner_1) = &self.chime_bearer {
            if !inner_1.is_empty() {
                let header_value = http::header::HeaderValue::from_str(inner_1).map_err(|err| {
                    BuildError::InvalidField {
                        field: "chime_bearer",
                        details: format!(
                            "`{}` cannot be used as a header value: {}",
                            inner_1, err
                        ),
                    }
                })?;
                builder = builder.header("x-amz-chime-bearer", header_value);
            }
        }
        Ok(builder)
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri)?;
        let builder = self.add_headers(builder)?;
        Ok(builder.method("POST").uri(uri))
    }
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<smithy_http::operation::Operation<crate::operation::CreateChannelBan>, BuildError> {
        let request = smithy_http::operation::build_http_request(Some(self))?;
        crate::input::assemble_operation(
            request,
            config,
            crate::operation::CreateChannelBan::new(),
            "CreateChannelBan",
        )
    }
}
impl smithy_http::operation::BuildHttpRequest for CreateChannelBanInput {
    fn build_http_request(
        &self,
    ) -> Result<http::Request<smithy_http::body::SdkBody>, BuildError> {
        let builder = self.update_http_builder(http::request::Builder::new())?;
        let body = crate::operation_ser::serialize_operation_create_channel_ban(self)?;
        crate::input::assemble(builder, body, true)
    }
}
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CreateChannelBanInput {
    /// The ARN of the channel.
    pub channel_arn: std::option::Option<String>,
    /// The ARN of the member being banned.
    pub member_arn: std::option::Option<String>,
    /// The <code>AppInstanceUserArn</code> of the user that makes the API call.
    pub chime_bearer: std::option::Option<String>,
}

/// See [`CreateChannelMembershipInput`](crate::input::CreateChannelMembershipInput)
pub mod create_channel_membership_input {
    /// A builder for [`CreateChannelMembershipInput`](crate::input::CreateChannelMembershipInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) channel_arn: std::option::Option<String>,
        pub(crate) member_arn: std::option::Option<String>,
        pub(crate) r#type: std::option::Option<crate::model::ChannelMembershipType>,
        pub(crate) chime_bearer: std::option::Option<String>,
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
        pub fn member_arn(mut self, input: impl Into<String>) -> Self {
            self.member_arn = Some(input.into());
            self
        }
        pub fn set_member_arn(mut self, input: std::option::Option<String>) -> Self {
            self.member_arn = input;
            self
        }
        pub fn r#type(mut self, input: impl Into<crate::model::ChannelMembershipType>) -> Self {
            self.r#type = Some(input.into());
            self
        }
        pub fn set_type(mut self, input: std::option::Option<crate::model::ChannelMembershipType>) -> Self {
            self.r#type = input;
            self
        }
        pub fn chime_bearer(mut self, input: impl Into<String>) -> Self {
            self.chime_bearer = Some(input.into());
            self
        }
        pub fn set_chime_bearer(mut self, input: std::option::Option<String>) -> Self {
            self.chime_bearer = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateChannelMembershipInput`](crate::input::CreateChannelMembershipInput)
        pub fn build(self) -> std::result::Result<crate::input::CreateChannelMembershipInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CreateChannelMembershipInput {
                channel_arn: self.channel_arn,
                member_arn: self.member_arn,
                r#type: self.r#type,
                chime_bearer: self.chime_bearer,
            })
        }
    }
}
impl CreateChannelMembershipInput {
    /// Creates a new builder-style object to manufacture [`CreateChannelMembershipInput`](crate::input::CreateChannelMembershipInput)
    pub fn builder() -> crate::input::create_channel_membership_input::Builder {
        crate::input::create_channel_membership_input::Builder::default()
    }
}
impl CreateChannelMembershipInput {
    fn uri_base(&self, output: &mut String) -> Result<(), BuildError> {
        let input_channel_arn = self.channel_arn.as_deref().unwrap_or_default();
        let channel_arn = smithy_http::label::fmt_string(input_channel_arn);
        if channel_arn.is_empty() {
            return Err(BuildError::MissingField {
                field: "channel_arn",
                details: "cannot be empty or unset",
            });
        }
        output.push_str(&format!(
            "/channels/{channelArn}/memberships",
            channelArn = channel_arn
        ));
        Ok(())
    }
    fn add_headers(
        &self,
        mut builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        if let Some(inner_1) = &self.chime_bearer {
            if !inner_1.is_empty() {
                let header_value = http::header::HeaderValue::from_str(inner_1).map_err(|err| {
                    BuildError::InvalidField {
                        field: "chime_bearer",
                        details: format!(
                            "`{}` cannot be used as a header value: {}",
                            inner_1, err
                        ),
                    }
                })?;
                builder = builder.header("x-amz-chime-bearer", header_value);
            }
        }
        Ok(builder)
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri)?;
        let builder = self.add_headers(builder)?;
        Ok(builder.method("POST").uri(uri))
    }
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<smithy_http::operation::Operation<crate::operation::CreateChannelMembership>, BuildError> {
        let request = smithy_http::operation::build_http_request(Some(self))?;
        crate::input::assemble_operation(
            request,
            config,
            crate::operation::CreateChannelMembership::new(),
            "CreateChannelMembership",
        )
    }
}
impl smithy_http::operation::BuildHttpRequest for CreateChannelMembershipInput {
    fn build_http_request(
        &self,
    ) -> Result<http::Request<smithy_http::body::SdkBody>, BuildError> {
        let builder = self.update_http_builder(http::request::Builder::new())?;
        let body = crate::operation_ser::serialize_operation_create_channel_membership(self)?;
        crate::input::assemble(builder, body, true)
    }
}
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CreateChannelMembershipInput {
    /// The ARN of the channel.
    pub channel_arn: std::option::Option<String>,
    /// The ARN of the member you want to add to the channel.
    pub member_arn: std::option::Option<String>,
    /// The membership type of a user, <code>DEFAULT</code> or <code>HIDDEN</code>.
    pub r#type: std::option::Option<crate::model::ChannelMembershipType>,
    /// The <code>AppInstanceUserArn</code> of the user that makes the API call.
    pub chime_bearer: std::option::Option<String>,
}

/// See [`DeleteChannelInput`](crate::input::DeleteChannelInput)
pub mod delete_channel_input {
    /// A builder for [`DeleteChannelInput`](crate::input::DeleteChannelInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) channel_arn: std::option::Option<String>,
        pub(crate) chime_bearer: std::option::Option<String>,
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
        pub fn chime_bearer(mut self, input: impl Into<String>) -> Self {
            self.chime_bearer = Some(input.into());
            self
        }
        pub fn set_chime_bearer(mut self, input: std::option::Option<String>) -> Self {
            self.chime_bearer = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteChannelInput`](crate::input::DeleteChannelInput)
        pub fn build(self) -> std::result::Result<crate::input::DeleteChannelInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DeleteChannelInput {
                channel_arn: self.channel_arn,
                chime_bearer: self.chime_bearer,
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
        let input_channel_arn = self.channel_arn.as_deref().unwrap_or_default();
        let channel_arn = smithy_http::label::fmt_string(input_channel_arn);
        if channel_arn.is_empty() {
            return Err(BuildError::MissingField {
                field: "channel_arn",
                details: "cannot be empty or unset",
            });
        }
        output.push_str(&format!(
            "/channels/{channelArn}",
            channelArn = channel_arn
        ));
        Ok(())
    }
    fn add_headers(
        &self,
        mut builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        if let Some(inner_1) = &self.chime_bearer {
            if !inner_1.is_empty() {
                let header_value = http::header::HeaderValue::from_str(inner_1).map_err(|err| {
                    BuildError::InvalidField {
                        field: "chime_bearer",
                        details: format!(
                            "`{}` cannot be used as a header value: {}",
                            inner_1, err
                        ),
                    }
                })?;
                builder = builder.header("x-amz-chime-bearer", header_value);
            }
        }
        Ok(builder)
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri)?;
        let builder = self.add_headers(builder)?;
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
    /// The ARN of the channel.
    pub channel_arn: std::option::Option<String>,
    /// The <code>AppInstanceUserArn</code> of the user that makes the API call.
    pub chime_bearer: std::option::Option<String>,
}

/// See [`DeleteChannelBanInput`](crate::input::DeleteChannelBanInput)
pub mod delete_channel_ban_input {
    /// A builder for [`DeleteChannelBanInput`](crate::input::DeleteChannelBanInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) channel_arn: std::option::Option<String>,
        pub(crate) member_arn: std::option::Option<String>,
        pub(crate) chime_bearer: std::option::Option<String>,
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
        pub fn member_arn(mut self, input: impl Into<String>) -> Self {
            self.member_arn = Some(input.into());
            self
        }
        pub fn set_member_arn(mut self, input: std::option::Option<String>) -> Self {
            self.member_arn = input;
            self
        }
        pub fn chime_bearer(mut self, input: impl Into<String>) -> Self {
            self.chime_bearer = Some(input.into());
            self
        }
        pub fn set_chime_bearer(mut self, input: std::option::Option<String>) -> Self {
            self.chime_bearer = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteChannelBanInput`](crate::input::DeleteChannelBanInput)
        pub fn build(self) -> std::result::Result<crate::input::DeleteChannelBanInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DeleteChannelBanInput {
                channel_arn: self.channel_arn,
                member_arn: self.member_arn,
                chime_bearer: self.chime_bearer,
            })
        }
    }
}
impl DeleteChannelBanInput {
    /// Creates a new builder-style object to manufacture [`DeleteChannelBanInput`](crate::input::DeleteChannelBanInput)
    pub fn builder() -> crate::input::delete_channel_ban_input::Builder {
        crate::input::delete_channel_ban_input::Builder::default()
    }
}
impl DeleteChannelBanInput {
    fn uri_base(&self, output: &mut String) -> Result<(), BuildError> {
        let input_channel_arn = self.channel_arn.as_deref().unwrap_or_default();
        let channel_arn = smithy_http::label::fmt_string(input_channel_arn);
        if channel_arn.is_empty() {
            return Err(BuildError::MissingField {
                field: "channel_arn",
                details: "cannot be empty or unset",
            });
        }
        let input_member_arn = self.member_arn.as_deref().unwrap_or_default();
        let member_arn = smithy_http::label::fmt_string(input_member_arn);
        if member_arn.is_empty() {
            return Err(BuildError::MissingField {
                field: "member_arn",
                details: "cannot be empty or unset",
            });
        }
        output.push_str(&format!(
            "/channels/{channelArn}/bans/{memberArn}",
            channelArn = channel_arn, memberArn = member_arn
        ));
        Ok(())
    }
    fn add_headers(
        &self,
        mut builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        if let Some(inner_1) = &self.chime_bearer {
            if !inner_1.is_empty() {
                let header_value = http::header::HeaderValue::from_str(inner_1).map_err(|err| {
                    BuildError::InvalidField {
                        field: "chime_bearer",
                        details: format!(
                            "`{}` cannot be used as a header value: {}",
                            inner_1, err
                        ),
                    }
                })?;
                builder = builder.header("x-amz-chime-bearer", header_value);
            }
        }
        Ok(builder)
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri)?;
        let builder = self.add_headers(builder)?;
        Ok(builder.method("DELETE").uri(uri))
    }
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<smithy_http::operation::Operation<crate::operation::DeleteChannelBan>, BuildError> {
        let request = smithy_http::operation::build_http_request(Some(self))?;
        crate::input::assemble_operation(
            request,
            config,
            crate::operation::DeleteChannelBan::new(),
            "DeleteChannelBan",
        )
    }
}
impl smithy_http::operation::BuildHttpRequest for DeleteChannelBanInput {
    fn build_http_request(
        &self,
    ) -> Result<http::Request<smithy_http::body::SdkBody>, BuildError> {
        let builder = self.update_http_builder(http::request::Builder::new())?;
        crate::input::assemble(builder, smithy_http::body::SdkBody::empty(), false)
    }
}
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DeleteChannelBanInput {
    /// The ARN of the channel from which the <code>AppInstanceUser</code> was banned.
    pub channel_arn: std::option::Option<String>,
    /// The ARN of the <code>AppInstanceUser</code> that you want to reinstate.
    pub member_arn: std::option::Option<String>,
    /// The <code>AppInstanceUserArn</code> of the user that makes the API call.
    pub chime_bearer: std::option::Option<String>,
}

/// See [`DescribeChannelInput`](crate::input::DescribeChannelInput)
pub mod describe_channel_input {
    /// A builder for [`DescribeChannelInput`](crate::input::DescribeChannelInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) channel_arn: std::option::Option<String>,
        pub(crate) chime_bearer: std::option::Option<String>,
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
        pub fn chime_bearer(mut self, input: impl Into<String>) -> Self {
            self.chime_bearer = Some(input.into());
            self
        }
        pub fn set_chime_bearer(mut self, input: std::option::Option<String>) -> Self {
            self.chime_bearer = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeChannelInput`](crate::input::DescribeChannelInput)
        pub fn build(self) -> std::result::Result<crate::input::DescribeChannelInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeChannelInput {
                channel_arn: self.channel_arn,
                chime_bearer: self.chime_bearer,
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
        let input_channel_arn = self.channel_arn.as_deref().unwrap_or_default();
        let channel_arn = smithy_http::label::fmt_string(input_channel_arn);
        if channel_arn.is_empty() {
            return Err(BuildError::MissingField {
                field: "channel_arn",
                details: "cannot be empty or unset",
            });
        }
        output.push_str(&format!(
            "/channels/{channelArn}",
            channelArn = channel_arn
        ));
        Ok(())
    }
    fn add_headers(
        &self,
        mut builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        if let Some(inner_1) = &self.chime_bearer {
            if !inner_1.is_empty() {
                let header_value = http::header::HeaderValue::from_str(inner_1).map_err(|err| {
                    BuildError::InvalidField {
                        field: "chime_bearer",
                        details: format!(
                            "`{}` cannot be used as a header value: {}",
                            inner_1, err
                        ),
                    }
                })?;
                builder = builder.header("x-amz-chime-bearer", header_value);
            }
        }
        Ok(builder)
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri)?;
        let builder = self.add_headers(builder)?;
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
    /// The ARN of the channel.
    pub channel_arn: std::option::Option<String>,
    /// The <code>AppInstanceUserArn</code> of the user that makes the API call.
    pub chime_bearer: std::option::Option<String>,
}

/// See [`GetChannelMessageInput`](crate::input::GetChannelMessageInput)
pub mod get_channel_message_input {
    /// A builder for [`GetChannelMessageInput`](crate::input::GetChannelMessageInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) channel_arn: std::option::Option<String>,
        pub(crate) message_id: std::option::Option<String>,
        pub(crate) chime_bearer: std::option::Option<String>,
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
        pub fn chime_bearer(mut self, input: impl Into<String>) -> Self {
            self.chime_bearer = Some(input.into());
            self
        }
        pub fn set_chime_bearer(mut self, input: std::option::Option<String>) -> Self {
            self.chime_bearer = input;
            self
        }
        /// Consumes the builder and constructs a [`GetChannelMessageInput`](crate::input::GetChannelMessageInput)
        pub fn build(self) -> std::result::Result<crate::input::GetChannelMessageInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetChannelMessageInput {
                channel_arn: self.channel_arn,
                message_id: self.message_id,
                chime_bearer: self.chime_bearer,
            })
        }
    }
}
impl GetChannelMessageInput {
    /// Creates a new builder-style object to manufacture [`GetChannelMessageInput`](crate::input::GetChannelMessageInput)
    pub fn builder() -> crate::input::get_channel_message_input::Builder {
        crate::input::get_channel_message_input::Builder::default()
    }
}
impl GetChannelMessageInput {
    fn uri_base(&self, output: &mut String) -> Result<(), BuildError> {
        let input_channel_arn = self.channel_arn.as_deref().unwrap_or_default();
        let channel_arn = smithy_http::label::fmt_string(input_channel_arn);
        if channel_arn.is_empty() {
            return Err(BuildError::MissingField {
                field: "channel_arn",
                details: "cannot be empty or unset",
            });
        }
        let input_message_id = self.message_id.as_deref().unwrap_or_default();
        let message_id = smithy_http::label::fmt_string(input_message_id);
        if message_id.is_empty() {
            return Err(BuildError::MissingField {
                field: "message_id",
                details: "cannot be empty or unset",
            });
        }
        output.push_str(&format!(
            "/channels/{channelArn}/messages/{messageId}",
            channelArn = channel_arn, messageId = message_id
        ));
        Ok(())
    }
    fn add_headers(
        &self,
        mut builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        if let Some(inner_1) = &self.chime_bearer {
            if !inner_1.is_empty() {
                let header_value = http::header::HeaderValue::from_str(inner_1).map_err(|err| {
                    BuildError::InvalidField {
                        field: "chime_bearer",
                        details: format!(
                            "`{}` cannot be used as a header value: {}",
                            inner_1, err
                        ),
                    }
                })?;
                builder = builder.header("x-amz-chime-bearer", header_value);
            }
        }
        Ok(builder)
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri)?;
        let builder = self.add_headers(builder)?;
        Ok(builder.method("GET").uri(uri))
    }
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<smithy_http::operation::Operation<crate::operation::GetChannelMessage>, BuildError> {
        let request = smithy_http::operation::build_http_request(Some(self))?;
        crate::input::assemble_operation(
            request,
            config,
            crate::operation::GetChannelMessage::new(),
            "GetChannelMessage",
        )
    }
}
impl smithy_http::operation::BuildHttpRequest for GetChannelMessageInput {
    fn build_http_request(
        &self,
    ) -> Result<http::Request<smithy_http::body::SdkBody>, BuildError> {
        let builder = self.update_http_builder(http::request::Builder::new())?;
        crate::input::assemble(builder, smithy_http::body::SdkBody::empty(), false)
    }
}
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetChannelMessageInput {
    /// The ARN of the channel.
    pub channel_arn: std::option::Option<String>,
    /// The ID of the message.
    pub message_id: std::option::Option<String>,
    /// The <code>AppInstanceUserArn</code> of the user that makes the API call.
    pub chime_bearer: std::option::Option<String>,
}

/// See [`ListChannelBansInput`](crate::input::ListChannelBansInput)
pub mod list_channel_bans_input {
    /// A builder for [`ListChannelBansInput`](crate::input::ListChannelBansInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq)]
    pub struct Builder {
        pub(crate) channel_arn: std::option::Option<String>,
        pub(crate) max_results: std::option::Option<i32>,
        pub(crate) next_token: std::option::Option<String>,
        pub(crate) chime_bearer: std::option::Option<String>,
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
        pub fn chime_bearer(mut self, input: impl Into<String>) -> Self {
            self.chime_bearer = Some(input.into());
            self
        }
        pub fn set_chime_bearer(mut self, input: std::option::Option<String>) -> Self {
            self.chime_bearer = input;
            self
        }
        /// Consumes the builder and constructs a [`ListChannelBansInput`](crate::input::ListChannelBansInput)
        pub fn build(self) -> std::result::Result<crate::input::ListChannelBansInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListChannelBansInput {
                channel_arn: self.channel_arn,
                max_results: self.max_results,
                next_token: self.next_token,
                chime_bearer: self.chime_bearer,
            })
        }
    }
}
impl ListChannelBansInput {
    /// Creates a new builder-style object to manufacture [`ListChannelBansInput`](crate::input::ListChannelBansInput)
    pub fn builder() -> crate::input::list_channel_bans_input::Builder {
        crate::input::list_channel_bans_input::Builder::default()
    }
}
impl ListChannelBansInput {
    fn uri_base(&self, output: &mut String) -> Result<(), BuildError> {
        let input_channel_arn = self.channel_arn.as_deref().unwrap_or_default();
        let channel_arn = smithy_http::label::fmt_string(input_channel_arn);
        if channel_arn.is_empty() {
            return Err(BuildError::MissingField {
                field: "channel_arn",
                details: "cannot be empty or unset",
            });
        }
        output.push_str(&format!(
            "/channels/{channelArn}/bans",
            channelArn = channel_arn
        ));
        Ok(())
    }
    fn uri_query(&self, output: &mut String) -> Result<(), BuildError> {
        let mut query = smithy_http::query::Writer::new(output);
        if let Some(inner_1) = &self.max_results {
            query.push_kv("max-results", &smithy_http::query::fmt_default(&inner_1));
        }
        if let Some(inner_2) = &self.next_token {
            query.push_kv("next-token", &smithy_http::query::fmt_string(&inner_2));
        }
        Ok(())
    }
    fn add_headers(
        &self,
        mut builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        if let Some(inner_1) = &self.chime_bearer {
            if !inner_1.is_empty() {
                let header_value = http::header::HeaderValue::from_str(inner_1).map_err(|err| {
                    BuildError::InvalidField {
                        field: "chime_bearer",
                        details: format!(
                            "`{}` cannot be used as a header value: {}",
                            inner_1, err
                        ),
                    }
                })?;
                builder = builder.header("x-amz-chime-bearer", header_value);
            }
        }
        Ok(builder)
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri)?;
        self.uri_query(&mut uri)?;
        let builder = self.add_headers(builder)?;
        Ok(builder.method("GET").uri(uri))
    }
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<smithy_http::operation::Operation<crate::operation::ListChannelBans>, BuildError> {
        let request = smithy_http::operation::build_http_request(Some(self))?;
        crate::input::assemble_operation(
            request,
            config,
            crate::operation::ListChannelBans::new(),
            "ListChannelBans",
        )
    }
}
impl smithy_http::operation::BuildHttpRequest for ListChannelBansInput {
    fn build_http_request(
        &self,
    ) -> Result<http::Request<smithy_http::body::SdkBody>, BuildError> {
        let builder = self.update_http_builder(http::request::Builder::new())?;
        crate::input::assemble(builder, smithy_http::body::SdkBody::empty(), false)
    }
}
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ListChannelBansInput {
    /// The ARN of the channel.
    pub channel_arn: std::option::Option<String>,
    /// The maximum number of bans that you want returned.
    pub max_results: std::option::Option<i32>,
    /// The token passed by previous API calls until all requested bans are returned.
    pub next_token: std::option::Option<String>,
    /// The <code>AppInstanceUserArn</code> of the user that makes the API call.
    pub chime_bearer: std::option::Option<String>,
}
impl std::fmt::Debug for ListChannelBansInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListChannelBansInput");
        formatter.field("channel_arn", &self.channel_arn);
        formatter.field("max_results", &self.max_results);
        formatter.field("next_token", &"*** Sensitive Data Redacted ***");
        formatter.field("chime_bearer", &self.chime_bearer);
        formatter.finish()
    }
}

/// See [`ListChannelMembershipsInput`](crate::input::ListChannelMembershipsInput)
pub mod list_channel_memberships_input {
    /// A builder for [`ListChannelMembershipsInput`](crate::input::ListChannelMembershipsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq)]
    pub struct Builder {
        pub(crate) channel_arn: std::option::Option<String>,
        pub(crate) r#type: std::option::Option<crate::model::ChannelMembershipType>,
        pub(crate) max_results: std::option::Option<i32>,
        pub(crate) next_token: std::option::Option<String>,
        pub(crate) chime_bearer: std::option::Option<String>,
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
        pub fn r#type(mut self, input: impl Into<crate::model::ChannelMembershipType>) -> Self {
            self.r#type = Some(input.into());
            self
        }
        pub fn set_type(mut self, input: std::option::Option<crate::model::ChannelMembershipType>) -> Self {
            self.r#type = input;
            self
        }
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
        pub fn chime_bearer(mut self, input: impl Into<String>) -> Self {
            self.chime_bearer = Some(input.into());
            self
        }
        pub fn set_chime_bearer(mut self, input: std::option::Option<String>) -> Self {
            self.chime_bearer = input;
            self
        }
        /// Consumes the builder and constructs a [`ListChannelMembershipsInput`](crate::input::ListChannelMembershipsInput)
        pub fn build(self) -> std::result::Result<crate::input::ListChannelMembershipsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListChannelMembershipsInput {
                channel_arn: self.channel_arn,
                r#type: self.r#type,
                max_results: self.max_results,
                next_token: self.next_token,
                chime_bearer: self.chime_bearer,
            })
        }
    }
}
impl ListChannelMembershipsInput {
    /// Creates a new builder-style object to manufacture [`ListChannelMembershipsInput`](crate::input::ListChannelMembershipsInput)
    pub fn builder() -> crate::input::list_channel_memberships_input::Builder {
        crate::input::list_channel_memberships_input::Builder::default()
    }
}
impl ListChannelMembershipsInput {
    fn uri_base(&self, output: &mut String) -> Result<(), BuildError> {
        let input_channel_arn = self.channel_arn.as_deref().unwrap_or_default();
        let channel_arn = smithy_http::label::fmt_string(input_channel_arn);
        if channel_arn.is_empty() {
            return Err(BuildError::MissingField {
                field: "channel_arn",
                details: "cannot be empty or unset",
            });
        }
        output.push_str(&format!(
            "/channels/{channelArn}/memberships",
            channelArn = channel_arn
        ));
        Ok(())
    }
    fn uri_query(&self, output: &mut String) -> Result<(), BuildError> {
        let mut query = smithy_http::query::Writer::new(output);
        if let Some(inner_1) = &self.r#type {
            query.push_kv("type", &smithy_http::query::fmt_string(&inner_1));
        }
        if let Some(inner_2) = &self.max_results {
            query.push_kv("max-results", &smithy_http::query::fmt_default(&inner_2));
        }
        if let Some(inner_3) = &self.next_token {
            query.push_kv("next-token", &smithy_http::query::fmt_string(&inner_3));
        }
        Ok(())
    }
    fn add_headers(
        &self,
        mut builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        if let Some(inner_1) = &self.chime_bearer {
            if !inner_1.is_empty() {
                let header_value = http::header::HeaderValue::from_str(inner_1).map_err(|err| {
                    BuildError::InvalidField {
                        field: "chime_bearer",
                        details: format!(
                            "`{}` cannot be used as a header value: {}",
                            inner_1, err
                        ),
                    }
                })?;
                builder = builder.header("x-amz-chime-bearer", header_value);
            }
        }
        Ok(builder)
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri)?;
        self.uri_query(&mut uri)?;
        let builder = self.add_headers(builder)?;
        Ok(builder.method("GET").uri(uri))
    }
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<smithy_http::operation::Operation<crate::operation::ListChannelMemberships>, BuildError> {
        let request = smithy_http::operation::build_http_request(Some(self))?;
        crate::input::assemble_operation(
            request,
            config,
            crate::operation::ListChannelMemberships::new(),
            "ListChannelMemberships",
        )
    }
}
impl smithy_http::operation::BuildHttpRequest for ListChannelMembershipsInput {
    fn build_http_request(
        &self,
    ) -> Result<http::Request<smithy_http::body::SdkBody>, BuildError> {
        let builder = self.update_http_builder(http::request::Builder::new())?;
        crate::input::assemble(builder, smithy_http::body::SdkBody::empty(), false)
    }
}
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ListChannelMembershipsInput {
    /// The ARN of the channel.
    pub channel_arn: std::option::Option<String>,
    /// The membership type of a user, <code>DEFAULT</code> or <code>HIDDEN</code>.
    pub r#type: std::option::Option<crate::model::ChannelMembershipType>,
    /// The maximum number of channel memberships that you want returned.
    pub max_results: std::option::Option<i32>,
    /// The token passed by previous API calls until all requested channel memberships are returned.
    pub next_token: std::option::Option<String>,
    /// The <code>AppInstanceUserArn</code> of the user that makes the API call.
    pub chime_bearer: std::option::Option<String>,
}
impl std::fmt::Debug for ListChannelMembershipsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListChannelMembershipsInput");
        formatter.field("channel_arn", &self.channel_arn);
        formatter.field("type", &self.r#type);
        formatter.field("max_results", &self.max_results);
        formatter.field("next_token", &"*** Sensitive Data Redacted ***");
        formatter.field("chime_bearer", &self.chime_bearer);
        formatter.finish()
    }
}

/// See [`ListChannelMessagesInput`](crate::input::ListChannelMessagesInput)
pub mod list_channel_messages_input {
    /// A builder for [`ListChannelMessagesInput`](crate::input::ListChannelMessagesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq)]
    pub struct Builder {
        pub(crate) channel_arn: std::option::Option<String>,
        pub(crate) sort_order: std::option::Option<crate::model::SortOrder>,
        pub(crate) not_before: std::option::Option<smithy_types::Instant>,
        pub(crate) not_after: std::option::Option<smithy_types::Instant>,
        pub(crate) max_results: std::option::Option<i32>,
        pub(crate) next_token: std::option::Option<String>,
        pub(crate) chime_bearer: std::option::Option<String>,
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
        pub fn sort_order(mut self, input: impl Into<crate::model::SortOrder>) -> Self {
            self.sort_order = Some(input.into());
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::SortOrder>) -> Self {
            self.sort_order = input;
            self
        }
        pub fn not_before(mut self, input: impl Into<smithy_types::Instant>) -> Self {
            self.not_before = Some(input.into());
            self
        }
        pub fn set_not_before(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.not_before = input;
            self
        }
        pub fn not_after(mut self, input: impl Into<smithy_types::Instant>) -> Self {
            self.not_after = Some(input.into());
            self
        }
        pub fn set_not_after(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.not_after = input;
            self
        }
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
        pub fn chime_bearer(mut self, input: impl Into<String>) -> Self {
            self.chime_bearer = Some(input.into());
            self
        }
        pub fn set_chime_bearer(mut self, input: std::option::Option<String>) -> Self {
            self.chime_bearer = input;
            self
        }
        /// Consumes the builder and constructs a [`ListChannelMessagesInput`](crate::input::ListChannelMessagesInput)
        pub fn build(self) -> std::result::Result<crate::input::ListChannelMessagesInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListChannelMessagesInput {
                channel_arn: self.channel_arn,
                sort_order: self.sort_order,
                not_before: self.not_before,
                not_after: self.not_after,
                max_results: self.max_results,
                next_token: self.next_token,
                chime_bearer: self.chime_bearer,
            })
        }
    }
}
impl ListChannelMessagesInput {
    /// Creates a new builder-style object to manufacture [`ListChannelMessagesInput`](crate::input::ListChannelMessagesInput)
    pub fn builder() -> crate::input::list_channel_messages_input::Builder {
        crate::input::list_channel_messages_input::Builder::default()
    }
}
impl ListChannelMessagesInput {
    fn uri_base(&self, output: &mut String) -> Result<(), BuildError> {
        let input_channel_arn = self.channel_arn.as_deref().unwrap_or_default();
        let channel_arn = smithy_http::label::fmt_string(input_channel_arn);
        if channel_arn.is_empty() {
            return Err(BuildError::MissingField {
                field: "channel_arn",
                details: "cannot be empty or unset",
            });
        }
        output.push_str(&format!(
            "/channels/{channelArn}/messages",
            channelArn = channel_arn
        ));
        Ok(())
    }
    fn uri_query(&self, output: &mut String) -> Result<(), BuildError> {
        let mut query = smithy_http::query::Writer::new(output);
        if let Some(inner_1) = &self.sort_order {
            query.push_kv("sort-order", &smithy_http::query::fmt_string(&inner_1));
        }
        if let Some(inner_2) = &self.not_before {
            let formatted = inner_2
                .fmt(smithy_types::instant::Format::DateTime)
                .map_err(|err| BuildError::InvalidField {
                    field: "not_before",
                    details: err.to_string(),
                })?;
            query.push_kv("not-before", &smithy_http::query::fmt_string(&formatted));
        }
        if let Some(inner_3) = &self.not_after {
            let formatted = inner_3
                .fmt(smithy_types::instant::Format::DateTime)
                .map_err(|err| BuildError::InvalidField {
                    field: "not_after",
                    details: err.to_string(),
                })?;
            query.push_kv("not-after", &smithy_http::query::fmt_string(&formatted));
        }
        if let Some(inner_4) = &self.max_results {
            query.push_kv("max-results", &smithy_http::query::fmt_default(&inner_4));
        }
        if let Some(inner_5) = &self.next_token {
            query.push_kv("next-token", &smithy_http::query::fmt_string(&inner_5));
        }
        Ok(())
    }
    fn add_headers(
        &self,
        mut builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        if let Some(inner_1) = &self.chime_bearer {
            if !inner_1.is_empty() {
                let header_value = http::header::HeaderValue::from_str(inner_1).map_err(|err| {
                    BuildError::InvalidField {
                        field: "chime_bearer",
                        details: format!(
                            "`{}` cannot be used as a header value: {}",
                            inner_1, err
                        ),
                    }
                })?;
                builder = builder.header("x-amz-chime-bearer", header_value);
            }
        }
        Ok(builder)
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri)?;
        self.uri_query(&mut uri)?;
        let builder = self.add_headers(builder)?;
        Ok(builder.method("GET").uri(uri))
    }
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<smithy_http::operation::Operation<crate::operation::ListChannelMessages>, BuildError> {
        let request = smithy_http::operation::build_http_request(Some(self))?;
        crate::input::assemble_operation(
            request,
            config,
            crate::operation::ListChannelMessages::new(),
            "ListChannelMessages",
        )
    }
}
impl smithy_http::operation::BuildHttpRequest for ListChannelMessagesInput {
    fn build_http_request(
        &self,
    ) -> Result<http::Request<smithy_http::body::SdkBody>, BuildError> {
        let builder = self.update_http_builder(http::request::Builder::new())?;
        crate::input::assemble(builder, smithy_http::body::SdkBody::empty(), false)
    }
}
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ListChannelMessagesInput {
    /// The ARN of the channel.
    pub channel_arn: std::option::Option<String>,
    /// The order in which you want messages sorted. Default is Descending, based on time
    /// created.
    pub sort_order: std::option::Option<crate::model::SortOrder>,
    /// The initial or starting time stamp for your requested messages.
    pub not_before: std::option::Option<smithy_types::Instant>,
    /// The final or ending time stamp for your requested messages.
    pub not_after: std::option::Option<smithy_types::Instant>,
    /// The maximum number of messages that you want returned.
    pub max_results: std::option::Option<i32>,
    /// The token passed by previous API calls until all requested messages are returned.
    pub next_token: std::option::Option<String>,
    /// The <code>AppInstanceUserArn</code> of the user that makes the API call.
    pub chime_bearer: std::option::Option<String>,
}
impl std::fmt::Debug for ListChannelMessagesInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListChannelMessagesInput");
        formatter.field("channel_arn", &self.channel_arn);
        formatter.field("sort_order", &self.sort_order);
        formatter.field("not_before", &self.not_before);
        formatter.field("not_after", &self.not_after);
        formatter.field("max_results", &self.max_results);
        formatter.field("next_token", &"*** Sensitive Data Redacted ***");
        formatter.field("chime_bearer", &self.chime_bearer);
        formatter.finish()
    }
}

/// See [`ListChannelsInput`](crate::input::ListChannelsInput)
pub mod list_channels_input {
    /// A builder for [`ListChannelsInput`](crate::input::ListChannelsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq)]
    pub struct Builder {
        pub(crate) app_instance_arn: std::option::Option<String>,
        pub(crate) privacy: std::option::Option<crate::model::ChannelPrivacy>,
        pub(crate) max_results: std::option::Option<i32>,
        pub(crate) next_token: std::option::Option<String>,
        pub(crate) chime_bearer: std::option::Option<String>,
    }
    impl Builder {
        pub fn app_instance_arn(mut self, input: impl Into<String>) -> Self {
            self.app_instance_arn = Some(input.into());
            self
        }
        pub fn set_app_instance_arn(mut self, input: std::option::Option<String>) -> Self {
            self.app_instance_arn = input;
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
        pub fn chime_bearer(mut self, input: impl Into<String>) -> Self {
            self.chime_bearer = Some(input.into());
            self
        }
        pub fn set_chime_bearer(mut self, input: std::option::Option<String>) -> Self {
            self.chime_bearer = input;
            self
        }
        /// Consumes the builder and constructs a [`ListChannelsInput`](crate::input::ListChannelsInput)
        pub fn build(self) -> std::result::Result<crate::input::ListChannelsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListChannelsInput {
                app_instance_arn: self.app_instance_arn,
                privacy: self.privacy,
                max_results: self.max_results,
                next_token: self.next_token,
                chime_bearer: self.chime_bearer,
            })
        }
    }
}
impl ListChannelsInput {
    /// Creates a new builder-style object to manufacture [`ListChannelsInput`](crate::input::ListChannelsInput)
    pub fn builder() -> crate::input::list_channels_input::Builder {
        crate::input::list_channels_input::Builder::default()
    }
}
impl ListChannelsInput {
    fn uri_base(&self, output: &mut String) -> Result<(), BuildError> {
        output.push_str("/channels");
        Ok(())
    }
    fn uri_query(&self, output: &mut String) -> Result<(), BuildError> {
        let mut query = smithy_http::query::Writer::new(output);
        if let Some(inner_1) = &self.app_instance_arn {
            query.push_kv("app-instance-arn", &smithy_http::query::fmt_string(&inner_1));
        }
        if let Some(inner_2) = &self.privacy {
            query.push_kv("privacy", &smithy_http::query::fmt_string(&inner_2));
        }
        if let Some(inner_3) = &self.max_results {
            query.push_kv("max-results", &smithy_http::query::fmt_default(&inner_3));
        }
        if let Some(inner_4) = &self.next_token {
            query.push_kv("next-token", &smithy_http::query::fmt_string(&inner_4));
        }
        Ok(())
    }
    fn add_headers(
        &self,
        mut builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        if let Some(inner_1) = &self.chime_bearer {
            if !inner_1.is_empty() {
                let header_value = http::header::HeaderValue::from_str(inner_1).map_err(|err| {
                    BuildError::InvalidField {
                        field: "chime_bearer",
                        details: format!(
                            "`{}` cannot be used as a header value: {}",
                            inner_1, err
                        ),
                    }
                })?;
                builder = builder.header("x-amz-chime-bearer", header_value);
            }
        }
        Ok(builder)
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri)?;
        self.uri_query(&mut uri)?;
        let builder = self.add_headers(builder)?;
        Ok(builder.method("GET").uri(uri))
    }
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<smithy_http::operation::Operation<crate::operation::ListChannels>, BuildError> {
        let request = smithy_http::operation::build_http_request(Some(self))?;
        crate::input::assemble_operation(
            request,
            config,
            crate::operation::ListChannels::new(),
            "ListChannels",
        )
    }
}
impl smithy_http::operation::BuildHttpRequest for ListChannelsInput {
    fn build_http_request(
        &self,
    ) -> Result<http::Request<smithy_http::body::SdkBody>, BuildError> {
        let builder = self.update_http_builder(http::request::Builder::new())?;
        crate::input::assemble(builder, smithy_http::body::SdkBody::empty(), false)
    }
}
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ListChannelsInput {
    /// The ARN of the <code>AppInstance</code>.
    pub app_instance_arn: std::option::Option<String>,
    /// The privacy setting. <code>PUBLIC</code> retrieves all the public channels.
    /// <code>PRIVATE</code> retrieves private channels. Only an <code>AppInstanceAdmin</code>
    /// can retrieve private channels.
    pub privacy: std::option::Option<crate::model::ChannelPrivacy>,
    pub max_results: std::option::Option<i32>,
    pub next_token: std::option::Option<String>,
    /// The <code>AppInstanceUserArn</code> of the user that makes the API call.
    pub chime_bearer: std::option::Option<String>,
}
impl std::fmt::Debug for ListChannelsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListChannelsInput");
        formatter.field("app_instance_arn", &self.app_instance_arn);
        formatter.field("privacy", &self.privacy);
        formatter.field("max_results", &self.max_results);
        formatter.field("next_token", &"*** Sensitive Data Redacted ***");
        formatter.field("chime_bearer", &self.chime_bearer);
        formatter.finish()
    }
}

/// See [`SendChannelMessageInput`](crate::input::SendChannelMessageInput)
pub mod send_channel_message_input {
    /// A builder for [`SendChannelMessageInput`](crate::input::SendChannelMessageInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq)]
    pub struct Builder {
        pub(crate) channel_arn: std::option::Option<String>,
        pub(crate) content: std::option::Option<String>,
        pub(crate) r#type: std::option::Option<crate::model::ChannelMessageType>,
        pub(crate) persistence: std::option::Option<crate::model::ChannelMessagePersistenceType>,
        pub(crate) metadata: std::option::Option<String>,
        pub(crate) client_request_token: std::option::Option<String>,
        pub(crate) chime_bearer: std::option::Option<String>,
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
        pub fn content(mut self, input: impl Into<String>) -> Self {
            self.content = Some(input.into());
            self
        }
        pub fn set_content(mut self, input: std::option::Option<String>) -> Self {
            self.content = input;
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
        pub fn persistence(mut self, input: impl Into<crate::model::ChannelMessagePersistenceType>) -> Self {
            self.persistence = Some(input.into());
            self
        }
        pub fn set_persistence(mut self, input: std::option::Option<crate::model::ChannelMessagePersistenceType>) -> Self {
            self.persistence = input;
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
        pub fn client_request_token(mut self, input: impl Into<String>) -> Self {
            self.client_request_token = Some(input.into());
            self
        }
        pub fn set_client_request_token(mut self, input: std::option::Option<String>) -> Self {
            self.client_request_token = input;
            self
        }
        pub fn chime_bearer(mut self, input: impl Into<String>) -> Self {
            self.chime_bearer = Some(input.into());
            self
        }
        pub fn set_chime_bearer(mut self, input: std::option::Option<String>) -> Self {
            self.chime_bearer = input;
            self
        }
        /// Consumes the builder and constructs a [`SendChannelMessageInput`](crate::input::SendChannelMessageInput)
        pub fn build(self) -> std::result::Result<crate::input::SendChannelMessageInput, smithy_http::operation::BuildError> {
            Ok(crate::input::SendChannelMessageInput {
                channel_arn: self.channel_arn,
                content: self.content,
                r#type: self.r#type,
                persistence: self.persistence,
                metadata: self.metadata,
                client_request_token: self.client_request_token,
                chime_bearer: self.chime_bearer,
            })
        }
    }
}
impl SendChannelMessageInput {
    /// Creates a new builder-style object to manufacture [`SendChannelMessageInput`](crate::input::SendChannelMessageInput)
    pub fn builder() -> crate::input::send_channel_message_input::Builder {
        crate::input::send_channel_message_input::Builder::default()
    }
}
impl SendChannelMessageInput {
    fn uri_base(&self, output: &mut String) -> Result<(), BuildError> {
        let input_channel_arn = self.channel_arn.as_deref().unwrap_or_default();
        let channel_arn = smithy_http::label::fmt_string(input_channel_arn);
        if channel_arn.is_empty() {
            return Err(BuildError::MissingField {
                field: "channel_arn",
                details: "cannot be empty or unset",
            });
        }
        output.push_str(&format!(
            "/channels/{channelArn}/messages",
            channelArn = channel_arn
        ));
        Ok(())
    }
    fn add_headers(
        &self,
        mut builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        if let Some(inner_1) = &self.chime_bearer {
            if !inner_1.is_empty() {
                let header_value = http::header::HeaderValue::from_str(inner_1).map_err(|err| {
                    BuildError::InvalidField {
                        field: "chime_bearer",
                        details: format!(
                            "`{}` cannot be used as a header value: {}",
                            inner_1, err
                        ),
                    }
                })?;
                builder = builder.header("x-amz-chime-bearer", header_value);
            }
        }
        Ok(builder)
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri)?;
        let builder = self.add_headers(builder)?;
        Ok(builder.method("POST").uri(uri))
    }
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<smithy_http::operation::Operation<crate::operation::SendChannelMessage>, BuildError> {
        let request = smithy_http::operation::build_http_request(Some(self))?;
        crate::input::assemble_operation(
            request,
            config,
            crate::operation::SendChannelMessage::new(),
            "SendChannelMessage",
        )
    }
}
impl smithy_http::operation::BuildHttpRequest for SendChannelMessageInput {
    fn build_http_request(
        &self,
    ) -> Result<http::Request<smithy_http::body::SdkBody>, BuildError> {
        let builder = self.update_http_builder(http::request::Builder::new())?;
        let body = crate::operation_ser::serialize_operation_send_channel_message(self)?;
        crate::input::assemble(builder, body, true)
    }
}
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct SendChannelMessageInput {
    /// The ARN of the channel.
    pub channel_arn: std::option::Option<String>,
    /// The content of the message.
    pub content: std::option::Option<String>,
    /// The type of message, <code>STANDARD</code> or <code>CONTROL</code>.
    pub r#type: std::option::Option<crate::model::ChannelMessageType>,
    /// Boolean that controls whether the message is persisted on the back end. Required.
    pub persistence: std::option::Option<crate::model::ChannelMessagePersistenceType>,
    /// The optional metadata for each message.
    pub metadata: std::option::Option<String>,
    /// The <code>Idempotency</code> token for each client request.
    pub client_request_token: std::option::Option<String>,
    /// The <code>AppInstanceUserArn</code> of the user that makes the API call.
    pub chime_bearer: std::option::Option<String>,
}
impl std::fmt::Debug for SendChannelMessageInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("SendChannelMessageInput");
        formatter.field("channel_arn", &self.channel_arn);
        formatter.field("content", &"*** Sensitive Data Redacted ***");
        formatter.field("type", &self.r#type);
        formatter.field("persistence", &self.persistence);
        formatter.field("metadata", &"*** Sensitive Data Redacted ***");
        formatter.field("client_request_token", &"*** Sensitive Data Redacted ***");
        formatter.field("chime_bearer", &self.chime_bearer);
        formatter.finish()
    }
}

/// See [`UpdateChannelInput`](crate::input::UpdateChannelInput)
pub mod update_channel_input {
    /// A builder for [`UpdateChannelInput`](crate::input::UpdateChannelInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq)]
    pub struct Builder {
        pub(crate) channel_arn: std::option::Option<String>,
        pub(crate) name: std::option::Option<String>,
        pub(crate) mode: std::option::Option<crate::model::ChannelMode>,
        pub(crate) metadata: std::option::Option<String>,
        pub(crate) chime_bearer: std::option::Option<String>,
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
        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<String>) -> Self {
            self.name = input;
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
        pub fn metadata(mut self, input: impl Into<String>) -> Self {
            self.metadata = Some(input.into());
            self
        }
        pub fn set_metadata(mut self, input: std::option::Option<String>) -> Self {
            self.metadata = input;
            self
        }
        pub fn chime_bearer(mut self, input: impl Into<String>) -> Self {
            self.chime_bearer = Some(input.into());
            self
        }
        pub fn set_chime_bearer(mut self, input: std::option::Option<String>) -> Self {
            self.chime_bearer = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateChannelInput`](crate::input::UpdateChannelInput)
        pub fn build(self) -> std::result::Result<crate::input::UpdateChannelInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UpdateChannelInput {
                channel_arn: self.channel_arn,
                name: self.name,
                mode: self.mode,
                metadata: self.metadata,
                chime_bearer: self.chime_bearer,
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
        let input_channel_arn = self.channel_arn.as_deref().unwrap_or_default();
        let channel_arn = smithy_http::label::fmt_string(input_channel_arn);
        if channel_arn.is_empty() {
            return Err(BuildError::MissingField {
                field: "channel_arn",
                details: "cannot be empty or unset",
            });
        }
        output.push_str(&format!(
            "/channels/{channelArn}",
            channelArn = channel_arn
        ));
        Ok(())
    }
    fn add_headers(
        &self,
        mut builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        if let Some(inner_1) = &self.chime_bearer {
            if !inner_1.is_empty() {
                let header_value = http::header::HeaderValue::from_str(inner_1).map_err(|err| {
                    BuildError::InvalidField {
                        field: "chime_bearer",
                        details: format!(
                            "`{}` cannot be used as a header value: {}",
                            inner_1, err
                        ),
                    }
                })?;
                builder = builder.header("x-amz-chime-bearer", header_value);
            }
        }
        Ok(builder)
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri)?;
        let builder = self.add_headers(builder)?;
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
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct UpdateChannelInput {
    /// The ARN of the channel.
    pub channel_arn: std::option::Option<String>,
    /// The name of the channel.
    pub name: std::option::Option<String>,
    /// The mode of the update request.
    pub mode: std::option::Option<crate::model::ChannelMode>,
    /// The metadata for the update request.
    pub metadata: std::option::Option<String>,
    /// The <code>AppInstanceUserArn</code> of the user that makes the API call.
    pub chime_bearer: std::option::Option<String>,
}
impl std::fmt::Debug for UpdateChannelInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("UpdateChannelInput");
        formatter.field("channel_arn", &self.channel_arn);
        formatter.field("name", &"*** Sensitive Data Redacted ***");
        formatter.field("mode", &self.mode);
        formatter.field("metadata", &"*** Sensitive Data Redacted ***");
        formatter.field("chime_bearer", &self.chime_bearer);
        formatter.finish()
    }
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
        let input = crate::input::DescribeChannelInput::builder()
            .channel_arn("arn:aws:chime:us-east-1:123456789012:app-instance/a/channel/b")
            .chime_bearer("arn:aws:chime:us-east-1:123456789012:app-instance/a/user/c")
            .build()
            .unwrap();
        let operation = input.make_operation(&config).unwrap();
        assert_eq!(operation.metadata().unwrap().service(), "chimesdkmessaging");
        assert!(logs_contain("assembled operation"));
    }
}
