/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Creates a channel to which you can add users and send messages.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateChannel {
    _private: (),
}
impl CreateChannel {
    /// Creates a new builder-style object to manufacture [`CreateChannelInput`](crate::input::CreateChannelInput)
    pub fn builder() -> crate::input::create_channel_input::Builder {
        crate::input::create_channel_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreateChannel {
    type Output = std::result::Result<crate::output::CreateChannelOutput, crate::error::Error>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            Err(crate::operation_deser::parse_error(response))
        } else {
            crate::operation_deser::parse_create_channel_response(response)
        }
    }
}

/// Permanently bans a member from a channel.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateChannelBan {
    _private: (),
}
impl CreateChannelBan {
    /// Creates a new builder-style object to manufacture [`CreateChannelBanInput`](crate::input::CreateChannelBanInput)
    pub fn builder() -> crate::input::create_channel_ban_input::Builder {
        crate::input::create_channel_ban_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreateChannelBan {
    type Output = std::result::Result<crate::output::CreateChannelBanOutput, crate::error::Error>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            Err(crate::operation_deser::parse_error(response))
        } else {
            crate::operation_deser::parse_create_channel_ban_response(response)
        }
    }
}

/// Adds a user to a channel. The <code>InvitedBy</code> response field is derived from the
/// request header.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateChannelMembership {
    _private: (),
}
impl CreateChannelMembership {
    /// Creates a new builder-style object to manufacture [`CreateChannelMembershipInput`](crate::input::CreateChannelMembershipInput)
    pub fn builder() -> crate::input::create_channel_membership_input::Builder {
        crate::input::create_channel_membership_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreateChannelMembership {
    type Output = std::result::Result<crate::output::CreateChannelMembershipOutput, crate::error::Error>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            Err(crate::operation_deser::parse_error(response))
        } else {
            crate::operation_deser::parse_create_channel_membership_response(response)
        }
    }
}

/// Immediately makes a channel and its memberships inaccessible and marks them for deletion.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteChannel {
    _private: (),
}
impl DeleteChannel {
    /// Creates a new builder-style object to manufacture [`DeleteChannelInput`](crate::input::DeleteChannelInput)
    pub fn builder() -> crate::input::delete_channel_input::Builder {
        crate::input::delete_channel_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DeleteChannel {
    type Output = std::result::Result<crate::output::DeleteChannelOutput, crate::error::Error>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            Err(crate::operation_deser::parse_error(response))
        } else {
            crate::operation_deser::parse_delete_channel_response(response)
        }
    }
}

/// Removes a user from a channel's ban list.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteChannelBan {
    _private: (),
}
impl DeleteChannelBan {
    /// Creates a new builder-style object to manufacture [`DeleteChannelBanInput`](crate::input::DeleteChannelBanInput)
    pub fn builder() -> crate::input::delete_channel_ban_input::Builder {
        crate::input::delete_channel_ban_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DeleteChannelBan {
    type Output = std::result::Result<crate::output::DeleteChannelBanOutput, crate::error::Error>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            Err(crate::operation_deser::parse_error(response))
        } else {
            crate::operation_deser::parse_delete_channel_ban_response(response)
        }
    }
}

/// Returns the full details of a channel in an Amazon Chime <code>AppInstance</code>.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeChannel {
    _private: (),
}
impl DescribeChannel {
    /// Creates a new builder-style object to manufacture [`DescribeChannelInput`](crate::input::DescribeChannelInput)
    pub fn builder() -> crate::input::describe_channel_input::Builder {
        crate::input::describe_channel_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DescribeChannel {
    type Output = std::result::Result<crate::output::DescribeChannelOutput, crate::error::Error>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            Err(crate::operation_deser::parse_error(response))
        } else {
            crate::operation_deser::parse_describe_channel_response(response)
        }
    }
}

/// Gets the full details of a channel message.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct GetChannelMessage {
    _private: (),
}
impl GetChannelMessage {
    /// Creates a new builder-style object to manufacture [`GetChannelMessageInput`](crate::input::GetChannelMessageInput)
    pub fn builder() -> crate::input::get_channel_message_input::Builder {
        crate::input::get_channel_message_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for GetChannelMessage {
    type Output = std::result::Result<crate::output::GetChannelMessageOutput, crate::error::Error>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            Err(crate::operation_deser::parse_error(response))
        } else {
            crate::operation_deser::parse_get_channel_message_response(response)
        }
    }
}

/// Lists all the users banned from a particular channel.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListChannelBans {
    _private: (),
}
impl ListChannelBans {
    /// Creates a new builder-style object to manufacture [`ListChannelBansInput`](crate::input::ListChannelBansInput)
    pub fn builder() -> crate::input::list_channel_bans_input::Builder {
        crate::input::list_channel_bans_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListChannelBans {
    type Output = std::result::Result<crate::output::ListChannelBansOutput, crate::error::Error>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            Err(crate::operation_deser::parse_error(response))
        } else {
            crate::operation_deser::parse_list_channel_bans_response(response)
        }
    }
}

/// Lists all channel memberships in a channel.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListChannelMemberships {
    _private: (),
}
impl ListChannelMemberships {
    /// Creates a new builder-style object to manufacture [`ListChannelMembershipsInput`](crate::input::ListChannelMembershipsInput)
    pub fn builder() -> crate::input::list_channel_memberships_input::Builder {
        crate::input::list_channel_memberships_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListChannelMemberships {
    type Output = std::result::Result<crate::output::ListChannelMembershipsOutput, crate::error::Error>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            Err(crate::operation_deser::parse_error(response))
        } else {
            crate::operation_deser::parse_list_channel_memberships_response(response)
        }
    }
}

/// List all the messages in a channel. Returns a paginated list of
/// <code>ChannelMessages</code>. By default, sorted by creation timestamp in descending
/// order.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListChannelMessages {
    _private: (),
}
impl ListChannelMessages {
    /// Creates a new builder-style object to manufacture [`ListChannelMessagesInput`](crate::input::ListChannelMessagesInput)
    pub fn builder() -> crate::input::list_channel_messages_input::Builder {
        crate::input::list_channel_messages_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListChannelMessages {
    type Output = std::result::Result<crate::output::ListChannelMessagesOutput, crate::error::Error>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            Err(crate::operation_deser::parse_error(response))
        } else {
            crate::operation_deser::parse_list_channel_messages_response(response)
        }
    }
}

/// Lists all Channels created under a single Chime App as a paginated list.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListChannels {
    _private: (),
}
impl ListChannels {
    /// Creates a new builder-style object to manufacture [`ListChannelsInput`](crate::input::ListChannelsInput)
    pub fn builder() -> crate::input::list_channels_input::Builder {
        crate::input::list_channels_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListChannels {
    type Output = std::result::Result<crate::output::ListChannelsOutput, crate::error::Error>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            Err(crate::operation_deser::parse_error(response))
        } else {
            crate::operation_deser::parse_list_channels_response(response)
        }
    }
}

/// Sends a message to a particular channel that the member is a part of.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct SendChannelMessage {
    _private: (),
}
impl SendChannelMessage {
    /// Creates a new builder-style object to manufacture [`SendChannelMessageInput`](crate::input::SendChannelMessageInput)
    pub fn builder() -> crate::input::send_channel_message_input::Builder {
        crate::input::send_channel_message_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for SendChannelMessage {
    type Output = std::result::Result<crate::output::SendChannelMessageOutput, crate::error::Error>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            Err(crate::operation_deser::parse_error(response))
        } else {
            crate::operation_deser::parse_send_channel_message_response(response)
        }
    }
}

/// Update a channel's attributes.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct UpdateChannel {
    _private: (),
}
impl UpdateChannel {
    /// Creates a new builder-style object to manufacture [`UpdateChannelInput`](crate::input::UpdateChannelInput)
    pub fn builder() -> crate::input::update_channel_input::Builder {
        crate::input::update_channel_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for UpdateChannel {
    type Output = std::result::Result<crate::output::UpdateChannelOutput, crate::error::Error>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            Err(crate::operation_deser::parse_error(response))
        } else {
            crate::operation_deser::parse_update_channel_response(response)
        }
    }
}
