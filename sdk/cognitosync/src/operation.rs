/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Deletes the specific dataset. The dataset will be deleted permanently, and the action can't
/// be undone. Datasets that this dataset was merged with will no longer report the merge. Any
/// subsequent operation on this dataset will result in a ResourceNotFoundException.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteDataset {
    _private: (),
}
impl DeleteDataset {
    /// Creates a new builder-style object to manufacture [`DeleteDatasetInput`](crate::input::DeleteDatasetInput)
    pub fn builder() -> crate::input::delete_dataset_input::Builder {
        crate::input::delete_dataset_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DeleteDataset {
    type Output = std::result::Result<crate::output::DeleteDatasetOutput, crate::error::Error>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            Err(crate::operation_deser::parse_error(response))
        } else {
            crate::operation_deser::parse_delete_dataset_response(response)
        }
    }
}

/// Gets meta data about a dataset by identity and dataset name.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeDataset {
    _private: (),
}
impl DescribeDataset {
    /// Creates a new builder-style object to manufacture [`DescribeDatasetInput`](crate::input::DescribeDatasetInput)
    pub fn builder() -> crate::input::describe_dataset_input::Builder {
        crate::input::describe_dataset_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DescribeDataset {
    type Output = std::result::Result<crate::output::DescribeDatasetOutput, crate::error::Error>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            Err(crate::operation_deser::parse_error(response))
        } else {
            crate::operation_deser::parse_describe_dataset_response(response)
        }
    }
}

/// Gets the configuration settings of an identity pool.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct GetIdentityPoolConfiguration {
    _private: (),
}
impl GetIdentityPoolConfiguration {
    /// Creates a new builder-style object to manufacture [`GetIdentityPoolConfigurationInput`](crate::input::GetIdentityPoolConfigurationInput)
    pub fn builder() -> crate::input::get_identity_pool_configuration_input::Builder {
        crate::input::get_identity_pool_configuration_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for GetIdentityPoolConfiguration {
    type Output = std::result::Result<crate::output::GetIdentityPoolConfigurationOutput, crate::error::Error>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            Err(crate::operation_deser::parse_error(response))
        } else {
            crate::operation_deser::parse_get_identity_pool_configuration_response(response)
        }
    }
}

/// Lists datasets for an identity.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListDatasets {
    _private: (),
}
impl ListDatasets {
    /// Creates a new builder-style object to manufacture [`ListDatasetsInput`](crate::input::ListDatasetsInput)
    pub fn builder() -> crate::input::list_datasets_input::Builder {
        crate::input::list_datasets_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListDatasets {
    type Output = std::result::Result<crate::output::ListDatasetsOutput, crate::error::Error>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            Err(crate::operation_deser::parse_error(response))
        } else {
            crate::operation_deser::parse_list_datasets_response(response)
        }
    }
}

/// Gets paginated records, optionally changed after a particular sync count for a dataset and
/// identity.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListRecords {
    _private: (),
}
impl ListRecords {
    /// Creates a new builder-style object to manufacture [`ListRecordsInput`](crate::input::ListRecordsInput)
    pub fn builder() -> crate::input::list_records_input::Builder {
        crate::input::list_records_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListRecords {
    type Output = std::result::Result<crate::output::ListRecordsOutput, crate::error::Error>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            Err(crate::operation_deser::parse_error(response))
        } else {
            crate::operation_deser::parse_list_records_response(response)
        }
    }
}

/// Registers a device to receive push sync notifications.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct RegisterDevice {
    _private: (),
}
impl RegisterDevice {
    /// Creates a new builder-style object to manufacture [`RegisterDeviceInput`](crate::input::RegisterDeviceInput)
    pub fn builder() -> crate::input::register_device_input::Builder {
        crate::input::register_device_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for RegisterDevice {
    type Output = std::result::Result<crate::output::RegisterDeviceOutput, crate::error::Error>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            Err(crate::operation_deser::parse_error(response))
        } else {
            crate::operation_deser::parse_register_device_response(response)
        }
    }
}

/// Sets the necessary configuration for push sync.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct SetIdentityPoolConfiguration {
    _private: (),
}
impl SetIdentityPoolConfiguration {
    /// Creates a new builder-style object to manufacture [`SetIdentityPoolConfigurationInput`](crate::input::SetIdentityPoolConfigurationInput)
    pub fn builder() -> crate::input::set_identity_pool_configuration_input::Builder {
        crate::input::set_identity_pool_configuration_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for SetIdentityPoolConfiguration {
    type Output = std::result::Result<crate::output::SetIdentityPoolConfigurationOutput, crate::error::Error>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            Err(crate::operation_deser::parse_error(response))
        } else {
            crate::operation_deser::parse_set_identity_pool_configuration_response(response)
        }
    }
}

/// Posts updates to records and adds and deletes records for a dataset and user.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct UpdateRecords {
    _private: (),
}
impl UpdateRecords {
    /// Creates a new builder-style object to manufacture [`UpdateRecordsInput`](crate::input::UpdateRecordsInput)
    pub fn builder() -> crate::input::update_records_input::Builder {
        crate::input::update_records_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for UpdateRecords {
    type Output = std::result::Result<crate::output::UpdateRecordsOutput, crate::error::Error>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            Err(crate::operation_deser::parse_error(response))
        } else {
            crate::operation_deser::parse_update_records_response(response)
        }
    }
}
