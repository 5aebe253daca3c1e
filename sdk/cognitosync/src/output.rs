/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DeleteDatasetOutput {
    pub dataset: std::option::Option<crate::model::Dataset>,
}
/// See [`DeleteDatasetOutput`](crate::output::DeleteDatasetOutput)
pub mod delete_dataset_output {
    /// A builder for [`DeleteDatasetOutput`](crate::output::DeleteDatasetOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) dataset: std::option::Option<crate::model::Dataset>,
    }
    impl Builder {
        pub fn dataset(mut self, input: impl Into<crate::model::Dataset>) -> Self {
            self.dataset = Some(input.into());
            self
        }
        pub fn set_dataset(mut self, input: std::option::Option<crate::model::Dataset>) -> Self {
            self.dataset = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteDatasetOutput`](crate::output::DeleteDatasetOutput)
        pub fn build(self) -> crate::output::DeleteDatasetOutput {
            crate::output::DeleteDatasetOutput {
                dataset: self.dataset,
            }
        }
    }
}
impl DeleteDatasetOutput {
    /// Creates a new builder-style object to manufacture [`DeleteDatasetOutput`](crate::output::DeleteDatasetOutput)
    pub fn builder() -> crate::output::delete_dataset_output::Builder {
        crate::output::delete_dataset_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DescribeDatasetOutput {
    pub dataset: std::option::Option<crate::model::Dataset>,
}
/// See [`DescribeDatasetOutput`](crate::output::DescribeDatasetOutput)
pub mod describe_dataset_output {
    /// A builder for [`DescribeDatasetOutput`](crate::output::DescribeDatasetOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) dataset: std::option::Option<crate::model::Dataset>,
    }
    impl Builder {
        pub fn dataset(mut self, input: impl Into<crate::model::Dataset>) -> Self {
            self.dataset = Some(input.into());
            self
        }
        pub fn set_dataset(mut self, input: std::option::Option<crate::model::Dataset>) -> Self {
            self.dataset = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeDatasetOutput`](crate::output::DescribeDatasetOutput)
        pub fn build(self) -> crate::output::DescribeDatasetOutput {
            crate::output::DescribeDatasetOutput {
                dataset: self.dataset,
            }
        }
    }
}
impl DescribeDatasetOutput {
    /// Creates a new builder-style object to manufacture [`DescribeDatasetOutput`](crate::output::DescribeDatasetOutput)
    pub fn builder() -> crate::output::describe_dataset_output::Builder {
        crate::output::describe_dataset_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetIdentityPoolConfigurationOutput {
    pub identity_pool_id: std::option::Option<String>,
    /// Options to apply to this identity pool for push synchronization.
    pub push_sync: std::option::Option<crate::model::PushSync>,
    /// Options to apply to this identity pool for Amazon Cognito streams.
    pub cognito_streams: std::option::Option<crate::model::CognitoStreams>,
}
/// See [`GetIdentityPoolConfigurationOutput`](crate::output::GetIdentityPoolConfigurationOutput)
pub mod get_identity_pool_configuration_output {
    /// A builder for [`GetIdentityPoolConfigurationOutput`](crate::output::GetIdentityPoolConfigurationOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) identity_pool_id: std::option::Option<String>,
        pub(crate) push_sync: std::option::Option<crate::model::PushSync>,
        pub(crate) cognito_streams: std::option::Option<crate::model::CognitoStreams>,
    }
    impl Builder {
        pub fn identity_pool_id(mut self, input: impl Into<String>) -> Self {
            self.identity_pool_id = Some(input.into());
            self
        }
        pub fn set_identity_pool_id(mut self, input: std::option::Option<String>) -> Self {
            self.identity_pool_id = input;
            self
        }
        pub fn push_sync(mut self, input: impl Into<crate::model::PushSync>) -> Self {
            self.push_sync = Some(input.into());
            self
        }
        pub fn set_push_sync(mut self, input: std::option::Option<crate::model::PushSync>) -> Self {
            self.push_sync = input;
            self
        }
        pub fn cognito_streams(mut self, input: impl Into<crate::model::CognitoStreams>) -> Self {
            self.cognito_streams = Some(input.into());
            self
        }
        pub fn set_cognito_streams(mut self, input: std::option::Option<crate::model::CognitoStreams>) -> Self {
            self.cognito_streams = input;
            self
        }
        /// Consumes the builder and constructs a [`GetIdentityPoolConfigurationOutput`](crate::output::GetIdentityPoolConfigurationOutput)
        pub fn build(self) -> crate::output::GetIdentityPoolConfigurationOutput {
            crate::output::GetIdentityPoolConfigurationOutput {
                identity_pool_id: self.identity_pool_id,
                push_sync: self.push_sync,
                cognito_streams: self.cognito_streams,
            }
        }
    }
}
impl GetIdentityPoolConfigurationOutput {
    /// Creates a new builder-style object to manufacture [`GetIdentityPoolConfigurationOutput`](crate::output::GetIdentityPoolConfigurationOutput)
    pub fn builder() -> crate::output::get_identity_pool_configuration_output::Builder {
        crate::output::get_identity_pool_configuration_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListDatasetsOutput {
    /// A set of datasets.
    pub datasets: std::option::Option<std::vec::Vec<crate::model::Dataset>>,
    /// Number of datasets returned.
    pub count: std::option::Option<i32>,
    /// A pagination token for obtaining the next page of results.
    pub next_token: std::option::Option<String>,
}
/// See [`ListDatasetsOutput`](crate::output::ListDatasetsOutput)
pub mod list_datasets_output {
    /// A builder for [`ListDatasetsOutput`](crate::output::ListDatasetsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) datasets: std::option::Option<std::vec::Vec<crate::model::Dataset>>,
        pub(crate) count: std::option::Option<i32>,
        pub(crate) next_token: std::option::Option<String>,
    }
    impl Builder {
        pub fn datasets(mut self, input: impl Into<crate::model::Dataset>) -> Self {
            let mut v = self.datasets.unwrap_or_default();
            v.push(input.into());
            self.datasets = Some(v);
            self
        }
        pub fn set_datasets(mut self, input: std::option::Option<std::vec::Vec<crate::model::Dataset>>) -> Self {
            self.datasets = input;
            self
        }
        pub fn count(mut self, input: i32) -> Self {
            self.count = Some(input);
            self
        }
        pub fn set_count(mut self, input: std::option::Option<i32>) -> Self {
            self.count = input;
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
        /// Consumes the builder and constructs a [`ListDatasetsOutput`](crate::output::ListDatasetsOutput)
        pub fn build(self) -> crate::output::ListDatasetsOutput {
            crate::output::ListDatasetsOutput {
                datasets: self.datasets,
                count: self.count,
                next_token: self.next_token,
            }
        }
    }
}
impl ListDatasetsOutput {
    /// Creates a new builder-style object to manufacture [`ListDatasetsOutput`](crate::output::ListDatasetsOutput)
    pub fn builder() -> crate::output::list_datasets_output::Builder {
        crate::output::list_datasets_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListRecordsOutput {
    /// A list of all records.
    pub records: std::option::Option<std::vec::Vec<crate::model::Record>>,
    pub next_token: std::option::Option<String>,
    /// Total number of records.
    pub count: std::option::Option<i32>,
    /// Server sync count for this dataset.
    pub dataset_sync_count: std::option::Option<i64>,
    pub last_modified_by: std::option::Option<String>,
    /// Names of merged datasets.
    pub merged_dataset_names: std::option::Option<std::vec::Vec<String>>,
    /// Indicates whether the dataset exists.
    pub dataset_exists: std::option::Option<bool>,
    /// A boolean value specifying whether to delete the dataset locally.
    pub dataset_deleted_after_requested_sync_count: std::option::Option<bool>,
    pub sync_session_token: std::option::Option<String>,
}
/// See [`ListRecordsOutput`](crate::output::ListRecordsOutput)
pub mod list_records_output {
    /// A builder for [`ListRecordsOutput`](crate::output::ListRecordsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) records: std::option::Option<std::vec::Vec<crate::model::Record>>,
        pub(crate) next_token: std::option::Option<String>,
        pub(crate) count: std::option::Option<i32>,
        pub(crate) dataset_sync_count: std::option::Option<i64>,
        pub(crate) last_modified_by: std::option::Option<String>,
        pub(crate) merged_dataset_names: std::option::Option<std::vec::Vec<String>>,
        pub(crate) dataset_exists: std::option::Option<bool>,
        pub(crate) dataset_deleted_after_requested_sync_count: std::option::Option<bool>,
        pub(crate) sync_session_token: std::option::Option<String>,
    }
    impl Builder {
        pub fn records(mut self, input: impl Into<crate::model::Record>) -> Self {
            let mut v = self.records.unwrap_or_default();
            v.push(input.into());
            self.records = Some(v);
            self
        }
        pub fn set_records(mut self, input: std::option::Option<std::vec::Vec<crate::model::Record>>) -> Self {
            self.records = input;
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
        pub fn count(mut self, input: i32) -> Self {
            self.count = Some(input);
            self
        }
        pub fn set_count(mut self, input: std::option::Option<i32>) -> Self {
            self.count = input;
            self
        }
        pub fn dataset_sync_count(mut self, input: i64) -> Self {
            self.dataset_sync_count = Some(input);
            self
        }
        pub fn set_dataset_sync_count(mut self, input: std::option::Option<i64>) -> Self {
            self.dataset_sync_count = input;
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
        pub fn merged_dataset_names(mut self, input: impl Into<String>) -> Self {
            let mut v = self.merged_dataset_names.unwrap_or_default();
            v.push(input.into());
            self.merged_dataset_names = Some(v);
            self
        }
        pub fn set_merged_dataset_names(mut self, input: std::option::Option<std::vec::Vec<String>>) -> Self {
            self.merged_dataset_names = input;
            self
        }
        pub fn dataset_exists(mut self, input: bool) -> Self {
            self.dataset_exists = Some(input);
            self
        }
        pub fn set_dataset_exists(mut self, input: std::option::Option<bool>) -> Self {
            self.dataset_exists = input;
            self
        }
        pub fn dataset_deleted_after_requested_sync_count(mut self, input: bool) -> Self {
            self.dataset_deleted_after_requested_sync_count = Some(input);
            self
        }
        pub fn set_dataset_deleted_after_requested_sync_count(mut self, input: std::option::Option<bool>) -> Self {
            self.dataset_deleted_after_requested_sync_count = input;
            self
        }
        pub fn sync_session_token(mut self, input: impl Into<String>) -> Self {
            self.sync_session_token = Some(input.into());
            self
        }
        pub fn set_sync_session_token(mut self, input: std::option::Option<String>) -> Self {
            self.sync_session_token = input;
            self
        }
        /// Consumes the builder and constructs a [`ListRecordsOutput`](crate::output::ListRecordsOutput)
        pub fn build(self) -> crate::output::ListRecordsOutput {
            crate::output::ListRecordsOutput {
                records: self.records,
                next_token: self.next_token,
                count: self.count,
                dataset_sync_count: self.dataset_sync_count,
                last_modified_by: self.last_modified_by,
                merged_dataset_names: self.merged_dataset_names,
                dataset_exists: self.dataset_exists,
                dataset_deleted_after_requested_sync_count: self.dataset_deleted_after_requested_sync_count,
                sync_session_token: self.sync_session_token,
            }
        }
    }
}
impl ListRecordsOutput {
    /// Creates a new builder-style object to manufacture [`ListRecordsOutput`](crate::output::ListRecordsOutput)
    pub fn builder() -> crate::output::list_records_output::Builder {
        crate::output::list_records_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct RegisterDeviceOutput {
    /// The unique ID generated for this device by Cognito.
    pub device_id: std::option::Option<String>,
}
/// See [`RegisterDeviceOutput`](crate::output::RegisterDeviceOutput)
pub mod register_device_output {
    /// A builder for [`RegisterDeviceOutput`](crate::output::RegisterDeviceOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) device_id: std::option::Option<String>,
    }
    impl Builder {
        pub fn device_id(mut self, input: impl Into<String>) -> Self {
            self.device_id = Some(input.into());
            self
        }
        pub fn set_device_id(mut self, input: std::option::Option<String>) -> Self {
            self.device_id = input;
            self
        }
        /// Consumes the builder and constructs a [`RegisterDeviceOutput`](crate::output::RegisterDeviceOutput)
        pub fn build(self) -> crate::output::RegisterDeviceOutput {
            crate::output::RegisterDeviceOutput {
                device_id: self.device_id,
            }
        }
    }
}
impl RegisterDeviceOutput {
    /// Creates a new builder-style object to manufacture [`RegisterDeviceOutput`](crate::output::RegisterDeviceOutput)
    pub fn builder() -> crate::output::register_device_output::Builder {
        crate::output::register_device_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct SetIdentityPoolConfigurationOutput {
    pub identity_pool_id: std::option::Option<String>,
    /// Options to apply to this identity pool for push synchronization.
    pub push_sync: std::option::Option<crate::model::PushSync>,
    /// Options to apply to this identity pool for Amazon Cognito streams.
    pub cognito_streams: std::option::Option<crate::model::CognitoStreams>,
}
/// See [`SetIdentityPoolConfigurationOutput`](crate::output::SetIdentityPoolConfigurationOutput)
pub mod set_identity_pool_configuration_output {
    /// A builder for [`SetIdentityPoolConfigurationOutput`](crate::output::SetIdentityPoolConfigurationOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) identity_pool_id: std::option::Option<String>,
        pub(crate) push_sync: std::option::Option<crate::model::PushSync>,
        pub(crate) cognito_streams: std::option::Option<crate::model::CognitoStreams>,
    }
    impl Builder {
        pub fn identity_pool_id(mut self, input: impl Into<String>) -> Self {
            self.identity_pool_id = Some(input.into());
            self
        }
        pub fn set_identity_pool_id(mut self, input: std::option::Option<String>) -> Self {
            self.identity_pool_id = input;
            self
        }
        pub fn push_sync(mut self, input: impl Into<crate::model::PushSync>) -> Self {
            self.push_sync = Some(input.into());
            self
        }
        pub fn set_push_sync(mut self, input: std::option::Option<crate::model::PushSync>) -> Self {
            self.push_sync = input;
            self
        }
        pub fn cognito_streams(mut self, input: impl Into<crate::model::CognitoStreams>) -> Self {
            self.cognito_streams = Some(input.into());
            self
        }
        pub fn set_cognito_streams(mut self, input: std::option::Option<crate::model::CognitoStreams>) -> Self {
            self.cognito_streams = input;
            self
        }
        /// Consumes the builder and constructs a [`SetIdentityPoolConfigurationOutput`](crate::output::SetIdentityPoolConfigurationOutput)
        pub fn build(self) -> crate::output::SetIdentityPoolConfigurationOutput {
            crate::output::SetIdentityPoolConfigurationOutput {
                identity_pool_id: self.identity_pool_id,
                push_sync: self.push_sync,
                cognito_streams: self.cognito_streams,
            }
        }
    }
}
impl SetIdentityPoolConfigurationOutput {
    /// Creates a new builder-style object to manufacture [`SetIdentityPoolConfigurationOutput`](crate::output::SetIdentityPoolConfigurationOutput)
    pub fn builder() -> crate::output::set_identity_pool_configuration_output::Builder {
        crate::output::set_identity_pool_configuration_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct UpdateRecordsOutput {
    /// A list of records that have been updated.
    pub records: std::option::Option<std::vec::Vec<crate::model::Record>>,
}
/// See [`UpdateRecordsOutput`](crate::output::UpdateRecordsOutput)
pub mod update_records_output {
    /// A builder for [`UpdateRecordsOutput`](crate::output::UpdateRecordsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) records: std::option::Option<std::vec::Vec<crate::model::Record>>,
    }
    impl Builder {
        pub fn records(mut self, input: impl Into<crate::model::Record>) -> Self {
            let mut v = self.records.unwrap_or_default();
            v.push(input.into());
            self.records = Some(v);
            self
        }
        pub fn set_records(mut self, input: std::option::Option<std::vec::Vec<crate::model::Record>>) -> Self {
            self.records = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateRecordsOutput`](crate::output::UpdateRecordsOutput)
        pub fn build(self) -> crate::output::UpdateRecordsOutput {
            crate::output::UpdateRecordsOutput {
                records: self.records,
            }
        }
    }
}
impl UpdateRecordsOutput {
    /// Creates a new builder-style object to manufacture [`UpdateRecordsOutput`](crate::output::UpdateRecordsOutput)
    pub fn builder() -> crate::output::update_records_output::Builder {
        crate::output::update_records_output::Builder::default()
    }
}

