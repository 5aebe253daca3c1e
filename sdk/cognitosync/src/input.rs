/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_http::operation::BuildError;

/// See [`DeleteDatasetInput`](crate::input::DeleteDatasetInput)
pub mod delete_dataset_input {
    /// A builder for [`DeleteDatasetInput`](crate::input::DeleteDatasetInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) identity_pool_id: std::option::Option<String>,
        pub(crate) identity_id: std::option::Option<String>,
        pub(crate) dataset_name: std::option::Option<String>,
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
        /// Consumes the builder and constructs a [`DeleteDatasetInput`](crate::input::DeleteDatasetInput)
        pub fn build(self) -> std::result::Result<crate::input::DeleteDatasetInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DeleteDatasetInput {
                identity_pool_id: self.identity_pool_id,
                identity_id: self.identity_id,
                dataset_name: self.dataset_name,
            })
        }
    }
}
impl DeleteDatasetInput {
    /// Creates a new builder-style object to manufacture [`DeleteDatasetInput`](crate::input::DeleteDatasetInput)
    pub fn builder() -> crate::input::delete_dataset_input::Builder {
        crate::input::delete_dataset_input::Builder::default()
    }
}
impl DeleteDatasetInput {
    fn uri_base(&self, output: &mut String) -> Result<(), BuildError> {
        let input_identity_pool_id = self.identity_pool_id.as_deref().unwrap_or_default();
        let identity_pool_id = smithy_http::label::fmt_string(input_identity_pool_id);
        if identity_pool_id.is_empty() {
            return Err(BuildError::MissingField {
                field: "identity_pool_id",
                details: "cannot be empty or unset",
            });
        }
        let input_identity_id = self.identity_id.as_deref().unwrap_or_default();
        let identity_id = smithy_http::label::fmt_string(input_identity_id);
        if identity_id.is_empty() {
            return Err(BuildError::MissingField {
                field: "identity_id",
                details: "cannot be empty or unset",
            });
        }
        let input_dataset_name = self.dataset_name.as_deref().unwrap_or_default();
        let dataset_name = smithy_http::label::fmt_string(input_dataset_name);
        if dataset_name.is_empty() {
            return Err(BuildError::MissingField {
                field: "dataset_name",
                details: "cannot be empty or unset",
            });
        }
        output.push_str(&format!(
            "/identitypools/{IdentityPoolId}/identities/{IdentityId}/datasets/{DatasetName}",
            IdentityPoolId = identity_pool_id, IdentityId = identity_id, DatasetName = dataset_name
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
    ) -> Result<smithy_http::operation::Operation<crate::operation::DeleteDataset>, BuildError> {
        let request = smithy_http::operation::build_http_request(Some(self))?;
        crate::input::assemble_operation(
            request,
            config,
            crate::operation::DeleteDataset::new(),
            "DeleteDataset",
        )
    }
}
impl smithy_http::operation::BuildHttpRequest for DeleteDatasetInput {
    fn build_http_request(
        &self,
    ) -> Result<http::Request<smithy_http::body::SdkBody>, BuildError> {
        let builder = self.update_http_builder(http::request::Builder::new())?;
        crate::input::assemble(builder, smithy_http::body::SdkBody::empty(), false)
    }
}
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DeleteDatasetInput {
    /// A name-spaced GUID (for example, us-east-1:23EC4050-6AEA-7089-A2DD-08002EXAMPLE) created by
    /// Amazon Cognito. GUID generation is unique within a region.
    pub identity_pool_id: std::option::Option<String>,
    /// A name-spaced GUID (for example, us-east-1:23EC4050-6AEA-7089-A2DD-08002EXAMPLE) created by
    /// Amazon Cognito. GUID generation is unique within a region.
    pub identity_id: std::option::Option<String>,
    /// A string of up to 128 characters. Allowed characters are a-z, A-Z, 0-9, '_' (underscore),
    /// '-' (dash), and '.' (dot).
    pub dataset_name: std::option::Option<String>,
}

/// See [`DescribeDatasetInput`](crate::input::DescribeDatasetInput)
pub mod describe_dataset_input {
    /// A builder for [`DescribeDatasetInput`](crate::input::DescribeDatasetInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) identity_pool_id: std::option::Option<String>,
        pub(crate) identity_id: std::option::Option<String>,
        pub(crate) dataset_name: std::option::Option<String>,
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
        /// Consumes the builder and constructs a [`DescribeDatasetInput`](crate::input::DescribeDatasetInput)
        pub fn build(self) -> std::result::Result<crate::input::DescribeDatasetInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeDatasetInput {
                identity_pool_id: self.identity_pool_id,
                identity_id: self.identity_id,
                dataset_name: self.dataset_name,
            })
        }
    }
}
impl DescribeDatasetInput {
    /// Creates a new builder-style object to manufacture [`DescribeDatasetInput`](crate::input::DescribeDatasetInput)
    pub fn builder() -> crate::input::describe_dataset_input::Builder {
        crate::input::describe_dataset_input::Builder::default()
    }
}
impl DescribeDatasetInput {
    fn uri_base(&self, output: &mut String) -> Result<(), BuildError> {
        let input_identity_pool_id = self.identity_pool_id.as_deref().unwrap_or_default();
        let identity_pool_id = smithy_http::label::fmt_string(input_identity_pool_id);
        if identity_pool_id.is_empty() {
            return Err(BuildError::MissingField {
                field: "identity_pool_id",
                details: "cannot be empty or unset",
            });
        }
        let input_identity_id = self.identity_id.as_deref().unwrap_or_default();
        let identity_id = smithy_http::label::fmt_string(input_identity_id);
        if identity_id.is_empty() {
            return Err(BuildError::MissingField {
                field: "identity_id",
                details: "cannot be empty or unset",
            });
        }
        let input_dataset_name = self.dataset_name.as_deref().unwrap_or_default();
        let dataset_name = smithy_http::label::fmt_string(input_dataset_name);
        if dataset_name.is_empty() {
            return Err(BuildError::MissingField {
                field: "dataset_name",
                details: "cannot be empty or unset",
            });
        }
        output.push_str(&format!(
            "/identitypools/{IdentityPoolId}/identities/{IdentityId}/datasets/{DatasetName}",
            IdentityPoolId = identity_pool_id, IdentityId = identity_id, DatasetName = dataset_name
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
    ) -> Result<smithy_http::operation::Operation<crate::operation::DescribeDataset>, BuildError> {
        let request = smithy_http::operation::build_http_request(Some(self))?;
        crate::input::assemble_operation(
            request,
            config,
            crate::operation::DescribeDataset::new(),
            "DescribeDataset",
        )
    }
}
impl smithy_http::operation::BuildHttpRequest for DescribeDatasetInput {
    fn build_http_request(
        &self,
    ) -> Result<http::Request<smithy_http::body::SdkBody>, BuildError> {
        let builder = self.update_http_builder(http::request::Builder::new())?;
        crate::input::assemble(builder, smithy_http::body::SdkBody::empty(), false)
    }
}
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DescribeDatasetInput {
    /// A name-spaced GUID (for example, us-east-1:23EC4050-6AEA-7089-A2DD-08002EXAMPLE) created by
    /// Amazon Cognito. GUID generation is unique within a region.
    pub identity_pool_id: std::option::Option<String>,
    /// A name-spaced GUID (for example, us-east-1:23EC4050-6AEA-7089-A2DD-08002EXAMPLE) created by
    /// Amazon Cognito. GUID generation is unique within a region.
    pub identity_id: std::option::Option<String>,
    /// A string of up to 128 characters. Allowed characters are a-z, A-Z, 0-9, '_' (underscore),
    /// '-' (dash), and '.' (dot).
    pub dataset_name: std::option::Option<String>,
}

/// See [`GetIdentityPoolConfigurationInput`](crate::input::GetIdentityPoolConfigurationInput)
pub mod get_identity_pool_configuration_input {
    /// A builder for [`GetIdentityPoolConfigurationInput`](crate::input::GetIdentityPoolConfigurationInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) identity_pool_id: std::option::Option<String>,
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
        /// Consumes the builder and constructs a [`GetIdentityPoolConfigurationInput`](crate::input::GetIdentityPoolConfigurationInput)
        pub fn build(self) -> std::result::Result<crate::input::GetIdentityPoolConfigurationInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetIdentityPoolConfigurationInput {
                identity_pool_id: self.identity_pool_id,
            })
        }
    }
}
impl GetIdentityPoolConfigurationInput {
    /// Creates a new builder-style object to manufacture [`GetIdentityPoolConfigurationInput`](crate::input::GetIdentityPoolConfigurationInput)
    pub fn builder() -> crate::input::get_identity_pool_configuration_input::Builder {
        crate::input::get_identity_pool_configuration_input::Builder::default()
    }
}
impl GetIdentityPoolConfigurationInput {
    fn uri_base(&self, output: &mut String) -> Result<(), BuildError> {
        let input_identity_pool_id = self.identity_pool_id.as_deref().unwrap_or_default();
        let identity_pool_id = smithy_http::label::fmt_string(input_identity_pool_id);
        if identity_pool_id.is_empty() {
            return Err(BuildError::MissingField {
                field: "identity_pool_id",
                details: "cannot be empty or unset",
            });
        }
        output.push_str(&format!(
            "/identitypools/{IdentityPoolId}/configuration",
            IdentityPoolId = identity_pool_id
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
    ) -> Result<smithy_http::operation::Operation<crate::operation::GetIdentityPoolConfiguration>, BuildError> {
        let request = smithy_http::operation::build_http_request(Some(self))?;
        crate::input::assemble_operation(
            request,
            config,
            crate::operation::GetIdentityPoolConfiguration::new(),
            "GetIdentityPoolConfiguration",
        )
    }
}
impl smithy_http::operation::BuildHttpRequest for GetIdentityPoolConfigurationInput {
    fn build_http_request(
        &self,
    ) -> Result<http::Request<smithy_http::body::SdkBody>, BuildError> {
        let builder = self.update_http_builder(http::request::Builder::new())?;
        crate::input::assemble(builder, smithy_http::body::SdkBody::empty(), false)
    }
}
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetIdentityPoolConfigurationInput {
    /// A name-spaced GUID (for example, us-east-1:23EC4050-6AEA-7089-A2DD-08002EXAMPLE) created by
    /// Amazon Cognito. This is the ID of the pool for which to return a configuration.
    pub identity_pool_id: std::option::Option<String>,
}

/// See [`ListDatasetsInput`](crate::input::ListDatasetsInput)
pub mod list_datasets_input {
    /// A builder for [`ListDatasetsInput`](crate::input::ListDatasetsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) identity_pool_id: std::option::Option<String>,
        pub(crate) identity_id: std::option::Option<String>,
        pub(crate) next_token: std::option::Option<String>,
        pub(crate) max_results: std::option::Option<i32>,
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
        pub fn identity_id(mut self, input: impl Into<String>) -> Self {
            self.identity_id = Some(input.into());
            self
        }
        pub fn set_identity_id(mut self, input: std::option::Option<String>) -> Self {
            self.identity_id = input;
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
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        /// Consumes the builder and constructs a [`ListDatasetsInput`](crate::input::ListDatasetsInput)
        pub fn build(self) -> std::result::Result<crate::input::ListDatasetsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListDatasetsInput {
                identity_pool_id: self.identity_pool_id,
                identity_id: self.identity_id,
                next_token: self.next_token,
                max_results: self.max_results,
            })
        }
    }
}
impl ListDatasetsInput {
    /// Creates a new builder-style object to manufacture [`ListDatasetsInput`](crate::input::ListDatasetsInput)
    pub fn builder() -> crate::input::list_datasets_input::Builder {
        crate::input::list_datasets_input::Builder::default()
    }
}
impl ListDatasetsInput {
    fn uri_base(&self, output: &mut String) -> Result<(), BuildError> {
        let input_identity_pool_id = self.identity_pool_id.as_deref().unwrap_or_default();
        let identity_pool_id = smithy_http::label::fmt_string(input_identity_pool_id);
        if identity_pool_id.is_empty() {
            return Err(BuildError::MissingField {
                field: "identity_pool_id",
                details: "cannot be empty or unset",
            });
        }
        let input_identity_id = self.identity_id.as_deref().unwrap_or_default();
        let identity_id = smithy_http::label::fmt_string(input_identity_id);
        if identity_id.is_empty() {
            return Err(BuildError::MissingField {
                field: "identity_id",
                details: "cannot be empty or unset",
            });
        }
        output.push_str(&format!(
            "/identitypools/{IdentityPoolId}/identities/{IdentityId}/datasets",
            IdentityPoolId = identity_pool_id, IdentityId = identity_id
        ));
        Ok(())
    }
    fn uri_query(&self, output: &mut String) -> Result<(), BuildError> {
        let mut query = smithy_http::query::Writer::new(output);
        if let Some(inner_1) = &self.next_token {
            query.push_kv("nextToken", &smithy_http::query::fmt_string(&inner_1));
        }
        if let Some(inner_2) = &self.max_results {
            query.push_kv("maxResults", &smithy_http::query::fmt_default(&inner_2));
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
    ) -> Result<smithy_http::operation::Operation<crate::operation::ListDatasets>, BuildError> {
        let request = smithy_http::operation::build_http_request(Some(self))?;
        crate::input::assemble_operation(
            request,
            config,
            crate::operation::ListDatasets::new(),
            "ListDatasets",
        )
    }
}
impl smithy_http::operation::BuildHttpRequest for ListDatasetsInput {
    fn build_http_request(
        &self,
    ) -> Result<http::Request<smithy_http::body::SdkBody>, BuildError> {
        let builder = self.update_http_builder(http::request::Builder::new())?;
        crate::input::assemble(builder, smithy_http::body::SdkBody::empty(), false)
    }
}
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListDatasetsInput {
    /// A name-spaced GUID (for example, us-east-1:23EC4050-6AEA-7089-A2DD-08002EXAMPLE) created by
    /// Amazon Cognito. GUID generation is unique within a region.
    pub identity_pool_id: std::option::Option<String>,
    /// A name-spaced GUID (for example, us-east-1:23EC4050-6AEA-7089-A2DD-08002EXAMPLE) created by
    /// Amazon Cognito. GUID generation is unique within a region.
    pub identity_id: std::option::Option<String>,
    /// A pagination token for obtaining the next page of results.
    pub next_token: std::option::Option<String>,
    /// The maximum number of results to be returned.
    pub max_results: std::option::Option<i32>,
}

/// See [`ListRecordsInput`](crate::input::ListRecordsInput)
pub mod list_records_input {
    /// A builder for [`ListRecordsInput`](crate::input::ListRecordsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) identity_pool_id: std::option::Option<String>,
        pub(crate) identity_id: std::option::Option<String>,
        pub(crate) dataset_name: std::option::Option<String>,
        pub(crate) last_sync_count: std::option::Option<i64>,
        pub(crate) next_token: std::option::Option<String>,
        pub(crate) max_results: std::option::Option<i32>,
        pub(crate) sync_session_token: std::option::Option<String>,
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
        pub fn last_sync_count(mut self, input: i64) -> Self {
            self.last_sync_count = Some(input);
            self
        }
        pub fn set_last_sync_count(mut self, input: std::option::Option<i64>) -> Self {
            self.last_sync_count = input;
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
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
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
        /// Consumes the builder and constructs a [`ListRecordsInput`](crate::input::ListRecordsInput)
        pub fn build(self) -> std::result::Result<crate::input::ListRecordsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListRecordsInput {
                identity_pool_id: self.identity_pool_id,
                identity_id: self.identity_id,
                dataset_name: self.dataset_name,
                last_sync_count: self.last_sync_count,
                next_token: self.next_token,
                max_results: self.max_results,
                sync_session_token: self.sync_session_token,
            })
        }
    }
}
impl ListRecordsInput {
    /// Creates a new builder-style object to manufacture [`ListRecordsInput`](crate::input::ListRecordsInput)
    pub fn builder() -> crate::input::list_records_input::Builder {
        crate::input::list_records_input::Builder::default()
    }
}
impl ListRecordsInput {
    fn uri_base(&self, output: &mut String) -> Result<(), BuildError> {
        let input_identity_pool_id = self.identity_pool_id.as_deref().unwrap_or_default();
        let identity_pool_id = smithy_http::label::fmt_string(input_identity_pool_id);
        if identity_pool_id.is_empty() {
            return Err(BuildError::MissingField {
                field: "identity_pool_id",
                details: "cannot be empty or unset",
            });
        }
        let input_identity_id = self.identity_id.as_deref().unwrap_or_default();
        let identity_id = smithy_http::label::fmt_string(input_identity_id);
        if identity_id.is_empty() {
            return Err(BuildError::MissingField {
                field: "identity_id",
                details: "cannot be empty or unset",
            });
        }
        let input_dataset_name = self.dataset_name.as_deref().unwrap_or_default();
        let dataset_name = smithy_http::label::fmt_string(input_dataset_name);
        if dataset_name.is_empty() {
            return Err(BuildError::MissingField {
                field: "dataset_name",
                details: "cannot be empty or unset",
            });
        }
        output.push_str(&format!(
            "/identitypools/{IdentityPoolId}/identities/{IdentityId}/datasets/{DatasetName}/records",
            IdentityPoolId = identity_pool_id, IdentityId = identity_id, DatasetName = dataset_name
        ));
        Ok(())
    }
    fn uri_query(&self, output: &mut String) -> Result<(), BuildError> {
        let mut query = smithy_http::query::Writer::new(output);
        if let Some(inner_1) = &self.last_sync_count {
            query.push_kv("lastSyncCount", &smithy_http::query::fmt_default(&inner_1));
        }
        if let Some(inner_2) = &self.next_token {
            query.push_kv("nextToken", &smithy_http::query::fmt_string(&inner_2));
        }
        if let Some(inner_3) = &self.max_results {
            query.push_kv("maxResults", &smithy_http::query::fmt_default(&inner_3));
        }
        if let Some(inner_4) = &self.sync_session_token {
            query.push_kv("syncSessionToken", &smithy_http::query::fmt_string(&inner_4));
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
    ) -> Result<smithy_http::operation::Operation<crate::operation::ListRecords>, BuildError> {
        let request = smithy_http::operation::build_http_request(Some(self))?;
        crate::input::assemble_operation(
            request,
            config,
            crate::operation::ListRecords::new(),
            "ListRecords",
        )
    }
}
impl smithy_http::operation::BuildHttpRequest for ListRecordsInput {
    fn build_http_request(
        &self,
    ) -> Result<http::Request<smithy_http::body::SdkBody>, BuildError> {
        let builder = self.update_http_builder(http::request::Builder::new())?;
        crate::input::assemble(builder, smithy_http::body::SdkBody::empty(), false)
    }
}
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListRecordsInput {
    /// A name-spaced GUID (for example, us-east-1:23EC4050-6AEA-7089-A2DD-08002EXAMPLE) created by
    /// Amazon Cognito. GUID generation is unique within a region.
    pub identity_pool_id: std::option::Option<String>,
    /// A name-spaced GUID (for example, us-east-1:23EC4050-6AEA-7089-A2DD-08002EXAMPLE) created by
    /// Amazon Cognito. GUID generation is unique within a region.
    pub identity_id: std::option::Option<String>,
    /// A string of up to 128 characters. Allowed characters are a-z, A-Z, 0-9, '_' (underscore),
    /// '-' (dash), and '.' (dot).
    pub dataset_name: std::option::Option<String>,
    /// The last server sync count for this record.
    pub last_sync_count: std::option::Option<i64>,
    pub next_token: std::option::Option<String>,
    pub max_results: std::option::Option<i32>,
    /// A token containing a session ID, identity ID, and expiration.
    pub sync_session_token: std::option::Option<String>,
}

/// See [`RegisterDeviceInput`](crate::input::RegisterDeviceInput)
pub mod register_device_input {
    /// A builder for [`RegisterDeviceInput`](crate::input::RegisterDeviceInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) identity_pool_id: std::option::Option<String>,
        pub(crate) identity_id: std::option::Option<String>,
        pub(crate) platform: std::option::Option<crate::model::Platform>,
        pub(crate) token: std::option::Option<String>,
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
        pub fn identity_id(mut self, input: impl Into<String>) -> Self {
            self.identity_id = Some(input.into());
            self
        }
        pub fn set_identity_id(mut self, input: std::option::Option<String>) -> Self {
            self.identity_id = input;
            self
        }
        pub fn platform(mut self, input: impl Into<crate::model::Platform>) -> Self {
            self.platform = Some(input.into());
            self
        }
        pub fn set_platform(mut self, input: std::option::Option<crate::model::Platform>) -> Self {
            self.platform = input;
            self
        }
        pub fn token(mut self, input: impl Into<String>) -> Self {
            self.token = Some(input.into());
            self
        }
        pub fn set_token(mut self, input: std::option::Option<String>) -> Self {
            self.token = input;
            self
        }
        /// Consumes the builder and constructs a [`RegisterDeviceInput`](crate::input::RegisterDeviceInput)
        pub fn build(self) -> std::result::Result<crate::input::RegisterDeviceInput, smithy_http::operation::BuildError> {
            Ok(crate::input::RegisterDeviceInput {
                identity_pool_id: self.identity_pool_id,
                identity_id: self.identity_id,
                platform: self.platform,
                token: self.token,
            })
        }
    }
}
impl RegisterDeviceInput {
    /// Creates a new builder-style object to manufacture [`RegisterDeviceInput`](crate::input::RegisterDeviceInput)
    pub fn builder() -> crate::input::register_device_input::Builder {
        crate::input::register_device_input::Builder::default()
    }
}
impl RegisterDeviceInput {
    fn uri_base(&self, output: &mut String) -> Result<(), BuildError> {
        let input_identity_pool_id = self.identity_pool_id.as_deref().unwrap_or_default();
        let identity_pool_id = smithy_http::label::fmt_string(input_identity_pool_id);
        if identity_pool_id.is_empty() {
            return Err(BuildError::MissingField {
                field: "identity_pool_id",
                details: "cannot be empty or unset",
            });
        }
        let input_identity_id = self.identity_id.as_deref().unwrap_or_default();
        let identity_id = smithy_http::label::fmt_string(input_identity_id);
        if identity_id.is_empty() {
            return Err(BuildError::MissingField {
                field: "identity_id",
                details: "cannot be empty or unset",
            });
        }
        output.push_str(&format!(
            "/identitypools/{IdentityPoolId}/identity/{IdentityId}/device",
            IdentityPoolId = identity_pool_id, IdentityId = identity_id
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
    ) -> Result<smithy_http::operation::Operation<crate::operation::RegisterDevice>, BuildError> {
        let request = smithy_http::operation::build_http_request(Some(self))?;
        crate::input::assemble_operation(
            request,
            config,
            crate::operation::RegisterDevice::new(),
            "RegisterDevice",
        )
    }
}
impl smithy_http::operation::BuildHttpRequest for RegisterDeviceInput {
    fn build_http_request(
        &self,
    ) -> Result<http::Request<smithy_http::body::SdkBody>, BuildError> {
        let builder = self.update_http_builder(http::request::Builder::new())?;
        let body = crate::operation_ser::serialize_operation_register_device(self)?;
        crate::input::assemble(builder, body, true)
    }
}
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct RegisterDeviceInput {
    /// A name-spaced GUID (for example, us-east-1:23EC4050-6AEA-7089-A2DD-08002EXAMPLE) created by
    /// Amazon Cognito. GUID generation is unique within a region.
    pub identity_pool_id: std::option::Option<String>,
    /// A name-spaced GUID (for example, us-east-1:23EC4050-6AEA-7089-A2DD-08002EXAMPLE) created by
    /// Amazon Cognito. GUID generation is unique within a region.
    pub identity_id: std::option::Option<String>,
    /// The SNS platform type (e.g. GCM, SDM, APNS, APNS_SANDBOX).
    pub platform: std::option::Option<crate::model::Platform>,
    /// The push token.
    pub token: std::option::Option<String>,
}

/// See [`SetIdentityPoolConfigurationInput`](crate::input::SetIdentityPoolConfigurationInput)
pub mod set_identity_pool_configuration_input {
    /// A builder for [`SetIdentityPoolConfigurationInput`](crate::input::SetIdentityPoolConfigurationInput)
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
        /// Consumes the builder and constructs a [`SetIdentityPoolConfigurationInput`](crate::input::SetIdentityPoolConfigurationInput)
        pub fn build(self) -> std::result::Result<crate::input::SetIdentityPoolConfigurationInput, smithy_http::operation::BuildError> {
            Ok(crate::input::SetIdentityPoolConfigurationInput {
                identity_pool_id: self.identity_pool_id,
                push_sync: self.push_sync,
                cognito_streams: self.cognito_streams,
            })
        }
    }
}
impl SetIdentityPoolConfigurationInput {
    /// Creates a new builder-style object to manufacture [`SetIdentityPoolConfigurationInput`](crate::input::SetIdentityPoolConfigurationInput)
    pub fn builder() -> crate::input::set_identity_pool_configuration_input::Builder {
        crate::input::set_identity_pool_configuration_input::Builder::default()
    }
}
impl SetIdentityPoolConfigurationInput {
    fn uri_base(&self, output: &mut String) -> Result<(), BuildError> {
        let input_identity_pool_id = self.identity_pool_id.as_deref().unwrap_or_default();
        let identity_pool_id = smithy_http::label::fmt_string(input_identity_pool_id);
        if identity_pool_id.is_empty() {
            return Err(BuildError::MissingField {
                field: "identity_pool_id",
                details: "cannot be empty or unset",
            });
        }
        output.push_str(&format!(
            "/identitypools/{IdentityPoolId}/configuration",
            IdentityPoolId = identity_pool_id
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
    ) -> Result<smithy_http::operation::Operation<crate::operation::SetIdentityPoolConfiguration>, BuildError> {
        let request = smithy_http::operation::build_http_request(Some(self))?;
        crate::input::assemble_operation(
            request,
            config,
            crate::operation::SetIdentityPoolConfiguration::new(),
            "SetIdentityPoolConfiguration",
        )
    }
}
impl smithy_http::operation::BuildHttpRequest for SetIdentityPoolConfigurationInput {
    fn build_http_request(
        &self,
    ) -> Result<http::Request<smithy_http::body::SdkBody>, BuildError> {
        let builder = self.update_http_builder(http::request::Builder::new())?;
        let body = crate::operation_ser::serialize_operation_set_identity_pool_configuration(self)?;
        crate::input::assemble(builder, body, true)
    }
}
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct SetIdentityPoolConfigurationInput {
    pub identity_pool_id: std::option::Option<String>,
    /// Options to apply to this identity pool for push synchronization.
    pub push_sync: std::option::Option<crate::model::PushSync>,
    /// Options to apply to this identity pool for Amazon Cognito streams.
    pub cognito_streams: std::option::Option<crate::model::CognitoStreams>,
}

/// See [`UpdateRecordsInput`](crate::input::UpdateRecordsInput)
pub mod update_records_input {
    /// A builder for [`UpdateRecordsInput`](crate::input::UpdateRecordsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) identity_pool_id: std::option::Option<String>,
        pub(crate) identity_id: std::option::Option<String>,
        pub(crate) dataset_name: std::option::Option<String>,
        pub(crate) device_id: std::option::Option<String>,
        pub(crate) record_patches: std::option::Option<std::vec::Vec<crate::model::RecordPatch>>,
        pub(crate) sync_session_token: std::option::Option<String>,
        pub(crate) client_context: std::option::Option<String>,
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
        pub fn device_id(mut self, input: impl Into<String>) -> Self {
            self.device_id = Some(input.into());
            self
        }
        pub fn set_device_id(mut self, input: std::option::Option<String>) -> Self {
            self.device_id = input;
            self
        }
        pub fn record_patches(mut self, input: impl Into<crate::model::RecordPatch>) -> Self {
            let mut v = self.record_patches.unwrap_or_default();
            v.push(input.into());
            self.record_patches = Some(v);
            self
        }
        pub fn set_record_patches(mut self, input: std::option::Option<std::vec::Vec<crate::model::RecordPatch>>) -> Self {
            self.record_patches = input;
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
        pub fn client_context(mut self, input: impl Into<String>) -> Self {
            self.client_context = Some(input.into());
            self
        }
        pub fn set_client_context(mut self, input: std::option::Option<String>) -> Self {
            self.client_context = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateRecordsInput`](crate::input::UpdateRecordsInput)
        pub fn build(self) -> std::result::Result<crate::input::UpdateRecordsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UpdateRecordsInput {
                identity_pool_id: self.identity_pool_id,
                identity_id: self.identity_id,
                dataset_name: self.dataset_name,
                device_id: self.device_id,
                record_patches: self.record_patches,
                sync_session_token: self.sync_session_token,
                client_context: self.client_context,
            })
        }
    }
}
impl UpdateRecordsInput {
    /// Creates a new builder-style object to manufacture [`UpdateRecordsInput`](crate::input::UpdateRecordsInput)
    pub fn builder() -> crate::input::update_records_input::Builder {
        crate::input::update_records_input::Builder::default()
    }
}
impl UpdateRecordsInput {
    fn uri_base(&self, output: &mut String) -> Result<(), BuildError> {
        let input_identity_pool_id = self.identity_pool_id.as_deref().unwrap_or_default();
        let identity_pool_id = smithy_http::label::fmt_string(input_identity_pool_id);
        if identity_pool_id.is_empty() {
            return Err(BuildError::MissingField {
                field: "identity_pool_id",
                details: "cannot be empty or unset",
            });
        }
        let input_identity_id = self.identity_id.as_deref().unwrap_or_default();
        let identity_id = smithy_http::label::fmt_string(input_identity_id);
        if identity_id.is_empty() {
            return Err(BuildError::MissingField {
                field: "identity_id",
                details: "cannot be empty or unset",
            });
        }
        let input_dataset_name = self.dataset_name.as_deref().unwrap_or_default();
        let dataset_name = smithy_http::label::fmt_string(input_dataset_name);
        if dataset_name.is_empty() {
            return Err(BuildError::MissingField {
                field: "dataset_name",
                details: "cannot be empty or unset",
            });
        }
        output.push_str(&format!(
            "/identitypools/{IdentityPoolId}/identities/{IdentityId}/datasets/{DatasetName}",
            IdentityPoolId = identity_pool_id, IdentityId = identity_id, DatasetName = dataset_name
        ));
        Ok(())
    }
    fn add_headers(
        &self,
        mut builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        if let Some(inner_1) = &self.client_context {
            if !inner_1.is_empty() {
                let header_value = http::header::HeaderValue::from_str(inner_1).map_err(|err| {
                    BuildError::InvalidField {
                        field: "client_context",
                        details: format!(
                            "`{}` cannot be used as a header value: {}",
                            inner_1, err
                        ),
                    }
                })?;
                builder = builder.header("x-amz-Client-Context", header_value);
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
    ) -> Result<smithy_http::operation::Operation<crate::operation::UpdateRecords>, BuildError> {
        let request = smithy_http::operation::build_http_request(Some(self))?;
        crate::input::assemble_operation(
            request,
            config,
            crate::operation::UpdateRecords::new(),
            "UpdateRecords",
        )
    }
}
impl smithy_http::operation::BuildHttpRequest for UpdateRecordsInput {
    fn build_http_request(
        &self,
    ) -> Result<http::Request<smithy_http::body::SdkBody>, BuildError> {
        let builder = self.update_http_builder(http::request::Builder::new())?;
        let body = crate::operation_ser::serialize_operation_update_records(self)?;
        crate::input::assemble(builder, body, true)
    }
}
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct UpdateRecordsInput {
    /// A name-spaced GUID (for example, us-east-1:23EC4050-6AEA-7089-A2DD-08002EXAMPLE) created by
    /// Amazon Cognito. GUID generation is unique within a region.
    pub identity_pool_id: std::option::Option<String>,
    /// A name-spaced GUID (for example, us-east-1:23EC4050-6AEA-7089-A2DD-08002EXAMPLE) created by
    /// Amazon Cognito. GUID generation is unique within a region.
    pub identity_id: std::option::Option<String>,
    /// A string of up to 128 characters. Allowed characters are a-z, A-Z, 0-9, '_' (underscore),
    /// '-' (dash), and '.' (dot).
    pub dataset_name: std::option::Option<String>,
    /// The unique ID generated for this device by Cognito.
    pub device_id: std::option::Option<String>,
    /// A list of patch operations.
    pub record_patches: std::option::Option<std::vec::Vec<crate::model::RecordPatch>>,
    /// The SyncSessionToken returned by a previous call to ListRecords for this dataset and
    /// identity.
    pub sync_session_token: std::option::Option<String>,
    /// Intended to supply a device ID that will populate the lastModifiedBy field referenced in
    /// other methods. The ClientContext field is not yet implemented.
    pub client_context: std::option::Option<String>,
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
        let input = crate::input::DescribeDatasetInput::builder()
            .identity_pool_id("us-east-1:abc")
            .identity_id("us-east-1:def")
            .dataset_name("notes")
            .build()
            .unwrap();
        let operation = input.make_operation(&config).unwrap();
        assert_eq!(operation.metadata().unwrap().service(), "cognitosync");
        assert!(logs_contain("assembled operation"));
    }
}
