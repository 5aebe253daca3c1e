/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_types::region::{ProvideRegion, Region};
use smithy_http::endpoint::Endpoint;
use smithy_http::operation::BuildError;

pub(crate) const SERVICE_NAME: &str = "medialive";
const ENDPOINT_PREFIX: &str = "medialive";

/// Service configuration: where requests for this service are sent.
#[derive(Clone)]
pub struct Config {
    pub(crate) endpoint: Option<Endpoint>,
    pub(crate) region: Option<Region>,
}
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut config = f.debug_struct("Config");
        config.field("endpoint", &self.endpoint);
        config.field("region", &self.region);
        config.finish()
    }
}
impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    /// Resolves the endpoint requests are sent to.
    ///
    /// An explicitly configured endpoint wins. Otherwise the regional endpoint
    /// `https://medialive.{region}.amazonaws.com` is used.
    pub fn endpoint(&self) -> Result<Endpoint, BuildError> {
        if let Some(endpoint) = &self.endpoint {
            return Ok(endpoint.clone());
        }
        let region = self.region.as_ref().ok_or(BuildError::MissingField {
            field: "region",
            details: "a region or an explicit endpoint is required to resolve the endpoint",
        })?;
        Endpoint::from_uri_str(&format!(
            "https://{}.{}.amazonaws.com",
            ENDPOINT_PREFIX, region
        ))
    }
}

#[derive(Default)]
pub struct Builder {
    endpoint: Option<Endpoint>,
    region: Option<Region>,
}
impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the regional endpoint, e.g. to reach a local mock of the service.
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the region from any region provider, e.g. a [`Region`] or
    /// [`EnvironmentProvider`](aws_types::region::EnvironmentProvider).
    pub fn region(mut self, region_provider: impl ProvideRegion) -> Self {
        self.region = region_provider.region();
        self
    }

    pub fn build(self) -> Config {
        Config {
            endpoint: self.endpoint,
            region: self.region,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::config::Config;
    use aws_types::region::Region;
    use http::Uri;
    use smithy_http::endpoint::Endpoint;
    use smithy_http::operation::BuildError;

    #[test]
    fn regional_endpoint() {
        let config = Config::builder()
            .region(Region::new("us-west-2"))
            .build();
        assert_eq!(
            config.endpoint().unwrap().uri(),
            &Uri::from_static("https://medialive.us-west-2.amazonaws.com")
        );
    }

    #[test]
    fn explicit_endpoint_wins() {
        let config = Config::builder()
            .region(Region::new("us-west-2"))
            .endpoint(Endpoint::new(Uri::from_static("http://localhost:8000")))
            .build();
        assert_eq!(
            config.endpoint().unwrap().uri(),
            &Uri::from_static("http://localhost:8000")
        );
    }

    #[test]
    fn no_region_no_endpoint() {
        let config = Config::builder().build();
        assert!(matches!(
            config.endpoint(),
            Err(BuildError::MissingField { field: "region", .. })
        ));
    }
}
