/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::os_shim_internal::Env;
use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// The region to send requests to.
///
/// The region MUST be specified on a request, either directly or through an explicit endpoint.
/// See http://docs.aws.amazon.com/general/latest/gr/rande.html for information on AWS regions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region(
    // Regions are almost always known statically. However, as an escape hatch for when they
    // are not, allow for an owned region
    Cow<'static, str>,
);

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Region {
    pub fn new(region: impl Into<Cow<'static, str>>) -> Self {
        Self(region.into())
    }

    pub const fn from_static(region: &'static str) -> Self {
        Self(Cow::Borrowed(region))
    }
}

/// Provide a [`Region`](Region) to use with AWS requests
///
/// For most cases [`default_provider`](default_provider) will be the best option.
pub trait ProvideRegion {
    fn region(&self) -> Option<Region>;
}

impl ProvideRegion for Region {
    fn region(&self) -> Option<Region> {
        Some(self.clone())
    }
}

impl ProvideRegion for Option<Region> {
    fn region(&self) -> Option<Region> {
        self.clone()
    }
}

/// Tries a series of region providers in order, returning the first region found.
///
/// # Example
/// ```rust
/// use aws_types::region::{ChainProvider, Region};
/// // check the default provider first, then fall back to us-east-2
/// let provider = ChainProvider::first_try(aws_types::region::default_provider())
///     .or_else(Region::new("us-east-2"));
/// assert!(aws_types::region::ProvideRegion::region(&provider).is_some());
/// ```
pub struct ChainProvider {
    providers: Vec<Box<dyn ProvideRegion>>,
}

impl ChainProvider {
    pub fn first_try(provider: impl ProvideRegion + 'static) -> Self {
        ChainProvider {
            providers: vec![Box::new(provider)],
        }
    }

    pub fn or_else(mut self, fallback: impl ProvideRegion + 'static) -> Self {
        self.providers.push(Box::new(fallback));
        self
    }
}

impl ProvideRegion for ChainProvider {
    fn region(&self) -> Option<Region> {
        self.providers.iter().find_map(|provider| provider.region())
    }
}

pub fn default_provider() -> impl ProvideRegion {
    EnvironmentProvider::new()
}

/// Reads the region from `AWS_REGION`, then `AWS_DEFAULT_REGION`. Empty values are ignored.
#[non_exhaustive]
pub struct EnvironmentProvider {
    env: Env,
}

impl Default for EnvironmentProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentProvider {
    pub fn new() -> Self {
        EnvironmentProvider { env: Env::real() }
    }

    pub fn with_env(env: Env) -> Self {
        EnvironmentProvider { env }
    }
}

impl ProvideRegion for EnvironmentProvider {
    fn region(&self) -> Option<Region> {
        let region = ["AWS_REGION", "AWS_DEFAULT_REGION"]
            .iter()
            .filter_map(|key| self.env.get(key).ok())
            .find(|value| !value.trim().is_empty())
            .map(Region::new);
        tracing::debug!(region = ?region, "loaded region from the environment");
        region
    }
}

#[cfg(test)]
mod test {
    use crate::os_shim_internal::Env;
    use crate::region::{ChainProvider, EnvironmentProvider, ProvideRegion, Region};
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn aws_region_takes_precedence() {
        let provider = EnvironmentProvider::with_env(Env::from_slice(&[
            ("AWS_REGION", "us-west-2"),
            ("AWS_DEFAULT_REGION", "eu-west-1"),
        ]));
        assert_eq!(provider.region(), Some(Region::from_static("us-west-2")));
        assert!(logs_contain("loaded region from the environment"));
    }

    #[test]
    fn default_region_fallback() {
        let provider = EnvironmentProvider::with_env(Env::from_slice(&[
            ("AWS_REGION", ""),
            ("AWS_DEFAULT_REGION", "eu-west-1"),
        ]));
        assert_eq!(provider.region(), Some(Region::new("eu-west-1")));

        let provider = EnvironmentProvider::with_env(Env::from_slice(&[]));
        assert_eq!(provider.region(), None);
    }

    #[test]
    fn chain_uses_first_region() {
        let empty_env = EnvironmentProvider::with_env(Env::from_slice(&[]));
        let chain = ChainProvider::first_try(empty_env).or_else(Region::from_static("ap-south-1"));
        assert_eq!(chain.region(), Some(Region::from_static("ap-south-1")));
        assert_eq!(Region::new("us-east-1").to_string(), "us-east-1");
    }
}
