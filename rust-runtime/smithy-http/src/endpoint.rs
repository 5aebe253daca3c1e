/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::operation::BuildError;
use http::uri::Uri;
use std::borrow::Cow;

/// API Endpoint
///
/// The scheme and authority of every request are taken from the endpoint. A path on the endpoint
/// is prepended to the request path; a query on the endpoint is ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    uri: Uri,
}

impl Endpoint {
    /// Create a new endpoint from a URI
    ///
    /// ```rust
    /// # use smithy_http::endpoint::Endpoint;
    /// use http::Uri;
    /// let endpoint = Endpoint::new(Uri::from_static("http://localhost:8000"));
    /// ```
    pub fn new(uri: Uri) -> Self {
        Endpoint { uri }
    }

    /// Parses `uri` into an endpoint. The URI must carry a scheme and an authority.
    pub fn from_uri_str(uri: &str) -> Result<Self, BuildError> {
        let parsed: Uri = uri.parse().map_err(|err| BuildError::InvalidUri {
            uri: uri.to_string(),
            err,
            message: "invalid endpoint".into(),
        })?;
        if parsed.scheme().is_none() || parsed.authority().is_none() {
            return Err(BuildError::InvalidField {
                field: "endpoint",
                details: format!("`{}` must include a scheme and a host", uri),
            });
        }
        Ok(Endpoint { uri: parsed })
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Sets the endpoint on `uri`, replacing its scheme and authority.
    pub fn set_endpoint(&self, uri: &mut Uri) -> Result<(), BuildError> {
        let (scheme, authority) = match (self.uri.scheme(), self.uri.authority()) {
            (Some(scheme), Some(authority)) => (scheme.clone(), authority.clone()),
            _ => {
                return Err(BuildError::InvalidField {
                    field: "endpoint",
                    details: format!("`{}` must include a scheme and a host", self.uri),
                })
            }
        };
        let path_and_query = Self::merge_paths(&self.uri, uri);
        let new_uri = Uri::builder()
            .scheme(scheme)
            .authority(authority)
            .path_and_query(path_and_query.as_ref())
            .build()
            .map_err(|err| BuildError::Other(err.into()))?;
        *uri = new_uri;
        Ok(())
    }

    fn merge_paths<'a>(endpoint: &'a Uri, uri: &'a Uri) -> Cow<'a, str> {
        if let Some(query) = endpoint.path_and_query().and_then(|pq| pq.query()) {
            tracing::warn!(query = %query, "query specified in endpoint will be ignored during endpoint resolution");
        }
        let endpoint_path = endpoint.path();
        let uri_path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
        if endpoint_path.is_empty() || endpoint_path == "/" {
            Cow::Borrowed(uri_path_and_query)
        } else {
            let ep_no_slash = endpoint_path.strip_suffix('/').unwrap_or(endpoint_path);
            let uri_path_no_slash = uri_path_and_query
                .strip_prefix('/')
                .unwrap_or(uri_path_and_query);
            Cow::Owned(format!("{}/{}", ep_no_slash, uri_path_no_slash))
        }
    }
}

#[cfg(test)]
mod test {
    use crate::endpoint::Endpoint;
    use crate::operation::BuildError;
    use http::Uri;
    use tracing_test::traced_test;

    #[test]
    fn regional_endpoint() {
        let ep = Endpoint::new(Uri::from_static("https://medialive.us-west-2.amazonaws.com"));
        let mut uri = Uri::from_static("/prod/inputs?maxResults=5");
        ep.set_endpoint(&mut uri).unwrap();
        assert_eq!(
            uri,
            Uri::from_static("https://medialive.us-west-2.amazonaws.com/prod/inputs?maxResults=5")
        );
    }

    #[test]
    fn endpoint_custom_port() {
        let ep = Endpoint::from_uri_str("http://localhost:6443").unwrap();
        let mut uri = Uri::from_static("/channels");
        ep.set_endpoint(&mut uri).unwrap();
        assert_eq!(uri, Uri::from_static("http://localhost:6443/channels"));
    }

    #[test]
    fn endpoint_with_path() {
        for uri in &[
            // check that trailing slashes are properly normalized
            "https://proxy.example.com/private",
            "https://proxy.example.com/private/",
        ] {
            let ep = Endpoint::new(Uri::from_static(uri));
            let mut uri = Uri::from_static("/identitypools/a/configuration");
            ep.set_endpoint(&mut uri).unwrap();
            assert_eq!(
                uri,
                Uri::from_static("https://proxy.example.com/private/identitypools/a/configuration")
            );
        }
    }

    #[test]
    #[traced_test]
    fn endpoint_query_is_ignored() {
        let ep = Endpoint::new(Uri::from_static("https://proxy.example.com/?debug=1"));
        let mut uri = Uri::from_static("/channels");
        ep.set_endpoint(&mut uri).unwrap();
        assert_eq!(uri, Uri::from_static("https://proxy.example.com/channels"));
        assert!(logs_contain("query specified in endpoint will be ignored"));
    }

    #[test]
    fn relative_endpoint_is_rejected() {
        assert!(matches!(
            Endpoint::from_uri_str("/just/a/path"),
            Err(BuildError::InvalidField { field: "endpoint", .. })
        ));
        assert!(matches!(
            Endpoint::from_uri_str("http://bad host"),
            Err(BuildError::InvalidUri { .. })
        ));
        let mut uri = Uri::from_static("/channels");
        assert!(Endpoint::new(Uri::from_static("/relative"))
            .set_endpoint(&mut uri)
            .is_err());
    }
}
