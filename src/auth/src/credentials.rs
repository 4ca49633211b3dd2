// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Types and functions to work with IBM Cloud authenticators.

use crate::errors::CredentialsError;
use http::HeaderMap;
use std::future::Future;
use std::sync::Arc;

pub mod anonymous;
pub mod basic;
pub mod bearer_token;

/// The result type for this module.
pub type Result<T> = std::result::Result<T, CredentialsError>;

/// An implementation of [crate::credentials::CredentialsProvider].
///
/// Represents an [Authenticator], i.e. the source of the authentication
/// headers attached to each request sent by a client.
///
/// [Authenticator]: https://github.com/IBM/ibm-cloud-sdk-common#authentication
#[derive(Clone, Debug)]
pub struct Credentials {
    // We use an `Arc` to hold the inner implementation.
    //
    // Credentials may be shared across threads (`Send + Sync`), so an `Rc`
    // will not do.
    //
    // They also need to derive `Clone`, as the client builders take ownership
    // of a copy.
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: crate::credentials::CredentialsProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Returns the headers to attach to a request.
    pub async fn headers(&self) -> Result<HeaderMap> {
        self.inner.headers().await
    }

    /// The authentication scheme, e.g. `bearerToken`.
    pub fn authentication_type(&self) -> &'static str {
        self.inner.authentication_type()
    }
}

/// Applications may implement this trait to provide their own authenticators.
///
/// For example, an application may obtain IAM access tokens from a sidecar,
/// or a secrets manager. Implement this trait and convert the implementation
/// into [Credentials] to use it with the clients.
///
/// # Example
/// ```
/// # use ibm_cloud_auth::credentials::{Credentials, CredentialsProvider, Result};
/// # use http::{HeaderMap, HeaderValue};
/// #[derive(Debug)]
/// struct Sidecar;
/// impl CredentialsProvider for Sidecar {
///     async fn headers(&self) -> Result<HeaderMap> {
///         let mut headers = HeaderMap::new();
///         headers.insert("authorization", HeaderValue::from_static("Bearer from-sidecar"));
///         Ok(headers)
///     }
///     fn authentication_type(&self) -> &'static str { "sidecar" }
/// }
/// let credentials = Credentials::from(Sidecar);
/// assert_eq!(credentials.authentication_type(), "sidecar");
/// ```
pub trait CredentialsProvider: std::fmt::Debug {
    /// Returns the headers to attach to a request.
    fn headers(&self) -> impl Future<Output = Result<HeaderMap>> + Send;

    /// The authentication scheme.
    fn authentication_type(&self) -> &'static str;
}

pub(crate) mod dynamic {
    use super::Result;
    use http::HeaderMap;

    /// A dyn-compatible, crate-private version of `CredentialsProvider`.
    #[async_trait::async_trait]
    pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
        async fn headers(&self) -> Result<HeaderMap>;
        fn authentication_type(&self) -> &'static str;
    }

    /// The public CredentialsProvider implements the dyn-compatible CredentialsProvider.
    #[async_trait::async_trait]
    impl<T> CredentialsProvider for T
    where
        T: super::CredentialsProvider + Send + Sync,
    {
        async fn headers(&self) -> Result<HeaderMap> {
            T::headers(self).await
        }
        fn authentication_type(&self) -> &'static str {
            T::authentication_type(self)
        }
    }
}

#[doc(hidden)]
pub mod testing {
    //! Authenticators for use in tests.
    use super::{Credentials, CredentialsProvider, Result};
    use crate::errors::CredentialsError;
    use http::HeaderMap;

    /// Credentials that always fail to produce headers.
    pub fn error_credentials(transient: bool) -> Credentials {
        Credentials::from(ErrorCredentials(transient))
    }

    #[derive(Debug)]
    struct ErrorCredentials(bool);

    impl CredentialsProvider for ErrorCredentials {
        async fn headers(&self) -> Result<HeaderMap> {
            Err(CredentialsError::from_msg(self.0, "test-only error credentials"))
        }
        fn authentication_type(&self) -> &'static str {
            "error"
        }
    }
}

pub(crate) fn sensitive_header(value: &str) -> Result<http::HeaderValue> {
    let mut value = http::HeaderValue::from_str(value)
        .map_err(|e| CredentialsError::new(false, e))?;
    value.set_sensitive(true);
    Ok(value)
}
