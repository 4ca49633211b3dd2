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

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to override the endpoint or the authentication
//! credentials. The IBM Cloud SDK for Rust uses a generic builder type to
//! provide such functionality. The types in this module implement the client
//! builders.
//!
//! Applications should not create builders directly, instead each client type
//! defines a `builder()` function to obtain the correct type of builder.
//!
//! ## Example: create a client with a different endpoint
//!
//! ```
//! # use ibm_cloud_gax::client_builder::examples;
//! # use ibm_cloud_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder()
//!     .with_endpoint("https://private.us-south.notification-api.cloud.ibm.com/notification-api")
//!     .with_credentials(examples::Credentials::default())
//!     .build().await?;
//! # Result::<()>::Ok(()) });
//! ```

use crate::retry_policy::RetryPolicy;
use http::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```no_run
/// # use ibm_cloud_gax::client_builder::examples;
/// use ibm_cloud_gax::client_builder::Error as Error;
/// use examples::Client; // Placeholder for examples
/// # tokio_test::block_on(async {
/// let client = match Client::builder().build().await {
///     Ok(c) => c,
///     Err(e) if e.is_missing_credentials() => {
///         println!("configure an authenticator with `with_credentials()`: {e}");
///         return Err(e);
///     }
///     Err(e) => {
///         println!("error during client initialization {e}");
///         return Err(e);
///     }
/// };
/// # Ok::<(), Error>(()) });
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client was built without credentials.
    pub fn is_missing_credentials(&self) -> bool {
        matches!(&self.0, ErrorKind::MissingCredentials)
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn missing_credentials() -> Self {
        Self(ErrorKind::MissingCredentials)
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("the client requires an authenticator, use `with_credentials()` to configure one")]
    MissingCredentials,
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// In the IBM Cloud SDK for Rust a "client" represents a connection to a
/// specific service. Each service crate defines one or more client types. All
/// the clients are initialized using a `ClientBuilder`.
///
/// Applications obtain a builder with the correct generic types using the
/// `builder()` method on each client. The builder offers several methods to
/// configure the client, and a `.build()` method to construct the client:
/// ```
/// # use ibm_cloud_gax::client_builder::examples;
/// # use ibm_cloud_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let client = Client::builder()
///     .with_credentials(examples::Credentials::default())
///     .with_tracing()
///     .build().await?;
/// # Result::<()>::Ok(()) });
/// ```
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, Cr> {
    config: internal::ClientConfig<Cr>,
    factory: F,
}

impl<F, Cr> ClientBuilder<F, Cr> {
    /// Creates a new client.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Credentials = Cr>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint.
    ///
    /// The endpoint is the service URL, including any path prefix. For
    /// example, to use a private endpoint:
    ///
    /// ```
    /// # use ibm_cloud_gax::client_builder::examples;
    /// # use ibm_cloud_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_endpoint("https://private.cloud.ibm.com/notification-api")
    ///     .with_credentials(examples::Credentials::default())
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// The client libraries can be dynamically instrumented with the Tokio
    /// [tracing] framework. Setting this flag enables this instrumentation.
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Configure the authenticator.
    ///
    /// All the IBM Cloud platform services require authentication. The
    /// [ibm-cloud-auth] crate offers several authenticator types.
    ///
    /// [ibm-cloud-auth]: https://docs.rs/ibm-cloud-auth
    pub fn with_credentials<T: Into<Cr>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }

    /// Adds a header sent with every request made by the client.
    ///
    /// ```
    /// # use ibm_cloud_gax::client_builder::examples;
    /// # use ibm_cloud_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_default_header(
    ///         http::HeaderName::from_static("x-team"),
    ///         http::HeaderValue::from_static("platform"))
    ///     .with_credentials(examples::Credentials::default())
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_default_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.config.default_headers.insert(name, value);
        self
    }

    /// Replaces all the headers sent with every request made by the client.
    pub fn with_default_headers<V: Into<HeaderMap>>(mut self, v: V) -> Self {
        self.config.default_headers = v.into();
        self
    }

    /// Enables automatic retries.
    ///
    /// The client retries failed requests up to `max_retries` times, waiting
    /// at most `max_interval` between attempts. Only connection errors, and
    /// responses with status `429` or `5xx` (other than `501`) are retried.
    ///
    /// ```
    /// # use ibm_cloud_gax::client_builder::examples;
    /// # use ibm_cloud_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// use std::time::Duration;
    /// let client = Client::builder()
    ///     .with_retries(3, Duration::from_secs(10))
    ///     .with_credentials(examples::Credentials::default())
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_retries(mut self, max_retries: u32, max_interval: Duration) -> Self {
        self.config.retry_policy = Some(
            RetryPolicy::default()
                .set_max_retries(max_retries)
                .set_max_interval(max_interval),
        );
        self
    }

    /// Configure the retry policy.
    pub fn with_retry_policy<V: Into<RetryPolicy>>(mut self, v: V) -> Self {
        self.config.retry_policy = Some(v.into());
        self
    }

    /// Disables automatic retries.
    pub fn without_retries(mut self) -> Self {
        self.config.retry_policy = None;
        self
    }
}

#[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
pub mod internal {
    use super::*;

    pub trait ClientFactory {
        type Client;
        type Credentials;
        fn build(
            self,
            config: internal::ClientConfig<Self::Credentials>,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, Cr, C>(factory: F) -> super::ClientBuilder<F, Cr>
    where
        F: ClientFactory<Client = C, Credentials = Cr>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// Configure a client.
    ///
    /// A client represents a connection to an IBM Cloud service. The default
    /// configuration for each client should work for most applications. But
    /// some applications may need to override the default endpoint, the
    /// retry policy, and/or other behaviors of the client.
    #[derive(Clone, Debug)]
    pub struct ClientConfig<Cr> {
        pub endpoint: Option<String>,
        pub cred: Option<Cr>,
        pub tracing: bool,
        pub default_headers: HeaderMap,
        pub retry_policy: Option<RetryPolicy>,
    }

    impl<Cr> std::default::Default for ClientConfig<Cr> {
        fn default() -> Self {
            Self {
                endpoint: None,
                cred: None,
                tracing: false,
                default_headers: HeaderMap::new(),
                retry_policy: None,
            }
        }
    }
}

#[doc(hidden)]
pub mod examples {
    //! This module contains helper types used in the rustdoc examples.
    //!
    //! The examples require relatively complex types to be useful.

    type Config = super::internal::ClientConfig<Credentials>;
    use super::Result;

    /// A client type for use in examples.
    ///
    /// This type is used in examples as a placeholder for a real client. It
    /// does not work, but illustrates how to use `ClientBuilder`.
    #[allow(dead_code)]
    pub struct Client(Config);
    impl Client {
        /// Create a builder to initialize new instances of this client.
        pub fn builder() -> client::Builder {
            super::internal::new_builder(client::Factory)
        }

        async fn new(config: super::internal::ClientConfig<Credentials>) -> Result<Self> {
            if config.cred.is_none() {
                return Err(super::Error::missing_credentials());
            }
            Ok(Self(config))
        }
    }
    mod client {
        pub type Builder = super::super::ClientBuilder<Factory, super::Credentials>;
        pub struct Factory;
        impl super::super::internal::ClientFactory for Factory {
            type Credentials = super::Credentials;
            type Client = super::Client;
            async fn build(
                self,
                config: crate::client_builder::internal::ClientConfig<Self::Credentials>,
            ) -> super::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Credentials {
        pub api_key: String,
    }

}
