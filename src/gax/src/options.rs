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

//! Client configuration and per request options.
//!
//! While the client library defaults are intended to work for most
//! applications, it is sometimes necessary to change the configuration. Notably
//! the default endpoint, and the default authentication credentials do not work
//! for some applications.
//!
//! Likewise, applications may need to customize the behavior of some calls made
//! via a client, even a customized one. Applications sometimes change the
//! timeout for a specific call, or add custom headers. The `*Builder` returned
//! by each client method implements the [RequestOptionsBuilder] trait where
//! applications can override some defaults.

use crate::retry_policy::RetryPolicy;
use http::{HeaderMap, HeaderName, HeaderValue};

/// A set of options configuring a single request.
///
/// Application only use this class directly in mocks, where they may want to
/// verify their application has configured all the right request parameters and
/// options.
///
/// All other code uses this type indirectly, via the per-request builders.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    user_agent: Option<String>,
    attempt_timeout: Option<std::time::Duration>,
    headers: HeaderMap,
    retry_policy: Option<RetryPolicy>,
}

impl RequestOptions {
    /// Prepends this prefix to the user agent header value.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the current user-agent prefix
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the per-attempt timeout.
    ///
    /// When using a retry loop, this affects the timeout for each attempt.
    pub fn set_attempt_timeout<T: Into<std::time::Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the current per-attempt timeout.
    pub fn attempt_timeout(&self) -> &Option<std::time::Duration> {
        &self.attempt_timeout
    }

    /// Adds a header to the request.
    ///
    /// These headers are sent after the client's default headers and the
    /// SDK headers, replacing any value with the same name.
    pub fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    /// Gets the additional headers for this request.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Overrides the client retry policy for this request.
    pub fn set_retry_policy<V: Into<RetryPolicy>>(&mut self, v: V) {
        self.retry_policy = Some(v.into());
    }

    /// Gets the retry policy override, if any.
    pub fn retry_policy(&self) -> &Option<RetryPolicy> {
        &self.retry_policy
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// The IBM Cloud SDK for Rust provides a builder for each operation. These
/// builders can be used to set the request parameters, e.g., the account
/// targeted by the operation, as well as any options affecting the request,
/// such as additional headers or timeouts.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// Set the user agent header.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Sets the per-attempt timeout.
    fn with_attempt_timeout<V: Into<std::time::Duration>>(self, v: V) -> Self;

    /// Adds a header to the request.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_gax::options::RequestOptionsBuilder;
    /// # use ibm_cloud_gax::options::RequestOptions;
    /// # use ibm_cloud_gax::options::internal::RequestBuilder;
    /// # #[derive(Default)] struct Builder(RequestOptions);
    /// # impl RequestBuilder for Builder {
    /// #     fn request_options(&mut self) -> &mut RequestOptions { &mut self.0 }
    /// # }
    /// let mut builder = Builder::default().with_header(
    ///     http::HeaderName::from_static("x-correlation-id"),
    ///     http::HeaderValue::from_static("abc-123"),
    /// );
    /// assert!(builder.request_options().headers().contains_key("x-correlation-id"));
    /// ```
    fn with_header(self, name: HeaderName, value: HeaderValue) -> Self;

    /// Overrides the client retry policy for this request.
    fn with_retry_policy<V: Into<RetryPolicy>>(self, v: V) -> Self;
}

pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.
    use super::RequestOptions;

    /// Simplify implementation of the [super::RequestOptionsBuilder] trait in
    /// generated code.
    ///
    /// This is an implementation detail, most applications have little need to
    /// worry about or use this trait.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }
}

/// Implements the sealed [RequestOptionsBuilder] trait.
impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout<V: Into<std::time::Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }

    fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.request_options().set_header(name, value);
        self
    }

    fn with_retry_policy<V: Into<RetryPolicy>>(mut self, v: V) -> Self {
        self.request_options().set_retry_policy(v);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::internal::*;
    use super::*;
    use std::time::Duration;

    #[derive(Debug, Default)]
    struct TestBuilder {
        request_options: RequestOptions,
    }
    impl RequestBuilder for TestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.request_options
        }
    }

    #[test]
    fn request_options() {
        let mut opts = RequestOptions::default();

        opts.set_user_agent("test-only");
        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));
        assert_eq!(opts.attempt_timeout(), &None);

        let d = Duration::from_secs(123);
        opts.set_attempt_timeout(d);
        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));
        assert_eq!(opts.attempt_timeout(), &Some(d));

        assert!(opts.headers().is_empty(), "{opts:?}");
        opts.set_header(
            HeaderName::from_static("x-test"),
            HeaderValue::from_static("v1"),
        );
        opts.set_header(
            HeaderName::from_static("x-test"),
            HeaderValue::from_static("v2"),
        );
        assert_eq!(
            opts.headers().get("x-test"),
            Some(&HeaderValue::from_static("v2"))
        );

        assert!(opts.retry_policy().is_none(), "{opts:?}");
        opts.set_retry_policy(RetryPolicy::default().set_max_retries(2));
        assert_eq!(opts.retry_policy().as_ref().map(|p| p.max_retries()), Some(2));
    }

    #[test]
    fn request_options_builder() {
        let mut builder = TestBuilder::default();
        assert_eq!(builder.request_options().user_agent(), &None);
        assert_eq!(builder.request_options().attempt_timeout(), &None);

        let mut builder = TestBuilder::default().with_user_agent("test-only");
        assert_eq!(
            builder.request_options().user_agent().as_deref(),
            Some("test-only")
        );
        assert_eq!(builder.request_options().attempt_timeout(), &None);

        let d = Duration::from_secs(123);
        let mut builder = TestBuilder::default().with_attempt_timeout(d);
        assert_eq!(builder.request_options().user_agent(), &None);
        assert_eq!(builder.request_options().attempt_timeout(), &Some(d));

        let mut builder = TestBuilder::default().with_header(
            HeaderName::from_static("x-test"),
            HeaderValue::from_static("value"),
        );
        assert_eq!(
            builder.request_options().headers().get("x-test"),
            Some(&HeaderValue::from_static("value"))
        );

        let mut builder = TestBuilder::default().with_retry_policy(RetryPolicy::default());
        assert!(
            builder.request_options().retry_policy().is_some(),
            "{builder:?}"
        );
    }
}
