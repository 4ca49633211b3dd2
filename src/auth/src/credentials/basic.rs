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

//! HTTP basic authentication credentials.
//!
//! Some IBM Cloud deployments, typically on-premises ones, accept a username
//! and password. These credentials send them in the `Authorization` header
//! using the [basic] scheme.
//!
//! [basic]: https://datatracker.ietf.org/doc/html/rfc7617

use crate::credentials::{Credentials, CredentialsProvider, Result, sensitive_header};
use crate::errors::CredentialsError;
use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use http::{HeaderMap, HeaderValue};

struct BasicCredentials {
    header: HeaderValue,
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("header", &"[censored]")
            .finish()
    }
}

/// A builder for creating basic authentication credentials.
///
/// # Example
/// ```
/// # use ibm_cloud_auth::credentials::basic::Builder;
/// let credentials = Builder::new("my-user", "my-password").build()?;
/// assert_eq!(credentials.authentication_type(), "basic");
/// # Ok::<(), ibm_cloud_auth::errors::CredentialsError>(())
/// ```
pub struct Builder {
    username: String,
    password: String,
}

impl std::fmt::Debug for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder")
            .field("username", &self.username)
            .field("password", &"[censored]")
            .finish()
    }
}

impl Builder {
    /// Creates a new builder with the given username and password.
    pub fn new<U: Into<String>, P: Into<String>>(username: U, password: P) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns a [Credentials] instance.
    ///
    /// Fails if either value is empty, or if either value starts or ends
    /// with a brace or a quote. Such values are usually the result of a
    /// copy and paste error from a JSON document.
    pub fn build(self) -> Result<Credentials> {
        validate("username", &self.username)?;
        validate("password", &self.password)?;
        let encoded = BASE64_STANDARD.encode(format!("{}:{}", self.username, self.password));
        let header = sensitive_header(&format!("Basic {encoded}"))?;
        Ok(Credentials::from(BasicCredentials { header }))
    }
}

fn validate(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(CredentialsError::from_msg(
            false,
            format!("the {name} cannot be empty"),
        ));
    }
    const BAD: [char; 3] = ['{', '}', '"'];
    let first = value.starts_with(BAD);
    let last = value.ends_with(BAD);
    if first || last {
        return Err(CredentialsError::from_msg(
            false,
            format!("the {name} cannot start or end with a brace or a quote"),
        ));
    }
    Ok(())
}

impl CredentialsProvider for BasicCredentials {
    async fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(http::header::AUTHORIZATION, self.header.clone());
        Ok(headers)
    }

    fn authentication_type(&self) -> &'static str {
        "basic"
    }
}
