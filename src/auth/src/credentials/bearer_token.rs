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

//! Bearer token credentials.
//!
//! Use these credentials when the application already holds an access token,
//! for example, an IAM access token obtained by a separate process. The
//! credentials send the token, unchanged, in the `Authorization` header. They
//! never refresh the token.

use crate::credentials::{Credentials, CredentialsProvider, Result, sensitive_header};
use crate::errors::CredentialsError;
use http::{HeaderMap, HeaderValue};

struct BearerTokenCredentials {
    header: HeaderValue,
}

impl std::fmt::Debug for BearerTokenCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerTokenCredentials")
            .field("token", &"[censored]")
            .finish()
    }
}

/// A builder for creating bearer token credentials.
///
/// # Example
/// ```
/// # use ibm_cloud_auth::credentials::bearer_token::Builder;
/// let credentials = Builder::new("my-access-token").build()?;
/// assert_eq!(credentials.authentication_type(), "bearerToken");
/// # Ok::<(), ibm_cloud_auth::errors::CredentialsError>(())
/// ```
pub struct Builder {
    token: String,
}

impl std::fmt::Debug for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder")
            .field("token", &"[censored]")
            .finish()
    }
}

impl Builder {
    /// Creates a new builder with the given token.
    pub fn new<T: Into<String>>(token: T) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Returns a [Credentials] instance.
    ///
    /// Fails if the token is empty, or if it cannot be used in an HTTP
    /// header.
    pub fn build(self) -> Result<Credentials> {
        if self.token.is_empty() {
            return Err(CredentialsError::from_msg(
                false,
                "the bearer token cannot be empty",
            ));
        }
        let header = sensitive_header(&format!("Bearer {}", self.token))?;
        Ok(Credentials::from(BearerTokenCredentials { header }))
    }
}

impl CredentialsProvider for BearerTokenCredentials {
    async fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(http::header::AUTHORIZATION, self.header.clone());
        Ok(headers)
    }

    fn authentication_type(&self) -> &'static str {
        "bearerToken"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    #[tokio::test]
    async fn headers() -> TestResult {
        let creds = Builder::new("test-token").build()?;
        let headers = creds.headers().await?;
        assert_eq!(headers.len(), 1, "{headers:?}");
        let value = headers
            .get(http::header::AUTHORIZATION)
            .expect("authorization header is present");
        assert_eq!(value, HeaderValue::from_static("Bearer test-token"));
        assert!(value.is_sensitive());
        assert_eq!(creds.authentication_type(), "bearerToken");
        Ok(())
    }

    #[test_case(""; "empty")]
    #[test_case("bad\ntoken"; "newline")]
    fn build_errors(token: &str) {
        let err = Builder::new(token).build().unwrap_err();
        assert!(!err.is_transient(), "{err}");
    }

    #[test]
    fn debug_is_censored() -> TestResult {
        let builder = Builder::new("super-secret");
        let fmt = format!("{builder:?}");
        assert!(!fmt.contains("super-secret"), "{fmt}");

        let creds = builder.build()?;
        let fmt = format!("{creds:?}");
        assert!(!fmt.contains("super-secret"), "{fmt}");
        Ok(())
    }
}
