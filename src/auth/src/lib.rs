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

//! IBM Cloud Platform Services SDK for Rust - Authentication Components
//!
//! This crate contains types and functions used to authenticate applications
//! on IBM Cloud. The SDK clients consume these types automatically: the
//! application creates a [Credentials][credentials::Credentials] instance and
//! passes it to the client builder.
//!
//! The authenticators in this crate produce request headers from material
//! that the application already holds, i.e. a bearer token or a username and
//! password. Acquiring or refreshing tokens is the responsibility of the
//! application.
//!
//! # Example
//! ```
//! # use ibm_cloud_auth::credentials::bearer_token;
//! # tokio_test::block_on(async {
//! let credentials = bearer_token::Builder::new("my-access-token").build()?;
//! let headers = credentials.headers().await?;
//! assert!(headers.contains_key(http::header::AUTHORIZATION));
//! # Ok::<(), ibm_cloud_auth::errors::CredentialsError>(()) });
//! ```

pub mod credentials;

/// Errors created during credentials construction and use.
pub mod errors {
    pub use gax::error::CredentialsError;
}
