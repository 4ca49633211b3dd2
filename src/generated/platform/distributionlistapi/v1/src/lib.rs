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

//! IBM Cloud Platform Services SDK for Rust - Distribution List API
//!
//! This crate contains the client library for the `distribution_list_api`
//! service. The service manages the destinations of an account's
//! distribution list. Each destination receives the platform notifications
//! sent to the account.
//!
//! The main types to work with this crate are the client
//! [client::DistributionListApi] and the messages in [model].
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use ibm_cloud_distributionlistapi_v1::client::DistributionListApi;
//! use ibm_cloud_distributionlistapi_v1::model::AddDestination;
//! let credentials = auth::credentials::bearer_token::Builder::new("my-token").build()?;
//! let client = DistributionListApi::builder()
//!     .with_credentials(credentials)
//!     .build()
//!     .await?;
//! let collection = client
//!     .list_distribution_list_destinations()
//!     .set_account_id("a1b2c3")
//!     .send()
//!     .await?;
//! for destination in collection.destinations {
//!     match destination {
//!         AddDestination::EventNotifications(d) => println!("event notifications: {}", d.id),
//!         _ => println!("unknown destination"),
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(()) });
//! ```

/// The messages and enums that are part of this client library.
pub mod model;

pub use gax::Result;
pub use gax::error::Error;

pub mod builder;
pub mod client;
pub mod stub;

#[doc(hidden)]
pub(crate) mod tracing;

#[doc(hidden)]
pub(crate) mod transport;

/// The default host used by the service.
const DEFAULT_HOST: &str = "https://cloud.ibm.com/notification-api";

pub(crate) mod info {
    const NAME: &str = "distribution_list_api";
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    pub(crate) const CLIENT_INFO: gaxi::options::ClientInfo = gaxi::options::ClientInfo {
        service_name: NAME,
        service_version: "V1",
        api_version: "1.0.0",
        client_version: VERSION,
        default_host: super::DEFAULT_HOST,
    };
}
