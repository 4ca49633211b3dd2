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
#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]

/// Implements a client for the Distribution List API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use ibm_cloud_distributionlistapi_v1::client::DistributionListApi;
/// let credentials = auth::credentials::bearer_token::Builder::new("my-token").build()?;
/// let client = DistributionListApi::builder()
///     .with_credentials(credentials)
///     .build()
///     .await?;
/// // use `client` to make requests to the Distribution List API.
/// # Ok::<(), Box<dyn std::error::Error>>(()) });
/// ```
///
/// # Service Description
///
/// Manages the destinations in the distribution list of an IBM Cloud
/// account. Each destination receives the platform notifications
/// (announcements, incidents, maintenance windows, and so on) sent to the
/// account. In this version of the API the only destination type is an
/// Event Notifications instance.
///
/// # Configuration
///
/// To configure `DistributionListApi` use the `with_*` methods in the type
/// returned by [builder()][DistributionListApi::builder]. The default
/// configuration works for most applications, but credentials are always
/// required. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://cloud.ibm.com/notification-api`). Applications using private
///   endpoints may want to override this default.
/// * [with_retries()]: by default this client does not retry failed requests.
///
/// [with_endpoint()]: super::builder::distribution_list_api::ClientBuilder::with_endpoint
/// [with_retries()]: super::builder::distribution_list_api::ClientBuilder::with_retries
///
/// # Pooling and Cloning
///
/// `DistributionListApi` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `DistributionListApi`
/// in an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct DistributionListApi {
    inner: std::sync::Arc<dyn super::stub::dynamic::DistributionListApi>,
}

impl DistributionListApi {
    /// Returns a builder for [DistributionListApi].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_distributionlistapi_v1::client::DistributionListApi;
    /// let credentials = auth::credentials::anonymous::Builder::new().build();
    /// let client = DistributionListApi::builder()
    ///     .with_credentials(credentials)
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::distribution_list_api::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::distribution_list_api::client::Factory,
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::DistributionListApi + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::DistributionListApi>>
    {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::DistributionListApi> {
        super::transport::DistributionListApi::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::DistributionListApi> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::DistributionListApi::new)
    }

    /// Lists the destinations in the distribution list of an account.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_distributionlistapi_v1::client::DistributionListApi;
    /// # use ibm_cloud_distributionlistapi_v1::Result;
    /// async fn sample(client: &DistributionListApi) -> Result<()> {
    ///     let collection = client
    ///         .list_distribution_list_destinations()
    ///         .set_account_id("a1b2c3")
    ///         .send()
    ///         .await?;
    ///     println!("{} destinations", collection.destinations.len());
    ///     Ok(())
    /// }
    /// ```
    pub fn list_distribution_list_destinations(
        &self,
    ) -> super::builder::distribution_list_api::ListDistributionListDestinations {
        super::builder::distribution_list_api::ListDistributionListDestinations::new(
            self.inner.clone(),
        )
    }

    /// Adds a destination to the distribution list of an account.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_distributionlistapi_v1::client::DistributionListApi;
    /// # use ibm_cloud_distributionlistapi_v1::Result;
    /// use ibm_cloud_distributionlistapi_v1::model::EventNotificationDestinationPrototype;
    /// async fn sample(client: &DistributionListApi, instance: uuid::Uuid) -> Result<()> {
    ///     let destination = client
    ///         .create_distribution_list_destination()
    ///         .set_account_id("a1b2c3")
    ///         .set_add_destination_prototype(
    ///             EventNotificationDestinationPrototype::new().set_id(instance),
    ///         )
    ///         .send()
    ///         .await?;
    ///     println!("created {destination:?}");
    ///     Ok(())
    /// }
    /// ```
    pub fn create_distribution_list_destination(
        &self,
    ) -> super::builder::distribution_list_api::CreateDistributionListDestination {
        super::builder::distribution_list_api::CreateDistributionListDestination::new(
            self.inner.clone(),
        )
    }

    /// Gets a destination in the distribution list of an account.
    pub fn get_distribution_list_destination(
        &self,
    ) -> super::builder::distribution_list_api::GetDistributionListDestination {
        super::builder::distribution_list_api::GetDistributionListDestination::new(
            self.inner.clone(),
        )
    }

    /// Removes a destination from the distribution list of an account.
    pub fn delete_distribution_list_destination(
        &self,
    ) -> super::builder::distribution_list_api::DeleteDistributionListDestination {
        super::builder::distribution_list_api::DeleteDistributionListDestination::new(
            self.inner.clone(),
        )
    }

    /// Sends a test notification to a destination in the distribution list.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_distributionlistapi_v1::client::DistributionListApi;
    /// # use ibm_cloud_distributionlistapi_v1::Result;
    /// use ibm_cloud_distributionlistapi_v1::model::{NotificationType, TestEventNotificationDestination};
    /// async fn sample(client: &DistributionListApi) -> Result<()> {
    ///     let response = client
    ///         .test_distribution_list_destination()
    ///         .set_account_id("a1b2c3")
    ///         .set_id("12345678-1234-1234-1234-123456789012")
    ///         .set_test_destination_request_body_prototype(
    ///             TestEventNotificationDestination::new(NotificationType::Incident),
    ///         )
    ///         .send()
    ///         .await?;
    ///     println!("{:?}", response.message);
    ///     Ok(())
    /// }
    /// ```
    pub fn test_distribution_list_destination(
        &self,
    ) -> super::builder::distribution_list_api::TestDistributionListDestination {
        super::builder::distribution_list_api::TestDistributionListDestination::new(
            self.inner.clone(),
        )
    }
}
