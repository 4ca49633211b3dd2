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

use crate::Result;
use gaxi::http::NoBody;
use gaxi::path_parameter::encode;

/// Implements [DistributionListApi](super::stub::DistributionListApi) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct DistributionListApi {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for DistributionListApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("DistributionListApi")
            .field("inner", &self.inner)
            .finish()
    }
}

impl DistributionListApi {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST)
            .await?
            .with_client_info(crate::info::CLIENT_INFO);
        Ok(Self { inner })
    }
}

impl super::stub::DistributionListApi for DistributionListApi {
    async fn list_distribution_list_destinations(
        &self,
        req: crate::model::ListDistributionListDestinationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AddDestinationCollection>> {
        req.validate()?;
        let path = format!(
            "/v1/distribution_lists/{}/destinations",
            encode(&req.account_id)
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        self.inner
            .execute_with(
                "ListDistributionListDestinations",
                builder,
                None::<NoBody>,
                options,
                crate::model::AddDestinationCollection::from_envelope,
            )
            .await
    }

    async fn create_distribution_list_destination(
        &self,
        req: crate::model::CreateDistributionListDestinationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AddDestination>> {
        req.validate()?;
        let path = format!(
            "/v1/distribution_lists/{}/destinations",
            encode(&req.account_id)
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        self.inner
            .execute_with(
                "CreateDistributionListDestination",
                builder,
                req.add_destination_prototype,
                options,
                gax::variant::decode::<crate::model::AddDestination>,
            )
            .await
    }

    async fn get_distribution_list_destination(
        &self,
        req: crate::model::GetDistributionListDestinationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AddDestination>> {
        req.validate()?;
        let path = format!(
            "/v1/distribution_lists/{}/destinations/{}",
            encode(&req.account_id),
            encode(&req.id)
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        self.inner
            .execute_with(
                "GetDistributionListDestination",
                builder,
                None::<NoBody>,
                options,
                gax::variant::decode::<crate::model::AddDestination>,
            )
            .await
    }

    async fn delete_distribution_list_destination(
        &self,
        req: crate::model::DeleteDistributionListDestinationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        req.validate()?;
        let path = format!(
            "/v1/distribution_lists/{}/destinations/{}",
            encode(&req.account_id),
            encode(&req.id)
        );
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        self.inner
            .execute_empty(
                "DeleteDistributionListDestination",
                builder,
                None::<NoBody>,
                options,
            )
            .await
    }

    async fn test_distribution_list_destination(
        &self,
        req: crate::model::TestDistributionListDestinationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TestDestinationResponseBody>> {
        req.validate()?;
        let path = format!(
            "/v1/distribution_lists/{}/destinations/{}/test",
            encode(&req.account_id),
            encode(&req.id)
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        self.inner
            .execute(
                "TestDistributionListDestination",
                builder,
                req.test_destination_request_body_prototype,
                options,
            )
            .await
    }
}
