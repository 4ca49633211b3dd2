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

/// Implements a [DistributionList](super::stub::DistributionList) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct DistributionList<T>
where
    T: super::stub::DistributionList + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> DistributionList<T>
where
    T: super::stub::DistributionList + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::DistributionList for DistributionList<T>
where
    T: super::stub::DistributionList + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn list_distribution_list_destinations(
        &self,
        req: crate::model::ListDistributionListDestinationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AddDestinationCollection>> {
        self.inner
            .list_distribution_list_destinations(req, options)
            .await
    }

    #[tracing::instrument(ret)]
    async fn create_distribution_list_destination(
        &self,
        req: crate::model::CreateDistributionListDestinationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AddDestination>> {
        self.inner
            .create_distribution_list_destination(req, options)
            .await
    }

    #[tracing::instrument(ret)]
    async fn get_distribution_list_destination(
        &self,
        req: crate::model::GetDistributionListDestinationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AddDestination>> {
        self.inner.get_distribution_list_destination(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_distribution_list_destination(
        &self,
        req: crate::model::DeleteDistributionListDestinationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner
            .delete_distribution_list_destination(req, options)
            .await
    }

    #[tracing::instrument(ret)]
    async fn test_distribution_list_destination(
        &self,
        req: crate::model::TestDistributionListDestinationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TestDestinationResponseBody>> {
        self.inner
            .test_distribution_list_destination(req, options)
            .await
    }
}
