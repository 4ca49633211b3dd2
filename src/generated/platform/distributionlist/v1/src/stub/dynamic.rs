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

/// A dyn-compatible, crate-private version of [super::DistributionList].
#[async_trait::async_trait]
pub trait DistributionList: std::fmt::Debug + Send + Sync {
    async fn list_distribution_list_destinations(
        &self,
        req: crate::model::ListDistributionListDestinationsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AddDestinationCollection>>;

    async fn create_distribution_list_destination(
        &self,
        req: crate::model::CreateDistributionListDestinationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AddDestination>>;

    async fn get_distribution_list_destination(
        &self,
        req: crate::model::GetDistributionListDestinationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AddDestination>>;

    async fn delete_distribution_list_destination(
        &self,
        req: crate::model::DeleteDistributionListDestinationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn test_distribution_list_destination(
        &self,
        req: crate::model::TestDistributionListDestinationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::TestDestinationResponseBody>>;
}

/// All implementations of [super::DistributionList] also implement [DistributionList].
#[async_trait::async_trait]
impl<T: super::DistributionList> DistributionList for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn list_distribution_list_destinations(
        &self,
        req: crate::model::ListDistributionListDestinationsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AddDestinationCollection>> {
        T::list_distribution_list_destinations(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_distribution_list_destination(
        &self,
        req: crate::model::CreateDistributionListDestinationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AddDestination>> {
        T::create_distribution_list_destination(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_distribution_list_destination(
        &self,
        req: crate::model::GetDistributionListDestinationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AddDestination>> {
        T::get_distribution_list_destination(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_distribution_list_destination(
        &self,
        req: crate::model::DeleteDistributionListDestinationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_distribution_list_destination(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn test_distribution_list_destination(
        &self,
        req: crate::model::TestDistributionListDestinationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::TestDestinationResponseBody>> {
        T::test_distribution_list_destination(self, req, options).await
    }
}
