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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

#![allow(rustdoc::broken_intra_doc_links)]

pub(crate) mod dynamic;

/// Defines the trait used to implement [super::client::DistributionList].
///
/// Application developers may need to implement this trait to mock
/// `client::DistributionList`. In other use-cases, application developers
/// only use `client::DistributionList` and need not be concerned with this
/// trait or its implementations.
///
/// Services gain new operations routinely. Consequently, this trait gains new
/// methods too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
pub trait DistributionList: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::DistributionList::list_distribution_list_destinations].
    fn list_distribution_list_destinations(
        &self,
        _req: crate::model::ListDistributionListDestinationsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::AddDestinationCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::DistributionList::create_distribution_list_destination].
    fn create_distribution_list_destination(
        &self,
        _req: crate::model::CreateDistributionListDestinationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::AddDestination>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::DistributionList::get_distribution_list_destination].
    fn get_distribution_list_destination(
        &self,
        _req: crate::model::GetDistributionListDestinationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::AddDestination>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::DistributionList::delete_distribution_list_destination].
    fn delete_distribution_list_destination(
        &self,
        _req: crate::model::DeleteDistributionListDestinationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<()>>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::DistributionList::test_distribution_list_destination].
    fn test_distribution_list_destination(
        &self,
        _req: crate::model::TestDistributionListDestinationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::TestDestinationResponseBody>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }
}
