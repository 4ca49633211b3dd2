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

pub mod distribution_list_api {
    use crate::Result;

    /// A builder for [DistributionListApi][crate::client::DistributionListApi].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_distributionlistapi_v1::*;
    /// # use builder::distribution_list_api::ClientBuilder;
    /// # use client::DistributionListApi;
    /// let credentials = auth::credentials::anonymous::Builder::new().build();
    /// let builder : ClientBuilder = DistributionListApi::builder();
    /// let client = builder
    ///     .with_endpoint("https://private.cloud.ibm.com/notification-api")
    ///     .with_credentials(credentials)
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::DistributionListApi;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = DistributionListApi;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::DistributionListApi] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::DistributionListApi>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DistributionListApi>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [DistributionListApi::list_distribution_list_destinations][crate::client::DistributionListApi::list_distribution_list_destinations] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_distributionlistapi_v1::builder;
    /// use builder::distribution_list_api::ListDistributionListDestinations;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListDistributionListDestinations {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListDistributionListDestinations(
        RequestBuilder<crate::model::ListDistributionListDestinationsRequest>,
    );

    impl ListDistributionListDestinations {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DistributionListApi>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListDistributionListDestinationsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::AddDestinationCollection> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, returning the response status and headers with the payload.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::AddDestinationCollection>> {
            self.0.request.validate()?;
            (*self.0.stub)
                .list_distribution_list_destinations(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [account_id][crate::model::ListDistributionListDestinationsRequest::account_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_account_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.account_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListDistributionListDestinations {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DistributionListApi::create_distribution_list_destination][crate::client::DistributionListApi::create_distribution_list_destination] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_distributionlistapi_v1::builder;
    /// use builder::distribution_list_api::CreateDistributionListDestination;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateDistributionListDestination {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateDistributionListDestination(
        RequestBuilder<crate::model::CreateDistributionListDestinationRequest>,
    );

    impl CreateDistributionListDestination {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DistributionListApi>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateDistributionListDestinationRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::AddDestination> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, returning the response status and headers with the payload.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::AddDestination>> {
            self.0.request.validate()?;
            (*self.0.stub)
                .create_distribution_list_destination(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [account_id][crate::model::CreateDistributionListDestinationRequest::account_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_account_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.account_id = v.into();
            self
        }

        /// Sets the value of [add_destination_prototype][crate::model::CreateDistributionListDestinationRequest::add_destination_prototype].
        ///
        /// This is a **required** field for requests.
        pub fn set_add_destination_prototype<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::AddDestinationPrototype>,
        {
            self.0.request.add_destination_prototype = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [add_destination_prototype][crate::model::CreateDistributionListDestinationRequest::add_destination_prototype].
        ///
        /// This is a **required** field for requests.
        pub fn set_or_clear_add_destination_prototype<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::AddDestinationPrototype>,
        {
            self.0.request.add_destination_prototype = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateDistributionListDestination {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DistributionListApi::get_distribution_list_destination][crate::client::DistributionListApi::get_distribution_list_destination] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_distributionlistapi_v1::builder;
    /// use builder::distribution_list_api::GetDistributionListDestination;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetDistributionListDestination {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetDistributionListDestination(
        RequestBuilder<crate::model::GetDistributionListDestinationRequest>,
    );

    impl GetDistributionListDestination {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DistributionListApi>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetDistributionListDestinationRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::AddDestination> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, returning the response status and headers with the payload.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::AddDestination>> {
            self.0.request.validate()?;
            (*self.0.stub)
                .get_distribution_list_destination(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [account_id][crate::model::GetDistributionListDestinationRequest::account_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_account_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.account_id = v.into();
            self
        }

        /// Sets the value of [id][crate::model::GetDistributionListDestinationRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetDistributionListDestination {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DistributionListApi::delete_distribution_list_destination][crate::client::DistributionListApi::delete_distribution_list_destination] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_distributionlistapi_v1::builder;
    /// use builder::distribution_list_api::DeleteDistributionListDestination;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteDistributionListDestination {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteDistributionListDestination(
        RequestBuilder<crate::model::DeleteDistributionListDestinationRequest>,
    );

    impl DeleteDistributionListDestination {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DistributionListApi>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteDistributionListDestinationRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, returning the response status and headers.
        pub async fn send_with_response(self) -> Result<gax::response::Response<()>> {
            self.0.request.validate()?;
            (*self.0.stub)
                .delete_distribution_list_destination(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [account_id][crate::model::DeleteDistributionListDestinationRequest::account_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_account_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.account_id = v.into();
            self
        }

        /// Sets the value of [id][crate::model::DeleteDistributionListDestinationRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteDistributionListDestination {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DistributionListApi::test_distribution_list_destination][crate::client::DistributionListApi::test_distribution_list_destination] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_distributionlistapi_v1::builder;
    /// use builder::distribution_list_api::TestDistributionListDestination;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> TestDistributionListDestination {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct TestDistributionListDestination(
        RequestBuilder<crate::model::TestDistributionListDestinationRequest>,
    );

    impl TestDistributionListDestination {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DistributionListApi>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::TestDistributionListDestinationRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::TestDestinationResponseBody> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, returning the response status and headers with the payload.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::TestDestinationResponseBody>> {
            self.0.request.validate()?;
            (*self.0.stub)
                .test_distribution_list_destination(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [account_id][crate::model::TestDistributionListDestinationRequest::account_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_account_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.account_id = v.into();
            self
        }

        /// Sets the value of [id][crate::model::TestDistributionListDestinationRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }

        /// Sets the value of [test_destination_request_body_prototype][crate::model::TestDistributionListDestinationRequest::test_destination_request_body_prototype].
        ///
        /// This is a **required** field for requests.
        pub fn set_test_destination_request_body_prototype<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::TestDestinationRequestBodyPrototype>,
        {
            self.0.request.test_destination_request_body_prototype =
                std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [test_destination_request_body_prototype][crate::model::TestDistributionListDestinationRequest::test_destination_request_body_prototype].
        ///
        /// This is a **required** field for requests.
        pub fn set_or_clear_test_destination_request_body_prototype<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::TestDestinationRequestBodyPrototype>,
        {
            self.0.request.test_destination_request_body_prototype = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for TestDistributionListDestination {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
