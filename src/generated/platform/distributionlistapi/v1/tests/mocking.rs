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

#[cfg(test)]
mod mocking {
    use gax::options::RequestOptionsBuilder;
    use gax::response::Response;
    use ibm_cloud_distributionlistapi_v1 as dl;
    use dl::client::DistributionListApi;
    use dl::model::{
        AddDestination, AddDestinationCollection, CreateDistributionListDestinationRequest,
        DeleteDistributionListDestinationRequest, EventNotificationDestination,
        EventNotificationDestinationPrototype, GetDistributionListDestinationRequest,
        ListDistributionListDestinationsRequest, NotificationType, TestDestinationResponseBody,
        TestDistributionListDestinationRequest, TestEventNotificationDestination,
    };
    use http::{HeaderName, HeaderValue};

    type Result<T> = anyhow::Result<T>;

    const ACCOUNT: &str = "a1b2c3";
    const ID: &str = "12345678-1234-1234-1234-123456789012";

    mockall::mock! {
        #[derive(Debug)]
        DistributionListApi {}
        impl dl::stub::DistributionListApi for DistributionListApi {
            async fn list_distribution_list_destinations(&self, req: ListDistributionListDestinationsRequest, options: gax::options::RequestOptions) -> gax::Result<Response<AddDestinationCollection>>;
            async fn create_distribution_list_destination(&self, req: CreateDistributionListDestinationRequest, options: gax::options::RequestOptions) -> gax::Result<Response<AddDestination>>;
            async fn get_distribution_list_destination(&self, req: GetDistributionListDestinationRequest, options: gax::options::RequestOptions) -> gax::Result<Response<AddDestination>>;
            async fn delete_distribution_list_destination(&self, req: DeleteDistributionListDestinationRequest, options: gax::options::RequestOptions) -> gax::Result<Response<()>>;
            async fn test_distribution_list_destination(&self, req: TestDistributionListDestinationRequest, options: gax::options::RequestOptions) -> gax::Result<Response<TestDestinationResponseBody>>;
        }
    }

    fn destination() -> Result<EventNotificationDestination> {
        Ok(EventNotificationDestination::new().set_id(uuid::Uuid::parse_str(ID)?))
    }

    fn test_body() -> TestEventNotificationDestination {
        TestEventNotificationDestination::new(NotificationType::Maintenance)
    }

    fn never_called() -> MockDistributionListApi {
        let mut mock = MockDistributionListApi::new();
        mock.expect_list_distribution_list_destinations().never();
        mock.expect_create_distribution_list_destination().never();
        mock.expect_get_distribution_list_destination().never();
        mock.expect_delete_distribution_list_destination().never();
        mock.expect_test_distribution_list_destination().never();
        mock
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn test_destination_with_empty_account_id() -> Result<()> {
        let client = DistributionListApi::from_stub(never_called());
        let err = client
            .test_distribution_list_destination()
            .set_account_id("")
            .set_id(ID)
            .set_test_destination_request_body_prototype(test_body())
            .send()
            .await
            .unwrap_err();
        assert!(err.is_invalid_options(), "{err:?}");
        assert_eq!(err.invalid_field(), Some("account_id"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn validation_precedes_stub() -> Result<()> {
        let client = DistributionListApi::from_stub(never_called());

        let err = client
            .list_distribution_list_destinations()
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.invalid_field(), Some("account_id"), "{err:?}");

        let err = client
            .create_distribution_list_destination()
            .set_account_id(ACCOUNT)
            .send()
            .await
            .unwrap_err();
        assert_eq!(
            err.invalid_field(),
            Some("add_destination_prototype"),
            "{err:?}"
        );

        let err = client
            .get_distribution_list_destination()
            .set_account_id(ACCOUNT)
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.invalid_field(), Some("id"), "{err:?}");

        let err = client
            .delete_distribution_list_destination()
            .set_id(ID)
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.invalid_field(), Some("account_id"), "{err:?}");

        let err = client
            .test_distribution_list_destination()
            .set_account_id(ACCOUNT)
            .set_id(ID)
            .send()
            .await
            .unwrap_err();
        assert_eq!(
            err.invalid_field(),
            Some("test_destination_request_body_prototype"),
            "{err:?}"
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn forwards_requests() -> Result<()> {
        let mut mock = MockDistributionListApi::new();
        let want = destination()?;
        let response = AddDestination::from(want.clone());
        mock.expect_create_distribution_list_destination()
            .withf(move |r, o| {
                r.account_id == ACCOUNT
                    && r.add_destination_prototype
                        == Some(
                            EventNotificationDestinationPrototype::new()
                                .set_id(want.id)
                                .into(),
                        )
                    && o.user_agent().as_deref() == Some("my-app/1.0")
                    && o.headers().get("x-correlation-id")
                        == Some(&HeaderValue::from_static("abc"))
            })
            .times(1)
            .return_once(move |_, _| Ok(Response::from(response)));

        let client = DistributionListApi::from_stub(mock);
        let got = client
            .create_distribution_list_destination()
            .set_account_id(ACCOUNT)
            .set_add_destination_prototype(
                EventNotificationDestinationPrototype::new().set_id(destination()?.id),
            )
            .with_user_agent("my-app/1.0")
            .with_header(
                HeaderName::from_static("x-correlation-id"),
                HeaderValue::from_static("abc"),
            )
            .send()
            .await?;
        assert_eq!(got, AddDestination::from(destination()?));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn returns_metadata() -> Result<()> {
        let mut mock = MockDistributionListApi::new();
        mock.expect_delete_distribution_list_destination()
            .withf(|r, _| r.account_id == ACCOUNT && r.id == ID)
            .return_once(|_, _| {
                Ok(Response::from_parts(
                    gax::response::Parts::new().set_status(http::StatusCode::NO_CONTENT),
                    (),
                ))
            });
        let client = DistributionListApi::from_stub(mock);
        let response = client
            .delete_distribution_list_destination()
            .set_account_id(ACCOUNT)
            .set_id(ID)
            .send_with_response()
            .await?;
        assert_eq!(response.status(), http::StatusCode::NO_CONTENT);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn with_request() -> Result<()> {
        let mut mock = MockDistributionListApi::new();
        mock.expect_test_distribution_list_destination()
            .withf(|r, _| {
                r.account_id == ACCOUNT
                    && r.id == ID
                    && r.test_destination_request_body_prototype == Some(test_body().into())
            })
            .return_once(|_, _| {
                Ok(Response::from(
                    TestDestinationResponseBody::new().set_message("success"),
                ))
            });
        let client = DistributionListApi::from_stub(mock);
        let request = TestDistributionListDestinationRequest::new()
            .set_account_id(ACCOUNT)
            .set_id(ID)
            .set_test_destination_request_body_prototype(test_body());
        let got = client
            .test_distribution_list_destination()
            .with_request(request)
            .send()
            .await?;
        assert_eq!(got.message.as_deref(), Some("success"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn propagates_errors() -> Result<()> {
        let mut mock = MockDistributionListApi::new();
        mock.expect_get_distribution_list_destination()
            .return_once(|_, _| {
                Err(gax::error::Error::http(
                    503,
                    http::HeaderMap::new(),
                    bytes::Bytes::from_static(b"{\"errors\": [{\"message\": \"try again\"}]}"),
                ))
            });
        let client = DistributionListApi::from_stub(mock);
        let err = client
            .get_distribution_list_destination()
            .set_account_id(ACCOUNT)
            .set_id(ID)
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(503));
        assert_eq!(err.service_message().as_deref(), Some("try again"));
        Ok(())
    }
}
