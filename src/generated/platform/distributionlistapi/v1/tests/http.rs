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
mod http {
    use gax::error::DecodeError;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use ibm_cloud_distributionlistapi_v1 as dl;
    use dl::client::DistributionListApi;
    use dl::model::{
        AddDestination, EventNotificationDestination, EventNotificationDestinationPrototype,
        NotificationType, TestEventNotificationDestination,
    };
    use serde_json::json;

    type Result<T> = anyhow::Result<T>;

    const ACCOUNT: &str = "a1b2c3";
    const ID: &str = "12345678-1234-1234-1234-123456789012";

    async fn client(server: &Server) -> Result<DistributionListApi> {
        let credentials = auth::credentials::bearer_token::Builder::new("test-token").build()?;
        let client = DistributionListApi::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(credentials)
            .build()
            .await?;
        Ok(client)
    }

    fn destination() -> Result<EventNotificationDestination> {
        Ok(EventNotificationDestination::new().set_id(uuid::Uuid::parse_str(ID)?))
    }

    #[tokio::test]
    async fn list() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/distribution_lists/a1b2c3/destinations"),
                request::headers(contains(("authorization", "Bearer test-token"))),
                request::headers(contains((
                    "x-ibmcloud-sdk-analytics",
                    "service_name=distribution_list_api;service_version=V1;operation_id=ListDistributionListDestinations"
                ))),
                request::headers(contains((
                    "user-agent",
                    matches("^platform-services-rust-sdk/")
                ))),
            ])
            .respond_with(json_encoded(json!({"destinations": [
                {"destination_type": "event_notifications", "id": ID},
            ]}))),
        );

        let client = client(&server).await?;
        let got = client
            .list_distribution_list_destinations()
            .set_account_id(ACCOUNT)
            .send()
            .await?;
        assert_eq!(got.destinations, vec![AddDestination::from(destination()?)]);
        Ok(())
    }

    #[tokio::test]
    async fn create() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/distribution_lists/a1b2c3/destinations"),
                request::headers(contains(("content-type", "application/json"))),
                request::headers(contains((
                    "x-ibmcloud-sdk-analytics",
                    "service_name=distribution_list_api;service_version=V1;operation_id=CreateDistributionListDestination"
                ))),
                request::body(json_decoded(eq(
                    json!({"destination_type": "event_notifications", "id": ID})
                ))),
            ])
            .respond_with(
                status_code(201)
                    .insert_header("content-type", "application/json")
                    .body(format!(
                        r#"{{"destination_type": "event_notifications", "id": "{ID}"}}"#
                    )),
            ),
        );

        let client = client(&server).await?;
        let response = client
            .create_distribution_list_destination()
            .set_account_id(ACCOUNT)
            .set_add_destination_prototype(
                EventNotificationDestinationPrototype::new().set_id(destination()?.id),
            )
            .send_with_response()
            .await?;
        assert_eq!(response.status(), ::http::StatusCode::CREATED);
        assert_eq!(response.into_body(), AddDestination::from(destination()?));
        Ok(())
    }

    #[tokio::test]
    async fn get() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "GET",
                    "/v1/distribution_lists/a1b2c3/destinations/12345678-1234-1234-1234-123456789012"
                ),
                request::headers(contains((
                    "x-ibmcloud-sdk-analytics",
                    "service_name=distribution_list_api;service_version=V1;operation_id=GetDistributionListDestination"
                ))),
            ])
            .respond_with(json_encoded(
                json!({"destination_type": "event_notifications", "id": ID}),
            )),
        );

        let client = client(&server).await?;
        let got = client
            .get_distribution_list_destination()
            .set_account_id(ACCOUNT)
            .set_id(ID)
            .send()
            .await?;
        assert_eq!(got, AddDestination::from(destination()?));
        Ok(())
    }

    #[tokio::test]
    async fn get_unrecognized_variant() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/v1/distribution_lists/a1b2c3/destinations/d1",
            ))
            .respond_with(json_encoded(
                json!({"destination_type": "email", "id": ID}),
            )),
        );

        let client = client(&server).await?;
        let err = client
            .get_distribution_list_destination()
            .set_account_id(ACCOUNT)
            .set_id("d1")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        assert!(
            matches!(err.decode_error(), Some(DecodeError::UnrecognizedVariant { tag, .. }) if tag == "email"),
            "{err:?}"
        );
        assert_eq!(err.operation_id(), Some("GetDistributionListDestination"));
        Ok(())
    }

    #[tokio::test]
    async fn delete() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/v1/distribution_lists/a1b2c3/destinations/d1"),
                request::headers(contains((
                    "x-ibmcloud-sdk-analytics",
                    "service_name=distribution_list_api;service_version=V1;operation_id=DeleteDistributionListDestination"
                ))),
            ])
            .respond_with(status_code(204)),
        );

        let client = client(&server).await?;
        let response = client
            .delete_distribution_list_destination()
            .set_account_id(ACCOUNT)
            .set_id("d1")
            .send_with_response()
            .await?;
        assert_eq!(response.status(), ::http::StatusCode::NO_CONTENT);
        Ok(())
    }

    #[tokio::test]
    async fn test_destination() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "POST",
                    "/v1/distribution_lists/a1b2c3/destinations/d1/test"
                ),
                request::headers(contains((
                    "x-ibmcloud-sdk-analytics",
                    "service_name=distribution_list_api;service_version=V1;operation_id=TestDistributionListDestination"
                ))),
                request::body(json_decoded(eq(json!({
                    "destination_type": "event_notifications",
                    "notification_type": "incident",
                })))),
            ])
            .respond_with(json_encoded(json!({"message": "success"}))),
        );

        let client = client(&server).await?;
        let got = client
            .test_distribution_list_destination()
            .set_account_id(ACCOUNT)
            .set_id("d1")
            .set_test_destination_request_body_prototype(TestEventNotificationDestination::new(
                NotificationType::Incident,
            ))
            .send()
            .await?;
        assert_eq!(got.message.as_deref(), Some("success"));
        Ok(())
    }

    #[tokio::test]
    async fn path_parameters_are_encoded() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/v1/distribution_lists/a%2Fb/destinations/c%20d",
            ))
            .respond_with(json_encoded(
                json!({"destination_type": "event_notifications", "id": ID}),
            )),
        );

        let client = client(&server).await?;
        let got = client
            .get_distribution_list_destination()
            .set_account_id("a/b")
            .set_id("c d")
            .send()
            .await?;
        assert_eq!(got, AddDestination::from(destination()?));
        Ok(())
    }

    #[tokio::test]
    async fn service_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/v1/distribution_lists/a1b2c3/destinations",
            ))
            .respond_with(
                status_code(404)
                    .insert_header("content-type", "application/json")
                    .body(r#"{"errors": [{"code": "not_found", "message": "Account not found"}]}"#),
            ),
        );

        let client = client(&server).await?;
        let err = client
            .list_distribution_list_destinations()
            .set_account_id(ACCOUNT)
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(404), "{err:?}");
        assert_eq!(err.service_message().as_deref(), Some("Account not found"));
        assert_eq!(err.operation_id(), Some("ListDistributionListDestinations"));
        let component = err.component().expect("errors carry the component");
        assert_eq!(component.name, "distribution_list_api");
        Ok(())
    }

    #[tokio::test]
    async fn retries() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/v1/distribution_lists/a1b2c3/destinations",
            ))
            .times(2)
            .respond_with(cycle(vec![
                Box::new(status_code(503).body("try-again")) as Box<dyn Responder>,
                Box::new(json_encoded(json!({"destinations": []}))),
            ])),
        );

        let client = DistributionListApi::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .with_retries(2, std::time::Duration::from_millis(1))
            .build()
            .await?;
        let got = client
            .list_distribution_list_destinations()
            .set_account_id(ACCOUNT)
            .send()
            .await?;
        assert!(got.destinations.is_empty(), "{got:?}");
        Ok(())
    }

    #[tokio::test]
    async fn missing_credentials() {
        let err = DistributionListApi::builder().build().await.unwrap_err();
        assert!(err.is_missing_credentials(), "{err:?}");
    }
}
