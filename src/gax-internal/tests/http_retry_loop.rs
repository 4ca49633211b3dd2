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

//! These tests verify the HTTP client retries transient failures when a retry
//! policy is configured. They do not test the policy implementation, that is
//! done in the unit tests.
//!
//! The tests use an HTTP server that returns a sequence of responses. The
//! sequence is specific to each test, intended to drive the retry loop as
//! needed for that test.

#[cfg(all(test, feature = "_internal-http-client"))]
mod tests {
    use gax::options::RequestOptions;
    use gax::retry_policy::RetryPolicy;
    use http::StatusCode;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use ibm_cloud_gax_internal::http::{NoBody, ReqwestClient};
    use ibm_cloud_gax_internal::options::ClientConfig;
    use serde_json::json;
    use std::time::Duration;

    type Result<T> = anyhow::Result<T>;

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn no_policy_immediate_success() -> Result<()> {
        let server = start(vec![success()]);
        let endpoint = format!("http://{}", server.addr());

        let client = ReqwestClient::new(test_config(), &endpoint).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());
        let response = client
            .execute::<NoBody, serde_json::Value>("Retry", builder, None, RequestOptions::default())
            .await?;
        assert_eq!(response.into_body(), json!({"status": "done"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn no_policy_transient_failure() -> Result<()> {
        // Without a retry policy the client makes a single attempt.
        let server = start(vec![transient()]);
        let endpoint = format!("http://{}", server.addr());

        let client = ReqwestClient::new(test_config(), &endpoint).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());
        let err = client
            .execute::<NoBody, serde_json::Value>("Retry", builder, None, RequestOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(transient().0.as_u16()));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_success() -> Result<()> {
        // We create a server that will return two transient errors and then succeed.
        let server = start(vec![transient(), transient(), success()]);
        let endpoint = format!("http://{}", server.addr());

        let client = ReqwestClient::new(test_config(), &endpoint).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());
        let response = client
            .execute::<NoBody, serde_json::Value>("Retry", builder, None, test_options())
            .await?;
        assert_eq!(response.into_body(), json!({"status": "done"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_with_body() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/retry"),
                request::body(json_decoded(eq(json!({"id": "abc"})))),
            ])
            .times(2)
            .respond_with(cycle(vec![
                to_responder(transient().0, transient().1),
                to_responder(success().0, success().1),
            ])),
        );
        let endpoint = format!("http://{}", server.addr());

        let client = ReqwestClient::new(test_config(), &endpoint).await?;
        let builder = client.builder(reqwest::Method::POST, "/retry".into());
        let response = client
            .execute::<serde_json::Value, serde_json::Value>(
                "Retry",
                builder,
                Some(json!({"id": "abc"})),
                test_options(),
            )
            .await?;
        assert_eq!(response.into_body(), json!({"status": "done"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_exhausted() -> Result<()> {
        // One initial attempt plus two retries.
        let server = start(vec![transient(), transient(), transient()]);
        let endpoint = format!("http://{}", server.addr());

        let client = ReqwestClient::new(test_config(), &endpoint).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());
        let mut options = RequestOptions::default();
        options.set_retry_policy(
            RetryPolicy::default()
                .set_max_retries(2)
                .set_max_interval(Duration::from_millis(1)),
        );
        let err = client
            .execute::<NoBody, serde_json::Value>("Retry", builder, None, options)
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(transient().0.as_u16()));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_permanent_failure() -> Result<()> {
        let server = start(vec![permanent()]);
        let endpoint = format!("http://{}", server.addr());

        let client = ReqwestClient::new(test_config(), &endpoint).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());
        let err = client
            .execute::<NoBody, serde_json::Value>("Retry", builder, None, test_options())
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(permanent().0.as_u16()));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_not_implemented() -> Result<()> {
        let server = start(vec![(
            StatusCode::NOT_IMPLEMENTED,
            json!({"errors": [{"message": "not implemented"}]}).to_string(),
        )]);
        let endpoint = format!("http://{}", server.addr());

        let client = ReqwestClient::new(test_config(), &endpoint).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());
        let err = client
            .execute::<NoBody, serde_json::Value>("Retry", builder, None, test_options())
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(501));
        assert_eq!(err.service_message().as_deref(), Some("not implemented"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_client_policy() -> Result<()> {
        let server = start(vec![
            (StatusCode::TOO_MANY_REQUESTS, "{}".to_string()),
            success(),
        ]);
        let endpoint = format!("http://{}", server.addr());

        let mut config = test_config();
        config.retry_policy = Some(
            RetryPolicy::default()
                .set_max_retries(1)
                .set_max_interval(Duration::from_millis(1)),
        );
        let client = ReqwestClient::new(config, &endpoint).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());
        let response = client
            .execute::<NoBody, serde_json::Value>("Retry", builder, None, RequestOptions::default())
            .await?;
        assert_eq!(response.into_body(), json!({"status": "done"}));
        Ok(())
    }

    #[tokio::test]
    async fn retry_is_logged() -> Result<()> {
        let server = start(vec![transient(), success()]);
        let endpoint = format!("http://{}", server.addr());

        let capture = Capture::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(capture.clone())
            .with_max_level(tracing::Level::WARN)
            .finish();
        // The default subscriber is per thread, the test uses a single thread runtime.
        let _guard = tracing::subscriber::set_default(subscriber);

        let client = ReqwestClient::new(test_config(), &endpoint).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());
        client
            .execute::<NoBody, serde_json::Value>("Retry", builder, None, test_options())
            .await?;

        let logs = capture.contents();
        assert!(logs.contains("retrying request after error"), "{logs}");
        assert!(logs.contains("operation_id="), "{logs}");
        assert!(logs.contains("attempt=1"), "{logs}");
        Ok(())
    }

    #[derive(Clone, Default)]
    struct Capture(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl Capture {
        fn contents(&self) -> String {
            let buffer = self.0.lock().expect("log buffer is not poisoned");
            String::from_utf8_lossy(&buffer).into_owned()
        }
    }

    impl std::io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0
                .lock()
                .expect("log buffer is not poisoned")
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for Capture {
        type Writer = Capture;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn success() -> (StatusCode, String) {
        let response = json!({"status": "done"});
        (StatusCode::OK, response.to_string())
    }

    fn transient() -> (StatusCode, String) {
        let status = json!({"errors": [{"code": "unavailable", "message": "try-again"}]});
        (StatusCode::SERVICE_UNAVAILABLE, status.to_string())
    }

    fn permanent() -> (StatusCode, String) {
        let status = json!({"errors": [{"code": "bad_request", "message": "uh-oh"}]});
        (StatusCode::BAD_REQUEST, status.to_string())
    }

    fn test_config() -> ClientConfig {
        let mut config = ClientConfig::default();
        config.cred = Some(auth::credentials::anonymous::Builder::new().build());
        config
    }

    fn test_options() -> RequestOptions {
        let mut options = RequestOptions::default();
        options.set_retry_policy(RetryPolicy::default().set_max_interval(Duration::from_millis(1)));
        options
    }

    fn start(responses: Vec<(StatusCode, String)>) -> Server {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/retry"))
                .times(responses.len())
                .respond_with(cycle(
                    responses
                        .into_iter()
                        .map(|(status, body)| to_responder(status, body))
                        .collect(),
                )),
        );
        server
    }

    fn to_responder(status: StatusCode, response: String) -> Box<dyn Responder> {
        Box::new(
            status_code(status.as_u16())
                .insert_header("Content-Type", "application/json")
                .body(response),
        )
    }
}
