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

use crate::api_header::{SDK_ANALYTICS_HEADER, sdk_analytics, user_agent};
use crate::options::{ClientConfig, ClientInfo};
use auth::credentials::Credentials;
use gax::Result;
use gax::client_builder::Error as BuilderError;
use gax::error::{DecodeError, Error};
use gax::options::RequestOptions;
use gax::response::{Parts, Response};
use gax::retry_policy::RetryPolicy;
use gax::variant::{Envelope, json_type};
use http::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};

const APPLICATION_JSON: &str = "application/json";

/// The HTTP transport shared by all the generated clients.
#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
    default_headers: HeaderMap,
    retry_policy: Option<RetryPolicy>,
    info: Option<ClientInfo>,
    user_agent: String,
}

/// A successful response before the payload is decoded.
#[derive(Debug)]
struct RawResponse {
    parts: Parts,
    body: bytes::Bytes,
}

impl ReqwestClient {
    pub async fn new(config: ClientConfig, default_endpoint: &str) -> gax::client_builder::Result<Self> {
        let cred = config.cred.ok_or_else(BuilderError::missing_credentials)?;
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        let endpoint = config
            .endpoint
            .unwrap_or_else(|| default_endpoint.to_string())
            .trim_end_matches('/')
            .to_string();
        Ok(Self {
            inner,
            cred,
            endpoint,
            default_headers: config.default_headers,
            retry_policy: config.retry_policy,
            info: None,
            user_agent: user_agent(env!("CARGO_PKG_VERSION")),
        })
    }

    /// Identifies the client library using this transport.
    ///
    /// The information is used in the `User-Agent` and SDK analytics headers,
    /// and to annotate any errors.
    pub fn with_client_info(mut self, info: ClientInfo) -> Self {
        self.user_agent = user_agent(info.client_version);
        self.info = Some(info);
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn builder(&self, method: reqwest::Method, path: String) -> reqwest::RequestBuilder {
        self.inner
            .request(method, format!("{}{path}", &self.endpoint))
    }

    /// Sends a request and deserializes the response with `serde`.
    ///
    /// A `204 No Content` response with an empty payload produces
    /// `O::default()`.
    pub async fn execute<I, O>(
        &self,
        operation_id: &'static str,
        builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: RequestOptions,
    ) -> Result<Response<O>>
    where
        I: serde::ser::Serialize,
        O: serde::de::DeserializeOwned + Default,
    {
        let raw = self.send(operation_id, builder, body, &options).await?;
        let no_content = raw.parts.status == reqwest::StatusCode::NO_CONTENT;
        let response = match raw.body {
            content if content.is_empty() && no_content => O::default(),
            content => serde_json::from_slice::<O>(&content)
                .map_err(|e| self.annotate(operation_id, Error::deser(e)))?,
        };
        Ok(Response::from_parts(raw.parts, response))
    }

    /// Sends a request and decodes the response payload with `decoder`.
    ///
    /// Use this function for payloads containing tagged variants, the decoder
    /// errors are preserved as the source of the returned error.
    pub async fn execute_with<I, O, F>(
        &self,
        operation_id: &'static str,
        builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: RequestOptions,
        decoder: F,
    ) -> Result<Response<O>>
    where
        I: serde::ser::Serialize,
        F: FnOnce(&Envelope) -> std::result::Result<O, DecodeError>,
    {
        let raw = self.send(operation_id, builder, body, &options).await?;
        let value = serde_json::from_slice::<serde_json::Value>(&raw.body)
            .map_err(|e| self.annotate(operation_id, Error::deser(e)))?;
        let response = match &value {
            serde_json::Value::Object(envelope) => decoder(envelope),
            other => Err(DecodeError::NotAnObject {
                found: json_type(other),
            }),
        }
        .map_err(|e| self.annotate(operation_id, Error::deser(e)))?;
        Ok(Response::from_parts(raw.parts, response))
    }

    /// Sends a request and discards any response payload.
    pub async fn execute_empty<I: serde::ser::Serialize>(
        &self,
        operation_id: &'static str,
        builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let raw = self.send(operation_id, builder, body, &options).await?;
        Ok(Response::from_parts(raw.parts, ()))
    }

    async fn send<I: serde::ser::Serialize>(
        &self,
        operation_id: &'static str,
        builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: &RequestOptions,
    ) -> Result<RawResponse> {
        self.send_with_retries(operation_id, builder, body, options)
            .await
            .map_err(|e| self.annotate(operation_id, e))
    }

    async fn send_with_retries<I: serde::ser::Serialize>(
        &self,
        operation_id: &'static str,
        builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: &RequestOptions,
    ) -> Result<RawResponse> {
        let request = self.prepare(operation_id, builder, body, options)?;
        let policy = self.get_retry_policy(options);
        let mut attempt = 0_u32;
        loop {
            attempt += 1;
            let error = match self.request_attempt(&request).await {
                Ok(response) => return Ok(response),
                Err(e) => e,
            };
            let policy = match policy {
                Some(p) if attempt <= p.max_retries() && p.is_retryable(&error) => p,
                _ => return Err(error),
            };
            let delay = policy.backoff(attempt, RetryPolicy::retry_after(&error));
            tracing::warn!(
                operation_id,
                attempt,
                ?delay,
                "retrying request after error: {error}"
            );
            tokio::time::sleep(delay).await;
        }
    }

    fn prepare<I: serde::ser::Serialize>(
        &self,
        operation_id: &'static str,
        mut builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: &RequestOptions,
    ) -> Result<reqwest::Request> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        if let Some(body) = body {
            let payload = serde_json::to_vec(&body).map_err(Error::ser)?;
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
            builder = builder.body(payload);
        }
        let agent = match options.user_agent() {
            Some(prefix) => format!("{prefix} {}", self.user_agent),
            None => self.user_agent.clone(),
        };
        headers.insert(USER_AGENT, HeaderValue::from_str(&agent).map_err(Error::ser)?);
        if let Some(info) = &self.info {
            let analytics = sdk_analytics(info.service_name, info.service_version, operation_id);
            headers.insert(
                HeaderName::from_static(SDK_ANALYTICS_HEADER),
                HeaderValue::from_str(&analytics).map_err(Error::ser)?,
            );
        }
        // Later values replace earlier ones for the same header name.
        headers.extend(self.default_headers.clone());
        headers.extend(options.headers().clone());
        builder = builder.headers(headers);
        if let Some(timeout) = options.attempt_timeout() {
            builder = builder.timeout(*timeout);
        }
        builder.build().map_err(Error::io)
    }

    async fn request_attempt(&self, request: &reqwest::Request) -> Result<RawResponse> {
        let mut request = request
            .try_clone()
            .ok_or_else(|| Error::ser("the request body cannot be cloned"))?;
        let auth_headers = self.cred.headers().await.map_err(Error::authentication)?;
        request.headers_mut().extend(auth_headers);
        tracing::debug!(method = %request.method(), url = %request.url(), "sending request");
        let response = self
            .inner
            .execute(request)
            .await
            .map_err(Self::map_send_error)?;
        let status = response.status();
        let response = http::Response::from(response);
        let (parts, body) = response.into_parts();
        let body = http_body_util::BodyExt::collect(body)
            .await
            .map_err(Error::io)?
            .to_bytes();
        tracing::debug!(status = status.as_u16(), "received response");
        if !status.is_success() {
            return Err(Error::http(status.as_u16(), parts.headers, body));
        }
        Ok(RawResponse {
            parts: Parts::new().set_status(status).set_headers(parts.headers),
            body,
        })
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }

    fn get_retry_policy(&self, options: &RequestOptions) -> Option<RetryPolicy> {
        (*options.retry_policy()).or(self.retry_policy)
    }

    fn annotate(&self, operation_id: &'static str, error: Error) -> Error {
        match &self.info {
            Some(info) => error.with_context(operation_id, info.component()),
            None => error,
        }
    }
}

/// A placeholder for requests without a payload.
#[derive(serde::Serialize)]
pub struct NoBody;
