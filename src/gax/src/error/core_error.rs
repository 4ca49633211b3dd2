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

use super::CredentialsError;
use super::DecodeError;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client libraries.
///
/// The client libraries report errors from multiple sources. For example, the
/// application may provide invalid options for a call, the transport may be
/// unable to create the necessary connection to make a request, the service
/// may return an error, the request may timeout before a response is
/// received, or the library may be unable to decode the response.
///
/// Most applications will just return the error or log it, without any further
/// action. However, some applications may need to interrogate the error
/// details. This type offers a series of predicates to determine the error
/// kind. The type also offers accessors to query the most common error details.
/// Applications can query the error [source][std::error::Error::source] for
/// deeper information.
///
/// # Example
/// ```
/// use ibm_cloud_gax::error::Error;
/// match example_function() {
///     Err(e) if e.is_invalid_options() => {
///         println!("fix the call parameters: {e}, field={:?}", e.invalid_field());
///     },
///     Err(e) if e.http_status_code() == Some(404) => { println!("not found {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # Err(Error::invalid_options("account_id"))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
    context: Option<Box<CallContext>>,
}

/// Identifies the client library component reporting an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Component {
    /// The service name, e.g. `distribution_list`.
    pub name: &'static str,
    /// The service API version, e.g. `1.0.0`.
    pub version: &'static str,
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.name, self.version)
    }
}

#[derive(Debug)]
struct CallContext {
    operation_id: &'static str,
    component: Component,
}

impl Error {
    fn new(kind: ErrorKind, source: Option<BoxError>) -> Self {
        Self {
            kind,
            source,
            context: None,
        }
    }

    /// Creates an error representing invalid options for a call.
    ///
    /// # Example
    /// ```
    /// use ibm_cloud_gax::error::Error;
    /// let error = Error::invalid_options("account_id");
    /// assert!(error.is_invalid_options());
    /// assert_eq!(error.invalid_field(), Some("account_id"));
    /// ```
    pub fn invalid_options<T: Into<String>>(field: T) -> Self {
        Self::new(ErrorKind::InvalidOptions(field.into()), None)
    }

    /// The options for a call were missing required parameters, or the
    /// parameters were empty.
    ///
    /// This is always a client-side generated error, detected before any
    /// request is sent to the service.
    ///
    /// # Troubleshooting
    ///
    /// Typically this indicates a problem in the application. A required field
    /// in the request builder was not initialized, or it was initialized to an
    /// empty string. Use [invalid_field][Error::invalid_field] to find the
    /// name of the field.
    pub fn is_invalid_options(&self) -> bool {
        matches!(&self.kind, ErrorKind::InvalidOptions(_))
    }

    /// The name of the field that failed validation, if any.
    pub fn invalid_field(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::InvalidOptions(f) => Some(f.as_str()),
            _ => None,
        }
    }

    /// Creates an error representing a timeout.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use ibm_cloud_gax::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Timeout, Some(source.into()))
    }

    /// The request could not be completed before its deadline.
    ///
    /// This is always a client-side generated error. Note that the request may
    /// or may not have started, and it may or may not complete in the service.
    /// If the request mutates any state in the service, it may or may not be
    /// safe to attempt the request again.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a problem decoding the response.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use ibm_cloud_gax::error::Error;
    /// let error = Error::deser("simulated problem");
    /// assert!(error.is_deserialization());
    /// assert!(error.source().is_some());
    /// ```
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Deserialization, Some(source.into()))
    }

    /// The response could not be decoded.
    ///
    /// This is always a client-side generated error. Note that the request
    /// completed in the service. If the request mutates any state in the
    /// service, it may not be safe to attempt the request again.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause is a tagged object with a tag value that is
    /// unknown to this version of the client library. Use
    /// [decode_error][Error::decode_error] to get the details. Upgrading to
    /// the latest version of the client library may be the only possible fix.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// The [DecodeError] associated with a deserialization error, if any.
    ///
    /// # Example
    /// ```
    /// use ibm_cloud_gax::error::{DecodeError, Error};
    /// let decode = DecodeError::UnrecognizedVariant {
    ///     family: "AddDestination",
    ///     field: "destination_type",
    ///     tag: "email".to_string(),
    /// };
    /// let error = Error::deser(decode.clone());
    /// assert_eq!(error.decode_error(), Some(&decode));
    /// ```
    pub fn decode_error(&self) -> Option<&DecodeError> {
        match &self.kind {
            ErrorKind::Deserialization => self
                .source
                .as_ref()
                .and_then(|e| e.downcast_ref::<DecodeError>()),
            _ => None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a serialization problem.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Serialization, Some(source.into()))
    }

    /// The request could not be serialized.
    ///
    /// This is always a client-side generated error, generated before the
    /// request is made. This error is never transient: the serialization is
    /// deterministic, and will fail on future attempts with the same input
    /// data. Typically this indicates a header value that is not valid in
    /// HTTP, such as a value with embedded newlines.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// The HTTP status code, if any, associated with this error.
    ///
    /// # Example
    /// ```
    /// use ibm_cloud_gax::error::Error;
    /// let e = search_for_thing("the thing");
    /// if let Some(code) = e.http_status_code() {
    ///     if code == 404 {
    ///         println!("cannot find the thing, more details in {e}");
    ///     }
    /// }
    ///
    /// fn search_for_thing(name: &str) -> Error {
    ///     # Error::http(404, http::HeaderMap::new(), bytes::Bytes::from_static(b"NOT FOUND"))
    /// }
    /// ```
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Transport(d) => d.as_ref().status_code,
            _ => None,
        }
    }

    /// The headers, if any, associated with this error.
    ///
    /// Many errors do not have this information, e.g. errors detected before
    /// the request is sent, or timeouts.
    pub fn http_headers(&self) -> Option<&http::HeaderMap> {
        match &self.kind {
            ErrorKind::Transport(d) => d.as_ref().headers.as_ref(),
            _ => None,
        }
    }

    /// The payload, if any, associated with this error.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Transport(d) => d.payload.as_ref(),
            _ => None,
        }
    }

    /// The error message reported by the service, if any.
    ///
    /// IBM Cloud services report errors using a JSON payload. This function
    /// extracts the human-readable message from the most common formats.
    ///
    /// # Example
    /// ```
    /// use ibm_cloud_gax::error::Error;
    /// let payload = bytes::Bytes::from_static(br#"{"errors": [{"code": "not_found", "message": "destination not found"}]}"#);
    /// let e = Error::http(404, http::HeaderMap::new(), payload);
    /// assert_eq!(e.service_message().as_deref(), Some("destination not found"));
    /// ```
    pub fn service_message(&self) -> Option<String> {
        self.http_payload().and_then(service_message)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Cannot create the authentication headers.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn authentication(source: CredentialsError) -> Self {
        Self::new(ErrorKind::Authentication, Some(source.into()))
    }

    /// Could not create the authentication headers before sending the request.
    ///
    /// # Troubleshooting
    ///
    /// Typically this indicates a misconfigured authenticator. Consult the
    /// documentation for the specific authenticator type you used.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem reported by the transport layer.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = TransportDetails {
            status_code: Some(status_code),
            headers: Some(headers),
            payload: Some(payload),
        };
        Self::new(ErrorKind::Transport(Box::new(details)), None)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem in the transport layer without a full HTTP response.
    ///
    /// Examples include: a broken connection after the request is sent, or a
    /// any HTTP error that did not include a status code or other headers.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        let details = TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        };
        Self::new(
            ErrorKind::Transport(Box::new(details)),
            Some(source.into()),
        )
    }

    /// A problem in the transport layer without a full HTTP response.
    ///
    /// Examples include read or write problems, and broken connections.
    ///
    /// # Troubleshooting
    ///
    /// This indicates a problem completing the request. This type of error is
    /// rare, but includes crashes and restarts on proxies and load balancers.
    /// Most often, the solution is to enable retries in the client builder.
    pub fn is_io(&self) -> bool {
        matches!(
        &self.kind,
        ErrorKind::Transport(d) if matches!(**d, TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        }))
    }

    /// A problem in the transport layer.
    ///
    /// This includes all the non-2xx responses returned by the service, and
    /// any problem sending the request or receiving the response.
    pub fn is_transport(&self) -> bool {
        matches!(&self.kind, ErrorKind::Transport { .. })
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Annotates the error with the operation and component that reported it.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn with_context(mut self, operation_id: &'static str, component: Component) -> Self {
        self.context = Some(Box::new(CallContext {
            operation_id,
            component,
        }));
        self
    }

    /// The operation that reported this error, if known.
    ///
    /// # Example
    /// ```
    /// use ibm_cloud_gax::error::{Component, Error};
    /// let component = Component { name: "distribution_list", version: "1.0.0" };
    /// let e = Error::invalid_options("account_id")
    ///     .with_context("list_distribution_list_destinations", component);
    /// assert_eq!(e.operation_id(), Some("list_distribution_list_destinations"));
    /// assert_eq!(e.component(), Some(&component));
    /// ```
    pub fn operation_id(&self) -> Option<&str> {
        self.context.as_ref().map(|c| c.operation_id)
    }

    /// The component that reported this error, if known.
    pub fn component(&self) -> Option<&Component> {
        self.context.as_ref().map(|c| &c.component)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::InvalidOptions(field), _) => {
                write!(
                    f,
                    "invalid options, the required parameter {field} is missing or empty"
                )?;
            }
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}")?,
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")?
            }
            (ErrorKind::Authentication, Some(e)) => {
                write!(f, "cannot create the authentication headers {e}")?
            }
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the request exceeded the request deadline {e}")?
            }
            (ErrorKind::Transport(details), _) => details.display(self.source(), f)?,
            (_, None) => unreachable!("no constructor allows this"),
        }
        if let Some(c) = &self.context {
            write!(
                f,
                " (operation: {}, component: {})",
                c.operation_id, c.component
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &dyn std::error::Error)
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    InvalidOptions(String),
    Serialization,
    Deserialization,
    Authentication,
    Timeout,
    Transport(Box<TransportDetails>),
}

#[derive(Debug)]
struct TransportDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    payload: Option<bytes::Bytes>,
}

impl TransportDetails {
    fn display(
        &self,
        source: Option<&(dyn StdError + 'static)>,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match (source, &self) {
            (
                _,
                TransportDetails {
                    status_code: Some(code),
                    payload: Some(p),
                    ..
                },
            ) => {
                if let Some(message) = service_message(p) {
                    write!(f, "the HTTP transport reports a [{code}] error: {message}")
                } else if let Ok(message) = std::str::from_utf8(p.as_ref()) {
                    write!(f, "the HTTP transport reports a [{code}] error: {message}")
                } else {
                    write!(f, "the HTTP transport reports a [{code}] error: {p:?}")
                }
            }
            (Some(source), _) => {
                write!(f, "the transport reports an error: {source}")
            }
            (None, _) => unreachable!("no Error constructor allows this"),
        }
    }
}

// IBM Cloud services use several formats for error payloads, these are the
// fields carrying a human-readable message, in order of preference.
fn service_message(payload: &bytes::Bytes) -> Option<String> {
    use serde_json::Value;
    let value = serde_json::from_slice::<Value>(payload.as_ref()).ok()?;
    value
        .get("errors")
        .and_then(|e| e.get(0))
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
        .or_else(|| value.get("error").and_then(Value::as_str))
        .or_else(|| value.get("message").and_then(Value::as_str))
        .or_else(|| value.get("errorMessage").and_then(Value::as_str))
        .map(str::to_string)
}
