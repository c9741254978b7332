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

use super::{BindingError, CredentialsError, ErrorPayload};
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The error returned by every call of a generated client.
///
/// A call fails before sending anything when the arguments do not match the
/// method, or when the credentials cannot produce headers. Once sent, it may
/// fail in the transport, in the service, while decoding the response, or
/// when the retry policy gives up.
///
/// The `is_*` predicates tell these cases apart. Service errors expose the
/// HTTP status and the decoded error envelope. Errors raised by the request
/// executor also carry a [RequestContext] with the method id, URL and number
/// of attempts.
///
/// # Example
/// ```
/// use gax::error::Error;
/// match example_function() {
///     Err(e) if e.is_api() => {
///         println!("service error {e}, status {:?}", e.http_status_code());
///     },
///     Err(e) if e.is_timeout() => { println!("not enough time {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(blog) => { println!("got {blog}"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # Err(Error::api(404, http::HeaderMap::new(), bytes::Bytes::from_static(b"NOT FOUND")))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
    context: Option<Box<RequestContext>>,
}

impl Error {
    /// Creates an error with the HTTP response returned by the service.
    ///
    /// The payload is parsed as a Google JSON error envelope, if possible.
    ///
    /// # Example
    /// ```
    /// use gax::error::Error;
    /// let body = r#"{"error": {"code": 404, "message": "Blog not found", "status": "NOT_FOUND"}}"#;
    /// let error = Error::api(404, http::HeaderMap::new(), bytes::Bytes::from_static(body.as_bytes()));
    /// assert!(error.is_api());
    /// assert_eq!(error.http_status_code(), Some(404));
    /// assert_eq!(error.api_error().map(|p| p.message.as_str()), Some("Blog not found"));
    /// ```
    pub fn api(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let error = ErrorPayload::from_body(&payload);
        let details = ApiDetails {
            status_code,
            headers,
            payload,
            error,
        };
        Self::new(ErrorKind::Api(Box::new(details)), None)
    }

    /// The service returned an error response.
    ///
    /// This includes [exhausted][Error::is_exhausted] errors whose last
    /// attempt received an error response. Use
    /// [http_status_code][Error::http_status_code] and
    /// [api_error][Error::api_error] to query the details.
    pub fn is_api(&self) -> bool {
        self.api_details().is_some()
    }

    /// Creates an error representing a timeout.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use gax::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Timeout, Some(source.into()))
    }

    /// An attempt ran past its timeout.
    ///
    /// The service may still complete the request.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Creates an error representing an exhausted retry policy.
    ///
    /// The source is the last error returned by the service or transport.
    pub fn exhausted<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Exhausted, Some(source.into()))
    }

    /// The request could not complete before the retry policy expired.
    ///
    /// The [source][std::error::Error::source] is the error from the last
    /// attempt.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.kind, ErrorKind::Exhausted)
    }

    /// Creates an error for a request cancelled by the application.
    pub fn cancelled() -> Self {
        Self::new(ErrorKind::Cancelled, None)
    }

    /// The application cancelled the request before it completed.
    pub fn is_cancelled(&self) -> bool {
        matches!(self.kind, ErrorKind::Cancelled)
    }

    /// Creates an error representing a failure to decode the response.
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Deserialization, Some(source.into()))
    }

    /// The response could not be decoded into the declared type.
    ///
    /// These errors are never retried. They typically indicate a mismatch
    /// between the service description and the service.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Creates an error representing a failure to encode the request body.
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Serialization, Some(source.into()))
    }

    /// The request body could not be encoded.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Creates an error for arguments that cannot be bound to a method.
    ///
    /// # Example
    /// ```
    /// use gax::error::{BindingError, Error};
    /// let error = Error::binding(BindingError::MissingParameter {
    ///     method: "blogger.blogs.get".into(),
    ///     parameter: "blogId".into(),
    /// });
    /// assert!(error.is_binding());
    /// assert_eq!(error.binding_error().and_then(|b| b.parameter()), Some("blogId"));
    /// ```
    pub fn binding(source: BindingError) -> Self {
        Self::new(ErrorKind::Binding, Some(source.into()))
    }

    /// A required parameter is missing, or the call includes parameters the
    /// method does not accept.
    ///
    /// No request was sent.
    pub fn is_binding(&self) -> bool {
        matches!(self.kind, ErrorKind::Binding)
    }

    /// The binding error details.
    pub fn binding_error(&self) -> Option<&BindingError> {
        match &self.kind {
            ErrorKind::Binding => self.as_inner::<BindingError>(),
            _ => None,
        }
    }

    /// Creates an error for a failure to create the authentication headers.
    pub fn authentication(source: CredentialsError) -> Self {
        Self::new(ErrorKind::Authentication, Some(source.into()))
    }

    /// The request could not be authenticated.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// Creates an error for a failure to send the request or receive the
    /// response.
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Io, Some(source.into()))
    }

    /// The request failed due to a network problem.
    ///
    /// The request may or may not have reached the service.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Io)
    }

    /// Creates an error for problems that do not fit any other kind.
    pub fn other<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Other, Some(source.into()))
    }

    /// The HTTP status code, if the service returned an error response.
    pub fn http_status_code(&self) -> Option<u16> {
        self.api_details().map(|d| d.status_code)
    }

    /// The HTTP headers, if the service returned an error response.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        self.api_details().map(|d| &d.headers)
    }

    /// The raw response body, if the service returned an error response.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        self.api_details().map(|d| &d.payload)
    }

    /// The parsed error envelope, if the service returned one.
    pub fn api_error(&self) -> Option<&ErrorPayload> {
        self.api_details().and_then(|d| d.error.as_ref())
    }

    /// The request details, for errors raised while executing a request.
    pub fn context(&self) -> Option<&RequestContext> {
        self.context.as_deref()
    }

    /// Attaches the request details.
    pub fn with_context(mut self, context: RequestContext) -> Self {
        self.context = Some(Box::new(context));
        self
    }

    /// Returns the source as `T`, if it is one.
    pub fn as_inner<T: StdError + Send + Sync + 'static>(&self) -> Option<&T> {
        self.source.as_ref().and_then(|e| e.downcast_ref::<T>())
    }

    /// The error was generated before the request started and is transient.
    pub(crate) fn is_transient_and_before_request(&self) -> bool {
        self.is_authentication()
            && self
                .as_inner::<CredentialsError>()
                .is_some_and(|e| e.is_retryable())
    }

    /// The response details of a service error, or of the last attempt of an
    /// exhausted retry loop.
    fn api_details(&self) -> Option<&ApiDetails> {
        match &self.kind {
            ErrorKind::Api(d) => Some(d),
            ErrorKind::Exhausted => self.as_inner::<Error>().and_then(Error::api_details),
            _ => None,
        }
    }

    fn new(kind: ErrorKind, source: Option<BoxError>) -> Self {
        Self {
            kind,
            source,
            context: None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Binding, Some(e)) => write!(f, "cannot bind the request parameters: {e}")?,
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
            (ErrorKind::Exhausted, Some(e)) => {
                write!(f, "the retry policy is exhausted, last error: {e}")?
            }
            (ErrorKind::Io, Some(e)) => write!(f, "the transport reports an error: {e}")?,
            (ErrorKind::Cancelled, _) => write!(f, "the request was cancelled")?,
            (ErrorKind::Api(d), _) => d.fmt(f)?,
            (ErrorKind::Other, Some(e)) => {
                write!(f, "an unclassified problem making a request: {e}")?
            }
            (_, None) => write!(f, "an unclassified problem making a request")?,
        }
        if let Some(c) = &self.context {
            write!(f, " [{c}]")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

/// Details about the request that produced an error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestContext {
    method: String,
    parameters: Vec<(String, String)>,
    attempts: u32,
}

impl RequestContext {
    pub fn new<T: Into<String>>(method: T) -> Self {
        Self {
            method: method.into(),
            ..Default::default()
        }
    }

    pub fn set_parameters<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.parameters = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_attempts(mut self, v: u32) -> Self {
        self.attempts = v;
        self
    }

    /// The method id, e.g. `blogger.posts.list`.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The parameters sent with the request, in encoded form.
    pub fn parameters(&self) -> &[(String, String)] {
        &self.parameters
    }

    /// The number of attempts made, zero if the request was never sent.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

impl std::fmt::Display for RequestContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "method={}, attempts={}", self.method, self.attempts)?;
        if !self.parameters.is_empty() {
            let params = self
                .parameters
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join("&");
            write!(f, ", parameters={params}")?;
        }
        Ok(())
    }
}

#[derive(Debug)]
enum ErrorKind {
    Binding,
    Serialization,
    Deserialization,
    Authentication,
    Timeout,
    Exhausted,
    Cancelled,
    Io,
    Api(Box<ApiDetails>),
    /// A uncategorized error.
    Other,
}

#[derive(Debug)]
struct ApiDetails {
    status_code: u16,
    headers: HeaderMap,
    payload: bytes::Bytes,
    error: Option<ErrorPayload>,
}

impl ApiDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = self.status_code;
        match (&self.error, std::str::from_utf8(self.payload.as_ref())) {
            (Some(e), _) => write!(
                f,
                "the service reports an error with HTTP status [{code}] and status {} described as: {}",
                e.status.as_deref().unwrap_or("UNKNOWN"),
                e.message
            ),
            (None, Ok(message)) => write!(f, "the HTTP transport reports a [{code}] error: {message}"),
            (None, Err(_)) => write!(
                f,
                "the HTTP transport reports a [{code}] error: {:?}",
                self.payload
            ),
        }
    }
}
