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

//! Sends requests for generated (and dynamic) clients.
//!
//! The [RequestExecutor] owns everything shared by the calls of one client:
//! the base URL, the transport, the credentials, and the default policies.
//! Each call binds its parameters, builds an [HttpRequest], and runs the
//! retry loop until the request succeeds, the error is permanent, or the
//! retry policy is exhausted.

use crate::Result;
use crate::backoff_policy::BackoffPolicy;
use crate::binding::{BoundRequest, bind};
use crate::call_state::{CallState, InvalidTransition};
use crate::credentials::Credentials;
use crate::error::{BindingError, Error, RequestContext};
use crate::exponential_backoff::ExponentialBackoff;
use crate::options::{ClientConfig, RequestOptions};
use crate::paginator::{AllPages, PageableResponse, Paginator};
use crate::parameter_bag::{ParameterBag, ParameterValue};
use crate::retry_loop_internal::{RetryLoop, effective_timeout};
use crate::retry_policy::{LimitedAttemptCount, RetryPolicy};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
use bytes::Bytes;
use discovery::{HttpMethod, MethodDescriptor, descriptor::join_url};
use http::header::{CONTENT_TYPE, HeaderValue, USER_AGENT};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tracing::Instrument;

/// The user agent sent when neither the client nor the call sets one.
pub const DEFAULT_USER_AGENT: &str = concat!("google-api-rust/", env!("CARGO_PKG_VERSION"));

const PAGE_TOKEN: &str = "pageToken";

/// Executes the requests for a client.
///
/// Cloning an executor is cheap, all clones share the same transport and
/// configuration.
#[derive(Clone, Debug)]
pub struct RequestExecutor {
    inner: Arc<ExecutorInner>,
}

#[derive(Debug)]
struct ExecutorInner {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    credentials: Credentials,
    retry_policy: Arc<dyn RetryPolicy>,
    backoff_policy: Arc<dyn BackoffPolicy>,
    attempt_timeout: Option<Duration>,
    user_agent: Option<String>,
    tracing: bool,
}

impl RequestExecutor {
    /// Creates an executor for a service.
    ///
    /// `default_endpoint` is the root URL plus the service path, e.g.
    /// `https://www.googleapis.com/blogger/v3/`. The configuration may
    /// override it.
    pub fn new(config: ClientConfig, default_endpoint: &str) -> Self {
        let tracing = config.tracing_enabled();
        let ClientConfig {
            endpoint,
            credentials,
            transport,
            user_agent,
            attempt_timeout,
            retry_policy,
            backoff_policy,
            ..
        } = config;
        let inner = ExecutorInner {
            base_url: endpoint.unwrap_or_else(|| default_endpoint.to_string()),
            transport: transport.unwrap_or_else(|| Arc::new(ReqwestTransport::new())),
            credentials: credentials.unwrap_or_default(),
            retry_policy: retry_policy.unwrap_or_else(|| Arc::new(LimitedAttemptCount::default())),
            backoff_policy: backoff_policy
                .unwrap_or_else(|| Arc::new(ExponentialBackoff::default())),
            attempt_timeout,
            user_agent,
            tracing,
        };
        Self {
            inner: Arc::new(inner),
        }
    }

    /// The URL prefix for all the method paths.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Creates the HTTP request for a bound call.
    ///
    /// The credentials headers are not included, they are computed for each
    /// attempt.
    pub fn build_request(
        &self,
        bound: &BoundRequest,
        body: Option<Bytes>,
        options: &RequestOptions,
    ) -> Result<HttpRequest> {
        let full = join_url(&self.inner.base_url, &bound.path);
        let mut url = url::Url::parse(&full).map_err(|e| {
            Error::binding(BindingError::InvalidPath {
                method: bound.method_id.clone(),
                reason: format!("{full} is not a valid URL: {e}"),
            })
        })?;
        if !bound.query.is_empty() {
            url.query_pairs_mut().extend_pairs(bound.query.iter());
        }

        let mut headers = http::HeaderMap::new();
        let user_agent = options
            .user_agent()
            .as_deref()
            .or(self.inner.user_agent.as_deref())
            .unwrap_or(DEFAULT_USER_AGENT);
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent).map_err(Error::ser)?,
        );
        if body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        Ok(HttpRequest {
            method: http_method(bound.http_method),
            url,
            headers,
            body,
        })
    }

    /// Calls a method without a request body.
    pub async fn execute<O>(
        &self,
        method: &MethodDescriptor,
        positional: ParameterBag,
        optional: ParameterBag,
        options: RequestOptions,
    ) -> Result<O>
    where
        O: DeserializeOwned + Default,
    {
        self.execute_decoded(method, positional, optional, None, options)
            .await
    }

    /// Calls a method, sending `body` as the JSON request body.
    pub async fn execute_with_body<I, O>(
        &self,
        method: &MethodDescriptor,
        positional: ParameterBag,
        optional: ParameterBag,
        body: &I,
        options: RequestOptions,
    ) -> Result<O>
    where
        I: Serialize + ?Sized,
        O: DeserializeOwned + Default,
    {
        let body = match serde_json::to_vec(body) {
            Ok(b) => Bytes::from(b),
            Err(e) => {
                let context = RequestContext::new(method.id.as_str())
                    .set_parameters(context_parameters(&positional, &optional));
                return Err(Error::ser(e).with_context(context));
            }
        };
        self.execute_decoded(method, positional, optional, Some(body), options)
            .await
    }

    /// Calls a method and returns the successful HTTP response.
    ///
    /// Any error carries a [RequestContext] with the method id, the
    /// parameters, and the number of attempts.
    pub async fn execute_raw(
        &self,
        method: &MethodDescriptor,
        positional: ParameterBag,
        optional: ParameterBag,
        body: Option<Bytes>,
        options: RequestOptions,
    ) -> Result<HttpResponse> {
        let (response, _) = self
            .execute_traced(method, positional, optional, body, options)
            .await?;
        Ok(response)
    }

    async fn execute_decoded<O>(
        &self,
        method: &MethodDescriptor,
        positional: ParameterBag,
        optional: ParameterBag,
        body: Option<Bytes>,
        options: RequestOptions,
    ) -> Result<O>
    where
        O: DeserializeOwned + Default,
    {
        let (response, context) = self
            .execute_traced(method, positional, optional, body, options)
            .await?;
        decode(response).map_err(|e| {
            tracing::warn!(method = %method.id, "cannot decode response: {e}");
            e.with_context(context)
        })
    }

    async fn execute_traced(
        &self,
        method: &MethodDescriptor,
        positional: ParameterBag,
        optional: ParameterBag,
        body: Option<Bytes>,
        options: RequestOptions,
    ) -> Result<(HttpResponse, RequestContext)> {
        let context = RequestContext::new(method.id.as_str())
            .set_parameters(context_parameters(&positional, &optional));
        let span = if self.inner.tracing {
            tracing::info_span!(
                "gax.request",
                method = %method.id,
                http.request.method = %method.http_method,
                url.full = tracing::field::Empty,
            )
        } else {
            tracing::Span::none()
        };
        self.execute_bound(method, positional, optional, body, options, context)
            .instrument(span)
            .await
    }

    /// Runs the retry loop for one call.
    ///
    /// On success returns the response and the context, updated with the
    /// number of attempts.
    async fn execute_bound(
        &self,
        method: &MethodDescriptor,
        positional: ParameterBag,
        optional: ParameterBag,
        body: Option<Bytes>,
        options: RequestOptions,
        context: RequestContext,
    ) -> Result<(HttpResponse, RequestContext)> {
        let tracker = Arc::new(CallTracker::new(&method.id));
        let request = bind(method, positional, optional)
            .map_err(Error::binding)
            .and_then(|bound| self.build_request(&bound, body, &options));
        let request = match request {
            Ok(r) => r,
            Err(e) => {
                tracker.advance(CallState::fail);
                tracing::warn!(method = %method.id, "cannot build request: {e}");
                return Err(e.with_context(context.set_attempts(0)));
            }
        };
        tracing::Span::current().record("url.full", request.url.as_str());

        let idempotent = options
            .idempotent()
            .unwrap_or_else(|| method.http_method.is_idempotent());
        let retry_policy = options
            .retry_policy()
            .clone()
            .unwrap_or_else(|| self.inner.retry_policy.clone());
        let backoff_policy = options
            .backoff_policy()
            .clone()
            .unwrap_or_else(|| self.inner.backoff_policy.clone());
        let attempt_timeout = options.attempt_timeout().or(self.inner.attempt_timeout);

        let inner = {
            let this = self.clone();
            let tracker = tracker.clone();
            async move |remaining: Option<Duration>| {
                let attempt = tracker.advance(CallState::dispatch);
                tracing::debug!(attempt, "sending request");
                this.send_attempt(
                    request.clone(),
                    effective_timeout(attempt_timeout, remaining),
                )
                .await
            }
        };
        let sleep = {
            let cancellation = options.cancellation().clone();
            async move |delay: Duration| match &cancellation {
                Some(token) => {
                    tokio::select! {
                        _ = tokio::time::sleep(delay) => {},
                        _ = token.cancelled() => {},
                    }
                }
                None => tokio::time::sleep(delay).await,
            }
        };
        let on_retry = {
            let tracker = tracker.clone();
            move |attempt: u32, error: &Error, delay: Duration| {
                tracker.advance(|s| s.retry(delay));
                tracing::debug!(attempt, ?delay, "retrying after error: {error}");
            }
        };

        let retry_loop = RetryLoop {
            idempotent,
            cancellation: options.cancellation().clone(),
            retry_policy,
            backoff_policy,
        };
        match retry_loop.run(inner, sleep, on_retry).await {
            Ok(response) => {
                let attempts = tracker.advance(CallState::succeed);
                Ok((response, context.set_attempts(attempts)))
            }
            Err(e) => {
                let attempts = tracker.advance(CallState::fail);
                tracing::warn!(attempts, "request failed: {e}");
                Err(e.with_context(context.set_attempts(attempts)))
            }
        }
    }

    async fn send_attempt(
        &self,
        mut request: HttpRequest,
        timeout: Option<Duration>,
    ) -> Result<HttpResponse> {
        let auth = self
            .inner
            .credentials
            .headers()
            .await
            .map_err(Error::authentication)?;
        request.headers.extend(auth);
        let response = self.inner.transport.send(request, timeout).await?;
        if !response.is_success() {
            return Err(Error::api(
                response.status,
                response.headers,
                response.body,
            ));
        }
        Ok(response)
    }

    /// Returns a stream with the pages of a list method.
    ///
    /// A `pageToken` in `optional` is used as the starting page.
    pub fn paginate<O>(
        &self,
        method: &MethodDescriptor,
        positional: ParameterBag,
        mut optional: ParameterBag,
        options: RequestOptions,
    ) -> Paginator<O>
    where
        O: PageableResponse + DeserializeOwned + Default + Send + 'static,
    {
        let seed = match optional.remove(PAGE_TOKEN) {
            Some(ParameterValue::Single(token)) => token,
            _ => String::new(),
        };
        let executor = self.clone();
        let method = Arc::new(method.clone());
        Paginator::new(
            seed,
            options.max_pages(),
            options.cancellation().clone(),
            move |token| {
                let executor = executor.clone();
                let method = method.clone();
                let positional = positional.clone();
                let mut optional = optional.clone();
                let options = options.clone();
                async move {
                    if !token.is_empty() {
                        optional.set(PAGE_TOKEN, ParameterValue::Single(token));
                    }
                    executor
                        .execute::<O>(&method, positional, optional, options)
                        .await
                }
            },
        )
    }

    /// Fetches all the pages of a list method.
    ///
    /// On error, the result contains the pages received before the error.
    pub async fn execute_all_pages<O>(
        &self,
        method: &MethodDescriptor,
        positional: ParameterBag,
        optional: ParameterBag,
        options: RequestOptions,
    ) -> AllPages<O>
    where
        O: PageableResponse + DeserializeOwned + Default + Send + 'static,
    {
        self.paginate(method, positional, optional, options)
            .collect_all()
            .await
    }
}

/// Decodes a successful response.
///
/// Empty bodies (and `204 No Content`) decode to the default value.
fn decode<O: DeserializeOwned + Default>(response: HttpResponse) -> Result<O> {
    if response.status == 204 || response.body.iter().all(u8::is_ascii_whitespace) {
        return Ok(O::default());
    }
    serde_json::from_slice(&response.body).map_err(Error::deser)
}

fn http_method(m: HttpMethod) -> http::Method {
    match m {
        HttpMethod::Get => http::Method::GET,
        HttpMethod::Post => http::Method::POST,
        HttpMethod::Put => http::Method::PUT,
        HttpMethod::Patch => http::Method::PATCH,
        HttpMethod::Delete => http::Method::DELETE,
    }
}

fn context_parameters(positional: &ParameterBag, optional: &ParameterBag) -> Vec<(String, String)> {
    let joined = |v: &ParameterValue| v.values().collect::<Vec<_>>().join(",");
    positional
        .iter()
        .chain(optional.iter().filter(|(k, _)| !positional.contains(k)))
        .map(|(k, v)| (k.to_string(), joined(v)))
        .collect()
}

/// Tracks the [CallState] of a call, logging each transition.
struct CallTracker {
    method_id: String,
    state: Mutex<CallState>,
}

impl CallTracker {
    fn new<T: Into<String>>(method_id: T) -> Self {
        Self {
            method_id: method_id.into(),
            state: Mutex::new(CallState::Building),
        }
    }

    /// Applies a transition and returns the number of attempts so far.
    fn advance<F>(&self, transition: F) -> u32
    where
        F: FnOnce(CallState) -> std::result::Result<CallState, InvalidTransition>,
    {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        match transition(state.clone()) {
            Ok(next) => {
                tracing::debug!(
                    method = %self.method_id,
                    from = state.name(),
                    to = next.name(),
                    "call state transition"
                );
                *state = next;
            }
            Err(e) => tracing::warn!(method = %self.method_id, "{e}"),
        }
        state.attempts()
    }
}
