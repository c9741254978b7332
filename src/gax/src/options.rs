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

//! Client configuration and per request options.
//!
//! [ClientConfig] holds the settings shared by all the calls of one client:
//! the endpoint, credentials, transport and the default policies. Generated
//! clients receive it from a [ClientBuilder][crate::client_builder::ClientBuilder].
//!
//! [RequestOptions] overrides those defaults for a single call. Every
//! generated `*Options` struct embeds one and gets the `with_*` setters of
//! [RequestOptionsBuilder] for free.

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::credentials::Credentials;
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use crate::transport::HttpTransport;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Overrides for a single call.
///
/// Unset values fall back to the [ClientConfig] of the client, and then to
/// the library defaults.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    idempotent: Option<bool>,
    user_agent: Option<String>,
    attempt_timeout: Option<Duration>,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    cancellation: Option<CancellationToken>,
    max_pages: Option<usize>,
}

impl RequestOptions {
    /// Overrides the idempotency derived from the HTTP method.
    ///
    /// Without an override `GET`, `PUT` and `DELETE` calls are idempotent.
    /// The retry policy receives the flag. The default policy retries
    /// transient errors for every method, while
    /// [IdempotentTransientErrors][crate::retry_policy::IdempotentTransientErrors]
    /// only retries idempotent calls.
    pub fn set_idempotency(&mut self, value: bool) {
        self.idempotent = Some(value);
    }

    /// Gets the idempotency, if set.
    pub fn idempotent(&self) -> Option<bool> {
        self.idempotent
    }

    /// A prefix for the `user-agent` header.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the current user-agent prefix.
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Bounds the duration of each attempt.
    ///
    /// The policy from [set_retry_policy][Self::set_retry_policy] may shorten
    /// the last attempts further, when it limits the total elapsed time.
    pub fn set_attempt_timeout<T: Into<Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the current per-attempt timeout.
    pub fn attempt_timeout(&self) -> &Option<Duration> {
        &self.attempt_timeout
    }

    /// Sets the retry policy configuration.
    pub fn set_retry_policy<V: Into<RetryPolicyArg>>(&mut self, v: V) {
        self.retry_policy = Some(v.into().0);
    }

    /// Gets the retry policy override, if any.
    pub fn retry_policy(&self) -> &Option<Arc<dyn RetryPolicy>> {
        &self.retry_policy
    }

    /// Sets the backoff policy configuration.
    pub fn set_backoff_policy<V: Into<BackoffPolicyArg>>(&mut self, v: V) {
        self.backoff_policy = Some(v.into().0);
    }

    /// Gets the backoff policy override, if any.
    pub fn backoff_policy(&self) -> &Option<Arc<dyn BackoffPolicy>> {
        &self.backoff_policy
    }

    /// Sets a token to cancel the call.
    ///
    /// The token is checked before each attempt, during the backoff between
    /// attempts, and before fetching each additional page. A request already
    /// sent is not aborted.
    pub fn set_cancellation(&mut self, v: CancellationToken) {
        self.cancellation = Some(v);
    }

    /// Gets the cancellation token, if any.
    pub fn cancellation(&self) -> &Option<CancellationToken> {
        &self.cancellation
    }

    /// Limits the number of pages fetched when collecting all pages.
    pub fn set_max_pages(&mut self, v: usize) {
        self.max_pages = Some(v);
    }

    /// Gets the page limit, if any.
    pub fn max_pages(&self) -> Option<usize> {
        self.max_pages
    }
}

/// Fluent setters for the [RequestOptions] embedded in a `*Options` struct.
///
/// The setters chain with the method parameters, so a call is configured in
/// one expression.
///
/// # Example
/// ```
/// # use gax::options::*;
/// # #[derive(Default)]
/// # struct PostsListOptions { request: RequestOptions }
/// # impl RequestBuilder for PostsListOptions {
/// #     fn request_options(&mut self) -> &mut RequestOptions { &mut self.request }
/// # }
/// use std::time::Duration;
/// let options = PostsListOptions::default()
///     .with_attempt_timeout(Duration::from_secs(10))
///     .with_max_pages(3);
/// # assert_eq!(options.request.max_pages(), Some(3));
/// ```
pub trait RequestOptionsBuilder {
    /// If `v` is `true`, treat the request as idempotent.
    fn with_idempotency(self, v: bool) -> Self;

    /// Set the user agent header.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Sets the per-attempt timeout.
    fn with_attempt_timeout<V: Into<Duration>>(self, v: V) -> Self;

    /// Sets the retry policy configuration.
    fn with_retry_policy<V: Into<RetryPolicyArg>>(self, v: V) -> Self;

    /// Sets the backoff policy configuration.
    fn with_backoff_policy<V: Into<BackoffPolicyArg>>(self, v: V) -> Self;

    /// Sets the cancellation token.
    fn with_cancellation(self, v: CancellationToken) -> Self;

    /// Limits the number of pages fetched when collecting all pages.
    fn with_max_pages(self, v: usize) -> Self;
}

/// Gives [RequestOptionsBuilder] access to the embedded [RequestOptions].
///
/// Generated code implements this trait. Applications do not need it.
pub trait RequestBuilder {
    fn request_options(&mut self) -> &mut RequestOptions;
}

impl<T> RequestOptionsBuilder for T
where
    T: RequestBuilder,
{
    fn with_idempotency(mut self, v: bool) -> Self {
        self.request_options().set_idempotency(v);
        self
    }

    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }

    fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_retry_policy(v);
        self
    }

    fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_backoff_policy(v);
        self
    }

    fn with_cancellation(mut self, v: CancellationToken) -> Self {
        self.request_options().set_cancellation(v);
        self
    }

    fn with_max_pages(mut self, v: usize) -> Self {
        self.request_options().set_max_pages(v);
        self
    }
}

const LOGGING_VAR: &str = "GOOGLE_API_RUST_LOGGING";

/// The settings shared by every call of a client.
///
/// `None` means the library default: the root URL from the discovery
/// document, anonymous credentials, a `reqwest` transport and the default
/// retry and backoff policies.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub endpoint: Option<String>,
    pub credentials: Option<Credentials>,
    pub transport: Option<Arc<dyn HttpTransport>>,
    pub tracing: bool,
    pub user_agent: Option<String>,
    pub attempt_timeout: Option<Duration>,
    pub retry_policy: Option<Arc<dyn RetryPolicy>>,
    pub backoff_policy: Option<Arc<dyn BackoffPolicy>>,
}

impl ClientConfig {
    /// Tracing is on when requested in code or when
    /// `GOOGLE_API_RUST_LOGGING=true`.
    pub fn tracing_enabled(&self) -> bool {
        if self.tracing {
            return true;
        }
        std::env::var(LOGGING_VAR)
            .map(|v| v == "true")
            .unwrap_or(false)
    }
}
