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

//! Defines traits for retry policies and some common implementations.
//!
//! The client libraries automatically retry requests that fail with transient
//! errors: I/O errors, `429 Too Many Requests`, any `5xx` status, and
//! credential errors marked as retryable. All other errors, including other
//! `4xx` statuses, are permanent.
//!
//! The default policy makes at most five attempts. Applications may override
//! this per client, or per call via [RequestOptions].
//!
//! # Example
//! ```
//! # use gax::retry_policy::*;
//! use std::time::Duration;
//! let policy = TransientErrors
//!     .with_attempt_limit(3)
//!     .with_time_limit(Duration::from_secs(30));
//! ```
//!
//! [RequestOptions]: crate::options::RequestOptions

use crate::error::Error;
use crate::retry_result::RetryResult;
use std::sync::Arc;
use std::time::Duration;

/// The number of attempts made by the default retry policy.
pub const DEFAULT_ATTEMPT_LIMIT: u32 = 5;

/// Determines how errors are handled in the retry loop.
///
/// Implementations of this trait determine if errors are retryable, and for
/// how long the retry loop may continue.
pub trait RetryPolicy: Send + Sync + std::fmt::Debug {
    /// Query the retry policy after an error.
    ///
    /// # Parameters
    /// * `loop_start` - when the retry loop started.
    /// * `attempt_count` - the number of attempts. This includes the initial
    ///   attempt. This method is called after the first attempt, so the value
    ///   is always non-zero.
    /// * `idempotent` - if `true` assume the operation is idempotent.
    /// * `error` - the last error when attempting the request.
    fn on_error(
        &self,
        loop_start: std::time::Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult;

    /// The remaining time in the retry policy.
    ///
    /// For policies based on time, this returns the remaining time in the
    /// policy. The retry loop can use this value to adjust the next attempt
    /// timeout. For policies that are not time based this returns `None`.
    fn remaining_time(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
    ) -> Option<Duration> {
        None
    }
}

/// A helper type to use [RetryPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct RetryPolicyArg(pub(crate) Arc<dyn RetryPolicy>);

impl<T> std::convert::From<T> for RetryPolicyArg
where
    T: RetryPolicy + 'static,
{
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl std::convert::From<Arc<dyn RetryPolicy>> for RetryPolicyArg {
    fn from(value: Arc<dyn RetryPolicy>) -> Self {
        Self(value)
    }
}

impl From<RetryPolicyArg> for Arc<dyn RetryPolicy> {
    fn from(value: RetryPolicyArg) -> Arc<dyn RetryPolicy> {
        value.0
    }
}

/// Extension trait for [RetryPolicy]
pub trait RetryPolicyExt: RetryPolicy + Sized {
    /// Decorate a [RetryPolicy] to limit the total elapsed time in the retry
    /// loop.
    ///
    /// While the time spent in the retry loop (including time in backoff) is
    /// less than the prescribed duration the `on_error()` method returns the
    /// results of the inner policy. After that time it returns
    /// [Exhausted][RetryResult::Exhausted] if the inner policy returns
    /// [Continue][RetryResult::Continue].
    ///
    /// # Example
    /// ```
    /// # use gax::retry_policy::*;
    /// use std::time::{Duration, Instant};
    /// let policy = TransientErrors.with_time_limit(Duration::from_secs(10));
    /// let start = Instant::now() - Duration::from_secs(20);
    /// assert!(policy.on_error(start, 1, true, transient_error()).is_exhausted());
    ///
    /// fn transient_error() -> gax::error::Error {
    ///     gax::error::Error::io("simulated")
    /// }
    /// ```
    fn with_time_limit(self, maximum_duration: Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }

    /// Decorate a [RetryPolicy] to limit the number of attempts.
    ///
    /// The limit includes the initial attempt. A limit of one disables
    /// retries.
    ///
    /// # Example
    /// ```
    /// # use gax::retry_policy::*;
    /// use std::time::Instant;
    /// let policy = TransientErrors.with_attempt_limit(3);
    /// assert!(policy.on_error(Instant::now(), 1, true, transient_error()).is_continue());
    /// assert!(policy.on_error(Instant::now(), 2, true, transient_error()).is_continue());
    /// assert!(policy.on_error(Instant::now(), 3, true, transient_error()).is_exhausted());
    ///
    /// fn transient_error() -> gax::error::Error {
    ///     gax::error::Error::io("simulated")
    /// }
    /// ```
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }
}

impl<T: RetryPolicy> RetryPolicyExt for T {}

/// Retries transient errors.
///
/// The transient errors are:
/// - I/O errors, the request may not have reached the service.
/// - `429 Too Many Requests` and any `5xx` status.
/// - Credential errors marked as retryable, these happen before the request
///   is sent.
///
/// This policy does not limit the number of attempts, decorate it with
/// [with_attempt_limit][RetryPolicyExt::with_attempt_limit] or
/// [with_time_limit][RetryPolicyExt::with_time_limit].
///
/// The policy retries transient errors regardless of the idempotency of the
/// method.
///
/// # Example
/// ```
/// # use gax::retry_policy::*;
/// use std::time::Instant;
/// let policy = TransientErrors;
/// let error = gax::error::Error::api(503, http::HeaderMap::new(), bytes::Bytes::new());
/// assert!(policy.on_error(Instant::now(), 1, false, error).is_continue());
/// let error = gax::error::Error::api(404, http::HeaderMap::new(), bytes::Bytes::new());
/// assert!(policy.on_error(Instant::now(), 1, true, error).is_permanent());
/// ```
#[derive(Clone, Debug)]
pub struct TransientErrors;

impl TransientErrors {
    /// Returns true if `error` is transient.
    pub fn is_transient(error: &Error) -> bool {
        if error.is_io() || error.is_transient_and_before_request() {
            return true;
        }
        error
            .http_status_code()
            .is_some_and(|code| code == 429 || (500..600).contains(&code))
    }
}

impl RetryPolicy for TransientErrors {
    fn on_error(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        _idempotent: bool,
        error: Error,
    ) -> RetryResult {
        if Self::is_transient(&error) {
            RetryResult::Continue(error)
        } else {
            RetryResult::Permanent(error)
        }
    }
}

/// Retries transient errors, but only for idempotent requests.
///
/// A non-idempotent request that fails with an I/O error or a `5xx` status
/// may have been applied by the service, so these errors are permanent unless
/// the request is idempotent. Credential errors marked as retryable happen
/// before the request is sent and are always retried.
///
/// The idempotency comes from the HTTP method (`GET`, `PUT` and `DELETE`), or
/// from [set_idempotency][crate::options::RequestOptions::set_idempotency].
///
/// # Example
/// ```
/// # use gax::retry_policy::*;
/// use std::time::Instant;
/// let policy = IdempotentTransientErrors.with_attempt_limit(3);
/// let error = || gax::error::Error::api(503, http::HeaderMap::new(), bytes::Bytes::new());
/// assert!(policy.on_error(Instant::now(), 1, true, error()).is_continue());
/// assert!(policy.on_error(Instant::now(), 1, false, error()).is_permanent());
/// ```
#[derive(Clone, Debug)]
pub struct IdempotentTransientErrors;

impl RetryPolicy for IdempotentTransientErrors {
    fn on_error(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        if error.is_transient_and_before_request() {
            return RetryResult::Continue(error);
        }
        if idempotent && TransientErrors::is_transient(&error) {
            RetryResult::Continue(error)
        } else {
            RetryResult::Permanent(error)
        }
    }
}

/// A retry policy that never retries.
///
/// # Example
/// ```
/// # use gax::retry_policy::*;
/// use std::time::Instant;
/// let policy = NeverRetry;
/// assert!(policy.on_error(Instant::now(), 1, true, gax::error::Error::io("simulated")).is_exhausted());
/// ```
#[derive(Clone, Debug)]
pub struct NeverRetry;

impl RetryPolicy for NeverRetry {
    fn on_error(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        _idempotent: bool,
        error: Error,
    ) -> RetryResult {
        if TransientErrors::is_transient(&error) {
            RetryResult::Exhausted(error)
        } else {
            RetryResult::Permanent(error)
        }
    }
}

/// A retry policy decorator that limits the total time in the retry loop.
///
/// This policy decorates an inner policy and limits the duration of retry
/// loops. While the time spent in the retry loop (including time in backoff)
/// is less than the prescribed duration the `on_error()` method returns the
/// results of the inner policy. After that time it returns
/// [Exhausted][RetryResult::Exhausted] if the inner policy returns
/// [Continue][RetryResult::Continue].
///
/// The `remaining_time()` function returns the remaining time. This is always
/// [Duration::ZERO] once or after the policy's expiration time is reached.
#[derive(Debug)]
pub struct LimitedElapsedTime<P = TransientErrors>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_duration: Duration,
}

impl LimitedElapsedTime {
    /// Creates a new instance, with the default inner policy.
    pub fn new(maximum_duration: Duration) -> Self {
        Self {
            inner: TransientErrors,
            maximum_duration,
        }
    }
}

impl<P> LimitedElapsedTime<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_duration: Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }

    fn error_if_exhausted(&self, loop_start: std::time::Instant, error: Error) -> RetryResult {
        let deadline = loop_start + self.maximum_duration;
        let now = tokio::time::Instant::now().into_std();
        if now < deadline {
            RetryResult::Continue(error)
        } else {
            RetryResult::Exhausted(error)
        }
    }
}

impl<P> RetryPolicy for LimitedElapsedTime<P>
where
    P: RetryPolicy + 'static,
{
    fn on_error(
        &self,
        loop_start: std::time::Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        match self
            .inner
            .on_error(loop_start, attempt_count, idempotent, error)
        {
            RetryResult::Permanent(e) => RetryResult::Permanent(e),
            RetryResult::Exhausted(e) => RetryResult::Exhausted(e),
            RetryResult::Continue(e) => self.error_if_exhausted(loop_start, e),
        }
    }

    fn remaining_time(&self, loop_start: std::time::Instant, attempt_count: u32) -> Option<Duration> {
        let deadline = loop_start + self.maximum_duration;
        let remaining = deadline.saturating_duration_since(tokio::time::Instant::now().into_std());
        if let Some(inner) = self.inner.remaining_time(loop_start, attempt_count) {
            return Some(std::cmp::min(remaining, inner));
        }
        Some(remaining)
    }
}

/// A retry policy decorator that limits the number of attempts.
///
/// This policy decorates an inner policy and limits the total number of
/// attempts. Note that `on_error()` is not called before the initial
/// (non-retry) attempt. Therefore, setting the maximum number of attempts to 0
/// or 1 results in no retry attempts.
///
/// The policy passes through the results from the inner policy as long as
/// `attempt_count < maximum_attempts`. Once the maximum number of attempts is
/// reached, the policy returns [Exhausted][RetryResult::Exhausted] if the
/// inner policy returns [Continue][RetryResult::Continue].
#[derive(Debug)]
pub struct LimitedAttemptCount<P = TransientErrors>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_attempts: u32,
}

impl LimitedAttemptCount {
    /// Creates a new instance, with the default inner policy.
    pub fn new(maximum_attempts: u32) -> Self {
        Self {
            inner: TransientErrors,
            maximum_attempts,
        }
    }
}

impl Default for LimitedAttemptCount {
    fn default() -> Self {
        Self::new(DEFAULT_ATTEMPT_LIMIT)
    }
}

impl<P> LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }
}

impl<P> RetryPolicy for LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    fn on_error(
        &self,
        loop_start: std::time::Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        match self
            .inner
            .on_error(loop_start, attempt_count, idempotent, error)
        {
            RetryResult::Continue(e) if attempt_count >= self.maximum_attempts => {
                RetryResult::Exhausted(e)
            }
            result => result,
        }
    }

    fn remaining_time(&self, loop_start: std::time::Instant, attempt_count: u32) -> Option<Duration> {
        self.inner.remaining_time(loop_start, attempt_count)
    }
}
