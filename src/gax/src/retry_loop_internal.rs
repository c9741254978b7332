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

//! The retry loop shared by all the calls in a client.

use crate::Result;
use crate::backoff_policy::BackoffPolicy;
use crate::error::Error;
use crate::retry_policy::RetryPolicy;
use crate::retry_result::RetryResult;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// The policies that control how a call is retried.
#[derive(Clone, Debug)]
pub struct RetryLoop {
    pub idempotent: bool,
    pub cancellation: Option<CancellationToken>,
    pub retry_policy: Arc<dyn RetryPolicy>,
    pub backoff_policy: Arc<dyn BackoffPolicy>,
}

impl RetryLoop {
    /// Calls `attempt` until it succeeds, the retry policy gives up, or the
    /// call is cancelled.
    ///
    /// `attempt` receives the time left in the retry policy, if the policy
    /// has a deadline. Between attempts `on_retry` is told the attempt
    /// number, the error and the delay, and then `sleep` waits out the delay.
    /// Cancellation is checked before every attempt, an attempt in progress
    /// runs to completion.
    pub async fn run<F, S, R, Response>(
        &self,
        mut attempt: F,
        sleep: S,
        mut on_retry: R,
    ) -> Result<Response>
    where
        F: AsyncFnMut(Option<Duration>) -> Result<Response> + Send,
        S: AsyncFn(Duration) + Send,
        R: FnMut(u32, &Error, Duration) + Send,
    {
        let loop_start = tokio::time::Instant::now().into_std();
        let mut remaining = self.retry_policy.remaining_time(loop_start, 0);
        let mut attempts = 0_u32;
        loop {
            if self.is_cancelled() {
                return Err(Error::cancelled());
            }
            attempts += 1;
            let error = match attempt(remaining).await {
                Ok(response) => return Ok(response),
                Err(e) => e,
            };
            let error = match self
                .retry_policy
                .on_error(loop_start, attempts, self.idempotent, error)
            {
                RetryResult::Continue(e) => e,
                RetryResult::Permanent(e) => return Err(e),
                RetryResult::Exhausted(e) => return Err(Error::exhausted(e)),
            };
            let delay = self.backoff_policy.on_failure(loop_start, attempts);
            remaining = self.retry_policy.remaining_time(loop_start, attempts);
            if remaining.is_some_and(|r| r < delay) {
                return Err(Error::exhausted(error));
            }
            on_retry(attempts, &error, delay);
            sleep(delay).await;
            remaining = remaining.map(|r| r.saturating_sub(delay));
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }
}

/// The timeout for one attempt: the smaller of the configured attempt
/// timeout and the time left in the retry policy.
pub fn effective_timeout(
    attempt_timeout: Option<Duration>,
    remaining_time: Option<Duration>,
) -> Option<Duration> {
    attempt_timeout.into_iter().chain(remaining_time).min()
}
