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

//! Truncated exponential backoff.
//!
//! After the `n`-th failed attempt the delay is
//! `initial_delay * scaling^(n-1)`, never more than `maximum_delay`. Without
//! jitter consecutive delays grow strictly until they reach the maximum. With
//! jitter each delay is drawn uniformly from `[0, delay]`, which spreads the
//! retries of many clients hitting the same blog or channel.

use std::time::{Duration, Instant};

/// The error type for invalid backoff parameters.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("the scaling factor must be greater than 1.0, got {0}")]
    InvalidScalingFactor(f64),
    #[error("the initial delay must be greater than zero")]
    ZeroInitialDelay,
    #[error("the maximum delay ({maximum:?}) is smaller than the initial delay ({initial:?})")]
    EmptyRange { initial: Duration, maximum: Duration },
}

const DEFAULT_INITIAL_DELAY: Duration = Duration::from_secs(1);
const DEFAULT_MAXIMUM_DELAY: Duration = Duration::from_secs(60);
const DEFAULT_SCALING: f64 = 2.0;

/// Configures and validates an [ExponentialBackoff].
///
/// # Example
/// ```
/// # use gax::exponential_backoff::{Error, ExponentialBackoffBuilder};
/// use std::time::Duration;
/// let backoff = ExponentialBackoffBuilder::new()
///     .with_initial_delay(Duration::from_millis(250))
///     .with_maximum_delay(Duration::from_secs(10))
///     .with_scaling(3.0)
///     .build()?;
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct ExponentialBackoffBuilder {
    policy: ExponentialBackoff,
}

impl ExponentialBackoffBuilder {
    pub fn new() -> Self {
        Self {
            policy: ExponentialBackoff::default(),
        }
    }

    pub fn with_initial_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.policy.initial_delay = v.into();
        self
    }

    pub fn with_maximum_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.policy.maximum_delay = v.into();
        self
    }

    pub fn with_scaling<V: Into<f64>>(mut self, v: V) -> Self {
        self.policy.scaling = v.into();
        self
    }

    /// Draws each delay uniformly from `[0, delay]`.
    pub fn with_jitter(mut self, v: bool) -> Self {
        self.policy.jitter = v;
        self
    }

    /// Returns the policy, or the first parameter that is out of range.
    pub fn build(self) -> Result<ExponentialBackoff, Error> {
        let p = self.policy;
        if p.scaling.is_nan() || p.scaling <= 1.0 {
            return Err(Error::InvalidScalingFactor(p.scaling));
        }
        if p.initial_delay.is_zero() {
            return Err(Error::ZeroInitialDelay);
        }
        if p.maximum_delay < p.initial_delay {
            return Err(Error::EmptyRange {
                initial: p.initial_delay,
                maximum: p.maximum_delay,
            });
        }
        Ok(p)
    }
}

impl Default for ExponentialBackoffBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The default [BackoffPolicy][crate::backoff_policy::BackoffPolicy]: one
/// second, doubling up to one minute, without jitter.
#[derive(Clone, Debug, PartialEq)]
pub struct ExponentialBackoff {
    initial_delay: Duration,
    maximum_delay: Duration,
    scaling: f64,
    jitter: bool,
}

impl ExponentialBackoff {
    /// The delay after `attempt_count` failures, before any jitter.
    pub fn nominal_delay(&self, attempt_count: u32) -> Duration {
        let exponent = attempt_count.saturating_sub(1).min(i32::MAX as u32) as i32;
        let ceiling = self.maximum_delay.div_duration_f64(self.initial_delay);
        let factor = self.scaling.powi(exponent);
        if !factor.is_finite() || factor >= ceiling {
            return self.maximum_delay;
        }
        self.initial_delay.mul_f64(factor)
    }
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        Self {
            initial_delay: DEFAULT_INITIAL_DELAY,
            maximum_delay: DEFAULT_MAXIMUM_DELAY,
            scaling: DEFAULT_SCALING,
            jitter: false,
        }
    }
}

impl crate::backoff_policy::BackoffPolicy for ExponentialBackoff {
    fn on_failure(&self, _loop_start: Instant, attempt_count: u32) -> Duration {
        let delay = self.nominal_delay(attempt_count);
        if !self.jitter {
            return delay;
        }
        use rand::Rng;
        rand::rng().random_range(Duration::ZERO..=delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backoff_policy::BackoffPolicy;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(ExponentialBackoffBuilder::new().with_scaling(1.0), Error::InvalidScalingFactor(1.0); "scaling one")]
    #[test_case(ExponentialBackoffBuilder::new().with_scaling(-2.0), Error::InvalidScalingFactor(-2.0); "negative scaling")]
    #[test_case(ExponentialBackoffBuilder::new().with_initial_delay(Duration::ZERO), Error::ZeroInitialDelay; "zero initial")]
    #[test_case(
        ExponentialBackoffBuilder::new().with_initial_delay(Duration::from_secs(10)).with_maximum_delay(Duration::from_secs(5)),
        Error::EmptyRange { initial: Duration::from_secs(10), maximum: Duration::from_secs(5) };
        "empty range"
    )]
    fn invalid(builder: ExponentialBackoffBuilder, want: Error) {
        assert_eq!(builder.build(), Err(want));
    }

    #[test]
    fn defaults() -> anyhow::Result<()> {
        let got = ExponentialBackoffBuilder::default().build()?;
        assert_eq!(got, ExponentialBackoff::default());
        Ok(())
    }

    #[test]
    fn truncated() -> anyhow::Result<()> {
        let policy = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_millis(500))
            .with_maximum_delay(Duration::from_secs(3))
            .build()?;
        let now = Instant::now();
        let got: Vec<_> = [1, 2, 3, 4, 5, u32::MAX]
            .into_iter()
            .map(|n| policy.on_failure(now, n))
            .collect();
        let want = [500, 1000, 2000, 3000, 3000, 3000].map(Duration::from_millis);
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn default_strictly_increasing() {
        let policy = ExponentialBackoff::default();
        let now = Instant::now();
        let delays: Vec<_> = (1..=6).map(|n| policy.on_failure(now, n)).collect();
        assert!(delays.windows(2).all(|w| w[0] < w[1]), "{delays:?}");
    }

    #[test]
    fn jitter_stays_in_range() -> anyhow::Result<()> {
        let policy = ExponentialBackoffBuilder::new()
            .with_maximum_delay(Duration::from_secs(4))
            .with_jitter(true)
            .build()?;
        let now = Instant::now();
        for attempt in 1..20 {
            let delay = policy.on_failure(now, attempt);
            assert!(delay <= policy.nominal_delay(attempt), "{attempt} {delay:?}");
        }
        Ok(())
    }
}
