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

//! The lifecycle of a single call.
//!
//! ```text
//! Building -> Dispatched -> Succeeded
//!                        -> Failed
//!                        -> Retrying -> Dispatched
//! ```
//!
//! A call may also fail while `Building` (e.g. a missing parameter) or while
//! `Retrying` (e.g. the call is cancelled during the backoff).

use std::time::Duration;

/// The state of a call in the executor.
#[derive(Clone, Debug, PartialEq)]
pub enum CallState {
    /// Binding parameters and encoding the request.
    Building,
    /// The request for the given attempt (starting at 1) was sent.
    Dispatched { attempt: u32 },
    /// Waiting `delay` before the next attempt.
    Retrying { attempt: u32, delay: Duration },
    /// The response was decoded.
    Succeeded { attempts: u32 },
    /// The call completed with an error.
    Failed { attempts: u32 },
}

/// A transition not allowed by the call lifecycle.
#[derive(thiserror::Error, Debug, PartialEq)]
#[error("invalid call state transition from {from:?} on {event}")]
pub struct InvalidTransition {
    pub from: CallState,
    pub event: &'static str,
}

type Result = std::result::Result<CallState, InvalidTransition>;

impl CallState {
    /// Sends the next attempt.
    pub fn dispatch(self) -> Result {
        match self {
            Self::Building => Ok(Self::Dispatched { attempt: 1 }),
            Self::Retrying { attempt, .. } => Ok(Self::Dispatched {
                attempt: attempt + 1,
            }),
            from => Err(InvalidTransition {
                from,
                event: "dispatch",
            }),
        }
    }

    /// The attempt failed, and the retry policy allows another one.
    pub fn retry(self, delay: Duration) -> Result {
        match self {
            Self::Dispatched { attempt } => Ok(Self::Retrying { attempt, delay }),
            from => Err(InvalidTransition {
                from,
                event: "retry",
            }),
        }
    }

    /// The attempt succeeded.
    pub fn succeed(self) -> Result {
        match self {
            Self::Dispatched { attempt } => Ok(Self::Succeeded { attempts: attempt }),
            from => Err(InvalidTransition {
                from,
                event: "succeed",
            }),
        }
    }

    /// The call failed, this is valid from any non-terminal state.
    pub fn fail(self) -> Result {
        match self {
            Self::Building => Ok(Self::Failed { attempts: 0 }),
            Self::Dispatched { attempt } | Self::Retrying { attempt, .. } => {
                Ok(Self::Failed { attempts: attempt })
            }
            from => Err(InvalidTransition {
                from,
                event: "fail",
            }),
        }
    }

    /// The number of attempts sent so far.
    pub fn attempts(&self) -> u32 {
        match self {
            Self::Building => 0,
            Self::Dispatched { attempt } | Self::Retrying { attempt, .. } => *attempt,
            Self::Succeeded { attempts } | Self::Failed { attempts } => *attempts,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded { .. } | Self::Failed { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Building => "Building",
            Self::Dispatched { .. } => "Dispatched",
            Self::Retrying { .. } => "Retrying",
            Self::Succeeded { .. } => "Succeeded",
            Self::Failed { .. } => "Failed",
        }
    }
}
