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

use std::error::Error as StdError;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// A failure to produce the authentication headers for a request.
///
/// Token acquisition happens outside this crate, in a
/// [CredentialsProvider][crate::credentials::CredentialsProvider]. Providers
/// report failures with this type, marking whether a later attempt may
/// succeed. Retryable failures happen before the request is sent, so the
/// default retry policy retries them for any method.
///
/// # Example
/// ```
/// # use gax::error::CredentialsError;
/// let err = CredentialsError::from_msg(true, "token endpoint unavailable");
/// assert!(err.is_retryable());
/// assert!(err.to_string().contains("token endpoint unavailable"));
/// ```
#[derive(Clone, Debug)]
pub struct CredentialsError {
    is_retryable: bool,
    message: Option<String>,
    source: Option<Arc<dyn StdError + Send + Sync>>,
}

impl CredentialsError {
    /// Creates a new error wrapping `source`.
    pub fn new<T: StdError + Send + Sync + 'static>(is_retryable: bool, source: T) -> Self {
        Self {
            is_retryable,
            message: None,
            source: Some(Arc::new(source)),
        }
    }

    /// Creates a new error with a message and no source.
    pub fn from_msg<T: Into<String>>(is_retryable: bool, message: T) -> Self {
        Self {
            is_retryable,
            message: Some(message.into()),
            source: None,
        }
    }

    /// Returns `true` if a later attempt may succeed.
    pub fn is_retryable(&self) -> bool {
        self.is_retryable
    }
}

impl StdError for CredentialsError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl Display for CredentialsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let retry = if self.is_retryable {
            "but future attempts may succeed"
        } else {
            "and future attempts will not succeed"
        };
        match (&self.message, &self.source) {
            (Some(m), _) => write!(f, "cannot create the credentials, {retry}: {m}"),
            (None, Some(s)) => write!(f, "cannot create the credentials, {retry}: {s}"),
            (None, None) => write!(f, "cannot create the credentials, {retry}"),
        }
    }
}
