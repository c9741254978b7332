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

/// A failure to bind the call arguments to a method.
///
/// These errors are detected before any request is sent. Retrying the call
/// with the same arguments always fails again.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum BindingError {
    /// A required parameter was not provided, or was provided as an empty
    /// value.
    #[error("missing required parameter `{parameter}` in call to {method}")]
    MissingParameter { method: String, parameter: String },

    /// The call includes a parameter the method does not declare.
    #[error("unknown parameter `{parameter}` in call to {method}")]
    UnknownParameter { method: String, parameter: String },

    /// A parameter value does not match the declared type or values.
    #[error("invalid value for parameter `{parameter}` in call to {method}: {reason}")]
    InvalidValue {
        method: String,
        parameter: String,
        reason: String,
    },

    /// The service does not define the method.
    #[error("unknown method {method}")]
    UnknownMethod { method: String },

    /// The method path template cannot be expanded.
    #[error("cannot build the request path for {method}: {reason}")]
    InvalidPath { method: String, reason: String },
}

impl BindingError {
    /// The name of the parameter, if the error is about a specific parameter.
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::MissingParameter { parameter, .. }
            | Self::UnknownParameter { parameter, .. }
            | Self::InvalidValue { parameter, .. } => Some(parameter),
            Self::InvalidPath { .. } | Self::UnknownMethod { .. } => None,
        }
    }
}
