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

//! Google APIs helpers.
//!
//! This crate contains the runtime used by the generated clients for Google
//! APIs described by discovery documents. It binds call arguments to the
//! method descriptors, sends the requests, retries transient failures, and
//! iterates over paginated results.
//!
//! <div class="warning">
//! The <code>binding</code>, <code>executor</code>, and parameter modules are
//! used by the generated code. Applications rarely need them directly.
//! </div>

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping API methods.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by generated clients.
pub mod error;

/// Converts the values of query parameters.
#[doc(hidden)]
pub mod query_parameter;

/// Encodes path parameters for simple and reserved expansions.
#[doc(hidden)]
pub mod path_parameter;

/// Implementation details for [query_parameter](crate::query_parameter).
#[doc(hidden)]
pub mod request_parameter;

/// The parameters of a single call.
pub mod parameter_bag;

/// Validates call arguments and expands the method path.
pub mod binding;

/// The lifecycle of a single call.
pub mod call_state;

/// Defines some types and traits to convert and use list methods as a Stream.
pub mod paginator;

/// Authentication headers.
pub mod credentials;

/// The HTTP transport.
pub mod transport;

pub mod options;
pub mod retry_policy;
pub mod retry_result;

/// Sends requests and decodes responses.
pub mod executor;

/// Calls methods of services loaded at runtime.
pub mod dynamic;

pub mod backoff_policy;
pub mod client_builder;
pub mod exponential_backoff;

#[doc(hidden)]
pub mod retry_loop_internal;
