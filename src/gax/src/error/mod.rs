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

//! The errors returned by the client libraries.
//!
//! The client libraries distinguish between errors detected before a request
//! is sent (e.g. a missing required parameter), errors sending the request or
//! receiving the response (e.g. a dropped connection), and errors returned by
//! the service itself.
//!
//! # Example
//! ```
//! use gax::error::Error;
//! fn handle_error(e: Error) {
//!     if let Some(payload) = e.api_error() {
//!         println!("the service says: {} ({:?})", payload.message, payload.status);
//!     } else if e.is_binding() {
//!         println!("the request is incomplete: {e}");
//!     }
//! }
//! ```

mod binding;
mod core_error;
mod credentials;
mod payload;

pub use binding::BindingError;
pub use core_error::*;
pub use credentials::CredentialsError;
pub use payload::{ErrorDetail, ErrorPayload};
