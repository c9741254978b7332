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

//! Google API discovery documents.
//!
//! This crate loads a [discovery document] into validated, immutable
//! descriptors. Both the code generator and the runtime use these
//! descriptors: the generator to emit typed clients, and the runtime to send
//! requests.
//!
//! [discovery document]: https://developers.google.com/discovery/v1/reference/apis

pub mod descriptor;
pub mod document;
mod error;
mod loader;
pub mod path_template;
pub mod registry;
pub mod shape;

pub use descriptor::{
    HttpMethod, MethodDescriptor, ParameterDescriptor, ParameterLocation, ParameterType,
    RepeatedEncoding, ResourceDescriptor, ServiceDescriptor,
};
pub use error::SchemaParseError;
pub use loader::{from_document, load_service, load_service_from_slice};
pub use registry::{SchemaDescriptor, SchemaId, SchemaRegistry};
