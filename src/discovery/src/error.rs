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

/// The error type for [load_service][crate::load_service].
///
/// Loading a service description either succeeds completely or fails with
/// one of these errors. None of them are recoverable: the document must be
/// fixed.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum SchemaParseError {
    #[error("cannot parse the discovery document: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("{context} is missing the required field `{field}`")]
    MissingField {
        context: String,
        field: &'static str,
    },
    #[error("{context} uses an unknown type `{type_name}`")]
    UnknownType { context: String, type_name: String },
    #[error("parameter `{parameter}` in {method} has an invalid location `{location}`")]
    InvalidLocation {
        method: String,
        parameter: String,
        location: String,
    },
    #[error("{method} uses an invalid HTTP method `{verb}`")]
    InvalidHttpMethod { method: String, verb: String },
    #[error("{context} references an unknown schema `{target}`")]
    UnresolvedReference { context: String, target: String },
    #[error("the path template for {method} does not match its path parameters: {detail}")]
    PathMismatch { method: String, detail: String },
    #[error("invalid path template `{template}`: {detail}")]
    PathTemplate { template: String, detail: String },
    #[error("{method} lists `{parameter}` in its parameter order, but it is not a required parameter")]
    InvalidParameterOrder { method: String, parameter: String },
    #[error("{context} uses an unknown repeated encoding `{encoding}`")]
    InvalidRepeatedEncoding { context: String, encoding: String },
    #[error("schema `{schema}` names `{field}` as its collection, but it is not an array field")]
    InvalidCollection { schema: String, field: String },
    #[error("the schemas [{}] form a cycle of required fields with no base case", cycle.join(" -> "))]
    UnboundedRecursion { cycle: Vec<String> },
}
