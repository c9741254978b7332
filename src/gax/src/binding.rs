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

//! Binds call arguments to a method.
//!
//! Binding merges the positional arguments with the optional parameters,
//! validates them against the [MethodDescriptor], expands the path template,
//! and encodes the query parameters. It never performs I/O, so any
//! [BindingError] is detected before the request is sent.

use crate::error::BindingError;
use crate::parameter_bag::{ParameterBag, ParameterValue};
use crate::path_parameter;
use discovery::{HttpMethod, MethodDescriptor, ParameterLocation, RepeatedEncoding};

/// A request with all the parameters resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundRequest {
    /// The method id, e.g. `blogger.posts.list`.
    pub method_id: String,
    pub http_method: HttpMethod,
    /// The expanded path, relative to the service base URL.
    pub path: String,
    /// The query parameters, in the order the method declares them.
    pub query: Vec<(String, String)>,
}

/// Merges and validates the parameters for a call to `method`.
///
/// Positional arguments take precedence, optional values are used only for
/// names not set positionally. Fails if:
/// - any name is not a parameter of `method`,
/// - a required parameter is missing or empty,
/// - a non-repeated parameter has more than one value.
///
/// # Example
/// ```
/// # use gax::binding::bind;
/// # use gax::parameter_bag::ParameterBag;
/// # use discovery::*;
/// let method = MethodDescriptor::new("blogger.blogs.get", HttpMethod::Get, "blogs/{blogId}")
///     .with_parameter(ParameterDescriptor::path("blogId"))
///     .with_parameter(ParameterDescriptor::query("view", ParameterType::String));
/// let bound = bind(
///     &method,
///     ParameterBag::new().with("blogId", "123"),
///     ParameterBag::new().with("view", "ADMIN"),
/// )?;
/// assert_eq!(bound.path, "blogs/123");
/// assert_eq!(bound.query, vec![("view".to_string(), "ADMIN".to_string())]);
/// # Ok::<(), gax::error::BindingError>(())
/// ```
pub fn bind(
    method: &MethodDescriptor,
    positional: ParameterBag,
    optional: ParameterBag,
) -> Result<BoundRequest, BindingError> {
    for name in positional.names().chain(optional.names()) {
        if method.parameter(name).is_none() {
            return Err(BindingError::UnknownParameter {
                method: method.id.clone(),
                parameter: name.to_string(),
            });
        }
    }
    let mut merged = positional;
    for (name, value) in optional.iter() {
        if !merged.contains(name) {
            merged.set(name, value.clone());
        }
    }

    for p in &method.parameters {
        let value = merged.get(&p.name).filter(|v| !v.is_empty());
        match value {
            None if p.required => {
                return Err(BindingError::MissingParameter {
                    method: method.id.clone(),
                    parameter: p.name.clone(),
                });
            }
            Some(ParameterValue::List(list)) if !p.is_repeated() && list.len() > 1 => {
                return Err(BindingError::InvalidValue {
                    method: method.id.clone(),
                    parameter: p.name.clone(),
                    reason: format!("expected a single value, got {}", list.len()),
                });
            }
            _ => {}
        }
    }

    let template = method
        .path_template()
        .map_err(|e| BindingError::InvalidPath {
            method: method.id.clone(),
            reason: e.to_string(),
        })?;
    let path = template.expand::<_, BindingError>(|name, reserved| {
        let value = merged
            .get(name)
            .ok_or_else(|| BindingError::MissingParameter {
                method: method.id.clone(),
                parameter: name.to_string(),
            })?;
        let joined = value.values().collect::<Vec<_>>().join(",");
        Ok(path_parameter::encode(&joined, reserved))
    })?;

    let mut query = Vec::new();
    for p in method
        .parameters
        .iter()
        .filter(|p| p.location == ParameterLocation::Query)
    {
        let Some(value) = merged.get(&p.name).filter(|v| !v.is_empty()) else {
            continue;
        };
        match (value, p.repeated) {
            (ParameterValue::List(list), Some(RepeatedEncoding::CommaSeparated)) => {
                query.push((p.name.clone(), list.join(",")));
            }
            (v, _) => {
                query.extend(v.values().map(|s| (p.name.clone(), s.to_string())));
            }
        }
    }

    Ok(BoundRequest {
        method_id: method.id.clone(),
        http_method: method.http_method,
        path,
        query,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use discovery::{ParameterDescriptor, ParameterType};
    use pretty_assertions::assert_eq;

    fn blogs_get() -> MethodDescriptor {
        MethodDescriptor::new("blogger.blogs.get", HttpMethod::Get, "blogs/{blogId}")
            .with_parameter(ParameterDescriptor::path("blogId"))
            .with_parameter(
                ParameterDescriptor::query("maxPosts", ParameterType::Integer).with_format("uint32"),
            )
            .with_parameter(
                ParameterDescriptor::query("view", ParameterType::String)
                    .with_enum_values(["ADMIN", "AUTHOR", "READER"]),
            )
    }

    fn posts_list() -> MethodDescriptor {
        MethodDescriptor::new("blogger.posts.list", HttpMethod::Get, "blogs/{blogId}/posts")
            .with_parameter(ParameterDescriptor::path("blogId"))
            .with_parameter(
                ParameterDescriptor::query("labels", ParameterType::String)
                    .with_repeated(RepeatedEncoding::CommaSeparated),
            )
            .with_parameter(
                ParameterDescriptor::query("maxResults", ParameterType::Integer)
                    .with_format("uint32"),
            )
            .with_parameter(ParameterDescriptor::query("pageToken", ParameterType::String))
            .with_parameter(
                ParameterDescriptor::query("status", ParameterType::String)
                    .with_repeated(RepeatedEncoding::Multi),
            )
    }

    fn pairs(v: &[(&str, &str)]) -> Vec<(String, String)> {
        v.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn blogs_get_view() -> anyhow::Result<()> {
        let bound = bind(
            &blogs_get(),
            ParameterBag::new().with("blogId", "123"),
            ParameterBag::new().with("view", "ADMIN"),
        )?;
        assert_eq!(
            bound,
            BoundRequest {
                method_id: "blogger.blogs.get".into(),
                http_method: HttpMethod::Get,
                path: "blogs/123".into(),
                query: pairs(&[("view", "ADMIN")]),
            }
        );
        Ok(())
    }

    #[test]
    fn repeated_multi() -> anyhow::Result<()> {
        let bound = bind(
            &posts_list(),
            ParameterBag::new().with("blogId", "123"),
            ParameterBag::new()
                .with("maxResults", 10_u32)
                .with("status", vec!["live", "draft"]),
        )?;
        assert_eq!(
            bound.query,
            pairs(&[("maxResults", "10"), ("status", "live"), ("status", "draft")])
        );
        Ok(())
    }

    #[test]
    fn repeated_csv() -> anyhow::Result<()> {
        let bound = bind(
            &posts_list(),
            ParameterBag::new().with("blogId", "123"),
            ParameterBag::new().with("labels", vec!["rust", "api"]),
        )?;
        assert_eq!(bound.query, pairs(&[("labels", "rust,api")]));
        Ok(())
    }

    #[test]
    fn positional_wins() -> anyhow::Result<()> {
        let bound = bind(
            &blogs_get(),
            ParameterBag::new().with("blogId", "123"),
            ParameterBag::new().with("blogId", "456"),
        )?;
        assert_eq!(bound.path, "blogs/123");
        Ok(())
    }

    #[test]
    fn optional_can_provide_required() -> anyhow::Result<()> {
        let bound = bind(
            &blogs_get(),
            ParameterBag::new(),
            ParameterBag::new().with("blogId", "456"),
        )?;
        assert_eq!(bound.path, "blogs/456");
        Ok(())
    }

    #[test]
    fn missing_required() {
        let got = bind(&blogs_get(), ParameterBag::new(), ParameterBag::new());
        assert_eq!(
            got,
            Err(BindingError::MissingParameter {
                method: "blogger.blogs.get".into(),
                parameter: "blogId".into(),
            })
        );
        let got = bind(
            &blogs_get(),
            ParameterBag::new().with("blogId", ""),
            ParameterBag::new(),
        );
        assert!(
            matches!(&got, Err(BindingError::MissingParameter { parameter, .. }) if parameter == "blogId"),
            "{got:?}"
        );
    }

    #[test]
    fn unknown_parameter() {
        let got = bind(
            &blogs_get(),
            ParameterBag::new().with("blogId", "123"),
            ParameterBag::new().with("bogus", "x"),
        );
        assert!(
            matches!(&got, Err(BindingError::UnknownParameter { parameter, .. }) if parameter == "bogus"),
            "{got:?}"
        );
    }

    #[test]
    fn not_repeated() {
        let got = bind(
            &blogs_get(),
            ParameterBag::new().with("blogId", "123"),
            ParameterBag::new().with("view", vec!["ADMIN", "READER"]),
        );
        assert!(
            matches!(&got, Err(BindingError::InvalidValue { parameter, .. }) if parameter == "view"),
            "{got:?}"
        );
    }

    #[test]
    fn path_encoding() -> anyhow::Result<()> {
        let method = MethodDescriptor::new("test.things.get", HttpMethod::Get, "v1/{+name}/items/{id}")
            .with_parameter(ParameterDescriptor::path("name"))
            .with_parameter(ParameterDescriptor::path("id"));
        let bound = bind(
            &method,
            ParameterBag::new()
                .with("name", "projects/p 1")
                .with("id", "a/b"),
            ParameterBag::new(),
        )?;
        assert_eq!(bound.path, "v1/projects/p%201/items/a%2Fb");
        Ok(())
    }

    #[test]
    fn invalid_template() {
        let method = MethodDescriptor::new("test.things.get", HttpMethod::Get, "v1/{name");
        let got = bind(&method, ParameterBag::new(), ParameterBag::new());
        assert!(matches!(got, Err(BindingError::InvalidPath { .. })), "{got:?}");
    }

    #[test]
    fn empty_optional_list_skipped() -> anyhow::Result<()> {
        let bound = bind(
            &posts_list(),
            ParameterBag::new().with("blogId", "123"),
            ParameterBag::new().with("status", Vec::<String>::new()),
        )?;
        assert!(bound.query.is_empty(), "{bound:?}");
        Ok(())
    }
}
