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

//! Validated, immutable descriptions of a service and its methods.

use crate::SchemaParseError;
use crate::path_template::PathTemplate;
use crate::registry::SchemaRegistry;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Parses the `httpMethod` field of a discovery method.
    pub fn from_name(name: &str) -> Option<Self> {
        let m = match name.to_ascii_uppercase().as_str() {
            "GET" => Self::Get,
            "POST" => Self::Post,
            "PUT" => Self::Put,
            "PATCH" => Self::Patch,
            "DELETE" => Self::Delete,
            _ => return None,
        };
        Some(m)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// The default idempotency for requests using this verb.
    pub fn is_idempotent(&self) -> bool {
        matches!(self, Self::Get | Self::Put | Self::Delete)
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParameterLocation {
    Path,
    Query,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParameterType {
    String,
    Integer,
    Number,
    Boolean,
}

impl ParameterType {
    pub fn from_name(name: &str) -> Option<Self> {
        let t = match name {
            "string" => Self::String,
            "integer" => Self::Integer,
            "number" => Self::Number,
            "boolean" => Self::Boolean,
            _ => return None,
        };
        Some(t)
    }
}

/// How the values of a repeated parameter are placed in the query string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RepeatedEncoding {
    /// One `name=value` pair per value.
    #[default]
    Multi,
    /// A single `name=v1,v2` pair.
    CommaSeparated,
}

impl RepeatedEncoding {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "multi" => Some(Self::Multi),
            "csv" => Some(Self::CommaSeparated),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParameterDescriptor {
    pub name: String,
    pub location: ParameterLocation,
    pub parameter_type: ParameterType,
    pub format: Option<String>,
    pub required: bool,
    /// Set for repeated parameters.
    pub repeated: Option<RepeatedEncoding>,
    pub enum_values: Vec<String>,
    pub default: Option<String>,
    pub description: Option<String>,
}

impl ParameterDescriptor {
    /// A required string parameter in the request path.
    pub fn path<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            location: ParameterLocation::Path,
            parameter_type: ParameterType::String,
            format: None,
            required: true,
            repeated: None,
            enum_values: Vec::new(),
            default: None,
            description: None,
        }
    }

    /// An optional query parameter.
    pub fn query<T: Into<String>>(name: T, parameter_type: ParameterType) -> Self {
        Self {
            location: ParameterLocation::Query,
            parameter_type,
            required: false,
            ..Self::path(name)
        }
    }

    pub fn with_required(mut self, v: bool) -> Self {
        self.required = v;
        self
    }

    pub fn with_repeated(mut self, v: RepeatedEncoding) -> Self {
        self.repeated = Some(v);
        self
    }

    pub fn with_format<T: Into<String>>(mut self, v: T) -> Self {
        self.format = Some(v.into());
        self
    }

    pub fn with_enum_values<T, I>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = I>,
        I: Into<String>,
    {
        self.enum_values = v.into_iter().map(|s| s.into()).collect();
        self
    }

    pub fn with_default<T: Into<String>>(mut self, v: T) -> Self {
        self.default = Some(v.into());
        self
    }

    pub fn with_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    pub fn is_repeated(&self) -> bool {
        self.repeated.is_some()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MethodDescriptor {
    /// The method id, e.g. `blogger.posts.list`.
    pub id: String,
    pub http_method: HttpMethod,
    /// The path template, relative to the service base URL.
    pub path: String,
    /// Required parameters first, in positional order, then the optional
    /// parameters.
    pub parameters: Vec<ParameterDescriptor>,
    /// The request body schema name.
    pub request: Option<String>,
    /// The response schema name.
    pub response: Option<String>,
    pub scopes: Vec<String>,
    pub description: Option<String>,
}

impl MethodDescriptor {
    pub fn new<I, P>(id: I, http_method: HttpMethod, path: P) -> Self
    where
        I: Into<String>,
        P: Into<String>,
    {
        Self {
            id: id.into(),
            http_method,
            path: path.into(),
            parameters: Vec::new(),
            request: None,
            response: None,
            scopes: Vec::new(),
            description: None,
        }
    }

    pub fn with_parameter(mut self, v: ParameterDescriptor) -> Self {
        self.parameters.push(v);
        self
    }

    pub fn with_request<T: Into<String>>(mut self, v: T) -> Self {
        self.request = Some(v.into());
        self
    }

    pub fn with_response<T: Into<String>>(mut self, v: T) -> Self {
        self.response = Some(v.into());
        self
    }

    pub fn with_scopes<T, I>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = I>,
        I: Into<String>,
    {
        self.scopes = v.into_iter().map(|s| s.into()).collect();
        self
    }

    pub fn parameter(&self, name: &str) -> Option<&ParameterDescriptor> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// The required parameters, in positional order.
    pub fn required_parameters(&self) -> impl Iterator<Item = &ParameterDescriptor> {
        self.parameters.iter().filter(|p| p.required)
    }

    pub fn optional_parameters(&self) -> impl Iterator<Item = &ParameterDescriptor> {
        self.parameters.iter().filter(|p| !p.required)
    }

    pub fn path_template(&self) -> Result<PathTemplate, SchemaParseError> {
        PathTemplate::parse(&self.path)
    }

    /// Returns true if the response can be paginated with `pageToken`.
    pub fn accepts_page_token(&self) -> bool {
        self.parameter("pageToken")
            .is_some_and(|p| p.location == ParameterLocation::Query && !p.is_repeated())
    }

    /// Verifies each path placeholder has exactly one required path parameter,
    /// and each path parameter appears in the template.
    pub fn check_path_parameters(&self) -> Result<(), SchemaParseError> {
        let mismatch = |detail: String| SchemaParseError::PathMismatch {
            method: self.id.clone(),
            detail,
        };
        let template = self.path_template()?;
        let mut placeholders = BTreeSet::new();
        for name in template.variables() {
            if !placeholders.insert(name) {
                return Err(mismatch(format!("placeholder `{name}` appears more than once")));
            }
            let matches: Vec<_> = self.parameters.iter().filter(|p| p.name == name).collect();
            match matches.as_slice() {
                [] => return Err(mismatch(format!("placeholder `{name}` has no parameter"))),
                [p] if p.location != ParameterLocation::Path => {
                    return Err(mismatch(format!(
                        "placeholder `{name}` refers to a query parameter"
                    )));
                }
                [p] if !p.required => {
                    return Err(mismatch(format!(
                        "placeholder `{name}` refers to an optional parameter"
                    )));
                }
                [_] => {}
                _ => {
                    return Err(mismatch(format!(
                        "placeholder `{name}` has more than one parameter"
                    )));
                }
            }
        }
        if let Some(p) = self
            .parameters
            .iter()
            .find(|p| p.location == ParameterLocation::Path && !placeholders.contains(p.name.as_str()))
        {
            return Err(mismatch(format!(
                "path parameter `{}` does not appear in the template",
                p.name
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceDescriptor {
    pub name: String,
    pub methods: BTreeMap<String, MethodDescriptor>,
    pub resources: BTreeMap<String, ResourceDescriptor>,
}

impl ResourceDescriptor {
    pub fn method(&self, name: &str) -> Option<&MethodDescriptor> {
        self.methods.get(name)
    }

    pub fn resource(&self, name: &str) -> Option<&ResourceDescriptor> {
        self.resources.get(name)
    }

    /// Visits all the methods in this resource and its sub-resources.
    pub fn all_methods(&self) -> Vec<&MethodDescriptor> {
        let mut methods: Vec<_> = self.methods.values().collect();
        for r in self.resources.values() {
            methods.extend(r.all_methods());
        }
        methods
    }
}

/// A validated service description.
#[derive(Clone, Debug, PartialEq)]
pub struct ServiceDescriptor {
    pub name: String,
    pub version: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub documentation_link: Option<String>,
    pub root_url: String,
    pub service_path: String,
    /// OAuth2 scopes, in name order.
    pub scopes: Vec<String>,
    /// Parameters accepted by every method, e.g. `fields` or `quotaUser`.
    pub parameters: Vec<ParameterDescriptor>,
    /// Methods defined at the top-level of the service.
    pub methods: BTreeMap<String, MethodDescriptor>,
    pub resources: BTreeMap<String, ResourceDescriptor>,
    pub schemas: SchemaRegistry,
}

impl ServiceDescriptor {
    /// The URL prefix for all method paths.
    ///
    /// # Example
    /// ```
    /// # use discovery::load_service;
    /// let service = load_service(r#"{
    ///     "name": "blogger", "version": "v3",
    ///     "rootUrl": "https://www.googleapis.com/",
    ///     "servicePath": "blogger/v3/"
    /// }"#)?;
    /// assert_eq!(service.base_url(), "https://www.googleapis.com/blogger/v3/");
    /// # Ok::<(), discovery::SchemaParseError>(())
    /// ```
    pub fn base_url(&self) -> String {
        join_url(&self.root_url, &self.service_path)
    }

    pub fn resource(&self, name: &str) -> Option<&ResourceDescriptor> {
        self.resources.get(name)
    }

    /// Finds a method by its dotted path, e.g. `posts.list`.
    ///
    /// The service name prefix is optional, `blogger.posts.list` also works.
    pub fn find_method(&self, dotted: &str) -> Option<&MethodDescriptor> {
        let dotted = dotted
            .strip_prefix(self.name.as_str())
            .and_then(|s| s.strip_prefix('.'))
            .unwrap_or(dotted);
        let mut parts: Vec<&str> = dotted.split('.').collect();
        let method = parts.pop()?;
        if parts.is_empty() {
            return self.methods.get(method);
        }
        let mut resource = self.resources.get(parts[0])?;
        for p in &parts[1..] {
            resource = resource.resources.get(*p)?;
        }
        resource.method(method)
    }

    /// All the methods in the service.
    pub fn all_methods(&self) -> Vec<&MethodDescriptor> {
        let mut methods: Vec<_> = self.methods.values().collect();
        for r in self.resources.values() {
            methods.extend(r.all_methods());
        }
        methods
    }
}

/// Joins two URL fragments with exactly one `/` between them.
pub fn join_url(prefix: &str, suffix: &str) -> String {
    match (prefix.ends_with('/'), suffix.starts_with('/')) {
        (true, true) => format!("{prefix}{}", &suffix[1..]),
        (false, false) if !prefix.is_empty() && !suffix.is_empty() => format!("{prefix}/{suffix}"),
        _ => format!("{prefix}{suffix}"),
    }
}
