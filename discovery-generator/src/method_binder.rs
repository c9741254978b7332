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

//! Emits the code binding one discovery method to the runtime.
//!
//! Each method produces three fragments: a static descriptor in
//! `descriptors.rs`, an options struct in `client.rs`, and one or more
//! functions in the `impl` block of its resource.

use crate::typemap::{TypeMapper, parameter_type};
use crate::util::{as_comment, camel_round_trips, camel_to_snake, field_ident, quote, to_pascal};
use anyhow::{Result, bail};
use discovery::{
    HttpMethod, MethodDescriptor, ParameterDescriptor, ParameterLocation, ParameterType,
    RepeatedEncoding,
};
use std::collections::BTreeSet;
use std::fmt::Write;

const MAX_LINE_LENGTH: usize = 100;

/// A method, with the names used for it in the generated code.
#[derive(Debug)]
pub struct MethodBinding<'a> {
    method: &'a MethodDescriptor,
    /// The method name in the discovery doc, e.g. `listByBlog`.
    name: &'a str,
    /// The resource path in the discovery doc, e.g. `["posts"]`.
    resource: Vec<&'a str>,
    globals: &'a BTreeSet<String>,
}

impl<'a> MethodBinding<'a> {
    pub fn new(
        method: &'a MethodDescriptor,
        name: &'a str,
        resource: Vec<&'a str>,
        globals: &'a BTreeSet<String>,
    ) -> Self {
        Self {
            method,
            name,
            resource,
            globals,
        }
    }

    /// The name of the static descriptor, e.g. `POSTS_LIST_BY_BLOG`.
    pub fn static_name(&self) -> String {
        let mut parts: Vec<String> = self.resource.iter().map(|r| camel_to_snake(r)).collect();
        parts.push(camel_to_snake(self.name));
        parts.join("_").to_uppercase()
    }

    /// The name of the options struct, e.g. `PostsListOptions`.
    pub fn options_name(&self) -> String {
        let mut name: String = self.resource.iter().map(|r| to_pascal(r)).collect();
        name.push_str(&to_pascal(self.name));
        name.push_str("Options");
        name
    }

    /// The function name, e.g. `list_by_blog`.
    pub fn fn_name(&self) -> String {
        field_ident(self.name)
    }

    /// The parameters declared by the method, without the global parameters.
    fn own_parameters(&self) -> impl Iterator<Item = &'a ParameterDescriptor> {
        self.method
            .parameters
            .iter()
            .filter(|p| !self.globals.contains(&p.name))
    }

    fn required(&self) -> Vec<&'a ParameterDescriptor> {
        self.own_parameters().filter(|p| p.required).collect()
    }

    fn optional(&self) -> Vec<&'a ParameterDescriptor> {
        self.own_parameters().filter(|p| !p.required).collect()
    }

    fn response_type(&self, mapper: &TypeMapper) -> Result<Option<String>> {
        schema_type(mapper, self.method.response.as_deref())
    }

    fn request_type(&self, mapper: &TypeMapper) -> Result<Option<String>> {
        schema_type(mapper, self.method.request.as_deref())
    }

    fn is_pageable(&self, mapper: &TypeMapper) -> bool {
        self.method.accepts_page_token()
            && self
                .method
                .response
                .as_deref()
                .and_then(|r| mapper.registry().lookup(r))
                .and_then(|id| mapper.page_item(id))
                .is_some()
    }

    /// Emits the static descriptor for `descriptors.rs`.
    pub fn emit_descriptor(&self, b: &mut String) -> Result<()> {
        let m = self.method;
        writeln!(b, "pub(crate) static {}: LazyLock<MethodDescriptor> = LazyLock::new(|| {{", self.static_name())?;
        writeln!(b, "    with_standard_parameters(")?;
        writeln!(
            b,
            "        MethodDescriptor::new({}, HttpMethod::{}, {})",
            quote(&m.id),
            http_method(m.http_method),
            quote(&m.path)
        )?;
        let mut calls: Vec<String> = self
            .own_parameters()
            .map(|p| format!(".with_parameter({})", parameter_descriptor(p)))
            .collect();
        if let Some(r) = &m.request {
            calls.push(format!(".with_request({})", quote(r)));
        }
        if let Some(r) = &m.response {
            calls.push(format!(".with_response({})", quote(r)));
        }
        if !m.scopes.is_empty() {
            let scopes: Vec<String> = m.scopes.iter().map(|s| quote(s)).collect();
            calls.push(format!(".with_scopes([{}])", scopes.join(", ")));
        }
        match calls.pop() {
            Some(last) => {
                for c in calls {
                    writeln!(b, "            {c}")?;
                }
                writeln!(b, "            {last},")?;
            }
            None => {
                // The constructor line needs the trailing comma.
                b.pop();
                writeln!(b, ",")?;
            }
        }
        writeln!(b, "    )")?;
        writeln!(b, "}});")?;
        Ok(())
    }

    /// Emits the options struct for `client.rs`.
    pub fn emit_options(&self, b: &mut String, owner: &str) -> Result<()> {
        let name = self.options_name();
        writeln!(
            b,
            "/// The optional parameters for [{owner}::{}].",
            self.fn_name().trim_start_matches("r#")
        )?;
        writeln!(b, "#[derive(Clone, Debug, Default, serde::Serialize)]")?;
        writeln!(b, "#[serde(rename_all = \"camelCase\")]")?;
        writeln!(b, "pub struct {name} {{")?;
        for p in self.optional() {
            let doc = parameter_doc(p);
            if !doc.is_empty() {
                b.push_str(&as_comment("    ", &doc)?);
            }
            if !camel_round_trips(&p.name) {
                writeln!(b, "    #[serde(rename = {})]", quote(&p.name))?;
            }
            let t = parameter_type(p);
            if p.is_repeated() {
                writeln!(b, "    pub {}: Option<Vec<{t}>>,", field_ident(&p.name))?;
            } else {
                writeln!(b, "    pub {}: Option<{t}>,", field_ident(&p.name))?;
            }
        }
        writeln!(b, "    /// Parameters accepted by all the methods in the service.")?;
        writeln!(b, "    #[serde(flatten)]")?;
        writeln!(b, "    pub standard: StandardParameters,")?;
        writeln!(b, "    /// Retry, backoff, and timeout settings for this call.")?;
        writeln!(b, "    #[serde(skip)]")?;
        writeln!(b, "    pub request_options: gax::options::RequestOptions,")?;
        writeln!(b, "}}")?;
        writeln!(b)?;
        writeln!(b, "impl gax::options::RequestBuilder for {name} {{")?;
        writeln!(
            b,
            "    fn request_options(&mut self) -> &mut gax::options::RequestOptions {{"
        )?;
        writeln!(b, "        &mut self.request_options")?;
        writeln!(b, "    }}")?;
        writeln!(b, "}}")?;
        Ok(())
    }

    /// Emits the functions for the resource `impl` block.
    pub fn emit_functions(&self, b: &mut String, mapper: &TypeMapper) -> Result<()> {
        let fn_name = self.fn_name();
        let request = self.request_type(mapper)?;
        let response = self.response_type(mapper)?;
        let required = self.required();
        tracing::debug!(method = %self.method.id, function = %fn_name, pageable = self.is_pageable(mapper), "binding method");

        if let Some(d) = &self.method.description {
            b.push_str(&as_comment("    ", d)?);
        }
        writeln!(b, "    pub async fn {fn_name}(")?;
        self.emit_arguments(b, &required, request.as_deref())?;
        match &response {
            Some(r) => writeln!(b, "    ) -> crate::Result<model::{r}> {{")?,
            None => writeln!(b, "    ) -> crate::Result<()> {{")?,
        }
        emit_bags(b, &required)?;
        writeln!(b, "        self.executor")?;
        let call = match (request.is_some(), response.is_some()) {
            (true, true) => "execute_with_body",
            (true, false) => "execute_with_body::<_, serde_json::Value>",
            (false, true) => "execute",
            (false, false) => "execute::<serde_json::Value>",
        };
        writeln!(b, "            .{call}(")?;
        writeln!(b, "                &descriptors::{},", self.static_name())?;
        writeln!(b, "                positional,")?;
        writeln!(b, "                optional,")?;
        if request.is_some() {
            writeln!(b, "                &body,")?;
        }
        writeln!(b, "                options.request_options,")?;
        writeln!(b, "            )")?;
        writeln!(b, "            .await")?;
        if response.is_none() {
            writeln!(b, "            .map(|_| ())")?;
        }
        writeln!(b, "    }}")?;

        if !self.is_pageable(mapper) {
            return Ok(());
        }
        let Some(response) = response else {
            return Ok(());
        };
        let plain = fn_name.trim_start_matches("r#");
        writeln!(b)?;
        writeln!(b, "    /// Returns a stream with the pages of [{plain}][Self::{plain}].")?;
        writeln!(b, "    ///")?;
        writeln!(
            b,
            "    /// The stream ends after the last page, or after the first error."
        )?;
        writeln!(b, "    pub fn {plain}_stream(")?;
        self.emit_arguments(b, &required, None)?;
        writeln!(
            b,
            "    ) -> crate::Result<gax::paginator::Paginator<model::{response}>> {{"
        )?;
        emit_bags(b, &required)?;
        writeln!(b, "        Ok(self.executor.paginate(")?;
        writeln!(b, "            &descriptors::{},", self.static_name())?;
        writeln!(b, "            positional,")?;
        writeln!(b, "            optional,")?;
        writeln!(b, "            options.request_options,")?;
        writeln!(b, "        ))")?;
        writeln!(b, "    }}")?;
        writeln!(b)?;
        writeln!(b, "    /// Fetches all the pages of [{plain}][Self::{plain}].")?;
        writeln!(b, "    ///")?;
        writeln!(
            b,
            "    /// If a page fails, the result holds the pages received before the error."
        )?;
        writeln!(b, "    pub async fn {plain}_all(")?;
        self.emit_arguments(b, &required, None)?;
        writeln!(
            b,
            "    ) -> crate::Result<gax::paginator::AllPages<model::{response}>> {{"
        )?;
        let mut names: Vec<String> = required.iter().map(|p| field_ident(&p.name)).collect();
        names.push("options".to_string());
        writeln!(
            b,
            "        Ok(self.{plain}_stream({})?.collect_all().await)",
            names.join(", ")
        )?;
        writeln!(b, "    }}")?;
        Ok(())
    }

    fn emit_arguments(
        &self,
        b: &mut String,
        required: &[&ParameterDescriptor],
        request: Option<&str>,
    ) -> Result<()> {
        writeln!(b, "        &self,")?;
        for p in required {
            writeln!(b, "        {}: {},", field_ident(&p.name), argument_type(p))?;
        }
        if let Some(r) = request {
            writeln!(b, "        body: model::{r},")?;
        }
        writeln!(b, "        options: {},", self.options_name())?;
        Ok(())
    }
}

fn emit_bags(b: &mut String, required: &[&ParameterDescriptor]) -> Result<()> {
    let single = match required {
        [p] => Some(format!(
            "        let positional = ParameterBag::new().with({}, {});",
            quote(&p.name),
            argument_value(p)
        )),
        _ => None,
    };
    match single {
        _ if required.is_empty() => writeln!(b, "        let positional = ParameterBag::new();")?,
        Some(line) if line.len() <= MAX_LINE_LENGTH => writeln!(b, "{line}")?,
        _ => {
            writeln!(b, "        let positional = ParameterBag::new()")?;
            let last = required.len() - 1;
            for (i, p) in required.iter().enumerate() {
                let end = if i == last { ";" } else { "" };
                writeln!(
                    b,
                    "            .with({}, {}){end}",
                    quote(&p.name),
                    argument_value(p)
                )?;
            }
        }
    }
    writeln!(b, "        let optional = ParameterBag::from_serialize(&options)?;")?;
    Ok(())
}

fn schema_type(mapper: &TypeMapper, name: Option<&str>) -> Result<Option<String>> {
    let Some(name) = name else {
        return Ok(None);
    };
    match mapper.registry().lookup(name) {
        Some(id) => Ok(Some(mapper.type_name(id))),
        None => bail!("unknown schema `{name}`"),
    }
}

fn argument_type(p: &ParameterDescriptor) -> String {
    match (p.parameter_type, p.is_repeated()) {
        (ParameterType::String, false) => "impl Into<String>".to_string(),
        (ParameterType::String, true) => "impl IntoIterator<Item = impl Into<String>>".to_string(),
        (_, false) => parameter_type(p).to_string(),
        (_, true) => format!("Vec<{}>", parameter_type(p)),
    }
}

fn argument_value(p: &ParameterDescriptor) -> String {
    let ident = field_ident(&p.name);
    match (p.parameter_type, p.is_repeated()) {
        (ParameterType::String, false) => format!("{ident}.into()"),
        (ParameterType::String, true) => {
            format!("{ident}.into_iter().map(Into::into).collect::<Vec<String>>()")
        }
        _ => ident,
    }
}

fn parameter_doc(p: &ParameterDescriptor) -> String {
    let mut doc = p.description.clone().unwrap_or_default();
    let mut extra = Vec::new();
    if !p.enum_values.is_empty() {
        let values: Vec<String> = p.enum_values.iter().map(|v| format!("`{v}`")).collect();
        extra.push(format!("Possible values: {}.", values.join(", ")));
    }
    if let Some(d) = &p.default {
        extra.push(format!("Defaults to `{d}`."));
    }
    if !extra.is_empty() {
        if !doc.is_empty() {
            doc.push_str("\n\n");
        }
        doc.push_str(&extra.join(" "));
    }
    doc
}

fn http_method(m: HttpMethod) -> &'static str {
    match m {
        HttpMethod::Get => "Get",
        HttpMethod::Post => "Post",
        HttpMethod::Put => "Put",
        HttpMethod::Patch => "Patch",
        HttpMethod::Delete => "Delete",
    }
}

/// The Rust expression building a parameter descriptor.
pub fn parameter_descriptor(p: &ParameterDescriptor) -> String {
    let mut expr = match p.location {
        ParameterLocation::Path if p.parameter_type == ParameterType::String => {
            format!("ParameterDescriptor::path({})", quote(&p.name))
        }
        ParameterLocation::Path => format!(
            "ParameterDescriptor {{ parameter_type: ParameterType::{:?}, ..ParameterDescriptor::path({}) }}",
            p.parameter_type,
            quote(&p.name)
        ),
        ParameterLocation::Query => format!(
            "ParameterDescriptor::query({}, ParameterType::{:?})",
            quote(&p.name),
            p.parameter_type
        ),
    };
    if p.location == ParameterLocation::Query && p.required {
        expr.push_str(".with_required(true)");
    }
    match p.repeated {
        Some(RepeatedEncoding::Multi) => expr.push_str(".with_repeated(RepeatedEncoding::Multi)"),
        Some(RepeatedEncoding::CommaSeparated) => {
            expr.push_str(".with_repeated(RepeatedEncoding::CommaSeparated)")
        }
        None => {}
    }
    if let Some(f) = &p.format {
        expr.push_str(&format!(".with_format({})", quote(f)));
    }
    expr
}

#[cfg(test)]
mod tests {
    use super::*;
    use discovery::{ServiceDescriptor, load_service};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn service() -> anyhow::Result<ServiceDescriptor> {
        let doc = json!({
            "name": "blogger", "version": "v3",
            "rootUrl": "https://www.googleapis.com/", "servicePath": "blogger/v3/",
            "parameters": {
                "fields": { "type": "string", "location": "query" },
                "quotaUser": { "type": "string", "location": "query" },
            },
            "schemas": {
                "Post": { "type": "object", "properties": { "id": { "type": "string" } } },
                "PostList": { "type": "object", "properties": {
                    "items": { "type": "array", "items": { "$ref": "Post" } },
                    "nextPageToken": { "type": "string" },
                }},
            },
            "resources": { "posts": { "methods": {
                "list": {
                    "id": "blogger.posts.list", "path": "blogs/{blogId}/posts", "httpMethod": "GET",
                    "description": "Lists posts.",
                    "parameterOrder": ["blogId"],
                    "parameters": {
                        "blogId": { "type": "string", "location": "path", "required": true },
                        "maxResults": { "type": "integer", "format": "uint32", "location": "query" },
                        "pageToken": { "type": "string", "location": "query" },
                        "status": { "type": "string", "location": "query", "repeated": true,
                                    "enum": ["DRAFT", "LIVE"] },
                        "view": { "type": "string", "location": "query", "default": "READER" },
                    },
                    "response": { "$ref": "PostList" },
                    "scopes": ["https://www.googleapis.com/auth/blogger"],
                },
                "insert": {
                    "id": "blogger.posts.insert", "path": "blogs/{blogId}/posts", "httpMethod": "POST",
                    "parameterOrder": ["blogId"],
                    "parameters": {
                        "blogId": { "type": "string", "location": "path", "required": true },
                    },
                    "request": { "$ref": "Post" },
                    "response": { "$ref": "Post" },
                },
                "delete": {
                    "id": "blogger.posts.delete", "path": "blogs/{blogId}/posts/{postId}",
                    "httpMethod": "DELETE",
                    "parameterOrder": ["blogId", "postId"],
                    "parameters": {
                        "blogId": { "type": "string", "location": "path", "required": true },
                        "postId": { "type": "string", "location": "path", "required": true },
                    },
                },
            }}},
        });
        Ok(load_service(&doc.to_string())?)
    }

    fn globals(service: &ServiceDescriptor) -> BTreeSet<String> {
        service.parameters.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn names() -> anyhow::Result<()> {
        let service = service()?;
        let globals = globals(&service);
        let method = service.find_method("posts.list").expect("posts.list exists");
        let binding = MethodBinding::new(method, "list", vec!["posts"], &globals);
        assert_eq!(binding.static_name(), "POSTS_LIST");
        assert_eq!(binding.options_name(), "PostsListOptions");
        assert_eq!(binding.fn_name(), "list");

        let binding = MethodBinding::new(method, "listByBlog", vec!["blogUserInfos"], &globals);
        assert_eq!(binding.static_name(), "BLOG_USER_INFOS_LIST_BY_BLOG");
        assert_eq!(binding.options_name(), "BlogUserInfosListByBlogOptions");
        assert_eq!(binding.fn_name(), "list_by_blog");
        Ok(())
    }

    #[test]
    fn descriptor() -> anyhow::Result<()> {
        let service = service()?;
        let globals = globals(&service);
        let method = service.find_method("posts.list").expect("posts.list exists");
        let binding = MethodBinding::new(method, "list", vec!["posts"], &globals);
        let mut got = String::new();
        binding.emit_descriptor(&mut got)?;
        let want = r#"pub(crate) static POSTS_LIST: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("blogger.posts.list", HttpMethod::Get, "blogs/{blogId}/posts")
            .with_parameter(ParameterDescriptor::path("blogId"))
            .with_parameter(ParameterDescriptor::query("maxResults", ParameterType::Integer).with_format("uint32"))
            .with_parameter(ParameterDescriptor::query("pageToken", ParameterType::String))
            .with_parameter(ParameterDescriptor::query("status", ParameterType::String).with_repeated(RepeatedEncoding::Multi))
            .with_parameter(ParameterDescriptor::query("view", ParameterType::String))
            .with_response("PostList")
            .with_scopes(["https://www.googleapis.com/auth/blogger"]),
    )
});
"#;
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn options() -> anyhow::Result<()> {
        let service = service()?;
        let globals = globals(&service);
        let method = service.find_method("posts.list").expect("posts.list exists");
        let binding = MethodBinding::new(method, "list", vec!["posts"], &globals);
        let mut got = String::new();
        binding.emit_options(&mut got, "Posts")?;
        assert!(got.starts_with("/// The optional parameters for [Posts::list].\n"), "{got}");
        assert!(got.contains("pub struct PostsListOptions {\n"), "{got}");
        assert!(got.contains("    pub max_results: Option<u32>,\n"), "{got}");
        assert!(got.contains("    /// Possible values: `DRAFT`, `LIVE`.\n    pub status: Option<Vec<String>>,\n"), "{got}");
        assert!(got.contains("    /// Defaults to `READER`.\n    pub view: Option<String>,\n"), "{got}");
        assert!(!got.contains("blog_id"), "{got}");
        assert!(!got.contains("quota_user"), "{got}");
        assert!(got.contains("impl gax::options::RequestBuilder for PostsListOptions {"), "{got}");
        Ok(())
    }

    #[test]
    fn pageable_functions() -> anyhow::Result<()> {
        let service = service()?;
        let globals = globals(&service);
        let mapper = TypeMapper::new(&service.schemas);
        let method = service.find_method("posts.list").expect("posts.list exists");
        let binding = MethodBinding::new(method, "list", vec!["posts"], &globals);
        let mut got = String::new();
        binding.emit_functions(&mut got, &mapper)?;
        assert!(got.contains("    /// Lists posts.\n    pub async fn list(\n"), "{got}");
        assert!(got.contains("        blog_id: impl Into<String>,\n"), "{got}");
        assert!(got.contains(") -> crate::Result<model::PostList> {"), "{got}");
        assert!(got.contains("ParameterBag::new().with(\"blogId\", blog_id.into());"), "{got}");
        assert!(got.contains("            .execute(\n                &descriptors::POSTS_LIST,"), "{got}");
        assert!(got.contains("    pub fn list_stream(\n"), "{got}");
        assert!(got.contains("crate::Result<gax::paginator::Paginator<model::PostList>>"), "{got}");
        assert!(got.contains("Ok(self.list_stream(blog_id, options)?.collect_all().await)"), "{got}");
        Ok(())
    }

    #[test]
    fn body_functions() -> anyhow::Result<()> {
        let service = service()?;
        let globals = globals(&service);
        let mapper = TypeMapper::new(&service.schemas);
        let method = service.find_method("posts.insert").expect("posts.insert exists");
        let binding = MethodBinding::new(method, "insert", vec!["posts"], &globals);
        let mut got = String::new();
        binding.emit_functions(&mut got, &mapper)?;
        assert!(got.contains("        body: model::Post,\n        options: PostsInsertOptions,\n"), "{got}");
        assert!(got.contains(".execute_with_body(\n"), "{got}");
        assert!(got.contains("                &body,\n"), "{got}");
        assert!(!got.contains("_stream"), "{got}");
        Ok(())
    }

    #[test]
    fn empty_response() -> anyhow::Result<()> {
        let service = service()?;
        let globals = globals(&service);
        let mapper = TypeMapper::new(&service.schemas);
        let method = service.find_method("posts.delete").expect("posts.delete exists");
        let binding = MethodBinding::new(method, "delete", vec!["posts"], &globals);
        let mut got = String::new();
        binding.emit_functions(&mut got, &mapper)?;
        assert!(got.contains(") -> crate::Result<()> {"), "{got}");
        assert!(got.contains("            .with(\"blogId\", blog_id.into())\n            .with(\"postId\", post_id.into());\n"), "{got}");
        assert!(got.contains(".execute::<serde_json::Value>(\n"), "{got}");
        assert!(got.contains("            .await\n            .map(|_| ())\n"), "{got}");
        Ok(())
    }

    #[test]
    fn repeated_path_free_arguments() {
        let p = ParameterDescriptor::query("part", ParameterType::String)
            .with_required(true)
            .with_repeated(RepeatedEncoding::CommaSeparated);
        assert_eq!(argument_type(&p), "impl IntoIterator<Item = impl Into<String>>");
        assert_eq!(
            argument_value(&p),
            "part.into_iter().map(Into::into).collect::<Vec<String>>()"
        );
        assert_eq!(
            parameter_descriptor(&p),
            "ParameterDescriptor::query(\"part\", ParameterType::String).with_required(true).with_repeated(RepeatedEncoding::CommaSeparated)"
        );
    }
}
