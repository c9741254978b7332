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

//! Emits the client, its resources, and the method descriptors.

use crate::method_binder::{MethodBinding, parameter_descriptor};
use crate::typemap::{TypeMapper, parameter_type};
use crate::util::{HEADER, as_comment, camel_round_trips, field_ident, quote, summary, to_pascal};
use anyhow::Result;
use discovery::{MethodDescriptor, ResourceDescriptor, ServiceDescriptor};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

/// A resource in the generated client.
struct Resource<'a> {
    /// The discovery path, e.g. `["posts"]`.
    path: Vec<&'a str>,
    methods: &'a BTreeMap<String, MethodDescriptor>,
    children: &'a BTreeMap<String, ResourceDescriptor>,
}

impl<'a> Resource<'a> {
    fn type_name(&self) -> String {
        self.path.iter().map(|p| to_pascal(p)).collect()
    }

    fn bindings(&self, globals: &'a BTreeSet<String>) -> Vec<MethodBinding<'a>> {
        self.methods
            .iter()
            .map(|(name, m)| MethodBinding::new(m, name, self.path.clone(), globals))
            .collect()
    }
}

/// Lists the resources depth first, in name order.
fn resources(service: &ServiceDescriptor) -> Vec<Resource<'_>> {
    fn visit<'a>(
        parent: &[&'a str],
        name: &'a str,
        r: &'a ResourceDescriptor,
        out: &mut Vec<Resource<'a>>,
    ) {
        let mut path = parent.to_vec();
        path.push(name);
        out.push(Resource {
            path: path.clone(),
            methods: &r.methods,
            children: &r.resources,
        });
        for (n, child) in &r.resources {
            visit(&path, n, child, out);
        }
    }
    let mut out = Vec::new();
    for (n, r) in &service.resources {
        visit(&[], n, r, &mut out);
    }
    out
}

fn globals(service: &ServiceDescriptor) -> BTreeSet<String> {
    service.parameters.iter().map(|p| p.name.clone()).collect()
}

/// The name of the client struct, e.g. `Blogger` or `YouTube`.
pub fn client_name(service: &ServiceDescriptor) -> String {
    let canonical = service
        .title
        .as_deref()
        .and_then(|t| t.split_whitespace().next())
        .filter(|t| t.to_lowercase() == service.name.to_lowercase());
    match canonical {
        Some(t) => to_pascal(t),
        None => to_pascal(&service.name),
    }
}

/// The constant name for an OAuth2 scope URL.
pub fn scope_const(scope: &str) -> String {
    let tail = match scope.split_once("/auth/") {
        Some((_, t)) => t,
        None => scope
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or(scope),
    };
    tail.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
        .collect()
}

/// Generates `lib.rs`.
pub fn emit_lib(service: &ServiceDescriptor) -> Result<String> {
    let mut b = String::new();
    writeln!(b, "{HEADER}")?;
    let title = service.title.as_deref().unwrap_or(&service.name);
    writeln!(b, "//! Google APIs Client Library for Rust - {title}")?;
    if let Some(d) = &service.description {
        writeln!(b, "//!")?;
        b.push_str(&as_comment("", d)?.replace("///", "//!"));
    }
    writeln!(b, "//!")?;
    writeln!(
        b,
        "//! This crate contains the types and functions to interact with the {title}."
    )?;
    writeln!(
        b,
        "//! Most applications will use the structs defined in the [client] module."
    )?;
    if let Some(link) = &service.documentation_link {
        writeln!(b, "//!")?;
        writeln!(b, "//! More information about the service at <{link}>.")?;
    }
    writeln!(b)?;
    writeln!(b, "pub use gax::Result;")?;
    writeln!(b, "pub use gax::error::Error;")?;
    writeln!(b)?;
    writeln!(b, "pub mod client;")?;
    writeln!(b, "pub mod model;")?;
    writeln!(b)?;
    writeln!(b, "mod descriptors;")?;
    Ok(b)
}

/// Generates `descriptors.rs`.
pub fn emit_descriptors(service: &ServiceDescriptor) -> Result<String> {
    let globals = globals(service);
    let mut b = String::new();
    writeln!(b, "{HEADER}")?;
    writeln!(b, "//! The descriptors for each method in the service.")?;
    writeln!(b)?;
    let repeated = service
        .parameters
        .iter()
        .chain(service.all_methods().into_iter().flat_map(|m| m.parameters.iter()))
        .any(|p| p.is_repeated());
    if repeated {
        writeln!(
            b,
            "use discovery::{{HttpMethod, MethodDescriptor, ParameterDescriptor, ParameterType, RepeatedEncoding}};"
        )?;
    } else {
        writeln!(
            b,
            "use discovery::{{HttpMethod, MethodDescriptor, ParameterDescriptor, ParameterType}};"
        )?;
    }
    writeln!(b, "use std::sync::LazyLock;")?;
    writeln!(b)?;
    writeln!(b, "/// The parameters accepted by every method.")?;
    writeln!(
        b,
        "static STANDARD_PARAMETERS: LazyLock<Vec<ParameterDescriptor>> = LazyLock::new(|| {{"
    )?;
    writeln!(b, "    vec![")?;
    for p in &service.parameters {
        writeln!(b, "        {},", parameter_descriptor(p))?;
    }
    writeln!(b, "    ]")?;
    writeln!(b, "}});")?;
    writeln!(b)?;
    writeln!(
        b,
        "fn with_standard_parameters(mut method: MethodDescriptor) -> MethodDescriptor {{"
    )?;
    writeln!(b, "    for p in STANDARD_PARAMETERS.iter() {{")?;
    writeln!(b, "        if method.parameter(&p.name).is_none() {{")?;
    writeln!(b, "            method.parameters.push(p.clone());")?;
    writeln!(b, "        }}")?;
    writeln!(b, "    }}")?;
    writeln!(b, "    method")?;
    writeln!(b, "}}")?;

    let top = Resource {
        path: Vec::new(),
        methods: &service.methods,
        children: &service.resources,
    };
    for binding in top.bindings(&globals) {
        writeln!(b)?;
        binding.emit_descriptor(&mut b)?;
    }
    for r in resources(service) {
        for binding in r.bindings(&globals) {
            writeln!(b)?;
            binding.emit_descriptor(&mut b)?;
        }
    }
    Ok(b)
}

/// Generates `client.rs`.
pub fn emit_client(
    service: &ServiceDescriptor,
    mapper: &TypeMapper,
    lib_name: &str,
) -> Result<String> {
    let globals = globals(service);
    let client = client_name(service);
    let title = service.title.as_deref().unwrap_or(&service.name);
    let mut b = String::new();
    writeln!(b, "{HEADER}")?;
    writeln!(
        b,
        "//! The [{client}] client, its resources, and the options for each method."
    )?;
    writeln!(b)?;
    writeln!(b, "use crate::descriptors;")?;
    writeln!(b, "use crate::model;")?;
    writeln!(b, "use gax::parameter_bag::ParameterBag;")?;
    writeln!(b)?;

    // The client struct.
    writeln!(b, "/// Implements a client for the {title}.")?;
    if let Some(d) = &service.description {
        writeln!(b, "///")?;
        b.push_str(&as_comment("", d)?);
    }
    writeln!(b, "///")?;
    writeln!(b, "/// # Example")?;
    writeln!(b, "/// ```no_run")?;
    writeln!(b, "/// # async fn sample() -> anyhow::Result<()> {{")?;
    writeln!(b, "/// use {lib_name}::client::{client};")?;
    writeln!(b, "/// let client = {client}::builder().build().await?;")?;
    writeln!(b, "/// # Ok(()) }}")?;
    writeln!(b, "/// ```")?;
    writeln!(b, "///")?;
    writeln!(b, "/// # Configuration")?;
    writeln!(b, "///")?;
    writeln!(
        b,
        "/// To configure `{client}` use the `with_*` methods in the type returned by"
    )?;
    writeln!(
        b,
        "/// [builder()][{client}::builder]. The default configuration uses the"
    )?;
    writeln!(
        b,
        "/// [DEFAULT_ENDPOINT][{client}::DEFAULT_ENDPOINT], sends no credentials, and"
    )?;
    writeln!(b, "/// retries transient errors, up to five attempts per call.")?;
    writeln!(b, "///")?;
    writeln!(b, "/// # Pooling and Cloning")?;
    writeln!(b, "///")?;
    writeln!(
        b,
        "/// `{client}` holds a connection pool internally, it is advised to"
    )?;
    writeln!(
        b,
        "/// create one and then reuse it. You do not need to wrap `{client}` in"
    )?;
    writeln!(
        b,
        "/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it"
    )?;
    writeln!(b, "/// already uses an `Arc` internally.")?;
    writeln!(b, "#[derive(Clone, Debug)]")?;
    writeln!(b, "pub struct {client} {{")?;
    writeln!(b, "    executor: gax::executor::RequestExecutor,")?;
    writeln!(b, "}}")?;
    writeln!(b)?;
    writeln!(b, "impl {client} {{")?;
    writeln!(b, "    /// The service endpoint used when none is configured.")?;
    writeln!(
        b,
        "    pub const DEFAULT_ENDPOINT: &str = {};",
        quote(&service.base_url())
    )?;
    for scope in &service.scopes {
        writeln!(b)?;
        writeln!(b, "    /// The `{scope}` OAuth2 scope.")?;
        writeln!(
            b,
            "    pub const {}: &str = {};",
            scope_const(scope),
            quote(scope)
        )?;
    }
    writeln!(b)?;
    writeln!(b, "    /// Returns a builder for [{client}].")?;
    writeln!(b, "    ///")?;
    writeln!(b, "    /// ```no_run")?;
    writeln!(b, "    /// # async fn sample() -> anyhow::Result<()> {{")?;
    writeln!(b, "    /// # use {lib_name}::client::{client};")?;
    writeln!(b, "    /// let client = {client}::builder()")?;
    writeln!(
        b,
        "    ///     .with_credentials(gax::credentials::ApiKey::new(\"my-api-key\"))"
    )?;
    writeln!(b, "    ///     .build()")?;
    writeln!(b, "    ///     .await?;")?;
    writeln!(b, "    /// # Ok(()) }}")?;
    writeln!(b, "    /// ```")?;
    writeln!(b, "    pub fn builder() -> ClientBuilder {{")?;
    writeln!(
        b,
        "        gax::client_builder::internal::new_builder(client_factory::Factory)"
    )?;
    writeln!(b, "    }}")?;
    writeln!(b)?;
    writeln!(b, "    /// Creates a new client from the provided configuration.")?;
    writeln!(
        b,
        "    pub fn from_config(config: gax::options::ClientConfig) -> Self {{"
    )?;
    writeln!(b, "        Self {{")?;
    writeln!(
        b,
        "            executor: gax::executor::RequestExecutor::new(config, Self::DEFAULT_ENDPOINT),"
    )?;
    writeln!(b, "        }}")?;
    writeln!(b, "    }}")?;
    for name in service.resources.keys() {
        writeln!(b)?;
        emit_accessor(&mut b, &[name.as_str()])?;
    }
    let top = Resource {
        path: Vec::new(),
        methods: &service.methods,
        children: &service.resources,
    };
    for binding in top.bindings(&globals) {
        writeln!(b)?;
        binding.emit_functions(&mut b, mapper)?;
    }
    writeln!(b, "}}")?;
    writeln!(b)?;

    writeln!(b, "/// A builder for [{client}].")?;
    writeln!(
        b,
        "pub type ClientBuilder = gax::client_builder::ClientBuilder<client_factory::Factory>;"
    )?;
    writeln!(b)?;
    writeln!(b, "pub(crate) mod client_factory {{")?;
    writeln!(b, "    pub struct Factory;")?;
    writeln!(
        b,
        "    impl gax::client_builder::internal::ClientFactory for Factory {{"
    )?;
    writeln!(b, "        type Client = super::{client};")?;
    writeln!(b, "        async fn build(")?;
    writeln!(b, "            self,")?;
    writeln!(b, "            config: gax::options::ClientConfig,")?;
    writeln!(
        b,
        "        ) -> gax::client_builder::Result<Self::Client> {{"
    )?;
    writeln!(b, "            Ok(Self::Client::from_config(config))")?;
    writeln!(b, "        }}")?;
    writeln!(b, "    }}")?;
    writeln!(b, "}}")?;

    writeln!(b)?;
    emit_standard_parameters(&mut b, service)?;

    for r in resources(service) {
        writeln!(b)?;
        emit_resource(&mut b, &r, &client, mapper, &globals)?;
    }

    for binding in top.bindings(&globals) {
        writeln!(b)?;
        binding.emit_options(&mut b, &client)?;
    }
    for r in resources(service) {
        for binding in r.bindings(&globals) {
            writeln!(b)?;
            binding.emit_options(&mut b, &r.type_name())?;
        }
    }
    Ok(b)
}

fn emit_accessor(b: &mut String, path: &[&str]) -> Result<()> {
    let Some(last) = path.last() else {
        return Ok(());
    };
    let type_name: String = path.iter().map(|p| to_pascal(p)).collect();
    writeln!(b, "    /// The `{last}` resource.")?;
    writeln!(
        b,
        "    pub fn {}(&self) -> {type_name} {{",
        field_ident(last)
    )?;
    writeln!(b, "        {type_name} {{")?;
    writeln!(b, "            executor: self.executor.clone(),")?;
    writeln!(b, "        }}")?;
    writeln!(b, "    }}")?;
    Ok(())
}

fn emit_resource(
    b: &mut String,
    r: &Resource,
    client: &str,
    mapper: &TypeMapper,
    globals: &BTreeSet<String>,
) -> Result<()> {
    let name = r.type_name();
    let dotted = r.path.join(".");
    tracing::debug!(resource = %dotted, methods = r.methods.len(), "emitting resource");
    let parent = match r.path.as_slice() {
        [_] => client.to_string(),
        [parents @ .., _] => parents.iter().map(|p| to_pascal(p)).collect(),
        [] => client.to_string(),
    };
    let accessor = field_ident(r.path.last().copied().unwrap_or_default());
    writeln!(b, "/// Implements the `{dotted}` resource.")?;
    writeln!(b, "///")?;
    writeln!(
        b,
        "/// Use [{parent}::{}] to create instances of this type.",
        accessor.trim_start_matches("r#")
    )?;
    writeln!(b, "#[derive(Clone, Debug)]")?;
    writeln!(b, "pub struct {name} {{")?;
    writeln!(b, "    executor: gax::executor::RequestExecutor,")?;
    writeln!(b, "}}")?;
    writeln!(b)?;
    writeln!(b, "impl {name} {{")?;
    let mut first = true;
    for child in r.children.keys() {
        if !first {
            writeln!(b)?;
        }
        first = false;
        let mut path = r.path.clone();
        path.push(child.as_str());
        emit_accessor(b, &path)?;
    }
    for binding in r.bindings(globals) {
        if !first {
            writeln!(b)?;
        }
        first = false;
        binding.emit_functions(b, mapper)?;
    }
    writeln!(b, "}}")?;
    Ok(())
}

fn emit_standard_parameters(b: &mut String, service: &ServiceDescriptor) -> Result<()> {
    writeln!(b, "/// The parameters accepted by all the methods in the service.")?;
    writeln!(b, "#[derive(Clone, Debug, Default, serde::Serialize)]")?;
    writeln!(b, "#[serde(rename_all = \"camelCase\")]")?;
    writeln!(b, "pub struct StandardParameters {{")?;
    for p in &service.parameters {
        let mut doc = p.description.as_deref().map(summary).unwrap_or_default();
        if !p.enum_values.is_empty() {
            let values: Vec<String> = p.enum_values.iter().map(|v| format!("`{v}`")).collect();
            if !doc.is_empty() {
                doc.push_str("\n\n");
            }
            doc.push_str(&format!("Possible values: {}.", values.join(", ")));
        }
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
    writeln!(b, "}}")?;
    Ok(())
}

/// Generates the `Cargo.toml` file for the crate.
pub fn emit_cargo(service: &ServiceDescriptor, crate_name: &str, lib_name: &str) -> Result<String> {
    let title = service.title.as_deref().unwrap_or(&service.name);
    let mut b = String::new();
    for line in HEADER.lines() {
        let line = line.trim_start_matches("//");
        if line.is_empty() {
            writeln!(b, "#")?;
        } else {
            writeln!(b, "#{line}")?;
        }
    }
    writeln!(b)?;
    writeln!(b, "[package]")?;
    writeln!(b, "name        = {}", quote(crate_name))?;
    writeln!(b, "version     = \"0.1.0\"")?;
    writeln!(
        b,
        "description = {}",
        quote(&format!("Google API Client Libraries for Rust - {title}"))
    )?;
    writeln!(b, "publish     = false")?;
    writeln!(b, "# Inherit other attributes from the workspace.")?;
    writeln!(b, "authors.workspace      = true")?;
    writeln!(b, "categories.workspace   = true")?;
    writeln!(b, "edition.workspace      = true")?;
    writeln!(b, "keywords.workspace     = true")?;
    writeln!(b, "license.workspace      = true")?;
    writeln!(b, "repository.workspace   = true")?;
    writeln!(b, "rust-version.workspace = true")?;
    writeln!(b)?;
    writeln!(b, "[lib]")?;
    writeln!(b, "name = {}", quote(lib_name))?;
    writeln!(b)?;
    writeln!(b, "[lints]")?;
    writeln!(b, "workspace = true")?;
    writeln!(b)?;
    writeln!(b, "[dependencies]")?;
    writeln!(b, "discovery.workspace  = true")?;
    writeln!(b, "gax.workspace        = true")?;
    writeln!(
        b,
        "serde                = {{ workspace = true, features = [\"std\"] }}"
    )?;
    writeln!(
        b,
        "serde_json           = {{ workspace = true, features = [\"std\"] }}"
    )?;
    writeln!(b, "serde_with.workspace = true")?;
    writeln!(b)?;
    writeln!(b, "[dev-dependencies]")?;
    writeln!(
        b,
        "anyhow                      = {{ workspace = true, features = [\"std\"] }}"
    )?;
    writeln!(b, "async-trait.workspace       = true")?;
    writeln!(
        b,
        "futures                     = {{ workspace = true, features = [\"std\"] }}"
    )?;
    writeln!(b, "http.workspace              = true")?;
    writeln!(b, "pretty_assertions.workspace = true")?;
    writeln!(b, "test-case.workspace         = true")?;
    writeln!(
        b,
        "tokio                       = {{ workspace = true, features = [\"macros\", \"rt-multi-thread\"] }}"
    )?;
    Ok(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use discovery::load_service;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    fn service() -> anyhow::Result<ServiceDescriptor> {
        let doc = json!({
            "name": "youtube", "version": "v3", "title": "YouTube Data API v3",
            "rootUrl": "https://youtube.googleapis.com/", "servicePath": "",
            "auth": { "oauth2": { "scopes": {
                "https://www.googleapis.com/auth/youtube": { "description": "Manage your account" },
                "https://www.googleapis.com/auth/youtube.force-ssl": { "description": "See and edit" },
            }}},
            "parameters": {
                "oauth_token": { "type": "string", "location": "query", "description": "OAuth 2.0 token for the current user." },
                "prettyPrint": { "type": "boolean", "location": "query", "default": "true" },
            },
            "schemas": {
                "Comment": { "type": "object", "properties": { "id": { "type": "string" } } },
            },
            "resources": {
                "comments": {
                    "methods": {
                        "delete": {
                            "id": "youtube.comments.delete", "path": "youtube/v3/comments",
                            "httpMethod": "DELETE",
                            "parameterOrder": ["id"],
                            "parameters": {
                                "id": { "type": "string", "location": "query", "required": true },
                            },
                        },
                    },
                    "resources": {
                        "replies": { "methods": {
                            "get": {
                                "id": "youtube.comments.replies.get", "path": "youtube/v3/replies",
                                "httpMethod": "GET",
                                "response": { "$ref": "Comment" },
                            },
                        }},
                    },
                },
            },
        });
        Ok(load_service(&doc.to_string())?)
    }

    #[test]
    fn names() -> anyhow::Result<()> {
        let service = service()?;
        assert_eq!(client_name(&service), "YouTube");
        Ok(())
    }

    #[test_case("https://www.googleapis.com/auth/blogger", "BLOGGER")]
    #[test_case("https://www.googleapis.com/auth/blogger.readonly", "BLOGGER_READONLY")]
    #[test_case("https://www.googleapis.com/auth/youtube.force-ssl", "YOUTUBE_FORCE_SSL")]
    #[test_case("https://mail.google.com/", "MAIL_GOOGLE_COM")]
    fn scopes(input: &str, want: &str) {
        assert_eq!(scope_const(input), want);
    }

    #[test]
    fn lib() -> anyhow::Result<()> {
        let got = emit_lib(&service()?)?;
        assert!(got.starts_with(HEADER), "{got}");
        assert!(got.contains("//! Google APIs Client Library for Rust - YouTube Data API v3\n"), "{got}");
        assert!(got.contains("pub mod client;\npub mod model;\n\nmod descriptors;\n"), "{got}");
        Ok(())
    }

    #[test]
    fn descriptors() -> anyhow::Result<()> {
        let got = emit_descriptors(&service()?)?;
        assert!(got.contains("        ParameterDescriptor::query(\"oauth_token\", ParameterType::String),\n"), "{got}");
        assert!(got.contains("pub(crate) static COMMENTS_DELETE: LazyLock<MethodDescriptor>"), "{got}");
        assert!(got.contains("pub(crate) static COMMENTS_REPLIES_GET: LazyLock<MethodDescriptor>"), "{got}");
        assert!(
            got.contains("            .with_parameter(ParameterDescriptor::query(\"id\", ParameterType::String).with_required(true)),\n"),
            "{got}"
        );
        Ok(())
    }

    #[test]
    fn client() -> anyhow::Result<()> {
        let service = service()?;
        let mapper = TypeMapper::new(&service.schemas);
        let got = emit_client(&service, &mapper, "youtube_v3")?;
        assert!(got.contains("pub struct YouTube {\n"), "{got}");
        assert!(got.contains("    pub const DEFAULT_ENDPOINT: &str = \"https://youtube.googleapis.com/\";\n"), "{got}");
        assert!(got.contains("    pub const YOUTUBE_FORCE_SSL: &str = \"https://www.googleapis.com/auth/youtube.force-ssl\";\n"), "{got}");
        assert!(got.contains("    pub fn comments(&self) -> Comments {\n"), "{got}");
        assert!(got.contains("pub struct Comments {\n"), "{got}");
        assert!(got.contains("    pub fn replies(&self) -> CommentsReplies {\n"), "{got}");
        assert!(got.contains("/// Use [Comments::replies] to create instances of this type.\n"), "{got}");
        assert!(got.contains("pub struct CommentsRepliesGetOptions {\n"), "{got}");
        assert!(got.contains("    #[serde(rename = \"oauth_token\")]\n    pub oauth_token: Option<String>,\n"), "{got}");
        assert!(got.contains("    pub pretty_print: Option<bool>,\n"), "{got}");
        assert!(got.contains("use youtube_v3::client::YouTube;"), "{got}");
        Ok(())
    }

    #[test]
    fn cargo() -> anyhow::Result<()> {
        let got = emit_cargo(&service()?, "google-api-youtube-v3", "youtube_v3")?;
        assert!(got.starts_with("# Copyright 2025 Google LLC\n#\n"), "{got}");
        assert!(got.contains("name        = \"google-api-youtube-v3\"\n"), "{got}");
        assert!(got.contains("[lib]\nname = \"youtube_v3\"\n"), "{got}");
        Ok(())
    }
}
