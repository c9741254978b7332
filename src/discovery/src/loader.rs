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

use crate::SchemaParseError;
use crate::descriptor::*;
use crate::document::{self, Document};
use crate::registry::*;
use std::collections::BTreeMap;

type Result<T> = std::result::Result<T, SchemaParseError>;

/// Loads and validates a discovery document.
///
/// All schema references are resolved, all path templates are checked
/// against the method parameters, and the schemas are checked for recursion
/// without a base case.
///
/// # Example
/// ```
/// # use discovery::load_service;
/// let service = load_service(r#"{
///     "name": "blogger", "version": "v3",
///     "rootUrl": "https://www.googleapis.com/", "servicePath": "blogger/v3/",
///     "resources": { "blogs": { "methods": { "get": {
///         "id": "blogger.blogs.get", "path": "blogs/{blogId}", "httpMethod": "GET",
///         "parameters": { "blogId": { "type": "string", "location": "path", "required": true } },
///         "parameterOrder": ["blogId"]
///     } } } }
/// }"#)?;
/// assert!(service.find_method("blogs.get").is_some());
/// # Ok::<(), discovery::SchemaParseError>(())
/// ```
pub fn load_service(json: &str) -> Result<ServiceDescriptor> {
    let document: Document = serde_json::from_str(json)?;
    from_document(&document)
}

/// Like [load_service], reading from a byte slice.
pub fn load_service_from_slice(json: &[u8]) -> Result<ServiceDescriptor> {
    let document: Document = serde_json::from_slice(json)?;
    from_document(&document)
}

/// Validates an already parsed discovery document.
pub fn from_document(document: &Document) -> Result<ServiceDescriptor> {
    let schemas = SchemaLoader::default().load(&document.schemas)?;
    if let Some(cycle) = schemas.find_cycle(true) {
        return Err(SchemaParseError::UnboundedRecursion {
            cycle: cycle.iter().map(|id| schemas.name(*id).to_string()).collect(),
        });
    }

    let global = document
        .parameters
        .iter()
        .map(|(name, p)| parameter(&format!("service {}", document.name), name, p))
        .collect::<Result<Vec<_>>>()?;
    let context = MethodContext {
        service: &document.name,
        schemas: &schemas,
        global: &global,
    };
    let methods = document
        .methods
        .iter()
        .map(|(name, m)| Ok((name.clone(), context.method(&[], name, m)?)))
        .collect::<Result<BTreeMap<_, _>>>()?;
    let resources = document
        .resources
        .iter()
        .map(|(name, r)| Ok((name.clone(), context.resource(&[], name, r)?)))
        .collect::<Result<BTreeMap<_, _>>>()?;

    let scopes = document
        .auth
        .as_ref()
        .and_then(|a| a.oauth2.as_ref())
        .map(|o| o.scopes.keys().cloned().collect())
        .unwrap_or_default();

    let service = ServiceDescriptor {
        name: document.name.clone(),
        version: document.version.clone(),
        title: document.title.clone(),
        description: document.description.clone(),
        documentation_link: document.documentation_link.clone(),
        root_url: document.root_url.clone(),
        service_path: document.service_path.clone(),
        scopes,
        parameters: global,
        methods,
        resources,
        schemas,
    };
    tracing::debug!(
        service = %service.name,
        version = %service.version,
        schemas = service.schemas.len(),
        methods = service.all_methods().len(),
        "loaded service description"
    );
    Ok(service)
}

#[derive(Default)]
struct SchemaLoader {
    registry: SchemaRegistry,
}

impl SchemaLoader {
    fn load(mut self, schemas: &BTreeMap<String, document::Schema>) -> Result<SchemaRegistry> {
        // Reserve all the names first, references may point forward.
        for name in schemas.keys() {
            self.registry.reserve(name);
        }
        for (name, schema) in schemas {
            let id = self.registry.reserve(name);
            let descriptor = self.top_level(name, schema)?;
            self.registry.define(id, descriptor);
        }
        Ok(self.registry)
    }

    fn top_level(&mut self, name: &str, schema: &document::Schema) -> Result<SchemaDescriptor> {
        let is_object = match schema.schema_type.as_deref() {
            Some("object") => true,
            None => schema.schema_ref.is_none(),
            Some(_) => false,
        };
        if !is_object || schema.additional_properties.is_some() {
            let alias = self.field_type(name, "", schema)?;
            return Ok(SchemaDescriptor {
                name: name.to_string(),
                description: schema.description.clone(),
                fields: Vec::new(),
                kind: SchemaKind::Alias(alias),
            });
        }
        let mut descriptor = self.record(name, schema)?;
        descriptor.kind = collection_kind(&descriptor, schema)?;
        Ok(descriptor)
    }

    fn record(&mut self, name: &str, schema: &document::Schema) -> Result<SchemaDescriptor> {
        let fields = schema
            .properties
            .iter()
            .map(|(field_name, field)| {
                Ok(FieldDescriptor {
                    name: field_name.clone(),
                    field_type: self.field_type(name, field_name, field)?,
                    required: field.required.unwrap_or(false),
                    read_only: field.read_only.unwrap_or(false),
                    description: field.description.clone(),
                    enum_values: field.enum_values.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(SchemaDescriptor {
            name: name.to_string(),
            description: schema.description.clone(),
            fields,
            kind: SchemaKind::Record,
        })
    }

    fn field_type(
        &mut self,
        parent: &str,
        field_name: &str,
        schema: &document::Schema,
    ) -> Result<FieldType> {
        let context = || format!("schema `{parent}` field `{field_name}`");
        if let Some(target) = &schema.schema_ref {
            return self
                .registry
                .lookup(target)
                .map(FieldType::Ref)
                .ok_or_else(|| SchemaParseError::UnresolvedReference {
                    context: context(),
                    target: target.clone(),
                });
        }
        let Some(schema_type) = schema.schema_type.as_deref() else {
            return Err(SchemaParseError::MissingField {
                context: context(),
                field: "type",
            });
        };
        match schema_type {
            "any" => Ok(FieldType::Any),
            "array" => {
                let items = schema
                    .items
                    .as_ref()
                    .ok_or_else(|| SchemaParseError::MissingField {
                        context: context(),
                        field: "items",
                    })?;
                Ok(FieldType::Array(Box::new(
                    self.field_type(parent, field_name, items)?,
                )))
            }
            "object" => {
                if let Some(values) = &schema.additional_properties {
                    return Ok(FieldType::Map(Box::new(
                        self.field_type(parent, field_name, values)?,
                    )));
                }
                self.inline(parent, field_name, schema).map(FieldType::Ref)
            }
            t => Primitive::from_type_format(t, schema.format.as_deref())
                .map(FieldType::Primitive)
                .ok_or_else(|| SchemaParseError::UnknownType {
                    context: context(),
                    type_name: t.to_string(),
                }),
        }
    }

    /// Registers an anonymous object schema as `Parent` + `FieldName`.
    fn inline(
        &mut self,
        parent: &str,
        field_name: &str,
        schema: &document::Schema,
    ) -> Result<SchemaId> {
        let base = format!("{parent}{}", title_case(field_name));
        let mut name = base.clone();
        let mut suffix = 1;
        while self.registry.contains(&name) {
            suffix += 1;
            name = format!("{base}{suffix}");
        }
        let id = self.registry.reserve(&name);
        let mut descriptor = self.record(&name, schema)?;
        descriptor.kind = collection_kind(&descriptor, schema)?;
        self.registry.define(id, descriptor);
        Ok(id)
    }
}

/// Determines if a record is a list wrapper.
fn collection_kind(descriptor: &SchemaDescriptor, schema: &document::Schema) -> Result<SchemaKind> {
    let is_array = |name: &str| {
        descriptor
            .field(name)
            .is_some_and(|f| matches!(f.field_type, FieldType::Array(_)))
    };
    if let Some(key) = &schema.collection_key {
        if !is_array(key) {
            return Err(SchemaParseError::InvalidCollection {
                schema: descriptor.name.clone(),
                field: key.clone(),
            });
        }
        return Ok(SchemaKind::Collection { items: key.clone() });
    }
    if is_array("items") {
        return Ok(SchemaKind::Collection {
            items: "items".to_string(),
        });
    }
    Ok(SchemaKind::Record)
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn parameter(context: &str, name: &str, p: &document::Parameter) -> Result<ParameterDescriptor> {
    let location = match p.location.as_deref() {
        Some("path") => ParameterLocation::Path,
        Some("query") => ParameterLocation::Query,
        Some(other) => {
            return Err(SchemaParseError::InvalidLocation {
                method: context.to_string(),
                parameter: name.to_string(),
                location: other.to_string(),
            });
        }
        None => {
            return Err(SchemaParseError::MissingField {
                context: format!("parameter `{name}` in {context}"),
                field: "location",
            });
        }
    };
    let type_name = p.parameter_type.as_deref().unwrap_or("string");
    let parameter_type =
        ParameterType::from_name(type_name).ok_or_else(|| SchemaParseError::UnknownType {
            context: format!("parameter `{name}` in {context}"),
            type_name: type_name.to_string(),
        })?;
    let repeated = match (p.repeated.unwrap_or(false), p.repeated_encoding.as_deref()) {
        (false, _) => None,
        (true, None) => Some(RepeatedEncoding::Multi),
        (true, Some(e)) => Some(RepeatedEncoding::from_name(e).ok_or_else(|| {
            SchemaParseError::InvalidRepeatedEncoding {
                context: format!("parameter `{name}` in {context}"),
                encoding: e.to_string(),
            }
        })?),
    };
    Ok(ParameterDescriptor {
        name: name.to_string(),
        location,
        parameter_type,
        format: p.format.clone(),
        required: p.required.unwrap_or(false),
        repeated,
        enum_values: p.enum_values.clone(),
        default: p.default.clone(),
        description: p.description.clone(),
    })
}

struct MethodContext<'a> {
    service: &'a str,
    schemas: &'a SchemaRegistry,
    global: &'a [ParameterDescriptor],
}

impl MethodContext<'_> {
    fn resource(
        &self,
        parents: &[&str],
        name: &str,
        resource: &document::Resource,
    ) -> Result<ResourceDescriptor> {
        let mut path = parents.to_vec();
        path.push(name);
        let methods = resource
            .methods
            .iter()
            .map(|(n, m)| Ok((n.clone(), self.method(&path, n, m)?)))
            .collect::<Result<BTreeMap<_, _>>>()?;
        let resources = resource
            .resources
            .iter()
            .map(|(n, r)| Ok((n.clone(), self.resource(&path, n, r)?)))
            .collect::<Result<BTreeMap<_, _>>>()?;
        Ok(ResourceDescriptor {
            name: name.to_string(),
            methods,
            resources,
        })
    }

    fn method(
        &self,
        parents: &[&str],
        name: &str,
        method: &document::Method,
    ) -> Result<MethodDescriptor> {
        let id = method.id.clone().unwrap_or_else(|| {
            let mut parts = vec![self.service];
            parts.extend_from_slice(parents);
            parts.push(name);
            parts.join(".")
        });
        let context = format!("method `{id}`");
        let path = method
            .path
            .clone()
            .ok_or_else(|| SchemaParseError::MissingField {
                context: context.clone(),
                field: "path",
            })?;
        let verb = method
            .http_method
            .as_deref()
            .ok_or_else(|| SchemaParseError::MissingField {
                context: context.clone(),
                field: "httpMethod",
            })?;
        let http_method =
            HttpMethod::from_name(verb).ok_or_else(|| SchemaParseError::InvalidHttpMethod {
                method: id.clone(),
                verb: verb.to_string(),
            })?;

        let mut declared = method
            .parameters
            .iter()
            .map(|(n, p)| Ok((n.as_str(), parameter(&context, n, p)?)))
            .collect::<Result<BTreeMap<_, _>>>()?;
        let mut parameters = Vec::with_capacity(declared.len() + self.global.len());
        for n in &method.parameter_order {
            match declared.remove(n.as_str()) {
                Some(p) if p.required => parameters.push(p),
                _ => {
                    return Err(SchemaParseError::InvalidParameterOrder {
                        method: id.clone(),
                        parameter: n.clone(),
                    });
                }
            }
        }
        let (required, optional): (Vec<_>, Vec<_>) =
            declared.into_values().partition(|p| p.required);
        parameters.extend(required);
        parameters.extend(optional);
        for g in self.global {
            if parameters.iter().all(|p| p.name != g.name) {
                parameters.push(ParameterDescriptor {
                    required: false,
                    ..g.clone()
                });
            }
        }

        let resolve = |r: &Option<document::SchemaRef>, what: &str| -> Result<Option<String>> {
            let Some(target) = r.as_ref().and_then(|r| r.schema_ref.as_ref()) else {
                return Ok(None);
            };
            if self.schemas.contains(target) {
                Ok(Some(target.clone()))
            } else {
                Err(SchemaParseError::UnresolvedReference {
                    context: format!("the {what} of {context}"),
                    target: target.clone(),
                })
            }
        };

        let descriptor = MethodDescriptor {
            id,
            http_method,
            path,
            parameters,
            request: resolve(&method.request, "request")?,
            response: resolve(&method.response, "response")?,
            scopes: method.scopes.clone(),
            description: method.description.clone(),
        };
        descriptor.check_path_parameters()?;
        Ok(descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn service(extra: Value) -> Value {
        let mut doc = json!({
            "name": "test",
            "version": "v1",
            "rootUrl": "https://test.googleapis.com/",
            "servicePath": "test/v1/",
        });
        if let (Some(d), Some(e)) = (doc.as_object_mut(), extra.as_object()) {
            d.extend(e.clone());
        }
        doc
    }

    fn load(doc: Value) -> Result<ServiceDescriptor> {
        load_service(&doc.to_string())
    }

    fn get_method(parameters: Value, order: Value, path: &str) -> Value {
        service(json!({
            "resources": { "widgets": { "methods": { "get": {
                "id": "test.widgets.get",
                "path": path,
                "httpMethod": "GET",
                "parameters": parameters,
                "parameterOrder": order,
            }}}}
        }))
    }

    #[test]
    fn malformed() {
        let got = load_service("{ not json");
        assert!(matches!(got, Err(SchemaParseError::Malformed(_))), "{got:?}");
    }

    #[test]
    fn parameter_order() -> anyhow::Result<()> {
        let doc = get_method(
            json!({
                "name": { "type": "string", "location": "path", "required": true },
                "parent": { "type": "string", "location": "path", "required": true },
                "view": { "type": "string", "location": "query" },
                "force": { "type": "boolean", "location": "query", "required": true },
            }),
            json!(["parent", "name"]),
            "p/{parent}/w/{name}",
        );
        let service = load(doc)?;
        let method = service.find_method("widgets.get").expect("method exists");
        let names: Vec<_> = method.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["parent", "name", "force", "view"]);
        Ok(())
    }

    #[test]
    fn parameter_order_optional() {
        let doc = get_method(
            json!({
                "name": { "type": "string", "location": "path", "required": true },
                "view": { "type": "string", "location": "query" },
            }),
            json!(["name", "view"]),
            "w/{name}",
        );
        let got = load(doc);
        assert!(
            matches!(got, Err(SchemaParseError::InvalidParameterOrder { .. })),
            "{got:?}"
        );
    }

    #[test]
    fn path_mismatch() {
        let doc = get_method(
            json!({ "name": { "type": "string", "location": "path", "required": true } }),
            json!(["name"]),
            "w/{id}",
        );
        let got = load(doc);
        assert!(matches!(got, Err(SchemaParseError::PathMismatch { .. })), "{got:?}");
    }

    #[test]
    fn invalid_location() {
        let doc = get_method(
            json!({ "name": { "type": "string", "location": "header" } }),
            json!([]),
            "w",
        );
        let got = load(doc);
        assert!(
            matches!(&got, Err(SchemaParseError::InvalidLocation { location, .. }) if location == "header"),
            "{got:?}"
        );
    }

    #[test]
    fn missing_location() {
        let doc = get_method(json!({ "name": { "type": "string" } }), json!([]), "w");
        let got = load(doc);
        assert!(
            matches!(got, Err(SchemaParseError::MissingField { field: "location", .. })),
            "{got:?}"
        );
    }

    #[test]
    fn missing_path() {
        let doc = service(json!({
            "resources": { "widgets": { "methods": { "get": { "httpMethod": "GET" } } } }
        }));
        let got = load(doc);
        assert!(
            matches!(got, Err(SchemaParseError::MissingField { field: "path", .. })),
            "{got:?}"
        );
    }

    #[test]
    fn repeated_encoding() -> anyhow::Result<()> {
        let doc = get_method(
            json!({
                "part": { "type": "string", "location": "query", "required": true, "repeated": true, "repeatedEncoding": "csv" },
                "tag": { "type": "string", "location": "query", "repeated": true },
                "view": { "type": "string", "location": "query" },
            }),
            json!(["part"]),
            "w",
        );
        let service = load(doc)?;
        let method = service.find_method("test.widgets.get").expect("method exists");
        let get = |n: &str| method.parameter(n).and_then(|p| p.repeated);
        assert_eq!(get("part"), Some(RepeatedEncoding::CommaSeparated));
        assert_eq!(get("tag"), Some(RepeatedEncoding::Multi));
        assert_eq!(get("view"), None);
        Ok(())
    }

    #[test]
    fn bad_repeated_encoding() {
        let doc = get_method(
            json!({ "tag": { "type": "string", "location": "query", "repeated": true, "repeatedEncoding": "tsv" } }),
            json!([]),
            "w",
        );
        let got = load(doc);
        assert!(
            matches!(got, Err(SchemaParseError::InvalidRepeatedEncoding { .. })),
            "{got:?}"
        );
    }

    #[test]
    fn global_parameters() -> anyhow::Result<()> {
        let mut doc = get_method(
            json!({ "fields": { "type": "string", "location": "query", "description": "override" } }),
            json!([]),
            "w",
        );
        doc["parameters"] = json!({
            "fields": { "type": "string", "location": "query" },
            "quotaUser": { "type": "string", "location": "query" },
        });
        let service = load(doc)?;
        let method = service.find_method("widgets.get").expect("method exists");
        let names: Vec<_> = method.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["fields", "quotaUser"]);
        let names: Vec<_> = service.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["fields", "quotaUser"]);
        assert_eq!(
            method.parameter("fields").and_then(|p| p.description.as_deref()),
            Some("override")
        );
        Ok(())
    }

    #[test]
    fn unresolved_reference() {
        let doc = service(json!({
            "schemas": { "Post": { "type": "object", "properties": {
                "blog": { "$ref": "Blogg" }
            }}}
        }));
        let got = load(doc);
        assert!(
            matches!(&got, Err(SchemaParseError::UnresolvedReference { target, .. }) if target == "Blogg"),
            "{got:?}"
        );
    }

    #[test]
    fn unresolved_response() {
        let doc = service(json!({
            "methods": { "get": {
                "path": "w", "httpMethod": "GET", "response": { "$ref": "Widget" }
            }}
        }));
        let got = load(doc);
        assert!(
            matches!(got, Err(SchemaParseError::UnresolvedReference { .. })),
            "{got:?}"
        );
    }

    #[test]
    fn inline_schemas() -> anyhow::Result<()> {
        let doc = service(json!({
            "schemas": { "Post": { "type": "object", "properties": {
                "author": { "type": "object", "properties": {
                    "image": { "type": "object", "properties": { "url": { "type": "string" } } }
                }},
                "images": { "type": "array", "items": { "type": "object", "properties": {
                    "url": { "type": "string" }
                }}},
                "labels": { "type": "object", "additionalProperties": { "type": "string" } },
                "count": { "type": "string", "format": "int64" },
            }}}
        }));
        let service = load(doc)?;
        let names: Vec<_> = service.schemas.iter().map(|(_, s)| s.name.as_str()).collect();
        assert_eq!(names, vec!["Post", "PostAuthor", "PostAuthorImage", "PostImages"]);
        let post = service.schemas.by_name("Post").expect("Post exists");
        let author = service.schemas.lookup("PostAuthor").expect("PostAuthor exists");
        assert_eq!(
            post.field("author").map(|f| &f.field_type),
            Some(&FieldType::Ref(author))
        );
        assert_eq!(
            post.field("labels").map(|f| &f.field_type),
            Some(&FieldType::Map(Box::new(FieldType::Primitive(Primitive::String))))
        );
        assert_eq!(
            post.field("count").map(|f| &f.field_type),
            Some(&FieldType::Primitive(Primitive::Int64))
        );
        Ok(())
    }

    #[test]
    fn collections() -> anyhow::Result<()> {
        let doc = service(json!({
            "schemas": {
                "Item": { "type": "object", "properties": { "id": { "type": "string" } } },
                "ItemList": { "type": "object", "properties": {
                    "items": { "type": "array", "items": { "$ref": "Item" } },
                    "nextPageToken": { "type": "string" },
                }},
                "Pageviews": { "type": "object", "collectionKey": "counts", "properties": {
                    "counts": { "type": "array", "items": { "type": "string" } },
                }},
            }
        }));
        let service = load(doc)?;
        let list = service.schemas.by_name("ItemList").expect("ItemList exists");
        assert!(list.is_pageable(), "{list:?}");
        let views = service.schemas.by_name("Pageviews").expect("Pageviews exists");
        assert_eq!(
            views.kind,
            SchemaKind::Collection {
                items: "counts".into()
            }
        );
        assert!(!views.is_pageable(), "{views:?}");
        let item = service.schemas.by_name("Item").expect("Item exists");
        assert_eq!(item.kind, SchemaKind::Record);
        Ok(())
    }

    #[test]
    fn invalid_collection_key() {
        let doc = service(json!({
            "schemas": { "List": { "type": "object", "collectionKey": "values", "properties": {
                "values": { "type": "string" }
            }}}
        }));
        let got = load(doc);
        assert!(
            matches!(got, Err(SchemaParseError::InvalidCollection { .. })),
            "{got:?}"
        );
    }

    #[test]
    fn recursive_with_base_case() -> anyhow::Result<()> {
        let doc = service(json!({
            "schemas": {
                "TreeNode": { "type": "object", "properties": {
                    "parent": { "$ref": "TreeNode" },
                    "children": { "type": "array", "items": { "$ref": "TreeNode" } },
                }},
            }
        }));
        let service = load(doc)?;
        let node = service.schemas.lookup("TreeNode").expect("TreeNode exists");
        assert_eq!(
            service.schemas[node].field("parent").map(|f| &f.field_type),
            Some(&FieldType::Ref(node))
        );
        Ok(())
    }

    #[test]
    fn recursive_without_base_case() {
        let doc = service(json!({
            "schemas": {
                "Chicken": { "type": "object", "properties": {
                    "egg": { "$ref": "Egg", "required": true },
                }},
                "Egg": { "type": "object", "properties": {
                    "chicken": { "$ref": "Chicken", "required": true },
                }},
            }
        }));
        let got = load(doc);
        assert!(
            matches!(&got, Err(SchemaParseError::UnboundedRecursion { cycle }) if cycle.len() == 3),
            "{got:?}"
        );
    }

    #[test]
    fn nested_resources() -> anyhow::Result<()> {
        let doc = service(json!({
            "resources": { "projects": {
                "resources": { "widgets": { "methods": { "list": {
                    "path": "v1/{+parent}/widgets",
                    "httpMethod": "GET",
                    "parameters": { "parent": { "type": "string", "location": "path", "required": true } },
                    "parameterOrder": ["parent"],
                }}}}
            }}
        }));
        let service = load(doc)?;
        let method = service
            .find_method("projects.widgets.list")
            .expect("method exists");
        assert_eq!(method.id, "test.projects.widgets.list");
        Ok(())
    }
}
