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

//! Emits the data transfer objects for all the schemas in a service.

use crate::typemap::{TypeMapper, serde_as};
use crate::util::{HEADER, as_comment, camel_round_trips, field_ident};
use anyhow::Result;
use discovery::registry::{FieldDescriptor, SchemaDescriptor, SchemaKind};
use discovery::{SchemaId, ServiceDescriptor};
use std::fmt::Write;

/// Generates `model.rs`.
pub fn emit_models(service: &ServiceDescriptor, mapper: &TypeMapper) -> Result<String> {
    let mut b = String::new();
    writeln!(b, "{HEADER}")?;
    let title = service.title.as_deref().unwrap_or(&service.name);
    writeln!(b, "//! The data types used by the {title}.")?;
    for (id, schema) in mapper.registry().iter() {
        writeln!(b)?;
        match &schema.kind {
            SchemaKind::Alias(t) => emit_alias(&mut b, mapper, id, schema, t)?,
            _ => emit_record(&mut b, mapper, id, schema)?,
        }
    }
    Ok(b)
}

fn emit_alias(
    b: &mut String,
    mapper: &TypeMapper,
    id: SchemaId,
    schema: &SchemaDescriptor,
    t: &discovery::registry::FieldType,
) -> Result<()> {
    if let Some(d) = &schema.description {
        b.push_str(&as_comment("", d)?);
    }
    writeln!(
        b,
        "pub type {} = {};",
        mapper.type_name(id),
        mapper.rust_type(t)
    )?;
    Ok(())
}

fn emit_record(
    b: &mut String,
    mapper: &TypeMapper,
    id: SchemaId,
    schema: &SchemaDescriptor,
) -> Result<()> {
    let name = mapper.type_name(id);
    tracing::debug!(schema = %schema.name, rust = %name, fields = schema.fields.len(), "emitting model");
    if let Some(d) = &schema.description {
        b.push_str(&as_comment("", d)?);
    }
    if schema.fields.iter().any(|f| serde_as(&f.field_type).is_some()) {
        writeln!(b, "#[serde_with::serde_as]")?;
    }
    writeln!(b, "#[serde_with::skip_serializing_none]")?;
    writeln!(
        b,
        "#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]"
    )?;
    writeln!(b, "#[serde(default, rename_all = \"camelCase\")]")?;
    writeln!(b, "pub struct {name} {{")?;
    for field in &schema.fields {
        emit_field(b, mapper, id, field)?;
    }
    writeln!(
        b,
        "    /// Fields not described by the schema, preserved when the value is sent back."
    )?;
    writeln!(
        b,
        "    #[serde(flatten, skip_serializing_if = \"serde_json::Map::is_empty\")]"
    )?;
    writeln!(
        b,
        "    pub unknown_fields: serde_json::Map<String, serde_json::Value>,"
    )?;
    writeln!(b, "}}")?;

    if let Some(item) = mapper.collection_item(id) {
        let items = schema
            .collection_field()
            .map(|f| field_ident(&f.name))
            .unwrap_or_else(|| "items".to_string());
        writeln!(b)?;
        writeln!(b, "impl gax::paginator::Collection for {name} {{")?;
        writeln!(b, "    type Item = {item};")?;
        writeln!(b)?;
        writeln!(b, "    fn items(self) -> Vec<Self::Item> {{")?;
        writeln!(b, "        self.{items}.unwrap_or_default()")?;
        writeln!(b, "    }}")?;
        writeln!(b, "}}")?;
    }
    if mapper.page_item(id).is_some() {
        writeln!(b)?;
        writeln!(b, "impl gax::paginator::PageableResponse for {name} {{")?;
        writeln!(b, "    fn next_page_token(&self) -> String {{")?;
        writeln!(b, "        self.next_page_token.clone().unwrap_or_default()")?;
        writeln!(b, "    }}")?;
        writeln!(b, "}}")?;
    }
    Ok(())
}

fn emit_field(
    b: &mut String,
    mapper: &TypeMapper,
    owner: SchemaId,
    field: &FieldDescriptor,
) -> Result<()> {
    let mut doc = field.description.clone().unwrap_or_default();
    if !field.enum_values.is_empty() {
        let values: Vec<String> = field.enum_values.iter().map(|v| format!("`{v}`")).collect();
        if !doc.is_empty() {
            doc.push_str("\n\n");
        }
        doc.push_str(&format!("Possible values: {}.", values.join(", ")));
    }
    if !doc.is_empty() {
        b.push_str(&as_comment("    ", &doc)?);
    }
    if !camel_round_trips(&field.name) {
        writeln!(b, "    #[serde(rename = {:?})]", field.name)?;
    }
    if let Some(adapter) = serde_as(&field.field_type) {
        writeln!(b, "    #[serde_as(as = \"Option<{adapter}>\")]")?;
    }
    writeln!(
        b,
        "    pub {}: Option<{}>,",
        field_ident(&field.name),
        mapper.field_type(owner, &field.name, &field.field_type)
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use discovery::load_service;
    use serde_json::json;

    fn service(schemas: serde_json::Value) -> anyhow::Result<ServiceDescriptor> {
        let doc = json!({
            "name": "blogger", "version": "v3", "title": "Blogger API v3",
            "rootUrl": "https://www.googleapis.com/", "servicePath": "blogger/v3/",
            "schemas": schemas,
        });
        Ok(load_service(&doc.to_string())?)
    }

    #[test]
    fn record() -> anyhow::Result<()> {
        let service = service(json!({
            "Post": { "type": "object", "description": "A blog post.", "properties": {
                "id": { "type": "string", "description": "The identifier of this Post." },
                "type": { "type": "string" },
                "totalItems": { "type": "string", "format": "int64" },
                "oauth_token": { "type": "string" },
                "status": { "type": "string", "enum": ["LIVE", "DRAFT"] },
            }}
        }))?;
        let mapper = TypeMapper::new(&service.schemas);
        let got = emit_models(&service, &mapper)?;
        assert!(got.starts_with(HEADER), "{got}");
        assert!(got.contains("//! The data types used by the Blogger API v3."), "{got}");
        assert!(got.contains("/// A blog post.\n#[serde_with::serde_as]\n"), "{got}");
        assert!(got.contains("pub struct Post {\n"), "{got}");
        assert!(
            got.contains("    /// The identifier of this Post.\n    pub id: Option<String>,\n"),
            "{got}"
        );
        assert!(got.contains("    pub r#type: Option<String>,\n"), "{got}");
        assert!(
            got.contains(
                "    #[serde_as(as = \"Option<serde_with::DisplayFromStr>\")]\n    pub total_items: Option<i64>,\n"
            ),
            "{got}"
        );
        assert!(
            got.contains("    #[serde(rename = \"oauth_token\")]\n    pub oauth_token: Option<String>,\n"),
            "{got}"
        );
        assert!(got.contains("    /// Possible values: `LIVE`, `DRAFT`.\n"), "{got}");
        assert!(got.contains("pub unknown_fields: serde_json::Map<String, serde_json::Value>,"), "{got}");
        assert!(!got.contains("PageableResponse"), "{got}");
        assert!(!got.contains("Collection"), "{got}");
        Ok(())
    }

    #[test]
    fn pageable() -> anyhow::Result<()> {
        let service = service(json!({
            "Post": { "type": "object", "properties": { "id": { "type": "string" } } },
            "PostList": { "type": "object", "properties": {
                "items": { "type": "array", "items": { "$ref": "Post" } },
                "nextPageToken": { "type": "string" },
            }},
        }))?;
        let mapper = TypeMapper::new(&service.schemas);
        let got = emit_models(&service, &mapper)?;
        assert!(!got.contains("serde_with::serde_as"), "{got}");
        assert!(got.contains("    pub items: Option<Vec<Post>>,\n"), "{got}");
        assert!(
            got.contains("impl gax::paginator::Collection for PostList {\n    type Item = Post;\n"),
            "{got}"
        );
        assert!(
            got.contains("impl gax::paginator::PageableResponse for PostList {\n    fn next_page_token(&self) -> String {\n"),
            "{got}"
        );
        Ok(())
    }

    #[test]
    fn collection_without_token() -> anyhow::Result<()> {
        let service = service(json!({
            "Blog": { "type": "object", "properties": { "id": { "type": "string" } } },
            "BlogList": { "type": "object", "properties": {
                "items": { "type": "array", "items": { "$ref": "Blog" } },
            }},
        }))?;
        let mapper = TypeMapper::new(&service.schemas);
        let got = emit_models(&service, &mapper)?;
        assert!(
            got.contains("impl gax::paginator::Collection for BlogList {\n    type Item = Blog;\n\n    fn items(self) -> Vec<Self::Item> {\n        self.items.unwrap_or_default()\n"),
            "{got}"
        );
        assert!(!got.contains("PageableResponse"), "{got}");
        Ok(())
    }

    #[test]
    fn recursive() -> anyhow::Result<()> {
        let service = service(json!({
            "Comment": { "type": "object", "properties": {
                "inReplyTo": { "$ref": "Comment" },
                "replies": { "type": "array", "items": { "$ref": "Comment" } },
            }},
        }))?;
        let mapper = TypeMapper::new(&service.schemas);
        let got = emit_models(&service, &mapper)?;
        assert!(got.contains("    pub in_reply_to: Option<Box<Comment>>,\n"), "{got}");
        assert!(got.contains("    pub replies: Option<Vec<Comment>>,\n"), "{got}");
        Ok(())
    }

    #[test]
    fn alias() -> anyhow::Result<()> {
        let service = service(json!({
            "Labels": { "type": "array", "description": "Some labels.", "items": { "type": "string" } },
        }))?;
        let mapper = TypeMapper::new(&service.schemas);
        let got = emit_models(&service, &mapper)?;
        assert!(got.contains("/// Some labels.\npub type Labels = Vec<String>;\n"), "{got}");
        Ok(())
    }
}
