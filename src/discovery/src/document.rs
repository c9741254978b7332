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

//! Serde mappings for the JSON discovery document format.
//!
//! These types mirror the wire format closely and perform no validation. Use
//! [load_service][crate::load_service] to obtain validated descriptors.

use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub root_url: String,
    pub service_path: String,
    #[serde(default)]
    pub base_path: Option<String>,
    #[serde(default)]
    pub documentation_link: Option<String>,
    #[serde(default)]
    pub auth: Option<Auth>,
    /// Parameters accepted by every method in the service.
    #[serde(default)]
    pub parameters: BTreeMap<String, Parameter>,
    #[serde(default)]
    pub methods: BTreeMap<String, Method>,
    #[serde(default)]
    pub schemas: BTreeMap<String, Schema>,
    #[serde(default)]
    pub resources: BTreeMap<String, Resource>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Auth {
    #[serde(default)]
    pub oauth2: Option<OAuth2>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuth2 {
    #[serde(default)]
    pub scopes: BTreeMap<String, ScopeDesc>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeDesc {
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    pub id: Option<String>,
    pub path: Option<String>,
    pub http_method: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: BTreeMap<String, Parameter>,
    #[serde(default)]
    pub parameter_order: Vec<String>,
    pub request: Option<SchemaRef>,
    pub response: Option<SchemaRef>,
    #[serde(default)]
    pub scopes: Vec<String>,
}

/// A `{"$ref": "Name"}` reference used by method requests and responses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SchemaRef {
    #[serde(rename = "$ref")]
    pub schema_ref: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    #[serde(rename = "type")]
    pub parameter_type: Option<String>,
    pub format: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub required: Option<bool>,
    pub repeated: Option<bool>,
    /// How repeated values are placed in the query string: `multi` (the
    /// default) or `csv`.
    pub repeated_encoding: Option<String>,
    pub default: Option<String>,
    pub pattern: Option<String>,
    #[serde(default, rename = "enum")]
    pub enum_values: Vec<String>,
    #[serde(default)]
    pub enum_descriptions: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub schema_type: Option<String>,
    pub format: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, Schema>,
    pub items: Option<Box<Schema>>,
    pub additional_properties: Option<Box<Schema>>,
    #[serde(rename = "$ref")]
    pub schema_ref: Option<String>,
    pub required: Option<bool>,
    pub read_only: Option<bool>,
    /// Names the array field that holds the items of a list response.
    pub collection_key: Option<String>,
    #[serde(default, rename = "enum")]
    pub enum_values: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[serde(default)]
    pub methods: BTreeMap<String, Method>,
    #[serde(default)]
    pub resources: BTreeMap<String, Resource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal() -> anyhow::Result<()> {
        let input = serde_json::json!({
            "name": "test",
            "version": "v1",
            "rootUrl": "https://test.googleapis.com/",
            "servicePath": "test/v1/",
        });
        let doc: Document = serde_json::from_value(input)?;
        assert_eq!(doc.name, "test");
        assert!(doc.resources.is_empty(), "{doc:?}");
        assert!(doc.auth.is_none(), "{doc:?}");
        Ok(())
    }

    #[test]
    fn extensions() -> anyhow::Result<()> {
        let input = serde_json::json!({
            "type": "string",
            "location": "query",
            "repeated": true,
            "repeatedEncoding": "csv",
            "enum": ["a", "b"],
        });
        let param: Parameter = serde_json::from_value(input)?;
        assert_eq!(param.repeated_encoding.as_deref(), Some("csv"));
        assert_eq!(param.enum_values, vec!["a", "b"]);

        let input = serde_json::json!({
            "type": "object",
            "collectionKey": "channels",
            "properties": { "channels": { "type": "array", "items": { "$ref": "Channel" } } },
        });
        let schema: Schema = serde_json::from_value(input)?;
        assert_eq!(schema.collection_key.as_deref(), Some("channels"));
        Ok(())
    }

    #[test]
    fn missing_name() {
        let input = serde_json::json!({ "version": "v1" });
        let doc = serde_json::from_value::<Document>(input);
        assert!(doc.is_err(), "{doc:?}");
    }
}
