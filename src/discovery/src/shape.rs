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

//! Checks untyped JSON values against the shape of a schema.
//!
//! Only the JSON type of each known field is checked. Missing fields, `null`
//! values, and unknown fields are accepted.

use crate::registry::{FieldType, Primitive, SchemaId, SchemaKind, SchemaRegistry};
use serde_json::Value;

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("expected {expected} at `{path}`, found {found}")]
pub struct ShapeMismatch {
    pub path: String,
    pub expected: String,
    pub found: &'static str,
}

/// Checks `value` against the schema identified by `id`.
pub fn check_schema(
    registry: &SchemaRegistry,
    id: SchemaId,
    value: &Value,
) -> Result<(), ShapeMismatch> {
    check(registry, &FieldType::Ref(id), value, "$")
}

/// Checks `value` against an arbitrary field type.
pub fn check_type(
    registry: &SchemaRegistry,
    field_type: &FieldType,
    value: &Value,
) -> Result<(), ShapeMismatch> {
    check(registry, field_type, value, "$")
}

fn check(
    registry: &SchemaRegistry,
    field_type: &FieldType,
    value: &Value,
    path: &str,
) -> Result<(), ShapeMismatch> {
    if value.is_null() {
        return Ok(());
    }
    let mismatch = |expected: String| ShapeMismatch {
        path: path.to_string(),
        expected,
        found: json_type(value),
    };
    match field_type {
        FieldType::Any => Ok(()),
        FieldType::Primitive(p) => {
            if primitive_matches(*p, value) {
                Ok(())
            } else {
                Err(mismatch(format!("{p:?}")))
            }
        }
        FieldType::Array(inner) => {
            let Value::Array(values) = value else {
                return Err(mismatch("an array".to_string()));
            };
            for (i, v) in values.iter().enumerate() {
                check(registry, inner, v, &format!("{path}[{i}]"))?;
            }
            Ok(())
        }
        FieldType::Map(inner) => {
            let Value::Object(map) = value else {
                return Err(mismatch("an object".to_string()));
            };
            for (k, v) in map {
                check(registry, inner, v, &format!("{path}.{k}"))?;
            }
            Ok(())
        }
        FieldType::Ref(id) => {
            let Some(schema) = registry.get(*id) else {
                return Err(mismatch("a registered schema".to_string()));
            };
            if let SchemaKind::Alias(alias) = &schema.kind {
                return check(registry, alias, value, path);
            }
            let Value::Object(map) = value else {
                return Err(mismatch(format!("a `{}` object", schema.name)));
            };
            for field in &schema.fields {
                if let Some(v) = map.get(&field.name) {
                    check(registry, &field.field_type, v, &format!("{path}.{}", field.name))?;
                }
            }
            Ok(())
        }
    }
}

fn primitive_matches(p: Primitive, value: &Value) -> bool {
    match p {
        Primitive::Boolean => value.is_boolean(),
        Primitive::Int32 => value.as_i64().is_some_and(|v| i32::try_from(v).is_ok()),
        Primitive::UInt32 => value.as_u64().is_some_and(|v| u32::try_from(v).is_ok()),
        Primitive::Float | Primitive::Double => value.is_number(),
        Primitive::Int64 => match value {
            Value::String(s) => s.parse::<i64>().is_ok(),
            v => v.is_i64(),
        },
        Primitive::UInt64 => match value {
            Value::String(s) => s.parse::<u64>().is_ok(),
            v => v.is_u64(),
        },
        Primitive::String | Primitive::Date | Primitive::DateTime | Primitive::Bytes => {
            value.is_string()
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{FieldDescriptor, SchemaDescriptor};
    use serde_json::json;

    fn registry() -> (SchemaRegistry, SchemaId) {
        let mut registry = SchemaRegistry::new();
        let post = registry.reserve("Post");
        registry.define(
            post,
            SchemaDescriptor::record(
                "Post",
                vec![
                    FieldDescriptor::new("id", FieldType::Primitive(Primitive::String)),
                    FieldDescriptor::new("count", FieldType::Primitive(Primitive::Int64)),
                    FieldDescriptor::new(
                        "labels",
                        FieldType::Array(Box::new(FieldType::Primitive(Primitive::String))),
                    ),
                    FieldDescriptor::new("related", FieldType::Ref(post)),
                ],
            ),
        );
        (registry, post)
    }

    #[test]
    fn accepts() -> anyhow::Result<()> {
        let (registry, post) = registry();
        let value = json!({
            "id": "123",
            "count": "42",
            "labels": ["a", "b"],
            "related": { "id": "456", "labels": null },
            "unknown": { "anything": true },
        });
        check_schema(&registry, post, &value)?;
        Ok(())
    }

    #[test]
    fn rejects() {
        let (registry, post) = registry();
        let value = json!({ "related": { "labels": ["a", 7] } });
        let got = check_schema(&registry, post, &value);
        assert_eq!(
            got,
            Err(ShapeMismatch {
                path: "$.related.labels[1]".into(),
                expected: "String".into(),
                found: "a number",
            })
        );
    }

    #[test]
    fn int64_as_string() {
        let (registry, post) = registry();
        let got = check_schema(&registry, post, &json!({ "count": "not a number" }));
        assert!(got.is_err(), "{got:?}");
        let got = check_schema(&registry, post, &json!({ "count": 7 }));
        assert!(got.is_ok(), "{got:?}");
    }

    #[test]
    fn not_an_object() {
        let (registry, post) = registry();
        let got = check_schema(&registry, post, &json!([1, 2]));
        assert!(
            matches!(&got, Err(ShapeMismatch { path, .. }) if path == "$"),
            "{got:?}"
        );
    }
}
