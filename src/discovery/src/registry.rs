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

//! The schema registry.
//!
//! Schemas reference each other by name, and those references may be
//! recursive. The registry owns every schema and hands out [SchemaId]
//! handles. Field types hold handles, never nested copies, so recursive
//! schemas are represented without any special treatment.

use std::collections::BTreeMap;

/// A handle to a schema owned by a [SchemaRegistry].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SchemaId(usize);

impl SchemaId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Scalar types, derived from the discovery `type` and `format` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    String,
    Boolean,
    Int32,
    UInt32,
    /// 64-bit integers are sent as JSON strings.
    Int64,
    UInt64,
    Float,
    Double,
    Date,
    DateTime,
    /// Base64 encoded bytes, sent as a JSON string.
    Bytes,
}

impl Primitive {
    /// Maps a discovery `(type, format)` pair to a primitive.
    ///
    /// Returns `None` for non-scalar or unknown types.
    pub fn from_type_format(schema_type: &str, format: Option<&str>) -> Option<Self> {
        let p = match (schema_type, format) {
            ("string", Some("int64")) => Self::Int64,
            ("string", Some("uint64")) => Self::UInt64,
            ("string", Some("date")) => Self::Date,
            ("string", Some("date-time")) => Self::DateTime,
            ("string", Some("byte")) => Self::Bytes,
            ("string", _) => Self::String,
            ("boolean", _) => Self::Boolean,
            ("integer", Some("uint32")) => Self::UInt32,
            ("integer", _) => Self::Int32,
            ("number", Some("float")) => Self::Float,
            ("number", _) => Self::Double,
            _ => return None,
        };
        Some(p)
    }

    /// Returns true if the JSON representation of this type is a string.
    pub fn is_json_string(&self) -> bool {
        matches!(
            self,
            Self::String | Self::Int64 | Self::UInt64 | Self::Date | Self::DateTime | Self::Bytes
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FieldType {
    Primitive(Primitive),
    Ref(SchemaId),
    Array(Box<FieldType>),
    /// A JSON object with string keys and values of the given type.
    Map(Box<FieldType>),
    /// Any JSON value.
    Any,
}

impl FieldType {
    /// The referenced schema, if this type is a direct (unwrapped) reference.
    pub fn direct_ref(&self) -> Option<SchemaId> {
        match self {
            Self::Ref(id) => Some(*id),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldDescriptor {
    /// The JSON name of the field.
    pub name: String,
    pub field_type: FieldType,
    pub required: bool,
    pub read_only: bool,
    pub description: Option<String>,
    pub enum_values: Vec<String>,
}

impl FieldDescriptor {
    pub fn new<T: Into<String>>(name: T, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: false,
            read_only: false,
            description: None,
            enum_values: Vec::new(),
        }
    }

    pub fn with_required(mut self, v: bool) -> Self {
        self.required = v;
        self
    }

    pub fn with_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SchemaKind {
    Record,
    /// A list response. `items` names the array field holding the results.
    Collection { items: String },
    /// A top-level schema that is not an object, e.g. an array of strings.
    Alias(FieldType),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDescriptor {
    pub name: String,
    pub description: Option<String>,
    /// Fields in JSON name order.
    pub fields: Vec<FieldDescriptor>,
    pub kind: SchemaKind,
}

impl SchemaDescriptor {
    pub fn record<T: Into<String>>(name: T, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields,
            kind: SchemaKind::Record,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The field holding the items of a collection.
    pub fn collection_field(&self) -> Option<&FieldDescriptor> {
        match &self.kind {
            SchemaKind::Collection { items } => self.field(items),
            _ => None,
        }
    }

    /// Returns true if responses of this type can be paginated.
    pub fn is_pageable(&self) -> bool {
        self.collection_field().is_some()
            && self
                .field("nextPageToken")
                .is_some_and(|f| f.field_type == FieldType::Primitive(Primitive::String))
    }
}

/// Owns all the schemas in a service, indexed by name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SchemaRegistry {
    schemas: Vec<SchemaDescriptor>,
    by_name: BTreeMap<String, SchemaId>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves a handle for `name`, returning the existing handle if the name
    /// is already known.
    ///
    /// Reserved schemas are empty records until [define][Self::define] is
    /// called. Reserving first allows forward and recursive references.
    pub fn reserve(&mut self, name: &str) -> SchemaId {
        if let Some(id) = self.by_name.get(name) {
            return *id;
        }
        let id = SchemaId(self.schemas.len());
        self.schemas.push(SchemaDescriptor::record(name, Vec::new()));
        self.by_name.insert(name.to_string(), id);
        id
    }

    /// Sets the definition for a reserved schema, keeping its name.
    pub fn define(&mut self, id: SchemaId, mut schema: SchemaDescriptor) {
        if let Some(slot) = self.schemas.get_mut(id.0) {
            schema.name = std::mem::take(&mut slot.name);
            *slot = schema;
        }
    }

    /// Adds a complete schema, replacing any schema with the same name.
    pub fn insert(&mut self, schema: SchemaDescriptor) -> SchemaId {
        let id = self.reserve(&schema.name);
        self.define(id, schema);
        id
    }

    pub fn lookup(&self, name: &str) -> Option<SchemaId> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, id: SchemaId) -> Option<&SchemaDescriptor> {
        self.schemas.get(id.0)
    }

    pub fn by_name(&self, name: &str) -> Option<&SchemaDescriptor> {
        self.lookup(name).and_then(|id| self.get(id))
    }

    /// The schema name for `id`, or an empty string for foreign handles.
    pub fn name(&self, id: SchemaId) -> &str {
        self.get(id).map(|s| s.name.as_str()).unwrap_or_default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Iterates over all schemas in name order.
    pub fn iter(&self) -> impl Iterator<Item = (SchemaId, &SchemaDescriptor)> {
        self.by_name
            .values()
            .filter_map(|id| self.get(*id).map(|s| (*id, s)))
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// The schemas referenced directly (not through arrays or maps) by `id`.
    ///
    /// If `required_only` is set, only required fields are considered.
    pub fn direct_references(&self, id: SchemaId, required_only: bool) -> Vec<SchemaId> {
        let Some(schema) = self.get(id) else {
            return Vec::new();
        };
        let mut refs: Vec<SchemaId> = schema
            .fields
            .iter()
            .filter(|f| !required_only || f.required)
            .filter_map(|f| f.field_type.direct_ref())
            .collect();
        if let SchemaKind::Alias(FieldType::Ref(target)) = &schema.kind {
            refs.push(*target);
        }
        refs
    }

    /// Finds a cycle of direct references.
    ///
    /// With `required_only` set, a cycle means no finite JSON value can
    /// satisfy the schemas. Without it, the cycle identifies the references
    /// that need indirection in a language without implicit references.
    pub fn find_cycle(&self, required_only: bool) -> Option<Vec<SchemaId>> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            New,
            Active,
            Done,
        }
        fn visit(
            registry: &SchemaRegistry,
            id: SchemaId,
            required_only: bool,
            marks: &mut [Mark],
            stack: &mut Vec<SchemaId>,
        ) -> Option<Vec<SchemaId>> {
            marks[id.0] = Mark::Active;
            stack.push(id);
            for next in registry.direct_references(id, required_only) {
                match marks[next.0] {
                    Mark::Active => {
                        let start = stack.iter().position(|s| *s == next).unwrap_or_default();
                        let mut cycle = stack[start..].to_vec();
                        cycle.push(next);
                        return Some(cycle);
                    }
                    Mark::New => {
                        if let Some(c) = visit(registry, next, required_only, marks, stack) {
                            return Some(c);
                        }
                    }
                    Mark::Done => {}
                }
            }
            stack.pop();
            marks[id.0] = Mark::Done;
            None
        }

        let mut marks = vec![Mark::New; self.schemas.len()];
        for (id, _) in self.iter() {
            if marks[id.0] != Mark::New {
                continue;
            }
            let mut stack = Vec::new();
            if let Some(c) = visit(self, id, required_only, &mut marks, &mut stack) {
                return Some(c);
            }
        }
        None
    }
}

impl std::ops::Index<SchemaId> for SchemaRegistry {
    type Output = SchemaDescriptor;

    fn index(&self, id: SchemaId) -> &Self::Output {
        &self.schemas[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("string", None, Some(Primitive::String))]
    #[test_case("string", Some("int64"), Some(Primitive::Int64))]
    #[test_case("string", Some("uint64"), Some(Primitive::UInt64))]
    #[test_case("string", Some("date-time"), Some(Primitive::DateTime))]
    #[test_case("string", Some("byte"), Some(Primitive::Bytes))]
    #[test_case("integer", Some("int32"), Some(Primitive::Int32))]
    #[test_case("integer", Some("uint32"), Some(Primitive::UInt32))]
    #[test_case("number", Some("double"), Some(Primitive::Double))]
    #[test_case("number", Some("float"), Some(Primitive::Float))]
    #[test_case("boolean", None, Some(Primitive::Boolean))]
    #[test_case("object", None, None)]
    #[test_case("widget", None, None)]
    fn primitives(schema_type: &str, format: Option<&str>, want: Option<Primitive>) {
        assert_eq!(Primitive::from_type_format(schema_type, format), want);
    }

    #[test]
    fn reserve_then_define() {
        let mut registry = SchemaRegistry::new();
        let post = registry.reserve("Post");
        let comment = registry.reserve("Comment");
        assert_eq!(registry.reserve("Post"), post);
        registry.define(
            post,
            SchemaDescriptor::record(
                "ignored",
                vec![FieldDescriptor::new(
                    "replies",
                    FieldType::Array(Box::new(FieldType::Ref(comment))),
                )],
            ),
        );
        assert_eq!(registry.name(post), "Post");
        assert_eq!(registry[post].fields.len(), 1);
        assert_eq!(registry.lookup("Comment"), Some(comment));
        assert_eq!(registry.lookup("Missing"), None);
        let names: Vec<_> = registry.iter().map(|(_, s)| s.name.as_str()).collect();
        assert_eq!(names, vec!["Comment", "Post"]);
    }

    #[test]
    fn cycles() {
        let mut registry = SchemaRegistry::new();
        let node = registry.reserve("Node");
        let edge = registry.reserve("Edge");
        registry.define(
            node,
            SchemaDescriptor::record(
                "Node",
                vec![
                    FieldDescriptor::new("edge", FieldType::Ref(edge)),
                    FieldDescriptor::new(
                        "children",
                        FieldType::Array(Box::new(FieldType::Ref(node))),
                    )
                    .with_required(true),
                ],
            ),
        );
        registry.define(
            edge,
            SchemaDescriptor::record(
                "Edge",
                vec![FieldDescriptor::new("target", FieldType::Ref(node)).with_required(true)],
            ),
        );
        // Node.edge is optional, so there is a base case.
        assert_eq!(registry.find_cycle(true), None);
        let cycle = registry.find_cycle(false).expect("direct cycle");
        let names: Vec<_> = cycle.iter().map(|id| registry.name(*id)).collect();
        assert_eq!(names, vec!["Edge", "Node", "Edge"]);
    }

    #[test]
    fn pageable() {
        let mut registry = SchemaRegistry::new();
        let post = registry.reserve("Post");
        let mut list = SchemaDescriptor::record(
            "PostList",
            vec![
                FieldDescriptor::new("items", FieldType::Array(Box::new(FieldType::Ref(post)))),
                FieldDescriptor::new("nextPageToken", FieldType::Primitive(Primitive::String)),
            ],
        );
        assert!(!list.is_pageable(), "{list:?}");
        list.kind = SchemaKind::Collection {
            items: "items".into(),
        };
        assert!(list.is_pageable(), "{list:?}");
        assert_eq!(list.collection_field().map(|f| f.name.as_str()), Some("items"));
    }
}
