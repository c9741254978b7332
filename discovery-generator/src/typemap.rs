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

//! Maps discovery schema types to Rust types.

use crate::util::to_pascal;
use discovery::registry::{FieldType, Primitive, SchemaKind};
use discovery::{ParameterDescriptor, ParameterType, SchemaId, SchemaRegistry};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

/// Resolves the Rust type for schemas and fields.
///
/// Type names are computed on first use and memoized by [SchemaId]. Direct
/// references that close a cycle are boxed, references through `Vec` or
/// `HashMap` already have indirection.
#[derive(Debug)]
pub struct TypeMapper<'a> {
    registry: &'a SchemaRegistry,
    names: RefCell<BTreeMap<SchemaId, String>>,
    boxed: BTreeSet<(SchemaId, String)>,
}

impl<'a> TypeMapper<'a> {
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self {
            registry,
            names: RefCell::default(),
            boxed: back_edges(registry),
        }
    }

    pub fn registry(&self) -> &'a SchemaRegistry {
        self.registry
    }

    /// The Rust type name for a schema.
    pub fn type_name(&self, id: SchemaId) -> String {
        if let Some(name) = self.names.borrow().get(&id) {
            return name.clone();
        }
        let name = to_pascal(self.registry.name(id));
        tracing::trace!(schema = self.registry.name(id), rust = %name, "mapped schema type");
        self.names.borrow_mut().insert(id, name.clone());
        name
    }

    /// Returns true if the field `field` of `owner` must be boxed.
    pub fn is_boxed(&self, owner: SchemaId, field: &str) -> bool {
        self.boxed.contains(&(owner, field.to_string()))
    }

    /// The Rust type of a field, without the wrapping `Option`.
    pub fn field_type(&self, owner: SchemaId, field: &str, field_type: &FieldType) -> String {
        let t = self.rust_type(field_type);
        if self.is_boxed(owner, field) {
            format!("Box<{t}>")
        } else {
            t
        }
    }

    /// The Rust type for a field type, never boxed.
    pub fn rust_type(&self, field_type: &FieldType) -> String {
        match field_type {
            FieldType::Primitive(p) => primitive(*p).to_string(),
            FieldType::Ref(id) => self.type_name(*id),
            FieldType::Array(inner) => format!("Vec<{}>", self.rust_type(inner)),
            FieldType::Map(inner) => {
                format!("std::collections::HashMap<String, {}>", self.rust_type(inner))
            }
            FieldType::Any => "serde_json::Value".to_string(),
        }
    }

    /// The element type of a collection schema.
    pub fn collection_item(&self, id: SchemaId) -> Option<String> {
        match &self.registry.get(id)?.collection_field()?.field_type {
            FieldType::Array(inner) => Some(self.rust_type(inner)),
            _ => None,
        }
    }

    /// The element type of a collection schema, if the schema is pageable.
    pub fn page_item(&self, id: SchemaId) -> Option<String> {
        if !self.registry.get(id)?.is_pageable() {
            return None;
        }
        self.collection_item(id)
    }
}

/// The `serde_as` adapter for types whose JSON form differs from the Rust
/// form, e.g. 64-bit integers sent as strings.
pub fn serde_as(field_type: &FieldType) -> Option<String> {
    match field_type {
        FieldType::Primitive(Primitive::Int64 | Primitive::UInt64) => {
            Some("serde_with::DisplayFromStr".to_string())
        }
        FieldType::Array(inner) => serde_as(inner).map(|s| format!("Vec<{s}>")),
        FieldType::Map(inner) => {
            serde_as(inner).map(|s| format!("std::collections::HashMap<serde_with::Same, {s}>"))
        }
        _ => None,
    }
}

fn primitive(p: Primitive) -> &'static str {
    match p {
        Primitive::String | Primitive::Date | Primitive::DateTime | Primitive::Bytes => "String",
        Primitive::Boolean => "bool",
        Primitive::Int32 => "i32",
        Primitive::UInt32 => "u32",
        Primitive::Int64 => "i64",
        Primitive::UInt64 => "u64",
        Primitive::Float => "f32",
        Primitive::Double => "f64",
    }
}

/// The Rust type used for a method parameter.
pub fn parameter_type(p: &ParameterDescriptor) -> &'static str {
    match (p.parameter_type, p.format.as_deref()) {
        (ParameterType::Integer, Some("uint32")) => "u32",
        (ParameterType::Integer, _) => "i32",
        (ParameterType::Number, Some("float")) => "f32",
        (ParameterType::Number, _) => "f64",
        (ParameterType::Boolean, _) => "bool",
        (ParameterType::String, _) => "String",
    }
}

/// Finds the direct references that close a cycle.
///
/// The schemas are visited depth first, in name order. A reference to a
/// schema still on the stack is a back edge, boxing all back edges breaks all
/// the cycles of direct references.
fn back_edges(registry: &SchemaRegistry) -> BTreeSet<(SchemaId, String)> {
    #[derive(Clone, Copy, PartialEq)]
    enum Mark {
        New,
        Active,
        Done,
    }
    fn visit(
        registry: &SchemaRegistry,
        id: SchemaId,
        marks: &mut BTreeMap<SchemaId, Mark>,
        edges: &mut BTreeSet<(SchemaId, String)>,
    ) {
        marks.insert(id, Mark::Active);
        let Some(schema) = registry.get(id) else {
            marks.insert(id, Mark::Done);
            return;
        };
        let mut refs: Vec<(String, SchemaId)> = schema
            .fields
            .iter()
            .filter_map(|f| f.field_type.direct_ref().map(|t| (f.name.clone(), t)))
            .collect();
        if let SchemaKind::Alias(FieldType::Ref(target)) = &schema.kind {
            refs.push((String::new(), *target));
        }
        for (field, target) in refs {
            match marks.get(&target).copied().unwrap_or(Mark::New) {
                Mark::Active => {
                    edges.insert((id, field));
                }
                Mark::New => visit(registry, target, marks, edges),
                Mark::Done => {}
            }
        }
        marks.insert(id, Mark::Done);
    }

    let mut marks = BTreeMap::new();
    let mut edges = BTreeSet::new();
    for (id, _) in registry.iter() {
        if marks.get(&id).copied().unwrap_or(Mark::New) == Mark::New {
            visit(registry, id, &mut marks, &mut edges);
        }
    }
    edges
}
