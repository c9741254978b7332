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

//! The parameters of a single call.
//!
//! Generated methods collect their positional arguments and the fields of
//! their options struct into a [ParameterBag]. The bag is call-local, the
//! executor consumes it to build the request.

use crate::query_parameter::QueryParameter;
use serde_json::Value;
use std::collections::BTreeMap;

/// The value of one parameter, already formatted.
#[derive(Clone, Debug, PartialEq)]
pub enum ParameterValue {
    Single(String),
    List(Vec<String>),
}

impl ParameterValue {
    /// An empty string or an empty list.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(s) => s.is_empty(),
            Self::List(v) => v.is_empty(),
        }
    }

    /// The values, as a slice-like iterator.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        let values: &[String] = match self {
            Self::Single(s) => std::slice::from_ref(s),
            Self::List(v) => v.as_slice(),
        };
        values.iter().map(String::as_str)
    }

    /// Converts a JSON scalar, or an array of scalars.
    ///
    /// Returns `Ok(None)` for `null`, and an error description for objects
    /// and nested arrays.
    pub fn from_json(value: &Value) -> Result<Option<Self>, &'static str> {
        match value {
            Value::Null => Ok(None),
            Value::Array(a) => {
                let list = a
                    .iter()
                    .map(|v| scalar(v).ok_or("expected an array of scalars"))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Some(Self::List(list)))
            }
            v => scalar(v)
                .map(|s| Some(Self::Single(s)))
                .ok_or("expected a scalar or an array of scalars"),
        }
    }
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Maps parameter names (in their wire form, e.g. `maxResults`) to values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParameterBag {
    values: BTreeMap<String, ParameterValue>,
}

impl ParameterBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, `None` values are skipped.
    ///
    /// # Example
    /// ```
    /// # use gax::parameter_bag::*;
    /// let bag = ParameterBag::new()
    ///     .with("blogId", "123")
    ///     .with("maxResults", Some(10_u32))
    ///     .with("pageToken", None::<String>)
    ///     .with("status", vec!["live", "draft"]);
    /// assert_eq!(bag.get("blogId"), Some(&ParameterValue::Single("123".into())));
    /// assert_eq!(bag.get("pageToken"), None);
    /// assert_eq!(bag.len(), 3);
    /// ```
    pub fn with<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: QueryParameter,
    {
        self.insert(name, value);
        self
    }

    /// Adds a parameter, `None` values are skipped.
    pub fn insert<K, V>(&mut self, name: K, value: V)
    where
        K: Into<String>,
        V: QueryParameter,
    {
        if let Some(v) = value.to_parameter() {
            self.values.insert(name.into(), v);
        }
    }

    /// Adds a formatted parameter value.
    pub fn set<K: Into<String>>(&mut self, name: K, value: ParameterValue) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&ParameterValue> {
        self.values.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<ParameterValue> {
        self.values.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Creates a bag from any serializable struct.
    ///
    /// The struct must serialize as a JSON object. `null` fields are skipped.
    /// Generated options structs use this to populate the optional
    /// parameters.
    ///
    /// # Example
    /// ```
    /// # use gax::parameter_bag::*;
    /// #[derive(serde::Serialize)]
    /// #[serde(rename_all = "camelCase")]
    /// struct Options { max_results: Option<u32>, page_token: Option<String> }
    /// let bag = ParameterBag::from_serialize(&Options { max_results: Some(10), page_token: None })?;
    /// assert_eq!(bag.get("maxResults"), Some(&ParameterValue::Single("10".into())));
    /// assert!(!bag.contains("pageToken"));
    /// # Ok::<(), gax::error::Error>(())
    /// ```
    pub fn from_serialize<T: serde::Serialize>(value: &T) -> crate::Result<Self> {
        let value = serde_json::to_value(value).map_err(crate::error::Error::ser)?;
        Self::from_json(&value).map_err(|(name, reason)| {
            crate::error::Error::ser(format!("cannot format parameter `{name}`: {reason}"))
        })
    }

    /// Creates a bag from a JSON object.
    ///
    /// On error returns the offending key (empty if `value` is not an object)
    /// and a description of the problem.
    pub fn from_json(value: &Value) -> Result<Self, (String, &'static str)> {
        let object = match value {
            Value::Object(o) => o,
            Value::Null => return Ok(Self::default()),
            _ => return Err((String::new(), "expected a JSON object")),
        };
        let mut bag = Self::default();
        for (k, v) in object {
            if let Some(p) = ParameterValue::from_json(v).map_err(|e| (k.clone(), e))? {
                bag.set(k.clone(), p);
            }
        }
        Ok(bag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn value_predicates() {
        assert!(ParameterValue::Single(String::new()).is_empty());
        assert!(ParameterValue::List(Vec::new()).is_empty());
        assert!(!ParameterValue::Single("a".into()).is_empty());
        let list = ParameterValue::List(vec!["a".into(), "b".into()]);
        assert_eq!(list.values().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn from_json() -> anyhow::Result<()> {
        let bag = ParameterBag::from_json(&json!({
            "view": "ADMIN",
            "maxResults": 10,
            "fetchBodies": false,
            "status": ["live", "draft"],
            "pageToken": null,
        }))
        .map_err(|(k, e)| anyhow::anyhow!("{k}: {e}"))?;
        assert_eq!(bag.len(), 4);
        assert_eq!(bag.get("view"), Some(&ParameterValue::Single("ADMIN".into())));
        assert_eq!(bag.get("maxResults"), Some(&ParameterValue::Single("10".into())));
        assert_eq!(bag.get("fetchBodies"), Some(&ParameterValue::Single("false".into())));
        assert_eq!(
            bag.get("status"),
            Some(&ParameterValue::List(vec!["live".into(), "draft".into()]))
        );
        Ok(())
    }

    #[test]
    fn from_json_errors() {
        let got = ParameterBag::from_json(&json!({"labels": {"a": 1}}));
        assert!(matches!(&got, Err((k, _)) if k == "labels"), "{got:?}");
        let got = ParameterBag::from_json(&json!({"labels": [["nested"]]}));
        assert!(matches!(&got, Err((k, _)) if k == "labels"), "{got:?}");
        let got = ParameterBag::from_json(&json!(["not", "an", "object"]));
        assert!(got.is_err(), "{got:?}");
        let got = ParameterBag::from_json(&Value::Null);
        assert_eq!(got, Ok(ParameterBag::default()));
    }

    #[test]
    fn from_serialize() -> anyhow::Result<()> {
        #[derive(serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Options {
            max_results: Option<u32>,
            status: Option<Vec<String>>,
            #[serde(skip)]
            _ignored: u32,
        }
        let bag = ParameterBag::from_serialize(&Options {
            max_results: None,
            status: Some(vec!["live".into()]),
            _ignored: 42,
        })?;
        let want = ParameterBag::new().with("status", vec!["live"]);
        assert_eq!(bag, want);
        Ok(())
    }

    #[test]
    fn accessors() {
        let mut bag = ParameterBag::new().with("b", "2").with("a", 1_i32);
        assert!(bag.contains("a"));
        assert_eq!(bag.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(bag.remove("a"), Some(ParameterValue::Single("1".into())));
        assert!(!bag.contains("a"));
        bag.set("c", ParameterValue::List(vec![]));
        assert_eq!(bag.iter().count(), 2);
        assert!(!bag.is_empty());
    }
}
