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

//! Defines traits and helpers to flatten request fields into parameters.
//!
//! RPC-style operations receive their input as a flat list of string
//! parameters. Scalar fields map to one parameter each. Lists and nested
//! objects use the "repeat list" convention: list elements are numbered
//! starting at 1, and object members append their name, so a list of tags
//! becomes `Tag.1.Key`, `Tag.1.Value`, `Tag.2.Key`, and so on.
//!
//! The request objects are serialized to [serde_json::Value] first. Fields
//! that are not set are skipped during serialization, so they never produce a
//! parameter. Fields set to a zero value (`""`, `0`, `false`) do.
//!
//! The types are not intended for application developers to use. They are
//! public because we will generate many crates (roughly one per service), and
//! most of these crates will use these helpers.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// [QueryParameter] is a trait representing types that can be flattened into
/// wire parameters.
pub trait QueryParameter {
    fn flatten_into(&self, name: &str, params: &mut BTreeMap<String, String>);
}

impl QueryParameter for Value {
    fn flatten_into(&self, name: &str, params: &mut BTreeMap<String, String>) {
        match self {
            Self::Object(object) => object
                .iter()
                .for_each(|(k, v)| v.flatten_into(&format!("{name}.{k}"), params)),
            Self::Array(array) => array
                .iter()
                .enumerate()
                .for_each(|(i, v)| v.flatten_into(&format!("{name}.{}", i + 1), params)),
            Self::Null => {}
            scalar => {
                if let Some(s) = render(scalar) {
                    params.insert(name.to_string(), s);
                }
            }
        }
    }
}

/// The result of splitting a request into parameters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Partition {
    /// Parameters with a scalar value, already rendered as strings.
    pub simple: BTreeMap<String, String>,
    /// Lists, maps, and nested objects, in field declaration order.
    pub structured: Vec<(String, Value)>,
}

/// Splits the top-level fields of a request.
///
/// `null` members are dropped, they correspond to fields that are not set.
pub fn partition(object: Map<String, Value>) -> Partition {
    object
        .into_iter()
        .fold(Partition::default(), |mut p, (k, v)| {
            match v {
                Value::Null => {}
                Value::Array(_) | Value::Object(_) => p.structured.push((k, v)),
                scalar => {
                    if let Some(s) = render(&scalar) {
                        p.simple.insert(k, s);
                    }
                }
            }
            p
        })
}

/// Flattens a structured value named `name` into `params`.
pub fn flatten(name: &str, value: &Value, params: &mut BTreeMap<String, String>) {
    value.flatten_into(name, params)
}

fn render(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(format!("{n}")),
        Value::Bool(b) => Some(format!("{b}")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn params(value: Value, name: &str) -> Vec<(String, String)> {
        let mut params = BTreeMap::new();
        flatten(name, &value, &mut params);
        params.into_iter().collect()
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn object() {
        let value = json!({
            "a": 123,
            "b": [123, 456, 789],
            "c": "123",
            "d": true,
            "e": {
                "f": "abc",
                "g": false,
                "h": {
                    "i": 42,
                }
            }
        });
        assert_eq!(
            params(value, "name"),
            pairs(&[
                ("name.a", "123"),
                ("name.b.1", "123"),
                ("name.b.2", "456"),
                ("name.b.3", "789"),
                ("name.c", "123"),
                ("name.d", "true"),
                ("name.e.f", "abc"),
                ("name.e.g", "false"),
                ("name.e.h.i", "42"),
            ])
        );
    }

    #[test]
    fn list_of_objects() {
        let value = json!([
            {"Key": "env", "Value": "prod"},
            {"Key": "team", "Value": ""},
        ]);
        assert_eq!(
            params(value, "Tag"),
            pairs(&[
                ("Tag.1.Key", "env"),
                ("Tag.1.Value", "prod"),
                ("Tag.2.Key", "team"),
                ("Tag.2.Value", ""),
            ])
        );
    }

    #[test]
    fn array() {
        let value = json!([1, 3, 5, 7]);
        assert_eq!(
            params(value, "name"),
            pairs(&[
                ("name.1", "1"),
                ("name.2", "3"),
                ("name.3", "5"),
                ("name.4", "7"),
            ])
        );
    }

    #[test]
    fn empty_array() {
        assert_eq!(params(json!([]), "name"), Vec::new());
    }

    #[test]
    fn null() {
        assert_eq!(params(json!(null), "name"), Vec::new());
        assert_eq!(
            params(json!([{"a": null, "b": "x"}]), "name"),
            pairs(&[("name.1.b", "x")])
        );
    }

    #[test]
    fn scalars() {
        assert_eq!(params(json!("abc123"), "name"), pairs(&[("name", "abc123")]));
        assert_eq!(params(json!(7.5), "name"), pairs(&[("name", "7.5")]));
        assert_eq!(params(json!(true), "name"), pairs(&[("name", "true")]));
        assert_eq!(params(json!(0), "name"), pairs(&[("name", "0")]));
    }

    #[test]
    fn partition_fields() {
        let object = json!({
            "LoadBalancerId": "nlb-123",
            "MaxResults": 0,
            "DryRun": false,
            "Description": "",
            "Unset": null,
            "Tag": [{"Key": "env"}],
            "DeletionProtectionConfig": {"Enabled": true},
        });
        let Value::Object(object) = object else {
            unreachable!("json! object literal");
        };
        let got = partition(object);
        assert_eq!(
            got.simple.into_iter().collect::<Vec<_>>(),
            pairs(&[
                ("Description", ""),
                ("DryRun", "false"),
                ("LoadBalancerId", "nlb-123"),
                ("MaxResults", "0"),
            ])
        );
        assert_eq!(
            got.structured,
            vec![
                ("Tag".to_string(), json!([{"Key": "env"}])),
                (
                    "DeletionProtectionConfig".to_string(),
                    json!({"Enabled": true})
                ),
            ]
        );
    }
}
