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

//! Assemble a request object into wire parameters.

use crate::operation::{OperationDescriptor, ParameterLocation};
use crate::query_parameter::{flatten, partition};
use crate::shrink;
use gax::error::Error;
use std::collections::BTreeMap;

/// The wire-level form of a request, ready for the transport.
///
/// Immutable once assembled.
#[derive(Clone, Debug, PartialEq)]
pub struct WireRequest {
    descriptor: &'static OperationDescriptor,
    query: BTreeMap<String, String>,
    body: BTreeMap<String, String>,
}

impl WireRequest {
    /// Shapes `request` using the conventions declared by `descriptor`.
    ///
    /// Unset fields produce no parameters. Fields listed as shrink-encoded in
    /// the descriptor produce a single parameter, other lists and objects are
    /// flattened.
    pub fn new<R>(descriptor: &'static OperationDescriptor, request: &R) -> gax::Result<Self>
    where
        R: serde::ser::Serialize,
    {
        let value = serde_json::to_value(request).map_err(Error::ser)?;
        let object = match value {
            serde_json::Value::Object(o) => o,
            v => {
                return Err(Error::ser(format!(
                    "the request for {} is not an object: {v}",
                    descriptor.action
                )));
            }
        };
        let partition = partition(object);
        let mut params = partition.simple;
        for (name, value) in &partition.structured {
            match descriptor.shrink_style(name) {
                Some(style) => {
                    if let Some((k, v)) = shrink::encode(name, value, style)? {
                        params.insert(k, v);
                    }
                }
                None => flatten(name, value, &mut params),
            }
        }
        let (query, body) = match descriptor.location {
            ParameterLocation::Query => (params, BTreeMap::new()),
            ParameterLocation::Body => (BTreeMap::new(), params),
        };
        Ok(Self {
            descriptor,
            query,
            body,
        })
    }

    pub fn descriptor(&self) -> &'static OperationDescriptor {
        self.descriptor
    }

    pub fn query(&self) -> &BTreeMap<String, String> {
        &self.query
    }

    pub fn body(&self) -> &BTreeMap<String, String> {
        &self.body
    }

    /// All the parameters, regardless of their location.
    pub fn parameters(&self) -> BTreeMap<&str, &str> {
        self.query
            .iter()
            .chain(self.body.iter())
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::{Method, ShrinkField};
    use crate::shrink::ShrinkStyle;
    use pretty_assertions::assert_eq;

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, serde::Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct FakeRequest {
        name: Option<String>,
        count: Option<i32>,
        enabled: Option<bool>,
        tag: Option<Vec<FakeTag>>,
    }

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, serde::Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct FakeTag {
        key: Option<String>,
        value: Option<String>,
    }

    static POST: OperationDescriptor = OperationDescriptor::rpc("Fake", "v1", Method::Post);
    static GET: OperationDescriptor = OperationDescriptor::rpc("Fake", "v1", Method::Get);
    static SHRINK: OperationDescriptor = OperationDescriptor::rpc("Fake", "v1", Method::Get)
        .with_shrink(&[ShrinkField {
            field: "Tag",
            style: ShrinkStyle::Json,
        }]);

    fn tags() -> Vec<FakeTag> {
        vec![FakeTag {
            key: Some("env".into()),
            value: Some("prod".into()),
        }]
    }

    fn owned(items: &[(&str, &str)]) -> BTreeMap<String, String> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_request() -> anyhow::Result<()> {
        let got = WireRequest::new(&POST, &FakeRequest::default())?;
        assert!(got.query().is_empty(), "{got:?}");
        assert!(got.body().is_empty(), "{got:?}");
        assert_eq!(got.descriptor(), &POST);
        Ok(())
    }

    #[test]
    fn zero_values_are_sent() -> anyhow::Result<()> {
        let request = FakeRequest {
            name: Some(String::new()),
            count: Some(0),
            enabled: Some(false),
            tag: Some(Vec::new()),
        };
        let got = WireRequest::new(&POST, &request)?;
        assert_eq!(
            got.body(),
            &owned(&[("Count", "0"), ("Enabled", "false"), ("Name", "")])
        );
        Ok(())
    }

    #[test]
    fn body_location() -> anyhow::Result<()> {
        let request = FakeRequest {
            name: Some("abc".into()),
            tag: Some(tags()),
            ..Default::default()
        };
        let got = WireRequest::new(&POST, &request)?;
        assert!(got.query().is_empty(), "{got:?}");
        assert_eq!(
            got.body(),
            &owned(&[("Name", "abc"), ("Tag.1.Key", "env"), ("Tag.1.Value", "prod")])
        );
        Ok(())
    }

    #[test]
    fn query_location() -> anyhow::Result<()> {
        let request = FakeRequest {
            count: Some(7),
            ..Default::default()
        };
        let got = WireRequest::new(&GET, &request)?;
        assert!(got.body().is_empty(), "{got:?}");
        assert_eq!(got.query(), &owned(&[("Count", "7")]));
        assert_eq!(got.parameters(), BTreeMap::from([("Count", "7")]));
        Ok(())
    }

    #[test]
    fn shrink() -> anyhow::Result<()> {
        let request = FakeRequest {
            tag: Some(tags()),
            ..Default::default()
        };
        let got = WireRequest::new(&SHRINK, &request)?;
        assert_eq!(
            got.query(),
            &owned(&[("Tag", r#"[{"Key":"env","Value":"prod"}]"#)])
        );
        Ok(())
    }

    #[test]
    fn not_an_object() {
        let got = WireRequest::new(&POST, &"a string");
        assert!(matches!(&got, Err(e) if e.is_serialization()), "{got:?}");
    }
}
