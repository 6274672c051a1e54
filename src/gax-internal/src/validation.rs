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

//! Check request constraints before a request is sent.
//!
//! Generated request types implement [Validate] by listing their constraints
//! against a [Validator]. The validator gathers every violation, callers get
//! the complete list in a single [ValidationError].

use gax::error::{Error, FieldViolation, ValidationError};
use std::fmt::Display;

/// Implemented by request types and their nested objects.
pub trait Validate {
    /// Records the violations of `self` in `validator`.
    fn check(&self, validator: &mut Validator);

    /// Returns an error listing all the violations, if any.
    fn validate(&self) -> gax::Result<()> {
        let mut validator = Validator::default();
        self.check(&mut validator);
        validator.finish()
    }
}

/// Gathers constraint violations, using wire names as field paths.
#[derive(Debug, Default)]
pub struct Validator {
    prefix: String,
    violations: Vec<FieldViolation>,
}

impl Validator {
    fn path(&self, name: &str) -> String {
        format!("{}{name}", self.prefix)
    }

    fn violation<D: Into<String>>(&mut self, name: &str, description: D) {
        let field = self.path(name);
        self.violations.push(FieldViolation::new(field, description));
    }

    pub fn required<T>(&mut self, name: &str, value: &Option<T>) -> &mut Self {
        if value.is_none() {
            self.violation(name, "field is required");
        }
        self
    }

    pub fn max_length(&mut self, name: &str, value: &Option<String>, max: usize) -> &mut Self {
        if let Some(v) = value {
            let len = v.chars().count();
            if len > max {
                self.violation(
                    name,
                    format!("length {len} exceeds the maximum length {max}"),
                );
            }
        }
        self
    }

    pub fn min_length(&mut self, name: &str, value: &Option<String>, min: usize) -> &mut Self {
        if let Some(v) = value {
            let len = v.chars().count();
            if len < min {
                self.violation(
                    name,
                    format!("length {len} is below the minimum length {min}"),
                );
            }
        }
        self
    }

    pub fn range<T>(&mut self, name: &str, value: &Option<T>, min: T, max: T) -> &mut Self
    where
        T: PartialOrd + Display + Copy,
    {
        if let Some(v) = value {
            if *v < min || *v > max {
                self.violation(name, format!("value {v} is outside the range [{min}, {max}]"));
            }
        }
        self
    }

    pub fn one_of(&mut self, name: &str, value: &Option<String>, allowed: &[&str]) -> &mut Self {
        if let Some(v) = value {
            if !allowed.contains(&v.as_str()) {
                self.violation(
                    name,
                    format!("value {v} is not one of [{}]", allowed.join(", ")),
                );
            }
        }
        self
    }

    pub fn max_items<T>(&mut self, name: &str, value: &Option<Vec<T>>, max: usize) -> &mut Self {
        if let Some(v) = value {
            if v.len() > max {
                self.violation(
                    name,
                    format!("{} items exceed the maximum of {max}", v.len()),
                );
            }
        }
        self
    }

    pub fn min_items<T>(&mut self, name: &str, value: &Option<Vec<T>>, min: usize) -> &mut Self {
        if let Some(v) = value {
            if v.len() < min {
                self.violation(
                    name,
                    format!("{} items are below the minimum of {min}", v.len()),
                );
            }
        }
        self
    }

    /// Validates a nested object, its fields are reported as `Name.Field`.
    pub fn nested<T: Validate>(&mut self, name: &str, value: &Option<T>) -> &mut Self {
        if let Some(v) = value {
            self.child(self.path(name), v);
        }
        self
    }

    /// Validates each element of a list, fields are reported as
    /// `Name.N.Field`, with `N` starting at 1.
    pub fn each<T: Validate>(&mut self, name: &str, value: &Option<Vec<T>>) -> &mut Self {
        if let Some(items) = value {
            for (i, v) in items.iter().enumerate() {
                self.child(format!("{}.{}", self.path(name), i + 1), v);
            }
        }
        self
    }

    fn child<T: Validate>(&mut self, path: String, value: &T) {
        let mut child = Validator {
            prefix: format!("{path}."),
            violations: Vec::new(),
        };
        value.check(&mut child);
        self.violations.append(&mut child.violations);
    }

    pub fn finish(self) -> gax::Result<()> {
        if self.violations.is_empty() {
            return Ok(());
        }
        Err(Error::validation(ValidationError::new(self.violations)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::error::Error as _;

    #[derive(Default)]
    struct Mapping {
        zone_id: Option<String>,
        v_switch_id: Option<String>,
    }
    impl Validate for Mapping {
        fn check(&self, v: &mut Validator) {
            v.required("ZoneId", &self.zone_id)
                .required("VSwitchId", &self.v_switch_id);
        }
    }

    #[derive(Default)]
    struct Request {
        id: Option<String>,
        name: Option<String>,
        kind: Option<String>,
        max_results: Option<i32>,
        mappings: Option<Vec<Mapping>>,
        primary: Option<Mapping>,
    }
    impl Validate for Request {
        fn check(&self, v: &mut Validator) {
            v.required("Id", &self.id)
                .min_length("Name", &self.name, 2)
                .max_length("Name", &self.name, 8)
                .one_of("Kind", &self.kind, &["Internet", "Intranet"])
                .range("MaxResults", &self.max_results, 1, 100)
                .min_items("Mappings", &self.mappings, 1)
                .max_items("Mappings", &self.mappings, 2)
                .each("Mappings", &self.mappings)
                .nested("Primary", &self.primary);
        }
    }

    fn violations(request: &Request) -> Vec<String> {
        let Err(e) = request.validate() else {
            return Vec::new();
        };
        assert!(e.is_validation(), "{e:?}");
        e.source()
            .and_then(|s| s.downcast_ref::<ValidationError>())
            .map(|v| v.violations().iter().map(|f| f.field.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn valid() {
        let request = Request {
            id: Some("id".into()),
            name: Some("abc".into()),
            kind: Some("Internet".into()),
            max_results: Some(100),
            mappings: Some(vec![Mapping {
                zone_id: Some("z".into()),
                v_switch_id: Some("v".into()),
            }]),
            primary: None,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn gathers_all_violations() {
        let request = Request {
            name: Some("a".into()),
            kind: Some("Public".into()),
            max_results: Some(0),
            mappings: Some(vec![]),
            ..Default::default()
        };
        assert_eq!(
            violations(&request),
            vec!["Id", "Name", "Kind", "MaxResults", "Mappings"]
        );
    }

    #[test]
    fn zero_values_are_present() {
        // A required field set to an empty string is present.
        let request = Request {
            id: Some(String::new()),
            ..Default::default()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn nested_paths() {
        let request = Request {
            id: Some("id".into()),
            mappings: Some(vec![
                Mapping {
                    zone_id: Some("z".into()),
                    v_switch_id: Some("v".into()),
                },
                Mapping {
                    zone_id: Some("z".into()),
                    ..Default::default()
                },
                Mapping::default(),
            ]),
            primary: Some(Mapping::default()),
            ..Default::default()
        };
        assert_eq!(
            violations(&request),
            vec![
                "Mappings",
                "Mappings.2.VSwitchId",
                "Mappings.3.ZoneId",
                "Mappings.3.VSwitchId",
                "Primary.ZoneId",
                "Primary.VSwitchId",
            ]
        );
    }

    #[test]
    fn length_counts_characters() {
        let request = Request {
            id: Some("id".into()),
            name: Some("负载均衡".into()),
            ..Default::default()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn descriptions() {
        let request = Request {
            id: Some("id".into()),
            max_results: Some(101),
            ..Default::default()
        };
        let err = request.validate().unwrap_err();
        let got = err.to_string();
        assert!(got.contains("MaxResults"), "{got}");
        assert!(got.contains("[1, 100]"), "{got}");
    }
}
