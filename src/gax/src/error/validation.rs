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

/// Describes all the problems found in a request before it is sent.
///
/// The client libraries check every declared constraint, and report all the
/// violations at once.
///
/// # Example
/// ```
/// # use alibabacloud_gax::error::{FieldViolation, ValidationError};
/// let error = ValidationError::missing("ListenerId");
/// assert_eq!(error.violations(), &[FieldViolation::new("ListenerId", "field is required")]);
/// ```
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
#[error("{}", format_violations(.violations))]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Creates a new error from a list of violations.
    pub fn new<I>(violations: I) -> Self
    where
        I: IntoIterator<Item = FieldViolation>,
    {
        Self {
            violations: violations.into_iter().collect(),
        }
    }

    /// A shorthand for a single missing required field.
    pub fn missing<T: Into<String>>(field: T) -> Self {
        Self::new([FieldViolation::new(field, "field is required")])
    }

    /// The fields that failed validation, in request declaration order.
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }
}

/// A single field that failed validation.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldViolation {
    /// The wire path of the field, for example `ZoneMappings.2.VSwitchId`.
    pub field: String,
    /// What constraint was violated.
    pub description: String,
}

impl FieldViolation {
    pub fn new<F, D>(field: F, description: D) -> Self
    where
        F: Into<String>,
        D: Into<String>,
    {
        Self {
            field: field.into(),
            description: description.into(),
        }
    }
}

fn format_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.description))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let error = ValidationError::new([
            FieldViolation::new("VpcId", "field is required"),
            FieldViolation::new("MaxResults", "must be in [1, 100]"),
        ]);
        let got = error.to_string();
        assert!(got.contains("VpcId: field is required"), "{got}");
        assert!(got.contains("MaxResults: must be in [1, 100]"), "{got}");
        assert_eq!(error.violations().len(), 2);
    }

    #[test]
    fn missing() {
        let error = ValidationError::missing("ServerGroupId");
        assert_eq!(
            error.violations(),
            &[FieldViolation::new("ServerGroupId", "field is required")]
        );
    }
}
