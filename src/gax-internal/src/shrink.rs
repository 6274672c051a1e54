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

//! Encode structured parameters as a single string.
//!
//! Some operations accept lists or objects as one parameter holding their
//! serialized form, instead of one parameter per leaf. The parameter keeps the
//! wire name of the field, only its value changes.

use gax::error::Error;
use serde_json::Value;

/// The supported serialization styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShrinkStyle {
    /// Compact JSON, object members in declaration order.
    Json,
}

/// Encodes `value` as the parameter `name`.
///
/// Returns `None` for `null` values, which never produce a parameter.
///
/// # Example
/// ```
/// # use alibabacloud_gax_internal::shrink::{encode, ShrinkStyle};
/// let value = serde_json::json!([{"Key": "env", "Value": "prod"}]);
/// let got = encode("Tag", &value, ShrinkStyle::Json)?;
/// assert_eq!(got, Some(("Tag".to_string(), r#"[{"Key":"env","Value":"prod"}]"#.to_string())));
/// # Ok::<(), gax::error::Error>(())
/// ```
pub fn encode(
    name: &str,
    value: &Value,
    style: ShrinkStyle,
) -> gax::Result<Option<(String, String)>> {
    if value.is_null() {
        return Ok(None);
    }
    let encoded = match style {
        ShrinkStyle::Json => serde_json::to_string(value).map_err(Error::ser)?,
    };
    Ok(Some((name.to_string(), encoded)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    type TestResult = anyhow::Result<()>;

    #[test]
    fn json_list() -> TestResult {
        let value = json!([
            {"VSwitchId": "vsw-1", "ZoneId": "cn-hangzhou-a"},
            {"VSwitchId": "vsw-2", "ZoneId": "cn-hangzhou-b"},
        ]);
        let want = concat!(
            r#"[{"VSwitchId":"vsw-1","ZoneId":"cn-hangzhou-a"},"#,
            r#"{"VSwitchId":"vsw-2","ZoneId":"cn-hangzhou-b"}]"#,
        );
        let got = encode("ZoneMappings", &value, ShrinkStyle::Json)?;
        assert_eq!(got, Some(("ZoneMappings".to_string(), want.to_string())));
        Ok(())
    }

    #[test]
    fn declaration_order() -> TestResult {
        // The object members are not sorted.
        let value = json!({"Zeta": 1, "Alpha": 2});
        let got = encode("Config", &value, ShrinkStyle::Json)?;
        assert_eq!(
            got.map(|(_, v)| v).as_deref(),
            Some(r#"{"Zeta":1,"Alpha":2}"#)
        );
        Ok(())
    }

    #[test]
    fn deterministic() -> TestResult {
        let value = json!([{"Key": "env", "Value": "prod"}, {"Key": "team", "Value": "net"}]);
        let first = encode("Tag", &value, ShrinkStyle::Json)?;
        let second = encode("Tag", &value, ShrinkStyle::Json)?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn null() -> TestResult {
        let got = encode("Tag", &Value::Null, ShrinkStyle::Json)?;
        assert_eq!(got, None);
        Ok(())
    }

    #[test]
    fn empty_list() -> TestResult {
        let got = encode("Tag", &json!([]), ShrinkStyle::Json)?;
        assert_eq!(got, Some(("Tag".to_string(), "[]".to_string())));
        Ok(())
    }
}
