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

//! Telemetry header helpers.

use crate::options::ServiceInfo;

mod build_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/build_env.rs"));

    pub(crate) const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Format the default `user-agent` header value for a service client.
///
/// Applications may append their own suffix using the request options.
pub fn user_agent(info: &ServiceInfo) -> String {
    // Strip out the initial "rustc " string from `RUSTC_VERSION`. If not
    // found, leave RUSTC_VERSION unchanged.
    let rustc_version = build_info::RUSTC_VERSION;
    let rustc_version = rustc_version
        .strip_prefix("rustc ")
        .unwrap_or(build_info::RUSTC_VERSION);

    // Capture the gax version too.
    let gax_version = build_info::PKG_VERSION;

    format!(
        "AlibabaCloud ({}; {}) Rust/{rustc_version} Core/{gax_version} {}/{}",
        std::env::consts::OS,
        std::env::consts::ARCH,
        info.product,
        info.client_version
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn breakdown(formatted: &str) -> HashMap<String, String> {
        formatted
            .split(" ")
            .filter_map(|v| v.find('/').map(|i| v.split_at(i)))
            .map(|(k, v)| (k, &v[1..]))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn format() {
        let info = ServiceInfo {
            product: "nlb",
            default_region: "unused",
            client_version: "1.2.3",
        };
        let header = user_agent(&info);
        assert!(header.starts_with("AlibabaCloud ("), "{header}");
        assert!(header.contains(std::env::consts::OS), "{header}");

        let fields = breakdown(header.as_str());
        let got = fields.get("nlb").map(String::to_owned);
        assert_eq!(got.as_deref(), Some("1.2.3"));

        let got = fields.get("Core").map(String::to_owned);
        assert_eq!(got.as_deref(), Some(build_info::PKG_VERSION));

        let got = fields.get("Rust").map(String::to_owned);
        let want = build_info::RUSTC_VERSION;
        assert!(
            got.as_ref()
                .map(|s| want.contains(s) && !s.is_empty())
                .unwrap_or(false),
            "mismatched rustc version {want} and {got:?}"
        );
    }
}
