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

pub use gax::credentials::Credentials;

// The client configuration for [crate::http::ReqwestClient].
pub type ClientConfig = gax::client_builder::internal::ClientConfig<Credentials>;

pub(crate) const LOGGING_VAR: &str = "ALIBABA_CLOUD_RUST_LOGGING";
pub(crate) const REGION_VAR: &str = "ALIBABA_CLOUD_REGION_ID";

/// Information about a service, used to compute its endpoint.
#[derive(Copy, Clone, Debug)]
pub struct ServiceInfo {
    /// The endpoint prefix, e.g., "nlb".
    pub product: &'static str,
    /// The region used when none is configured.
    pub default_region: &'static str,
    /// The version of the client library, reported in the user agent.
    pub client_version: &'static str,
}

// Returns true if the environment or client configuration enables tracing.
pub fn tracing_enabled(config: &ClientConfig) -> bool {
    if config.tracing {
        return true;
    }
    std::env::var(LOGGING_VAR)
        .map(|v| v == "true")
        .unwrap_or(false)
}

/// Computes the endpoint for a client.
///
/// An explicit endpoint wins, then the configured region, then the region in
/// the environment, and finally the default region of the service.
pub fn resolve_endpoint(config: &ClientConfig, info: &ServiceInfo) -> String {
    if let Some(e) = &config.endpoint {
        return e.trim_end_matches('/').to_string();
    }
    let region = config
        .region
        .clone()
        .or_else(|| std::env::var(REGION_VAR).ok().filter(|r| !r.is_empty()))
        .unwrap_or_else(|| info.default_region.to_string());
    format!("https://{}.{region}.aliyuncs.com", info.product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;

    const INFO: ServiceInfo = ServiceInfo {
        product: "nlb",
        default_region: "cn-hangzhou",
        client_version: "1.2.3",
    };

    // This test must run serially because it manipulates the environment.
    #[test]
    #[serial_test::serial]
    fn config_tracing() {
        let _e = ScopedEnv::remove(LOGGING_VAR);
        let config = ClientConfig::default();
        assert!(!tracing_enabled(&config), "expected tracing to be disabled");
        let mut config = ClientConfig::default();
        config.tracing = true;
        let config = config;
        assert!(tracing_enabled(&config), "expected tracing to be enabled");

        let _e = ScopedEnv::set(LOGGING_VAR, "true");
        let config = ClientConfig::default();
        assert!(tracing_enabled(&config), "expected tracing to be enabled");

        let _e = ScopedEnv::set(LOGGING_VAR, "not-true");
        let config = ClientConfig::default();
        assert!(!tracing_enabled(&config), "expected tracing to be disabled");
    }

    #[test]
    #[serial_test::serial]
    fn endpoint_default() {
        let _e = ScopedEnv::remove(REGION_VAR);
        let config = ClientConfig::default();
        assert_eq!(
            resolve_endpoint(&config, &INFO),
            "https://nlb.cn-hangzhou.aliyuncs.com"
        );
    }

    #[test]
    #[serial_test::serial]
    fn endpoint_from_env() {
        let _e = ScopedEnv::set(REGION_VAR, "cn-beijing");
        let config = ClientConfig::default();
        assert_eq!(
            resolve_endpoint(&config, &INFO),
            "https://nlb.cn-beijing.aliyuncs.com"
        );
    }

    #[test]
    #[serial_test::serial]
    fn endpoint_from_region() {
        let _e = ScopedEnv::set(REGION_VAR, "cn-beijing");
        let mut config = ClientConfig::default();
        config.region = Some("ap-southeast-1".to_string());
        assert_eq!(
            resolve_endpoint(&config, &INFO),
            "https://nlb.ap-southeast-1.aliyuncs.com"
        );
    }

    #[test]
    #[serial_test::serial]
    fn endpoint_explicit() {
        let _e = ScopedEnv::set(REGION_VAR, "cn-beijing");
        let mut config = ClientConfig::default();
        config.region = Some("ap-southeast-1".to_string());
        config.endpoint = Some("http://127.0.0.1:8080/".to_string());
        assert_eq!(resolve_endpoint(&config, &INFO), "http://127.0.0.1:8080");
    }
}
