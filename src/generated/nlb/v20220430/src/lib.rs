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
//
// Code generated by sidekick. DO NOT EDIT.

//! Alibaba Cloud Client Libraries for Rust - Network Load Balancer API
//!
//! This crate contains traits, types, and functions to interact with the
//! Network Load Balancer (NLB) API, version `2022-04-30`. Most applications
//! use the structs defined in the [client] module.
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use alibabacloud_nlb_v20220430::client::NetworkLoadBalancer;
//! use alibabacloud_nlb_v20220430::model::DeleteLoadBalancerRequest;
//! let client = NetworkLoadBalancer::builder()
//!     .with_region("cn-shanghai")
//!     .build()
//!     .await?;
//! let response = client
//!     .delete_load_balancer(
//!         DeleteLoadBalancerRequest::new().set_load_balancer_id("nlb-123456"),
//!     )
//!     .send()
//!     .await?;
//! println!("started job {:?}", response.body().job_id);
//! # anyhow::Result::<()>::Ok(()) });
//! ```

/// The messages and enums that are part of this client library.
pub mod model;

/// The descriptors of the operations in this client library.
pub mod operation;

pub use gax::Result;
pub use gax::error::Error;

#[allow(rustdoc::invalid_html_tags)]
#[allow(rustdoc::redundant_explicit_links)]
pub mod stub;

/// Concrete implementations of this client library traits.
pub mod client;

/// Request builders.
pub mod builder;

#[doc(hidden)]
pub(crate) mod tracing;

#[doc(hidden)]
pub(crate) mod transport;

pub(crate) mod validation;

pub(crate) mod info {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub(crate) const SERVICE_INFO: gaxi::options::ServiceInfo = gaxi::options::ServiceInfo {
        product: "nlb",
        default_region: "cn-hangzhou",
        client_version: VERSION,
    };
}
