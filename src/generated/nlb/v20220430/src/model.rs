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

#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::bare_urls)]

//! The request and response messages of the NLB `2022-04-30` API.
//!
//! Every field is optional. Unset fields are never sent to the service,
//! fields set to an empty or zero value are sent with that value.

/// The request message for [NetworkLoadBalancer::create_load_balancer][crate::client::NetworkLoadBalancer::create_load_balancer].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateLoadBalancerRequest {
    /// The type of the load balancer, `Network`.
    pub load_balancer_type: std::option::Option<std::string::String>,

    /// The name of the load balancer.
    pub load_balancer_name: std::option::Option<std::string::String>,

    /// The network type, `Internet` or `Intranet`.
    pub address_type: std::option::Option<std::string::String>,

    /// The IP version, `ipv4` or `DualStack`.
    pub address_ip_version: std::option::Option<std::string::String>,

    /// The VPC of the load balancer.
    pub vpc_id: std::option::Option<std::string::String>,

    /// The zones of the load balancer.
    pub zone_mappings: std::option::Option<std::vec::Vec<crate::model::ZoneMapping>>,

    /// The resource group.
    pub resource_group_id: std::option::Option<std::string::String>,

    /// The EIP bandwidth plan.
    pub bandwidth_package_id: std::option::Option<std::string::String>,

    /// The billing configuration.
    pub load_balancer_billing_config: std::option::Option<crate::model::LoadBalancerBillingConfig>,

    /// The deletion protection configuration.
    pub deletion_protection_config: std::option::Option<crate::model::DeletionProtectionConfig>,

    /// The modification protection configuration.
    pub modification_protection_config:
        std::option::Option<crate::model::ModificationProtectionConfig>,

    /// The tags attached to the load balancer.
    pub tag: std::option::Option<std::vec::Vec<crate::model::Tag>>,

    /// A client token used to ensure that the request is idempotent.
    pub client_token: std::option::Option<std::string::String>,

    /// If true, only checks the request, without performing the operation.
    pub dry_run: std::option::Option<bool>,

    /// The region of the resources.
    pub region_id: std::option::Option<std::string::String>,
}

impl CreateLoadBalancerRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [load_balancer_type][crate::model::CreateLoadBalancerRequest::load_balancer_type].
    pub fn set_load_balancer_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.load_balancer_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [load_balancer_name][crate::model::CreateLoadBalancerRequest::load_balancer_name].
    pub fn set_load_balancer_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.load_balancer_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [address_type][crate::model::CreateLoadBalancerRequest::address_type].
    pub fn set_address_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.address_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [address_ip_version][crate::model::CreateLoadBalancerRequest::address_ip_version].
    pub fn set_address_ip_version<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.address_ip_version = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [vpc_id][crate::model::CreateLoadBalancerRequest::vpc_id].
    pub fn set_vpc_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.vpc_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [zone_mappings][crate::model::CreateLoadBalancerRequest::zone_mappings].
    pub fn set_zone_mappings<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::ZoneMapping>,
    {
        self.zone_mappings = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [resource_group_id][crate::model::CreateLoadBalancerRequest::resource_group_id].
    pub fn set_resource_group_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [bandwidth_package_id][crate::model::CreateLoadBalancerRequest::bandwidth_package_id].
    pub fn set_bandwidth_package_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bandwidth_package_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [load_balancer_billing_config][crate::model::CreateLoadBalancerRequest::load_balancer_billing_config].
    pub fn set_load_balancer_billing_config<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::LoadBalancerBillingConfig>,
    {
        self.load_balancer_billing_config = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [load_balancer_billing_config][crate::model::CreateLoadBalancerRequest::load_balancer_billing_config].
    pub fn set_or_clear_load_balancer_billing_config<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::LoadBalancerBillingConfig>,
    {
        self.load_balancer_billing_config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [deletion_protection_config][crate::model::CreateLoadBalancerRequest::deletion_protection_config].
    pub fn set_deletion_protection_config<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::DeletionProtectionConfig>,
    {
        self.deletion_protection_config = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [deletion_protection_config][crate::model::CreateLoadBalancerRequest::deletion_protection_config].
    pub fn set_or_clear_deletion_protection_config<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::DeletionProtectionConfig>,
    {
        self.deletion_protection_config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [modification_protection_config][crate::model::CreateLoadBalancerRequest::modification_protection_config].
    pub fn set_modification_protection_config<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ModificationProtectionConfig>,
    {
        self.modification_protection_config = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [modification_protection_config][crate::model::CreateLoadBalancerRequest::modification_protection_config].
    pub fn set_or_clear_modification_protection_config<T>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self
    where
        T: std::convert::Into<crate::model::ModificationProtectionConfig>,
    {
        self.modification_protection_config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tag][crate::model::CreateLoadBalancerRequest::tag].
    pub fn set_tag<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Tag>,
    {
        self.tag = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [client_token][crate::model::CreateLoadBalancerRequest::client_token].
    pub fn set_client_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [dry_run][crate::model::CreateLoadBalancerRequest::dry_run].
    pub fn set_dry_run<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.dry_run = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [region_id][crate::model::CreateLoadBalancerRequest::region_id].
    pub fn set_region_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region_id = std::option::Option::Some(v.into());
        self
    }
}

/// The response message for [NetworkLoadBalancer::create_load_balancer][crate::client::NetworkLoadBalancer::create_load_balancer].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateLoadBalancerResponse {
    /// The id of the request.
    pub request_id: std::option::Option<std::string::String>,

    /// The id of the new load balancer.
    pub loadbalancer_id: std::option::Option<std::string::String>,

    /// The id of the order.
    pub order_id: std::option::Option<i64>,

    /// The id of the asynchronous job.
    pub job_id: std::option::Option<std::string::String>,
}

impl CreateLoadBalancerResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][crate::model::CreateLoadBalancerResponse::request_id].
    pub fn set_request_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [loadbalancer_id][crate::model::CreateLoadBalancerResponse::loadbalancer_id].
    pub fn set_loadbalancer_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.loadbalancer_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [order_id][crate::model::CreateLoadBalancerResponse::order_id].
    pub fn set_order_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.order_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [job_id][crate::model::CreateLoadBalancerResponse::job_id].
    pub fn set_job_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.job_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [NetworkLoadBalancer::delete_load_balancer][crate::client::NetworkLoadBalancer::delete_load_balancer].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteLoadBalancerRequest {
    /// The id of the load balancer.
    pub load_balancer_id: std::option::Option<std::string::String>,

    /// A client token used to ensure that the request is idempotent.
    pub client_token: std::option::Option<std::string::String>,

    /// If true, only checks the request, without performing the operation.
    pub dry_run: std::option::Option<bool>,

    /// The region of the resources.
    pub region_id: std::option::Option<std::string::String>,
}

impl DeleteLoadBalancerRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [load_balancer_id][crate::model::DeleteLoadBalancerRequest::load_balancer_id].
    pub fn set_load_balancer_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.load_balancer_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [client_token][crate::model::DeleteLoadBalancerRequest::client_token].
    pub fn set_client_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [dry_run][crate::model::DeleteLoadBalancerRequest::dry_run].
    pub fn set_dry_run<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.dry_run = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [region_id][crate::model::DeleteLoadBalancerRequest::region_id].
    pub fn set_region_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region_id = std::option::Option::Some(v.into());
        self
    }
}

/// The response message for [NetworkLoadBalancer::delete_load_balancer][crate::client::NetworkLoadBalancer::delete_load_balancer].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteLoadBalancerResponse {
    /// The id of the request.
    pub request_id: std::option::Option<std::string::String>,

    /// The id of the asynchronous job.
    pub job_id: std::option::Option<std::string::String>,
}

impl DeleteLoadBalancerResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][crate::model::DeleteLoadBalancerResponse::request_id].
    pub fn set_request_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [job_id][crate::model::DeleteLoadBalancerResponse::job_id].
    pub fn set_job_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.job_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [NetworkLoadBalancer::get_load_balancer_attribute][crate::client::NetworkLoadBalancer::get_load_balancer_attribute].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetLoadBalancerAttributeRequest {
    /// The id of the load balancer.
    pub load_balancer_id: std::option::Option<std::string::String>,

    /// A client token used to ensure that the request is idempotent.
    pub client_token: std::option::Option<std::string::String>,

    /// If true, only checks the request, without performing the operation.
    pub dry_run: std::option::Option<bool>,

    /// The region of the resources.
    pub region_id: std::option::Option<std::string::String>,
}

impl GetLoadBalancerAttributeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [load_balancer_id][crate::model::GetLoadBalancerAttributeRequest::load_balancer_id].
    pub fn set_load_balancer_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.load_balancer_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [client_token][crate::model::GetLoadBalancerAttributeRequest::client_token].
    pub fn set_client_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [dry_run][crate::model::GetLoadBalancerAttributeRequest::dry_run].
    pub fn set_dry_run<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.dry_run = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [region_id][crate::model::GetLoadBalancerAttributeRequest::region_id].
    pub fn set_region_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region_id = std::option::Option::Some(v.into());
        self
    }
}

/// The response message for [NetworkLoadBalancer::get_load_balancer_attribute][crate::client::NetworkLoadBalancer::get_load_balancer_attribute].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetLoadBalancerAttributeResponse {
    /// The id of the request.
    pub request_id: std::option::Option<std::string::String>,

    /// The id of the load balancer.
    pub load_balancer_id: std::option::Option<std::string::String>,

    /// The name of the load balancer.
    pub load_balancer_name: std::option::Option<std::string::String>,

    /// The type of the load balancer, `Network`.
    pub load_balancer_type: std::option::Option<std::string::String>,

    /// The status of the load balancer.
    pub load_balancer_status: std::option::Option<std::string::String>,

    /// The business status of the load balancer.
    pub load_balancer_business_status: std::option::Option<std::string::String>,

    /// Either `Internet` or `Intranet`.
    pub address_type: std::option::Option<std::string::String>,

    /// Either `ipv4` or `DualStack`.
    pub address_ip_version: std::option::Option<std::string::String>,

    /// The IPv6 address type.
    pub ipv6_address_type: std::option::Option<std::string::String>,

    /// The domain name of the load balancer.
    #[serde(rename = "DNSName")]
    pub dns_name: std::option::Option<std::string::String>,

    /// The VPC of the load balancer.
    pub vpc_id: std::option::Option<std::string::String>,

    /// The zones of the load balancer.
    pub zone_mappings: std::option::Option<std::vec::Vec<crate::model::ZoneMappingAttribute>>,

    /// The creation time.
    pub create_time: std::option::Option<std::string::String>,

    /// The maximum number of new connections per second.
    pub cps: std::option::Option<i32>,

    /// The security groups of the load balancer.
    pub security_group_ids: std::option::Option<std::vec::Vec<std::string::String>>,

    /// If true, cross-zone load balancing is enabled.
    pub cross_zone_enabled: std::option::Option<bool>,

    /// The EIP bandwidth plan.
    pub bandwidth_package_id: std::option::Option<std::string::String>,

    /// The deletion protection configuration.
    pub deletion_protection_config: std::option::Option<crate::model::DeletionProtectionConfig>,

    /// The modification protection configuration.
    pub modification_protection_config:
        std::option::Option<crate::model::ModificationProtectionConfig>,

    /// The resource group.
    pub resource_group_id: std::option::Option<std::string::String>,

    /// The region.
    pub region_id: std::option::Option<std::string::String>,

    /// The tags attached to the resource.
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}

impl GetLoadBalancerAttributeResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][crate::model::GetLoadBalancerAttributeResponse::request_id].
    pub fn set_request_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [load_balancer_id][crate::model::GetLoadBalancerAttributeResponse::load_balancer_id].
    pub fn set_load_balancer_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.load_balancer_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [load_balancer_name][crate::model::GetLoadBalancerAttributeResponse::load_balancer_name].
    pub fn set_load_balancer_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.load_balancer_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [load_balancer_type][crate::model::GetLoadBalancerAttributeResponse::load_balancer_type].
    pub fn set_load_balancer_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.load_balancer_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [load_balancer_status][crate::model::GetLoadBalancerAttributeResponse::load_balancer_status].
    pub fn set_load_balancer_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.load_balancer_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [load_balancer_business_status][crate::model::GetLoadBalancerAttributeResponse::load_balancer_business_status].
    pub fn set_load_balancer_business_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.load_balancer_business_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [address_type][crate::model::GetLoadBalancerAttributeResponse::address_type].
    pub fn set_address_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.address_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [address_ip_version][crate::model::GetLoadBalancerAttributeResponse::address_ip_version].
    pub fn set_address_ip_version<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.address_ip_version = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [ipv6_address_type][crate::model::GetLoadBalancerAttributeResponse::ipv6_address_type].
    pub fn set_ipv6_address_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ipv6_address_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [dns_name][crate::model::GetLoadBalancerAttributeResponse::dns_name].
    pub fn set_dns_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.dns_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [vpc_id][crate::model::GetLoadBalancerAttributeResponse::vpc_id].
    pub fn set_vpc_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.vpc_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [zone_mappings][crate::model::GetLoadBalancerAttributeResponse::zone_mappings].
    pub fn set_zone_mappings<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::ZoneMappingAttribute>,
    {
        self.zone_mappings = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [create_time][crate::model::GetLoadBalancerAttributeResponse::create_time].
    pub fn set_create_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.create_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [cps][crate::model::GetLoadBalancerAttributeResponse::cps].
    pub fn set_cps<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.cps = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [security_group_ids][crate::model::GetLoadBalancerAttributeResponse::security_group_ids].
    pub fn set_security_group_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.security_group_ids =
            std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [cross_zone_enabled][crate::model::GetLoadBalancerAttributeResponse::cross_zone_enabled].
    pub fn set_cross_zone_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.cross_zone_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [bandwidth_package_id][crate::model::GetLoadBalancerAttributeResponse::bandwidth_package_id].
    pub fn set_bandwidth_package_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bandwidth_package_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [deletion_protection_config][crate::model::GetLoadBalancerAttributeResponse::deletion_protection_config].
    pub fn set_deletion_protection_config<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::DeletionProtectionConfig>,
    {
        self.deletion_protection_config = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [deletion_protection_config][crate::model::GetLoadBalancerAttributeResponse::deletion_protection_config].
    pub fn set_or_clear_deletion_protection_config<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::DeletionProtectionConfig>,
    {
        self.deletion_protection_config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [modification_protection_config][crate::model::GetLoadBalancerAttributeResponse::modification_protection_config].
    pub fn set_modification_protection_config<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ModificationProtectionConfig>,
    {
        self.modification_protection_config = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [modification_protection_config][crate::model::GetLoadBalancerAttributeResponse::modification_protection_config].
    pub fn set_or_clear_modification_protection_config<T>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self
    where
        T: std::convert::Into<crate::model::ModificationProtectionConfig>,
    {
        self.modification_protection_config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_group_id][crate::model::GetLoadBalancerAttributeResponse::resource_group_id].
    pub fn set_resource_group_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [region_id][crate::model::GetLoadBalancerAttributeResponse::region_id].
    pub fn set_region_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [tags][crate::model::GetLoadBalancerAttributeResponse::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Tag>,
    {
        self.tags = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// The request message for [NetworkLoadBalancer::list_load_balancers][crate::client::NetworkLoadBalancer::list_load_balancers].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListLoadBalancersRequest {
    /// Filters by load balancer id.
    pub load_balancer_ids: std::option::Option<std::vec::Vec<std::string::String>>,

    /// Filters by load balancer name.
    pub load_balancer_names: std::option::Option<std::vec::Vec<std::string::String>>,

    /// Filters by load balancer type.
    pub load_balancer_type: std::option::Option<std::string::String>,

    /// Filters by VPC.
    pub vpc_ids: std::option::Option<std::vec::Vec<std::string::String>>,

    /// Filters by network type.
    pub address_type: std::option::Option<std::string::String>,

    /// Filters by IP version.
    pub address_ip_version: std::option::Option<std::string::String>,

    /// Filters by status.
    pub load_balancer_status: std::option::Option<std::string::String>,

    /// Filters by zone.
    pub zone_id: std::option::Option<std::string::String>,

    /// Filters by resource group.
    pub resource_group_id: std::option::Option<std::string::String>,

    /// The tags used to filter the results.
    pub tag: std::option::Option<std::vec::Vec<crate::model::Tag>>,

    /// The token used to start the next query.
    pub next_token: std::option::Option<std::string::String>,

    /// The number of entries per page, from 1 to 100.
    pub max_results: std::option::Option<i32>,

    /// The region of the resources.
    pub region_id: std::option::Option<std::string::String>,
}

impl ListLoadBalancersRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [load_balancer_ids][crate::model::ListLoadBalancersRequest::load_balancer_ids].
    pub fn set_load_balancer_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.load_balancer_ids =
            std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [load_balancer_names][crate::model::ListLoadBalancersRequest::load_balancer_names].
    pub fn set_load_balancer_names<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.load_balancer_names =
            std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [load_balancer_type][crate::model::ListLoadBalancersRequest::load_balancer_type].
    pub fn set_load_balancer_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.load_balancer_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [vpc_ids][crate::model::ListLoadBalancersRequest::vpc_ids].
    pub fn set_vpc_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.vpc_ids = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [address_type][crate::model::ListLoadBalancersRequest::address_type].
    pub fn set_address_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.address_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [address_ip_version][crate::model::ListLoadBalancersRequest::address_ip_version].
    pub fn set_address_ip_version<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.address_ip_version = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [load_balancer_status][crate::model::ListLoadBalancersRequest::load_balancer_status].
    pub fn set_load_balancer_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.load_balancer_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [zone_id][crate::model::ListLoadBalancersRequest::zone_id].
    pub fn set_zone_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.zone_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [resource_group_id][crate::model::ListLoadBalancersRequest::resource_group_id].
    pub fn set_resource_group_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [tag][crate::model::ListLoadBalancersRequest::tag].
    pub fn set_tag<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Tag>,
    {
        self.tag = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [next_token][crate::model::ListLoadBalancersRequest::next_token].
    pub fn set_next_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [max_results][crate::model::ListLoadBalancersRequest::max_results].
    pub fn set_max_results<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.max_results = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [region_id][crate::model::ListLoadBalancersRequest::region_id].
    pub fn set_region_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region_id = std::option::Option::Some(v.into());
        self
    }
}

/// The response message for [NetworkLoadBalancer::list_load_balancers][crate::client::NetworkLoadBalancer::list_load_balancers].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListLoadBalancersResponse {
    /// The id of the request.
    pub request_id: std::option::Option<std::string::String>,

    /// The load balancers.
    pub load_balancers: std::option::Option<std::vec::Vec<crate::model::LoadBalancer>>,

    /// The total number of entries.
    pub total_count: std::option::Option<i32>,

    /// The token to retrieve the next page, empty on the last page.
    pub next_token: std::option::Option<std::string::String>,

    /// The number of entries per page.
    pub max_results: std::option::Option<i32>,
}

impl ListLoadBalancersResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][crate::model::ListLoadBalancersResponse::request_id].
    pub fn set_request_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [load_balancers][crate::model::ListLoadBalancersResponse::load_balancers].
    pub fn set_load_balancers<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LoadBalancer>,
    {
        self.load_balancers = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [total_count][crate::model::ListLoadBalancersResponse::total_count].
    pub fn set_total_count<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.total_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [next_token][crate::model::ListLoadBalancersResponse::next_token].
    pub fn set_next_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [max_results][crate::model::ListLoadBalancersResponse::max_results].
    pub fn set_max_results<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.max_results = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [NetworkLoadBalancer::update_load_balancer_attribute][crate::client::NetworkLoadBalancer::update_load_balancer_attribute].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UpdateLoadBalancerAttributeRequest {
    /// The id of the load balancer.
    pub load_balancer_id: std::option::Option<std::string::String>,

    /// The new name.
    pub load_balancer_name: std::option::Option<std::string::String>,

    /// Enables or disables cross-zone load balancing.
    pub cross_zone_enabled: std::option::Option<bool>,

    /// The maximum number of new connections per second.
    pub cps: std::option::Option<i32>,

    /// A client token used to ensure that the request is idempotent.
    pub client_token: std::option::Option<std::string::String>,

    /// If true, only checks the request, without performing the operation.
    pub dry_run: std::option::Option<bool>,

    /// The region of the resources.
    pub region_id: std::option::Option<std::string::String>,
}

impl UpdateLoadBalancerAttributeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [load_balancer_id][crate::model::UpdateLoadBalancerAttributeRequest::load_balancer_id].
    pub fn set_load_balancer_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.load_balancer_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [load_balancer_name][crate::model::UpdateLoadBalancerAttributeRequest::load_balancer_name].
    pub fn set_load_balancer_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.load_balancer_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [cross_zone_enabled][crate::model::UpdateLoadBalancerAttributeRequest::cross_zone_enabled].
    pub fn set_cross_zone_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.cross_zone_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [cps][crate::model::UpdateLoadBalancerAttributeRequest::cps].
    pub fn set_cps<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.cps = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [client_token][crate::model::UpdateLoadBalancerAttributeRequest::client_token].
    pub fn set_client_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [dry_run][crate::model::UpdateLoadBalancerAttributeRequest::dry_run].
    pub fn set_dry_run<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.dry_run = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [region_id][crate::model::UpdateLoadBalancerAttributeRequest::region_id].
    pub fn set_region_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region_id = std::option::Option::Some(v.into());
        self
    }
}

/// The response message for [NetworkLoadBalancer::update_load_balancer_attribute][crate::client::NetworkLoadBalancer::update_load_balancer_attribute].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UpdateLoadBalancerAttributeResponse {
    /// The id of the request.
    pub request_id: std::option::Option<std::string::String>,

    /// The id of the asynchronous job.
    pub job_id: std::option::Option<std::string::String>,
}

impl UpdateLoadBalancerAttributeResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][crate::model::UpdateLoadBalancerAttributeResponse::request_id].
    pub fn set_request_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [job_id][crate::model::UpdateLoadBalancerAttributeResponse::job_id].
    pub fn set_job_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.job_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [NetworkLoadBalancer::update_load_balancer_address_type_config][crate::client::NetworkLoadBalancer::update_load_balancer_address_type_config].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UpdateLoadBalancerAddressTypeConfigRequest {
    /// The id of the load balancer.
    pub load_balancer_id: std::option::Option<std::string::String>,

    /// The new network type.
    pub address_type: std::option::Option<std::string::String>,

    /// The zones and elastic IP addresses to use.
    pub zone_mappings: std::option::Option<std::vec::Vec<crate::model::ZoneMapping>>,

    /// A client token used to ensure that the request is idempotent.
    pub client_token: std::option::Option<std::string::String>,

    /// If true, only checks the request, without performing the operation.
    pub dry_run: std::option::Option<bool>,

    /// The region of the resources.
    pub region_id: std::option::Option<std::string::String>,
}

impl UpdateLoadBalancerAddressTypeConfigRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [load_balancer_id][crate::model::UpdateLoadBalancerAddressTypeConfigRequest::load_balancer_id].
    pub fn set_load_balancer_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.load_balancer_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [address_type][crate::model::UpdateLoadBalancerAddressTypeConfigRequest::address_type].
    pub fn set_address_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.address_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [zone_mappings][crate::model::UpdateLoadBalancerAddressTypeConfigRequest::zone_mappings].
    pub fn set_zone_mappings<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::ZoneMapping>,
    {
        self.zone_mappings = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [client_token][crate::model::UpdateLoadBalancerAddressTypeConfigRequest::client_token].
    pub fn set_client_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [dry_run][crate::model::UpdateLoadBalancerAddressTypeConfigRequest::dry_run].
    pub fn set_dry_run<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.dry_run = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [region_id][crate::model::UpdateLoadBalancerAddressTypeConfigRequest::region_id].
    pub fn set_region_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region_id = std::option::Option::Some(v.into());
        self
    }
}

/// The response message for [NetworkLoadBalancer::update_load_balancer_address_type_config][crate::client::NetworkLoadBalancer::update_load_balancer_address_type_config].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UpdateLoadBalancerAddressTypeConfigResponse {
    /// The id of the request.
    pub request_id: std::option::Option<std::string::String>,

    /// The id of the asynchronous job.
    pub job_id: std::option::Option<std::string::String>,
}

impl UpdateLoadBalancerAddressTypeConfigResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][crate::model::UpdateLoadBalancerAddressTypeConfigResponse::request_id].
    pub fn set_request_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [job_id][crate::model::UpdateLoadBalancerAddressTypeConfigResponse::job_id].
    pub fn set_job_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.job_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [NetworkLoadBalancer::update_load_balancer_protection][crate::client::NetworkLoadBalancer::update_load_balancer_protection].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UpdateLoadBalancerProtectionRequest {
    /// The id of the load balancer.
    pub load_balancer_id: std::option::Option<std::string::String>,

    /// Enables or disables deletion protection.
    pub deletion_protection_enabled: std::option::Option<bool>,

    /// The reason for enabling deletion protection.
    pub deletion_protection_reason: std::option::Option<std::string::String>,

    /// Either `NonProtection` or `ConsoleProtection`.
    pub modification_protection_status: std::option::Option<std::string::String>,

    /// The reason for enabling modification protection.
    pub modification_protection_reason: std::option::Option<std::string::String>,

    /// A client token used to ensure that the request is idempotent.
    pub client_token: std::option::Option<std::string::String>,

    /// If true, only checks the request, without performing the operation.
    pub dry_run: std::option::Option<bool>,

    /// The region of the resources.
    pub region_id: std::option::Option<std::string::String>,
}

impl UpdateLoadBalancerProtectionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [load_balancer_id][crate::model::UpdateLoadBalancerProtectionRequest::load_balancer_id].
    pub fn set_load_balancer_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.load_balancer_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [deletion_protection_enabled][crate::model::UpdateLoadBalancerProtectionRequest::deletion_protection_enabled].
    pub fn set_deletion_protection_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.deletion_protection_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [deletion_protection_reason][crate::model::UpdateLoadBalancerProtectionRequest::deletion_protection_reason].
    pub fn set_deletion_protection_reason<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.deletion_protection_reason = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [modification_protection_status][crate::model::UpdateLoadBalancerProtectionRequest::modification_protection_status].
    pub fn set_modification_protection_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.modification_protection_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [modification_protection_reason][crate::model::UpdateLoadBalancerProtectionRequest::modification_protection_reason].
    pub fn set_modification_protection_reason<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.modification_protection_reason = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [client_token][crate::model::UpdateLoadBalancerProtectionRequest::client_token].
    pub fn set_client_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [dry_run][crate::model::UpdateLoadBalancerProtectionRequest::dry_run].
    pub fn set_dry_run<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.dry_run = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [region_id][crate::model::UpdateLoadBalancerProtectionRequest::region_id].
    pub fn set_region_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region_id = std::option::Option::Some(v.into());
        self
    }
}

/// The response message for [NetworkLoadBalancer::update_load_balancer_protection][crate::client::NetworkLoadBalancer::update_load_balancer_protection].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UpdateLoadBalancerProtectionResponse {
    /// The id of the request.
    pub request_id: std::option::Option<std::string::String>,
}

impl UpdateLoadBalancerProtectionResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][crate::model::UpdateLoadBalancerProtectionResponse::request_id].
    pub fn set_request_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [NetworkLoadBalancer::start_shift_load_balancer_zones][crate::client::NetworkLoadBalancer::start_shift_load_balancer_zones].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct StartShiftLoadBalancerZonesRequest {
    /// The id of the load balancer.
    pub load_balancer_id: std::option::Option<std::string::String>,

    /// The zones removed from DNS resolution.
    pub zone_mappings: std::option::Option<std::vec::Vec<crate::model::ShiftZoneMapping>>,

    /// A client token used to ensure that the request is idempotent.
    pub client_token: std::option::Option<std::string::String>,

    /// If true, only checks the request, without performing the operation.
    pub dry_run: std::option::Option<bool>,

    /// The region of the resources.
    pub region_id: std::option::Option<std::string::String>,
}

impl StartShiftLoadBalancerZonesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [load_balancer_id][crate::model::StartShiftLoadBalancerZonesRequest::load_balancer_id].
    pub fn set_load_balancer_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.load_balancer_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [zone_mappings][crate::model::StartShiftLoadBalancerZonesRequest::zone_mappings].
    pub fn set_zone_mappings<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::ShiftZoneMapping>,
    {
        self.zone_mappings = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [client_token][crate::model::StartShiftLoadBalancerZonesRequest::client_token].
    pub fn set_client_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [dry_run][crate::model::StartShiftLoadBalancerZonesRequest::dry_run].
    pub fn set_dry_run<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.dry_run = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [region_id][crate::model::StartShiftLoadBalancerZonesRequest::region_id].
    pub fn set_region_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region_id = std::option::Option::Some(v.into());
        self
    }
}

/// The response message for [NetworkLoadBalancer::start_shift_load_balancer_zones][crate::client::NetworkLoadBalancer::start_shift_load_balancer_zones].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct StartShiftLoadBalancerZonesResponse {
    /// The id of the request.
    pub request_id: std::option::Option<std::string::String>,
}

impl StartShiftLoadBalancerZonesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][crate::model::StartShiftLoadBalancerZonesResponse::request_id].
    pub fn set_request_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [NetworkLoadBalancer::cancel_shift_load_balancer_zones][crate::client::NetworkLoadBalancer::cancel_shift_load_balancer_zones].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CancelShiftLoadBalancerZonesRequest {
    /// The id of the load balancer.
    pub load_balancer_id: std::option::Option<std::string::String>,

    /// The zones restored to DNS resolution.
    pub zone_mappings: std::option::Option<std::vec::Vec<crate::model::ShiftZoneMapping>>,

    /// A client token used to ensure that the request is idempotent.
    pub client_token: std::option::Option<std::string::String>,

    /// If true, only checks the request, without performing the operation.
    pub dry_run: std::option::Option<bool>,

    /// The region of the resources.
    pub region_id: std::option::Option<std::string::String>,
}

impl CancelShiftLoadBalancerZonesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [load_balancer_id][crate::model::CancelShiftLoadBalancerZonesRequest::load_balancer_id].
    pub fn set_load_balancer_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.load_balancer_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [zone_mappings][crate::model::CancelShiftLoadBalancerZonesRequest::zone_mappings].
    pub fn set_zone_mappings<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::ShiftZoneMapping>,
    {
        self.zone_mappings = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [client_token][crate::model::CancelShiftLoadBalancerZonesRequest::client_token].
    pub fn set_client_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [dry_run][crate::model::CancelShiftLoadBalancerZonesRequest::dry_run].
    pub fn set_dry_run<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.dry_run = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [region_id][crate::model::CancelShiftLoadBalancerZonesRequest::region_id].
    pub fn set_region_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region_id = std::option::Option::Some(v.into());
        self
    }
}

/// The response message for [NetworkLoadBalancer::cancel_shift_load_balancer_zones][crate::client::NetworkLoadBalancer::cancel_shift_load_balancer_zones].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CancelShiftLoadBalancerZonesResponse {
    /// The id of the request.
    pub request_id: std::option::Option<std::string::String>,
}

impl CancelShiftLoadBalancerZonesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][crate::model::CancelShiftLoadBalancerZonesResponse::request_id].
    pub fn set_request_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [NetworkLoadBalancer::create_listener][crate::client::NetworkLoadBalancer::create_listener].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateListenerRequest {
    /// The protocol of the listener.
    pub listener_protocol: std::option::Option<std::string::String>,

    /// The port of the listener, 0 enables all-port forwarding.
    pub listener_port: std::option::Option<i32>,

    /// The load balancer of the listener.
    pub load_balancer_id: std::option::Option<std::string::String>,

    /// The server group receiving the traffic.
    pub server_group_id: std::option::Option<std::string::String>,

    /// The description of the listener.
    pub listener_description: std::option::Option<std::string::String>,

    /// The idle connection timeout, in seconds.
    pub idle_timeout: std::option::Option<i32>,

    /// The security policy of TCPSSL listeners.
    pub security_policy_id: std::option::Option<std::string::String>,

    /// The server certificates of TCPSSL listeners.
    pub certificate_ids: std::option::Option<std::vec::Vec<std::string::String>>,

    /// The CA certificates of TCPSSL listeners.
    pub ca_certificate_ids: std::option::Option<std::vec::Vec<std::string::String>>,

    /// Enables mutual authentication.
    pub ca_enabled: std::option::Option<bool>,

    /// The first port of the listener port range.
    pub start_port: std::option::Option<i32>,

    /// The last port of the listener port range.
    pub end_port: std::option::Option<i32>,

    /// Sends the client address with the Proxy protocol.
    pub proxy_protocol_enabled: std::option::Option<bool>,

    /// Enables fine-grained monitoring.
    pub sec_sensor_enabled: std::option::Option<bool>,

    /// Enables ALPN.
    pub alpn_enabled: std::option::Option<bool>,

    /// The ALPN policy.
    pub alpn_policy: std::option::Option<std::string::String>,

    /// The maximum number of new connections per second.
    pub cps: std::option::Option<i32>,

    /// The maximum segment size.
    pub mss: std::option::Option<i32>,

    /// The tags attached to the listener.
    pub tag: std::option::Option<std::vec::Vec<crate::model::Tag>>,

    /// A client token used to ensure that the request is idempotent.
    pub client_token: std::option::Option<std::string::String>,

    /// If true, only checks the request, without performing the operation.
    pub dry_run: std::option::Option<bool>,

    /// The region of the resources.
    pub region_id: std::option::Option<std::string::String>,
}

impl CreateListenerRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [listener_protocol][crate::model::CreateListenerRequest::listener_protocol].
    pub fn set_listener_protocol<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.listener_protocol = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [listener_port][crate::model::CreateListenerRequest::listener_port].
    pub fn set_listener_port<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.listener_port = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [load_balancer_id][crate::model::CreateListenerRequest::load_balancer_id].
    pub fn set_load_balancer_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.load_balancer_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [server_group_id][crate::model::CreateListenerRequest::server_group_id].
    pub fn set_server_group_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.server_group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [listener_description][crate::model::CreateListenerRequest::listener_description].
    pub fn set_listener_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.listener_description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [idle_timeout][crate::model::CreateListenerRequest::idle_timeout].
    pub fn set_idle_timeout<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.idle_timeout = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [security_policy_id][crate::model::CreateListenerRequest::security_policy_id].
    pub fn set_security_policy_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.security_policy_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [certificate_ids][crate::model::CreateListenerRequest::certificate_ids].
    pub fn set_certificate_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.certificate_ids = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [ca_certificate_ids][crate::model::CreateListenerRequest::ca_certificate_ids].
    pub fn set_ca_certificate_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.ca_certificate_ids =
            std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [ca_enabled][crate::model::CreateListenerRequest::ca_enabled].
    pub fn set_ca_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.ca_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [start_port][crate::model::CreateListenerRequest::start_port].
    pub fn set_start_port<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.start_port = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [end_port][crate::model::CreateListenerRequest::end_port].
    pub fn set_end_port<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.end_port = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [proxy_protocol_enabled][crate::model::CreateListenerRequest::proxy_protocol_enabled].
    pub fn set_proxy_protocol_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.proxy_protocol_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [sec_sensor_enabled][crate::model::CreateListenerRequest::sec_sensor_enabled].
    pub fn set_sec_sensor_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.sec_sensor_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [alpn_enabled][crate::model::CreateListenerRequest::alpn_enabled].
    pub fn set_alpn_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.alpn_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [alpn_policy][crate::model::CreateListenerRequest::alpn_policy].
    pub fn set_alpn_policy<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.alpn_policy = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [cps][crate::model::CreateListenerRequest::cps].
    pub fn set_cps<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.cps = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [mss][crate::model::CreateListenerRequest::mss].
    pub fn set_mss<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.mss = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [tag][crate::model::CreateListenerRequest::tag].
    pub fn set_tag<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Tag>,
    {
        self.tag = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [client_token][crate::model::CreateListenerRequest::client_token].
    pub fn set_client_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [dry_run][crate::model::CreateListenerRequest::dry_run].
    pub fn set_dry_run<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.dry_run = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [region_id][crate::model::CreateListenerRequest::region_id].
    pub fn set_region_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region_id = std::option::Option::Some(v.into());
        self
    }
}

/// The response message for [NetworkLoadBalancer::create_listener][crate::client::NetworkLoadBalancer::create_listener].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateListenerResponse {
    /// The id of the request.
    pub request_id: std::option::Option<std::string::String>,

    /// The id of the new listener.
    pub listener_id: std::option::Option<std::string::String>,

    /// The id of the asynchronous job.
    pub job_id: std::option::Option<std::string::String>,
}

impl CreateListenerResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][crate::model::CreateListenerResponse::request_id].
    pub fn set_request_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [listener_id][crate::model::CreateListenerResponse::listener_id].
    pub fn set_listener_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.listener_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [job_id][crate::model::CreateListenerResponse::job_id].
    pub fn set_job_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.job_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [NetworkLoadBalancer::delete_listener][crate::client::NetworkLoadBalancer::delete_listener].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteListenerRequest {
    /// The id of the listener.
    pub listener_id: std::option::Option<std::string::String>,

    /// A client token used to ensure that the request is idempotent.
    pub client_token: std::option::Option<std::string::String>,

    /// If true, only checks the request, without performing the operation.
    pub dry_run: std::option::Option<bool>,

    /// The region of the resources.
    pub region_id: std::option::Option<std::string::String>,
}

impl DeleteListenerRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [listener_id][crate::model::DeleteListenerRequest::listener_id].
    pub fn set_listener_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.listener_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [client_token][crate::model::DeleteListenerRequest::client_token].
    pub fn set_client_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [dry_run][crate::model::DeleteListenerRequest::dry_run].
    pub fn set_dry_run<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.dry_run = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [region_id][crate::model::DeleteListenerRequest::region_id].
    pub fn set_region_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region_id = std::option::Option::Some(v.into());
        self
    }
}

/// The response message for [NetworkLoadBalancer::delete_listener][crate::client::NetworkLoadBalancer::delete_listener].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteListenerResponse {
    /// The id of the request.
    pub request_id: std::option::Option<std::string::String>,

    /// The id of the asynchronous job.
    pub job_id: std::option::Option<std::string::String>,
}

impl DeleteListenerResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][crate::model::DeleteListenerResponse::request_id].
    pub fn set_request_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [job_id][crate::model::DeleteListenerResponse::job_id].
    pub fn set_job_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.job_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [NetworkLoadBalancer::get_listener_attribute][crate::client::NetworkLoadBalancer::get_listener_attribute].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetListenerAttributeRequest {
    /// The id of the listener.
    pub listener_id: std::option::Option<std::string::String>,

    /// A client token used to ensure that the request is idempotent.
    pub client_token: std::option::Option<std::string::String>,

    /// If true, only checks the request, without performing the operation.
    pub dry_run: std::option::Option<bool>,

    /// The region of the resources.
    pub region_id: std::option::Option<std::string::String>,
}

impl GetListenerAttributeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [listener_id][crate::model::GetListenerAttributeRequest::listener_id].
    pub fn set_listener_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.listener_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [client_token][crate::model::GetListenerAttributeRequest::client_token].
    pub fn set_client_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [dry_run][crate::model::GetListenerAttributeRequest::dry_run].
    pub fn set_dry_run<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.dry_run = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [region_id][crate::model::GetListenerAttributeRequest::region_id].
    pub fn set_region_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region_id = std::option::Option::Some(v.into());
        self
    }
}

/// The response message for [NetworkLoadBalancer::get_listener_attribute][crate::client::NetworkLoadBalancer::get_listener_attribute].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetListenerAttributeResponse {
    /// The id of the request.
    pub request_id: std::option::Option<std::string::String>,

    /// The id of the listener.
    pub listener_id: std::option::Option<std::string::String>,

    /// The protocol of the listener.
    pub listener_protocol: std::option::Option<std::string::String>,

    /// The port of the listener, 0 for all ports.
    pub listener_port: std::option::Option<i32>,

    /// The load balancer of the listener.
    pub load_balancer_id: std::option::Option<std::string::String>,

    /// The server group of the listener.
    pub server_group_id: std::option::Option<std::string::String>,

    /// The description of the listener.
    pub listener_description: std::option::Option<std::string::String>,

    /// The status of the listener.
    pub listener_status: std::option::Option<std::string::String>,

    /// The idle connection timeout, in seconds.
    pub idle_timeout: std::option::Option<i32>,

    /// The security policy of TCPSSL listeners.
    pub security_policy_id: std::option::Option<std::string::String>,

    /// The server certificates.
    pub certificate_ids: std::option::Option<std::vec::Vec<std::string::String>>,

    /// The CA certificates.
    pub ca_certificate_ids: std::option::Option<std::vec::Vec<std::string::String>>,

    /// If true, mutual authentication is enabled.
    pub ca_enabled: std::option::Option<bool>,

    /// The first port of the listener port range.
    pub start_port: std::option::Option<std::string::String>,

    /// The last port of the listener port range.
    pub end_port: std::option::Option<std::string::String>,

    /// If true, the client address is sent with the Proxy protocol.
    pub proxy_protocol_enabled: std::option::Option<bool>,

    /// If true, fine-grained monitoring is enabled.
    pub sec_sensor_enabled: std::option::Option<bool>,

    /// If true, ALPN is enabled.
    pub alpn_enabled: std::option::Option<bool>,

    /// The ALPN policy.
    pub alpn_policy: std::option::Option<std::string::String>,

    /// The maximum number of new connections per second.
    pub cps: std::option::Option<i32>,

    /// The maximum segment size.
    pub mss: std::option::Option<i32>,

    /// The region.
    pub region_id: std::option::Option<std::string::String>,

    /// The tags attached to the resource.
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}

impl GetListenerAttributeResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][crate::model::GetListenerAttributeResponse::request_id].
    pub fn set_request_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [listener_id][crate::model::GetListenerAttributeResponse::listener_id].
    pub fn set_listener_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.listener_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [listener_protocol][crate::model::GetListenerAttributeResponse::listener_protocol].
    pub fn set_listener_protocol<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.listener_protocol = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [listener_port][crate::model::GetListenerAttributeResponse::listener_port].
    pub fn set_listener_port<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.listener_port = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [load_balancer_id][crate::model::GetListenerAttributeResponse::load_balancer_id].
    pub fn set_load_balancer_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.load_balancer_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [server_group_id][crate::model::GetListenerAttributeResponse::server_group_id].
    pub fn set_server_group_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.server_group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [listener_description][crate::model::GetListenerAttributeResponse::listener_description].
    pub fn set_listener_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.listener_description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [listener_status][crate::model::GetListenerAttributeResponse::listener_status].
    pub fn set_listener_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.listener_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [idle_timeout][crate::model::GetListenerAttributeResponse::idle_timeout].
    pub fn set_idle_timeout<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.idle_timeout = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [security_policy_id][crate::model::GetListenerAttributeResponse::security_policy_id].
    pub fn set_security_policy_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.security_policy_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [certificate_ids][crate::model::GetListenerAttributeResponse::certificate_ids].
    pub fn set_certificate_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.certificate_ids = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [ca_certificate_ids][crate::model::GetListenerAttributeResponse::ca_certificate_ids].
    pub fn set_ca_certificate_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.ca_certificate_ids =
            std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [ca_enabled][crate::model::GetListenerAttributeResponse::ca_enabled].
    pub fn set_ca_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.ca_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [start_port][crate::model::GetListenerAttributeResponse::start_port].
    pub fn set_start_port<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.start_port = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [end_port][crate::model::GetListenerAttributeResponse::end_port].
    pub fn set_end_port<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.end_port = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [proxy_protocol_enabled][crate::model::GetListenerAttributeResponse::proxy_protocol_enabled].
    pub fn set_proxy_protocol_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.proxy_protocol_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [sec_sensor_enabled][crate::model::GetListenerAttributeResponse::sec_sensor_enabled].
    pub fn set_sec_sensor_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.sec_sensor_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [alpn_enabled][crate::model::GetListenerAttributeResponse::alpn_enabled].
    pub fn set_alpn_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.alpn_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [alpn_policy][crate::model::GetListenerAttributeResponse::alpn_policy].
    pub fn set_alpn_policy<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.alpn_policy = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [cps][crate::model::GetListenerAttributeResponse::cps].
    pub fn set_cps<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.cps = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [mss][crate::model::GetListenerAttributeResponse::mss].
    pub fn set_mss<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.mss = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [region_id][crate::model::GetListenerAttributeResponse::region_id].
    pub fn set_region_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [tags][crate::model::GetListenerAttributeResponse::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Tag>,
    {
        self.tags = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// The request message for [NetworkLoadBalancer::list_listeners][crate::client::NetworkLoadBalancer::list_listeners].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListListenersRequest {
    /// Filters by listener id.
    pub listener_ids: std::option::Option<std::vec::Vec<std::string::String>>,

    /// Filters by load balancer.
    pub load_balancer_ids: std::option::Option<std::vec::Vec<std::string::String>>,

    /// Filters by protocol.
    pub listener_protocol: std::option::Option<std::string::String>,

    /// The tags used to filter the results.
    pub tag: std::option::Option<std::vec::Vec<crate::model::Tag>>,

    /// The token used to start the next query.
    pub next_token: std::option::Option<std::string::String>,

    /// The number of entries per page, from 1 to 100.
    pub max_results: std::option::Option<i32>,

    /// The region of the resources.
    pub region_id: std::option::Option<std::string::String>,
}

impl ListListenersRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [listener_ids][crate::model::ListListenersRequest::listener_ids].
    pub fn set_listener_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.listener_ids = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [load_balancer_ids][crate::model::ListListenersRequest::load_balancer_ids].
    pub fn set_load_balancer_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.load_balancer_ids =
            std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [listener_protocol][crate::model::ListListenersRequest::listener_protocol].
    pub fn set_listener_protocol<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.listener_protocol = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [tag][crate::model::ListListenersRequest::tag].
    pub fn set_tag<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Tag>,
    {
        self.tag = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [next_token][crate::model::ListListenersRequest::next_token].
    pub fn set_next_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [max_results][crate::model::ListListenersRequest::max_results].
    pub fn set_max_results<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.max_results = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [region_id][crate::model::ListListenersRequest::region_id].
    pub fn set_region_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region_id = std::option::Option::Some(v.into());
        self
    }
}

/// The response message for [NetworkLoadBalancer::list_listeners][crate::client::NetworkLoadBalancer::list_listeners].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListListenersResponse {
    /// The id of the request.
    pub request_id: std::option::Option<std::string::String>,

    /// The listeners.
    pub listeners: std::option::Option<std::vec::Vec<crate::model::Listener>>,

    /// The total number of entries.
    pub total_count: std::option::Option<i32>,

    /// The token to retrieve the next page, empty on the last page.
    pub next_token: std::option::Option<std::string::String>,

    /// The number of entries per page.
    pub max_results: std::option::Option<i32>,
}

impl ListListenersResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][crate::model::ListListenersResponse::request_id].
    pub fn set_request_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [listeners][crate::model::ListListenersResponse::listeners].
    pub fn set_listeners<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Listener>,
    {
        self.listeners = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [total_count][crate::model::ListListenersResponse::total_count].
    pub fn set_total_count<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.total_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [next_token][crate::model::ListListenersResponse::next_token].
    pub fn set_next_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [max_results][crate::model::ListListenersResponse::max_results].
    pub fn set_max_results<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.max_results = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [NetworkLoadBalancer::update_listener_attribute][crate::client::NetworkLoadBalancer::update_listener_attribute].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UpdateListenerAttributeRequest {
    /// The id of the listener.
    pub listener_id: std::option::Option<std::string::String>,

    /// The description of the listener.
    pub listener_description: std::option::Option<std::string::String>,

    /// The server group receiving the traffic.
    pub server_group_id: std::option::Option<std::string::String>,

    /// The idle connection timeout, in seconds.
    pub idle_timeout: std::option::Option<i32>,

    /// The security policy of TCPSSL listeners.
    pub security_policy_id: std::option::Option<std::string::String>,

    /// The server certificates of TCPSSL listeners.
    pub certificate_ids: std::option::Option<std::vec::Vec<std::string::String>>,

    /// The CA certificates of TCPSSL listeners.
    pub ca_certificate_ids: std::option::Option<std::vec::Vec<std::string::String>>,

    /// Enables mutual authentication.
    pub ca_enabled: std::option::Option<bool>,

    /// Sends the client address with the Proxy protocol.
    pub proxy_protocol_enabled: std::option::Option<bool>,

    /// Enables fine-grained monitoring.
    pub sec_sensor_enabled: std::option::Option<bool>,

    /// Enables ALPN.
    pub alpn_enabled: std::option::Option<bool>,

    /// The ALPN policy.
    pub alpn_policy: std::option::Option<std::string::String>,

    /// The maximum number of new connections per second.
    pub cps: std::option::Option<i32>,

    /// The maximum segment size.
    pub mss: std::option::Option<i32>,

    /// A client token used to ensure that the request is idempotent.
    pub client_token: std::option::Option<std::string::String>,

    /// If true, only checks the request, without performing the operation.
    pub dry_run: std::option::Option<bool>,

    /// The region of the resources.
    pub region_id: std::option::Option<std::string::String>,
}

impl UpdateListenerAttributeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [listener_id][crate::model::UpdateListenerAttributeRequest::listener_id].
    pub fn set_listener_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.listener_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [listener_description][crate::model::UpdateListenerAttributeRequest::listener_description].
    pub fn set_listener_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.listener_description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [server_group_id][crate::model::UpdateListenerAttributeRequest::server_group_id].
    pub fn set_server_group_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.server_group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [idle_timeout][crate::model::UpdateListenerAttributeRequest::idle_timeout].
    pub fn set_idle_timeout<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.idle_timeout = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [security_policy_id][crate::model::UpdateListenerAttributeRequest::security_policy_id].
    pub fn set_security_policy_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.security_policy_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [certificate_ids][crate::model::UpdateListenerAttributeRequest::certificate_ids].
    pub fn set_certificate_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.certificate_ids = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [ca_certificate_ids][crate::model::UpdateListenerAttributeRequest::ca_certificate_ids].
    pub fn set_ca_certificate_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.ca_certificate_ids =
            std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [ca_enabled][crate::model::UpdateListenerAttributeRequest::ca_enabled].
    pub fn set_ca_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.ca_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [proxy_protocol_enabled][crate::model::UpdateListenerAttributeRequest::proxy_protocol_enabled].
    pub fn set_proxy_protocol_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.proxy_protocol_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [sec_sensor_enabled][crate::model::UpdateListenerAttributeRequest::sec_sensor_enabled].
    pub fn set_sec_sensor_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.sec_sensor_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [alpn_enabled][crate::model::UpdateListenerAttributeRequest::alpn_enabled].
    pub fn set_alpn_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.alpn_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [alpn_policy][crate::model::UpdateListenerAttributeRequest::alpn_policy].
    pub fn set_alpn_policy<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.alpn_policy = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [cps][crate::model::UpdateListenerAttributeRequest::cps].
    pub fn set_cps<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.cps = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [mss][crate::model::UpdateListenerAttributeRequest::mss].
    pub fn set_mss<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.mss = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [client_token][crate::model::UpdateListenerAttributeRequest::client_token].
    pub fn set_client_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [dry_run][crate::model::UpdateListenerAttributeRequest::dry_run].
    pub fn set_dry_run<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.dry_run = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [region_id][crate::model::UpdateListenerAttributeRequest::region_id].
    pub fn set_region_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region_id = std::option::Option::Some(v.into());
        self
    }
}

/// The response message for [NetworkLoadBalancer::update_listener_attribute][crate::client::NetworkLoadBalancer::update_listener_attribute].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UpdateListenerAttributeResponse {
    /// The id of the request.
    pub request_id: std::option::Option<std::string::String>,

    /// The id of the asynchronous job.
    pub job_id: std::option::Option<std::string::String>,
}

impl UpdateListenerAttributeResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][crate::model::UpdateListenerAttributeResponse::request_id].
    pub fn set_request_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [job_id][crate::model::UpdateListenerAttributeResponse::job_id].
    pub fn set_job_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.job_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [NetworkLoadBalancer::start_listener][crate::client::NetworkLoadBalancer::start_listener].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct StartListenerRequest {
    /// The id of the listener.
    pub listener_id: std::option::Option<std::string::String>,

    /// A client token used to ensure that the request is idempotent.
    pub client_token: std::option::Option<std::string::String>,

    /// If true, only checks the request, without performing the operation.
    pub dry_run: std::option::Option<bool>,

    /// The region of the resources.
    pub region_id: std::option::Option<std::string::String>,
}

impl StartListenerRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [listener_id][crate::model::StartListenerRequest::listener_id].
    pub fn set_listener_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.listener_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [client_token][crate::model::StartListenerRequest::client_token].
    pub fn set_client_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [dry_run][crate::model::StartListenerRequest::dry_run].
    pub fn set_dry_run<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.dry_run = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [region_id][crate::model::StartListenerRequest::region_id].
    pub fn set_region_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region_id = std::option::Option::Some(v.into());
        self
    }
}

/// The response message for [NetworkLoadBalancer::start_listener][crate::client::NetworkLoadBalancer::start_listener].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct StartListenerResponse {
    /// The id of the request.
    pub request_id: std::option::Option<std::string::String>,

    /// The id of the asynchronous job.
    pub job_id: std::option::Option<std::string::String>,
}

impl StartListenerResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][crate::model::StartListenerResponse::request_id].
    pub fn set_request_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [job_id][crate::model::StartListenerResponse::job_id].
    pub fn set_job_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.job_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [NetworkLoadBalancer::stop_listener][crate::client::NetworkLoadBalancer::stop_listener].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct StopListenerRequest {
    /// The id of the listener.
    pub listener_id: std::option::Option<std::string::String>,

    /// A client token used to ensure that the request is idempotent.
    pub client_token: std::option::Option<std::string::String>,

    /// If true, only checks the request, without performing the operation.
    pub dry_run: std::option::Option<bool>,

    /// The region of the resources.
    pub region_id: std::option::Option<std::string::String>,
}

impl StopListenerRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [listener_id][crate::model::StopListenerRequest::listener_id].
    pub fn set_listener_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.listener_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [client_token][crate::model::StopListenerRequest::client_token].
    pub fn set_client_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [dry_run][crate::model::StopListenerRequest::dry_run].
    pub fn set_dry_run<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.dry_run = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [region_id][crate::model::StopListenerRequest::region_id].
    pub fn set_region_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region_id = std::option::Option::Some(v.into());
        self
    }
}

/// The response message for [NetworkLoadBalancer::stop_listener][crate::client::NetworkLoadBalancer::stop_listener].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct StopListenerResponse {
    /// The id of the request.
    pub request_id: std::option::Option<std::string::String>,

    /// The id of the asynchronous job.
    pub job_id: std::option::Option<std::string::String>,
}

impl StopListenerResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][crate::model::StopListenerResponse::request_id].
    pub fn set_request_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [job_id][crate::model::StopListenerResponse::job_id].
    pub fn set_job_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.job_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [NetworkLoadBalancer::create_server_group][crate::client::NetworkLoadBalancer::create_server_group].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateServerGroupRequest {
    /// The name of the server group.
    pub server_group_name: std::option::Option<std::string::String>,

    /// Either `Instance` or `Ip`.
    pub server_group_type: std::option::Option<std::string::String>,

    /// The IP version of the server group.
    #[serde(rename = "AddressIPVersion")]
    pub address_ip_version: std::option::Option<std::string::String>,

    /// The VPC of the server group.
    pub vpc_id: std::option::Option<std::string::String>,

    /// The backend protocol.
    pub protocol: std::option::Option<std::string::String>,

    /// The scheduling algorithm.
    pub scheduler: std::option::Option<std::string::String>,

    /// Enables connection draining.
    pub connection_drain_enabled: std::option::Option<bool>,

    /// The connection draining timeout, in seconds.
    pub connection_drain_timeout: std::option::Option<i32>,

    /// Preserves the client address.
    pub preserve_client_ip_enabled: std::option::Option<bool>,

    /// Enables all-port forwarding.
    pub any_port_enabled: std::option::Option<bool>,

    /// The health check configuration.
    pub health_check_config: std::option::Option<crate::model::HealthCheckConfig>,

    /// The resource group.
    pub resource_group_id: std::option::Option<std::string::String>,

    /// The tags attached to the server group.
    pub tag: std::option::Option<std::vec::Vec<crate::model::Tag>>,

    /// A client token used to ensure that the request is idempotent.
    pub client_token: std::option::Option<std::string::String>,

    /// If true, only checks the request, without performing the operation.
    pub dry_run: std::option::Option<bool>,

    /// The region of the resources.
    pub region_id: std::option::Option<std::string::String>,
}

impl CreateServerGroupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [server_group_name][crate::model::CreateServerGroupRequest::server_group_name].
    pub fn set_server_group_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.server_group_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [server_group_type][crate::model::CreateServerGroupRequest::server_group_type].
    pub fn set_server_group_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.server_group_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [address_ip_version][crate::model::CreateServerGroupRequest::address_ip_version].
    pub fn set_address_ip_version<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.address_ip_version = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [vpc_id][crate::model::CreateServerGroupRequest::vpc_id].
    pub fn set_vpc_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.vpc_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [protocol][crate::model::CreateServerGroupRequest::protocol].
    pub fn set_protocol<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.protocol = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [scheduler][crate::model::CreateServerGroupRequest::scheduler].
    pub fn set_scheduler<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scheduler = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [connection_drain_enabled][crate::model::CreateServerGroupRequest::connection_drain_enabled].
    pub fn set_connection_drain_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.connection_drain_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [connection_drain_timeout][crate::model::CreateServerGroupRequest::connection_drain_timeout].
    pub fn set_connection_drain_timeout<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.connection_drain_timeout = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [preserve_client_ip_enabled][crate::model::CreateServerGroupRequest::preserve_client_ip_enabled].
    pub fn set_preserve_client_ip_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.preserve_client_ip_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [any_port_enabled][crate::model::CreateServerGroupRequest::any_port_enabled].
    pub fn set_any_port_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.any_port_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [health_check_config][crate::model::CreateServerGroupRequest::health_check_config].
    pub fn set_health_check_config<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::HealthCheckConfig>,
    {
        self.health_check_config = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [health_check_config][crate::model::CreateServerGroupRequest::health_check_config].
    pub fn set_or_clear_health_check_config<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::HealthCheckConfig>,
    {
        self.health_check_config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_group_id][crate::model::CreateServerGroupRequest::resource_group_id].
    pub fn set_resource_group_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [tag][crate::model::CreateServerGroupRequest::tag].
    pub fn set_tag<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Tag>,
    {
        self.tag = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [client_token][crate::model::CreateServerGroupRequest::client_token].
    pub fn set_client_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [dry_run][crate::model::CreateServerGroupRequest::dry_run].
    pub fn set_dry_run<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.dry_run = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [region_id][crate::model::CreateServerGroupRequest::region_id].
    pub fn set_region_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region_id = std::option::Option::Some(v.into());
        self
    }
}

/// The response message for [NetworkLoadBalancer::create_server_group][crate::client::NetworkLoadBalancer::create_server_group].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateServerGroupResponse {
    /// The id of the request.
    pub request_id: std::option::Option<std::string::String>,

    /// The id of the new server group.
    pub server_group_id: std::option::Option<std::string::String>,

    /// The id of the asynchronous job.
    pub job_id: std::option::Option<std::string::String>,
}

impl CreateServerGroupResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][crate::model::CreateServerGroupResponse::request_id].
    pub fn set_request_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [server_group_id][crate::model::CreateServerGroupResponse::server_group_id].
    pub fn set_server_group_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.server_group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [job_id][crate::model::CreateServerGroupResponse::job_id].
    pub fn set_job_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.job_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [NetworkLoadBalancer::delete_server_group][crate::client::NetworkLoadBalancer::delete_server_group].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteServerGroupRequest {
    /// The id of the server group.
    pub server_group_id: std::option::Option<std::string::String>,

    /// A client token used to ensure that the request is idempotent.
    pub client_token: std::option::Option<std::string::String>,

    /// If true, only checks the request, without performing the operation.
    pub dry_run: std::option::Option<bool>,

    /// The region of the resources.
    pub region_id: std::option::Option<std::string::String>,
}

impl DeleteServerGroupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [server_group_id][crate::model::DeleteServerGroupRequest::server_group_id].
    pub fn set_server_group_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.server_group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [client_token][crate::model::DeleteServerGroupRequest::client_token].
    pub fn set_client_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [dry_run][crate::model::DeleteServerGroupRequest::dry_run].
    pub fn set_dry_run<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.dry_run = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [region_id][crate::model::DeleteServerGroupRequest::region_id].
    pub fn set_region_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region_id = std::option::Option::Some(v.into());
        self
    }
}

/// The response message for [NetworkLoadBalancer::delete_server_group][crate::client::NetworkLoadBalancer::delete_server_group].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteServerGroupResponse {
    /// The id of the request.
    pub request_id: std::option::Option<std::string::String>,

    /// The id of the asynchronous job.
    pub job_id: std::option::Option<std::string::String>,
}

impl DeleteServerGroupResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][crate::model::DeleteServerGroupResponse::request_id].
    pub fn set_request_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [job_id][crate::model::DeleteServerGroupResponse::job_id].
    pub fn set_job_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.job_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [NetworkLoadBalancer::list_server_groups][crate::client::NetworkLoadBalancer::list_server_groups].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListServerGroupsRequest {
    /// Filters by server group id.
    pub server_group_ids: std::option::Option<std::vec::Vec<std::string::String>>,

    /// Filters by server group name.
    pub server_group_names: std::option::Option<std::vec::Vec<std::string::String>>,

    /// Filters by server group type.
    pub server_group_type: std::option::Option<std::string::String>,

    /// Filters by VPC.
    pub vpc_id: std::option::Option<std::string::String>,

    /// Filters by resource group.
    pub resource_group_id: std::option::Option<std::string::String>,

    /// The tags used to filter the results.
    pub tag: std::option::Option<std::vec::Vec<crate::model::Tag>>,

    /// The token used to start the next query.
    pub next_token: std::option::Option<std::string::String>,

    /// The number of entries per page, from 1 to 100.
    pub max_results: std::option::Option<i32>,

    /// The region of the resources.
    pub region_id: std::option::Option<std::string::String>,
}

impl ListServerGroupsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [server_group_ids][crate::model::ListServerGroupsRequest::server_group_ids].
    pub fn set_server_group_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.server_group_ids =
            std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [server_group_names][crate::model::ListServerGroupsRequest::server_group_names].
    pub fn set_server_group_names<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.server_group_names =
            std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [server_group_type][crate::model::ListServerGroupsRequest::server_group_type].
    pub fn set_server_group_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.server_group_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [vpc_id][crate::model::ListServerGroupsRequest::vpc_id].
    pub fn set_vpc_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.vpc_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [resource_group_id][crate::model::ListServerGroupsRequest::resource_group_id].
    pub fn set_resource_group_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [tag][crate::model::ListServerGroupsRequest::tag].
    pub fn set_tag<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Tag>,
    {
        self.tag = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [next_token][crate::model::ListServerGroupsRequest::next_token].
    pub fn set_next_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [max_results][crate::model::ListServerGroupsRequest::max_results].
    pub fn set_max_results<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.max_results = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [region_id][crate::model::ListServerGroupsRequest::region_id].
    pub fn set_region_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region_id = std::option::Option::Some(v.into());
        self
    }
}

/// The response message for [NetworkLoadBalancer::list_server_groups][crate::client::NetworkLoadBalancer::list_server_groups].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListServerGroupsResponse {
    /// The id of the request.
    pub request_id: std::option::Option<std::string::String>,

    /// The server groups.
    pub server_groups: std::option::Option<std::vec::Vec<crate::model::ServerGroup>>,

    /// The total number of entries.
    pub total_count: std::option::Option<i32>,

    /// The token to retrieve the next page, empty on the last page.
    pub next_token: std::option::Option<std::string::String>,

    /// The number of entries per page.
    pub max_results: std::option::Option<i32>,
}

impl ListServerGroupsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][crate::model::ListServerGroupsResponse::request_id].
    pub fn set_request_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [server_groups][crate::model::ListServerGroupsResponse::server_groups].
    pub fn set_server_groups<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::ServerGroup>,
    {
        self.server_groups = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [total_count][crate::model::ListServerGroupsResponse::total_count].
    pub fn set_total_count<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.total_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [next_token][crate::model::ListServerGroupsResponse::next_token].
    pub fn set_next_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [max_results][crate::model::ListServerGroupsResponse::max_results].
    pub fn set_max_results<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.max_results = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [NetworkLoadBalancer::add_servers_to_server_group][crate::client::NetworkLoadBalancer::add_servers_to_server_group].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AddServersToServerGroupRequest {
    /// The id of the server group.
    pub server_group_id: std::option::Option<std::string::String>,

    /// The servers to add.
    pub servers: std::option::Option<std::vec::Vec<crate::model::Server>>,

    /// A client token used to ensure that the request is idempotent.
    pub client_token: std::option::Option<std::string::String>,

    /// If true, only checks the request, without performing the operation.
    pub dry_run: std::option::Option<bool>,

    /// The region of the resources.
    pub region_id: std::option::Option<std::string::String>,
}

impl AddServersToServerGroupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [server_group_id][crate::model::AddServersToServerGroupRequest::server_group_id].
    pub fn set_server_group_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.server_group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [servers][crate::model::AddServersToServerGroupRequest::servers].
    pub fn set_servers<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Server>,
    {
        self.servers = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [client_token][crate::model::AddServersToServerGroupRequest::client_token].
    pub fn set_client_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [dry_run][crate::model::AddServersToServerGroupRequest::dry_run].
    pub fn set_dry_run<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.dry_run = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [region_id][crate::model::AddServersToServerGroupRequest::region_id].
    pub fn set_region_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region_id = std::option::Option::Some(v.into());
        self
    }
}

/// The response message for [NetworkLoadBalancer::add_servers_to_server_group][crate::client::NetworkLoadBalancer::add_servers_to_server_group].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AddServersToServerGroupResponse {
    /// The id of the request.
    pub request_id: std::option::Option<std::string::String>,

    /// The id of the server group.
    pub server_group_id: std::option::Option<std::string::String>,

    /// The id of the asynchronous job.
    pub job_id: std::option::Option<std::string::String>,
}

impl AddServersToServerGroupResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][crate::model::AddServersToServerGroupResponse::request_id].
    pub fn set_request_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [server_group_id][crate::model::AddServersToServerGroupResponse::server_group_id].
    pub fn set_server_group_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.server_group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [job_id][crate::model::AddServersToServerGroupResponse::job_id].
    pub fn set_job_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.job_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [NetworkLoadBalancer::remove_servers_from_server_group][crate::client::NetworkLoadBalancer::remove_servers_from_server_group].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RemoveServersFromServerGroupRequest {
    /// The id of the server group.
    pub server_group_id: std::option::Option<std::string::String>,

    /// The servers to remove.
    pub servers: std::option::Option<std::vec::Vec<crate::model::ServerKey>>,

    /// A client token used to ensure that the request is idempotent.
    pub client_token: std::option::Option<std::string::String>,

    /// If true, only checks the request, without performing the operation.
    pub dry_run: std::option::Option<bool>,

    /// The region of the resources.
    pub region_id: std::option::Option<std::string::String>,
}

impl RemoveServersFromServerGroupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [server_group_id][crate::model::RemoveServersFromServerGroupRequest::server_group_id].
    pub fn set_server_group_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.server_group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [servers][crate::model::RemoveServersFromServerGroupRequest::servers].
    pub fn set_servers<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::ServerKey>,
    {
        self.servers = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [client_token][crate::model::RemoveServersFromServerGroupRequest::client_token].
    pub fn set_client_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [dry_run][crate::model::RemoveServersFromServerGroupRequest::dry_run].
    pub fn set_dry_run<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.dry_run = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [region_id][crate::model::RemoveServersFromServerGroupRequest::region_id].
    pub fn set_region_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region_id = std::option::Option::Some(v.into());
        self
    }
}

/// The response message for [NetworkLoadBalancer::remove_servers_from_server_group][crate::client::NetworkLoadBalancer::remove_servers_from_server_group].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RemoveServersFromServerGroupResponse {
    /// The id of the request.
    pub request_id: std::option::Option<std::string::String>,

    /// The id of the server group.
    pub server_group_id: std::option::Option<std::string::String>,

    /// The id of the asynchronous job.
    pub job_id: std::option::Option<std::string::String>,
}

impl RemoveServersFromServerGroupResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][crate::model::RemoveServersFromServerGroupResponse::request_id].
    pub fn set_request_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [server_group_id][crate::model::RemoveServersFromServerGroupResponse::server_group_id].
    pub fn set_server_group_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.server_group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [job_id][crate::model::RemoveServersFromServerGroupResponse::job_id].
    pub fn set_job_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.job_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [NetworkLoadBalancer::list_server_group_servers][crate::client::NetworkLoadBalancer::list_server_group_servers].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListServerGroupServersRequest {
    /// The id of the server group.
    pub server_group_id: std::option::Option<std::string::String>,

    /// Filters by server id.
    pub server_ids: std::option::Option<std::vec::Vec<std::string::String>>,

    /// The token used to start the next query.
    pub next_token: std::option::Option<std::string::String>,

    /// The number of entries per page, from 1 to 100.
    pub max_results: std::option::Option<i32>,

    /// The region of the resources.
    pub region_id: std::option::Option<std::string::String>,
}

impl ListServerGroupServersRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [server_group_id][crate::model::ListServerGroupServersRequest::server_group_id].
    pub fn set_server_group_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.server_group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [server_ids][crate::model::ListServerGroupServersRequest::server_ids].
    pub fn set_server_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.server_ids = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [next_token][crate::model::ListServerGroupServersRequest::next_token].
    pub fn set_next_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [max_results][crate::model::ListServerGroupServersRequest::max_results].
    pub fn set_max_results<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.max_results = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [region_id][crate::model::ListServerGroupServersRequest::region_id].
    pub fn set_region_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region_id = std::option::Option::Some(v.into());
        self
    }
}

/// The response message for [NetworkLoadBalancer::list_server_group_servers][crate::client::NetworkLoadBalancer::list_server_group_servers].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListServerGroupServersResponse {
    /// The id of the request.
    pub request_id: std::option::Option<std::string::String>,

    /// The backend servers.
    pub servers: std::option::Option<std::vec::Vec<crate::model::BackendServer>>,

    /// The total number of entries.
    pub total_count: std::option::Option<i32>,

    /// The token to retrieve the next page, empty on the last page.
    pub next_token: std::option::Option<std::string::String>,

    /// The number of entries per page.
    pub max_results: std::option::Option<i32>,
}

impl ListServerGroupServersResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][crate::model::ListServerGroupServersResponse::request_id].
    pub fn set_request_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [servers][crate::model::ListServerGroupServersResponse::servers].
    pub fn set_servers<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::BackendServer>,
    {
        self.servers = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [total_count][crate::model::ListServerGroupServersResponse::total_count].
    pub fn set_total_count<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.total_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [next_token][crate::model::ListServerGroupServersResponse::next_token].
    pub fn set_next_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [max_results][crate::model::ListServerGroupServersResponse::max_results].
    pub fn set_max_results<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.max_results = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [NetworkLoadBalancer::tag_resources][crate::client::NetworkLoadBalancer::tag_resources].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TagResourcesRequest {
    /// The type of the resources.
    pub resource_type: std::option::Option<std::string::String>,

    /// The ids of the resources.
    pub resource_id: std::option::Option<std::vec::Vec<std::string::String>>,

    /// The tags to attach.
    pub tag: std::option::Option<std::vec::Vec<crate::model::Tag>>,

    /// A client token used to ensure that the request is idempotent.
    pub client_token: std::option::Option<std::string::String>,

    /// If true, only checks the request, without performing the operation.
    pub dry_run: std::option::Option<bool>,

    /// The region of the resources.
    pub region_id: std::option::Option<std::string::String>,
}

impl TagResourcesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [resource_type][crate::model::TagResourcesRequest::resource_type].
    pub fn set_resource_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [resource_id][crate::model::TagResourcesRequest::resource_id].
    pub fn set_resource_id<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.resource_id = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [tag][crate::model::TagResourcesRequest::tag].
    pub fn set_tag<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Tag>,
    {
        self.tag = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [client_token][crate::model::TagResourcesRequest::client_token].
    pub fn set_client_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [dry_run][crate::model::TagResourcesRequest::dry_run].
    pub fn set_dry_run<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.dry_run = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [region_id][crate::model::TagResourcesRequest::region_id].
    pub fn set_region_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region_id = std::option::Option::Some(v.into());
        self
    }
}

/// The response message for [NetworkLoadBalancer::tag_resources][crate::client::NetworkLoadBalancer::tag_resources].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TagResourcesResponse {
    /// The id of the request.
    pub request_id: std::option::Option<std::string::String>,

    /// The id of the asynchronous job.
    pub job_id: std::option::Option<std::string::String>,
}

impl TagResourcesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][crate::model::TagResourcesResponse::request_id].
    pub fn set_request_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [job_id][crate::model::TagResourcesResponse::job_id].
    pub fn set_job_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.job_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [NetworkLoadBalancer::untag_resources][crate::client::NetworkLoadBalancer::untag_resources].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UntagResourcesRequest {
    /// The type of the resources.
    pub resource_type: std::option::Option<std::string::String>,

    /// The ids of the resources.
    pub resource_id: std::option::Option<std::vec::Vec<std::string::String>>,

    /// The keys of the tags to detach.
    pub tag_key: std::option::Option<std::vec::Vec<std::string::String>>,

    /// If true, detaches all tags.
    pub all: std::option::Option<bool>,

    /// A client token used to ensure that the request is idempotent.
    pub client_token: std::option::Option<std::string::String>,

    /// If true, only checks the request, without performing the operation.
    pub dry_run: std::option::Option<bool>,

    /// The region of the resources.
    pub region_id: std::option::Option<std::string::String>,
}

impl UntagResourcesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [resource_type][crate::model::UntagResourcesRequest::resource_type].
    pub fn set_resource_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [resource_id][crate::model::UntagResourcesRequest::resource_id].
    pub fn set_resource_id<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.resource_id = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [tag_key][crate::model::UntagResourcesRequest::tag_key].
    pub fn set_tag_key<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.tag_key = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [all][crate::model::UntagResourcesRequest::all].
    pub fn set_all<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.all = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [client_token][crate::model::UntagResourcesRequest::client_token].
    pub fn set_client_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [dry_run][crate::model::UntagResourcesRequest::dry_run].
    pub fn set_dry_run<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.dry_run = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [region_id][crate::model::UntagResourcesRequest::region_id].
    pub fn set_region_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region_id = std::option::Option::Some(v.into());
        self
    }
}

/// The response message for [NetworkLoadBalancer::untag_resources][crate::client::NetworkLoadBalancer::untag_resources].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UntagResourcesResponse {
    /// The id of the request.
    pub request_id: std::option::Option<std::string::String>,

    /// The id of the asynchronous job.
    pub job_id: std::option::Option<std::string::String>,
}

impl UntagResourcesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][crate::model::UntagResourcesResponse::request_id].
    pub fn set_request_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [job_id][crate::model::UntagResourcesResponse::job_id].
    pub fn set_job_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.job_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [NetworkLoadBalancer::list_tag_resources][crate::client::NetworkLoadBalancer::list_tag_resources].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListTagResourcesRequest {
    /// The type of the resources.
    pub resource_type: std::option::Option<std::string::String>,

    /// The ids of the resources.
    pub resource_id: std::option::Option<std::vec::Vec<std::string::String>>,

    /// Filters by tag.
    pub tag: std::option::Option<std::vec::Vec<crate::model::Tag>>,

    /// The token used to start the next query.
    pub next_token: std::option::Option<std::string::String>,

    /// The number of entries per page, from 1 to 100.
    pub max_results: std::option::Option<i32>,

    /// The region of the resources.
    pub region_id: std::option::Option<std::string::String>,
}

impl ListTagResourcesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [resource_type][crate::model::ListTagResourcesRequest::resource_type].
    pub fn set_resource_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [resource_id][crate::model::ListTagResourcesRequest::resource_id].
    pub fn set_resource_id<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.resource_id = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [tag][crate::model::ListTagResourcesRequest::tag].
    pub fn set_tag<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Tag>,
    {
        self.tag = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [next_token][crate::model::ListTagResourcesRequest::next_token].
    pub fn set_next_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [max_results][crate::model::ListTagResourcesRequest::max_results].
    pub fn set_max_results<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.max_results = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [region_id][crate::model::ListTagResourcesRequest::region_id].
    pub fn set_region_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region_id = std::option::Option::Some(v.into());
        self
    }
}

/// The response message for [NetworkLoadBalancer::list_tag_resources][crate::client::NetworkLoadBalancer::list_tag_resources].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListTagResourcesResponse {
    /// The id of the request.
    pub request_id: std::option::Option<std::string::String>,

    /// The tags.
    pub tag_resources: std::option::Option<std::vec::Vec<crate::model::TagResource>>,

    /// The total number of entries.
    pub total_count: std::option::Option<i32>,

    /// The token to retrieve the next page, empty on the last page.
    pub next_token: std::option::Option<std::string::String>,

    /// The number of entries per page.
    pub max_results: std::option::Option<i32>,
}

impl ListTagResourcesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][crate::model::ListTagResourcesResponse::request_id].
    pub fn set_request_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [tag_resources][crate::model::ListTagResourcesResponse::tag_resources].
    pub fn set_tag_resources<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::TagResource>,
    {
        self.tag_resources = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [total_count][crate::model::ListTagResourcesResponse::total_count].
    pub fn set_total_count<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.total_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [next_token][crate::model::ListTagResourcesResponse::next_token].
    pub fn set_next_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [max_results][crate::model::ListTagResourcesResponse::max_results].
    pub fn set_max_results<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.max_results = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [NetworkLoadBalancer::get_job_status][crate::client::NetworkLoadBalancer::get_job_status].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetJobStatusRequest {
    /// The id of the asynchronous job.
    pub job_id: std::option::Option<std::string::String>,

    /// A client token used to ensure that the request is idempotent.
    pub client_token: std::option::Option<std::string::String>,
}

impl GetJobStatusRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [job_id][crate::model::GetJobStatusRequest::job_id].
    pub fn set_job_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.job_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [client_token][crate::model::GetJobStatusRequest::client_token].
    pub fn set_client_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_token = std::option::Option::Some(v.into());
        self
    }
}

/// The response message for [NetworkLoadBalancer::get_job_status][crate::client::NetworkLoadBalancer::get_job_status].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetJobStatusResponse {
    /// The id of the request.
    pub request_id: std::option::Option<std::string::String>,

    /// One of `Succeeded`, `Failed`, or `Processing`.
    pub status: std::option::Option<std::string::String>,
}

impl GetJobStatusResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][crate::model::GetJobStatusResponse::request_id].
    pub fn set_request_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [status][crate::model::GetJobStatusResponse::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.status = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [NetworkLoadBalancer::describe_regions][crate::client::NetworkLoadBalancer::describe_regions].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeRegionsRequest {
    /// The language of the region names.
    pub accept_language: std::option::Option<std::string::String>,

    /// The service code, `nlb`.
    pub service_code: std::option::Option<std::string::String>,

    /// A client token used to ensure that the request is idempotent.
    pub client_token: std::option::Option<std::string::String>,
}

impl DescribeRegionsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [accept_language][crate::model::DescribeRegionsRequest::accept_language].
    pub fn set_accept_language<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.accept_language = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [service_code][crate::model::DescribeRegionsRequest::service_code].
    pub fn set_service_code<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.service_code = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [client_token][crate::model::DescribeRegionsRequest::client_token].
    pub fn set_client_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_token = std::option::Option::Some(v.into());
        self
    }
}

/// The response message for [NetworkLoadBalancer::describe_regions][crate::client::NetworkLoadBalancer::describe_regions].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeRegionsResponse {
    /// The id of the request.
    pub request_id: std::option::Option<std::string::String>,

    /// The regions.
    pub regions: std::option::Option<std::vec::Vec<crate::model::Region>>,
}

impl DescribeRegionsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][crate::model::DescribeRegionsResponse::request_id].
    pub fn set_request_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [regions][crate::model::DescribeRegionsResponse::regions].
    pub fn set_regions<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Region>,
    {
        self.regions = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// The request message for [NetworkLoadBalancer::describe_zones][crate::client::NetworkLoadBalancer::describe_zones].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeZonesRequest {
    /// The language of the zone names.
    pub accept_language: std::option::Option<std::string::String>,

    /// The service code, `nlb`.
    pub service_code: std::option::Option<std::string::String>,

    /// A client token used to ensure that the request is idempotent.
    pub client_token: std::option::Option<std::string::String>,

    /// The region.
    pub region_id: std::option::Option<std::string::String>,
}

impl DescribeZonesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [accept_language][crate::model::DescribeZonesRequest::accept_language].
    pub fn set_accept_language<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.accept_language = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [service_code][crate::model::DescribeZonesRequest::service_code].
    pub fn set_service_code<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.service_code = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [client_token][crate::model::DescribeZonesRequest::client_token].
    pub fn set_client_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [region_id][crate::model::DescribeZonesRequest::region_id].
    pub fn set_region_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region_id = std::option::Option::Some(v.into());
        self
    }
}

/// The response message for [NetworkLoadBalancer::describe_zones][crate::client::NetworkLoadBalancer::describe_zones].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeZonesResponse {
    /// The id of the request.
    pub request_id: std::option::Option<std::string::String>,

    /// The zones.
    pub zones: std::option::Option<std::vec::Vec<crate::model::Zone>>,
}

impl DescribeZonesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][crate::model::DescribeZonesResponse::request_id].
    pub fn set_request_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [zones][crate::model::DescribeZonesResponse::zones].
    pub fn set_zones<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Zone>,
    {
        self.zones = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// A tag attached to a resource.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Tag {
    /// The key of the tag.
    pub key: std::option::Option<std::string::String>,

    /// The value of the tag.
    pub value: std::option::Option<std::string::String>,
}

impl Tag {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [key][crate::model::Tag::key].
    pub fn set_key<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.key = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [value][crate::model::Tag::value].
    pub fn set_value<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.value = std::option::Option::Some(v.into());
        self
    }
}

/// The zone and vSwitch used by a load balancer.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ZoneMapping {
    /// The vSwitch in the zone.
    #[serde(rename = "VSwitchId")]
    pub vswitch_id: std::option::Option<std::string::String>,

    /// The zone of the load balancer.
    pub zone_id: std::option::Option<std::string::String>,

    /// The private IPv4 address of the load balancer in the zone.
    #[serde(rename = "PrivateIPv4Address")]
    pub private_ipv4_address: std::option::Option<std::string::String>,

    /// The elastic IP address bound to the load balancer in the zone.
    pub allocation_id: std::option::Option<std::string::String>,

    /// The type of the elastic IP address.
    pub eip_type: std::option::Option<std::string::String>,
}

impl ZoneMapping {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [vswitch_id][crate::model::ZoneMapping::vswitch_id].
    pub fn set_vswitch_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.vswitch_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [zone_id][crate::model::ZoneMapping::zone_id].
    pub fn set_zone_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.zone_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [private_ipv4_address][crate::model::ZoneMapping::private_ipv4_address].
    pub fn set_private_ipv4_address<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.private_ipv4_address = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [allocation_id][crate::model::ZoneMapping::allocation_id].
    pub fn set_allocation_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.allocation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [eip_type][crate::model::ZoneMapping::eip_type].
    pub fn set_eip_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.eip_type = std::option::Option::Some(v.into());
        self
    }
}

/// Identifies a zone of a load balancer for a zone shift.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ShiftZoneMapping {
    /// The vSwitch in the zone.
    #[serde(rename = "VSwitchId")]
    pub vswitch_id: std::option::Option<std::string::String>,

    /// The zone removed from, or restored to, DNS resolution.
    pub zone_id: std::option::Option<std::string::String>,
}

impl ShiftZoneMapping {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [vswitch_id][crate::model::ShiftZoneMapping::vswitch_id].
    pub fn set_vswitch_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.vswitch_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [zone_id][crate::model::ShiftZoneMapping::zone_id].
    pub fn set_zone_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.zone_id = std::option::Option::Some(v.into());
        self
    }
}

/// The billing configuration of a load balancer.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LoadBalancerBillingConfig {
    /// The billing method, only `PostPay` is supported.
    pub pay_type: std::option::Option<std::string::String>,
}

impl LoadBalancerBillingConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [pay_type][crate::model::LoadBalancerBillingConfig::pay_type].
    pub fn set_pay_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.pay_type = std::option::Option::Some(v.into());
        self
    }
}

/// The deletion protection configuration.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeletionProtectionConfig {
    /// If true, the load balancer cannot be deleted.
    pub enabled: std::option::Option<bool>,

    /// The reason for enabling deletion protection.
    pub reason: std::option::Option<std::string::String>,

    /// The time deletion protection was enabled.
    pub enabled_time: std::option::Option<std::string::String>,
}

impl DeletionProtectionConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [enabled][crate::model::DeletionProtectionConfig::enabled].
    pub fn set_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [reason][crate::model::DeletionProtectionConfig::reason].
    pub fn set_reason<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.reason = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [enabled_time][crate::model::DeletionProtectionConfig::enabled_time].
    pub fn set_enabled_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.enabled_time = std::option::Option::Some(v.into());
        self
    }
}

/// The configuration modification protection.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ModificationProtectionConfig {
    /// Either `NonProtection` or `ConsoleProtection`.
    pub status: std::option::Option<std::string::String>,

    /// The reason for enabling modification protection.
    pub reason: std::option::Option<std::string::String>,

    /// The time modification protection was enabled.
    pub enabled_time: std::option::Option<std::string::String>,
}

impl ModificationProtectionConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [status][crate::model::ModificationProtectionConfig::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [reason][crate::model::ModificationProtectionConfig::reason].
    pub fn set_reason<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.reason = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [enabled_time][crate::model::ModificationProtectionConfig::enabled_time].
    pub fn set_enabled_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.enabled_time = std::option::Option::Some(v.into());
        self
    }
}

/// The health check configuration of a server group.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct HealthCheckConfig {
    /// If true, health checks are enabled.
    pub health_check_enabled: std::option::Option<bool>,

    /// The protocol used for health checks.
    pub health_check_type: std::option::Option<std::string::String>,

    /// The port used for health checks, 0 uses the backend port.
    pub health_check_connect_port: std::option::Option<i32>,

    /// Successful checks before a server is healthy.
    pub healthy_threshold: std::option::Option<i32>,

    /// Failed checks before a server is unhealthy.
    pub unhealthy_threshold: std::option::Option<i32>,

    /// The timeout of each health check, in seconds.
    pub health_check_connect_timeout: std::option::Option<i32>,

    /// The interval between health checks, in seconds.
    pub health_check_interval: std::option::Option<i32>,

    /// The domain name used by HTTP health checks.
    pub health_check_domain: std::option::Option<std::string::String>,

    /// The path used by HTTP health checks.
    pub health_check_url: std::option::Option<std::string::String>,

    /// The HTTP status codes considered healthy.
    pub health_check_http_code: std::option::Option<std::vec::Vec<std::string::String>>,

    /// The method used by HTTP health checks.
    pub http_check_method: std::option::Option<std::string::String>,
}

impl HealthCheckConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [health_check_enabled][crate::model::HealthCheckConfig::health_check_enabled].
    pub fn set_health_check_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.health_check_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [health_check_type][crate::model::HealthCheckConfig::health_check_type].
    pub fn set_health_check_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.health_check_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [health_check_connect_port][crate::model::HealthCheckConfig::health_check_connect_port].
    pub fn set_health_check_connect_port<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.health_check_connect_port = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [healthy_threshold][crate::model::HealthCheckConfig::healthy_threshold].
    pub fn set_healthy_threshold<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.healthy_threshold = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [unhealthy_threshold][crate::model::HealthCheckConfig::unhealthy_threshold].
    pub fn set_unhealthy_threshold<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.unhealthy_threshold = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [health_check_connect_timeout][crate::model::HealthCheckConfig::health_check_connect_timeout].
    pub fn set_health_check_connect_timeout<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.health_check_connect_timeout = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [health_check_interval][crate::model::HealthCheckConfig::health_check_interval].
    pub fn set_health_check_interval<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.health_check_interval = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [health_check_domain][crate::model::HealthCheckConfig::health_check_domain].
    pub fn set_health_check_domain<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.health_check_domain = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [health_check_url][crate::model::HealthCheckConfig::health_check_url].
    pub fn set_health_check_url<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.health_check_url = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [health_check_http_code][crate::model::HealthCheckConfig::health_check_http_code].
    pub fn set_health_check_http_code<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.health_check_http_code =
            std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [http_check_method][crate::model::HealthCheckConfig::http_check_method].
    pub fn set_http_check_method<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.http_check_method = std::option::Option::Some(v.into());
        self
    }
}

/// A backend server added to a server group.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Server {
    /// The id of the server.
    pub server_id: std::option::Option<std::string::String>,

    /// The type of the server.
    pub server_type: std::option::Option<std::string::String>,

    /// The IP address of the server.
    pub server_ip: std::option::Option<std::string::String>,

    /// The port used by the server.
    pub port: std::option::Option<i32>,

    /// The weight of the server.
    pub weight: std::option::Option<i32>,

    /// The description of the server.
    pub description: std::option::Option<std::string::String>,
}

impl Server {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [server_id][crate::model::Server::server_id].
    pub fn set_server_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.server_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [server_type][crate::model::Server::server_type].
    pub fn set_server_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.server_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [server_ip][crate::model::Server::server_ip].
    pub fn set_server_ip<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.server_ip = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [port][crate::model::Server::port].
    pub fn set_port<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.port = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [weight][crate::model::Server::weight].
    pub fn set_weight<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.weight = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::Server::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }
}

/// Identifies a backend server in a server group.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ServerKey {
    /// The id of the server.
    pub server_id: std::option::Option<std::string::String>,

    /// The type of the server.
    pub server_type: std::option::Option<std::string::String>,

    /// The IP address of the server.
    pub server_ip: std::option::Option<std::string::String>,

    /// The port used by the server.
    pub port: std::option::Option<i32>,
}

impl ServerKey {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [server_id][crate::model::ServerKey::server_id].
    pub fn set_server_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.server_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [server_type][crate::model::ServerKey::server_type].
    pub fn set_server_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.server_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [server_ip][crate::model::ServerKey::server_ip].
    pub fn set_server_ip<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.server_ip = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [port][crate::model::ServerKey::port].
    pub fn set_port<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.port = std::option::Option::Some(v.into());
        self
    }
}

/// An address of a load balancer in a zone.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LoadBalancerAddress {
    /// The elastic IP address id.
    pub allocation_id: std::option::Option<std::string::String>,

    /// The elastic network interface id.
    pub eni_id: std::option::Option<std::string::String>,

    /// The private IPv4 address.
    #[serde(rename = "PrivateIPv4Address")]
    pub private_ipv4_address: std::option::Option<std::string::String>,

    /// The public IPv4 address.
    #[serde(rename = "PublicIPv4Address")]
    pub public_ipv4_address: std::option::Option<std::string::String>,

    /// The IPv6 address.
    pub ipv6_address: std::option::Option<std::string::String>,

    /// The IPv4 addresses used to reach the backend servers.
    pub ipv4_local_addresses: std::option::Option<std::vec::Vec<std::string::String>>,
}

impl LoadBalancerAddress {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [allocation_id][crate::model::LoadBalancerAddress::allocation_id].
    pub fn set_allocation_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.allocation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [eni_id][crate::model::LoadBalancerAddress::eni_id].
    pub fn set_eni_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.eni_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [private_ipv4_address][crate::model::LoadBalancerAddress::private_ipv4_address].
    pub fn set_private_ipv4_address<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.private_ipv4_address = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [public_ipv4_address][crate::model::LoadBalancerAddress::public_ipv4_address].
    pub fn set_public_ipv4_address<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.public_ipv4_address = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [ipv6_address][crate::model::LoadBalancerAddress::ipv6_address].
    pub fn set_ipv6_address<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ipv6_address = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [ipv4_local_addresses][crate::model::LoadBalancerAddress::ipv4_local_addresses].
    pub fn set_ipv4_local_addresses<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.ipv4_local_addresses =
            std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// The zone configuration of an existing load balancer.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ZoneMappingAttribute {
    /// The vSwitch in the zone.
    #[serde(rename = "VSwitchId")]
    pub vswitch_id: std::option::Option<std::string::String>,

    /// The zone.
    pub zone_id: std::option::Option<std::string::String>,

    /// The status of the zone.
    pub status: std::option::Option<std::string::String>,

    /// The addresses in the zone.
    pub load_balancer_addresses:
        std::option::Option<std::vec::Vec<crate::model::LoadBalancerAddress>>,
}

impl ZoneMappingAttribute {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [vswitch_id][crate::model::ZoneMappingAttribute::vswitch_id].
    pub fn set_vswitch_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.vswitch_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [zone_id][crate::model::ZoneMappingAttribute::zone_id].
    pub fn set_zone_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.zone_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [status][crate::model::ZoneMappingAttribute::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [load_balancer_addresses][crate::model::ZoneMappingAttribute::load_balancer_addresses].
    pub fn set_load_balancer_addresses<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LoadBalancerAddress>,
    {
        self.load_balancer_addresses =
            std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// A network load balancer.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LoadBalancer {
    /// The id of the load balancer.
    pub load_balancer_id: std::option::Option<std::string::String>,

    /// The name of the load balancer.
    pub load_balancer_name: std::option::Option<std::string::String>,

    /// The type of the load balancer, `Network`.
    pub load_balancer_type: std::option::Option<std::string::String>,

    /// The status of the load balancer.
    pub load_balancer_status: std::option::Option<std::string::String>,

    /// The business status of the load balancer.
    pub load_balancer_business_status: std::option::Option<std::string::String>,

    /// Either `Internet` or `Intranet`.
    pub address_type: std::option::Option<std::string::String>,

    /// Either `ipv4` or `DualStack`.
    pub address_ip_version: std::option::Option<std::string::String>,

    /// The IPv6 address type.
    pub ipv6_address_type: std::option::Option<std::string::String>,

    /// The domain name of the load balancer.
    #[serde(rename = "DNSName")]
    pub dns_name: std::option::Option<std::string::String>,

    /// The VPC of the load balancer.
    pub vpc_id: std::option::Option<std::string::String>,

    /// The zones of the load balancer.
    pub zone_mappings: std::option::Option<std::vec::Vec<crate::model::ZoneMappingAttribute>>,

    /// The creation time.
    pub create_time: std::option::Option<std::string::String>,

    /// The maximum number of new connections per second.
    pub cps: std::option::Option<i32>,

    /// The security groups of the load balancer.
    pub security_group_ids: std::option::Option<std::vec::Vec<std::string::String>>,

    /// If true, cross-zone load balancing is enabled.
    pub cross_zone_enabled: std::option::Option<bool>,

    /// The EIP bandwidth plan.
    pub bandwidth_package_id: std::option::Option<std::string::String>,

    /// The deletion protection configuration.
    pub deletion_protection_config: std::option::Option<crate::model::DeletionProtectionConfig>,

    /// The modification protection configuration.
    pub modification_protection_config:
        std::option::Option<crate::model::ModificationProtectionConfig>,

    /// The resource group.
    pub resource_group_id: std::option::Option<std::string::String>,

    /// The region.
    pub region_id: std::option::Option<std::string::String>,

    /// The tags attached to the resource.
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}

impl LoadBalancer {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [load_balancer_id][crate::model::LoadBalancer::load_balancer_id].
    pub fn set_load_balancer_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.load_balancer_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [load_balancer_name][crate::model::LoadBalancer::load_balancer_name].
    pub fn set_load_balancer_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.load_balancer_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [load_balancer_type][crate::model::LoadBalancer::load_balancer_type].
    pub fn set_load_balancer_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.load_balancer_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [load_balancer_status][crate::model::LoadBalancer::load_balancer_status].
    pub fn set_load_balancer_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.load_balancer_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [load_balancer_business_status][crate::model::LoadBalancer::load_balancer_business_status].
    pub fn set_load_balancer_business_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.load_balancer_business_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [address_type][crate::model::LoadBalancer::address_type].
    pub fn set_address_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.address_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [address_ip_version][crate::model::LoadBalancer::address_ip_version].
    pub fn set_address_ip_version<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.address_ip_version = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [ipv6_address_type][crate::model::LoadBalancer::ipv6_address_type].
    pub fn set_ipv6_address_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ipv6_address_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [dns_name][crate::model::LoadBalancer::dns_name].
    pub fn set_dns_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.dns_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [vpc_id][crate::model::LoadBalancer::vpc_id].
    pub fn set_vpc_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.vpc_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [zone_mappings][crate::model::LoadBalancer::zone_mappings].
    pub fn set_zone_mappings<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::ZoneMappingAttribute>,
    {
        self.zone_mappings = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [create_time][crate::model::LoadBalancer::create_time].
    pub fn set_create_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.create_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [cps][crate::model::LoadBalancer::cps].
    pub fn set_cps<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.cps = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [security_group_ids][crate::model::LoadBalancer::security_group_ids].
    pub fn set_security_group_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.security_group_ids =
            std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [cross_zone_enabled][crate::model::LoadBalancer::cross_zone_enabled].
    pub fn set_cross_zone_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.cross_zone_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [bandwidth_package_id][crate::model::LoadBalancer::bandwidth_package_id].
    pub fn set_bandwidth_package_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bandwidth_package_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [deletion_protection_config][crate::model::LoadBalancer::deletion_protection_config].
    pub fn set_deletion_protection_config<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::DeletionProtectionConfig>,
    {
        self.deletion_protection_config = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [deletion_protection_config][crate::model::LoadBalancer::deletion_protection_config].
    pub fn set_or_clear_deletion_protection_config<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::DeletionProtectionConfig>,
    {
        self.deletion_protection_config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [modification_protection_config][crate::model::LoadBalancer::modification_protection_config].
    pub fn set_modification_protection_config<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ModificationProtectionConfig>,
    {
        self.modification_protection_config = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [modification_protection_config][crate::model::LoadBalancer::modification_protection_config].
    pub fn set_or_clear_modification_protection_config<T>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self
    where
        T: std::convert::Into<crate::model::ModificationProtectionConfig>,
    {
        self.modification_protection_config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_group_id][crate::model::LoadBalancer::resource_group_id].
    pub fn set_resource_group_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [region_id][crate::model::LoadBalancer::region_id].
    pub fn set_region_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [tags][crate::model::LoadBalancer::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Tag>,
    {
        self.tags = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// A listener of a network load balancer.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Listener {
    /// The id of the listener.
    pub listener_id: std::option::Option<std::string::String>,

    /// The protocol of the listener.
    pub listener_protocol: std::option::Option<std::string::String>,

    /// The port of the listener, 0 for all ports.
    pub listener_port: std::option::Option<i32>,

    /// The load balancer of the listener.
    pub load_balancer_id: std::option::Option<std::string::String>,

    /// The server group of the listener.
    pub server_group_id: std::option::Option<std::string::String>,

    /// The description of the listener.
    pub listener_description: std::option::Option<std::string::String>,

    /// The status of the listener.
    pub listener_status: std::option::Option<std::string::String>,

    /// The idle connection timeout, in seconds.
    pub idle_timeout: std::option::Option<i32>,

    /// The security policy of TCPSSL listeners.
    pub security_policy_id: std::option::Option<std::string::String>,

    /// The server certificates.
    pub certificate_ids: std::option::Option<std::vec::Vec<std::string::String>>,

    /// The CA certificates.
    pub ca_certificate_ids: std::option::Option<std::vec::Vec<std::string::String>>,

    /// If true, mutual authentication is enabled.
    pub ca_enabled: std::option::Option<bool>,

    /// The first port of the listener port range.
    pub start_port: std::option::Option<std::string::String>,

    /// The last port of the listener port range.
    pub end_port: std::option::Option<std::string::String>,

    /// If true, the client address is sent with the Proxy protocol.
    pub proxy_protocol_enabled: std::option::Option<bool>,

    /// If true, fine-grained monitoring is enabled.
    pub sec_sensor_enabled: std::option::Option<bool>,

    /// If true, ALPN is enabled.
    pub alpn_enabled: std::option::Option<bool>,

    /// The ALPN policy.
    pub alpn_policy: std::option::Option<std::string::String>,

    /// The maximum number of new connections per second.
    pub cps: std::option::Option<i32>,

    /// The maximum segment size.
    pub mss: std::option::Option<i32>,

    /// The region.
    pub region_id: std::option::Option<std::string::String>,

    /// The tags attached to the resource.
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}

impl Listener {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [listener_id][crate::model::Listener::listener_id].
    pub fn set_listener_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.listener_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [listener_protocol][crate::model::Listener::listener_protocol].
    pub fn set_listener_protocol<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.listener_protocol = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [listener_port][crate::model::Listener::listener_port].
    pub fn set_listener_port<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.listener_port = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [load_balancer_id][crate::model::Listener::load_balancer_id].
    pub fn set_load_balancer_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.load_balancer_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [server_group_id][crate::model::Listener::server_group_id].
    pub fn set_server_group_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.server_group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [listener_description][crate::model::Listener::listener_description].
    pub fn set_listener_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.listener_description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [listener_status][crate::model::Listener::listener_status].
    pub fn set_listener_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.listener_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [idle_timeout][crate::model::Listener::idle_timeout].
    pub fn set_idle_timeout<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.idle_timeout = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [security_policy_id][crate::model::Listener::security_policy_id].
    pub fn set_security_policy_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.security_policy_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [certificate_ids][crate::model::Listener::certificate_ids].
    pub fn set_certificate_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.certificate_ids = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [ca_certificate_ids][crate::model::Listener::ca_certificate_ids].
    pub fn set_ca_certificate_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.ca_certificate_ids =
            std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [ca_enabled][crate::model::Listener::ca_enabled].
    pub fn set_ca_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.ca_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [start_port][crate::model::Listener::start_port].
    pub fn set_start_port<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.start_port = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [end_port][crate::model::Listener::end_port].
    pub fn set_end_port<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.end_port = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [proxy_protocol_enabled][crate::model::Listener::proxy_protocol_enabled].
    pub fn set_proxy_protocol_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.proxy_protocol_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [sec_sensor_enabled][crate::model::Listener::sec_sensor_enabled].
    pub fn set_sec_sensor_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.sec_sensor_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [alpn_enabled][crate::model::Listener::alpn_enabled].
    pub fn set_alpn_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.alpn_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [alpn_policy][crate::model::Listener::alpn_policy].
    pub fn set_alpn_policy<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.alpn_policy = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [cps][crate::model::Listener::cps].
    pub fn set_cps<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.cps = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [mss][crate::model::Listener::mss].
    pub fn set_mss<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.mss = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [region_id][crate::model::Listener::region_id].
    pub fn set_region_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [tags][crate::model::Listener::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Tag>,
    {
        self.tags = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// A server group.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ServerGroup {
    /// The id of the server group.
    pub server_group_id: std::option::Option<std::string::String>,

    /// The name of the server group.
    pub server_group_name: std::option::Option<std::string::String>,

    /// Either `Instance` or `Ip`.
    pub server_group_type: std::option::Option<std::string::String>,

    /// The status of the server group.
    pub server_group_status: std::option::Option<std::string::String>,

    /// The IP version of the server group.
    #[serde(rename = "AddressIPVersion")]
    pub address_ip_version: std::option::Option<std::string::String>,

    /// The backend protocol.
    pub protocol: std::option::Option<std::string::String>,

    /// The scheduling algorithm.
    pub scheduler: std::option::Option<std::string::String>,

    /// The VPC of the server group.
    pub vpc_id: std::option::Option<std::string::String>,

    /// The number of servers in the group.
    pub server_count: std::option::Option<i32>,

    /// The load balancers using this server group.
    pub related_load_balancer_ids: std::option::Option<std::vec::Vec<std::string::String>>,

    /// If true, connection draining is enabled.
    pub connection_drain_enabled: std::option::Option<bool>,

    /// The connection draining timeout, in seconds.
    pub connection_drain_timeout: std::option::Option<i32>,

    /// If true, the client address is preserved.
    pub preserve_client_ip_enabled: std::option::Option<bool>,

    /// If true, all-port forwarding is enabled.
    pub any_port_enabled: std::option::Option<bool>,

    /// The health check configuration.
    pub health_check: std::option::Option<crate::model::HealthCheckConfig>,

    /// The resource group.
    pub resource_group_id: std::option::Option<std::string::String>,

    /// The region.
    pub region_id: std::option::Option<std::string::String>,

    /// The tags attached to the resource.
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}

impl ServerGroup {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [server_group_id][crate::model::ServerGroup::server_group_id].
    pub fn set_server_group_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.server_group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [server_group_name][crate::model::ServerGroup::server_group_name].
    pub fn set_server_group_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.server_group_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [server_group_type][crate::model::ServerGroup::server_group_type].
    pub fn set_server_group_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.server_group_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [server_group_status][crate::model::ServerGroup::server_group_status].
    pub fn set_server_group_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.server_group_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [address_ip_version][crate::model::ServerGroup::address_ip_version].
    pub fn set_address_ip_version<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.address_ip_version = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [protocol][crate::model::ServerGroup::protocol].
    pub fn set_protocol<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.protocol = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [scheduler][crate::model::ServerGroup::scheduler].
    pub fn set_scheduler<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scheduler = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [vpc_id][crate::model::ServerGroup::vpc_id].
    pub fn set_vpc_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.vpc_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [server_count][crate::model::ServerGroup::server_count].
    pub fn set_server_count<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.server_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [related_load_balancer_ids][crate::model::ServerGroup::related_load_balancer_ids].
    pub fn set_related_load_balancer_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.related_load_balancer_ids =
            std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [connection_drain_enabled][crate::model::ServerGroup::connection_drain_enabled].
    pub fn set_connection_drain_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.connection_drain_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [connection_drain_timeout][crate::model::ServerGroup::connection_drain_timeout].
    pub fn set_connection_drain_timeout<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.connection_drain_timeout = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [preserve_client_ip_enabled][crate::model::ServerGroup::preserve_client_ip_enabled].
    pub fn set_preserve_client_ip_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.preserve_client_ip_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [any_port_enabled][crate::model::ServerGroup::any_port_enabled].
    pub fn set_any_port_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.any_port_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [health_check][crate::model::ServerGroup::health_check].
    pub fn set_health_check<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::HealthCheckConfig>,
    {
        self.health_check = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [health_check][crate::model::ServerGroup::health_check].
    pub fn set_or_clear_health_check<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::HealthCheckConfig>,
    {
        self.health_check = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_group_id][crate::model::ServerGroup::resource_group_id].
    pub fn set_resource_group_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [region_id][crate::model::ServerGroup::region_id].
    pub fn set_region_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [tags][crate::model::ServerGroup::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Tag>,
    {
        self.tags = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// A backend server in a server group.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BackendServer {
    /// The server group.
    pub server_group_id: std::option::Option<std::string::String>,

    /// The id of the server.
    pub server_id: std::option::Option<std::string::String>,

    /// The type of the server.
    pub server_type: std::option::Option<std::string::String>,

    /// The IP address of the server.
    pub server_ip: std::option::Option<std::string::String>,

    /// The port used by the server.
    pub port: std::option::Option<i32>,

    /// The weight of the server.
    pub weight: std::option::Option<i32>,

    /// The description of the server.
    pub description: std::option::Option<std::string::String>,

    /// The status of the server.
    pub status: std::option::Option<std::string::String>,

    /// The zone of the server.
    pub zone_id: std::option::Option<std::string::String>,
}

impl BackendServer {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [server_group_id][crate::model::BackendServer::server_group_id].
    pub fn set_server_group_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.server_group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [server_id][crate::model::BackendServer::server_id].
    pub fn set_server_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.server_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [server_type][crate::model::BackendServer::server_type].
    pub fn set_server_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.server_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [server_ip][crate::model::BackendServer::server_ip].
    pub fn set_server_ip<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.server_ip = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [port][crate::model::BackendServer::port].
    pub fn set_port<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.port = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [weight][crate::model::BackendServer::weight].
    pub fn set_weight<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.weight = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::BackendServer::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [status][crate::model::BackendServer::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [zone_id][crate::model::BackendServer::zone_id].
    pub fn set_zone_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.zone_id = std::option::Option::Some(v.into());
        self
    }
}

/// A tag attached to a resource.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TagResource {
    /// The id of the resource.
    pub resource_id: std::option::Option<std::string::String>,

    /// The type of the resource.
    pub resource_type: std::option::Option<std::string::String>,

    /// The key of the tag.
    pub tag_key: std::option::Option<std::string::String>,

    /// The value of the tag.
    pub tag_value: std::option::Option<std::string::String>,
}

impl TagResource {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [resource_id][crate::model::TagResource::resource_id].
    pub fn set_resource_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [resource_type][crate::model::TagResource::resource_type].
    pub fn set_resource_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [tag_key][crate::model::TagResource::tag_key].
    pub fn set_tag_key<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tag_key = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [tag_value][crate::model::TagResource::tag_value].
    pub fn set_tag_value<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tag_value = std::option::Option::Some(v.into());
        self
    }
}

/// A region where the service is available.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Region {
    /// The id of the region.
    pub region_id: std::option::Option<std::string::String>,

    /// The name of the region.
    pub local_name: std::option::Option<std::string::String>,

    /// The endpoint of the region.
    pub region_endpoint: std::option::Option<std::string::String>,
}

impl Region {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [region_id][crate::model::Region::region_id].
    pub fn set_region_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [local_name][crate::model::Region::local_name].
    pub fn set_local_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.local_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [region_endpoint][crate::model::Region::region_endpoint].
    pub fn set_region_endpoint<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region_endpoint = std::option::Option::Some(v.into());
        self
    }
}

/// A zone where the service is available.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Zone {
    /// The id of the zone.
    pub zone_id: std::option::Option<std::string::String>,

    /// The name of the zone.
    pub local_name: std::option::Option<std::string::String>,
}

impl Zone {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [zone_id][crate::model::Zone::zone_id].
    pub fn set_zone_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.zone_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [local_name][crate::model::Zone::local_name].
    pub fn set_local_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.local_name = std::option::Option::Some(v.into());
        self
    }
}

/// The values of `AddressType` fields known to this version of the client library.
///
/// The service may return values not listed here, the fields are plain
/// strings.
pub mod address_type {
    pub const INTERNET: &str = "Internet";
    pub const INTRANET: &str = "Intranet";

    /// All the values accepted in requests.
    pub const VALUES: &[&str] = &[INTERNET, INTRANET];
}

/// The values of `AddressIpVersion` fields known to this version of the client library.
///
/// The service may return values not listed here, the fields are plain
/// strings.
pub mod address_ip_version {
    pub const IPV4: &str = "ipv4";
    pub const DUAL_STACK: &str = "DualStack";

    /// All the values accepted in requests.
    pub const VALUES: &[&str] = &[IPV4, DUAL_STACK];
}

/// The values of `ListenerProtocol` fields known to this version of the client library.
///
/// The service may return values not listed here, the fields are plain
/// strings.
pub mod listener_protocol {
    pub const TCP: &str = "TCP";
    pub const UDP: &str = "UDP";
    pub const TCPSSL: &str = "TCPSSL";

    /// All the values accepted in requests.
    pub const VALUES: &[&str] = &[TCP, UDP, TCPSSL];
}

/// The values of `ServerGroupType` fields known to this version of the client library.
///
/// The service may return values not listed here, the fields are plain
/// strings.
pub mod server_group_type {
    pub const INSTANCE: &str = "Instance";
    pub const IP: &str = "Ip";

    /// All the values accepted in requests.
    pub const VALUES: &[&str] = &[INSTANCE, IP];
}

/// The values of `Protocol` fields known to this version of the client library.
///
/// The service may return values not listed here, the fields are plain
/// strings.
pub mod server_group_protocol {
    pub const TCP: &str = "TCP";
    pub const UDP: &str = "UDP";
    pub const TCP_UDP: &str = "TCP_UDP";

    /// All the values accepted in requests.
    pub const VALUES: &[&str] = &[TCP, UDP, TCP_UDP];
}

/// The values of `Scheduler` fields known to this version of the client library.
///
/// The service may return values not listed here, the fields are plain
/// strings.
pub mod scheduler {
    pub const WRR: &str = "Wrr";
    pub const RR: &str = "rr";
    pub const SCH: &str = "sch";
    pub const TCH: &str = "tch";
    pub const QCH: &str = "qch";

    /// All the values accepted in requests.
    pub const VALUES: &[&str] = &[WRR, RR, SCH, TCH, QCH];
}

/// The values of `ServerType` fields known to this version of the client library.
///
/// The service may return values not listed here, the fields are plain
/// strings.
pub mod server_type {
    pub const ECS: &str = "Ecs";
    pub const ENI: &str = "Eni";
    pub const ECI: &str = "Eci";
    pub const IP: &str = "Ip";

    /// All the values accepted in requests.
    pub const VALUES: &[&str] = &[ECS, ENI, ECI, IP];
}

/// The values of `ResourceType` fields known to this version of the client library.
///
/// The service may return values not listed here, the fields are plain
/// strings.
pub mod resource_type {
    pub const LOADBALANCER: &str = "loadbalancer";
    pub const SECURITYPOLICY: &str = "securitypolicy";
    pub const SERVERGROUP: &str = "servergroup";

    /// All the values accepted in requests.
    pub const VALUES: &[&str] = &[LOADBALANCER, SECURITYPOLICY, SERVERGROUP];
}

/// The values of `Status` fields known to this version of the client library.
///
/// The service may return values not listed here, the fields are plain
/// strings.
pub mod modification_protection_status {
    pub const NON_PROTECTION: &str = "NonProtection";
    pub const CONSOLE_PROTECTION: &str = "ConsoleProtection";

    /// All the values accepted in requests.
    pub const VALUES: &[&str] = &[NON_PROTECTION, CONSOLE_PROTECTION];
}

/// The values of `HealthCheckType` fields known to this version of the client library.
///
/// The service may return values not listed here, the fields are plain
/// strings.
pub mod health_check_type {
    pub const TCP: &str = "TCP";
    pub const HTTP: &str = "HTTP";

    /// All the values accepted in requests.
    pub const VALUES: &[&str] = &[TCP, HTTP];
}

/// The values of `HttpCheckMethod` fields known to this version of the client library.
///
/// The service may return values not listed here, the fields are plain
/// strings.
pub mod http_check_method {
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";

    /// All the values accepted in requests.
    pub const VALUES: &[&str] = &[GET, HEAD];
}

/// The values of `PayType` fields known to this version of the client library.
///
/// The service may return values not listed here, the fields are plain
/// strings.
pub mod pay_type {
    pub const POST_PAY: &str = "PostPay";

    /// All the values accepted in requests.
    pub const VALUES: &[&str] = &[POST_PAY];
}

/// The values of `AcceptLanguage` fields known to this version of the client library.
///
/// The service may return values not listed here, the fields are plain
/// strings.
pub mod accept_language {
    pub const ZH_CN: &str = "zh-CN";
    pub const EN_US: &str = "en-US";
    pub const JA: &str = "ja";

    /// All the values accepted in requests.
    pub const VALUES: &[&str] = &[ZH_CN, EN_US, JA];
}

/// The values of `Status` fields known to this version of the client library.
///
/// The service may return values not listed here, the fields are plain
/// strings.
pub mod job_status {
    pub const SUCCEEDED: &str = "Succeeded";
    pub const FAILED: &str = "Failed";
    pub const PROCESSING: &str = "Processing";

    /// All the values accepted in requests.
    pub const VALUES: &[&str] = &[SUCCEEDED, FAILED, PROCESSING];
}
