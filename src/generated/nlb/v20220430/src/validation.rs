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

//! Request constraints, checked before each request is sent.

use gaxi::validation::{Validate, Validator};

impl Validate for crate::model::CreateLoadBalancerRequest {
    fn check(&self, v: &mut Validator) {
        v.min_length("LoadBalancerName", &self.load_balancer_name, 2)
            .max_length("LoadBalancerName", &self.load_balancer_name, 128)
            .required("AddressType", &self.address_type)
            .one_of("AddressType", &self.address_type, crate::model::address_type::VALUES)
            .one_of(
                "AddressIpVersion",
                &self.address_ip_version,
                crate::model::address_ip_version::VALUES,
            )
            .required("VpcId", &self.vpc_id)
            .required("ZoneMappings", &self.zone_mappings)
            .min_items("ZoneMappings", &self.zone_mappings, 1)
            .max_items("ZoneMappings", &self.zone_mappings, 10)
            .each("ZoneMappings", &self.zone_mappings)
            .nested("LoadBalancerBillingConfig", &self.load_balancer_billing_config)
            .nested("DeletionProtectionConfig", &self.deletion_protection_config)
            .nested("ModificationProtectionConfig", &self.modification_protection_config)
            .max_items("Tag", &self.tag, 20)
            .each("Tag", &self.tag);
    }
}

impl Validate for crate::model::DeleteLoadBalancerRequest {
    fn check(&self, v: &mut Validator) {
        v.required("LoadBalancerId", &self.load_balancer_id);
    }
}

impl Validate for crate::model::GetLoadBalancerAttributeRequest {
    fn check(&self, v: &mut Validator) {
        v.required("LoadBalancerId", &self.load_balancer_id);
    }
}

impl Validate for crate::model::ListLoadBalancersRequest {
    fn check(&self, v: &mut Validator) {
        v.max_items("LoadBalancerIds", &self.load_balancer_ids, 20)
            .max_items("LoadBalancerNames", &self.load_balancer_names, 20)
            .max_items("VpcIds", &self.vpc_ids, 10)
            .one_of("AddressType", &self.address_type, crate::model::address_type::VALUES)
            .one_of(
                "AddressIpVersion",
                &self.address_ip_version,
                crate::model::address_ip_version::VALUES,
            )
            .max_items("Tag", &self.tag, 20)
            .each("Tag", &self.tag)
            .range("MaxResults", &self.max_results, 1, 100);
    }
}

impl Validate for crate::model::UpdateLoadBalancerAttributeRequest {
    fn check(&self, v: &mut Validator) {
        v.required("LoadBalancerId", &self.load_balancer_id)
            .min_length("LoadBalancerName", &self.load_balancer_name, 2)
            .max_length("LoadBalancerName", &self.load_balancer_name, 128)
            .range("Cps", &self.cps, 0, 1000000);
    }
}

impl Validate for crate::model::UpdateLoadBalancerAddressTypeConfigRequest {
    fn check(&self, v: &mut Validator) {
        v.required("LoadBalancerId", &self.load_balancer_id)
            .required("AddressType", &self.address_type)
            .one_of("AddressType", &self.address_type, crate::model::address_type::VALUES)
            .max_items("ZoneMappings", &self.zone_mappings, 10)
            .each("ZoneMappings", &self.zone_mappings);
    }
}

impl Validate for crate::model::UpdateLoadBalancerProtectionRequest {
    fn check(&self, v: &mut Validator) {
        v.required("LoadBalancerId", &self.load_balancer_id)
            .max_length("DeletionProtectionReason", &self.deletion_protection_reason, 255)
            .one_of(
                "ModificationProtectionStatus",
                &self.modification_protection_status,
                crate::model::modification_protection_status::VALUES,
            )
            .max_length("ModificationProtectionReason", &self.modification_protection_reason, 255);
    }
}

impl Validate for crate::model::StartShiftLoadBalancerZonesRequest {
    fn check(&self, v: &mut Validator) {
        v.required("LoadBalancerId", &self.load_balancer_id)
            .required("ZoneMappings", &self.zone_mappings)
            .min_items("ZoneMappings", &self.zone_mappings, 1)
            .each("ZoneMappings", &self.zone_mappings);
    }
}

impl Validate for crate::model::CancelShiftLoadBalancerZonesRequest {
    fn check(&self, v: &mut Validator) {
        v.required("LoadBalancerId", &self.load_balancer_id)
            .required("ZoneMappings", &self.zone_mappings)
            .min_items("ZoneMappings", &self.zone_mappings, 1)
            .each("ZoneMappings", &self.zone_mappings);
    }
}

impl Validate for crate::model::CreateListenerRequest {
    fn check(&self, v: &mut Validator) {
        v.required("ListenerProtocol", &self.listener_protocol)
            .one_of(
                "ListenerProtocol",
                &self.listener_protocol,
                crate::model::listener_protocol::VALUES,
            )
            .range("ListenerPort", &self.listener_port, 0, 65535)
            .required("LoadBalancerId", &self.load_balancer_id)
            .required("ServerGroupId", &self.server_group_id)
            .min_length("ListenerDescription", &self.listener_description, 2)
            .max_length("ListenerDescription", &self.listener_description, 256)
            .range("IdleTimeout", &self.idle_timeout, 1, 900)
            .max_items("CertificateIds", &self.certificate_ids, 1)
            .max_items("CaCertificateIds", &self.ca_certificate_ids, 1)
            .range("StartPort", &self.start_port, 0, 65535)
            .range("EndPort", &self.end_port, 0, 65535)
            .range("Cps", &self.cps, 0, 1000000)
            .range("Mss", &self.mss, 0, 1500)
            .max_items("Tag", &self.tag, 20)
            .each("Tag", &self.tag);
    }
}

impl Validate for crate::model::DeleteListenerRequest {
    fn check(&self, v: &mut Validator) {
        v.required("ListenerId", &self.listener_id);
    }
}

impl Validate for crate::model::GetListenerAttributeRequest {
    fn check(&self, v: &mut Validator) {
        v.required("ListenerId", &self.listener_id);
    }
}

impl Validate for crate::model::ListListenersRequest {
    fn check(&self, v: &mut Validator) {
        v.max_items("ListenerIds", &self.listener_ids, 20)
            .max_items("LoadBalancerIds", &self.load_balancer_ids, 20)
            .one_of(
                "ListenerProtocol",
                &self.listener_protocol,
                crate::model::listener_protocol::VALUES,
            )
            .max_items("Tag", &self.tag, 20)
            .each("Tag", &self.tag)
            .range("MaxResults", &self.max_results, 1, 100);
    }
}

impl Validate for crate::model::UpdateListenerAttributeRequest {
    fn check(&self, v: &mut Validator) {
        v.required("ListenerId", &self.listener_id)
            .min_length("ListenerDescription", &self.listener_description, 2)
            .max_length("ListenerDescription", &self.listener_description, 256)
            .range("IdleTimeout", &self.idle_timeout, 1, 900)
            .max_items("CertificateIds", &self.certificate_ids, 1)
            .max_items("CaCertificateIds", &self.ca_certificate_ids, 1)
            .range("Cps", &self.cps, 0, 1000000)
            .range("Mss", &self.mss, 0, 1500);
    }
}

impl Validate for crate::model::StartListenerRequest {
    fn check(&self, v: &mut Validator) {
        v.required("ListenerId", &self.listener_id);
    }
}

impl Validate for crate::model::StopListenerRequest {
    fn check(&self, v: &mut Validator) {
        v.required("ListenerId", &self.listener_id);
    }
}

impl Validate for crate::model::CreateServerGroupRequest {
    fn check(&self, v: &mut Validator) {
        v.required("ServerGroupName", &self.server_group_name)
            .min_length("ServerGroupName", &self.server_group_name, 2)
            .max_length("ServerGroupName", &self.server_group_name, 128)
            .one_of(
                "ServerGroupType",
                &self.server_group_type,
                crate::model::server_group_type::VALUES,
            )
            .one_of(
                "AddressIPVersion",
                &self.address_ip_version,
                crate::model::address_ip_version::VALUES,
            )
            .required("VpcId", &self.vpc_id)
            .one_of("Protocol", &self.protocol, crate::model::server_group_protocol::VALUES)
            .one_of("Scheduler", &self.scheduler, crate::model::scheduler::VALUES)
            .range("ConnectionDrainTimeout", &self.connection_drain_timeout, 0, 900)
            .nested("HealthCheckConfig", &self.health_check_config)
            .max_items("Tag", &self.tag, 20)
            .each("Tag", &self.tag);
    }
}

impl Validate for crate::model::DeleteServerGroupRequest {
    fn check(&self, v: &mut Validator) {
        v.required("ServerGroupId", &self.server_group_id);
    }
}

impl Validate for crate::model::ListServerGroupsRequest {
    fn check(&self, v: &mut Validator) {
        v.max_items("ServerGroupIds", &self.server_group_ids, 20)
            .max_items("ServerGroupNames", &self.server_group_names, 20)
            .one_of(
                "ServerGroupType",
                &self.server_group_type,
                crate::model::server_group_type::VALUES,
            )
            .max_items("Tag", &self.tag, 20)
            .each("Tag", &self.tag)
            .range("MaxResults", &self.max_results, 1, 100);
    }
}

impl Validate for crate::model::AddServersToServerGroupRequest {
    fn check(&self, v: &mut Validator) {
        v.required("ServerGroupId", &self.server_group_id)
            .required("Servers", &self.servers)
            .min_items("Servers", &self.servers, 1)
            .max_items("Servers", &self.servers, 200)
            .each("Servers", &self.servers);
    }
}

impl Validate for crate::model::RemoveServersFromServerGroupRequest {
    fn check(&self, v: &mut Validator) {
        v.required("ServerGroupId", &self.server_group_id)
            .required("Servers", &self.servers)
            .min_items("Servers", &self.servers, 1)
            .max_items("Servers", &self.servers, 200)
            .each("Servers", &self.servers);
    }
}

impl Validate for crate::model::ListServerGroupServersRequest {
    fn check(&self, v: &mut Validator) {
        v.max_items("ServerIds", &self.server_ids, 40)
            .range("MaxResults", &self.max_results, 1, 100);
    }
}

impl Validate for crate::model::TagResourcesRequest {
    fn check(&self, v: &mut Validator) {
        v.required("ResourceType", &self.resource_type)
            .one_of("ResourceType", &self.resource_type, crate::model::resource_type::VALUES)
            .required("ResourceId", &self.resource_id)
            .min_items("ResourceId", &self.resource_id, 1)
            .max_items("ResourceId", &self.resource_id, 50)
            .required("Tag", &self.tag)
            .min_items("Tag", &self.tag, 1)
            .max_items("Tag", &self.tag, 20)
            .each("Tag", &self.tag);
    }
}

impl Validate for crate::model::UntagResourcesRequest {
    fn check(&self, v: &mut Validator) {
        v.required("ResourceType", &self.resource_type)
            .one_of("ResourceType", &self.resource_type, crate::model::resource_type::VALUES)
            .required("ResourceId", &self.resource_id)
            .min_items("ResourceId", &self.resource_id, 1)
            .max_items("ResourceId", &self.resource_id, 50)
            .max_items("TagKey", &self.tag_key, 20);
    }
}

impl Validate for crate::model::ListTagResourcesRequest {
    fn check(&self, v: &mut Validator) {
        v.required("ResourceType", &self.resource_type)
            .one_of("ResourceType", &self.resource_type, crate::model::resource_type::VALUES)
            .max_items("ResourceId", &self.resource_id, 50)
            .max_items("Tag", &self.tag, 20)
            .each("Tag", &self.tag)
            .range("MaxResults", &self.max_results, 1, 100);
    }
}

impl Validate for crate::model::GetJobStatusRequest {
    fn check(&self, v: &mut Validator) {
        v.required("JobId", &self.job_id);
    }
}

impl Validate for crate::model::DescribeRegionsRequest {
    fn check(&self, v: &mut Validator) {
        v.one_of("AcceptLanguage", &self.accept_language, crate::model::accept_language::VALUES);
    }
}

impl Validate for crate::model::DescribeZonesRequest {
    fn check(&self, v: &mut Validator) {
        v.one_of("AcceptLanguage", &self.accept_language, crate::model::accept_language::VALUES);
    }
}

impl Validate for crate::model::Tag {
    fn check(&self, v: &mut Validator) {
        v.required("Key", &self.key)
            .max_length("Key", &self.key, 64)
            .max_length("Value", &self.value, 128);
    }
}

impl Validate for crate::model::ZoneMapping {
    fn check(&self, v: &mut Validator) {
        v.required("VSwitchId", &self.vswitch_id)
            .required("ZoneId", &self.zone_id);
    }
}

impl Validate for crate::model::ShiftZoneMapping {
    fn check(&self, v: &mut Validator) {
        v.required("VSwitchId", &self.vswitch_id)
            .required("ZoneId", &self.zone_id);
    }
}

impl Validate for crate::model::LoadBalancerBillingConfig {
    fn check(&self, v: &mut Validator) {
        v.one_of("PayType", &self.pay_type, crate::model::pay_type::VALUES);
    }
}

impl Validate for crate::model::DeletionProtectionConfig {
    fn check(&self, v: &mut Validator) {
        v.max_length("Reason", &self.reason, 255);
    }
}

impl Validate for crate::model::ModificationProtectionConfig {
    fn check(&self, v: &mut Validator) {
        v.one_of("Status", &self.status, crate::model::modification_protection_status::VALUES)
            .max_length("Reason", &self.reason, 255);
    }
}

impl Validate for crate::model::HealthCheckConfig {
    fn check(&self, v: &mut Validator) {
        v.one_of(
            "HealthCheckType",
            &self.health_check_type,
            crate::model::health_check_type::VALUES,
        )
            .range("HealthCheckConnectPort", &self.health_check_connect_port, 0, 65535)
            .range("HealthyThreshold", &self.healthy_threshold, 2, 10)
            .range("UnhealthyThreshold", &self.unhealthy_threshold, 2, 10)
            .range("HealthCheckConnectTimeout", &self.health_check_connect_timeout, 1, 300)
            .range("HealthCheckInterval", &self.health_check_interval, 1, 50)
            .one_of(
                "HttpCheckMethod",
                &self.http_check_method,
                crate::model::http_check_method::VALUES,
            );
    }
}

impl Validate for crate::model::Server {
    fn check(&self, v: &mut Validator) {
        v.required("ServerId", &self.server_id)
            .required("ServerType", &self.server_type)
            .one_of("ServerType", &self.server_type, crate::model::server_type::VALUES)
            .range("Port", &self.port, 0, 65535)
            .range("Weight", &self.weight, 0, 100)
            .max_length("Description", &self.description, 256);
    }
}

impl Validate for crate::model::ServerKey {
    fn check(&self, v: &mut Validator) {
        v.required("ServerId", &self.server_id)
            .required("ServerType", &self.server_type)
            .one_of("ServerType", &self.server_type, crate::model::server_type::VALUES)
            .range("Port", &self.port, 0, 65535);
    }
}
