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

//! The descriptors of each operation in the service.
//!
//! The descriptors are constant, they are never derived from the request.

use gaxi::operation::{Method, OperationDescriptor, ShrinkField};
use gaxi::shrink::ShrinkStyle;

/// The API version implemented by this crate.
pub const VERSION: &str = "2022-04-30";

/// Describes [NetworkLoadBalancer::create_load_balancer][crate::client::NetworkLoadBalancer::create_load_balancer].
pub static CREATE_LOAD_BALANCER: OperationDescriptor =
    OperationDescriptor::rpc("CreateLoadBalancer", VERSION, Method::Post);

/// Describes [NetworkLoadBalancer::delete_load_balancer][crate::client::NetworkLoadBalancer::delete_load_balancer].
pub static DELETE_LOAD_BALANCER: OperationDescriptor =
    OperationDescriptor::rpc("DeleteLoadBalancer", VERSION, Method::Post);

/// Describes [NetworkLoadBalancer::get_load_balancer_attribute][crate::client::NetworkLoadBalancer::get_load_balancer_attribute].
pub static GET_LOAD_BALANCER_ATTRIBUTE: OperationDescriptor =
    OperationDescriptor::rpc("GetLoadBalancerAttribute", VERSION, Method::Get);

/// Describes [NetworkLoadBalancer::list_load_balancers][crate::client::NetworkLoadBalancer::list_load_balancers].
pub static LIST_LOAD_BALANCERS: OperationDescriptor =
    OperationDescriptor::rpc("ListLoadBalancers", VERSION, Method::Get);

/// Describes [NetworkLoadBalancer::update_load_balancer_attribute][crate::client::NetworkLoadBalancer::update_load_balancer_attribute].
pub static UPDATE_LOAD_BALANCER_ATTRIBUTE: OperationDescriptor =
    OperationDescriptor::rpc("UpdateLoadBalancerAttribute", VERSION, Method::Post);

/// Describes [NetworkLoadBalancer::update_load_balancer_address_type_config][crate::client::NetworkLoadBalancer::update_load_balancer_address_type_config].
pub static UPDATE_LOAD_BALANCER_ADDRESS_TYPE_CONFIG: OperationDescriptor =
    OperationDescriptor::rpc("UpdateLoadBalancerAddressTypeConfig", VERSION, Method::Post);

/// Describes [NetworkLoadBalancer::update_load_balancer_protection][crate::client::NetworkLoadBalancer::update_load_balancer_protection].
pub static UPDATE_LOAD_BALANCER_PROTECTION: OperationDescriptor =
    OperationDescriptor::rpc("UpdateLoadBalancerProtection", VERSION, Method::Post);

/// Describes [NetworkLoadBalancer::start_shift_load_balancer_zones][crate::client::NetworkLoadBalancer::start_shift_load_balancer_zones].
pub static START_SHIFT_LOAD_BALANCER_ZONES: OperationDescriptor =
    OperationDescriptor::rpc("StartShiftLoadBalancerZones", VERSION, Method::Post).with_shrink(&[
        ShrinkField {
            field: "ZoneMappings",
            style: ShrinkStyle::Json,
        },
    ]);

/// Describes [NetworkLoadBalancer::cancel_shift_load_balancer_zones][crate::client::NetworkLoadBalancer::cancel_shift_load_balancer_zones].
pub static CANCEL_SHIFT_LOAD_BALANCER_ZONES: OperationDescriptor =
    OperationDescriptor::rpc("CancelShiftLoadBalancerZones", VERSION, Method::Post).with_shrink(&[
        ShrinkField {
            field: "ZoneMappings",
            style: ShrinkStyle::Json,
        },
    ]);

/// Describes [NetworkLoadBalancer::create_listener][crate::client::NetworkLoadBalancer::create_listener].
pub static CREATE_LISTENER: OperationDescriptor =
    OperationDescriptor::rpc("CreateListener", VERSION, Method::Post);

/// Describes [NetworkLoadBalancer::delete_listener][crate::client::NetworkLoadBalancer::delete_listener].
pub static DELETE_LISTENER: OperationDescriptor =
    OperationDescriptor::rpc("DeleteListener", VERSION, Method::Post);

/// Describes [NetworkLoadBalancer::get_listener_attribute][crate::client::NetworkLoadBalancer::get_listener_attribute].
pub static GET_LISTENER_ATTRIBUTE: OperationDescriptor =
    OperationDescriptor::rpc("GetListenerAttribute", VERSION, Method::Get);

/// Describes [NetworkLoadBalancer::list_listeners][crate::client::NetworkLoadBalancer::list_listeners].
pub static LIST_LISTENERS: OperationDescriptor =
    OperationDescriptor::rpc("ListListeners", VERSION, Method::Get);

/// Describes [NetworkLoadBalancer::update_listener_attribute][crate::client::NetworkLoadBalancer::update_listener_attribute].
pub static UPDATE_LISTENER_ATTRIBUTE: OperationDescriptor =
    OperationDescriptor::rpc("UpdateListenerAttribute", VERSION, Method::Post);

/// Describes [NetworkLoadBalancer::start_listener][crate::client::NetworkLoadBalancer::start_listener].
pub static START_LISTENER: OperationDescriptor =
    OperationDescriptor::rpc("StartListener", VERSION, Method::Post);

/// Describes [NetworkLoadBalancer::stop_listener][crate::client::NetworkLoadBalancer::stop_listener].
pub static STOP_LISTENER: OperationDescriptor =
    OperationDescriptor::rpc("StopListener", VERSION, Method::Post);

/// Describes [NetworkLoadBalancer::create_server_group][crate::client::NetworkLoadBalancer::create_server_group].
pub static CREATE_SERVER_GROUP: OperationDescriptor =
    OperationDescriptor::rpc("CreateServerGroup", VERSION, Method::Post);

/// Describes [NetworkLoadBalancer::delete_server_group][crate::client::NetworkLoadBalancer::delete_server_group].
pub static DELETE_SERVER_GROUP: OperationDescriptor =
    OperationDescriptor::rpc("DeleteServerGroup", VERSION, Method::Post);

/// Describes [NetworkLoadBalancer::list_server_groups][crate::client::NetworkLoadBalancer::list_server_groups].
pub static LIST_SERVER_GROUPS: OperationDescriptor =
    OperationDescriptor::rpc("ListServerGroups", VERSION, Method::Get);

/// Describes [NetworkLoadBalancer::add_servers_to_server_group][crate::client::NetworkLoadBalancer::add_servers_to_server_group].
pub static ADD_SERVERS_TO_SERVER_GROUP: OperationDescriptor =
    OperationDescriptor::rpc("AddServersToServerGroup", VERSION, Method::Post);

/// Describes [NetworkLoadBalancer::remove_servers_from_server_group][crate::client::NetworkLoadBalancer::remove_servers_from_server_group].
pub static REMOVE_SERVERS_FROM_SERVER_GROUP: OperationDescriptor =
    OperationDescriptor::rpc("RemoveServersFromServerGroup", VERSION, Method::Post);

/// Describes [NetworkLoadBalancer::list_server_group_servers][crate::client::NetworkLoadBalancer::list_server_group_servers].
pub static LIST_SERVER_GROUP_SERVERS: OperationDescriptor =
    OperationDescriptor::rpc("ListServerGroupServers", VERSION, Method::Get);

/// Describes [NetworkLoadBalancer::tag_resources][crate::client::NetworkLoadBalancer::tag_resources].
pub static TAG_RESOURCES: OperationDescriptor =
    OperationDescriptor::rpc("TagResources", VERSION, Method::Post);

/// Describes [NetworkLoadBalancer::untag_resources][crate::client::NetworkLoadBalancer::untag_resources].
pub static UNTAG_RESOURCES: OperationDescriptor =
    OperationDescriptor::rpc("UntagResources", VERSION, Method::Post);

/// Describes [NetworkLoadBalancer::list_tag_resources][crate::client::NetworkLoadBalancer::list_tag_resources].
pub static LIST_TAG_RESOURCES: OperationDescriptor =
    OperationDescriptor::rpc("ListTagResources", VERSION, Method::Get).with_shrink(&[
        ShrinkField {
            field: "Tag",
            style: ShrinkStyle::Json,
        },
    ]);

/// Describes [NetworkLoadBalancer::get_job_status][crate::client::NetworkLoadBalancer::get_job_status].
pub static GET_JOB_STATUS: OperationDescriptor =
    OperationDescriptor::rpc("GetJobStatus", VERSION, Method::Get);

/// Describes [NetworkLoadBalancer::describe_regions][crate::client::NetworkLoadBalancer::describe_regions].
pub static DESCRIBE_REGIONS: OperationDescriptor =
    OperationDescriptor::rpc("DescribeRegions", VERSION, Method::Get);

/// Describes [NetworkLoadBalancer::describe_zones][crate::client::NetworkLoadBalancer::describe_zones].
pub static DESCRIBE_ZONES: OperationDescriptor =
    OperationDescriptor::rpc("DescribeZones", VERSION, Method::Get);

/// All the operations in the service.
pub static ALL: &[&OperationDescriptor] = &[
    &CREATE_LOAD_BALANCER,
    &DELETE_LOAD_BALANCER,
    &GET_LOAD_BALANCER_ATTRIBUTE,
    &LIST_LOAD_BALANCERS,
    &UPDATE_LOAD_BALANCER_ATTRIBUTE,
    &UPDATE_LOAD_BALANCER_ADDRESS_TYPE_CONFIG,
    &UPDATE_LOAD_BALANCER_PROTECTION,
    &START_SHIFT_LOAD_BALANCER_ZONES,
    &CANCEL_SHIFT_LOAD_BALANCER_ZONES,
    &CREATE_LISTENER,
    &DELETE_LISTENER,
    &GET_LISTENER_ATTRIBUTE,
    &LIST_LISTENERS,
    &UPDATE_LISTENER_ATTRIBUTE,
    &START_LISTENER,
    &STOP_LISTENER,
    &CREATE_SERVER_GROUP,
    &DELETE_SERVER_GROUP,
    &LIST_SERVER_GROUPS,
    &ADD_SERVERS_TO_SERVER_GROUP,
    &REMOVE_SERVERS_FROM_SERVER_GROUP,
    &LIST_SERVER_GROUP_SERVERS,
    &TAG_RESOURCES,
    &UNTAG_RESOURCES,
    &LIST_TAG_RESOURCES,
    &GET_JOB_STATUS,
    &DESCRIBE_REGIONS,
    &DESCRIBE_ZONES,
];
