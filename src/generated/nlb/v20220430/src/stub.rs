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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

#![allow(rustdoc::broken_intra_doc_links)]

pub(crate) mod dynamic;

/// Defines the trait used to implement [super::client::NetworkLoadBalancer].
///
/// Application developers may need to implement this trait to mock
/// `client::NetworkLoadBalancer`. In other use-cases, application developers only
/// use `client::NetworkLoadBalancer` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new operations routinely. Consequently, this trait gains new
/// methods too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just panic.
pub trait NetworkLoadBalancer: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::NetworkLoadBalancer::create_load_balancer].
    fn create_load_balancer(
        &self,
        _req: crate::model::CreateLoadBalancerRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::CreateLoadBalancerResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::NetworkLoadBalancer::delete_load_balancer].
    fn delete_load_balancer(
        &self,
        _req: crate::model::DeleteLoadBalancerRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DeleteLoadBalancerResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::NetworkLoadBalancer::get_load_balancer_attribute].
    fn get_load_balancer_attribute(
        &self,
        _req: crate::model::GetLoadBalancerAttributeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::GetLoadBalancerAttributeResponse>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::NetworkLoadBalancer::list_load_balancers].
    fn list_load_balancers(
        &self,
        _req: crate::model::ListLoadBalancersRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ListLoadBalancersResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::NetworkLoadBalancer::update_load_balancer_attribute].
    fn update_load_balancer_attribute(
        &self,
        _req: crate::model::UpdateLoadBalancerAttributeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::UpdateLoadBalancerAttributeResponse>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::NetworkLoadBalancer::update_load_balancer_address_type_config].
    fn update_load_balancer_address_type_config(
        &self,
        _req: crate::model::UpdateLoadBalancerAddressTypeConfigRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::UpdateLoadBalancerAddressTypeConfigResponse>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::NetworkLoadBalancer::update_load_balancer_protection].
    fn update_load_balancer_protection(
        &self,
        _req: crate::model::UpdateLoadBalancerProtectionRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::UpdateLoadBalancerProtectionResponse>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::NetworkLoadBalancer::start_shift_load_balancer_zones].
    fn start_shift_load_balancer_zones(
        &self,
        _req: crate::model::StartShiftLoadBalancerZonesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::StartShiftLoadBalancerZonesResponse>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::NetworkLoadBalancer::cancel_shift_load_balancer_zones].
    fn cancel_shift_load_balancer_zones(
        &self,
        _req: crate::model::CancelShiftLoadBalancerZonesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::CancelShiftLoadBalancerZonesResponse>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::NetworkLoadBalancer::create_listener].
    fn create_listener(
        &self,
        _req: crate::model::CreateListenerRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::CreateListenerResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::NetworkLoadBalancer::delete_listener].
    fn delete_listener(
        &self,
        _req: crate::model::DeleteListenerRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DeleteListenerResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::NetworkLoadBalancer::get_listener_attribute].
    fn get_listener_attribute(
        &self,
        _req: crate::model::GetListenerAttributeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::GetListenerAttributeResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::NetworkLoadBalancer::list_listeners].
    fn list_listeners(
        &self,
        _req: crate::model::ListListenersRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ListListenersResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::NetworkLoadBalancer::update_listener_attribute].
    fn update_listener_attribute(
        &self,
        _req: crate::model::UpdateListenerAttributeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::UpdateListenerAttributeResponse>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::NetworkLoadBalancer::start_listener].
    fn start_listener(
        &self,
        _req: crate::model::StartListenerRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::StartListenerResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::NetworkLoadBalancer::stop_listener].
    fn stop_listener(
        &self,
        _req: crate::model::StopListenerRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::StopListenerResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::NetworkLoadBalancer::create_server_group].
    fn create_server_group(
        &self,
        _req: crate::model::CreateServerGroupRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::CreateServerGroupResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::NetworkLoadBalancer::delete_server_group].
    fn delete_server_group(
        &self,
        _req: crate::model::DeleteServerGroupRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DeleteServerGroupResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::NetworkLoadBalancer::list_server_groups].
    fn list_server_groups(
        &self,
        _req: crate::model::ListServerGroupsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ListServerGroupsResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::NetworkLoadBalancer::add_servers_to_server_group].
    fn add_servers_to_server_group(
        &self,
        _req: crate::model::AddServersToServerGroupRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::AddServersToServerGroupResponse>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::NetworkLoadBalancer::remove_servers_from_server_group].
    fn remove_servers_from_server_group(
        &self,
        _req: crate::model::RemoveServersFromServerGroupRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::RemoveServersFromServerGroupResponse>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::NetworkLoadBalancer::list_server_group_servers].
    fn list_server_group_servers(
        &self,
        _req: crate::model::ListServerGroupServersRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::ListServerGroupServersResponse>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::NetworkLoadBalancer::tag_resources].
    fn tag_resources(
        &self,
        _req: crate::model::TagResourcesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::TagResourcesResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::NetworkLoadBalancer::untag_resources].
    fn untag_resources(
        &self,
        _req: crate::model::UntagResourcesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::UntagResourcesResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::NetworkLoadBalancer::list_tag_resources].
    fn list_tag_resources(
        &self,
        _req: crate::model::ListTagResourcesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ListTagResourcesResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::NetworkLoadBalancer::get_job_status].
    fn get_job_status(
        &self,
        _req: crate::model::GetJobStatusRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::GetJobStatusResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::NetworkLoadBalancer::describe_regions].
    fn describe_regions(
        &self,
        _req: crate::model::DescribeRegionsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DescribeRegionsResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::NetworkLoadBalancer::describe_zones].
    fn describe_zones(
        &self,
        _req: crate::model::DescribeZonesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DescribeZonesResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }
}
