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

/// A dyn-compatible, crate-private version of [super::NetworkLoadBalancer].
#[async_trait::async_trait]
pub trait NetworkLoadBalancer: std::fmt::Debug + Send + Sync {
    async fn create_load_balancer(
        &self,
        req: crate::model::CreateLoadBalancerRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CreateLoadBalancerResponse>>;

    async fn delete_load_balancer(
        &self,
        req: crate::model::DeleteLoadBalancerRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeleteLoadBalancerResponse>>;

    async fn get_load_balancer_attribute(
        &self,
        req: crate::model::GetLoadBalancerAttributeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::GetLoadBalancerAttributeResponse>>;

    async fn list_load_balancers(
        &self,
        req: crate::model::ListLoadBalancersRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListLoadBalancersResponse>>;

    async fn update_load_balancer_attribute(
        &self,
        req: crate::model::UpdateLoadBalancerAttributeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UpdateLoadBalancerAttributeResponse>>;

    async fn update_load_balancer_address_type_config(
        &self,
        req: crate::model::UpdateLoadBalancerAddressTypeConfigRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<crate::model::UpdateLoadBalancerAddressTypeConfigResponse>,
    >;

    async fn update_load_balancer_protection(
        &self,
        req: crate::model::UpdateLoadBalancerProtectionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UpdateLoadBalancerProtectionResponse>>;

    async fn start_shift_load_balancer_zones(
        &self,
        req: crate::model::StartShiftLoadBalancerZonesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::StartShiftLoadBalancerZonesResponse>>;

    async fn cancel_shift_load_balancer_zones(
        &self,
        req: crate::model::CancelShiftLoadBalancerZonesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CancelShiftLoadBalancerZonesResponse>>;

    async fn create_listener(
        &self,
        req: crate::model::CreateListenerRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CreateListenerResponse>>;

    async fn delete_listener(
        &self,
        req: crate::model::DeleteListenerRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeleteListenerResponse>>;

    async fn get_listener_attribute(
        &self,
        req: crate::model::GetListenerAttributeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::GetListenerAttributeResponse>>;

    async fn list_listeners(
        &self,
        req: crate::model::ListListenersRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListListenersResponse>>;

    async fn update_listener_attribute(
        &self,
        req: crate::model::UpdateListenerAttributeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UpdateListenerAttributeResponse>>;

    async fn start_listener(
        &self,
        req: crate::model::StartListenerRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::StartListenerResponse>>;

    async fn stop_listener(
        &self,
        req: crate::model::StopListenerRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::StopListenerResponse>>;

    async fn create_server_group(
        &self,
        req: crate::model::CreateServerGroupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CreateServerGroupResponse>>;

    async fn delete_server_group(
        &self,
        req: crate::model::DeleteServerGroupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeleteServerGroupResponse>>;

    async fn list_server_groups(
        &self,
        req: crate::model::ListServerGroupsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListServerGroupsResponse>>;

    async fn add_servers_to_server_group(
        &self,
        req: crate::model::AddServersToServerGroupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AddServersToServerGroupResponse>>;

    async fn remove_servers_from_server_group(
        &self,
        req: crate::model::RemoveServersFromServerGroupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::RemoveServersFromServerGroupResponse>>;

    async fn list_server_group_servers(
        &self,
        req: crate::model::ListServerGroupServersRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListServerGroupServersResponse>>;

    async fn tag_resources(
        &self,
        req: crate::model::TagResourcesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::TagResourcesResponse>>;

    async fn untag_resources(
        &self,
        req: crate::model::UntagResourcesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UntagResourcesResponse>>;

    async fn list_tag_resources(
        &self,
        req: crate::model::ListTagResourcesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListTagResourcesResponse>>;

    async fn get_job_status(
        &self,
        req: crate::model::GetJobStatusRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::GetJobStatusResponse>>;

    async fn describe_regions(
        &self,
        req: crate::model::DescribeRegionsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeRegionsResponse>>;

    async fn describe_zones(
        &self,
        req: crate::model::DescribeZonesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeZonesResponse>>;
}

/// All implementations of [super::NetworkLoadBalancer] also implement [NetworkLoadBalancer].
#[async_trait::async_trait]
impl<T: super::NetworkLoadBalancer> NetworkLoadBalancer for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn create_load_balancer(
        &self,
        req: crate::model::CreateLoadBalancerRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CreateLoadBalancerResponse>> {
        T::create_load_balancer(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_load_balancer(
        &self,
        req: crate::model::DeleteLoadBalancerRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeleteLoadBalancerResponse>> {
        T::delete_load_balancer(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_load_balancer_attribute(
        &self,
        req: crate::model::GetLoadBalancerAttributeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::GetLoadBalancerAttributeResponse>> {
        T::get_load_balancer_attribute(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_load_balancers(
        &self,
        req: crate::model::ListLoadBalancersRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListLoadBalancersResponse>> {
        T::list_load_balancers(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_load_balancer_attribute(
        &self,
        req: crate::model::UpdateLoadBalancerAttributeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UpdateLoadBalancerAttributeResponse>> {
        T::update_load_balancer_attribute(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_load_balancer_address_type_config(
        &self,
        req: crate::model::UpdateLoadBalancerAddressTypeConfigRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<crate::model::UpdateLoadBalancerAddressTypeConfigResponse>,
    > {
        T::update_load_balancer_address_type_config(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_load_balancer_protection(
        &self,
        req: crate::model::UpdateLoadBalancerProtectionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<crate::model::UpdateLoadBalancerProtectionResponse>,
    > {
        T::update_load_balancer_protection(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn start_shift_load_balancer_zones(
        &self,
        req: crate::model::StartShiftLoadBalancerZonesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::StartShiftLoadBalancerZonesResponse>> {
        T::start_shift_load_balancer_zones(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn cancel_shift_load_balancer_zones(
        &self,
        req: crate::model::CancelShiftLoadBalancerZonesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<crate::model::CancelShiftLoadBalancerZonesResponse>,
    > {
        T::cancel_shift_load_balancer_zones(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_listener(
        &self,
        req: crate::model::CreateListenerRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CreateListenerResponse>> {
        T::create_listener(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_listener(
        &self,
        req: crate::model::DeleteListenerRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeleteListenerResponse>> {
        T::delete_listener(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_listener_attribute(
        &self,
        req: crate::model::GetListenerAttributeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::GetListenerAttributeResponse>> {
        T::get_listener_attribute(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_listeners(
        &self,
        req: crate::model::ListListenersRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListListenersResponse>> {
        T::list_listeners(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_listener_attribute(
        &self,
        req: crate::model::UpdateListenerAttributeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UpdateListenerAttributeResponse>> {
        T::update_listener_attribute(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn start_listener(
        &self,
        req: crate::model::StartListenerRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::StartListenerResponse>> {
        T::start_listener(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn stop_listener(
        &self,
        req: crate::model::StopListenerRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::StopListenerResponse>> {
        T::stop_listener(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_server_group(
        &self,
        req: crate::model::CreateServerGroupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CreateServerGroupResponse>> {
        T::create_server_group(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_server_group(
        &self,
        req: crate::model::DeleteServerGroupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeleteServerGroupResponse>> {
        T::delete_server_group(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_server_groups(
        &self,
        req: crate::model::ListServerGroupsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListServerGroupsResponse>> {
        T::list_server_groups(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn add_servers_to_server_group(
        &self,
        req: crate::model::AddServersToServerGroupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AddServersToServerGroupResponse>> {
        T::add_servers_to_server_group(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn remove_servers_from_server_group(
        &self,
        req: crate::model::RemoveServersFromServerGroupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<crate::model::RemoveServersFromServerGroupResponse>,
    > {
        T::remove_servers_from_server_group(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_server_group_servers(
        &self,
        req: crate::model::ListServerGroupServersRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListServerGroupServersResponse>> {
        T::list_server_group_servers(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn tag_resources(
        &self,
        req: crate::model::TagResourcesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::TagResourcesResponse>> {
        T::tag_resources(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn untag_resources(
        &self,
        req: crate::model::UntagResourcesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UntagResourcesResponse>> {
        T::untag_resources(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_tag_resources(
        &self,
        req: crate::model::ListTagResourcesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListTagResourcesResponse>> {
        T::list_tag_resources(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_job_status(
        &self,
        req: crate::model::GetJobStatusRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::GetJobStatusResponse>> {
        T::get_job_status(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn describe_regions(
        &self,
        req: crate::model::DescribeRegionsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeRegionsResponse>> {
        T::describe_regions(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn describe_zones(
        &self,
        req: crate::model::DescribeZonesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeZonesResponse>> {
        T::describe_zones(self, req, options).await
    }
}
