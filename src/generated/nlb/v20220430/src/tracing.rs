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

use crate::Result;

/// Implements a [NetworkLoadBalancer](super::stub::NetworkLoadBalancer) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct NetworkLoadBalancer<T>
where
    T: super::stub::NetworkLoadBalancer + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> NetworkLoadBalancer<T>
where
    T: super::stub::NetworkLoadBalancer + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::NetworkLoadBalancer for NetworkLoadBalancer<T>
where
    T: super::stub::NetworkLoadBalancer + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(level = "debug", ret)]
    async fn create_load_balancer(
        &self,
        req: crate::model::CreateLoadBalancerRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CreateLoadBalancerResponse>> {
        self.inner.create_load_balancer(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn delete_load_balancer(
        &self,
        req: crate::model::DeleteLoadBalancerRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeleteLoadBalancerResponse>> {
        self.inner.delete_load_balancer(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn get_load_balancer_attribute(
        &self,
        req: crate::model::GetLoadBalancerAttributeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::GetLoadBalancerAttributeResponse>> {
        self.inner.get_load_balancer_attribute(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn list_load_balancers(
        &self,
        req: crate::model::ListLoadBalancersRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListLoadBalancersResponse>> {
        self.inner.list_load_balancers(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn update_load_balancer_attribute(
        &self,
        req: crate::model::UpdateLoadBalancerAttributeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UpdateLoadBalancerAttributeResponse>> {
        self.inner.update_load_balancer_attribute(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn update_load_balancer_address_type_config(
        &self,
        req: crate::model::UpdateLoadBalancerAddressTypeConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<crate::model::UpdateLoadBalancerAddressTypeConfigResponse>,
    > {
        self.inner.update_load_balancer_address_type_config(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn update_load_balancer_protection(
        &self,
        req: crate::model::UpdateLoadBalancerProtectionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UpdateLoadBalancerProtectionResponse>> {
        self.inner.update_load_balancer_protection(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn start_shift_load_balancer_zones(
        &self,
        req: crate::model::StartShiftLoadBalancerZonesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::StartShiftLoadBalancerZonesResponse>> {
        self.inner.start_shift_load_balancer_zones(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn cancel_shift_load_balancer_zones(
        &self,
        req: crate::model::CancelShiftLoadBalancerZonesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CancelShiftLoadBalancerZonesResponse>> {
        self.inner.cancel_shift_load_balancer_zones(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn create_listener(
        &self,
        req: crate::model::CreateListenerRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CreateListenerResponse>> {
        self.inner.create_listener(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn delete_listener(
        &self,
        req: crate::model::DeleteListenerRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeleteListenerResponse>> {
        self.inner.delete_listener(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn get_listener_attribute(
        &self,
        req: crate::model::GetListenerAttributeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::GetListenerAttributeResponse>> {
        self.inner.get_listener_attribute(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn list_listeners(
        &self,
        req: crate::model::ListListenersRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListListenersResponse>> {
        self.inner.list_listeners(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn update_listener_attribute(
        &self,
        req: crate::model::UpdateListenerAttributeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UpdateListenerAttributeResponse>> {
        self.inner.update_listener_attribute(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn start_listener(
        &self,
        req: crate::model::StartListenerRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::StartListenerResponse>> {
        self.inner.start_listener(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn stop_listener(
        &self,
        req: crate::model::StopListenerRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::StopListenerResponse>> {
        self.inner.stop_listener(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn create_server_group(
        &self,
        req: crate::model::CreateServerGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CreateServerGroupResponse>> {
        self.inner.create_server_group(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn delete_server_group(
        &self,
        req: crate::model::DeleteServerGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeleteServerGroupResponse>> {
        self.inner.delete_server_group(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn list_server_groups(
        &self,
        req: crate::model::ListServerGroupsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListServerGroupsResponse>> {
        self.inner.list_server_groups(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn add_servers_to_server_group(
        &self,
        req: crate::model::AddServersToServerGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AddServersToServerGroupResponse>> {
        self.inner.add_servers_to_server_group(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn remove_servers_from_server_group(
        &self,
        req: crate::model::RemoveServersFromServerGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::RemoveServersFromServerGroupResponse>> {
        self.inner.remove_servers_from_server_group(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn list_server_group_servers(
        &self,
        req: crate::model::ListServerGroupServersRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListServerGroupServersResponse>> {
        self.inner.list_server_group_servers(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn tag_resources(
        &self,
        req: crate::model::TagResourcesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TagResourcesResponse>> {
        self.inner.tag_resources(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn untag_resources(
        &self,
        req: crate::model::UntagResourcesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UntagResourcesResponse>> {
        self.inner.untag_resources(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn list_tag_resources(
        &self,
        req: crate::model::ListTagResourcesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListTagResourcesResponse>> {
        self.inner.list_tag_resources(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn get_job_status(
        &self,
        req: crate::model::GetJobStatusRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::GetJobStatusResponse>> {
        self.inner.get_job_status(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn describe_regions(
        &self,
        req: crate::model::DescribeRegionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DescribeRegionsResponse>> {
        self.inner.describe_regions(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn describe_zones(
        &self,
        req: crate::model::DescribeZonesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DescribeZonesResponse>> {
        self.inner.describe_zones(req, options).await
    }
}
