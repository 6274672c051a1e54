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

/// Implements [NetworkLoadBalancer](super::stub::NetworkLoadBalancer) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct NetworkLoadBalancer {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for NetworkLoadBalancer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("NetworkLoadBalancer")
            .field("inner", &self.inner)
            .finish()
    }
}

impl NetworkLoadBalancer {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, &crate::info::SERVICE_INFO).await?;
        Ok(Self { inner })
    }
}

impl super::stub::NetworkLoadBalancer for NetworkLoadBalancer {
    async fn create_load_balancer(
        &self,
        req: crate::model::CreateLoadBalancerRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CreateLoadBalancerResponse>> {
        self.inner
            .execute(&crate::operation::CREATE_LOAD_BALANCER, &req, options)
            .await
    }

    async fn delete_load_balancer(
        &self,
        req: crate::model::DeleteLoadBalancerRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeleteLoadBalancerResponse>> {
        self.inner
            .execute(&crate::operation::DELETE_LOAD_BALANCER, &req, options)
            .await
    }

    async fn get_load_balancer_attribute(
        &self,
        req: crate::model::GetLoadBalancerAttributeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::GetLoadBalancerAttributeResponse>> {
        self.inner
            .execute(&crate::operation::GET_LOAD_BALANCER_ATTRIBUTE, &req, options)
            .await
    }

    async fn list_load_balancers(
        &self,
        req: crate::model::ListLoadBalancersRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListLoadBalancersResponse>> {
        self.inner
            .execute(&crate::operation::LIST_LOAD_BALANCERS, &req, options)
            .await
    }

    async fn update_load_balancer_attribute(
        &self,
        req: crate::model::UpdateLoadBalancerAttributeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UpdateLoadBalancerAttributeResponse>> {
        self.inner
            .execute(&crate::operation::UPDATE_LOAD_BALANCER_ATTRIBUTE, &req, options)
            .await
    }

    async fn update_load_balancer_address_type_config(
        &self,
        req: crate::model::UpdateLoadBalancerAddressTypeConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<crate::model::UpdateLoadBalancerAddressTypeConfigResponse>,
    > {
        self.inner
            .execute(&crate::operation::UPDATE_LOAD_BALANCER_ADDRESS_TYPE_CONFIG, &req, options)
            .await
    }

    async fn update_load_balancer_protection(
        &self,
        req: crate::model::UpdateLoadBalancerProtectionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UpdateLoadBalancerProtectionResponse>> {
        self.inner
            .execute(&crate::operation::UPDATE_LOAD_BALANCER_PROTECTION, &req, options)
            .await
    }

    async fn start_shift_load_balancer_zones(
        &self,
        req: crate::model::StartShiftLoadBalancerZonesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::StartShiftLoadBalancerZonesResponse>> {
        self.inner
            .execute(&crate::operation::START_SHIFT_LOAD_BALANCER_ZONES, &req, options)
            .await
    }

    async fn cancel_shift_load_balancer_zones(
        &self,
        req: crate::model::CancelShiftLoadBalancerZonesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CancelShiftLoadBalancerZonesResponse>> {
        self.inner
            .execute(&crate::operation::CANCEL_SHIFT_LOAD_BALANCER_ZONES, &req, options)
            .await
    }

    async fn create_listener(
        &self,
        req: crate::model::CreateListenerRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CreateListenerResponse>> {
        self.inner
            .execute(&crate::operation::CREATE_LISTENER, &req, options)
            .await
    }

    async fn delete_listener(
        &self,
        req: crate::model::DeleteListenerRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeleteListenerResponse>> {
        self.inner
            .execute(&crate::operation::DELETE_LISTENER, &req, options)
            .await
    }

    async fn get_listener_attribute(
        &self,
        req: crate::model::GetListenerAttributeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::GetListenerAttributeResponse>> {
        self.inner
            .execute(&crate::operation::GET_LISTENER_ATTRIBUTE, &req, options)
            .await
    }

    async fn list_listeners(
        &self,
        req: crate::model::ListListenersRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListListenersResponse>> {
        self.inner
            .execute(&crate::operation::LIST_LISTENERS, &req, options)
            .await
    }

    async fn update_listener_attribute(
        &self,
        req: crate::model::UpdateListenerAttributeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UpdateListenerAttributeResponse>> {
        self.inner
            .execute(&crate::operation::UPDATE_LISTENER_ATTRIBUTE, &req, options)
            .await
    }

    async fn start_listener(
        &self,
        req: crate::model::StartListenerRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::StartListenerResponse>> {
        self.inner
            .execute(&crate::operation::START_LISTENER, &req, options)
            .await
    }

    async fn stop_listener(
        &self,
        req: crate::model::StopListenerRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::StopListenerResponse>> {
        self.inner
            .execute(&crate::operation::STOP_LISTENER, &req, options)
            .await
    }

    async fn create_server_group(
        &self,
        req: crate::model::CreateServerGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CreateServerGroupResponse>> {
        self.inner
            .execute(&crate::operation::CREATE_SERVER_GROUP, &req, options)
            .await
    }

    async fn delete_server_group(
        &self,
        req: crate::model::DeleteServerGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeleteServerGroupResponse>> {
        self.inner
            .execute(&crate::operation::DELETE_SERVER_GROUP, &req, options)
            .await
    }

    async fn list_server_groups(
        &self,
        req: crate::model::ListServerGroupsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListServerGroupsResponse>> {
        self.inner
            .execute(&crate::operation::LIST_SERVER_GROUPS, &req, options)
            .await
    }

    async fn add_servers_to_server_group(
        &self,
        req: crate::model::AddServersToServerGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AddServersToServerGroupResponse>> {
        self.inner
            .execute(&crate::operation::ADD_SERVERS_TO_SERVER_GROUP, &req, options)
            .await
    }

    async fn remove_servers_from_server_group(
        &self,
        req: crate::model::RemoveServersFromServerGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::RemoveServersFromServerGroupResponse>> {
        self.inner
            .execute(&crate::operation::REMOVE_SERVERS_FROM_SERVER_GROUP, &req, options)
            .await
    }

    async fn list_server_group_servers(
        &self,
        req: crate::model::ListServerGroupServersRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListServerGroupServersResponse>> {
        self.inner
            .execute(&crate::operation::LIST_SERVER_GROUP_SERVERS, &req, options)
            .await
    }

    async fn tag_resources(
        &self,
        req: crate::model::TagResourcesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TagResourcesResponse>> {
        self.inner
            .execute(&crate::operation::TAG_RESOURCES, &req, options)
            .await
    }

    async fn untag_resources(
        &self,
        req: crate::model::UntagResourcesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UntagResourcesResponse>> {
        self.inner
            .execute(&crate::operation::UNTAG_RESOURCES, &req, options)
            .await
    }

    async fn list_tag_resources(
        &self,
        req: crate::model::ListTagResourcesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListTagResourcesResponse>> {
        self.inner
            .execute(&crate::operation::LIST_TAG_RESOURCES, &req, options)
            .await
    }

    async fn get_job_status(
        &self,
        req: crate::model::GetJobStatusRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::GetJobStatusResponse>> {
        self.inner
            .execute(&crate::operation::GET_JOB_STATUS, &req, options)
            .await
    }

    async fn describe_regions(
        &self,
        req: crate::model::DescribeRegionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DescribeRegionsResponse>> {
        self.inner
            .execute(&crate::operation::DESCRIBE_REGIONS, &req, options)
            .await
    }

    async fn describe_zones(
        &self,
        req: crate::model::DescribeZonesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DescribeZonesResponse>> {
        self.inner
            .execute(&crate::operation::DESCRIBE_ZONES, &req, options)
            .await
    }
}
