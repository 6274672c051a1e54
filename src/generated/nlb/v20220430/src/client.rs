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
#![allow(rustdoc::broken_intra_doc_links)]

/// Implements a client for the Network Load Balancer API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use alibabacloud_nlb_v20220430::client::NetworkLoadBalancer;
/// let client = NetworkLoadBalancer::builder().build().await?;
/// // use `client` to make requests to the Network Load Balancer API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Network Load Balancer (NLB) is a layer-4 load balancer. A load balancer
/// receives traffic on its listeners and forwards it to the servers in a
/// server group. Most mutating operations start an asynchronous job, use
/// [get_job_status][NetworkLoadBalancer::get_job_status] with the returned
/// `JobId` to wait for the job.
///
/// # Configuration
///
/// To configure `NetworkLoadBalancer` use the `with_*` methods in the type
/// returned by [builder()][NetworkLoadBalancer::builder]. The default
/// configuration sends requests to the `cn-hangzhou` region. Common
/// configuration changes include
///
/// * [with_region()]: selects the regional endpoint, for example
///   `https://nlb.cn-shanghai.aliyuncs.com`.
/// * [with_endpoint()]: overrides the endpoint, for example to use a VPC
///   endpoint.
/// * [with_credentials()]: by default this client uses anonymous credentials.
///   Most applications need to provide a credentials provider that signs the
///   requests.
///
/// [with_region()]: super::builder::network_load_balancer::ClientBuilder::with_region
/// [with_endpoint()]: super::builder::network_load_balancer::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::network_load_balancer::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `NetworkLoadBalancer` holds a connection pool internally, it is advised to
/// create one and then reuse it.  You do not need to wrap `NetworkLoadBalancer` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct NetworkLoadBalancer {
    inner: std::sync::Arc<dyn super::stub::dynamic::NetworkLoadBalancer>,
}

impl NetworkLoadBalancer {
    /// Returns a builder for [NetworkLoadBalancer].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use alibabacloud_nlb_v20220430::client::NetworkLoadBalancer;
    /// let client = NetworkLoadBalancer::builder()
    ///     .with_region("cn-shanghai")
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::network_load_balancer::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::network_load_balancer::client::Factory,
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::NetworkLoadBalancer + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<
        std::sync::Arc<dyn super::stub::dynamic::NetworkLoadBalancer>,
    > {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::NetworkLoadBalancer> {
        super::transport::NetworkLoadBalancer::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::NetworkLoadBalancer> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::NetworkLoadBalancer::new)
    }

    /// Creates a network load balancer.
    pub fn create_load_balancer(
        &self,
        request: crate::model::CreateLoadBalancerRequest,
    ) -> super::builder::network_load_balancer::CreateLoadBalancer {
        super::builder::network_load_balancer::CreateLoadBalancer::new(self.inner.clone(), request)
    }

    /// Deletes a network load balancer.
    pub fn delete_load_balancer(
        &self,
        request: crate::model::DeleteLoadBalancerRequest,
    ) -> super::builder::network_load_balancer::DeleteLoadBalancer {
        super::builder::network_load_balancer::DeleteLoadBalancer::new(self.inner.clone(), request)
    }

    /// Returns the attributes of a network load balancer.
    pub fn get_load_balancer_attribute(
        &self,
        request: crate::model::GetLoadBalancerAttributeRequest,
    ) -> super::builder::network_load_balancer::GetLoadBalancerAttribute {
        super::builder::network_load_balancer::GetLoadBalancerAttribute::new(
            self.inner.clone(),
            request,
        )
    }

    /// Lists the network load balancers in a region.
    pub fn list_load_balancers(
        &self,
        request: crate::model::ListLoadBalancersRequest,
    ) -> super::builder::network_load_balancer::ListLoadBalancers {
        super::builder::network_load_balancer::ListLoadBalancers::new(self.inner.clone(), request)
    }

    /// Updates the name and connection settings of a network load balancer.
    pub fn update_load_balancer_attribute(
        &self,
        request: crate::model::UpdateLoadBalancerAttributeRequest,
    ) -> super::builder::network_load_balancer::UpdateLoadBalancerAttribute {
        super::builder::network_load_balancer::UpdateLoadBalancerAttribute::new(
            self.inner.clone(),
            request,
        )
    }

    /// Changes the network type of a network load balancer.
    pub fn update_load_balancer_address_type_config(
        &self,
        request: crate::model::UpdateLoadBalancerAddressTypeConfigRequest,
    ) -> super::builder::network_load_balancer::UpdateLoadBalancerAddressTypeConfig {
        super::builder::network_load_balancer::UpdateLoadBalancerAddressTypeConfig::new(
            self.inner.clone(),
            request,
        )
    }

    /// Changes the deletion and modification protection of a network load balancer.
    pub fn update_load_balancer_protection(
        &self,
        request: crate::model::UpdateLoadBalancerProtectionRequest,
    ) -> super::builder::network_load_balancer::UpdateLoadBalancerProtection {
        super::builder::network_load_balancer::UpdateLoadBalancerProtection::new(
            self.inner.clone(),
            request,
        )
    }

    /// Removes zones of a network load balancer from DNS resolution.
    pub fn start_shift_load_balancer_zones(
        &self,
        request: crate::model::StartShiftLoadBalancerZonesRequest,
    ) -> super::builder::network_load_balancer::StartShiftLoadBalancerZones {
        super::builder::network_load_balancer::StartShiftLoadBalancerZones::new(
            self.inner.clone(),
            request,
        )
    }

    /// Restores zones of a network load balancer to DNS resolution.
    pub fn cancel_shift_load_balancer_zones(
        &self,
        request: crate::model::CancelShiftLoadBalancerZonesRequest,
    ) -> super::builder::network_load_balancer::CancelShiftLoadBalancerZones {
        super::builder::network_load_balancer::CancelShiftLoadBalancerZones::new(
            self.inner.clone(),
            request,
        )
    }

    /// Creates a listener for a network load balancer.
    pub fn create_listener(
        &self,
        request: crate::model::CreateListenerRequest,
    ) -> super::builder::network_load_balancer::CreateListener {
        super::builder::network_load_balancer::CreateListener::new(self.inner.clone(), request)
    }

    /// Deletes a listener.
    pub fn delete_listener(
        &self,
        request: crate::model::DeleteListenerRequest,
    ) -> super::builder::network_load_balancer::DeleteListener {
        super::builder::network_load_balancer::DeleteListener::new(self.inner.clone(), request)
    }

    /// Returns the attributes of a listener.
    pub fn get_listener_attribute(
        &self,
        request: crate::model::GetListenerAttributeRequest,
    ) -> super::builder::network_load_balancer::GetListenerAttribute {
        super::builder::network_load_balancer::GetListenerAttribute::new(
            self.inner.clone(),
            request,
        )
    }

    /// Lists the listeners in a region.
    pub fn list_listeners(
        &self,
        request: crate::model::ListListenersRequest,
    ) -> super::builder::network_load_balancer::ListListeners {
        super::builder::network_load_balancer::ListListeners::new(self.inner.clone(), request)
    }

    /// Updates the attributes of a listener.
    pub fn update_listener_attribute(
        &self,
        request: crate::model::UpdateListenerAttributeRequest,
    ) -> super::builder::network_load_balancer::UpdateListenerAttribute {
        super::builder::network_load_balancer::UpdateListenerAttribute::new(
            self.inner.clone(),
            request,
        )
    }

    /// Starts a listener.
    pub fn start_listener(
        &self,
        request: crate::model::StartListenerRequest,
    ) -> super::builder::network_load_balancer::StartListener {
        super::builder::network_load_balancer::StartListener::new(self.inner.clone(), request)
    }

    /// Stops a listener.
    pub fn stop_listener(
        &self,
        request: crate::model::StopListenerRequest,
    ) -> super::builder::network_load_balancer::StopListener {
        super::builder::network_load_balancer::StopListener::new(self.inner.clone(), request)
    }

    /// Creates a server group.
    pub fn create_server_group(
        &self,
        request: crate::model::CreateServerGroupRequest,
    ) -> super::builder::network_load_balancer::CreateServerGroup {
        super::builder::network_load_balancer::CreateServerGroup::new(self.inner.clone(), request)
    }

    /// Deletes a server group.
    pub fn delete_server_group(
        &self,
        request: crate::model::DeleteServerGroupRequest,
    ) -> super::builder::network_load_balancer::DeleteServerGroup {
        super::builder::network_load_balancer::DeleteServerGroup::new(self.inner.clone(), request)
    }

    /// Lists the server groups in a region.
    pub fn list_server_groups(
        &self,
        request: crate::model::ListServerGroupsRequest,
    ) -> super::builder::network_load_balancer::ListServerGroups {
        super::builder::network_load_balancer::ListServerGroups::new(self.inner.clone(), request)
    }

    /// Adds backend servers to a server group.
    pub fn add_servers_to_server_group(
        &self,
        request: crate::model::AddServersToServerGroupRequest,
    ) -> super::builder::network_load_balancer::AddServersToServerGroup {
        super::builder::network_load_balancer::AddServersToServerGroup::new(
            self.inner.clone(),
            request,
        )
    }

    /// Removes backend servers from a server group.
    pub fn remove_servers_from_server_group(
        &self,
        request: crate::model::RemoveServersFromServerGroupRequest,
    ) -> super::builder::network_load_balancer::RemoveServersFromServerGroup {
        super::builder::network_load_balancer::RemoveServersFromServerGroup::new(
            self.inner.clone(),
            request,
        )
    }

    /// Lists the backend servers of a server group.
    pub fn list_server_group_servers(
        &self,
        request: crate::model::ListServerGroupServersRequest,
    ) -> super::builder::network_load_balancer::ListServerGroupServers {
        super::builder::network_load_balancer::ListServerGroupServers::new(
            self.inner.clone(),
            request,
        )
    }

    /// Attaches tags to resources.
    pub fn tag_resources(
        &self,
        request: crate::model::TagResourcesRequest,
    ) -> super::builder::network_load_balancer::TagResources {
        super::builder::network_load_balancer::TagResources::new(self.inner.clone(), request)
    }

    /// Detaches tags from resources.
    pub fn untag_resources(
        &self,
        request: crate::model::UntagResourcesRequest,
    ) -> super::builder::network_load_balancer::UntagResources {
        super::builder::network_load_balancer::UntagResources::new(self.inner.clone(), request)
    }

    /// Lists the tags attached to resources.
    pub fn list_tag_resources(
        &self,
        request: crate::model::ListTagResourcesRequest,
    ) -> super::builder::network_load_balancer::ListTagResources {
        super::builder::network_load_balancer::ListTagResources::new(self.inner.clone(), request)
    }

    /// Returns the status of an asynchronous job.
    pub fn get_job_status(
        &self,
        request: crate::model::GetJobStatusRequest,
    ) -> super::builder::network_load_balancer::GetJobStatus {
        super::builder::network_load_balancer::GetJobStatus::new(self.inner.clone(), request)
    }

    /// Lists the regions where the service is available.
    pub fn describe_regions(
        &self,
        request: crate::model::DescribeRegionsRequest,
    ) -> super::builder::network_load_balancer::DescribeRegions {
        super::builder::network_load_balancer::DescribeRegions::new(self.inner.clone(), request)
    }

    /// Lists the zones of a region where the service is available.
    pub fn describe_zones(
        &self,
        request: crate::model::DescribeZonesRequest,
    ) -> super::builder::network_load_balancer::DescribeZones {
        super::builder::network_load_balancer::DescribeZones::new(self.inner.clone(), request)
    }
}
