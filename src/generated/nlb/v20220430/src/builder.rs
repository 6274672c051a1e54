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

pub mod network_load_balancer {
    use crate::Result;

    /// A builder for [NetworkLoadBalancer][crate::client::NetworkLoadBalancer].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use alibabacloud_nlb_v20220430::*;
    /// # use builder::network_load_balancer::ClientBuilder;
    /// # use client::NetworkLoadBalancer;
    /// let builder : ClientBuilder = NetworkLoadBalancer::builder();
    /// let client = builder
    ///     .with_region("cn-shanghai")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::NetworkLoadBalancer;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = NetworkLoadBalancer;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::NetworkLoadBalancer] request builders.
    ///
    /// The type parameter is the request message. Each operation has a type
    /// alias, for example [CreateLoadBalancer].
    #[derive(Clone, Debug)]
    pub struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::NetworkLoadBalancer>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::NetworkLoadBalancer>,
            request: R,
        ) -> Self {
            Self {
                stub,
                request,
                options: gax::options::RequestOptions::default(),
            }
        }

        /// Replaces the request sent by this builder.
        pub fn with_request<V: Into<R>>(mut self, v: V) -> Self {
            self.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.options = v.into();
            self
        }

        /// Returns the request sent by this builder.
        pub fn request(&self) -> &R {
            &self.request
        }
    }

    impl<R> gax::options::internal::RequestBuilder for RequestBuilder<R>
    where
        R: std::default::Default,
    {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [NetworkLoadBalancer::create_load_balancer][crate::client::NetworkLoadBalancer::create_load_balancer] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use alibabacloud_nlb_v20220430::builder::network_load_balancer::CreateLoadBalancer;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateLoadBalancer {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type CreateLoadBalancer = RequestBuilder<crate::model::CreateLoadBalancerRequest>;

    impl CreateLoadBalancer {
        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::CreateLoadBalancerResponse>> {
            (*self.stub)
                .create_load_balancer(self.request, self.options)
                .await
        }
    }

    /// The request builder for [NetworkLoadBalancer::delete_load_balancer][crate::client::NetworkLoadBalancer::delete_load_balancer] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use alibabacloud_nlb_v20220430::builder::network_load_balancer::DeleteLoadBalancer;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteLoadBalancer {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type DeleteLoadBalancer = RequestBuilder<crate::model::DeleteLoadBalancerRequest>;

    impl DeleteLoadBalancer {
        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::DeleteLoadBalancerResponse>> {
            (*self.stub)
                .delete_load_balancer(self.request, self.options)
                .await
        }
    }

    /// The request builder for [NetworkLoadBalancer::get_load_balancer_attribute][crate::client::NetworkLoadBalancer::get_load_balancer_attribute] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use alibabacloud_nlb_v20220430::builder::network_load_balancer::GetLoadBalancerAttribute;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetLoadBalancerAttribute {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type GetLoadBalancerAttribute =
        RequestBuilder<crate::model::GetLoadBalancerAttributeRequest>;

    impl GetLoadBalancerAttribute {
        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::GetLoadBalancerAttributeResponse>> {
            (*self.stub)
                .get_load_balancer_attribute(self.request, self.options)
                .await
        }
    }

    /// The request builder for [NetworkLoadBalancer::list_load_balancers][crate::client::NetworkLoadBalancer::list_load_balancers] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use alibabacloud_nlb_v20220430::builder::network_load_balancer::ListLoadBalancers;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListLoadBalancers {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type ListLoadBalancers = RequestBuilder<crate::model::ListLoadBalancersRequest>;

    impl ListLoadBalancers {
        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::ListLoadBalancersResponse>> {
            (*self.stub)
                .list_load_balancers(self.request, self.options)
                .await
        }
    }

    /// The request builder for [NetworkLoadBalancer::update_load_balancer_attribute][crate::client::NetworkLoadBalancer::update_load_balancer_attribute] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use alibabacloud_nlb_v20220430::builder::network_load_balancer::UpdateLoadBalancerAttribute;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateLoadBalancerAttribute {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type UpdateLoadBalancerAttribute =
        RequestBuilder<crate::model::UpdateLoadBalancerAttributeRequest>;

    impl UpdateLoadBalancerAttribute {
        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::UpdateLoadBalancerAttributeResponse>> {
            (*self.stub)
                .update_load_balancer_attribute(self.request, self.options)
                .await
        }
    }

    /// The request builder for [NetworkLoadBalancer::update_load_balancer_address_type_config][crate::client::NetworkLoadBalancer::update_load_balancer_address_type_config] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use alibabacloud_nlb_v20220430::builder::network_load_balancer::UpdateLoadBalancerAddressTypeConfig;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateLoadBalancerAddressTypeConfig {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type UpdateLoadBalancerAddressTypeConfig =
        RequestBuilder<crate::model::UpdateLoadBalancerAddressTypeConfigRequest>;

    impl UpdateLoadBalancerAddressTypeConfig {
        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<
            gax::response::Response<crate::model::UpdateLoadBalancerAddressTypeConfigResponse>,
        > {
            (*self.stub)
                .update_load_balancer_address_type_config(self.request, self.options)
                .await
        }
    }

    /// The request builder for [NetworkLoadBalancer::update_load_balancer_protection][crate::client::NetworkLoadBalancer::update_load_balancer_protection] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use alibabacloud_nlb_v20220430::builder::network_load_balancer::UpdateLoadBalancerProtection;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateLoadBalancerProtection {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type UpdateLoadBalancerProtection =
        RequestBuilder<crate::model::UpdateLoadBalancerProtectionRequest>;

    impl UpdateLoadBalancerProtection {
        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::UpdateLoadBalancerProtectionResponse>> {
            (*self.stub)
                .update_load_balancer_protection(self.request, self.options)
                .await
        }
    }

    /// The request builder for [NetworkLoadBalancer::start_shift_load_balancer_zones][crate::client::NetworkLoadBalancer::start_shift_load_balancer_zones] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use alibabacloud_nlb_v20220430::builder::network_load_balancer::StartShiftLoadBalancerZones;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> StartShiftLoadBalancerZones {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type StartShiftLoadBalancerZones =
        RequestBuilder<crate::model::StartShiftLoadBalancerZonesRequest>;

    impl StartShiftLoadBalancerZones {
        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::StartShiftLoadBalancerZonesResponse>> {
            (*self.stub)
                .start_shift_load_balancer_zones(self.request, self.options)
                .await
        }
    }

    /// The request builder for [NetworkLoadBalancer::cancel_shift_load_balancer_zones][crate::client::NetworkLoadBalancer::cancel_shift_load_balancer_zones] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use alibabacloud_nlb_v20220430::builder::network_load_balancer::CancelShiftLoadBalancerZones;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CancelShiftLoadBalancerZones {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type CancelShiftLoadBalancerZones =
        RequestBuilder<crate::model::CancelShiftLoadBalancerZonesRequest>;

    impl CancelShiftLoadBalancerZones {
        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::CancelShiftLoadBalancerZonesResponse>> {
            (*self.stub)
                .cancel_shift_load_balancer_zones(self.request, self.options)
                .await
        }
    }

    /// The request builder for [NetworkLoadBalancer::create_listener][crate::client::NetworkLoadBalancer::create_listener] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use alibabacloud_nlb_v20220430::builder::network_load_balancer::CreateListener;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateListener {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type CreateListener = RequestBuilder<crate::model::CreateListenerRequest>;

    impl CreateListener {
        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::CreateListenerResponse>> {
            (*self.stub)
                .create_listener(self.request, self.options)
                .await
        }
    }

    /// The request builder for [NetworkLoadBalancer::delete_listener][crate::client::NetworkLoadBalancer::delete_listener] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use alibabacloud_nlb_v20220430::builder::network_load_balancer::DeleteListener;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteListener {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type DeleteListener = RequestBuilder<crate::model::DeleteListenerRequest>;

    impl DeleteListener {
        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::DeleteListenerResponse>> {
            (*self.stub)
                .delete_listener(self.request, self.options)
                .await
        }
    }

    /// The request builder for [NetworkLoadBalancer::get_listener_attribute][crate::client::NetworkLoadBalancer::get_listener_attribute] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use alibabacloud_nlb_v20220430::builder::network_load_balancer::GetListenerAttribute;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetListenerAttribute {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type GetListenerAttribute = RequestBuilder<crate::model::GetListenerAttributeRequest>;

    impl GetListenerAttribute {
        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::GetListenerAttributeResponse>> {
            (*self.stub)
                .get_listener_attribute(self.request, self.options)
                .await
        }
    }

    /// The request builder for [NetworkLoadBalancer::list_listeners][crate::client::NetworkLoadBalancer::list_listeners] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use alibabacloud_nlb_v20220430::builder::network_load_balancer::ListListeners;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListListeners {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type ListListeners = RequestBuilder<crate::model::ListListenersRequest>;

    impl ListListeners {
        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::ListListenersResponse>> {
            (*self.stub)
                .list_listeners(self.request, self.options)
                .await
        }
    }

    /// The request builder for [NetworkLoadBalancer::update_listener_attribute][crate::client::NetworkLoadBalancer::update_listener_attribute] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use alibabacloud_nlb_v20220430::builder::network_load_balancer::UpdateListenerAttribute;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateListenerAttribute {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type UpdateListenerAttribute = RequestBuilder<crate::model::UpdateListenerAttributeRequest>;

    impl UpdateListenerAttribute {
        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::UpdateListenerAttributeResponse>> {
            (*self.stub)
                .update_listener_attribute(self.request, self.options)
                .await
        }
    }

    /// The request builder for [NetworkLoadBalancer::start_listener][crate::client::NetworkLoadBalancer::start_listener] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use alibabacloud_nlb_v20220430::builder::network_load_balancer::StartListener;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> StartListener {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type StartListener = RequestBuilder<crate::model::StartListenerRequest>;

    impl StartListener {
        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::StartListenerResponse>> {
            (*self.stub)
                .start_listener(self.request, self.options)
                .await
        }
    }

    /// The request builder for [NetworkLoadBalancer::stop_listener][crate::client::NetworkLoadBalancer::stop_listener] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use alibabacloud_nlb_v20220430::builder::network_load_balancer::StopListener;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> StopListener {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type StopListener = RequestBuilder<crate::model::StopListenerRequest>;

    impl StopListener {
        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::StopListenerResponse>> {
            (*self.stub)
                .stop_listener(self.request, self.options)
                .await
        }
    }

    /// The request builder for [NetworkLoadBalancer::create_server_group][crate::client::NetworkLoadBalancer::create_server_group] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use alibabacloud_nlb_v20220430::builder::network_load_balancer::CreateServerGroup;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateServerGroup {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type CreateServerGroup = RequestBuilder<crate::model::CreateServerGroupRequest>;

    impl CreateServerGroup {
        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::CreateServerGroupResponse>> {
            (*self.stub)
                .create_server_group(self.request, self.options)
                .await
        }
    }

    /// The request builder for [NetworkLoadBalancer::delete_server_group][crate::client::NetworkLoadBalancer::delete_server_group] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use alibabacloud_nlb_v20220430::builder::network_load_balancer::DeleteServerGroup;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteServerGroup {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type DeleteServerGroup = RequestBuilder<crate::model::DeleteServerGroupRequest>;

    impl DeleteServerGroup {
        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::DeleteServerGroupResponse>> {
            (*self.stub)
                .delete_server_group(self.request, self.options)
                .await
        }
    }

    /// The request builder for [NetworkLoadBalancer::list_server_groups][crate::client::NetworkLoadBalancer::list_server_groups] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use alibabacloud_nlb_v20220430::builder::network_load_balancer::ListServerGroups;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListServerGroups {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type ListServerGroups = RequestBuilder<crate::model::ListServerGroupsRequest>;

    impl ListServerGroups {
        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::ListServerGroupsResponse>> {
            (*self.stub)
                .list_server_groups(self.request, self.options)
                .await
        }
    }

    /// The request builder for [NetworkLoadBalancer::add_servers_to_server_group][crate::client::NetworkLoadBalancer::add_servers_to_server_group] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use alibabacloud_nlb_v20220430::builder::network_load_balancer::AddServersToServerGroup;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> AddServersToServerGroup {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type AddServersToServerGroup = RequestBuilder<crate::model::AddServersToServerGroupRequest>;

    impl AddServersToServerGroup {
        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::AddServersToServerGroupResponse>> {
            (*self.stub)
                .add_servers_to_server_group(self.request, self.options)
                .await
        }
    }

    /// The request builder for [NetworkLoadBalancer::remove_servers_from_server_group][crate::client::NetworkLoadBalancer::remove_servers_from_server_group] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use alibabacloud_nlb_v20220430::builder::network_load_balancer::RemoveServersFromServerGroup;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> RemoveServersFromServerGroup {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type RemoveServersFromServerGroup =
        RequestBuilder<crate::model::RemoveServersFromServerGroupRequest>;

    impl RemoveServersFromServerGroup {
        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::RemoveServersFromServerGroupResponse>> {
            (*self.stub)
                .remove_servers_from_server_group(self.request, self.options)
                .await
        }
    }

    /// The request builder for [NetworkLoadBalancer::list_server_group_servers][crate::client::NetworkLoadBalancer::list_server_group_servers] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use alibabacloud_nlb_v20220430::builder::network_load_balancer::ListServerGroupServers;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListServerGroupServers {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type ListServerGroupServers = RequestBuilder<crate::model::ListServerGroupServersRequest>;

    impl ListServerGroupServers {
        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::ListServerGroupServersResponse>> {
            (*self.stub)
                .list_server_group_servers(self.request, self.options)
                .await
        }
    }

    /// The request builder for [NetworkLoadBalancer::tag_resources][crate::client::NetworkLoadBalancer::tag_resources] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use alibabacloud_nlb_v20220430::builder::network_load_balancer::TagResources;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> TagResources {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type TagResources = RequestBuilder<crate::model::TagResourcesRequest>;

    impl TagResources {
        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::TagResourcesResponse>> {
            (*self.stub)
                .tag_resources(self.request, self.options)
                .await
        }
    }

    /// The request builder for [NetworkLoadBalancer::untag_resources][crate::client::NetworkLoadBalancer::untag_resources] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use alibabacloud_nlb_v20220430::builder::network_load_balancer::UntagResources;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UntagResources {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type UntagResources = RequestBuilder<crate::model::UntagResourcesRequest>;

    impl UntagResources {
        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::UntagResourcesResponse>> {
            (*self.stub)
                .untag_resources(self.request, self.options)
                .await
        }
    }

    /// The request builder for [NetworkLoadBalancer::list_tag_resources][crate::client::NetworkLoadBalancer::list_tag_resources] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use alibabacloud_nlb_v20220430::builder::network_load_balancer::ListTagResources;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListTagResources {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type ListTagResources = RequestBuilder<crate::model::ListTagResourcesRequest>;

    impl ListTagResources {
        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::ListTagResourcesResponse>> {
            (*self.stub)
                .list_tag_resources(self.request, self.options)
                .await
        }
    }

    /// The request builder for [NetworkLoadBalancer::get_job_status][crate::client::NetworkLoadBalancer::get_job_status] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use alibabacloud_nlb_v20220430::builder::network_load_balancer::GetJobStatus;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetJobStatus {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type GetJobStatus = RequestBuilder<crate::model::GetJobStatusRequest>;

    impl GetJobStatus {
        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::GetJobStatusResponse>> {
            (*self.stub)
                .get_job_status(self.request, self.options)
                .await
        }
    }

    /// The request builder for [NetworkLoadBalancer::describe_regions][crate::client::NetworkLoadBalancer::describe_regions] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use alibabacloud_nlb_v20220430::builder::network_load_balancer::DescribeRegions;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DescribeRegions {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type DescribeRegions = RequestBuilder<crate::model::DescribeRegionsRequest>;

    impl DescribeRegions {
        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::DescribeRegionsResponse>> {
            (*self.stub)
                .describe_regions(self.request, self.options)
                .await
        }
    }

    /// The request builder for [NetworkLoadBalancer::describe_zones][crate::client::NetworkLoadBalancer::describe_zones] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use alibabacloud_nlb_v20220430::builder::network_load_balancer::DescribeZones;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DescribeZones {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type DescribeZones = RequestBuilder<crate::model::DescribeZonesRequest>;

    impl DescribeZones {
        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::DescribeZonesResponse>> {
            (*self.stub)
                .describe_zones(self.request, self.options)
                .await
        }
    }
}
