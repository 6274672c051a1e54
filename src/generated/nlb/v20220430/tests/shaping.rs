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

#[cfg(test)]
mod tests {
    use alibabacloud_nlb_v20220430::model::*;
    use alibabacloud_nlb_v20220430::operation;
    use gaxi::http::materialize;
    use gaxi::request::WireRequest;
    use http::HeaderMap;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::BTreeMap;
    type Result = anyhow::Result<()>;

    fn tag(key: &str, value: &str) -> Tag {
        Tag::new().set_key(key).set_value(value)
    }

    #[test]
    fn unset_fields_are_not_sent() -> Result {
        let request = DeleteLoadBalancerRequest::new().set_load_balancer_id("nlb-123");
        let wire = WireRequest::new(&operation::DELETE_LOAD_BALANCER, &request)?;
        assert_eq!(
            wire.parameters(),
            BTreeMap::from([("LoadBalancerId", "nlb-123")])
        );

        let wire = WireRequest::new(
            &operation::DELETE_LOAD_BALANCER,
            &DeleteLoadBalancerRequest::new(),
        )?;
        assert!(wire.query().is_empty(), "{wire:?}");
        assert!(wire.body().is_empty(), "{wire:?}");
        Ok(())
    }

    #[test]
    fn zero_values_are_sent() -> Result {
        let request = UpdateLoadBalancerAttributeRequest::new()
            .set_load_balancer_id("nlb-123")
            .set_load_balancer_name("")
            .set_cps(0)
            .set_cross_zone_enabled(false)
            .set_dry_run(false);
        let wire = WireRequest::new(&operation::UPDATE_LOAD_BALANCER_ATTRIBUTE, &request)?;
        assert_eq!(
            wire.parameters(),
            BTreeMap::from([
                ("Cps", "0"),
                ("CrossZoneEnabled", "false"),
                ("DryRun", "false"),
                ("LoadBalancerId", "nlb-123"),
                ("LoadBalancerName", ""),
            ])
        );
        Ok(())
    }

    #[test]
    fn create_load_balancer_wire_names() -> Result {
        let request = CreateLoadBalancerRequest::new()
            .set_load_balancer_type("Network")
            .set_load_balancer_name("my-nlb")
            .set_address_type(address_type::INTERNET)
            .set_address_ip_version(address_ip_version::IPV4)
            .set_vpc_id("vpc-1")
            .set_zone_mappings([
                ZoneMapping::new()
                    .set_vswitch_id("vsw-a")
                    .set_zone_id("cn-hangzhou-a")
                    .set_private_ipv4_address("10.0.0.1")
                    .set_allocation_id("eip-a")
                    .set_eip_type("Common"),
                ZoneMapping::new()
                    .set_vswitch_id("vsw-b")
                    .set_zone_id("cn-hangzhou-b"),
            ])
            .set_resource_group_id("rg-1")
            .set_bandwidth_package_id("cbwp-1")
            .set_load_balancer_billing_config(
                LoadBalancerBillingConfig::new().set_pay_type(pay_type::POST_PAY),
            )
            .set_deletion_protection_config(
                DeletionProtectionConfig::new()
                    .set_enabled(true)
                    .set_reason("prod"),
            )
            .set_modification_protection_config(
                ModificationProtectionConfig::new()
                    .set_status(modification_protection_status::CONSOLE_PROTECTION)
                    .set_reason("managed"),
            )
            .set_tag([tag("env", "prod")])
            .set_client_token("tok-1")
            .set_dry_run(false)
            .set_region_id("cn-hangzhou");
        let wire = WireRequest::new(&operation::CREATE_LOAD_BALANCER, &request)?;
        assert!(wire.query().is_empty(), "{wire:?}");
        let want = BTreeMap::from([
            ("AddressIpVersion", "ipv4"),
            ("AddressType", "Internet"),
            ("BandwidthPackageId", "cbwp-1"),
            ("ClientToken", "tok-1"),
            ("DeletionProtectionConfig.Enabled", "true"),
            ("DeletionProtectionConfig.Reason", "prod"),
            ("DryRun", "false"),
            ("LoadBalancerBillingConfig.PayType", "PostPay"),
            ("LoadBalancerName", "my-nlb"),
            ("LoadBalancerType", "Network"),
            ("ModificationProtectionConfig.Reason", "managed"),
            ("ModificationProtectionConfig.Status", "ConsoleProtection"),
            ("RegionId", "cn-hangzhou"),
            ("ResourceGroupId", "rg-1"),
            ("Tag.1.Key", "env"),
            ("Tag.1.Value", "prod"),
            ("VpcId", "vpc-1"),
            ("ZoneMappings.1.AllocationId", "eip-a"),
            ("ZoneMappings.1.EipType", "Common"),
            ("ZoneMappings.1.PrivateIPv4Address", "10.0.0.1"),
            ("ZoneMappings.1.VSwitchId", "vsw-a"),
            ("ZoneMappings.1.ZoneId", "cn-hangzhou-a"),
            ("ZoneMappings.2.VSwitchId", "vsw-b"),
            ("ZoneMappings.2.ZoneId", "cn-hangzhou-b"),
        ]);
        assert_eq!(wire.parameters(), want);
        Ok(())
    }

    #[test]
    fn create_listener_wire_names() -> Result {
        let request = CreateListenerRequest::new()
            .set_listener_protocol(listener_protocol::TCPSSL)
            .set_listener_port(443)
            .set_load_balancer_id("nlb-1")
            .set_server_group_id("sgp-1")
            .set_listener_description("tls")
            .set_idle_timeout(900)
            .set_security_policy_id("tls_cipher_policy_1_0")
            .set_certificate_ids(["cert-1"])
            .set_ca_certificate_ids(["ca-1", "ca-2"])
            .set_ca_enabled(true)
            .set_start_port(0)
            .set_end_port(0)
            .set_proxy_protocol_enabled(false)
            .set_sec_sensor_enabled(false)
            .set_alpn_enabled(true)
            .set_alpn_policy("HTTP2Preferred")
            .set_cps(100)
            .set_mss(1344)
            .set_tag([tag("env", "prod"), tag("team", "")])
            .set_client_token("tok-1")
            .set_dry_run(true)
            .set_region_id("cn-hangzhou");
        let wire = WireRequest::new(&operation::CREATE_LISTENER, &request)?;
        assert!(wire.query().is_empty(), "{wire:?}");
        let want = BTreeMap::from([
            ("AlpnEnabled", "true"),
            ("AlpnPolicy", "HTTP2Preferred"),
            ("CaCertificateIds.1", "ca-1"),
            ("CaCertificateIds.2", "ca-2"),
            ("CaEnabled", "true"),
            ("CertificateIds.1", "cert-1"),
            ("ClientToken", "tok-1"),
            ("Cps", "100"),
            ("DryRun", "true"),
            ("EndPort", "0"),
            ("IdleTimeout", "900"),
            ("ListenerDescription", "tls"),
            ("ListenerPort", "443"),
            ("ListenerProtocol", "TCPSSL"),
            ("LoadBalancerId", "nlb-1"),
            ("Mss", "1344"),
            ("ProxyProtocolEnabled", "false"),
            ("RegionId", "cn-hangzhou"),
            ("SecSensorEnabled", "false"),
            ("SecurityPolicyId", "tls_cipher_policy_1_0"),
            ("ServerGroupId", "sgp-1"),
            ("StartPort", "0"),
            ("Tag.1.Key", "env"),
            ("Tag.1.Value", "prod"),
            ("Tag.2.Key", "team"),
            ("Tag.2.Value", ""),
        ]);
        assert_eq!(wire.parameters(), want);
        Ok(())
    }

    #[test]
    fn create_server_group_wire_names() -> Result {
        let request = CreateServerGroupRequest::new()
            .set_server_group_name("web")
            .set_server_group_type(server_group_type::IP)
            .set_address_ip_version(address_ip_version::IPV4)
            .set_vpc_id("vpc-1")
            .set_protocol(server_group_protocol::TCP_UDP)
            .set_scheduler(scheduler::WRR)
            .set_connection_drain_enabled(true)
            .set_connection_drain_timeout(10)
            .set_preserve_client_ip_enabled(false)
            .set_any_port_enabled(false)
            .set_health_check_config(
                HealthCheckConfig::new()
                    .set_health_check_enabled(true)
                    .set_health_check_type(health_check_type::HTTP)
                    .set_health_check_connect_port(0)
                    .set_healthy_threshold(2)
                    .set_unhealthy_threshold(3)
                    .set_health_check_connect_timeout(5)
                    .set_health_check_interval(10)
                    .set_health_check_domain("example.com")
                    .set_health_check_url("/healthz")
                    .set_health_check_http_code(["http_2xx", "http_3xx"])
                    .set_http_check_method(http_check_method::HEAD),
            )
            .set_resource_group_id("rg-1")
            .set_tag([tag("env", "prod")])
            .set_client_token("tok-1")
            .set_dry_run(false)
            .set_region_id("cn-hangzhou");
        let wire = WireRequest::new(&operation::CREATE_SERVER_GROUP, &request)?;
        assert!(wire.query().is_empty(), "{wire:?}");
        let want = BTreeMap::from([
            ("AddressIPVersion", "ipv4"),
            ("AnyPortEnabled", "false"),
            ("ClientToken", "tok-1"),
            ("ConnectionDrainEnabled", "true"),
            ("ConnectionDrainTimeout", "10"),
            ("DryRun", "false"),
            ("HealthCheckConfig.HealthCheckConnectPort", "0"),
            ("HealthCheckConfig.HealthCheckConnectTimeout", "5"),
            ("HealthCheckConfig.HealthCheckDomain", "example.com"),
            ("HealthCheckConfig.HealthCheckEnabled", "true"),
            ("HealthCheckConfig.HealthCheckHttpCode.1", "http_2xx"),
            ("HealthCheckConfig.HealthCheckHttpCode.2", "http_3xx"),
            ("HealthCheckConfig.HealthCheckInterval", "10"),
            ("HealthCheckConfig.HealthCheckType", "HTTP"),
            ("HealthCheckConfig.HealthCheckUrl", "/healthz"),
            ("HealthCheckConfig.HealthyThreshold", "2"),
            ("HealthCheckConfig.HttpCheckMethod", "HEAD"),
            ("HealthCheckConfig.UnhealthyThreshold", "3"),
            ("PreserveClientIpEnabled", "false"),
            ("Protocol", "TCP_UDP"),
            ("RegionId", "cn-hangzhou"),
            ("ResourceGroupId", "rg-1"),
            ("Scheduler", "Wrr"),
            ("ServerGroupName", "web"),
            ("ServerGroupType", "Ip"),
            ("Tag.1.Key", "env"),
            ("Tag.1.Value", "prod"),
            ("VpcId", "vpc-1"),
        ]);
        assert_eq!(wire.parameters(), want);
        Ok(())
    }

    #[test]
    fn list_parameters_in_query() -> Result {
        let request = ListLoadBalancersRequest::new()
            .set_load_balancer_ids(["nlb-1", "nlb-2"])
            .set_max_results(20)
            .set_next_token("page-2");
        let wire = WireRequest::new(&operation::LIST_LOAD_BALANCERS, &request)?;
        assert!(wire.body().is_empty(), "{wire:?}");
        let want = BTreeMap::from([
            ("LoadBalancerIds.1", "nlb-1"),
            ("LoadBalancerIds.2", "nlb-2"),
            ("MaxResults", "20"),
            ("NextToken", "page-2"),
        ]);
        assert_eq!(
            wire.query()
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect::<BTreeMap<_, _>>(),
            want
        );
        Ok(())
    }

    #[test]
    fn tag_repeat_list() -> Result {
        let request = ListLoadBalancersRequest::new().set_tag([tag("env", "prod")]);
        let wire = WireRequest::new(&operation::LIST_LOAD_BALANCERS, &request)?;
        assert_eq!(
            wire.parameters(),
            BTreeMap::from([("Tag.1.Key", "env"), ("Tag.1.Value", "prod")])
        );
        Ok(())
    }

    #[test]
    fn tag_shrink() -> Result {
        let request = ListTagResourcesRequest::new().set_tag([tag("env", "prod")]);
        let wire = WireRequest::new(&operation::LIST_TAG_RESOURCES, &request)?;
        assert_eq!(
            wire.parameters(),
            BTreeMap::from([("Tag", r#"[{"Key":"env","Value":"prod"}]"#)])
        );
        Ok(())
    }

    #[test]
    fn shrink_is_deterministic() -> Result {
        let request = StartShiftLoadBalancerZonesRequest::new()
            .set_load_balancer_id("nlb-123")
            .set_zone_mappings([
                ShiftZoneMapping::new()
                    .set_vswitch_id("vsw-a")
                    .set_zone_id("cn-hangzhou-a"),
                ShiftZoneMapping::new().set_zone_id("cn-hangzhou-b"),
            ]);
        let first = WireRequest::new(&operation::START_SHIFT_LOAD_BALANCER_ZONES, &request)?;
        let second =
            WireRequest::new(&operation::START_SHIFT_LOAD_BALANCER_ZONES, &request.clone())?;
        assert_eq!(first, second);
        assert_eq!(
            first.body().get("ZoneMappings").map(String::as_str),
            Some(
                r#"[{"VSwitchId":"vsw-a","ZoneId":"cn-hangzhou-a"},{"ZoneId":"cn-hangzhou-b"}]"#
            )
        );
        assert_eq!(first.body().len(), 2, "{first:?}");
        Ok(())
    }

    #[test]
    fn materialize_partial_response() -> Result {
        let response = materialize::<DeleteLoadBalancerResponse>(
            200,
            HeaderMap::new(),
            json!({"RequestId": "abc-123"}),
        )?;
        assert_eq!(response.status_code(), 200);
        let body = response.into_body();
        assert_eq!(body.request_id.as_deref(), Some("abc-123"));
        assert_eq!(body.job_id, None);
        Ok(())
    }

    #[test]
    fn materialize_type_mismatch() {
        let got = materialize::<ListLoadBalancersResponse>(
            200,
            HeaderMap::new(),
            json!({"RequestId": "abc-123", "TotalCount": "many"}),
        );
        let err = got.unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
    }

    #[test]
    fn response_round_trip() -> Result {
        let want = GetLoadBalancerAttributeResponse::new()
            .set_request_id("req-1")
            .set_load_balancer_id("nlb-123")
            .set_load_balancer_status("Active")
            .set_dns_name("nlb-123.cn-hangzhou.nlb.aliyuncs.com")
            .set_cps(0)
            .set_cross_zone_enabled(true)
            .set_security_group_ids(["sg-1"])
            .set_zone_mappings([ZoneMappingAttribute::new()
                .set_vswitch_id("vsw-a")
                .set_zone_id("cn-hangzhou-a")
                .set_load_balancer_addresses([LoadBalancerAddress::new()
                    .set_private_ipv4_address("10.0.0.1")
                    .set_ipv4_local_addresses(["10.0.0.2", "10.0.0.3"])])])
            .set_deletion_protection_config(DeletionProtectionConfig::new().set_enabled(false))
            .set_tags([tag("env", "prod")]);
        let payload = serde_json::to_value(&want)?;
        assert_eq!(payload["DNSName"], json!("nlb-123.cn-hangzhou.nlb.aliyuncs.com"));
        assert_eq!(
            payload["ZoneMappings"][0]["LoadBalancerAddresses"][0]["PrivateIPv4Address"],
            json!("10.0.0.1")
        );
        let got = materialize::<GetLoadBalancerAttributeResponse>(200, HeaderMap::new(), payload)?;
        assert_eq!(got.into_body(), want);
        Ok(())
    }

    #[test]
    fn irregular_wire_names() -> Result {
        let response = materialize::<CreateLoadBalancerResponse>(
            200,
            HeaderMap::new(),
            json!({"RequestId": "r", "LoadbalancerId": "nlb-123", "OrderId": 42, "JobId": "job-1"}),
        )?;
        let body = response.into_body();
        assert_eq!(body.loadbalancer_id.as_deref(), Some("nlb-123"));
        assert_eq!(body.order_id, Some(42));

        let request =
            CreateServerGroupRequest::new().set_address_ip_version(address_ip_version::DUAL_STACK);
        let wire = WireRequest::new(&operation::CREATE_SERVER_GROUP, &request)?;
        assert_eq!(
            wire.parameters(),
            BTreeMap::from([("AddressIPVersion", "DualStack")])
        );
        Ok(())
    }
}
