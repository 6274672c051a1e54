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
    use gax::error::ValidationError;
    use gaxi::validation::Validate;
    use pretty_assertions::assert_eq;
    use std::error::Error as _;
    use test_case::test_case;

    fn violations(err: &gax::error::Error) -> Vec<(String, String)> {
        err.source()
            .and_then(|e| e.downcast_ref::<ValidationError>())
            .map(|v| {
                v.violations()
                    .iter()
                    .map(|f| (f.field.clone(), f.description.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn fields(err: &gax::error::Error) -> Vec<String> {
        violations(err).into_iter().map(|(f, _)| f).collect()
    }

    #[test]
    fn create_load_balancer_valid() {
        let request = CreateLoadBalancerRequest::new()
            .set_address_type(address_type::INTRANET)
            .set_vpc_id("vpc-1")
            .set_zone_mappings([ZoneMapping::new()
                .set_vswitch_id("vsw-a")
                .set_zone_id("cn-hangzhou-a")]);
        assert!(request.validate().is_ok(), "{request:?}");
    }

    #[test]
    fn create_load_balancer_gathers_all_violations() {
        let request = CreateLoadBalancerRequest::new()
            .set_address_type("Public")
            .set_zone_mappings([ZoneMapping::new().set_zone_id("cn-hangzhou-a")])
            .set_tag((0..21).map(|i| Tag::new().set_key(format!("k{i}"))));
        let err = request.validate().unwrap_err();
        assert!(err.is_validation(), "{err:?}");
        assert_eq!(
            fields(&err),
            vec!["AddressType", "VpcId", "ZoneMappings.1.VSwitchId", "Tag"]
        );
        let (_, description) = &violations(&err)[0];
        assert!(description.contains("Internet, Intranet"), "{description}");
    }

    #[test]
    fn nested_paths() {
        let request = AddServersToServerGroupRequest::new()
            .set_server_group_id("sgp-1")
            .set_servers([
                Server::new()
                    .set_server_id("i-1")
                    .set_server_type(server_type::ECS)
                    .set_port(80),
                Server::new()
                    .set_server_type("Vm")
                    .set_weight(101),
            ]);
        let err = request.validate().unwrap_err();
        assert_eq!(
            fields(&err),
            vec![
                "Servers.2.ServerId",
                "Servers.2.ServerType",
                "Servers.2.Weight"
            ]
        );
    }

    #[test]
    fn nested_object() {
        let request = CreateServerGroupRequest::new()
            .set_server_group_name("group")
            .set_vpc_id("vpc-1")
            .set_health_check_config(
                HealthCheckConfig::new()
                    .set_health_check_type(health_check_type::HTTP)
                    .set_healthy_threshold(1),
            );
        let err = request.validate().unwrap_err();
        assert_eq!(fields(&err), vec!["HealthCheckConfig.HealthyThreshold"]);
    }

    #[test_case(0, false; "below")]
    #[test_case(1, true; "minimum")]
    #[test_case(100, true; "maximum")]
    #[test_case(101, false; "above")]
    fn max_results(value: i32, valid: bool) {
        let request = ListListenersRequest::new().set_max_results(value);
        assert_eq!(request.validate().is_ok(), valid, "{request:?}");
    }

    #[test_case(listener_protocol::TCP, true)]
    #[test_case(listener_protocol::UDP, true)]
    #[test_case(listener_protocol::TCPSSL, true)]
    #[test_case("HTTP", false)]
    fn create_listener_protocol(value: &str, valid: bool) {
        let request = CreateListenerRequest::new()
            .set_listener_protocol(value)
            .set_load_balancer_id("nlb-1")
            .set_server_group_id("sgp-1");
        assert_eq!(request.validate().is_ok(), valid, "{request:?}");
    }

    #[test]
    fn name_length_counts_characters() {
        let request = UpdateLoadBalancerAttributeRequest::new()
            .set_load_balancer_id("nlb-1")
            .set_load_balancer_name("负载");
        assert!(request.validate().is_ok(), "{request:?}");
        let request = request.set_load_balancer_name("x");
        assert_eq!(fields(&request.validate().unwrap_err()), vec!["LoadBalancerName"]);
    }

    #[test]
    fn tag_resources() {
        let request = TagResourcesRequest::new()
            .set_resource_type(resource_type::LOADBALANCER)
            .set_resource_id(Vec::<String>::new())
            .set_tag([Tag::new().set_value("no key")]);
        let err = request.validate().unwrap_err();
        assert_eq!(fields(&err), vec!["ResourceId", "Tag.1.Key"]);
    }

    #[test]
    fn get_job_status_requires_job_id() {
        let err = GetJobStatusRequest::new().validate().unwrap_err();
        assert_eq!(
            violations(&err),
            vec![("JobId".to_string(), "field is required".to_string())]
        );
    }
}
