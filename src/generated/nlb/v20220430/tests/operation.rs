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
    use alibabacloud_nlb_v20220430::operation::{self, ALL};
    use gaxi::operation::{BodyType, Method, ParameterLocation};
    use gaxi::shrink::ShrinkStyle;
    use std::collections::HashSet;

    #[test]
    fn registry() {
        assert_eq!(ALL.len(), 28);
        let actions = ALL.iter().map(|d| d.action).collect::<HashSet<_>>();
        assert_eq!(actions.len(), ALL.len(), "duplicate actions in {actions:?}");
        for d in ALL {
            assert_eq!(d.version, "2022-04-30", "{d:?}");
            assert_eq!(d.protocol, "HTTPS", "{d:?}");
            assert_eq!(d.pathname, "/", "{d:?}");
            assert_eq!(d.auth_type, "AK", "{d:?}");
            assert_eq!(d.style, "RPC", "{d:?}");
            assert_eq!(d.req_body_type, BodyType::FormData, "{d:?}");
            assert_eq!(d.body_type, "json", "{d:?}");
            let want = match d.method {
                Method::Get => ParameterLocation::Query,
                _ => ParameterLocation::Body,
            };
            assert_eq!(d.location, want, "{d:?}");
        }
    }

    #[test]
    fn shrink_fields() {
        let shrink = ALL
            .iter()
            .flat_map(|d| d.shrink.iter().map(|s| (d.action, s.field, s.style)))
            .collect::<Vec<_>>();
        assert_eq!(
            shrink,
            vec![
                ("StartShiftLoadBalancerZones", "ZoneMappings", ShrinkStyle::Json),
                ("CancelShiftLoadBalancerZones", "ZoneMappings", ShrinkStyle::Json),
                ("ListTagResources", "Tag", ShrinkStyle::Json),
            ]
        );
    }

    #[test]
    fn methods() {
        assert_eq!(operation::GET_JOB_STATUS.method, Method::Get);
        assert_eq!(operation::LIST_TAG_RESOURCES.method, Method::Get);
        assert_eq!(operation::CREATE_LISTENER.method, Method::Post);
        assert_eq!(
            operation::REMOVE_SERVERS_FROM_SERVER_GROUP.action,
            "RemoveServersFromServerGroup"
        );
    }
}
