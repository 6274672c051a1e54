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
    use alibabacloud_nlb_v20220430::client::NetworkLoadBalancer;
    use alibabacloud_nlb_v20220430::model::*;
    use gax::options::RequestOptionsBuilder;
    type Result = anyhow::Result<()>;

    static_assertions::assert_impl_all!(NetworkLoadBalancer: Clone, Send, Sync, std::fmt::Debug);

    #[tokio::test]
    async fn send() -> Result {
        let (endpoint, _server) = echo_server::start().await?;
        let client = NetworkLoadBalancer::builder()
            .with_endpoint(endpoint)
            .build()
            .await?;

        let response = client
            .delete_load_balancer(DeleteLoadBalancerRequest::new().set_load_balancer_id("nlb-123"))
            .with_user_agent("test-only/1.0")
            .send()
            .await?;
        assert_eq!(response.status_code(), 200);
        let body = response.into_body();
        // The echo server uses the request nonce as the request id.
        assert!(body.request_id.is_some(), "{body:?}");
        assert_eq!(body.job_id, None);
        Ok(())
    }

    #[tokio::test]
    async fn send_with_tracing() -> Result {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let (endpoint, _server) = echo_server::start().await?;
        let client = NetworkLoadBalancer::builder()
            .with_endpoint(endpoint)
            .with_tracing()
            .build()
            .await?;

        let response = client
            .list_load_balancers(ListLoadBalancersRequest::new().set_max_results(10))
            .send()
            .await?;
        assert!(response.body().request_id.is_some(), "{response:?}");
        assert_eq!(response.body().load_balancers, None);
        Ok(())
    }

    #[tokio::test]
    async fn validation_error() -> Result {
        // Nothing listens on this endpoint, the request must fail before any
        // network call.
        let client = NetworkLoadBalancer::builder()
            .with_endpoint("http://127.0.0.1:1")
            .build()
            .await?;
        let err = client
            .delete_load_balancer(DeleteLoadBalancerRequest::new())
            .send()
            .await
            .unwrap_err();
        assert!(err.is_validation(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn connection_error() -> Result {
        let client = NetworkLoadBalancer::builder()
            .with_endpoint("http://127.0.0.1:1")
            .build()
            .await?;
        let err = client
            .describe_regions(DescribeRegionsRequest::new())
            .send()
            .await
            .unwrap_err();
        assert!(err.is_io(), "{err:?}");
        assert!(err.is_transport(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn bad_endpoint() {
        let err = NetworkLoadBalancer::builder()
            .with_endpoint("not a url")
            .build()
            .await
            .unwrap_err();
        assert!(err.is_endpoint(), "{err:?}");
    }
}
