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
    use alibabacloud_nlb_v20220430::stub;
    use gax::error::Error;
    use gax::error::rpc::Status;
    use gax::options::{RequestOptions, RequestOptionsBuilder};
    use gax::response::Response;
    use std::time::Duration;
    type Result<T> = gax::Result<T>;

    mockall::mock! {
        #[derive(Debug)]
        NetworkLoadBalancer {}
        impl stub::NetworkLoadBalancer for NetworkLoadBalancer {
            async fn delete_load_balancer(
                &self,
                req: DeleteLoadBalancerRequest,
                options: RequestOptions,
            ) -> Result<Response<DeleteLoadBalancerResponse>>;
            async fn get_job_status(
                &self,
                req: GetJobStatusRequest,
                options: RequestOptions,
            ) -> Result<Response<GetJobStatusResponse>>;
        }
    }

    #[tokio::test]
    async fn delete_load_balancer() -> anyhow::Result<()> {
        let mut mock = MockNetworkLoadBalancer::new();
        mock.expect_delete_load_balancer()
            .withf(|r, o| {
                r.load_balancer_id.as_deref() == Some("nlb-123")
                    && o.attempt_timeout() == &Some(Duration::from_secs(5))
            })
            .return_once(|_, _| {
                Ok(Response::from(
                    DeleteLoadBalancerResponse::new()
                        .set_request_id("req-1")
                        .set_job_id("job-1"),
                ))
            });

        let client = NetworkLoadBalancer::from_stub(mock);
        let response = client
            .delete_load_balancer(DeleteLoadBalancerRequest::new().set_load_balancer_id("nlb-123"))
            .with_attempt_timeout(Duration::from_secs(5))
            .send()
            .await?;
        assert_eq!(response.body().job_id.as_deref(), Some("job-1"));
        Ok(())
    }

    #[tokio::test]
    async fn service_error() {
        let mut mock = MockNetworkLoadBalancer::new();
        mock.expect_delete_load_balancer().return_once(|_, _| {
            Err(Error::service(
                Status::default()
                    .set_code("ResourceNotFound.loadBalancer")
                    .set_message("the load balancer does not exist"),
            ))
        });

        let client = NetworkLoadBalancer::from_stub(mock);
        let err = client
            .delete_load_balancer(DeleteLoadBalancerRequest::new().set_load_balancer_id("nlb-404"))
            .send()
            .await
            .unwrap_err();
        let status = err.status().unwrap();
        assert_eq!(status.code, "ResourceNotFound.loadBalancer");
    }

    // Applications observe asynchronous jobs by calling GetJobStatus until the
    // job completes.
    #[tokio::test]
    async fn wait_for_job() -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockNetworkLoadBalancer::new();
        mock.expect_delete_load_balancer()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(Response::from(
                    DeleteLoadBalancerResponse::new().set_job_id("job-1"),
                ))
            });
        for status in [job_status::PROCESSING, job_status::PROCESSING, job_status::SUCCEEDED] {
            mock.expect_get_job_status()
                .withf(|r, _| r.job_id.as_deref() == Some("job-1"))
                .times(1)
                .in_sequence(&mut seq)
                .returning(move |_, _| {
                    Ok(Response::from(GetJobStatusResponse::new().set_status(status)))
                });
        }

        let client = NetworkLoadBalancer::from_stub(mock);
        let job_id = client
            .delete_load_balancer(DeleteLoadBalancerRequest::new().set_load_balancer_id("nlb-123"))
            .send()
            .await?
            .into_body()
            .job_id
            .unwrap_or_default();
        let mut polls = 0;
        let status = loop {
            polls += 1;
            let status = client
                .get_job_status(GetJobStatusRequest::new().set_job_id(&job_id))
                .send()
                .await?
                .into_body()
                .status;
            if status.as_deref() != Some(job_status::PROCESSING) {
                break status;
            }
        };
        assert_eq!(polls, 3);
        assert_eq!(status.as_deref(), Some(job_status::SUCCEEDED));
        Ok(())
    }

    #[tokio::test]
    #[should_panic]
    async fn unimplemented_operation() {
        let client = NetworkLoadBalancer::from_stub(MockNetworkLoadBalancer::new());
        let _ = client
            .list_listeners(ListListenersRequest::new())
            .send()
            .await;
    }

    #[test]
    fn builder_request() {
        let client = NetworkLoadBalancer::from_stub(MockNetworkLoadBalancer::new());
        let builder = client
            .start_listener(StartListenerRequest::new())
            .with_request(StartListenerRequest::new().set_listener_id("lsn-1"))
            .with_request_options(RequestOptions::default());
        assert_eq!(builder.request().listener_id.as_deref(), Some("lsn-1"));
    }
}
