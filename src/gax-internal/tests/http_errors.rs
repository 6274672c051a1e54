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
    use alibabacloud_gax_internal as gaxi;
    use gax::credentials::{CredentialsProvider, SigningRequest};
    use gax::error::CredentialsError;
    use gax::options::RequestOptions;
    use gaxi::operation::{Method, OperationDescriptor};
    use gaxi::validation::{Validate, Validator};
    use http::{HeaderMap, HeaderValue};
    use serde_json::{Value, json};
    use std::time::Duration;
    type Result = anyhow::Result<()>;

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, serde::Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct EchoRequest {
        delay_ms: Option<String>,
        name: Option<String>,
    }

    impl Validate for EchoRequest {
        fn check(&self, _v: &mut Validator) {}
    }

    static ERROR: OperationDescriptor =
        OperationDescriptor::rpc("Error", "2022-04-30", Method::Post);
    static PROXY: OperationDescriptor =
        OperationDescriptor::rpc("Proxy", "2022-04-30", Method::Post);
    static DELAY: OperationDescriptor =
        OperationDescriptor::rpc("Delay", "2022-04-30", Method::Get);
    static ECHO: OperationDescriptor = OperationDescriptor::rpc("Echo", "2022-04-30", Method::Post);

    #[tokio::test]
    async fn service_error() -> Result {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint).build().await?;

        let err = client
            .execute::<EchoRequest, Value>(
                &ERROR,
                &EchoRequest::default(),
                RequestOptions::default(),
            )
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(400), "{err:?}");
        assert!(!err.is_transport(), "{err:?}");
        let status = err.status().unwrap();
        assert_eq!(status, &echo_server::make_status()?);
        assert_eq!(status.code, "IncorrectStatus.loadBalancer");
        assert_eq!(status.request_id.as_deref(), Some("echo-error-request-id"));
        Ok(())
    }

    #[tokio::test]
    async fn proxy_error() -> Result {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint).build().await?;

        let err = client
            .execute::<EchoRequest, Value>(
                &PROXY,
                &EchoRequest::default(),
                RequestOptions::default(),
            )
            .await
            .unwrap_err();
        assert!(err.is_transport(), "{err:?}");
        assert!(!err.is_io(), "{err:?}");
        assert!(err.status().is_none(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(502));
        assert_eq!(
            err.http_payload(),
            Some(&bytes::Bytes::from_static(b"<html>bad gateway</html>"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn attempt_timeout() -> Result {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint).build().await?;

        let request = EchoRequest {
            delay_ms: Some("2000".into()),
            ..Default::default()
        };
        let mut options = RequestOptions::default();
        options.set_attempt_timeout(Duration::from_millis(100));
        let err = client
            .execute::<EchoRequest, Value>(&DELAY, &request, options)
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn delay_within_timeout() -> Result {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint).build().await?;

        let request = EchoRequest {
            delay_ms: Some("10".into()),
            ..Default::default()
        };
        let mut options = RequestOptions::default();
        options.set_attempt_timeout(Duration::from_secs(10));
        let response = client
            .execute::<EchoRequest, Value>(&DELAY, &request, options)
            .await?;
        assert_eq!(response.body()["Query"], json!({"DelayMs": "10"}));
        Ok(())
    }

    // Sends the response headers and part of the body, then stalls.
    async fn start_stalled_body() -> anyhow::Result<(String, tokio::task::JoinHandle<()>)> {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let server = tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                tokio::spawn(async move {
                    let mut buf = [0_u8; 4096];
                    let _ = socket.read(&mut buf).await;
                    let head = concat!(
                        "HTTP/1.1 200 OK\r\n",
                        "content-type: application/json\r\n",
                        "content-length: 100\r\n",
                        "\r\n",
                        "{\"Re",
                    );
                    let _ = socket.write_all(head.as_bytes()).await;
                    let _ = socket.flush().await;
                    tokio::time::sleep(Duration::from_secs(10)).await;
                });
            }
        });
        Ok((format!("http://{addr}"), server))
    }

    #[tokio::test]
    async fn attempt_timeout_reading_body() -> Result {
        let (endpoint, server) = start_stalled_body().await?;
        let client = echo_server::builder(endpoint).build().await?;

        let mut options = RequestOptions::default();
        options.set_attempt_timeout(Duration::from_millis(300));
        let err = client
            .execute::<EchoRequest, Value>(&ECHO, &EchoRequest::default(), options)
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        assert!(!err.is_io(), "{err:?}");
        server.abort();
        Ok(())
    }

    #[derive(Debug)]
    struct Signer;
    impl CredentialsProvider for Signer {
        async fn headers(&self, request: &SigningRequest) -> gax::credentials::Result<HeaderMap> {
            let keys = request
                .body
                .keys()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(",");
            let action = request
                .headers
                .get("x-acs-action")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default();
            let value = HeaderValue::from_str(&format!("{action}:{keys}"))
                .map_err(|e| CredentialsError::new(false, e))?;
            let mut headers = HeaderMap::new();
            headers.insert("authorization", value);
            Ok(headers)
        }
    }

    #[derive(Debug)]
    struct Failing;
    impl CredentialsProvider for Failing {
        async fn headers(&self, _request: &SigningRequest) -> gax::credentials::Result<HeaderMap> {
            Err(CredentialsError::from_msg(false, "test-only"))
        }
    }

    #[tokio::test]
    async fn credentials_headers() -> Result {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint)
            .with_credentials(Signer)
            .build()
            .await?;

        let request = EchoRequest {
            name: Some("n".into()),
            delay_ms: Some("0".into()),
        };
        let response = client
            .execute::<EchoRequest, Value>(&ECHO, &request, RequestOptions::default())
            .await?;
        assert_eq!(
            response.body()["Headers"]["authorization"],
            json!("Echo:DelayMs,Name")
        );
        Ok(())
    }

    #[tokio::test]
    async fn credentials_error() -> Result {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint)
            .with_credentials(Failing)
            .build()
            .await?;

        let err = client
            .execute::<EchoRequest, Value>(
                &ECHO,
                &EchoRequest::default(),
                RequestOptions::default(),
            )
            .await
            .unwrap_err();
        assert!(err.is_authentication(), "{err:?}");
        assert!(err.to_string().contains("test-only"), "{err}");
        Ok(())
    }
}
