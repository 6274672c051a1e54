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

//! Defines helpers functions to run ReqwestClient integration tests.
//!
//! The server listens on `/` like the RPC-style services. Its behavior is
//! selected by the `x-acs-action` header:
//! - `Error` returns a service error payload with status 400.
//! - `Proxy` returns a 502 with a non-JSON payload.
//! - `NoContent` returns an empty 204.
//! - `Delay` sleeps for `DelayMs` milliseconds, then echoes the request.
//! - anything else echoes the method, headers, query, and body.

use axum::{
    extract::Query,
    http::{HeaderMap, Method, StatusCode},
};
use gax::credentials::Credentials;
use gaxi::options::ServiceInfo;
use serde_json::{Map, Value, json};
use std::collections::HashMap;
use tokio::task::JoinHandle;

type Result<T> = anyhow::Result<T>;

pub const SERVICE_INFO: ServiceInfo = ServiceInfo {
    product: "echo",
    default_region: "cn-hangzhou",
    client_version: "0.0.0",
};

pub async fn start() -> Result<(String, JoinHandle<()>)> {
    let app = axum::Router::new().route("/", axum::routing::any(echo));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let server = tokio::spawn(async {
        if let Err(e) = axum::serve(listener, app).await {
            panic!("echo server failed: {e}");
        }
    });

    Ok((format!("http://{}:{}", addr.ip(), addr.port()), server))
}

pub fn builder(
    endpoint: impl Into<String>,
) -> gax::client_builder::ClientBuilder<Factory, Credentials> {
    gax::client_builder::internal::new_builder(Factory).with_endpoint(endpoint)
}

pub struct Factory;
impl gax::client_builder::internal::ClientFactory for Factory {
    type Client = gaxi::http::ReqwestClient;
    type Credentials = Credentials;
    async fn build(
        self,
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self::Client> {
        Self::Client::new(config, &SERVICE_INFO).await
    }
}

pub fn make_status() -> Result<gax::error::rpc::Status> {
    let payload = bytes::Bytes::from_owner(make_status_value().to_string());
    let status = gax::error::rpc::Status::try_from(&payload)?;
    Ok(status)
}

async fn echo(
    method: Method,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: bytes::Bytes,
) -> (StatusCode, String) {
    let response = echo_impl(method, query, headers, body).await;
    match response {
        Err(e) => internal_error(e),
        Ok(r) => r,
    }
}

async fn echo_impl(
    method: Method,
    query: HashMap<String, String>,
    headers: HeaderMap,
    body: bytes::Bytes,
) -> Result<(StatusCode, String)> {
    let body = body_to_json(&headers, &body)?;
    let action = headers
        .get("x-acs-action")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    match action.as_str() {
        "Error" => return Ok((StatusCode::BAD_REQUEST, make_status_value().to_string())),
        "Proxy" => return Ok((StatusCode::BAD_GATEWAY, "<html>bad gateway</html>".into())),
        "NoContent" => return Ok((StatusCode::NO_CONTENT, String::new())),
        "Delay" => {
            let delay = query
                .get("DelayMs")
                .map(String::as_str)
                .or_else(|| body.get("DelayMs").and_then(Value::as_str))
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(0);
            tokio::time::sleep(tokio::time::Duration::from_millis(delay)).await;
        }
        _ => {}
    }
    let query = Value::Object(
        query
            .into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect(),
    );
    let request_id = headers
        .get("x-acs-signature-nonce")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let headers = headers_to_json(headers)?;
    let object = json!({
        "RequestId": request_id,
        "Method": method.as_str(),
        "Headers": headers,
        "Query": query,
        "Body": body,
    });
    Ok((StatusCode::OK, serde_json::to_string(&object)?))
}

fn body_to_json(headers: &HeaderMap, body: &bytes::Bytes) -> Result<Value> {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if body.is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    if content_type.starts_with("application/json") {
        return Ok(serde_json::from_slice(body)?);
    }
    let form = url::form_urlencoded::parse(body)
        .map(|(k, v)| (k.into_owned(), Value::String(v.into_owned())))
        .collect::<Map<_, _>>();
    Ok(Value::Object(form))
}

fn make_status_value() -> Value {
    json!({
        "RequestId": "echo-error-request-id",
        "HostId": "127.0.0.1",
        "Code": "IncorrectStatus.loadBalancer",
        "Message": "this action always returns an error",
        "Recommend": "https://api.aliyun.com/troubleshoot?q=IncorrectStatus.loadBalancer",
    })
}

fn headers_to_json(headers: HeaderMap) -> Result<Value> {
    let headers = headers
        .into_iter()
        .map(|(k, v)| {
            let k = k.map(|h| h.to_string()).unwrap_or("__status__".to_string());
            v.to_str().map(|s| (k, Value::String(s.to_string())))
        })
        .collect::<std::result::Result<Map<_, _>, _>>()?;

    Ok(Value::Object(headers))
}

fn internal_error(e: anyhow::Error) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, format!("{e}"))
}
