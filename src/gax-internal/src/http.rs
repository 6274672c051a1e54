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

use crate::operation::{BodyType, OperationDescriptor};
use crate::options::{ClientConfig, ServiceInfo};
use crate::request::WireRequest;
use crate::validation::Validate;
use gax::Result;
use gax::client_builder::Error as BuilderError;
use gax::credentials::{Credentials, SigningRequest};
use gax::error::Error;
use gax::options::RequestOptions;
use gax::response::{Parts, Response};
use http::{HeaderMap, HeaderValue};

const ACS_DATE: &[time::format_description::BorrowedFormatItem<'static>] =
    time::macros::format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z");

#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
    user_agent: String,
}

impl ReqwestClient {
    pub async fn new(
        config: ClientConfig,
        info: &ServiceInfo,
    ) -> gax::client_builder::Result<Self> {
        let endpoint = crate::options::resolve_endpoint(&config, info);
        reqwest::Url::parse(&endpoint).map_err(BuilderError::endpoint)?;
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        let cred = config.cred.unwrap_or_default();
        Ok(Self {
            inner,
            cred,
            endpoint,
            user_agent: crate::api_header::user_agent(info),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Validates, shapes, and sends `request`, then decodes the response.
    pub async fn execute<I, O>(
        &self,
        descriptor: &'static OperationDescriptor,
        request: &I,
        options: RequestOptions,
    ) -> Result<Response<O>>
    where
        I: serde::ser::Serialize + Validate,
        O: serde::de::DeserializeOwned + Default,
    {
        request.validate()?;
        let wire = WireRequest::new(descriptor, request)?;
        self.send(wire, options).await
    }

    /// Sends a request that is already shaped.
    pub async fn send<O>(&self, wire: WireRequest, options: RequestOptions) -> Result<Response<O>>
    where
        O: serde::de::DeserializeOwned + Default,
    {
        let descriptor = wire.descriptor();
        let headers = self.headers(descriptor, &options)?;
        let signing = SigningRequest::new(descriptor.method.into(), descriptor.pathname)
            .set_headers(headers.clone())
            .set_query(wire.query().clone())
            .set_body(wire.body().clone());
        let auth_headers = self
            .cred
            .headers(&signing)
            .await
            .map_err(Error::authentication)?;

        let mut builder = self
            .inner
            .request(
                descriptor.method.into(),
                format!("{}{}", self.endpoint, descriptor.pathname),
            )
            .headers(headers)
            .headers(auth_headers);
        if !wire.query().is_empty() {
            builder = builder.query(wire.query());
        }
        if !wire.body().is_empty() {
            builder = match descriptor.req_body_type {
                BodyType::FormData => builder.form(wire.body()),
                BodyType::Json => builder.json(wire.body()),
            };
        }
        if let Some(timeout) = options.attempt_timeout() {
            builder = builder.timeout(*timeout);
        }
        tracing::debug!(
            action = descriptor.action,
            method = descriptor.method.as_str(),
            query = wire.query().len(),
            body = wire.body().len(),
            "sending request"
        );
        let response = builder.send().await.map_err(map_send_error)?;
        if !response.status().is_success() {
            return self::to_http_error(response).await;
        }

        self::to_http_response(response).await
    }

    fn headers(
        &self,
        descriptor: &OperationDescriptor,
        options: &RequestOptions,
    ) -> Result<HeaderMap> {
        let user_agent = match options.user_agent() {
            Some(suffix) => format!("{} {suffix}", self.user_agent),
            None => self.user_agent.clone(),
        };
        let date = time::OffsetDateTime::now_utc()
            .format(ACS_DATE)
            .map_err(Error::ser)?;
        let nonce = uuid::Uuid::new_v4().to_string();
        let mut headers = HeaderMap::new();
        let pairs = [
            ("x-acs-action", descriptor.action.to_string()),
            ("x-acs-version", descriptor.version.to_string()),
            ("x-acs-signature-nonce", nonce),
            ("x-acs-date", date),
            ("accept", "application/json".to_string()),
            ("user-agent", user_agent),
        ];
        for (name, value) in pairs {
            headers.insert(name, HeaderValue::from_str(&value).map_err(Error::ser)?);
        }
        Ok(headers)
    }
}

// The attempt timeout also covers reading the body.
fn map_send_error(err: reqwest::Error) -> Error {
    match err {
        e if e.is_timeout() => Error::timeout(e),
        e => Error::io(e),
    }
}

pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let headers = response.headers().clone();
    let body = response.bytes().await.map_err(map_send_error)?;

    let error = match gax::error::rpc::Status::try_from(&body) {
        Ok(status) => Error::service_with_http_metadata(status, Some(status_code), Some(headers)),
        Err(_) => Error::http(status_code, headers, body),
    };
    Err(error)
}

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<Response<O>> {
    let status_code = response.status().as_u16();
    let headers = response.headers().clone();
    let body = response.bytes().await.map_err(map_send_error)?;

    // 204 No Content has no body, serde_json reports EOF on empty input.
    if body.is_empty() && status_code == reqwest::StatusCode::NO_CONTENT.as_u16() {
        return Ok(Response::from_parts(
            Parts::new()
                .set_status_code(status_code)
                .set_headers(headers),
            O::default(),
        ));
    }
    let payload = serde_json::from_slice::<serde_json::Value>(&body).map_err(Error::deser)?;
    materialize(status_code, headers, payload)
}

/// Decodes a generic payload into the typed response.
///
/// Missing members leave the corresponding fields unset, members with the
/// wrong type are a deserialization error.
pub fn materialize<O: serde::de::DeserializeOwned>(
    status_code: u16,
    headers: HeaderMap,
    payload: serde_json::Value,
) -> Result<Response<O>> {
    let body = serde_json::from_value::<O>(payload).map_err(Error::deser)?;
    Ok(Response::from_parts(
        Parts::new()
            .set_status_code(status_code)
            .set_headers(headers),
        body,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::Method;
    use http::{HeaderMap, HeaderValue};
    use serde_json::json;
    use test_case::test_case;
    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "PascalCase")]
    struct FakeResponse {
        request_id: Option<String>,
        job_id: Option<String>,
        total_count: Option<i32>,
    }

    static CREATE: OperationDescriptor =
        OperationDescriptor::rpc("CreateThing", "2022-04-30", Method::Post);

    async fn test_client() -> gax::client_builder::Result<ReqwestClient> {
        let mut config = ClientConfig::default();
        config.endpoint = Some("http://127.0.0.1:1".to_string());
        let info = ServiceInfo {
            product: "test",
            default_region: "cn-hangzhou",
            client_version: "1.2.3",
        };
        ReqwestClient::new(config, &info).await
    }

    #[tokio::test]
    async fn client_http_error_bytes() -> TestResult {
        let http_resp = http::Response::builder()
            .header("Content-Type", "text/html")
            .status(502)
            .body("<html>bad gateway</html>")?;
        let response: reqwest::Response = http_resp.into();
        let response = super::to_http_error::<()>(response).await;
        let err = response.unwrap_err();
        assert!(err.is_transport(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(502));
        let mut want = HeaderMap::new();
        want.insert("content-type", HeaderValue::from_static("text/html"));
        assert_eq!(err.http_headers(), Some(&want));
        assert_eq!(
            err.http_payload(),
            Some(bytes::Bytes::from("<html>bad gateway</html>")).as_ref()
        );
        Ok(())
    }

    #[tokio::test]
    async fn client_error_with_status() -> TestResult {
        let body = json!({
            "RequestId": "54B48E3D-DF70-471B-AA93-08E683A1B457",
            "HostId": "nlb.cn-hangzhou.aliyuncs.com",
            "Code": "ResourceNotFound.loadBalancer",
            "Message": "The specified resource of nlb-123 is not found.",
        });
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(404)
            .body(body.to_string())?;
        let response: reqwest::Response = http_resp.into();
        let err = super::to_http_error::<()>(response).await.unwrap_err();
        let want_status = gax::error::rpc::Status::default()
            .set_code("ResourceNotFound.loadBalancer")
            .set_message("The specified resource of nlb-123 is not found.")
            .set_request_id("54B48E3D-DF70-471B-AA93-08E683A1B457")
            .set_host_id("nlb.cn-hangzhou.aliyuncs.com");
        assert_eq!(err.status(), Some(&want_status));
        assert_eq!(err.http_status_code(), Some(404_u16));
        assert!(!err.is_transport(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    #[test_case(reqwest::StatusCode::OK, "{}"; "200 with empty object")]
    #[test_case(reqwest::StatusCode::NO_CONTENT, "{}"; "204 with empty object")]
    #[test_case(reqwest::StatusCode::NO_CONTENT, ""; "204 with empty content")]
    async fn client_empty_content(code: reqwest::StatusCode, content: &str) -> TestResult {
        let response = resp_from_code_content(code, content)?;
        let response = super::to_http_response::<FakeResponse>(response).await?;
        assert_eq!(response.status_code(), code.as_u16());
        assert_eq!(response.into_body(), FakeResponse::default());
        Ok(())
    }

    #[tokio::test]
    #[test_case(reqwest::StatusCode::OK, ""; "200 with empty content")]
    #[test_case(reqwest::StatusCode::OK, "not json"; "200 with garbage")]
    async fn client_error_with_bad_content(
        code: reqwest::StatusCode,
        content: &str,
    ) -> TestResult {
        let response = resp_from_code_content(code, content)?;
        let response = super::to_http_response::<FakeResponse>(response).await;
        assert!(
            matches!(&response, Err(e) if e.is_deserialization()),
            "{response:?}"
        );
        Ok(())
    }

    #[test]
    fn materialize_partial() -> TestResult {
        let mut headers = HeaderMap::new();
        headers.insert("x-acs-request-id", HeaderValue::from_static("abc-123"));
        let got = materialize::<FakeResponse>(
            200,
            headers.clone(),
            json!({"RequestId": "abc-123"}),
        )?;
        assert_eq!(got.status_code(), 200);
        assert_eq!(got.headers(), &headers);
        let body = got.into_body();
        assert_eq!(body.request_id.as_deref(), Some("abc-123"));
        assert_eq!(body.job_id, None);
        Ok(())
    }

    #[test]
    fn materialize_unknown_fields() -> TestResult {
        let got = materialize::<FakeResponse>(
            200,
            HeaderMap::new(),
            json!({"RequestId": "abc-123", "SomethingNew": [1, 2, 3]}),
        )?;
        assert_eq!(got.body().request_id.as_deref(), Some("abc-123"));
        Ok(())
    }

    #[test]
    fn materialize_type_mismatch() {
        let got = materialize::<FakeResponse>(
            200,
            HeaderMap::new(),
            json!({"RequestId": "abc-123", "TotalCount": "many"}),
        );
        assert!(matches!(&got, Err(e) if e.is_deserialization()), "{got:?}");
    }

    #[test]
    fn materialize_round_trip() -> TestResult {
        let want = FakeResponse {
            request_id: Some("r-1".into()),
            job_id: Some("j-1".into()),
            total_count: Some(0),
        };
        let payload = serde_json::to_value(&want)?;
        let got = materialize::<FakeResponse>(200, HeaderMap::new(), payload)?;
        assert_eq!(got.into_body(), want);
        Ok(())
    }

    #[tokio::test]
    async fn request_headers() -> TestResult {
        let client = test_client().await?;
        let mut options = RequestOptions::default();
        options.set_user_agent("my-app/1.0");
        let headers = client.headers(&CREATE, &options)?;
        assert_eq!(
            headers.get("x-acs-action"),
            Some(&HeaderValue::from_static("CreateThing"))
        );
        assert_eq!(
            headers.get("x-acs-version"),
            Some(&HeaderValue::from_static("2022-04-30"))
        );
        let date = headers
            .get("x-acs-date")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert_eq!(date.len(), "2025-01-01T00:00:00Z".len(), "{date}");
        assert!(date.ends_with('Z'), "{date}");
        let nonce = headers
            .get("x-acs-signature-nonce")
            .and_then(|v| v.to_str().ok())
            .map(uuid::Uuid::parse_str);
        assert!(matches!(nonce, Some(Ok(_))), "{nonce:?}");
        let user_agent = headers
            .get("user-agent")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(user_agent.starts_with("AlibabaCloud"), "{user_agent}");
        assert!(user_agent.ends_with(" my-app/1.0"), "{user_agent}");
        Ok(())
    }

    #[tokio::test]
    async fn nonce_is_unique() -> TestResult {
        let client = test_client().await?;
        let options = RequestOptions::default();
        let a = client.headers(&CREATE, &options)?;
        let b = client.headers(&CREATE, &options)?;
        assert_ne!(
            a.get("x-acs-signature-nonce"),
            b.get("x-acs-signature-nonce")
        );
        Ok(())
    }

    #[tokio::test]
    async fn bad_endpoint() {
        let mut config = ClientConfig::default();
        config.endpoint = Some("not a url".to_string());
        let info = ServiceInfo {
            product: "test",
            default_region: "cn-hangzhou",
            client_version: "1.2.3",
        };
        let got = ReqwestClient::new(config, &info).await;
        assert!(matches!(&got, Err(e) if e.is_endpoint()), "{got:?}");
    }

    fn resp_from_code_content(
        code: reqwest::StatusCode,
        content: &str,
    ) -> http::Result<reqwest::Response> {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(code)
            .body(content.to_string())?;

        let response: reqwest::Response = http_resp.into();
        Ok(response)
    }
}
