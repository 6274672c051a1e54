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

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// The error payload returned by Alibaba Cloud RPC-style services.
///
/// Each error contains a textual code, such as `Forbidden.NoPermission` or
/// `ResourceNotFound.loadBalancer`, a developer-facing message, and the
/// request id. The request id is the most useful piece of information when
/// contacting support.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct Status {
    /// The error code, for example `IncorrectStatus.loadBalancer`.
    pub code: String,

    /// A developer-facing error message, in English.
    pub message: String,

    /// The id assigned by the service to the failed request.
    pub request_id: Option<String>,

    /// The endpoint that handled the request.
    pub host_id: Option<String>,

    /// A link to the troubleshooting console for this error.
    pub recommend: Option<String>,

    /// Present when the request is denied by an access policy.
    pub access_denied_detail: Option<serde_json::Value>,
}

impl Status {
    /// Sets the value for [code][Status::code].
    pub fn set_code<T: Into<String>>(mut self, v: T) -> Self {
        self.code = v.into();
        self
    }

    /// Sets the value for [message][Status::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value for [request_id][Status::request_id].
    pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
        self.request_id = Some(v.into());
        self
    }

    /// Sets the value for [host_id][Status::host_id].
    pub fn set_host_id<T: Into<String>>(mut self, v: T) -> Self {
        self.host_id = Some(v.into());
        self
    }

    /// Sets the value for [recommend][Status::recommend].
    pub fn set_recommend<T: Into<String>>(mut self, v: T) -> Self {
        self.recommend = Some(v.into());
        self
    }
}

// The wire format requires a code, anything without one is not a service
// error payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ErrorWrapper {
    code: String,
    #[serde(default)]
    message: String,
    request_id: Option<String>,
    host_id: Option<String>,
    recommend: Option<String>,
    access_denied_detail: Option<serde_json::Value>,
}

impl TryFrom<&bytes::Bytes> for Status {
    type Error = Error;

    fn try_from(value: &bytes::Bytes) -> Result<Self, Self::Error> {
        let wrapper = serde_json::from_slice::<ErrorWrapper>(value).map_err(Error::deser)?;
        Ok(Status {
            code: wrapper.code,
            message: wrapper.message,
            request_id: wrapper.request_id,
            host_id: wrapper.host_id,
            recommend: wrapper.recommend,
            access_denied_detail: wrapper.access_denied_detail,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE_PAYLOAD: &[u8] = br###"{
        "RequestId": "54B48E3D-DF70-471B-AA93-08E683A1B457",
        "HostId": "nlb.cn-hangzhou.aliyuncs.com",
        "Code": "ResourceNotFound.loadBalancer",
        "Message": "The specified resource of nlb-123 is not found.",
        "Recommend": "https://api.aliyun.com/troubleshoot?q=ResourceNotFound.loadBalancer"
    }"###;

    #[test]
    fn try_from_bytes() -> anyhow::Result<()> {
        let got = Status::try_from(&bytes::Bytes::from_static(SAMPLE_PAYLOAD))?;
        let want = Status::default()
            .set_code("ResourceNotFound.loadBalancer")
            .set_message("The specified resource of nlb-123 is not found.")
            .set_request_id("54B48E3D-DF70-471B-AA93-08E683A1B457")
            .set_host_id("nlb.cn-hangzhou.aliyuncs.com")
            .set_recommend("https://api.aliyun.com/troubleshoot?q=ResourceNotFound.loadBalancer");
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn try_from_access_denied() -> anyhow::Result<()> {
        let payload = serde_json::json!({
            "RequestId": "r-1",
            "Code": "Forbidden.NoPermission",
            "Message": "not allowed",
            "AccessDeniedDetail": {"PolicyType": "AccountLevelIdentityBasedPolicy"}
        });
        let got = Status::try_from(&bytes::Bytes::from(payload.to_string()))?;
        assert_eq!(got.code, "Forbidden.NoPermission");
        assert_eq!(
            got.access_denied_detail,
            Some(serde_json::json!({"PolicyType": "AccountLevelIdentityBasedPolicy"}))
        );
        assert_eq!(got.host_id, None);
        Ok(())
    }

    #[test]
    fn try_from_missing_code() {
        let payload = bytes::Bytes::from_static(br#"{"RequestId": "r-1", "Message": "m"}"#);
        let got = Status::try_from(&payload);
        assert!(matches!(&got, Err(e) if e.is_deserialization()), "{got:?}");
    }

    #[test]
    fn try_from_not_json() {
        let payload = bytes::Bytes::from_static(b"<html>bad gateway</html>");
        let got = Status::try_from(&payload);
        assert!(matches!(&got, Err(e) if e.is_deserialization()), "{got:?}");
    }

    #[test]
    fn serialize_pascal_case() -> anyhow::Result<()> {
        let status = Status::default().set_code("C").set_message("M").set_request_id("R");
        let got = serde_json::to_value(&status)?;
        assert_eq!(got["Code"], "C");
        assert_eq!(got["Message"], "M");
        assert_eq!(got["RequestId"], "R");
        Ok(())
    }
}
