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

//! Static metadata describing each service operation.
//!
//! Generated service crates declare one [OperationDescriptor] constant per
//! operation. The descriptors are never derived from caller input.

use crate::shrink::ShrinkStyle;

/// The HTTP method used by an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl From<Method> for http::Method {
    fn from(value: Method) -> Self {
        match value {
            Method::Get => http::Method::GET,
            Method::Post => http::Method::POST,
            Method::Put => http::Method::PUT,
            Method::Delete => http::Method::DELETE,
        }
    }
}

/// How the body parameters are encoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyType {
    /// `application/x-www-form-urlencoded`
    FormData,
    /// `application/json`
    Json,
}

/// Where the request parameters are placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParameterLocation {
    Query,
    Body,
}

/// A field encoded as a single string parameter instead of being flattened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShrinkField {
    /// The wire name of the field, for example `ZoneMappings`.
    pub field: &'static str,
    pub style: ShrinkStyle,
}

/// Describes a single operation of a service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperationDescriptor {
    /// The action name, sent in the `x-acs-action` header.
    pub action: &'static str,
    /// The API version, sent in the `x-acs-version` header.
    pub version: &'static str,
    /// Either `HTTPS` or `HTTP`.
    pub protocol: &'static str,
    pub method: Method,
    pub pathname: &'static str,
    /// The authentication type, `AK` for AccessKey based signatures.
    pub auth_type: &'static str,
    /// The request style. The transport only implements `RPC`, where all
    /// parameters go to a single path.
    pub style: &'static str,
    pub req_body_type: BodyType,
    /// The response encoding, always `json` for the services in this
    /// workspace.
    pub body_type: &'static str,
    pub location: ParameterLocation,
    pub shrink: &'static [ShrinkField],
}

impl OperationDescriptor {
    /// Creates a descriptor with the defaults used by RPC-style operations.
    ///
    /// `GET` operations send their parameters in the query string, all other
    /// methods send them as a form-encoded body.
    pub const fn rpc(action: &'static str, version: &'static str, method: Method) -> Self {
        let location = match method {
            Method::Get => ParameterLocation::Query,
            _ => ParameterLocation::Body,
        };
        Self {
            action,
            version,
            protocol: "HTTPS",
            method,
            pathname: "/",
            auth_type: "AK",
            style: "RPC",
            req_body_type: BodyType::FormData,
            body_type: "json",
            location,
            shrink: &[],
        }
    }

    /// Declares the fields encoded with the shrink encoder.
    pub const fn with_shrink(mut self, shrink: &'static [ShrinkField]) -> Self {
        self.shrink = shrink;
        self
    }

    /// Changes how the body parameters are encoded.
    pub const fn with_req_body_type(mut self, v: BodyType) -> Self {
        self.req_body_type = v;
        self
    }

    /// Returns the shrink style for `field`, if the field is shrink-encoded.
    pub fn shrink_style(&self, field: &str) -> Option<ShrinkStyle> {
        self.shrink
            .iter()
            .find(|s| s.field == field)
            .map(|s| s.style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST: OperationDescriptor =
        OperationDescriptor::rpc("ListThings", "2022-04-30", Method::Get).with_shrink(&[
            ShrinkField {
                field: "Tag",
                style: ShrinkStyle::Json,
            },
        ]);
    const CREATE: OperationDescriptor =
        OperationDescriptor::rpc("CreateThing", "2022-04-30", Method::Post);

    #[test]
    fn rpc_defaults() {
        assert_eq!(CREATE.protocol, "HTTPS");
        assert_eq!(CREATE.pathname, "/");
        assert_eq!(CREATE.auth_type, "AK");
        assert_eq!(CREATE.style, "RPC");
        assert_eq!(CREATE.req_body_type, BodyType::FormData);
        assert_eq!(CREATE.body_type, "json");
        assert_eq!(CREATE.location, ParameterLocation::Body);
        assert!(CREATE.shrink.is_empty());

        assert_eq!(LIST.location, ParameterLocation::Query);
        assert_eq!(LIST.method.as_str(), "GET");
    }

    #[test]
    fn shrink_style() {
        assert_eq!(LIST.shrink_style("Tag"), Some(ShrinkStyle::Json));
        assert_eq!(LIST.shrink_style("ZoneMappings"), None);
        assert_eq!(CREATE.shrink_style("Tag"), None);
    }

    #[test]
    fn http_method() {
        assert_eq!(http::Method::from(Method::Get), http::Method::GET);
        assert_eq!(http::Method::from(Method::Post), http::Method::POST);
        assert_eq!(http::Method::from(Method::Put), http::Method::PUT);
        assert_eq!(http::Method::from(Method::Delete), http::Method::DELETE);
    }
}
