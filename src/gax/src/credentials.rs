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

//! Types to authenticate requests.
//!
//! The services authenticate each request using a signature computed from the
//! request contents and an AccessKey pair, or a security token. The client
//! libraries delegate this computation to a [CredentialsProvider]: before each
//! request is sent, the provider receives a [SigningRequest] with the request
//! contents, and returns the headers to attach.
//!
//! The client libraries only ship [anonymous()] credentials, which attach no
//! headers. Applications plug in their own providers with
//! [ClientBuilder::with_credentials][crate::client_builder::ClientBuilder::with_credentials].
//!
//! # Example
//! ```
//! use alibabacloud_gax::credentials::{Credentials, CredentialsProvider, SigningRequest};
//! use alibabacloud_gax::error::CredentialsError;
//! use http::{HeaderMap, HeaderValue};
//!
//! #[derive(Debug)]
//! struct StsToken(String);
//! impl CredentialsProvider for StsToken {
//!     async fn headers(&self, _request: &SigningRequest) -> Result<HeaderMap, CredentialsError> {
//!         let mut headers = HeaderMap::new();
//!         let value = HeaderValue::from_str(&self.0)
//!             .map_err(|e| CredentialsError::new(false, e))?;
//!         headers.insert("x-acs-security-token", value);
//!         Ok(headers)
//!     }
//! }
//! let credentials = Credentials::from(StsToken("test-only".to_string()));
//! ```

use crate::error::CredentialsError;
use http::HeaderMap;
use std::collections::BTreeMap;
use std::sync::Arc;

/// The result type for credentials providers.
pub type Result<T> = std::result::Result<T, CredentialsError>;

/// The credentials used by a client.
///
/// A cheaply cloneable wrapper around a [CredentialsProvider].
#[derive(Clone, Debug)]
pub struct Credentials {
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: CredentialsProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Computes the authentication headers for `request`.
    pub async fn headers(&self, request: &SigningRequest) -> Result<HeaderMap> {
        self.inner.headers(request).await
    }
}

impl Default for Credentials {
    fn default() -> Self {
        anonymous()
    }
}

/// Returns credentials that attach no headers.
///
/// Useful for local emulators and for tests.
///
/// # Example
/// ```
/// # use alibabacloud_gax::credentials::{anonymous, SigningRequest};
/// # tokio_test::block_on(async {
/// let credentials = anonymous();
/// let request = SigningRequest::new(http::Method::GET, "/");
/// let headers = credentials.headers(&request).await?;
/// assert!(headers.is_empty());
/// # Ok::<(), alibabacloud_gax::error::CredentialsError>(()) });
/// ```
pub fn anonymous() -> Credentials {
    Credentials::from(Anonymous)
}

#[derive(Debug)]
struct Anonymous;

impl CredentialsProvider for Anonymous {
    async fn headers(&self, _request: &SigningRequest) -> Result<HeaderMap> {
        Ok(HeaderMap::new())
    }
}

/// The contents of a request, as seen by a [CredentialsProvider].
///
/// Signatures cover the HTTP method, the path, the `x-acs-*` headers, and all
/// the request parameters. The parameters are sorted by name.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct SigningRequest {
    /// The HTTP method.
    pub method: http::Method,
    /// The request path, `/` for RPC-style operations.
    pub pathname: String,
    /// The headers computed by the client library, before authentication.
    pub headers: HeaderMap,
    /// The query parameters.
    pub query: BTreeMap<String, String>,
    /// The body parameters.
    pub body: BTreeMap<String, String>,
}

impl SigningRequest {
    /// Creates a request without headers or parameters.
    pub fn new<P: Into<String>>(method: http::Method, pathname: P) -> Self {
        Self {
            method,
            pathname: pathname.into(),
            headers: HeaderMap::new(),
            query: BTreeMap::new(),
            body: BTreeMap::new(),
        }
    }

    /// Sets the headers.
    pub fn set_headers(mut self, v: HeaderMap) -> Self {
        self.headers = v;
        self
    }

    /// Sets the query parameters.
    pub fn set_query(mut self, v: BTreeMap<String, String>) -> Self {
        self.query = v;
        self
    }

    /// Sets the body parameters.
    pub fn set_body(mut self, v: BTreeMap<String, String>) -> Self {
        self.body = v;
        self
    }
}

/// Implementations of this trait compute the authentication headers for
/// a request.
///
/// # Notes
///
/// Application developers may use this trait, along with
/// [Credentials::from()], to plug in a signer, or to mock the credentials in
/// tests.
pub trait CredentialsProvider: std::fmt::Debug {
    /// Asynchronously computes the headers to attach to `request`.
    ///
    /// The implementation may refresh security tokens as needed.
    fn headers(&self, request: &SigningRequest) -> impl Future<Output = Result<HeaderMap>> + Send;
}

pub(crate) mod dynamic {
    use super::{HeaderMap, Result, SigningRequest};

    /// A dyn-compatible, crate-private version of `CredentialsProvider`.
    #[async_trait::async_trait]
    pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
        async fn headers(&self, request: &SigningRequest) -> Result<HeaderMap>;
    }

    /// The public CredentialsProvider implements the dyn-compatible one.
    #[async_trait::async_trait]
    impl<T> CredentialsProvider for T
    where
        T: super::CredentialsProvider + Send + Sync,
    {
        async fn headers(&self, request: &SigningRequest) -> Result<HeaderMap> {
            T::headers(self, request).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[derive(Debug)]
    struct Echo;
    impl CredentialsProvider for Echo {
        async fn headers(&self, request: &SigningRequest) -> Result<HeaderMap> {
            let count = request.query.len() + request.body.len();
            let mut headers = HeaderMap::new();
            let value = HeaderValue::from_str(&format!("{}:{count}", request.pathname))
                .map_err(|e| CredentialsError::new(false, e))?;
            headers.insert("x-test-signature", value);
            Ok(headers)
        }
    }

    #[derive(Debug)]
    struct Failing;
    impl CredentialsProvider for Failing {
        async fn headers(&self, _request: &SigningRequest) -> Result<HeaderMap> {
            Err(CredentialsError::from_msg(true, "test-only"))
        }
    }

    #[tokio::test]
    async fn anonymous_is_empty() -> anyhow::Result<()> {
        let credentials = Credentials::default();
        let headers = credentials
            .headers(&SigningRequest::new(http::Method::POST, "/"))
            .await?;
        assert!(headers.is_empty(), "{headers:?}");
        Ok(())
    }

    #[tokio::test]
    async fn custom_provider() -> anyhow::Result<()> {
        let credentials = Credentials::from(Echo);
        let request = SigningRequest::new(http::Method::POST, "/")
            .set_query(BTreeMap::from([("A".to_string(), "1".to_string())]))
            .set_body(BTreeMap::from([
                ("B".to_string(), "2".to_string()),
                ("C".to_string(), "3".to_string()),
            ]));
        let headers = credentials.headers(&request).await?;
        assert_eq!(
            headers.get("x-test-signature"),
            Some(&HeaderValue::from_static("/:3"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn failing_provider() {
        let credentials = Credentials::from(Failing);
        let got = credentials
            .headers(&SigningRequest::new(http::Method::GET, "/"))
            .await;
        assert!(matches!(&got, Err(e) if e.is_transient()), "{got:?}");
    }
}
