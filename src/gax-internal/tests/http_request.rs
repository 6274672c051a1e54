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
    use gax::options::RequestOptions;
    use gaxi::operation::{BodyType, Method, OperationDescriptor, ShrinkField};
    use gaxi::shrink::ShrinkStyle;
    use gaxi::validation::{Validate, Validator};
    use serde_json::{Value, json};
    type Result = anyhow::Result<()>;

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, serde::Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct ThingRequest {
        thing_id: Option<String>,
        dry_run: Option<bool>,
        max_results: Option<i32>,
        tag: Option<Vec<Tag>>,
    }

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, serde::Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct Tag {
        key: Option<String>,
        value: Option<String>,
    }

    impl Validate for ThingRequest {
        fn check(&self, v: &mut Validator) {
            v.required("ThingId", &self.thing_id)
                .range("MaxResults", &self.max_results, 1, 100)
                .max_items("Tag", &self.tag, 20);
        }
    }

    static CREATE: OperationDescriptor =
        OperationDescriptor::rpc("CreateThing", "2022-04-30", Method::Post);
    static LIST: OperationDescriptor =
        OperationDescriptor::rpc("ListThings", "2022-04-30", Method::Get).with_shrink(&[
            ShrinkField {
                field: "Tag",
                style: ShrinkStyle::Json,
            },
        ]);
    static CREATE_JSON: OperationDescriptor =
        OperationDescriptor::rpc("CreateThing", "2022-04-30", Method::Post)
            .with_req_body_type(BodyType::Json);

    fn request() -> ThingRequest {
        ThingRequest {
            thing_id: Some("thing-123".into()),
            dry_run: Some(false),
            max_results: None,
            tag: Some(vec![Tag {
                key: Some("env".into()),
                value: Some("prod".into()),
            }]),
        }
    }

    #[tokio::test]
    async fn form_body() -> Result {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint).build().await?;

        let response = client
            .execute::<ThingRequest, Value>(&CREATE, &request(), RequestOptions::default())
            .await?;
        assert_eq!(response.status_code(), 200);
        let body = response.into_body();
        assert_eq!(body["Method"], json!("POST"));
        assert_eq!(body["Query"], json!({}));
        assert_eq!(
            body["Body"],
            json!({
                "DryRun": "false",
                "Tag.1.Key": "env",
                "Tag.1.Value": "prod",
                "ThingId": "thing-123",
            })
        );
        let headers = &body["Headers"];
        assert_eq!(headers["x-acs-action"], json!("CreateThing"));
        assert_eq!(headers["x-acs-version"], json!("2022-04-30"));
        assert_eq!(
            headers["content-type"],
            json!("application/x-www-form-urlencoded")
        );
        assert!(headers["x-acs-date"].is_string(), "{headers:?}");
        assert_eq!(body["RequestId"], headers["x-acs-signature-nonce"]);
        Ok(())
    }

    #[tokio::test]
    async fn json_body() -> Result {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint).build().await?;

        let response = client
            .execute::<ThingRequest, Value>(&CREATE_JSON, &request(), RequestOptions::default())
            .await?;
        let body = response.into_body();
        assert_eq!(body["Headers"]["content-type"], json!("application/json"));
        assert_eq!(body["Body"]["ThingId"], json!("thing-123"));
        assert_eq!(body["Body"]["Tag.1.Key"], json!("env"));
        Ok(())
    }

    #[tokio::test]
    async fn query_with_shrink() -> Result {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint).build().await?;

        let response = client
            .execute::<ThingRequest, Value>(&LIST, &request(), RequestOptions::default())
            .await?;
        let body = response.into_body();
        assert_eq!(body["Method"], json!("GET"));
        assert_eq!(body["Body"], json!({}));
        assert_eq!(
            body["Query"],
            json!({
                "DryRun": "false",
                "Tag": r#"[{"Key":"env","Value":"prod"}]"#,
                "ThingId": "thing-123",
            })
        );
        Ok(())
    }

    #[tokio::test]
    async fn validation_before_send() -> Result {
        // Nothing listens on this endpoint, the request must fail before any
        // network call.
        let client = echo_server::builder("http://127.0.0.1:1").build().await?;
        let request = ThingRequest {
            max_results: Some(0),
            ..Default::default()
        };
        let got = client
            .execute::<ThingRequest, Value>(&CREATE, &request, RequestOptions::default())
            .await;
        let err = got.unwrap_err();
        assert!(err.is_validation(), "{err:?}");
        let message = err.to_string();
        assert!(message.contains("ThingId"), "{message}");
        assert!(message.contains("MaxResults"), "{message}");
        Ok(())
    }

    #[tokio::test]
    async fn no_content() -> Result {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint).build().await?;
        static NO_CONTENT: OperationDescriptor =
            OperationDescriptor::rpc("NoContent", "2022-04-30", Method::Post);

        let response = client
            .execute::<ThingRequest, Value>(&NO_CONTENT, &request(), RequestOptions::default())
            .await?;
        assert_eq!(response.status_code(), 204);
        assert_eq!(response.into_body(), Value::Null);
        Ok(())
    }

    #[tokio::test]
    async fn user_agent() -> Result {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint).build().await?;

        let mut options = RequestOptions::default();
        options.set_user_agent("test-only/1.2.3");
        let response = client
            .execute::<ThingRequest, Value>(&CREATE, &request(), options)
            .await?;
        let body = response.into_body();
        let got = body["Headers"]["user-agent"].as_str().unwrap_or_default();
        assert!(got.starts_with("AlibabaCloud ("), "{got}");
        assert!(got.contains(" echo/0.0.0"), "{got}");
        assert!(got.ends_with(" test-only/1.2.3"), "{got}");
        Ok(())
    }
}
