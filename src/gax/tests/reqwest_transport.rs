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

//! These tests run the executor against a local HTTP server, using the
//! default transport.

use discovery::{HttpMethod, MethodDescriptor, ParameterDescriptor, ParameterType};
use gax::credentials::{API_KEY_HEADER, ApiKey};
use gax::executor::{DEFAULT_USER_AGENT, RequestExecutor};
use gax::exponential_backoff::ExponentialBackoffBuilder;
use gax::options::{ClientConfig, RequestOptions};
use gax::parameter_bag::ParameterBag;
use httptest::{Expectation, Server, matchers::*, responders::*};
use serde_json::{Value, json};
use std::time::Duration;

type Result<T> = anyhow::Result<T>;

fn blogs_get() -> MethodDescriptor {
    MethodDescriptor::new("blogger.blogs.get", HttpMethod::Get, "blogs/{blogId}")
        .with_parameter(ParameterDescriptor::path("blogId"))
        .with_parameter(ParameterDescriptor::query("view", ParameterType::String))
}

fn posts_insert() -> MethodDescriptor {
    MethodDescriptor::new("blogger.posts.insert", HttpMethod::Post, "blogs/{blogId}/posts")
        .with_parameter(ParameterDescriptor::path("blogId"))
        .with_parameter(ParameterDescriptor::query("isDraft", ParameterType::Boolean))
}

fn test_config(server: &Server) -> Result<ClientConfig> {
    Ok(ClientConfig {
        endpoint: Some(format!("http://{}/blogger/v3/", server.addr())),
        backoff_policy: Some(std::sync::Arc::new(
            ExponentialBackoffBuilder::new()
                .with_initial_delay(Duration::from_millis(1))
                .with_maximum_delay(Duration::from_millis(5))
                .build()?,
        )),
        ..Default::default()
    })
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn get_with_query() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/blogger/v3/blogs/123"),
            request::query(url_decoded(contains(("view", "ADMIN")))),
            request::headers(contains(("user-agent", DEFAULT_USER_AGENT))),
        ])
        .respond_with(json_encoded(json!({"id": "123", "name": "My Blog"}))),
    );

    let executor = RequestExecutor::new(test_config(&server)?, "https://unused.example.com/");
    let response: Value = executor
        .execute(
            &blogs_get(),
            ParameterBag::new().with("blogId", "123"),
            ParameterBag::new().with("view", "ADMIN"),
            RequestOptions::default(),
        )
        .await?;
    assert_eq!(response, json!({"id": "123", "name": "My Blog"}));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn post_with_body_and_key() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/blogger/v3/blogs/123/posts"),
            request::query(url_decoded(contains(("isDraft", "true")))),
            request::headers(contains((API_KEY_HEADER, "test-only-key"))),
            request::headers(contains(("content-type", "application/json"))),
            request::body(json_decoded(eq(json!({"title": "Hello"})))),
        ])
        .respond_with(json_encoded(json!({"id": "p1", "title": "Hello"}))),
    );

    let config = ClientConfig {
        credentials: Some(ApiKey::new("test-only-key").into()),
        ..test_config(&server)?
    };
    let executor = RequestExecutor::new(config, "https://unused.example.com/");
    let response: Value = executor
        .execute_with_body(
            &posts_insert(),
            ParameterBag::new().with("blogId", "123"),
            ParameterBag::new().with("isDraft", true),
            &json!({"title": "Hello"}),
            RequestOptions::default(),
        )
        .await?;
    assert_eq!(response["id"], "p1");
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn not_found_payload() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/blogger/v3/blogs/404"))
            .times(1)
            .respond_with(
                status_code(404)
                    .insert_header("content-type", "application/json")
                    .body(
                        json!({"error": {
                            "code": 404,
                            "message": "Blog not found",
                            "status": "NOT_FOUND",
                        }})
                        .to_string(),
                    ),
            ),
    );

    let executor = RequestExecutor::new(test_config(&server)?, "https://unused.example.com/");
    let err = executor
        .execute::<Value>(
            &blogs_get(),
            ParameterBag::new().with("blogId", "404"),
            ParameterBag::new(),
            RequestOptions::default(),
        )
        .await
        .expect_err("the server returns 404");
    assert_eq!(err.http_status_code(), Some(404));
    let payload = err.api_error().expect("the error has a payload");
    assert_eq!(payload.code, 404);
    assert_eq!(payload.message, "Blog not found");
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn transient_then_success() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/blogger/v3/blogs/123"))
            .times(3)
            .respond_with(cycle![
                status_code(503).body("try-again"),
                status_code(503).body("try-again"),
                json_encoded(json!({"id": "123"})),
            ]),
    );

    let executor = RequestExecutor::new(test_config(&server)?, "https://unused.example.com/");
    let response: Value = executor
        .execute(
            &blogs_get(),
            ParameterBag::new().with("blogId", "123"),
            ParameterBag::new(),
            RequestOptions::default(),
        )
        .await?;
    assert_eq!(response, json!({"id": "123"}));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn attempt_timeout() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/blogger/v3/blogs/123"))
            .times(1..)
            .respond_with(delay_and_then(
                Duration::from_secs(2),
                json_encoded(json!({"id": "123"})),
            )),
    );

    let config = ClientConfig {
        attempt_timeout: Some(Duration::from_millis(50)),
        retry_policy: Some(std::sync::Arc::new(gax::retry_policy::NeverRetry)),
        ..test_config(&server)?
    };
    let executor = RequestExecutor::new(config, "https://unused.example.com/");
    let err = executor
        .execute::<Value>(
            &blogs_get(),
            ParameterBag::new().with("blogId", "123"),
            ParameterBag::new(),
            RequestOptions::default(),
        )
        .await
        .expect_err("the server is too slow");
    assert!(err.is_timeout(), "{err:?}");
    Ok(())
}
