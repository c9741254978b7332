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

mod recording_transport;

use discovery::{HttpMethod, MethodDescriptor, ParameterDescriptor, ParameterType};
use futures::StreamExt;
use gax::executor::RequestExecutor;
use gax::options::{ClientConfig, RequestOptions};
use gax::paginator::{Collection, PageableResponse};
use gax::parameter_bag::ParameterBag;
use gax::retry_policy::NeverRetry;
use gax::transport::HttpResponse;
use pretty_assertions::assert_eq;
use recording_transport::*;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

type Result<T> = anyhow::Result<T>;

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
struct PostList {
    items: Option<Vec<Post>>,
    next_page_token: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
struct Post {
    id: Option<String>,
}

impl Collection for PostList {
    type Item = Post;
    fn items(self) -> Vec<Post> {
        self.items.unwrap_or_default()
    }
}

impl PageableResponse for PostList {
    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}

fn posts_list() -> MethodDescriptor {
    MethodDescriptor::new("blogger.posts.list", HttpMethod::Get, "blogs/{blogId}/posts")
        .with_parameter(ParameterDescriptor::path("blogId"))
        .with_parameter(
            ParameterDescriptor::query("maxResults", ParameterType::Integer).with_format("uint32"),
        )
        .with_parameter(ParameterDescriptor::query("pageToken", ParameterType::String))
}

fn page(ids: &[&str], next: Option<&str>) -> HttpResponse {
    success(json!({
        "items": ids.iter().map(|id| json!({"id": id})).collect::<Vec<_>>(),
        "nextPageToken": next,
    }))
}

fn executor(transport: Arc<RecordingTransport>) -> RequestExecutor {
    let config = ClientConfig {
        transport: Some(transport),
        retry_policy: Some(Arc::new(NeverRetry)),
        ..Default::default()
    };
    RequestExecutor::new(config, "https://www.googleapis.com/blogger/v3/")
}

fn page_tokens(transport: &RecordingTransport) -> Vec<Option<String>> {
    transport
        .requests()
        .iter()
        .map(|r| {
            r.query_pairs()
                .into_iter()
                .find(|(k, _)| k == "pageToken")
                .map(|(_, v)| v)
        })
        .collect()
}

#[tokio::test]
async fn three_pages() -> Result<()> {
    let transport = RecordingTransport::new([
        page(&["p1", "p2"], Some("t1")),
        page(&["p3"], Some("t2")),
        page(&["p4"], None),
    ]);
    let executor = executor(transport.clone());
    let all = executor
        .execute_all_pages::<PostList>(
            &posts_list(),
            ParameterBag::new().with("blogId", "123"),
            ParameterBag::new().with("maxResults", 2_u32),
            RequestOptions::default(),
        )
        .await;
    assert!(all.is_complete(), "{all:?}");
    let ids: Vec<String> = all.items().into_iter().filter_map(|p| p.id).collect();
    assert_eq!(ids, vec!["p1", "p2", "p3", "p4"]);

    assert_eq!(transport.call_count(), 3);
    assert_eq!(
        page_tokens(&transport),
        vec![None, Some("t1".to_string()), Some("t2".to_string())]
    );
    for request in transport.requests() {
        assert!(
            request
                .query_pairs()
                .contains(&("maxResults".to_string(), "2".to_string())),
            "{request:?}"
        );
    }
    Ok(())
}

#[tokio::test]
async fn failure_keeps_partial_pages() -> Result<()> {
    let transport = RecordingTransport::new([page(&["p1"], Some("t1")), not_found()]);
    let executor = executor(transport.clone());
    let all = executor
        .execute_all_pages::<PostList>(
            &posts_list(),
            ParameterBag::new().with("blogId", "123"),
            ParameterBag::new(),
            RequestOptions::default(),
        )
        .await;
    assert!(!all.is_complete());
    assert_eq!(all.pages.len(), 1);
    let status = all.error.as_ref().and_then(|e| e.http_status_code());
    assert_eq!(status, Some(404));
    assert_eq!(transport.call_count(), 2);
    Ok(())
}

#[tokio::test]
async fn start_token_and_max_pages() -> Result<()> {
    let transport = RecordingTransport::new([
        page(&["p3"], Some("t2")),
        page(&["p4"], Some("t3")),
        page(&["p5"], None),
    ]);
    let executor = executor(transport.clone());
    let mut options = RequestOptions::default();
    options.set_max_pages(2);
    let pages = executor
        .execute_all_pages::<PostList>(
            &posts_list(),
            ParameterBag::new().with("blogId", "123"),
            ParameterBag::new().with("pageToken", "t1"),
            options,
        )
        .await
        .into_result()?;
    assert_eq!(pages.len(), 2);
    assert_eq!(
        page_tokens(&transport),
        vec![Some("t1".to_string()), Some("t2".to_string())]
    );
    Ok(())
}

#[tokio::test]
async fn stream_items() -> Result<()> {
    let transport = RecordingTransport::new([page(&["p1"], Some("t1")), page(&["p2"], None)]);
    let executor = executor(transport.clone());
    let mut items = executor
        .paginate::<PostList>(
            &posts_list(),
            ParameterBag::new().with("blogId", "123"),
            ParameterBag::new(),
            RequestOptions::default(),
        )
        .items()
        .boxed_local();
    let mut ids = Vec::new();
    while let Some(item) = items.next().await {
        ids.extend(item?.id);
    }
    assert_eq!(ids, vec!["p1", "p2"]);
    Ok(())
}
