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

use blogger_v3::model::{BlogList, Pageviews, Post, PostList, PostReplies};
use gax::paginator::{Collection, PageableResponse};
use pretty_assertions::assert_eq;
use serde_json::json;

type TestResult = anyhow::Result<()>;

#[test]
fn int64_fields_are_strings() -> TestResult {
    let input = json!({"totalItems": "12345678901", "selfLink": "https://example.com/r"});
    let replies: PostReplies = serde_json::from_value(input.clone())?;
    assert_eq!(replies.total_items, Some(12345678901));
    assert_eq!(serde_json::to_value(&replies)?, input);
    Ok(())
}

#[test]
fn nested_records() -> TestResult {
    let input = json!({
        "blogId": "123",
        "counts": [{"count": "42", "timeRange": "SEVEN_DAYS"}],
        "kind": "blogger#page_views",
    });
    let views: Pageviews = serde_json::from_value(input.clone())?;
    assert_eq!(views.blog_id.as_deref(), Some("123"));
    let counts = views.counts.clone().unwrap_or_default();
    assert_eq!(counts[0].count, Some(42));
    assert_eq!(counts[0].time_range.as_deref(), Some("SEVEN_DAYS"));
    assert_eq!(serde_json::to_value(&views)?, input);
    Ok(())
}

#[test]
fn unset_fields_are_skipped() -> TestResult {
    let post = Post {
        title: Some("Hello".into()),
        labels: Some(vec!["a".into(), "b".into()]),
        ..Default::default()
    };
    assert_eq!(
        serde_json::to_value(&post)?,
        json!({"title": "Hello", "labels": ["a", "b"]})
    );
    Ok(())
}

#[test]
fn unknown_fields_round_trip() -> TestResult {
    let input = json!({"id": "456", "titleLink": "https://example.com", "futureField": {"a": 1}});
    let post: Post = serde_json::from_value(input.clone())?;
    assert_eq!(post.title_link.as_deref(), Some("https://example.com"));
    assert_eq!(post.unknown_fields.get("futureField"), Some(&json!({"a": 1})));
    assert_eq!(serde_json::to_value(&post)?, input);
    Ok(())
}

#[test]
fn missing_fields_use_defaults() -> TestResult {
    let post: Post = serde_json::from_value(json!({}))?;
    assert_eq!(post, Post::default());
    Ok(())
}

#[test]
fn page_items() -> TestResult {
    let list: PostList = serde_json::from_value(json!({
        "items": [{"id": "1"}, {"id": "2"}],
        "nextPageToken": "next",
    }))?;
    assert_eq!(list.next_page_token(), "next");
    let ids: Vec<_> = list.items().into_iter().filter_map(|p| p.id).collect();
    assert_eq!(ids, vec!["1", "2"]);

    let empty = PostList::default();
    assert_eq!(empty.next_page_token(), "");
    assert!(empty.items().is_empty());
    Ok(())
}

fn item_count<C: Collection>(c: C) -> usize {
    c.items().len()
}

#[test]
fn collection_items() -> TestResult {
    let blogs: BlogList = serde_json::from_value(json!({
        "kind": "blogger#blogList",
        "items": [{"id": "b1", "name": "One"}, {"id": "b2", "name": "Two"}],
    }))?;
    assert_eq!(item_count(blogs.clone()), 2);
    let names: Vec<_> = blogs.items().into_iter().filter_map(|b| b.name).collect();
    assert_eq!(names, vec!["One", "Two"]);
    assert_eq!(item_count(BlogList::default()), 0);

    let replies: PostReplies = serde_json::from_value(json!({
        "totalItems": "1",
        "items": [{"id": "c1"}],
    }))?;
    assert_eq!(item_count(replies), 1);
    Ok(())
}
