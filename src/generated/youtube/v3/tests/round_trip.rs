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

//! Every model type decodes a fully populated document and encodes it back
//! unchanged.

use pretty_assertions::assert_eq;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Value, json};
use test_case::test_case;
use youtube_v3::model::*;

type TestResult = anyhow::Result<()>;
type Check = fn(Value) -> TestResult;

fn round_trip<T>(fixture: Value) -> TestResult
where
    T: DeserializeOwned + Serialize + PartialEq + std::fmt::Debug,
{
    let dto: T = serde_json::from_value(fixture.clone())?;
    let encoded = serde_json::to_value(&dto)?;
    assert_eq!(encoded, fixture, "{}", std::any::type_name::<T>());
    let decoded: T = serde_json::from_value(encoded)?;
    assert_eq!(decoded, dto);
    Ok(())
}

#[test_case(round_trip::<Channel>, channel(); "channel")]
#[test_case(round_trip::<ChannelListResponse>, channel_list(); "channel list response")]
#[test_case(round_trip::<ChannelSnippet>, channel_snippet(); "channel snippet")]
#[test_case(round_trip::<ChannelStatistics>, channel_statistics(); "channel statistics")]
#[test_case(round_trip::<Comment>, comment(); "comment")]
#[test_case(round_trip::<CommentListResponse>, comment_list(); "comment list response")]
#[test_case(round_trip::<CommentSnippet>, comment_snippet(); "comment snippet")]
#[test_case(round_trip::<CommentSnippetAuthorChannelId>, json!({"value": "UC-author"}); "comment snippet author channel id")]
#[test_case(round_trip::<CommentThread>, comment_thread(); "comment thread")]
#[test_case(round_trip::<CommentThreadListResponse>, comment_thread_list(); "comment thread list response")]
#[test_case(round_trip::<CommentThreadReplies>, json!({"comments": [comment()]}); "comment thread replies")]
#[test_case(round_trip::<CommentThreadSnippet>, comment_thread_snippet(); "comment thread snippet")]
#[test_case(round_trip::<PageInfo>, page_info(); "page info")]
#[test_case(round_trip::<Thumbnail>, thumbnail(88); "thumbnail")]
#[test_case(round_trip::<ThumbnailDetails>, thumbnails(); "thumbnail details")]
fn every_model(check: Check, fixture: Value) -> TestResult {
    check(fixture)
}

#[test]
fn statistics_above_i64() -> TestResult {
    let fixture = json!({
        "hiddenSubscriberCount": false,
        "subscriberCount": "18446744073709551615",
        "videoCount": "0",
        "viewCount": "9223372036854775808",
    });
    round_trip::<ChannelStatistics>(fixture.clone())?;
    let stats: ChannelStatistics = serde_json::from_value(fixture)?;
    assert_eq!(stats.subscriber_count, Some(u64::MAX));
    assert_eq!(stats.view_count, Some(1_u64 << 63));
    Ok(())
}

fn thumbnail(size: u32) -> Value {
    json!({
        "height": size,
        "url": format!("https://yt3.ggpht.com/photo-{size}.jpg"),
        "width": size,
    })
}

fn thumbnails() -> Value {
    json!({"default": thumbnail(88), "high": thumbnail(800), "medium": thumbnail(240)})
}

fn page_info() -> Value {
    json!({"resultsPerPage": 5, "totalResults": 1234})
}

fn channel_snippet() -> Value {
    json!({
        "country": "US",
        "customUrl": "@rustlang",
        "description": "Videos about Rust.",
        "publishedAt": "2015-05-15T00:00:00Z",
        "thumbnails": thumbnails(),
        "title": "Rust",
    })
}

fn channel_statistics() -> Value {
    json!({
        "hiddenSubscriberCount": false,
        "subscriberCount": "123456",
        "videoCount": "789",
        "viewCount": "12345678901",
    })
}

fn channel() -> Value {
    json!({
        "etag": "etag-channel",
        "id": "UC-channel",
        "kind": "youtube#channel",
        "snippet": channel_snippet(),
        "statistics": channel_statistics(),
    })
}

fn channel_list() -> Value {
    json!({
        "etag": "etag-channels",
        "items": [channel()],
        "kind": "youtube#channelListResponse",
        "nextPageToken": "next",
        "pageInfo": page_info(),
        "prevPageToken": "prev",
    })
}

fn comment_snippet() -> Value {
    json!({
        "authorChannelId": {"value": "UC-author"},
        "authorDisplayName": "Sam",
        "canRate": true,
        "channelId": "UC-channel",
        "likeCount": 42,
        "moderationStatus": "published",
        "parentId": "thread-1",
        "publishedAt": "2024-04-01T00:00:00Z",
        "textDisplay": "Nice video!",
        "textOriginal": "Nice video!",
        "updatedAt": "2024-04-01T00:00:01Z",
        "videoId": "video-1",
        "viewerRating": "none",
    })
}

fn comment() -> Value {
    json!({
        "etag": "etag-comment",
        "id": "comment-1",
        "kind": "youtube#comment",
        "snippet": comment_snippet(),
    })
}

fn comment_list() -> Value {
    json!({
        "etag": "etag-comments",
        "items": [comment()],
        "kind": "youtube#commentListResponse",
        "nextPageToken": "next",
        "pageInfo": page_info(),
    })
}

fn comment_thread_snippet() -> Value {
    json!({
        "canReply": true,
        "channelId": "UC-channel",
        "isPublic": true,
        "topLevelComment": comment(),
        "totalReplyCount": 1,
        "videoId": "video-1",
    })
}

fn comment_thread() -> Value {
    json!({
        "etag": "etag-thread",
        "id": "thread-1",
        "kind": "youtube#commentThread",
        "replies": {"comments": [comment()]},
        "snippet": comment_thread_snippet(),
    })
}

fn comment_thread_list() -> Value {
    json!({
        "etag": "etag-threads",
        "items": [comment_thread()],
        "kind": "youtube#commentThreadListResponse",
        "nextPageToken": "next",
        "pageInfo": page_info(),
    })
}
