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
//
// Code generated by discogen. DO NOT EDIT.

//! The data types used by the YouTube Data API v3.

/// A *channel* resource contains information about a YouTube channel.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Channel {
    /// Etag of this resource.
    pub etag: Option<String>,
    /// The ID that YouTube uses to uniquely identify the channel.
    pub id: Option<String>,
    /// Identifies what kind of resource this is. Value: the fixed string
    /// "youtube#channel".
    pub kind: Option<String>,
    /// The snippet object contains basic details about the channel, such as its
    /// title, description, and thumbnail images.
    pub snippet: Option<ChannelSnippet>,
    /// The statistics object encapsulates statistics for the channel.
    pub statistics: Option<ChannelStatistics>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChannelListResponse {
    /// Etag of this resource.
    pub etag: Option<String>,
    pub items: Option<Vec<Channel>>,
    pub kind: Option<String>,
    /// The token that can be used as the value of the pageToken parameter to
    /// retrieve the next page in the result set.
    pub next_page_token: Option<String>,
    /// General pagination information.
    pub page_info: Option<PageInfo>,
    /// The token that can be used as the value of the pageToken parameter to
    /// retrieve the previous page in the result set.
    pub prev_page_token: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl gax::paginator::Collection for ChannelListResponse {
    type Item = Channel;

    fn items(self) -> Vec<Self::Item> {
        self.items.unwrap_or_default()
    }
}

impl gax::paginator::PageableResponse for ChannelListResponse {
    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}

/// Basic details about a channel, including title, description and thumbnails.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChannelSnippet {
    /// The country of the channel.
    pub country: Option<String>,
    /// The custom url of the channel.
    pub custom_url: Option<String>,
    /// The description of the channel.
    pub description: Option<String>,
    /// The date and time that the channel was created.
    pub published_at: Option<String>,
    /// A map of thumbnail images associated with the channel.
    pub thumbnails: Option<ThumbnailDetails>,
    /// The channel's title.
    pub title: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// Statistics about a channel: number of subscribers, number of videos in the
/// channel, etc.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChannelStatistics {
    /// Whether or not the number of subscribers is shown for this user.
    pub hidden_subscriber_count: Option<bool>,
    /// The number of subscribers that the channel has.
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub subscriber_count: Option<u64>,
    /// The number of videos uploaded to the channel.
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub video_count: Option<u64>,
    /// The number of times the channel has been viewed.
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub view_count: Option<u64>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// A *comment* represents a single YouTube comment.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Comment {
    pub etag: Option<String>,
    /// The ID that YouTube uses to uniquely identify the comment.
    pub id: Option<String>,
    pub kind: Option<String>,
    /// The snippet object contains basic details about the comment.
    pub snippet: Option<CommentSnippet>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommentListResponse {
    pub etag: Option<String>,
    /// A list of comments that match the request criteria.
    pub items: Option<Vec<Comment>>,
    pub kind: Option<String>,
    pub next_page_token: Option<String>,
    pub page_info: Option<PageInfo>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl gax::paginator::Collection for CommentListResponse {
    type Item = Comment;

    fn items(self) -> Vec<Self::Item> {
        self.items.unwrap_or_default()
    }
}

impl gax::paginator::PageableResponse for CommentListResponse {
    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}

/// Basic details about a comment, such as its author and text.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommentSnippet {
    pub author_channel_id: Option<CommentSnippetAuthorChannelId>,
    /// The name of the user who posted the comment.
    pub author_display_name: Option<String>,
    pub can_rate: Option<bool>,
    pub channel_id: Option<String>,
    /// The total number of likes this comment has received.
    pub like_count: Option<u32>,
    /// The comment's moderation status.
    ///
    /// Possible values: `published`, `heldForReview`, `likelySpam`, `rejected`.
    pub moderation_status: Option<String>,
    /// The unique id of the parent comment, only set for replies.
    pub parent_id: Option<String>,
    pub published_at: Option<String>,
    /// The comment's text.
    pub text_display: Option<String>,
    /// The comment's original raw text as initially posted or last updated.
    pub text_original: Option<String>,
    pub updated_at: Option<String>,
    /// The ID of the video the comment refers to, if any.
    pub video_id: Option<String>,
    /// Possible values: `none`, `like`, `dislike`.
    pub viewer_rating: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommentSnippetAuthorChannelId {
    pub value: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// A *comment thread* represents information that applies to a top level
/// comment and all its replies.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommentThread {
    pub etag: Option<String>,
    pub id: Option<String>,
    pub kind: Option<String>,
    pub replies: Option<CommentThreadReplies>,
    pub snippet: Option<CommentThreadSnippet>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommentThreadListResponse {
    pub etag: Option<String>,
    pub items: Option<Vec<CommentThread>>,
    pub kind: Option<String>,
    pub next_page_token: Option<String>,
    pub page_info: Option<PageInfo>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl gax::paginator::Collection for CommentThreadListResponse {
    type Item = CommentThread;

    fn items(self) -> Vec<Self::Item> {
        self.items.unwrap_or_default()
    }
}

impl gax::paginator::PageableResponse for CommentThreadListResponse {
    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}

/// Comments written in (direct or indirect) reply to the top level comment.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommentThreadReplies {
    /// A limited number of replies.
    pub comments: Option<Vec<Comment>>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommentThreadSnippet {
    pub can_reply: Option<bool>,
    pub channel_id: Option<String>,
    pub is_public: Option<bool>,
    /// The top level comment of this thread.
    pub top_level_comment: Option<Comment>,
    pub total_reply_count: Option<u32>,
    pub video_id: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// Paging details for lists of resources.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageInfo {
    pub results_per_page: Option<i32>,
    pub total_results: Option<i32>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// A thumbnail is an image representing a YouTube resource.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Thumbnail {
    pub height: Option<u32>,
    /// The thumbnail image's URL.
    pub url: Option<String>,
    pub width: Option<u32>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// Internal representation of thumbnails for a YouTube resource.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThumbnailDetails {
    /// The default image for this resource.
    pub default: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}
