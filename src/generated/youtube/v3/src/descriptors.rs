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

//! The descriptors for each method in the service.

use discovery::{HttpMethod, MethodDescriptor, ParameterDescriptor, ParameterType, RepeatedEncoding};
use std::sync::LazyLock;

/// The parameters accepted by every method.
static STANDARD_PARAMETERS: LazyLock<Vec<ParameterDescriptor>> = LazyLock::new(|| {
    vec![
        ParameterDescriptor::query("alt", ParameterType::String),
        ParameterDescriptor::query("fields", ParameterType::String),
        ParameterDescriptor::query("key", ParameterType::String),
        ParameterDescriptor::query("oauth_token", ParameterType::String),
        ParameterDescriptor::query("prettyPrint", ParameterType::Boolean),
        ParameterDescriptor::query("quotaUser", ParameterType::String),
        ParameterDescriptor::query("userIp", ParameterType::String),
    ]
});

fn with_standard_parameters(mut method: MethodDescriptor) -> MethodDescriptor {
    for p in STANDARD_PARAMETERS.iter() {
        if method.parameter(&p.name).is_none() {
            method.parameters.push(p.clone());
        }
    }
    method
}

pub(crate) static CHANNELS_LIST: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("youtube.channels.list", HttpMethod::Get, "youtube/v3/channels")
            .with_parameter(ParameterDescriptor::query("part", ParameterType::String).with_required(true).with_repeated(RepeatedEncoding::CommaSeparated))
            .with_parameter(ParameterDescriptor::query("forUsername", ParameterType::String))
            .with_parameter(ParameterDescriptor::query("hl", ParameterType::String))
            .with_parameter(ParameterDescriptor::query("id", ParameterType::String).with_repeated(RepeatedEncoding::CommaSeparated))
            .with_parameter(ParameterDescriptor::query("maxResults", ParameterType::Integer).with_format("uint32"))
            .with_parameter(ParameterDescriptor::query("mine", ParameterType::Boolean))
            .with_parameter(ParameterDescriptor::query("pageToken", ParameterType::String))
            .with_response("ChannelListResponse")
            .with_scopes(["https://www.googleapis.com/auth/youtube", "https://www.googleapis.com/auth/youtube.force-ssl", "https://www.googleapis.com/auth/youtube.readonly"]),
    )
});

pub(crate) static COMMENT_THREADS_INSERT: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("youtube.commentThreads.insert", HttpMethod::Post, "youtube/v3/commentThreads")
            .with_parameter(ParameterDescriptor::query("part", ParameterType::String).with_required(true).with_repeated(RepeatedEncoding::CommaSeparated))
            .with_request("CommentThread")
            .with_response("CommentThread")
            .with_scopes(["https://www.googleapis.com/auth/youtube", "https://www.googleapis.com/auth/youtube.force-ssl"]),
    )
});

pub(crate) static COMMENT_THREADS_LIST: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("youtube.commentThreads.list", HttpMethod::Get, "youtube/v3/commentThreads")
            .with_parameter(ParameterDescriptor::query("part", ParameterType::String).with_required(true).with_repeated(RepeatedEncoding::CommaSeparated))
            .with_parameter(ParameterDescriptor::query("allThreadsRelatedToChannelId", ParameterType::String))
            .with_parameter(ParameterDescriptor::query("id", ParameterType::String).with_repeated(RepeatedEncoding::CommaSeparated))
            .with_parameter(ParameterDescriptor::query("maxResults", ParameterType::Integer).with_format("uint32"))
            .with_parameter(ParameterDescriptor::query("moderationStatus", ParameterType::String))
            .with_parameter(ParameterDescriptor::query("order", ParameterType::String))
            .with_parameter(ParameterDescriptor::query("pageToken", ParameterType::String))
            .with_parameter(ParameterDescriptor::query("searchTerms", ParameterType::String))
            .with_parameter(ParameterDescriptor::query("textFormat", ParameterType::String))
            .with_parameter(ParameterDescriptor::query("videoId", ParameterType::String))
            .with_response("CommentThreadListResponse")
            .with_scopes(["https://www.googleapis.com/auth/youtube", "https://www.googleapis.com/auth/youtube.force-ssl", "https://www.googleapis.com/auth/youtube.readonly"]),
    )
});

pub(crate) static COMMENTS_DELETE: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("youtube.comments.delete", HttpMethod::Delete, "youtube/v3/comments")
            .with_parameter(ParameterDescriptor::query("id", ParameterType::String).with_required(true))
            .with_scopes(["https://www.googleapis.com/auth/youtube", "https://www.googleapis.com/auth/youtube.force-ssl"]),
    )
});

pub(crate) static COMMENTS_INSERT: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("youtube.comments.insert", HttpMethod::Post, "youtube/v3/comments")
            .with_parameter(ParameterDescriptor::query("part", ParameterType::String).with_required(true).with_repeated(RepeatedEncoding::CommaSeparated))
            .with_request("Comment")
            .with_response("Comment")
            .with_scopes(["https://www.googleapis.com/auth/youtube", "https://www.googleapis.com/auth/youtube.force-ssl"]),
    )
});

pub(crate) static COMMENTS_LIST: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("youtube.comments.list", HttpMethod::Get, "youtube/v3/comments")
            .with_parameter(ParameterDescriptor::query("part", ParameterType::String).with_required(true).with_repeated(RepeatedEncoding::CommaSeparated))
            .with_parameter(ParameterDescriptor::query("id", ParameterType::String).with_repeated(RepeatedEncoding::CommaSeparated))
            .with_parameter(ParameterDescriptor::query("maxResults", ParameterType::Integer).with_format("uint32"))
            .with_parameter(ParameterDescriptor::query("pageToken", ParameterType::String))
            .with_parameter(ParameterDescriptor::query("parentId", ParameterType::String))
            .with_parameter(ParameterDescriptor::query("textFormat", ParameterType::String))
            .with_response("CommentListResponse")
            .with_scopes(["https://www.googleapis.com/auth/youtube", "https://www.googleapis.com/auth/youtube.force-ssl", "https://www.googleapis.com/auth/youtube.readonly"]),
    )
});

pub(crate) static COMMENTS_SET_MODERATION_STATUS: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("youtube.comments.setModerationStatus", HttpMethod::Post, "youtube/v3/comments/setModerationStatus")
            .with_parameter(ParameterDescriptor::query("id", ParameterType::String).with_required(true).with_repeated(RepeatedEncoding::CommaSeparated))
            .with_parameter(ParameterDescriptor::query("moderationStatus", ParameterType::String).with_required(true))
            .with_parameter(ParameterDescriptor::query("banAuthor", ParameterType::Boolean))
            .with_scopes(["https://www.googleapis.com/auth/youtube", "https://www.googleapis.com/auth/youtube.force-ssl"]),
    )
});

pub(crate) static COMMENTS_UPDATE: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("youtube.comments.update", HttpMethod::Put, "youtube/v3/comments")
            .with_parameter(ParameterDescriptor::query("part", ParameterType::String).with_required(true).with_repeated(RepeatedEncoding::CommaSeparated))
            .with_request("Comment")
            .with_response("Comment")
            .with_scopes(["https://www.googleapis.com/auth/youtube", "https://www.googleapis.com/auth/youtube.force-ssl"]),
    )
});
