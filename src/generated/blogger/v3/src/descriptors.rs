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

pub(crate) static BLOG_USER_INFOS_GET: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("blogger.blogUserInfos.get", HttpMethod::Get, "users/{userId}/blogs/{blogId}")
            .with_parameter(ParameterDescriptor::path("userId"))
            .with_parameter(ParameterDescriptor::path("blogId"))
            .with_parameter(ParameterDescriptor::query("maxPosts", ParameterType::Integer).with_format("uint32"))
            .with_response("BlogUserInfo")
            .with_scopes(["https://www.googleapis.com/auth/blogger", "https://www.googleapis.com/auth/blogger.readonly"]),
    )
});

pub(crate) static BLOGS_GET: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("blogger.blogs.get", HttpMethod::Get, "blogs/{blogId}")
            .with_parameter(ParameterDescriptor::path("blogId"))
            .with_parameter(ParameterDescriptor::query("maxPosts", ParameterType::Integer).with_format("uint32"))
            .with_parameter(ParameterDescriptor::query("view", ParameterType::String))
            .with_response("Blog")
            .with_scopes(["https://www.googleapis.com/auth/blogger", "https://www.googleapis.com/auth/blogger.readonly"]),
    )
});

pub(crate) static BLOGS_GET_BY_URL: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("blogger.blogs.getByUrl", HttpMethod::Get, "blogs/byurl")
            .with_parameter(ParameterDescriptor::query("url", ParameterType::String).with_required(true))
            .with_parameter(ParameterDescriptor::query("view", ParameterType::String))
            .with_response("Blog")
            .with_scopes(["https://www.googleapis.com/auth/blogger", "https://www.googleapis.com/auth/blogger.readonly"]),
    )
});

pub(crate) static BLOGS_LIST_BY_USER: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("blogger.blogs.listByUser", HttpMethod::Get, "users/{userId}/blogs")
            .with_parameter(ParameterDescriptor::path("userId"))
            .with_parameter(ParameterDescriptor::query("fetchUserInfo", ParameterType::Boolean))
            .with_parameter(ParameterDescriptor::query("role", ParameterType::String).with_repeated(RepeatedEncoding::Multi))
            .with_parameter(ParameterDescriptor::query("status", ParameterType::String).with_repeated(RepeatedEncoding::Multi))
            .with_parameter(ParameterDescriptor::query("view", ParameterType::String))
            .with_response("BlogList")
            .with_scopes(["https://www.googleapis.com/auth/blogger", "https://www.googleapis.com/auth/blogger.readonly"]),
    )
});

pub(crate) static COMMENTS_APPROVE: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("blogger.comments.approve", HttpMethod::Post, "blogs/{blogId}/posts/{postId}/comments/{commentId}/approve")
            .with_parameter(ParameterDescriptor::path("blogId"))
            .with_parameter(ParameterDescriptor::path("postId"))
            .with_parameter(ParameterDescriptor::path("commentId"))
            .with_response("Comment")
            .with_scopes(["https://www.googleapis.com/auth/blogger"]),
    )
});

pub(crate) static COMMENTS_DELETE: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("blogger.comments.delete", HttpMethod::Delete, "blogs/{blogId}/posts/{postId}/comments/{commentId}")
            .with_parameter(ParameterDescriptor::path("blogId"))
            .with_parameter(ParameterDescriptor::path("postId"))
            .with_parameter(ParameterDescriptor::path("commentId"))
            .with_scopes(["https://www.googleapis.com/auth/blogger"]),
    )
});

pub(crate) static COMMENTS_GET: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("blogger.comments.get", HttpMethod::Get, "blogs/{blogId}/posts/{postId}/comments/{commentId}")
            .with_parameter(ParameterDescriptor::path("blogId"))
            .with_parameter(ParameterDescriptor::path("postId"))
            .with_parameter(ParameterDescriptor::path("commentId"))
            .with_parameter(ParameterDescriptor::query("view", ParameterType::String))
            .with_response("Comment")
            .with_scopes(["https://www.googleapis.com/auth/blogger", "https://www.googleapis.com/auth/blogger.readonly"]),
    )
});

pub(crate) static COMMENTS_LIST: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("blogger.comments.list", HttpMethod::Get, "blogs/{blogId}/posts/{postId}/comments")
            .with_parameter(ParameterDescriptor::path("blogId"))
            .with_parameter(ParameterDescriptor::path("postId"))
            .with_parameter(ParameterDescriptor::query("endDate", ParameterType::String))
            .with_parameter(ParameterDescriptor::query("fetchBodies", ParameterType::Boolean))
            .with_parameter(ParameterDescriptor::query("maxResults", ParameterType::Integer).with_format("uint32"))
            .with_parameter(ParameterDescriptor::query("pageToken", ParameterType::String))
            .with_parameter(ParameterDescriptor::query("startDate", ParameterType::String))
            .with_parameter(ParameterDescriptor::query("status", ParameterType::String).with_repeated(RepeatedEncoding::Multi))
            .with_parameter(ParameterDescriptor::query("view", ParameterType::String))
            .with_response("CommentList")
            .with_scopes(["https://www.googleapis.com/auth/blogger", "https://www.googleapis.com/auth/blogger.readonly"]),
    )
});

pub(crate) static COMMENTS_LIST_BY_BLOG: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("blogger.comments.listByBlog", HttpMethod::Get, "blogs/{blogId}/comments")
            .with_parameter(ParameterDescriptor::path("blogId"))
            .with_parameter(ParameterDescriptor::query("endDate", ParameterType::String))
            .with_parameter(ParameterDescriptor::query("fetchBodies", ParameterType::Boolean))
            .with_parameter(ParameterDescriptor::query("maxResults", ParameterType::Integer).with_format("uint32"))
            .with_parameter(ParameterDescriptor::query("pageToken", ParameterType::String))
            .with_parameter(ParameterDescriptor::query("startDate", ParameterType::String))
            .with_parameter(ParameterDescriptor::query("status", ParameterType::String).with_repeated(RepeatedEncoding::Multi))
            .with_response("CommentList")
            .with_scopes(["https://www.googleapis.com/auth/blogger", "https://www.googleapis.com/auth/blogger.readonly"]),
    )
});

pub(crate) static COMMENTS_MARK_AS_SPAM: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("blogger.comments.markAsSpam", HttpMethod::Post, "blogs/{blogId}/posts/{postId}/comments/{commentId}/spam")
            .with_parameter(ParameterDescriptor::path("blogId"))
            .with_parameter(ParameterDescriptor::path("postId"))
            .with_parameter(ParameterDescriptor::path("commentId"))
            .with_response("Comment")
            .with_scopes(["https://www.googleapis.com/auth/blogger"]),
    )
});

pub(crate) static COMMENTS_REMOVE_CONTENT: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("blogger.comments.removeContent", HttpMethod::Post, "blogs/{blogId}/posts/{postId}/comments/{commentId}/removecontent")
            .with_parameter(ParameterDescriptor::path("blogId"))
            .with_parameter(ParameterDescriptor::path("postId"))
            .with_parameter(ParameterDescriptor::path("commentId"))
            .with_response("Comment")
            .with_scopes(["https://www.googleapis.com/auth/blogger"]),
    )
});

pub(crate) static PAGE_VIEWS_GET: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("blogger.pageViews.get", HttpMethod::Get, "blogs/{blogId}/pageviews")
            .with_parameter(ParameterDescriptor::path("blogId"))
            .with_parameter(ParameterDescriptor::query("range", ParameterType::String).with_repeated(RepeatedEncoding::Multi))
            .with_response("Pageviews")
            .with_scopes(["https://www.googleapis.com/auth/blogger", "https://www.googleapis.com/auth/blogger.readonly"]),
    )
});

pub(crate) static PAGES_DELETE: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("blogger.pages.delete", HttpMethod::Delete, "blogs/{blogId}/pages/{pageId}")
            .with_parameter(ParameterDescriptor::path("blogId"))
            .with_parameter(ParameterDescriptor::path("pageId"))
            .with_scopes(["https://www.googleapis.com/auth/blogger"]),
    )
});

pub(crate) static PAGES_GET: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("blogger.pages.get", HttpMethod::Get, "blogs/{blogId}/pages/{pageId}")
            .with_parameter(ParameterDescriptor::path("blogId"))
            .with_parameter(ParameterDescriptor::path("pageId"))
            .with_parameter(ParameterDescriptor::query("view", ParameterType::String))
            .with_response("Page")
            .with_scopes(["https://www.googleapis.com/auth/blogger", "https://www.googleapis.com/auth/blogger.readonly"]),
    )
});

pub(crate) static PAGES_INSERT: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("blogger.pages.insert", HttpMethod::Post, "blogs/{blogId}/pages")
            .with_parameter(ParameterDescriptor::path("blogId"))
            .with_parameter(ParameterDescriptor::query("isDraft", ParameterType::Boolean))
            .with_request("Page")
            .with_response("Page")
            .with_scopes(["https://www.googleapis.com/auth/blogger"]),
    )
});

pub(crate) static PAGES_LIST: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("blogger.pages.list", HttpMethod::Get, "blogs/{blogId}/pages")
            .with_parameter(ParameterDescriptor::path("blogId"))
            .with_parameter(ParameterDescriptor::query("fetchBodies", ParameterType::Boolean))
            .with_parameter(ParameterDescriptor::query("maxResults", ParameterType::Integer).with_format("uint32"))
            .with_parameter(ParameterDescriptor::query("pageToken", ParameterType::String))
            .with_parameter(ParameterDescriptor::query("status", ParameterType::String).with_repeated(RepeatedEncoding::Multi))
            .with_parameter(ParameterDescriptor::query("view", ParameterType::String))
            .with_response("PageList")
            .with_scopes(["https://www.googleapis.com/auth/blogger", "https://www.googleapis.com/auth/blogger.readonly"]),
    )
});

pub(crate) static PAGES_PATCH: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("blogger.pages.patch", HttpMethod::Patch, "blogs/{blogId}/pages/{pageId}")
            .with_parameter(ParameterDescriptor::path("blogId"))
            .with_parameter(ParameterDescriptor::path("pageId"))
            .with_parameter(ParameterDescriptor::query("publish", ParameterType::Boolean))
            .with_parameter(ParameterDescriptor::query("revert", ParameterType::Boolean))
            .with_request("Page")
            .with_response("Page")
            .with_scopes(["https://www.googleapis.com/auth/blogger"]),
    )
});

pub(crate) static PAGES_PUBLISH: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("blogger.pages.publish", HttpMethod::Post, "blogs/{blogId}/pages/{pageId}/publish")
            .with_parameter(ParameterDescriptor::path("blogId"))
            .with_parameter(ParameterDescriptor::path("pageId"))
            .with_response("Page")
            .with_scopes(["https://www.googleapis.com/auth/blogger"]),
    )
});

pub(crate) static PAGES_REVERT: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("blogger.pages.revert", HttpMethod::Post, "blogs/{blogId}/pages/{pageId}/revert")
            .with_parameter(ParameterDescriptor::path("blogId"))
            .with_parameter(ParameterDescriptor::path("pageId"))
            .with_response("Page")
            .with_scopes(["https://www.googleapis.com/auth/blogger"]),
    )
});

pub(crate) static PAGES_UPDATE: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("blogger.pages.update", HttpMethod::Put, "blogs/{blogId}/pages/{pageId}")
            .with_parameter(ParameterDescriptor::path("blogId"))
            .with_parameter(ParameterDescriptor::path("pageId"))
            .with_parameter(ParameterDescriptor::query("publish", ParameterType::Boolean))
            .with_parameter(ParameterDescriptor::query("revert", ParameterType::Boolean))
            .with_request("Page")
            .with_response("Page")
            .with_scopes(["https://www.googleapis.com/auth/blogger"]),
    )
});

pub(crate) static POST_USER_INFOS_GET: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("blogger.postUserInfos.get", HttpMethod::Get, "users/{userId}/blogs/{blogId}/posts/{postId}")
            .with_parameter(ParameterDescriptor::path("userId"))
            .with_parameter(ParameterDescriptor::path("blogId"))
            .with_parameter(ParameterDescriptor::path("postId"))
            .with_parameter(ParameterDescriptor::query("maxComments", ParameterType::Integer).with_format("uint32"))
            .with_response("PostUserInfo")
            .with_scopes(["https://www.googleapis.com/auth/blogger", "https://www.googleapis.com/auth/blogger.readonly"]),
    )
});

pub(crate) static POST_USER_INFOS_LIST: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("blogger.postUserInfos.list", HttpMethod::Get, "users/{userId}/blogs/{blogId}/posts")
            .with_parameter(ParameterDescriptor::path("userId"))
            .with_parameter(ParameterDescriptor::path("blogId"))
            .with_parameter(ParameterDescriptor::query("endDate", ParameterType::String))
            .with_parameter(ParameterDescriptor::query("fetchBodies", ParameterType::Boolean))
            .with_parameter(ParameterDescriptor::query("labels", ParameterType::String))
            .with_parameter(ParameterDescriptor::query("maxResults", ParameterType::Integer).with_format("uint32"))
            .with_parameter(ParameterDescriptor::query("orderBy", ParameterType::String))
            .with_parameter(ParameterDescriptor::query("pageToken", ParameterType::String))
            .with_parameter(ParameterDescriptor::query("startDate", ParameterType::String))
            .with_parameter(ParameterDescriptor::query("status", ParameterType::String).with_repeated(RepeatedEncoding::Multi))
            .with_parameter(ParameterDescriptor::query("view", ParameterType::String))
            .with_response("PostUserInfosList")
            .with_scopes(["https://www.googleapis.com/auth/blogger", "https://www.googleapis.com/auth/blogger.readonly"]),
    )
});

pub(crate) static POSTS_DELETE: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("blogger.posts.delete", HttpMethod::Delete, "blogs/{blogId}/posts/{postId}")
            .with_parameter(ParameterDescriptor::path("blogId"))
            .with_parameter(ParameterDescriptor::path("postId"))
            .with_scopes(["https://www.googleapis.com/auth/blogger"]),
    )
});

pub(crate) static POSTS_GET: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("blogger.posts.get", HttpMethod::Get, "blogs/{blogId}/posts/{postId}")
            .with_parameter(ParameterDescriptor::path("blogId"))
            .with_parameter(ParameterDescriptor::path("postId"))
            .with_parameter(ParameterDescriptor::query("fetchBody", ParameterType::Boolean))
            .with_parameter(ParameterDescriptor::query("fetchImages", ParameterType::Boolean))
            .with_parameter(ParameterDescriptor::query("maxComments", ParameterType::Integer).with_format("uint32"))
            .with_parameter(ParameterDescriptor::query("view", ParameterType::String))
            .with_response("Post")
            .with_scopes(["https://www.googleapis.com/auth/blogger", "https://www.googleapis.com/auth/blogger.readonly"]),
    )
});

pub(crate) static POSTS_GET_BY_PATH: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("blogger.posts.getByPath", HttpMethod::Get, "blogs/{blogId}/posts/bypath")
            .with_parameter(ParameterDescriptor::path("blogId"))
            .with_parameter(ParameterDescriptor::query("path", ParameterType::String).with_required(true))
            .with_parameter(ParameterDescriptor::query("maxComments", ParameterType::Integer).with_format("uint32"))
            .with_parameter(ParameterDescriptor::query("view", ParameterType::String))
            .with_response("Post")
            .with_scopes(["https://www.googleapis.com/auth/blogger", "https://www.googleapis.com/auth/blogger.readonly"]),
    )
});

pub(crate) static POSTS_INSERT: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("blogger.posts.insert", HttpMethod::Post, "blogs/{blogId}/posts")
            .with_parameter(ParameterDescriptor::path("blogId"))
            .with_parameter(ParameterDescriptor::query("fetchBody", ParameterType::Boolean))
            .with_parameter(ParameterDescriptor::query("fetchImages", ParameterType::Boolean))
            .with_parameter(ParameterDescriptor::query("isDraft", ParameterType::Boolean))
            .with_request("Post")
            .with_response("Post")
            .with_scopes(["https://www.googleapis.com/auth/blogger"]),
    )
});

pub(crate) static POSTS_LIST: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("blogger.posts.list", HttpMethod::Get, "blogs/{blogId}/posts")
            .with_parameter(ParameterDescriptor::path("blogId"))
            .with_parameter(ParameterDescriptor::query("endDate", ParameterType::String))
            .with_parameter(ParameterDescriptor::query("fetchBodies", ParameterType::Boolean))
            .with_parameter(ParameterDescriptor::query("fetchImages", ParameterType::Boolean))
            .with_parameter(ParameterDescriptor::query("labels", ParameterType::String))
            .with_parameter(ParameterDescriptor::query("maxResults", ParameterType::Integer).with_format("uint32"))
            .with_parameter(ParameterDescriptor::query("orderBy", ParameterType::String))
            .with_parameter(ParameterDescriptor::query("pageToken", ParameterType::String))
            .with_parameter(ParameterDescriptor::query("startDate", ParameterType::String))
            .with_parameter(ParameterDescriptor::query("status", ParameterType::String).with_repeated(RepeatedEncoding::Multi))
            .with_parameter(ParameterDescriptor::query("view", ParameterType::String))
            .with_response("PostList")
            .with_scopes(["https://www.googleapis.com/auth/blogger", "https://www.googleapis.com/auth/blogger.readonly"]),
    )
});

pub(crate) static POSTS_PATCH: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("blogger.posts.patch", HttpMethod::Patch, "blogs/{blogId}/posts/{postId}")
            .with_parameter(ParameterDescriptor::path("blogId"))
            .with_parameter(ParameterDescriptor::path("postId"))
            .with_parameter(ParameterDescriptor::query("fetchBody", ParameterType::Boolean))
            .with_parameter(ParameterDescriptor::query("fetchImages", ParameterType::Boolean))
            .with_parameter(ParameterDescriptor::query("maxComments", ParameterType::Integer).with_format("uint32"))
            .with_parameter(ParameterDescriptor::query("publish", ParameterType::Boolean))
            .with_parameter(ParameterDescriptor::query("revert", ParameterType::Boolean))
            .with_request("Post")
            .with_response("Post")
            .with_scopes(["https://www.googleapis.com/auth/blogger"]),
    )
});

pub(crate) static POSTS_PUBLISH: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("blogger.posts.publish", HttpMethod::Post, "blogs/{blogId}/posts/{postId}/publish")
            .with_parameter(ParameterDescriptor::path("blogId"))
            .with_parameter(ParameterDescriptor::path("postId"))
            .with_parameter(ParameterDescriptor::query("publishDate", ParameterType::String))
            .with_response("Post")
            .with_scopes(["https://www.googleapis.com/auth/blogger"]),
    )
});

pub(crate) static POSTS_REVERT: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("blogger.posts.revert", HttpMethod::Post, "blogs/{blogId}/posts/{postId}/revert")
            .with_parameter(ParameterDescriptor::path("blogId"))
            .with_parameter(ParameterDescriptor::path("postId"))
            .with_response("Post")
            .with_scopes(["https://www.googleapis.com/auth/blogger"]),
    )
});

pub(crate) static POSTS_SEARCH: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("blogger.posts.search", HttpMethod::Get, "blogs/{blogId}/posts/search")
            .with_parameter(ParameterDescriptor::path("blogId"))
            .with_parameter(ParameterDescriptor::query("q", ParameterType::String).with_required(true))
            .with_parameter(ParameterDescriptor::query("fetchBodies", ParameterType::Boolean))
            .with_parameter(ParameterDescriptor::query("orderBy", ParameterType::String))
            .with_response("PostList")
            .with_scopes(["https://www.googleapis.com/auth/blogger", "https://www.googleapis.com/auth/blogger.readonly"]),
    )
});

pub(crate) static POSTS_UPDATE: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("blogger.posts.update", HttpMethod::Put, "blogs/{blogId}/posts/{postId}")
            .with_parameter(ParameterDescriptor::path("blogId"))
            .with_parameter(ParameterDescriptor::path("postId"))
            .with_parameter(ParameterDescriptor::query("fetchBody", ParameterType::Boolean))
            .with_parameter(ParameterDescriptor::query("fetchImages", ParameterType::Boolean))
            .with_parameter(ParameterDescriptor::query("maxComments", ParameterType::Integer).with_format("uint32"))
            .with_parameter(ParameterDescriptor::query("publish", ParameterType::Boolean))
            .with_parameter(ParameterDescriptor::query("revert", ParameterType::Boolean))
            .with_request("Post")
            .with_response("Post")
            .with_scopes(["https://www.googleapis.com/auth/blogger"]),
    )
});

pub(crate) static USERS_GET: LazyLock<MethodDescriptor> = LazyLock::new(|| {
    with_standard_parameters(
        MethodDescriptor::new("blogger.users.get", HttpMethod::Get, "users/{userId}")
            .with_parameter(ParameterDescriptor::path("userId"))
            .with_response("User")
            .with_scopes(["https://www.googleapis.com/auth/blogger", "https://www.googleapis.com/auth/blogger.readonly"]),
    )
});
