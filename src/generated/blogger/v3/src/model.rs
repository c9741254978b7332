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

//! The data types used by the Blogger API.

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Blog {
    pub custom_meta_data: Option<String>,
    pub description: Option<String>,
    pub id: Option<String>,
    pub kind: Option<String>,
    pub locale: Option<BlogLocale>,
    pub name: Option<String>,
    pub pages: Option<BlogPages>,
    pub posts: Option<BlogPosts>,
    pub published: Option<String>,
    pub self_link: Option<String>,
    pub status: Option<String>,
    pub updated: Option<String>,
    pub url: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogList {
    pub blog_user_infos: Option<Vec<BlogUserInfo>>,
    pub items: Option<Vec<Blog>>,
    pub kind: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl gax::paginator::Collection for BlogList {
    type Item = Blog;

    fn items(self) -> Vec<Self::Item> {
        self.items.unwrap_or_default()
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogLocale {
    pub country: Option<String>,
    pub language: Option<String>,
    pub variant: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogPages {
    pub self_link: Option<String>,
    pub total_items: Option<i32>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogPerUserInfo {
    pub blog_id: Option<String>,
    pub has_admin_access: Option<bool>,
    pub kind: Option<String>,
    pub photos_album_key: Option<String>,
    pub role: Option<String>,
    pub user_id: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogPosts {
    pub items: Option<Vec<Post>>,
    pub self_link: Option<String>,
    pub total_items: Option<i32>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl gax::paginator::Collection for BlogPosts {
    type Item = Post;

    fn items(self) -> Vec<Self::Item> {
        self.items.unwrap_or_default()
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogUserInfo {
    pub blog: Option<Blog>,
    pub blog_user_info: Option<BlogPerUserInfo>,
    pub kind: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Comment {
    pub author: Option<CommentAuthor>,
    pub blog: Option<CommentBlog>,
    pub content: Option<String>,
    pub id: Option<String>,
    pub in_reply_to: Option<CommentInReplyTo>,
    pub kind: Option<String>,
    pub post: Option<CommentPost>,
    pub published: Option<String>,
    pub self_link: Option<String>,
    pub status: Option<String>,
    pub updated: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommentAuthor {
    pub display_name: Option<String>,
    pub id: Option<String>,
    pub image: Option<CommentAuthorImage>,
    pub url: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommentAuthorImage {
    pub url: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommentBlog {
    pub id: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommentInReplyTo {
    pub id: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommentList {
    pub etag: Option<String>,
    pub items: Option<Vec<Comment>>,
    pub kind: Option<String>,
    pub next_page_token: Option<String>,
    pub prev_page_token: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl gax::paginator::Collection for CommentList {
    type Item = Comment;

    fn items(self) -> Vec<Self::Item> {
        self.items.unwrap_or_default()
    }
}

impl gax::paginator::PageableResponse for CommentList {
    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommentPost {
    pub id: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Page {
    pub author: Option<PageAuthor>,
    pub blog: Option<PageBlog>,
    pub content: Option<String>,
    pub etag: Option<String>,
    pub id: Option<String>,
    pub kind: Option<String>,
    pub published: Option<String>,
    pub self_link: Option<String>,
    pub status: Option<String>,
    pub title: Option<String>,
    pub updated: Option<String>,
    pub url: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageAuthor {
    pub display_name: Option<String>,
    pub id: Option<String>,
    pub image: Option<PageAuthorImage>,
    pub url: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageAuthorImage {
    pub url: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageBlog {
    pub id: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageList {
    pub etag: Option<String>,
    pub items: Option<Vec<Page>>,
    pub kind: Option<String>,
    pub next_page_token: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl gax::paginator::Collection for PageList {
    type Item = Page;

    fn items(self) -> Vec<Self::Item> {
        self.items.unwrap_or_default()
    }
}

impl gax::paginator::PageableResponse for PageList {
    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pageviews {
    pub blog_id: Option<String>,
    pub counts: Option<Vec<PageviewsCounts>>,
    pub kind: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageviewsCounts {
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub count: Option<i64>,
    pub time_range: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Post {
    pub author: Option<PostAuthor>,
    pub blog: Option<PostBlog>,
    pub content: Option<String>,
    pub custom_meta_data: Option<String>,
    pub etag: Option<String>,
    pub id: Option<String>,
    pub images: Option<Vec<PostImages>>,
    pub kind: Option<String>,
    pub labels: Option<Vec<String>>,
    pub location: Option<PostLocation>,
    pub published: Option<String>,
    pub reader_comments: Option<String>,
    pub replies: Option<PostReplies>,
    pub self_link: Option<String>,
    pub status: Option<String>,
    pub title: Option<String>,
    pub title_link: Option<String>,
    pub updated: Option<String>,
    pub url: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostAuthor {
    pub display_name: Option<String>,
    pub id: Option<String>,
    pub image: Option<PostAuthorImage>,
    pub url: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostAuthorImage {
    pub url: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostBlog {
    pub id: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostImages {
    pub url: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostList {
    pub etag: Option<String>,
    pub items: Option<Vec<Post>>,
    pub kind: Option<String>,
    pub next_page_token: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl gax::paginator::Collection for PostList {
    type Item = Post;

    fn items(self) -> Vec<Self::Item> {
        self.items.unwrap_or_default()
    }
}

impl gax::paginator::PageableResponse for PostList {
    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostLocation {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub name: Option<String>,
    pub span: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostPerUserInfo {
    pub blog_id: Option<String>,
    pub has_edit_access: Option<bool>,
    pub kind: Option<String>,
    pub post_id: Option<String>,
    pub user_id: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostReplies {
    pub items: Option<Vec<Comment>>,
    pub self_link: Option<String>,
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub total_items: Option<i64>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl gax::paginator::Collection for PostReplies {
    type Item = Comment;

    fn items(self) -> Vec<Self::Item> {
        self.items.unwrap_or_default()
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostUserInfo {
    pub kind: Option<String>,
    pub post: Option<Post>,
    pub post_user_info: Option<PostPerUserInfo>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostUserInfosList {
    pub items: Option<Vec<PostUserInfo>>,
    pub kind: Option<String>,
    pub next_page_token: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl gax::paginator::Collection for PostUserInfosList {
    type Item = PostUserInfo;

    fn items(self) -> Vec<Self::Item> {
        self.items.unwrap_or_default()
    }
}

impl gax::paginator::PageableResponse for PostUserInfosList {
    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    pub about: Option<String>,
    pub blogs: Option<UserBlogs>,
    pub created: Option<String>,
    pub display_name: Option<String>,
    pub id: Option<String>,
    pub kind: Option<String>,
    pub locale: Option<UserLocale>,
    pub self_link: Option<String>,
    pub url: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserBlogs {
    pub self_link: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserLocale {
    pub country: Option<String>,
    pub language: Option<String>,
    pub variant: Option<String>,
    /// Fields not described by the schema, preserved when the value is sent back.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub unknown_fields: serde_json::Map<String, serde_json::Value>,
}
