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

//! The [Blogger] client, its resources, and the options for each method.

use crate::descriptors;
use crate::model;
use gax::parameter_bag::ParameterBag;

/// Implements a client for the Blogger API.
///
/// API for access to the data within Blogger.
///
/// # Example
/// ```no_run
/// # async fn sample() -> anyhow::Result<()> {
/// use blogger_v3::client::Blogger;
/// let client = Blogger::builder().build().await?;
/// # Ok(()) }
/// ```
///
/// # Configuration
///
/// To configure `Blogger` use the `with_*` methods in the type returned by
/// [builder()][Blogger::builder]. The default configuration uses the
/// [DEFAULT_ENDPOINT][Blogger::DEFAULT_ENDPOINT], sends no credentials, and
/// retries transient errors, up to five attempts per call.
///
/// # Pooling and Cloning
///
/// `Blogger` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `Blogger` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct Blogger {
    executor: gax::executor::RequestExecutor,
}

impl Blogger {
    /// The service endpoint used when none is configured.
    pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/blogger/v3/";

    /// The `https://www.googleapis.com/auth/blogger` OAuth2 scope.
    pub const BLOGGER: &str = "https://www.googleapis.com/auth/blogger";

    /// The `https://www.googleapis.com/auth/blogger.readonly` OAuth2 scope.
    pub const BLOGGER_READONLY: &str = "https://www.googleapis.com/auth/blogger.readonly";

    /// Returns a builder for [Blogger].
    ///
    /// ```no_run
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use blogger_v3::client::Blogger;
    /// let client = Blogger::builder()
    ///     .with_credentials(gax::credentials::ApiKey::new("my-api-key"))
    ///     .build()
    ///     .await?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> ClientBuilder {
        gax::client_builder::internal::new_builder(client_factory::Factory)
    }

    /// Creates a new client from the provided configuration.
    pub fn from_config(config: gax::options::ClientConfig) -> Self {
        Self {
            executor: gax::executor::RequestExecutor::new(config, Self::DEFAULT_ENDPOINT),
        }
    }

    /// The `blogUserInfos` resource.
    pub fn blog_user_infos(&self) -> BlogUserInfos {
        BlogUserInfos {
            executor: self.executor.clone(),
        }
    }

    /// The `blogs` resource.
    pub fn blogs(&self) -> Blogs {
        Blogs {
            executor: self.executor.clone(),
        }
    }

    /// The `comments` resource.
    pub fn comments(&self) -> Comments {
        Comments {
            executor: self.executor.clone(),
        }
    }

    /// The `pageViews` resource.
    pub fn page_views(&self) -> PageViews {
        PageViews {
            executor: self.executor.clone(),
        }
    }

    /// The `pages` resource.
    pub fn pages(&self) -> Pages {
        Pages {
            executor: self.executor.clone(),
        }
    }

    /// The `postUserInfos` resource.
    pub fn post_user_infos(&self) -> PostUserInfos {
        PostUserInfos {
            executor: self.executor.clone(),
        }
    }

    /// The `posts` resource.
    pub fn posts(&self) -> Posts {
        Posts {
            executor: self.executor.clone(),
        }
    }

    /// The `users` resource.
    pub fn users(&self) -> Users {
        Users {
            executor: self.executor.clone(),
        }
    }
}

/// A builder for [Blogger].
pub type ClientBuilder = gax::client_builder::ClientBuilder<client_factory::Factory>;

pub(crate) mod client_factory {
    pub struct Factory;
    impl gax::client_builder::internal::ClientFactory for Factory {
        type Client = super::Blogger;
        async fn build(
            self,
            config: gax::options::ClientConfig,
        ) -> gax::client_builder::Result<Self::Client> {
            Ok(Self::Client::from_config(config))
        }
    }
}

/// The parameters accepted by all the methods in the service.
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardParameters {
    /// Data format for the response.
    ///
    /// Possible values: `json`.
    pub alt: Option<String>,
    /// Selector specifying which fields to include in a partial response.
    pub fields: Option<String>,
    /// API key.
    pub key: Option<String>,
    /// OAuth 2.0 token for the current user.
    #[serde(rename = "oauth_token")]
    pub oauth_token: Option<String>,
    /// Returns response with indentations and line breaks.
    pub pretty_print: Option<bool>,
    /// An opaque string that represents a user for quota purposes.
    pub quota_user: Option<String>,
    /// Deprecated.
    pub user_ip: Option<String>,
}

/// Implements the `blogUserInfos` resource.
///
/// Use [Blogger::blog_user_infos] to create instances of this type.
#[derive(Clone, Debug)]
pub struct BlogUserInfos {
    executor: gax::executor::RequestExecutor,
}

impl BlogUserInfos {
    /// Gets one blog and user info pair by blogId and userId.
    pub async fn get(
        &self,
        user_id: impl Into<String>,
        blog_id: impl Into<String>,
        options: BlogUserInfosGetOptions,
    ) -> crate::Result<model::BlogUserInfo> {
        let positional = ParameterBag::new()
            .with("userId", user_id.into())
            .with("blogId", blog_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute(
                &descriptors::BLOG_USER_INFOS_GET,
                positional,
                optional,
                options.request_options,
            )
            .await
    }
}

/// Implements the `blogs` resource.
///
/// Use [Blogger::blogs] to create instances of this type.
#[derive(Clone, Debug)]
pub struct Blogs {
    executor: gax::executor::RequestExecutor,
}

impl Blogs {
    /// Gets one blog by ID.
    pub async fn get(
        &self,
        blog_id: impl Into<String>,
        options: BlogsGetOptions,
    ) -> crate::Result<model::Blog> {
        let positional = ParameterBag::new().with("blogId", blog_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute(
                &descriptors::BLOGS_GET,
                positional,
                optional,
                options.request_options,
            )
            .await
    }

    /// Retrieve a Blog by URL.
    pub async fn get_by_url(
        &self,
        url: impl Into<String>,
        options: BlogsGetByUrlOptions,
    ) -> crate::Result<model::Blog> {
        let positional = ParameterBag::new().with("url", url.into());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute(
                &descriptors::BLOGS_GET_BY_URL,
                positional,
                optional,
                options.request_options,
            )
            .await
    }

    /// Retrieves a list of blogs, possibly filtered.
    pub async fn list_by_user(
        &self,
        user_id: impl Into<String>,
        options: BlogsListByUserOptions,
    ) -> crate::Result<model::BlogList> {
        let positional = ParameterBag::new().with("userId", user_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute(
                &descriptors::BLOGS_LIST_BY_USER,
                positional,
                optional,
                options.request_options,
            )
            .await
    }
}

/// Implements the `comments` resource.
///
/// Use [Blogger::comments] to create instances of this type.
#[derive(Clone, Debug)]
pub struct Comments {
    executor: gax::executor::RequestExecutor,
}

impl Comments {
    /// Marks a comment as not spam.
    pub async fn approve(
        &self,
        blog_id: impl Into<String>,
        post_id: impl Into<String>,
        comment_id: impl Into<String>,
        options: CommentsApproveOptions,
    ) -> crate::Result<model::Comment> {
        let positional = ParameterBag::new()
            .with("blogId", blog_id.into())
            .with("postId", post_id.into())
            .with("commentId", comment_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute(
                &descriptors::COMMENTS_APPROVE,
                positional,
                optional,
                options.request_options,
            )
            .await
    }

    /// Delete a comment by ID.
    pub async fn delete(
        &self,
        blog_id: impl Into<String>,
        post_id: impl Into<String>,
        comment_id: impl Into<String>,
        options: CommentsDeleteOptions,
    ) -> crate::Result<()> {
        let positional = ParameterBag::new()
            .with("blogId", blog_id.into())
            .with("postId", post_id.into())
            .with("commentId", comment_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute::<serde_json::Value>(
                &descriptors::COMMENTS_DELETE,
                positional,
                optional,
                options.request_options,
            )
            .await
            .map(|_| ())
    }

    /// Gets one comment by ID.
    pub async fn get(
        &self,
        blog_id: impl Into<String>,
        post_id: impl Into<String>,
        comment_id: impl Into<String>,
        options: CommentsGetOptions,
    ) -> crate::Result<model::Comment> {
        let positional = ParameterBag::new()
            .with("blogId", blog_id.into())
            .with("postId", post_id.into())
            .with("commentId", comment_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute(
                &descriptors::COMMENTS_GET,
                positional,
                optional,
                options.request_options,
            )
            .await
    }

    /// Retrieves the comments for a post, possibly filtered.
    pub async fn list(
        &self,
        blog_id: impl Into<String>,
        post_id: impl Into<String>,
        options: CommentsListOptions,
    ) -> crate::Result<model::CommentList> {
        let positional = ParameterBag::new()
            .with("blogId", blog_id.into())
            .with("postId", post_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute(
                &descriptors::COMMENTS_LIST,
                positional,
                optional,
                options.request_options,
            )
            .await
    }

    /// Returns a stream with the pages of [list][Self::list].
    ///
    /// The stream ends after the last page, or after the first error.
    pub fn list_stream(
        &self,
        blog_id: impl Into<String>,
        post_id: impl Into<String>,
        options: CommentsListOptions,
    ) -> crate::Result<gax::paginator::Paginator<model::CommentList>> {
        let positional = ParameterBag::new()
            .with("blogId", blog_id.into())
            .with("postId", post_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        Ok(self.executor.paginate(
            &descriptors::COMMENTS_LIST,
            positional,
            optional,
            options.request_options,
        ))
    }

    /// Fetches all the pages of [list][Self::list].
    ///
    /// If a page fails, the result holds the pages received before the error.
    pub async fn list_all(
        &self,
        blog_id: impl Into<String>,
        post_id: impl Into<String>,
        options: CommentsListOptions,
    ) -> crate::Result<gax::paginator::AllPages<model::CommentList>> {
        Ok(self.list_stream(blog_id, post_id, options)?.collect_all().await)
    }

    /// Retrieves the comments for a blog, across all posts, possibly filtered.
    pub async fn list_by_blog(
        &self,
        blog_id: impl Into<String>,
        options: CommentsListByBlogOptions,
    ) -> crate::Result<model::CommentList> {
        let positional = ParameterBag::new().with("blogId", blog_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute(
                &descriptors::COMMENTS_LIST_BY_BLOG,
                positional,
                optional,
                options.request_options,
            )
            .await
    }

    /// Returns a stream with the pages of [list_by_blog][Self::list_by_blog].
    ///
    /// The stream ends after the last page, or after the first error.
    pub fn list_by_blog_stream(
        &self,
        blog_id: impl Into<String>,
        options: CommentsListByBlogOptions,
    ) -> crate::Result<gax::paginator::Paginator<model::CommentList>> {
        let positional = ParameterBag::new().with("blogId", blog_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        Ok(self.executor.paginate(
            &descriptors::COMMENTS_LIST_BY_BLOG,
            positional,
            optional,
            options.request_options,
        ))
    }

    /// Fetches all the pages of [list_by_blog][Self::list_by_blog].
    ///
    /// If a page fails, the result holds the pages received before the error.
    pub async fn list_by_blog_all(
        &self,
        blog_id: impl Into<String>,
        options: CommentsListByBlogOptions,
    ) -> crate::Result<gax::paginator::AllPages<model::CommentList>> {
        Ok(self.list_by_blog_stream(blog_id, options)?.collect_all().await)
    }

    /// Marks a comment as spam.
    pub async fn mark_as_spam(
        &self,
        blog_id: impl Into<String>,
        post_id: impl Into<String>,
        comment_id: impl Into<String>,
        options: CommentsMarkAsSpamOptions,
    ) -> crate::Result<model::Comment> {
        let positional = ParameterBag::new()
            .with("blogId", blog_id.into())
            .with("postId", post_id.into())
            .with("commentId", comment_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute(
                &descriptors::COMMENTS_MARK_AS_SPAM,
                positional,
                optional,
                options.request_options,
            )
            .await
    }

    /// Removes the content of a comment.
    pub async fn remove_content(
        &self,
        blog_id: impl Into<String>,
        post_id: impl Into<String>,
        comment_id: impl Into<String>,
        options: CommentsRemoveContentOptions,
    ) -> crate::Result<model::Comment> {
        let positional = ParameterBag::new()
            .with("blogId", blog_id.into())
            .with("postId", post_id.into())
            .with("commentId", comment_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute(
                &descriptors::COMMENTS_REMOVE_CONTENT,
                positional,
                optional,
                options.request_options,
            )
            .await
    }
}

/// Implements the `pageViews` resource.
///
/// Use [Blogger::page_views] to create instances of this type.
#[derive(Clone, Debug)]
pub struct PageViews {
    executor: gax::executor::RequestExecutor,
}

impl PageViews {
    /// Retrieve pageview stats for a Blog.
    pub async fn get(
        &self,
        blog_id: impl Into<String>,
        options: PageViewsGetOptions,
    ) -> crate::Result<model::Pageviews> {
        let positional = ParameterBag::new().with("blogId", blog_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute(
                &descriptors::PAGE_VIEWS_GET,
                positional,
                optional,
                options.request_options,
            )
            .await
    }
}

/// Implements the `pages` resource.
///
/// Use [Blogger::pages] to create instances of this type.
#[derive(Clone, Debug)]
pub struct Pages {
    executor: gax::executor::RequestExecutor,
}

impl Pages {
    /// Delete a page by ID.
    pub async fn delete(
        &self,
        blog_id: impl Into<String>,
        page_id: impl Into<String>,
        options: PagesDeleteOptions,
    ) -> crate::Result<()> {
        let positional = ParameterBag::new()
            .with("blogId", blog_id.into())
            .with("pageId", page_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute::<serde_json::Value>(
                &descriptors::PAGES_DELETE,
                positional,
                optional,
                options.request_options,
            )
            .await
            .map(|_| ())
    }

    /// Gets one blog page by ID.
    pub async fn get(
        &self,
        blog_id: impl Into<String>,
        page_id: impl Into<String>,
        options: PagesGetOptions,
    ) -> crate::Result<model::Page> {
        let positional = ParameterBag::new()
            .with("blogId", blog_id.into())
            .with("pageId", page_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute(
                &descriptors::PAGES_GET,
                positional,
                optional,
                options.request_options,
            )
            .await
    }

    /// Add a page.
    pub async fn insert(
        &self,
        blog_id: impl Into<String>,
        body: model::Page,
        options: PagesInsertOptions,
    ) -> crate::Result<model::Page> {
        let positional = ParameterBag::new().with("blogId", blog_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute_with_body(
                &descriptors::PAGES_INSERT,
                positional,
                optional,
                &body,
                options.request_options,
            )
            .await
    }

    /// Retrieves the pages for a blog, optionally including non-LIVE statuses.
    pub async fn list(
        &self,
        blog_id: impl Into<String>,
        options: PagesListOptions,
    ) -> crate::Result<model::PageList> {
        let positional = ParameterBag::new().with("blogId", blog_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute(
                &descriptors::PAGES_LIST,
                positional,
                optional,
                options.request_options,
            )
            .await
    }

    /// Returns a stream with the pages of [list][Self::list].
    ///
    /// The stream ends after the last page, or after the first error.
    pub fn list_stream(
        &self,
        blog_id: impl Into<String>,
        options: PagesListOptions,
    ) -> crate::Result<gax::paginator::Paginator<model::PageList>> {
        let positional = ParameterBag::new().with("blogId", blog_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        Ok(self.executor.paginate(
            &descriptors::PAGES_LIST,
            positional,
            optional,
            options.request_options,
        ))
    }

    /// Fetches all the pages of [list][Self::list].
    ///
    /// If a page fails, the result holds the pages received before the error.
    pub async fn list_all(
        &self,
        blog_id: impl Into<String>,
        options: PagesListOptions,
    ) -> crate::Result<gax::paginator::AllPages<model::PageList>> {
        Ok(self.list_stream(blog_id, options)?.collect_all().await)
    }

    /// Update a page. This method supports patch semantics.
    pub async fn patch(
        &self,
        blog_id: impl Into<String>,
        page_id: impl Into<String>,
        body: model::Page,
        options: PagesPatchOptions,
    ) -> crate::Result<model::Page> {
        let positional = ParameterBag::new()
            .with("blogId", blog_id.into())
            .with("pageId", page_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute_with_body(
                &descriptors::PAGES_PATCH,
                positional,
                optional,
                &body,
                options.request_options,
            )
            .await
    }

    /// Publishes a draft page.
    pub async fn publish(
        &self,
        blog_id: impl Into<String>,
        page_id: impl Into<String>,
        options: PagesPublishOptions,
    ) -> crate::Result<model::Page> {
        let positional = ParameterBag::new()
            .with("blogId", blog_id.into())
            .with("pageId", page_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute(
                &descriptors::PAGES_PUBLISH,
                positional,
                optional,
                options.request_options,
            )
            .await
    }

    /// Revert a published or scheduled page to draft state.
    pub async fn revert(
        &self,
        blog_id: impl Into<String>,
        page_id: impl Into<String>,
        options: PagesRevertOptions,
    ) -> crate::Result<model::Page> {
        let positional = ParameterBag::new()
            .with("blogId", blog_id.into())
            .with("pageId", page_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute(
                &descriptors::PAGES_REVERT,
                positional,
                optional,
                options.request_options,
            )
            .await
    }

    /// Update a page.
    pub async fn update(
        &self,
        blog_id: impl Into<String>,
        page_id: impl Into<String>,
        body: model::Page,
        options: PagesUpdateOptions,
    ) -> crate::Result<model::Page> {
        let positional = ParameterBag::new()
            .with("blogId", blog_id.into())
            .with("pageId", page_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute_with_body(
                &descriptors::PAGES_UPDATE,
                positional,
                optional,
                &body,
                options.request_options,
            )
            .await
    }
}

/// Implements the `postUserInfos` resource.
///
/// Use [Blogger::post_user_infos] to create instances of this type.
#[derive(Clone, Debug)]
pub struct PostUserInfos {
    executor: gax::executor::RequestExecutor,
}

impl PostUserInfos {
    /// Gets one post and user info pair, by post ID and user ID. The post user info
    /// contains per-user information about the post, such as access rights,
    /// specific to the user.
    pub async fn get(
        &self,
        user_id: impl Into<String>,
        blog_id: impl Into<String>,
        post_id: impl Into<String>,
        options: PostUserInfosGetOptions,
    ) -> crate::Result<model::PostUserInfo> {
        let positional = ParameterBag::new()
            .with("userId", user_id.into())
            .with("blogId", blog_id.into())
            .with("postId", post_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute(
                &descriptors::POST_USER_INFOS_GET,
                positional,
                optional,
                options.request_options,
            )
            .await
    }

    /// Retrieves a list of post and post user info pairs, possibly filtered. The
    /// post user info contains per-user information about the post, such as access
    /// rights, specific to the user.
    pub async fn list(
        &self,
        user_id: impl Into<String>,
        blog_id: impl Into<String>,
        options: PostUserInfosListOptions,
    ) -> crate::Result<model::PostUserInfosList> {
        let positional = ParameterBag::new()
            .with("userId", user_id.into())
            .with("blogId", blog_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute(
                &descriptors::POST_USER_INFOS_LIST,
                positional,
                optional,
                options.request_options,
            )
            .await
    }

    /// Returns a stream with the pages of [list][Self::list].
    ///
    /// The stream ends after the last page, or after the first error.
    pub fn list_stream(
        &self,
        user_id: impl Into<String>,
        blog_id: impl Into<String>,
        options: PostUserInfosListOptions,
    ) -> crate::Result<gax::paginator::Paginator<model::PostUserInfosList>> {
        let positional = ParameterBag::new()
            .with("userId", user_id.into())
            .with("blogId", blog_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        Ok(self.executor.paginate(
            &descriptors::POST_USER_INFOS_LIST,
            positional,
            optional,
            options.request_options,
        ))
    }

    /// Fetches all the pages of [list][Self::list].
    ///
    /// If a page fails, the result holds the pages received before the error.
    pub async fn list_all(
        &self,
        user_id: impl Into<String>,
        blog_id: impl Into<String>,
        options: PostUserInfosListOptions,
    ) -> crate::Result<gax::paginator::AllPages<model::PostUserInfosList>> {
        Ok(self.list_stream(user_id, blog_id, options)?.collect_all().await)
    }
}

/// Implements the `posts` resource.
///
/// Use [Blogger::posts] to create instances of this type.
#[derive(Clone, Debug)]
pub struct Posts {
    executor: gax::executor::RequestExecutor,
}

impl Posts {
    /// Delete a post by ID.
    pub async fn delete(
        &self,
        blog_id: impl Into<String>,
        post_id: impl Into<String>,
        options: PostsDeleteOptions,
    ) -> crate::Result<()> {
        let positional = ParameterBag::new()
            .with("blogId", blog_id.into())
            .with("postId", post_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute::<serde_json::Value>(
                &descriptors::POSTS_DELETE,
                positional,
                optional,
                options.request_options,
            )
            .await
            .map(|_| ())
    }

    /// Get a post by ID.
    pub async fn get(
        &self,
        blog_id: impl Into<String>,
        post_id: impl Into<String>,
        options: PostsGetOptions,
    ) -> crate::Result<model::Post> {
        let positional = ParameterBag::new()
            .with("blogId", blog_id.into())
            .with("postId", post_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute(
                &descriptors::POSTS_GET,
                positional,
                optional,
                options.request_options,
            )
            .await
    }

    /// Retrieve a Post by Path.
    pub async fn get_by_path(
        &self,
        blog_id: impl Into<String>,
        path: impl Into<String>,
        options: PostsGetByPathOptions,
    ) -> crate::Result<model::Post> {
        let positional = ParameterBag::new()
            .with("blogId", blog_id.into())
            .with("path", path.into());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute(
                &descriptors::POSTS_GET_BY_PATH,
                positional,
                optional,
                options.request_options,
            )
            .await
    }

    /// Add a post.
    pub async fn insert(
        &self,
        blog_id: impl Into<String>,
        body: model::Post,
        options: PostsInsertOptions,
    ) -> crate::Result<model::Post> {
        let positional = ParameterBag::new().with("blogId", blog_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute_with_body(
                &descriptors::POSTS_INSERT,
                positional,
                optional,
                &body,
                options.request_options,
            )
            .await
    }

    /// Retrieves a list of posts, possibly filtered.
    pub async fn list(
        &self,
        blog_id: impl Into<String>,
        options: PostsListOptions,
    ) -> crate::Result<model::PostList> {
        let positional = ParameterBag::new().with("blogId", blog_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute(
                &descriptors::POSTS_LIST,
                positional,
                optional,
                options.request_options,
            )
            .await
    }

    /// Returns a stream with the pages of [list][Self::list].
    ///
    /// The stream ends after the last page, or after the first error.
    pub fn list_stream(
        &self,
        blog_id: impl Into<String>,
        options: PostsListOptions,
    ) -> crate::Result<gax::paginator::Paginator<model::PostList>> {
        let positional = ParameterBag::new().with("blogId", blog_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        Ok(self.executor.paginate(
            &descriptors::POSTS_LIST,
            positional,
            optional,
            options.request_options,
        ))
    }

    /// Fetches all the pages of [list][Self::list].
    ///
    /// If a page fails, the result holds the pages received before the error.
    pub async fn list_all(
        &self,
        blog_id: impl Into<String>,
        options: PostsListOptions,
    ) -> crate::Result<gax::paginator::AllPages<model::PostList>> {
        Ok(self.list_stream(blog_id, options)?.collect_all().await)
    }

    /// Update a post. This method supports patch semantics.
    pub async fn patch(
        &self,
        blog_id: impl Into<String>,
        post_id: impl Into<String>,
        body: model::Post,
        options: PostsPatchOptions,
    ) -> crate::Result<model::Post> {
        let positional = ParameterBag::new()
            .with("blogId", blog_id.into())
            .with("postId", post_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute_with_body(
                &descriptors::POSTS_PATCH,
                positional,
                optional,
                &body,
                options.request_options,
            )
            .await
    }

    /// Publishes a draft post, optionally at the specific time of the given
    /// publishDate parameter.
    pub async fn publish(
        &self,
        blog_id: impl Into<String>,
        post_id: impl Into<String>,
        options: PostsPublishOptions,
    ) -> crate::Result<model::Post> {
        let positional = ParameterBag::new()
            .with("blogId", blog_id.into())
            .with("postId", post_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute(
                &descriptors::POSTS_PUBLISH,
                positional,
                optional,
                options.request_options,
            )
            .await
    }

    /// Revert a published or scheduled post to draft state.
    pub async fn revert(
        &self,
        blog_id: impl Into<String>,
        post_id: impl Into<String>,
        options: PostsRevertOptions,
    ) -> crate::Result<model::Post> {
        let positional = ParameterBag::new()
            .with("blogId", blog_id.into())
            .with("postId", post_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute(
                &descriptors::POSTS_REVERT,
                positional,
                optional,
                options.request_options,
            )
            .await
    }

    /// Search for a post.
    pub async fn search(
        &self,
        blog_id: impl Into<String>,
        q: impl Into<String>,
        options: PostsSearchOptions,
    ) -> crate::Result<model::PostList> {
        let positional = ParameterBag::new()
            .with("blogId", blog_id.into())
            .with("q", q.into());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute(
                &descriptors::POSTS_SEARCH,
                positional,
                optional,
                options.request_options,
            )
            .await
    }

    /// Update a post.
    pub async fn update(
        &self,
        blog_id: impl Into<String>,
        post_id: impl Into<String>,
        body: model::Post,
        options: PostsUpdateOptions,
    ) -> crate::Result<model::Post> {
        let positional = ParameterBag::new()
            .with("blogId", blog_id.into())
            .with("postId", post_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute_with_body(
                &descriptors::POSTS_UPDATE,
                positional,
                optional,
                &body,
                options.request_options,
            )
            .await
    }
}

/// Implements the `users` resource.
///
/// Use [Blogger::users] to create instances of this type.
#[derive(Clone, Debug)]
pub struct Users {
    executor: gax::executor::RequestExecutor,
}

impl Users {
    /// Gets one user by ID.
    pub async fn get(
        &self,
        user_id: impl Into<String>,
        options: UsersGetOptions,
    ) -> crate::Result<model::User> {
        let positional = ParameterBag::new().with("userId", user_id.into());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute(
                &descriptors::USERS_GET,
                positional,
                optional,
                options.request_options,
            )
            .await
    }
}

/// The optional parameters for [BlogUserInfos::get].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogUserInfosGetOptions {
    /// Maximum number of posts to pull back with the blog.
    pub max_posts: Option<u32>,
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for BlogUserInfosGetOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [Blogs::get].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogsGetOptions {
    /// Maximum number of posts to pull back with the blog.
    pub max_posts: Option<u32>,
    /// Access level with which to view the blog. Note that some fields require
    /// elevated access.
    ///
    /// Possible values: `ADMIN`, `AUTHOR`, `READER`.
    pub view: Option<String>,
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for BlogsGetOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [Blogs::get_by_url].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogsGetByUrlOptions {
    /// Access level with which to view the blog. Note that some fields require
    /// elevated access.
    ///
    /// Possible values: `ADMIN`, `AUTHOR`, `READER`.
    pub view: Option<String>,
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for BlogsGetByUrlOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [Blogs::list_by_user].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogsListByUserOptions {
    /// Whether the response is a list of blogs with per-user information instead of
    /// just blogs.
    pub fetch_user_info: Option<bool>,
    /// User access types for blogs to include in the results, e.g. AUTHOR will
    /// return blogs where the user has author level access. If no roles are
    /// specified, defaults to ADMIN and AUTHOR roles.
    pub role: Option<Vec<String>>,
    /// Blog statuses to include in the result (default: Live blogs only). Note that
    /// ADMIN access is required to view deleted blogs.
    pub status: Option<Vec<String>>,
    /// Access level with which to view the blogs. Note that some fields require
    /// elevated access.
    ///
    /// Possible values: `ADMIN`, `AUTHOR`, `READER`.
    pub view: Option<String>,
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for BlogsListByUserOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [Comments::approve].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentsApproveOptions {
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for CommentsApproveOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [Comments::delete].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentsDeleteOptions {
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for CommentsDeleteOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [Comments::get].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentsGetOptions {
    /// Access level for the requested comment (default: READER). Note that some
    /// comments will require elevated permissions, for example comments where the
    /// parent posts which is in a draft state, or comments that are pending
    /// moderation.
    ///
    /// Possible values: `ADMIN`, `AUTHOR`, `READER`.
    pub view: Option<String>,
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for CommentsGetOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [Comments::list].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentsListOptions {
    /// Latest date of comment to fetch, a date-time with RFC 3339 formatting.
    pub end_date: Option<String>,
    /// Whether the body content of the comments is included.
    pub fetch_bodies: Option<bool>,
    /// Maximum number of comments to include in the result.
    pub max_results: Option<u32>,
    /// Continuation token if request is paged.
    pub page_token: Option<String>,
    /// Earliest date of comment to fetch, a date-time with RFC 3339 formatting.
    pub start_date: Option<String>,
    /// Possible values: `emptied`, `live`, `pending`, `spam`.
    pub status: Option<Vec<String>>,
    /// Access level with which to view the returned result. Note that some fields
    /// require elevated access.
    ///
    /// Possible values: `ADMIN`, `AUTHOR`, `READER`.
    pub view: Option<String>,
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for CommentsListOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [Comments::list_by_blog].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentsListByBlogOptions {
    /// Latest date of comment to fetch, a date-time with RFC 3339 formatting.
    pub end_date: Option<String>,
    /// Whether the body content of the comments is included.
    pub fetch_bodies: Option<bool>,
    /// Maximum number of comments to include in the result.
    pub max_results: Option<u32>,
    /// Continuation token if request is paged.
    pub page_token: Option<String>,
    /// Earliest date of comment to fetch, a date-time with RFC 3339 formatting.
    pub start_date: Option<String>,
    /// Possible values: `emptied`, `live`, `pending`, `spam`.
    pub status: Option<Vec<String>>,
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for CommentsListByBlogOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [Comments::mark_as_spam].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentsMarkAsSpamOptions {
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for CommentsMarkAsSpamOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [Comments::remove_content].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentsRemoveContentOptions {
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for CommentsRemoveContentOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [PageViews::get].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageViewsGetOptions {
    pub range: Option<Vec<String>>,
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for PageViewsGetOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [Pages::delete].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagesDeleteOptions {
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for PagesDeleteOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [Pages::get].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagesGetOptions {
    /// Possible values: `ADMIN`, `AUTHOR`, `READER`.
    pub view: Option<String>,
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for PagesGetOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [Pages::insert].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagesInsertOptions {
    /// Whether to create the page as a draft (default: false).
    pub is_draft: Option<bool>,
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for PagesInsertOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [Pages::list].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagesListOptions {
    /// Whether to retrieve the Page bodies.
    pub fetch_bodies: Option<bool>,
    /// Maximum number of Pages to fetch.
    pub max_results: Option<u32>,
    /// Continuation token if the request is paged.
    pub page_token: Option<String>,
    /// Possible values: `draft`, `live`.
    pub status: Option<Vec<String>>,
    /// Access level with which to view the returned result. Note that some fields
    /// require elevated access.
    ///
    /// Possible values: `ADMIN`, `AUTHOR`, `READER`.
    pub view: Option<String>,
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for PagesListOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [Pages::patch].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagesPatchOptions {
    /// Whether a publish action should be performed when the page is updated
    /// (default: false).
    pub publish: Option<bool>,
    /// Whether a revert action should be performed when the page is updated
    /// (default: false).
    pub revert: Option<bool>,
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for PagesPatchOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [Pages::publish].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagesPublishOptions {
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for PagesPublishOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [Pages::revert].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagesRevertOptions {
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for PagesRevertOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [Pages::update].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagesUpdateOptions {
    /// Whether a publish action should be performed when the page is updated
    /// (default: false).
    pub publish: Option<bool>,
    /// Whether a revert action should be performed when the page is updated
    /// (default: false).
    pub revert: Option<bool>,
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for PagesUpdateOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [PostUserInfos::get].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostUserInfosGetOptions {
    /// Maximum number of comments to pull back on a post.
    pub max_comments: Option<u32>,
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for PostUserInfosGetOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [PostUserInfos::list].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostUserInfosListOptions {
    /// Latest post date to fetch, a date-time with RFC 3339 formatting.
    pub end_date: Option<String>,
    /// Whether the body content of posts is included. Default is false.
    pub fetch_bodies: Option<bool>,
    /// Comma-separated list of labels to search for.
    pub labels: Option<String>,
    /// Maximum number of posts to fetch.
    pub max_results: Option<u32>,
    /// Sort order applied to search results. Default is published.
    ///
    /// Possible values: `published`, `updated`.
    pub order_by: Option<String>,
    /// Continuation token if the request is paged.
    pub page_token: Option<String>,
    /// Earliest post date to fetch, a date-time with RFC 3339 formatting.
    pub start_date: Option<String>,
    pub status: Option<Vec<String>>,
    /// Access level with which to view the returned result. Note that some fields
    /// require elevated access.
    ///
    /// Possible values: `ADMIN`, `AUTHOR`, `READER`.
    pub view: Option<String>,
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for PostUserInfosListOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [Posts::delete].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsDeleteOptions {
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for PostsDeleteOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [Posts::get].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsGetOptions {
    /// Whether the body content of the post is included (default: true). This
    /// should be set to false when the post bodies are not required, to help
    /// minimize traffic.
    pub fetch_body: Option<bool>,
    /// Whether image URL metadata for each post is included (default: false).
    pub fetch_images: Option<bool>,
    /// Maximum number of comments to pull back on a post.
    pub max_comments: Option<u32>,
    /// Access level with which to view the returned result. Note that some fields
    /// require elevated access.
    ///
    /// Possible values: `ADMIN`, `AUTHOR`, `READER`.
    pub view: Option<String>,
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for PostsGetOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [Posts::get_by_path].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsGetByPathOptions {
    /// Maximum number of comments to pull back on a post.
    pub max_comments: Option<u32>,
    /// Access level with which to view the returned result. Note that some fields
    /// require elevated access.
    ///
    /// Possible values: `ADMIN`, `AUTHOR`, `READER`.
    pub view: Option<String>,
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for PostsGetByPathOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [Posts::insert].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsInsertOptions {
    /// Whether the body content of the post is included with the result (default:
    /// true).
    pub fetch_body: Option<bool>,
    /// Whether image URL metadata for each post is included in the returned result
    /// (default: false).
    pub fetch_images: Option<bool>,
    /// Whether to create the post as a draft (default: false).
    pub is_draft: Option<bool>,
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for PostsInsertOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [Posts::list].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsListOptions {
    /// Latest post date to fetch, a date-time with RFC 3339 formatting.
    pub end_date: Option<String>,
    /// Whether the body content of posts is included (default: true). This should
    /// be set to false when the post bodies are not required, to help minimize
    /// traffic.
    pub fetch_bodies: Option<bool>,
    /// Whether image URL metadata for each post is included.
    pub fetch_images: Option<bool>,
    /// Comma-separated list of labels to search for.
    pub labels: Option<String>,
    /// Maximum number of posts to fetch.
    pub max_results: Option<u32>,
    /// Sort search results
    ///
    /// Possible values: `published`, `updated`.
    pub order_by: Option<String>,
    /// Continuation token if the request is paged.
    pub page_token: Option<String>,
    /// Earliest post date to fetch, a date-time with RFC 3339 formatting.
    pub start_date: Option<String>,
    /// Statuses to include in the results.
    ///
    /// Possible values: `draft`, `live`, `scheduled`.
    pub status: Option<Vec<String>>,
    /// Access level with which to view the returned result. Note that some fields
    /// require escalated access.
    ///
    /// Possible values: `ADMIN`, `AUTHOR`, `READER`.
    pub view: Option<String>,
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for PostsListOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [Posts::patch].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsPatchOptions {
    /// Whether the body content of the post is included with the result (default:
    /// true).
    pub fetch_body: Option<bool>,
    /// Whether image URL metadata for each post is included in the returned result
    /// (default: false).
    pub fetch_images: Option<bool>,
    /// Maximum number of comments to retrieve with the returned post.
    pub max_comments: Option<u32>,
    /// Whether a publish action should be performed when the post is updated
    /// (default: false).
    pub publish: Option<bool>,
    /// Whether a revert action should be performed when the post is updated
    /// (default: false).
    pub revert: Option<bool>,
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for PostsPatchOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [Posts::publish].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsPublishOptions {
    /// Optional date and time to schedule the publishing of the Blog. If no
    /// publishDate parameter is given, the post is either published at the a
    /// previously saved schedule date (if present), or the current time. If a
    /// future date is given, the post will be scheduled to be published.
    pub publish_date: Option<String>,
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for PostsPublishOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [Posts::revert].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsRevertOptions {
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for PostsRevertOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [Posts::search].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsSearchOptions {
    /// Whether the body content of posts is included (default: true). This should
    /// be set to false when the post bodies are not required, to help minimize
    /// traffic.
    pub fetch_bodies: Option<bool>,
    /// Sort search results
    ///
    /// Possible values: `published`, `updated`.
    pub order_by: Option<String>,
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for PostsSearchOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [Posts::update].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsUpdateOptions {
    /// Whether the body content of the post is included with the result (default:
    /// true).
    pub fetch_body: Option<bool>,
    /// Whether image URL metadata for each post is included in the returned result
    /// (default: false).
    pub fetch_images: Option<bool>,
    /// Maximum number of comments to retrieve with the returned post.
    pub max_comments: Option<u32>,
    /// Whether a publish action should be performed when the post is updated
    /// (default: false).
    pub publish: Option<bool>,
    /// Whether a revert action should be performed when the post is updated
    /// (default: false).
    pub revert: Option<bool>,
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for PostsUpdateOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [Users::get].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersGetOptions {
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for UsersGetOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}
