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

//! The [YouTube] client, its resources, and the options for each method.

use crate::descriptors;
use crate::model;
use gax::parameter_bag::ParameterBag;

/// Implements a client for the YouTube Data API v3.
///
/// The YouTube Data API v3 is an API that provides access to YouTube data, such
/// as videos, playlists, and channels.
///
/// # Example
/// ```no_run
/// # async fn sample() -> anyhow::Result<()> {
/// use youtube_v3::client::YouTube;
/// let client = YouTube::builder().build().await?;
/// # Ok(()) }
/// ```
///
/// # Configuration
///
/// To configure `YouTube` use the `with_*` methods in the type returned by
/// [builder()][YouTube::builder]. The default configuration uses the
/// [DEFAULT_ENDPOINT][YouTube::DEFAULT_ENDPOINT], sends no credentials, and
/// retries transient errors, up to five attempts per call.
///
/// # Pooling and Cloning
///
/// `YouTube` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `YouTube` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct YouTube {
    executor: gax::executor::RequestExecutor,
}

impl YouTube {
    /// The service endpoint used when none is configured.
    pub const DEFAULT_ENDPOINT: &str = "https://youtube.googleapis.com/";

    /// The `https://www.googleapis.com/auth/youtube` OAuth2 scope.
    pub const YOUTUBE: &str = "https://www.googleapis.com/auth/youtube";

    /// The `https://www.googleapis.com/auth/youtube.force-ssl` OAuth2 scope.
    pub const YOUTUBE_FORCE_SSL: &str = "https://www.googleapis.com/auth/youtube.force-ssl";

    /// The `https://www.googleapis.com/auth/youtube.readonly` OAuth2 scope.
    pub const YOUTUBE_READONLY: &str = "https://www.googleapis.com/auth/youtube.readonly";

    /// Returns a builder for [YouTube].
    ///
    /// ```no_run
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use youtube_v3::client::YouTube;
    /// let client = YouTube::builder()
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

    /// The `channels` resource.
    pub fn channels(&self) -> Channels {
        Channels {
            executor: self.executor.clone(),
        }
    }

    /// The `commentThreads` resource.
    pub fn comment_threads(&self) -> CommentThreads {
        CommentThreads {
            executor: self.executor.clone(),
        }
    }

    /// The `comments` resource.
    pub fn comments(&self) -> Comments {
        Comments {
            executor: self.executor.clone(),
        }
    }
}

/// A builder for [YouTube].
pub type ClientBuilder = gax::client_builder::ClientBuilder<client_factory::Factory>;

pub(crate) mod client_factory {
    pub struct Factory;
    impl gax::client_builder::internal::ClientFactory for Factory {
        type Client = super::YouTube;
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

/// Implements the `channels` resource.
///
/// Use [YouTube::channels] to create instances of this type.
#[derive(Clone, Debug)]
pub struct Channels {
    executor: gax::executor::RequestExecutor,
}

impl Channels {
    /// Retrieves a list of resources, possibly filtered.
    pub async fn list(
        &self,
        part: impl IntoIterator<Item = impl Into<String>>,
        options: ChannelsListOptions,
    ) -> crate::Result<model::ChannelListResponse> {
        let positional = ParameterBag::new()
            .with("part", part.into_iter().map(Into::into).collect::<Vec<String>>());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute(
                &descriptors::CHANNELS_LIST,
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
        part: impl IntoIterator<Item = impl Into<String>>,
        options: ChannelsListOptions,
    ) -> crate::Result<gax::paginator::Paginator<model::ChannelListResponse>> {
        let positional = ParameterBag::new()
            .with("part", part.into_iter().map(Into::into).collect::<Vec<String>>());
        let optional = ParameterBag::from_serialize(&options)?;
        Ok(self.executor.paginate(
            &descriptors::CHANNELS_LIST,
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
        part: impl IntoIterator<Item = impl Into<String>>,
        options: ChannelsListOptions,
    ) -> crate::Result<gax::paginator::AllPages<model::ChannelListResponse>> {
        Ok(self.list_stream(part, options)?.collect_all().await)
    }
}

/// Implements the `commentThreads` resource.
///
/// Use [YouTube::comment_threads] to create instances of this type.
#[derive(Clone, Debug)]
pub struct CommentThreads {
    executor: gax::executor::RequestExecutor,
}

impl CommentThreads {
    /// Inserts a new resource into this collection.
    pub async fn insert(
        &self,
        part: impl IntoIterator<Item = impl Into<String>>,
        body: model::CommentThread,
        options: CommentThreadsInsertOptions,
    ) -> crate::Result<model::CommentThread> {
        let positional = ParameterBag::new()
            .with("part", part.into_iter().map(Into::into).collect::<Vec<String>>());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute_with_body(
                &descriptors::COMMENT_THREADS_INSERT,
                positional,
                optional,
                &body,
                options.request_options,
            )
            .await
    }

    /// Retrieves a list of resources, possibly filtered.
    pub async fn list(
        &self,
        part: impl IntoIterator<Item = impl Into<String>>,
        options: CommentThreadsListOptions,
    ) -> crate::Result<model::CommentThreadListResponse> {
        let positional = ParameterBag::new()
            .with("part", part.into_iter().map(Into::into).collect::<Vec<String>>());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute(
                &descriptors::COMMENT_THREADS_LIST,
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
        part: impl IntoIterator<Item = impl Into<String>>,
        options: CommentThreadsListOptions,
    ) -> crate::Result<gax::paginator::Paginator<model::CommentThreadListResponse>> {
        let positional = ParameterBag::new()
            .with("part", part.into_iter().map(Into::into).collect::<Vec<String>>());
        let optional = ParameterBag::from_serialize(&options)?;
        Ok(self.executor.paginate(
            &descriptors::COMMENT_THREADS_LIST,
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
        part: impl IntoIterator<Item = impl Into<String>>,
        options: CommentThreadsListOptions,
    ) -> crate::Result<gax::paginator::AllPages<model::CommentThreadListResponse>> {
        Ok(self.list_stream(part, options)?.collect_all().await)
    }
}

/// Implements the `comments` resource.
///
/// Use [YouTube::comments] to create instances of this type.
#[derive(Clone, Debug)]
pub struct Comments {
    executor: gax::executor::RequestExecutor,
}

impl Comments {
    /// Deletes a resource.
    pub async fn delete(
        &self,
        id: impl Into<String>,
        options: CommentsDeleteOptions,
    ) -> crate::Result<()> {
        let positional = ParameterBag::new().with("id", id.into());
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

    /// Inserts a new resource into this collection.
    pub async fn insert(
        &self,
        part: impl IntoIterator<Item = impl Into<String>>,
        body: model::Comment,
        options: CommentsInsertOptions,
    ) -> crate::Result<model::Comment> {
        let positional = ParameterBag::new()
            .with("part", part.into_iter().map(Into::into).collect::<Vec<String>>());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute_with_body(
                &descriptors::COMMENTS_INSERT,
                positional,
                optional,
                &body,
                options.request_options,
            )
            .await
    }

    /// Retrieves a list of resources, possibly filtered.
    pub async fn list(
        &self,
        part: impl IntoIterator<Item = impl Into<String>>,
        options: CommentsListOptions,
    ) -> crate::Result<model::CommentListResponse> {
        let positional = ParameterBag::new()
            .with("part", part.into_iter().map(Into::into).collect::<Vec<String>>());
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
        part: impl IntoIterator<Item = impl Into<String>>,
        options: CommentsListOptions,
    ) -> crate::Result<gax::paginator::Paginator<model::CommentListResponse>> {
        let positional = ParameterBag::new()
            .with("part", part.into_iter().map(Into::into).collect::<Vec<String>>());
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
        part: impl IntoIterator<Item = impl Into<String>>,
        options: CommentsListOptions,
    ) -> crate::Result<gax::paginator::AllPages<model::CommentListResponse>> {
        Ok(self.list_stream(part, options)?.collect_all().await)
    }

    /// Sets the moderation status of one or more comments.
    pub async fn set_moderation_status(
        &self,
        id: impl IntoIterator<Item = impl Into<String>>,
        moderation_status: impl Into<String>,
        options: CommentsSetModerationStatusOptions,
    ) -> crate::Result<()> {
        let positional = ParameterBag::new()
            .with("id", id.into_iter().map(Into::into).collect::<Vec<String>>())
            .with("moderationStatus", moderation_status.into());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute::<serde_json::Value>(
                &descriptors::COMMENTS_SET_MODERATION_STATUS,
                positional,
                optional,
                options.request_options,
            )
            .await
            .map(|_| ())
    }

    /// Updates an existing resource.
    pub async fn update(
        &self,
        part: impl IntoIterator<Item = impl Into<String>>,
        body: model::Comment,
        options: CommentsUpdateOptions,
    ) -> crate::Result<model::Comment> {
        let positional = ParameterBag::new()
            .with("part", part.into_iter().map(Into::into).collect::<Vec<String>>());
        let optional = ParameterBag::from_serialize(&options)?;
        self.executor
            .execute_with_body(
                &descriptors::COMMENTS_UPDATE,
                positional,
                optional,
                &body,
                options.request_options,
            )
            .await
    }
}

/// The optional parameters for [Channels::list].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelsListOptions {
    /// Return the channel associated with a YouTube username.
    pub for_username: Option<String>,
    /// Stands for "host language".
    pub hl: Option<String>,
    /// Return the channels with the specified IDs.
    pub id: Option<Vec<String>>,
    /// The maximum number of items that should be returned in the result set.
    ///
    /// Defaults to `5`.
    pub max_results: Option<u32>,
    /// Return the ids of channels owned by the authenticated user.
    pub mine: Option<bool>,
    /// The pageToken parameter identifies a specific page in the result set that
    /// should be returned.
    pub page_token: Option<String>,
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for ChannelsListOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [CommentThreads::insert].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadsInsertOptions {
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for CommentThreadsInsertOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [CommentThreads::list].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadsListOptions {
    /// Returns the comment threads of all videos of the channel and the channel
    /// comments as well.
    pub all_threads_related_to_channel_id: Option<String>,
    /// Returns the comment threads with the given IDs.
    pub id: Option<Vec<String>>,
    /// The maximum number of items that should be returned in the result set.
    ///
    /// Defaults to `20`.
    pub max_results: Option<u32>,
    /// Limits the returned comment threads to those with the specified moderation
    /// status.
    ///
    /// Possible values: `published`, `heldForReview`, `likelySpam`, `rejected`.
    /// Defaults to `published`.
    pub moderation_status: Option<String>,
    /// Possible values: `orderUnspecified`, `time`, `relevance`. Defaults to
    /// `time`.
    pub order: Option<String>,
    /// The pageToken parameter identifies a specific page in the result set that
    /// should be returned.
    pub page_token: Option<String>,
    /// Limits the returned comment threads to those matching the specified key
    /// words.
    pub search_terms: Option<String>,
    /// The requested text format for the returned comments.
    ///
    /// Possible values: `textFormatUnspecified`, `html`, `plainText`. Defaults to
    /// `html`.
    pub text_format: Option<String>,
    /// Returns the comment threads of the specified video.
    pub video_id: Option<String>,
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for CommentThreadsListOptions {
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

/// The optional parameters for [Comments::insert].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentsInsertOptions {
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for CommentsInsertOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [Comments::list].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentsListOptions {
    /// Returns the comments with the given IDs.
    pub id: Option<Vec<String>>,
    /// Defaults to `20`.
    pub max_results: Option<u32>,
    pub page_token: Option<String>,
    /// Returns replies to the specified comment.
    pub parent_id: Option<String>,
    /// Possible values: `textFormatUnspecified`, `html`, `plainText`. Defaults to
    /// `html`.
    pub text_format: Option<String>,
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

/// The optional parameters for [Comments::set_moderation_status].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentsSetModerationStatusOptions {
    /// If set to true the author of the comment gets added to the ban list.
    ///
    /// Defaults to `false`.
    pub ban_author: Option<bool>,
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for CommentsSetModerationStatusOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}

/// The optional parameters for [Comments::update].
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentsUpdateOptions {
    /// Parameters accepted by all the methods in the service.
    #[serde(flatten)]
    pub standard: StandardParameters,
    /// Retry, backoff, and timeout settings for this call.
    #[serde(skip)]
    pub request_options: gax::options::RequestOptions,
}

impl gax::options::RequestBuilder for CommentsUpdateOptions {
    fn request_options(&mut self) -> &mut gax::options::RequestOptions {
        &mut self.request_options
    }
}
