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

//! Types and traits to authenticate requests.
//!
//! The client libraries do not acquire or refresh OAuth2 tokens. Applications
//! provide a [CredentialsProvider] that returns the headers for each request.
//! This crate includes providers for anonymous access, API keys, and tokens
//! obtained elsewhere.

use crate::error::CredentialsError;
use http::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use std::sync::Arc;

/// The header used to send API keys.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Produces the authentication headers for each request.
///
/// # Example
/// ```
/// # use gax::credentials::*;
/// # use gax::error::CredentialsError;
/// # use http::HeaderMap;
/// #[derive(Debug)]
/// struct MyTokenSource;
/// #[async_trait::async_trait]
/// impl CredentialsProvider for MyTokenSource {
///     async fn headers(&self) -> Result<HeaderMap, CredentialsError> {
///         // e.g. fetch a token from a secret manager.
///         Ok(HeaderMap::new())
///     }
/// }
/// let credentials = Credentials::from(MyTokenSource);
/// ```
#[async_trait::async_trait]
pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
    /// Returns the headers to add to the next request.
    async fn headers(&self) -> Result<HeaderMap, CredentialsError>;
}

/// A shareable handle to a [CredentialsProvider].
#[derive(Clone, Debug)]
pub struct Credentials {
    inner: Arc<dyn CredentialsProvider>,
}

impl Credentials {
    pub async fn headers(&self) -> Result<HeaderMap, CredentialsError> {
        self.inner.headers().await
    }
}

impl<T> std::convert::From<T> for Credentials
where
    T: CredentialsProvider + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl std::convert::From<Arc<dyn CredentialsProvider>> for Credentials {
    fn from(value: Arc<dyn CredentialsProvider>) -> Self {
        Self { inner: value }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::from(Anonymous)
    }
}

/// Sends no authentication headers.
///
/// Useful for public data, e.g. public blogs, and for tests.
#[derive(Clone, Debug, Default)]
pub struct Anonymous;

#[async_trait::async_trait]
impl CredentialsProvider for Anonymous {
    async fn headers(&self) -> Result<HeaderMap, CredentialsError> {
        Ok(HeaderMap::new())
    }
}

/// Sends an API key with each request.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new<T: Into<String>>(key: T) -> Self {
        Self(key.into())
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ApiKey").field(&"[censored]").finish()
    }
}

#[async_trait::async_trait]
impl CredentialsProvider for ApiKey {
    async fn headers(&self) -> Result<HeaderMap, CredentialsError> {
        let mut value = HeaderValue::from_str(&self.0).map_err(|e| CredentialsError::new(false, e))?;
        value.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
        Ok(headers)
    }
}

/// Sends a fixed OAuth2 access token as a `Bearer` token.
///
/// The token is not refreshed. Applications that need refresh should implement
/// [CredentialsProvider].
#[derive(Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new<T: Into<String>>(token: T) -> Self {
        Self(token.into())
    }
}

impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("StaticToken").field(&"[censored]").finish()
    }
}

#[async_trait::async_trait]
impl CredentialsProvider for StaticToken {
    async fn headers(&self) -> Result<HeaderMap, CredentialsError> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.0))
            .map_err(|e| CredentialsError::new(false, e))?;
        value.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn anonymous() -> anyhow::Result<()> {
        let headers = Credentials::default().headers().await?;
        assert!(headers.is_empty(), "{headers:?}");
        Ok(())
    }

    #[tokio::test]
    async fn api_key() -> anyhow::Result<()> {
        let credentials = Credentials::from(ApiKey::new("test-key"));
        let headers = credentials.headers().await?;
        let value = headers.get(API_KEY_HEADER).map(|v| v.to_str()).transpose()?;
        assert_eq!(value, Some("test-key"));
        assert!(headers.get(API_KEY_HEADER).is_some_and(|v| v.is_sensitive()));
        let fmt = format!("{credentials:?}");
        assert!(!fmt.contains("test-key"), "{fmt}");
        Ok(())
    }

    #[tokio::test]
    async fn static_token() -> anyhow::Result<()> {
        let credentials = Credentials::from(StaticToken::new("test-token"));
        let headers = credentials.headers().await?;
        let value = headers.get(AUTHORIZATION).map(|v| v.to_str()).transpose()?;
        assert_eq!(value, Some("Bearer test-token"));
        let fmt = format!("{credentials:?}");
        assert!(!fmt.contains("test-token"), "{fmt}");
        Ok(())
    }

    #[tokio::test]
    async fn invalid_header_value() {
        let got = StaticToken::new("bad\ntoken").headers().await;
        let err = got.expect_err("newlines are not valid in headers");
        assert!(!err.is_retryable(), "{err:?}");
    }
}
