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

//! Builders for the generated clients.
//!
//! Every generated client (`Blogger`, `YouTube`, ...) exposes a `builder()`
//! function returning a [ClientBuilder]. The builder collects a
//! [ClientConfig] and hands it to a client-specific factory. Applications
//! never name the factory type.
//!
//! ```
//! # use gax::client_builder::examples;
//! # use gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! use examples::Client; // Placeholder for `Blogger`, `YouTube`, etc.
//! let client = Client::builder()
//!     .with_endpoint("https://private.googleapis.com/blogger/v3/")
//!     .build()
//!     .await?;
//! # Result::<()>::Ok(()) });
//! ```

use crate::backoff_policy::BackoffPolicyArg;
use crate::credentials::Credentials;
use crate::options::ClientConfig;
use crate::retry_policy::RetryPolicyArg;
use crate::transport::HttpTransport;
use std::sync::Arc;
use std::time::Duration;

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// The client configuration is invalid.
///
/// Only the endpoint is validated today, a malformed endpoint is reported by
/// `build()` rather than by the first call.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The endpoint override is not an absolute URL.
    #[error("invalid endpoint `{endpoint}`")]
    Endpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
}

/// Configures and creates a client.
///
/// ```
/// # use gax::client_builder::examples;
/// # use gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for `Blogger`, `YouTube`, etc.
/// use gax::credentials::ApiKey;
/// use std::time::Duration;
/// let client = Client::builder()
///     .with_credentials(ApiKey::new("my-api-key"))
///     .with_attempt_timeout(Duration::from_secs(10))
///     .with_user_agent("my-app/1.0")
///     .build()
///     .await?;
/// # Result::<()>::Ok(()) });
/// ```
#[derive(Clone, Debug)]
pub struct ClientBuilder<F> {
    config: ClientConfig,
    factory: F,
}

impl<F> ClientBuilder<F> {
    /// Creates a new client.
    ///
    /// Fails if the endpoint override is not a valid URL.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C>,
    {
        if let Some(endpoint) = &self.config.endpoint {
            url::Url::parse(endpoint).map_err(|source| Error::Endpoint {
                endpoint: endpoint.clone(),
                source,
            })?;
        }
        self.factory.build(self.config).await
    }

    /// Sets the endpoint.
    ///
    /// The endpoint replaces the root URL and service path of the service,
    /// e.g. `https://www.googleapis.com/blogger/v3/`.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Emits a [tracing] span per call, with the method id and URL.
    ///
    /// Setting `GOOGLE_API_RUST_LOGGING=true` has the same effect.
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Configure the authentication credentials.
    ///
    /// The default credentials are anonymous. Use an
    /// [ApiKey][crate::credentials::ApiKey] for public data, or a
    /// [CredentialsProvider][crate::credentials::CredentialsProvider] that
    /// returns OAuth2 tokens.
    pub fn with_credentials<T: Into<Credentials>>(mut self, v: T) -> Self {
        self.config.credentials = Some(v.into());
        self
    }

    /// Configure the HTTP transport.
    ///
    /// The default transport uses [reqwest]. Tests and applications with
    /// special needs can provide their own.
    pub fn with_transport<T: HttpTransport + 'static>(mut self, v: T) -> Self {
        self.config.transport = Some(Arc::new(v));
        self
    }

    /// Sets the default retry policy for all calls.
    ///
    /// Calls can override it with
    /// [RequestOptionsBuilder::with_retry_policy][crate::options::RequestOptionsBuilder::with_retry_policy].
    ///
    /// ```
    /// # use gax::client_builder::examples;
    /// # use gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for `Blogger`, `YouTube`, etc.
    /// use gax::retry_policy::{TransientErrors, RetryPolicyExt};
    /// let client = Client::builder()
    ///     .with_retry_policy(TransientErrors.with_attempt_limit(3))
    ///     .build()
    ///     .await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.config.retry_policy = Some(v.into().into());
        self
    }

    /// Sets the default delay between attempts.
    pub fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.config.backoff_policy = Some(v.into().into());
        self
    }

    /// Sets the timeout for each attempt.
    pub fn with_attempt_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.config.attempt_timeout = Some(v.into());
        self
    }

    /// Sets the user agent header.
    pub fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.config.user_agent = Some(v.into());
        self
    }
}

#[doc(hidden)]
pub mod internal {
    use super::*;

    pub trait ClientFactory {
        type Client;
        fn build(self, config: ClientConfig) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, C>(factory: F) -> super::ClientBuilder<F>
    where
        F: ClientFactory<Client = C>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }
}

#[doc(hidden)]
pub mod examples {
    //! A stand-in client for the rustdoc snippets in this module.

    use super::Result;
    use crate::options::ClientConfig;

    /// Keeps the [ClientConfig] it was built with, and nothing else.
    #[allow(dead_code)]
    pub struct Client(ClientConfig);
    impl Client {
        /// Same shape as `Blogger::builder()`.
        pub fn builder() -> client::Builder {
            super::internal::new_builder(client::Factory)
        }

        async fn new(config: ClientConfig) -> Result<Self> {
            Ok(Self(config))
        }
    }
    mod client {
        pub type Builder = super::super::ClientBuilder<Factory>;
        pub struct Factory;
        impl super::super::internal::ClientFactory for Factory {
            type Client = super::Client;
            async fn build(self, config: super::ClientConfig) -> super::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn endpoint_error() {
        let source = url::Url::parse("not a URL").expect_err("not a URL");
        let error = Error::Endpoint {
            endpoint: "not a URL".into(),
            source,
        };
        assert_eq!(error.to_string(), "invalid endpoint `not a URL`");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<url::ParseError>());
        assert_eq!(got, Some(&source));
    }
}
