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

//! The HTTP transport used by the executor.
//!
//! The executor builds an [HttpRequest] and hands it to an [HttpTransport].
//! The default transport is [ReqwestTransport]. Tests, and applications with
//! special needs, can provide their own implementation.

use crate::Result;
use crate::error::Error;
use bytes::Bytes;
use http::{HeaderMap, Method};
use std::time::Duration;

/// A fully resolved HTTP request.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub method: Method,
    /// The full URL, including the query string.
    pub url: url::Url,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

impl HttpRequest {
    /// Returns the query parameters in order, decoded.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }
}

/// The status, headers and body of an HTTP response.
#[derive(Clone, Debug, Default)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new<T: Into<Bytes>>(status: u16, body: T) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends HTTP requests.
///
/// Implementations return `Ok` for any HTTP response, including error
/// statuses. They return an error only if no response was received, using
/// [Error::io] for network problems and [Error::timeout] when `timeout`
/// expires.
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync + std::fmt::Debug {
    async fn send(&self, request: HttpRequest, timeout: Option<Duration>) -> Result<HttpResponse>;
}

/// An [HttpTransport] based on [reqwest].
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    inner: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client, e.g. with custom proxies or certificates.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

#[async_trait::async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest, timeout: Option<Duration>) -> Result<HttpResponse> {
        let mut builder = self
            .inner
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let response = builder.send().await.map_err(map_send_error)?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(map_send_error)?;
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn map_send_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::timeout(e)
    } else {
        Error::io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_pairs() -> anyhow::Result<()> {
        let request = HttpRequest {
            method: Method::GET,
            url: url::Url::parse("https://example.com/v1/posts?status=live&status=draft&q=a+b")?,
            headers: HeaderMap::new(),
            body: None,
        };
        let want = [("status", "live"), ("status", "draft"), ("q", "a b")]
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .to_vec();
        assert_eq!(request.query_pairs(), want);
        Ok(())
    }

    #[test]
    fn response() {
        let response = HttpResponse::new(204, "");
        assert!(response.is_success(), "{response:?}");
        let response = HttpResponse::new(404, "not found");
        assert!(!response.is_success(), "{response:?}");
    }
}
