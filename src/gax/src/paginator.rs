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

use crate::Result;
use crate::error::Error;
use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;
use tokio_util::sync::CancellationToken;

/// A response wrapping a list of items.
///
/// Generated list responses (e.g. `BlogList`, `PostList`) implement this
/// trait. The `items()` function returns the designated collection field, so
/// generic code can handle any list response.
pub trait Collection {
    type Item;

    /// Consumes the response and returns its items, in server order.
    fn items(self) -> Vec<Self::Item>;
}

/// Describes a type that can be iterated over asyncly when used with [Paginator].
///
/// List responses with a `nextPageToken` field implement this trait.
pub trait PageableResponse: Collection {
    /// The token for the next page, empty if this is the last page.
    fn next_page_token(&self) -> String;
}

/// An adapter that converts list methods into a [futures::Stream] of pages.
///
/// Each page is fetched only when the stream is polled. The stream ends after
/// the first page without a `nextPageToken`, after an error, or after
/// `max_pages` pages.
#[pin_project]
pub struct Paginator<T> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T>> + Send>>,
}

type ControlFlow = std::ops::ControlFlow<(), String>;

impl<T> Paginator<T>
where
    T: PageableResponse + Send + 'static,
{
    /// Creates a new [Paginator] given the initial page token and a function
    /// to fetch the next [PageableResponse].
    ///
    /// The cancellation token is checked before each follow-up page.
    pub fn new<F>(
        seed_token: String,
        max_pages: Option<usize>,
        cancellation: Option<CancellationToken>,
        execute: impl Fn(String) -> F + Clone + Send + Sync + 'static,
    ) -> Self
    where
        F: Future<Output = Result<T>> + Send + 'static,
    {
        let seed = (ControlFlow::Continue(seed_token), 0_usize);
        let stream = unfold(seed, move |(state, fetched)| {
            let execute = execute.clone();
            let cancellation = cancellation.clone();
            async move {
                let token = match state {
                    ControlFlow::Continue(token) => token,
                    ControlFlow::Break(_) => return None,
                };
                if max_pages.is_some_and(|max| fetched >= max) {
                    tracing::debug!(fetched, "page limit reached");
                    return None;
                }
                if fetched > 0 && cancellation.as_ref().is_some_and(|t| t.is_cancelled()) {
                    return Some((Err(Error::cancelled()), (ControlFlow::Break(()), fetched)));
                }
                match execute(token).await {
                    Ok(page) => {
                        let tok = page.next_page_token();
                        tracing::debug!(page = fetched + 1, more = !tok.is_empty(), "page received");
                        let next_state = if tok.is_empty() {
                            ControlFlow::Break(())
                        } else {
                            ControlFlow::Continue(tok)
                        };
                        Some((Ok(page), (next_state, fetched + 1)))
                    }
                    Err(e) => Some((Err(e), (ControlFlow::Break(()), fetched + 1))),
                }
            }
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next mutation of the wrapped stream.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }

    /// Fetches all the pages.
    ///
    /// If a page fails, the result contains the pages received before the
    /// failure and the error.
    pub async fn collect_all(mut self) -> AllPages<T> {
        let mut pages = Vec::new();
        while let Some(page) = self.next().await {
            match page {
                Ok(p) => pages.push(p),
                Err(e) => {
                    return AllPages {
                        pages,
                        error: Some(e),
                    };
                }
            }
        }
        AllPages { pages, error: None }
    }

    /// Converts the stream of pages into a stream of items.
    pub fn items(self) -> impl Stream<Item = Result<T::Item>> {
        self.flat_map(|page| {
            let items = match page {
                Ok(p) => p.items().into_iter().map(Ok).collect(),
                Err(e) => vec![Err(e)],
            };
            futures::stream::iter(items)
        })
    }
}

impl<T> Stream for Paginator<T> {
    type Item = Result<T>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

/// The pages returned by a call to fetch all pages.
#[derive(Debug)]
pub struct AllPages<T> {
    /// The pages received, in order.
    pub pages: Vec<T>,
    /// The error that stopped the pagination, if any.
    pub error: Option<Error>,
}

impl<T> AllPages<T> {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Discards the partial pages if there was an error.
    pub fn into_result(self) -> Result<Vec<T>> {
        match self.error {
            None => Ok(self.pages),
            Some(e) => Err(e),
        }
    }
}

impl<T: PageableResponse> AllPages<T> {
    /// The items in all the pages received, in server order.
    pub fn items(self) -> Vec<T::Item> {
        self.pages.into_iter().flat_map(|p| p.items()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Debug, PartialEq)]
    struct TestResponse {
        items: Vec<String>,
        next_page_token: String,
    }

    impl Collection for TestResponse {
        type Item = String;
        fn items(self) -> Vec<String> {
            self.items
        }
    }

    impl PageableResponse for TestResponse {
        fn next_page_token(&self) -> String {
            self.next_page_token.clone()
        }
    }

    fn page(items: &[&str], next: &str) -> TestResponse {
        TestResponse {
            items: items.iter().map(|s| s.to_string()).collect(),
            next_page_token: next.to_string(),
        }
    }

    static_assertions::assert_impl_all!(Paginator<TestResponse>: Send);

    type Responses = Arc<Mutex<Vec<Result<TestResponse>>>>;

    fn make_paginator(
        responses: Vec<Result<TestResponse>>,
        max_pages: Option<usize>,
        cancellation: Option<CancellationToken>,
    ) -> (Paginator<TestResponse>, Arc<Mutex<Vec<String>>>) {
        let data: Responses = Arc::new(Mutex::new(responses));
        let tokens = Arc::new(Mutex::new(Vec::new()));
        let seen = tokens.clone();
        let paginator = Paginator::new(String::new(), max_pages, cancellation, move |token| {
            let data = data.clone();
            let seen = seen.clone();
            async move {
                seen.lock().unwrap().push(token);
                data.lock().unwrap().remove(0)
            }
        });
        (paginator, tokens)
    }

    #[tokio::test]
    async fn three_pages() -> anyhow::Result<()> {
        let (paginator, tokens) = make_paginator(
            vec![
                Ok(page(&["a", "b"], "t1")),
                Ok(page(&["c"], "t2")),
                Ok(page(&["d"], "")),
            ],
            None,
            None,
        );
        let all = paginator.collect_all().await;
        assert!(all.is_complete(), "{all:?}");
        assert_eq!(all.pages.len(), 3);
        assert_eq!(all.items(), vec!["a", "b", "c", "d"]);
        assert_eq!(*tokens.lock().unwrap(), vec!["", "t1", "t2"]);
        Ok(())
    }

    #[tokio::test]
    async fn partial_results() -> anyhow::Result<()> {
        let (paginator, _) = make_paginator(
            vec![
                Ok(page(&["a"], "t1")),
                Err(Error::api(
                    500,
                    http::HeaderMap::new(),
                    bytes::Bytes::from_static(b"oops"),
                )),
            ],
            None,
            None,
        );
        let all = paginator.collect_all().await;
        assert_eq!(all.pages, vec![page(&["a"], "t1")]);
        let err = all.error.as_ref().map(|e| e.http_status_code());
        assert_eq!(err, Some(Some(500)));
        assert!(all.into_result().is_err());
        Ok(())
    }

    #[tokio::test]
    async fn max_pages() -> anyhow::Result<()> {
        let (paginator, tokens) = make_paginator(
            vec![Ok(page(&["a"], "t1")), Ok(page(&["b"], "t2"))],
            Some(1),
            None,
        );
        let pages = paginator.collect_all().await.into_result()?;
        assert_eq!(pages, vec![page(&["a"], "t1")]);
        assert_eq!(tokens.lock().unwrap().len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn cancelled_between_pages() -> anyhow::Result<()> {
        let token = CancellationToken::new();
        let (mut paginator, tokens) = make_paginator(
            vec![Ok(page(&["a"], "t1")), Ok(page(&["b"], ""))],
            None,
            Some(token.clone()),
        );
        let first = paginator.next().await.transpose()?;
        assert_eq!(first, Some(page(&["a"], "t1")));
        token.cancel();
        let second = paginator.next().await;
        assert!(
            matches!(&second, Some(Err(e)) if e.is_cancelled()),
            "{second:?}"
        );
        assert!(paginator.next().await.is_none());
        assert_eq!(tokens.lock().unwrap().len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn item_stream() -> anyhow::Result<()> {
        let (paginator, _) = make_paginator(
            vec![Ok(page(&["a", "b"], "t1")), Ok(page(&["c"], ""))],
            None,
            None,
        );
        let items: Vec<String> = paginator
            .items()
            .collect::<Vec<_>>()
            .await
            .into_iter()
            .collect::<Result<_>>()?;
        assert_eq!(items, vec!["a", "b", "c"]);
        Ok(())
    }
}
