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

//! A transport double that returns canned responses and records requests.

use gax::Result;
use gax::transport::{HttpRequest, HttpResponse, HttpTransport};
use serde_json::json;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Default)]
pub struct RecordingTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    sent: Mutex<Vec<(Instant, HttpRequest)>>,
}

impl RecordingTransport {
    pub fn new<I: IntoIterator<Item = HttpResponse>>(responses: I) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into_iter().collect()),
            sent: Mutex::default(),
        })
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|(_, r)| r.clone())
            .collect()
    }

    pub fn send_times(&self) -> Vec<Instant> {
        self.sent.lock().unwrap().iter().map(|(t, _)| *t).collect()
    }

    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: HttpRequest, _timeout: Option<Duration>) -> Result<HttpResponse> {
        self.sent.lock().unwrap().push((Instant::now(), request));
        let next = self.responses.lock().unwrap().pop_front();
        Ok(next.unwrap_or_else(|| error(500, "INTERNAL", "no more canned responses")))
    }
}

pub fn success<T: serde::Serialize>(body: T) -> HttpResponse {
    HttpResponse::new(200, json!(body).to_string())
}

pub fn error(code: u16, status: &str, message: &str) -> HttpResponse {
    let body = json!({"error": {
        "code": code,
        "status": status,
        "message": message,
    }});
    HttpResponse::new(code, body.to_string())
}

pub fn transient() -> HttpResponse {
    error(503, "UNAVAILABLE", "try-again")
}

pub fn not_found() -> HttpResponse {
    error(404, "NOT_FOUND", "uh-oh")
}
