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

use serde::{Deserialize, Serialize};

/// The error details returned by Google REST APIs.
///
/// Services return errors in a JSON envelope:
///
/// ```json
/// {"error": {"code": 404, "message": "Blog not found", "status": "NOT_FOUND",
///            "errors": [{"domain": "global", "reason": "notFound", "message": "Blog not found"}]}}
/// ```
///
/// See the [API Design Guide](https://cloud.google.com/apis/design/errors) for
/// more details.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ErrorPayload {
    /// The HTTP status code.
    pub code: u16,

    /// A developer-facing error message.
    pub message: String,

    /// The canonical status name, e.g. `NOT_FOUND`, if the service sets it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Legacy per-error details.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorDetail>,
}

impl ErrorPayload {
    /// Sets the value for [code][ErrorPayload::code].
    pub fn set_code(mut self, v: u16) -> Self {
        self.code = v;
        self
    }

    /// Sets the value for [message][ErrorPayload::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value for [status][ErrorPayload::status].
    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value for [errors][ErrorPayload::errors].
    pub fn set_errors<T>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = ErrorDetail>,
    {
        self.errors = v.into_iter().collect();
        self
    }

    /// Parses the error envelope in a response body.
    ///
    /// Returns `None` if the body is not in the expected format.
    pub fn from_body(body: &[u8]) -> Option<Self> {
        #[derive(Deserialize)]
        struct Envelope {
            error: ErrorPayload,
        }
        serde_json::from_slice::<Envelope>(body)
            .ok()
            .map(|e| e.error)
    }
}

/// One entry in the legacy `errors` list.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ErrorDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_type: Option<String>,
}

impl ErrorDetail {
    pub fn set_domain<T: Into<String>>(mut self, v: T) -> Self {
        self.domain = Some(v.into());
        self
    }

    pub fn set_reason<T: Into<String>>(mut self, v: T) -> Self {
        self.reason = Some(v.into());
        self
    }

    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = Some(v.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_body() -> anyhow::Result<()> {
        let body = json!({"error": {
            "code": 404,
            "message": "Blog not found",
            "status": "NOT_FOUND",
            "errors": [{"domain": "global", "reason": "notFound", "message": "Blog not found", "locationType": "path"}],
        }});
        let got = ErrorPayload::from_body(body.to_string().as_bytes());
        let mut detail = ErrorDetail::default()
            .set_domain("global")
            .set_reason("notFound")
            .set_message("Blog not found");
        detail.location_type = Some("path".into());
        let want = ErrorPayload::default()
            .set_code(404)
            .set_message("Blog not found")
            .set_status("NOT_FOUND")
            .set_errors([detail]);
        assert_eq!(got, Some(want));
        Ok(())
    }

    #[test]
    fn not_an_envelope() {
        assert_eq!(ErrorPayload::from_body(b"Service Unavailable"), None);
        assert_eq!(ErrorPayload::from_body(br#"{"code": 500}"#), None);
    }
}
