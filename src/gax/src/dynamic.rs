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

//! Calls the methods of a service loaded at runtime.
//!
//! Generated clients know their methods and types at compile time. A
//! [DynamicService] works from a [ServiceDescriptor] instead, with untyped
//! JSON parameters and responses. Parameters are checked against the method
//! (names and enum values), and responses against the declared schema.

use crate::Result;
use crate::error::{BindingError, Error, RequestContext};
use crate::executor::RequestExecutor;
use crate::options::{ClientConfig, RequestOptions};
use crate::parameter_bag::ParameterBag;
use bytes::Bytes;
use discovery::{MethodDescriptor, ServiceDescriptor, shape};
use serde_json::Value;
use std::sync::Arc;

/// A client for a service described by a discovery document.
///
/// # Example
/// ```no_run
/// # use gax::dynamic::DynamicService;
/// # use gax::options::{ClientConfig, RequestOptions};
/// # async fn sample(json: &str) -> anyhow::Result<()> {
/// let service = discovery::load_service(json)?;
/// let client = DynamicService::new(service, ClientConfig::default());
/// let blog = client
///     .call("blogs.get", serde_json::json!({"blogId": "123", "view": "READER"}), None, RequestOptions::default())
///     .await?;
/// println!("{}", blog["name"]);
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct DynamicService {
    service: Arc<ServiceDescriptor>,
    executor: RequestExecutor,
}

impl DynamicService {
    pub fn new(service: ServiceDescriptor, config: ClientConfig) -> Self {
        let executor = RequestExecutor::new(config, &service.base_url());
        Self {
            service: Arc::new(service),
            executor,
        }
    }

    pub fn descriptor(&self) -> &ServiceDescriptor {
        &self.service
    }

    /// Calls a method by its dotted name, e.g. `posts.list`.
    ///
    /// `params` must be a JSON object (or `null`), mapping parameter names to
    /// scalars or arrays of scalars. Returns `null` if the method declares no
    /// response or the response is empty.
    pub async fn call(
        &self,
        method: &str,
        params: Value,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<Value> {
        let descriptor = self.service.find_method(method).ok_or_else(|| {
            Error::binding(BindingError::UnknownMethod {
                method: method.to_string(),
            })
        })?;
        let optional = dynamic_parameters(descriptor, &params)
            .map_err(|e| Error::binding(e).with_context(RequestContext::new(descriptor.id.as_str())))?;
        let body = body
            .map(|b| serde_json::to_vec(&b))
            .transpose()
            .map_err(Error::ser)?
            .map(Bytes::from);
        let response = self
            .executor
            .execute_raw(descriptor, ParameterBag::new(), optional, body, options)
            .await?;
        if response.status == 204 || response.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        let value: Value = serde_json::from_slice(&response.body).map_err(|e| {
            Error::deser(e).with_context(RequestContext::new(descriptor.id.as_str()))
        })?;
        self.check_response(descriptor, &value)?;
        Ok(value)
    }

    fn check_response(&self, method: &MethodDescriptor, value: &Value) -> Result<()> {
        let Some(id) = method
            .response
            .as_deref()
            .and_then(|name| self.service.schemas.lookup(name))
        else {
            return Ok(());
        };
        shape::check_schema(&self.service.schemas, id, value).map_err(|e| {
            tracing::warn!(method = %method.id, "response does not match the schema: {e}");
            Error::deser(e).with_context(RequestContext::new(method.id.as_str()))
        })
    }
}

/// Converts JSON parameters into a [ParameterBag].
///
/// Rejects unknown names, and values outside the declared enum.
fn dynamic_parameters(
    method: &MethodDescriptor,
    params: &Value,
) -> std::result::Result<ParameterBag, BindingError> {
    let bag = ParameterBag::from_json(params).map_err(|(name, reason)| {
        BindingError::InvalidValue {
            method: method.id.clone(),
            parameter: name,
            reason: reason.to_string(),
        }
    })?;
    for (name, value) in bag.iter() {
        let Some(p) = method.parameter(name) else {
            return Err(BindingError::UnknownParameter {
                method: method.id.clone(),
                parameter: name.to_string(),
            });
        };
        if p.enum_values.is_empty() {
            continue;
        }
        if let Some(bad) = value.values().find(|v| !p.enum_values.iter().any(|e| e.as_str() == *v)) {
            return Err(BindingError::InvalidValue {
                method: method.id.clone(),
                parameter: name.to_string(),
                reason: format!(
                    "`{bad}` is not one of [{}]",
                    p.enum_values.join(", ")
                ),
            });
        }
    }
    Ok(bag)
}
