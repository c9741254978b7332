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

use crate::parameter_bag::ParameterValue;
use crate::request_parameter::RequestParameter;

/// Types that can be used as the value of a parameter.
///
/// - Scalars are formatted as usual.
/// - [Option] values that do not contain a value are not included.
/// - [Vec] values become a list, encoded as repeated pairs or a single
///   comma-joined value, as declared by the parameter.
pub trait QueryParameter {
    fn to_parameter(&self) -> Option<ParameterValue>;
}

impl<T: QueryParameter> QueryParameter for Option<T> {
    fn to_parameter(&self) -> Option<ParameterValue> {
        self.as_ref().and_then(|t| t.to_parameter())
    }
}

impl<T: RequestParameter> QueryParameter for Vec<T> {
    fn to_parameter(&self) -> Option<ParameterValue> {
        Some(ParameterValue::List(
            self.iter().map(RequestParameter::format).collect(),
        ))
    }
}

impl<T: RequestParameter> QueryParameter for T {
    fn to_parameter(&self) -> Option<ParameterValue> {
        Some(ParameterValue::Single(self.format()))
    }
}
