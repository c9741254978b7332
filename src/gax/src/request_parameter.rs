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

/// Formats a scalar as a path or query parameter value.
///
/// Generated enums implement this trait using their wire name.
pub trait RequestParameter {
    fn format(&self) -> String;
}

macro_rules! display_parameter {
    ($($t:ty),*) => {
        $(
            impl RequestParameter for $t {
                fn format(&self) -> String {
                    format!("{self}")
                }
            }
        )*
    };
}

display_parameter!(i32, i64, u32, u64, f32, f64, bool, String);

impl RequestParameter for &str {
    fn format(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_value() {
        let want = "42".to_string();
        assert_eq!(want, RequestParameter::format(&42_i32));
        assert_eq!(want, RequestParameter::format(&42_i64));
        assert_eq!(want, RequestParameter::format(&42_u32));
        assert_eq!(want, RequestParameter::format(&42_u64));
        assert_eq!(want, RequestParameter::format(&42_f32));
        assert_eq!(want, RequestParameter::format(&42_f64));
        assert_eq!("true", RequestParameter::format(&true));
        assert_eq!("live", RequestParameter::format(&"live"));
        assert_eq!("live", RequestParameter::format(&"live".to_string()));
    }
}
