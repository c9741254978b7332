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

//! Encoding of path parameters.
//!
//! Simple expansions (`{blogId}`) percent-encode everything except the
//! unreserved characters. Reserved expansions (`{+name}`) also keep `/`, so a
//! value such as `projects/p/topics/t` expands into several path segments.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

const SIMPLE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const RESERVED: &AsciiSet = &SIMPLE.remove(b'/');

/// Encodes `value` for a simple (`reserved == false`) or reserved expansion.
///
/// # Example
/// ```
/// # use gax::path_parameter::encode;
/// assert_eq!(encode("2025/01/hello world.html", false), "2025%2F01%2Fhello%20world.html");
/// assert_eq!(encode("projects/p/topics/t", true), "projects/p/topics/t");
/// ```
pub fn encode(value: &str, reserved: bool) -> String {
    let set = if reserved { RESERVED } else { SIMPLE };
    utf8_percent_encode(value, set).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("123", false, "123")]
    #[test_case("a-b.c_d~e", false, "a-b.c_d~e")]
    #[test_case("a b", false, "a%20b")]
    #[test_case("a/b", false, "a%2Fb")]
    #[test_case("a/b", true, "a/b")]
    #[test_case("a?b#c", true, "a%3Fb%23c")]
    #[test_case("ñ", false, "%C3%B1")]
    #[test_case("", false, "")]
    fn encoding(input: &str, reserved: bool, want: &str) {
        assert_eq!(encode(input, reserved), want);
    }
}
