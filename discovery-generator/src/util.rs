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

//! A grab bag of naming and formatting helpers.

use anyhow::Result;
use regex::Regex;

const MAX_COMMENT_LINE_LENGTH: usize = 76;

/// The header for all generated files.
pub const HEADER: &str = "// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the \"License\");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an \"AS IS\" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// Code generated by discogen. DO NOT EDIT.
";

/// Converts `snake_case` or `camelCase` to `PascalCase`.
pub fn to_pascal(s: &str) -> String {
    let mut value = String::with_capacity(s.len());
    let mut upper = true;
    for c in s.chars() {
        if c == '_' || c == '-' || c == '.' {
            upper = true;
            continue;
        }
        if upper {
            value.extend(c.to_uppercase());
            upper = false;
        } else {
            value.push(c);
        }
    }
    value
}

/// Converts `camelCase` to `snake_case`.
///
/// Runs of capitals are kept together, `userIP` becomes `user_ip`.
pub fn camel_to_snake(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut value = String::with_capacity(s.len() + 4);
    for (i, c) in chars.iter().enumerate() {
        if *c == '-' || *c == '.' {
            value.push('_');
            continue;
        }
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            let boundary = prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_lower);
            if boundary {
                value.push('_');
            }
        }
        value.extend(c.to_lowercase());
    }
    value
}

/// The name serde's `rename_all = "camelCase"` produces for a field.
pub fn snake_to_camel(s: &str) -> String {
    let mut value = String::with_capacity(s.len());
    let mut upper = false;
    for c in s.chars() {
        if c == '_' {
            upper = true;
            continue;
        }
        if upper {
            value.extend(c.to_uppercase());
            upper = false;
        } else {
            value.push(c);
        }
    }
    value
}

/// Determine if the string is a keyword. See <https://doc.rust-lang.org/reference/keywords.html>
pub fn is_keyword(s: &str) -> bool {
    const KEYWORDS: &[&str] = &[
        "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn",
        "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref",
        "return", "self", "Self", "static", "struct", "super", "trait", "true", "type", "unsafe",
        "use", "where", "while", "async", "await", "dyn", "abstract", "become", "box", "do",
        "final", "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "try",
        "gen",
    ];
    KEYWORDS.contains(&s)
}

/// Returns a valid Rust identifier for a snake_case name.
///
/// Keywords use the raw identifier syntax, except for the few keywords that
/// cannot be raw identifiers, which get a trailing underscore.
pub fn rust_ident(s: &str) -> String {
    match s {
        "self" | "Self" | "super" | "crate" => format!("{s}_"),
        _ if is_keyword(s) => format!("r#{s}"),
        _ if s.starts_with(|c: char| c.is_ascii_digit()) => format!("_{s}"),
        _ => s.to_string(),
    }
}

/// The Rust field or argument name for a JSON name.
pub fn field_ident(json_name: &str) -> String {
    rust_ident(&camel_to_snake(json_name))
}

/// Returns true if `rename_all = "camelCase"` maps the Rust name back to the
/// JSON name.
pub fn camel_round_trips(json_name: &str) -> bool {
    snake_to_camel(&camel_to_snake(json_name)) == json_name
}

/// Escapes a string for use inside a Rust string literal.
pub fn quote(s: &str) -> String {
    format!("{s:?}")
}

/// Turns a discovery doc description into a rustdoc comment.
///
/// Lines are wrapped at word boundaries. URLs are never split, and bare URLs
/// are wrapped in `<>` so rustdoc renders them as links.
pub fn as_comment(prefix: &str, comment: &str) -> Result<String> {
    let url = Regex::new(r"^(?P<open>[(<]?)(?P<url>https?://[^\s<>]+?)(?P<close>[)>]?[.,;:]*)$")?;
    let mut buf = String::new();
    for paragraph in comment.trim().lines() {
        let paragraph = paragraph.trim_end();
        if paragraph.trim().is_empty() {
            buf.push_str(&format!("{prefix}///\n"));
            continue;
        }
        let mut line = String::new();
        for word in paragraph.split(' ').filter(|w| !w.is_empty()) {
            let word = escape_word(&url, word);
            let width = line.chars().count() + word.chars().count() + 1;
            if !line.is_empty() && width > MAX_COMMENT_LINE_LENGTH {
                buf.push_str(&format!("{prefix}/// {line}\n"));
                line.clear();
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(&word);
        }
        if !line.is_empty() {
            buf.push_str(&format!("{prefix}/// {line}\n"));
        }
    }
    Ok(buf)
}

fn escape_word(url: &Regex, word: &str) -> String {
    if let Some(c) = url.captures(word) {
        return format!("{}<{}>{}", &c["open"], &c["url"], &c["close"])
            .replace("<<", "<")
            .replace(">>", ">");
    }
    word.replace('[', "\\[").replace(']', "\\]")
}

/// Formats the first sentence of a description, for short summaries.
pub fn summary(comment: &str) -> String {
    let comment = comment.trim();
    match comment.find(". ") {
        Some(i) => comment[..=i].to_string(),
        None => comment.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("blogId", "blog_id")]
    #[test_case("selfLink", "self_link")]
    #[test_case("userIP", "user_ip")]
    #[test_case("oauth_token", "oauth_token")]
    #[test_case("HTMLBody", "html_body")]
    #[test_case("v1Count", "v1_count")]
    #[test_case("forUsername", "for_username")]
    fn snake(input: &str, want: &str) {
        assert_eq!(camel_to_snake(input), want);
    }

    #[test_case("blogs", "Blogs")]
    #[test_case("blogUserInfos", "BlogUserInfos")]
    #[test_case("comment_threads", "CommentThreads")]
    fn pascal(input: &str, want: &str) {
        assert_eq!(to_pascal(input), want);
    }

    #[test_case("blogId", true)]
    #[test_case("oauth_token", false)]
    #[test_case("userIP", false)]
    #[test_case("maxResults", true)]
    fn round_trip(input: &str, want: bool) {
        assert_eq!(camel_round_trips(input), want);
    }

    #[test_case("type", "r#type")]
    #[test_case("self", "self_")]
    #[test_case("kind", "kind")]
    #[test_case("default", "default")]
    #[test_case("3d", "_3d")]
    fn identifiers(input: &str, want: &str) {
        assert_eq!(rust_ident(input), want);
    }

    #[test]
    fn as_comment_long_text() -> anyhow::Result<()> {
        let input = "This is meant to read like some documentation for rustdoc. It should be printed out in a way that can be easily read in code. Making sure not to exceed the line length when possible.";
        let expected = "/// This is meant to read like some documentation for rustdoc. It should be
/// printed out in a way that can be easily read in code. Making sure not to
/// exceed the line length when possible.
";
        assert_eq!(as_comment("", input)?, expected);
        Ok(())
    }

    #[test]
    fn as_comment_long_link() -> anyhow::Result<()> {
        let input = "This makes sure we don't split long links https://example.com/really/really/really/really/really/really/really/long. We want them to show up well in rustdoc.";
        let expected = "    /// This makes sure we don't split long links
    /// <https://example.com/really/really/really/really/really/really/really/long>.
    /// We want them to show up well in rustdoc.
";
        assert_eq!(as_comment("    ", input)?, expected);
        Ok(())
    }

    #[test]
    fn as_comment_paragraphs() -> anyhow::Result<()> {
        let input = "First line.\n\nSecond [paragraph].";
        let expected = "/// First line.\n///\n/// Second \\[paragraph\\].\n";
        assert_eq!(as_comment("", input)?, expected);
        Ok(())
    }

    #[test]
    fn as_comment_empty() -> anyhow::Result<()> {
        assert_eq!(as_comment("", "   ")?, "");
        Ok(())
    }

    #[test]
    fn summary_first_sentence() {
        assert_eq!(summary("Gets one blog. Returns 404 otherwise."), "Gets one blog.");
        assert_eq!(summary("Gets one blog"), "Gets one blog");
    }
}
