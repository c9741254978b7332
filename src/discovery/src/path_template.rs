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

//! Parses and expands method path templates.
//!
//! Discovery documents use a subset of [RFC 6570] templates: simple
//! expansions such as `{blogId}` and reserved expansions such as `{+name}`.
//! Reserved expansions may contain `/` and other reserved characters.
//!
//! [RFC 6570]: https://www.rfc-editor.org/rfc/rfc6570

use crate::SchemaParseError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Variable { name: String, reserved: bool },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathTemplate {
    template: String,
    segments: Vec<Segment>,
}

impl PathTemplate {
    /// Parses a template such as `blogs/{blogId}/posts`.
    ///
    /// # Example
    /// ```
    /// # use discovery::path_template::PathTemplate;
    /// let t = PathTemplate::parse("blogs/{blogId}/posts")?;
    /// assert_eq!(t.variables().collect::<Vec<_>>(), vec!["blogId"]);
    /// # Ok::<(), discovery::SchemaParseError>(())
    /// ```
    pub fn parse(template: &str) -> Result<Self, SchemaParseError> {
        let error = |detail: &str| SchemaParseError::PathTemplate {
            template: template.to_string(),
            detail: detail.to_string(),
        };
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars();
        while let Some(c) = chars.next() {
            match c {
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for c in chars.by_ref() {
                        match c {
                            '}' => {
                                closed = true;
                                break;
                            }
                            '{' => return Err(error("nested `{`")),
                            c => name.push(c),
                        }
                    }
                    if !closed {
                        return Err(error("unterminated `{`"));
                    }
                    let (name, reserved) = match name.strip_prefix('+') {
                        Some(n) => (n.to_string(), true),
                        None => (name, false),
                    };
                    if name.is_empty() {
                        return Err(error("empty variable name"));
                    }
                    if !name
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
                    {
                        return Err(error(&format!("invalid variable name `{name}`")));
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Variable { name, reserved });
                }
                '}' => return Err(error("unmatched `}`")),
                c => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Ok(Self {
            template: template.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The variable names, in the order they appear in the template.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Variable { name, .. } => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Expands the template.
    ///
    /// The `value` callback receives each variable name and whether it is a
    /// reserved expansion, and returns the (already encoded) replacement.
    pub fn expand<F, E>(&self, mut value: F) -> Result<String, E>
    where
        F: FnMut(&str, bool) -> Result<String, E>,
    {
        let mut path = String::with_capacity(self.template.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(s) => path.push_str(s),
                Segment::Variable { name, reserved } => path.push_str(&value(name, *reserved)?),
            }
        }
        Ok(path)
    }
}

impl std::fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn simple() -> anyhow::Result<()> {
        let t = PathTemplate::parse("blogs/{blogId}/posts/{postId}")?;
        assert_eq!(
            t.segments(),
            &[
                Segment::Literal("blogs/".into()),
                Segment::Variable {
                    name: "blogId".into(),
                    reserved: false
                },
                Segment::Literal("/posts/".into()),
                Segment::Variable {
                    name: "postId".into(),
                    reserved: false
                },
            ]
        );
        assert_eq!(t.to_string(), "blogs/{blogId}/posts/{postId}");
        Ok(())
    }

    #[test]
    fn reserved() -> anyhow::Result<()> {
        let t = PathTemplate::parse("v1/{+name}:cancel")?;
        assert_eq!(
            t.segments()[1],
            Segment::Variable {
                name: "name".into(),
                reserved: true
            }
        );
        Ok(())
    }

    #[test]
    fn expand() -> anyhow::Result<()> {
        let t = PathTemplate::parse("blogs/{blogId}/pages/{+pageId}")?;
        let got = t.expand(|name, reserved| {
            Ok::<_, std::convert::Infallible>(format!("<{name}:{reserved}>"))
        })?;
        assert_eq!(got, "blogs/<blogId:false>/pages/<pageId:true>");
        Ok(())
    }

    #[test]
    fn no_variables() -> anyhow::Result<()> {
        let t = PathTemplate::parse("blogs/byurl")?;
        assert_eq!(t.variables().count(), 0);
        assert_eq!(t.segments(), &[Segment::Literal("blogs/byurl".into())]);
        Ok(())
    }

    #[test_case("blogs/{blogId"; "unterminated")]
    #[test_case("blogs/{}"; "empty")]
    #[test_case("blogs/{+}"; "empty reserved")]
    #[test_case("blogs/{a{b}}"; "nested")]
    #[test_case("blogs/blogId}"; "unmatched")]
    #[test_case("blogs/{blog id}"; "bad name")]
    fn errors(input: &str) {
        let got = PathTemplate::parse(input);
        assert!(
            matches!(got, Err(SchemaParseError::PathTemplate { .. })),
            "{got:?}"
        );
    }
}
