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

use discogen::{default_crate_name, generate, write_files};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

type Result<T> = anyhow::Result<T>;

const BLOGGER: &str = include_str!("../resources/test/blogger-v3.json");
const YOUTUBE: &str = include_str!("../resources/test/youtube-v3-subset.json");

fn contents<'a>(files: &'a [discogen::GeneratedFile], path: &str) -> &'a str {
    files
        .iter()
        .find(|f| f.path == PathBuf::from(path))
        .map(|f| f.contents.as_str())
        .unwrap_or_default()
}

#[test]
fn blogger_files() -> Result<()> {
    let service = discovery::load_service(BLOGGER)?;
    let crate_name = default_crate_name(&service);
    assert_eq!(crate_name, "google-api-blogger-v3");
    let files = generate(&service, &crate_name)?;
    let paths: Vec<String> = files.iter().map(|f| f.path.display().to_string()).collect();
    assert_eq!(
        paths,
        vec![
            "Cargo.toml",
            "src/lib.rs",
            "src/model.rs",
            "src/client.rs",
            "src/descriptors.rs"
        ]
    );

    let client = contents(&files, "src/client.rs");
    assert!(client.contains("pub struct Blogger {"), "{client}");
    assert!(client.contains("pub fn blog_user_infos(&self) -> BlogUserInfos {"));
    assert!(client.contains("pub fn page_views(&self) -> PageViews {"));
    assert!(client.contains("pub async fn list_by_blog("));
    assert!(client.contains("pub async fn mark_as_spam("));
    assert!(client.contains("pub fn list_stream("));
    assert!(!client.contains("pub fn search_stream("));
    assert!(!client.contains("pub fn list_by_user_stream("));
    assert!(client.contains(
        "pub const BLOGGER_READONLY: &str = \"https://www.googleapis.com/auth/blogger.readonly\";"
    ));

    let model = contents(&files, "src/model.rs");
    for name in ["Blog", "BlogList", "Comment", "Page", "Pageviews", "Post", "PostUserInfosList", "User"] {
        assert!(model.contains(&format!("pub struct {name} {{")), "missing {name}");
    }
    assert!(model.contains("impl gax::paginator::PageableResponse for PostList {"));
    assert!(model.contains("impl gax::paginator::Collection for BlogList {"));
    assert!(!model.contains("impl gax::paginator::PageableResponse for BlogList {"));

    let descriptors = contents(&files, "src/descriptors.rs");
    assert_eq!(descriptors.matches(": LazyLock<MethodDescriptor>").count(), 33);
    Ok(())
}

#[test]
fn youtube_files() -> Result<()> {
    let service = discovery::load_service(YOUTUBE)?;
    let files = generate(&service, "google-api-youtube-v3")?;
    let client = contents(&files, "src/client.rs");
    assert!(client.contains("pub struct YouTube {"), "{client}");
    assert!(client.contains("pub const DEFAULT_ENDPOINT: &str = \"https://youtube.googleapis.com/\";"));
    assert!(client.contains("        part: impl IntoIterator<Item = impl Into<String>>,\n"));
    assert!(client.contains("pub async fn set_moderation_status("), "{client}");

    let descriptors = contents(&files, "src/descriptors.rs");
    assert!(descriptors.contains(
        ".with_parameter(ParameterDescriptor::query(\"part\", ParameterType::String).with_required(true).with_repeated(RepeatedEncoding::CommaSeparated))"
    ));
    Ok(())
}

#[test]
fn write_to_directory() -> Result<()> {
    let service = discovery::load_service(BLOGGER)?;
    let files = generate(&service, "google-api-blogger-v3")?;
    let dir = tempfile::tempdir()?;
    write_files(dir.path(), &files)?;
    for f in &files {
        let got = std::fs::read_to_string(dir.path().join(&f.path))?;
        assert_eq!(got, f.contents);
    }
    Ok(())
}
