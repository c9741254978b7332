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

//! Generates typed Rust client crates from discovery documents.
//!
//! The generated crates depend on `google-api-gax` to send requests, and on
//! `google-api-discovery` for the method descriptors.

pub mod method_binder;
pub mod model_emitter;
pub mod service_emitter;
pub mod typemap;
pub mod util;

use anyhow::{Context, Result};
use discovery::ServiceDescriptor;
use std::path::{Path, PathBuf};

/// One file of a generated crate.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedFile {
    /// The path relative to the crate root, e.g. `src/client.rs`.
    pub path: PathBuf,
    pub contents: String,
}

/// The default crate name, e.g. `google-api-blogger-v3`.
pub fn default_crate_name(service: &ServiceDescriptor) -> String {
    format!("google-api-{}-{}", service.name, service.version).to_lowercase()
}

/// The library name for a crate name, e.g. `blogger_v3`.
pub fn lib_name(crate_name: &str) -> String {
    crate_name
        .strip_prefix("google-api-")
        .unwrap_or(crate_name)
        .replace('-', "_")
}

/// Generates all the files for a client crate.
pub fn generate(service: &ServiceDescriptor, crate_name: &str) -> Result<Vec<GeneratedFile>> {
    let lib = lib_name(crate_name);
    let mapper = typemap::TypeMapper::new(&service.schemas);
    tracing::info!(service = %service.name, version = %service.version, crate_name, "generating crate");
    let files = vec![
        GeneratedFile {
            path: PathBuf::from("Cargo.toml"),
            contents: service_emitter::emit_cargo(service, crate_name, &lib)?,
        },
        GeneratedFile {
            path: PathBuf::from("src/lib.rs"),
            contents: service_emitter::emit_lib(service)?,
        },
        GeneratedFile {
            path: PathBuf::from("src/model.rs"),
            contents: model_emitter::emit_models(service, &mapper)?,
        },
        GeneratedFile {
            path: PathBuf::from("src/client.rs"),
            contents: service_emitter::emit_client(service, &mapper, &lib)?,
        },
        GeneratedFile {
            path: PathBuf::from("src/descriptors.rs"),
            contents: service_emitter::emit_descriptors(service)?,
        },
    ];
    Ok(files)
}

/// Writes the generated files below `output`.
pub fn write_files(output: &Path, files: &[GeneratedFile]) -> Result<()> {
    for f in files {
        let path = output.join(&f.path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("cannot create directory {}", parent.display()))?;
        }
        std::fs::write(&path, &f.contents)
            .with_context(|| format!("cannot write {}", path.display()))?;
        tracing::debug!(path = %path.display(), bytes = f.contents.len(), "wrote file");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("google-api-blogger-v3", "blogger_v3")]
    #[test_case("my-youtube", "my_youtube")]
    fn lib_names(input: &str, want: &str) {
        assert_eq!(lib_name(input), want);
    }

    #[test]
    fn crate_name() -> anyhow::Result<()> {
        let service = discovery::load_service(
            r#"{"name": "blogger", "version": "v3", "rootUrl": "https://www.googleapis.com/", "servicePath": "blogger/v3/"}"#,
        )?;
        assert_eq!(default_crate_name(&service), "google-api-blogger-v3");
        Ok(())
    }
}
