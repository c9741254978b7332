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

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "discogen", about = "Generates Rust clients from discovery documents")]
struct Opt {
    /// Input discovery document file to generate sources from.
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory for the generated crate, stdout if not present.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// The name of the generated crate, defaults to `google-api-{name}-{version}`.
    #[arg(long)]
    crate_name: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opt = Opt::parse();
    let contents = std::fs::read(&opt.input)
        .with_context(|| format!("cannot read {}", opt.input.display()))?;
    let service = discovery::load_service_from_slice(&contents)
        .with_context(|| format!("invalid discovery document {}", opt.input.display()))?;
    let crate_name = opt
        .crate_name
        .unwrap_or_else(|| discogen::default_crate_name(&service));
    let files = discogen::generate(&service, &crate_name)?;
    match &opt.output {
        Some(out) => discogen::write_files(out, &files)?,
        None => {
            for f in &files {
                println!("// {}", f.path.display());
                println!("{}", f.contents);
            }
        }
    }
    Ok(())
}
