//! End-to-end project generation.

use serde::Serialize;
use std::path::Path;

use crate::defaults::{self, Defaults};
use crate::error::Result;
use crate::input::{resolve_request, CliInputs, GenerationRequest, InputSource};
use crate::materialize::{self, WrittenFile};
use crate::slugify::slugify;
use crate::templates;
use crate::utils::shell;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOutput {
    pub project_dir: String,
    pub slug: String,
    pub display_name: String,
    pub reused_directory: bool,
    pub files: Vec<WrittenFile>,
    pub next_steps: Vec<String>,
}

/// Full run from raw command-line values.
///
/// The config at `config_path` is loaded before any prompt so a broken config
/// fails without asking the user anything.
pub fn generate_project(
    inputs: CliInputs,
    source: &mut dyn InputSource,
    config_path: Option<&Path>,
) -> Result<GenerateOutput> {
    let defaults = defaults::load_config_at(config_path)?.defaults;
    let request = resolve_request(inputs, source)?;
    generate(&request, &defaults)
}

/// Slugify, render and materialize a project for `request`.
pub fn generate(request: &GenerationRequest, defaults: &Defaults) -> Result<GenerateOutput> {
    let slug = slugify(&request.display_name)?;
    let files = templates::render_all_with(defaults, &request.display_name, &slug);
    let report = materialize::materialize(request, &slug, &files)?;

    let project_dir = report.project_dir.display().to_string();
    let next_steps = next_steps(&project_dir, &slug);

    Ok(GenerateOutput {
        project_dir,
        slug,
        display_name: request.display_name.clone(),
        reused_directory: report.reused_directory,
        files: report.files,
        next_steps,
    })
}

/// Shell commands printed after a successful run.
pub fn next_steps(project_dir: &str, slug: &str) -> Vec<String> {
    vec![
        format!("cd {}", shell::quote_arg(project_dir)),
        "cmake -S . -B build".to_string(),
        "cmake --build build".to_string(),
        format!("./build/{}", slug),
    ]
}
