//! Input resolution.
//!
//! Turns command-line values plus answers from an [`InputSource`] into a
//! validated [`GenerationRequest`].

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::utils::validation;

pub const NAME_PROMPT: &str = "Project name: ";
pub const LOCATION_PROMPT: &str = "Base directory (leave empty for current directory): ";

/// Source of answers for values that were not given on the command line.
pub trait InputSource {
    /// Show `message` and return the answer with surrounding whitespace removed.
    fn prompt(&mut self, message: &str) -> Result<String>;
}

/// Raw values as they arrive from the command line.
#[derive(Debug, Clone, Default)]
pub struct CliInputs {
    pub name: Option<String>,
    pub location: Option<String>,
    pub force: bool,
}

/// Everything the generator needs for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub display_name: String,
    pub base_directory: PathBuf,
    pub force_overwrite: bool,
}

/// Resolve the request, prompting for the display name and base directory when absent.
///
/// Only a missing or empty argument triggers a prompt. A whitespace-only name
/// argument fails validation; a whitespace-only location is taken literally.
pub fn resolve_request(inputs: CliInputs, source: &mut dyn InputSource) -> Result<GenerationRequest> {
    let raw_name = match given(inputs.name) {
        Some(name) => name,
        None => source.prompt(NAME_PROMPT)?,
    };
    let display_name =
        validation::require_non_empty(&raw_name, "name", "A project name is required.")?
            .to_string();

    let location = match given(inputs.location) {
        Some(location) => location,
        None => source.prompt(LOCATION_PROMPT)?,
    };
    let base_directory = resolve_base_directory(&location)?;

    Ok(GenerationRequest {
        display_name,
        base_directory,
        force_overwrite: inputs.force,
    })
}

/// Expand `~`, require the directory to exist, and return its absolute form.
/// An empty location means the current working directory.
pub fn resolve_base_directory(location: &str) -> Result<PathBuf> {
    let location = if location.is_empty() { "." } else { location };

    let expanded = PathBuf::from(shellexpand::tilde(location).to_string());
    if !expanded.exists() {
        return Err(Error::config_base_dir_not_found(
            absolute_display(&expanded).display().to_string(),
        ));
    }

    expanded.canonicalize().map_err(|e| {
        Error::internal_io(
            e.to_string(),
            Some(format!("resolve {}", expanded.display())),
        )
    })
}

fn given(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn absolute_display(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
