use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Root configuration structure for glscaffold.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GlscaffoldConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// Values baked into the generated project that can be overridden via glscaffold.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Defaults {
    #[serde(default = "default_window")]
    pub window: WindowConfig,

    #[serde(default = "default_cmake_minimum_version")]
    pub cmake_minimum_version: String,

    #[serde(default = "default_dependencies")]
    pub dependencies: DependencyPins,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            window: default_window(),
            cmake_minimum_version: default_cmake_minimum_version(),
            dependencies: default_dependencies(),
        }
    }
}

/// Initial window size passed to the generated `Application`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: u32,
    #[serde(default = "default_window_height")]
    pub height: u32,
}

/// Git tags fetched by the generated CMakeLists.txt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyPins {
    #[serde(default = "default_glfw_tag")]
    pub glfw: String,
    #[serde(default = "default_glm_tag")]
    pub glm: String,
    #[serde(default = "default_glad_tag")]
    pub glad: String,
    #[serde(default = "default_imgui_tag")]
    pub imgui: String,
}

fn default_window() -> WindowConfig {
    WindowConfig {
        width: default_window_width(),
        height: default_window_height(),
    }
}

fn default_window_width() -> u32 {
    1280
}

fn default_window_height() -> u32 {
    720
}

fn default_cmake_minimum_version() -> String {
    "3.21".to_string()
}

fn default_dependencies() -> DependencyPins {
    DependencyPins {
        glfw: default_glfw_tag(),
        glm: default_glm_tag(),
        glad: default_glad_tag(),
        imgui: default_imgui_tag(),
    }
}

fn default_glfw_tag() -> String {
    "3.4".to_string()
}

fn default_glm_tag() -> String {
    "1.0.1".to_string()
}

fn default_glad_tag() -> String {
    "v0.1.36".to_string()
}

fn default_imgui_tag() -> String {
    "v1.90.4".to_string()
}

/// Load config from `path` when there is one. Without a config location
/// (no home directory and no `GLSCAFFOLD_CONFIG`) the built-in defaults apply.
pub fn load_config_at(path: Option<&Path>) -> Result<GlscaffoldConfig> {
    match path {
        Some(path) => load_config_from(path),
        None => Ok(GlscaffoldConfig::default()),
    }
}

/// Load config from an explicit path. A missing file yields the built-in defaults;
/// a file that exists but does not parse is an error.
pub fn load_config_from(path: &Path) -> Result<GlscaffoldConfig> {
    if !path.exists() {
        return Ok(GlscaffoldConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("read {}", path.display())))
    })?;

    let config = parse_config(&content, &path.display().to_string())?;
    log_status!("config", "Loaded defaults from {}", path.display());
    Ok(config)
}

fn parse_config(content: &str, origin: &str) -> Result<GlscaffoldConfig> {
    serde_json::from_str(content).map_err(|e| Error::config_invalid_json(origin, e))
}
