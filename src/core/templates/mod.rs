//! Template rendering.
//!
//! Every generated artifact is a [`Template`] variant backed by a text payload
//! compiled into the binary. Rendering substitutes `{{key}}` placeholders and
//! performs no I/O.

use std::path::PathBuf;

use crate::defaults::Defaults;
use crate::utils::template;

/// The fixed set of files written into a new project, in write order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    CMakeLists,
    MainCpp,
    ApplicationHpp,
    ApplicationCpp,
    Readme,
    BuildScript,
    GladPatch,
    GitIgnore,
    SearchIgnore,
}

impl Template {
    pub const ALL: [Template; 9] = [
        Template::CMakeLists,
        Template::MainCpp,
        Template::ApplicationHpp,
        Template::ApplicationCpp,
        Template::Readme,
        Template::BuildScript,
        Template::GladPatch,
        Template::GitIgnore,
        Template::SearchIgnore,
    ];

    /// Path relative to the project root, always `/`-separated.
    pub fn relative_path(&self) -> &'static str {
        match self {
            Template::CMakeLists => "CMakeLists.txt",
            Template::MainCpp => "src/main.cpp",
            Template::ApplicationHpp => "src/Application.hpp",
            Template::ApplicationCpp => "src/Application.cpp",
            Template::Readme => "README.md",
            Template::BuildScript => "build.sh",
            Template::GladPatch => "cmake/patch_glad.cmake",
            Template::GitIgnore => ".gitignore",
            Template::SearchIgnore => ".ignore",
        }
    }

    pub fn is_executable(&self) -> bool {
        matches!(self, Template::BuildScript)
    }

    fn source(&self) -> &'static str {
        match self {
            Template::CMakeLists => include_str!("files/CMakeLists.txt.tmpl"),
            Template::MainCpp => include_str!("files/main.cpp.tmpl"),
            Template::ApplicationHpp => include_str!("files/Application.hpp.tmpl"),
            Template::ApplicationCpp => include_str!("files/Application.cpp.tmpl"),
            Template::Readme => include_str!("files/README.md.tmpl"),
            Template::BuildScript => include_str!("files/build.sh.tmpl"),
            Template::GladPatch => include_str!("files/patch_glad.cmake.tmpl"),
            Template::GitIgnore => include_str!("files/gitignore.tmpl"),
            Template::SearchIgnore => include_str!("files/ignore.tmpl"),
        }
    }
}

/// Directories (relative to the project root) that must exist before any file is written.
pub const PROJECT_SUBDIRS: [&str; 2] = ["src", "cmake"];

/// One fully rendered file, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub relative_path: PathBuf,
    pub contents: String,
    pub executable: bool,
}

/// Values substituted into templates.
#[derive(Debug, Clone, Copy)]
pub struct TemplateContext<'a> {
    pub display_name: &'a str,
    pub slug: &'a str,
    pub defaults: &'a Defaults,
}

/// Render a single template.
pub fn render(which: Template, ctx: &TemplateContext<'_>) -> RenderedFile {
    let width = ctx.defaults.window.width.to_string();
    let height = ctx.defaults.window.height.to_string();
    let display_name_literal = cpp_string_literal_body(ctx.display_name);
    let deps = &ctx.defaults.dependencies;

    // Display-name values go last so their text is never re-expanded.
    let variables: [(&str, &str); 10] = [
        ("slug", ctx.slug),
        ("cmake_minimum_version", ctx.defaults.cmake_minimum_version.as_str()),
        ("glfw_tag", deps.glfw.as_str()),
        ("glm_tag", deps.glm.as_str()),
        ("glad_tag", deps.glad.as_str()),
        ("imgui_tag", deps.imgui.as_str()),
        ("window_width", width.as_str()),
        ("window_height", height.as_str()),
        ("display_name_literal", display_name_literal.as_str()),
        ("display_name", ctx.display_name),
    ];

    RenderedFile {
        relative_path: PathBuf::from(which.relative_path()),
        contents: template::render(which.source(), &variables),
        executable: which.is_executable(),
    }
}

/// Render every template with the built-in defaults.
pub fn render_all(display_name: &str, slug: &str) -> Vec<RenderedFile> {
    render_all_with(&Defaults::default(), display_name, slug)
}

/// Render every template, in write order.
pub fn render_all_with(defaults: &Defaults, display_name: &str, slug: &str) -> Vec<RenderedFile> {
    let ctx = TemplateContext {
        display_name,
        slug,
        defaults,
    };
    Template::ALL.iter().map(|t| render(*t, &ctx)).collect()
}

/// Escape a value for use between the quotes of a C++ string literal.
fn cpp_string_literal_body(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents_of(files: &[RenderedFile], path: &str) -> String {
        files
            .iter()
            .find(|f| f.relative_path == PathBuf::from(path))
            .map(|f| f.contents.clone())
            .unwrap()
    }

    #[test]
    fn renders_nine_files_in_write_order() {
        let files = render_all("My Game!!", "my_game");
        let paths: Vec<String> = files
            .iter()
            .map(|f| f.relative_path.to_string_lossy().replace('\\', "/"))
            .collect();

        assert_eq!(
            paths,
            vec![
                "CMakeLists.txt",
                "src/main.cpp",
                "src/Application.hpp",
                "src/Application.cpp",
                "README.md",
                "build.sh",
                "cmake/patch_glad.cmake",
                ".gitignore",
                ".ignore",
            ]
        );
    }

    #[test]
    fn only_build_script_is_executable() {
        let files = render_all("Demo", "demo");
        let executable: Vec<_> = files.iter().filter(|f| f.executable).collect();

        assert_eq!(executable.len(), 1);
        assert_eq!(executable[0].relative_path, PathBuf::from("build.sh"));
    }

    #[test]
    fn build_descriptor_embeds_slug_and_pins() {
        for (name, slug) in [("My Game!!", "my_game"), ("{{slug}} \"Quoted\"", "slug_quoted")] {
            let cmake = contents_of(&render_all(name, slug), "CMakeLists.txt");

            assert!(cmake.contains(&format!("project({} VERSION 0.1.0 LANGUAGES CXX)", slug)));
            assert!(cmake.contains("set(CMAKE_CXX_STANDARD 20)"));
            assert!(cmake.contains("GIT_REPOSITORY https://github.com/glfw/glfw.git\n    GIT_TAG 3.4\n"));
            assert!(cmake.contains("GIT_REPOSITORY https://github.com/g-truc/glm.git\n    GIT_TAG 1.0.1\n"));
            assert!(cmake.contains("GIT_REPOSITORY https://github.com/Dav1dde/glad.git\n    GIT_TAG v0.1.36\n"));
            assert!(cmake.contains("GIT_REPOSITORY https://github.com/ocornut/imgui.git\n    GIT_TAG v1.90.4\n"));
            assert!(cmake.contains("add_executable(${PROJECT_NAME}"));
            assert!(cmake.contains("if (APPLE)"));
            assert!(!cmake.contains(name));
        }
    }

    #[test]
    fn entry_point_uses_display_name_not_slug() {
        let main_cpp = contents_of(&render_all("My Game!!", "my_game"), "src/main.cpp");

        assert!(main_cpp.contains("Application app(\"My Game!!\", 1280, 720);"));
        assert!(!main_cpp.contains("my_game"));
        assert!(main_cpp.contains("return EXIT_FAILURE;"));
        assert!(main_cpp.contains("return EXIT_SUCCESS;"));
    }

    #[test]
    fn entry_point_escapes_quotes_and_backslashes() {
        let main_cpp = contents_of(&render_all("Say \"hi\" \\o/", "say_hi_o"), "src/main.cpp");
        assert!(main_cpp.contains(r#"Application app("Say \"hi\" \\o/", 1280, 720);"#));
    }

    #[test]
    fn display_name_placeholders_are_not_re_expanded() {
        let files = render_all("{{slug}} Arena", "slug_arena");

        assert!(contents_of(&files, "src/main.cpp").contains("Application app(\"{{slug}} Arena\""));
        assert!(contents_of(&files, "README.md").starts_with("# {{slug}} Arena\n"));
    }

    #[test]
    fn no_placeholders_survive_rendering() {
        for file in render_all("Demo", "demo") {
            assert!(
                !file.contents.contains("{{"),
                "unrendered placeholder in {}",
                file.relative_path.display()
            );
        }
    }

    #[test]
    fn readme_names_project_and_build_paths() {
        let readme = contents_of(&render_all("My Game!!", "my_game"), "README.md");

        assert!(readme.starts_with("# My Game!!\n"));
        assert!(readme.contains("cmake -S . -B build"));
        assert!(readme.contains("./build.sh [Debug|Release|RelWithDebInfo|MinSizeRel] [-r|--run] [-fmt|--format]"));
        assert!(readme.contains("./build/my_game"));
    }

    #[test]
    fn build_script_resolves_executable_by_slug() {
        let script = contents_of(&render_all("My Game!!", "my_game"), "build.sh");

        assert!(script.starts_with("#!/usr/bin/env bash\n"));
        assert!(script.contains("local slug=\"my_game\""));
        assert!(script.contains("APP_PATH=\"${APP_PATH:-bin/${TYPE}/my_game}\""));
        assert!(script.contains("BUILD_DIR=\"${BUILD_DIR:-build}\""));
        assert!(script.contains("Debug | Release | RelWithDebInfo | MinSizeRel)"));
        assert!(script.contains("source_oneapi_env || "));
    }

    #[test]
    fn application_sources_are_static() {
        let a = render_all("One", "one");
        let b = render_all("Two", "two");

        for path in ["src/Application.hpp", "src/Application.cpp", ".gitignore", ".ignore"] {
            assert_eq!(contents_of(&a, path), contents_of(&b, path));
        }
        let cpp = contents_of(&a, "src/Application.cpp");
        assert!(cpp.contains("glfwWindowHint(GLFW_CONTEXT_VERSION_MAJOR, 4);"));
        assert!(cpp.contains("glfwWindowHint(GLFW_CONTEXT_VERSION_MINOR, 1);"));
        assert!(cpp.contains("glfwSwapInterval(1);"));
    }

    #[test]
    fn glad_patch_targets_configured_minimum() {
        let mut defaults = Defaults::default();
        defaults.cmake_minimum_version = "3.25".to_string();

        let files = render_all_with(&defaults, "Demo", "demo");
        let patch = contents_of(&files, "cmake/patch_glad.cmake");

        assert!(patch.contains("\"cmake_minimum_required(VERSION 3.0)\" \"cmake_minimum_required(VERSION 3.25)\""));
        assert!(patch.contains("message(FATAL_ERROR \"Cannot find glad CMakeLists.txt"));
        assert!(contents_of(&files, "CMakeLists.txt").starts_with("cmake_minimum_required(VERSION 3.25)\n"));
    }

    #[test]
    fn window_size_comes_from_defaults() {
        let mut defaults = Defaults::default();
        defaults.window.width = 1920;
        defaults.window.height = 1080;

        let main_cpp = contents_of(&render_all_with(&defaults, "Demo", "demo"), "src/main.cpp");
        assert!(main_cpp.contains("Application app(\"Demo\", 1920, 1080);"));
    }
}
