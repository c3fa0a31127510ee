//! Writes rendered templates into the project directory.
//!
//! Files are written strictly in the order given. A failure part-way through
//! leaves earlier files on disk; nothing is rolled back.

use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::input::GenerationRequest;
use crate::templates::{RenderedFile, PROJECT_SUBDIRS};
use crate::utils::io as file_io;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WrittenFile {
    pub path: String,
    pub executable: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterializeReport {
    pub project_dir: PathBuf,
    pub reused_directory: bool,
    pub files: Vec<WrittenFile>,
}

/// Project root for a request: `<base directory>/<slug>`.
pub fn project_root(request: &GenerationRequest, slug: &str) -> PathBuf {
    request.base_directory.join(slug)
}

/// Create the project tree and write every file.
pub fn materialize(
    request: &GenerationRequest,
    slug: &str,
    files: &[RenderedFile],
) -> Result<MaterializeReport> {
    let root = project_root(request, slug);
    let force = request.force_overwrite;

    let reused_directory = create_project_dir(&root, force)?;
    for subdir in PROJECT_SUBDIRS {
        ensure_dir(&root.join(subdir))?;
    }

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = root.join(&file.relative_path);
        write_rendered(&path, file, force)?;
        written.push(WrittenFile {
            path: file.relative_path.to_string_lossy().replace('\\', "/"),
            executable: file.executable,
        });
    }

    Ok(MaterializeReport {
        project_dir: root,
        reused_directory,
        files: written,
    })
}

/// Returns `true` when an existing directory was reused.
fn create_project_dir(root: &Path, force: bool) -> Result<bool> {
    match fs::create_dir(root) {
        Ok(()) => {
            log_status!("create", "{}", root.display());
            Ok(false)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            if !force {
                return Err(Error::conflict_directory_exists(root.display().to_string()));
            }
            log_status!("create", "Reusing existing directory {}", root.display());
            Ok(true)
        }
        Err(e) => Err(Error::internal_io(
            e.to_string(),
            Some(format!("create {}", root.display())),
        )),
    }
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("create {}", dir.display())))
    })
}

fn write_rendered(path: &Path, file: &RenderedFile, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::conflict_file_exists(path.display().to_string()));
    }

    file_io::write_file(path, &file.contents, &format!("write {}", path.display()))?;
    if file.executable {
        file_io::set_executable(path, &format!("mark {} executable", path.display()))?;
    }

    log_status!("write", "{}", path.display());
    Ok(())
}
