use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;
use tracing::info;

use crate::models::Artifact;

/// Sibling temp path, e.g. `index.html` -> `index.html.tmp`.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Atomically write content to a file using a temporary file + rename.
///
/// On failure the temporary file is removed and the destination is left as
/// it was.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let temp = temp_path(path);
    let mut file = File::create(&temp)
        .with_context(|| format!("Failed to create temporary file: {}", temp.display()))?;

    let result = write_and_rename(&mut file, &temp, path, content);
    if result.is_err() {
        drop(file);
        let _ = fs::remove_file(&temp);
    }
    result
}

fn write_and_rename(file: &mut File, temp: &Path, path: &Path, content: &[u8]) -> Result<()> {
    file.lock_exclusive()
        .context("Failed to acquire file lock")?;
    file.write_all(content)
        .context("Failed to write file content")?;
    file.sync_all().context("Failed to sync file")?;
    file.unlock().context("Failed to unlock file")?;
    fs::rename(temp, path).with_context(|| format!("Failed to rename to {}", path.display()))?;
    Ok(())
}

/// Persist the artifact, creating its directory first. Any previous file at
/// the destination is replaced whole.
pub fn write(artifact: &Artifact) -> Result<()> {
    let path = artifact.path();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    }

    atomic_write(path, artifact.html().as_bytes())?;
    info!(path = %path.display(), bytes = artifact.len(), "wrote dashboard");
    Ok(())
}
