// File replacement helpers shared by the plugin deployer and the settings patcher.
// Content is staged in a temporary file inside the destination directory and then
// renamed over the target, so a crash never leaves a half-written file behind.

use crate::log_debug;
use colored::Colorize;
use std::fs::{self, File, Permissions};
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Creates an empty staging file next to `target`.
/// Staging must happen in the same directory so the final rename stays on one filesystem.
fn staging_file(target: &Path) -> io::Result<NamedTempFile> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    NamedTempFile::new_in(dir)
}

/// Moves a fully written staging file over `target`, replacing any existing file.
/// The staging file is created owner-only, so `permissions` are applied first
/// when the result should keep the mode of an existing file.
fn commit(staged: NamedTempFile, target: &Path, permissions: Option<Permissions>) -> io::Result<()> {
    if let Some(permissions) = permissions {
        staged.as_file().set_permissions(permissions)?;
    }
    staged.as_file().sync_all()?;
    staged.persist(target).map_err(|e| e.error)?;
    log_debug!("[Files] Replaced {}", target.display());
    Ok(())
}

/// Copies `source` over `target` atomically.
///
/// # Returns
/// * `io::Result<u64>`: The number of bytes copied.
pub fn copy_atomically(source: &Path, target: &Path) -> io::Result<u64> {
    let mut reader = File::open(source)?;
    let permissions = reader.metadata()?.permissions();
    let mut staged = staging_file(target)?;
    let copied = io::copy(&mut reader, staged.as_file_mut())?;
    commit(staged, target, Some(permissions))?;
    Ok(copied)
}

/// Writes `contents` to `target` atomically, replacing the whole file.
/// An existing target keeps its permissions.
pub fn write_atomically(target: &Path, contents: &[u8]) -> io::Result<()> {
    let permissions = fs::metadata(target).ok().map(|m| m.permissions());
    let mut staged = staging_file(target)?;
    staged.write_all(contents)?;
    commit(staged, target, permissions)
}
