// Copies a plugin file into the Roblox Studio plugin directory.
// Any existing plugin with the same name is replaced (last writer wins, no backup).

use crate::libs::utilities::file_operations::copy_atomically;
use crate::libs::utilities::path_helpers::absolutize;
use crate::log_debug;
use crate::schemas::errors::DeployError;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Deploys `source` as `<plugins_dir>/<dest_file_name>`.
///
/// # Arguments
/// * `source`: Plugin file to copy. Relative paths resolve against the current directory.
/// * `dest_file_name`: File name the plugin gets inside `plugins_dir`.
/// * `plugins_dir`: Destination directory, created recursively when missing.
///
/// # Returns
/// * `Ok(PathBuf)` with the deployed file's path.
/// * `Err(DeployError)` naming the step that failed. Nothing is created when the source is missing.
pub fn deploy(
    source: &Path,
    dest_file_name: &str,
    plugins_dir: &Path,
) -> Result<PathBuf, DeployError> {
    let source = absolutize(source);
    if !source.is_file() {
        return Err(DeployError::SourceMissing(source));
    }

    if !plugins_dir.is_dir() {
        log_debug!(
            "[Plugin] Creating plugin directory {}",
            plugins_dir.display().to_string().yellow()
        );
        fs::create_dir_all(plugins_dir).map_err(|e| DeployError::CreateDir {
            path: plugins_dir.to_path_buf(),
            source: e,
        })?;
    }

    let target = plugins_dir.join(dest_file_name);
    let bytes = copy_atomically(&source, &target).map_err(|e| DeployError::Copy {
        path: target.clone(),
        source: e,
    })?;
    log_debug!(
        "[Plugin] Copied {} bytes from {} to {}",
        bytes,
        source.display(),
        target.display()
    );
    Ok(target)
}
