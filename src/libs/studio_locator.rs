// Discovery of the Roblox Studio installation root.
//
// Studio records its `content` folder in the Windows registry. The installation
// root is the parent of that folder. Discovery sits behind the `StudioLocator`
// trait so non-Windows hosts and tests can supply a fixed root instead of
// spawning `reg.exe`.

use crate::libs::utilities::registry_output::strip_content_segment;
use crate::{log_debug, log_info, log_warn};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Registry key under which Studio stores its settings.
pub const STUDIO_REGISTRY_KEY: &str = r"HKEY_CURRENT_USER\SOFTWARE\Roblox\RobloxStudio";
/// Value holding the absolute path of Studio's `content` folder.
pub const CONTENT_FOLDER_VALUE: &str = "ContentFolder";
/// Upper bound for the registry query process.
pub const REG_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Finds the directory that holds Studio's `content` and `ClientSettings` folders.
pub trait StudioLocator {
    /// Returns the installation root, or `None` if it cannot be discovered.
    /// Implementations never panic and never surface errors.
    fn resolve_install_root(&self) -> Option<PathBuf>;
}

/// Locator backed by a `reg query` against the 64-bit registry view.
#[derive(Debug, Clone)]
pub struct RegistryLocator {
    key: String,
    value_name: String,
    #[cfg_attr(not(windows), allow(dead_code))]
    timeout: Duration,
}

impl Default for RegistryLocator {
    fn default() -> Self {
        Self {
            key: STUDIO_REGISTRY_KEY.to_string(),
            value_name: CONTENT_FOLDER_VALUE.to_string(),
            timeout: REG_QUERY_TIMEOUT,
        }
    }
}

impl RegistryLocator {
    /// Reads the raw value data from the registry.
    #[cfg(windows)]
    fn query(&self) -> Option<String> {
        use crate::libs::utilities::process::capture_stdout;
        use crate::libs::utilities::registry_output::parse_registry_value;
        use std::os::windows::process::CommandExt;
        use std::process::Command;

        // Switch the console code page to UTF-8 first so non-ASCII profile paths survive.
        let mut command = Command::new("cmd");
        command.arg("/C").raw_arg(format!(
            "chcp 65001 >nul && reg query \"{}\" /v \"{}\" /reg:64",
            self.key, self.value_name
        ));
        log_debug!("[Studio] Querying registry: {} /v {}", self.key, self.value_name);

        let output = capture_stdout(command, self.timeout)?;
        let value = parse_registry_value(&output, &self.value_name);
        if value.is_none() {
            log_debug!("[Studio] No '{}' line in registry output:\n{}", self.value_name, output);
        }
        value
    }

    #[cfg(not(windows))]
    fn query(&self) -> Option<String> {
        log_debug!(
            "[Studio] Registry discovery of '{}' is only supported on Windows.",
            self.value_name
        );
        None
    }
}

impl StudioLocator for RegistryLocator {
    fn resolve_install_root(&self) -> Option<PathBuf> {
        let Some(content_folder) = self.query() else {
            log_warn!(
                "[Studio] Could not read '{}' from {}.",
                self.value_name.yellow(),
                self.key.yellow()
            );
            return None;
        };
        install_root_from_content_folder(&content_folder)
    }
}

/// Locator that returns a preconfigured root, e.g. from `--studio-dir`.
#[derive(Debug, Clone, Default)]
pub struct FixedLocator(pub Option<PathBuf>);

impl StudioLocator for FixedLocator {
    fn resolve_install_root(&self) -> Option<PathBuf> {
        self.0.clone()
    }
}

/// Turns the registry-recorded content folder into the installation root.
/// A content folder that no longer exists on disk (e.g. a stale Studio version) yields `None`.
pub fn install_root_from_content_folder(content_folder: &str) -> Option<PathBuf> {
    if !Path::new(content_folder).exists() {
        log_warn!(
            "[Studio] Registered content folder does not exist: {}",
            content_folder.yellow()
        );
        return None;
    }

    let root = PathBuf::from(strip_content_segment(content_folder));
    log_info!(
        "[Studio] Found Roblox Studio at {}",
        root.display().to_string().cyan()
    );
    Some(root)
}
