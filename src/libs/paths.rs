// Resolves every filesystem location `studio-sync` touches.
// The environment-derived base directories are captured once in `SyncEnvironment`
// and passed down, so the operations themselves never read ambient state.

use crate::libs::utilities::path_helpers::expand_tilde;
use crate::log_debug;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// File name of the companion plugin, both in the bundle and once deployed.
pub const PLUGIN_FILE_NAME: &str = "jest-lua-companion-plugin.server.lua";

/// Directory next to the executable that ships the bundled plugin.
const BUNDLED_PLUGIN_DIR: &str = "plugin";

/// Per-user locations used by a sync run.
#[derive(Debug, Clone)]
pub struct SyncEnvironment {
    /// The user's LocalAppData directory (`%LOCALAPPDATA%` on Windows).
    local_app_data: PathBuf,
    /// The plugin file deployed by the init workflow.
    bundled_plugin: PathBuf,
}

impl SyncEnvironment {
    pub fn new(local_app_data: impl Into<PathBuf>, bundled_plugin: impl Into<PathBuf>) -> Self {
        Self {
            local_app_data: local_app_data.into(),
            bundled_plugin: bundled_plugin.into(),
        }
    }

    /// Builds the environment from CLI/env overrides, falling back to platform defaults.
    ///
    /// # Arguments
    /// * `local_app_data`: Override for the LocalAppData directory. Defaults to `dirs::data_local_dir()`.
    /// * `plugin`: Override for the bundled plugin path. Defaults to `<exe dir>/plugin/<PLUGIN_FILE_NAME>`.
    pub fn resolve(local_app_data: Option<&str>, plugin: Option<&str>) -> Result<Self> {
        let local_app_data = match local_app_data {
            Some(dir) => expand_tilde(dir),
            None => dirs::data_local_dir().context("could not determine the local app data directory")?,
        };
        let bundled_plugin = match plugin {
            Some(path) => expand_tilde(path),
            None => default_bundled_plugin()?,
        };

        let env = Self::new(local_app_data, bundled_plugin);
        log_debug!(
            "[Paths] Plugins directory: {}",
            env.plugins_dir().display().to_string().cyan()
        );
        log_debug!(
            "[Paths] Bundled plugin: {}",
            env.bundled_plugin.display().to_string().cyan()
        );
        Ok(env)
    }

    /// `<LocalAppData>/Roblox/Plugins`, where Studio loads local plugins from.
    pub fn plugins_dir(&self) -> PathBuf {
        self.local_app_data.join("Roblox").join("Plugins")
    }

    pub fn bundled_plugin(&self) -> &Path {
        &self.bundled_plugin
    }
}

fn default_bundled_plugin() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("could not locate the running executable")?;
    let exe_dir = exe.parent().context("executable has no parent directory")?;
    Ok(exe_dir.join(BUNDLED_PLUGIN_DIR).join(PLUGIN_FILE_NAME))
}

/// `<install root>/ClientSettings/ClientAppSettings.json`, Studio's FFlag override file.
pub fn client_settings_path(install_root: &Path) -> PathBuf {
    install_root
        .join("ClientSettings")
        .join("ClientAppSettings.json")
}
