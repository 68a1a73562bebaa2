// Deploy-only mode: `studio-sync <SOURCE> <TARGET>`.
// Copies one file into the Roblox plugin directory, overwriting a file of the same name.

use crate::libs::paths::SyncEnvironment;
use crate::libs::plugin_deployer::deploy;
use crate::libs::utilities::path_helpers::expand_tilde;
use crate::{log_error, log_info};
use colored::Colorize;

/// Copies `source` to `<plugins dir>/<target>`.
///
/// # Returns
/// * `true` if the file was deployed, `false` otherwise (the reason is logged).
pub fn run(env: &SyncEnvironment, source: &str, target: &str) -> bool {
    match deploy(&expand_tilde(source), target, &env.plugins_dir()) {
        Ok(deployed) => {
            log_info!(
                "[Plugin] Copied {}",
                deployed.display().to_string().green()
            );
            true
        }
        Err(e) => {
            log_error!("[Plugin] {}", e);
            false
        }
    }
}
