// This file contains the logic for the default `studio-sync` run.
// It deploys the bundled companion plugin and enables `FFlagEnableLoadModule`.
// The two steps are independent: a failure in one does not skip or roll back the other.

use crate::libs::paths::{PLUGIN_FILE_NAME, SyncEnvironment};
use crate::libs::plugin_deployer::deploy;
use crate::libs::settings_patcher::{LOAD_MODULE_FLAG, set_flag};
use crate::libs::studio_locator::StudioLocator;
use crate::schemas::report::SyncReport;
use crate::{log_debug, log_error, log_info};
use colored::Colorize;

/// Main entry point for the init workflow.
///
/// # Arguments
/// * `env`: Resolved per-user paths.
/// * `locator`: Finds the Studio installation whose settings get patched.
///
/// # Returns
/// * `SyncReport` with one flag per step. The report has already been printed.
pub fn run(env: &SyncEnvironment, locator: &dyn StudioLocator) -> SyncReport {
    log_info!("[Init] Syncing Roblox Studio development environment...");

    let plugin_deployed = match deploy(env.bundled_plugin(), PLUGIN_FILE_NAME, &env.plugins_dir()) {
        Ok(target) => {
            log_info!(
                "[Plugin] Deployed to {}",
                target.display().to_string().green()
            );
            true
        }
        Err(e) => {
            log_error!("[Plugin] Deployment failed: {}", e);
            false
        }
    };

    let flag_enabled = match set_flag(locator, LOAD_MODULE_FLAG, true) {
        Ok(settings_path) => {
            log_info!(
                "[FFlag] {} enabled in {}",
                LOAD_MODULE_FLAG.bold(),
                settings_path.display().to_string().green()
            );
            true
        }
        Err(e) => {
            log_error!("[FFlag] Failed to enable {}: {}", LOAD_MODULE_FLAG, e);
            false
        }
    };

    let report = SyncReport {
        plugin_deployed,
        flag_enabled,
    };
    if let Ok(json) = serde_json::to_string_pretty(&report) {
        log_debug!("[Init] Report:\n{}", json);
    }
    report.print();
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::studio_locator::FixedLocator;
    use std::fs;
    use std::path::Path;

    struct Sandbox {
        _tmp: tempfile::TempDir,
        env: SyncEnvironment,
        studio_root: std::path::PathBuf,
    }

    fn sandbox() -> Sandbox {
        let tmp = tempfile::tempdir().unwrap();
        let bundled = tmp.path().join("bundle").join(PLUGIN_FILE_NAME);
        fs::create_dir_all(bundled.parent().unwrap()).unwrap();
        fs::write(&bundled, "-- companion plugin\n").unwrap();

        let studio_root = tmp.path().join("Versions").join("version-1");
        fs::create_dir_all(studio_root.join("content")).unwrap();

        let env = SyncEnvironment::new(tmp.path().join("Local"), bundled);
        Sandbox { _tmp: tmp, env, studio_root }
    }

    fn snapshot(paths: &[&Path]) -> Vec<Vec<u8>> {
        paths.iter().map(|p| fs::read(p).unwrap()).collect()
    }

    #[test]
    fn full_run_deploys_and_patches() {
        let sb = sandbox();
        let settings = sb.studio_root.join("ClientSettings").join("ClientAppSettings.json");
        fs::create_dir_all(settings.parent().unwrap()).unwrap();
        fs::write(&settings, r#"{"FIntExisting": 7}"#).unwrap();

        let report = run(&sb.env, &FixedLocator(Some(sb.studio_root.clone())));

        assert!(report.success());
        assert_eq!(
            fs::read(sb.env.plugins_dir().join(PLUGIN_FILE_NAME)).unwrap(),
            b"-- companion plugin\n"
        );
        assert_eq!(
            fs::read_to_string(&settings).unwrap(),
            "{\n  \"FIntExisting\": 7,\n  \"FFlagEnableLoadModule\": true\n}"
        );
    }

    #[test]
    fn running_twice_is_idempotent() {
        let sb = sandbox();
        let locator = FixedLocator(Some(sb.studio_root.clone()));
        let plugin = sb.env.plugins_dir().join(PLUGIN_FILE_NAME);
        let settings = sb.studio_root.join("ClientSettings").join("ClientAppSettings.json");

        assert!(run(&sb.env, &locator).success());
        let first = snapshot(&[&plugin, &settings]);
        assert!(run(&sb.env, &locator).success());

        assert_eq!(snapshot(&[&plugin, &settings]), first);
    }

    #[test]
    fn missing_studio_still_deploys_plugin() {
        let sb = sandbox();

        let report = run(&sb.env, &FixedLocator(None));

        assert_eq!(
            report,
            SyncReport {
                plugin_deployed: true,
                flag_enabled: false
            }
        );
        assert!(!report.success());
        assert!(sb.env.plugins_dir().join(PLUGIN_FILE_NAME).is_file());
    }

    #[test]
    fn missing_bundle_still_patches_settings() {
        let sb = sandbox();
        let env = SyncEnvironment::new(
            sb.studio_root.join("Local"),
            sb.studio_root.join("no-such-plugin.lua"),
        );

        let report = run(&env, &FixedLocator(Some(sb.studio_root.clone())));

        assert!(!report.plugin_deployed);
        assert!(report.flag_enabled);
    }
}
