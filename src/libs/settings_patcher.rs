// Sets boolean FFlags in Roblox Studio's `ClientAppSettings.json`.
//
// The file is a flat JSON object the user may have filled with their own flags.
// Only the requested key is written; every other key keeps its value and position.
// A file that exists but cannot be parsed is an error and is never overwritten.

use crate::libs::paths::client_settings_path;
use crate::libs::studio_locator::StudioLocator;
use crate::libs::utilities::file_operations::write_atomically;
use crate::log_debug;
use crate::schemas::errors::SettingsError;
use colored::Colorize;
use serde_json::{Map, Value};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Flag that allows plugins to `require` ModuleScripts loaded at runtime.
pub const LOAD_MODULE_FLAG: &str = "FFlagEnableLoadModule";

/// Sets `flag_name` in the settings file of the Studio installation found by `locator`.
///
/// # Returns
/// * `Ok(PathBuf)` with the settings file that was written.
/// * `Err(SettingsError::StudioNotFound)` if discovery fails, or the error from `write_flag`.
pub fn set_flag(
    locator: &dyn StudioLocator,
    flag_name: &str,
    flag_value: bool,
) -> Result<PathBuf, SettingsError> {
    let install_root = locator
        .resolve_install_root()
        .ok_or(SettingsError::StudioNotFound)?;
    let settings_path = client_settings_path(&install_root);
    write_flag(&settings_path, flag_name, flag_value)?;
    Ok(settings_path)
}

/// Sets `flag_name` to `flag_value` in the JSON object stored at `settings_path`.
///
/// # Workflow:
/// 1. Load the existing document, or start from `{}` and create the parent directory.
/// 2. Insert the flag, overwriting only that key.
/// 3. Rewrite the whole document with 2-space indentation through an atomic rename.
pub fn write_flag(
    settings_path: &Path,
    flag_name: &str,
    flag_value: bool,
) -> Result<(), SettingsError> {
    let mut document = if settings_path.exists() {
        load_document(settings_path)?
    } else {
        if let Some(parent) = settings_path.parent() {
            fs::create_dir_all(parent).map_err(|e| SettingsError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        log_debug!(
            "[FFlag] {} not found. Starting from an empty document.",
            settings_path.display().to_string().yellow()
        );
        Map::new()
    };

    document.insert(flag_name.to_string(), Value::Bool(flag_value));

    let rendered = serde_json::to_string_pretty(&document).map_err(|e| SettingsError::Write {
        path: settings_path.to_path_buf(),
        source: io::Error::other(e),
    })?;
    write_atomically(settings_path, rendered.as_bytes()).map_err(|e| SettingsError::Write {
        path: settings_path.to_path_buf(),
        source: e,
    })?;

    log_debug!("[FFlag] Wrote {} = {} to {}", flag_name, flag_value, settings_path.display());
    Ok(())
}

fn load_document(settings_path: &Path) -> Result<Map<String, Value>, SettingsError> {
    let contents = fs::read_to_string(settings_path).map_err(|e| SettingsError::Read {
        path: settings_path.to_path_buf(),
        source: e,
    })?;

    match serde_json::from_str::<Value>(&contents) {
        Ok(Value::Object(document)) => Ok(document),
        Ok(_) => Err(SettingsError::NotAnObject {
            path: settings_path.to_path_buf(),
        }),
        Err(e) => Err(SettingsError::Parse {
            path: settings_path.to_path_buf(),
            source: e,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::studio_locator::FixedLocator;

    fn settings_file(root: &Path) -> PathBuf {
        root.join("ClientSettings").join("ClientAppSettings.json")
    }

    #[test]
    fn preserves_existing_keys() {
        let tmp = tempfile::tempdir().unwrap();
        let path = settings_file(tmp.path());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"a": 1}"#).unwrap();

        write_flag(&path, "F", true).unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, serde_json::json!({"a": 1, "F": true}));
    }

    #[test]
    fn keeps_key_order_and_nested_values() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("ClientAppSettings.json");
        fs::write(
            &path,
            r#"{"zeta": "z", "DFIntTaskSchedulerTargetFps": 144, "nested": {"b": [1, 2]}, "FFlagEnableLoadModule": false}"#,
        )
        .unwrap();

        write_flag(&path, LOAD_MODULE_FLAG, true).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "{\n  \"zeta\": \"z\",\n  \"DFIntTaskSchedulerTargetFps\": 144,\n  \"nested\": {\n    \"b\": [\n      1,\n      2\n    ]\n  },\n  \"FFlagEnableLoadModule\": true\n}"
        );
    }

    #[test]
    fn numbers_are_rewritten_as_written() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("ClientAppSettings.json");
        fs::write(&path, r#"{"big": 123456789012345678901234, "f": 1.50}"#).unwrap();

        write_flag(&path, "F", true).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "{\n  \"big\": 123456789012345678901234,\n  \"f\": 1.50,\n  \"F\": true\n}"
        );
    }

    #[test]
    fn creates_missing_file_and_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let path = settings_file(&tmp.path().join("Versions").join("version-1"));

        write_flag(&path, "F", true).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\n  \"F\": true\n}");
    }

    #[test]
    fn invalid_json_is_left_untouched() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("ClientAppSettings.json");
        let original = b"{\"a\": 1,, // user edit\n";
        fs::write(&path, original).unwrap();

        let err = write_flag(&path, "F", true).unwrap_err();

        assert!(matches!(err, SettingsError::Parse { .. }));
        assert_eq!(fs::read(&path).unwrap(), original);
    }

    #[test]
    fn non_object_document_is_left_untouched() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("ClientAppSettings.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let err = write_flag(&path, "F", true).unwrap_err();

        assert!(matches!(err, SettingsError::NotAnObject { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "[1, 2, 3]");
    }

    #[test]
    fn set_flag_uses_discovered_root() {
        let tmp = tempfile::tempdir().unwrap();
        let locator = FixedLocator(Some(tmp.path().to_path_buf()));

        let path = set_flag(&locator, LOAD_MODULE_FLAG, true).unwrap();

        assert_eq!(path, settings_file(tmp.path()));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "{\n  \"FFlagEnableLoadModule\": true\n}"
        );
    }

    #[test]
    fn set_flag_without_studio_fails() {
        let err = set_flag(&FixedLocator(None), LOAD_MODULE_FLAG, true).unwrap_err();
        assert!(matches!(err, SettingsError::StudioNotFound));
    }
}
