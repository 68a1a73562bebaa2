// Error types for the two sync operations.
// Each variant names the path involved so the message logged at the operation
// boundary is enough to act on without a debug run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why copying a plugin into the Roblox plugin directory failed.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error("source file does not exist: {}", .0.display())]
    SourceMissing(PathBuf),

    #[error("failed to create plugin directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to copy plugin to {}: {source}", path.display())]
    Copy { path: PathBuf, source: io::Error },
}

/// Why setting a flag in `ClientAppSettings.json` failed.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not locate the Roblox Studio installation")]
    StudioNotFound,

    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// The existing file is left untouched so unrelated user settings survive.
    #[error("{} is not valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{} does not contain a JSON object", path.display())]
    NotAnObject { path: PathBuf },

    #[error("failed to create settings directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}
