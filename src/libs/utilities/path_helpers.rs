use std::path::{Path, PathBuf};

/// Expands a leading `~` in a user-supplied path to the home directory.
///
/// Only `~` on its own or followed by a separator is expanded; `~user` forms and
/// paths without a tilde are returned unchanged. If the home directory cannot be
/// determined the input is returned as-is.
pub fn expand_tilde(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with(['/', '\\']) => rest,
        _ => return PathBuf::from(path),
    };

    match dirs::home_dir() {
        Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
        None => PathBuf::from(path),
    }
}

/// Returns `path` as an absolute path, resolving relative paths against the current directory.
/// Falls back to the path as given when the current directory is unavailable.
pub fn absolutize(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
