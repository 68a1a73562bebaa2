// Pure parsing helpers for the text printed by `reg query`.
//
// `reg query "<key>" /v "<name>"` prints a header line with the key path followed by
// one line per value, laid out in fixed-width columns separated by four spaces:
//
//     HKEY_CURRENT_USER\SOFTWARE\Roblox\RobloxStudio
//         ContentFolder    REG_SZ    C:\Users\me\AppData\Local\Roblox\Versions\version-1\content
//
// Nothing in here touches the registry or the filesystem, so it can be tested
// against literal sample outputs on any platform.

// Only the Windows registry locator calls into this module outside of tests.
#![cfg_attr(not(windows), allow(dead_code))]

use regex::Regex;
use std::sync::LazyLock;

/// Column separator: a run of four or more whitespace characters.
/// Shorter runs are kept because they can appear inside a value (e.g. `Program Files`).
static COLUMN_GAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s{4,}").expect("column gap pattern is valid")
});

/// Extracts the data of `value_name` from raw `reg query` output.
///
/// Lines are trimmed and split into columns. The first line with at least three
/// columns (name, type, data) whose name matches `value_name` wins, and its last
/// column is returned.
///
/// # Returns
/// * `Some(String)` with the value data, or `None` when no line matches.
pub fn parse_registry_value(output: &str, value_name: &str) -> Option<String> {
    output
        .lines()
        .map(|line| COLUMN_GAP.split(line.trim()).collect::<Vec<_>>())
        .find(|columns| columns.len() >= 3 && columns[0] == value_name)
        .and_then(|columns| columns.last().map(|data| data.to_string()))
}

/// Strips a trailing `content` directory segment from a Studio content folder path.
///
/// Accepts either separator and an optional trailing separator, so both
/// `C:\Studio\content` and `C:/Studio/content/` become the parent directory.
/// Paths that do not end in a `content` segment are returned unchanged.
pub fn strip_content_segment(content_folder: &str) -> &str {
    const SEPARATORS: [char; 2] = ['\\', '/'];

    let trimmed = content_folder
        .strip_suffix(SEPARATORS)
        .unwrap_or(content_folder);

    match trimmed.strip_suffix("content") {
        Some(parent) if parent.ends_with(SEPARATORS) => &parent[..parent.len() - 1],
        _ => content_folder,
    }
}
