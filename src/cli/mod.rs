// Command-line definition for `studio-sync`.
pub mod cmd_enums;
