// Core components of `studio-sync`. Commands compose these; none of them print
// the final report or decide the exit code.

// Per-user paths and the bundled plugin location.
pub mod paths;
// Copies plugin files into the Roblox plugin directory.
pub mod plugin_deployer;
// Reads and rewrites `ClientAppSettings.json`.
pub mod settings_patcher;
// Discovers the Roblox Studio installation root.
pub mod studio_locator;
pub mod utilities;
