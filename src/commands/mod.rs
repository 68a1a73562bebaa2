// Register application commands.
// Each module corresponds to one `studio-sync` mode of operation.

// Copies a single plugin file into the Roblox plugin directory.
pub mod deploy;
// Deploys the bundled plugin and enables the load-module FFlag.
pub mod init;
