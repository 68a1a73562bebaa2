use clap::Parser;

/// Defines the command-line interface (CLI) for 'studio-sync'.
/// `#[derive(Parser)]` automatically generates argument parsing code via `clap`.
///
/// Without positional arguments the full init workflow runs: the bundled plugin is
/// deployed and `FFlagEnableLoadModule` is enabled. With `SOURCE TARGET` only the
/// plugin copy is performed.
#[derive(Parser, Debug)]
#[command(name = "studio-sync", version)]
#[command(about = "Deploy the jest-lua companion plugin to Roblox Studio and enable the FFlags it needs")]
pub struct Cli {
    /// Enables detailed debug output for troubleshooting.
    #[arg(short, long)]
    pub(crate) debug: bool,

    /// Base directory holding `Roblox/Plugins` (defaults to the platform's local data directory).
    #[arg(long, env = "LOCALAPPDATA", value_name = "DIR")]
    pub(crate) local_app_data: Option<String>,

    /// Roblox Studio installation root. Skips registry discovery when set.
    #[arg(long, env = "STUDIO_SYNC_STUDIO_DIR", value_name = "DIR")]
    pub(crate) studio_dir: Option<String>,

    /// Plugin file deployed by the init workflow (defaults to `plugin/` next to the executable).
    #[arg(long, env = "STUDIO_SYNC_PLUGIN", value_name = "PATH")]
    pub(crate) plugin: Option<String>,

    /// Deploy-only mode: plugin file to copy.
    #[arg(requires = "target")]
    pub(crate) source: Option<String>,

    /// Deploy-only mode: file name inside the Roblox plugin directory.
    pub(crate) target: Option<String>,
}

/// What a parsed command line asks `studio-sync` to do.
#[derive(Debug, PartialEq, Eq)]
pub enum SyncMode {
    /// Deploy the bundled plugin and enable the load-module FFlag.
    Init,
    /// Copy `source` to `<plugins dir>/<target>` and nothing else.
    Deploy { source: String, target: String },
}

impl Cli {
    pub fn mode(&self) -> SyncMode {
        match (&self.source, &self.target) {
            (Some(source), Some(target)) => SyncMode::Deploy {
                source: source.clone(),
                target: target.clone(),
            },
            _ => SyncMode::Init,
        }
    }
}
