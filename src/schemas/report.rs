use colored::Colorize;
use serde::Serialize;

/// Outcome of one `studio-sync` init run, one flag per operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    /// The bundled plugin was copied into the Roblox plugin directory.
    pub plugin_deployed: bool,
    /// `FFlagEnableLoadModule` is set in `ClientAppSettings.json`.
    pub flag_enabled: bool,
}

impl SyncReport {
    /// `true` only if every operation succeeded.
    pub fn success(&self) -> bool {
        self.plugin_deployed && self.flag_enabled
    }

    /// Prints the combined result to stdout.
    pub fn print(&self) {
        println!("\nSync results:");
        println!("  Plugin deployment: {}", outcome(self.plugin_deployed));
        println!("  FFlag update:      {}", outcome(self.flag_enabled));

        if self.success() {
            println!(
                "\n{}",
                "Done! Roblox Studio is ready for jest-lua-companion.".bright_green()
            );
        } else {
            println!(
                "\n{}",
                "Sync finished with errors. See the messages above.".bright_red()
            );
        }
    }
}

fn outcome(ok: bool) -> colored::ColoredString {
    if ok { "ok".green() } else { "failed".red() }
}
