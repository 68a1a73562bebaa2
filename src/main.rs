mod cli;
mod commands;
mod libs;
mod logger;
mod schemas;

use clap::Parser;
use colored::Colorize;
use cli::cmd_enums::{Cli, SyncMode};
use commands::{deploy, init};
use libs::paths::SyncEnvironment;
use libs::studio_locator::{FixedLocator, RegistryLocator, StudioLocator};
use libs::utilities::path_helpers::expand_tilde;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.debug);

    let env = match SyncEnvironment::resolve(cli.local_app_data.as_deref(), cli.plugin.as_deref()) {
        Ok(env) => env,
        Err(e) => {
            log_error!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let success = match cli.mode() {
        SyncMode::Deploy { source, target } => deploy::run(&env, &source, &target),
        SyncMode::Init => {
            let locator: Box<dyn StudioLocator> = match cli.studio_dir.as_deref() {
                Some(dir) => Box::new(FixedLocator(Some(expand_tilde(dir)))),
                None => Box::new(RegistryLocator::default()),
            };
            init::run(&env, locator.as_ref()).success()
        }
    };

    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
