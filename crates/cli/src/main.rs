use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use itertools::Itertools;
use log::debug;
use rust_deck_core::command_definitions::LauncherConfig;
use rust_deck_core::config;
use rust_deck_core::error::{Error, Result};
use rust_deck_core::file_handling;

use rust_deck_cli::cli_args::Args;
use rust_deck_cli::launcher;

/// Sends log output to `log_file` when given, otherwise to stderr.
fn init_logging(log_file: Option<&str>) -> Result<()> {
    let mut builder = env_logger::Builder::from_default_env();

    if let Some(path) = log_file {
        let file = File::create(path)
            .map_err(|e| Error::io_error("log file".to_string(), path.to_string(), e))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn print_summary(config_path: &str, config: &LauncherConfig) {
    println!("Config `{config_path}` is valid.");
    println!("Commands:");
    for (index, command) in config.commands.iter().enumerate() {
        let marker = if command.requires_prompt { " (prompts)" } else { "" };
        println!("\t{index}: {command}: {}{marker}", command.argv.join(" "));
    }
    println!("Tabs: {}", config.tabs.iter().join(", "));
    if !config.completions.is_empty() {
        println!("Completions: {}", config.completions.iter().join(", "));
    }
}

fn execute() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let config_path = config::get_config_path(args.config_path.as_deref());
    debug!("Config path: `{}`", config_path);

    let launcher_config = file_handling::get_launcher_config(&config_path)?;

    if args.check {
        print_summary(&config_path, &launcher_config);
        return Ok(());
    }

    launcher::run(&launcher_config)
}

fn main() -> ExitCode {
    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
