//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the
//! `clap` crate.

use clap::Parser;

/// Command-line arguments for the rust-deck launcher.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use rust_deck_cli::cli_args::Args;
///
/// let args = Args::parse_from(["rdk", "--check"]);
/// assert!(args.check);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the launcher config YAML.
    ///
    /// If not provided, defaults to `~/.rust-deck/config.yml`.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Write log output to this file instead of stderr.
    ///
    /// The interface owns the terminal, so logging to stderr garbles the screen.
    /// Use together with `RUST_LOG`.
    #[arg(long)]
    pub log_file: Option<String>,

    /// Load and validate the config, print a summary and exit without starting the interface.
    #[arg(long, action)]
    pub check: bool,
}
