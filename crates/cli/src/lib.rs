//! Rust Deck CLI Library
//!
//! This crate provides the terminal interface for rust-deck, a launcher that
//! runs named shell commands and collects their output into tabbed logs.
//!
//! # Key Features
//!
//! - **Command Selector**: Scrollable list of configured commands, run with Enter
//! - **Argument Prompts**: Commands marked `prompt` ask for one argument before running
//! - **Free-form Input**: Type any command line and run it, with completion cycling
//! - **Tabbed Output**: Each tab keeps its own log and scroll position
//! - **Fuzzy Filter**: Narrow the active log down to a single line
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`launcher`]: The three-pane interface and its event loop
//! - [`fuzzy_filter`]: The modal picker used to filter output
//!
//! # Examples
//!
//! ```bash
//! # Start the launcher with the default config (~/.rust-deck/config.yml)
//! rdk
//!
//! # Use another config and log to a file
//! RUST_LOG=debug rdk -c ./deck.yml --log-file /tmp/rdk.log
//!
//! # Validate a config without starting the interface
//! rdk --check -c ./deck.yml
//! ```

pub mod cli_args;
pub mod fuzzy_filter;
pub mod launcher;
