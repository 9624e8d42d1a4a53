//! Rust Deck Core Library
//!
//! This crate provides the model behind rust-deck, a terminal launcher that
//! shows a list of named commands, runs the chosen one as a subprocess and
//! collects its output into tabbed, scrollable logs.
//!
//! # Key Features
//!
//! - **Launcher Configuration**: Parse and validate the YAML command table and pane sizes
//! - **Command Resolution**: Turn a command, a prompted argument or a typed line into an invocation
//! - **Execution**: Run an invocation with stdout and stderr captured into one buffer
//! - **Tabs and Output Logs**: Append-only logs with per-tab display and scroll state
//! - **Focus and Completion**: The focus state machine and completion cycling
//!
//! # Examples
//!
//! Loading the launcher configuration from a file:
//!
//! ```no_run
//! use rust_deck_core::config::get_config_path;
//! use rust_deck_core::file_handling::get_launcher_config;
//!
//! let config = get_launcher_config(&get_config_path(None))?;
//! for command in &config.commands {
//!     println!("Command: {}", command);
//! }
//! # Ok::<(), rust_deck_core::error::Error>(())
//! ```

pub mod command_definitions;
pub mod completion;
pub mod config;
pub mod error;
pub mod execution;
pub mod file_handling;
pub mod focus;
pub mod output_log;
pub mod tabs;
