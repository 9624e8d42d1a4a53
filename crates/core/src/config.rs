//! Configuration path utilities for rust-deck.
//!
//! This module provides functions for resolving the launcher config path
//! and expanding shell variables like `~` in paths.

/// Default path for the launcher configuration file
const DEFAULT_CONFIG_PATH: &str = "~/.rust-deck/config.yml";

/// Resolves the configuration file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// configuration path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use rust_deck_core::config::get_config_path;
///
/// // Use default path
/// let default_path = get_config_path(None);
///
/// // Use custom path
/// let custom_path = get_config_path(Some("/path/to/config.yml"));
/// ```
pub fn get_config_path(config_path_arg: Option<&str>) -> String {
    let config_path = config_path_arg.unwrap_or(DEFAULT_CONFIG_PATH);

    shellexpand::tilde(config_path).to_string()
}

/// Expands shell variables in a working directory path.
///
/// Returns None if no working directory is provided.
///
/// # Examples
///
/// ```
/// use rust_deck_core::config::expand_working_directory;
///
/// let expanded = expand_working_directory(Some("~/projects"));
/// assert!(expanded.is_some());
///
/// assert!(expand_working_directory(None).is_none());
/// ```
pub fn expand_working_directory(working_directory: Option<&str>) -> Option<String> {
    working_directory.map(|directory| shellexpand::tilde(directory).to_string())
}
